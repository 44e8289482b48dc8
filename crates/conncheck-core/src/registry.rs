//! Registro estático y ordenado de verificaciones.
//!
//! La definición es inmutable una vez construida: el runner ejecuta las
//! verificaciones exactamente en este orden. Reordenar el registro cambia la
//! cadena de dependencias en silencio, porque la verificación N+1 puede
//! asumir el contexto producido por la N.

use thiserror::Error;

use crate::check::{CheckDefinition, RunContext};
use crate::hashing::registry_fingerprint;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate check id: {0}")]
    DuplicateId(String),
    #[error("registry must contain at least one check")]
    Empty,
}

/// Lista ordenada e inmutable de verificaciones, con fingerprint estable.
pub struct CheckRegistry<C: RunContext> {
    checks: Vec<Box<dyn CheckDefinition<C>>>,
    registry_hash: String,
}

impl<C: RunContext> std::fmt::Debug for CheckRegistry<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckRegistry")
            .field("checks", &self.checks.iter().map(|c| c.id()).collect::<Vec<_>>())
            .field("registry_hash", &self.registry_hash)
            .finish()
    }
}

impl<C: RunContext> CheckRegistry<C> {
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    pub fn get(&self, index: usize) -> &dyn CheckDefinition<C> {
        self.checks[index].as_ref()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn CheckDefinition<C>> {
        self.checks.iter().map(|c| c.as_ref())
    }

    /// Fingerprint de la lista ordenada `(id, title)` más la versión del
    /// harness. Queda fijado en el evento `RunStarted`.
    pub fn registry_hash(&self) -> &str {
        &self.registry_hash
    }
}

/// Construye un registro validando unicidad de ids y calculando su hash.
pub fn build_registry<C: RunContext>(checks: Vec<Box<dyn CheckDefinition<C>>>)
                                     -> Result<CheckRegistry<C>, RegistryError> {
    if checks.is_empty() {
        return Err(RegistryError::Empty);
    }
    for (i, c) in checks.iter().enumerate() {
        if checks[..i].iter().any(|prev| prev.id() == c.id()) {
            return Err(RegistryError::DuplicateId(c.id().to_string()));
        }
    }
    let registry_hash = registry_fingerprint(crate::constants::HARNESS_VERSION,
                                             checks.iter().map(|c| (c.id(), c.title())));
    Ok(CheckRegistry { checks, registry_hash })
}
