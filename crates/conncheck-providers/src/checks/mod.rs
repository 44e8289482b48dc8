//! Verificaciones de referencia del backend.
//!
//! Cadena: configuración -> inicialización -> módulo de autenticación.
//! Cada verificación puebla su parte de `BackendContext`; la siguiente asume
//! que esa parte existe (acoplamiento de orden documentado en el registro).

pub mod auth;
pub mod config;
pub mod init;

use std::sync::Arc;

use conncheck_core::{build_registry, CheckDefinition, CheckRegistry, RegistryError, RunContext};

use crate::backend::{BackendProvider, ParsedConfig, SessionHandle};

pub use auth::AuthModuleCheck;
pub use config::ConfigCheck;
pub use init::InitCheck;

/// Contexto encadenado de la suite de backend. Un reset lo reconstruye desde
/// el texto crudo, descartando configuración y handle anteriores.
pub struct BackendContext {
    pub raw: String,
    pub config: Option<ParsedConfig>,
    pub handle: Option<SessionHandle>,
}

impl RunContext for BackendContext {
    fn begin(input: &str) -> Self {
        Self { raw: input.to_string(),
               config: None,
               handle: None }
    }
}

/// Registro de la suite de backend en su orden canónico.
pub fn backend_registry(provider: Arc<dyn BackendProvider>)
                        -> Result<CheckRegistry<BackendContext>, RegistryError> {
    let checks: Vec<Box<dyn CheckDefinition<BackendContext>>> =
        vec![Box::new(ConfigCheck::new()),
             Box::new(InitCheck::new(provider.clone())),
             Box::new(AuthModuleCheck::new(provider))];
    build_registry(checks)
}
