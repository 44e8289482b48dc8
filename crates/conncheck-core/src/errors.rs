//! Errores específicos del núcleo.
//!
//! Los fallos de cada proveedor se normalizan a estas variantes en la
//! frontera del provider; el orquestador nunca ve formas de error propias
//! de un SDK concreto.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Taxonomía de errores de una verificación. El mensaje ya viene renderizado
/// para mostrarse como `detail` del paso fallido.
#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum DiagnosticError {
    /// Configuración malformada o incompleta (termina la corrida en el paso 1).
    #[error("{0}")]
    Config(String),
    /// El proveedor no pudo materializar un handle usable (paso 2).
    #[error("{0}")]
    Initialization(String),
    /// El submódulo esperado no existe o no es alcanzable (paso 3).
    #[error("{0}")]
    SubCapability(String),
    /// Falla de una sonda de capacidad (suite de inferencia).
    #[error("{0}")]
    Probe(String),
    #[error("interno: {0}")]
    Internal(String),
}
