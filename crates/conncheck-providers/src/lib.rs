//! conncheck-providers: frontera del Verification Provider
//!
//! Este crate provee:
//! - Validación y proyección segura de la configuración del backend.
//! - El trait `BackendProvider` (sesión/handle) con su stub configurable.
//! - Las tres verificaciones de referencia: configuración, inicialización
//!   del SDK y módulo de autenticación.
//! - La suite suplementaria de sondas de inferencia (conexión, texto,
//!   streaming, conteo de tokens y visión).
//!
//! Nota: el núcleo sólo conoce `CheckDefinition` y `DiagnosticError`; toda
//! forma de error propia de un SDK se normaliza aquí antes de cruzar.

pub mod backend;
pub mod checks;
pub mod inference;

pub use backend::{validate_config, AuthReport, BackendProvider, ConfigDisplay, InitOutcome,
                  ParsedConfig, SessionHandle, StubBackendProvider};
pub use checks::{backend_registry, AuthModuleCheck, BackendContext, ConfigCheck, InitCheck};
pub use inference::{inference_registry, InferenceClient, InferenceContext, InferenceProvider,
                    StreamReport, StubInferenceProvider};
