//! Suite suplementaria de sondas de inferencia.
//!
//! Cadena: conexión -> generación de texto -> streaming -> conteo de tokens
//! -> visión. La conexión produce el cliente; las sondas posteriores lo
//! reutilizan a través del contexto.

pub mod checks;
pub mod provider;
pub mod stub;

pub use checks::{inference_registry, InferenceContext};
pub use provider::{InferenceClient, InferenceProvider, StreamReport};
pub use stub::StubInferenceProvider;
