//! Trait del proveedor de inferencia.

use async_trait::async_trait;
use conncheck_core::DiagnosticError;
use serde::{Deserialize, Serialize};

/// Cliente opaco producido por `connect`, consumido por las sondas
/// posteriores de la misma corrida.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceClient {
    pub model: String,
}

/// Resumen de una respuesta en streaming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamReport {
    pub full_text: String,
    pub chunk_count: usize,
}

/// Colaborador externo para las sondas de capacidad del modelo. Los fallos
/// vuelven normalizados a `DiagnosticError::Probe` (o `Initialization` para
/// la conexión), nunca con la forma de error del SDK.
#[async_trait]
pub trait InferenceProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Instancia el cliente y hace un ping barato para validar la clave.
    async fn connect(&self, api_key: &str) -> Result<InferenceClient, DiagnosticError>;

    async fn generate_text(&self, client: &InferenceClient, prompt: &str)
                           -> Result<String, DiagnosticError>;

    async fn stream_text(&self, client: &InferenceClient, prompt: &str)
                         -> Result<StreamReport, DiagnosticError>;

    async fn count_tokens(&self, client: &InferenceClient, prompt: &str)
                          -> Result<u64, DiagnosticError>;

    /// Sonda multimodal: imagen inline en base64 más prompt de texto.
    async fn vision(&self, client: &InferenceClient, image_base64: &str, prompt: &str)
                    -> Result<String, DiagnosticError>;
}
