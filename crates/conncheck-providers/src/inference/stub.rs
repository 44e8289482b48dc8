//! Stub configurable del proveedor de inferencia.

use async_trait::async_trait;
use conncheck_core::DiagnosticError;

use super::provider::{InferenceClient, InferenceProvider, StreamReport};

pub struct StubInferenceProvider {
    model: String,
    reply: String,
    chunk_count: usize,
    fail_connect: Option<String>,
    fail_stream: Option<String>,
}

impl StubInferenceProvider {
    pub fn new() -> Self {
        Self { model: "stub-flash".to_string(),
               reply: "Funciona".to_string(),
               chunk_count: 5,
               fail_connect: None,
               fail_stream: None }
    }

    pub fn with_reply(mut self, reply: &str) -> Self {
        self.reply = reply.to_string();
        self
    }

    /// Guiona un rechazo de la clave en `connect`.
    pub fn with_connect_error(mut self, message: &str) -> Self {
        self.fail_connect = Some(message.to_string());
        self
    }

    /// Guiona un corte del stream a mitad de respuesta.
    pub fn with_stream_error(mut self, message: &str) -> Self {
        self.fail_stream = Some(message.to_string());
        self
    }
}

impl Default for StubInferenceProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InferenceProvider for StubInferenceProvider {
    fn name(&self) -> &str {
        "stub-inference"
    }

    async fn connect(&self, api_key: &str) -> Result<InferenceClient, DiagnosticError> {
        if api_key.is_empty() {
            return Err(DiagnosticError::Initialization("API Key is required".to_string()));
        }
        if let Some(msg) = &self.fail_connect {
            return Err(DiagnosticError::Initialization(msg.clone()));
        }
        Ok(InferenceClient { model: self.model.clone() })
    }

    async fn generate_text(&self, _client: &InferenceClient, _prompt: &str)
                           -> Result<String, DiagnosticError> {
        Ok(self.reply.clone())
    }

    async fn stream_text(&self, _client: &InferenceClient, _prompt: &str)
                         -> Result<StreamReport, DiagnosticError> {
        if let Some(msg) = &self.fail_stream {
            return Err(DiagnosticError::Probe(msg.clone()));
        }
        Ok(StreamReport { full_text: "1, 2, 3, 4, 5".to_string(),
                          chunk_count: self.chunk_count })
    }

    async fn count_tokens(&self, _client: &InferenceClient, prompt: &str)
                          -> Result<u64, DiagnosticError> {
        // Aproximación estable: una "palabra" por token.
        Ok(prompt.split_whitespace().count() as u64)
    }

    async fn vision(&self, _client: &InferenceClient, _image_base64: &str, _prompt: &str)
                    -> Result<String, DiagnosticError> {
        Ok("Un pixel rojo.".to_string())
    }
}
