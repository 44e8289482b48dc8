//! Sondas de la suite de inferencia como verificaciones encadenadas.

use std::sync::Arc;

use async_trait::async_trait;
use conncheck_core::{build_registry, CheckDefinition, CheckRegistry, CheckRunResult,
                     DiagnosticError, RegistryError, RunContext};

use super::provider::{InferenceClient, InferenceProvider};

/// Pixel rojo 1x1 en base64 para la sonda de visión.
const SAMPLE_IMAGE_BASE64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8BQDwAEhQGAhKmMIQAAAABJRU5ErkJggg==";

/// Contexto encadenado de la suite: la entrada es la clave de API y el
/// cliente aparece tras la conexión.
pub struct InferenceContext {
    pub api_key: String,
    pub client: Option<InferenceClient>,
}

impl RunContext for InferenceContext {
    fn begin(input: &str) -> Self {
        Self { api_key: input.trim().to_string(),
               client: None }
    }
}

/// Recupera el cliente del contexto o falla con `Probe`. Inalcanzable bajo el
/// invariante stop-on-failure; defendido igual.
fn client_of(ctx: &InferenceContext) -> Result<&InferenceClient, DiagnosticError> {
    ctx.client
       .as_ref()
       .ok_or_else(|| DiagnosticError::Probe("cliente no disponible en el contexto".to_string()))
}

pub struct ConnectCheck {
    provider: Arc<dyn InferenceProvider>,
}

#[async_trait]
impl CheckDefinition<InferenceContext> for ConnectCheck {
    fn id(&self) -> &str {
        "connect"
    }
    fn title(&self) -> &str {
        "Conexión y Autenticación"
    }
    fn description(&self) -> &str {
        "Instanciando el cliente y validando la clave de API."
    }
    async fn run(&self, ctx: &mut InferenceContext) -> CheckRunResult {
        match self.provider.connect(&ctx.api_key).await {
            Ok(client) => {
                let detail = format!("Conexión exitosa. Modelo: {}", client.model);
                ctx.client = Some(client);
                CheckRunResult::Passed { detail }
            }
            Err(error) => CheckRunResult::Failed { error },
        }
    }
}

pub struct GenerateTextCheck {
    provider: Arc<dyn InferenceProvider>,
}

#[async_trait]
impl CheckDefinition<InferenceContext> for GenerateTextCheck {
    fn id(&self) -> &str {
        "generate_text"
    }
    fn title(&self) -> &str {
        "Generación de Texto"
    }
    fn description(&self) -> &str {
        "Probando la generación estándar de texto."
    }
    async fn run(&self, ctx: &mut InferenceContext) -> CheckRunResult {
        let client = match client_of(ctx) {
            Ok(c) => c,
            Err(error) => return CheckRunResult::Failed { error },
        };
        let prompt = "Responde con una sola palabra: 'Funciona'";
        match self.provider.generate_text(client, prompt).await {
            Ok(output) => CheckRunResult::Passed { detail: format!("Generación de texto correcta.\nOutput: {output}") },
            Err(error) => CheckRunResult::Failed { error },
        }
    }
}

pub struct StreamCheck {
    provider: Arc<dyn InferenceProvider>,
}

#[async_trait]
impl CheckDefinition<InferenceContext> for StreamCheck {
    fn id(&self) -> &str {
        "stream_text"
    }
    fn title(&self) -> &str {
        "Streaming"
    }
    fn description(&self) -> &str {
        "Probando la respuesta fragmentada."
    }
    async fn run(&self, ctx: &mut InferenceContext) -> CheckRunResult {
        let client = match client_of(ctx) {
            Ok(c) => c,
            Err(error) => return CheckRunResult::Failed { error },
        };
        let prompt = "Escribe los números del 1 al 5 separados por comas.";
        match self.provider.stream_text(client, prompt).await {
            Ok(report) => CheckRunResult::Passed {
                detail: format!("Streaming completado en {} fragmentos.", report.chunk_count),
            },
            Err(error) => CheckRunResult::Failed { error },
        }
    }
}

pub struct CountTokensCheck {
    provider: Arc<dyn InferenceProvider>,
}

#[async_trait]
impl CheckDefinition<InferenceContext> for CountTokensCheck {
    fn id(&self) -> &str {
        "count_tokens"
    }
    fn title(&self) -> &str {
        "Conteo de Tokens"
    }
    fn description(&self) -> &str {
        "Verificando el endpoint de conteo."
    }
    async fn run(&self, ctx: &mut InferenceContext) -> CheckRunResult {
        let client = match client_of(ctx) {
            Ok(c) => c,
            Err(error) => return CheckRunResult::Failed { error },
        };
        let prompt = "Why is the sky blue?";
        match self.provider.count_tokens(client, prompt).await {
            Ok(total) => CheckRunResult::Passed { detail: format!("Conteo de tokens exitoso. Total: {total}") },
            Err(error) => CheckRunResult::Failed { error },
        }
    }
}

pub struct VisionCheck {
    provider: Arc<dyn InferenceProvider>,
}

#[async_trait]
impl CheckDefinition<InferenceContext> for VisionCheck {
    fn id(&self) -> &str {
        "vision"
    }
    fn title(&self) -> &str {
        "Visión (Multimodal)"
    }
    fn description(&self) -> &str {
        "Enviando una imagen junto con texto."
    }
    async fn run(&self, ctx: &mut InferenceContext) -> CheckRunResult {
        let client = match client_of(ctx) {
            Ok(c) => c,
            Err(error) => return CheckRunResult::Failed { error },
        };
        let prompt = "Describe esta imagen en 5 palabras o menos.";
        match self.provider.vision(client, SAMPLE_IMAGE_BASE64, prompt).await {
            Ok(output) => CheckRunResult::Passed { detail: format!("Análisis de visión completado.\nOutput: {output}") },
            Err(error) => CheckRunResult::Failed { error },
        }
    }
}

/// Registro de la suite de inferencia en su orden canónico.
pub fn inference_registry(provider: Arc<dyn InferenceProvider>)
                          -> Result<CheckRegistry<InferenceContext>, RegistryError> {
    let checks: Vec<Box<dyn CheckDefinition<InferenceContext>>> =
        vec![Box::new(ConnectCheck { provider: provider.clone() }),
             Box::new(GenerateTextCheck { provider: provider.clone() }),
             Box::new(StreamCheck { provider: provider.clone() }),
             Box::new(CountTokensCheck { provider: provider.clone() }),
             Box::new(VisionCheck { provider })];
    build_registry(checks)
}
