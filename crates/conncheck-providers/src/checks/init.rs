//! Verificación 2: inicialización del SDK.
//!
//! Pide al proveedor materializar una sesión con la configuración encadenada.
//! Idempotente entre corridas: el proveedor dispone cualquier handle previo
//! antes de crear el nuevo.

use std::sync::Arc;

use async_trait::async_trait;
use conncheck_core::{CheckDefinition, CheckRunResult, DiagnosticError};

use super::BackendContext;
use crate::backend::BackendProvider;

pub struct InitCheck {
    provider: Arc<dyn BackendProvider>,
}

impl InitCheck {
    pub fn new(provider: Arc<dyn BackendProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl CheckDefinition<BackendContext> for InitCheck {
    fn id(&self) -> &str {
        "init"
    }

    fn title(&self) -> &str {
        "Inicialización del SDK"
    }

    fn description(&self) -> &str {
        "Creando la sesión con la configuración validada."
    }

    async fn run(&self, ctx: &mut BackendContext) -> CheckRunResult {
        let config = match ctx.config.as_ref() {
            Some(c) => c,
            // Inalcanzable bajo el invariante stop-on-failure; defendido igual.
            None => {
                return CheckRunResult::Failed {
                    error: DiagnosticError::Internal("configuración no disponible en el contexto".into()),
                }
            }
        };

        match self.provider.initialize(config).await {
            Ok(outcome) => {
                let detail = format!("App Name: \"{}\"\nAutomatic Data Collection: {}",
                                     outcome.handle.app_name,
                                     outcome.handle.automatic_data_collection);
                ctx.handle = Some(outcome.handle);
                CheckRunResult::Passed { detail }
            }
            Err(error) => CheckRunResult::Failed { error },
        }
    }
}
