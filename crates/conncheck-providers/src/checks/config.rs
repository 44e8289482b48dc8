//! Verificación 1: validación de la configuración.
//!
//! Parsea el texto pegado por el operador, exige los campos mínimos y deja
//! como detalle la proyección enmascarada. La configuración completa queda en
//! el contexto para la inicialización.

use async_trait::async_trait;
use conncheck_core::{CheckDefinition, CheckRunResult, DiagnosticError};

use super::BackendContext;
use crate::backend::{validate_config, ConfigDisplay};

pub struct ConfigCheck;

impl ConfigCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConfigCheck {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CheckDefinition<BackendContext> for ConfigCheck {
    fn id(&self) -> &str {
        "config"
    }

    fn title(&self) -> &str {
        "Validación de Configuración"
    }

    fn description(&self) -> &str {
        "Analizando el JSON proporcionado."
    }

    async fn run(&self, ctx: &mut BackendContext) -> CheckRunResult {
        match validate_config(&ctx.raw) {
            Ok(config) => {
                let display = ConfigDisplay::from(&config);
                let detail = match serde_json::to_string_pretty(&display) {
                    Ok(s) => s,
                    Err(e) => {
                        return CheckRunResult::Failed {
                            error: DiagnosticError::Internal(format!("proyección no serializable: {e}")),
                        }
                    }
                };
                ctx.config = Some(config);
                CheckRunResult::Passed { detail }
            }
            Err(error) => CheckRunResult::Failed { error },
        }
    }
}
