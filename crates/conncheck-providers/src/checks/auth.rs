//! Verificación 3: módulo de autenticación.
//!
//! Consulta el submódulo auth del handle producido por la inicialización y
//! reporta la sesión activa, o un marcador explícito cuando no hay usuario.

use std::sync::Arc;

use async_trait::async_trait;
use conncheck_core::{CheckDefinition, CheckRunResult, DiagnosticError};

use super::BackendContext;
use crate::backend::BackendProvider;

pub struct AuthModuleCheck {
    provider: Arc<dyn BackendProvider>,
}

impl AuthModuleCheck {
    pub fn new(provider: Arc<dyn BackendProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl CheckDefinition<BackendContext> for AuthModuleCheck {
    fn id(&self) -> &str {
        "auth_module"
    }

    fn title(&self) -> &str {
        "Servicio de Autenticación"
    }

    fn description(&self) -> &str {
        "Verificando la instanciación del módulo Auth."
    }

    async fn run(&self, ctx: &mut BackendContext) -> CheckRunResult {
        let handle = match ctx.handle.as_ref() {
            Some(h) => h,
            None => {
                return CheckRunResult::Failed {
                    error: DiagnosticError::Internal("handle no disponible en el contexto".into()),
                }
            }
        };

        match self.provider.inspect_auth(handle).await {
            Ok(report) if report.present => {
                let user = report.current_user
                                 .unwrap_or_else(|| "null (No hay usuario logueado)".to_string());
                CheckRunResult::Passed { detail: format!("Auth SDK cargado correctamente.\nCurrent User: {user}") }
            }
            Ok(_) => CheckRunResult::Failed {
                error: DiagnosticError::SubCapability(
                    "No se pudo obtener la instancia de Auth.".to_string(),
                ),
            },
            Err(error) => CheckRunResult::Failed { error },
        }
    }
}
