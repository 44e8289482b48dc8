//! Trait del proveedor de sesión del backend.

use async_trait::async_trait;
use conncheck_core::DiagnosticError;
use serde::{Deserialize, Serialize};

/// Handle opaco de sesión devuelto por la inicialización y consumido por las
/// verificaciones posteriores. El runner lo posee en exclusiva durante la
/// corrida y lo descarta en cada reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionHandle {
    pub app_name: String,
    pub automatic_data_collection: bool,
}

/// Resultado de una inicialización exitosa.
#[derive(Debug, Clone)]
pub struct InitOutcome {
    pub handle: SessionHandle,
}

/// Estado del módulo de autenticación de un handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthReport {
    /// `false` cuando el módulo no pudo instanciarse.
    pub present: bool,
    /// Identidad de la sesión activa, si la hay.
    pub current_user: Option<String>,
}

/// Colaborador externo que materializa sesiones y expone sus submódulos.
///
/// Contrato de `initialize`: si existe un handle de una corrida anterior,
/// debe quedar dispuesto (esperado, no sólo lanzado) antes de crear el nuevo;
/// la re-inicialización es idempotente entre corridas. Los errores vuelven ya
/// normalizados a `DiagnosticError`, con el mensaje propio del proveedor
/// cuando existe y su mensaje de respaldo cuando no.
#[async_trait]
pub trait BackendProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn initialize(&self, config: &crate::backend::ParsedConfig)
                        -> Result<InitOutcome, DiagnosticError>;

    async fn inspect_auth(&self, handle: &SessionHandle) -> Result<AuthReport, DiagnosticError>;
}
