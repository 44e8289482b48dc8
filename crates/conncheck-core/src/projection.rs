//! Proyección de estado agregado.
//!
//! Función pura sobre los estados por verificación; se recalcula en cada
//! cambio y no guarda memoria de corridas anteriores. Precedencia:
//! `Error` domina a `Success` domina a `Pending`.

use serde::{Deserialize, Serialize};

use crate::check::CheckStatus;

/// Estado agregado de una corrida, derivado (nunca almacenado).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// Mezcla de `Idle`/`Running` sin errores y sin éxito total.
    Pending,
    /// Todas las verificaciones en `Success`.
    Success,
    /// Al menos una verificación en `Error`, sin importar cuántas pasaron.
    Error,
}

/// Deriva el estado agregado a partir de los estados por verificación.
pub fn aggregate<I>(statuses: I) -> RunStatus
    where I: IntoIterator<Item = CheckStatus>
{
    let mut all_success = true;
    for s in statuses {
        match s {
            CheckStatus::Error => return RunStatus::Error,
            CheckStatus::Success => {}
            _ => all_success = false,
        }
    }
    if all_success {
        RunStatus::Success
    } else {
        RunStatus::Pending
    }
}
