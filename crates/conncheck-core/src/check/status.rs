use serde::{Deserialize, Serialize};

/// Estado observable de una verificación en tiempo de ejecución.
///
/// Las transiciones válidas son:
/// - `Idle` -> `Running`
/// - `Running` -> `Success`
/// - `Running` -> `Error`
///
/// No se permiten reversiones dentro de una misma corrida; el reset de una
/// corrida nueva vuelve a `Idle` todos los slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// No alcanzada todavía (o nunca, tras un fallo anterior).
    Idle,
    /// En ejecución. A lo sumo una verificación está en este estado.
    Running,
    /// Terminó correctamente; `detail` quedó fijado.
    Success,
    /// Terminó con error terminal; la corrida no continúa.
    Error,
}

impl CheckStatus {
    /// Estado terminal: la verificación ya resolvió en esta corrida.
    pub fn is_terminal(&self) -> bool {
        matches!(self, CheckStatus::Success | CheckStatus::Error)
    }
}
