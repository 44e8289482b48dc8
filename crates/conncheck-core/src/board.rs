//! Tablero de estados por verificación.
//!
//! Cada verificación es un valor inmutable en un mapeo ordenado por id;
//! toda transición reemplaza el slot completo (replace-by-key) en lugar de
//! mutar campos sueltos. El tablero es lo único que ve la capa de
//! presentación, vía `CheckSnapshot` y `RunView`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::check::CheckStatus;
use crate::projection::RunStatus;

/// Estado de una verificación dentro del tablero (el id es la clave del mapa).
#[derive(Debug, Clone)]
pub struct CheckSlot {
    pub title: String,
    pub description: String,
    pub status: CheckStatus,
    /// Presente sólo cuando `status` es `Success` o `Error`; inmutable hasta
    /// el reset de la siguiente corrida.
    pub detail: Option<String>,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl CheckSlot {
    /// Slot recién reseteado para el título/descripción dados.
    pub fn idle(title: &str, description: &str) -> Self {
        Self { title: title.to_string(),
               description: description.to_string(),
               status: CheckStatus::Idle,
               detail: None,
               started_at: None,
               finished_at: None }
    }
}

/// Vista por verificación entregada a la capa de presentación.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckSnapshot {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: CheckStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Vista completa de la corrida actual, publicada en cada transición.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunView {
    /// `None` mientras ninguna corrida haya arrancado.
    pub run_id: Option<Uuid>,
    pub generation: u64,
    pub checks: Vec<CheckSnapshot>,
    pub aggregate: RunStatus,
}

impl Default for RunView {
    fn default() -> Self {
        Self { run_id: None,
               generation: 0,
               checks: Vec::new(),
               aggregate: RunStatus::Pending }
    }
}
