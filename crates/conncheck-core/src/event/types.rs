//! Tipos de evento de corrida y estructura `RunEvent`.
//!
//! Rol en el harness:
//! - Cada corrida del `DiagnosticRunner` emite eventos a un `EventSink`
//!   append-only.
//! - El log permite auditar la secuencia exacta observada (orden estricto:
//!   el paso N resuelve antes de que el N+1 arranque).
//! - `generation` identifica la corrida; eventos de una corrida vieja nunca
//!   se mezclan con el estado de una más nueva.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::DiagnosticError;
use crate::projection::RunStatus;

/// Tipos de eventos emitidos durante una corrida.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RunEventKind {
    /// Emisión inicial: fija el `registry_hash` y la cantidad de
    /// verificaciones. Invariante: primer evento de toda corrida.
    RunStarted { registry_hash: String, check_count: usize },
    /// Una verificación comenzó. No implica éxito.
    CheckStarted { index: usize, check_id: String },
    /// Una verificación terminó correctamente con su detalle renderizado.
    CheckPassed {
        index: usize,
        check_id: String,
        detail: String,
    },
    /// Una verificación terminó con error terminal. La corrida no continúa
    /// (stop-on-failure); las posteriores quedan en `Idle`.
    CheckFailed {
        index: usize,
        check_id: String,
        error: DiagnosticError,
    },
    /// Evento de cierre con el estado agregado final de la corrida.
    RunFinished { outcome: RunStatus },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunEvent {
    pub seq: u64, // asignado por el sink (orden de append)
    pub run_id: Uuid,
    pub generation: u64,
    pub kind: RunEventKind,
    pub ts: DateTime<Utc>, // metadato de presentación, no entra en hashes
}
