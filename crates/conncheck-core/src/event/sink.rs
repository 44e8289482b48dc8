use chrono::Utc;
use uuid::Uuid;

use super::{RunEvent, RunEventKind};

/// Almacenamiento de eventos append-only.
pub trait EventSink: Send {
    /// Agrega un evento a partir de su kind y devuelve el evento completo
    /// (con seq y ts asignados).
    fn append_kind(&mut self, run_id: Uuid, generation: u64, kind: RunEventKind) -> RunEvent;
    /// Lista todos los eventos en orden ascendente por seq.
    fn list(&self) -> Vec<RunEvent>;
}

pub struct InMemoryEventSink {
    pub inner: Vec<RunEvent>,
}

impl Default for InMemoryEventSink {
    fn default() -> Self {
        Self { inner: Vec::new() }
    }
}

impl EventSink for InMemoryEventSink {
    fn append_kind(&mut self, run_id: Uuid, generation: u64, kind: RunEventKind) -> RunEvent {
        let seq = self.inner.len() as u64;
        let ev = RunEvent { seq, run_id, generation, kind, ts: Utc::now() };
        self.inner.push(ev.clone());
        ev
    }

    fn list(&self) -> Vec<RunEvent> {
        self.inner.clone()
    }
}
