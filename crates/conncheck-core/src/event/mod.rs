//! Eventos de corrida y su sink append-only.

mod sink;
mod types;

pub use sink::{EventSink, InMemoryEventSink};
pub use types::{RunEvent, RunEventKind};
