//! conncheck-core: orquestador secuencial de verificaciones diagnósticas
pub mod board;
pub mod check;
pub mod constants;
pub mod errors;
pub mod event;
pub mod hashing;
pub mod projection;
pub mod registry;
pub mod runner;

pub use board::{CheckSlot, CheckSnapshot, RunView};
pub use check::{CheckDefinition, CheckRunResult, CheckStatus, RunContext};
pub use errors::DiagnosticError;
pub use event::{EventSink, InMemoryEventSink, RunEvent, RunEventKind};
pub use projection::{aggregate, RunStatus};
pub use registry::{build_registry, CheckRegistry, RegistryError};
pub use runner::DiagnosticRunner;
