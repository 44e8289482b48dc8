//! Runner de diagnóstico (orquestador secuencial).

mod core;

pub use core::DiagnosticRunner;
