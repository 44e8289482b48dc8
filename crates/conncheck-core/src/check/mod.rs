//! Definiciones relacionadas a verificaciones (checks).
//!
//! Una verificación es la unidad secuencial del harness: recibe el contexto
//! acumulado por las verificaciones anteriores, suspende exactamente una vez
//! en la llamada al proveedor y termina en `Passed` o `Failed`. Este módulo
//! define:
//! - `CheckDefinition`: interfaz neutral usada por el runner.
//! - `RunContext`: construcción del contexto encadenado por corrida.
//! - `CheckRunResult` y `CheckStatus`.

pub mod definition;
mod run_result;
mod status;

pub use definition::{CheckDefinition, RunContext};
pub use run_result::CheckRunResult;
pub use status::CheckStatus;
