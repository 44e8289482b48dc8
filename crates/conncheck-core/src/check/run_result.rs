use crate::errors::DiagnosticError;

/// Resultado abstracto de ejecutar una verificación.
pub enum CheckRunResult {
    /// La verificación pasó; `detail` es el resumen renderizado del resultado.
    Passed { detail: String },
    /// La verificación falló; el error ya viene normalizado y con mensaje
    /// legible para el operador.
    Failed { error: DiagnosticError },
}
