use async_trait::async_trait;

use super::run_result::CheckRunResult;

/// Contexto encadenado de una corrida. El runner construye uno fresco en cada
/// reset a partir del texto de entrada; así cualquier handle de la corrida
/// anterior queda descartado antes de empezar.
pub trait RunContext: Send {
    fn begin(input: &str) -> Self;
}

/// Trait que define una verificación. La verificación N+1 puede asumir que la
/// N ya pobló su parte del contexto (acoplamiento documentado: reordenar el
/// registro cambia la cadena de dependencias).
#[async_trait]
pub trait CheckDefinition<C: RunContext>: Send + Sync {
    /// Identificador estable y único dentro del registro.
    fn id(&self) -> &str;

    /// Título estático para presentación.
    fn title(&self) -> &str;

    /// Descripción estática para presentación.
    fn description(&self) -> &str;

    /// Ejecuta la verificación. Único punto de suspensión del paso; el runner
    /// espera a que resuelva antes de decidir si continúa.
    async fn run(&self, ctx: &mut C) -> CheckRunResult;
}
