//! Implementación del `DiagnosticRunner`.
//!
//! Responsable de orquestar la ejecución estrictamente secuencial de las
//! verificaciones, mantener el tablero observable y cortar la corrida en el
//! primer fallo. Garantías de orden: las actualizaciones del paso N (estado
//! y detalle) quedan aplicadas antes de que el paso N+1 pase a `Running`.

use std::time::Duration;

use indexmap::IndexMap;
use tokio::sync::watch;
use uuid::Uuid;

use crate::board::{CheckSlot, CheckSnapshot, RunView};
use crate::check::{CheckRunResult, CheckStatus, RunContext};
use crate::event::{EventSink, InMemoryEventSink, RunEvent, RunEventKind};
use crate::projection::{aggregate, RunStatus};
use crate::registry::CheckRegistry;

/// Orquestador de una cadena ordenada de verificaciones dependientes.
///
/// `run` puede invocarse cuantas veces se quiera; cada invocación resetea el
/// tablero, descarta el contexto anterior y sube la generación. Una
/// actualización cuya generación no coincide con la vigente se descarta, de
/// modo que una corrida vieja nunca corrompe el estado de una más nueva.
pub struct DiagnosticRunner<C: RunContext, S: EventSink> {
    registry: CheckRegistry<C>,
    sink: S,
    board: IndexMap<String, CheckSlot>,
    run_id: Option<Uuid>,
    generation: u64,
    pace: Option<Duration>,
    view_tx: watch::Sender<RunView>,
}

impl<C: RunContext> DiagnosticRunner<C, InMemoryEventSink> {
    /// Crea un runner con sink de eventos en memoria.
    pub fn in_memory(registry: CheckRegistry<C>) -> Self {
        Self::new_with_sink(registry, InMemoryEventSink::default())
    }
}

impl<C: RunContext, S: EventSink> DiagnosticRunner<C, S> {
    /// Crea un runner con el sink de eventos provisto.
    pub fn new_with_sink(registry: CheckRegistry<C>, sink: S) -> Self {
        let board: IndexMap<String, CheckSlot> =
            registry.iter()
                    .map(|c| (c.id().to_string(), CheckSlot::idle(c.title(), c.description())))
                    .collect();
        let (view_tx, _) = watch::channel(RunView::default());
        let mut runner = Self { registry,
                                sink,
                                board,
                                run_id: None,
                                generation: 0,
                                pace: None,
                                view_tx };
        runner.publish();
        runner
    }

    /// Pausa opcional antes de cada verificación (cadencia de presentación).
    /// Desactivada por defecto.
    pub fn with_pace(mut self, pace: Duration) -> Self {
        self.pace = Some(pace);
        self
    }

    /// Suscripción a la vista viva; se publica una `RunView` nueva en cada
    /// transición de estado.
    pub fn subscribe(&self) -> watch::Receiver<RunView> {
        self.view_tx.subscribe()
    }

    /// Vista por verificación del tablero actual, en orden de registro.
    pub fn snapshot(&self) -> Vec<CheckSnapshot> {
        self.board
            .iter()
            .map(|(id, slot)| CheckSnapshot { id: id.clone(),
                                              title: slot.title.clone(),
                                              description: slot.description.clone(),
                                              status: slot.status,
                                              detail: slot.detail.clone() })
            .collect()
    }

    /// Estado agregado derivado del tablero actual.
    pub fn aggregate_status(&self) -> RunStatus {
        aggregate(self.board.values().map(|s| s.status))
    }

    /// Log de eventos acumulado (todas las corridas).
    pub fn events(&self) -> Vec<RunEvent> {
        self.sink.list()
    }

    /// Ejecuta la cadena completa sobre el texto de entrada.
    ///
    /// Siempre completa: todo error queda capturado en la frontera del paso
    /// y convertido en estado `Error` más detalle; nada se propaga hacia
    /// afuera. Sin timeout por paso: una verificación que nunca resuelve
    /// detiene la corrida indefinidamente (limitación documentada).
    pub async fn run(&mut self, input: &str) -> RunStatus {
        self.generation += 1;
        let generation = self.generation;
        let run_id = Uuid::new_v4();
        self.run_id = Some(run_id);
        self.reset_board();

        #[cfg(feature = "tracing")]
        tracing::debug!(%run_id, generation, checks = self.registry.len(), "run started");

        self.sink.append_kind(run_id,
                              generation,
                              RunEventKind::RunStarted { registry_hash:
                                                             self.registry.registry_hash().to_string(),
                                                         check_count: self.registry.len() });

        let mut ctx = C::begin(input);

        for index in 0..self.registry.len() {
            let check_id = self.registry.get(index).id().to_string();

            self.commit_running(generation, &check_id);
            self.sink.append_kind(run_id,
                                  generation,
                                  RunEventKind::CheckStarted { index, check_id: check_id.clone() });

            if let Some(pace) = self.pace {
                tokio::time::sleep(pace).await;
            }

            // Único punto de suspensión del paso.
            let result = self.registry.get(index).run(&mut ctx).await;

            match result {
                CheckRunResult::Passed { detail } => {
                    self.commit_settled(generation, &check_id, CheckStatus::Success, detail.clone());
                    self.sink.append_kind(run_id,
                                          generation,
                                          RunEventKind::CheckPassed { index,
                                                                      check_id: check_id.clone(),
                                                                      detail });
                }
                CheckRunResult::Failed { error } => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(%run_id, check = %check_id, %error, "check failed, run aborted");

                    self.commit_settled(generation, &check_id, CheckStatus::Error, error.to_string());
                    self.sink.append_kind(run_id,
                                          generation,
                                          RunEventKind::CheckFailed { index,
                                                                      check_id: check_id.clone(),
                                                                      error });
                    break; // stop-on-failure: las posteriores quedan Idle
                }
            }
        }

        let outcome = self.aggregate_status();
        self.sink.append_kind(run_id, generation, RunEventKind::RunFinished { outcome });

        #[cfg(feature = "tracing")]
        tracing::debug!(%run_id, ?outcome, "run finished");

        outcome
    }

    /// Resetea todos los slots a `Idle` sin detalle y publica la vista.
    fn reset_board(&mut self) {
        let slots: Vec<(String, CheckSlot)> =
            self.registry
                .iter()
                .map(|c| (c.id().to_string(), CheckSlot::idle(c.title(), c.description())))
                .collect();
        self.board = slots.into_iter().collect();
        self.publish();
    }

    /// Transición a `Running`. Replace-by-key; descarta commits obsoletos.
    fn commit_running(&mut self, generation: u64, check_id: &str) {
        if generation != self.generation {
            #[cfg(feature = "tracing")]
            tracing::warn!(check = check_id, generation, "stale commit discarded");
            return;
        }
        if let Some(slot) = self.board.get(check_id) {
            let next = CheckSlot { status: CheckStatus::Running,
                                   detail: None,
                                   started_at: Some(chrono::Utc::now()),
                                   finished_at: None,
                                   ..slot.clone() };
            self.board.insert(check_id.to_string(), next);
            self.publish();
        }
    }

    /// Transición terminal (`Success`/`Error`) con su detalle renderizado.
    fn commit_settled(&mut self, generation: u64, check_id: &str, status: CheckStatus, detail: String) {
        if generation != self.generation {
            #[cfg(feature = "tracing")]
            tracing::warn!(check = check_id, generation, "stale commit discarded");
            return;
        }
        debug_assert!(status.is_terminal());
        if let Some(slot) = self.board.get(check_id) {
            let next = CheckSlot { status,
                                   detail: Some(detail),
                                   finished_at: Some(chrono::Utc::now()),
                                   ..slot.clone() };
            self.board.insert(check_id.to_string(), next);
            self.publish();
        }
    }

    fn publish(&mut self) {
        let view = RunView { run_id: self.run_id,
                             generation: self.generation,
                             checks: self.snapshot(),
                             aggregate: self.aggregate_status() };
        self.view_tx.send_replace(view);
    }
}
