//! Escenarios de la suite de sondas de inferencia contra el stub.

use std::sync::Arc;

use conncheck_core::{CheckStatus, DiagnosticRunner, RunStatus};
use conncheck_providers::{inference_registry, StubInferenceProvider};

fn runner_with(provider: StubInferenceProvider)
               -> DiagnosticRunner<conncheck_providers::InferenceContext,
                                   conncheck_core::InMemoryEventSink> {
    DiagnosticRunner::in_memory(inference_registry(Arc::new(provider)).expect("registry"))
}

#[tokio::test]
async fn happy_path_runs_all_probes() {
    let mut runner = runner_with(StubInferenceProvider::new());

    let outcome = runner.run("test-api-key").await;

    assert_eq!(outcome, RunStatus::Success);
    let snap = runner.snapshot();
    assert_eq!(snap.len(), 5);
    assert!(snap.iter().all(|c| c.status == CheckStatus::Success));
    assert!(snap[1].detail.as_ref().unwrap().contains("Funciona"));
    assert!(snap[2].detail.as_ref().unwrap().contains("5 fragmentos"));
}

#[tokio::test]
async fn empty_key_fails_connect_and_rest_stay_idle() {
    let mut runner = runner_with(StubInferenceProvider::new());

    let outcome = runner.run("").await;

    assert_eq!(outcome, RunStatus::Error);
    let snap = runner.snapshot();
    assert_eq!(snap[0].status, CheckStatus::Error);
    assert_eq!(snap[0].detail.as_deref(), Some("API Key is required"));
    assert!(snap[1..].iter().all(|c| c.status == CheckStatus::Idle));
}

#[tokio::test]
async fn scripted_connect_rejection_uses_provider_message() {
    let provider = StubInferenceProvider::new().with_connect_error("API key not valid");
    let mut runner = runner_with(provider);

    runner.run("bad-key").await;
    let snap = runner.snapshot();
    assert_eq!(snap[0].detail.as_deref(), Some("API key not valid"));
}

#[tokio::test]
async fn stream_failure_leaves_later_probes_idle() {
    let provider = StubInferenceProvider::new().with_stream_error("stream interrupted");
    let mut runner = runner_with(provider);

    let outcome = runner.run("test-api-key").await;

    assert_eq!(outcome, RunStatus::Error);
    let snap = runner.snapshot();
    assert_eq!(snap[0].status, CheckStatus::Success);
    assert_eq!(snap[1].status, CheckStatus::Success);
    assert_eq!(snap[2].status, CheckStatus::Error);
    assert_eq!(snap[2].detail.as_deref(), Some("stream interrupted"));
    assert_eq!(snap[3].status, CheckStatus::Idle);
    assert_eq!(snap[4].status, CheckStatus::Idle);
}
