//! Escenarios extremo a extremo de la suite de backend contra el stub.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use conncheck_providers::{backend_registry, AuthReport, BackendProvider, InitOutcome,
                          ParsedConfig, SessionHandle, StubBackendProvider};
use conncheck_core::{CheckStatus, DiagnosticError, DiagnosticRunner, RunStatus};

const VALID_INPUT: &str = r#"{"apiKey":"AIzaSyLOCALTESTKEY000","projectId":"demo-1"}"#;

fn runner_with(provider: Arc<dyn BackendProvider>)
               -> DiagnosticRunner<conncheck_providers::BackendContext,
                                   conncheck_core::InMemoryEventSink> {
    DiagnosticRunner::in_memory(backend_registry(provider).expect("registry"))
}

// Escenario A: entrada válida, proveedor que siempre inicializa, sin usuario.
#[tokio::test]
async fn valid_input_full_chain_succeeds() {
    let mut runner = runner_with(Arc::new(StubBackendProvider::new()));

    let outcome = runner.run(r#"{"apiKey":"X","projectId":"Y"}"#).await;

    assert_eq!(outcome, RunStatus::Success);
    let snap = runner.snapshot();
    assert_eq!(snap[0].status, CheckStatus::Success);
    assert!(snap[0].detail.as_ref().unwrap().contains(r#""projectId": "Y""#));
    // Las claves cortas se ocultan enteras.
    assert!(snap[0].detail.as_ref().unwrap().contains(r#""apiKey": "***""#));
    assert_eq!(snap[1].status, CheckStatus::Success);
    assert!(snap[1].detail.as_ref().unwrap().contains("[DEFAULT]"));
    assert_eq!(snap[2].status, CheckStatus::Success);
    assert!(snap[2].detail.as_ref().unwrap().contains("No hay usuario logueado"));
}

// Una clave multibyte válida atraviesa la cadena completa sin incidentes.
#[tokio::test]
async fn multibyte_api_key_runs_the_full_chain() {
    let mut runner = runner_with(Arc::new(StubBackendProvider::new()));

    let outcome = runner.run(r#"{"apiKey":"€€€€€","projectId":"demo"}"#).await;

    assert_eq!(outcome, RunStatus::Success);
    let snap = runner.snapshot();
    assert_eq!(snap[0].status, CheckStatus::Success);
    assert!(snap[0].detail.as_ref().unwrap().contains(r#""apiKey": "***""#));
    assert_eq!(snap[2].status, CheckStatus::Success);
}

// Escenario B: JSON malformado corta en el paso 1.
#[tokio::test]
async fn malformed_json_stops_at_first_check() {
    let mut runner = runner_with(Arc::new(StubBackendProvider::new()));

    let outcome = runner.run("not valid json").await;

    assert_eq!(outcome, RunStatus::Error);
    let snap = runner.snapshot();
    assert_eq!(snap[0].status, CheckStatus::Error);
    assert!(snap[0].detail.as_ref().unwrap().contains("JSON inválido"));
    assert_eq!(snap[1].status, CheckStatus::Idle);
    assert_eq!(snap[2].status, CheckStatus::Idle);
}

// Escenario C: falta projectId.
#[tokio::test]
async fn missing_project_id_stops_at_first_check() {
    let mut runner = runner_with(Arc::new(StubBackendProvider::new()));

    let outcome = runner.run(r#"{"apiKey":"X"}"#).await;

    assert_eq!(outcome, RunStatus::Error);
    let snap = runner.snapshot();
    assert_eq!(snap[0].status, CheckStatus::Error);
    assert!(snap[0].detail.as_ref().unwrap().contains("'projectId'"));
    assert_eq!(snap[1].status, CheckStatus::Idle);
    assert_eq!(snap[2].status, CheckStatus::Idle);
}

// Escenario D: el proveedor devuelve un error en la inicialización.
#[tokio::test]
async fn provider_init_error_surfaces_its_message() {
    let provider = StubBackendProvider::new().with_init_error("quota exceeded for project");
    let mut runner = runner_with(Arc::new(provider));

    let outcome = runner.run(VALID_INPUT).await;

    assert_eq!(outcome, RunStatus::Error);
    let snap = runner.snapshot();
    assert_eq!(snap[0].status, CheckStatus::Success);
    assert_eq!(snap[1].status, CheckStatus::Error);
    assert_eq!(snap[1].detail.as_deref(), Some("quota exceeded for project"));
    assert_eq!(snap[2].status, CheckStatus::Idle);
}

// Escenario E: inicializa bien pero el módulo auth no está instanciado.
#[tokio::test]
async fn missing_auth_module_fails_third_check() {
    let provider = StubBackendProvider::new().without_auth();
    let mut runner = runner_with(Arc::new(provider));

    let outcome = runner.run(VALID_INPUT).await;

    assert_eq!(outcome, RunStatus::Error);
    let snap = runner.snapshot();
    assert_eq!(snap[0].status, CheckStatus::Success);
    assert_eq!(snap[1].status, CheckStatus::Success);
    assert_eq!(snap[2].status, CheckStatus::Error);
    assert_eq!(snap[2].detail.as_deref(),
               Some("No se pudo obtener la instancia de Auth."));
}

#[tokio::test]
async fn active_session_uid_appears_in_detail() {
    let provider = StubBackendProvider::new().with_user("uid-42");
    let mut runner = runner_with(Arc::new(provider));

    runner.run(VALID_INPUT).await;
    let snap = runner.snapshot();
    assert!(snap[2].detail.as_ref().unwrap().contains("Current User: uid-42"));
}

#[tokio::test]
async fn api_key_never_reaches_the_board() {
    let mut runner = runner_with(Arc::new(StubBackendProvider::new()));

    runner.run(VALID_INPUT).await;
    for check in runner.snapshot() {
        if let Some(detail) = check.detail {
            assert!(!detail.contains("AIzaSyLOCALTESTKEY000"),
                    "la clave completa se filtró en '{}'", check.id);
        }
    }
}

#[tokio::test]
async fn rerun_disposes_the_previous_handle() {
    let provider = Arc::new(StubBackendProvider::new());
    let mut runner = runner_with(provider.clone());

    runner.run(VALID_INPUT).await;
    runner.run(VALID_INPUT).await;

    assert_eq!(provider.disposed_count(), 1);
    assert_eq!(runner.aggregate_status(), RunStatus::Success);
}

/// Proveedor que registra los handles que cruzan la frontera, para validar
/// que el handle inspeccionado es exactamente el producido al inicializar.
struct RecordingProvider {
    produced: Mutex<Option<SessionHandle>>,
    inspected: Mutex<Option<SessionHandle>>,
}

#[async_trait]
impl BackendProvider for RecordingProvider {
    fn name(&self) -> &str {
        "recording"
    }

    async fn initialize(&self, _config: &ParsedConfig) -> Result<InitOutcome, DiagnosticError> {
        let handle = SessionHandle { app_name: "recorded-app".to_string(),
                                     automatic_data_collection: true };
        *self.produced.lock().unwrap() = Some(handle.clone());
        Ok(InitOutcome { handle })
    }

    async fn inspect_auth(&self, handle: &SessionHandle) -> Result<AuthReport, DiagnosticError> {
        *self.inspected.lock().unwrap() = Some(handle.clone());
        Ok(AuthReport { present: true, current_user: None })
    }
}

#[tokio::test]
async fn inspected_handle_is_the_one_initialization_produced() {
    let provider = Arc::new(RecordingProvider { produced: Mutex::new(None),
                                                inspected: Mutex::new(None) });
    let mut runner = runner_with(provider.clone());

    let outcome = runner.run(VALID_INPUT).await;

    assert_eq!(outcome, RunStatus::Success);
    let produced = provider.produced.lock().unwrap().clone().expect("handle producido");
    let inspected = provider.inspected.lock().unwrap().clone().expect("handle inspeccionado");
    assert_eq!(produced, inspected);
}
