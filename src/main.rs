//! Demo ejecutable del harness de diagnóstico.
//!
//! Corre la suite de backend dos veces (mostrando el reset idempotente y la
//! disposición del handle anterior), luego un caso de error y por último la
//! suite de sondas de inferencia, todo contra los proveedores stub.

mod config;

use std::sync::Arc;
use std::time::Duration;

use conncheck_core::{CheckSnapshot, CheckStatus, DiagnosticRunner, RunStatus};
use conncheck_providers::{backend_registry, inference_registry, StubBackendProvider,
                          StubInferenceProvider};

use crate::config::CONFIG;

/// Payload de configuración por defecto (valores de demostración).
const DEFAULT_CONFIG: &str = r#"{
  "apiKey": "AIzaSyDEMO0000000000000000000000000000",
  "authDomain": "conncheck-demo.example.app",
  "projectId": "conncheck-demo",
  "storageBucket": "conncheck-demo.appspot.com",
  "messagingSenderId": "000000000000",
  "appId": "1:000000000000:web:0000000000000000000000"
}"#;

fn print_board(checks: &[CheckSnapshot], aggregate: RunStatus) {
    for check in checks {
        let marker = match check.status {
            CheckStatus::Idle => "[ ]",
            CheckStatus::Running => "[~]",
            CheckStatus::Success => "[✓]",
            CheckStatus::Error => "[✗]",
        };
        println!("  {marker} {}", check.title);
        if let Some(detail) = &check.detail {
            for line in detail.lines() {
                println!("        {line}");
            }
        }
    }
    println!("  agregado: {:?}\n", aggregate);
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let input = match &CONFIG.config_path {
        Some(path) => std::fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("[demo] no se pudo leer {path}: {e}; usando el payload por defecto");
            DEFAULT_CONFIG.to_string()
        }),
        None => DEFAULT_CONFIG.to_string(),
    };

    println!("== Suite de backend (stub con sesión activa) ==");
    let provider = Arc::new(StubBackendProvider::new().with_user("demo-uid-001"));
    let registry = backend_registry(provider.clone()).expect("registro de backend");
    let mut runner = DiagnosticRunner::in_memory(registry);
    if CONFIG.pace_ms > 0 {
        runner = runner.with_pace(Duration::from_millis(CONFIG.pace_ms));
    }

    // Observador en vivo: imprime cada transición publicada por el runner.
    let mut rx = runner.subscribe();
    let watcher = tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let view = rx.borrow().clone();
            let running: Vec<&str> = view.checks
                                         .iter()
                                         .filter(|c| c.status == CheckStatus::Running)
                                         .map(|c| c.id.as_str())
                                         .collect();
            if !running.is_empty() {
                println!("  ... ejecutando: {}", running.join(", "));
            }
        }
    });

    let outcome = runner.run(&input).await;
    print_board(&runner.snapshot(), outcome);

    println!("== Segunda corrida (reset idempotente) ==");
    let outcome = runner.run(&input).await;
    print_board(&runner.snapshot(), outcome);
    println!("  handles dispuestos entre corridas: {}\n", provider.disposed_count());

    println!("== Corrida con entrada malformada ==");
    let outcome = runner.run("{ apiKey sin comillas }").await;
    print_board(&runner.snapshot(), outcome);

    drop(runner); // cierra el canal del observador
    let _ = watcher.await;

    println!("== Suite de sondas de inferencia ==");
    let registry = inference_registry(Arc::new(StubInferenceProvider::new()))
        .expect("registro de inferencia");
    let mut runner = DiagnosticRunner::in_memory(registry);
    let outcome = runner.run(&CONFIG.api_key).await;
    print_board(&runner.snapshot(), outcome);
}
