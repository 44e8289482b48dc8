//! CLI mínima del harness de diagnóstico.
//!
//! `conncheck run [--config <path>] [--suite backend|inference] [--key <api-key>]
//!                [--pace-ms <n>] [--events]`
//!
//! Sin `--config` se usa el payload por defecto embebido (acción documentada
//! de "restaurar valores por defecto"). Las suites corren contra los
//! proveedores stub locales; el código de salida es 0 si el agregado es
//! Success y 1 si es Error.

use std::sync::Arc;
use std::time::Duration;

use conncheck_core::{CheckSnapshot, CheckStatus, DiagnosticRunner, RunStatus};
use conncheck_providers::{backend_registry, inference_registry, StubBackendProvider,
                          StubInferenceProvider};
use tracing_subscriber::EnvFilter;

/// Payload de configuración por defecto (valores de demostración).
const DEFAULT_CONFIG: &str = r#"{
  "apiKey": "AIzaSyDEMO0000000000000000000000000000",
  "authDomain": "conncheck-demo.example.app",
  "projectId": "conncheck-demo",
  "storageBucket": "conncheck-demo.appspot.com",
  "messagingSenderId": "000000000000",
  "appId": "1:000000000000:web:0000000000000000000000"
}"#;

fn status_marker(status: CheckStatus) -> &'static str {
    match status {
        CheckStatus::Idle => "[ ]",
        CheckStatus::Running => "[~]",
        CheckStatus::Success => "[✓]",
        CheckStatus::Error => "[✗]",
    }
}

fn print_board(checks: &[CheckSnapshot], aggregate: RunStatus) {
    for check in checks {
        println!("{} {} — {}", status_marker(check.status), check.title, check.description);
        if let Some(detail) = &check.detail {
            for line in detail.lines() {
                println!("      {line}");
            }
        }
    }
    let label = match aggregate {
        RunStatus::Pending => "Verificando...",
        RunStatus::Success => "Sistema Operativo",
        RunStatus::Error => "Error de Conexión",
    };
    println!("\nEstado agregado: {label}");
}

fn usage() -> ! {
    eprintln!("uso: conncheck run [--config <path>] [--suite backend|inference] \
               [--key <api-key>] [--pace-ms <n>] [--events]");
    std::process::exit(2);
}

#[derive(Debug, Default, PartialEq, Eq)]
struct CliOptions {
    config_path: Option<String>,
    suite: Option<String>,
    key: Option<String>,
    pace_ms: Option<u64>,
    show_events: bool,
}

/// Parsea los argumentos posteriores a `run`. Cualquier flag desconocida,
/// valor faltante o `--pace-ms` no numérico es un error.
fn parse_run_args(args: &[String]) -> Result<CliOptions, String> {
    let mut opts = CliOptions::default();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                let value = args.get(i).ok_or("--config espera una ruta")?;
                opts.config_path = Some(value.clone());
            }
            "--suite" => {
                i += 1;
                let value = args.get(i).ok_or("--suite espera un nombre")?;
                opts.suite = Some(value.clone());
            }
            "--key" => {
                i += 1;
                let value = args.get(i).ok_or("--key espera una clave")?;
                opts.key = Some(value.clone());
            }
            "--pace-ms" => {
                i += 1;
                let value = args.get(i).ok_or("--pace-ms espera un entero")?;
                let ms = value.parse::<u64>()
                              .map_err(|_| format!("--pace-ms espera un entero, recibió: {value}"))?;
                opts.pace_ms = Some(ms);
            }
            "--events" => opts.show_events = true,
            other => return Err(format!("flag desconocida: {other}")),
        }
        i += 1;
    }
    Ok(opts)
}

#[tokio::main]
async fn main() {
    // Cargar .env si existe (p. ej. CONNCHECK_API_KEY para la suite de inferencia).
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env())
                             .with_writer(std::io::stderr)
                             .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args[1] != "run" {
        usage();
    }

    let CliOptions { config_path, suite, key, pace_ms, show_events } =
        match parse_run_args(&args[2..]) {
            Ok(opts) => opts,
            Err(msg) => {
                eprintln!("[conncheck] {msg}");
                usage();
            }
        };
    let suite = suite.unwrap_or_else(|| "backend".to_string());

    let outcome = match suite.as_str() {
        "backend" => {
            let input = match &config_path {
                Some(path) => match std::fs::read_to_string(path) {
                    Ok(s) => s,
                    Err(e) => {
                        eprintln!("[conncheck] no se pudo leer {path}: {e}");
                        std::process::exit(2);
                    }
                },
                None => DEFAULT_CONFIG.to_string(),
            };
            let registry = match backend_registry(Arc::new(StubBackendProvider::new())) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("[conncheck] registro inválido: {e}");
                    std::process::exit(2);
                }
            };
            let mut runner = DiagnosticRunner::in_memory(registry);
            if let Some(ms) = pace_ms {
                runner = runner.with_pace(Duration::from_millis(ms));
            }
            let outcome = runner.run(&input).await;
            print_board(&runner.snapshot(), outcome);
            if show_events {
                for ev in runner.events() {
                    println!("{}", serde_json::to_string(&ev).unwrap_or_default());
                }
            }
            outcome
        }
        "inference" => {
            let key = key.or_else(|| std::env::var("CONNCHECK_API_KEY").ok())
                         .unwrap_or_default();
            let registry = match inference_registry(Arc::new(StubInferenceProvider::new())) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("[conncheck] registro inválido: {e}");
                    std::process::exit(2);
                }
            };
            let mut runner = DiagnosticRunner::in_memory(registry);
            if let Some(ms) = pace_ms {
                runner = runner.with_pace(Duration::from_millis(ms));
            }
            let outcome = runner.run(&key).await;
            print_board(&runner.snapshot(), outcome);
            if show_events {
                for ev in runner.events() {
                    println!("{}", serde_json::to_string(&ev).unwrap_or_default());
                }
            }
            outcome
        }
        other => {
            eprintln!("[conncheck] suite desconocida: {other}");
            std::process::exit(2);
        }
    };

    if outcome != RunStatus::Success {
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::parse_run_args;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn full_flag_set_parses() {
        let opts = parse_run_args(&argv(&["--suite", "inference", "--key", "k",
                                          "--pace-ms", "250", "--events"]))
            .expect("args válidos");
        assert_eq!(opts.suite.as_deref(), Some("inference"));
        assert_eq!(opts.pace_ms, Some(250));
        assert!(opts.show_events);
    }

    #[test]
    fn non_numeric_pace_is_rejected() {
        let err = parse_run_args(&argv(&["--pace-ms", "rápido"])).expect_err("debe fallar");
        assert!(err.contains("--pace-ms"));
        assert!(err.contains("rápido"));
    }

    #[test]
    fn missing_flag_value_is_rejected() {
        assert!(parse_run_args(&argv(&["--pace-ms"])).is_err());
        assert!(parse_run_args(&argv(&["--config"])).is_err());
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(parse_run_args(&argv(&["--verbose"])).is_err());
    }
}
