//! Configuración central del binario de demostración.
//! Carga variables de entorno (.env) y expone una estructura inmutable
//! (`CONFIG`). Todos los valores tienen default: el demo corre sin entorno.

use once_cell::sync::Lazy;
use std::env;

/// Configuración global (extensible para más secciones: logging, etc.).
pub struct AppConfig {
    /// Cadencia en milisegundos entre verificaciones (0 = sin pausa).
    pub pace_ms: u64,
    /// Ruta opcional a un JSON de configuración del backend.
    pub config_path: Option<String>,
    /// Clave de API para la suite de inferencia.
    pub api_key: String,
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    let pace_ms = env::var("CONNCHECK_PACE_MS").ok()
        .and_then(|v| v.parse().ok()).unwrap_or(0);
    let config_path = env::var("CONNCHECK_CONFIG").ok();
    let api_key = env::var("CONNCHECK_API_KEY").unwrap_or_else(|_| "demo-key".to_string());
    AppConfig { pace_ms, config_path, api_key }
});
