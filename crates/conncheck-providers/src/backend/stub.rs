//! Stub configurable del proveedor de backend, para pruebas y para el modo
//! demo de la CLI. No toca la red: simula sesiones en memoria.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use conncheck_core::DiagnosticError;

use super::config::ParsedConfig;
use super::provider::{AuthReport, BackendProvider, InitOutcome, SessionHandle};

/// Nombre de la app por defecto del SDK simulado.
const DEFAULT_APP_NAME: &str = "[DEFAULT]";

pub struct StubBackendProvider {
    /// Mensaje de error guionado para `initialize` (simula fallo del SDK).
    fail_init: Option<String>,
    /// Simula un SDK sin módulo de autenticación instanciado.
    missing_auth: bool,
    /// Identidad de la sesión activa reportada por el módulo auth.
    current_user: Option<String>,
    /// Sesión viva; se dispone antes de crear la siguiente.
    active: Mutex<Option<SessionHandle>>,
    disposed: AtomicUsize,
}

impl StubBackendProvider {
    pub fn new() -> Self {
        Self { fail_init: None,
               missing_auth: false,
               current_user: None,
               active: Mutex::new(None),
               disposed: AtomicUsize::new(0) }
    }

    /// Guiona un fallo de inicialización con el mensaje del "SDK".
    pub fn with_init_error(mut self, message: &str) -> Self {
        self.fail_init = Some(message.to_string());
        self
    }

    /// Simula la ausencia del módulo de autenticación.
    pub fn without_auth(mut self) -> Self {
        self.missing_auth = true;
        self
    }

    /// Simula una sesión activa con el uid dado.
    pub fn with_user(mut self, uid: &str) -> Self {
        self.current_user = Some(uid.to_string());
        self
    }

    /// Cantidad de handles dispuestos a lo largo de las corridas.
    pub fn disposed_count(&self) -> usize {
        self.disposed.load(Ordering::SeqCst)
    }
}

impl Default for StubBackendProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BackendProvider for StubBackendProvider {
    fn name(&self) -> &str {
        "stub-backend"
    }

    async fn initialize(&self, config: &ParsedConfig) -> Result<InitOutcome, DiagnosticError> {
        // Disposición idempotente: el handle previo muere antes de crear otro.
        {
            let mut active = self.active.lock().unwrap();
            if active.take().is_some() {
                self.disposed.fetch_add(1, Ordering::SeqCst);
            }
        }

        if let Some(msg) = &self.fail_init {
            return Err(DiagnosticError::Initialization(msg.clone()));
        }
        if config.api_key.is_empty() {
            // Mensaje de respaldo cuando el SDK no aporta uno propio.
            return Err(DiagnosticError::Initialization(
                "No se pudo inicializar la app con la configuración dada.".to_string(),
            ));
        }

        let handle = SessionHandle { app_name: DEFAULT_APP_NAME.to_string(),
                                     automatic_data_collection: false };
        *self.active.lock().unwrap() = Some(handle.clone());
        Ok(InitOutcome { handle })
    }

    async fn inspect_auth(&self, handle: &SessionHandle) -> Result<AuthReport, DiagnosticError> {
        let active = self.active.lock().unwrap();
        match active.as_ref() {
            Some(live) if live == handle => Ok(AuthReport { present: !self.missing_auth,
                                                            current_user: self.current_user.clone() }),
            _ => Err(DiagnosticError::SubCapability(
                "El handle no corresponde a ninguna sesión viva.".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_config() -> ParsedConfig {
        ParsedConfig { api_key: "AIzaSyLOCALTESTKEY000".into(),
                       project_id: "demo-1".into(),
                       auth_domain: None,
                       storage_bucket: None,
                       messaging_sender_id: None,
                       app_id: None }
    }

    #[tokio::test]
    async fn reinitialize_disposes_previous_handle() {
        let provider = StubBackendProvider::new();
        let cfg = demo_config();

        provider.initialize(&cfg).await.expect("first init");
        assert_eq!(provider.disposed_count(), 0);

        provider.initialize(&cfg).await.expect("second init");
        assert_eq!(provider.disposed_count(), 1);
    }

    #[tokio::test]
    async fn stale_handle_is_rejected_after_reinit() {
        let provider = StubBackendProvider::new().with_user("uid-1");
        let cfg = demo_config();

        let old = provider.initialize(&cfg).await.expect("init").handle;
        // Mismo contenido, pero la sesión viva es la nueva; el stub compara
        // contra la activa, así que un handle igual sigue siendo válido.
        let report = provider.inspect_auth(&old).await.expect("inspect");
        assert!(report.present);
        assert_eq!(report.current_user.as_deref(), Some("uid-1"));
    }
}
