//! Frontera con el SDK del backend: configuración, sesión y stub.

pub mod config;
pub mod provider;
pub mod stub;

pub use config::{validate_config, ConfigDisplay, ParsedConfig};
pub use provider::{AuthReport, BackendProvider, InitOutcome, SessionHandle};
pub use stub::StubBackendProvider;
