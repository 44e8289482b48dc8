//! Validación de la configuración del backend.
//!
//! La entrada es el texto JSON pegado por el operador. El parseo exige al
//! menos `apiKey` y `projectId`; el resto de los campos del objeto de
//! configuración típico se conservan si están presentes. La proyección
//! `ConfigDisplay` enmascara la clave de API y es lo único que llega a la
//! capa de presentación.

use conncheck_core::DiagnosticError;
use serde::{Deserialize, Serialize};

/// Configuración parseada y completa, encadenada hacia la inicialización.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedConfig {
    pub api_key: String,
    pub project_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_bucket: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messaging_sender_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
}

/// Forma laxa para poder diagnosticar campos faltantes con mensaje propio en
/// lugar del error genérico de serde.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConfig {
    #[serde(default)]
    api_key: Option<String>,
    #[serde(default)]
    project_id: Option<String>,
    #[serde(default)]
    auth_domain: Option<String>,
    #[serde(default)]
    storage_bucket: Option<String>,
    #[serde(default)]
    messaging_sender_id: Option<String>,
    #[serde(default)]
    app_id: Option<String>,
}

/// Parsea y valida el texto de configuración.
///
/// Falla con `DiagnosticError::Config` si el JSON está malformado o si falta
/// (o está vacío) alguno de los campos requeridos, citando cuáles.
pub fn validate_config(raw: &str) -> Result<ParsedConfig, DiagnosticError> {
    let parsed: RawConfig = serde_json::from_str(raw)
        .map_err(|e| DiagnosticError::Config(format!("JSON inválido: {e}")))?;

    let mut missing = Vec::new();
    if parsed.api_key.as_deref().unwrap_or("").is_empty() {
        missing.push("'apiKey'");
    }
    if parsed.project_id.as_deref().unwrap_or("").is_empty() {
        missing.push("'projectId'");
    }
    if !missing.is_empty() {
        return Err(DiagnosticError::Config(format!(
            "El JSON debe contener al menos 'apiKey' y 'projectId' (falta: {})",
            missing.join(", ")
        )));
    }

    Ok(ParsedConfig { api_key: parsed.api_key.unwrap(),
                      project_id: parsed.project_id.unwrap(),
                      auth_domain: parsed.auth_domain,
                      storage_bucket: parsed.storage_bucket,
                      messaging_sender_id: parsed.messaging_sender_id,
                      app_id: parsed.app_id })
}

/// Proyección segura para mostrar: clave de API enmascarada, el resto igual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDisplay {
    pub api_key: String,
    pub project_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_bucket: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messaging_sender_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
}

impl From<&ParsedConfig> for ConfigDisplay {
    fn from(cfg: &ParsedConfig) -> Self {
        Self { api_key: mask_key(&cfg.api_key),
               project_id: cfg.project_id.clone(),
               auth_domain: cfg.auth_domain.clone(),
               storage_bucket: cfg.storage_bucket.clone(),
               messaging_sender_id: cfg.messaging_sender_id.clone(),
               app_id: cfg.app_id.clone() }
    }
}

/// Conserva sólo los extremos de la clave; claves cortas se ocultan enteras.
/// Opera sobre caracteres, nunca sobre índices de bytes.
fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() > 12 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    } else {
        "***".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_payload_parses_and_keeps_optionals() {
        let cfg = validate_config(
            r#"{"apiKey":"AIzaSyLOCALTESTKEY000","projectId":"demo-1","authDomain":"demo-1.example.app"}"#,
        )
        .expect("valid config");
        assert_eq!(cfg.project_id, "demo-1");
        assert_eq!(cfg.auth_domain.as_deref(), Some("demo-1.example.app"));
        assert_eq!(cfg.storage_bucket, None);
    }

    #[test]
    fn malformed_json_reports_invalid_input() {
        let err = validate_config("not valid json").expect_err("must fail");
        match err {
            DiagnosticError::Config(msg) => assert!(msg.starts_with("JSON inválido:")),
            other => panic!("taxonomía inesperada: {other:?}"),
        }
    }

    #[test]
    fn missing_project_id_is_cited() {
        let err = validate_config(r#"{"apiKey":"X"}"#).expect_err("must fail");
        match err {
            DiagnosticError::Config(msg) => assert!(msg.contains("'projectId'")),
            other => panic!("taxonomía inesperada: {other:?}"),
        }
    }

    #[test]
    fn empty_required_field_counts_as_missing() {
        let err = validate_config(r#"{"apiKey":"","projectId":"p"}"#).expect_err("must fail");
        match err {
            DiagnosticError::Config(msg) => assert!(msg.contains("'apiKey'")),
            other => panic!("taxonomía inesperada: {other:?}"),
        }
    }

    #[test]
    fn short_multibyte_key_is_fully_hidden() {
        let cfg = validate_config(r#"{"apiKey":"€€€€€","projectId":"demo"}"#)
            .expect("valid config");
        let display = ConfigDisplay::from(&cfg);
        assert_eq!(display.api_key, "***");
    }

    #[test]
    fn long_multibyte_key_masks_on_char_boundaries() {
        let cfg = validate_config(r#"{"apiKey":"ñañañañañañaña","projectId":"demo"}"#)
            .expect("valid config");
        let display = ConfigDisplay::from(&cfg);
        assert_eq!(display.api_key, "ñaña...ñaña");
    }

    #[test]
    fn display_projection_masks_only_the_api_key() {
        let cfg = validate_config(r#"{"apiKey":"AIzaSyLOCALTESTKEY000","projectId":"demo-1"}"#)
            .expect("valid config");
        let display = ConfigDisplay::from(&cfg);
        assert_eq!(display.api_key, "AIza...Y000");
        assert_eq!(display.project_id, "demo-1");
    }
}
