//! Constantes del núcleo del harness.
//!
//! Agrupa valores estáticos que participan en el fingerprint del registro y
//! en la compatibilidad entre versiones. Un cambio de versión del harness
//! invalida los hashes de registro aunque las definiciones no cambien.

/// Versión lógica del harness. Entra en el cálculo del `registry_hash`.
/// Mantener estable mientras no haya cambios incompatibles.
pub const HARNESS_VERSION: &str = "D1.0";
