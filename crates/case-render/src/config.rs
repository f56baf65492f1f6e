//! Configuración del renderizador desde variables de entorno.
//!
//! No carga `.env`: el binario lo hace una sola vez (`case_persistence::init_dotenv`)
//! antes de leer la configuración.

use std::env;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Binario HTML -> PDF (`CASEFLOW_RENDER_BIN`).
    pub bin: String,
    /// Límite por intento (`CASEFLOW_RENDER_TIMEOUT_SECS`).
    pub timeout: Duration,
    /// Reintentos tras el primer fallo (`CASEFLOW_RENDER_RETRIES`).
    pub retries: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { bin: "wkhtmltopdf".to_string(),
               timeout: Duration::from_secs(60),
               retries: 1 }
    }
}

impl RenderConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let bin = env::var("CASEFLOW_RENDER_BIN").ok().filter(|v| !v.trim().is_empty()).unwrap_or(defaults.bin);
        let timeout = env::var("CASEFLOW_RENDER_TIMEOUT_SECS").ok()
                                                             .and_then(|v| v.parse().ok())
                                                             .map(Duration::from_secs)
                                                             .unwrap_or(defaults.timeout);
        let retries = env::var("CASEFLOW_RENDER_RETRIES").ok().and_then(|v| v.parse().ok()).unwrap_or(defaults.retries);
        Self { bin, timeout, retries }
    }
}
