//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) una sola vez y compone la configuración
//! de cada colaborador (store, renderizador) con la del servidor HTTP.

use std::env;
use std::net::SocketAddr;

use case_persistence::StoreConfig;
use case_render::RenderConfig;

use crate::errors::{AppError, AppResult};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8010";
pub const DEFAULT_PUBLIC_URL: &str = "http://localhost:8010";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Dirección en la que escucha el servidor (`CASEFLOW_BIND_ADDR`).
    pub bind_addr: SocketAddr,
    /// URL base desde la que el renderizador pide las vistas de impresión
    /// (`CASEFLOW_PUBLIC_URL`).
    pub public_url: String,
    pub store: StoreConfig,
    pub render: RenderConfig,
}

fn parse_addr(raw: &str) -> AppResult<SocketAddr> {
    raw.parse().map_err(|e| AppError::Config(format!("dirección inválida '{raw}': {e}")))
}

impl AppConfig {
    pub fn from_env() -> AppResult<Self> {
        case_persistence::init_dotenv();
        let bind = env::var("CASEFLOW_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let public_url = env::var("CASEFLOW_PUBLIC_URL").ok()
                                                        .filter(|v| !v.trim().is_empty())
                                                        .unwrap_or_else(|| DEFAULT_PUBLIC_URL.to_string());
        Ok(Self { bind_addr: parse_addr(&bind)?,
                  public_url,
                  store: StoreConfig::from_env(),
                  render: RenderConfig::from_env() })
    }

    /// Sustituye la dirección de escucha (p.ej. desde la línea de comandos).
    pub fn with_bind_addr(mut self, raw: &str) -> AppResult<Self> {
        self.bind_addr = parse_addr(raw)?;
        Ok(self)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { bind_addr: SocketAddr::from(([127, 0, 0, 1], 8010)),
               public_url: DEFAULT_PUBLIC_URL.to_string(),
               store: StoreConfig::default(),
               render: RenderConfig::default() }
    }
}
