//! Carga de configuración del store desde variables de entorno.
//! Usa `CASEFLOW_DATA_DIR`; si no está definida se trabaja en memoria.

use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;
use once_cell::sync::Lazy;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

pub const DATA_DIR_VAR: &str = "CASEFLOW_DATA_DIR";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directorio de datos; `None` selecciona el store en memoria.
    pub data_dir: Option<PathBuf>,
}

impl StoreConfig {
    pub fn from_env() -> Self {
        Lazy::force(&DOTENV_LOADED);
        let data_dir = env::var(DATA_DIR_VAR).ok()
                                             .map(|v| v.trim().to_string())
                                             .filter(|v| !v.is_empty())
                                             .map(PathBuf::from);
        Self { data_dir }
    }
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}
