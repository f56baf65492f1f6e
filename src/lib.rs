//! caseflow
//!
//! Aplicación de wizards lineales para casos de contratación y evaluación:
//! - `config`: configuración desde `.env` y variables de entorno.
//! - `app`: ensamblado de store, renderizador, flujos y router.
//! - `server`: servidor HTTP con apagado ordenado.
//! - `errors`: errores de arranque.

pub mod app;
pub mod config;
pub mod errors;
pub mod server;

pub use app::{build_app, build_flows, build_renderer, build_store, FlowStores};
pub use config::AppConfig;
pub use errors::{AppError, AppResult};
