//! case-render
//!
//! Conversión de una página HTML (la vista de impresión de un caso) a un
//! documento PDF mediante una herramienta externa.
//!
//! - `DocumentRenderer`: contrato mínimo `url -> bytes`.
//! - `CommandRenderer`: lanza el binario configurado como subproceso.
//! - `RenderPolicy`: envuelve cualquier renderer con timeout y reintentos.

pub mod command;
pub mod config;
pub mod error;
pub mod policy;

use async_trait::async_trait;

pub use command::CommandRenderer;
pub use config::RenderConfig;
pub use error::RenderError;
pub use policy::RenderPolicy;

/// Servicio que produce el documento de una URL.
#[async_trait]
pub trait DocumentRenderer: Send + Sync {
    async fn render_url(&self, url: &str) -> Result<Vec<u8>, RenderError>;
}
