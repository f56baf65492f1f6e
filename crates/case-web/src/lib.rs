//! case-web
//!
//! Superficie HTTP de los flujos: cada `FlowDispatcher` se monta bajo su
//! prefijo con rutas de índice, alta de caso, pasos del wizard, vista de
//! impresión y descarga del documento.

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
pub mod templates;

pub use error::{ApiError, ApiResult};
pub use router::{app_router, flow_router};
pub use state::FlowState;
pub use templates::{JsonTemplateEngine, RenderedPage, TemplateEngine, TemplateError};

/// Cabecera de la que se toma la identidad del usuario.
pub const REMOTE_USER_HEADER: &str = "x-remote-user";

/// Propietario usado cuando la petición no trae identidad.
pub const ANONYMOUS: &str = "anonymous";
