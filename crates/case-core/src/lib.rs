//! case-core: controlador lineal del wizard de casos.
//!
//! - `registry`: registro ordenado de páginas (el orden de registro es el
//!   orden del wizard).
//! - `page`: variantes de página (estática, formulario, acción propia).
//! - `navigation`: índice, anterior/siguiente y flags por paso.
//! - `dispatcher`: entrada por petición (caso, slug) -> render o redirect.
//! - `form`: validadores estrechos construidos desde el esquema del caso.
//! - `store`: contrato del colaborador de persistencia.
pub mod dispatcher;
pub mod errors;
pub mod form;
pub mod hashing;
pub mod model;
pub mod navigation;
pub mod page;
pub mod registry;
pub mod store;

pub use dispatcher::FlowDispatcher;
pub use errors::{FlowError, RegistryError, StoreError};
pub use form::{build_validator, FieldErrors, Validator};
pub use model::{FormPayload, PageOutcome, RequestMethod};
pub use navigation::{compute_navigation, NavigationContext, StepLink, UrlScheme};
pub use page::{CustomActionPage, FormPage, Page, PageDefinition, PageKind, PageRequest, StaticPage};
pub use registry::{slugify, PageRegistry, RegistryBuilder};
pub use store::{CaseStore, InMemoryCaseStore};
