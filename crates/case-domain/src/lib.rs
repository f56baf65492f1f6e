// case-domain library entry point
pub mod application;
pub mod case;
pub mod error;
pub mod evaluation;
pub mod options;
pub mod schema;
pub use case::{Case, CaseId};
pub use error::DomainError;
pub use options::OptionList;
pub use schema::{CaseSchema, FieldKind, FieldSpec};
