//! Tipos de intercambio entre el dispatcher, las páginas y la capa HTTP.

mod outcome;
mod payload;

pub use outcome::{PageOutcome, RequestMethod};
pub use payload::FormPayload;
