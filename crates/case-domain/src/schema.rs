//! Esquema de campos de un caso.
//!
//! Cada flujo declara aquí las reglas de validación de sus campos una sola
//! vez; las páginas de formulario sólo nombran qué campos editan y heredan
//! estas reglas.

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Tipos de dato soportados por los campos del caso.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    /// Texto de una línea con longitud máxima opcional.
    Text { max_length: Option<usize> },
    /// Texto libre multilínea.
    LongText,
    Integer,
    /// Checkbox: ausente en el payload equivale a `false`.
    Boolean,
    /// Fecha ISO `YYYY-MM-DD`.
    Date,
    /// Un valor de una lista cerrada.
    Choice(Vec<String>),
    /// Cero o más valores de una lista cerrada.
    MultiChoice(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub fn new(name: &str, label: &str, kind: FieldKind) -> Self {
        Self { name: name.to_string(),
               label: label.to_string(),
               kind,
               required: false }
    }

    pub fn text(name: &str, label: &str, max_length: usize) -> Self {
        Self::new(name, label, FieldKind::Text { max_length: Some(max_length) })
    }

    pub fn long_text(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::LongText)
    }

    pub fn integer(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Integer)
    }

    pub fn boolean(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Boolean)
    }

    pub fn date(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Date)
    }

    pub fn choice(name: &str, label: &str, values: Vec<String>) -> Self {
        Self::new(name, label, FieldKind::Choice(values))
    }

    pub fn multi_choice(name: &str, label: &str, values: Vec<String>) -> Self {
        Self::new(name, label, FieldKind::MultiChoice(values))
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Conjunto ordenado de campos conocidos para un tipo de caso.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseSchema {
    name: String,
    fields: Vec<FieldSpec>,
}

impl CaseSchema {
    pub fn new(name: &str, fields: Vec<FieldSpec>) -> Self {
        Self { name: name.to_string(), fields }
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn fields(&self) -> &[FieldSpec] { &self.fields }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Igual que `field` pero como error de dominio si el nombre no existe.
    pub fn require_field(&self, name: &str) -> Result<&FieldSpec, DomainError> {
        self.field(name).ok_or_else(|| DomainError::UnknownField { schema: self.name.clone(),
                                                                    field: name.to_string() })
    }
}
