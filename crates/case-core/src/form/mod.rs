//! Validación de formularios parciales sobre un caso.
//!
//! En lugar de sintetizar una clase de formulario por página, el esquema del
//! caso se estrecha a los campos que edita cada página con
//! `build_validator`, una función pura evaluada al construir el registro.

mod clean;

use std::collections::BTreeMap;

use case_domain::{CaseSchema, DomainError, FieldSpec};
use serde_json::{Map, Value};

use crate::model::FormPayload;

/// Mensajes de error por campo.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Validador estrecho: sólo conoce los campos de una página.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validator {
    fields: Vec<FieldSpec>,
}

/// Construye el validador de una página a partir del esquema global.
///
/// Falla con `DomainError::UnknownField` si algún nombre no pertenece al
/// esquema; los duplicados se ignoran conservando la primera aparición.
pub fn build_validator(schema: &CaseSchema, field_names: &[&str]) -> Result<Validator, DomainError> {
    let mut fields: Vec<FieldSpec> = Vec::with_capacity(field_names.len());
    for name in field_names {
        let spec = schema.require_field(name)?;
        if !fields.iter().any(|f| f.name == spec.name) {
            fields.push(spec.clone());
        }
    }
    Ok(Validator { fields })
}

impl Validator {
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Valida el payload y devuelve los valores limpios de los campos del
    /// validador. Las claves del payload ajenas al validador se ignoran.
    pub fn validate(&self, payload: &FormPayload) -> Result<Map<String, Value>, FieldErrors> {
        let mut cleaned = Map::new();
        let mut errors = FieldErrors::new();
        for spec in &self.fields {
            match clean::clean_field(spec, payload.all(&spec.name)) {
                Ok(v) => {
                    cleaned.insert(spec.name.clone(), v);
                }
                Err(msgs) => {
                    errors.insert(spec.name.clone(), msgs);
                }
            }
        }
        if errors.is_empty() {
            Ok(cleaned)
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use case_domain::FieldSpec;
    use serde_json::json;

    fn schema() -> CaseSchema {
        CaseSchema::new("test",
                        vec![FieldSpec::text("name", "Name", 5).required(),
                             FieldSpec::integer("count", "Count"),
                             FieldSpec::boolean("agree", "Agree"),
                             FieldSpec::date("when", "When"),
                             FieldSpec::choice("colour", "Colour", vec!["red".into(), "blue".into()]).required(),
                             FieldSpec::multi_choice("places", "Places", vec!["a".into(), "b".into()]),
                             FieldSpec::long_text("notes", "Notes")])
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = build_validator(&schema(), &["name", "ghost"]).unwrap_err();
        assert!(matches!(err, DomainError::UnknownField { field, .. } if field == "ghost"));
    }

    #[test]
    fn duplicates_collapse() {
        let v = build_validator(&schema(), &["name", "name", "count"]).unwrap();
        assert_eq!(v.field_names().collect::<Vec<_>>(), vec!["name", "count"]);
    }

    #[test]
    fn valid_payload_is_cleaned() {
        let v = build_validator(&schema(), &["name", "count", "agree", "when", "colour", "places", "notes"]).unwrap();
        let payload = FormPayload::from_pairs([("name", " Bob "),
                                               ("count", "12"),
                                               ("agree", "on"),
                                               ("when", "2024-02-29"),
                                               ("colour", "red"),
                                               ("places", "a"),
                                               ("places", "b"),
                                               ("csrfmiddlewaretoken", "zzz")]);
        let cleaned = v.validate(&payload).unwrap();
        assert_eq!(Value::Object(cleaned),
                   json!({"name": "Bob", "count": 12, "agree": true, "when": "2024-02-29",
                          "colour": "red", "places": ["a", "b"], "notes": ""}));
    }

    #[test]
    fn missing_optional_values_become_empty() {
        let v = build_validator(&schema(), &["count", "agree", "when", "places"]).unwrap();
        let cleaned = v.validate(&FormPayload::new()).unwrap();
        assert_eq!(Value::Object(cleaned),
                   json!({"count": null, "agree": false, "when": null, "places": []}));
    }

    #[test]
    fn invalid_payload_reports_every_field() {
        let v = build_validator(&schema(), &["name", "count", "when", "colour", "places"]).unwrap();
        let payload = FormPayload::from_pairs([("name", "toolong"),
                                               ("count", "1.5"),
                                               ("when", "2023-02-30"),
                                               ("colour", ""),
                                               ("places", "z")]);
        let errors = v.validate(&payload).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert_eq!(errors["name"], vec!["Ensure this value has at most 5 characters (it has 7).".to_string()]);
        assert_eq!(errors["count"], vec!["Enter a whole number.".to_string()]);
        assert_eq!(errors["when"], vec!["Enter a valid date.".to_string()]);
        assert_eq!(errors["colour"], vec!["This field is required.".to_string()]);
        assert_eq!(errors["places"],
                   vec!["Select a valid choice. z is not one of the available choices.".to_string()]);
    }
}
