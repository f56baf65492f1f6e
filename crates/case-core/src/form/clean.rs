//! Limpieza de un campo individual según su `FieldKind`.

use case_domain::{FieldKind, FieldSpec};
use chrono::NaiveDate;
use serde_json::Value;

const REQUIRED: &str = "This field is required.";

fn invalid_choice(value: &str) -> String {
    format!("Select a valid choice. {value} is not one of the available choices.")
}

/// Devuelve el valor limpio o la lista de mensajes de error del campo.
pub(crate) fn clean_field(spec: &FieldSpec, raw: &[String]) -> Result<Value, Vec<String>> {
    let first = raw.first().map(|s| s.trim()).unwrap_or("");
    match &spec.kind {
        FieldKind::Text { max_length } => {
            if first.is_empty() {
                return if spec.required { Err(vec![REQUIRED.into()]) } else { Ok(Value::String(String::new())) };
            }
            let len = first.chars().count();
            match max_length {
                Some(max) if len > *max => {
                    Err(vec![format!("Ensure this value has at most {max} characters (it has {len}).")])
                }
                _ => Ok(Value::String(first.to_string())),
            }
        }
        FieldKind::LongText => {
            if first.is_empty() && spec.required {
                Err(vec![REQUIRED.into()])
            } else {
                Ok(Value::String(first.to_string()))
            }
        }
        FieldKind::Integer => {
            if first.is_empty() {
                return if spec.required { Err(vec![REQUIRED.into()]) } else { Ok(Value::Null) };
            }
            first.parse::<i64>()
                 .map(Value::from)
                 .map_err(|_| vec!["Enter a whole number.".to_string()])
        }
        FieldKind::Boolean => {
            let checked = !matches!(first.to_ascii_lowercase().as_str(), "" | "false" | "off" | "0");
            if !checked && spec.required {
                Err(vec![REQUIRED.into()])
            } else {
                Ok(Value::Bool(checked))
            }
        }
        FieldKind::Date => {
            if first.is_empty() {
                return if spec.required { Err(vec![REQUIRED.into()]) } else { Ok(Value::Null) };
            }
            NaiveDate::parse_from_str(first, "%Y-%m-%d").map(|d| Value::String(d.format("%Y-%m-%d").to_string()))
                                                        .map_err(|_| vec!["Enter a valid date.".to_string()])
        }
        FieldKind::Choice(options) => {
            if first.is_empty() {
                return if spec.required { Err(vec![REQUIRED.into()]) } else { Ok(Value::Null) };
            }
            if options.iter().any(|o| o == first) {
                Ok(Value::String(first.to_string()))
            } else {
                Err(vec![invalid_choice(first)])
            }
        }
        FieldKind::MultiChoice(options) => {
            let picked: Vec<&str> = raw.iter().map(|s| s.trim()).filter(|s| !s.is_empty()).collect();
            if picked.is_empty() && spec.required {
                return Err(vec![REQUIRED.into()]);
            }
            let errors: Vec<String> = picked.iter()
                                            .filter(|p| !options.iter().any(|o| o == *p))
                                            .map(|p| invalid_choice(p))
                                            .collect();
            if errors.is_empty() {
                Ok(Value::Array(picked.into_iter().map(|p| Value::String(p.to_string())).collect()))
            } else {
                Err(errors)
            }
        }
    }
}
