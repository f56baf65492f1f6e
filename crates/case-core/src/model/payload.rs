use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Datos crudos enviados por un formulario HTML.
///
/// Multimapa ordenado: un `<select multiple>` repite la misma clave una vez
/// por opción marcada.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPayload {
    values: IndexMap<String, Vec<String>>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
        where I: IntoIterator<Item = (K, V)>,
              K: Into<String>,
              V: Into<String>
    {
        let mut payload = Self::new();
        for (k, v) in pairs {
            payload.push(k, v);
        }
        payload
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.entry(key.into()).or_default().push(value.into());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Primer valor enviado para `key`.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(|v| v.first()).map(String::as_str)
    }

    pub fn all(&self, key: &str) -> &[String] {
        self.values.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Eco del payload tal como llegó: un valor -> string, varios -> array.
    pub fn to_json(&self) -> Value {
        let mut out = Map::new();
        for (k, vs) in &self.values {
            let v = match vs.as_slice() {
                [single] => Value::String(single.clone()),
                many => Value::Array(many.iter().cloned().map(Value::String).collect()),
            };
            out.insert(k.clone(), v);
        }
        Value::Object(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn repeated_keys_are_grouped_in_order() {
        let p = FormPayload::from_pairs([("locations", "leeds"), ("name", "x"), ("locations", "york")]);
        assert_eq!(p.all("locations"), ["leeds".to_string(), "york".to_string()]);
        assert_eq!(p.first("name"), Some("x"));
        assert_eq!(p.first("nope"), None);
        assert_eq!(p.to_json(), json!({"locations": ["leeds", "york"], "name": "x"}));
    }
}
