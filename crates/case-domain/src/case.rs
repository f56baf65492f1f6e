use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::{CaseSchema, DomainError};

/// Identificador estable de un caso (solicitud o evaluación).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaseId(Uuid);

impl CaseId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CaseId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for CaseId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CaseId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self).map_err(|_| DomainError::InvalidCaseId(s.to_string()))
    }
}

/// Registro que se va completando a lo largo del wizard.
///
/// El caso no conoce su esquema: guarda un mapa nombre de campo -> valor JSON
/// y el flujo decide qué campos edita cada página. El documento generado
/// (PDF) se mantiene aparte de los campos y no se serializa junto a ellos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    id: CaseId,
    owner: String,
    #[serde(default)]
    fields: Map<String, Value>,
    #[serde(skip)]
    document: Option<Vec<u8>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Case {
    pub fn new(owner: &str) -> Self {
        Self::with_id(CaseId::new(), owner)
    }

    pub fn with_id(id: CaseId, owner: &str) -> Self {
        let now = Utc::now();
        Case { id,
               owner: owner.to_string(),
               fields: Map::new(),
               document: None,
               created_at: now,
               updated_at: now }
    }

    pub fn id(&self) -> CaseId { self.id }
    pub fn owner(&self) -> &str { &self.owner }
    pub fn fields(&self) -> &Map<String, Value> { &self.fields }
    pub fn field(&self, name: &str) -> Option<&Value> { self.fields.get(name) }
    pub fn created_at(&self) -> DateTime<Utc> { self.created_at }
    pub fn updated_at(&self) -> DateTime<Utc> { self.updated_at }

    /// Valor del campo como texto plano; vacío si no existe o no es string.
    pub fn field_str(&self, name: &str) -> &str {
        self.fields.get(name).and_then(Value::as_str).unwrap_or("")
    }

    /// Actualización parcial: sólo se tocan las claves recibidas.
    pub fn apply_fields(&mut self, values: Map<String, Value>) {
        for (k, v) in values {
            self.fields.insert(k, v);
        }
        self.updated_at = Utc::now();
    }

    pub fn document(&self) -> Option<&[u8]> { self.document.as_deref() }

    /// Adjunta un documento ya existente sin tocar `updated_at` (rehidratación
    /// desde almacenamiento).
    pub fn with_document(mut self, bytes: Vec<u8>) -> Self {
        self.document = Some(bytes);
        self
    }

    pub fn set_document(&mut self, bytes: Vec<u8>) {
        self.document = Some(bytes);
        self.updated_at = Utc::now();
    }

    /// Equivalente a volcar el caso completo: `id` más todos los campos del
    /// esquema (los ausentes como `null`).
    pub fn to_context(&self, schema: &CaseSchema) -> Value {
        let mut out = Map::new();
        out.insert("id".into(), Value::String(self.id.to_string()));
        for spec in schema.fields() {
            out.insert(spec.name.clone(), self.fields.get(&spec.name).cloned().unwrap_or(Value::Null));
        }
        Value::Object(out)
    }

    /// Proyección del caso sobre un subconjunto de campos (más `id`).
    pub fn project<'a, I>(&self, names: I) -> Value
        where I: IntoIterator<Item = &'a str>
    {
        let mut out = Map::new();
        out.insert("id".into(), Value::String(self.id.to_string()));
        for name in names {
            out.insert(name.to_string(), self.fields.get(name).cloned().unwrap_or(Value::Null));
        }
        Value::Object(out)
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<case: {}, owner: {}>", self.id, self.owner)
    }
}
