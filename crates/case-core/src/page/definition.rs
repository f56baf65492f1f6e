use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::RegistryError;
use crate::navigation::NavigationContext;
use crate::registry::slugify;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PageKind {
    Static,
    BoundForm,
    CustomAction,
}

/// Definición declarativa de una página: se construye una vez al armar el
/// registro y nunca se modifica.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageDefinition {
    pub slug: String,
    pub title: String,
    pub kind: PageKind,
    /// Campos editados (sólo `BoundForm`), en orden.
    pub field_names: Vec<String>,
    pub template: String,
    pub extra_context: Map<String, Value>,
}

impl PageDefinition {
    /// Deriva el slug del título; la plantilla por defecto se llama igual
    /// que el slug.
    pub fn new(title: &str, kind: PageKind) -> Result<Self, RegistryError> {
        let slug = slugify(title);
        if slug.is_empty() {
            return Err(RegistryError::EmptyTitle(title.to_string()));
        }
        Ok(Self { template: slug.clone(),
                  slug,
                  title: title.to_string(),
                  kind,
                  field_names: Vec::new(),
                  extra_context: Map::new() })
    }

    /// Mezcla un objeto JSON en el contexto extra; otros valores se ignoran.
    pub fn with_extra(mut self, extra: Value) -> Self {
        if let Value::Object(map) = extra {
            self.extra_context.extend(map);
        }
        self
    }

    /// Contexto base de render: `head` primero, luego la navegación y por
    /// último el contexto extra (que puede sobrescribir claves previas).
    pub(crate) fn context(&self, head: Map<String, Value>, navigation: &NavigationContext) -> Value {
        let mut ctx = head;
        ctx.extend(navigation.to_context());
        ctx.extend(self.extra_context.clone());
        Value::Object(ctx)
    }
}
