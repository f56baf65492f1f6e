use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tipo de petición entrante: lectura o envío de formulario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestMethod {
    Read,
    Submit,
}

/// Resultado abstracto de atender una página.
#[derive(Debug, Clone, PartialEq)]
pub enum PageOutcome {
    /// Pintar `template` con el contexto dado.
    Render { template: String, context: Value },
    /// Redirigir (normalmente al siguiente paso).
    Redirect { url: String },
}

impl PageOutcome {
    pub fn render(template: impl Into<String>, context: Value) -> Self {
        Self::Render { template: template.into(), context }
    }

    pub fn redirect(url: impl Into<String>) -> Self {
        Self::Redirect { url: url.into() }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirect { .. })
    }

    /// Contexto de render, si lo hay.
    pub fn context(&self) -> Option<&Value> {
        match self {
            Self::Render { context, .. } => Some(context),
            Self::Redirect { .. } => None,
        }
    }
}
