//! Paso terminal que genera el documento del caso.
//!
//! Pide al renderizador la vista de impresión del caso (servida por este
//! mismo proceso en `public_url`), guarda los bytes resultantes y muestra
//! la plantilla `end` con todos los datos del caso. Cada visita regenera el
//! documento; si el renderizado falla no se guarda nada y el documento
//! previo (si lo hay) se conserva.

use std::sync::Arc;

use case_core::{FlowError, PageOutcome, PageRequest, UrlScheme};
use case_domain::CaseSchema;
use case_render::DocumentRenderer;
use log::{info, warn};
use serde_json::Value;

#[derive(Clone)]
pub struct DocumentAction {
    renderer: Arc<dyn DocumentRenderer>,
    public_url: String,
    urls: UrlScheme,
    schema: &'static CaseSchema,
    template: String,
}

impl DocumentAction {
    pub fn new(renderer: Arc<dyn DocumentRenderer>,
               public_url: &str,
               urls: UrlScheme,
               schema: &'static CaseSchema)
               -> Self {
        Self { renderer,
               public_url: public_url.trim_end_matches('/').to_string(),
               urls,
               schema,
               template: "end".to_string() }
    }

    /// URL absoluta de la vista de impresión que consume el renderizador.
    pub fn print_url(&self, req: &PageRequest) -> String {
        format!("{}{}", self.public_url, self.urls.print_url(req.case.id()))
    }

    pub async fn run(&self, req: PageRequest) -> Result<PageOutcome, FlowError> {
        let case_id = req.case.id();
        let url = self.print_url(&req);
        let bytes = match self.renderer.render_url(&url).await {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("document for case {} failed: {}", case_id, e);
                return Err(FlowError::Render(e.to_string()));
            }
        };
        info!("document for case {} generated ({} bytes)", case_id, bytes.len());
        req.store.save_document(case_id, bytes).await?;

        let mut ctx = match req.case.to_context(self.schema) {
            Value::Object(map) => map,
            _ => serde_json::Map::new(),
        };
        ctx.extend(req.navigation.to_context());
        ctx.insert("download_url".into(), Value::String(self.urls.download_url(case_id)));
        Ok(PageOutcome::render(self.template.clone(), Value::Object(ctx)))
    }
}

impl std::fmt::Debug for DocumentAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentAction")
         .field("public_url", &self.public_url)
         .field("urls", &self.urls)
         .field("schema", &self.schema.name())
         .finish_non_exhaustive()
    }
}
