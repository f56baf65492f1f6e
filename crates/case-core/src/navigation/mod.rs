//! Motor de navegación: calcula, para un slug pedido, la posición dentro del
//! flujo, los pasos anterior/siguiente y sus URLs.
//!
//! "Completado" es puramente posicional: todo paso anterior al actual se
//! marca como completado, se hayan guardado o no sus datos. Esto permite
//! retomar el wizard desde cualquier slug sin estado de sesión.

mod urls;

use case_domain::CaseId;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::FlowError;
use crate::registry::PageRegistry;

pub use urls::UrlScheme;

/// Un paso del flujo tal como se muestra en la barra de progreso.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepLink {
    pub slug: String,
    pub url: String,
    pub title: String,
    pub completed: bool,
    pub current: bool,
}

/// Contexto de navegación derivado por petición; nunca se persiste.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationContext {
    pub steps: Vec<StepLink>,
    pub case_id: CaseId,
    pub page_name: String,
    pub index: usize,
    pub prev_slug: Option<String>,
    pub next_slug: Option<String>,
    pub prev_url: Option<String>,
    pub this_url: String,
    pub next_url: Option<String>,
}

fn opt(v: &Option<String>) -> Value {
    v.as_ref().map(|s| Value::String(s.clone())).unwrap_or(Value::Null)
}

impl NavigationContext {
    pub fn is_first(&self) -> bool {
        self.prev_slug.is_none()
    }

    pub fn is_last(&self) -> bool {
        self.next_slug.is_none()
    }

    /// Claves de navegación que se exponen a las plantillas.
    pub fn to_context(&self) -> Map<String, Value> {
        let steps = self.steps
                        .iter()
                        .map(|s| {
                            serde_json::json!({
                                "slug": s.slug,
                                "url": s.url,
                                "title": s.title,
                                "completed": s.completed,
                                "current": s.current,
                            })
                        })
                        .collect();
        let mut m = Map::new();
        m.insert("steps".into(), Value::Array(steps));
        m.insert("case_id".into(), Value::String(self.case_id.to_string()));
        m.insert("page_name".into(), Value::String(self.page_name.clone()));
        m.insert("index".into(), Value::from(self.index));
        m.insert("prev_slug".into(), opt(&self.prev_slug));
        m.insert("next_slug".into(), opt(&self.next_slug));
        m.insert("prev_url".into(), opt(&self.prev_url));
        m.insert("this_url".into(), Value::String(self.this_url.clone()));
        m.insert("next_url".into(), opt(&self.next_url));
        m
    }
}

/// Calcula la navegación para `slug` dentro de `registry`.
///
/// Sólo falla si el slug no está registrado; pedir el primer o el último
/// paso nunca es un error.
pub fn compute_navigation(registry: &PageRegistry,
                          urls: &UrlScheme,
                          case_id: CaseId,
                          slug: &str)
                          -> Result<NavigationContext, FlowError> {
    let order = registry.order();
    let index = registry.position(slug).ok_or_else(|| FlowError::UnknownPage(slug.to_string()))?;

    let prev_slug = index.checked_sub(1).map(|i| order[i].to_string());
    let next_slug = order.get(index + 1).map(|s| s.to_string());

    let steps = registry.pages()
                        .enumerate()
                        .map(|(i, p)| StepLink { slug: p.slug().to_string(),
                                                 url: urls.page_url(case_id, p.slug()),
                                                 title: p.title().to_string(),
                                                 completed: i < index,
                                                 current: i == index })
                        .collect();

    debug!("navigation {}:{} -> index {} of {}", registry.name(), slug, index, order.len());

    Ok(NavigationContext { steps,
                           case_id,
                           page_name: slug.to_string(),
                           index,
                           prev_url: urls.maybe_page_url(case_id, prev_slug.as_deref()),
                           this_url: urls.page_url(case_id, slug),
                           next_url: urls.maybe_page_url(case_id, next_slug.as_deref()),
                           prev_slug,
                           next_slug })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::StaticPage;

    fn registry(titles: &[&str]) -> PageRegistry {
        let mut r = PageRegistry::new("nav");
        for t in titles {
            r.register(Box::new(StaticPage::new(t).unwrap())).unwrap();
        }
        r
    }

    #[test]
    fn middle_step_has_both_neighbours() {
        let r = registry(&["Intro", "Name", "End"]);
        let urls = UrlScheme::new("/case");
        let id = CaseId::new();
        let nav = compute_navigation(&r, &urls, id, "name").unwrap();
        assert_eq!(nav.index, 1);
        assert_eq!(nav.prev_slug.as_deref(), Some("intro"));
        assert_eq!(nav.next_url, Some(format!("/case/{id}/end/")));
        assert_eq!(nav.this_url, format!("/case/{id}/name/"));
        let flags: Vec<(bool, bool)> = nav.steps.iter().map(|s| (s.completed, s.current)).collect();
        assert_eq!(flags, vec![(true, false), (false, true), (false, false)]);
    }

    #[test]
    fn single_page_flow_has_no_neighbours() {
        let r = registry(&["Only"]);
        let nav = compute_navigation(&r, &UrlScheme::new("/x"), CaseId::new(), "only").unwrap();
        assert!(nav.is_first() && nav.is_last());
        assert_eq!(nav.prev_url, None);
        assert_eq!(nav.next_url, None);
        assert!(!nav.steps[0].completed);
    }

    #[test]
    fn context_keys_are_exposed() {
        let r = registry(&["Intro", "End"]);
        let nav = compute_navigation(&r, &UrlScheme::new("/case"), CaseId::new(), "intro").unwrap();
        let ctx = nav.to_context();
        assert_eq!(ctx["index"], Value::from(0));
        assert_eq!(ctx["prev_url"], Value::Null);
        assert_eq!(ctx["steps"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn unregistered_slug_errors() {
        let r = registry(&["Intro"]);
        let err = compute_navigation(&r, &UrlScheme::new("/case"), CaseId::new(), "ghost").unwrap_err();
        assert_eq!(err, FlowError::UnknownPage("ghost".into()));
    }
}
