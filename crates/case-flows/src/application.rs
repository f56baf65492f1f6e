//! Flujo "application": business case de contratación.

use std::sync::Arc;

use case_core::{PageRegistry, RegistryError, UrlScheme};
use case_domain::application::{self, SCHEMA_NAME, TITLE_FIELD};
use case_domain::options::{DDAT_FAMILIES, FUNDING_SOURCES, GRADES, LOCATIONS, LONDON_REASONS, RECRUITMENT_MECHANISMS,
                           RECRUITMENT_TYPES};
use case_render::DocumentRenderer;
use serde_json::json;

use crate::{DocumentAction, FlowDescriptor};

pub const APPLICATION: FlowDescriptor = FlowDescriptor { name: SCHEMA_NAME,
                                                        prefix: "/case",
                                                        schema: application::schema,
                                                        title_field: TITLE_FIELD };

/// Construye el registro del flujo. El paso `end` genera el documento
/// pidiendo a `renderer` la vista de impresión publicada en `public_url`.
pub fn application_flow(renderer: Arc<dyn DocumentRenderer>, public_url: &str) -> Result<PageRegistry, RegistryError> {
    let action = Arc::new(DocumentAction::new(renderer,
                                              public_url,
                                              UrlScheme::new(APPLICATION.prefix),
                                              application::schema()));

    PageRegistry::builder(SCHEMA_NAME, application::schema().clone())
        .add_static("Intro")
        .add_form("Name", &["name"])
        .add_form_with("Exemption", &["hrbp", "grade", "title"], json!({ "grades": GRADES.to_json() }))
        .add_form("Establishment", &["establishment"])
        .add_form("Impact", &["impact_statement"])
        .add_form_with("justification",
                       &["ddat_role", "ddat_family", "funding_source", "recruitment_type", "recruitment_mechanism"],
                       json!({
                           "ddat_families": DDAT_FAMILIES.to_json(),
                           "funding_sources": FUNDING_SOURCES.to_json(),
                           "recruitment_types": RECRUITMENT_TYPES.to_json(),
                           "recruitment_mechanisms": RECRUITMENT_MECHANISMS.to_json(),
                       }))
        .add_form_with("Location",
                       &["location_strategy", "locations", "london_reason"],
                       json!({
                           "london_reasons": LONDON_REASONS.to_json(),
                           "locations": LOCATIONS.to_json(),
                       }))
        .add_form("SCS roles", &["scs_adverts", "scs_assignments_lengths"])
        .add_custom_action("End", move |req| {
            let action = Arc::clone(&action);
            async move { action.run(req).await }
        })
        .build()
}
