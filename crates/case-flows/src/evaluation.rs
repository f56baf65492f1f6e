//! Flujo "evaluation". Sin documento final: el último paso es estático.

use case_core::{PageRegistry, RegistryError};
use case_domain::evaluation::{self, SCHEMA_NAME, TITLE_FIELD};

use crate::FlowDescriptor;

pub const EVALUATION: FlowDescriptor = FlowDescriptor { name: SCHEMA_NAME,
                                                       prefix: "/evaluation",
                                                       schema: evaluation::schema,
                                                       title_field: TITLE_FIELD };

pub fn evaluation_flow() -> Result<PageRegistry, RegistryError> {
    PageRegistry::builder(SCHEMA_NAME, evaluation::schema().clone())
        .add_static("intro")
        .add_form("name", &["name"])
        .add_form("description", &["description", "review_date"])
        .add_static("end")
        .build()
}
