//! Esquema del caso "evaluation".

use once_cell::sync::Lazy;

use crate::options::GRADES;
use crate::{CaseSchema, FieldSpec};

pub const SCHEMA_NAME: &str = "evaluation";

pub const TITLE_FIELD: &str = "name";

pub static EVALUATION_SCHEMA: Lazy<CaseSchema> = Lazy::new(|| {
    CaseSchema::new(SCHEMA_NAME,
                    vec![FieldSpec::text("name", "Evaluation name", 256).required(),
                         FieldSpec::text("hrbp", "HR business partner", 256),
                         FieldSpec::choice("grade", "Grade", GRADES.values()),
                         FieldSpec::text("title", "Job title", 256),
                         FieldSpec::long_text("description", "Description"),
                         FieldSpec::date("review_date", "Review date")])
});

pub fn schema() -> &'static CaseSchema {
    &EVALUATION_SCHEMA
}
