//! Esquema del caso "application" (business case de contratación).

use once_cell::sync::Lazy;

use crate::options::{DDAT_FAMILIES, FUNDING_SOURCES, GRADES, LOCATIONS, LONDON_REASONS, RECRUITMENT_MECHANISMS,
                     RECRUITMENT_TYPES};
use crate::{CaseSchema, FieldSpec};

pub const SCHEMA_NAME: &str = "application";

/// Campo "humano" usado para nombrar el documento descargable.
pub const TITLE_FIELD: &str = "name";

pub static APPLICATION_SCHEMA: Lazy<CaseSchema> = Lazy::new(|| {
    CaseSchema::new(SCHEMA_NAME,
                    vec![FieldSpec::text("name", "Application name", 256).required(),
                         FieldSpec::text("hrbp", "HR business partner", 256),
                         FieldSpec::choice("grade", "Grade", GRADES.values()).required(),
                         FieldSpec::text("title", "Job title", 256).required(),
                         FieldSpec::long_text("establishment", "Establishment"),
                         FieldSpec::long_text("impact_statement", "Impact statement").required(),
                         FieldSpec::text("ddat_role", "DDaT role", 256),
                         FieldSpec::choice("ddat_family", "DDaT family", DDAT_FAMILIES.values()),
                         FieldSpec::choice("funding_source", "Funding source", FUNDING_SOURCES.values()).required(),
                         FieldSpec::choice("recruitment_type", "Recruitment type", RECRUITMENT_TYPES.values()).required(),
                         FieldSpec::choice("recruitment_mechanism",
                                           "Recruitment mechanism",
                                           RECRUITMENT_MECHANISMS.values()),
                         FieldSpec::long_text("location_strategy", "Location strategy"),
                         FieldSpec::multi_choice("locations", "Locations", LOCATIONS.values()),
                         FieldSpec::choice("london_reason", "Reason for London", LONDON_REASONS.values()),
                         FieldSpec::integer("scs_adverts", "Number of SCS adverts"),
                         FieldSpec::text("scs_assignments_lengths", "Length of SCS assignments", 256)])
});

pub fn schema() -> &'static CaseSchema {
    &APPLICATION_SCHEMA
}
