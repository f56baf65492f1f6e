//! Listas cerradas de opciones usadas por los campos de selección.
//!
//! Cada lista sirve dos propósitos: alimentar la validación (`values`) y
//! exponerse a las plantillas como contexto extra (`to_json`).

use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionList {
    entries: &'static [(&'static str, &'static str)],
}

impl OptionList {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    pub fn values(&self) -> Vec<String> {
        self.entries.iter().map(|(v, _)| v.to_string()).collect()
    }

    pub fn label(&self, value: &str) -> Option<&'static str> {
        self.entries.iter().find(|(v, _)| *v == value).map(|(_, l)| *l)
    }

    pub fn to_json(&self) -> Value {
        Value::Array(self.entries
                         .iter()
                         .map(|(value, label)| json!({ "value": value, "label": label }))
                         .collect())
    }
}

pub const GRADES: OptionList = OptionList::new(&[("aa", "Administrative Assistant"),
                                                 ("ao", "Administrative Officer"),
                                                 ("eo", "Executive Officer"),
                                                 ("heo", "Higher Executive Officer"),
                                                 ("seo", "Senior Executive Officer"),
                                                 ("g7", "Grade 7"),
                                                 ("g6", "Grade 6"),
                                                 ("scs1", "Deputy Director (SCS1)"),
                                                 ("scs2", "Director (SCS2)")]);

pub const DDAT_FAMILIES: OptionList = OptionList::new(&[("architecture", "Architecture"),
                                                        ("data", "Data"),
                                                        ("it-operations", "IT operations"),
                                                        ("product-delivery", "Product and delivery"),
                                                        ("quality-assurance", "Quality assurance testing"),
                                                        ("software-development", "Software development"),
                                                        ("user-centred-design", "User-centred design")]);

pub const FUNDING_SOURCES: OptionList = OptionList::new(&[("programme", "Programme"),
                                                          ("admin", "Admin"),
                                                          ("other", "Other")]);

pub const RECRUITMENT_TYPES: OptionList = OptionList::new(&[("permanent", "Permanent"),
                                                            ("fixed-term", "Fixed term"),
                                                            ("loan", "Loan or secondment"),
                                                            ("contractor", "Contractor")]);

pub const RECRUITMENT_MECHANISMS: OptionList = OptionList::new(&[("external", "External advert"),
                                                                 ("internal", "Internal advert"),
                                                                 ("cross-government", "Cross-government advert"),
                                                                 ("managed-move", "Managed move")]);

pub const LONDON_REASONS: OptionList = OptionList::new(&[("stakeholders", "Proximity to stakeholders"),
                                                         ("ministers", "Ministerial or private office role"),
                                                         ("team", "Rest of the team is London based"),
                                                         ("other", "Other")]);

pub const LOCATIONS: OptionList = OptionList::new(&[("london", "London"),
                                                    ("birmingham", "Birmingham"),
                                                    ("bristol", "Bristol"),
                                                    ("darlington", "Darlington"),
                                                    ("leeds", "Leeds"),
                                                    ("manchester", "Manchester"),
                                                    ("sheffield", "Sheffield"),
                                                    ("york", "York")]);
