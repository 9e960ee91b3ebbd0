//! Agent submission
//!
//! Turns raw form input into an [`AgentRecord`]. Nothing is persisted: the
//! record is serialized and handed to a clipboard sink so the submitter can
//! paste it into a pull request by hand.

pub mod form;
pub mod id;
pub mod payload;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::directory::{AgentRecord, Category};
use id::{IdGenerator, TimestampIds};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please add at least one capability")]
    EmptyCapabilities,
}

/// Raw field values as entered by the submitter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub name: String,
    pub description: String,
    pub category: Category,
    pub creator: String,
    /// Comma-separated capability labels
    pub capabilities: String,
    /// Possibly empty
    pub website: String,
}

impl Default for FormFields {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            category: Category::Productivity,
            creator: String::new(),
            capabilities: String::new(),
            website: String::new(),
        }
    }
}

/// Validate and normalize form input, assigning a fresh id.
///
/// Only the capability list is checked here; name, description and creator
/// are copied through as entered.
pub fn compose(form: &FormFields) -> Result<AgentRecord, ValidationError> {
    compose_with(form, &TimestampIds)
}

pub fn compose_with(form: &FormFields, ids: &dyn IdGenerator) -> Result<AgentRecord, ValidationError> {
    let capabilities = parse_capabilities(&form.capabilities);
    if capabilities.is_empty() {
        return Err(ValidationError::EmptyCapabilities);
    }

    let website = if form.website.trim().is_empty() {
        None
    } else {
        Some(form.website.clone())
    };

    Ok(AgentRecord {
        id: ids.next_id(),
        name: form.name.clone(),
        description: form.description.clone(),
        category: form.category,
        creator: form.creator.clone(),
        capabilities,
        website,
    })
}

/// Split on commas, trim, drop empty segments. Order and duplicates are kept.
pub fn parse_capabilities(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) struct FixedId(pub &'static str);

    impl IdGenerator for FixedId {
        fn next_id(&self) -> String {
            self.0.to_string()
        }
    }

    pub(crate) fn sample_form() -> FormFields {
        FormFields {
            name: "Test Pro".to_string(),
            description: "It searches the web for deals".to_string(),
            category: Category::Productivity,
            creator: "@theking".to_string(),
            capabilities: "searching".to_string(),
            website: String::new(),
        }
    }

    #[test]
    fn test_capabilities_trimmed_and_empty_dropped() {
        let form = FormFields {
            capabilities: "a, b ,, c".to_string(),
            ..sample_form()
        };
        let record = compose_with(&form, &FixedId("7")).unwrap();
        assert_eq!(record.capabilities, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_capabilities_keep_duplicates_and_order() {
        assert_eq!(parse_capabilities("z,a,z"), vec!["z", "a", "z"]);
    }

    #[test]
    fn test_empty_capabilities_rejected() {
        for raw in ["", " , ", ",,,", "   "] {
            let form = FormFields {
                capabilities: raw.to_string(),
                ..sample_form()
            };
            assert_eq!(compose(&form), Err(ValidationError::EmptyCapabilities), "input {:?}", raw);
        }
    }

    #[test]
    fn test_empty_website_is_absent() {
        let record = compose_with(&sample_form(), &FixedId("1")).unwrap();
        assert_eq!(record.website, None);

        let form = FormFields {
            website: "   ".to_string(),
            ..sample_form()
        };
        assert_eq!(compose_with(&form, &FixedId("1")).unwrap().website, None);
    }

    #[test]
    fn test_website_kept_verbatim() {
        let form = FormFields {
            website: "https://x.com".to_string(),
            ..sample_form()
        };
        let record = compose_with(&form, &FixedId("1")).unwrap();
        assert_eq!(record.website.as_deref(), Some("https://x.com"));

        let padded = FormFields {
            website: " https://x.com ".to_string(),
            ..sample_form()
        };
        let record = compose_with(&padded, &FixedId("1")).unwrap();
        assert_eq!(record.website.as_deref(), Some(" https://x.com "));
    }

    #[test]
    fn test_text_fields_copied_verbatim() {
        let form = FormFields {
            name: "  Spaced  ".to_string(),
            description: "".to_string(),
            creator: " @me".to_string(),
            category: Category::Gaming,
            ..sample_form()
        };
        let record = compose_with(&form, &FixedId("9")).unwrap();
        assert_eq!(record.id, "9");
        assert_eq!(record.name, "  Spaced  ");
        assert_eq!(record.description, "");
        assert_eq!(record.creator, " @me");
        assert_eq!(record.category, Category::Gaming);
    }

    #[test]
    fn test_compose_assigns_nonempty_id() {
        let record = compose(&sample_form()).unwrap();
        assert!(!record.id.is_empty());
    }
}
