//! Form payloads posted by the listing page.

use serde::Deserialize;

use crate::application::services::LinkInput;

/// Body of `POST /links`.
#[derive(Debug, Default, Deserialize)]
pub struct CreateLinkForm {
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
}

impl From<CreateLinkForm> for LinkInput {
    fn from(form: CreateLinkForm) -> Self {
        LinkInput::new(form.slug, form.url, form.description)
    }
}

/// Body of `POST /links/{slug}`.
///
/// Browsers can only submit GET and POST, so the intended verb travels in
/// `_method`.
#[derive(Debug, Default, Deserialize)]
pub struct LinkActionForm {
    #[serde(default, rename = "_method")]
    pub method: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
}

/// Verb requested through the `_method` override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodOverride {
    Put,
    Delete,
}

impl LinkActionForm {
    /// Parses `_method` case-insensitively; anything else yields `None`.
    pub fn method_override(&self) -> Option<MethodOverride> {
        match self.method.trim().to_ascii_uppercase().as_str() {
            "PUT" => Some(MethodOverride::Put),
            "DELETE" => Some(MethodOverride::Delete),
            _ => None,
        }
    }
}
