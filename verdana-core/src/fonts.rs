//! Accessibility font catalog
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Persistent storage key for the selected font.
///
/// External contract: the value stored under this key is the raw CSS
/// `font-family` stack of the chosen entry. Other deployment surfaces may
/// read or write the same key, so it must not change.
pub const FONT_PREF_KEY: &str = "accessibility-font";

/// One selectable reading font.
///
/// `family` is the CSS `font-family` stack and is the value persisted under
/// [`FONT_PREF_KEY`]. `description_key` is an i18n key resolved by the web
/// layer's translation bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontChoice {
    pub id: String,
    pub name: String,
    pub family: String,
    pub description_key: String,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("font catalog is empty")]
    Empty,
    #[error("duplicate font id `{0}`")]
    DuplicateId(String),
    #[error("font `{0}` has an empty family stack")]
    EmptyFamily(String),
    #[error("invalid font catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Ordered, closed set of selectable fonts.
///
/// Invariants held by every constructor: the set is non-empty, ids are
/// unique, and family stacks are non-blank. The first entry is the default
/// in effect when no preference has been stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontCatalog {
    fonts: Vec<FontChoice>,
}

impl FontCatalog {
    /// Parse and validate a catalog from JSON.
    ///
    /// # Errors
    /// Returns an error when the JSON is malformed, the catalog is empty,
    /// an id repeats, or a family stack is blank.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(raw)?;
        if catalog.fonts.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::new();
        for font in &catalog.fonts {
            if !seen.insert(font.id.as_str()) {
                return Err(CatalogError::DuplicateId(font.id.clone()));
            }
            if font.family.trim().is_empty() {
                return Err(CatalogError::EmptyFamily(font.id.clone()));
            }
        }
        Ok(catalog)
    }

    /// Catalog shipped with the site.
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(include_str!("../assets/fonts.json")).unwrap_or_else(|_| Self::minimal())
    }

    /// Single-entry system catalog used when the embedded asset is broken.
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            fonts: vec![FontChoice {
                id: "system".to_string(),
                name: "System default".to_string(),
                family: "system-ui, sans-serif".to_string(),
                description_key: "fonts.system.desc".to_string(),
            }],
        }
    }

    #[must_use]
    pub fn choices(&self) -> &[FontChoice] {
        &self.fonts
    }

    /// The fixed fallback descriptor in effect when nothing is stored.
    #[must_use]
    pub fn default_choice(&self) -> &FontChoice {
        &self.fonts[0]
    }

    /// Entry whose family stack equals a stored value, if any.
    ///
    /// Unknown values are not an error; they match nothing, and the menu
    /// simply marks no option as selected.
    #[must_use]
    pub fn choice_for_family(&self, family: &str) -> Option<&FontChoice> {
        self.fonts.iter().find(|font| font.family == family)
    }
}
