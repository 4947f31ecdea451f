use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{matcher::LabelPart, options::ContainerLayout};
use crate::types::suggestion::Suggestion;

pub const ATTRIBUTION_IMAGE: &str = "google-logo-on-white-bg.png";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TextFieldView {
    pub placeholder: Option<String>,
    pub auto_focus: bool,
    pub value: String,
    pub attributes: BTreeMap<String, String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SuggestionEntry {
    pub suggestion: Suggestion,
    pub parts: Vec<LabelPart>,
    pub highlighted: bool,
}

/// Brand mark the places backend requires next to its results.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Attribution {
    pub image: String,
    pub alt: String,
}

impl Default for Attribution {
    fn default() -> Self {
        Attribution {
            image: ATTRIBUTION_IMAGE.to_string(),
            alt: String::new(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SuggestionsMenu {
    pub layout: ContainerLayout,
    pub entries: Vec<SuggestionEntry>,
    pub attribution: Attribution,
}

/// Everything a host toolkit needs to lay out the component.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AutocompleteView {
    pub text_field: TextFieldView,
    pub target: serde_json::Value,
    pub menu: Option<SuggestionsMenu>,
}
