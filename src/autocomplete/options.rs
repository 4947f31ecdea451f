use std::{collections::BTreeMap, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::{
    services::maps_client::maps_service::AutocompletionRequest, types::suggestion::Suggestion,
};

pub const DEFAULT_PLACEHOLDER: &str = "Search for a place";

pub type OnSuggestionSelected = Box<dyn FnMut(&Suggestion) + Send>;
pub type RenderTarget = Box<dyn Fn() -> serde_json::Value + Send + Sync>;
pub type CreateRequest = Arc<dyn Fn(&str) -> AutocompletionRequest + Send + Sync>;

/// What the host hands the component when mounting it.
pub struct AutocompleteProps {
    pub on_suggestion_selected: OnSuggestionSelected,
    /// Renders the element shown next to the input, e.g. a submit button.
    pub render_target: RenderTarget,
    pub options: AutocompleteOptions,
}

impl AutocompleteProps {
    pub fn new(on_suggestion_selected: OnSuggestionSelected, render_target: RenderTarget) -> Self {
        AutocompleteProps {
            on_suggestion_selected,
            render_target,
            options: AutocompleteOptions::default(),
        }
    }

    pub fn with_options(mut self, options: AutocompleteOptions) -> Self {
        self.options = options;
        self
    }
}

#[derive(Clone, Default)]
pub struct AutocompleteOptions {
    pub text_field: TextFieldProps,
    pub suggestions_container: ContainerLayout,
    /// Shapes the backend request from the current query. Defaults to a
    /// request carrying only the input text.
    pub create_request: Option<CreateRequest>,
    pub response_ordering: ResponseOrdering,
}

/// How responses that arrive out of order are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResponseOrdering {
    /// Only the response to the most recent request is applied.
    #[default]
    LatestOnly,
    /// Every response is applied as it lands; the last one to arrive wins.
    LastArrival,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TextFieldProps {
    pub placeholder: Option<String>,
    pub auto_focus: bool,
    /// Controlled value. When set the text field shows it instead of the query.
    pub value: Option<String>,
    pub passthrough: BTreeMap<String, String>,
}

impl Default for TextFieldProps {
    fn default() -> Self {
        TextFieldProps {
            placeholder: Some(DEFAULT_PLACEHOLDER.to_string()),
            auto_focus: true,
            value: None,
            passthrough: BTreeMap::new(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    Top,
    TopStart,
    TopEnd,
    Bottom,
    #[default]
    BottomStart,
    BottomEnd,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ContainerLayout {
    pub placement: Placement,
    pub style: BTreeMap<String, String>,
    pub modifiers: Vec<String>,
}
