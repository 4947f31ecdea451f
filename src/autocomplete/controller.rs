use std::sync::Arc;

use futures::{
    future::BoxFuture,
    stream::{FuturesUnordered, StreamExt},
    FutureExt,
};
use tracing::{debug, info, warn};

use super::{
    backend::SuggestionBackend,
    dedupe::dedupe,
    matcher::highlight,
    options::{AutocompleteProps, ResponseOrdering},
    view::{Attribution, AutocompleteView, SuggestionEntry, SuggestionsMenu, TextFieldView},
};
use crate::{
    services::maps_client::{
        maps_service::AutocompletionRequest,
        types::google_autocomplete_response::GoogleAutocompleteResponse,
    },
    types::suggestion::Suggestion,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Query is empty; nothing shown.
    Empty,
    /// A request for the current query is in flight. Whatever was shown
    /// before stays shown until it lands.
    Pending,
    /// The backend answered `OK` with at least one suggestion.
    Open,
    /// The backend answered `OK` with nothing to suggest.
    EmptyResults,
    /// The backend answered with any other status.
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ControllerState {
    pub query: String,
    pub suggestions: Vec<Suggestion>,
    pub is_open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseOutcome {
    Applied(Phase),
    Discarded,
}

struct FetchResponse {
    seq: u64,
    input: String,
    response: GoogleAutocompleteResponse,
}

/// Drives the autocomplete input: keeps the query, the deduplicated
/// suggestions and the dropdown state in step with the places backend.
///
/// Requests are futures owned by the controller. They only make progress
/// while the host awaits [`AutocompleteController::next_response`] or calls
/// [`AutocompleteController::apply_ready_responses`], so every mutation
/// happens on the host's own task through `&mut self`.
pub struct AutocompleteController {
    backend: Arc<dyn SuggestionBackend>,
    props: AutocompleteProps,
    state: ControllerState,
    phase: Phase,
    highlighted: Option<usize>,
    latest_seq: u64,
    in_flight: FuturesUnordered<BoxFuture<'static, FetchResponse>>,
}

impl AutocompleteController {
    /// Creates the controller once the backend is available.
    pub fn mount(backend: Arc<dyn SuggestionBackend>, props: AutocompleteProps) -> Self {
        Self {
            backend,
            props,
            state: ControllerState::default(),
            phase: Phase::Empty,
            highlighted: None,
            latest_seq: 0,
            in_flight: FuturesUnordered::new(),
        }
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn query(&self) -> &str {
        &self.state.query
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.state.suggestions
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn has_pending_requests(&self) -> bool {
        !self.in_flight.is_empty()
    }

    pub fn on_input_change(&mut self, new_text: &str) {
        self.state.query = new_text.to_string();

        if new_text.is_empty() {
            self.clear();
            return;
        }

        self.latest_seq += 1;
        let seq = self.latest_seq;
        let request = match self.props.options.create_request {
            Some(ref create_request) => create_request(new_text),
            None => AutocompletionRequest::new(new_text),
        };
        let backend = Arc::clone(&self.backend);
        let input = new_text.to_string();

        debug!("Issuing place predictions request #{} for '{}'", seq, input);

        self.in_flight.push(
            async move {
                let response = backend.get_place_predictions(request).await;
                FetchResponse {
                    seq,
                    input,
                    response,
                }
            }
            .boxed(),
        );
        self.phase = Phase::Pending;
    }

    /// Waits for the next in-flight request to finish and applies it.
    /// Returns `None` when nothing is in flight.
    pub async fn next_response(&mut self) -> Option<ResponseOutcome> {
        let fetched = self.in_flight.next().await?;
        Some(self.apply(fetched))
    }

    /// Applies every response that has already arrived without waiting.
    pub fn apply_ready_responses(&mut self) -> Vec<ResponseOutcome> {
        let mut outcomes = Vec::new();
        loop {
            let ready = self.in_flight.next().now_or_never();
            match ready {
                Some(Some(fetched)) => outcomes.push(self.apply(fetched)),
                _ => return outcomes,
            }
        }
    }

    fn apply(&mut self, fetched: FetchResponse) -> ResponseOutcome {
        if self.state.query.is_empty() {
            debug!(
                "Discarding predictions for '{}' as the query was cleared",
                fetched.input
            );
            return ResponseOutcome::Discarded;
        }

        if self.props.options.response_ordering == ResponseOrdering::LatestOnly
            && fetched.seq != self.latest_seq
        {
            debug!(
                "Discarding stale predictions #{} for '{}'",
                fetched.seq, fetched.input
            );
            return ResponseOutcome::Discarded;
        }

        self.highlighted = None;

        if !fetched.response.status.is_ok() {
            warn!(
                "Place predictions for '{}' failed - response status: {}",
                fetched.input, fetched.response.status
            );
            self.state.suggestions.clear();
            self.state.is_open = false;
            self.phase = Phase::Failed;
            return ResponseOutcome::Applied(self.phase);
        }

        self.state.suggestions = dedupe(
            fetched
                .response
                .predictions
                .into_iter()
                .map(Suggestion::from)
                .collect(),
        );
        self.state.is_open = !self.state.suggestions.is_empty();
        self.phase = if self.state.is_open {
            Phase::Open
        } else {
            Phase::EmptyResults
        };

        ResponseOutcome::Applied(self.phase)
    }

    fn clear(&mut self) {
        self.state.suggestions.clear();
        self.state.is_open = false;
        self.highlighted = None;
        self.phase = Phase::Empty;
    }

    /// Hands the suggestion to the host. The query is left untouched; hosts
    /// wanting a controlled input set it themselves.
    pub fn on_suggestion_selected(&mut self, suggestion: &Suggestion) {
        info!("Suggestion selected: {}", suggestion.label);
        (self.props.on_suggestion_selected)(suggestion);
    }

    pub fn highlight_next(&mut self) -> Option<usize> {
        let len = self.state.suggestions.len();
        if len == 0 {
            return None;
        }
        self.highlighted = Some(match self.highlighted {
            Some(i) => (i + 1) % len,
            None => 0,
        });
        self.highlighted
    }

    pub fn highlight_previous(&mut self) -> Option<usize> {
        let len = self.state.suggestions.len();
        if len == 0 {
            return None;
        }
        self.highlighted = Some(match self.highlighted {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        });
        self.highlighted
    }

    pub fn select_highlighted(&mut self) -> Option<Suggestion> {
        let suggestion = self.state.suggestions.get(self.highlighted?)?.clone();
        self.on_suggestion_selected(&suggestion);
        Some(suggestion)
    }

    pub fn render(&self) -> AutocompleteView {
        let text_field = &self.props.options.text_field;

        let menu = if self.state.is_open && !self.state.suggestions.is_empty() {
            Some(SuggestionsMenu {
                layout: self.props.options.suggestions_container.clone(),
                entries: self
                    .state
                    .suggestions
                    .iter()
                    .enumerate()
                    .map(|(i, s)| SuggestionEntry {
                        suggestion: s.clone(),
                        parts: highlight(&s.label, &self.state.query),
                        highlighted: self.highlighted == Some(i),
                    })
                    .collect(),
                attribution: Attribution::default(),
            })
        } else {
            None
        };

        AutocompleteView {
            text_field: TextFieldView {
                placeholder: text_field.placeholder.clone(),
                auto_focus: text_field.auto_focus,
                value: text_field
                    .value
                    .clone()
                    .unwrap_or_else(|| self.state.query.clone()),
                attributes: text_field.passthrough.clone(),
            },
            target: (self.props.render_target)(),
            menu,
        }
    }
}
