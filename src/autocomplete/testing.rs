use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use futures::channel::oneshot;

use super::backend::SuggestionBackend;
use crate::{
    services::maps_client::{
        maps_service::AutocompletionRequest,
        types::{
            google_autocomplete_response::{
                GoogleAutocompleteResponse, GoogleAutocompleteResponsePrediction,
            },
            service_status::ServiceStatus,
        },
    },
    types::suggestion::Suggestion,
};

pub fn prediction(description: &str, place_id: &str) -> GoogleAutocompleteResponsePrediction {
    GoogleAutocompleteResponsePrediction {
        description: description.to_string(),
        place_id: place_id.to_string(),
        structured_formatting: None,
        types: vec![],
    }
}

pub fn ok_response(predictions: Vec<GoogleAutocompleteResponsePrediction>) -> GoogleAutocompleteResponse {
    GoogleAutocompleteResponse {
        predictions,
        status: ServiceStatus::ok(),
    }
}

pub fn status_response(status: &str) -> GoogleAutocompleteResponse {
    GoogleAutocompleteResponse {
        predictions: vec![],
        status: ServiceStatus::new(status),
    }
}

/// Backend whose responses are released by the test, one gate per input.
/// Requests without a gate, or whose gate is dropped, answer `UNKNOWN_ERROR`.
#[derive(Default)]
pub struct GatedBackend {
    gates: Mutex<HashMap<String, oneshot::Receiver<GoogleAutocompleteResponse>>>,
    pub requests: Mutex<Vec<AutocompletionRequest>>,
}

impl GatedBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn gate(&self, input: &str) -> oneshot::Sender<GoogleAutocompleteResponse> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(input.to_string(), rx);
        tx
    }

    pub fn request_inputs(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.input.clone())
            .collect()
    }
}

#[async_trait]
impl SuggestionBackend for GatedBackend {
    async fn get_place_predictions(
        &self,
        request: AutocompletionRequest,
    ) -> GoogleAutocompleteResponse {
        let gate = self.gates.lock().unwrap().remove(&request.input);
        self.requests.lock().unwrap().push(request);

        match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| status_response(ServiceStatus::UNKNOWN_ERROR)),
            None => status_response(ServiceStatus::UNKNOWN_ERROR),
        }
    }
}

/// Collects every suggestion handed to the selection callback.
pub fn selection_recorder() -> (
    Arc<Mutex<Vec<Suggestion>>>,
    Box<dyn FnMut(&Suggestion) + Send>,
) {
    let selected = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&selected);
    (
        selected,
        Box::new(move |s: &Suggestion| sink.lock().unwrap().push(s.clone())),
    )
}
