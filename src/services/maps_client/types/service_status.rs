use serde::{Deserialize, Serialize};

/// Status string returned alongside every Google Maps web service response.
///
/// Only `OK` counts as success for place predictions. The geocoder also treats
/// `ZERO_RESULTS` as a successful query with nothing in it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(transparent)]
pub struct ServiceStatus(pub String);

impl ServiceStatus {
    pub const OK: &'static str = "OK";
    pub const ZERO_RESULTS: &'static str = "ZERO_RESULTS";
    pub const UNKNOWN_ERROR: &'static str = "UNKNOWN_ERROR";

    pub fn new(status: &str) -> Self {
        ServiceStatus(status.to_string())
    }

    pub fn ok() -> Self {
        Self::new(Self::OK)
    }

    pub fn unknown_error() -> Self {
        Self::new(Self::UNKNOWN_ERROR)
    }

    pub fn is_ok(&self) -> bool {
        self.0 == Self::OK
    }

    pub fn is_zero_results(&self) -> bool {
        self.0 == Self::ZERO_RESULTS
    }
}

impl std::fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
