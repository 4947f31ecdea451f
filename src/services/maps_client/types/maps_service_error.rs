#[derive(Debug)]
pub enum MapsServiceError {
    /// The request never produced a response.
    Request(String),
    /// A response arrived but its body was not the expected JSON.
    Decode(String),
}

impl std::fmt::Display for MapsServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            MapsServiceError::Request(e) => write!(f, "Failed to send request: {}", e),
            MapsServiceError::Decode(e) => write!(f, "Failed to get response body: {}", e),
        }
    }
}

impl std::error::Error for MapsServiceError {}
