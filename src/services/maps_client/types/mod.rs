pub mod google_autocomplete_response;
pub mod google_geocode_response;
pub mod maps_service_error;
pub mod service_status;
