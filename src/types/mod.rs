pub mod app_state;
pub mod lat_lng;
pub mod suggestion;
