pub mod maps_client;
