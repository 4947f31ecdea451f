//! A places autocomplete component backed by the Google Maps web services,
//! plus helpers that geocode a chosen suggestion or a coordinate.
//!
//! The [`autocomplete`] module holds the component itself; [`geocode`] holds
//! the helpers. The remaining modules make up a small HTTP host that serves
//! both.

pub mod app;
pub mod autocomplete;
pub mod config;
pub mod geocode;
pub mod middlewares;
pub mod routes;
pub mod services;
pub mod types;
pub mod utils;
