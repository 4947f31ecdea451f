pub mod backend;
pub mod controller;
pub mod dedupe;
pub mod matcher;
pub mod options;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;
