pub mod config;
pub mod json;
pub mod problem;
pub mod route;
pub mod sequencer;
pub mod snapshot;

#[cfg(test)]
pub(crate) mod test_utils;
