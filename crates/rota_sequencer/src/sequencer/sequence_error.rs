use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Start address '{id}' has no coordinates")]
    StartNotGeocoded { id: String },
}
