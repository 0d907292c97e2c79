use thiserror::Error;

use crate::lifecycle::HostEvent;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("unknown attribute `{0}`")]
    UnknownAttribute(String),
    #[error("attribute `{name}` has unparseable value `{value}`")]
    Unparseable { name: String, value: String },
    #[error("`{name}` must be {expected}, got {got}")]
    OutOfRange {
        name: &'static str,
        expected: &'static str,
        got: f64,
    },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum HostError {
    #[error("failed to attach {event:?} listener: {reason}")]
    Listen { event: HostEvent, reason: String },
    #[error("failed to schedule animation frame: {0}")]
    Schedule(String),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FieldError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Host(#[from] HostError),
}
