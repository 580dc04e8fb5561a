use thiserror::Error;

/// Errors raised by lookups and parsing over the sample dataset
#[derive(Debug, Error, PartialEq)]
pub enum DashboardError {
    #[error("unknown {kind} status: {value}")]
    UnknownStatus { kind: &'static str, value: String },

    #[error("unknown {kind} type: {value}")]
    UnknownType { kind: &'static str, value: String },

    #[error("no client with id {0}")]
    ClientNotFound(String),

    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("page size must be at least 1, got {0}")]
    InvalidPageSize(usize),
}
