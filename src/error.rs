//! Error type shared by the loader, the engine and the stopwatch
//!
//! `load` and `step` are the only fallible entry points of the physics core.
//! Nothing here is retried: physics has no transient failures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// A record is missing a required field, has a non-numeric value,
    /// or the scenario document itself is malformed
    #[error("config error{}: {message}", record_suffix(.index))]
    Config {
        index: Option<usize>,
        message: String,
    },

    /// A record describes a body that cannot be simulated (`m <= 0`, `r < 0`, non-finite values)
    #[error("invalid body {index}: {reason}")]
    InvalidBody { index: usize, reason: String },

    /// A runtime invariant broke during `step`
    #[error("state error: {0}")]
    State(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SimError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        SimError::Config {
            index: None,
            message: message.into(),
        }
    }

    pub(crate) fn config_at(index: usize, message: impl Into<String>) -> Self {
        SimError::Config {
            index: Some(index),
            message: message.into(),
        }
    }
}

fn record_suffix(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" in record {i}"),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
