use thiserror::Error;

use crate::resolver::ResolveError;

/// Custom error types for eat-your-feelings
#[derive(Debug, Error)]
pub enum FeelingsError {
    #[error("Mood is empty. Tell us how you feel first.")]
    EmptyMood,

    #[error("Resolver error: {0}")]
    Resolve(#[from] ResolveError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
