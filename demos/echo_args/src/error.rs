//! Error types for the `echo_args` demo.
use std::io;
use thiserror::Error;

/// Errors raised while echoing arguments.
#[derive(Debug, Error)]
pub enum EchoError {
    /// Writing to standard output or standard error failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Convenience alias for demo results.
pub type Result<T, E = EchoError> = std::result::Result<T, E>;
