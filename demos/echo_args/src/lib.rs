//! Library facade for the `echo_args` demo so integration tests can reuse the
//! flag declarations and output formatting.

pub mod echo;
pub mod error;
