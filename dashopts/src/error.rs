//! Error types produced while scanning command-line arguments.

use thiserror::Error;

/// Errors that can occur while parsing command-line arguments.
///
/// Only the parser reports errors. Accessors such as
/// [`Options::string`](crate::Options::string) degrade to zero values instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// A flag-shaped argument named a flag that was never declared.
    #[error("Invalid option: '{token}'")]
    UnknownOption {
        /// Flag portion of the offending argument, leading dash included and
        /// any `=value` suffix removed.
        token: String,
    },
}

impl ParseError {
    /// Builds an [`ParseError::UnknownOption`] for `token`.
    pub(crate) fn unknown_option(token: impl Into<String>) -> Self {
        Self::UnknownOption {
            token: token.into(),
        }
    }

    /// Returns the argument that triggered the failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use dashopts::{Flag, Options};
    ///
    /// let mut options = Options::new([Flag::boolean("h", false, "Show help")]);
    /// let err = options.parse(["-x=1"]).expect_err("x is undeclared");
    /// assert_eq!(err.token(), "-x");
    /// ```
    #[must_use]
    pub fn token(&self) -> &str {
        match self {
            Self::UnknownOption { token } => token,
        }
    }
}
