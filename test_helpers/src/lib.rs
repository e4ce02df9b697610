//! Test helpers shared across crates.
//!
//! This crate provides a recording [`dashopts::Terminator`] and small text
//! utilities for asserting on rendered help output.

pub mod terminate;
pub mod text;

/// Builds an owned argument vector from string literals.
///
/// # Examples
///
/// ```
/// let args = test_helpers::argv(&["-h", "input"]);
/// assert_eq!(args, vec!["-h".to_owned(), "input".to_owned()]);
/// ```
#[must_use]
pub fn argv(args: &[&str]) -> Vec<String> {
    args.iter().map(|arg| (*arg).to_owned()).collect()
}
