//! Process termination hook used after printing usage.
//!
//! [`Options::usage`](crate::Options::usage) ends the process once the help
//! text is written. The exit goes through a [`Terminator`] so tests and
//! embedding applications can observe the request instead of losing the
//! process.

/// Exit status requested after usage has been printed.
pub const USAGE_EXIT_STATUS: i32 = 1;

/// Ends the program with a status code.
///
/// The trait is object-safe; [`Options`](crate::Options) stores it behind an
/// `Arc<dyn Terminator>`. Closures taking the status implement it directly.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicI32, Ordering};
/// use dashopts::{Options, Terminator};
///
/// let seen = Arc::new(AtomicI32::new(0));
/// let recorder = Arc::clone(&seen);
/// let options = Options::default().with_terminator(move |status: i32| {
///     recorder.store(status, Ordering::SeqCst);
/// });
/// options.usage().expect("stdout write succeeds");
/// assert_eq!(seen.load(Ordering::SeqCst), 1);
/// ```
pub trait Terminator: Send + Sync {
    /// Ends the program with `status`.
    ///
    /// Implementations that return (rather than exiting) hand control back
    /// to the caller of [`Options::usage`](crate::Options::usage).
    fn terminate(&self, status: i32);
}

/// Default terminator: exits the current process.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessExit;

impl ProcessExit {
    /// Creates a new instance.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Terminator for ProcessExit {
    fn terminate(&self, status: i32) {
        std::process::exit(status)
    }
}

impl<F> Terminator for F
where
    F: Fn(i32) + Send + Sync,
{
    fn terminate(&self, status: i32) {
        self(status);
    }
}
