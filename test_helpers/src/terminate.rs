//! Terminator double that records exit requests instead of exiting.
//!
//! # Examples
//!
//! ```
//! use dashopts::Options;
//! use test_helpers::terminate::RecordingTerminator;
//!
//! let recorder = RecordingTerminator::default();
//! let options = Options::default().with_terminator(recorder.clone());
//! options.usage().expect("stdout write succeeds");
//! assert_eq!(recorder.statuses(), vec![1]);
//! ```

use std::sync::Arc;

use dashopts::Terminator;
use parking_lot::Mutex;

/// Records every status passed to [`Terminator::terminate`].
///
/// Clones share the same record, so a test can keep one handle while the
/// registry owns another.
#[derive(Debug, Default, Clone)]
pub struct RecordingTerminator {
    statuses: Arc<Mutex<Vec<i32>>>,
}

impl RecordingTerminator {
    /// Statuses received so far, oldest first.
    #[must_use]
    pub fn statuses(&self) -> Vec<i32> {
        self.statuses.lock().clone()
    }

    /// Most recent status, if any.
    #[must_use]
    pub fn last(&self) -> Option<i32> {
        self.statuses.lock().last().copied()
    }
}

impl Terminator for RecordingTerminator {
    fn terminate(&self, status: i32) {
        self.statuses.lock().push(status);
    }
}
