//! Debounced search commits
//!
//! Collapses rapid successive keystrokes into a single committed search
//! value. At most one pending commit exists at a time; a new keystroke
//! cancels the previous timer before it fires. A committed empty input
//! clears the search parameter instead of setting it to an empty string.

use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::debug;

/// Default quiet period before typed text is committed
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// A committed search value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchCommit {
    /// Set the search parameter to the trimmed text
    Set(String),
    /// Remove the search parameter entirely
    Clear,
}

impl SearchCommit {
    /// Commit for a raw input value: trimmed, fully-deleted input clears
    pub fn from_input(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            SearchCommit::Clear
        } else {
            SearchCommit::Set(trimmed.to_string())
        }
    }
}

/// Timer-driven committer for a single search input
///
/// Must be used from within a Tokio runtime; the pending commit runs as a
/// spawned task and is aborted when superseded, cancelled, or dropped.
/// Committed values arrive on the channel handed out by [`SearchDebouncer::new`];
/// the consumer owns the navigation a commit triggers.
pub struct SearchDebouncer {
    delay: Duration,
    tx: UnboundedSender<SearchCommit>,
    pending: Option<JoinHandle<()>>,
}

impl SearchDebouncer {
    /// Create a debouncer and the channel its commits arrive on
    pub fn new(delay: Duration) -> (Self, UnboundedReceiver<SearchCommit>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                delay,
                tx,
                pending: None,
            },
            rx,
        )
    }

    /// Record a keystroke, rescheduling the pending commit
    pub fn keystroke<S: Into<String>>(&mut self, text: S) {
        self.cancel();

        let commit = SearchCommit::from_input(&text.into());
        let tx = self.tx.clone();
        let delay = self.delay;

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            debug!(?commit, "committing debounced search");
            let _ = tx.send(commit);
        }));
    }

    /// Abort the pending commit, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Whether a commit is scheduled but has not fired yet
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for SearchDebouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_from_input() {
        assert_eq!(
            SearchCommit::from_input("  alice "),
            SearchCommit::Set("alice".to_string())
        );
        assert_eq!(SearchCommit::from_input(""), SearchCommit::Clear);
        assert_eq!(SearchCommit::from_input("   "), SearchCommit::Clear);
    }

    #[tokio::test(start_paused = true)]
    async fn test_commits_after_quiet_period() {
        let (mut debouncer, mut rx) = SearchDebouncer::new(DEFAULT_DEBOUNCE);

        debouncer.keystroke("alice");
        assert!(debouncer.is_pending());

        let commit = rx.recv().await.expect("commit");
        assert_eq!(commit, SearchCommit::Set("alice".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_keystrokes_collapse_to_one_commit() {
        let (mut debouncer, mut rx) = SearchDebouncer::new(DEFAULT_DEBOUNCE);

        // "al" then "alice" within the quiet period: only "alice" commits
        debouncer.keystroke("al");
        debouncer.keystroke("alice");

        let commit = rx.recv().await.expect("commit");
        assert_eq!(commit, SearchCommit::Set("alice".to_string()));

        tokio::time::advance(Duration::from_secs(2)).await;
        assert!(rx.try_recv().is_err(), "only one commit may fire");
    }

    #[tokio::test(start_paused = true)]
    async fn test_deleted_input_clears_search() {
        let (mut debouncer, mut rx) = SearchDebouncer::new(DEFAULT_DEBOUNCE);

        debouncer.keystroke("alice");
        debouncer.keystroke("");

        let commit = rx.recv().await.expect("commit");
        assert_eq!(commit, SearchCommit::Clear);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_commit() {
        let (mut debouncer, mut rx) = SearchDebouncer::new(DEFAULT_DEBOUNCE);

        debouncer.keystroke("alice");
        debouncer.cancel();
        assert!(!debouncer.is_pending());

        tokio::time::advance(Duration::from_secs(2)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sequential_commits_after_quiet_periods() {
        let (mut debouncer, mut rx) = SearchDebouncer::new(DEFAULT_DEBOUNCE);

        debouncer.keystroke("al");
        assert_eq!(
            rx.recv().await.expect("first commit"),
            SearchCommit::Set("al".to_string())
        );

        debouncer.keystroke("alice");
        assert_eq!(
            rx.recv().await.expect("second commit"),
            SearchCommit::Set("alice".to_string())
        );
    }
}
