//! Transient user notices.
//!
//! The host shows a [`Notice`] briefly and then discards it. Notices are
//! informational only; failures are returned as errors instead.

use std::cell::RefCell;
use std::fmt;
use std::time::Duration;

/// How long short status notices stay visible.
pub const SHORT_NOTICE: Duration = Duration::from_millis(2000);

/// A short-lived status message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    message: String,
    timeout: Option<Duration>,
}

impl Notice {
    /// Create a notice shown for the host's default duration.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timeout: None,
        }
    }

    /// Show the notice for `timeout` instead of the host default.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The message text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Requested display time, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Host service that displays notices.
pub trait Notifier {
    /// Show `notice` to the user.
    fn notify(&self, notice: Notice);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, notice: Notice) {
        (**self).notify(notice);
    }
}

/// Notifier that writes notices to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        log::info!("{notice}");
    }
}

/// Notifier that keeps every notice, for inspection.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: RefCell<Vec<Notice>>,
}

impl RecordingNotifier {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages received so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.notices
            .borrow()
            .iter()
            .map(|n| n.message().to_string())
            .collect()
    }

    /// Notices received so far, oldest first.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}
