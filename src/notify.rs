//! User-facing notices emitted on wizard transitions.
//!
//! The wizard controller reports upload acceptance, validation failures and
//! completed analysis through a [`Notifier`]. The terminal UI drains a
//! [`ToastQueue`]; headless runs log through [`TracingNotifier`].

use std::collections::VecDeque;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Success,
    /// Blocked action or failure the user must correct
    Destructive,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Success => write!(f, "success"),
            Self::Destructive => write!(f, "error"),
        }
    }
}

/// A (title, description, severity) triple for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notice {
    pub fn new(title: impl Into<String>, description: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity,
        }
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, Severity::Info)
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, Severity::Success)
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, Severity::Destructive)
    }
}

/// Sink for notices
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn notify(&mut self, notice: Notice) {
        (**self).notify(notice);
    }
}

/// Logs every notice through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&mut self, notice: Notice) {
        match notice.severity {
            Severity::Destructive => warn!(title = %notice.title, "{}", notice.description),
            _ => info!(title = %notice.title, "{}", notice.description),
        }
    }
}

/// A notice with the time it was queued
#[derive(Debug, Clone)]
pub struct Toast {
    pub notice: Notice,
    pub shown_at: Instant,
}

/// Bounded queue of toasts for the terminal UI.
///
/// Toasts expire after `ttl`; only the newest `capacity` are kept.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    capacity: usize,
    ttl: Duration,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(3, Duration::from_secs(4))
    }
}

impl ToastQueue {
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            toasts: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
            ttl,
        }
    }

    /// Visible toasts, oldest first
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Most recently queued notice
    pub fn latest(&self) -> Option<&Notice> {
        self.toasts.back().map(|t| &t.notice)
    }

    /// Drop toasts older than the TTL
    pub fn expire(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.toasts
            .retain(|t| now.saturating_duration_since(t.shown_at) < ttl);
    }

    pub fn dismiss_all(&mut self) {
        self.toasts.clear();
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, notice: Notice) {
        if self.toasts.len() == self.capacity {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            notice,
            shown_at: Instant::now(),
        });
    }
}
