//! Single-slot transient alert with auto-clear.
//!
//! The roster UI shows at most one alert at a time. Setting a new alert
//! replaces any pending one and restarts the auto-clear window; an explicit
//! clear empties the slot immediately. Expiry is evaluated against
//! caller-supplied millisecond timestamps from the event-loop tick, so a
//! superseded alert can never be cleared by the stale window of its
//! predecessor — setting rewrites the creation timestamp.
//!
//! State machine per slot: `Idle -> Showing` on set, `Showing -> Idle` on
//! expiry or explicit clear, `Showing -> Showing` on a superseding set
//! (window restarted).


/// A single-slot transient notification.
#[derive(Debug, Clone)]
pub struct AlertSlot {
    current: Option<Alert>,
    ttl_ms: u64,
}

/// The alert currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Alert {
    message: String,
    created_ms: u64,
}

impl AlertSlot {
    /// Create an idle slot whose alerts auto-clear after `ttl_ms`.
    pub fn new(ttl_ms: u64) -> Self {
        AlertSlot {
            current: None,
            ttl_ms,
        }
    }

    /// Show an alert, superseding any pending one and restarting the
    /// auto-clear window.
    pub fn set(&mut self, message: &str, now_ms: u64) {
        self.current = Some(Alert {
            message: message.to_string(),
            created_ms: now_ms,
        });
    }

    /// Clear the slot immediately.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Clear the slot if the alert's window has elapsed relative to `now_ms`.
    /// Called from the event-loop tick.
    pub fn clear_expired(&mut self, now_ms: u64) {
        if let Some(alert) = &self.current {
            if now_ms.saturating_sub(alert.created_ms) >= self.ttl_ms {
                self.current = None;
            }
        }
    }

    /// The message currently showing, if any.
    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|a| a.message.as_str())
    }

    /// Whether an alert is currently showing.
    pub fn is_showing(&self) -> bool {
        self.current.is_some()
    }
}

impl Default for AlertSlot {
    fn default() -> Self {
        AlertSlot::new(3000)
    }
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
