// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A restartable single-deadline timer.
///
/// Time is whatever monotonic millisecond clock the host passes in. Every
/// [`schedule`](Self::schedule) replaces the previous deadline, so a burst of
/// calls closer together than the window fires once, after the last call.
///
/// ```
/// use understory_typeahead::Debouncer;
///
/// let mut d = Debouncer::new(300);
/// d.schedule(0);
/// d.schedule(200);
/// assert!(!d.fire_if_due(450));
/// assert!(d.fire_if_due(500));
/// assert!(!d.fire_if_due(900));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Debouncer {
    window_ms: u64,
    deadline: Option<u64>,
}

impl Debouncer {
    /// Creates an idle timer with the given quiet window.
    #[must_use]
    pub const fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            deadline: None,
        }
    }

    /// The quiet window.
    #[must_use]
    pub const fn window(&self) -> u64 {
        self.window_ms
    }

    /// Changes the window. A pending deadline is left as scheduled.
    pub fn set_window(&mut self, window_ms: u64) {
        self.window_ms = window_ms;
    }

    /// (Re)starts the timer at `now` and returns the new deadline.
    pub fn schedule(&mut self, now: u64) -> u64 {
        let deadline = now.saturating_add(self.window_ms);
        tracing::trace!(now, deadline, "debounce scheduled");
        self.deadline = Some(deadline);
        deadline
    }

    /// Forgets the pending deadline. Returns `false` if none was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// When the timer fires, if pending.
    #[must_use]
    pub const fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Returns `true` while a deadline is pending.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Fires the timer if its deadline has passed.
    ///
    /// Returns `true` exactly once per scheduled deadline.
    pub fn fire_if_due(&mut self, now: u64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
