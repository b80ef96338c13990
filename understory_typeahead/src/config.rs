// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Tuning for a [`TypeaheadEngine`](crate::TypeaheadEngine).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TypeaheadConfig {
    /// Quiet period after the last keystroke before a query is evaluated.
    pub debounce_ms: u64,
    /// Queries with fewer characters than this never open the panel.
    ///
    /// Values below 1 behave as 1: an empty query is always closed.
    pub min_chars: usize,
    /// Results beyond this count are dropped, keeping source order.
    pub max_results: usize,
}

impl TypeaheadConfig {
    /// Default debounce window in milliseconds.
    pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
    /// Default minimum query length.
    pub const DEFAULT_MIN_CHARS: usize = 1;
    /// Default result cap.
    pub const DEFAULT_MAX_RESULTS: usize = 8;

    /// Returns a copy with the given debounce window.
    #[must_use]
    pub fn with_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    /// Returns a copy with the given minimum query length.
    #[must_use]
    pub fn with_min_chars(mut self, min_chars: usize) -> Self {
        self.min_chars = min_chars;
        self
    }

    /// Returns a copy with the given result cap.
    #[must_use]
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Returns `true` if `query` is long enough to be evaluated.
    #[must_use]
    pub fn accepts(&self, query: &str) -> bool {
        !query.is_empty() && query.chars().count() >= self.min_chars
    }
}

impl Default for TypeaheadConfig {
    fn default() -> Self {
        Self {
            debounce_ms: Self::DEFAULT_DEBOUNCE_MS,
            min_chars: Self::DEFAULT_MIN_CHARS,
            max_results: Self::DEFAULT_MAX_RESULTS,
        }
    }
}
