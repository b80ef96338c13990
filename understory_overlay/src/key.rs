// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// The subset of keyboard input overlays and search surfaces react to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Enter / Return.
    Enter,
    /// Escape.
    Escape,
    /// A printable character.
    Character(char),
    /// Anything else.
    Other,
}

/// What a keydown did to an overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyResponse {
    /// The overlay transitioned to closed.
    pub closed: bool,
    /// The host must not run the key's default action (e.g. form submit).
    pub default_prevented: bool,
}

impl KeyResponse {
    /// Response for a key the overlay ignored.
    pub const IGNORED: Self = Self {
        closed: false,
        default_prevented: false,
    };

    /// Merge two responses, as when several listeners see the same event.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            closed: self.closed || other.closed,
            default_prevented: self.default_prevented || other.default_prevented,
        }
    }
}
