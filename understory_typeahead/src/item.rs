// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// Why a result is being shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ResultKind {
    /// A completion of what the user typed.
    #[default]
    Suggestion,
    /// A popular query.
    Trending,
    /// Something the user searched for before.
    Recent,
    /// A direct hit (a video, a channel, a page).
    Result,
}

/// One entry produced by a [`ResultSource`](crate::ResultSource).
///
/// The engine never mutates items; it only truncates and groups them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResultItem<P = ()> {
    /// Unique, stable identifier.
    pub id: String,
    /// Primary text. Selecting the item copies this into the query.
    pub title: String,
    /// Secondary text.
    #[cfg_attr(feature = "serde", serde(default))]
    pub subtitle: Option<String>,
    /// Optional grouping key, see [`group_by_category`](crate::group_by_category).
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: Option<String>,
    /// Kind of result.
    pub kind: ResultKind,
    /// Opaque consumer data.
    pub payload: P,
}

impl<P> ResultItem<P> {
    /// Creates an item without subtitle or category.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        kind: ResultKind,
        payload: P,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: None,
            category: None,
            kind,
            payload,
        }
    }

    /// Returns the item with a subtitle.
    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Returns the item with a category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

impl ResultItem {
    /// Creates an item with no payload.
    pub fn plain(id: impl Into<String>, title: impl Into<String>, kind: ResultKind) -> Self {
        Self::new(id, title, kind, ())
    }
}
