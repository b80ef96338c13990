// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared scaffolding for the runnable demos.
//!
//! The demos stand in for a dashboard page: a header with a search box, a
//! notifications button, a user menu and a collapsible sidebar. Node handles
//! are plain strings, layout is a fixed table that reacts to the sidebar
//! collapsing, and the result source is a small mock catalog.

use std::path::Path;

use anyhow::Context;
use kurbo::{Rect, Size};
use serde::Deserialize;
use understory_overlay::containment::ParentLookup;
use understory_placement::{AnchorGeometry, PlacementConfig};
use understory_typeahead::{ResultItem, ResultKind, StaticSource, TypeaheadConfig};

/// Node handles used by the demo page.
pub type Node = &'static str;

/// Tunables a demo may load from a JSON file.
///
/// Every field is optional; missing fields keep their defaults.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Panel placement.
    pub placement: PlacementConfig,
    /// Typeahead timing and limits.
    pub typeahead: TypeaheadConfig,
}

impl DemoConfig {
    /// Reads the config at `path`, or returns defaults when no path is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading demo config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
    }

    /// Config path from the first command-line argument, if any.
    pub fn from_args() -> anyhow::Result<Self> {
        let arg = std::env::args_os().nth(1);
        Self::load(arg.as_deref().map(Path::new))
    }
}

/// Installs a `fmt` subscriber filtered by `RUST_LOG` (default `debug`).
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Where a result leads when selected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Destination {
    /// A keyword research page.
    Keyword(String),
    /// A channel overview.
    Channel(String),
    /// A single video.
    Video(String),
}

/// The mock search catalog.
pub fn catalog() -> StaticSource<Destination> {
    let keyword = |id: &str, title: &str, kind: ResultKind| {
        ResultItem::new(id, title, kind, Destination::Keyword(title.to_owned()))
            .with_category("Keywords")
    };
    StaticSource::new(vec![
        keyword("1", "black screen fix", ResultKind::Suggestion),
        keyword("2", "blender beginner", ResultKind::Suggestion),
        keyword("3", "bluetooth headphones", ResultKind::Recent),
        keyword("8", "blue", ResultKind::Trending),
        keyword("9", "green screen", ResultKind::Trending),
        ResultItem::new(
            "c1",
            "Blue Planet Studio",
            ResultKind::Result,
            Destination::Channel("UC-blueplanet".to_owned()),
        )
        .with_subtitle("1.2M subscribers")
        .with_category("Channels"),
        ResultItem::new(
            "v1",
            "Why the sky is blue",
            ResultKind::Result,
            Destination::Video("dQw4".to_owned()),
        )
        .with_subtitle("Blue Planet Studio")
        .with_category("Videos"),
    ])
}

/// The demo page: fixed header, collapsible sidebar, two panels.
#[derive(Clone, Debug)]
pub struct DashboardPage {
    /// Window size.
    pub viewport: Size,
    /// Whether the sidebar is collapsed to icons.
    pub sidebar_collapsed: bool,
}

impl Default for DashboardPage {
    fn default() -> Self {
        Self {
            viewport: Size::new(1280.0, 720.0),
            sidebar_collapsed: false,
        }
    }
}

impl DashboardPage {
    fn sidebar_width(&self) -> f64 {
        if self.sidebar_collapsed { 64.0 } else { 240.0 }
    }
}

impl AnchorGeometry<Node> for DashboardPage {
    fn anchor_rect(&self, node: Node) -> Option<Rect> {
        let w = self.viewport.width;
        let left = self.sidebar_width();
        match node {
            "search-input" => Some(Rect::new(left + 24.0, 12.0, left + 504.0, 44.0)),
            "notifications-button" => Some(Rect::new(w - 96.0, 12.0, w - 64.0, 44.0)),
            "user-button" => Some(Rect::new(w - 48.0, 12.0, w - 16.0, 44.0)),
            "create-button" => Some(Rect::new(16.0, 64.0, left - 16.0, 96.0)),
            "search-shortcut" => Some(Rect::new(w - 140.0, 12.0, w - 108.0, 44.0)),
            _ => None,
        }
    }

    fn viewport(&self) -> Size {
        self.viewport
    }
}

impl ParentLookup<Node> for DashboardPage {
    fn parent_of(&self, node: Node) -> Option<Node> {
        let parent = match node {
            "page" => return None,
            "header" | "sidebar" | "content" => "page",
            "search-input" | "notifications-button" | "user-button" | "search-shortcut" => {
                "header"
            }
            "create-button" => "sidebar",
            "create-panel" | "user-panel" | "notifications-panel" | "search-panel"
            | "search-modal" => "page",
            "create-video" | "create-short" => "create-panel",
            "user-settings" | "user-logout" => "user-panel",
            "search-modal-input" => "search-modal",
            _ => "content",
        };
        Some(parent)
    }
}

/// Logical clock for demos, advanced by hand.
#[derive(Clone, Copy, Debug, Default)]
pub struct Clock {
    now: u64,
}

impl Clock {
    /// Current time in milliseconds.
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Moves time forward and returns the new time.
    pub fn advance(&mut self, ms: u64) -> u64 {
        self.now += ms;
        self.now
    }
}
