// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Header and sidebar menus sharing one document.
//!
//! Opens the "Create" sidebar menu and the user menu together, dismisses them
//! independently, repositions after the sidebar collapses, and checks that no
//! document listeners are left behind.
//!
//! Run:
//! - `cargo run -p understory_demos --example overlay_menus [config.json]`

use understory_demos::{DashboardPage, DemoConfig, Node, init_tracing};
use understory_overlay::{Key, OverlayHost};

fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = DemoConfig::from_args()?;
    let mut page = DashboardPage::default();

    let mut host: OverlayHost<Node> = OverlayHost::new();
    host.on_open_change(|change| {
        println!("overlay {:?} open={}", change.overlay, change.open);
    });
    let create = host.insert_with_config("create-button", "create-panel", 220.0, config.placement);
    let user = host.insert_with_config("user-button", "user-panel", 260.0, config.placement);

    host.toggle(create, &page);
    host.toggle(user, &page);
    for id in host.open_overlays() {
        if let Some(pos) = host.controller(id).and_then(|c| c.position()) {
            println!(
                "{id:?} at ({}, {}) max_height={} cramped={}",
                pos.x(),
                pos.y(),
                pos.max_height,
                pos.cramped
            );
        }
    }

    // The user menu hugs the right edge, so it was shifted left.
    // Clicking a settings entry is inside the user panel but outside "Create".
    let closed = host.dispatch_pointer_down("user-settings", &page);
    println!("click on user-settings closed {closed:?}");

    // The settings item's own handler closes its menu.
    host.item_activated(user);

    host.toggle(create, &page);
    page.sidebar_collapsed = true;
    for (id, pos) in host.reposition_open(&page) {
        println!("sidebar collapsed: {id:?} moved to ({}, {})", pos.x(), pos.y());
    }

    let response = host.dispatch_key(Key::Escape);
    println!(
        "escape closed={} default_prevented={}",
        response.closed, response.default_prevented
    );

    anyhow::ensure!(
        host.document().listener_count() == 0,
        "leaked {} document listeners",
        host.document().listener_count()
    );
    println!("no document listeners left");
    Ok(())
}
