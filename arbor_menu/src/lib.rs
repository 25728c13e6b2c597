// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arbor Menu: a headless nested drag-and-drop menu.
//!
//! [`NestedMenu`] ties the Arbor pieces together: a tree of labeled nodes
//! ([`arbor_tree`]), an expansion set, zone classification ([`arbor_zone`]),
//! and one drag session ([`arbor_drag`]). It owns no rendering and no event
//! loop; the host feeds it pointer events in menu-local coordinates, runs a
//! frame clock while [`NestedMenu::needs_frame`] holds, and draws whatever
//! [`NestedMenu::rows`] describes.
//!
//! ```rust
//! use arbor_menu::{MenuConfig, MenuEvent, NestedMenu};
//! use arbor_tree::Seed;
//! use kurbo::Point;
//!
//! let mut menu = NestedMenu::new(
//!     MenuConfig::default(),
//!     vec![
//!         Seed::new("Inbox").child(Seed::new("Today")),
//!         Seed::new("Notes"),
//!     ],
//! )
//! .unwrap();
//!
//! // Press Notes and drag it over Inbox's middle third.
//! let rows = menu.rows();
//! let notes_center = rows[1].visual_bounds.center();
//! let inbox_center = rows[0].visual_bounds.center();
//! menu.pointer_down(Point::new(notes_center.x, notes_center.y));
//! menu.pointer_move(Point::new(inbox_center.x, inbox_center.y));
//! assert!(menu.needs_frame());
//! menu.on_frame();
//!
//! let event = menu.pointer_up();
//! assert!(matches!(event, Some(MenuEvent::Moved { .. })));
//! // The drop nested Notes inside Inbox and expanded it.
//! let labels: Vec<&str> = menu.rows().iter().map(|row| row.label).collect();
//! assert_eq!(labels, ["Inbox", "Today", "Notes"]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod menu;
mod row;

pub use config::{MenuConfig, MenuOptions};
pub use menu::{MenuEvent, NestedMenu};
pub use row::{Indicator, Row, RowHit, RowPart};
