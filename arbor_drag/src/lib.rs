// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arbor Drag: the drag session state machine for the nested menu.
//!
//! A [`DragSession`] turns raw pointer events into a classified drop target.
//! It moves through three phases:
//!
//! - **Idle** — nothing pressed.
//! - **Pending** — a press is held but has not traveled past the activation
//!   distance; releasing here is an in-place click, not a drag.
//! - **Dragging** — the press traveled far enough; the session now tracks the
//!   hovered row and classifies the pointer position against it.
//!
//! Classification is *frame-driven*, not event-driven: move events only write
//! the newest pointer position into a [`PointerCell`], and the host's
//! per-frame callback calls [`DragSession::on_frame`], which reads the cell
//! and recomputes the normalized target. This keeps indicator updates in step
//! with the display refresh even when move events arrive slower, at the cost
//! of the committed zone lagging the very last pixel of movement by at most
//! one frame.
//!
//! The per-frame callback itself is modeled as a leased resource: the lease
//! is acquired on the transition into **Dragging** and released on every exit
//! path (commit, cancel, external abort). Hosts poll
//! [`DragSession::frame_lease_active`] to start and stop their frame clock,
//! so a finished session can never leak a perpetual callback.
//!
//! ```rust
//! use arbor_drag::{DragEnd, DragSession};
//! use arbor_tree::{Seed, Tree, Zone};
//! use arbor_zone::RowBand;
//! use kurbo::Point;
//!
//! let tree = Tree::from_seeds(vec![
//!     Seed::new("Inbox").child(Seed::new("Today")),
//!     Seed::new("Journal"),
//! ])
//! .unwrap();
//! let today = tree.id_of("Today").unwrap();
//! let journal = tree.id_of("Journal").unwrap();
//!
//! let mut session = DragSession::default();
//! session.on_pointer_down(today, Point::new(10.0, 10.0));
//! // Travels past the 4-unit activation distance: the drag starts.
//! assert_eq!(session.on_pointer_move(Point::new(10.0, 60.0)), Some(today));
//! assert!(session.frame_lease_active());
//!
//! // Hover Journal's row; the frame tick classifies the middle third.
//! session.set_hover(Some((journal, RowBand::new(50.0, 30.0))));
//! session.on_pointer_move(Point::new(10.0, 65.0));
//! session.on_frame(&tree);
//!
//! match session.on_pointer_up(&tree) {
//!     Some(DragEnd::Commit { source, target }) => {
//!         assert_eq!(source, today);
//!         assert_eq!(target.zone, Zone::Into);
//!     }
//!     other => panic!("expected commit, got {other:?}"),
//! }
//! assert!(!session.frame_lease_active());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod lease;
mod pointer;
mod session;

pub use lease::FrameLease;
pub use pointer::PointerCell;
pub use session::{DragConfig, DragEnd, DragSession};
