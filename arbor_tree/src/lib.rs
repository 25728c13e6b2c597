// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arbor Tree: the owned tree model behind the nested drag-and-drop menu.
//!
//! This crate owns the structural side of the menu: a recursively nested,
//! ordered tree of labeled nodes, addressed by opaque [`NodeId`]s that are
//! assigned once at construction. Display labels are host-facing strings and
//! play no role in the algorithms; they are validated for global uniqueness at
//! seed time only because host configuration (pre-expanded sets, exclusions)
//! addresses nodes by label.
//!
//! Structural mutation is copy-on-write: [`Tree::remove`] and [`Tree::insert`]
//! return a *new* tree, leaving the receiver untouched, so an in-flight render
//! holding the old tree always sees a consistent snapshot. The sole compound
//! mutation path is [`Tree::move_node`] — remove-then-insert — which
//! guarantees a moved node never appears twice and never loses its own
//! subtree.
//!
//! ## Minimal example
//!
//! ```rust
//! use arbor_tree::{Seed, Tree, Zone};
//!
//! let tree = Tree::from_seeds(vec![
//!     Seed::new("Inbox")
//!         .child(Seed::new("Today"))
//!         .child(Seed::new("Later")),
//!     Seed::new("Journal").child(Seed::new("Trips")),
//! ])
//! .unwrap();
//!
//! let today = tree.id_of("Today").unwrap();
//! let journal = tree.id_of("Journal").unwrap();
//!
//! // Move "Today" into "Journal". The original tree is untouched.
//! let moved = tree.move_node(today, journal, Zone::Into).unwrap();
//! assert_eq!(tree.get(today).unwrap().label(), "Today");
//! assert_eq!(
//!     moved.context(today).unwrap().parent,
//!     Some(journal),
//! );
//! ```
//!
//! Cycles are unrepresentable: every [`Node`] owns its children outright, and
//! [`Tree::move_node`] refuses to place a node inside its own subtree, so the
//! strict-hierarchy invariant holds after every mutation.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod expansion;
mod node;
mod tree;

pub use expansion::ExpansionSet;
pub use node::{Icon, Node, NodeId, Seed, SeedError};
pub use tree::{Dfs, SiblingContext, Tree, Zone};
