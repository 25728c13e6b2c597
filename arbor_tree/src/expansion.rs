// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Which nodes currently show their children.

use hashbrown::HashSet;

use crate::node::NodeId;

/// The set of nodes whose children are rendered.
///
/// Expansion is tracked separately from the tree structure and keyed by
/// [`NodeId`], so an expanded node that is moved elsewhere stays expanded.
/// Unlike the tree itself this set is mutated in place; it is only ever
/// touched from the single UI thread driving the menu.
#[derive(Clone, Debug, Default)]
pub struct ExpansionSet {
    expanded: HashSet<NodeId>,
}

impl ExpansionSet {
    /// Create an empty set: everything collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` if `id` is expanded.
    pub fn contains(&self, id: NodeId) -> bool {
        self.expanded.contains(&id)
    }

    /// Expand `id`. Returns `true` if it was newly inserted.
    pub fn insert(&mut self, id: NodeId) -> bool {
        self.expanded.insert(id)
    }

    /// Collapse `id`. Returns `true` if it was present.
    pub fn remove(&mut self, id: NodeId) -> bool {
        self.expanded.remove(&id)
    }

    /// Flip `id` and return its new expanded state.
    pub fn toggle(&mut self, id: NodeId) -> bool {
        if self.expanded.remove(&id) {
            false
        } else {
            self.expanded.insert(id);
            true
        }
    }

    /// Number of expanded nodes.
    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    /// `true` if nothing is expanded.
    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    /// Iterate over the expanded ids in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.expanded.iter().copied()
    }
}
