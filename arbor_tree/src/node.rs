// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node identity, seed data, and seed validation.

use alloc::string::String;
use alloc::vec::Vec;

/// Opaque identifier for a node in a [`Tree`](crate::Tree).
///
/// Ids are assigned from a monotonic counter when a tree is built from seeds
/// and stay with the node across structural moves. They are never reused
/// within one tree and carry no meaning beyond identity.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeId(pub(crate) u64);

/// Opaque handle for a renderable glyph. Cosmetic only; hosts map it to
/// whatever icon asset they use.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Icon(pub u16);

/// One entry in the tree: a label, an optional icon, and an ordered sequence
/// of owned children.
///
/// Nodes are only created by [`Tree::from_seeds`](crate::Tree::from_seeds);
/// hosts describe trees with [`Seed`] values.
#[derive(Clone, Debug)]
pub struct Node {
    pub(crate) id: NodeId,
    pub(crate) label: String,
    pub(crate) icon: Option<Icon>,
    pub(crate) children: Vec<Node>,
}

impl Node {
    /// The node's identity.
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The display label.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The cosmetic icon handle, if any.
    #[inline]
    pub fn icon(&self) -> Option<Icon> {
        self.icon
    }

    /// The ordered children of this node.
    #[inline]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Whether this node has any children.
    #[inline]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// `true` if `id` names this node or any node in its subtree.
    pub(crate) fn subtree_contains(&self, id: NodeId) -> bool {
        self.id == id || self.children.iter().any(|child| child.subtree_contains(id))
    }

    /// Number of nodes in this subtree, including this node.
    pub(crate) fn subtree_len(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(Node::subtree_len)
            .sum::<usize>()
    }
}

/// Host-authored description of a node, used to build a [`Tree`](crate::Tree).
///
/// Seeds are plain owned data; every tree instance deep-copies its own nodes
/// out of them, so two menus built from the same seed expression can never
/// corrupt each other.
///
/// ```rust
/// use arbor_tree::{Icon, Seed};
///
/// let seed = Seed::new("Journal")
///     .icon(Icon(2))
///     .child(Seed::new("Trips"))
///     .child(Seed::new("Events"));
/// ```
#[derive(Clone, Debug)]
pub struct Seed {
    pub(crate) label: String,
    pub(crate) icon: Option<Icon>,
    pub(crate) children: Vec<Seed>,
}

impl Seed {
    /// Create a leaf seed with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: None,
            children: Vec::new(),
        }
    }

    /// Attach a cosmetic icon handle.
    #[must_use]
    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Append one child seed.
    #[must_use]
    pub fn child(mut self, child: Seed) -> Self {
        self.children.push(child);
        self
    }

    /// Append several child seeds.
    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Seed>) -> Self {
        self.children.extend(children);
        self
    }
}

/// Error rejecting a malformed seed tree at construction time.
///
/// Label uniqueness is the one invariant that cannot be enforced by the type
/// system (cycles already are, by ownership), so it is checked once up front
/// and never again.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SeedError {
    /// The same label appears on two nodes anywhere in the seed tree.
    DuplicateLabel(String),
}

impl core::fmt::Display for SeedError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::DuplicateLabel(label) => {
                write!(f, "duplicate node label in seed tree: {label:?}")
            }
        }
    }
}

impl core::error::Error for SeedError {}
