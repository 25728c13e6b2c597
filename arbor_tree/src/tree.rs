// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree construction, queries, and copy-on-write structural mutation.

use alloc::vec::Vec;
use hashbrown::HashSet;
use smallvec::SmallVec;

use crate::node::{Node, NodeId, Seed, SeedError};

/// Where a node lands relative to a drop target.
///
/// `Above`/`Below` insert as an immediate sibling of the target, at the
/// target's nesting level. `Into` appends as the target's last child.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Zone {
    /// Immediately before the target, among the target's siblings.
    Above,
    /// As the last child of the target.
    Into,
    /// Immediately after the target, among the target's siblings.
    Below,
}

/// The sibling sequence containing a node, and its position within it.
///
/// Parent and index are recomputed on demand; nodes store no back-references.
#[derive(Copy, Clone, Debug)]
pub struct SiblingContext<'a> {
    /// Id of the parent node, or `None` for a root-level node.
    pub parent: Option<NodeId>,
    /// The ordered sibling sequence the node lives in.
    pub siblings: &'a [Node],
    /// The node's position within `siblings`.
    pub index: usize,
}

impl<'a> SiblingContext<'a> {
    /// The sibling immediately following this node, if any.
    #[must_use]
    pub fn next_sibling(&self) -> Option<&'a Node> {
        self.siblings.get(self.index + 1)
    }
}

/// An ordered forest of [`Node`]s with stable opaque ids.
///
/// All mutation is copy-on-write: [`Tree::remove`] and [`Tree::insert`]
/// return a fresh tree and never touch the receiver. See the crate docs for
/// the full contract.
#[derive(Clone, Debug)]
pub struct Tree {
    roots: Vec<Node>,
    next_id: u64,
}

impl Tree {
    /// Build a tree from seed data, assigning ids in depth-first order.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::DuplicateLabel`] if any label appears twice
    /// anywhere in the seed tree.
    pub fn from_seeds(seeds: impl Into<Vec<Seed>>) -> Result<Self, SeedError> {
        Self::from_seeds_filtered(seeds, &[])
    }

    /// Like [`Tree::from_seeds`], but drops any seed (and its whole subtree)
    /// whose label is listed in `exclude` before ids are assigned.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::DuplicateLabel`] if a label appears twice among
    /// the seeds that survive the filter.
    pub fn from_seeds_filtered(
        seeds: impl Into<Vec<Seed>>,
        exclude: &[&str],
    ) -> Result<Self, SeedError> {
        let excluded: HashSet<&str> = exclude.iter().copied().collect();
        let mut seen: HashSet<alloc::string::String> = HashSet::new();
        let mut next_id = 0;
        let roots = build_nodes(seeds.into(), &excluded, &mut seen, &mut next_id)?;
        Ok(Self { roots, next_id })
    }

    /// The root-level nodes, in order.
    #[inline]
    pub fn roots(&self) -> &[Node] {
        &self.roots
    }

    /// Total number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.roots.iter().map(Node::subtree_len).sum()
    }

    /// `true` if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// `true` if `id` names a node anywhere in the tree.
    pub fn contains(&self, id: NodeId) -> bool {
        self.roots.iter().any(|node| node.subtree_contains(id))
    }

    /// Depth-first lookup of a node by id.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        find_node(&self.roots, id)
    }

    /// Map a host-facing label to the node's opaque id.
    ///
    /// Labels are unique by construction, so this is unambiguous.
    pub fn id_of(&self, label: &str) -> Option<NodeId> {
        self.iter().find(|node| node.label() == label).map(Node::id)
    }

    /// Locate the sibling sequence containing `id` and its position in it.
    pub fn context(&self, id: NodeId) -> Option<SiblingContext<'_>> {
        context_in(&self.roots, None, id)
    }

    /// Ids from a root down to `id`, inclusive.
    pub fn path_to(&self, id: NodeId) -> Option<SmallVec<[NodeId; 8]>> {
        let mut path = SmallVec::new();
        if path_in(&self.roots, id, &mut path) {
            Some(path)
        } else {
            None
        }
    }

    /// `true` if `candidate` lives strictly inside `ancestor`'s subtree.
    ///
    /// A node is not its own descendant.
    pub fn is_descendant(&self, ancestor: NodeId, candidate: NodeId) -> bool {
        self.get(ancestor).is_some_and(|node| {
            node.children
                .iter()
                .any(|child| child.subtree_contains(candidate))
        })
    }

    /// Depth-first iterator over every node in the tree.
    pub fn iter(&self) -> Dfs<'_> {
        let mut stack = SmallVec::new();
        stack.extend(self.roots.iter().rev());
        Dfs { stack }
    }

    /// Excise the node named by `id`, keeping its subtree intact.
    ///
    /// Returns the new tree and the removed node, or the tree unchanged and
    /// `None` if `id` is not present.
    #[must_use]
    pub fn remove(&self, id: NodeId) -> (Self, Option<Node>) {
        let mut roots = self.roots.clone();
        let removed = remove_in(&mut roots, id);
        (
            Self {
                roots,
                next_id: self.next_id,
            },
            removed,
        )
    }

    /// Reinsert `node` relative to `target` according to `zone`.
    ///
    /// If `target` is not present the tree is returned unchanged and `node`
    /// is dropped — a silent no-op, not an error, because the target may have
    /// legitimately disappeared in the removal phase of the same move.
    #[must_use]
    pub fn insert(&self, node: Node, target: NodeId, zone: Zone) -> Self {
        let mut roots = self.roots.clone();
        let mut carrier = Some(node);
        insert_in(&mut roots, &mut carrier, target, zone);
        Self {
            roots,
            next_id: self.next_id,
        }
    }

    /// The sole compound mutation path: remove `source`, then insert it
    /// relative to `target`.
    ///
    /// Returns `None` — tree untouched — when the move is invalid: `source`
    /// missing, `target` equal to `source` or inside `source`'s subtree, or
    /// `target` absent after removal. This check is deliberately repeated
    /// here even though callers gate hover targets the same way.
    #[must_use]
    pub fn move_node(&self, source: NodeId, target: NodeId, zone: Zone) -> Option<Self> {
        if source == target || self.is_descendant(source, target) {
            return None;
        }
        let (pruned, removed) = self.remove(source);
        let removed = removed?;
        if !pruned.contains(target) {
            return None;
        }
        Some(pruned.insert(removed, target, zone))
    }
}

/// Depth-first node iterator, see [`Tree::iter`].
#[derive(Clone, Debug)]
pub struct Dfs<'a> {
    stack: SmallVec<[&'a Node; 16]>,
}

impl<'a> Iterator for Dfs<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

fn build_nodes(
    seeds: Vec<Seed>,
    excluded: &HashSet<&str>,
    seen: &mut HashSet<alloc::string::String>,
    next_id: &mut u64,
) -> Result<Vec<Node>, SeedError> {
    let mut out = Vec::with_capacity(seeds.len());
    for seed in seeds {
        if excluded.contains(seed.label.as_str()) {
            continue;
        }
        if !seen.insert(seed.label.clone()) {
            return Err(SeedError::DuplicateLabel(seed.label));
        }
        let id = NodeId(*next_id);
        *next_id += 1;
        let children = build_nodes(seed.children, excluded, seen, next_id)?;
        out.push(Node {
            id,
            label: seed.label,
            icon: seed.icon,
            children,
        });
    }
    Ok(out)
}

fn find_node(siblings: &[Node], id: NodeId) -> Option<&Node> {
    for node in siblings {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_node(&node.children, id) {
            return Some(found);
        }
    }
    None
}

fn context_in<'a>(
    siblings: &'a [Node],
    parent: Option<NodeId>,
    id: NodeId,
) -> Option<SiblingContext<'a>> {
    for (index, node) in siblings.iter().enumerate() {
        if node.id == id {
            return Some(SiblingContext {
                parent,
                siblings,
                index,
            });
        }
    }
    for node in siblings {
        if let Some(found) = context_in(&node.children, Some(node.id), id) {
            return Some(found);
        }
    }
    None
}

fn path_in(siblings: &[Node], id: NodeId, path: &mut SmallVec<[NodeId; 8]>) -> bool {
    for node in siblings {
        path.push(node.id);
        if node.id == id || path_in(&node.children, id, path) {
            return true;
        }
        path.pop();
    }
    false
}

fn remove_in(siblings: &mut Vec<Node>, id: NodeId) -> Option<Node> {
    if let Some(index) = siblings.iter().position(|node| node.id == id) {
        return Some(siblings.remove(index));
    }
    for node in siblings.iter_mut() {
        if let Some(removed) = remove_in(&mut node.children, id) {
            return Some(removed);
        }
    }
    None
}

fn insert_in(
    siblings: &mut Vec<Node>,
    carrier: &mut Option<Node>,
    target: NodeId,
    zone: Zone,
) -> bool {
    if let Some(index) = siblings.iter().position(|node| node.id == target) {
        let Some(node) = carrier.take() else {
            return true;
        };
        match zone {
            Zone::Above => siblings.insert(index, node),
            Zone::Below => siblings.insert(index + 1, node),
            Zone::Into => siblings[index].children.push(node),
        }
        return true;
    }
    for node in siblings.iter_mut() {
        if insert_in(&mut node.children, carrier, target, zone) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;

    fn seed_forest() -> Vec<Seed> {
        vec![
            Seed::new("Inbox")
                .child(Seed::new("Today"))
                .child(Seed::new("Later"))
                .child(Seed::new("Past")),
            Seed::new("Journal").child(Seed::new("Trips").child(Seed::new("Summer"))),
        ]
    }

    fn dump(siblings: &[Node], depth: usize, out: &mut String) {
        for node in siblings {
            for _ in 0..depth {
                out.push_str("  ");
            }
            out.push_str(node.label());
            out.push('\n');
            dump(node.children(), depth + 1, out);
        }
    }

    fn shape(tree: &Tree) -> String {
        let mut out = String::new();
        dump(tree.roots(), 0, &mut out);
        out
    }

    #[test]
    fn duplicate_label_is_rejected() {
        let err = Tree::from_seeds(vec![
            Seed::new("Inbox").child(Seed::new("Today")),
            Seed::new("Today"),
        ])
        .unwrap_err();
        assert_eq!(err, SeedError::DuplicateLabel("Today".into()));
    }

    #[test]
    fn excluded_labels_drop_whole_subtrees() {
        let tree = Tree::from_seeds_filtered(seed_forest(), &["Trips"]).unwrap();
        assert!(tree.id_of("Trips").is_none());
        assert!(tree.id_of("Summer").is_none(), "subtree goes with it");
        assert!(tree.id_of("Journal").is_some());
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn exclusion_unblocks_duplicate_labels_outside_the_filter() {
        // The duplicate lives inside an excluded subtree, so the survivor
        // set is valid.
        let tree = Tree::from_seeds_filtered(
            vec![Seed::new("A").child(Seed::new("B")), Seed::new("B")],
            &["A"],
        )
        .unwrap();
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn ids_are_unique_and_lookup_roundtrips() {
        let tree = Tree::from_seeds(seed_forest()).unwrap();
        let mut ids: Vec<NodeId> = tree.iter().map(Node::id).collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total, "every id appears exactly once");

        let trips = tree.id_of("Trips").unwrap();
        assert_eq!(tree.get(trips).unwrap().label(), "Trips");
    }

    #[test]
    fn context_reports_parent_siblings_and_index() {
        let tree = Tree::from_seeds(seed_forest()).unwrap();
        let later = tree.id_of("Later").unwrap();
        let inbox = tree.id_of("Inbox").unwrap();

        let ctx = tree.context(later).unwrap();
        assert_eq!(ctx.parent, Some(inbox));
        assert_eq!(ctx.index, 1);
        assert_eq!(ctx.siblings.len(), 3);
        assert_eq!(ctx.next_sibling().unwrap().label(), "Past");

        let root_ctx = tree.context(inbox).unwrap();
        assert_eq!(root_ctx.parent, None);
        assert_eq!(root_ctx.index, 0);
    }

    #[test]
    fn last_sibling_has_no_next() {
        let tree = Tree::from_seeds(seed_forest()).unwrap();
        let past = tree.id_of("Past").unwrap();
        assert!(tree.context(past).unwrap().next_sibling().is_none());
    }

    #[test]
    fn descendant_check_is_strict() {
        let tree = Tree::from_seeds(seed_forest()).unwrap();
        let journal = tree.id_of("Journal").unwrap();
        let summer = tree.id_of("Summer").unwrap();
        let inbox = tree.id_of("Inbox").unwrap();

        assert!(tree.is_descendant(journal, summer));
        assert!(!tree.is_descendant(summer, journal));
        assert!(!tree.is_descendant(journal, journal), "not its own descendant");
        assert!(!tree.is_descendant(inbox, summer));
    }

    #[test]
    fn path_to_walks_root_to_node() {
        let tree = Tree::from_seeds(seed_forest()).unwrap();
        let summer = tree.id_of("Summer").unwrap();
        let path = tree.path_to(summer).unwrap();
        let labels: Vec<&str> = path
            .iter()
            .map(|id| tree.get(*id).unwrap().label())
            .collect();
        assert_eq!(labels, ["Journal", "Trips", "Summer"]);
    }

    #[test]
    fn remove_keeps_subtree_and_leaves_receiver_untouched() {
        let tree = Tree::from_seeds(seed_forest()).unwrap();
        let trips = tree.id_of("Trips").unwrap();

        let (pruned, removed) = tree.remove(trips);
        let removed = removed.unwrap();
        assert_eq!(removed.label(), "Trips");
        assert_eq!(removed.children().len(), 1, "subtree travels with the node");
        assert!(!pruned.contains(trips));

        // Copy-on-write: the original still has the node.
        assert!(tree.contains(trips));
        assert_eq!(tree.len(), pruned.len() + removed.subtree_len());
    }

    #[test]
    fn remove_of_unknown_id_returns_unchanged_tree() {
        let tree = Tree::from_seeds(seed_forest()).unwrap();
        let (same, removed) = tree.remove(NodeId(999));
        assert!(removed.is_none());
        assert_eq!(shape(&same), shape(&tree));
    }

    #[test]
    fn insert_above_below_and_into() {
        let tree = Tree::from_seeds(seed_forest()).unwrap();
        let today = tree.id_of("Today").unwrap();
        let past = tree.id_of("Past").unwrap();
        let journal = tree.id_of("Journal").unwrap();

        let (pruned, removed) = tree.remove(today);
        let node = removed.unwrap();

        let above = pruned.insert(node.clone(), past, Zone::Above);
        assert_eq!(
            shape(&above),
            "Inbox\n  Later\n  Today\n  Past\nJournal\n  Trips\n    Summer\n"
        );

        let below = pruned.insert(node.clone(), past, Zone::Below);
        assert_eq!(
            shape(&below),
            "Inbox\n  Later\n  Past\n  Today\nJournal\n  Trips\n    Summer\n"
        );

        let into = pruned.insert(node, journal, Zone::Into);
        assert_eq!(
            shape(&into),
            "Inbox\n  Later\n  Past\nJournal\n  Trips\n    Summer\n  Today\n"
        );
    }

    #[test]
    fn insert_with_missing_target_is_a_silent_noop() {
        let tree = Tree::from_seeds(seed_forest()).unwrap();
        let today = tree.id_of("Today").unwrap();
        let (pruned, removed) = tree.remove(today);

        let unchanged = pruned.insert(removed.unwrap(), NodeId(999), Zone::Into);
        assert_eq!(shape(&unchanged), shape(&pruned));
    }

    #[test]
    fn move_node_round_trip_preserves_every_node_exactly_once() {
        let tree = Tree::from_seeds(seed_forest()).unwrap();
        let today = tree.id_of("Today").unwrap();
        let journal = tree.id_of("Journal").unwrap();

        let moved = tree.move_node(today, journal, Zone::Into).unwrap();
        assert_eq!(moved.len(), tree.len());

        let mut ids: Vec<NodeId> = moved.iter().map(Node::id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), tree.len(), "no node duplicated or lost");
        assert_eq!(moved.context(today).unwrap().parent, Some(journal));
    }

    #[test]
    fn move_onto_self_or_descendant_is_rejected() {
        let tree = Tree::from_seeds(seed_forest()).unwrap();
        let journal = tree.id_of("Journal").unwrap();
        let summer = tree.id_of("Summer").unwrap();

        assert!(tree.move_node(journal, journal, Zone::Into).is_none());
        assert!(tree.move_node(journal, summer, Zone::Into).is_none());
        assert!(tree.move_node(journal, summer, Zone::Above).is_none());
    }

    #[test]
    fn reorder_within_siblings() {
        let tree = Tree::from_seeds(seed_forest()).unwrap();
        let later = tree.id_of("Later").unwrap();
        let today = tree.id_of("Today").unwrap();

        let moved = tree.move_node(later, today, Zone::Above).unwrap();
        assert_eq!(
            shape(&moved),
            "Inbox\n  Later\n  Today\n  Past\nJournal\n  Trips\n    Summer\n"
        );
    }

    #[test]
    fn labels_stay_unique_across_a_sequence_of_moves() {
        let mut tree = Tree::from_seeds(seed_forest()).unwrap();
        let moves = [
            ("Today", "Journal", Zone::Into),
            ("Past", "Summer", Zone::Into),
            ("Trips", "Inbox", Zone::Below),
            ("Later", "Trips", Zone::Above),
        ];
        for (source, target, zone) in moves {
            let source = tree.id_of(source).unwrap();
            let target = tree.id_of(target).unwrap();
            tree = tree.move_node(source, target, zone).unwrap();

            let mut labels: Vec<&str> = tree.iter().map(Node::label).collect();
            let total = labels.len();
            labels.sort_unstable();
            labels.dedup();
            assert_eq!(labels.len(), total);
            assert_eq!(total, 7);
        }
    }
}
