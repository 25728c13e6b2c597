// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The menu controller.

use alloc::vec::Vec;

use arbor_drag::{DragEnd, DragSession};
use arbor_tree::{ExpansionSet, NodeId, Seed, SeedError, Tree, Zone};
use arbor_zone::DropTarget;
use kurbo::Point;

use crate::config::MenuConfig;
use crate::row::{self, Row, RowHit, RowPart};

/// Something the menu did in response to pointer input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MenuEvent {
    /// A row was clicked without dragging.
    Clicked(NodeId),
    /// A disclosure press flipped a row's expansion.
    ToggledExpand {
        /// The toggled row.
        id: NodeId,
        /// The state after the toggle.
        expanded: bool,
    },
    /// A drag committed and the node was moved.
    Moved {
        /// The dragged node.
        source: NodeId,
        /// Where it landed.
        target: DropTarget,
    },
    /// The "more actions" affordance was pressed.
    MorePressed(NodeId),
}

/// A headless nested menu: the tree, its expansion state, and one drag
/// session, driven by pointer events and a frame clock the host supplies.
///
/// The host feeds [`NestedMenu::pointer_down`], [`NestedMenu::pointer_move`],
/// and [`NestedMenu::pointer_up`], runs [`NestedMenu::on_frame`] once per
/// display frame while [`NestedMenu::needs_frame`] holds, and renders
/// [`NestedMenu::rows`].
#[derive(Debug)]
pub struct NestedMenu {
    config: MenuConfig,
    tree: Tree,
    expansion: ExpansionSet,
    session: DragSession,
}

impl NestedMenu {
    /// Build a menu from seed nodes.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::DuplicateLabel`] when two seeds share a label.
    pub fn new(config: MenuConfig, seeds: Vec<Seed>) -> Result<Self, SeedError> {
        Self::with_setup(config, seeds, &[], &[])
    }

    /// Build a menu from seed nodes, pre-expanding the nodes named by
    /// `expanded` and dropping the subtrees named by `excluded`.
    ///
    /// Labels in either list with no matching node are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::DuplicateLabel`] when two surviving seeds share
    /// a label.
    pub fn with_setup(
        config: MenuConfig,
        seeds: Vec<Seed>,
        expanded: &[&str],
        excluded: &[&str],
    ) -> Result<Self, SeedError> {
        let tree = Tree::from_seeds_filtered(seeds, excluded)?;
        let mut expansion = ExpansionSet::new();
        for label in expanded {
            if let Some(id) = tree.id_of(label) {
                expansion.insert(id);
            }
        }
        let session = DragSession::new(config.drag_config());
        Ok(Self {
            config,
            tree,
            expansion,
            session,
        })
    }

    /// The menu's config.
    #[must_use]
    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    /// The current tree.
    #[must_use]
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// The current expansion state.
    #[must_use]
    pub fn expansion(&self) -> &ExpansionSet {
        &self.expansion
    }

    /// The node being dragged, if a drag is active.
    #[must_use]
    pub fn active(&self) -> Option<NodeId> {
        self.session.active()
    }

    /// `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_dragging()
    }

    /// Whether the host should be running its frame clock.
    #[must_use]
    pub fn needs_frame(&self) -> bool {
        self.session.frame_lease_active()
    }

    /// The visible rows, positioned and annotated, in top-to-bottom order.
    #[must_use]
    pub fn rows(&self) -> Vec<Row<'_>> {
        row::flatten(
            &self.tree,
            &self.expansion,
            &self.config,
            self.session.active(),
            self.session.normalized_target(),
        )
    }

    /// The row and part under `point`, if any.
    #[must_use]
    pub fn hit(&self, point: Point) -> Option<RowHit> {
        row::hit_test(&self.rows(), point)
    }

    /// Flip a row's expansion. Rows without children have nothing to expand
    /// and are left alone.
    pub fn toggle_expanded(&mut self, id: NodeId) -> Option<MenuEvent> {
        let node = self.tree.get(id)?;
        if !node.has_children() {
            return None;
        }
        let expanded = self.expansion.toggle(id);
        Some(MenuEvent::ToggledExpand { id, expanded })
    }

    /// Expand every ancestor of `id` so its row is visible.
    pub fn reveal(&mut self, id: NodeId) {
        if let Some(path) = self.tree.path_to(id) {
            // The path ends at the node itself, which stays as it was.
            for ancestor in path.iter().take(path.len().saturating_sub(1)) {
                self.expansion.insert(*ancestor);
            }
        }
    }

    /// A pointer press.
    ///
    /// Presses on the disclosure or "more actions" affordances resolve
    /// immediately and never reach the drag session; presses on a row body
    /// start a pending gesture that [`NestedMenu::pointer_up`] resolves.
    pub fn pointer_down(&mut self, point: Point) -> Option<MenuEvent> {
        let hit = self.hit(point)?;
        match hit.part {
            RowPart::Disclosure => self.toggle_expanded(hit.id),
            RowPart::More => Some(MenuEvent::MorePressed(hit.id)),
            RowPart::Body => {
                self.session.on_pointer_down(hit.id, point);
                None
            }
        }
    }

    /// A pointer move.
    ///
    /// Returns the dragged node at the moment the gesture activates, so the
    /// host can present a drag ghost. While dragging, also refreshes which
    /// row is hovered; classification itself waits for the next frame tick.
    pub fn pointer_move(&mut self, point: Point) -> Option<NodeId> {
        let activated = self.session.on_pointer_move(point);
        if self.session.is_dragging() {
            let hover = self
                .rows()
                .iter()
                .find(|row| row.part_at(point).is_some())
                .map(|row| (row.id, row.band()));
            self.session.set_hover(hover);
        }
        activated
    }

    /// One frame tick: classify the latest pointer position against the
    /// hovered row. Call once per display frame while
    /// [`NestedMenu::needs_frame`] holds.
    pub fn on_frame(&mut self) -> Option<DropTarget> {
        self.session.on_frame(&self.tree)
    }

    /// A pointer release: resolve the gesture.
    ///
    /// A committed drag replaces the tree with the moved version; a drop
    /// into a row also expands that row so the moved node stays visible.
    pub fn pointer_up(&mut self) -> Option<MenuEvent> {
        match self.session.on_pointer_up(&self.tree)? {
            DragEnd::Click(id) => Some(MenuEvent::Clicked(id)),
            DragEnd::Canceled => None,
            DragEnd::Commit { source, target } => {
                let moved = self.tree.move_node(source, target.id, target.zone)?;
                self.tree = moved;
                if target.zone == Zone::Into {
                    self.expansion.insert(target.id);
                }
                Some(MenuEvent::Moved { source, target })
            }
        }
    }

    /// Abort any gesture in flight, leaving the tree untouched.
    pub fn cancel_drag(&mut self) {
        self.session.cancel();
    }
}
