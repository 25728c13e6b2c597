// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flattening the expanded tree into positioned rows, and hit testing them.

use alloc::vec::Vec;

use arbor_tree::{ExpansionSet, Icon, Node, NodeId, Tree, Zone};
use arbor_zone::{DropTarget, RowBand};
use kurbo::{Point, Rect};

use crate::config::{MenuConfig, MenuOptions};

/// Drop feedback to draw on a row during a drag.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Indicator {
    /// A line along the row's top edge: the drop lands before this row.
    LineAbove,
    /// A line along the row's bottom edge: the drop lands after this row.
    LineBelow,
    /// A fill over the whole row: the drop nests inside this row.
    FillInto,
}

/// The interactive region of a row a point falls in.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RowPart {
    /// The expand/collapse affordance. Presses here toggle expansion and
    /// never start a drag.
    Disclosure,
    /// The row-end "more actions" affordance.
    More,
    /// The rest of the row; presses here can become drags.
    Body,
}

/// A hit-test result: which row, and which part of it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RowHit {
    /// The row's node.
    pub id: NodeId,
    /// The part of the row the point fell in.
    pub part: RowPart,
}

/// One visible row of the menu, positioned and annotated for the host to
/// render. Produced fresh by [`crate::NestedMenu::rows`]; borrows its label
/// from the tree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Row<'a> {
    /// The node this row presents.
    pub id: NodeId,
    /// Nesting depth; roots are 0.
    pub depth: usize,
    /// The node's label.
    pub label: &'a str,
    /// The node's icon, if any.
    pub icon: Option<Icon>,
    /// Whether the node has children.
    pub has_children: bool,
    /// Whether the node's children are currently shown.
    pub expanded: bool,
    /// Whether a disclosure affordance is shown on this row.
    pub shows_disclosure: bool,
    /// Whether this row's node is the one being dragged.
    pub dragging: bool,
    /// Drop feedback to draw, if the current drag targets this row.
    pub indicator: Option<Indicator>,
    /// Where the row's content is drawn, inset by its indentation.
    pub visual_bounds: Rect,
    /// Where the row responds to the pointer. Spans the full menu width
    /// under [`MenuOptions::FULL_WIDTH_HOVER`], else equals the visual
    /// bounds.
    pub hit_bounds: Rect,
}

impl Row<'_> {
    /// The row's vertical extent, for zone classification.
    #[must_use]
    pub fn band(&self) -> RowBand {
        RowBand::from_rect(self.hit_bounds)
    }

    /// Which part of the row `point` falls in, or `None` when the point is
    /// outside the row's hit bounds.
    #[must_use]
    pub fn part_at(&self, point: Point) -> Option<RowPart> {
        if !self.hit_bounds.contains(point) {
            return None;
        }
        if self.shows_disclosure && self.disclosure_bounds().contains(point) {
            return Some(RowPart::Disclosure);
        }
        if self.more_bounds().contains(point) {
            return Some(RowPart::More);
        }
        Some(RowPart::Body)
    }

    /// The square at the row's leading edge holding the disclosure
    /// affordance. Meaningful only when [`Row::shows_disclosure`] holds.
    #[must_use]
    pub fn disclosure_bounds(&self) -> Rect {
        let side = self.visual_bounds.height();
        Rect::new(
            self.visual_bounds.x0,
            self.visual_bounds.y0,
            self.visual_bounds.x0 + side,
            self.visual_bounds.y1,
        )
    }

    /// The square at the row's trailing edge holding the "more actions"
    /// affordance.
    #[must_use]
    pub fn more_bounds(&self) -> Rect {
        let side = self.visual_bounds.height();
        Rect::new(
            self.visual_bounds.x1 - side,
            self.visual_bounds.y0,
            self.visual_bounds.x1,
            self.visual_bounds.y1,
        )
    }
}

/// Flatten the expanded portion of `tree` into positioned rows.
///
/// Rows appear in depth-first order; children of collapsed nodes are
/// skipped. `active` marks the dragged row and `target` attaches drop
/// indicators.
#[must_use]
pub fn flatten<'a>(
    tree: &'a Tree,
    expansion: &ExpansionSet,
    config: &MenuConfig,
    active: Option<NodeId>,
    target: Option<DropTarget>,
) -> Vec<Row<'a>> {
    let mut rows = Vec::new();
    for root in tree.roots() {
        push_rows(root, 0, expansion, config, active, target, &mut rows);
    }
    rows
}

fn push_rows<'a>(
    node: &'a Node,
    depth: usize,
    expansion: &ExpansionSet,
    config: &MenuConfig,
    active: Option<NodeId>,
    target: Option<DropTarget>,
    rows: &mut Vec<Row<'a>>,
) {
    let top = rows.len() as f64 * config.row_height;
    let indent = depth as f64 * config.indent_width;
    let visual_bounds = Rect::new(indent, top, config.width, top + config.row_height);
    let hit_bounds = if config.options.contains(MenuOptions::FULL_WIDTH_HOVER) {
        Rect::new(0.0, top, config.width, top + config.row_height)
    } else {
        visual_bounds
    };
    let expanded = expansion.contains(node.id());
    rows.push(Row {
        id: node.id(),
        depth,
        label: node.label(),
        icon: node.icon(),
        has_children: node.has_children(),
        expanded,
        shows_disclosure: node.has_children()
            || config.options.contains(MenuOptions::ALWAYS_SHOW_DISCLOSURE),
        dragging: active == Some(node.id()),
        indicator: target.and_then(|t| {
            (t.id == node.id()).then(|| match t.zone {
                Zone::Above => Indicator::LineAbove,
                Zone::Into => Indicator::FillInto,
                Zone::Below => Indicator::LineBelow,
            })
        }),
        visual_bounds,
        hit_bounds,
    });
    if expanded {
        for child in node.children() {
            push_rows(child, depth + 1, expansion, config, active, target, rows);
        }
    }
}

/// Find the row under `point`, if any.
#[must_use]
pub fn hit_test(rows: &[Row<'_>], point: Point) -> Option<RowHit> {
    rows.iter().find_map(|row| {
        row.part_at(point).map(|part| RowHit { id: row.id, part })
    })
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use arbor_tree::Seed;

    use super::*;

    fn sample_tree() -> Tree {
        Tree::from_seeds(vec![
            Seed::new("Inbox")
                .child(Seed::new("Today"))
                .child(Seed::new("Later")),
            Seed::new("Journal").child(Seed::new("Trips")),
            Seed::new("Notes"),
        ])
        .unwrap()
    }

    fn labels<'a>(rows: &'a [Row<'a>]) -> Vec<&'a str> {
        rows.iter().map(|row| row.label).collect()
    }

    #[test]
    fn collapsed_children_are_skipped() {
        let tree = sample_tree();
        let expansion = ExpansionSet::new();
        let rows = flatten(&tree, &expansion, &MenuConfig::default(), None, None);
        assert_eq!(labels(&rows), ["Inbox", "Journal", "Notes"]);
    }

    #[test]
    fn expanded_children_follow_their_parent() {
        let tree = sample_tree();
        let mut expansion = ExpansionSet::new();
        expansion.insert(tree.id_of("Inbox").unwrap());
        let rows = flatten(&tree, &expansion, &MenuConfig::default(), None, None);
        assert_eq!(labels(&rows), ["Inbox", "Today", "Later", "Journal", "Notes"]);
        assert_eq!(rows[1].depth, 1);
        assert_eq!(rows[3].depth, 0);
    }

    #[test]
    fn rows_stack_vertically_and_indent_horizontally() {
        let tree = sample_tree();
        let mut expansion = ExpansionSet::new();
        expansion.insert(tree.id_of("Inbox").unwrap());
        let config = MenuConfig::default();
        let rows = flatten(&tree, &expansion, &config, None, None);

        assert_eq!(rows[0].visual_bounds.y0, 0.0);
        assert_eq!(rows[1].visual_bounds.y0, config.row_height);
        assert_eq!(rows[1].visual_bounds.x0, config.indent_width);
        // Full-width hover keeps the hit bounds at the menu's left edge.
        assert_eq!(rows[1].hit_bounds.x0, 0.0);
    }

    #[test]
    fn narrow_hover_limits_hits_to_the_visual_bounds() {
        let tree = sample_tree();
        let mut expansion = ExpansionSet::new();
        expansion.insert(tree.id_of("Inbox").unwrap());
        let mut config = MenuConfig::default();
        config.options.remove(MenuOptions::FULL_WIDTH_HOVER);
        let rows = flatten(&tree, &expansion, &config, None, None);

        // A point in Today's gutter, left of its indentation.
        let point = Point::new(config.indent_width / 2.0, config.row_height * 1.5);
        assert_eq!(hit_test(&rows, point), None);
    }

    #[test]
    fn parts_resolve_left_to_right() {
        let tree = sample_tree();
        let expansion = ExpansionSet::new();
        let config = MenuConfig::default();
        let rows = flatten(&tree, &expansion, &config, None, None);
        let inbox = rows[0];

        let mid_y = config.row_height / 2.0;
        assert_eq!(inbox.part_at(Point::new(5.0, mid_y)), Some(RowPart::Disclosure));
        assert_eq!(inbox.part_at(Point::new(100.0, mid_y)), Some(RowPart::Body));
        assert_eq!(
            inbox.part_at(Point::new(config.width - 5.0, mid_y)),
            Some(RowPart::More)
        );
    }

    #[test]
    fn leaf_rows_have_no_disclosure_unless_forced() {
        let tree = sample_tree();
        let expansion = ExpansionSet::new();
        let mut config = MenuConfig::default();
        let rows = flatten(&tree, &expansion, &config, None, None);
        let notes = rows[2];
        assert!(!notes.shows_disclosure);
        // A press at the leading edge of a leaf is a plain body press.
        assert_eq!(
            notes.part_at(Point::new(5.0, notes.visual_bounds.center().y)),
            Some(RowPart::Body)
        );

        config.options.insert(MenuOptions::ALWAYS_SHOW_DISCLOSURE);
        let rows = flatten(&tree, &expansion, &config, None, None);
        assert!(rows[2].shows_disclosure);
    }

    #[test]
    fn indicators_attach_to_the_target_row() {
        let tree = sample_tree();
        let journal = tree.id_of("Journal").unwrap();
        let notes = tree.id_of("Notes").unwrap();
        let expansion = ExpansionSet::new();
        let rows = flatten(
            &tree,
            &expansion,
            &MenuConfig::default(),
            Some(notes),
            Some(DropTarget {
                id: journal,
                zone: Zone::Into,
            }),
        );
        assert_eq!(rows[1].indicator, Some(Indicator::FillInto));
        assert!(rows[0].indicator.is_none());
        assert!(rows[2].dragging);
    }
}
