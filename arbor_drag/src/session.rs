// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag session phase machine.

use arbor_tree::{NodeId, Tree, Zone};
use arbor_zone::{DropTarget, RowBand, resolve};
use kurbo::Point;

use crate::lease::FrameLease;
use crate::pointer::PointerCell;

/// Tunables for a [`DragSession`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragConfig {
    /// Pointer travel required before a press becomes a drag. `None`
    /// activates on the first move — the threshold's off switch.
    pub activation_distance: Option<f64>,
    /// Whether sibling-seam normalization is applied to classified targets.
    /// Off is only useful for demonstrating the flicker it prevents.
    pub normalize_seams: bool,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            activation_distance: Some(4.0),
            normalize_seams: true,
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Phase {
    Idle,
    Pending { id: NodeId, origin: Point },
    Dragging { id: NodeId },
}

/// How a pointer release resolved; see [`DragSession::on_pointer_up`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DragEnd {
    /// The press never traveled past the activation distance: an in-place
    /// click on the pressed node. The tree is untouched.
    Click(NodeId),
    /// The drag ended over no target, or over an invalid one (the dragged
    /// node itself or one of its descendants). The tree is untouched.
    Canceled,
    /// The drag ended over a valid target; the caller should now run the
    /// remove-then-insert pipeline with this source and target.
    Commit {
        /// The dragged node.
        source: NodeId,
        /// The normalized target from the most recent frame tick.
        target: DropTarget,
    },
}

/// State machine for one pointer gesture over the menu.
///
/// See the crate docs for the phase diagram and the frame-driven
/// classification model. All methods are cheap and synchronous; the session
/// holds no reference to the tree and is handed one only where classification
/// or commit gating needs it.
#[derive(Debug, Default)]
pub struct DragSession {
    config: DragConfig,
    phase: Phase,
    pointer: PointerCell,
    lease: FrameLease,
    hovered: Option<(NodeId, RowBand)>,
    raw_zone: Option<Zone>,
    normalized: Option<DropTarget>,
}

impl Default for Phase {
    fn default() -> Self {
        Self::Idle
    }
}

impl DragSession {
    /// Create a session with the given config.
    pub fn new(config: DragConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The session's config.
    #[must_use]
    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    /// The node being dragged, once the drag has activated.
    #[must_use]
    pub fn active(&self) -> Option<NodeId> {
        match self.phase {
            Phase::Dragging { id } => Some(id),
            _ => None,
        }
    }

    /// `true` while a drag is active (activation distance exceeded).
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    /// Whether the host's per-frame callback should be running.
    #[must_use]
    pub fn frame_lease_active(&self) -> bool {
        self.lease.is_active()
    }

    /// The target computed by the most recent frame tick, if any. This is
    /// what indicators render and what a release commits.
    #[must_use]
    pub fn normalized_target(&self) -> Option<DropTarget> {
        self.normalized
    }

    /// The unnormalized zone from the most recent frame tick.
    #[must_use]
    pub fn raw_zone(&self) -> Option<Zone> {
        self.raw_zone
    }

    /// A press landed on the row for `id`.
    ///
    /// Starts a pending gesture; any gesture already in flight is discarded
    /// first (its lease released).
    pub fn on_pointer_down(&mut self, id: NodeId, position: Point) {
        self.reset();
        self.pointer.store(position);
        self.phase = Phase::Pending {
            id,
            origin: position,
        };
    }

    /// The pointer moved.
    ///
    /// Always records the newest position for the frame tick. While pending,
    /// checks the activation distance; returns `Some(id)` at the moment the
    /// press becomes a drag so the host can present a drag ghost.
    pub fn on_pointer_move(&mut self, position: Point) -> Option<NodeId> {
        self.pointer.store(position);
        if let Phase::Pending { id, origin } = self.phase {
            let activated = match self.config.activation_distance {
                Some(distance) => origin.distance(position) > distance,
                None => true,
            };
            if activated {
                self.phase = Phase::Dragging { id };
                self.lease.acquire();
                return Some(id);
            }
        }
        None
    }

    /// The row currently under the pointer and its last known extent, or
    /// `None` when the pointer is over no row.
    ///
    /// Ignored outside the dragging phase. Clearing the hover also clears the
    /// classified target so no stale indicator survives.
    pub fn set_hover(&mut self, hover: Option<(NodeId, RowBand)>) {
        if !self.is_dragging() {
            return;
        }
        if hover.is_none() {
            self.raw_zone = None;
            self.normalized = None;
        }
        self.hovered = hover;
    }

    /// One classification tick: read the latest pointer position and resolve
    /// it against the hovered row.
    ///
    /// Returns the normalized target, which is also cached for rendering and
    /// commit. Outside the dragging phase (lease released) this is a no-op.
    pub fn on_frame(&mut self, tree: &Tree) -> Option<DropTarget> {
        let Phase::Dragging { id: active } = self.phase else {
            return None;
        };
        let Some((hovered, band)) = self.hovered else {
            self.raw_zone = None;
            self.normalized = None;
            return None;
        };
        let position = self.pointer.load();
        match resolve(
            tree,
            active,
            hovered,
            band,
            position.y,
            self.config.normalize_seams,
        ) {
            Some(resolved) => {
                self.raw_zone = Some(resolved.raw);
                self.normalized = Some(resolved.target);
                Some(resolved.target)
            }
            None => {
                self.raw_zone = None;
                self.normalized = None;
                None
            }
        }
    }

    /// The pointer was released.
    ///
    /// Resolves the gesture and returns the session to idle, releasing the
    /// frame lease on every path. Returns `None` when no gesture was in
    /// flight. The self/descendant check runs again here, independently of
    /// the per-frame gate, so a stale hover recorded between the last tick
    /// and the release still cannot commit.
    pub fn on_pointer_up(&mut self, tree: &Tree) -> Option<DragEnd> {
        let end = match self.phase {
            Phase::Idle => None,
            Phase::Pending { id, .. } => Some(DragEnd::Click(id)),
            Phase::Dragging { id: source } => Some(self.resolve_drop(tree, source)),
        };
        self.reset();
        end
    }

    /// Abort any gesture in flight, releasing the frame lease. The tree is
    /// never touched.
    pub fn cancel(&mut self) {
        self.reset();
    }

    fn resolve_drop(&self, tree: &Tree, source: NodeId) -> DragEnd {
        let Some((over, _)) = self.hovered else {
            return DragEnd::Canceled;
        };
        if over == source || tree.is_descendant(source, over) {
            return DragEnd::Canceled;
        }
        let target = match self.normalized {
            // A normalized "above the dragged row itself" marks the gap the
            // node already occupies; fall back to the raw pair, which names
            // the same gap without self-reference.
            Some(target) if target.id != source => target,
            _ => DropTarget {
                id: over,
                zone: self.raw_zone.unwrap_or(Zone::Above),
            },
        };
        DragEnd::Commit { source, target }
    }

    fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.lease.release();
        self.hovered = None;
        self.raw_zone = None;
        self.normalized = None;
    }
}
