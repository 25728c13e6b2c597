// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arbor Zone: pure drop-intent classification for the nested menu.
//!
//! During a drag, the pointer's vertical position within the hovered row is
//! turned into a drop intent — [`Zone::Above`], [`Zone::Into`], or
//! [`Zone::Below`] — by splitting the row into three equal bands. Equal
//! thirds keep the common case (reordering between siblings) easy to hit
//! while leaving the middle band just large enough to nest reliably.
//!
//! Two adjacent raw classifications describe the same gap: `below A` and
//! `above B` whenever B immediately follows A. Crossing that seam with the
//! pointer would flip the raw zone within a couple of pixels and make the
//! indicator flicker, so [`normalize`] folds both onto the canonical
//! `(B, above)` form. Normalization is scoped to same-level siblings only —
//! when `below A` would change nesting depth there is no following sibling to
//! fold onto, and the distinct indicator is exactly the feedback the user
//! needs.
//!
//! ```rust
//! use arbor_tree::{Seed, Tree, Zone};
//! use arbor_zone::{DropTarget, classify, normalize};
//!
//! let tree = Tree::from_seeds(vec![
//!     Seed::new("Inbox")
//!         .child(Seed::new("Today"))
//!         .child(Seed::new("Later")),
//! ])
//! .unwrap();
//! let today = tree.id_of("Today").unwrap();
//! let later = tree.id_of("Later").unwrap();
//!
//! // Bottom third of a 30-high row.
//! assert_eq!(classify(25.0, 30.0), Zone::Below);
//!
//! // "below Today" folds onto "above Later".
//! let folded = normalize(&tree, DropTarget { id: today, zone: Zone::Below });
//! assert_eq!(folded, DropTarget { id: later, zone: Zone::Above });
//!
//! // Normalization is idempotent.
//! assert_eq!(normalize(&tree, folded), folded);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use arbor_tree::{NodeId, Tree};
use kurbo::Rect;

pub use arbor_tree::Zone;

/// The vertical extent of a hovered row: its top edge and height, in the same
/// coordinate space as the pointer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RowBand {
    /// Top edge of the row.
    pub top: f64,
    /// Height of the row.
    pub height: f64,
}

impl RowBand {
    /// Create a band from a top edge and height.
    #[must_use]
    pub const fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// The vertical extent of `rect`; the horizontal extent is ignored.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            top: rect.y0,
            height: rect.height(),
        }
    }

    /// Convert an absolute vertical position into an offset within the row.
    #[must_use]
    pub fn offset_of(&self, y: f64) -> f64 {
        y - self.top
    }
}

/// A concrete drop location: which row, and where relative to it.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DropTarget {
    /// The row the drop is expressed against.
    pub id: NodeId,
    /// Where the dragged node lands relative to that row.
    pub zone: Zone,
}

/// The outcome of one classification tick: the raw zone for the hovered row
/// and the seam-normalized target actually shown and committed.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Resolved {
    /// Unnormalized zone for the hovered row itself.
    pub raw: Zone,
    /// Target after sibling-seam normalization (equal to the raw pair when
    /// normalization does not apply).
    pub target: DropTarget,
}

/// Classify a pointer offset within a row of the given height.
///
/// The row is split into three equal vertical bands; both band boundaries
/// belong to the middle (`Into`) band. Offsets outside `0..=height` still
/// classify (`Above` below zero, `Below` past the end) — during a drag the
/// pointer can briefly outrun the last recorded row rectangle.
#[must_use]
pub fn classify(offset: f64, height: f64) -> Zone {
    let lower = height / 3.0;
    let upper = height * 2.0 / 3.0;
    if offset < lower {
        Zone::Above
    } else if offset <= upper {
        Zone::Into
    } else {
        Zone::Below
    }
}

/// Fold seam-equivalent targets onto one canonical form.
///
/// `below A` becomes `above B` when B is A's immediate next sibling; `into`
/// and `above` targets pass through, as does `below` on a last sibling
/// (where the seam would cross a nesting level).
#[must_use]
pub fn normalize(tree: &Tree, target: DropTarget) -> DropTarget {
    if target.zone != Zone::Below {
        return target;
    }
    match tree.context(target.id).and_then(|ctx| ctx.next_sibling()) {
        Some(next) => DropTarget {
            id: next.id(),
            zone: Zone::Above,
        },
        None => target,
    }
}

/// One full classification tick: validity gate, raw classification, and
/// optional normalization.
///
/// Returns `None` — no indicator, no commit — when the hovered row is the
/// dragged node itself or lives inside its subtree. `pointer_y` is the
/// pointer's absolute vertical position; `band` is the hovered row's last
/// recorded extent in the same space.
#[must_use]
pub fn resolve(
    tree: &Tree,
    active: NodeId,
    hovered: NodeId,
    band: RowBand,
    pointer_y: f64,
    normalize_seams: bool,
) -> Option<Resolved> {
    if hovered == active || tree.is_descendant(active, hovered) {
        return None;
    }
    let raw = classify(band.offset_of(pointer_y), band.height);
    let target = DropTarget { id: hovered, zone: raw };
    let target = if normalize_seams {
        normalize(tree, target)
    } else {
        target
    };
    Some(Resolved { raw, target })
}
