// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Latest-value handoff between move events and the frame tick.

use core::cell::Cell;

use kurbo::Point;

/// A latest-value cell carrying the pointer position from the move-event
/// handler to the per-frame classification tick.
///
/// Single writer, single reader: [`PointerCell::store`] is called from the
/// discrete pointer-move path and [`PointerCell::load`] from the frame tick.
/// Intermediate positions are intentionally dropped — only the newest value
/// matters to classification.
#[derive(Debug, Default)]
pub struct PointerCell {
    latest: Cell<Point>,
}

impl PointerCell {
    /// Create a cell holding the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held position with `position`.
    pub fn store(&self, position: Point) {
        self.latest.set(position);
    }

    /// Read the most recently stored position.
    #[must_use]
    pub fn load(&self) -> Point {
        self.latest.get()
    }
}
