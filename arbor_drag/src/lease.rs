// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-frame callback as a leased resource.

/// Tracks whether the host's per-frame callback should be running.
///
/// The lease is acquired exactly when a drag activates and released on every
/// exit path out of the dragging phase. Hosts schedule their frame clock
/// while [`FrameLease::is_active`] holds and cancel it when it stops —
/// mirroring acquire/release of any other leased resource, so an ended drag
/// cannot leak a perpetual callback.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FrameLease {
    active: bool,
}

impl FrameLease {
    /// A released lease.
    pub const fn new() -> Self {
        Self { active: false }
    }

    /// Take the lease. Idempotent.
    pub fn acquire(&mut self) {
        self.active = true;
    }

    /// Return the lease. Idempotent.
    pub fn release(&mut self) {
        self.active = false;
    }

    /// Whether the per-frame callback should currently run.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }
}
