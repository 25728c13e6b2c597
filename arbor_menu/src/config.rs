// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu configuration.

use arbor_drag::DragConfig;
use bitflags::bitflags;

bitflags! {
    /// Behavior toggles for a [`crate::NestedMenu`].
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub struct MenuOptions: u8 {
        /// Rows respond to hover and hit testing across the menu's full
        /// width, not just from their indentation onward.
        const FULL_WIDTH_HOVER = 1 << 0;
        /// Show a disclosure affordance on every row, not only on rows with
        /// children.
        const ALWAYS_SHOW_DISCLOSURE = 1 << 1;
        /// Fold seam-equivalent drop targets (`below A` / `above B`) onto
        /// one canonical form.
        const NORMALIZE_SEAMS = 1 << 2;
        /// Require the pointer to travel the activation distance before a
        /// press becomes a drag. With this cleared any movement drags.
        const ACTIVATION_THRESHOLD = 1 << 3;
    }
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self::FULL_WIDTH_HOVER | Self::NORMALIZE_SEAMS | Self::ACTIVATION_THRESHOLD
    }
}

/// Geometry and behavior settings for a [`crate::NestedMenu`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MenuConfig {
    /// Behavior toggles.
    pub options: MenuOptions,
    /// Pointer travel required before a press becomes a drag, when
    /// [`MenuOptions::ACTIVATION_THRESHOLD`] is set.
    pub activation_distance: f64,
    /// Height of every row.
    pub row_height: f64,
    /// Horizontal inset added per nesting level.
    pub indent_width: f64,
    /// Total width of the menu.
    pub width: f64,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            options: MenuOptions::default(),
            activation_distance: 4.0,
            row_height: 28.0,
            indent_width: 16.0,
            width: 220.0,
        }
    }
}

impl MenuConfig {
    /// The drag session config implied by these settings.
    #[must_use]
    pub fn drag_config(&self) -> DragConfig {
        DragConfig {
            activation_distance: self
                .options
                .contains(MenuOptions::ACTIVATION_THRESHOLD)
                .then_some(self.activation_distance),
            normalize_seams: self.options.contains(MenuOptions::NORMALIZE_SEAMS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_drag_config_matches_defaults() {
        let config = MenuConfig::default();
        let drag = config.drag_config();
        assert_eq!(drag.activation_distance, Some(4.0));
        assert!(drag.normalize_seams);
    }

    #[test]
    fn clearing_the_threshold_flag_disables_the_distance() {
        let mut config = MenuConfig::default();
        config.options.remove(MenuOptions::ACTIVATION_THRESHOLD);
        assert_eq!(config.drag_config().activation_distance, None);
    }
}
