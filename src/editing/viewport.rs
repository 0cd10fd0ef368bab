// Copyright 2026 the Curvebender Authors
// SPDX-License-Identifier: Apache-2.0

//! Viewport transformation between screen space and design space.
//!
//! Design space is the curve's own coordinate system, unaffected by pan
//! and zoom; screen space is canvas pixels. The mapping is uniform scale
//! then translate: `screen = design * zoom + offset`.

use crate::settings;
use kurbo::{Affine, Point, Vec2};

/// Pan/zoom state of the editor canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewPort {
    /// Uniform scale factor, clamped to the settings zoom limits
    pub zoom: f64,
    /// Screen-space translation applied after scaling
    pub offset: Vec2,
}

impl ViewPort {
    /// Identity viewport: no zoom, no pan
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            offset: Vec2::ZERO,
        }
    }

    /// Convert a design-space point to screen space
    pub fn to_screen(&self, design: Point) -> Point {
        (design.to_vec2() * self.zoom + self.offset).to_point()
    }

    /// Convert a screen-space point to design space
    pub fn screen_to_design(&self, screen: Point) -> Point {
        ((screen.to_vec2() - self.offset) / self.zoom).to_point()
    }

    /// The design-to-screen transform as an affine, for rendering
    pub fn affine(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.zoom)
    }

    /// Zoom in (positive `delta_y`) or out (negative) by one step,
    /// keeping the design point under `anchor` fixed on screen.
    ///
    /// The zoom factor is clamped to the settings limits; the offset is
    /// then recomputed so `screen_to_design(anchor)` is unchanged.
    pub fn zoom_at(&mut self, anchor: Point, delta_y: f64) {
        let factor = if delta_y > 0.0 {
            settings::viewport::ZOOM_STEP
        } else {
            1.0 / settings::viewport::ZOOM_STEP
        };

        let old_zoom = self.zoom;
        self.zoom = (self.zoom * factor)
            .clamp(settings::viewport::MIN_ZOOM, settings::viewport::MAX_ZOOM);

        let ratio = self.zoom / old_zoom;
        self.offset = anchor.to_vec2() - (anchor.to_vec2() - self.offset) * ratio;

        tracing::debug!("Zoom at ({}, {}): zoom={:.3}", anchor.x, anchor.y, self.zoom);
    }

    /// Shift the view by a screen-space delta
    pub fn pan_by(&mut self, delta: Vec2) {
        self.offset += delta;
    }
}

impl Default for ViewPort {
    fn default() -> Self {
        Self::new()
    }
}
