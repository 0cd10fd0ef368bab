// Copyright 2026 the Curvebender Authors
// SPDX-License-Identifier: Apache-2.0

//! Hit testing for control points and their tangent handles.
//!
//! Candidates live in design space; each is projected through the
//! viewport and compared against the raw screen-space press position,
//! so the pick radius stays a constant number of screen pixels at any
//! zoom level.

use super::EditSession;
use crate::editing::drag::DragTarget;
use crate::theme;
use kurbo::Point;

impl EditSession {
    /// Pick radius in screen pixels, independent of zoom
    pub(crate) fn pick_radius() -> f64 {
        2.0 * theme::size::CONTROL_POINT_RADIUS
    }

    /// Find what a press at `screen_pos` lands on.
    ///
    /// Points are scanned in index order; within each point the
    /// out-handle is tried before the in-handle, and all handles are
    /// tried before any point body. Handles sit visually on top of
    /// point bodies and are the smaller target, so they must win, and a
    /// far point must not shadow a nearby handle. Handles that are
    /// hidden, absent, or never rendered (the first point's in-handle,
    /// the last point's out-handle) are not hit-testable.
    pub(crate) fn hit_test(&self, screen_pos: Point) -> Option<DragTarget> {
        let radius = Self::pick_radius();
        let last = self.curve.points.len().saturating_sub(1);

        for (i, cp) in self.curve.points.iter().enumerate() {
            if !cp.handles_visible {
                continue;
            }

            if i != last
                && let Some(out_handle) = cp.out_handle
                && self.viewport.to_screen(out_handle).distance(screen_pos) < radius
            {
                return Some(DragTarget::OutHandle(i));
            }

            if i != 0
                && let Some(in_handle) = cp.in_handle
                && self.viewport.to_screen(in_handle).distance(screen_pos) < radius
            {
                return Some(DragTarget::InHandle(i));
            }
        }

        for (i, cp) in self.curve.points.iter().enumerate() {
            if self.viewport.to_screen(cp.point).distance(screen_pos) < radius {
                return Some(DragTarget::Point(i));
            }
        }

        None
    }
}
