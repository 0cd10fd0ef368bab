// Copyright 2026 the Curvebender Authors
// SPDX-License-Identifier: Apache-2.0

//! The editable curve: an ordered sequence of control points with a
//! drawing lifecycle.
//!
//! A curve starts empty (`Idle`), accepts points one at a time while
//! `Drawing`, and is frozen into `Finished` form by [`Curve::finish`],
//! which derives a pair of bezier tangent handles for every segment from
//! the Catmull-Rom neighborhood. A finished curve rejects new points
//! until it is reset; its handles stay editable through the session's
//! drag operations.

use crate::spline;
use kurbo::Point;

/// One authored vertex of the curve.
///
/// Handles are plain values reassigned wholesale on every edit; nothing
/// else ever holds a reference into a `ControlPoint`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    /// Position in design space
    pub point: Point,
    /// Tangent handle toward the next segment
    pub out_handle: Option<Point>,
    /// Tangent handle toward the previous segment
    pub in_handle: Option<Point>,
    /// Whether this point's handles are shown (and hit-testable)
    pub handles_visible: bool,
}

impl ControlPoint {
    /// Create a bare control point with no handles
    pub fn new(point: Point) -> Self {
        Self {
            point,
            out_handle: None,
            in_handle: None,
            handles_visible: false,
        }
    }
}

/// Lifecycle phase of the curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurvePhase {
    /// No active curve
    Idle,
    /// Points accepted one at a time; rendered as an open preview spline
    Drawing,
    /// Point sequence frozen; handles derived and editable; new points
    /// rejected
    Finished,
}

/// The curve being authored: control points in insertion order plus the
/// lifecycle phase and the live preview cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    /// Control points in curve order. Index is positional identity; the
    /// only deletion is a full clear.
    pub points: Vec<ControlPoint>,
    phase: CurvePhase,
    preview_cursor: Option<Point>,
}

impl Curve {
    /// Create an empty, idle curve
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            phase: CurvePhase::Idle,
            preview_cursor: None,
        }
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> CurvePhase {
        self.phase
    }

    /// Whether the curve is accepting points
    pub fn is_drawing(&self) -> bool {
        self.phase == CurvePhase::Drawing
    }

    /// Whether the curve has been frozen
    pub fn is_finished(&self) -> bool {
        self.phase == CurvePhase::Finished
    }

    /// Live pointer position while drawing, for the dashed preview
    pub fn preview_cursor(&self) -> Option<Point> {
        self.preview_cursor
    }

    /// Append a control point at a design-space position.
    ///
    /// The first point after idle discards any stale points and starts a
    /// drawing session. Ignored while the curve is finished; a finished
    /// curve only accepts points again after [`Curve::reset`].
    pub fn add_point(&mut self, point: Point) {
        match self.phase {
            CurvePhase::Finished => {}
            CurvePhase::Idle => {
                self.points.clear();
                self.points.push(ControlPoint::new(point));
                self.phase = CurvePhase::Drawing;
            }
            CurvePhase::Drawing => {
                self.points.push(ControlPoint::new(point));
            }
        }
    }

    /// Freeze the curve: derive bezier handles for every segment and
    /// stop accepting points.
    ///
    /// No-op unless the curve is drawing with at least two points. Each
    /// segment's handle pair comes from its 4-point Catmull-Rom
    /// neighborhood, with the endpoint duplicated where the neighborhood
    /// runs off either end. The first point is left without an in-handle
    /// and the last without an out-handle.
    pub fn finish(&mut self) {
        if self.phase != CurvePhase::Drawing || self.points.len() < 2 {
            return;
        }

        let positions: Vec<Point> = self.points.iter().map(|cp| cp.point).collect();
        for i in 0..self.points.len() - 1 {
            let (out_handle, in_handle) = spline::segment_handles(&positions, i);
            self.points[i].out_handle = Some(out_handle);
            self.points[i + 1].in_handle = Some(in_handle);
        }

        self.phase = CurvePhase::Finished;
        self.preview_cursor = None;
        tracing::info!("Curve finished with {} points", self.points.len());
    }

    /// Clear all points and return to idle. Always succeeds.
    pub fn reset(&mut self) {
        self.points.clear();
        self.preview_cursor = None;
        self.phase = CurvePhase::Idle;
        tracing::info!("Curve reset");
    }

    /// Update the live preview cursor. Ignored unless drawing.
    pub fn set_preview_cursor(&mut self, point: Point) {
        if self.phase == CurvePhase::Drawing {
            self.preview_cursor = Some(point);
        }
    }
}

impl Default for Curve {
    fn default() -> Self {
        Self::new()
    }
}
