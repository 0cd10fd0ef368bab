// Copyright 2026 the Curvebender Authors
// SPDX-License-Identifier: Apache-2.0

//! Catmull-Rom spline math.
//!
//! Pure functions that derive cubic bezier control points from a
//! Catmull-Rom neighborhood. A segment from `p1` to `p2` gets its
//! tangents from the surrounding points `p0` and `p3`; at the open ends
//! of a point sequence the missing neighbor is replaced by the endpoint
//! itself, which flattens the tangent estimate instead of extrapolating.

use crate::settings;
use kurbo::{BezPath, Point};

/// Derive the bezier handle pair for the segment from `p1` to `p2`.
///
/// Returns `(out_handle, in_handle)`: the first and second control
/// points of the cubic bezier that approximates the Catmull-Rom tangent
/// at both segment ends.
pub fn catmull_rom_to_bezier(p0: Point, p1: Point, p2: Point, p3: Point) -> (Point, Point) {
    let t = settings::spline::TENSION;
    let out_handle = p1 + (p2 - p0) * (t / 3.0);
    let in_handle = p2 - (p3 - p1) * (t / 3.0);
    (out_handle, in_handle)
}

/// Derive the handle pair for segment `i` (from `points[i]` to
/// `points[i + 1]`) of an open point sequence, duplicating the endpoint
/// where the neighborhood runs off either end.
pub fn segment_handles(points: &[Point], i: usize) -> (Point, Point) {
    let p0 = if i > 0 { points[i - 1] } else { points[0] };
    let p1 = points[i];
    let p2 = points[i + 1];
    let p3 = if i + 2 < points.len() {
        points[i + 2]
    } else {
        points[points.len() - 1]
    };
    catmull_rom_to_bezier(p0, p1, p2, p3)
}

/// Build a bezier path through `points` with Catmull-Rom derived
/// tangents. Returns an empty path for fewer than two points.
pub fn catmull_rom_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    if points.len() < 2 {
        return path;
    }

    path.move_to(points[0]);
    for i in 0..points.len() - 1 {
        let (out_handle, in_handle) = segment_handles(points, i);
        path.curve_to(out_handle, in_handle, points[i + 1]);
    }
    path
}

/// Reflect `handle` through `pivot`.
///
/// Used to keep a point's two tangent handles collinear and equidistant
/// while one of them is dragged.
pub fn reflect(handle: Point, pivot: Point) -> Point {
    Point::new(2.0 * pivot.x - handle.x, 2.0 * pivot.y - handle.y)
}
