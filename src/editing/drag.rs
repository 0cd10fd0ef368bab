// Copyright 2026 the Curvebender Authors
// SPDX-License-Identifier: Apache-2.0

//! What the pointer is currently dragging.

/// The target of an in-progress press-drag-release cycle.
///
/// Indices are positions in the curve's point vector. Panning is its own
/// variant rather than a sentinel index, so there is no magic value to
/// misinterpret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    /// A control point body; dragging moves the point and its handles
    /// rigidly
    Point(usize),
    /// A point's outgoing tangent handle; dragging mirrors the in-handle
    OutHandle(usize),
    /// A point's incoming tangent handle; dragging mirrors the
    /// out-handle
    InHandle(usize),
    /// Empty canvas grabbed with the secondary button; dragging pans the
    /// view
    Pan,
}
