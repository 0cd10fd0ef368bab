// Copyright 2026 the Curvebender Authors
// SPDX-License-Identifier: Apache-2.0

//! Edit session - the aggregate the canvas widget drives.
//!
//! Owns the curve, the viewport, and the transient drag state, and
//! exposes one handler per pointer event kind (press, drag, release,
//! click, move, scroll). All handlers are total: when a precondition is
//! not met they do nothing instead of erroring, so the widget can
//! forward every host event unconditionally. Handlers return whether
//! the canvas needs a repaint.
//!
//! Everything here is exercisable without a window, which is where the
//! interaction tests live.

mod hit_testing;
mod pointer;

use super::drag::DragTarget;
use super::viewport::ViewPort;
use crate::model::Curve;
use kurbo::Point;

/// Editing session for a single curve
#[derive(Debug, Clone)]
pub struct EditSession {
    /// The curve being authored
    pub curve: Curve,

    /// Viewport transformation
    pub viewport: ViewPort,

    /// What the pointer is dragging, if anything. Reset on release;
    /// never outlives a press-drag-release cycle.
    pub drag: Option<DragTarget>,

    /// Screen position of the previous press or pan-drag event, used to
    /// compute pan deltas
    pub last_pan_pos: Point,
}

impl EditSession {
    /// Create a session with an empty curve and an identity viewport
    pub fn new() -> Self {
        Self {
            curve: Curve::new(),
            viewport: ViewPort::new(),
            drag: None,
            last_pan_pos: Point::ZERO,
        }
    }
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}
