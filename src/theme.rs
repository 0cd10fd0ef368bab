// Copyright 2026 the Curvebender Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors and constants
//!
//! All colors use hexadecimal format: Color::from_rgb8(0xRR, 0xGG, 0xBB)

use peniko::Color;

// ============================================================================
// CANVAS
// ============================================================================
const CANVAS_BACKGROUND: Color = Color::from_rgb8(0xff, 0xff, 0xff);

// ============================================================================
// CURVE STROKES
// ============================================================================
const CURVE_STROKE: Color = Color::from_rgb8(0xff, 0x00, 0x00);

// ============================================================================
// CONTROL POINTS AND HANDLES
// ============================================================================
const POINT_FILL: Color = Color::from_rgb8(0x00, 0x00, 0x00);
const OUT_HANDLE_FILL: Color = Color::from_rgb8(0x00, 0x80, 0x00);
const IN_HANDLE_FILL: Color = Color::from_rgb8(0xff, 0xa5, 0x00);
const HANDLE_GUIDE_LINE: Color = Color::from_rgb8(0x00, 0x00, 0xff);

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Colors for the editor canvas
pub mod canvas {
    use super::Color;
    pub const BACKGROUND: Color = super::CANVAS_BACKGROUND;
}

/// Colors for curve strokes (frozen curve and live preview)
pub mod curve {
    use super::Color;
    pub const STROKE: Color = super::CURVE_STROKE;
}

/// Colors for control points
pub mod point {
    use super::Color;
    pub const FILL: Color = super::POINT_FILL;
}

/// Colors for tangent handles and their guide lines
pub mod handle {
    use super::Color;
    pub const OUT_FILL: Color = super::OUT_HANDLE_FILL;
    pub const IN_FILL: Color = super::IN_HANDLE_FILL;
    pub const GUIDE_LINE: Color = super::HANDLE_GUIDE_LINE;
}

/// Sizes for rendering
pub mod size {
    /// Radius for control point and handle markers (screen pixels)
    pub const CONTROL_POINT_RADIUS: f64 = 3.0;

    /// Width of curve strokes (screen pixels, constant across zoom)
    pub const CURVE_STROKE_WIDTH: f64 = 1.0;

    /// Width of handle guide lines
    pub const HANDLE_LINE_WIDTH: f64 = 1.0;

    /// Dash pattern for the in-progress preview spline
    /// [dash_length, gap_length]
    pub const PREVIEW_DASH: [f64; 2] = [5.0, 5.0];

    /// Dash offset for the preview spline
    pub const PREVIEW_DASH_OFFSET: f64 = 0.0;
}
