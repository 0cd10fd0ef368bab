// Copyright 2026 the Curvebender Authors
// SPDX-License-Identifier: Apache-2.0

//! Application settings and configuration constants.
//!
//! This module holds non-visual settings. Visual styling (colors, sizes)
//! belongs in `theme.rs`.

// ============================================================================
// VIEWPORT SETTINGS
// ============================================================================
/// Minimum zoom level (10% of original size)
const MIN_ZOOM: f64 = 0.1;

/// Maximum zoom level (20x original size)
const MAX_ZOOM: f64 = 20.0;

/// Multiplier applied per scroll step when zooming
const ZOOM_STEP: f64 = 1.1;

// ============================================================================
// SPLINE SETTINGS
// ============================================================================
/// Catmull-Rom tension. Controls how strongly the neighbor points pull
/// the tangents at each control point. Not exposed in the UI.
const SPLINE_TENSION: f64 = 0.5;

// ============================================================================
// CLICK SETTINGS
// ============================================================================
/// Maximum interval between two clicks to count as a double-click
const DOUBLE_CLICK_TIME_MS: u128 = 500;

/// Maximum distance between two clicks to count as a double-click
/// (screen pixels)
const DOUBLE_CLICK_DISTANCE_PX: f64 = 10.0;

/// Pointer travel from the press position before a gesture stops being
/// a click and becomes a drag (screen pixels)
const DRAG_THRESHOLD_PX: f64 = 2.0;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Viewport settings (zoom limits, zoom step)
pub mod viewport {
    /// Minimum zoom level
    pub const MIN_ZOOM: f64 = super::MIN_ZOOM;

    /// Maximum zoom level
    pub const MAX_ZOOM: f64 = super::MAX_ZOOM;

    /// Zoom multiplier per scroll step
    pub const ZOOM_STEP: f64 = super::ZOOM_STEP;
}

/// Spline settings
pub mod spline {
    /// Catmull-Rom tension used when deriving bezier handles
    pub const TENSION: f64 = super::SPLINE_TENSION;
}

/// Click synthesis settings
pub mod click {
    /// Double-click time window in milliseconds
    pub const DOUBLE_CLICK_TIME_MS: u128 = super::DOUBLE_CLICK_TIME_MS;

    /// Double-click distance tolerance in screen pixels
    pub const DOUBLE_CLICK_DISTANCE_PX: f64 = super::DOUBLE_CLICK_DISTANCE_PX;

    /// Pointer travel before a press becomes a drag
    pub const DRAG_THRESHOLD_PX: f64 = super::DRAG_THRESHOLD_PX;
}
