// Copyright 2026 the Curvebender Authors
// SPDX-License-Identifier: Apache-2.0

//! UI components

pub mod editor_canvas;

pub use editor_canvas::canvas_view;
