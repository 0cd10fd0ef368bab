// Copyright 2026 the Curvebender Authors
// SPDX-License-Identifier: Apache-2.0

//! Curvebender: an interactive curve editor built with Xilem
//!
//! Click to place control points, watch the live Catmull-Rom preview,
//! and double-click to freeze the curve into cubic bezier segments with
//! draggable tangent handles. Right-drag pans, scroll zooms at the
//! cursor, right-double-click starts over.

use std::sync::Arc;

use winit::dpi::LogicalSize;
use winit::error::EventLoopError;
use xilem::{EventLoopBuilder, WindowView, Xilem, window};

mod components;
mod data;
mod editing;
mod model;
mod settings;
mod spline;
mod theme;

use components::canvas_view;
use data::AppState;
use editing::EditSession;

/// Entry point for the Curvebender application
pub fn run(event_loop: EventLoopBuilder) -> Result<(), EventLoopError> {
    // Initialize tracing subscriber (can be controlled via RUST_LOG env var)
    // Filter out noisy wgpu/naga shader compilation logs
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("curvebender=info".parse().unwrap())
                .add_directive("wgpu=warn".parse().unwrap())
                .add_directive("naga=warn".parse().unwrap())
                .add_directive("wgpu_core=warn".parse().unwrap())
                .add_directive("wgpu_hal=warn".parse().unwrap()),
        )
        .init();

    let initial_state = AppState::new();

    let app = Xilem::new(initial_state, app_logic);
    app.run_in(event_loop)?;
    Ok(())
}

/// Build the single-window UI: one full-window canvas.
fn app_logic(state: &mut AppState) -> impl Iterator<Item = WindowView<AppState>> + use<> {
    let session = Arc::new(state.session.clone());
    let content = canvas_view(
        session,
        |state: &mut AppState, updated_session: EditSession| {
            state.session = updated_session;
        },
    );

    let window_size = LogicalSize::new(800.0, 600.0);
    let window_view = window(state.main_window_id, "Curvebender", content);
    let window_with_options = window_view.with_options(|options| {
        options
            .with_initial_inner_size(window_size)
            .on_close(|state: &mut AppState| state.running = false)
    });

    std::iter::once(window_with_options)
}
