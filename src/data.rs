// Copyright 2026 the Curvebender Authors
// SPDX-License-Identifier: Apache-2.0

//! Application state and data structures

use crate::editing::EditSession;
use xilem::{AppState as XilemAppState, WindowId};

/// Main application state
pub struct AppState {
    /// The current editing session
    pub session: EditSession,

    /// Whether the app should keep running
    pub running: bool,

    /// Main window ID (stable across rebuilds to prevent window
    /// recreation)
    pub main_window_id: WindowId,
}

impl AppState {
    /// Create a new application state with an empty session
    pub fn new() -> Self {
        Self {
            session: EditSession::new(),
            running: true,
            main_window_id: WindowId::next(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl XilemAppState for AppState {
    fn keep_running(&self) -> bool {
        self.running
    }
}
