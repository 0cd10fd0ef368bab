// Copyright 2026 the Curvebender Authors
// SPDX-License-Identifier: Apache-2.0

//! Editing model and interaction

pub mod drag;
pub mod mouse;
pub mod session;
pub mod viewport;

pub use drag::DragTarget;
pub use mouse::MouseButton;
pub use session::EditSession;
pub use viewport::ViewPort;
