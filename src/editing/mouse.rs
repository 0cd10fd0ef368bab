// Copyright 2026 the Curvebender Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer button vocabulary for the session's event handlers.

/// Which pointer button an event refers to.
///
/// Only two buttons carry meaning in the editor: the primary button
/// authors the curve, the secondary button pans and resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Primary,
    Secondary,
}
