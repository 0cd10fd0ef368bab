// Copyright 2026 the Curvebender Authors
// SPDX-License-Identifier: Apache-2.0

//! Curve data model

pub mod curve;

pub use curve::{ControlPoint, Curve, CurvePhase};
