// Copyright 2026 the Curvebender Authors
// SPDX-License-Identifier: Apache-2.0

//! Curvebender: an interactive curve editor built with Xilem

use xilem::EventLoop;

fn main() -> anyhow::Result<()> {
    curvebender::run(EventLoop::with_user_event())?;
    Ok(())
}
