// Copyright 2026 the Curvebender Authors
// SPDX-License-Identifier: Apache-2.0

//! Curve editor canvas widget - the main canvas for drawing and editing
//! curves.
//!
//! The widget adapts raw masonry pointer events into the session's
//! event vocabulary: presses and releases are forwarded directly, moves
//! become drags once the pointer has travelled past the drag threshold,
//! and clicks (with a synthesized click count) are delivered on release
//! when no drag happened. The session itself never sees a host event
//! type.

mod paint;
mod view;

pub use view::canvas_view;

use crate::editing::{EditSession, MouseButton};
use crate::settings;
use kurbo::Point;
use masonry::accesskit::{Node, Role};
use masonry::core::{
    AccessCtx, BoxConstraints, ChildrenIds, EventCtx, LayoutCtx, PaintCtx, PointerButton,
    PointerButtonEvent, PointerEvent, PointerScrollEvent, PointerState, PointerUpdate,
    PropertiesMut, PropertiesRef, RegisterCtx, ScrollDelta, TextEvent, Update, UpdateCtx, Widget,
};
use masonry::kurbo::Size;
use masonry::vello::Scene;
use std::sync::Arc;
use std::time::Instant;

/// The curve editor canvas widget
pub struct CanvasWidget {
    /// The editing session (mutable copy for editing)
    pub session: EditSession,

    /// Button held since the last Down event, if any
    pressed_button: Option<MouseButton>,

    /// Screen position of the last Down event
    press_position: Option<Point>,

    /// Whether the pointer travelled past the drag threshold since the
    /// last Down event
    drag_occurred: bool,

    /// Time, position, and button of the last synthesized click, for
    /// double-click detection
    last_click: Option<(Instant, Point, MouseButton)>,
}

impl CanvasWidget {
    /// Create a new canvas widget
    pub fn new(session: Arc<EditSession>) -> Self {
        Self {
            session: (*session).clone(),
            pressed_button: None,
            press_position: None,
            drag_occurred: false,
            last_click: None,
        }
    }

    /// Emit a session update action
    fn emit_session_update(&self, ctx: &mut EventCtx<'_>) {
        ctx.submit_action::<SessionUpdate>(SessionUpdate {
            session: self.session.clone(),
        });
    }

    fn handle_pointer_down(
        &mut self,
        ctx: &mut EventCtx<'_>,
        state: &PointerState,
        button: MouseButton,
    ) {
        ctx.capture_pointer();

        let local_pos = ctx.local_position(state.position);
        tracing::debug!("Pointer down at {:?} with {:?}", local_pos, button);

        self.pressed_button = Some(button);
        self.press_position = Some(local_pos);
        self.drag_occurred = false;

        if self.session.mouse_pressed(local_pos, button) {
            ctx.request_render();
        }
    }

    fn handle_pointer_move(&mut self, ctx: &mut EventCtx<'_>, current: &PointerState) {
        let local_pos = ctx.local_position(current.position);

        if self.pressed_button.is_some() {
            if let Some(press_pos) = self.press_position
                && !self.drag_occurred
                && press_pos.distance(local_pos) > settings::click::DRAG_THRESHOLD_PX
            {
                self.drag_occurred = true;
            }
            if self.drag_occurred && self.session.mouse_dragged(local_pos) {
                ctx.request_render();
            }
        } else if self.session.mouse_moved(local_pos) {
            ctx.request_render();
        }
    }

    fn handle_pointer_up(
        &mut self,
        ctx: &mut EventCtx<'_>,
        state: &PointerState,
        button: MouseButton,
    ) {
        let local_pos = ctx.local_position(state.position);

        self.session.mouse_released();

        if !self.drag_occurred {
            let click_count = if self.is_double_click(local_pos, button) {
                2
            } else {
                1
            };
            if self.session.mouse_clicked(local_pos, button, click_count) {
                ctx.request_render();
            }
        }

        self.pressed_button = None;
        self.press_position = None;
        self.drag_occurred = false;

        self.emit_session_update(ctx);
    }

    fn handle_pointer_cancel(&mut self, ctx: &mut EventCtx<'_>) {
        self.session.mouse_released();
        self.pressed_button = None;
        self.press_position = None;
        self.drag_occurred = false;
        ctx.request_render();
    }

    /// Handle scroll wheel zoom
    fn handle_scroll_zoom(
        &mut self,
        ctx: &mut EventCtx<'_>,
        delta: &ScrollDelta,
        state: &PointerState,
    ) {
        // Extract the Y component of the scroll delta
        // Negative Y = scroll up = zoom in
        let scroll_y = match delta {
            ScrollDelta::LineDelta(_x, y) => *y,
            ScrollDelta::PixelDelta(pos) => (pos.y / 10.0) as f32, // Scale down pixel deltas
            ScrollDelta::PageDelta(_x, y) => *y * 3.0,             // Page scrolls are bigger
        };

        if scroll_y.abs() < 0.001 {
            return; // Ignore very small scrolls
        }

        let local_pos = ctx.local_position(state.position);
        if self.session.scroll(local_pos, -f64::from(scroll_y)) {
            ctx.request_render();
        }
        self.emit_session_update(ctx);
    }

    /// Check whether this click pairs with the previous one into a
    /// double-click.
    ///
    /// True when the same button clicked within the time window and
    /// distance tolerance. Tracking resets after a match so a third
    /// click starts fresh instead of cascading into triple-clicks.
    fn is_double_click(&mut self, position: Point, button: MouseButton) -> bool {
        let now = Instant::now();

        let is_double = if let Some((last_time, last_pos, last_button)) = self.last_click {
            last_button == button
                && now.duration_since(last_time).as_millis()
                    < settings::click::DOUBLE_CLICK_TIME_MS
                && last_pos.distance(position) < settings::click::DOUBLE_CLICK_DISTANCE_PX
        } else {
            false
        };

        if is_double {
            self.last_click = None;
        } else {
            self.last_click = Some((now, position, button));
        }

        is_double
    }
}

/// Map a masonry pointer button to the session's vocabulary. Buttons
/// beyond the first two carry no meaning in the editor.
fn map_button(button: PointerButton) -> Option<MouseButton> {
    match button {
        PointerButton::Primary => Some(MouseButton::Primary),
        PointerButton::Secondary => Some(MouseButton::Secondary),
        _ => None,
    }
}

/// Action emitted by the canvas widget when the session is updated
#[derive(Debug, Clone)]
pub struct SessionUpdate {
    pub session: EditSession,
}

impl Widget for CanvasWidget {
    type Action = SessionUpdate;

    fn register_children(&mut self, _ctx: &mut RegisterCtx<'_>) {
        // Leaf widget - no children
    }

    fn update(
        &mut self,
        _ctx: &mut UpdateCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        _event: &Update,
    ) {
    }

    fn layout(
        &mut self,
        _ctx: &mut LayoutCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        bc: &BoxConstraints,
    ) -> Size {
        // Use all available space (expand to fill the window)
        bc.max()
    }

    fn paint(&mut self, ctx: &mut PaintCtx<'_>, _props: &PropertiesRef<'_>, scene: &mut Scene) {
        let canvas_size = ctx.size();
        self.paint_background(scene, canvas_size);
        self.paint_curve(scene);
        self.paint_control_points(scene);
    }

    fn on_pointer_event(
        &mut self,
        ctx: &mut EventCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        event: &PointerEvent,
    ) {
        match event {
            PointerEvent::Down(PointerButtonEvent {
                button: Some(button),
                state,
                ..
            }) => {
                if let Some(mouse_button) = map_button(*button) {
                    self.handle_pointer_down(ctx, state, mouse_button);
                }
            }

            PointerEvent::Move(PointerUpdate { current, .. }) => {
                self.handle_pointer_move(ctx, current);
            }

            PointerEvent::Up(PointerButtonEvent {
                button: Some(button),
                state,
                ..
            }) => {
                if let Some(mouse_button) = map_button(*button) {
                    self.handle_pointer_up(ctx, state, mouse_button);
                }
            }

            PointerEvent::Cancel(_) => {
                self.handle_pointer_cancel(ctx);
            }

            PointerEvent::Scroll(PointerScrollEvent { delta, state, .. }) => {
                self.handle_scroll_zoom(ctx, delta, state);
            }

            _ => {
                // Ignore other pointer events
            }
        }
    }

    fn on_text_event(
        &mut self,
        _ctx: &mut EventCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        _event: &TextEvent,
    ) {
        // The editor is pointer-only
    }

    fn accessibility_role(&self) -> Role {
        Role::Canvas
    }

    fn accessibility(
        &mut self,
        _ctx: &mut AccessCtx<'_>,
        _props: &PropertiesRef<'_>,
        node: &mut Node,
    ) {
        node.set_label(format!(
            "Curve canvas: {} control points",
            self.session.curve.points.len()
        ));
    }

    fn children_ids(&self) -> ChildrenIds {
        ChildrenIds::new()
    }
}
