// Copyright 2026 the Curvebender Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer event handlers for EditSession.
//!
//! One handler per event kind, dispatching on the transient drag state.
//! Press-time hit testing and click-time curve edits are two independent
//! phases over the same gesture: a press that toggles a finished point's
//! handles is still followed by its click event, which the finished
//! curve absorbs without adding a point. The two phases must not be
//! merged.

use super::EditSession;
use crate::editing::drag::DragTarget;
use crate::editing::mouse::MouseButton;
use crate::model::CurvePhase;
use crate::spline;
use kurbo::Point;

impl EditSession {
    /// Handle a button press at a screen position.
    ///
    /// Resolves what the press lands on (handles first, then point
    /// bodies, then pan for the secondary button) and records it as the
    /// drag target. A press on a finished curve's point body also
    /// toggles that point's handle visibility.
    pub fn mouse_pressed(&mut self, screen_pos: Point, button: MouseButton) -> bool {
        self.last_pan_pos = screen_pos;

        if let Some(target) = self.hit_test(screen_pos) {
            tracing::debug!("Press at ({}, {}) hit {:?}", screen_pos.x, screen_pos.y, target);
            self.drag = Some(target);

            if let DragTarget::Point(index) = target {
                if self.curve.is_finished() {
                    let cp = &mut self.curve.points[index];
                    cp.handles_visible = !cp.handles_visible;
                }
                return true;
            }
            return false;
        }

        if button == MouseButton::Secondary {
            self.drag = Some(DragTarget::Pan);
        }
        false
    }

    /// Handle a drag to a screen position, dispatching on the current
    /// drag target. No-op without one.
    pub fn mouse_dragged(&mut self, screen_pos: Point) -> bool {
        let Some(target) = self.drag else {
            return false;
        };

        match target {
            DragTarget::Point(index) => {
                let design_pos = self.viewport.screen_to_design(screen_pos);
                let cp = &mut self.curve.points[index];
                // Handles ride along rigidly so the tangent shape is
                // preserved.
                let delta = design_pos - cp.point;
                cp.point = design_pos;
                cp.out_handle = cp.out_handle.map(|h| h + delta);
                cp.in_handle = cp.in_handle.map(|h| h + delta);
            }
            DragTarget::OutHandle(index) => {
                let design_pos = self.viewport.screen_to_design(screen_pos);
                let cp = &mut self.curve.points[index];
                cp.out_handle = Some(design_pos);
                cp.in_handle = Some(spline::reflect(design_pos, cp.point));
            }
            DragTarget::InHandle(index) => {
                let design_pos = self.viewport.screen_to_design(screen_pos);
                let cp = &mut self.curve.points[index];
                cp.in_handle = Some(design_pos);
                cp.out_handle = Some(spline::reflect(design_pos, cp.point));
            }
            DragTarget::Pan => {
                self.viewport.pan_by(screen_pos - self.last_pan_pos);
                self.last_pan_pos = screen_pos;
            }
        }
        true
    }

    /// Handle a button release: the drag target is cleared
    /// unconditionally. Drag edits were applied live; there is nothing
    /// to commit.
    pub fn mouse_released(&mut self) {
        self.drag = None;
    }

    /// Handle a click (press + release without drag).
    ///
    /// Primary single-click adds a point (absorbed by a finished
    /// curve), primary double-click freezes the curve, secondary
    /// double-click resets it. A secondary single-click does nothing;
    /// the secondary button acts through the pan drag path.
    pub fn mouse_clicked(
        &mut self,
        screen_pos: Point,
        button: MouseButton,
        click_count: u8,
    ) -> bool {
        match (button, click_count) {
            (MouseButton::Primary, 1) => {
                if self.curve.is_finished() {
                    return false;
                }
                let design_pos = self.viewport.screen_to_design(screen_pos);
                self.curve.add_point(design_pos);
                tracing::debug!(
                    "Added point {} at ({}, {})",
                    self.curve.points.len() - 1,
                    design_pos.x,
                    design_pos.y
                );
                true
            }
            (MouseButton::Primary, 2) => {
                let before = self.curve.phase();
                self.curve.finish();
                self.curve.phase() != before
            }
            (MouseButton::Secondary, 2) => {
                self.curve.reset();
                true
            }
            _ => false,
        }
    }

    /// Handle a pointer move with no button held: while drawing, the
    /// preview spline tracks the cursor.
    pub fn mouse_moved(&mut self, screen_pos: Point) -> bool {
        if self.curve.phase() != CurvePhase::Drawing {
            return false;
        }
        let design_pos = self.viewport.screen_to_design(screen_pos);
        self.curve.set_preview_cursor(design_pos);
        true
    }

    /// Handle a scroll: zoom one step anchored at the cursor. Positive
    /// `delta_y` zooms in.
    pub fn scroll(&mut self, screen_pos: Point, delta_y: f64) -> bool {
        self.viewport.zoom_at(screen_pos, delta_y);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use kurbo::Vec2;

    fn click(session: &mut EditSession, x: f64, y: f64) {
        session.mouse_pressed(Point::new(x, y), MouseButton::Primary);
        session.mouse_released();
        session.mouse_clicked(Point::new(x, y), MouseButton::Primary, 1);
    }

    fn double_click(session: &mut EditSession, x: f64, y: f64, button: MouseButton) {
        session.mouse_pressed(Point::new(x, y), button);
        session.mouse_released();
        session.mouse_clicked(Point::new(x, y), button, 2);
    }

    /// The triangle scenario: three clicks, then a double-click to
    /// freeze.
    fn triangle_session() -> EditSession {
        let mut session = EditSession::new();
        click(&mut session, 100.0, 100.0);
        click(&mut session, 200.0, 50.0);
        click(&mut session, 300.0, 100.0);
        double_click(&mut session, 300.0, 100.0, MouseButton::Primary);
        session
    }

    #[test]
    fn draw_and_finish_triangle() {
        let mut session = EditSession::new();

        click(&mut session, 100.0, 100.0);
        assert_eq!(session.curve.phase(), CurvePhase::Drawing);

        click(&mut session, 200.0, 50.0);
        click(&mut session, 300.0, 100.0);
        assert_eq!(session.curve.points.len(), 3);

        double_click(&mut session, 300.0, 100.0, MouseButton::Primary);
        assert_eq!(session.curve.phase(), CurvePhase::Finished);
        assert_eq!(session.curve.points.len(), 3);

        // Endpoints got the duplicated-endpoint derivation; the
        // interior point has both handles.
        assert!(session.curve.points[0].out_handle.is_some());
        assert!(session.curve.points[0].in_handle.is_none());
        assert!(session.curve.points[1].out_handle.is_some());
        assert!(session.curve.points[1].in_handle.is_some());
        assert!(session.curve.points[2].out_handle.is_none());
        assert!(session.curve.points[2].in_handle.is_some());
    }

    #[test]
    fn clicks_on_finished_curve_add_nothing() {
        let mut session = triangle_session();
        click(&mut session, 400.0, 400.0);
        assert_eq!(session.curve.points.len(), 3);
        assert_eq!(session.curve.phase(), CurvePhase::Finished);
    }

    #[test]
    fn secondary_double_click_resets() {
        let mut session = triangle_session();
        double_click(&mut session, 150.0, 150.0, MouseButton::Secondary);

        assert_eq!(session.curve.phase(), CurvePhase::Idle);
        assert!(session.curve.points.is_empty());

        // Drawing works again afterwards.
        click(&mut session, 10.0, 10.0);
        assert_eq!(session.curve.phase(), CurvePhase::Drawing);
        assert_eq!(session.curve.points.len(), 1);
    }

    #[test]
    fn secondary_single_click_does_nothing() {
        let mut session = triangle_session();
        let before = session.clone();
        session.mouse_clicked(Point::new(150.0, 150.0), MouseButton::Secondary, 1);
        assert_eq!(session.curve, before.curve);
        assert_eq!(session.viewport, before.viewport);
    }

    #[test]
    fn press_on_finished_point_toggles_handles_without_adding() {
        let mut session = triangle_session();
        assert!(!session.curve.points[1].handles_visible);

        // Press phase: toggle on.
        session.mouse_pressed(Point::new(200.0, 50.0), MouseButton::Primary);
        assert!(session.curve.points[1].handles_visible);
        assert_eq!(session.drag, Some(DragTarget::Point(1)));

        // Click phase of the same gesture: absorbed, no point added.
        session.mouse_released();
        session.mouse_clicked(Point::new(200.0, 50.0), MouseButton::Primary, 1);
        assert_eq!(session.curve.points.len(), 3);

        // A second press toggles back off.
        session.mouse_pressed(Point::new(200.0, 50.0), MouseButton::Primary);
        assert!(!session.curve.points[1].handles_visible);
    }

    #[test]
    fn press_while_drawing_does_not_toggle_handles() {
        let mut session = EditSession::new();
        click(&mut session, 100.0, 100.0);
        click(&mut session, 200.0, 100.0);

        session.mouse_pressed(Point::new(100.0, 100.0), MouseButton::Primary);
        assert!(!session.curve.points[0].handles_visible);
        assert_eq!(session.drag, Some(DragTarget::Point(0)));
    }

    #[test]
    fn dragging_a_point_moves_handles_rigidly() {
        let mut session = triangle_session();
        let before = session.curve.points[1];
        let out_offset = before.out_handle.unwrap() - before.point;
        let in_offset = before.in_handle.unwrap() - before.point;

        session.mouse_pressed(Point::new(200.0, 50.0), MouseButton::Primary);
        session.mouse_dragged(Point::new(230.0, 80.0));
        session.mouse_released();

        let after = session.curve.points[1];
        assert_abs_diff_eq!(after.point.x, 230.0, epsilon = 1e-9);
        assert_abs_diff_eq!(after.point.y, 80.0, epsilon = 1e-9);

        // Relative tangent vectors are unchanged.
        let out_after = after.out_handle.unwrap() - after.point;
        let in_after = after.in_handle.unwrap() - after.point;
        assert_abs_diff_eq!(out_after.x, out_offset.x, epsilon = 1e-9);
        assert_abs_diff_eq!(out_after.y, out_offset.y, epsilon = 1e-9);
        assert_abs_diff_eq!(in_after.x, in_offset.x, epsilon = 1e-9);
        assert_abs_diff_eq!(in_after.y, in_offset.y, epsilon = 1e-9);
    }

    #[test]
    fn dragging_out_handle_mirrors_in_handle() {
        let mut session = triangle_session();
        // Reveal the interior point's handles, then grab the out-handle.
        session.mouse_pressed(Point::new(200.0, 50.0), MouseButton::Primary);
        session.mouse_released();

        let out_handle = session.curve.points[1].out_handle.unwrap();
        session.mouse_pressed(session.viewport.to_screen(out_handle), MouseButton::Primary);
        assert_eq!(session.drag, Some(DragTarget::OutHandle(1)));

        session.mouse_dragged(Point::new(260.0, 20.0));
        session.mouse_released();

        let cp = session.curve.points[1];
        let out_after = cp.out_handle.unwrap();
        let in_after = cp.in_handle.unwrap();
        assert_abs_diff_eq!(out_after.x, 260.0, epsilon = 1e-9);
        assert_abs_diff_eq!(out_after.y, 20.0, epsilon = 1e-9);
        // Point reflection: in = 2 * point - out.
        assert_abs_diff_eq!(in_after.x, 2.0 * cp.point.x - 260.0, epsilon = 1e-9);
        assert_abs_diff_eq!(in_after.y, 2.0 * cp.point.y - 20.0, epsilon = 1e-9);

        // Collinear and equidistant about the point.
        let d_out = cp.point.distance(out_after);
        let d_in = cp.point.distance(in_after);
        assert_abs_diff_eq!(d_out, d_in, epsilon = 1e-9);
        let cross = (out_after - cp.point).cross(in_after - cp.point);
        assert_abs_diff_eq!(cross, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn dragging_in_handle_mirrors_out_handle() {
        let mut session = triangle_session();
        session.mouse_pressed(Point::new(200.0, 50.0), MouseButton::Primary);
        session.mouse_released();

        let in_handle = session.curve.points[1].in_handle.unwrap();
        session.mouse_pressed(session.viewport.to_screen(in_handle), MouseButton::Primary);
        assert_eq!(session.drag, Some(DragTarget::InHandle(1)));

        session.mouse_dragged(Point::new(150.0, 90.0));

        let cp = session.curve.points[1];
        assert_abs_diff_eq!(cp.in_handle.unwrap().x, 150.0, epsilon = 1e-9);
        assert_abs_diff_eq!(cp.in_handle.unwrap().y, 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(cp.out_handle.unwrap().x, 2.0 * cp.point.x - 150.0, epsilon = 1e-9);
        assert_abs_diff_eq!(cp.out_handle.unwrap().y, 2.0 * cp.point.y - 90.0, epsilon = 1e-9);
    }

    #[test]
    fn endpoint_out_handle_drag_updates_unrendered_mirror() {
        let mut session = EditSession::new();
        click(&mut session, 0.0, 0.0);
        click(&mut session, 100.0, 0.0);
        double_click(&mut session, 100.0, 0.0, MouseButton::Primary);

        // Reveal the first point's handles and drag its out-handle.
        session.mouse_pressed(Point::new(0.0, 0.0), MouseButton::Primary);
        session.mouse_released();
        let out_handle = session.curve.points[0].out_handle.unwrap();
        session.mouse_pressed(session.viewport.to_screen(out_handle), MouseButton::Primary);
        session.mouse_dragged(Point::new(10.0, -50.0));

        let cp = session.curve.points[0];
        assert_abs_diff_eq!(cp.out_handle.unwrap().x, 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(cp.out_handle.unwrap().y, -50.0, epsilon = 1e-9);
        // The mirrored in-handle is recomputed but never rendered or
        // hit-tested on a first point.
        assert_abs_diff_eq!(cp.in_handle.unwrap().x, -10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(cp.in_handle.unwrap().y, 50.0, epsilon = 1e-9);
        assert_eq!(session.hit_test(Point::new(-10.0, 50.0)), None);
    }

    #[test]
    fn secondary_press_on_empty_canvas_pans() {
        let mut session = triangle_session();
        let design_before: Vec<Point> =
            session.curve.points.iter().map(|cp| cp.point).collect();

        session.mouse_pressed(Point::new(500.0, 500.0), MouseButton::Secondary);
        assert_eq!(session.drag, Some(DragTarget::Pan));

        session.mouse_dragged(Point::new(520.0, 470.0));
        assert_abs_diff_eq!(session.viewport.offset.x, 20.0, epsilon = 1e-9);
        assert_abs_diff_eq!(session.viewport.offset.y, -30.0, epsilon = 1e-9);

        // Successive deltas accumulate from the last drag position.
        session.mouse_dragged(Point::new(530.0, 470.0));
        assert_abs_diff_eq!(session.viewport.offset.x, 30.0, epsilon = 1e-9);

        session.mouse_released();
        assert!(session.drag.is_none());

        // Panning moves the view, never the curve.
        for (cp, before) in session.curve.points.iter().zip(design_before) {
            assert_eq!(cp.point, before);
        }
    }

    #[test]
    fn primary_press_on_empty_canvas_selects_nothing() {
        let mut session = triangle_session();
        session.mouse_pressed(Point::new(500.0, 500.0), MouseButton::Primary);
        assert!(session.drag.is_none());
        // Dragging with no target is a no-op.
        assert!(!session.mouse_dragged(Point::new(600.0, 600.0)));
        assert_eq!(session.viewport, crate::editing::ViewPort::new());
    }

    #[test]
    fn secondary_press_on_point_selects_it_not_pan() {
        let mut session = triangle_session();
        session.mouse_pressed(Point::new(100.0, 100.0), MouseButton::Secondary);
        assert_eq!(session.drag, Some(DragTarget::Point(0)));
    }

    #[test]
    fn release_always_clears_selection() {
        let mut session = triangle_session();
        session.mouse_pressed(Point::new(100.0, 100.0), MouseButton::Primary);
        assert!(session.drag.is_some());
        session.mouse_released();
        assert!(session.drag.is_none());

        // Releasing with nothing selected is fine too.
        session.mouse_released();
        assert!(session.drag.is_none());
    }

    #[test]
    fn move_tracks_preview_cursor_only_while_drawing() {
        let mut session = EditSession::new();
        assert!(!session.mouse_moved(Point::new(50.0, 50.0)));
        assert!(session.curve.preview_cursor().is_none());

        click(&mut session, 0.0, 0.0);
        assert!(session.mouse_moved(Point::new(50.0, 50.0)));
        assert_eq!(session.curve.preview_cursor(), Some(Point::new(50.0, 50.0)));

        click(&mut session, 100.0, 0.0);
        double_click(&mut session, 100.0, 0.0, MouseButton::Primary);
        assert!(!session.mouse_moved(Point::new(70.0, 70.0)));
        assert!(session.curve.preview_cursor().is_none());
    }

    #[test]
    fn preview_cursor_converts_through_viewport() {
        let mut session = EditSession::new();
        session.viewport.zoom = 2.0;
        session.viewport.offset = Vec2::new(10.0, 10.0);

        session.mouse_clicked(Point::new(10.0, 10.0), MouseButton::Primary, 1);
        session.mouse_moved(Point::new(110.0, 60.0));

        assert_eq!(session.curve.preview_cursor(), Some(Point::new(50.0, 25.0)));
    }

    #[test]
    fn click_adds_point_in_design_space() {
        let mut session = EditSession::new();
        session.viewport.zoom = 2.0;
        session.viewport.offset = Vec2::new(100.0, 0.0);

        session.mouse_clicked(Point::new(300.0, 50.0), MouseButton::Primary, 1);
        assert_eq!(session.curve.points[0].point, Point::new(100.0, 25.0));
    }

    #[test]
    fn double_click_while_idle_is_ignored() {
        let mut session = EditSession::new();
        assert!(!session.mouse_clicked(Point::new(0.0, 0.0), MouseButton::Primary, 2));
        assert_eq!(session.curve.phase(), CurvePhase::Idle);
    }

    #[test]
    fn double_click_with_one_point_does_not_finish() {
        let mut session = EditSession::new();
        click(&mut session, 10.0, 10.0);
        assert!(!session.mouse_clicked(Point::new(10.0, 10.0), MouseButton::Primary, 2));
        assert_eq!(session.curve.phase(), CurvePhase::Drawing);
    }
}
