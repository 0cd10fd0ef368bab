// Copyright 2026 the Curvebender Authors
// SPDX-License-Identifier: Apache-2.0

//! Paint helper methods for CanvasWidget
//!
//! All curve geometry is built in design space and pushed through the
//! viewport affine before stroking, so stroke widths and marker radii
//! stay constant in screen pixels at any zoom level.

use super::CanvasWidget;
use crate::spline;
use crate::theme;
use kurbo::{Affine, BezPath, Circle, Line, Point, Stroke};
use masonry::kurbo::Size;
use masonry::util::fill_color;
use masonry::vello::Scene;
use masonry::vello::peniko::Brush;

impl CanvasWidget {
    pub(super) fn paint_background(&self, scene: &mut Scene, canvas_size: Size) {
        let bg_rect = canvas_size.to_rect();
        fill_color(scene, &bg_rect, theme::canvas::BACKGROUND);
    }

    /// Stroke the curve: the frozen bezier when finished, otherwise the
    /// committed spline (solid) overlaid with the live preview spline
    /// through the cursor (dashed).
    pub(super) fn paint_curve(&self, scene: &mut Scene) {
        let transform = self.session.viewport.affine();
        let curve = &self.session.curve;
        let positions: Vec<Point> = curve.points.iter().map(|cp| cp.point).collect();

        let solid = Stroke::new(theme::size::CURVE_STROKE_WIDTH);
        let brush = Brush::Solid(theme::curve::STROKE);

        if curve.is_drawing() {
            if positions.len() >= 2 {
                let committed = transform * &spline::catmull_rom_path(&positions);
                scene.stroke(&solid, Affine::IDENTITY, &brush, None, &committed);
            }

            if let Some(cursor) = curve.preview_cursor() {
                let mut preview_points = positions;
                preview_points.push(cursor);
                if preview_points.len() >= 2 {
                    let dashed = Stroke::new(theme::size::CURVE_STROKE_WIDTH).with_dashes(
                        theme::size::PREVIEW_DASH_OFFSET,
                        theme::size::PREVIEW_DASH,
                    );
                    let preview = transform * &spline::catmull_rom_path(&preview_points);
                    scene.stroke(&dashed, Affine::IDENTITY, &brush, None, &preview);
                }
            }
        } else if positions.len() >= 2 {
            let frozen = transform * &self.frozen_path();
            scene.stroke(&solid, Affine::IDENTITY, &brush, None, &frozen);
        }
    }

    /// Build the frozen curve from its stored handles, falling back to
    /// a straight segment where a pair is missing.
    fn frozen_path(&self) -> BezPath {
        let points = &self.session.curve.points;
        let mut path = BezPath::new();
        path.move_to(points[0].point);

        for pair in points.windows(2) {
            match (pair[0].out_handle, pair[1].in_handle) {
                (Some(c1), Some(c2)) => path.curve_to(c1, c2, pair[1].point),
                _ => path.line_to(pair[1].point),
            }
        }
        path
    }

    /// Draw control point markers and, for points with visible handles,
    /// the handle markers and their guide lines.
    pub(super) fn paint_control_points(&self, scene: &mut Scene) {
        let viewport = &self.session.viewport;
        let points = &self.session.curve.points;
        let radius = theme::size::CONTROL_POINT_RADIUS;

        // First pass: guide lines, so markers sit on top of them
        let guide_stroke = Stroke::new(theme::size::HANDLE_LINE_WIDTH);
        let guide_brush = Brush::Solid(theme::handle::GUIDE_LINE);
        for (i, cp) in points.iter().enumerate() {
            if !cp.handles_visible {
                continue;
            }
            let screen_point = viewport.to_screen(cp.point);

            if i + 1 < points.len()
                && let Some(out_handle) = cp.out_handle
            {
                let line = Line::new(screen_point, viewport.to_screen(out_handle));
                scene.stroke(&guide_stroke, Affine::IDENTITY, &guide_brush, None, &line);
            }
            if i > 0
                && let Some(in_handle) = cp.in_handle
            {
                let line = Line::new(screen_point, viewport.to_screen(in_handle));
                scene.stroke(&guide_stroke, Affine::IDENTITY, &guide_brush, None, &line);
            }
        }

        // Second pass: markers
        for (i, cp) in points.iter().enumerate() {
            let screen_point = viewport.to_screen(cp.point);
            fill_color(scene, &Circle::new(screen_point, radius), theme::point::FILL);

            if !cp.handles_visible {
                continue;
            }

            if i + 1 < points.len()
                && let Some(out_handle) = cp.out_handle
            {
                let marker = Circle::new(viewport.to_screen(out_handle), radius);
                fill_color(scene, &marker, theme::handle::OUT_FILL);
            }
            if i > 0
                && let Some(in_handle) = cp.in_handle
            {
                let marker = Circle::new(viewport.to_screen(in_handle), radius);
                fill_color(scene, &marker, theme::handle::IN_FILL);
            }
        }
    }
}
