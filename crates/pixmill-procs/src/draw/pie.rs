/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Pie slices approximated by straight chords
//!
//! Angles are in radians and grow clockwise on screen since
//! y points down. Slices sweeping past a full turn are drawn as a
//! single turn ending at `end`.
use core::f32::consts::TAU;

use pixmill_core::color::Color;

use crate::draw::{Canvas, Point};

/// Angle step of the outlines
const OUTLINE_STEP: f32 = 0.05;
/// Angle step of the filled fan
const FILL_STEP: f32 = 0.1;

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn arc_point(xm: i32, ym: i32, radius: i32, angle: f32) -> Point {
    let (sin, cos) = angle.sin_cos();
    let radius = radius as f32;

    Point::new(
        (xm as f32 + radius * cos) as i32,
        (ym as f32 + radius * sin) as i32
    )
}

/// Angles `from`, `from + step`, `from + 2 * step`... below `end`
///
/// Each angle is computed from its index, so the walk ends even when
/// adding `step` to a large angle would not change it.
#[allow(clippy::cast_precision_loss)]
fn arc_angles(from: f32, end: f32, step: f32) -> impl Iterator<Item = f32> {
    (0_u32..)
        .map(move |i| from + i as f32 * step)
        .take_while(move |angle| *angle < end)
}

impl<'a> Canvas<'a> {
    #[allow(clippy::too_many_arguments)]
    fn pie_outline(
        &mut self, xm: i32, ym: i32, start: f32, end: f32, radius: i32, color: Color,
        line: fn(&mut Self, i32, i32, i32, i32, Color)
    ) {
        let first = arc_point(xm, ym, radius, start);
        let last = arc_point(xm, ym, radius, end);

        line(self, xm, ym, first.x, first.y, color);

        let from = if end - start > TAU { end - TAU } else { start };
        let mut prev = arc_point(xm, ym, radius, from);

        for angle in arc_angles(from, end, OUTLINE_STEP) {
            let next = arc_point(xm, ym, radius, angle);
            line(self, prev.x, prev.y, next.x, next.y, color);

            prev = next;
        }
        line(self, prev.x, prev.y, last.x, last.y, color);
        line(self, xm, ym, last.x, last.y, color);
    }

    /// Outline of the slice of the circle at `(xm,ym)` between the
    /// angles `start` and `end`
    pub fn draw_pie_slice(
        &mut self, xm: i32, ym: i32, start: f32, end: f32, radius: i32, color: Color
    ) {
        self.pie_outline(xm, ym, start, end, radius, color, Self::draw_line);
    }

    /// Same as [`draw_pie_slice`](Self::draw_pie_slice) with anti-aliased lines
    pub fn draw_pie_slice_aa(
        &mut self, xm: i32, ym: i32, start: f32, end: f32, radius: i32, color: Color
    ) {
        self.pie_outline(xm, ym, start, end, radius, color, Self::draw_line_aa);
    }

    /// Fill the slice of the circle at `(xm,ym)` between the angles
    /// `start` and `end`
    ///
    /// The slice becomes a fan of the center and points on the arc,
    /// which is then handed to [`draw_polygon_filled`](Self::draw_polygon_filled).
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn draw_pie_slice_filled(
        &mut self, xm: i32, ym: i32, start: f32, end: f32, radius: i32, color: Color
    ) {
        let mut sweep = end - start;

        if sweep > TAU {
            // one extra step closes the disc
            sweep = TAU + FILL_STEP;
        }
        let arc_points = ((sweep / FILL_STEP) as i32 + 1).max(0) as u32;

        let mut fan = Vec::with_capacity(arc_points as usize + 1);
        fan.push(Point::new(xm, ym));
        fan.extend(
            (0..arc_points).map(|i| arc_point(xm, ym, radius, start + i as f32 * FILL_STEP))
        );

        self.draw_polygon_filled(&fan, color);
    }
}
