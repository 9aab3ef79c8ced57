/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Midpoint circles
//!
//! The circle is traced one quadrant at a time from `(-r,0)`, the other
//! three quadrants are mirrored. A radius of zero is the center pixel
//! alone, a negative radius draws nothing.
use pixmill_core::color::Color;

use crate::draw::Canvas;

/// Walk the points of a quadrant, `func(x, y)` gets offsets
/// from the center with `x <= 0`
fn trace_quadrant<F: FnMut(i32, i32)>(radius: i32, mut func: F) {
    let mut x = -radius;
    let mut y = 0;
    let mut err = 2 - 2 * radius;

    loop {
        func(x, y);

        let r = err;

        if r <= y {
            y += 1;
            err += y * 2 + 1;
        }
        if r > x || err > y {
            x += 1;
            err += x * 2 + 1;
        }
        if x >= 0 {
            break;
        }
    }
}

impl<'a> Canvas<'a> {
    /// Returns true when the circle was fully handled here
    fn degenerate_circle(&mut self, xm: i32, ym: i32, radius: i32, color: Color) -> bool {
        match radius {
            r if r < 0 => true,
            0 => {
                self.set_pixel(xm, ym, color);
                true
            }
            _ => false
        }
    }

    /// Draw the outline of a circle centered at `(xm,ym)`
    pub fn draw_circle(&mut self, xm: i32, ym: i32, radius: i32, color: Color) {
        if self.degenerate_circle(xm, ym, radius, color) {
            return;
        }
        trace_quadrant(radius, |x, y| {
            self.set_pixel(xm - x, ym + y, color);
            self.set_pixel(xm - y, ym - x, color);
            self.set_pixel(xm + x, ym - y, color);
            self.set_pixel(xm + y, ym + x, color);
        });
    }

    /// Draw an anti-aliased circle outline centered at `(xm,ym)`
    #[allow(clippy::cast_precision_loss)]
    pub fn draw_circle_aa(&mut self, xm: i32, ym: i32, radius: i32, color: Color) {
        if self.degenerate_circle(xm, ym, radius, color) {
            return;
        }
        let mut x = -radius;
        let mut y = 0;
        let mut err = 2 - 2 * radius;
        let scale = (1 - err) as f32;

        loop {
            let intensity = (err - 2 * (x + y) - 2).abs() as f32 / scale;
            self.set_pixel_aa(xm - x, ym + y, color, intensity);
            self.set_pixel_aa(xm - y, ym - x, color, intensity);
            self.set_pixel_aa(xm + x, ym - y, color, intensity);
            self.set_pixel_aa(xm + y, ym + x, color, intensity);

            let e2 = err;
            let x2 = x;

            // x step
            if err + y > 0 {
                let intensity = (err - 2 * x - 1) as f32 / scale;

                if intensity < 1.0 {
                    self.set_pixel_aa(xm - x, ym + y + 1, color, intensity);
                    self.set_pixel_aa(xm - y - 1, ym - x, color, intensity);
                    self.set_pixel_aa(xm + x, ym - y - 1, color, intensity);
                    self.set_pixel_aa(xm + y + 1, ym + x, color, intensity);
                }
                x += 1;
                err += x * 2 + 1;
            }
            // y step
            if e2 + x2 <= 0 {
                let intensity = (2 * y + 3 - e2) as f32 / scale;

                if intensity < 1.0 {
                    self.set_pixel_aa(xm - x2 - 1, ym + y, color, intensity);
                    self.set_pixel_aa(xm - y, ym - x2 - 1, color, intensity);
                    self.set_pixel_aa(xm + x2 + 1, ym - y, color, intensity);
                    self.set_pixel_aa(xm + y, ym + x2 + 1, color, intensity);
                }
                y += 1;
                err += y * 2 + 1;
            }
            if x >= 0 {
                break;
            }
        }
    }

    /// Draw a filled circle centered at `(xm,ym)`
    ///
    /// Every traced point spans a horizontal line to its mirror image
    pub fn draw_circle_filled(&mut self, xm: i32, ym: i32, radius: i32, color: Color) {
        if self.degenerate_circle(xm, ym, radius, color) {
            return;
        }
        trace_quadrant(radius, |x, y| {
            self.draw_line(xm - x, ym + y, xm + x, ym + y, color);
            self.draw_line(xm - x, ym - y, xm + x, ym - y, color);
        });
    }

    /// Draw a filled circle with an anti-aliased edge
    pub fn draw_circle_filled_aa(&mut self, xm: i32, ym: i32, radius: i32, color: Color) {
        if self.degenerate_circle(xm, ym, radius, color) {
            return;
        }
        self.draw_circle_aa(xm, ym, radius, color);
        self.draw_circle_filled(xm, ym, radius, color);
    }
}
