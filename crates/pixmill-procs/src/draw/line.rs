/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Bresenham lines and the rectangles built from them
//!
//! Lines are walked one step at a time along their major axis. Steps
//! that can't reach the canvas are skipped by computing the error term
//! at the first visible step directly, so far away end points cost no
//! more than the part of the line inside the canvas.
use pixmill_core::color::Color;

use crate::draw::Canvas;

/// A line from `(x0,y0)` spanning `a` columns and `b` rows
struct Segment {
    x0: i64,
    y0: i64,
    sx: i64,
    sy: i64,
    a:  i64,
    b:  i64
}

impl Segment {
    fn new(x0: i64, y0: i64, x1: i64, y1: i64) -> Segment {
        Segment {
            x0,
            y0,
            sx: if x0 < x1 { 1 } else { -1 },
            sy: if y0 < y1 { 1 } else { -1 },
            a: (x1 - x0).abs(),
            b: (y1 - y0).abs()
        }
    }

    const fn x_major(&self) -> bool {
        self.a >= self.b
    }

    /// Number of steps along the major axis, the last pixel is at this step
    fn steps(&self) -> i64 {
        self.a.max(self.b)
    }

    /// Euclidean length, truncated, never below 1
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    fn length(&self) -> i64 {
        let (a, b) = (self.a as f64, self.b as f64);
        ((a * a + b * b).sqrt() as i64).max(1)
    }

    /// First and last step whose major coordinate is within `pad` of the canvas
    fn visible_steps(&self, canvas: &Canvas, pad: i64) -> Option<(i64, i64)> {
        let (start, dir, size) = if self.x_major() {
            (self.x0, self.sx, canvas.columns())
        } else {
            (self.y0, self.sy, canvas.rows())
        };
        let (low, high) = if dir > 0 {
            (-start, size - 1 - start)
        } else {
            (start - (size - 1), start)
        };
        let first = (low - pad).max(0);
        let last = (high + pad).min(self.steps());

        (first <= last).then_some((first, last))
    }

    /// Position and error term of the walk after `k` major steps
    ///
    /// Minor steps taken so far are `(2 * minor * k + bias) / (2 * major)`,
    /// `bias` is the major extent for plain lines and the minor extent
    /// for anti-aliased ones.
    #[allow(clippy::cast_possible_truncation)]
    fn seek(&self, k: i64, bias: i64) -> (i64, i64, i64) {
        let (major, minor) = if self.x_major() {
            (self.a, self.b)
        } else {
            (self.b, self.a)
        };
        let minor_steps = if major == 0 {
            0
        } else {
            let taken = 2 * i128::from(minor) * i128::from(k) + i128::from(bias);
            (taken / (2 * i128::from(major))) as i64
        };
        let (x_steps, y_steps) = if self.x_major() {
            (k, minor_steps)
        } else {
            (minor_steps, k)
        };
        // a - b - x_steps * b + y_steps * a, stays within a few times a + b
        let err = i128::from(self.a) - i128::from(self.b) - i128::from(x_steps) * i128::from(self.b)
            + i128::from(y_steps) * i128::from(self.a);

        (
            self.x0 + self.sx * x_steps,
            self.y0 + self.sy * y_steps,
            err as i64
        )
    }
}

impl<'a> Canvas<'a> {
    /// Draw a line from `(x0,y0)` to `(x1,y1)`, both ends included
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        self.line(x0.into(), y0.into(), x1.into(), y1.into(), color);
    }

    pub(crate) fn line(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, color: Color) {
        let seg = Segment::new(x0, y0, x1, y1);

        let Some((first, last)) = seg.visible_steps(self, 0) else {
            return;
        };
        let (dx, dy) = (seg.a, -seg.b);
        // error value e_xy
        let (mut x, mut y, mut err) = seg.seek(first, seg.steps());

        for _ in first..=last {
            self.put_pixel(x, y, color);

            let e2 = 2 * err;

            if e2 >= dy {
                err += dy;
                x += seg.sx;
            }
            if e2 <= dx {
                err += dx;
                y += seg.sy;
            }
        }
    }

    /// Draw an anti-aliased line from `(x0,y0)` to `(x1,y1)`
    ///
    /// Every pixel is weighted by its distance to the ideal line, taken
    /// from the Bresenham error term. Pixels next to the line are drawn
    /// too when they are partially covered.
    #[allow(clippy::cast_precision_loss)]
    pub fn draw_line_aa(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let seg = Segment::new(x0.into(), y0.into(), x1.into(), y1.into());

        // neighbours of a step land one step further along
        let Some((first, last)) = seg.visible_steps(self, 1) else {
            return;
        };
        let (dx, dy, sx, sy) = (seg.a, seg.b, seg.sx, seg.sy);
        let steps = seg.steps();
        let length = seg.length();
        let coverage = |distance: i64| distance as f32 / length as f32;

        let (mut x, mut y, mut err) = seg.seek(first, seg.a.min(seg.b));

        for step in first..=last {
            self.put_pixel_aa(x, y, color, coverage((err - dx + dy).abs()));

            if step == steps {
                break;
            }
            let e2 = err;
            let x2 = x;

            // x step
            if 2 * e2 >= -dx {
                if e2 + dy < length {
                    self.put_pixel_aa(x, y + sy, color, coverage(e2 + dy));
                }
                err -= dy;
                x += sx;
            }
            // y step
            if 2 * e2 <= dy {
                if dx - e2 < length {
                    self.put_pixel_aa(x2 + sx, y, color, coverage(dx - e2));
                }
                err += dx;
                y += sy;
            }
        }
    }

    /// Draw the outline of the rectangle with corners `(x,y)` and `(x+w,y+h)`
    pub fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        let (x, y, w, h) = (i64::from(x), i64::from(y), i64::from(w), i64::from(h));

        self.line(x, y, x + w, y, color);
        self.line(x + w, y, x + w, y + h, color);
        self.line(x, y + h, x + w, y + h, color);
        self.line(x, y, x, y + h, color);
    }

    /// Fill the rows `y..y+h` between columns `x` and `x+w`
    pub fn draw_rect_filled(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        let (x, y, w, h) = (i64::from(x), i64::from(y), i64::from(w), i64::from(h));

        for row in y.max(0)..(y + h).min(self.rows()) {
            self.fill_span(x, x + w, row, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use pixmill_core::color::Color;

    use crate::draw::Canvas;

    fn set_pixels(canvas: &Canvas, background: Color) -> Vec<(i32, i32)> {
        let (width, height) = canvas.dimensions();
        let mut set = vec![];

        for y in 0..height as i32 {
            for x in 0..width as i32 {
                if canvas.pixel(x, y) != Some(background) {
                    set.push((x, y));
                }
            }
        }
        set
    }

    #[test]
    fn line_includes_both_ends() {
        let mut pixels = vec![0; 10 * 10 * 3];
        let mut canvas = Canvas::from_raw(&mut pixels, 10, 10, 3).unwrap();

        canvas.draw_line(1, 1, 6, 3, Color::WHITE);
        let set = set_pixels(&canvas, Color::opaque(0, 0, 0));

        assert_eq!(set.len(), 6);
        assert!(set.contains(&(1, 1)));
        assert!(set.contains(&(6, 3)));
    }

    #[test]
    fn line_direction_does_not_matter() {
        for (x0, y0, x1, y1) in [(0, 0, 7, 7), (7, 0, 0, 7), (3, 7, 3, 0), (0, 4, 7, 4)] {
            let mut forward = vec![0; 8 * 8 * 3];
            let mut backward = forward.clone();

            Canvas::from_raw(&mut forward, 8, 8, 3)
                .unwrap()
                .draw_line(x0, y0, x1, y1, Color::WHITE);
            Canvas::from_raw(&mut backward, 8, 8, 3)
                .unwrap()
                .draw_line(x1, y1, x0, y0, Color::WHITE);

            assert_eq!(forward, backward);
        }
    }

    #[test]
    fn aa_line_is_solid_on_axis() {
        let mut pixels = vec![0; 8 * 3 * 3];
        let mut canvas = Canvas::from_raw(&mut pixels, 8, 3, 3).unwrap();

        canvas.draw_line_aa(0, 1, 7, 1, Color::WHITE);

        for x in 0..8 {
            assert_eq!(canvas.pixel(x, 1), Some(Color::WHITE));
            assert_eq!(canvas.pixel(x, 0), Some(Color::opaque(0, 0, 0)));
        }
    }

    #[test]
    fn aa_single_point() {
        let mut pixels = vec![0; 3 * 3 * 3];
        let mut canvas = Canvas::from_raw(&mut pixels, 3, 3, 3).unwrap();

        canvas.draw_line_aa(1, 1, 1, 1, Color::WHITE);
        assert_eq!(set_pixels(&canvas, Color::opaque(0, 0, 0)), vec![(1, 1)]);
    }

    #[test]
    fn aa_line_weights_neighbours() {
        let mut pixels = vec![0; 8 * 3 * 3];
        let mut canvas = Canvas::from_raw(&mut pixels, 8, 3, 3).unwrap();

        canvas.draw_line_aa(0, 0, 5, 2, Color::WHITE);

        let rows: [[u8; 8]; 3] = [
            [255, 153, 50, 0, 0, 0, 0, 0],
            [0, 101, 204, 204, 101, 0, 0, 0],
            [0, 0, 0, 50, 153, 255, 0, 0]
        ];
        for (y, row) in rows.iter().enumerate() {
            for (x, value) in row.iter().enumerate() {
                let expected = Color::opaque(*value, *value, *value);
                assert_eq!(canvas.pixel(x as i32, y as i32), Some(expected), "({x},{y})");
            }
        }
    }

    #[test]
    fn aa_line_longer_than_square_root_of_i32_max() {
        let width = 50_001;
        let mut pixels = vec![0; width * 2 * 3];
        let mut canvas = Canvas::from_raw(&mut pixels, width, 2, 3).unwrap();

        canvas.draw_line_aa(0, 0, 50_000, 1, Color::WHITE);

        assert_eq!(canvas.pixel(0, 0), Some(Color::WHITE));
        assert_eq!(canvas.pixel(50_000, 1), Some(Color::WHITE));
        // 100 away from an ideal line 50000 long
        assert_eq!(canvas.pixel(100, 0), Some(Color::opaque(254, 254, 254)));
        assert_eq!(canvas.pixel(100, 1), Some(Color::opaque(0, 0, 0)));
    }

    #[test]
    fn far_away_ends_are_clipped() {
        let black = Color::opaque(0, 0, 0);
        let mut pixels = vec![0; 10 * 10 * 3];
        let mut canvas = Canvas::from_raw(&mut pixels, 10, 10, 3).unwrap();

        canvas.draw_line(0, 0, 1_200_000_000, 0, Color::WHITE);
        assert_eq!(set_pixels(&canvas, black), (0..10).map(|x| (x, 0)).collect::<Vec<_>>());

        let mut pixels = vec![0; 10 * 10 * 3];
        let mut canvas = Canvas::from_raw(&mut pixels, 10, 10, 3).unwrap();

        canvas.draw_line(i32::MIN, i32::MIN, i32::MAX, i32::MAX, Color::WHITE);
        canvas.draw_line(
            -1_000_000_000,
            1_000_000_009,
            1_000_000_000,
            -999_999_991,
            Color::WHITE
        );

        let mut expected: Vec<_> = (0..10).map(|i| (i, i)).collect();
        expected.extend((0..10).map(|i| (i, 9 - i)).filter(|(x, y)| x != y));
        expected.sort_unstable_by_key(|(x, y)| (*y, *x));
        assert_eq!(set_pixels(&canvas, black), expected);

        let mut pixels = vec![0; 10 * 3 * 3];
        let mut canvas = Canvas::from_raw(&mut pixels, 10, 3, 3).unwrap();

        canvas.draw_line_aa(-2_000_000_000, 1, 2_000_000_000, 1, Color::WHITE);
        assert_eq!(set_pixels(&canvas, black), (0..10).map(|x| (x, 1)).collect::<Vec<_>>());

        // completely outside
        canvas.draw_line(-50, -50, -10, 2_000_000_000, Color::opaque(9, 9, 9));
        canvas.draw_line_aa(20, 0, 2_000_000_000, 3, Color::opaque(9, 9, 9));
        assert_eq!(set_pixels(&canvas, black).len(), 10);
    }

    #[test]
    fn rectangles_far_outside() {
        let mut pixels = vec![0; 4 * 4 * 3];
        let mut canvas = Canvas::from_raw(&mut pixels, 4, 4, 3).unwrap();

        canvas.draw_rect(i32::MAX - 1, 0, 10, 2, Color::WHITE);
        assert!(set_pixels(&canvas, Color::opaque(0, 0, 0)).is_empty());

        canvas.draw_rect_filled(-5, -1_000_000_000, 10, 2_000_000_000, Color::WHITE);
        assert_eq!(set_pixels(&canvas, Color::opaque(0, 0, 0)).len(), 16);
    }

    #[test]
    fn rectangles() {
        let mut pixels = vec![0; 10 * 10 * 3];
        let mut canvas = Canvas::from_raw(&mut pixels, 10, 10, 3).unwrap();

        canvas.draw_rect(2, 2, 4, 3, Color::WHITE);
        let outline = set_pixels(&canvas, Color::opaque(0, 0, 0));
        // 5x4 box, perimeter pixels
        assert_eq!(outline.len(), 2 * 5 + 2 * 2);
        assert!(!outline.contains(&(3, 3)));

        canvas.draw_rect_filled(2, 2, 4, 3, Color::WHITE);
        let filled = set_pixels(&canvas, Color::opaque(0, 0, 0));
        // rows 2..5 filled, row 5 from the outline
        assert_eq!(filled.len(), 5 * 4);
    }
}
