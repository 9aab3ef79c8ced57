/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Polygon outlines and scanline fill
use pixmill_core::color::Color;
use pixmill_core::log::warn;

use crate::draw::{Canvas, Point};

/// Consecutive vertex pairs, closing with last to first
fn edges(points: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    points
        .iter()
        .copied()
        .zip(points.iter().copied().cycle().skip(1))
}

#[inline]
fn within(value: i32, a: i32, b: i32) -> bool {
    (a.min(b)..=a.max(b)).contains(&value)
}

/// Where the edge `p0`-`p1` crosses the horizontal line at `y`
///
/// Vertical and horizontal edges only cross lines within their own
/// y range. Crossings outside the x range of the edge are discarded.
#[allow(clippy::cast_precision_loss)]
fn scanline_intersection(p0: Point, p1: Point, y: i32) -> Option<f32> {
    if p0.x == p1.x || p0.y == p1.y {
        return within(y, p0.y, p1.y).then_some(p0.x as f32);
    }
    // y = m*x + b, converted first so far apart vertices can't overflow
    let m = (p1.y as f32 - p0.y as f32) / (p1.x as f32 - p0.x as f32);
    let b = p1.y as f32 - m * p1.x as f32;
    let x = (y as f32 - b) / m;

    let (low, high) = (p0.x.min(p1.x) as f32, p0.x.max(p1.x) as f32);

    (low..=high).contains(&x).then_some(x)
}

impl<'a> Canvas<'a> {
    /// Connect every vertex to the next, and the last back to the first
    pub fn draw_polygon(&mut self, points: &[Point], color: Color) {
        for (p0, p1) in edges(points) {
            self.draw_line(p0.x, p0.y, p1.x, p1.y, color);
        }
    }

    /// Same as [`draw_polygon`](Self::draw_polygon) with anti-aliased edges
    pub fn draw_polygon_aa(&mut self, points: &[Point], color: Color) {
        for (p0, p1) in edges(points) {
            self.draw_line_aa(p0.x, p0.y, p1.x, p1.y, color);
        }
    }

    /// Fill a polygon one scanline at a time
    ///
    /// Scanlines run from the smallest vertex y up to, but excluding,
    /// the largest. On each one the pixels from the leftmost edge
    /// crossing up to, but excluding, the rightmost are filled.
    /// Only scanlines and spans inside the canvas are visited.
    ///
    /// Polygons with fewer than three vertices are ignored. Scanlines
    /// that only touch the polygon at a single point are skipped.
    #[allow(clippy::cast_possible_truncation)]
    pub fn draw_polygon_filled(&mut self, points: &[Point], color: Color) {
        if points.len() < 3 {
            return;
        }
        let min_y = points.iter().map(|p| p.y).min().unwrap_or(0);
        let max_y = points.iter().map(|p| p.y).max().unwrap_or(0);

        let top = min_y.max(0);
        let bottom = i64::from(max_y).min(self.rows()) as i32;

        let mut crossings = Vec::with_capacity(points.len());

        for y in top..bottom {
            crossings.clear();
            crossings.extend(
                edges(points)
                    .filter_map(|(p0, p1)| scanline_intersection(p0, p1, y))
                    .map(|x| x as i64)
            );

            if crossings.len() < 2 {
                warn!(
                    "Polygon scanline at y={y} crosses {} edges, skipping it",
                    crossings.len()
                );
                continue;
            }
            crossings.sort_unstable();

            let left = crossings[0];
            let right = crossings[crossings.len() - 1];

            if right > left {
                self.fill_span(left, right - 1, y.into(), color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pixmill_core::color::Color;

    use crate::draw::polygon::scanline_intersection;
    use crate::draw::{Canvas, Point};

    const BLACK: Color = Color::opaque(0, 0, 0);

    fn set_pixels(canvas: &Canvas) -> Vec<(i32, i32)> {
        let (width, height) = canvas.dimensions();
        let mut set = vec![];

        for y in 0..height as i32 {
            for x in 0..width as i32 {
                if canvas.pixel(x, y) != Some(BLACK) {
                    set.push((x, y));
                }
            }
        }
        set
    }

    #[test]
    fn intersections() {
        let (a, b) = (Point::new(0, 0), Point::new(10, 10));

        assert_eq!(scanline_intersection(a, b, 4), Some(4.0));
        assert_eq!(scanline_intersection(a, b, 11), None);
        // vertical edge outside its y range
        assert_eq!(
            scanline_intersection(Point::new(3, 0), Point::new(3, 5), 6),
            None
        );
        assert_eq!(
            scanline_intersection(Point::new(3, 5), Point::new(3, 0), 2),
            Some(3.0)
        );
        // horizontal edge on and off its row
        assert_eq!(
            scanline_intersection(Point::new(8, 2), Point::new(1, 2), 2),
            Some(8.0)
        );
        assert_eq!(
            scanline_intersection(Point::new(8, 2), Point::new(1, 2), 3),
            None
        );
    }

    #[test]
    fn fills_axis_aligned_rectangle() {
        let (width, height) = (60, 50);
        let mut pixels = vec![0; width * height * 4];
        let mut canvas = Canvas::from_raw(&mut pixels, width, height, 4).unwrap();
        let red = Color::opaque(255, 0, 0);

        let rect = [
            Point::new(10, 10),
            Point::new(50, 10),
            Point::new(50, 40),
            Point::new(10, 40)
        ];
        canvas.draw_polygon_filled(&rect, red);

        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let expected = if (10..40).contains(&y) && (10..50).contains(&x) {
                    red
                } else {
                    Color::new(0, 0, 0, 0)
                };
                assert_eq!(canvas.pixel(x, y), Some(expected), "({x},{y})");
            }
        }
    }

    #[test]
    fn fills_triangle() {
        let mut pixels = vec![0; 12 * 12 * 3];
        let mut canvas = Canvas::from_raw(&mut pixels, 12, 12, 3).unwrap();

        let triangle = [Point::new(0, 0), Point::new(10, 0), Point::new(0, 10)];
        canvas.draw_polygon_filled(&triangle, Color::WHITE);

        let set = set_pixels(&canvas);
        assert_eq!(set.len(), 55);
        assert!(set.contains(&(9, 0)));
        assert!(!set.contains(&(10, 0)));
        assert!(set.contains(&(0, 9)));
        assert!(!set.contains(&(1, 9)));
    }

    #[test]
    fn fills_polygons_reaching_far_outside() {
        let mut pixels = vec![0; 10 * 4 * 3];
        let mut canvas = Canvas::from_raw(&mut pixels, 10, 4, 3).unwrap();

        canvas.draw_polygon_filled(
            &[
                Point::new(-2_000_000_000, 0),
                Point::new(2_000_000_000, 0),
                Point::new(0, 2)
            ],
            Color::WHITE
        );
        let expected: Vec<_> = (0..2).flat_map(|y| (0..10).map(move |x| (x, y))).collect();
        assert_eq!(set_pixels(&canvas), expected);

        let mut pixels = vec![0; 10 * 10 * 3];
        let mut canvas = Canvas::from_raw(&mut pixels, 10, 10, 3).unwrap();

        // a spike crossing the whole canvas vertically
        canvas.draw_polygon_filled(
            &[
                Point::new(0, -2_000_000_000),
                Point::new(5, 2_000_000_000),
                Point::new(9, -2_000_000_000)
            ],
            Color::WHITE
        );
        let expected: Vec<_> = (0..10).flat_map(|y| (2..7).map(move |x| (x, y))).collect();
        assert_eq!(set_pixels(&canvas), expected);
    }

    #[test]
    fn degenerate_polygons() {
        let mut pixels = vec![0; 8 * 8 * 3];
        let mut canvas = Canvas::from_raw(&mut pixels, 8, 8, 3).unwrap();

        canvas.draw_polygon_filled(&[Point::new(1, 1), Point::new(6, 6)], Color::WHITE);
        canvas.draw_polygon_filled(&[], Color::WHITE);
        // all vertices on a row, nothing to scan
        canvas.draw_polygon_filled(
            &[Point::new(1, 3), Point::new(6, 3), Point::new(4, 3)],
            Color::WHITE
        );
        assert!(set_pixels(&canvas).is_empty());
    }

    #[test]
    fn outline_matches_rectangle() {
        let mut outline = vec![0; 10 * 10 * 3];
        let mut rect = outline.clone();

        Canvas::from_raw(&mut outline, 10, 10, 3)
            .unwrap()
            .draw_polygon(
                &[
                    Point::new(2, 2),
                    Point::new(7, 2),
                    Point::new(7, 7),
                    Point::new(2, 7)
                ],
                Color::WHITE
            );
        Canvas::from_raw(&mut rect, 10, 10, 3)
            .unwrap()
            .draw_rect(2, 2, 5, 5, Color::WHITE);

        assert_eq!(outline, rect);
    }

    #[test]
    fn aa_outline_touches_vertices() {
        let mut pixels = vec![0; 10 * 10 * 3];
        let mut canvas = Canvas::from_raw(&mut pixels, 10, 10, 3).unwrap();

        let points = [Point::new(1, 1), Point::new(8, 2), Point::new(4, 8)];
        canvas.draw_polygon_aa(&points, Color::WHITE);

        for p in points {
            assert_ne!(canvas.pixel(p.x, p.y), Some(BLACK));
        }
    }
}
