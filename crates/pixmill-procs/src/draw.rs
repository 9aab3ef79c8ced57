/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Raster drawing on RGB and RGBA images
//!
//! A [`Canvas`] borrows the pixels of an image and draws lines,
//! rectangles, circles, polygons and pie slices into them.
//!
//! Coordinates are signed, shapes may lie partially or completely
//! outside the canvas, pixels that fall outside are skipped.
//!
//! # Example
//! ```
//! use pixmill_core::color::Color;
//! use pixmill_image::image::Image;
//! use pixmill_procs::draw::{Canvas, Point};
//!
//! let mut image = Image::create(64, 64, 32).unwrap();
//! let mut canvas = Canvas::new(&mut image).unwrap();
//!
//! canvas.draw_line(0, 0, 63, 63, Color::WHITE);
//! canvas.draw_circle_filled(32, 32, 10, Color::opaque(255, 0, 0));
//! canvas.draw_polygon_filled(
//!     &[Point::new(2, 40), Point::new(20, 40), Point::new(10, 60)],
//!     Color::opaque(0, 0, 255)
//! );
//! assert_eq!(canvas.pixel(32, 32), Some(Color::opaque(255, 0, 0)));
//! ```
use pixmill_core::color::Color;
use pixmill_image::errors::ImageErrors;
use pixmill_image::image::Image;

use crate::blend::alpha;
use crate::utils::{check_buffer, check_rgb_components};

mod circle;
mod line;
mod pie;
mod polygon;

/// A point on a canvas
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

/// Drawing surface over interleaved RGB or RGBA pixels
pub struct Canvas<'a> {
    pixels:     &'a mut [u8],
    width:      usize,
    height:     usize,
    components: usize
}

impl<'a> Canvas<'a> {
    /// Draw into an image
    ///
    /// # Errors
    /// [`ImageErrors::UnsupportedChannelCount`] if the image isn't RGB or RGBA
    pub fn new(image: &'a mut Image) -> Result<Canvas<'a>, ImageErrors> {
        let (width, height) = image.dimensions();
        let components = image.channels();

        Canvas::from_raw(image.pixels_mut(), width, height, components)
    }

    /// Draw into a raw interleaved buffer
    ///
    /// # Errors
    /// - [`ImageErrors::UnsupportedChannelCount`] if `components` isn't 3 or 4
    /// - [`ImageErrors::DimensionsMisMatch`] if `pixels` doesn't match the dimensions
    pub fn from_raw(
        pixels: &'a mut [u8], width: usize, height: usize, components: usize
    ) -> Result<Canvas<'a>, ImageErrors> {
        check_rgb_components("draw", components)?;
        check_buffer(pixels, width, height, components)?;

        Ok(Canvas {
            pixels,
            width,
            height,
            components
        })
    }

    /// Get canvas dimensions as a tuple of (width,height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[inline]
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as u64, y as u64);

        if x >= self.width as u64 || y >= self.height as u64 {
            return None;
        }
        Some((y as usize * self.width + x as usize) * self.components)
    }

    /// Columns `[0, width)` as signed bounds
    #[allow(clippy::cast_possible_wrap)]
    pub(crate) const fn columns(&self) -> i64 {
        self.width as i64
    }

    /// Rows `[0, height)` as signed bounds
    #[allow(clippy::cast_possible_wrap)]
    pub(crate) const fn rows(&self) -> i64 {
        self.height as i64
    }

    /// Read the pixel at `(x,y)`, RGB pixels report as opaque
    ///
    /// Returns `None` outside the canvas
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        let index = self.index(x.into(), y.into())?;
        let pix = &self.pixels[index..index + self.components];

        match pix {
            [r, g, b, a] => Some(Color::new(*r, *g, *b, *a)),
            [r, g, b] => Some(Color::opaque(*r, *g, *b)),
            _ => None
        }
    }

    /// Set the pixel at `(x,y)`
    ///
    /// On RGBA canvases `color` is blended over the pixel using its own
    /// alpha as opacity, alpha included. RGB canvases ignore the alpha of
    /// `color` and overwrite the pixel.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.put_pixel(x.into(), y.into(), color);
    }

    pub(crate) fn put_pixel(&mut self, x: i64, y: i64, color: Color) {
        let Some(index) = self.index(x, y) else {
            return;
        };
        let pix = &mut self.pixels[index..index + self.components];

        if pix.len() == 4 {
            let opacity = f32::from(color.a) / 255.0;

            for (old, new) in pix.iter_mut().zip(color.to_array()) {
                *old = alpha(new, *old, opacity);
            }
        } else {
            pix.copy_from_slice(&[color.r, color.g, color.b]);
        }
    }

    /// Mix `color` into the pixel at `(x,y)`
    ///
    /// `intensity` is how much of the old pixel survives, `0` writes
    /// `color` as is and `1` leaves the pixel alone. Values outside
    /// `[0,1]` are clamped.
    pub fn set_pixel_aa(&mut self, x: i32, y: i32, color: Color, intensity: f32) {
        self.put_pixel_aa(x.into(), y.into(), color, intensity);
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub(crate) fn put_pixel_aa(&mut self, x: i64, y: i64, color: Color, intensity: f32) {
        let Some(index) = self.index(x, y) else {
            return;
        };
        let intensity = if intensity.is_nan() {
            0.0
        } else {
            intensity.clamp(0.0, 1.0)
        };
        let pix = &mut self.pixels[index..index + self.components];

        for (old, new) in pix.iter_mut().zip(color.to_array()) {
            *old = ((1.0 - intensity) * f32::from(new) + intensity * f32::from(*old)) as u8;
        }
    }

    /// Set the pixels of row `y` from column `x0` to `x1`, both included
    ///
    /// The span is clipped to the canvas before any pixel is visited.
    pub(crate) fn fill_span(&mut self, x0: i64, x1: i64, y: i64, color: Color) {
        if !(0..self.rows()).contains(&y) {
            return;
        }
        let start = x0.min(x1).max(0);
        let end = x0.max(x1).min(self.columns() - 1);

        for x in start..=end {
            self.put_pixel(x, y, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use pixmill_core::color::Color;
    use pixmill_core::colorspace::ColorSpace;
    use pixmill_image::errors::ImageErrors;
    use pixmill_image::image::Image;

    use crate::draw::Canvas;

    #[test]
    fn rejects_non_rgb() {
        let mut image = Image::from_u8(vec![0; 4], 2, 2, ColorSpace::Luma).unwrap();
        assert!(matches!(
            Canvas::new(&mut image),
            Err(ImageErrors::UnsupportedChannelCount(_, 1))
        ));

        let mut pixels = [0; 11];
        assert!(Canvas::from_raw(&mut pixels, 2, 2, 3).is_err());
    }

    #[test]
    fn rgb_overwrites() {
        let mut pixels = [0; 2 * 2 * 3];
        let mut canvas = Canvas::from_raw(&mut pixels, 2, 2, 3).unwrap();

        canvas.set_pixel(1, 0, Color::new(10, 20, 30, 0));
        assert_eq!(canvas.pixel(1, 0), Some(Color::opaque(10, 20, 30)));
        assert_eq!(&pixels[3..6], &[10, 20, 30]);
    }

    #[test]
    fn rgba_blends_with_color_alpha() {
        let mut image = Image::fill(Color::new(100, 200, 255, 255), ColorSpace::RGBA, 2, 2).unwrap();
        let mut canvas = Canvas::new(&mut image).unwrap();

        canvas.set_pixel(0, 0, Color::new(200, 100, 0, 51));
        assert_eq!(canvas.pixel(0, 0), Some(Color::new(120, 180, 204, 214)));

        canvas.set_pixel(1, 1, Color::new(1, 2, 3, 255));
        assert_eq!(canvas.pixel(1, 1), Some(Color::new(1, 2, 3, 255)));
    }

    #[test]
    fn outside_writes_are_clipped() {
        let mut pixels = [7; 3 * 3 * 4];
        let mut canvas = Canvas::from_raw(&mut pixels, 3, 3, 4).unwrap();

        for (x, y) in [(-1, 0), (0, -1), (3, 0), (0, 3), (i32::MIN, i32::MAX)] {
            canvas.set_pixel(x, y, Color::WHITE);
            canvas.set_pixel_aa(x, y, Color::WHITE, 0.0);
            assert_eq!(canvas.pixel(x, y), None);
        }
        assert!(pixels.iter().all(|x| *x == 7));
    }

    #[test]
    fn anti_aliased_mix() {
        let mut pixels = [100; 3];
        let mut canvas = Canvas::from_raw(&mut pixels, 1, 1, 3).unwrap();

        canvas.set_pixel_aa(0, 0, Color::opaque(200, 0, 100), 0.25);
        assert_eq!(canvas.pixel(0, 0), Some(Color::opaque(175, 25, 100)));

        // clamped to 0, full color
        canvas.set_pixel_aa(0, 0, Color::opaque(1, 2, 3), -4.0);
        assert_eq!(canvas.pixel(0, 0), Some(Color::opaque(1, 2, 3)));

        // clamped to 1, untouched
        canvas.set_pixel_aa(0, 0, Color::opaque(200, 200, 200), 9.0);
        assert_eq!(canvas.pixel(0, 0), Some(Color::opaque(1, 2, 3)));
    }
}
