/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Convert RGB pixels to gray
//!
//! The gray level is the plain average of the three channels, the
//! result stays an RGB(A) image with equal R,G,B.
use pixmill_image::errors::ImageErrors;
use pixmill_image::image::Image;
use pixmill_image::traits::OperationsTrait;

use crate::utils::{map_rgb, map_rgb_inplace};

/// Convert an image to grayscale
#[derive(Default, Copy, Clone)]
pub struct Grayscale;

impl Grayscale {
    #[must_use]
    pub fn new() -> Grayscale {
        Self
    }
}

impl OperationsTrait for Grayscale {
    fn name(&self) -> &'static str {
        "Grayscale"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let (width, height) = image.dimensions();
        let components = image.channels();

        map_rgb_inplace(
            self.name(),
            image.pixels_mut(),
            width,
            height,
            components,
            average
        )
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
fn average([r, g, b]: [u8; 3]) -> [u8; 3] {
    let level = ((u16::from(r) + u16::from(g) + u16::from(b)) / 3) as u8;
    [level; 3]
}

/// Write the gray level of every `src` pixel into the R,G,B bytes of `dst`
///
/// # Errors
/// - [`ImageErrors::UnsupportedChannelCount`] if `components` isn't 3 or 4
/// - [`ImageErrors::DimensionsMisMatch`] if a buffer doesn't match the dimensions
pub fn rgb_to_grayscale(
    src: &[u8], dst: &mut [u8], width: usize, height: usize, components: usize
) -> Result<(), ImageErrors> {
    map_rgb("grayscale", src, dst, width, height, components, average)
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;
    use pixmill_core::color::Color;
    use pixmill_core::colorspace::ColorSpace;
    use pixmill_image::image::Image;
    use pixmill_image::traits::OperationsTrait;

    use crate::grayscale::{rgb_to_grayscale, Grayscale};

    #[test]
    fn averages_channels() {
        let src = [255, 255, 254, 30, 0, 1, 2, 200];
        let mut dst = [0; 8];

        rgb_to_grayscale(&src, &mut dst, 2, 1, 4).unwrap();
        assert_eq!(dst, [254, 254, 254, 0, 1, 1, 1, 0]);
    }

    #[test]
    fn gray_is_a_fixed_point() {
        let mut rand = nanorand::WyRand::new();
        let mut pixels = vec![0; 20 * 20 * 3];
        rand.fill(&mut pixels);

        let mut once = vec![0; pixels.len()];
        rgb_to_grayscale(&pixels, &mut once, 20, 20, 3).unwrap();

        let mut twice = vec![0; pixels.len()];
        rgb_to_grayscale(&once, &mut twice, 20, 20, 3).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn operation_keeps_alpha() {
        let mut image = Image::fill(Color::new(10, 20, 60, 128), ColorSpace::RGBA, 3, 3).unwrap();
        Grayscale::new().execute(&mut image).unwrap();

        assert_eq!(image.pixel(2, 2), Some(Color::new(30, 30, 30, 128)));
    }
}
