/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Mark pixels close to a color
use pixmill_core::color::Color;
use pixmill_image::errors::ImageErrors;
use pixmill_image::image::Image;
use pixmill_image::traits::OperationsTrait;

use crate::utils::{map_rgb, map_rgb_inplace, rgb_distance_squared};

/// Turn pixels within `threshold` of a color white, and the rest black
#[derive(Copy, Clone, Debug)]
pub struct ExtractColor {
    color:     Color,
    threshold: u32
}

impl ExtractColor {
    #[must_use]
    pub fn new(color: Color, threshold: u32) -> ExtractColor {
        ExtractColor { color, threshold }
    }
}

impl OperationsTrait for ExtractColor {
    fn name(&self) -> &'static str {
        "Extract color"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let (width, height) = image.dimensions();
        let components = image.channels();
        let func = matcher(self.color, self.threshold);

        map_rgb_inplace(
            self.name(),
            image.pixels_mut(),
            width,
            height,
            components,
            func
        )
    }
}

fn matcher(color: Color, threshold: u32) -> impl Fn([u8; 3]) -> [u8; 3] {
    let reference = [color.r, color.g, color.b];
    let threshold = u64::from(threshold) * u64::from(threshold);

    move |rgb| {
        if u64::from(rgb_distance_squared(rgb, reference)) <= threshold {
            [0xFF; 3]
        } else {
            [0x00; 3]
        }
    }
}

/// Write white into `dst` where the `src` pixel is within `threshold`
/// of `color`, black elsewhere
///
/// The alpha of `color` is ignored.
///
/// # Errors
/// - [`ImageErrors::UnsupportedChannelCount`] if `components` isn't 3 or 4
/// - [`ImageErrors::DimensionsMisMatch`] if a buffer doesn't match the dimensions
pub fn extract_color(
    src: &[u8], dst: &mut [u8], width: usize, height: usize, components: usize, color: Color,
    threshold: u32
) -> Result<(), ImageErrors> {
    map_rgb(
        "extract color",
        src,
        dst,
        width,
        height,
        components,
        matcher(color, threshold)
    )
}

#[cfg(test)]
mod tests {
    use pixmill_core::color::Color;

    use crate::extract_color::extract_color;

    #[test]
    fn matches_within_threshold() {
        let src = [
            100, 100, 100, 1, // exact
            103, 104, 100, 2, // distance 5
            106, 100, 100, 3, // distance 6
            90, 100, 100, 4 // below the reference
        ];
        let mut dst = src;

        extract_color(&src, &mut dst, 4, 1, 4, Color::opaque(100, 100, 100), 5).unwrap();
        assert_eq!(
            dst,
            [255, 255, 255, 1, 255, 255, 255, 2, 0, 0, 0, 3, 0, 0, 0, 4]
        );
    }

    #[test]
    fn zero_threshold_is_exact_match() {
        let src = [5, 6, 7, 5, 6, 8];
        let mut dst = [1; 6];

        extract_color(&src, &mut dst, 2, 1, 3, Color::opaque(5, 6, 7), 0).unwrap();
        assert_eq!(dst, [255, 255, 255, 0, 0, 0]);
    }
}
