/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Tint an image towards a reference color
//!
//! Every pixel is scaled by the cosine of the angle between its RGB
//! vector and the reference color's. Pixels pointing the same way as
//! the reference keep their value, pixels at right angles to it go black.
use pixmill_core::color::Color;
use pixmill_image::errors::ImageErrors;
use pixmill_image::image::Image;
use pixmill_image::traits::OperationsTrait;

use crate::utils::{clamp_u8, map_rgb, map_rgb_inplace};

/// Scale an image by its similarity to a color
#[derive(Copy, Clone, Debug)]
pub struct Colorscale {
    color: Color
}

impl Colorscale {
    #[must_use]
    pub fn new(color: Color) -> Colorscale {
        Colorscale { color }
    }
}

impl OperationsTrait for Colorscale {
    fn name(&self) -> &'static str {
        "Colorscale"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let (width, height) = image.dimensions();
        let components = image.channels();
        let func = scaler(self.color)?;

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

fn scaler(color: Color) -> Result<impl Fn([u8; 3]) -> [u8; 3], ImageErrors> {
    let reference = [color.r, color.g, color.b].map(f32::from);
    let reference_len = reference.iter().map(|x| x * x).sum::<f32>().sqrt();

    if reference_len == 0.0 {
        return Err(ImageErrors::DegenerateReferenceColor);
    }

    Ok(move |rgb: [u8; 3]| {
        let pixel = rgb.map(f32::from);
        let pixel_len = pixel.iter().map(|x| x * x).sum::<f32>().sqrt();

        if pixel_len == 0.0 {
            return [0; 3];
        }
        let dot: f32 = pixel.iter().zip(&reference).map(|(a, b)| a * b).sum();
        let cosine = dot / (pixel_len * reference_len);

        pixel.map(|c| clamp_u8(c * cosine))
    })
}

/// Scale every `src` pixel by its similarity to `color`, writing the
/// result into the R,G,B bytes of `dst`
///
/// The alpha of `color` is ignored.
///
/// # Errors
/// - [`ImageErrors::DegenerateReferenceColor`] if `color` is black, it has no direction
/// - [`ImageErrors::UnsupportedChannelCount`] if `components` isn't 3 or 4
/// - [`ImageErrors::DimensionsMisMatch`] if a buffer doesn't match the dimensions
pub fn rgb_to_colorscale(
    src: &[u8], dst: &mut [u8], width: usize, height: usize, components: usize, color: Color
) -> Result<(), ImageErrors> {
    let func = scaler(color)?;

    map_rgb("colorscale", src, dst, width, height, components, func)
}
