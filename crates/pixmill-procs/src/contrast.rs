/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Change image contrast
//!
//! The contrast is given as the angle, in radians, of the line a channel
//! value is mapped through. The line pivots around 128, with
//! `slope = tan(angle)`
//!
//! ```text
//! c' = (c - 128) / slope + 128
//!```
//! Angles below 45 degrees increase contrast, angles above decrease it.
//! Values whose line falls below 0 or above 255 saturate.
use pixmill_image::errors::ImageErrors;
use pixmill_image::image::Image;
use pixmill_image::traits::OperationsTrait;

use crate::utils::{clamp_u8, map_rgb, map_rgb_inplace};

/// Change the contrast of an image
#[derive(Copy, Clone, Debug)]
pub struct Contrast {
    angle: f32
}

impl Contrast {
    /// Create a contrast operation, `angle` is in radians
    #[must_use]
    pub fn new(angle: f32) -> Contrast {
        Contrast { angle }
    }
}

impl OperationsTrait for Contrast {
    fn name(&self) -> &'static str {
        "Contrast"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let (width, height) = image.dimensions();
        let components = image.channels();
        let table = contrast_table(self.angle)?;

        map_rgb_inplace(
            self.name(),
            image.pixels_mut(),
            width,
            height,
            components,
            |rgb| rgb.map(|c| table[usize::from(c)])
        )
    }
}

/// Build the 256 entry lookup table for a contrast angle
///
/// # Errors
/// [`ImageErrors::InvalidParameter`] if `tan(angle)` is not a positive finite number
pub fn contrast_table(angle: f32) -> Result<[u8; 256], ImageErrors> {
    let slope = angle.tan();

    if !slope.is_finite() || slope <= 0.0 {
        return Err(ImageErrors::InvalidParameter(
            "contrast angle must have a positive finite tangent"
        ));
    }
    let upper = 128.0 + 128.0 * slope;
    let lower = 128.0 - 128.0 * slope;

    let mut table = [0; 256];

    for (value, entry) in table.iter_mut().enumerate() {
        let c = f32::from(value as u8);

        *entry = if c > lower && c < upper {
            clamp_u8((c - 128.0) / slope + 128.0)
        } else if c >= upper {
            255
        } else {
            0
        };
    }
    Ok(table)
}

/// Change the contrast of `src` writing into the R,G,B bytes of `dst`
///
/// # Errors
/// - [`ImageErrors::InvalidParameter`] for an angle [`contrast_table`] rejects
/// - [`ImageErrors::UnsupportedChannelCount`] if `components` isn't 3 or 4
/// - [`ImageErrors::DimensionsMisMatch`] if a buffer doesn't match the dimensions
pub fn contrast(
    src: &[u8], dst: &mut [u8], width: usize, height: usize, components: usize, angle: f32
) -> Result<(), ImageErrors> {
    let table = contrast_table(angle)?;

    map_rgb("contrast", src, dst, width, height, components, |rgb| {
        rgb.map(|c| table[usize::from(c)])
    })
}
