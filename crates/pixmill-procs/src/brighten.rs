/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Brighten or darken an image by adding a constant to every channel
use pixmill_image::errors::ImageErrors;
use pixmill_image::image::Image;
use pixmill_image::traits::OperationsTrait;

use crate::utils::{map_rgb, map_rgb_inplace};

/// Add a constant to the R,G,B channels of an image
///
/// Negative values darken the image
#[derive(Copy, Clone, Debug)]
pub struct Brightness {
    offset: i32
}

impl Brightness {
    #[must_use]
    pub fn new(offset: i32) -> Brightness {
        Brightness { offset }
    }
}

impl OperationsTrait for Brightness {
    fn name(&self) -> &'static str {
        "Brightness"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let (width, height) = image.dimensions();
        let components = image.channels();
        let table = brightness_table(self.offset);

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

/// Build the 256 entry lookup table adding `offset`, saturating at 0 and 255
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn brightness_table(offset: i32) -> [u8; 256] {
    let mut table = [0; 256];

    for (value, entry) in (0_i32..).zip(table.iter_mut()) {
        *entry = value.saturating_add(offset).clamp(0, 255) as u8;
    }
    table
}

/// Brighten `src` writing into the R,G,B bytes of `dst`
///
/// # Errors
/// - [`ImageErrors::UnsupportedChannelCount`] if `components` isn't 3 or 4
/// - [`ImageErrors::DimensionsMisMatch`] if a buffer doesn't match the dimensions
pub fn brighten(
    src: &[u8], dst: &mut [u8], width: usize, height: usize, components: usize, offset: i32
) -> Result<(), ImageErrors> {
    let table = brightness_table(offset);

    map_rgb("brightness", src, dst, width, height, components, |rgb| {
        rgb.map(|c| table[usize::from(c)])
    })
}
