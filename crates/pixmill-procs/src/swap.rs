/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Convert between RGB and BGR ordered pixels
//!
//! Swapping red and blue is its own inverse, the same routine
//! converts in either direction.
use pixmill_image::errors::ImageErrors;
use pixmill_image::image::Image;
use pixmill_image::traits::OperationsTrait;

use crate::utils::{check_buffer, check_rgb_components};

/// Swap the red and blue channels of an image
#[derive(Default, Copy, Clone)]
pub struct SwapRedBlue;

impl SwapRedBlue {
    #[must_use]
    pub fn new() -> SwapRedBlue {
        Self
    }
}

impl OperationsTrait for SwapRedBlue {
    fn name(&self) -> &'static str {
        "Swap red and blue"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let (width, height) = image.dimensions();
        let components = image.channels();

        swap_red_blue(image.pixels_mut(), width, height, components)
    }
}

/// Swap the first and third byte of every pixel in place
///
/// Alpha, if present, stays where it is.
///
/// # Errors
/// - [`ImageErrors::UnsupportedChannelCount`] if `components` isn't 3 or 4
/// - [`ImageErrors::DimensionsMisMatch`] if `pixels` doesn't match the dimensions
pub fn swap_red_blue(
    pixels: &mut [u8], width: usize, height: usize, components: usize
) -> Result<(), ImageErrors> {
    check_rgb_components("swap red and blue", components)?;
    check_buffer(pixels, width, height, components)?;

    if components == 4 {
        let pixels: &mut [[u8; 4]] = bytemuck::cast_slice_mut(pixels);
        pixels.iter_mut().for_each(|pix| pix.swap(0, 2));
    } else {
        let pixels: &mut [[u8; 3]] = bytemuck::cast_slice_mut(pixels);
        pixels.iter_mut().for_each(|pix| pix.swap(0, 2));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;
    use pixmill_image::errors::ImageErrors;

    use crate::swap::swap_red_blue;

    #[test]
    fn swaps_rgb_and_rgba() {
        let mut rgb = [1, 2, 3, 4, 5, 6];
        swap_red_blue(&mut rgb, 2, 1, 3).unwrap();
        assert_eq!(rgb, [3, 2, 1, 6, 5, 4]);

        let mut rgba = [1, 2, 3, 4, 5, 6, 7, 8];
        swap_red_blue(&mut rgba, 1, 2, 4).unwrap();
        assert_eq!(rgba, [3, 2, 1, 4, 7, 6, 5, 8]);
    }

    #[test]
    fn swapping_twice_is_identity() {
        let mut rand = nanorand::WyRand::new();
        let mut pixels = vec![0; 31 * 17 * 4];
        rand.fill(&mut pixels);
        let original = pixels.clone();

        swap_red_blue(&mut pixels, 31, 17, 4).unwrap();
        swap_red_blue(&mut pixels, 31, 17, 4).unwrap();
        assert_eq!(pixels, original);
    }

    #[test]
    fn two_byte_pixels_are_unsupported() {
        let mut pixels = [1, 2, 3, 4];
        let result = swap_red_blue(&mut pixels, 2, 1, 2);

        assert!(matches!(
            result,
            Err(ImageErrors::UnsupportedChannelCount(_, 2))
        ));
        assert_eq!(pixels, [1, 2, 3, 4]);
    }
}
