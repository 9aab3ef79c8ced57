/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Flip filter: Mirror an image horizontally or vertically
//!
//! The in place variants swap pixels from both ends of a row or of the
//! image towards the middle. The `_into` variants read from one buffer
//! and write into another, leaving the source as it was.
use pixmill_core::colorspace::ColorSpace;
use pixmill_image::errors::ImageErrors;
use pixmill_image::image::Image;
use pixmill_image::traits::OperationsTrait;

use crate::utils::check_buffer;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FlipDirection {
    /// Creates a horizontal mirror image by reflecting the pixels around the central y-axis
    ///```text
    ///old image     new image
    ///┌─────────┐   ┌──────────┐
    ///│a b c d e│   │e d c b a │
    ///│f g h i j│   │j i h g f │
    ///└─────────┘   └──────────┘
    ///```
    Horizontal,

    /// Flip the image vertically, reflecting rows around the central x-axis
    ///
    /// ```text
    ///
    ///old image     new image
    /// ┌─────────┐   ┌──────────┐
    /// │a b c d e│   │f g h i j │
    /// │f g h i j│   │a b c d e │
    /// └─────────┘   └──────────┘
    /// ```
    Vertical
}

/// Flip an image to a certain direction
pub struct Flip {
    flip_direction: FlipDirection
}

impl Flip {
    /// Create a new flip operation
    #[must_use]
    pub fn new(flip_direction: FlipDirection) -> Flip {
        Self { flip_direction }
    }
}

impl OperationsTrait for Flip {
    fn name(&self) -> &'static str {
        "Flip"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let (width, height) = image.dimensions();
        let components = image.channels();

        match self.flip_direction {
            FlipDirection::Horizontal => {
                flip_horizontal(image.pixels_mut(), width, height, components)
            }
            FlipDirection::Vertical => flip_vertical(image.pixels_mut(), width, height, components)
        }
    }

    fn supported_colorspaces(&self) -> &'static [ColorSpace] {
        &[
            ColorSpace::RGB,
            ColorSpace::RGBA,
            ColorSpace::Luma,
            ColorSpace::LumaA
        ]
    }
}

fn check_flip(
    pixels: &[u8], width: usize, height: usize, components: usize
) -> Result<(), ImageErrors> {
    if components == 0 {
        return Err(ImageErrors::UnsupportedChannelCount("flip", components));
    }
    check_buffer(pixels, width, height, components)
}

/// Reverse the order of pixels in every row
///
/// # Errors
/// - [`ImageErrors::UnsupportedChannelCount`] if `components` is zero
/// - [`ImageErrors::DimensionsMisMatch`] if `pixels` doesn't match the dimensions
pub fn flip_horizontal(
    pixels: &mut [u8], width: usize, height: usize, components: usize
) -> Result<(), ImageErrors> {
    check_flip(pixels, width, height, components)?;

    if width == 0 {
        return Ok(());
    }
    let stride = width * components;

    for row in pixels.chunks_exact_mut(stride) {
        // whole pixels on both halves, a middle pixel stays put
        let half = (width / 2) * components;
        let (left_to_right, rest) = row.split_at_mut(half);
        let len = rest.len();
        let right_to_left = &mut rest[len - half..];

        for (ltr, rtl) in left_to_right
            .chunks_exact_mut(components)
            .zip(right_to_left.rchunks_exact_mut(components))
        {
            ltr.swap_with_slice(rtl);
        }
    }
    Ok(())
}

/// Reverse the order of the rows
///
/// # Errors
/// - [`ImageErrors::UnsupportedChannelCount`] if `components` is zero
/// - [`ImageErrors::DimensionsMisMatch`] if `pixels` doesn't match the dimensions
pub fn flip_vertical(
    pixels: &mut [u8], width: usize, height: usize, components: usize
) -> Result<(), ImageErrors> {
    check_flip(pixels, width, height, components)?;

    let stride = width * components;

    if stride == 0 {
        return Ok(());
    }
    // Simply split the image in half
    // on one end read from the start to the halfway point
    // on the other end read from the end to the halfway point
    let (top, bottom) = pixels.split_at_mut((height / 2) * stride);
    let bottom_len = bottom.len();
    let bottom = &mut bottom[bottom_len - top.len()..];

    for (t, b) in top
        .chunks_exact_mut(stride)
        .zip(bottom.rchunks_exact_mut(stride))
    {
        t.swap_with_slice(b);
    }
    Ok(())
}

fn check_flip_into(
    src: &[u8], dst: &[u8], width: usize, height: usize, components: usize
) -> Result<(), ImageErrors> {
    check_flip(src, width, height, components)?;
    check_buffer(dst, width, height, components)
}

/// Write `src` with every row reversed into `dst`
///
/// # Errors
/// Same as [`flip_horizontal`], for either buffer
pub fn flip_horizontal_into(
    src: &[u8], dst: &mut [u8], width: usize, height: usize, components: usize
) -> Result<(), ImageErrors> {
    check_flip_into(src, dst, width, height, components)?;

    let stride = width * components;

    if stride == 0 {
        return Ok(());
    }
    for (src_row, dst_row) in src.chunks_exact(stride).zip(dst.chunks_exact_mut(stride)) {
        for (src_pix, dst_pix) in src_row
            .chunks_exact(components)
            .zip(dst_row.rchunks_exact_mut(components))
        {
            dst_pix.copy_from_slice(src_pix);
        }
    }
    Ok(())
}

/// Write the rows of `src` in reverse order into `dst`
///
/// # Errors
/// Same as [`flip_vertical`], for either buffer
pub fn flip_vertical_into(
    src: &[u8], dst: &mut [u8], width: usize, height: usize, components: usize
) -> Result<(), ImageErrors> {
    check_flip_into(src, dst, width, height, components)?;

    let stride = width * components;

    if stride == 0 {
        return Ok(());
    }
    for (src_row, dst_row) in src.chunks_exact(stride).zip(dst.rchunks_exact_mut(stride)) {
        dst_row.copy_from_slice(src_row);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;
    use pixmill_core::colorspace::ColorSpace;
    use pixmill_image::image::Image;
    use pixmill_image::traits::OperationsTrait;

    use crate::flip::*;

    #[test]
    fn horizontal_moves_whole_pixels() {
        // 3x1 RGB
        let mut pixels = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        flip_horizontal(&mut pixels, 3, 1, 3).unwrap();
        assert_eq!(pixels, [7, 8, 9, 4, 5, 6, 1, 2, 3]);
    }

    #[test]
    fn horizontal_even_width_rgba() {
        // 2x2 RGBA
        let mut pixels = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16];
        flip_horizontal(&mut pixels, 2, 2, 4).unwrap();
        assert_eq!(
            pixels,
            [5, 6, 7, 8, 1, 2, 3, 4, 13, 14, 15, 16, 9, 10, 11, 12]
        );
    }

    #[test]
    fn vertical_moves_whole_rows() {
        // 2x3 luma
        let mut pixels = [1, 2, 3, 4, 5, 6];
        flip_vertical(&mut pixels, 2, 3, 1).unwrap();
        assert_eq!(pixels, [5, 6, 3, 4, 1, 2]);
    }

    #[test]
    fn double_flip_restores_the_buffer() {
        let mut rand = nanorand::WyRand::new();

        for (width, height, components) in [(17, 9, 3), (8, 8, 4), (1, 5, 4), (6, 1, 3)] {
            let mut pixels = vec![0; width * height * components];
            rand.fill(&mut pixels);
            let original = pixels.clone();

            flip_horizontal(&mut pixels, width, height, components).unwrap();
            flip_horizontal(&mut pixels, width, height, components).unwrap();
            assert_eq!(pixels, original);

            flip_vertical(&mut pixels, width, height, components).unwrap();
            flip_vertical(&mut pixels, width, height, components).unwrap();
            assert_eq!(pixels, original);
        }
    }

    #[test]
    fn into_variants_match_in_place() {
        let mut rand = nanorand::WyRand::new();
        let (width, height, components) = (13, 7, 4);

        let mut src = vec![0; width * height * components];
        rand.fill(&mut src);

        let mut dst = vec![0; src.len()];
        let mut in_place = src.clone();

        flip_horizontal_into(&src, &mut dst, width, height, components).unwrap();
        flip_horizontal(&mut in_place, width, height, components).unwrap();
        assert_eq!(dst, in_place);

        flip_vertical_into(&src, &mut dst, width, height, components).unwrap();
        in_place.copy_from_slice(&src);
        flip_vertical(&mut in_place, width, height, components).unwrap();
        assert_eq!(dst, in_place);
    }

    #[test]
    fn flip_operation_on_luma() {
        let mut image = Image::from_u8(vec![1, 2, 3, 4], 2, 2, ColorSpace::Luma).unwrap();

        Flip::new(FlipDirection::Horizontal)
            .execute(&mut image)
            .unwrap();
        assert_eq!(image.pixels(), &[2, 1, 4, 3]);

        Flip::new(FlipDirection::Vertical)
            .execute(&mut image)
            .unwrap();
        assert_eq!(image.pixels(), &[4, 3, 2, 1]);
    }

    #[test]
    fn mismatched_buffer_fails() {
        let mut pixels = [0; 10];
        assert!(flip_horizontal(&mut pixels, 2, 2, 3).is_err());
        assert!(flip_vertical(&mut pixels, 2, 2, 0).is_err());
    }
}
