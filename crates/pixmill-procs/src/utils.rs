/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use pixmill_image::errors::ImageErrors;
use pixmill_image::image::Image;

/// Linear interpolation from `x1` towards `x2`
///
/// `t = 0` gives `x1`, `t = 1` gives `x2`
#[inline(always)]
pub fn lerp(t: f64, x2: f64, x1: f64) -> f64 {
    x1 + t * (x2 - x1)
}

/// Bilinear interpolation over four samples
///
/// `x1,x2` and `x3,x4` are interpolated with `alpha`, the two
/// results are then interpolated with `beta`
#[inline(always)]
pub fn bilerp(alpha: f64, beta: f64, x1: f64, x2: f64, x3: f64, x4: f64) -> f64 {
    lerp(beta, lerp(alpha, x1, x2), lerp(alpha, x3, x4))
}

/// Byte offset of pixel `(x,y)` in an interleaved buffer
#[inline(always)]
pub const fn pixel_index(x: usize, y: usize, components: usize, width: usize) -> usize {
    (y * width + x) * components
}

/// Reject anything that isn't an RGB or RGBA pixel
pub(crate) fn check_rgb_components(
    operation: &'static str, components: usize
) -> Result<(), ImageErrors> {
    if components == 3 || components == 4 {
        Ok(())
    } else {
        Err(ImageErrors::UnsupportedChannelCount(operation, components))
    }
}

/// Confirm an interleaved buffer holds exactly `width*height` pixels
pub(crate) fn check_buffer(
    buffer: &[u8], width: usize, height: usize, components: usize
) -> Result<(), ImageErrors> {
    let expected = width * height * components;

    if buffer.len() == expected {
        Ok(())
    } else {
        Err(ImageErrors::DimensionsMisMatch(expected, buffer.len()))
    }
}

/// Check a source and destination pair of RGB or RGBA buffers
/// with the same dimensions
pub(crate) fn check_rgb_pair(
    operation: &'static str, src: &[u8], dst: &[u8], width: usize, height: usize,
    components: usize
) -> Result<(), ImageErrors> {
    check_rgb_components(operation, components)?;
    check_buffer(src, width, height, components)?;
    check_buffer(dst, width, height, components)
}

/// Map the R,G,B bytes of every pixel of `src` through `func`
/// into the same pixel of `dst`
///
/// Alpha and any other byte of `dst` is left as it was.
pub(crate) fn map_rgb<F>(
    operation: &'static str, src: &[u8], dst: &mut [u8], width: usize, height: usize,
    components: usize, mut func: F
) -> Result<(), ImageErrors>
where
    F: FnMut([u8; 3]) -> [u8; 3]
{
    check_rgb_pair(operation, src, dst, width, height, components)?;

    for (src_pix, dst_pix) in src
        .chunks_exact(components)
        .zip(dst.chunks_exact_mut(components))
    {
        let rgb = func([src_pix[0], src_pix[1], src_pix[2]]);
        dst_pix[..3].copy_from_slice(&rgb);
    }
    Ok(())
}

/// Same as [`map_rgb`] but reading and writing the same buffer
pub(crate) fn map_rgb_inplace<F>(
    operation: &'static str, pixels: &mut [u8], width: usize, height: usize, components: usize,
    mut func: F
) -> Result<(), ImageErrors>
where
    F: FnMut([u8; 3]) -> [u8; 3]
{
    check_rgb_components(operation, components)?;
    check_buffer(pixels, width, height, components)?;

    for pix in pixels.chunks_exact_mut(components) {
        let rgb = func([pix[0], pix[1], pix[2]]);
        pix[..3].copy_from_slice(&rgb);
    }
    Ok(())
}

/// Squared euclidean distance between two RGB triples
#[inline(always)]
pub(crate) fn rgb_distance_squared(a: [u8; 3], b: [u8; 3]) -> u32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let diff = i32::from(*x) - i32::from(*y);
            diff.unsigned_abs() * diff.unsigned_abs()
        })
        .sum()
}

/// Round a float into a byte, saturating at both ends
#[inline(always)]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn clamp_u8(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// The position of the source image on the destination
#[derive(Copy, Clone, Debug)]
pub enum Gravity {
    /// Place the image so that it seems like it's from the
    /// center of the canvas
    Center,
    /// Place the image so that it is from the top end of the canvas
    TopLeft,
    /// Place the src image so that it appears from the right of the canvas
    TopRight,
    /// Place the image so that it appears from the bottom left of the canvas
    BottomLeft,
    /// Place the image so that it appears from the bottom right of the canvas
    BottomRight
}

/// Where the top left corner of `src_image` lands when placed on
/// `dst_image` according to `gravity`
pub fn calculate_gravity(src_image: &Image, dst_image: &Image, gravity: Gravity) -> (usize, usize) {
    let (src_width, src_height) = src_image.dimensions();
    let (dst_width, dst_height) = dst_image.dimensions();

    match gravity {
        Gravity::Center => {
            let orig_x = (dst_width / 2).saturating_sub(src_width / 2);
            let orig_y = (dst_height / 2).saturating_sub(src_height / 2);

            (orig_x, orig_y)
        }
        Gravity::TopLeft => (0, 0),
        Gravity::TopRight => (dst_width.saturating_sub(src_width), 0),
        Gravity::BottomLeft => (0, dst_height.saturating_sub(src_height)),
        Gravity::BottomRight => (
            dst_width.saturating_sub(src_width),
            dst_height.saturating_sub(src_height)
        )
    }
}

/// Where a source lands on a destination, either fixed or
/// relative to the destination's edges
#[derive(Copy, Clone, Debug)]
pub enum Placement {
    Position(usize, usize),
    Gravity(Gravity)
}

impl Placement {
    pub(crate) fn resolve(self, src_image: &Image, dst_image: &Image) -> (usize, usize) {
        match self {
            Placement::Position(x, y) => (x, y),
            Placement::Gravity(gravity) => calculate_gravity(src_image, dst_image, gravity)
        }
    }
}

/// Confirm a `src_dims` sized source at `position` lies
/// completely inside a `dst_dims` sized destination
pub(crate) fn check_placement(
    position: (usize, usize), src_dims: (usize, usize), dst_dims: (usize, usize)
) -> Result<(), ImageErrors> {
    let fits_x = position
        .0
        .checked_add(src_dims.0)
        .map_or(false, |end| end <= dst_dims.0);
    let fits_y = position
        .1
        .checked_add(src_dims.1)
        .map_or(false, |end| end <= dst_dims.1);

    if fits_x && fits_y {
        Ok(())
    } else {
        Err(ImageErrors::OutOfBounds {
            position,
            src_dims,
            dst_dims
        })
    }
}
