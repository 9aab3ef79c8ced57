/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Convert between RGB and full resolution YUV
//!
//! ```text
//! Y = 0.299R + 0.587G + 0.114B
//! U = 0.565(B - Y) + 128
//! V = 0.713(R - Y) + 128
//!
//! R = Y + 1.403(V - 128)
//! G = Y - 0.344(U - 128) - 0.714(V - 128)
//! B = Y + 1.770(U - 128)
//! ```
//! U and V are stored offset by 128 so negative chroma fits in a byte.
//! Y,U,V occupy the bytes R,G,B did, alpha is left untouched.
use pixmill_image::errors::ImageErrors;
use pixmill_image::image::Image;
use pixmill_image::traits::OperationsTrait;

use crate::utils::{clamp_u8, map_rgb_inplace};

const CHROMA_OFFSET: f32 = 128.0;

#[inline]
fn rgb_to_yuv([r, g, b]: [u8; 3]) -> [u8; 3] {
    let (r, g, b) = (f32::from(r), f32::from(g), f32::from(b));

    let y = 0.299 * r + 0.587 * g + 0.114 * b;
    let u = (b - y) * 0.565 + CHROMA_OFFSET;
    let v = (r - y) * 0.713 + CHROMA_OFFSET;

    [clamp_u8(y), clamp_u8(u), clamp_u8(v)]
}

#[inline]
fn yuv_to_rgb([y, u, v]: [u8; 3]) -> [u8; 3] {
    let y = f32::from(y);
    let u = f32::from(u) - CHROMA_OFFSET;
    let v = f32::from(v) - CHROMA_OFFSET;

    let r = y + 1.403 * v;
    let g = y - 0.344 * u - 0.714 * v;
    let b = y + 1.770 * u;

    [clamp_u8(r), clamp_u8(g), clamp_u8(b)]
}

/// Convert RGB pixels to YUV in place
///
/// # Errors
/// - [`ImageErrors::UnsupportedChannelCount`] if `components` isn't 3 or 4
/// - [`ImageErrors::DimensionsMisMatch`] if `pixels` doesn't match the dimensions
pub fn rgb_to_yuv444(
    pixels: &mut [u8], width: usize, height: usize, components: usize
) -> Result<(), ImageErrors> {
    map_rgb_inplace(
        "rgb to yuv444",
        pixels,
        width,
        height,
        components,
        rgb_to_yuv
    )
}

/// Convert YUV pixels back to RGB in place
///
/// # Errors
/// - [`ImageErrors::UnsupportedChannelCount`] if `components` isn't 3 or 4
/// - [`ImageErrors::DimensionsMisMatch`] if `pixels` doesn't match the dimensions
pub fn yuv444_to_rgb(
    pixels: &mut [u8], width: usize, height: usize, components: usize
) -> Result<(), ImageErrors> {
    map_rgb_inplace(
        "yuv444 to rgb",
        pixels,
        width,
        height,
        components,
        yuv_to_rgb
    )
}

/// Convert an image's pixels to YUV
///
/// The colorspace of the image is not changed, the bytes are
/// only meaningful to [`Yuv444ToRgb`] or code expecting YUV.
#[derive(Default, Copy, Clone)]
pub struct RgbToYuv444;

impl RgbToYuv444 {
    #[must_use]
    pub fn new() -> RgbToYuv444 {
        Self
    }
}

impl OperationsTrait for RgbToYuv444 {
    fn name(&self) -> &'static str {
        "RGB to YUV444"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let (width, height) = image.dimensions();
        let components = image.channels();

        rgb_to_yuv444(image.pixels_mut(), width, height, components)
    }
}

/// Convert an image holding YUV bytes back to RGB
#[derive(Default, Copy, Clone)]
pub struct Yuv444ToRgb;

impl Yuv444ToRgb {
    #[must_use]
    pub fn new() -> Yuv444ToRgb {
        Self
    }
}

impl OperationsTrait for Yuv444ToRgb {
    fn name(&self) -> &'static str {
        "YUV444 to RGB"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let (width, height) = image.dimensions();
        let components = image.channels();

        yuv444_to_rgb(image.pixels_mut(), width, height, components)
    }
}
