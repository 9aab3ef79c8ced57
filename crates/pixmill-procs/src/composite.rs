/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Blend one image on top of another
//!
//! Every pixel of the source (top) is combined with the pixel of the
//! destination (bottom) it lands on, using one of the [`BlendMode`]s,
//! and the result is written back into the destination.
use pixmill_core::log::warn;
use pixmill_image::errors::ImageErrors;
use pixmill_image::image::Image;
use pixmill_image::traits::OperationsTrait;

use crate::blend::{alpha, BlendMode};
use crate::utils::{check_placement, Placement};

/// Compose a single pixel
///
/// `top`, `bottom` and `result` are pixels of the same number of channels,
/// anything above `result.len()` in the other two is ignored.
///
/// For [`BlendMode::Alpha`] on four channel pixels, the top pixel's alpha
/// is the opacity with which every channel, alpha included, is mixed
/// over the bottom. Other channel counts have no alpha and use
/// [`BlendMode::Normal`] instead.
pub fn compose_pixel(top: &[u8], bottom: &[u8], result: &mut [u8], mode: BlendMode) {
    if mode == BlendMode::Alpha && result.len() == 4 {
        let opacity = f32::from(top[3]) / 255.0;

        for ((out, a), b) in result.iter_mut().zip(top).zip(bottom) {
            *out = alpha(*a, *b, opacity);
        }
        return;
    }
    let func = mode.channel_fn();

    for ((out, a), b) in result.iter_mut().zip(top).zip(bottom) {
        *out = func(*a, *b);
    }
}

/// Compose `src` on top of `dst` with its top left corner at `position`
///
/// Each source pixel uses `src_components` bytes and is composited
/// into the first `src_components` bytes of the destination pixel
/// it lands on, so an RGB source over an RGBA destination leaves the
/// destination alpha as it was.
///
/// # Errors
/// - [`ImageErrors::UnsupportedChannelCount`] if either side isn't 3 or 4 channels
/// - [`ImageErrors::InsufficientChannels`] if the destination has fewer channels than the source
/// - [`ImageErrors::DimensionsMisMatch`] if a buffer doesn't match its dimensions
/// - [`ImageErrors::OutOfBounds`] if the source doesn't fit inside the destination at `position`
///
/// Nothing is written when an error is returned
#[allow(clippy::too_many_arguments)]
pub fn blend_onto(
    dst: &mut [u8], dst_width: usize, dst_height: usize, dst_components: usize, src: &[u8],
    src_width: usize, src_height: usize, src_components: usize, position: (usize, usize),
    mode: BlendMode
) -> Result<(), ImageErrors> {
    crate::utils::check_rgb_components("blend", src_components)?;
    crate::utils::check_rgb_components("blend", dst_components)?;

    if dst_components < src_components {
        return Err(ImageErrors::InsufficientChannels {
            dst: dst_components,
            src: src_components
        });
    }
    crate::utils::check_buffer(dst, dst_width, dst_height, dst_components)?;
    crate::utils::check_buffer(src, src_width, src_height, src_components)?;
    check_placement(position, (src_width, src_height), (dst_width, dst_height))?;

    if mode == BlendMode::Alpha && src_components != 4 {
        warn!("Alpha blending needs a source alpha channel, blending as normal");
    }
    if src_width == 0 {
        return Ok(());
    }

    let src_stride = src_width * src_components;
    let dst_stride = dst_width * dst_components;

    for (src_row, dst_row) in src
        .chunks_exact(src_stride)
        .zip(dst.chunks_exact_mut(dst_stride).skip(position.1))
    {
        let dst_row = &mut dst_row[position.0 * dst_components..];

        for (top, dst_pix) in src_row
            .chunks_exact(src_components)
            .zip(dst_row.chunks_exact_mut(dst_components))
        {
            let mut bottom = [0; 4];
            bottom[..src_components].copy_from_slice(&dst_pix[..src_components]);

            compose_pixel(
                top,
                &bottom[..src_components],
                &mut dst_pix[..src_components],
                mode
            );
        }
    }
    Ok(())
}

/// Blend an image on top of the image the operation runs on
///
/// The image being operated on is the bottom, the image passed
/// to the constructor is the top.
pub struct Blend<'a> {
    src_image: &'a Image,
    mode:      BlendMode,
    placement: Placement
}

impl<'a> Blend<'a> {
    /// Create a blend that places the top left corner of `image`
    /// at `position`, a tuple of `(x,y)`
    ///
    /// See also [Self::new_gravity] if you don't want to manually calculate coordinates
    #[must_use]
    pub fn new(image: &'a Image, mode: BlendMode, position: (usize, usize)) -> Blend<'a> {
        Blend {
            src_image: image,
            mode,
            placement: Placement::Position(position.0, position.1)
        }
    }

    /// Create a blend that places `image` relative to the
    /// edges of the destination
    #[must_use]
    pub fn new_gravity(
        image: &'a Image, mode: BlendMode, gravity: crate::utils::Gravity
    ) -> Blend<'a> {
        Blend {
            src_image: image,
            mode,
            placement: Placement::Gravity(gravity)
        }
    }
}

impl<'a> OperationsTrait for Blend<'a> {
    fn name(&self) -> &'static str {
        "Blend"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let position = self.placement.resolve(self.src_image, image);
        let (src_width, src_height) = self.src_image.dimensions();
        let (dst_width, dst_height) = image.dimensions();
        let dst_components = image.channels();

        blend_onto(
            image.pixels_mut(),
            dst_width,
            dst_height,
            dst_components,
            self.src_image.pixels(),
            src_width,
            src_height,
            self.src_image.channels(),
            position,
            self.mode
        )
    }
}
