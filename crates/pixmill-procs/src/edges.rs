/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Threshold edge detection
//!
//! A pixel is an edge when its RGB distance to the pixel on its right
//! or the pixel below it is at least `threshold`. Edges are written
//! white, everything else black.
//!
//! Pixels of the last row and column have no right or bottom neighbour,
//! they are not written.
use pixmill_image::errors::ImageErrors;
use pixmill_image::image::Image;
use pixmill_image::traits::OperationsTrait;

use crate::utils::{check_rgb_pair, rgb_distance_squared};

/// Mark pixels that differ from their right or bottom neighbour
#[derive(Copy, Clone, Debug)]
pub struct DetectEdges {
    threshold: u32
}

impl DetectEdges {
    /// Create a new edge detector
    ///
    /// `threshold` is the smallest RGB distance that counts as an edge
    #[must_use]
    pub fn new(threshold: u32) -> DetectEdges {
        DetectEdges { threshold }
    }
}

impl OperationsTrait for DetectEdges {
    fn name(&self) -> &'static str {
        "Detect edges"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let (width, height) = image.dimensions();
        let components = image.channels();
        let src = image.pixels().to_vec();

        detect_edges(
            &src,
            image.pixels_mut(),
            width,
            height,
            components,
            self.threshold
        )
    }
}

/// Detect edges of `src` writing the result into the R,G,B bytes of `dst`
///
/// # Errors
/// - [`ImageErrors::UnsupportedChannelCount`] if `components` isn't 3 or 4
/// - [`ImageErrors::DimensionsMisMatch`] if a buffer doesn't match the dimensions
pub fn detect_edges(
    src: &[u8], dst: &mut [u8], width: usize, height: usize, components: usize, threshold: u32
) -> Result<(), ImageErrors> {
    check_rgb_pair("detect edges", src, dst, width, height, components)?;

    let threshold = u64::from(threshold) * u64::from(threshold);
    let stride = width * components;
    let rgb = |pos: usize| [src[pos], src[pos + 1], src[pos + 2]];

    for y in 0..height.saturating_sub(1) {
        for x in 0..width.saturating_sub(1) {
            let pos = y * stride + x * components;

            let this = rgb(pos);
            let right = rgb(pos + components);
            let bottom = rgb(pos + stride);

            let is_edge = u64::from(rgb_distance_squared(this, right)) >= threshold
                || u64::from(rgb_distance_squared(this, bottom)) >= threshold;

            let value = if is_edge { 0xFF } else { 0x00 };
            dst[pos..pos + 3].fill(value);
        }
    }
    Ok(())
}
