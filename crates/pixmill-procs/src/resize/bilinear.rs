/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Fixed weight bilinear kernels
//!
//! Neighbours are addressed by their flat offset in the source buffer,
//! so a neighbour past the end of a row reads the start of the next
//! one. Offsets outside the buffer clamp to its first or last pixel.
use crate::resize::{source_coordinate, Dimensions};
use crate::utils::{bilerp, lerp};

/// Flat offset of `(x,y)`, clamped to the pixels of the buffer
#[inline(always)]
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
fn clamped_offset(x: isize, y: isize, dims: &Dimensions) -> usize {
    let components = dims.components as isize;
    let last = ((dims.src_width * dims.src_height) - 1) as isize * components;
    let offset = (y * dims.src_width as isize + x) * components;

    offset.clamp(0, last) as usize
}

/// Average the pixel at the source position with its right,
/// bottom and bottom right neighbours
#[allow(
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation
)]
pub(crate) fn bilinear(src: &[u8], dst: &mut [u8], dims: &Dimensions) {
    let (x_stretch, y_stretch) = dims.stretch_factors();
    let components = dims.components;

    for (y, dst_row) in dst
        .chunks_exact_mut(dims.dst_width * components)
        .enumerate()
    {
        let src_y = source_coordinate(y, y_stretch, dims.src_height) as isize;

        for (x, dst_pix) in dst_row.chunks_exact_mut(components).enumerate() {
            let src_x = source_coordinate(x, x_stretch, dims.src_width) as isize;

            let n1 = clamped_offset(src_x, src_y, dims);
            let n2 = clamped_offset(src_x + 1, src_y, dims);
            let n3 = clamped_offset(src_x, src_y + 1, dims);
            let n4 = clamped_offset(src_x + 1, src_y + 1, dims);

            for (c, out) in dst_pix.iter_mut().enumerate() {
                let value = bilerp(
                    0.5,
                    0.5,
                    f64::from(src[n4 + c]),
                    f64::from(src[n3 + c]),
                    f64::from(src[n2 + c]),
                    f64::from(src[n1 + c])
                );
                *out = value as u8;
            }
        }
    }
}

/// Mix the pixel at the source position with the average of
/// its four diagonal neighbours
///
/// Plain [`bilinear`] comes out soft, mixing the center back in keeps
/// more of the source detail.
#[allow(
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation
)]
pub(crate) fn bilinear_sharper(src: &[u8], dst: &mut [u8], dims: &Dimensions) {
    let (x_stretch, y_stretch) = dims.stretch_factors();
    let components = dims.components;

    for (y, dst_row) in dst
        .chunks_exact_mut(dims.dst_width * components)
        .enumerate()
    {
        let src_y = source_coordinate(y, y_stretch, dims.src_height) as isize;

        for (x, dst_pix) in dst_row.chunks_exact_mut(components).enumerate() {
            let src_x = source_coordinate(x, x_stretch, dims.src_width) as isize;

            let center = clamped_offset(src_x, src_y, dims);
            let n1 = clamped_offset(src_x - 1, src_y - 1, dims);
            let n2 = clamped_offset(src_x + 1, src_y - 1, dims);
            let n3 = clamped_offset(src_x - 1, src_y + 1, dims);
            let n4 = clamped_offset(src_x + 1, src_y + 1, dims);

            for (c, out) in dst_pix.iter_mut().enumerate() {
                let diagonals = bilerp(
                    0.5,
                    0.5,
                    f64::from(src[n4 + c]),
                    f64::from(src[n3 + c]),
                    f64::from(src[n2 + c]),
                    f64::from(src[n1 + c])
                );
                *out = lerp(0.5, diagonals, f64::from(src[center + c])) as u8;
            }
        }
    }
}
