/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::resize::{source_coordinate, Dimensions};

/// Copy the source pixel every destination pixel maps to
///
/// `x_in = x_out * (w_in / w_out)`, the same for y
pub(crate) fn nearest_neighbor(src: &[u8], dst: &mut [u8], dims: &Dimensions) {
    let (x_stretch, y_stretch) = dims.stretch_factors();
    let components = dims.components;
    let src_stride = dims.src_width * components;

    for (y, dst_row) in dst
        .chunks_exact_mut(dims.dst_width * components)
        .enumerate()
    {
        let src_y = source_coordinate(y, y_stretch, dims.src_height);
        let src_row = &src[src_y * src_stride..(src_y + 1) * src_stride];

        for (x, dst_pix) in dst_row.chunks_exact_mut(components).enumerate() {
            let src_x = source_coordinate(x, x_stretch, dims.src_width) * components;

            dst_pix.copy_from_slice(&src_row[src_x..src_x + components]);
        }
    }
}
