/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::resize::Dimensions;

#[inline(always)]
fn positive(x: f32) -> f32 {
    x.max(0.0)
}

/// Cubic B-spline kernel
///
/// `R(t) = 1/6 * (P(t+2)^3 - 4P(t+1)^3 + 6P(t)^3 - 4P(t-1)^3)`
/// with `P(t) = max(t, 0)`
#[inline]
fn bspline_kernel(t: f32) -> f32 {
    let p2 = positive(t + 2.0);
    let p1 = positive(t + 1.0);
    let p0 = positive(t);
    let pm1 = positive(t - 1.0);

    (1.0 / 6.0) * (p2 * p2 * p2 - 4.0 * p1 * p1 * p1 + 6.0 * p0 * p0 * p0 - 4.0 * pm1 * pm1 * pm1)
}

/// Source indices and kernel weights of the four taps around
/// one destination coordinate
///
/// Taps outside the source clamp to its edge.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap
)]
fn taps(dst: usize, stretch: f32, src_size: usize) -> ([usize; 4], [f32; 4]) {
    let src_pos = dst as f32 * stretch;
    let start = src_pos.floor();
    let delta = src_pos - start;
    let start = start as isize;

    let mut indices = [0; 4];
    let mut weights = [0.0; 4];

    for (i, k) in (-1_isize..=2).enumerate() {
        indices[i] = (start + k).clamp(0, src_size as isize - 1) as usize;
        // the kernel is even on [-2,2], R(m - dx) == R(dx - m)
        weights[i] = bspline_kernel(k as f32 - delta);
    }
    (indices, weights)
}

pub(crate) fn bicubic(src: &[u8], dst: &mut [u8], dims: &Dimensions) {
    let (x_stretch, y_stretch) = dims.stretch_factors();
    let components = dims.components;
    let src_stride = dims.src_width * components;

    // pre-calculate all the x coefficients, since they will be repeated for every y-value
    let x_taps: Vec<([usize; 4], [f32; 4])> = (0..dims.dst_width)
        .map(|x| taps(x, x_stretch, dims.src_width))
        .collect();

    for (y, dst_row) in dst
        .chunks_exact_mut(dims.dst_width * components)
        .enumerate()
    {
        let (y_indices, y_weights) = taps(y, y_stretch, dims.src_height);

        for (dst_pix, (x_indices, x_weights)) in
            dst_row.chunks_exact_mut(components).zip(&x_taps)
        {
            let mut sum = [0.0_f32; 4];
            let mut weight_sum = 0.0;

            for (src_y, weight_y) in y_indices.iter().zip(y_weights) {
                let row = &src[src_y * src_stride..(src_y + 1) * src_stride];

                for (src_x, weight_x) in x_indices.iter().zip(x_weights) {
                    let weight = weight_y * weight_x;
                    let pix = &row[src_x * components..(src_x + 1) * components];

                    for (acc, value) in sum.iter_mut().zip(pix) {
                        *acc += f32::from(*value) * weight;
                    }
                    weight_sum += weight;
                }
            }

            for (out, acc) in dst_pix.iter_mut().zip(sum) {
                let value = if weight_sum > 0.0 { acc / weight_sum } else { 0.0 };
                *out = value.round().clamp(0.0, 255.0) as u8;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::resize::bicubic::bspline_kernel;

    #[test]
    fn kernel_is_a_partition_of_unity() {
        for step in 0..10 {
            let delta = step as f32 / 10.0;
            let sum: f32 = (-1..=2).map(|m| bspline_kernel(m as f32 - delta)).sum();

            assert!((sum - 1.0).abs() < 1e-5, "{delta} {sum}");
        }
    }

    #[test]
    fn kernel_values() {
        assert!((bspline_kernel(0.0) - 2.0 / 3.0).abs() < 1e-6);
        assert!((bspline_kernel(1.0) - 1.0 / 6.0).abs() < 1e-6);
        assert!((bspline_kernel(-1.0) - 1.0 / 6.0).abs() < 1e-6);
        assert_eq!(bspline_kernel(2.0), 0.0);
        assert_eq!(bspline_kernel(-2.5), 0.0);
    }
}
