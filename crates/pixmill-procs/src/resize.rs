/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Resize interleaved images
//!
//! All kernels map a destination pixel back into the source with the
//! stretch factors `src_width/dst_width` and `src_height/dst_height`,
//! computed in `f32` and truncated towards zero.
use pixmill_core::colorspace::ColorSpace;
use pixmill_core::log::trace;
use pixmill_image::errors::ImageErrors;
use pixmill_image::image::Image;
use pixmill_image::traits::OperationsTrait;

use crate::utils::{check_buffer, check_rgb_components};

mod bicubic;
mod bilinear;
mod nearest;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ResizeMethod {
    /// Copy the closest source pixel, works on any number of channels
    NearestNeighbor,
    /// Average the 2x2 neighbourhood below and right of the source pixel
    ///
    /// The four samples are always weighted equally, whatever the
    /// fractional position of the destination pixel in the source.
    Bilinear,
    /// Average of the source pixel and its four diagonal neighbours
    BilinearSharper,
    /// Cubic B-spline over the 4x4 neighbourhood of the source pixel
    Bicubic
}

impl ResizeMethod {
    pub const fn name(self) -> &'static str {
        match self {
            ResizeMethod::NearestNeighbor => "nearest neighbor",
            ResizeMethod::Bilinear => "bilinear",
            ResizeMethod::BilinearSharper => "bilinear sharper",
            ResizeMethod::Bicubic => "bicubic"
        }
    }
}

/// Resize an image to new dimensions
///
/// # Arguments
/// - src: Interleaved pixels of the source image
/// - dst: Where we will store the new resized pixels, allocated by the caller
/// - method: The resizing method to use
/// - components: Bytes per pixel of both `src` and `dst`
/// - src_width: `src`'s width
/// - src_height: `src`'s height.
/// - dst_width: The expected width
/// - dst_height: The expected height.
///
/// # Errors
/// - [`ImageErrors::InvalidDimensions`] if either image has a zero dimension
/// - [`ImageErrors::UnsupportedChannelCount`] if `components` is zero, or isn't 3 or 4
///   for anything but [`ResizeMethod::NearestNeighbor`]
/// - [`ImageErrors::DimensionsMisMatch`] if a buffer doesn't match its dimensions
#[allow(clippy::too_many_arguments)]
pub fn resize(
    src: &[u8], dst: &mut [u8], method: ResizeMethod, components: usize, src_width: usize,
    src_height: usize, dst_width: usize, dst_height: usize
) -> Result<(), ImageErrors> {
    if src_width == 0 || src_height == 0 || dst_width == 0 || dst_height == 0 {
        return Err(ImageErrors::InvalidDimensions(format!(
            "Cannot resize {src_width}x{src_height} to {dst_width}x{dst_height}, dimensions cannot be zero"
        )));
    }
    match method {
        ResizeMethod::NearestNeighbor if components == 0 => {
            return Err(ImageErrors::UnsupportedChannelCount("resize", components));
        }
        ResizeMethod::NearestNeighbor => (),
        _ => check_rgb_components("resize", components)?
    }
    check_buffer(src, src_width, src_height, components)?;
    check_buffer(dst, dst_width, dst_height, components)?;

    trace!(
        "Resizing {src_width}x{src_height} to {dst_width}x{dst_height} using {}",
        method.name()
    );

    let dims = Dimensions {
        components,
        src_width,
        src_height,
        dst_width,
        dst_height
    };

    match method {
        ResizeMethod::NearestNeighbor => nearest::nearest_neighbor(src, dst, &dims),
        ResizeMethod::Bilinear => bilinear::bilinear(src, dst, &dims),
        ResizeMethod::BilinearSharper => bilinear::bilinear_sharper(src, dst, &dims),
        ResizeMethod::Bicubic => bicubic::bicubic(src, dst, &dims)
    }
    Ok(())
}

/// Shape of a resize, already validated
pub(crate) struct Dimensions {
    components: usize,
    src_width:  usize,
    src_height: usize,
    dst_width:  usize,
    dst_height: usize
}

impl Dimensions {
    #[allow(clippy::cast_precision_loss)]
    fn stretch_factors(&self) -> (f32, f32) {
        (
            self.src_width as f32 / self.dst_width as f32,
            self.src_height as f32 / self.dst_height as f32
        )
    }
}

/// Map a destination coordinate to the source
#[inline(always)]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation
)]
fn source_coordinate(dst: usize, stretch: f32, src_size: usize) -> usize {
    ((dst as f32 * stretch) as usize).min(src_size - 1)
}

/// Resize an image
#[derive(Copy, Clone, Debug)]
pub struct Resize {
    new_width:  usize,
    new_height: usize,
    method:     ResizeMethod
}

impl Resize {
    /// Create a new resize operation
    ///
    /// # Argument
    /// - new_width: The new image width
    /// - new_height: The new image height.
    /// - method: The resize method to use
    #[must_use]
    pub fn new(new_width: usize, new_height: usize, method: ResizeMethod) -> Resize {
        Resize {
            new_width,
            new_height,
            method
        }
    }
}

impl OperationsTrait for Resize {
    fn name(&self) -> &'static str {
        "Resize"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        if self.new_width > usize::from(u16::MAX) || self.new_height > usize::from(u16::MAX) {
            return Err(ImageErrors::InvalidDimensions(format!(
                "Cannot resize to {}x{}, dimensions must fit in 16 bits",
                self.new_width, self.new_height
            )));
        }
        let (width, height) = image.dimensions();
        let components = image.channels();

        let mut new_pixels = vec![0; self.new_width * self.new_height * components];

        resize(
            image.pixels(),
            &mut new_pixels,
            self.method,
            components,
            width,
            height,
            self.new_width,
            self.new_height
        )?;

        image.set_pixels(new_pixels, self.new_width, self.new_height)
    }

    fn supported_colorspaces(&self) -> &'static [ColorSpace] {
        match self.method {
            ResizeMethod::NearestNeighbor => &[
                ColorSpace::RGB,
                ColorSpace::RGBA,
                ColorSpace::Luma,
                ColorSpace::LumaA
            ],
            _ => &[ColorSpace::RGB, ColorSpace::RGBA]
        }
    }
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;
    use pixmill_core::color::Color;
    use pixmill_core::colorspace::ColorSpace;
    use pixmill_image::errors::ImageErrors;
    use pixmill_image::image::Image;
    use pixmill_image::traits::OperationsTrait;

    use crate::resize::{resize, Resize, ResizeMethod};

    const ALL_METHODS: [ResizeMethod; 4] = [
        ResizeMethod::NearestNeighbor,
        ResizeMethod::Bilinear,
        ResizeMethod::BilinearSharper,
        ResizeMethod::Bicubic
    ];

    #[test]
    fn nearest_same_size_is_identity() {
        let mut rand = nanorand::WyRand::new();

        for components in 1..=4 {
            let (width, height) = (37, 19);
            let mut src = vec![0; width * height * components];
            rand.fill(&mut src);

            let mut dst = vec![0; src.len()];
            resize(
                &src,
                &mut dst,
                ResizeMethod::NearestNeighbor,
                components,
                width,
                height,
                width,
                height
            )
            .unwrap();

            assert_eq!(src, dst);
        }
    }

    #[test]
    fn uniform_color_survives_every_method() {
        let sizes = [(1, 1), (3, 7), (16, 16), (50, 13)];

        for method in ALL_METHODS {
            for components in [3, 4] {
                let color = [12_u8, 190, 77, 201];
                let src: Vec<u8> = color[..components]
                    .iter()
                    .copied()
                    .cycle()
                    .take(10 * 9 * components)
                    .collect();

                for (width, height) in sizes {
                    let mut dst = vec![0; width * height * components];
                    resize(&src, &mut dst, method, components, 10, 9, width, height).unwrap();

                    for pix in dst.chunks_exact(components) {
                        assert_eq!(pix, &color[..components], "{method:?} {width}x{height}");
                    }
                }
            }
        }
    }

    #[test]
    fn nearest_doubles_pixels() {
        let src = [1, 2, 3, 4];
        let mut dst = [0; 16];

        resize(&src, &mut dst, ResizeMethod::NearestNeighbor, 1, 2, 2, 4, 4).unwrap();
        assert_eq!(
            dst,
            [1, 1, 2, 2, 1, 1, 2, 2, 3, 3, 4, 4, 3, 3, 4, 4]
        );
    }

    #[test]
    fn bilinear_averages_the_neighbourhood() {
        // 2x2 RGB, every destination pixel of a 1x1 output samples all four
        let src = [0, 0, 0, 100, 100, 100, 200, 200, 200, 40, 40, 40];
        let mut dst = [0; 3];

        resize(&src, &mut dst, ResizeMethod::Bilinear, 3, 2, 2, 1, 1).unwrap();
        assert_eq!(dst, [85; 3]);
    }

    #[test]
    fn sharper_leans_towards_the_center() {
        // 3x3 luma-ish RGB with a bright center and dark diagonals
        let mut src = vec![0; 3 * 3 * 3];
        src[12..15].copy_from_slice(&[200, 200, 200]);
        let mut dst = vec![0; 3 * 3 * 3];

        resize(&src, &mut dst, ResizeMethod::BilinearSharper, 3, 3, 3, 3, 3).unwrap();
        assert_eq!(&dst[12..15], &[100, 100, 100]);
    }

    #[test]
    fn rejects_bad_components() {
        let src = [0; 8];
        let mut dst = [0; 8];

        for method in [ResizeMethod::Bilinear, ResizeMethod::Bicubic] {
            let result = resize(&src, &mut dst, method, 2, 2, 2, 2, 2);
            assert!(matches!(
                result,
                Err(ImageErrors::UnsupportedChannelCount(_, 2))
            ));
        }
        assert!(resize(&src, &mut dst, ResizeMethod::NearestNeighbor, 2, 2, 2, 2, 2).is_ok());
    }

    #[test]
    fn rejects_zero_and_mismatched_dimensions() {
        let src = [0; 12];
        let mut dst = [0; 12];

        assert!(matches!(
            resize(&src, &mut dst, ResizeMethod::Bilinear, 3, 0, 2, 2, 2),
            Err(ImageErrors::InvalidDimensions(_))
        ));
        assert!(matches!(
            resize(&src, &mut dst, ResizeMethod::Bilinear, 3, 2, 2, 3, 2),
            Err(ImageErrors::DimensionsMisMatch(18, 12))
        ));
    }

    #[test]
    fn resize_operation_updates_dimensions() {
        let mut image = Image::fill(Color::new(1, 2, 3, 4), ColorSpace::RGBA, 20, 10).unwrap();

        for method in ALL_METHODS {
            Resize::new(7, 31, method).execute(&mut image).unwrap();
            assert_eq!(image.dimensions(), (7, 31));
            assert_eq!(image.pixel(6, 30), Some(Color::new(1, 2, 3, 4)));

            Resize::new(20, 10, method).execute(&mut image).unwrap();
        }
    }

    #[test]
    fn luma_needs_nearest() {
        let mut image = Image::from_u8(vec![9; 16], 4, 4, ColorSpace::Luma).unwrap();

        assert!(Resize::new(2, 2, ResizeMethod::Bilinear)
            .execute(&mut image)
            .is_err());
        Resize::new(2, 2, ResizeMethod::NearestNeighbor)
            .execute(&mut image)
            .unwrap();
        assert_eq!(image.pixels(), &[9; 4]);
    }
}
