/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Copy one image into another without blending
use pixmill_image::errors::ImageErrors;
use pixmill_image::image::Image;
use pixmill_image::traits::OperationsTrait;

use crate::utils::{check_buffer, check_placement, Gravity, Placement};

/// Copy `src` into `dst` with its top left corner at `position`
///
/// Every source pixel overwrites the first `src_components` bytes of
/// the destination pixel it lands on, remaining destination bytes
/// are left alone.
///
/// # Errors
/// - [`ImageErrors::UnsupportedChannelCount`] if `src_components` is zero
/// - [`ImageErrors::InsufficientChannels`] if the destination has fewer channels than the source
/// - [`ImageErrors::DimensionsMisMatch`] if a buffer doesn't match its dimensions
/// - [`ImageErrors::OutOfBounds`] if the source doesn't fit inside the destination at `position`
///
/// Nothing is written when an error is returned
#[allow(clippy::too_many_arguments)]
pub fn blit(
    dst: &mut [u8], dst_width: usize, dst_height: usize, dst_components: usize, src: &[u8],
    src_width: usize, src_height: usize, src_components: usize, position: (usize, usize)
) -> Result<(), ImageErrors> {
    if src_components == 0 {
        return Err(ImageErrors::UnsupportedChannelCount("blit", src_components));
    }
    if dst_components < src_components {
        return Err(ImageErrors::InsufficientChannels {
            dst: dst_components,
            src: src_components
        });
    }
    check_buffer(dst, dst_width, dst_height, dst_components)?;
    check_buffer(src, src_width, src_height, src_components)?;
    check_placement(position, (src_width, src_height), (dst_width, dst_height))?;

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

        if src_components == dst_components {
            dst_row[..src_stride].copy_from_slice(src_row);
            continue;
        }
        for (src_pix, dst_pix) in src_row
            .chunks_exact(src_components)
            .zip(dst_row.chunks_exact_mut(dst_components))
        {
            dst_pix[..src_components].copy_from_slice(src_pix);
        }
    }
    Ok(())
}

/// Copy an image on top of the image the operation runs on
pub struct Blit<'a> {
    src_image: &'a Image,
    placement: Placement
}

impl<'a> Blit<'a> {
    /// Create a blit placing the top left corner of `image` at `position`, `(x,y)`
    #[must_use]
    pub fn new(image: &'a Image, position: (usize, usize)) -> Blit<'a> {
        Blit {
            src_image: image,
            placement: Placement::Position(position.0, position.1)
        }
    }

    /// Create a blit placing `image` relative to the edges of the destination
    #[must_use]
    pub fn new_gravity(image: &'a Image, gravity: Gravity) -> Blit<'a> {
        Blit {
            src_image: image,
            placement: Placement::Gravity(gravity)
        }
    }
}

impl<'a> OperationsTrait for Blit<'a> {
    fn name(&self) -> &'static str {
        "Blit"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let position = self.placement.resolve(self.src_image, image);
        let (src_width, src_height) = self.src_image.dimensions();
        let (dst_width, dst_height) = image.dimensions();
        let dst_components = image.channels();

        blit(
            image.pixels_mut(),
            dst_width,
            dst_height,
            dst_components,
            self.src_image.pixels(),
            src_width,
            src_height,
            self.src_image.channels(),
            position
        )
    }
}

#[cfg(test)]
mod tests {
    use pixmill_core::color::Color;
    use pixmill_core::colorspace::ColorSpace;
    use pixmill_image::errors::ImageErrors;
    use pixmill_image::image::Image;
    use pixmill_image::traits::OperationsTrait;

    use crate::blit::{blit, Blit};
    use crate::utils::Gravity;

    #[test]
    fn blit_2x2_into_4x4() {
        let mut dst: Vec<u8> = (0..64).collect();
        let before = dst.clone();
        let src = [200; 2 * 2 * 4];

        blit(&mut dst, 4, 4, 4, &src, 2, 2, 4, (0, 0)).unwrap();

        for y in 0..4 {
            for x in 0..4 {
                let start = (y * 4 + x) * 4;
                let pix = &dst[start..start + 4];

                if x < 2 && y < 2 {
                    assert_eq!(pix, &[200; 4]);
                } else {
                    assert_eq!(pix, &before[start..start + 4]);
                }
            }
        }
    }

    #[test]
    fn rgb_into_rgba_keeps_alpha() {
        let mut dst = Image::fill(Color::new(0, 0, 0, 9), ColorSpace::RGBA, 3, 3).unwrap();
        let src = Image::fill(Color::opaque(1, 2, 3), ColorSpace::RGB, 1, 1).unwrap();

        Blit::new_gravity(&src, Gravity::Center)
            .execute(&mut dst)
            .unwrap();

        assert_eq!(dst.pixel(1, 1), Some(Color::new(1, 2, 3, 9)));
        assert_eq!(dst.pixel(0, 1), Some(Color::new(0, 0, 0, 9)));
    }

    #[test]
    fn rejects_richer_source_and_overflow() {
        let mut dst = vec![0; 4 * 4 * 3];

        assert!(matches!(
            blit(&mut dst, 4, 4, 3, &[0; 4], 1, 1, 4, (0, 0)),
            Err(ImageErrors::InsufficientChannels { dst: 3, src: 4 })
        ));
        assert!(matches!(
            blit(&mut dst, 4, 4, 3, &[7; 12], 2, 2, 3, (1, 3)),
            Err(ImageErrors::OutOfBounds { .. })
        ));
        assert!(dst.iter().all(|x| *x == 0));
    }
}
