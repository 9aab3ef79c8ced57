/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! This module represents a single image
//!
//! An image is represented as
//!
//! - a single interleaved byte buffer
//!     - of a certain bits per pixel
//!         - representing a colorspace
//!             -    with a width and height of at most 65535
//!
//! The buffer is laid out row major, a pixel at `(x,y)` starts at byte
//! `(y * width + x) * channels` and every channel is one byte.
//! The buffer length is always exactly `width * height * channels`.
use std::fmt::{Display, Formatter};

use pixmill_core::bit_depth::BitDepth;
use pixmill_core::color::Color;
use pixmill_core::colorspace::ColorSpace;

use crate::errors::ImageErrors;
use crate::traits::OperationsTrait;

/// Maximum supported color channels
pub const MAX_CHANNELS: usize = 4;

/// Result of scanning an image's alpha channel
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Opacity {
    /// Every pixel has a non-zero alpha
    pub completely_opaque: bool,
    /// At least one pixel has a non-zero alpha
    pub partially_opaque:  bool
}

/// Represents a single image
#[derive(Clone, Eq, PartialEq)]
pub struct Image {
    width:      u16,
    height:     u16,
    depth:      BitDepth,
    colorspace: ColorSpace,
    pixels:     Vec<u8>
}

fn checked_dimension(value: usize, what: &str) -> Result<u16, ImageErrors> {
    if value == 0 {
        return Err(ImageErrors::InvalidDimensions(format!(
            "image {what} cannot be zero"
        )));
    }
    u16::try_from(value).map_err(|_| {
        ImageErrors::InvalidDimensions(format!(
            "image {what} {value} is larger than the maximum {}",
            u16::MAX
        ))
    })
}

impl Image {
    /// Create a new zero filled image
    ///
    /// # Arguments
    /// - width, height: Image dimensions, neither can be zero
    /// - bits_per_pixel: 24 for RGB or 32 for RGBA, the number
    ///  of channels is `bits_per_pixel / 8`
    ///
    /// # Errors
    /// - Zero width or height
    /// - A bit depth which doesn't describe an RGB or RGBA pixel
    ///
    /// # Example
    /// ```
    /// use pixmill_core::colorspace::ColorSpace;
    /// use pixmill_image::image::Image;
    ///
    /// let image = Image::create(10, 20, 32).unwrap();
    /// assert_eq!(image.colorspace(), ColorSpace::RGBA);
    /// assert_eq!(image.size(), 10 * 20 * 4);
    /// ```
    pub fn create(width: u16, height: u16, bits_per_pixel: u8) -> Result<Image, ImageErrors> {
        let depth = BitDepth::from_bits(bits_per_pixel);
        let colorspace = ColorSpace::from_components(depth.size_of());

        if !matches!(colorspace, ColorSpace::RGB | ColorSpace::RGBA) {
            return Err(ImageErrors::UnsupportedChannelCount(
                "create",
                usize::from(bits_per_pixel >> 3)
            ));
        }
        checked_dimension(usize::from(width), "width")?;
        checked_dimension(usize::from(height), "height")?;

        let size = usize::from(width) * usize::from(height) * depth.size_of();

        Ok(Image {
            width,
            height,
            depth,
            colorspace,
            pixels: vec![0; size]
        })
    }

    /// Create an image from interleaved pixels
    ///
    /// # Errors
    /// - Dimensions which are zero or don't fit 16 bits
    /// - A colorspace with no known channel count
    /// - `pixels.len()` not matching `width * height * channels`
    pub fn from_u8(
        pixels: Vec<u8>, width: usize, height: usize, colorspace: ColorSpace
    ) -> Result<Image, ImageErrors> {
        let w = checked_dimension(width, "width")?;
        let h = checked_dimension(height, "height")?;
        let components = colorspace.num_components();

        if components == 0 {
            return Err(ImageErrors::UnsupportedColorspace(
                "from_u8",
                colorspace,
                &[
                    ColorSpace::Luma,
                    ColorSpace::LumaA,
                    ColorSpace::RGB,
                    ColorSpace::RGBA
                ]
            ));
        }
        let expected = width * height * components;

        if pixels.len() != expected {
            return Err(ImageErrors::DimensionsMisMatch(expected, pixels.len()));
        }

        Ok(Image {
            width: w,
            height: h,
            depth: BitDepth::from_bytes_per_pixel(components),
            colorspace,
            pixels
        })
    }

    /// Create an image where every pixel has the same color
    ///
    /// The first `colorspace.num_components()` channels of `color`
    /// are used, so an RGB image drops the alpha
    ///
    /// # Errors
    /// Same as [`from_u8`](Self::from_u8)
    pub fn fill(
        color: Color, colorspace: ColorSpace, width: usize, height: usize
    ) -> Result<Image, ImageErrors> {
        let components = colorspace.num_components().min(MAX_CHANNELS);
        let pixel = color.to_array();

        let pixels = pixel[..components].repeat(width * height);

        Image::from_u8(pixels, width, height, colorspace)
    }

    /// Get image dimensions as a tuple of (width,height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width as usize, self.height as usize)
    }

    pub const fn width(&self) -> u16 {
        self.width
    }

    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Get the bits per pixel of this image
    pub const fn depth(&self) -> BitDepth {
        self.depth
    }

    /// Get the image colorspace
    pub const fn colorspace(&self) -> ColorSpace {
        self.colorspace
    }

    /// Number of interleaved bytes making up a pixel
    pub const fn channels(&self) -> usize {
        self.colorspace.num_components()
    }

    /// Return the length of the pixel buffer in bytes
    pub fn size(&self) -> usize {
        self.pixels.len()
    }

    /// The length the pixel buffer should have for the current
    /// dimensions and colorspace
    pub const fn expected_size(&self) -> usize {
        self.width as usize * self.height as usize * self.channels()
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Mutable access to the pixels
    ///
    /// The slice can be modified but not resized, use
    /// [`set_pixels`](Self::set_pixels) to change dimensions
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Consume the image returning the interleaved pixels
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Replace the pixels of this image with a buffer of new dimensions
    ///
    /// The colorspace stays the same.
    ///
    /// # Errors
    /// If the new dimensions are invalid or `pixels` has the wrong length,
    /// the image is left untouched.
    pub fn set_pixels(
        &mut self, pixels: Vec<u8>, width: usize, height: usize
    ) -> Result<(), ImageErrors> {
        let new_image = Image::from_u8(pixels, width, height, self.colorspace)?;
        *self = new_image;
        Ok(())
    }

    /// Read the pixel at `(x,y)`
    ///
    /// Returns `None` outside the image or when the image
    /// isn't RGB or RGBA. RGB pixels are reported as opaque.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        let (width, height) = self.dimensions();

        if x >= width || y >= height {
            return None;
        }
        let channels = self.channels();
        let start = (y * width + x) * channels;
        let pix = self.pixels.get(start..start + channels)?;

        match pix {
            [r, g, b, a] => Some(Color::new(*r, *g, *b, *a)),
            [r, g, b] => Some(Color::opaque(*r, *g, *b)),
            _ => None
        }
    }

    /// Scan the alpha channel of the image
    ///
    /// Images without 4 channels have no alpha to speak of and
    /// are reported as both completely and partially opaque.
    ///
    /// A pixel counts as opaque when its alpha is not zero.
    pub fn is_opaque(&self) -> Opacity {
        if self.channels() != 4 {
            return Opacity {
                completely_opaque: true,
                partially_opaque:  true
            };
        }
        let pixels: &[[u8; 4]] = bytemuck::cast_slice(&self.pixels);

        let mut opacity = Opacity {
            completely_opaque: true,
            partially_opaque:  false
        };

        for pix in pixels {
            let opaque = pix[3] > 0;

            opacity.completely_opaque &= opaque;
            opacity.partially_opaque |= opaque;

            if !opacity.completely_opaque && opacity.partially_opaque {
                break;
            }
        }
        opacity
    }

    /// Run an operation on this image
    ///
    /// # Errors
    /// See [`OperationsTrait::execute`]
    pub fn execute(&mut self, operation: &dyn OperationsTrait) -> Result<(), ImageErrors> {
        operation.execute(self)
    }
}

impl Display for Image {
    /// A short one line description, the first 8 bytes
    /// of the buffer are printed as hex
    ///
    /// `[image bpp=32 channels=4 w=00010 h=00010 data=ff0000ff00ff00ff... ]`
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[image bpp={:02} channels={} w={:05} h={:05} data=",
            self.depth.bits(),
            self.channels(),
            self.width,
            self.height
        )?;
        for byte in self.pixels.iter().take(8) {
            write!(f, "{byte:02x}")?;
        }
        write!(f, "... ]")
    }
}

impl std::fmt::Debug for Image {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("depth", &self.depth)
            .field("colorspace", &self.colorspace)
            .finish_non_exhaustive()
    }
}
