/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Traits that codecs and image operations implement
//!
//! The library itself contains no codecs, PNG, BMP, TGA and PVR readers
//! and writers live elsewhere and plug in through [`DecoderTrait`] and
//! [`EncoderTrait`]. Image operations plug in through [`OperationsTrait`].
use pixmill_core::colorspace::ColorSpace;
use pixmill_core::log::trace;
use pixmill_core::options::DecoderOptions;

use crate::codecs::ImageFormat;
use crate::errors::ImageErrors;
use crate::image::Image;

/// What a decoder hands back, the interleaved pixels
/// and what is needed to interpret them
pub struct DecodedImage {
    pub width:      usize,
    pub height:     usize,
    pub colorspace: ColorSpace,
    pub pixels:     Vec<u8>
}

/// Encapsulates an image decoder.
///
/// All supported image decoders must implement this class
pub trait DecoderTrait {
    /// Get the name of the decoder
    fn name(&self) -> &'static str;

    /// The format this decoder reads
    fn format(&self) -> ImageFormat;

    /// Decode a buffer already in memory
    ///
    /// The decoder should respect the limits in `options`, the caller
    /// checks them again after decoding.
    ///
    /// # Errors
    /// Whatever the underlying decoder reports, usually as
    /// [`ImageErrors::ImageDecodeErrors`]
    fn decode(&mut self, data: &[u8], options: &DecoderOptions)
        -> Result<DecodedImage, ImageErrors>;
}

/// Encapsulates an image encoder
pub trait EncoderTrait {
    /// Get the name of the encoder
    fn name(&self) -> &'static str;

    /// The format this encoder writes
    fn format(&self) -> ImageFormat;

    /// Colorspaces the encoder can write
    fn supported_colorspaces(&self) -> &'static [ColorSpace];

    /// Encode an image into the bytes of a file
    ///
    /// This is called after [`supported_colorspaces`](Self::supported_colorspaces)
    /// has been checked, so the encoder only sees images it can write.
    ///
    /// # Errors
    /// Whatever the underlying encoder reports, usually as
    /// [`ImageErrors::EncodeErrors`]
    fn encode_inner(&mut self, image: &Image) -> Result<Vec<u8>, ImageErrors>;

    /// Encode an image, confirming the encoder supports its colorspace
    ///
    /// # Errors
    /// - [`ImageErrors::UnsupportedFormat`] if the colorspace can't be written
    /// - Any error from [`encode_inner`](Self::encode_inner)
    fn encode(&mut self, image: &Image) -> Result<Vec<u8>, ImageErrors> {
        let colorspace = image.colorspace();

        if !self.supported_colorspaces().contains(&colorspace) {
            return Err(ImageErrors::UnsupportedFormat(format!(
                "{} encoder cannot write {colorspace:?} images, supported colorspaces are {:?}",
                self.name(),
                self.supported_colorspaces()
            )));
        }
        let (width, height) = image.dimensions();
        trace!(
            "Encoding {width}x{height} {colorspace:?} image as {:?}",
            self.format()
        );

        self.encode_inner(image)
    }
}

/// This encapsulates an image operation.
///
/// All operations that can be stored in a workflow
/// need to encapsulate this struct.
pub trait OperationsTrait {
    /// Get the name of this operation
    fn name(&self) -> &'static str;

    /// Execute the operation on the image
    ///
    /// Implementations don't need to check the colorspace,
    /// [`execute`](Self::execute) already did.
    ///
    /// # Errors
    /// Operation specific, see the implementor
    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors>;

    /// Colorspaces this operation works on
    ///
    /// The pixel routines all work on interleaved RGB or RGBA,
    /// operations that do more or less override this
    fn supported_colorspaces(&self) -> &'static [ColorSpace] {
        &[ColorSpace::RGB, ColorSpace::RGBA]
    }

    /// Run the operation, checking the image is one it supports
    /// and that the image is still consistent afterwards
    ///
    /// # Errors
    /// - [`ImageErrors::UnsupportedColorspace`] if the operation cannot work on the image
    /// - Any error the operation itself raises
    fn execute(&self, image: &mut Image) -> Result<(), ImageErrors> {
        let colorspace = image.colorspace();

        if !self.supported_colorspaces().contains(&colorspace) {
            return Err(ImageErrors::UnsupportedColorspace(
                self.name(),
                colorspace,
                self.supported_colorspaces()
            ));
        }
        let (width, height) = image.dimensions();
        trace!("Running {} on a {width}x{height} image", self.name());

        self.execute_impl(image)?;

        // an operation that resizes must keep the buffer in step
        let expected = image.expected_size();
        let found = image.size();

        if expected != found {
            return Err(ImageErrors::DimensionsMisMatch(expected, found));
        }
        Ok(())
    }
}
