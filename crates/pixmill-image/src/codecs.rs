/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Entry point for the codecs the library understands
//!
//! The library doesn't carry codecs of its own, a decoder or encoder
//! implementing [`DecoderTrait`] or [`EncoderTrait`] is handed to the
//! functions here, which take care of checking what comes out of a decoder
//! before it becomes an [`Image`] and of the file system.
use std::path::Path;

use pixmill_core::log::trace;
use pixmill_core::options::DecoderOptions;

use crate::errors::ImageErrors;
use crate::image::Image;
use crate::traits::{DecoderTrait, EncoderTrait};

/// All supported image formats
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ImageFormat {
    /// Portable Network Graphics
    Png,
    /// Windows Bitmap Files
    Bmp,
    /// Truevision Targa
    Tga,
    /// PowerVR compressed texture
    ///
    /// The hardware requires both sides to be a power of two
    Pvr
}

impl ImageFormat {
    /// Map a file extension to a format
    ///
    /// The comparison ignores case, `pvrtc` is accepted as
    /// an alias for `pvr`
    ///
    /// # Example
    /// ```
    /// use pixmill_image::codecs::ImageFormat;
    /// assert_eq!(ImageFormat::from_extension("PNG"), Some(ImageFormat::Png));
    /// assert_eq!(ImageFormat::from_extension("pvrtc"), Some(ImageFormat::Pvr));
    /// assert_eq!(ImageFormat::from_extension("jpg"), None);
    /// ```
    pub fn from_extension<P: AsRef<str>>(extension: P) -> Option<ImageFormat> {
        match extension.as_ref().to_ascii_lowercase().as_str() {
            "png" => Some(ImageFormat::Png),
            "bmp" => Some(ImageFormat::Bmp),
            "tga" => Some(ImageFormat::Tga),
            "pvr" | "pvrtc" => Some(ImageFormat::Pvr),
            _ => None
        }
    }

    /// Guess the format of a file from its extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<ImageFormat> {
        path.as_ref()
            .extension()
            .and_then(|ext| ImageFormat::from_extension(ext.to_string_lossy()))
    }

    /// Whether the format only stores images whose sides are powers of two
    pub const fn requires_power_of_two(self) -> bool {
        matches!(self, ImageFormat::Pvr)
    }
}

impl Image {
    /// Decode an image from memory using the given decoder
    ///
    /// What the decoder returns is checked before it's accepted,
    /// dimensions must be non zero and within the limits of `options`,
    /// the buffer must be exactly the size the dimensions demand and
    /// in strict mode, formats that need power of two sides must have them.
    ///
    /// # Errors
    /// - Errors raised by the decoder
    /// - [`ImageErrors::InvalidDimensions`] if the decoded image breaks the rules above
    /// - [`ImageErrors::DimensionsMisMatch`] if the buffer length is off
    pub fn decode_with(
        decoder: &mut dyn DecoderTrait, data: &[u8], options: &DecoderOptions
    ) -> Result<Image, ImageErrors> {
        let decoded = decoder.decode(data, options)?;
        let format = decoder.format();

        let (width, height) = (decoded.width, decoded.height);

        trace!(
            "{} decoded a {width}x{height} {:?} image",
            decoder.name(),
            decoded.colorspace
        );

        if width > options.get_max_width() {
            return Err(ImageErrors::InvalidDimensions(format!(
                "image width {width} greater than the configured maximum {}",
                options.get_max_width()
            )));
        }
        if height > options.get_max_height() {
            return Err(ImageErrors::InvalidDimensions(format!(
                "image height {height} greater than the configured maximum {}",
                options.get_max_height()
            )));
        }
        if options.get_strict_mode()
            && format.requires_power_of_two()
            && !(width.is_power_of_two() && height.is_power_of_two())
        {
            return Err(ImageErrors::InvalidDimensions(format!(
                "{format:?} images need power of two sides, found {width}x{height}"
            )));
        }

        Image::from_u8(decoded.pixels, width, height, decoded.colorspace)
    }

    /// Read a file and decode it with the given decoder
    ///
    /// If the file extension names a format, it must be the
    /// format of the decoder.
    ///
    /// # Errors
    /// - [`ImageErrors::UnsupportedFormat`] when the extension and decoder disagree
    /// - [`ImageErrors::IoErrors`] if the file can't be read
    /// - Anything [`decode_with`](Self::decode_with) returns
    pub fn open_with<P: AsRef<Path>>(
        path: P, decoder: &mut dyn DecoderTrait, options: &DecoderOptions
    ) -> Result<Image, ImageErrors> {
        let path = path.as_ref();

        if let Some(format) = ImageFormat::from_path(path) {
            if format != decoder.format() {
                return Err(ImageErrors::UnsupportedFormat(format!(
                    "{path:?} looks like a {format:?} file but the {} decoder reads {:?}",
                    decoder.name(),
                    decoder.format()
                )));
            }
        }
        let data = std::fs::read(path)?;

        Image::decode_with(decoder, &data, options)
    }

    /// Encode the image and write it to `path`
    ///
    /// # Errors
    /// - Anything the encoder returns
    /// - [`ImageErrors::IoErrors`] if the file can't be written
    pub fn save_with<P: AsRef<Path>>(
        &self, path: P, encoder: &mut dyn EncoderTrait
    ) -> Result<(), ImageErrors> {
        let data = encoder.encode(self)?;
        std::fs::write(path, data)?;
        Ok(())
    }
}
