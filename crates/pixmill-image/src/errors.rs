/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during image processing
use std::fmt::{Debug, Display, Formatter};

use pixmill_core::colorspace::ColorSpace;

/// All possible image errors that can occur.
///
/// This is the grandfather of image errors and contains
/// all decoding, processing and encoding errors possible
pub enum ImageErrors {
    /// A codec collaborator failed to decode the data it was handed
    ImageDecodeErrors(String),
    /// A codec collaborator failed to encode an image
    EncodeErrors(String),
    /// The operation does not work with pixels of that many bytes
    ///
    /// Contains the operation name and the offending channel count
    UnsupportedChannelCount(&'static str, usize),
    /// The operation does not work on images of that colorspace
    ///
    /// Contains the operation name, the image colorspace and
    /// the colorspaces the operation supports
    UnsupportedColorspace(&'static str, ColorSpace, &'static [ColorSpace]),
    /// A destination has fewer bytes per pixel than the source
    /// being written into it
    InsufficientChannels { dst: usize, src: usize },
    /// A source placed at a position does not fit inside the destination
    OutOfBounds {
        position:   (usize, usize),
        src_dims:   (usize, usize),
        dst_dims:   (usize, usize)
    },
    /// Buffer length does not match what the image dimensions demand
    ///
    /// Contains expected and found
    DimensionsMisMatch(usize, usize),
    /// A colorscale reference color with no direction
    DegenerateReferenceColor,
    /// Image dimensions which cannot be represented or are
    /// rejected by the decoder options
    InvalidDimensions(String),
    /// A format this library doesn't know or an encoder can't write
    UnsupportedFormat(String),
    /// An operation parameter outside its valid range
    InvalidParameter(&'static str),
    IoErrors(std::io::Error),
    GenericString(String),
    GenericStr(&'static str)
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ImageDecodeErrors(err) => {
                writeln!(f, "Decoding failed: {err}")
            }
            Self::EncodeErrors(err) => {
                writeln!(f, "Encoding failed: {err}")
            }
            Self::UnsupportedChannelCount(operation, channels) => {
                writeln!(
                    f,
                    "Operation {operation} does not support pixels with {channels} channels, expected 3 or 4"
                )
            }
            Self::UnsupportedColorspace(operation, present, supported) => {
                writeln!(
                    f,
                    "Operation {operation} does not support the {present:?} colorspace, supported colorspaces are {supported:?}"
                )
            }
            Self::InsufficientChannels { dst, src } => {
                writeln!(
                    f,
                    "Cannot write {src} channel pixels into a destination with {dst} channels"
                )
            }
            Self::OutOfBounds {
                position,
                src_dims,
                dst_dims
            } => {
                writeln!(
                    f,
                    "A {}x{} image placed at ({},{}) does not fit inside a {}x{} image",
                    src_dims.0, src_dims.1, position.0, position.1, dst_dims.0, dst_dims.1
                )
            }
            Self::DimensionsMisMatch(expected, found) => {
                writeln!(
                    f,
                    "Dimensions mismatch, expected {expected} but found {found}"
                )
            }
            Self::DegenerateReferenceColor => {
                writeln!(f, "Reference color is black, it has no direction to project onto")
            }
            Self::InvalidDimensions(reason) => {
                writeln!(f, "Invalid dimensions: {reason}")
            }
            Self::UnsupportedFormat(format) => {
                writeln!(f, "Unsupported format: {format}")
            }
            Self::InvalidParameter(reason) => {
                writeln!(f, "Invalid parameter: {reason}")
            }
            Self::IoErrors(err) => {
                writeln!(f, "I/O error: {err}")
            }
            Self::GenericString(err) => {
                writeln!(f, "{err}")
            }
            Self::GenericStr(err) => {
                writeln!(f, "{err}")
            }
        }
    }
}

impl Display for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{self:?}")
    }
}

impl std::error::Error for ImageErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoErrors(err) => Some(err),
            _ => None
        }
    }
}

impl From<std::io::Error> for ImageErrors {
    fn from(value: std::io::Error) -> Self {
        Self::IoErrors(value)
    }
}

impl From<&'static str> for ImageErrors {
    fn from(value: &'static str) -> Self {
        Self::GenericStr(value)
    }
}

impl From<String> for ImageErrors {
    fn from(value: String) -> Self {
        Self::GenericString(value)
    }
}
