/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image bit depth, information and manipulations
//!
//! Unlike most image libraries, the depth here describes a whole pixel
//! and not a single channel, every channel is always a single byte.
//! Divide the depth by eight and you get the number of interleaved
//! bytes per pixel.

/// The number of bits a single interleaved pixel occupies.
///
/// Only multiples of eight exist, sub-byte pixel formats
/// are expanded by decoders before they reach the library.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
#[non_exhaustive]
pub enum BitDepth {
    /// One byte per pixel, a luma image
    Eight,
    /// Two bytes per pixel, luma with alpha
    Sixteen,
    /// Three bytes per pixel, RGB
    TwentyFour,
    /// Four bytes per pixel, RGBA
    ThirtyTwo,
    /// Bit depth information is unknown
    #[default]
    Unknown
}

impl BitDepth {
    /// Map a bits per pixel count to a bit depth
    ///
    /// Anything that isn't one of 8,16,24 or 32 maps
    /// to [`BitDepth::Unknown`]
    ///
    /// # Example
    /// ```
    /// use pixmill_core::bit_depth::BitDepth;
    /// assert_eq!(BitDepth::from_bits(24), BitDepth::TwentyFour);
    /// assert_eq!(BitDepth::from_bits(12), BitDepth::Unknown);
    /// ```
    pub const fn from_bits(bits: u8) -> BitDepth {
        match bits {
            8 => Self::Eight,
            16 => Self::Sixteen,
            24 => Self::TwentyFour,
            32 => Self::ThirtyTwo,
            _ => Self::Unknown
        }
    }

    /// Create a bit depth from the number of bytes in a pixel
    pub const fn from_bytes_per_pixel(bytes: usize) -> BitDepth {
        match bytes {
            1 => Self::Eight,
            2 => Self::Sixteen,
            3 => Self::TwentyFour,
            4 => Self::ThirtyTwo,
            _ => Self::Unknown
        }
    }

    /// Return the number of bits a pixel uses, or zero
    /// when unknown
    pub const fn bits(self) -> u8 {
        match self {
            Self::Eight => 8,
            Self::Sixteen => 16,
            Self::TwentyFour => 24,
            Self::ThirtyTwo => 32,
            Self::Unknown => 0
        }
    }

    /// Return the number of bytes a single pixel occupies
    ///
    /// This is the stride between two horizontally adjacent pixels
    /// in an interleaved buffer.
    pub const fn size_of(self) -> usize {
        (self.bits() >> 3) as usize
    }
}
