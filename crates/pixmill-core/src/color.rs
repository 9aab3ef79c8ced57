/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Packed color literals and their unpacked form
//!
//! Two packed layouts are in use by callers
//!
//! ```text
//!  RGBA32   31       24 23      16 15       8 7        0
//!          ┌──────────┬──────────┬──────────┬──────────┐
//!          │    R     │    G     │    B     │    A     │
//!          └──────────┴──────────┴──────────┴──────────┘
//!
//!  RGB24                23      16 15       8 7        0
//!                      ┌──────────┬──────────┬──────────┐
//!                      │    R     │    G     │    B     │
//!                      └──────────┴──────────┴──────────┘
//! ```
//!
//! The raster routines never take a packed integer directly, they take
//! a [`Color`], which is built from whichever layout the caller has.

/// Pack four channels into an RGBA32 integer
#[inline]
pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    ((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | (a as u32)
}

/// Pack three channels into an RGB24 integer
#[inline]
pub const fn rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

#[inline]
pub const fn r32(color: u32) -> u8 {
    (color >> 24) as u8
}

#[inline]
pub const fn g32(color: u32) -> u8 {
    (color >> 16) as u8
}

#[inline]
pub const fn b32(color: u32) -> u8 {
    (color >> 8) as u8
}

#[inline]
pub const fn a32(color: u32) -> u8 {
    (color & 0xFF) as u8
}

#[inline]
pub const fn r24(color: u32) -> u8 {
    (color >> 16) as u8
}

#[inline]
pub const fn g24(color: u32) -> u8 {
    (color >> 8) as u8
}

#[inline]
pub const fn b24(color: u32) -> u8 {
    (color & 0xFF) as u8
}

/// A single unpacked color
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8
}

impl Color {
    pub const BLACK: Color = Color::opaque(0, 0, 0);
    pub const WHITE: Color = Color::opaque(255, 255, 255);

    /// Create a new color from its four channels
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }

    /// Create a fully opaque color
    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 255 }
    }

    /// Unpack an RGBA32 integer
    ///
    /// # Example
    /// ```
    /// use pixmill_core::color::{rgba, Color};
    /// let color = Color::from_rgba32(rgba(10, 20, 30, 40));
    /// assert_eq!(color, Color::new(10, 20, 30, 40));
    /// ```
    #[must_use]
    pub const fn from_rgba32(color: u32) -> Color {
        Color::new(r32(color), g32(color), b32(color), a32(color))
    }

    /// Unpack an RGB24 integer, the color is fully opaque
    #[must_use]
    pub const fn from_rgb24(color: u32) -> Color {
        Color::opaque(r24(color), g24(color), b24(color))
    }

    #[must_use]
    pub const fn to_rgba32(self) -> u32 {
        rgba(self.r, self.g, self.b, self.a)
    }

    /// Pack into RGB24, alpha is dropped
    #[must_use]
    pub const fn to_rgb24(self) -> u32 {
        rgb(self.r, self.g, self.b)
    }

    /// Channels in interleaved order, R,G,B,A
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Color {
    fn from(value: [u8; 4]) -> Self {
        Color::new(value[0], value[1], value[2], value[3])
    }
}

impl From<[u8; 3]> for Color {
    fn from(value: [u8; 3]) -> Self {
        Color::opaque(value[0], value[1], value[2])
    }
}
