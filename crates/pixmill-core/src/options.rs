/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoder options
//!
//! All implemented decoders get the same options, so a single
//! `DecoderOptions` can be reused across every format.

/// Limits and checks applied to every decoded image
///
/// The same options are handed to whichever decoder runs, and
/// `Image::decode_with` of `pixmill-image` enforces them again on
/// what the decoder returns.
#[derive(Debug, Copy, Clone)]
pub struct DecoderOptions {
    /// Widest image accepted, default 16384
    max_width:   usize,
    /// Tallest image accepted, default 16384
    max_height:  usize,
    /// Reject images that break a rule of their format instead of
    /// accepting them anyway, default true
    ///
    /// PVR textures must have power of two sides in strict mode.
    strict_mode: bool
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_width:   1 << 14,
            max_height:  1 << 14,
            strict_mode: true
        }
    }
}

impl DecoderOptions {
    /// Widest image a decoder may return
    pub const fn get_max_width(&self) -> usize {
        self.max_width
    }

    /// Tallest image a decoder may return
    pub const fn get_max_height(&self) -> usize {
        self.max_height
    }

    pub const fn get_strict_mode(&self) -> bool {
        self.strict_mode
    }

    /// Limit the width of decoded images
    ///
    /// Values above `u16::MAX` are lowered to it, an image
    /// can't be wider than that anyway.
    #[must_use]
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width.min(usize::from(u16::MAX));
        self
    }

    /// Limit the height of decoded images
    ///
    /// Values above `u16::MAX` are lowered to it.
    #[must_use]
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height.min(usize::from(u16::MAX));
        self
    }

    /// Toggle strict mode
    #[must_use]
    pub fn set_strict_mode(mut self, strict: bool) -> Self {
        self.strict_mode = strict;
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::options::DecoderOptions;

    #[test]
    fn limits_never_exceed_u16() {
        let options = DecoderOptions::default()
            .set_max_width(1 << 20)
            .set_max_height(300);

        assert_eq!(options.get_max_width(), usize::from(u16::MAX));
        assert_eq!(options.get_max_height(), 300);
        assert!(options.get_strict_mode());
    }
}
