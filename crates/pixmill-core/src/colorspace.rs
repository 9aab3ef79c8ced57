/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! What the interleaved channels of a pixel mean

/// Meaning of the channels of an image
///
/// The raster routines work on [`ColorSpace::RGB`] and [`ColorSpace::RGBA`],
/// the rest exist so decoders can describe what they produced.
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ColorSpace {
    RGB,
    /// RGB followed by alpha
    RGBA,
    /// A single gray channel
    Luma,
    /// Gray followed by alpha
    LumaA,
    Unknown
}

impl ColorSpace {
    /// Bytes per pixel, zero for [`ColorSpace::Unknown`]
    pub const fn num_components(&self) -> usize {
        match self {
            Self::RGB => 3,
            Self::RGBA => 4,
            Self::Luma => 1,
            Self::LumaA => 2,
            Self::Unknown => 0
        }
    }

    /// Map an interleaved channel count back to a colorspace
    ///
    /// # Example
    /// ```
    /// use pixmill_core::colorspace::ColorSpace;
    /// assert_eq!(ColorSpace::from_components(4), ColorSpace::RGBA);
    /// assert_eq!(ColorSpace::from_components(7), ColorSpace::Unknown);
    /// ```
    pub const fn from_components(components: usize) -> ColorSpace {
        match components {
            1 => Self::Luma,
            2 => Self::LumaA,
            3 => Self::RGB,
            4 => Self::RGBA,
            _ => Self::Unknown
        }
    }

    pub const fn has_alpha(&self) -> bool {
        self.alpha_position().is_some()
    }

    /// Index of the alpha byte within a pixel, alpha is always last
    pub const fn alpha_position(&self) -> Option<usize> {
        match self {
            Self::RGBA => Some(3),
            Self::LumaA => Some(1),
            _ => None
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::colorspace::ColorSpace;

    #[test]
    fn components_round_trip() {
        for colorspace in [
            ColorSpace::Luma,
            ColorSpace::LumaA,
            ColorSpace::RGB,
            ColorSpace::RGBA
        ] {
            let n = colorspace.num_components();
            assert_eq!(ColorSpace::from_components(n), colorspace);
        }
    }

    #[test]
    fn alpha_is_last() {
        for colorspace in [ColorSpace::LumaA, ColorSpace::RGBA] {
            assert!(colorspace.has_alpha());
            assert_eq!(
                colorspace.alpha_position(),
                Some(colorspace.num_components() - 1)
            );
        }
        assert_eq!(ColorSpace::RGB.alpha_position(), None);
    }
}
