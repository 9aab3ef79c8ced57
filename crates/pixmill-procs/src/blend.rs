/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Per channel blend functions
//!
//! Each function takes the top channel `a` and the bottom channel `b`
//! and returns the blended channel.
//!
//! Arithmetic is carried out on `i32` with integer division, the order of
//! the divisions matters, `2 * a * b / 255` and `2 * (a * b / 255)` differ
//! by one for some inputs and the former is what is wanted here.
//! Soft light is the only mode with a floating point intermediate.

/// Photoshop style blend modes
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BlendMode {
    Normal,
    Lighten,
    Darken,
    Multiply,
    Average,
    Add,
    Subtract,
    Difference,
    Negation,
    Screen,
    Exclusion,
    Overlay,
    SoftLight,
    HardLight,
    ColorDodge,
    ColorBurn,
    LinearDodge,
    LinearBurn,
    LinearLight,
    VividLight,
    PinLight,
    HardMix,
    Reflect,
    Glow,
    Phoenix,
    /// Use the top pixel's alpha as the opacity of the top pixel
    ///
    /// Only meaningful for pixels with an alpha channel, three
    /// channel pixels fall back to [`BlendMode::Normal`]
    Alpha
}

impl BlendMode {
    /// Every blend mode, in declaration order
    pub const ALL: [BlendMode; 26] = [
        BlendMode::Normal,
        BlendMode::Lighten,
        BlendMode::Darken,
        BlendMode::Multiply,
        BlendMode::Average,
        BlendMode::Add,
        BlendMode::Subtract,
        BlendMode::Difference,
        BlendMode::Negation,
        BlendMode::Screen,
        BlendMode::Exclusion,
        BlendMode::Overlay,
        BlendMode::SoftLight,
        BlendMode::HardLight,
        BlendMode::ColorDodge,
        BlendMode::ColorBurn,
        BlendMode::LinearDodge,
        BlendMode::LinearBurn,
        BlendMode::LinearLight,
        BlendMode::VividLight,
        BlendMode::PinLight,
        BlendMode::HardMix,
        BlendMode::Reflect,
        BlendMode::Glow,
        BlendMode::Phoenix,
        BlendMode::Alpha
    ];

    /// The function blending a single channel for this mode
    ///
    /// [`BlendMode::Alpha`] needs the top pixel's alpha, which a single
    /// channel doesn't have, it maps to [`normal`]
    pub const fn channel_fn(self) -> fn(u8, u8) -> u8 {
        match self {
            BlendMode::Normal | BlendMode::Alpha => normal,
            BlendMode::Lighten => lighten,
            BlendMode::Darken => darken,
            BlendMode::Multiply => multiply,
            BlendMode::Average => average,
            BlendMode::Add => add,
            BlendMode::Subtract => subtract,
            BlendMode::Difference => difference,
            BlendMode::Negation => negation,
            BlendMode::Screen => screen,
            BlendMode::Exclusion => exclusion,
            BlendMode::Overlay => overlay,
            BlendMode::SoftLight => soft_light,
            BlendMode::HardLight => hard_light,
            BlendMode::ColorDodge => color_dodge,
            BlendMode::ColorBurn => color_burn,
            BlendMode::LinearDodge => linear_dodge,
            BlendMode::LinearBurn => linear_burn,
            BlendMode::LinearLight => linear_light,
            BlendMode::VividLight => vivid_light,
            BlendMode::PinLight => pin_light,
            BlendMode::HardMix => hard_mix,
            BlendMode::Reflect => reflect,
            BlendMode::Glow => glow,
            BlendMode::Phoenix => phoenix
        }
    }
}

// Modes that call other modes with a doubled bottom channel
// pass values up to 254, so the helpers take i32.

#[inline]
fn add_i32(a: i32, b: i32) -> u8 {
    (a + b).min(255) as u8
}

#[inline]
fn subtract_i32(a: i32, b: i32) -> u8 {
    if a + b < 255 {
        0
    } else {
        (a + b - 255) as u8
    }
}

#[inline]
fn color_dodge_i32(a: i32, b: i32) -> u8 {
    if b == 255 {
        255
    } else {
        ((a << 8) / (255 - b)).min(255) as u8
    }
}

#[inline]
fn color_burn_i32(a: i32, b: i32) -> u8 {
    if b == 0 {
        0
    } else {
        (255 - ((255 - a) << 8) / b).max(0) as u8
    }
}

#[inline]
fn overlay_i32(a: i32, b: i32) -> u8 {
    let value = if b < 128 {
        2 * a * b / 255
    } else {
        255 - 2 * (255 - a) * (255 - b) / 255
    };
    value as u8
}

#[inline]
fn reflect_i32(a: i32, b: i32) -> u8 {
    if b == 255 {
        255
    } else {
        (a * a / (255 - b)).min(255) as u8
    }
}

#[inline]
pub fn normal(a: u8, _b: u8) -> u8 {
    a
}

#[inline]
pub fn lighten(a: u8, b: u8) -> u8 {
    if b > a {
        b
    } else {
        a
    }
}

#[inline]
pub fn darken(a: u8, b: u8) -> u8 {
    if b > a {
        a
    } else {
        b
    }
}

#[inline]
pub fn multiply(a: u8, b: u8) -> u8 {
    ((i32::from(a) * i32::from(b)) / 255) as u8
}

#[inline]
pub fn average(a: u8, b: u8) -> u8 {
    ((i32::from(a) + i32::from(b)) / 2) as u8
}

#[inline]
pub fn add(a: u8, b: u8) -> u8 {
    add_i32(i32::from(a), i32::from(b))
}

#[inline]
pub fn subtract(a: u8, b: u8) -> u8 {
    subtract_i32(i32::from(a), i32::from(b))
}

#[inline]
pub fn difference(a: u8, b: u8) -> u8 {
    a.abs_diff(b)
}

#[inline]
pub fn negation(a: u8, b: u8) -> u8 {
    (255 - (255 - i32::from(a) - i32::from(b)).abs()) as u8
}

#[inline]
pub fn screen(a: u8, b: u8) -> u8 {
    let (a, b) = (i32::from(a), i32::from(b));
    (255 - (((255 - a) * (255 - b)) >> 8)) as u8
}

#[inline]
pub fn exclusion(a: u8, b: u8) -> u8 {
    let (a, b) = (i32::from(a), i32::from(b));
    (a + b - 2 * a * b / 255) as u8
}

#[inline]
pub fn overlay(a: u8, b: u8) -> u8 {
    overlay_i32(i32::from(a), i32::from(b))
}

#[inline]
pub fn soft_light(a: u8, b: u8) -> u8 {
    let (a, b) = (i32::from(a), i32::from(b));
    let half = (a >> 1) + 64;

    let value = if b < 128 {
        (2 * half) as f32 * (b as f32 / 255.0)
    } else {
        255.0 - (2 * (255 - half)) as f32 * (255 - b) as f32 / 255.0
    };
    value as u8
}

#[inline]
pub fn hard_light(a: u8, b: u8) -> u8 {
    overlay(b, a)
}

#[inline]
pub fn color_dodge(a: u8, b: u8) -> u8 {
    color_dodge_i32(i32::from(a), i32::from(b))
}

#[inline]
pub fn color_burn(a: u8, b: u8) -> u8 {
    color_burn_i32(i32::from(a), i32::from(b))
}

#[inline]
pub fn linear_dodge(a: u8, b: u8) -> u8 {
    add(a, b)
}

#[inline]
pub fn linear_burn(a: u8, b: u8) -> u8 {
    subtract(a, b)
}

#[inline]
pub fn linear_light(a: u8, b: u8) -> u8 {
    let (a, b) = (i32::from(a), i32::from(b));

    if b < 128 {
        subtract_i32(a, 2 * b)
    } else {
        add_i32(a, 2 * (b - 128))
    }
}

#[inline]
pub fn vivid_light(a: u8, b: u8) -> u8 {
    let (a, b) = (i32::from(a), i32::from(b));

    if b < 128 {
        color_burn_i32(a, 2 * b)
    } else {
        color_dodge_i32(a, 2 * (b - 128))
    }
}

#[inline]
pub fn pin_light(a: u8, b: u8) -> u8 {
    let (a, b) = (i32::from(a), i32::from(b));

    let value = if b < 128 {
        a.min(2 * b)
    } else {
        a.max(2 * (b - 128))
    };
    value as u8
}

#[inline]
pub fn hard_mix(a: u8, b: u8) -> u8 {
    if vivid_light(a, b) < 128 {
        0
    } else {
        255
    }
}

#[inline]
pub fn reflect(a: u8, b: u8) -> u8 {
    reflect_i32(i32::from(a), i32::from(b))
}

#[inline]
pub fn glow(a: u8, b: u8) -> u8 {
    reflect(b, a)
}

#[inline]
pub fn phoenix(a: u8, b: u8) -> u8 {
    (i32::from(a.min(b)) - i32::from(a.max(b)) + 255) as u8
}

/// Mix `a` over `b` with `opacity` in `[0,1]`
///
/// `opacity = 1` gives `a`, `opacity = 0` gives `b`, the result is truncated
#[inline]
pub fn alpha(a: u8, b: u8, opacity: f32) -> u8 {
    (opacity * f32::from(a) + (1.0 - opacity) * f32::from(b)) as u8
}
