/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image processing routines for pixmill
//!
//! Every routine comes in two layers
//! - A free function working on raw interleaved `&[u8]` buffers, with
//!   the dimensions and channel count passed alongside
//! - A struct implementing [`OperationsTrait`](pixmill_image::traits::OperationsTrait)
//!   that applies the function to a whole [`Image`](pixmill_image::image::Image)
//!
//! Drawing is the exception, it goes through a [`Canvas`](draw::Canvas)
//! borrowing the image pixels.
//!
//! # Example
//! Shrink an image and blend it onto another
//! ```
//! use pixmill_core::color::Color;
//! use pixmill_core::colorspace::ColorSpace;
//! use pixmill_image::image::Image;
//! use pixmill_image::traits::OperationsTrait;
//! use pixmill_procs::blend::BlendMode;
//! use pixmill_procs::composite::Blend;
//! use pixmill_procs::resize::{Resize, ResizeMethod};
//! use pixmill_procs::utils::Gravity;
//!
//! let mut logo = Image::fill(Color::opaque(200, 10, 10), ColorSpace::RGB, 64, 64).unwrap();
//! Resize::new(16, 16, ResizeMethod::Bilinear).execute(&mut logo).unwrap();
//!
//! let mut canvas = Image::fill(Color::WHITE, ColorSpace::RGB, 100, 100).unwrap();
//! Blend::new_gravity(&logo, BlendMode::Normal, Gravity::Center)
//!     .execute(&mut canvas)
//!     .unwrap();
//!
//! assert_eq!(canvas.pixel(50, 50), Some(Color::opaque(200, 10, 10)));
//! assert_eq!(canvas.pixel(0, 0), Some(Color::WHITE));
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::inline_always,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::many_single_char_names,
    clippy::too_many_lines
)]

pub mod blend;
pub mod blit;
pub mod brighten;
pub mod colorscale;
pub mod composite;
pub mod contrast;
pub mod draw;
pub mod edges;
pub mod extract_color;
pub mod flip;
pub mod grayscale;
pub mod resize;
pub mod swap;
pub mod utils;
pub mod yuv;
