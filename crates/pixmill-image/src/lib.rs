/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! An in-memory raster image
//!
//! This crate holds the [`Image`](image::Image) type every pixmill operation works on,
//! the errors those operations return and the traits through which
//! codecs and operations plug into the library.
//!
//! # Example
//! ```
//! use pixmill_core::color::Color;
//! use pixmill_core::colorspace::ColorSpace;
//! use pixmill_image::image::Image;
//!
//! let image = Image::fill(Color::opaque(255, 0, 0), ColorSpace::RGB, 2, 2).unwrap();
//! assert_eq!(image.pixel(1, 1), Some(Color::opaque(255, 0, 0)));
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
    clippy::cast_possible_truncation
)]

pub mod codecs;
pub mod errors;
pub mod image;
mod serde;
pub mod traits;
