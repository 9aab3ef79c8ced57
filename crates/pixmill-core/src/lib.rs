/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all pixmill libraries
//!
//! It currently contains
//!
//! - Bits-per-pixel and colorspace information shared by images
//! - Packed color helpers used by the raster routines
//! - Decoder options handed to codec collaborators
//! - A logging shim that compiles to nothing when the `log` feature is off
//!
//! This library is `#[no_std]` unless the `std` feature is enabled.
//!
//! # Features
//!  - `log`: Routes the logging macros to the [log](https://docs.rs/log) crate.
//!
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;

pub mod bit_depth;
pub mod color;
pub mod colorspace;
#[cfg(not(feature = "log"))]
pub mod log;
pub mod options;
pub mod serde;

#[cfg(feature = "log")]
pub use log;
