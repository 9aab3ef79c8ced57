/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Stand in logging macros for builds without the `log` feature
//!
//! With the feature on, `pixmill_core::log` is the [log](https://docs.rs/log)
//! crate itself, so call sites import `pixmill_core::log::{trace, warn}`
//! either way.
//!
//! The macros never print. Their arguments are still handed to
//! `format_args!` in a branch that never runs, so the format strings stay
//! checked and variables only used for logging don't become unused.

// #[macro_export] places macros at the crate root,
// re-exporting hidden names is what puts them under `log::`
pub use crate::{
    __debug as debug, __error as error, __info as info, __log_enabled as log_enabled,
    __trace as trace, __warn as warn
};

/// Log levels, mirroring the ones of the `log` crate
#[repr(usize)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Level {
    Error = 1,
    Warn,
    Info,
    Debug,
    Trace
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log_enabled {
    ($lvl:expr) => {{
        let _: $crate::log::Level = $lvl;
        false
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __discard {
    ($($arg:tt)+) => {
        if false {
            let _ = ::core::format_args!($($arg)+);
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __error {
    ($($arg:tt)+) => {
        $crate::__discard!($($arg)+)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __warn {
    ($($arg:tt)+) => {
        $crate::__discard!($($arg)+)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __info {
    ($($arg:tt)+) => {
        $crate::__discard!($($arg)+)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __debug {
    ($($arg:tt)+) => {
        $crate::__discard!($($arg)+)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __trace {
    ($($arg:tt)+) => {
        $crate::__discard!($($arg)+)
    };
}
