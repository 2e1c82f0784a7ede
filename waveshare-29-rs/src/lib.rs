// Copyright Claudio Mattera 2024-2025.
//
// Distributed under the MIT License or the Apache 2.0 License at your option.
// See the accompanying files LICENSE-MIT.txt and LICENSE-APACHE-2.0.txt, or
// online at
// https://opensource.org/licenses/MIT
// https://opensource.org/licenses/Apache-2.0

//! Interface to WaveShare 2.9inches E-INK display

#![cfg_attr(not(test), no_std)]

#[cfg(all(feature = "std", not(test)))]
extern crate std;

mod blocking;
pub use self::blocking::Display;

mod command;

mod mode;
pub use self::mode::UpdateMode;
pub use self::mode::LUT_SIZE;

mod panel;
pub use self::panel::Panel;

mod color;
pub use self::color::is_dark;
pub use self::color::Rgba;

mod image;
pub use self::image::Extent;
pub use self::image::Image;
pub use self::image::Uniform;

#[cfg(feature = "draw-target")]
mod canvas;
#[cfg(feature = "draw-target")]
pub use self::canvas::Canvas;
#[cfg(feature = "draw-target")]
pub use self::canvas::Epd2in9Canvas;
#[cfg(feature = "draw-target")]
pub use self::canvas::Rotation;

pub mod transport;

mod error;
pub use self::error::Error;
