// Copyright Claudio Mattera 2024-2025.
//
// Distributed under the MIT License or the Apache 2.0 License at your option.
// See the accompanying files License-MIT.txt and License-Apache-2.0.txt, or
// online at
// https://opensource.org/licenses/MIT
// https://opensource.org/licenses/Apache-2.0

//! Pixel samples and their black and white classification

#[cfg(feature = "draw-target")]
use embedded_graphics_core::pixelcolor::BinaryColor;
#[cfg(feature = "draw-target")]
use embedded_graphics_core::pixelcolor::Rgb888;
#[cfg(feature = "draw-target")]
use embedded_graphics_core::pixelcolor::RgbColor;

/// Largest value of the weighted channel magnitude still considered dark
const DARKNESS_THRESHOLD: f64 = 130.0;

/// Weight of the red channel
const RED_WEIGHT: f64 = 0.299;

/// Weight of the green channel
const GREEN_WEIGHT: f64 = 0.587;

/// Weight of the blue channel
const BLUE_WEIGHT: f64 = 0.114;

/// A pixel sample with 16 bits per channel
///
/// Channels are alpha-premultiplied, so that every channel is not larger
/// than alpha.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Rgba {
    /// Red channel
    pub r: u16,

    /// Green channel
    pub g: u16,

    /// Blue channel
    pub b: u16,

    /// Alpha channel
    pub a: u16,
}

impl Rgba {
    /// Opaque black
    pub const BLACK: Self = Self::new(0, 0, 0, u16::MAX);

    /// Opaque white
    pub const WHITE: Self = Self::new(u16::MAX, u16::MAX, u16::MAX, u16::MAX);

    /// Create a sample from 16 bits premultiplied channels
    #[must_use]
    pub const fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self { r, g, b, a }
    }

    /// Create a sample from 8 bits straight (non-premultiplied) channels
    #[must_use]
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_rgba16(widen(r), widen(g), widen(b), widen(a))
    }

    /// Create a sample from 16 bits straight (non-premultiplied) channels
    #[must_use]
    pub const fn from_rgba16(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self {
            r: premultiply(r, a),
            g: premultiply(g, a),
            b: premultiply(b, a),
            a,
        }
    }

    /// Create an opaque sample from 8 bits channels
    #[must_use]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(widen(r), widen(g), widen(b), u16::MAX)
    }

    /// Check whether this sample is rendered black on the panel
    #[must_use]
    pub fn is_dark(&self) -> bool {
        is_dark(self.r, self.g, self.b)
    }
}

/// Classify a pixel as dark (black) or light (white)
///
/// Each channel is squared before weighting, and the square root of the
/// weighted sum is compared against 130, with 130 itself being dark.
/// Channels are taken in their 16 bits range, so only very dark pixels end
/// up black.
#[must_use]
pub fn is_dark(r: u16, g: u16, b: u16) -> bool {
    let r = f64::from(r);
    let g = f64::from(g);
    let b = f64::from(b);
    let magnitude = RED_WEIGHT * (r * r) + GREEN_WEIGHT * (g * g) + BLUE_WEIGHT * (b * b);
    libm::sqrt(magnitude) <= DARKNESS_THRESHOLD
}

/// Widen an 8 bits channel to 16 bits
const fn widen(channel: u8) -> u16 {
    (channel as u16) * 0x0101
}

/// Premultiply a 16 bits channel by a 16 bits alpha
#[allow(clippy::cast_possible_truncation)]
const fn premultiply(channel: u16, alpha: u16) -> u16 {
    // Never larger than u16::MAX, since both factors are at most u16::MAX
    ((channel as u32) * (alpha as u32) / (u16::MAX as u32)) as u16
}

#[cfg(feature = "draw-target")]
impl From<Rgb888> for Rgba {
    fn from(color: Rgb888) -> Self {
        Self::from_rgb8(color.r(), color.g(), color.b())
    }
}

#[cfg(feature = "draw-target")]
impl From<BinaryColor> for Rgba {
    fn from(color: BinaryColor) -> Self {
        match color {
            BinaryColor::On => Self::BLACK,
            BinaryColor::Off => Self::WHITE,
        }
    }
}
