// Copyright Claudio Mattera 2024-2025.
//
// Distributed under the MIT License or the Apache 2.0 License at your option.
// See the accompanying files License-MIT.txt and License-Apache-2.0.txt, or
// online at
// https://opensource.org/licenses/MIT
// https://opensource.org/licenses/Apache-2.0

//! Panel geometry

/// Largest width whose last byte column still fits in a RAM X address
const MAX_WIDTH: u16 = 2048;

/// Geometry of an E-INK panel
///
/// The width is always a non-zero multiple of 8, so that a row packs into
/// whole bytes.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Panel {
    /// Width in pixels
    width: u16,

    /// Height in pixels
    height: u16,
}

impl Panel {
    /// WaveShare 2.9 inches panel, 128×296 pixels
    pub const EPD_2IN9: Self = Self {
        width: 128,
        height: 296,
    };

    /// Create a panel geometry
    ///
    /// Returns `None` unless width is a non-zero multiple of 8 not larger
    /// than 2048, and height is non-zero.
    #[must_use]
    pub const fn new(width: u16, height: u16) -> Option<Self> {
        if width == 0 || width % 8 != 0 || width > MAX_WIDTH || height == 0 {
            return None;
        }
        Some(Self { width, height })
    }

    /// Get the width in pixels
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the height in pixels
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Get the number of bytes in a row
    #[must_use]
    pub const fn byte_width(&self) -> u16 {
        self.width / 8
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::EPD_2IN9
    }
}
