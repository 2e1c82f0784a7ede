// Copyright Claudio Mattera 2024-2025.
//
// Distributed under the MIT License or the Apache 2.0 License at your option.
// See the accompanying files License-MIT.txt and License-Apache-2.0.txt, or
// online at
// https://opensource.org/licenses/MIT
// https://opensource.org/licenses/Apache-2.0

//! Update modes and their waveform lookup tables

/// Size of a waveform lookup table in bytes
pub const LUT_SIZE: usize = 30;

/// Lookup table for full updates
#[rustfmt::skip]
const LUT_FULL_UPDATE: [u8; LUT_SIZE] = [
    0x50, 0xAA, 0x55, 0xAA, 0x11, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0xFF, 0xFF, 0x1F, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Lookup table for partial updates
#[rustfmt::skip]
const LUT_PARTIAL_UPDATE: [u8; LUT_SIZE] = [
    0x10, 0x18, 0x18, 0x08, 0x18, 0x18,
    0x08, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x13, 0x14, 0x44, 0x12,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// An update mode
///
/// A full update refreshes the whole panel every time and flickers, a
/// partial update only drives the pixels that changed.
/// Ghosting builds up with partial updates, so the panel should go through
/// a full update at least once a day.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum UpdateMode {
    /// Full refresh
    FullUpdate,

    /// Partial refresh
    PartialUpdate,
}

impl UpdateMode {
    /// Get the waveform lookup table for this mode
    #[must_use]
    pub const fn lookup_table(self) -> &'static [u8; LUT_SIZE] {
        match self {
            Self::FullUpdate => &LUT_FULL_UPDATE,
            Self::PartialUpdate => &LUT_PARTIAL_UPDATE,
        }
    }
}
