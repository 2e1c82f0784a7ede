// Copyright Claudio Mattera 2024-2025.
//
// Distributed under the MIT License or the Apache 2.0 License at your option.
// See the accompanying files LICENSE-MIT.txt and LICENSE-APACHE-2.0.txt, or
// online at
// https://opensource.org/licenses/MIT
// https://opensource.org/licenses/Apache-2.0

//! Black and white canvas to draw graphics on

use core::convert::Infallible;

use embedded_graphics_core::draw_target::DrawTarget;
use embedded_graphics_core::geometry::OriginDimensions;
use embedded_graphics_core::geometry::Point;
use embedded_graphics_core::geometry::Size;
use embedded_graphics_core::pixelcolor::BinaryColor;
use embedded_graphics_core::Pixel;

use crate::Extent;
use crate::Image;
use crate::Rgba;

/// A screen rotation
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Rotation {
    /// No rotation
    Rotate0,

    /// Clockwise rotation of 90 degrees
    Rotate90,

    /// Clockwise rotation of 180 degrees
    Rotate180,

    /// Clockwise rotation of 270 degrees
    Rotate270,
}

/// A canvas to draw black and white graphics
///
/// `WIDTH` and `HEIGHT` are the panel width and height in pixels, while
/// `BYTE_SIZE` is the panel size in bytes (width × height ÷ 8).
/// A smaller `BYTE_SIZE` is rejected at compile time by [`Canvas::new`].
/// `BinaryColor::On` is black, `BinaryColor::Off` is white.
///
/// Graphics are drawn in rotated coordinates, while the canvas is always
/// sampled as an image in panel coordinates.
#[derive(Debug)]
pub struct Canvas<const WIDTH: usize, const HEIGHT: usize, const BYTE_SIZE: usize> {
    /// Canvas rotation
    rotation: Rotation,

    /// Pixels, one bit each, set for white
    pixels: [u8; BYTE_SIZE],
}

impl<const WIDTH: usize, const HEIGHT: usize, const BYTE_SIZE: usize>
    Canvas<WIDTH, HEIGHT, BYTE_SIZE>
{
    /// Check that the buffer holds every pixel
    ///
    /// ```compile_fail
    /// use waveshare_29_rs::Canvas;
    ///
    /// let _canvas = Canvas::<128, 296, 4735>::new();
    /// ```
    pub const BYTE_SIZE_COVERS_PANEL: () = assert!(
        BYTE_SIZE * 8 >= WIDTH * HEIGHT,
        "BYTE_SIZE is smaller than WIDTH × HEIGHT ÷ 8"
    );

    /// Create a new white canvas
    #[must_use]
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::BYTE_SIZE_COVERS_PANEL;
        Self {
            rotation: Rotation::Rotate0,
            pixels: [0xff; BYTE_SIZE],
        }
    }

    /// Get the packed pixels
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Set canvas rotation
    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    /// Get canvas rotation
    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Map rotated coordinates to panel coordinates
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn to_panel(&self, x: i32, y: i32) -> (i32, i32) {
        let width = WIDTH as i32;
        let height = HEIGHT as i32;
        match self.rotation {
            Rotation::Rotate0 => (x, y),
            Rotation::Rotate90 => (width - 1 - y, x),
            Rotation::Rotate180 => (width - 1 - x, height - 1 - y),
            Rotation::Rotate270 => (y, height - 1 - x),
        }
    }
}

impl<const WIDTH: usize, const HEIGHT: usize, const BYTE_SIZE: usize> Default
    for Canvas<WIDTH, HEIGHT, BYTE_SIZE>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<const WIDTH: usize, const HEIGHT: usize, const BYTE_SIZE: usize> DrawTarget
    for Canvas<WIDTH, HEIGHT, BYTE_SIZE>
{
    type Error = Infallible;

    type Color = BinaryColor;

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            let (x, y) = self.to_panel(x, y);
            if x < 0_i32 || x >= WIDTH as i32 || y < 0_i32 || y >= HEIGHT as i32 {
                continue;
            }

            let (index, offset) = get_index_and_offset::<WIDTH>(x, y);
            if index >= BYTE_SIZE {
                continue;
            }
            let mask: u8 = 0b1000_0000 >> offset;
            match color {
                BinaryColor::On => self.pixels[index] &= !mask,
                BinaryColor::Off => self.pixels[index] |= mask,
            }
        }

        Ok(())
    }
}

impl<const WIDTH: usize, const HEIGHT: usize, const BYTE_SIZE: usize> OriginDimensions
    for Canvas<WIDTH, HEIGHT, BYTE_SIZE>
{
    #[allow(clippy::cast_possible_truncation)]
    fn size(&self) -> Size {
        match self.rotation {
            Rotation::Rotate0 | Rotation::Rotate180 => Size::new(WIDTH as u32, HEIGHT as u32),
            Rotation::Rotate90 | Rotation::Rotate270 => Size::new(HEIGHT as u32, WIDTH as u32),
        }
    }
}

impl<const WIDTH: usize, const HEIGHT: usize, const BYTE_SIZE: usize> Image
    for Canvas<WIDTH, HEIGHT, BYTE_SIZE>
{
    #[allow(clippy::cast_possible_truncation)]
    fn extent(&self) -> Extent {
        Extent::Sized {
            width: WIDTH as u32,
            height: HEIGHT as u32,
        }
    }

    #[allow(clippy::cast_possible_wrap)]
    fn pixel(&self, x: u32, y: u32) -> Rgba {
        let (index, offset) = get_index_and_offset::<WIDTH>(x as i32, y as i32);
        let is_white = self
            .pixels
            .get(index)
            .is_some_and(|byte| byte & (0b1000_0000 >> offset) != 0);
        if is_white {
            Rgba::WHITE
        } else {
            Rgba::BLACK
        }
    }
}

/// Get index and offset
fn get_index_and_offset<const WIDTH: usize>(x: i32, y: i32) -> (usize, usize) {
    let bit_index = get_bit_index::<WIDTH>(x, y);
    get_index_and_offset_from_bit_index(bit_index)
}

/// Get bit index
#[allow(clippy::cast_sign_loss)]
fn get_bit_index<const WIDTH: usize>(x: i32, y: i32) -> usize {
    x as usize + y as usize * WIDTH
}

/// Get index and offset from bit index
fn get_index_and_offset_from_bit_index(bit_index: usize) -> (usize, usize) {
    let index = bit_index >> 3_i32;
    let offset = bit_index & 0b0000_0111;
    (index, offset)
}

/// A canvas sized for 2.9 in displays
#[allow(clippy::module_name_repetitions)]
pub type Epd2in9Canvas = Canvas<128, 296, 4736>;
