// Copyright Claudio Mattera 2024-2025.
//
// Distributed under the MIT License or the Apache 2.0 License at your option.
// See the accompanying files License-MIT.txt and License-Apache-2.0.txt, or
// online at
// https://opensource.org/licenses/MIT
// https://opensource.org/licenses/Apache-2.0

//! Images that can be drawn on the display

use crate::Rgba;

/// Extent of an image
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Extent {
    /// An image of a single color covering the whole plane
    Uniform,

    /// An image with finite size
    Sized {
        /// Width in pixels
        width: u32,

        /// Height in pixels
        height: u32,
    },
}

/// A source of pixels
///
/// Coordinates start at the top left corner.
pub trait Image {
    /// Get the extent of the image
    fn extent(&self) -> Extent;

    /// Sample the pixel at a position
    ///
    /// Only called for positions inside the image.
    fn pixel(&self, x: u32, y: u32) -> Rgba;
}

impl<T> Image for &T
where
    T: Image + ?Sized,
{
    fn extent(&self) -> Extent {
        (**self).extent()
    }

    fn pixel(&self, x: u32, y: u32) -> Rgba {
        (**self).pixel(x, y)
    }
}

/// An image of a single color and with no bounds
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Uniform(pub Rgba);

impl Uniform {
    /// An all-black image
    pub const BLACK: Self = Self(Rgba::BLACK);

    /// An all-white image
    pub const WHITE: Self = Self(Rgba::WHITE);
}

impl Image for Uniform {
    fn extent(&self) -> Extent {
        Extent::Uniform
    }

    fn pixel(&self, _x: u32, _y: u32) -> Rgba {
        self.0
    }
}

#[cfg(feature = "image")]
mod external {
    //! Implementations for the `image` crate
    //!
    //! Samples keep the native range of the image, so 16 bits images are not
    //! rounded to 8 bits before classification.

    use core::ops::Deref;

    use ::image::DynamicImage;
    use ::image::GenericImageView;
    use ::image::ImageBuffer;
    use ::image::Pixel;

    use super::Extent;
    use super::Image;
    use crate::Rgba;

    /// A subpixel that can be widened to 16 bits
    pub trait Channel: Copy {
        /// Convert to the 16 bits range
        fn to_u16(self) -> u16;
    }

    impl Channel for u8 {
        fn to_u16(self) -> u16 {
            u16::from(self) * 0x0101
        }
    }

    impl Channel for u16 {
        fn to_u16(self) -> u16 {
            self
        }
    }

    impl Channel for f32 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        fn to_u16(self) -> u16 {
            // Clamped to [0, 65535] before the cast
            libm::roundf(self.clamp(0.0, 1.0) * f32::from(u16::MAX)) as u16
        }
    }

    impl Image for DynamicImage {
        fn extent(&self) -> Extent {
            let (width, height) = self.dimensions();
            Extent::Sized { width, height }
        }

        fn pixel(&self, x: u32, y: u32) -> Rgba {
            match *self {
                Self::ImageLuma8(ref buffer) => buffer.pixel(x, y),
                Self::ImageLumaA8(ref buffer) => buffer.pixel(x, y),
                Self::ImageRgb8(ref buffer) => buffer.pixel(x, y),
                Self::ImageRgba8(ref buffer) => buffer.pixel(x, y),
                Self::ImageLuma16(ref buffer) => buffer.pixel(x, y),
                Self::ImageLumaA16(ref buffer) => buffer.pixel(x, y),
                Self::ImageRgb16(ref buffer) => buffer.pixel(x, y),
                Self::ImageRgba16(ref buffer) => buffer.pixel(x, y),
                Self::ImageRgb32F(ref buffer) => buffer.pixel(x, y),
                Self::ImageRgba32F(ref buffer) => buffer.pixel(x, y),
                _ => {
                    let [r, g, b, a] = self.get_pixel(x, y).0;
                    Rgba::from_rgba8(r, g, b, a)
                }
            }
        }
    }

    impl<P, C> Image for ImageBuffer<P, C>
    where
        P: Pixel,
        P::Subpixel: Channel,
        C: Deref<Target = [P::Subpixel]>,
    {
        fn extent(&self) -> Extent {
            let (width, height) = self.dimensions();
            Extent::Sized { width, height }
        }

        fn pixel(&self, x: u32, y: u32) -> Rgba {
            let [r, g, b, a] = self.get_pixel(x, y).to_rgba().0;
            Rgba::from_rgba16(r.to_u16(), g.to_u16(), b.to_u16(), a.to_u16())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_images_have_no_bounds() {
        assert_eq!(Uniform::BLACK.extent(), Extent::Uniform);
        assert_eq!(Uniform::WHITE.pixel(1_000_000, 42), Rgba::WHITE);
    }

    #[test]
    fn references_are_images() {
        let image = Uniform::BLACK;
        let image: &dyn Image = &image;
        assert_eq!((&image).pixel(0, 0), Rgba::BLACK);
    }

    #[cfg(feature = "image")]
    #[test]
    fn image_buffers_are_sized_images() {
        let mut buffer = ::image::RgbImage::from_pixel(128, 296, ::image::Rgb([255, 255, 255]));
        buffer.put_pixel(3, 5, ::image::Rgb([0, 0, 0]));

        assert_eq!(
            buffer.extent(),
            Extent::Sized {
                width: 128,
                height: 296
            }
        );
        assert_eq!(buffer.pixel(3, 5), Rgba::BLACK);
        assert_eq!(buffer.pixel(0, 0), Rgba::WHITE);
    }

    #[cfg(feature = "image")]
    #[test]
    fn dynamic_images_are_sized_images() {
        let image = ::image::DynamicImage::new_luma8(10, 20);
        assert_eq!(
            image.extent(),
            Extent::Sized {
                width: 10,
                height: 20
            }
        );
        assert!(image.pixel(9, 19).is_dark());
    }

    #[cfg(feature = "image")]
    #[test]
    fn sixteen_bits_images_keep_native_range() {
        let mut buffer = ::image::ImageBuffer::from_pixel(2, 1, ::image::Rgb([129_u16, 129, 129]));
        buffer.put_pixel(1, 0, ::image::Rgb([131, 131, 131]));
        let image = ::image::DynamicImage::ImageRgb16(buffer);

        assert_eq!(image.pixel(0, 0), Rgba::new(129, 129, 129, u16::MAX));
        assert!(image.pixel(0, 0).is_dark());
        assert!(!image.pixel(1, 0).is_dark());
    }

    #[cfg(feature = "image")]
    #[test]
    fn sixteen_bits_buffers_are_premultiplied() {
        let buffer = ::image::ImageBuffer::from_pixel(1, 1, ::image::Rgba([u16::MAX, 130, 0, 0x8000]));
        assert_eq!(buffer.pixel(0, 0), Rgba::new(0x8000, 65, 0, 0x8000));

        let gray = ::image::ImageBuffer::from_pixel(1, 1, ::image::Luma([130_u16]));
        assert!(gray.pixel(0, 0).is_dark());
    }
}
