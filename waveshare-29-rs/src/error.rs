// Copyright Claudio Mattera 2024-2025.
//
// Distributed under the MIT License or the Apache 2.0 License at your option.
// See the accompanying files License-MIT.txt and License-Apache-2.0.txt, or
// online at
// https://opensource.org/licenses/MIT
// https://opensource.org/licenses/Apache-2.0

//! Data structures and functions for error handling

use embedded_hal::digital::Error as DigitalError;
use embedded_hal::digital::ErrorKind as DigitalErrorKind;
use embedded_hal::spi::Error as SpiError;
use embedded_hal::spi::ErrorKind as SpiErrorKind;

/// An error
#[derive(Debug, PartialEq)]
pub enum Error {
    /// The image is neither uniform nor exactly as large as the panel
    ///
    /// Nothing is sent to the display when this error is returned.
    InvalidImageSize,

    /// An error in the underlying SPI bus
    Spi(SpiErrorKind),

    /// An error in the underlying digital system
    Digital(DigitalErrorKind),
}

impl<E> From<E> for Error
where
    E: SpiError,
{
    fn from(error: E) -> Self {
        Self::Spi(error.kind())
    }
}

impl Error {
    /// Convert a digital error to an error
    #[allow(clippy::needless_pass_by_value)]
    pub fn from_digital<E>(error: E) -> Self
    where
        E: DigitalError,
    {
        Self::Digital(error.kind())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match *self {
            Self::InvalidImageSize => write!(f, "invalid image size"),
            Self::Spi(kind) => write!(f, "SPI error: {kind}"),
            Self::Digital(kind) => write!(f, "digital pin error: {kind}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use embedded_hal::spi::ErrorKind;

    #[test]
    fn spi_errors_keep_their_kind() {
        let error: Error = ErrorKind::Overrun.into();
        assert_eq!(error, Error::Spi(ErrorKind::Overrun));
    }

    #[test]
    fn digital_errors_keep_their_kind() {
        let error = Error::from_digital(DigitalErrorKind::Other);
        assert_eq!(error, Error::Digital(DigitalErrorKind::Other));
    }
}
