// Copyright Claudio Mattera 2024-2025.
//
// Distributed under the MIT License or the Apache 2.0 License at your option.
// See the accompanying files License-MIT.txt and License-Apache-2.0.txt, or
// online at
// https://opensource.org/licenses/MIT
// https://opensource.org/licenses/Apache-2.0

//! Hardware the display is connected through
//!
//! The display only consumes the traits from [`embedded_hal`]:
//!
//! * reset, data/command and chip-select lines are [`OutputPin`]s;
//! * the busy line is an [`InputPin`], high while the controller is busy;
//! * bytes are sent over a [`SpiBus`], since the display drives chip-select
//!   on its own.
//!
//! All of them must be configured by the caller before creating the display,
//! and are never reconfigured by it.

use embedded_hal::digital::ErrorType;

pub use embedded_hal::digital::InputPin;
pub use embedded_hal::digital::OutputPin;
pub use embedded_hal::spi::SpiBus;

/// A busy line backed by a borrowed bidirectional pin
///
/// Only the input side of the pin is exposed, the pin itself stays with its
/// owner.
#[derive(Debug)]
pub struct BusyPin<'pin, P> {
    /// Underlying pin
    pin: &'pin mut P,
}

impl<'pin, P> BusyPin<'pin, P>
where
    P: InputPin,
{
    /// Wrap a pin
    pub fn new(pin: &'pin mut P) -> Self {
        Self { pin }
    }
}

impl<P> ErrorType for BusyPin<'_, P>
where
    P: InputPin,
{
    type Error = P::Error;
}

impl<P> InputPin for BusyPin<'_, P>
where
    P: InputPin,
{
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.pin.is_high()
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.pin.is_low()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use embedded_hal_mock::eh1::digital::Mock as PinMock;
    use embedded_hal_mock::eh1::digital::State as PinState;
    use embedded_hal_mock::eh1::digital::Transaction as PinTransaction;

    #[test]
    fn busy_pin_reads_through() {
        let mut pin = PinMock::new(&[
            PinTransaction::get(PinState::High),
            PinTransaction::get(PinState::Low),
            PinTransaction::set(PinState::High),
        ]);

        {
            let mut busy = BusyPin::new(&mut pin);
            assert!(matches!(busy.is_high(), Ok(true)));
            assert!(matches!(busy.is_low(), Ok(true)));
        }

        // The owner can still drive the pin afterwards
        assert!(pin.set_high().is_ok());

        pin.done();
    }
}
