//! Recording fake hardware
//!
//! All pins and the bus write to a shared log, so that tests can check the
//! exact sequence of bytes seen by the controller.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::ErrorType as DigitalErrorType;
use embedded_hal::digital::InputPin;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::ErrorKind;
use embedded_hal::spi::ErrorType as SpiErrorType;
use embedded_hal::spi::SpiBus;

use waveshare_29_rs::Display;

/// A byte as latched by the controller
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Frame {
    /// Byte sent with DC low
    Command(u8),

    /// Byte sent with DC high
    Data(u8),
}

/// An observable hardware event
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Event {
    /// A byte was sent while CS was low
    Frame(Frame),

    /// The busy line was read
    BusyRead,

    /// The reset line was set
    Reset(bool),

    /// A delay in milliseconds
    Delay(u32),
}

/// Shared hardware state
#[derive(Debug, Default)]
pub struct State {
    /// Events seen so far
    pub events: Vec<Event>,

    /// Level of DC
    dc: bool,

    /// Level of CS
    cs: bool,

    /// Levels returned by the next busy reads, idle when empty
    busy: VecDeque<bool>,

    /// Number of bus writes left before failing
    writes_before_failure: Option<usize>,
}

/// Handle to the shared hardware state
#[derive(Clone, Debug, Default)]
pub struct Recorder(Rc<RefCell<State>>);

impl Recorder {
    /// Create a recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue busy levels
    pub fn queue_busy(&self, levels: &[bool]) {
        self.0.borrow_mut().busy.extend(levels);
    }

    /// Make the bus fail after some writes
    pub fn fail_after(&self, writes: usize) {
        self.0.borrow_mut().writes_before_failure = Some(writes);
    }

    /// Get all events
    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().events.clone()
    }

    /// Get only the bytes sent to the controller
    pub fn frames(&self) -> Vec<Frame> {
        self.0
            .borrow()
            .events
            .iter()
            .filter_map(|event| match *event {
                Event::Frame(frame) => Some(frame),
                _ => None,
            })
            .collect()
    }

    /// Forget all events
    pub fn clear(&self) {
        self.0.borrow_mut().events.clear();
    }

    /// Check whether CS is high, that is no frame is open
    pub fn is_deselected(&self) -> bool {
        self.0.borrow().cs
    }

    /// Create a display on top of this recorder
    pub fn display(&self) -> FakeDisplay {
        Display::new(
            FakeBus(self.clone()),
            FakeBusy(self.clone()),
            FakePin(self.clone(), Line::Reset),
            FakePin(self.clone(), Line::DataCommand),
            FakePin(self.clone(), Line::ChipSelect),
            FakeDelay(self.clone()),
        )
    }
}

/// A display on fake hardware
pub type FakeDisplay = Display<FakeBus, FakeBusy, FakePin, FakePin, FakePin, FakeDelay>;

/// Role of an output pin
#[derive(Copy, Clone, Debug)]
pub enum Line {
    /// Reset
    Reset,

    /// Data/command select
    DataCommand,

    /// Chip select
    ChipSelect,
}

/// A fake output pin
pub struct FakePin(Recorder, Line);

impl DigitalErrorType for FakePin {
    type Error = Infallible;
}

impl OutputPin for FakePin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set(true);
        Ok(())
    }
}

impl FakePin {
    /// Set the level of the line
    fn set(&self, level: bool) {
        let mut state = self.0 .0.borrow_mut();
        match self.1 {
            Line::Reset => state.events.push(Event::Reset(level)),
            Line::DataCommand => state.dc = level,
            Line::ChipSelect => state.cs = level,
        }
    }
}

/// A fake busy pin
pub struct FakeBusy(Recorder);

impl DigitalErrorType for FakeBusy {
    type Error = Infallible;
}

impl InputPin for FakeBusy {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        let mut state = self.0 .0.borrow_mut();
        state.events.push(Event::BusyRead);
        Ok(state.busy.pop_front().unwrap_or(false))
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|busy| !busy)
    }
}

/// A fake SPI bus
pub struct FakeBus(Recorder);

impl SpiErrorType for FakeBus {
    type Error = ErrorKind;
}

impl SpiBus for FakeBus {
    fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
        Err(ErrorKind::Other)
    }

    fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
        let mut state = self.0 .0.borrow_mut();
        if let Some(left) = state.writes_before_failure {
            if left == 0 {
                return Err(ErrorKind::Overrun);
            }
            state.writes_before_failure = Some(left - 1);
        }
        assert!(!state.cs, "byte sent while chip is not selected");
        let dc = state.dc;
        for &word in words {
            let frame = if dc {
                Frame::Data(word)
            } else {
                Frame::Command(word)
            };
            state.events.push(Event::Frame(frame));
        }
        Ok(())
    }

    fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> {
        Err(ErrorKind::Other)
    }

    fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
        Err(ErrorKind::Other)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// A fake delay
pub struct FakeDelay(Recorder);

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0 .0.borrow_mut().events.push(Event::Delay(ns / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0 .0.borrow_mut().events.push(Event::Delay(ms));
    }
}
