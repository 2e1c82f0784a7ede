// Copyright Claudio Mattera 2024-2025.
//
// Distributed under the MIT License or the Apache 2.0 License at your option.
// See the accompanying files LICENSE-MIT.txt and LICENSE-APACHE-2.0.txt, or
// online at
// https://opensource.org/licenses/MIT
// https://opensource.org/licenses/Apache-2.0

//! Blocking display

use log::debug;
use log::error;
use log::log_enabled;
use log::trace;
use log::warn;
use log::Level::Trace;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::command;
use crate::Error;
use crate::Extent;
use crate::Image;
use crate::Panel;
use crate::Rgba;
use crate::Uniform;
use crate::UpdateMode;

/// Interval between two reads of the busy pin
const BUSY_POLL_INTERVAL_MS: u32 = 200;

/// Duration of the reset pulse phases
const RESET_HIGH_MS: u32 = 200;

/// Duration of the low phase of the reset pulse
const RESET_LOW_MS: u32 = 10;

/// Data entry mode: X and Y increment, X updated first
const DATA_ENTRY_INCREMENT_XY: u8 = 0x03;

/// Display update sequence: enable clock and analog, display, disable
const DISPLAY_UPDATE_SEQUENCE: u8 = 0xC4;

/// A Waveshare 2.9 inches E-ink screen
///
/// The display must be configured with [`Display::set_mode`] before drawing
/// anything.
/// All operations block until complete, and waiting for the busy line has
/// no upper bound.
pub struct Display<SPI, BUSY, RST, DC, CS, DELAY> {
    /// Panel geometry
    panel: Panel,

    /// SPI bus
    spi: SPI,

    /// Busy pin
    busy: BUSY,

    /// Reset pin
    rst: RST,

    /// DC pin
    dc: DC,

    /// CS pin
    cs: CS,

    /// Delay
    delay: DELAY,

    /// Current update mode
    mode: Option<UpdateMode>,
}

impl<SPI, BUSY, RST, DC, CS, DELAY> Display<SPI, BUSY, RST, DC, CS, DELAY>
where
    SPI: SpiBus,
    BUSY: InputPin,
    RST: OutputPin,
    DC: OutputPin,
    CS: OutputPin,
    DELAY: DelayNs,
{
    /// Create a new 2.9 inches display
    #[must_use]
    pub fn new(spi: SPI, busy: BUSY, rst: RST, dc: DC, cs: CS, delay: DELAY) -> Self {
        Self::with_panel(Panel::EPD_2IN9, spi, busy, rst, dc, cs, delay)
    }

    /// Create a new display with a custom panel geometry
    #[must_use]
    pub fn with_panel(
        panel: Panel,
        spi: SPI,
        busy: BUSY,
        rst: RST,
        dc: DC,
        cs: CS,
        delay: DELAY,
    ) -> Self {
        Self {
            panel,
            spi,
            busy,
            rst,
            dc,
            cs,
            delay,
            mode: None,
        }
    }

    /// Get the panel geometry
    #[must_use]
    pub fn panel(&self) -> Panel {
        self.panel
    }

    /// Get the panel width in pixels
    #[must_use]
    pub fn width(&self) -> u16 {
        self.panel.width()
    }

    /// Get the panel height in pixels
    #[must_use]
    pub fn height(&self) -> u16 {
        self.panel.height()
    }

    /// Get the configured update mode
    ///
    /// Returns `None` before the display is configured, and after it is put
    /// to sleep.
    #[must_use]
    pub fn mode(&self) -> Option<UpdateMode> {
        self.mode
    }

    /// Reset and configure the display for an update mode
    ///
    /// This is the only way to wake the display up after [`Display::sleep`].
    ///
    /// # Errors
    ///
    /// Returns an error if any commands to the display fails
    pub fn set_mode(&mut self, mode: UpdateMode) -> Result<(), Error> {
        debug!("Set mode {mode:?}");

        self.hardware_reset()?;
        self.set_driver_output_control()?;
        self.set_booster_soft_start_control()?;
        self.write_vcom_register()?;
        self.set_dummy_line_period()?;
        self.set_gate_time()?;
        self.set_data_entry_mode()?;
        self.write_lookup_table(mode)?;

        self.mode = Some(mode);
        debug!("Set mode {mode:?} / Done");

        Ok(())
    }

    /// Draw an image on the display
    ///
    /// The image must be either uniform, or exactly as large as the panel.
    /// Pixels are classified as black or white according to [`crate::is_dark`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidImageSize`] if the image has the wrong size,
    /// without sending anything to the display.
    /// Returns an error if any commands to the display fails
    pub fn draw<I>(&mut self, image: &I) -> Result<(), Error>
    where
        I: Image + ?Sized,
    {
        debug!("Draw image");

        match image.extent() {
            Extent::Uniform => {}
            Extent::Sized { width, height }
                if width == u32::from(self.width()) && height == u32::from(self.height()) => {}
            Extent::Sized { width, height } => {
                warn!(
                    "Image size {width}×{height} does not match panel size {}×{}",
                    self.width(),
                    self.height()
                );
                return Err(Error::InvalidImageSize);
            }
        }

        if self.mode.is_none() {
            warn!("Drawing on a display that was not configured");
        }

        self.set_window(0, self.width() - 1, 0, self.height() - 1)?;
        for y in 0..self.height() {
            if log_enabled!(Trace) {
                trace!("Write row {y}");
            }
            self.set_cursor(0, y)?;
            self.send_command(command::WRITE_RAM)?;
            for column in 0..self.panel.byte_width() {
                let byte = pack_byte(image, u32::from(column) * 8, u32::from(y));
                self.send_data(byte)?;
            }
        }

        self.turn_on_display()?;
        debug!("Draw image / Done");

        Ok(())
    }

    /// Paint the whole display with a color
    ///
    /// Opaque white paints the display white, any other color paints it
    /// black.
    /// Errors are logged and otherwise ignored.
    pub fn clear(&mut self, color: Rgba) {
        debug!("Clear display");

        let image = if color == Rgba::WHITE {
            Uniform::WHITE
        } else {
            Uniform::BLACK
        };

        if let Err(error) = self.draw(&image) {
            error!("Cannot clear display: {error:?}");
        }

        debug!("Clear display / Done");
    }

    /// Put the display in deep sleep
    ///
    /// The display does not answer on the busy line anymore, and must be
    /// configured again with [`Display::set_mode`] before drawing.
    ///
    /// # Errors
    ///
    /// Returns an error if any commands to the display fails
    pub fn sleep(&mut self) -> Result<(), Error> {
        debug!("Enter deep sleep");
        self.send_command(command::DEEP_SLEEP_MODE)?;
        self.send_data(0x01)?;

        self.mode = None;
        debug!("Enter deep sleep / Done");

        Ok(())
    }

    /// Release display and return inner hardware
    ///
    /// The display is left in its current state.
    pub fn release(self) -> (SPI, BUSY, RST, DC, CS, DELAY) {
        debug!("Release display");
        (self.spi, self.busy, self.rst, self.dc, self.cs, self.delay)
    }

    /// Wait while the display is busy
    ///
    /// The busy pin is read every 200 ms, for as long as it stays high.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the busy pin fails.
    pub fn wait_until_idle(&mut self) -> Result<(), Error> {
        while self.busy.is_high().map_err(Error::from_digital)? {
            trace!("Display is busy");
            self.delay.delay_ms(BUSY_POLL_INTERVAL_MS);
        }
        Ok(())
    }

    /// Set driver output control
    ///
    /// # Errors
    ///
    /// Returns an error if any commands to the display fails
    fn set_driver_output_control(&mut self) -> Result<(), Error> {
        let [rows_0, rows_1] = (self.height() - 1).to_le_bytes();

        self.send_command(command::DRIVER_OUTPUT_CONTROL)?;
        self.send_data(rows_0)?;
        self.send_data(rows_1)?;
        self.send_data(0x00)?;

        Ok(())
    }

    /// Set booster soft start control
    ///
    /// # Errors
    ///
    /// Returns an error if any commands to the display fails
    fn set_booster_soft_start_control(&mut self) -> Result<(), Error> {
        self.send_command(command::BOOSTER_SOFT_START_CONTROL)?;
        self.send_data(0xD7)?;
        self.send_data(0xD6)?;
        self.send_data(0x9D)?;

        Ok(())
    }

    /// Write VCOM register
    ///
    /// # Errors
    ///
    /// Returns an error if any commands to the display fails
    fn write_vcom_register(&mut self) -> Result<(), Error> {
        self.send_command(command::WRITE_VCOM_REGISTER)?;
        self.send_data(0xA8)?;

        Ok(())
    }

    /// Set dummy line period
    ///
    /// # Errors
    ///
    /// Returns an error if any commands to the display fails
    fn set_dummy_line_period(&mut self) -> Result<(), Error> {
        self.send_command(command::SET_DUMMY_LINE_PERIOD)?;
        self.send_data(0x1A)?;

        Ok(())
    }

    /// Set gate time
    ///
    /// # Errors
    ///
    /// Returns an error if any commands to the display fails
    fn set_gate_time(&mut self) -> Result<(), Error> {
        self.send_command(command::SET_GATE_TIME)?;
        self.send_data(0x08)?;

        Ok(())
    }

    /// Set data entry mode
    ///
    /// # Errors
    ///
    /// Returns an error if any commands to the display fails
    fn set_data_entry_mode(&mut self) -> Result<(), Error> {
        self.send_command(command::DATA_ENTRY_MODE)?;
        self.send_data(DATA_ENTRY_INCREMENT_XY)?;

        Ok(())
    }

    /// Write the waveform lookup table for an update mode
    ///
    /// # Errors
    ///
    /// Returns an error if any commands to the display fails
    fn write_lookup_table(&mut self, mode: UpdateMode) -> Result<(), Error> {
        self.send_command(command::WRITE_LUT_REGISTER)?;
        for &byte in mode.lookup_table() {
            self.send_data(byte)?;
        }

        Ok(())
    }

    /// Set the RAM window
    ///
    /// X coordinates are in pixels and are sent as byte columns.
    ///
    /// # Errors
    ///
    /// Returns an error if any commands to the display fails
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn set_window(&mut self, x0: u16, x1: u16, y0: u16, y1: u16) -> Result<(), Error> {
        self.send_command(command::SET_RAM_X_ADDRESS_START_END_POSITION)?;
        self.send_data((x0 >> 3) as u8)?;
        self.send_data((x1 >> 3) as u8)?;

        let [y0_0, y0_1] = y0.to_le_bytes();
        let [y1_0, y1_1] = y1.to_le_bytes();

        self.send_command(command::SET_RAM_Y_ADDRESS_START_END_POSITION)?;
        self.send_data(y0_0)?;
        self.send_data(y0_1)?;
        self.send_data(y1_0)?;
        self.send_data(y1_1)?;

        Ok(())
    }

    /// Set the RAM address counters and wait for the display to latch them
    ///
    /// # Errors
    ///
    /// Returns an error if any commands to the display fails
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn set_cursor(&mut self, x: u16, y: u16) -> Result<(), Error> {
        self.send_command(command::SET_RAM_X_ADDRESS_COUNTER)?;
        self.send_data((x >> 3) as u8)?;

        let [y_0, y_1] = y.to_le_bytes();

        self.send_command(command::SET_RAM_Y_ADDRESS_COUNTER)?;
        self.send_data(y_0)?;
        self.send_data(y_1)?;

        self.wait_until_idle()
    }

    /// Show the content of the RAM on the display
    ///
    /// # Errors
    ///
    /// Returns an error if any commands to the display fails
    fn turn_on_display(&mut self) -> Result<(), Error> {
        debug!("Refresh display");
        self.send_command(command::DISPLAY_UPDATE_CONTROL_2)?;
        self.send_data(DISPLAY_UPDATE_SEQUENCE)?;

        self.send_command(command::MASTER_ACTIVATION)?;
        self.send_command(command::TERMINATE_FRAME_READ_WRITE)?;

        self.wait_until_idle()?;

        debug!("Refresh display / Done");

        Ok(())
    }

    /// Send command over SPI bus
    ///
    /// # Errors
    ///
    /// Returns an error if writing to SPI bus fails.
    fn send_command(&mut self, command: u8) -> Result<(), Error> {
        self.dc.set_low().map_err(Error::from_digital)?;

        self.write(command)
    }

    /// Send data over SPI bus
    ///
    /// # Errors
    ///
    /// Returns an error if writing to SPI bus fails.
    fn send_data(&mut self, data: u8) -> Result<(), Error> {
        self.dc.set_high().map_err(Error::from_digital)?;

        self.write(data)
    }

    /// Write a byte to SPI bus, framed by chip-select
    ///
    /// # Errors
    ///
    /// Returns an error if writing to SPI bus fails.
    fn write(&mut self, byte: u8) -> Result<(), Error> {
        self.cs.set_low().map_err(Error::from_digital)?;
        self.spi.write(&[byte])?;
        self.spi.flush()?;
        self.cs.set_high().map_err(Error::from_digital)?;

        Ok(())
    }

    /// Reset the display
    ///
    /// # Errors
    ///
    /// Returns an error if setting any pin fails.
    fn hardware_reset(&mut self) -> Result<(), Error> {
        debug!("Hardware reset");
        trace!("Set RST high");
        self.rst.set_high().map_err(Error::from_digital)?;
        self.delay.delay_ms(RESET_HIGH_MS);

        trace!("Set RST low");
        self.rst.set_low().map_err(Error::from_digital)?;
        self.delay.delay_ms(RESET_LOW_MS);

        trace!("Set RST high");
        self.rst.set_high().map_err(Error::from_digital)?;
        self.delay.delay_ms(RESET_HIGH_MS);
        debug!("Hardware reset / Done");

        Ok(())
    }
}

/// Pack 8 horizontal pixels in a byte, most significant bit first
///
/// Bits of dark pixels are cleared, bits of light pixels are set.
fn pack_byte<I>(image: &I, x: u32, y: u32) -> u8
where
    I: Image + ?Sized,
{
    (0..8).fold(0xff, |byte, offset| {
        if image.pixel(x + offset, y).is_dark() {
            byte & !(0b1000_0000 >> offset)
        } else {
            byte
        }
    })
}
