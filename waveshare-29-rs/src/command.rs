// Copyright Claudio Mattera 2024.
//
// Distributed under the MIT License or the Apache 2.0 License at your option.
// See the accompanying files License-MIT.txt and License-Apache-2.0.txt, or
// online at
// https://opensource.org/licenses/MIT
// https://opensource.org/licenses/Apache-2.0

//! Commands

/// Command for driver output control
pub const DRIVER_OUTPUT_CONTROL: u8 = 0x01;

/// Command for booster soft start control
pub const BOOSTER_SOFT_START_CONTROL: u8 = 0x0C;

/// Command for deep sleep mode
pub const DEEP_SLEEP_MODE: u8 = 0x10;

/// Command for data entry mode
pub const DATA_ENTRY_MODE: u8 = 0x11;

/// Command for master activation
pub const MASTER_ACTIVATION: u8 = 0x20;

/// Command for display update control 2
pub const DISPLAY_UPDATE_CONTROL_2: u8 = 0x22;

/// Command for write RAM
pub const WRITE_RAM: u8 = 0x24;

/// Command for write VCOM register
pub const WRITE_VCOM_REGISTER: u8 = 0x2C;

/// Command for write LUT register
pub const WRITE_LUT_REGISTER: u8 = 0x32;

/// Command for setting dummy line period
pub const SET_DUMMY_LINE_PERIOD: u8 = 0x3A;

/// Command for setting gate line width
pub const SET_GATE_TIME: u8 = 0x3B;

/// Command for setting RAM X address start and end position
pub const SET_RAM_X_ADDRESS_START_END_POSITION: u8 = 0x44;

/// Command for setting RAM Y address start and end position
pub const SET_RAM_Y_ADDRESS_START_END_POSITION: u8 = 0x45;

/// Command for setting RAM X address counter
pub const SET_RAM_X_ADDRESS_COUNTER: u8 = 0x4E;

/// Command for setting RAM Y address counter
pub const SET_RAM_Y_ADDRESS_COUNTER: u8 = 0x4F;

/// Command for terminating a frame read or write (NOP)
pub const TERMINATE_FRAME_READ_WRITE: u8 = 0xFF;
