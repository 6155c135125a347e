//! Register map of the PixArt camera.
//!
//! The camera exposes a small, write-only register file. Writes are a
//! register address followed by one or more data bytes; consecutive data
//! bytes land in consecutive registers.

/// Documented 8-bit bus address of the camera (write form).
pub const SENSOR_ADDRESS: u8 = 0xB0;
/// 7-bit address handed to the bus, the R/W bit is appended by the transport.
pub const DEVICE_ADDRESS: u8 = SENSOR_ADDRESS >> 1;

/// Control register.
pub const CONTROL: u8 = 0x30;
/// Sensitivity block 1, registers 0x00 to 0x06.
pub const SENSITIVITY_BLOCK: u8 = 0x00;
/// Maximum blob size.
pub const MAX_BLOB_SIZE: u8 = 0x06;
/// Start of the gain pair, 0x07 and 0x08.
pub const GAIN_BLOCK: u8 = 0x07;
/// Gain.
pub const GAIN: u8 = 0x08;
/// Gain limit and minimum blob size, 0x1A and 0x1B.
pub const GAIN_LIMIT: u8 = 0x1A;
/// Report mode.
pub const MODE: u8 = 0x33;
/// Writing this address alone requests a report packet.
pub const REPORT: u8 = 0x36;

/// `CONTROL` value that puts the camera in configuration mode.
pub const CONTROL_RESET: u8 = 0x01;
/// `CONTROL` value that starts the camera.
pub const CONTROL_ENABLE: u8 = 0x08;

/// `MODE` value for extended reports (3 bytes per blob).
pub const MODE_EXTENDED: u8 = 0x03;

/// Fixed prefix of sensitivity block 1 (registers 0x00 to 0x05).
pub const SENSITIVITY_PREAMBLE: [u8; 6] = [0x02, 0x00, 0x00, 0x71, 0x01, 0x00];

/// Default bring-up in extended mode, issued back to back without delays.
pub const INIT_SEQUENCE: [[u8; 2]; 7] = [
    [CONTROL, CONTROL_RESET],
    [CONTROL, CONTROL_ENABLE],
    [MAX_BLOB_SIZE, 0x90],
    [GAIN, 0xC0],
    [GAIN_LIMIT, 0x40],
    // the camera wants the mode register written twice
    [MODE, 0x33],
    [MODE, MODE_EXTENDED],
];
