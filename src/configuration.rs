//! Sensitivity settings and the register writes that apply them.
use crate::register::{
    CONTROL, CONTROL_ENABLE, CONTROL_RESET, GAIN_BLOCK, GAIN_LIMIT, MODE, MODE_EXTENDED,
    SENSITIVITY_BLOCK, SENSITIVITY_PREAMBLE,
};

/// Longest single write issued while configuring, register address included.
pub const MAX_STEP_LEN: usize = 8;

/// The four sensitivity bytes of the camera.
///
/// * `p0` - maximum blob size, register 0x06
/// * `p1` - gain, register 0x08
/// * `p2` - gain limit, register 0x1A
/// * `p3` - minimum blob size, register 0x1B
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sensitivity([u8; 4]);

impl Sensitivity {
    pub const fn new(p0: u8, p1: u8, p2: u8, p3: u8) -> Self {
        Self([p0, p1, p2, p3])
    }

    /// Returns the parameter at `index`, or `None` outside `0..4`.
    pub fn get(&self, index: usize) -> Option<u8> {
        self.0.get(index).copied()
    }

    /// Returns a copy of the parameters.
    pub const fn to_array(self) -> [u8; 4] {
        self.0
    }

    /// The writes that program these parameters, in the order the camera needs them.
    pub fn write_sequence(&self) -> [ConfigStep; 6] {
        let [p0, p1, p2, p3] = self.0;
        let mut block = [0u8; MAX_STEP_LEN];
        block[0] = SENSITIVITY_BLOCK;
        block[1..7].copy_from_slice(&SENSITIVITY_PREAMBLE);
        block[7] = p0;

        [
            ConfigStep::new(&[CONTROL, CONTROL_RESET], 1),
            ConfigStep::new(&block, 1),
            ConfigStep::new(&[GAIN_BLOCK, 0x00, p1], 1),
            ConfigStep::new(&[GAIN_LIMIT, p2, p3], 1),
            ConfigStep::new(&[MODE, MODE_EXTENDED], 1),
            ConfigStep::new(&[CONTROL, CONTROL_ENABLE], 6),
        ]
    }
}

impl From<[u8; 4]> for Sensitivity {
    fn from(params: [u8; 4]) -> Self {
        Self(params)
    }
}

impl From<Sensitivity> for [u8; 4] {
    fn from(sensitivity: Sensitivity) -> Self {
        sensitivity.0
    }
}

/// One bus write followed by the time the camera needs to latch it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConfigStep {
    buf: [u8; MAX_STEP_LEN],
    len: usize,
    /// Settling time after the write, in milliseconds.
    pub settle_ms: u32,
}

impl ConfigStep {
    fn new(bytes: &[u8], settle_ms: u32) -> Self {
        let mut buf = [0u8; MAX_STEP_LEN];
        buf[..bytes.len()].copy_from_slice(bytes);
        Self {
            buf,
            len: bytes.len(),
            settle_ms,
        }
    }

    /// Bytes of the write, register address first.
    pub fn bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}
