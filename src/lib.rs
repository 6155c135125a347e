//! A platform agnostic driver to interface with the PixArt IR camera found in the Wii remote.
//!
//! The camera tracks up to four infrared blobs and reports their positions over I2C.
//! Coordinates are 10 bits: X from 0 to 1023, Y from 0 to 767.
//!
//! ### References
//! - [Wiibrew: IR camera](http://wiibrew.org/wiki/Wiimote#IR_Camera)
#![allow(async_fn_in_trait)]
#![no_std]
pub mod blob;
pub mod configuration;
pub mod interface;
pub mod packet;
pub mod register;

use embedded_hal_async::delay::DelayNs;

pub use blob::{ActiveBlobs, Blob, Frame};
pub use configuration::Sensitivity;

use crate::interface::Interface;
use crate::packet::PACKET_LEN;

/// PixArt driver errors
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Bus communication error
    Bus(E),
    /// Blob slot or sensitivity index outside `0..4`
    IndexOutOfRange(usize),
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Error::Bus(error)
    }
}

/// PixArt IR camera
pub struct PixArt<T, D>
where
    T: Interface,
    D: DelayNs,
{
    interface: T,
    delay: D,
    sensitivity: Sensitivity,
    frame: Frame,
}

impl<T, D> PixArt<T, D>
where
    T: Interface,
    D: DelayNs,
{
    /// Constructs a new driver instance.
    ///
    /// # Arguments
    /// * `interface` - `I2cInterface` or another `Interface`
    /// * `delay` - used to let the camera settle while sensitivity is written
    pub fn new(interface: T, delay: D) -> Self {
        Self {
            interface,
            delay,
            sensitivity: Sensitivity::default(),
            frame: Frame::EMPTY,
        }
    }

    /// Gives back the interface and the delay.
    pub fn release(self) -> (T, D) {
        (self.interface, self.delay)
    }

    /// Initializes the camera in extended mode with the default sensitivity.
    ///
    /// The cached sensitivity is left untouched.
    pub async fn init(&mut self) -> Result<(), Error<T::Error>> {
        for command in register::INIT_SEQUENCE.iter() {
            self.interface.write(command).await?;
        }
        #[cfg(feature = "defmt")]
        defmt::debug!("PixArt initialized in extended mode");
        Ok(())
    }

    /// Writes sensitivity settings and restarts the camera in extended mode.
    ///
    /// The settings are cached only once every write went through.
    pub async fn set_sensitivity(&mut self, sensitivity: Sensitivity) -> Result<(), Error<T::Error>> {
        for step in sensitivity.write_sequence().iter() {
            self.interface.write(step.bytes()).await?;
            self.delay.delay_ms(step.settle_ms).await;
        }
        self.sensitivity = sensitivity;
        #[cfg(feature = "defmt")]
        defmt::debug!("PixArt sensitivity set to {}", sensitivity);
        Ok(())
    }

    /// Same as `set_sensitivity` with the parameters spelled out.
    pub async fn set_sensitivity_params(
        &mut self,
        p0: u8,
        p1: u8,
        p2: u8,
        p3: u8,
    ) -> Result<(), Error<T::Error>> {
        self.set_sensitivity(Sensitivity::new(p0, p1, p2, p3)).await
    }

    /// Last sensitivity successfully written.
    pub fn sensitivity(&self) -> Sensitivity {
        self.sensitivity
    }

    /// One parameter of the last sensitivity successfully written.
    pub fn sensitivity_param(&self, index: usize) -> Result<u8, Error<T::Error>> {
        self.sensitivity
            .get(index)
            .ok_or(Error::IndexOutOfRange(index))
    }

    /// Requests a report and decodes it. Returns the active blob mask.
    ///
    /// A short read is padded with zeros. On a bus error the blobs are
    /// cleared before the error is returned.
    pub async fn read(&mut self) -> Result<ActiveBlobs, Error<T::Error>> {
        match self.read_packet().await {
            Ok(packet) => {
                self.frame = packet::decode(&packet);
                #[cfg(feature = "defmt")]
                defmt::trace!("PixArt active blobs: {=u8:#b}", self.frame.active.bits());
                Ok(self.frame.active)
            }
            Err(e) => {
                self.frame = Frame::EMPTY;
                Err(Error::Bus(e))
            }
        }
    }

    async fn read_packet(&mut self) -> Result<[u8; PACKET_LEN], T::Error> {
        let mut packet = [0u8; PACKET_LEN];
        self.interface.write(&[register::REPORT]).await?;
        let received = self.interface.read(&mut packet).await?;
        if received < PACKET_LEN {
            #[cfg(feature = "defmt")]
            defmt::warn!("PixArt short read: {} of {} bytes", received, PACKET_LEN);
            // drop anything the transport left past `received`
            packet[received..].fill(0);
        }
        Ok(packet)
    }

    /// Active blob mask of the last report.
    pub fn active_blobs(&self) -> ActiveBlobs {
        self.frame.active
    }

    /// Last decoded report.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn blob(&self, slot: usize) -> Result<Blob, Error<T::Error>> {
        self.frame.blob(slot).ok_or(Error::IndexOutOfRange(slot))
    }

    /// X coordinate of a blob slot
    pub fn blob_x(&self, slot: usize) -> Result<u16, Error<T::Error>> {
        Ok(self.blob(slot)?.x)
    }

    /// Y coordinate of a blob slot
    pub fn blob_y(&self, slot: usize) -> Result<u16, Error<T::Error>> {
        Ok(self.blob(slot)?.y)
    }
}
