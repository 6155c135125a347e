//! I2C Interface
use super::Interface;
use crate::register::DEVICE_ADDRESS;
use embedded_hal_async::i2c::I2c;

/// I2C bus with the camera's address
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C, CommE> I2cInterface<I2C>
where
    I2C: I2c<Error = CommE>,
{
    /// Initializes an Interface with `I2C` instance at the camera's fixed address (0x58)
    /// # Arguments
    /// * `i2c` - I2C instance
    pub fn init(i2c: I2C) -> Self {
        Self::with_address(i2c, DEVICE_ADDRESS)
    }

    /// Initializes an Interface with `I2C` instance at another 7-bit address
    /// # Arguments
    /// * `i2c` - I2C instance
    /// * `address` - 7-bit address of the camera
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Gives back the I2C instance
    pub fn release(self) -> I2C {
        self.i2c
    }
}

/// Implementation of `Interface`
impl<I2C, CommE> Interface for I2cInterface<I2C>
where
    I2C: I2c<Error = CommE>,
{
    type Error = CommE;

    async fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.i2c.write(self.address, bytes).await
    }

    async fn read(&mut self, buffer: &mut [u8]) -> Result<usize, Self::Error> {
        self.i2c.read(self.address, buffer).await?;
        Ok(buffer.len())
    }
}
