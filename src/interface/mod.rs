//! Interface trait
pub mod i2c;

pub use self::i2c::I2cInterface;

/// Interface Trait. `I2cInterface` implements this.
pub trait Interface {
    type Error;

    /// Writes bytes to the camera in a single transaction.
    /// # Arguments
    /// * `bytes` - register address followed by the data to write
    async fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
    /// Reads up to `buffer.len()` bytes from the camera.
    /// Returns how many bytes were received, which may be fewer than requested.
    /// # Arguments
    /// * `buffer` - buffer to store read data
    async fn read(&mut self, buffer: &mut [u8]) -> Result<usize, Self::Error>;
}
