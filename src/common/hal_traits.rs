// src/common/hal_traits.rs

use core::fmt::Debug;

/// Abstraction for the register-addressed bus primitives the driver needs.
///
/// These map onto the SMBus "byte data" and "word data" transfers. Calls are
/// synchronous and block until the transfer completes or fails; a bus that can
/// hang should enforce its own timeout and report it through `Self::Error`.
pub trait BusTransport {
    /// Associated error type for bus failures.
    type Error: Debug;

    /// Reads a single register byte from the device at `address`.
    fn read_byte_data(&mut self, address: u8, reg: u8) -> Result<u8, Self::Error>;

    /// Writes a single register byte to the device at `address`.
    fn write_byte_data(&mut self, address: u8, reg: u8, value: u8) -> Result<(), Self::Error>;

    /// Reads the register pair starting at `reg` as a 16-bit word.
    ///
    /// SMBus words are little-endian on the wire, while the MPU6050 sends the
    /// high byte first. Implementations must return the word with the first
    /// received byte in the high half.
    fn read_word_swapped(&mut self, address: u8, reg: u8) -> Result<u16, Self::Error>;
}

/// Lets a caller lend its bus to the driver and keep ownership.
impl<T: BusTransport + ?Sized> BusTransport for &mut T {
    type Error = T::Error;

    fn read_byte_data(&mut self, address: u8, reg: u8) -> Result<u8, Self::Error> {
        (**self).read_byte_data(address, reg)
    }

    fn write_byte_data(&mut self, address: u8, reg: u8, value: u8) -> Result<(), Self::Error> {
        (**self).write_byte_data(address, reg, value)
    }

    fn read_word_swapped(&mut self, address: u8, reg: u8) -> Result<u16, Self::Error> {
        (**self).read_word_swapped(address, reg)
    }
}

/// Adapts any `embedded_hal::i2c::I2c` bus to `BusTransport`.
///
/// Register reads are issued as a write of the register number followed by a
/// repeated-start read, register writes as a single two-byte write.
#[cfg(feature = "impl-generic-hal")]
#[derive(Debug)]
pub struct HalBus<I2C> {
    i2c: I2C,
}

#[cfg(feature = "impl-generic-hal")]
impl<I2C> HalBus<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    pub fn new(i2c: I2C) -> Self {
        HalBus { i2c }
    }

    pub fn i2c(&mut self) -> &mut I2C {
        &mut self.i2c
    }

    pub fn destroy(self) -> I2C {
        self.i2c
    }
}

#[cfg(feature = "impl-generic-hal")]
impl<I2C> BusTransport for HalBus<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    type Error = I2C::Error;

    fn read_byte_data(&mut self, address: u8, reg: u8) -> Result<u8, Self::Error> {
        let mut buf = [0u8];
        self.i2c.write_read(address, &[reg], &mut buf)?;
        Ok(buf[0])
    }

    fn write_byte_data(&mut self, address: u8, reg: u8, value: u8) -> Result<(), Self::Error> {
        self.i2c.write(address, &[reg, value])
    }

    fn read_word_swapped(&mut self, address: u8, reg: u8) -> Result<u16, Self::Error> {
        let mut buf = [0u8; 2];
        self.i2c.write_read(address, &[reg], &mut buf)?;
        Ok(u16::from_be_bytes(buf))
    }
}
