//! Register transport: the narrow bus capability the driver needs.
//!
//! The BMP280 talks the same register protocol over I2C and SPI, only the
//! framing differs. `RegisterTransport` hides that difference so calibration
//! loading and compensation are written once and shared by every binding.

use embedded_hal::i2c::I2c;
use embedded_hal::spi::{Operation, SpiDevice};
use log::debug;

use crate::constants::{BMP280_SPI_READ, BMP280_SPI_WRITE_MASK};

/// Byte-level register access to a BMP280.
///
/// Implementors provide a burst read starting at a register and a single
/// byte write; the fixed-width reads are built on top of the burst read.
/// Errors are passed to the caller unchanged, nothing here retries.
pub trait RegisterTransport {
    type Error;

    /// read `buffer.len()` consecutive registers starting at `register`
    fn read_registers(&mut self, register: u8, buffer: &mut [u8]) -> Result<(), Self::Error>;

    /// write one register
    fn write_byte(&mut self, register: u8, value: u8) -> Result<(), Self::Error>;

    /// read one register
    fn read_byte(&mut self, register: u8) -> Result<u8, Self::Error> {
        let mut result_buf: [u8; 1] = [0; 1];
        self.read_registers(register, &mut result_buf)?;
        Ok(result_buf[0])
    }

    /// read a little endian 16 bit word (calibration registers)
    fn read_u16_le(&mut self, register: u8) -> Result<u16, Self::Error> {
        let mut result_buf: [u8; 2] = [0; 2];
        self.read_registers(register, &mut result_buf)?;
        Ok(u16::from_le_bytes(result_buf))
    }

    /// read a big endian 24 bit value (measurement registers), msb first
    fn read_u24_be(&mut self, register: u8) -> Result<u32, Self::Error> {
        let mut result_buf: [u8; 3] = [0; 3];
        self.read_registers(register, &mut result_buf)?;
        Ok(u32::from_be_bytes([0, result_buf[0], result_buf[1], result_buf[2]]))
    }
}

/// BMP280 on an I2C bus
pub struct I2cTransport<I2C> {
    /// I²C interface
    i2c: I2C,
    /// I²C device address
    address: u8,
}

impl<I2C: I2c> I2cTransport<I2C> {
    /// `address` is 0x76 (SDO low) or 0x77 (SDO high), see `constants::DeviceAddress`
    pub fn new(i2c: I2C, address: u8) -> Self {
        debug!("new I2cTransport at {:#04x}", address);
        Self { i2c, address }
    }

    /// give back the I2C interface
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> RegisterTransport for I2cTransport<I2C> {
    type Error = I2C::Error;

    fn read_registers(&mut self, register: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c.write_read(self.address, &[register], buffer)
    }

    fn write_byte(&mut self, register: u8, value: u8) -> Result<(), Self::Error> {
        self.i2c.write(self.address, &[register, value])
    }
}

/// BMP280 on a 4-wire SPI bus, chip select is handled by the `SpiDevice`
pub struct SpiTransport<SPI> {
    spi: SPI,
}

impl<SPI: SpiDevice> SpiTransport<SPI> {
    pub fn new(spi: SPI) -> Self {
        debug!("new SpiTransport");
        Self { spi }
    }

    /// give back the SPI device
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI: SpiDevice> RegisterTransport for SpiTransport<SPI> {
    type Error = SPI::Error;

    fn read_registers(&mut self, register: u8, buffer: &mut [u8]) -> Result<(), Self::Error> {
        // address auto-increments for as long as chip select stays low
        let command_buffer: [u8; 1] = [register | BMP280_SPI_READ];
        self.spi
            .transaction(&mut [Operation::Write(&command_buffer), Operation::Read(buffer)])
    }

    fn write_byte(&mut self, register: u8, value: u8) -> Result<(), Self::Error> {
        self.spi.write(&[register & BMP280_SPI_WRITE_MASK, value])
    }
}
