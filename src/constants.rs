// BMP280 registers

#![allow(nonstandard_style)]
pub const BMP280_REG_CALIB_DATA: u8 = 0x88;  // 24 bytes at 0x88 - 0x9f, dig_T1..dig_P9, little endian words
pub const BMP280_REG_DIG_T1: u8 = 0x88;  // unsigned
pub const BMP280_REG_DIG_T2: u8 = 0x8a;
pub const BMP280_REG_DIG_T3: u8 = 0x8c;
pub const BMP280_REG_DIG_P1: u8 = 0x8e;  // unsigned
pub const BMP280_REG_DIG_P2: u8 = 0x90;
pub const BMP280_REG_DIG_P3: u8 = 0x92;
pub const BMP280_REG_DIG_P4: u8 = 0x94;
pub const BMP280_REG_DIG_P5: u8 = 0x96;
pub const BMP280_REG_DIG_P6: u8 = 0x98;
pub const BMP280_REG_DIG_P7: u8 = 0x9a;
pub const BMP280_REG_DIG_P8: u8 = 0x9c;
pub const BMP280_REG_DIG_P9: u8 = 0x9e;
pub const BMP280_REG_CHIP_ID: u8 = 0xd0;  // Chip ID, expect value 0x58
pub const BMP280_REG_SOFT_RESET: u8 = 0xe0;
pub const BMP280_REG_STATUS: u8 = 0xf3;  // measuring and im_update bits
pub const BMP280_REG_CTRL_MEAS: u8 = 0xf4;  // osrs_t, osrs_p, mode
pub const BMP280_REG_CONFIG: u8 = 0xf5;  // t_sb, filter, spi3w_en
pub const BMP280_REG_PRESS_DATA: u8 = 0xf7;  // 3 bytes at 0xf7 - 0xf9, 20 bit pressure, big endian, low nibble unused
pub const BMP280_REG_TEMP_DATA: u8 = 0xfa;  // 3 bytes at 0xfa - 0xfc, 20 bit temperature, big endian, low nibble unused

pub const BMP280_SOFT_RESET: u8 = 0xb6;  // written to BMP280_REG_SOFT_RESET, full power-on-reset
pub const BMP280_MODE_NORMAL: u8 = 0x03;  // CTRL_MEAS mode bits, the driver only uses normal mode
pub const BMP280_CHIP_ID: u8 = 0x58;  // mass production parts, samples report 0x56 or 0x57

pub const BMP280_STARTUP_MS: u32 = 5;  // datasheet start-up time is 2 ms

// SPI: bit 7 of the register byte selects read (1) or write (0)
pub const BMP280_SPI_READ: u8 = 0x80;
pub const BMP280_SPI_WRITE_MASK: u8 = 0x7f;


#[repr(u8)]
/// BMP280 I2C device address, selected by the SDO pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceAddress {
    /// SDO connected to GND
    #[default]
    Primary = 0x76,
    /// SDO connected to VDDIO
    Secondary = 0x77,
}

impl From<DeviceAddress> for u8 {
    fn from(value: DeviceAddress) -> Self {
        value as u8
    }
}
