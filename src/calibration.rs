//! Factory calibration coefficients.
//!
//! Every BMP280 is trimmed at the factory and stores 12 coefficients in
//! non-volatile registers 0x88–0x9F (Bosch BMP280 datasheet, section 3.11.2,
//! table 17). They are read once by `Bmp280::begin()` and never written.

use log::debug;

use crate::constants::{
    BMP280_REG_DIG_P1, BMP280_REG_DIG_P2, BMP280_REG_DIG_P3, BMP280_REG_DIG_P4, BMP280_REG_DIG_P5,
    BMP280_REG_DIG_P6, BMP280_REG_DIG_P7, BMP280_REG_DIG_P8, BMP280_REG_DIG_P9, BMP280_REG_DIG_T1,
    BMP280_REG_DIG_T2, BMP280_REG_DIG_T3,
};
use crate::transport::RegisterTransport;

/// dig_T1..dig_P9 as stored in the device, no scaling applied
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct CalibrationCoefficients {
    pub dig_t1: u16,
    pub dig_t2: i16,
    pub dig_t3: i16,

    pub dig_p1: u16,
    pub dig_p2: i16,
    pub dig_p3: i16,
    pub dig_p4: i16,
    pub dig_p5: i16,
    pub dig_p6: i16,
    pub dig_p7: i16,
    pub dig_p8: i16,
    pub dig_p9: i16,
}

impl CalibrationCoefficients {
    /// Read the 12 coefficients, one little endian word per register pair.
    ///
    /// Values are not checked for plausibility; a device answering all zeroes
    /// or all 0xFF still loads, and shows up later as nonsense readings
    /// (dig_P1 == 0 makes pressure compensation return 0.0).
    pub fn load<T: RegisterTransport>(transport: &mut T) -> Result<Self, T::Error> {
        debug!("in CalibrationCoefficients::load()");
        let cal_pars = CalibrationCoefficients {
            dig_t1: transport.read_u16_le(BMP280_REG_DIG_T1)?,
            dig_t2: transport.read_u16_le(BMP280_REG_DIG_T2)? as i16,
            dig_t3: transport.read_u16_le(BMP280_REG_DIG_T3)? as i16,
            dig_p1: transport.read_u16_le(BMP280_REG_DIG_P1)?,
            dig_p2: transport.read_u16_le(BMP280_REG_DIG_P2)? as i16,
            dig_p3: transport.read_u16_le(BMP280_REG_DIG_P3)? as i16,
            dig_p4: transport.read_u16_le(BMP280_REG_DIG_P4)? as i16,
            dig_p5: transport.read_u16_le(BMP280_REG_DIG_P5)? as i16,
            dig_p6: transport.read_u16_le(BMP280_REG_DIG_P6)? as i16,
            dig_p7: transport.read_u16_le(BMP280_REG_DIG_P7)? as i16,
            dig_p8: transport.read_u16_le(BMP280_REG_DIG_P8)? as i16,
            dig_p9: transport.read_u16_le(BMP280_REG_DIG_P9)? as i16,
        };
        debug!("  calibration = {:?}", cal_pars);
        Ok(cal_pars)
    }
}
