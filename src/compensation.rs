//! Fixed-point compensation, Bosch BMP280 datasheet section 3.11.3 and
//! appendix 8.2 (64 bit pressure variant).
//!
//! The arithmetic is the reference C code expressed with explicit `i32`/`i64`
//! wrapping operations, so results match the datasheet bit for bit including
//! for out-of-range calibration data. `>>` on signed integers is an
//! arithmetic shift in Rust, as the reference code assumes.

use crate::calibration::CalibrationCoefficients;

/// Result of temperature compensation
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct CompensatedTemperature {
    /// t_fine, carried into pressure compensation
    pub fine: i32,
    /// temperature in hundredths of a degree C, 5123 = 51.23 °C
    pub centi_celsius: i32,
}

impl CompensatedTemperature {
    /// temperature in degrees C
    pub fn celsius(&self) -> f64 {
        self.centi_celsius as f64 / 100.0
    }
}

/// Raw ADC value from a 3 byte big endian register burst, low nibble is unused
pub fn raw_sample(burst: u32) -> i32 {
    ((burst >> 4) & 0x000f_ffff) as i32
}

/// Temperature compensation, 32 bit signed arithmetic
pub fn compensate_temperature(adc_t: i32, calib: &CalibrationCoefficients) -> CompensatedTemperature {
    let t1 = calib.dig_t1 as i32;
    let t2 = calib.dig_t2 as i32;
    let t3 = calib.dig_t3 as i32;

    let var1 = ((adc_t >> 3).wrapping_sub(t1 << 1)).wrapping_mul(t2) >> 11;
    let delta = (adc_t >> 4).wrapping_sub(t1);
    let var2 = (delta.wrapping_mul(delta) >> 12).wrapping_mul(t3) >> 14;

    let fine = var1.wrapping_add(var2);
    let centi_celsius = fine.wrapping_mul(5).wrapping_add(128) >> 8;
    CompensatedTemperature { fine, centi_celsius }
}

/// Pressure compensation, 64 bit signed arithmetic.
///
/// Returns pressure in Pa as signed Q24.8 held in an i64 (24 integer bits, 8 fractional
/// bits), 24674867 = 24674867/256 = 96386.2 Pa. Returns 0 when the
/// calibration data makes the divisor zero.
pub fn compensate_pressure_q24_8(adc_p: i32, fine: i32, calib: &CalibrationCoefficients) -> i64 {
    let p1 = calib.dig_p1 as i64;
    let p2 = calib.dig_p2 as i64;
    let p3 = calib.dig_p3 as i64;
    let p4 = calib.dig_p4 as i64;
    let p5 = calib.dig_p5 as i64;
    let p6 = calib.dig_p6 as i64;
    let p7 = calib.dig_p7 as i64;
    let p8 = calib.dig_p8 as i64;
    let p9 = calib.dig_p9 as i64;

    let mut var1: i64 = (fine as i64).wrapping_sub(128000);
    let mut var2: i64 = var1.wrapping_mul(var1).wrapping_mul(p6);
    var2 = var2.wrapping_add(var1.wrapping_mul(p5) << 17);
    var2 = var2.wrapping_add(p4 << 35);
    var1 = (var1.wrapping_mul(var1).wrapping_mul(p3) >> 8).wrapping_add(var1.wrapping_mul(p2) << 12);
    var1 = ((1i64 << 47).wrapping_add(var1)).wrapping_mul(p1) >> 33;

    if var1 == 0 {
        return 0; // avoid division by zero
    }

    let mut p: i64 = 1048576 - adc_p as i64;
    p = ((p << 31).wrapping_sub(var2)).wrapping_mul(3125).wrapping_div(var1);
    var1 = p9.wrapping_mul(p >> 13).wrapping_mul(p >> 13) >> 25;
    var2 = p8.wrapping_mul(p) >> 19;
    (p.wrapping_add(var1).wrapping_add(var2) >> 8).wrapping_add(p7 << 4)
}

/// Pressure compensation in Pa.
///
/// `fine` must come from compensating the temperature sample taken together
/// with `adc_p`. A result of exactly 0.0 means the computation was degenerate
/// (zero divisor), not a vacuum.
pub fn compensate_pressure(adc_p: i32, fine: i32, calib: &CalibrationCoefficients) -> f64 {
    compensate_pressure_q24_8(adc_p, fine, calib) as f64 / 256.0
}
