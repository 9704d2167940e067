//! Barometric altitude helpers, pressures in Pa

use libm::{exp, pow};

pub const STANDARD_SEA_LEVEL_AIR_PRESSURE: f64 = 101325.0;  // Pa

/// altitude in metres for `pressure_pa`, given the current sea level pressure
///     international barometric formula, valid in the troposphere
pub fn altitude_from_pressure(pressure_pa: f64, sea_level_pa: f64) -> f64 {
    44330.0 * (1.0 - pow(pressure_pa / sea_level_pa, 1.0 / 5.255))
}

/// get equivalent sealevel air pressure for given altitude (in metres)
pub fn sealevel_pressure(pressure_pa: f64, temperature_c: f64, altitude_m: f64) -> f64 {
    let exponent = 9.80665 * 0.028964 * altitude_m / (8.31432 * (temperature_c + 273.15));
    pressure_pa * exp(exponent)
}
