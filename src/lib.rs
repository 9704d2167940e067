//! BMP280 pressure and temperature sensor driver, `embedded-hal` 1.0, I2C or SPI.
//!
//! ```ignore
//! use bmp280_ya::{Bmp280, I2cTransport, constants::DeviceAddress};
//!
//! let transport = I2cTransport::new(i2c, DeviceAddress::Primary.into());
//! let mut sensor = Bmp280::new(transport, delay);
//! sensor.begin()?;
//! let celsius = sensor.read_temperature()?;
//! let pascals = sensor.read_pressure()?;   // Pa, not hPa
//! ```
//!
//! Pressure is always reported in pascals. A pressure of exactly `0.0` means
//! the compensation was degenerate (calibration data gave a zero divisor).

#![cfg_attr(not(test), no_std)]

pub mod error;
pub mod constants;
pub mod data;
pub mod transport;
pub mod calibration;
pub mod compensation;
pub mod altitude;

use crate::error::Error;
use crate::calibration::CalibrationCoefficients;
use crate::compensation::{compensate_pressure, compensate_temperature, raw_sample, CompensatedTemperature};

use constants::{BMP280_CHIP_ID, BMP280_REG_CHIP_ID, BMP280_REG_CONFIG, BMP280_REG_CTRL_MEAS, BMP280_REG_PRESS_DATA,
                BMP280_REG_SOFT_RESET, BMP280_REG_STATUS, BMP280_REG_TEMP_DATA, BMP280_SOFT_RESET, BMP280_STARTUP_MS};
use data::{Bmp280Configuration, Measurements, Over_Sampling, Status};

pub use transport::{I2cTransport, RegisterTransport, SpiTransport};

use embedded_hal::delay::DelayNs;

use log::{debug, info};


/// the BMP280 device
///
/// Uninitialized until `begin()` succeeds, then ready until `reset()`.
/// Every reading re-reads the data registers; pressure readings always take a
/// fresh temperature sample first because pressure compensation needs t_fine.
pub struct Bmp280<T, D> {
    /// register access, I2C, SPI or anything else implementing `RegisterTransport`
    transport: T,
    delayer: D,
    /// value CHIP_ID must hold for `begin()` to succeed
    expected_chip_id: u8,
    configuration: Bmp280Configuration,
    /// `Some` only while ready
    cal_pars: Option<CalibrationCoefficients>,
    /// t_fine of the latest temperature compensation, owned by this instance
    t_fine: Option<i32>,
}

impl<T, D, E> Bmp280<T, D>
where
    T: RegisterTransport<Error = E>,
    D: DelayNs,
{
    /// create new BMP280 driver with default measurement configuration
    pub fn new(transport: T, delayer: D) -> Self {
        debug!("new called");
        Self::new_with_configuration(transport, delayer, Bmp280Configuration::default())
    }

    pub fn new_with_configuration(transport: T, delayer: D, configuration: Bmp280Configuration) -> Self {
        debug!("new_with_configuration called, {:?}", configuration);
        Self {
            transport,
            delayer,
            expected_chip_id: BMP280_CHIP_ID,
            configuration,
            cal_pars: None,
            t_fine: None,
        }
    }

    /// accept a different chip id, engineering samples report 0x56 or 0x57
    pub fn with_chip_id(mut self, chip_id: u8) -> Self {
        self.expected_chip_id = chip_id;
        self
    }

    /// give back the transport
    pub fn release(self) -> T {
        self.transport
    }

    /// true once `begin()` succeeded and no `reset()` happened since
    pub fn is_ready(&self) -> bool {
        self.cal_pars.is_some()
    }

    /// calibration coefficients loaded by `begin()`
    pub fn calibration(&self) -> Option<&CalibrationCoefficients> {
        self.cal_pars.as_ref()
    }

    /// t_fine from the most recent temperature compensation
    pub fn fine_temperature(&self) -> Option<i32> {
        self.t_fine
    }

    pub fn configuration(&self) -> Bmp280Configuration {
        self.configuration
    }

    fn ready_calibration(&self) -> Result<CalibrationCoefficients, Error<E>> {
        self.cal_pars.ok_or(Error::NotInitialized)
    }

    /// Verify the chip id, load calibration and start measuring.
    ///
    /// The driver is uninitialized until this succeeds, also when it was ready before.
    pub fn begin(&mut self) -> Result<(), Error<E>> {
        debug!("in begin()");
        self.cal_pars = None;
        self.t_fine = None;
        let configuration = self.configuration;
        Self::check_configuration(&configuration)?;

        let found = self.chip_id()?;
        if found != self.expected_chip_id {
            debug!("  chip id {:#04x}, expected {:#04x}", found, self.expected_chip_id);
            return Err(Error::ChipIdMismatch { expected: self.expected_chip_id, found });
        }

        let cal_pars = CalibrationCoefficients::load(&mut self.transport).map_err(Error::Transport)?;
        self.write_configuration(&configuration)?;
        // first conversion has to finish before the data registers mean anything
        self.delayer.delay_us(configuration.max_measurement_time_us());

        self.cal_pars = Some(cal_pars);
        info!("BMP280 ready, {:?}", configuration);
        Ok(())
    }

    /// soft reset, calibration is discarded and `begin()` has to be called again
    ///     the driver is uninitialized afterwards even when the reset write fails
    pub fn reset(&mut self) -> Result<(), Error<E>> {
        debug!("in reset()");
        self.cal_pars = None;
        self.t_fine = None;
        self.transport
            .write_byte(BMP280_REG_SOFT_RESET, BMP280_SOFT_RESET)
            .map_err(Error::Transport)?;
        self.delayer.delay_ms(BMP280_STARTUP_MS);
        info!("BMP280 soft reset");
        Ok(())
    }

    /// read CHIP_ID register
    pub fn chip_id(&mut self) -> Result<u8, Error<E>> {
        self.transport.read_byte(BMP280_REG_CHIP_ID).map_err(Error::Transport)
    }

    /// get status
    pub fn get_status(&mut self) -> Result<Status, Error<E>> {
        debug!("in get_status()");
        let status = Status(self.transport.read_byte(BMP280_REG_STATUS).map_err(Error::Transport)?);
        debug!("  status = {:?}", status);
        Ok(status)
    }

    /// change oversampling, filter and standby time
    ///     a failed register write leaves the device asleep, the driver is uninitialized then
    pub fn set_configuration(&mut self, configuration: Bmp280Configuration) -> Result<(), Error<E>> {
        debug!("in set_configuration({:?})", configuration);
        self.ready_calibration()?;
        Self::check_configuration(&configuration)?;
        if let Err(e) = self.write_configuration(&configuration) {
            self.cal_pars = None;
            self.t_fine = None;
            return Err(e);
        }
        self.configuration = configuration;
        Ok(())
    }

    // pressure compensation needs t_fine, so temperature must be measured
    fn check_configuration(configuration: &Bmp280Configuration) -> Result<(), Error<E>> {
        if configuration.over_sampling_temp == Over_Sampling::SKIPPED {
            debug!("  temperature measurement cannot be skipped");
            return Err(Error::InvalidConfiguration);
        }
        Ok(())
    }

    // CONFIG writes are only reliable in sleep mode, so sleep, CONFIG, then CTRL_MEAS with normal mode
    fn write_configuration(&mut self, configuration: &Bmp280Configuration) -> Result<(), Error<E>> {
        let config = configuration.config();
        let ctrl_meas = configuration.ctrl_meas();
        debug!("  writing CONFIG {:#010b}, CTRL_MEAS {:#010b}", config.0, ctrl_meas.0);
        self.transport.write_byte(BMP280_REG_CTRL_MEAS, 0x00).map_err(Error::Transport)?;
        self.transport.write_byte(BMP280_REG_CONFIG, config.0).map_err(Error::Transport)?;
        self.transport.write_byte(BMP280_REG_CTRL_MEAS, ctrl_meas.0).map_err(Error::Transport)?;
        Ok(())
    }

    fn sample_temperature(&mut self, cal_pars: &CalibrationCoefficients) -> Result<CompensatedTemperature, Error<E>> {
        let raw_temperature = raw_sample(self.transport.read_u24_be(BMP280_REG_TEMP_DATA).map_err(Error::Transport)?);
        let temperature = compensate_temperature(raw_temperature, cal_pars);
        debug!("  raw_temperature = {}, t_fine = {}", raw_temperature, temperature.fine);
        self.t_fine = Some(temperature.fine);
        Ok(temperature)
    }

    /// read temperature in degrees C
    pub fn read_temperature(&mut self) -> Result<f64, Error<E>> {
        debug!("in read_temperature()");
        let cal_pars = self.ready_calibration()?;
        Ok(self.sample_temperature(&cal_pars)?.celsius())
    }

    /// read air pressure in Pa, takes a temperature sample first
    pub fn read_pressure(&mut self) -> Result<f64, Error<E>> {
        debug!("in read_pressure()");
        Ok(self.read_measurements()?.pressure_pa)
    }

    /// read the temperature and air pressure measurements
    pub fn read_measurements(&mut self) -> Result<Measurements, Error<E>> {
        debug!("in read_measurements()");
        let cal_pars = self.ready_calibration()?;
        let temperature = self.sample_temperature(&cal_pars)?;
        let raw_pressure = raw_sample(self.transport.read_u24_be(BMP280_REG_PRESS_DATA).map_err(Error::Transport)?);
        let pressure = compensate_pressure(raw_pressure, temperature.fine, &cal_pars);
        debug!("  raw_pressure = {}, pressure = {} Pa", raw_pressure, pressure);

        Ok(Measurements { temperature_c: temperature.celsius(), pressure_pa: pressure })
    }

    /// altitude in metres from a fresh pressure reading and the current sea level pressure in Pa
    ///     fails with `Error::DegeneratePressure` when the pressure compensation returned 0.0
    pub fn read_altitude(&mut self, sea_level_pa: f64) -> Result<f64, Error<E>> {
        debug!("in read_altitude({})", sea_level_pa);
        let pressure = self.read_pressure()?;
        if pressure == 0.0 {
            return Err(Error::DegeneratePressure);
        }
        Ok(altitude::altitude_from_pressure(pressure, sea_level_pa))
    }
}
