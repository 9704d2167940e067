use bitfield::bitfield;
use const_builder::ConstBuilder;

use crate::constants::BMP280_MODE_NORMAL;


/// A measurement result from the sensor.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Measurements {
    /// temperature degrees C
    pub temperature_c: f64,
    /// air pressure in Pa, 0.0 marks a degenerate compensation
    pub pressure_pa: f64,
}


/// Over Sampling config, osrs_t and osrs_p fields of CTRL_MEAS
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Default)]
#[allow(non_camel_case_types)]
#[repr(u8)]
pub enum Over_Sampling {
    /// measurement skipped, data register reads 0x80000
    SKIPPED               = 0x00,
    #[default]
    ULTRA_LOW_POWER       = 0x01,  // x 1, 16 bit
    LOW_POWER             = 0x02,  // x 2, 17 bit
    STANDARD_RESOLUTION   = 0x03,  // x 4, 18 bit
    HIGH_RESOLUTION       = 0x04,  // x 8, 19 bit
    ULTRA_HIGH_RESOLUTION = 0x05,  // x 16, 20 bit
}

impl Over_Sampling {
    /// number of conversions averaged
    pub fn factor(&self) -> u32 {
        match self {
            Self::SKIPPED => 0,
            Self::ULTRA_LOW_POWER => 1,
            Self::LOW_POWER => 2,
            Self::STANDARD_RESOLUTION => 4,
            Self::HIGH_RESOLUTION => 8,
            Self::ULTRA_HIGH_RESOLUTION => 16,
        }
    }
}

impl From<u8> for Over_Sampling {
    fn from(v: u8) -> Self {
        match v {
            0x00 => Self::SKIPPED,
            0x01 => Self::ULTRA_LOW_POWER,
            0x02 => Self::LOW_POWER,
            0x03 => Self::STANDARD_RESOLUTION,
            0x04 => Self::HIGH_RESOLUTION,
            _ => Self::ULTRA_HIGH_RESOLUTION,  // 0x05 - 0x07 are all x 16
        }
    }
}

/// IIR Filter coefficients, filter field of CONFIG
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Default)]
#[allow(non_camel_case_types)]
#[repr(u8)]
pub enum FilterCoef {
    #[default]
    COEF_OFF = 0x00,
    COEF_2   = 0x01,
    COEF_4   = 0x02,
    COEF_8   = 0x03,
    COEF_16  = 0x04,
}

impl From<u8> for FilterCoef {
    fn from(v: u8) -> Self {
        match v {
            0x00 => Self::COEF_OFF,
            0x01 => Self::COEF_2,
            0x02 => Self::COEF_4,
            0x03 => Self::COEF_8,
            _    => Self::COEF_16,
        }
    }
}

/// inactive duration between measurements in normal mode, t_sb field of CONFIG
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Default)]
#[allow(non_camel_case_types)]
#[repr(u8)]
pub enum Standby {
    MS_0P5  = 0x00,
    MS_62P5 = 0x01,
    MS_125  = 0x02,
    MS_250  = 0x03,
    MS_500  = 0x04,
    #[default]
    MS_1000 = 0x05,
    MS_2000 = 0x06,
    MS_4000 = 0x07,
}

impl From<u8> for Standby {
    fn from(v: u8) -> Self {
        match v & 0x07 {
            0x00 => Self::MS_0P5,
            0x01 => Self::MS_62P5,
            0x02 => Self::MS_125,
            0x03 => Self::MS_250,
            0x04 => Self::MS_500,
            0x05 => Self::MS_1000,
            0x06 => Self::MS_2000,
            _    => Self::MS_4000,
        }
    }
}

bitfield! {
    /// BMP280 STATUS bits
    pub struct Status(u8);
    impl Debug;

    pub bool, get_measuring, _: 3;   // conversion running, cleared when results are in the data registers
    pub bool, get_im_update, _: 0;   // NVM data being copied to image registers, set after reset
    // bits 7,6,5,4,2,1 not used
}

bitfield! {
    /// BMP280 CTRL_MEAS register
    pub struct CtrlMeas(u8);
    impl Debug;

    pub u8, into Over_Sampling, get_osrs_t, set_osrs_t: 7, 5;
    pub u8, into Over_Sampling, get_osrs_p, set_osrs_p: 4, 2;
    pub u8, get_mode, set_mode: 1, 0;
}

bitfield! {
    /// BMP280 CONFIG register
    pub struct ConfigReg(u8);
    impl Debug;

    pub u8, into Standby, get_t_sb, set_t_sb: 7, 5;
    pub u8, into FilterCoef, get_filter, set_filter: 4, 2;
    pub bool, get_spi3w_en, set_spi3w_en: 0;   // 3-wire SPI, left off
}


/// BMP280 measurement configuration: oversampling, IIR filter, standby time
///     written to CONFIG and CTRL_MEAS by `begin()` and `set_configuration()`
#[derive(ConstBuilder, Debug, Clone, Copy, PartialEq, Eq, PartialOrd)]
pub struct Bmp280Configuration {
    #[builder(default = Over_Sampling::ULTRA_LOW_POWER)]
    pub over_sampling_temp: Over_Sampling,
    #[builder(default = Over_Sampling::ULTRA_LOW_POWER)]
    pub over_sampling_press: Over_Sampling,
    #[builder(default = FilterCoef::COEF_OFF)]
    pub iir_filter_coef: FilterCoef,
    #[builder(default = Standby::MS_1000)]
    pub standby_time: Standby,
}

impl Default for Bmp280Configuration {
    fn default() -> Self {
        Self {
            over_sampling_temp: Over_Sampling::ULTRA_LOW_POWER,
            over_sampling_press: Over_Sampling::ULTRA_LOW_POWER,
            iir_filter_coef: FilterCoef::default(),
            standby_time: Standby::default(),
        }
    }
}

impl Bmp280Configuration {
    /// CTRL_MEAS value, normal mode
    pub fn ctrl_meas(&self) -> CtrlMeas {
        let mut ctrl_meas = CtrlMeas(0);
        ctrl_meas.set_osrs_t(self.over_sampling_temp as u8);
        ctrl_meas.set_osrs_p(self.over_sampling_press as u8);
        ctrl_meas.set_mode(BMP280_MODE_NORMAL);
        ctrl_meas
    }

    /// worst case duration of one temperature + pressure conversion, datasheet appendix 9.1
    ///     t_measure,max = 1.25 ms + 2.3 ms * osrs_t + (2.3 ms * osrs_p + 0.575 ms)
    pub fn max_measurement_time_us(&self) -> u32 {
        let mut time_us = 1250 + 2300 * self.over_sampling_temp.factor();
        if self.over_sampling_press != Over_Sampling::SKIPPED {
            time_us += 2300 * self.over_sampling_press.factor() + 575;
        }
        time_us
    }

    /// CONFIG value, 4-wire SPI or I2C
    pub fn config(&self) -> ConfigReg {
        let mut config = ConfigReg(0);
        config.set_t_sb(self.standby_time as u8);
        config.set_filter(self.iir_filter_coef as u8);
        config.set_spi3w_en(false);
        config
    }
}
