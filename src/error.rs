use core::fmt;

/// BMP280 driver errors, `E` is the error type of the register transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// bus read or write failed, passed through unchanged
    Transport(E),
    /// CHIP_ID register did not hold the expected value
    ChipIdMismatch {
        expected: u8,
        found: u8,
    },
    /// operation needs calibration data, call `begin()` first (again after `reset()`)
    NotInitialized,
    /// temperature oversampling set to skipped, pressure compensation needs a temperature sample
    InvalidConfiguration,
    /// pressure compensation returned the 0.0 marker, no altitude can be derived
    DegeneratePressure,
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport(e) => write!(f, "register transport error: {:?}", e),
            Error::ChipIdMismatch { expected, found } => {
                write!(f, "chip id mismatch, expected {:#04x} found {:#04x}", expected, found)
            }
            Error::NotInitialized => f.write_str("sensor not initialized, begin() has not succeeded"),
            Error::InvalidConfiguration => f.write_str("temperature oversampling must not be skipped"),
            Error::DegeneratePressure => f.write_str("degenerate pressure compensation"),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for Error<E> {}
