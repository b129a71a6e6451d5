//! Errors reported by the driver

use core::fmt::{self, Debug, Formatter};

/// Error conditions that can appear while bringing the sensor up
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum InitializationError<I2cErr> {
    /// An I2C transfer failed
    I2c(I2cErr),
    /// The device did not answer the reset sequence like an INA219
    SensorNotFound,
}

impl<E> From<E> for InitializationError<E> {
    fn from(value: E) -> Self {
        Self::I2c(value)
    }
}

impl<I2cErr: Debug> fmt::Display for InitializationError<I2cErr> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::I2c(err) => write!(f, "I2C error: {err:?}"),
            Self::SensorNotFound => {
                write!(f, "configuration register did not reset to its default")
            }
        }
    }
}

#[cfg(feature = "std")]
impl<I2cErr> std::error::Error for InitializationError<I2cErr>
where
    I2cErr: Debug + std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::I2c(err) => Some(err),
            Self::SensorNotFound => None,
        }
    }
}

/// Errors that can happen when a measurement is read
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MeasurementError<I2cErr> {
    /// An I2C transfer failed
    I2c(I2cErr),
}

impl<E> From<E> for MeasurementError<E> {
    fn from(value: E) -> Self {
        Self::I2c(value)
    }
}

impl<I2cErr: Debug> fmt::Display for MeasurementError<I2cErr> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::I2c(err) => write!(f, "I2C error: {err:?}"),
        }
    }
}

#[cfg(feature = "std")]
impl<I2cErr> std::error::Error for MeasurementError<I2cErr>
where
    I2cErr: Debug + std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::I2c(err) => Some(err),
        }
    }
}
