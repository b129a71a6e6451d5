//! INA219 current/voltage/power polling monitor
//!
//! Polls a TI INA219 sensor over I2C and reports five measurements per
//! interval as labeled text lines: current, shunt voltage, bus voltage,
//! derived load voltage and power.
//!
//! The sensor is calibrated once at startup with one of three fixed
//! [profiles](calibration::CalibrationProfile) trading range against
//! resolution. Initialization or read failures halt the
//! [monitor](monitor::Monitor) permanently after a single diagnostic line;
//! there is no retry.
//!
//! The driver talks through the blocking [`embedded_hal`] I2C and delay
//! traits, so it runs against anything from `linux-embedded-hal` (see the
//! `monitor` binary, feature `linux`) to a mock bus in tests.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]

pub mod address;
pub mod calibration;
pub mod configuration;
pub mod driver;
pub mod errors;
pub mod measurements;
pub mod monitor;

pub use driver::Ina219;
pub use measurements::Reading;
pub use monitor::Monitor;
