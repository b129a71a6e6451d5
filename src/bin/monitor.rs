//! Poll an INA219 on a Linux I2C bus and print readings forever
//!
//! The calibration profile and sampling interval are fixed at build time,
//! there is no runtime configuration surface.

use std::error::Error;
use std::fmt;
use std::io::{self, Write as _};

use ina219_monitor::address::Address;
use ina219_monitor::calibration::CalibrationProfile;
use ina219_monitor::monitor::Monitor;
use linux_embedded_hal::{Delay, I2cdev};

/// Range/resolution trade-off the sensor is calibrated for
const PROFILE: CalibrationProfile = CalibrationProfile::Range32V2A;

/// Pause between readings
const SAMPLING_INTERVAL_MS: u32 = 1000;

/// Bus device the sensor hangs off
const I2C_BUS: &str = "/dev/i2c-1";

/// Forwards console text to stdout, flushed per write so lines appear as they
/// are produced
struct Stdout;

impl fmt::Write for Stdout {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut out = io::stdout();
        out.write_all(s.as_bytes())
            .and_then(|()| out.flush())
            .map_err(|_| fmt::Error)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let device = I2cdev::new(I2C_BUS)?;

    let mut monitor = Monitor::new(Delay, Stdout, SAMPLING_INTERVAL_MS);
    // A fresh monitor is always Uninitialized, init cannot reject the bus
    let _ = monitor.init(device, Address::default(), PROFILE);
    monitor.run();

    // run() only returns once the monitor has halted
    Err("monitor halted".into())
}
