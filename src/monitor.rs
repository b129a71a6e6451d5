//! Sample-and-report loop around the driver
//!
//! The monitor walks a small state machine instead of looping inside an
//! `if`/`while (1)`:
//!
//! ```text
//! Uninitialized --init ok--> Running   (one reading per interval, forever)
//! Uninitialized --init err-> Halted    (one diagnostic line, terminal)
//! Running --read err-------> Halted    (terminal)
//! ```
//!
//! Both transitions into `Halted` are fail-stop: the monitor never retries,
//! recovery requires building it anew.

use core::fmt::Write;

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::address::Address;
use crate::calibration::CalibrationProfile;
use crate::driver::Ina219;

/// Fixed diagnostic emitted once when the sensor cannot be brought up
pub const DETECTION_FAILED: &str = "Failed to find INA219 chip";

/// Lifecycle state of the monitor
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum State {
    /// The sensor has not been brought up yet, no readings are produced
    Uninitialized,
    /// The sensor is up, one reading is produced per interval
    Running,
    /// Terminal: initialization or a read failed, no reading ever follows
    Halted,
}

/// Polls the sensor and writes labeled readings to the console
///
/// Strictly sequential: the delay between samples blocks, nothing else runs
/// in the meantime. Console write failures are ignored, the console is the
/// only diagnostic channel there is.
pub struct Monitor<I2C, D, W> {
    sensor: Option<Ina219<I2C>>,
    delay: D,
    console: W,
    interval_ms: u32,
    state: State,
}

impl<I2C, D, W> Monitor<I2C, D, W>
where
    I2C: I2c,
    D: DelayNs,
    W: Write,
{
    /// Create a monitor in the `Uninitialized` state
    pub const fn new(delay: D, console: W, interval_ms: u32) -> Self {
        Self {
            sensor: None,
            delay,
            console,
            interval_ms,
            state: State::Uninitialized,
        }
    }

    /// Current lifecycle state
    #[must_use]
    pub const fn state(&self) -> State {
        self.state
    }

    /// Bring the sensor up and apply `profile`
    ///
    /// On failure the fixed diagnostic line is written once and the monitor
    /// halts permanently.
    ///
    /// # Errors
    /// A monitor that already left `Uninitialized` rejects the call and
    /// hands the bus handle back unused.
    pub fn init(
        &mut self,
        i2c: I2C,
        address: Address,
        profile: CalibrationProfile,
    ) -> Result<State, I2C> {
        if self.state != State::Uninitialized {
            return Err(i2c);
        }

        match Ina219::new(i2c, address, profile) {
            Ok(sensor) => {
                self.sensor = Some(sensor);
                self.state = State::Running;
            }
            Err(_) => {
                let _ = writeln!(self.console, "{DETECTION_FAILED}");
                self.state = State::Halted;
            }
        }

        Ok(self.state)
    }

    /// Perform one sample-report-delay iteration
    ///
    /// Does nothing unless the monitor is `Running`. A failed read reports
    /// the error once and halts the monitor, extending the fail-stop policy
    /// of `init` to the loop.
    pub fn step(&mut self) -> State {
        let Some(sensor) = self.sensor.as_mut() else {
            return self.state;
        };

        if self.state != State::Running {
            return self.state;
        }

        match sensor.sample() {
            Ok(reading) => {
                let _ = writeln!(self.console, "{reading}");
                self.delay.delay_ms(self.interval_ms);
            }
            Err(err) => {
                let _ = writeln!(self.console, "INA219 read failed: {err}");
                self.state = State::Halted;
            }
        }

        self.state
    }

    /// Run until the monitor halts
    ///
    /// Does not return while the sensor keeps producing readings.
    pub fn run(&mut self) {
        while self.step() == State::Running {}
    }

    /// Tear the monitor apart, returning the sensor (if one was brought up),
    /// the delay provider and the console
    pub fn destroy(self) -> (Option<Ina219<I2C>>, D, W) {
        (self.sensor, self.delay, self.console)
    }
}
