//! Blocking embedded-hal driver for the INA219
//!
//! The driver owns the bus handle and the calibration profile it was brought
//! up with. All register accesses are single 16 bit big-endian transfers.

use embedded_hal::i2c::I2c;

use crate::address::Address;
use crate::calibration::CalibrationProfile;
use crate::configuration::Configuration;
use crate::errors::{InitializationError, MeasurementError};
use crate::measurements::{BusVoltage, Reading, ShuntVoltage};

/// Addresses of the internal registers of the INA219
#[derive(Debug, Copy, Clone)]
#[repr(u8)]
enum Register {
    Configuration = 0x00,
    ShuntVoltage = 0x01,
    BusVoltage = 0x02,
    Power = 0x03,
    Current = 0x04,
    Calibration = 0x05,
}

/// Embedded-HAL compatible driver for the INA219
#[derive(Debug)]
pub struct Ina219<I2C> {
    i2c: I2C,
    address: Address,
    profile: CalibrationProfile,
}

impl<I2C: I2c> Ina219<I2C> {
    /// Detect the sensor, reset it and apply `profile`
    ///
    /// Detection writes the reset bit and checks that the configuration
    /// register reads back with the datasheet default. On success the
    /// profile's calibration and configuration values are written, exactly
    /// once.
    ///
    /// # Errors
    /// [`InitializationError::SensorNotFound`] if the read-back does not
    /// match, [`InitializationError::I2c`] if a bus transfer fails.
    pub fn new(
        i2c: I2C,
        address: Address,
        profile: CalibrationProfile,
    ) -> Result<Self, InitializationError<I2C::Error>> {
        let mut new = Self {
            i2c,
            address,
            profile,
        };
        new.init()?;
        Ok(new)
    }

    fn init(&mut self) -> Result<(), InitializationError<I2C::Error>> {
        self.write_register(Register::Configuration, Configuration::RESET_BITS)?;

        if self.read_register(Register::Configuration)? != Configuration::DEFAULT_BITS {
            return Err(InitializationError::SensorNotFound);
        }

        self.write_register(Register::Calibration, self.profile.register_bits())?;
        self.write_register(
            Register::Configuration,
            self.profile.configuration().as_bits(),
        )?;

        Ok(())
    }

    /// Profile the sensor was calibrated with
    #[must_use]
    pub const fn profile(&self) -> CalibrationProfile {
        self.profile
    }

    /// Destroy the driver returning the underlying I2C device
    ///
    /// Leaves the sensor in its current state.
    pub fn destroy(self) -> I2C {
        self.i2c
    }

    /// Last measured current in mA
    ///
    /// # Errors
    /// Returns [`MeasurementError::I2c`] if the transfer fails.
    pub fn current_ma(&mut self) -> Result<f32, MeasurementError<I2C::Error>> {
        let bits = self.read_register(Register::Current)?;
        Ok(self.profile.current_from_bits(bits))
    }

    /// Last measured shunt voltage in mV
    ///
    /// # Errors
    /// Returns [`MeasurementError::I2c`] if the transfer fails.
    pub fn shunt_voltage_mv(&mut self) -> Result<f32, MeasurementError<I2C::Error>> {
        let bits = self.read_register(Register::ShuntVoltage)?;
        Ok(ShuntVoltage::from_bits(bits).millivolts())
    }

    /// Last measured bus voltage in V
    ///
    /// # Errors
    /// Returns [`MeasurementError::I2c`] if the transfer fails.
    pub fn bus_voltage_v(&mut self) -> Result<f32, MeasurementError<I2C::Error>> {
        let bits = self.read_register(Register::BusVoltage)?;
        Ok(BusVoltage::from_bits(bits).volts())
    }

    /// Last measured power in mW
    ///
    /// # Errors
    /// Returns [`MeasurementError::I2c`] if the transfer fails.
    pub fn power_mw(&mut self) -> Result<f32, MeasurementError<I2C::Error>> {
        let bits = self.read_register(Register::Power)?;
        Ok(self.profile.power_from_bits(bits))
    }

    /// Read all measurements and derive the load voltage
    ///
    /// The four register reads are independent transactions; if the signal
    /// changes in between, the values reflect slightly different instants.
    ///
    /// # Errors
    /// Returns the [`MeasurementError`] of the first transfer that fails.
    pub fn sample(&mut self) -> Result<Reading, MeasurementError<I2C::Error>> {
        let current_ma = self.current_ma()?;
        let shunt_voltage_mv = self.shunt_voltage_mv()?;
        let bus_voltage_v = self.bus_voltage_v()?;
        let power_mw = self.power_mw()?;

        Ok(Reading::new(
            current_ma,
            shunt_voltage_mv,
            bus_voltage_v,
            power_mw,
        ))
    }

    fn read_register(&mut self, register: Register) -> Result<u16, I2C::Error> {
        let mut buf = [0u8; 2];
        self.i2c
            .write_read(self.address.as_byte(), &[register as u8], &mut buf)?;
        Ok(u16::from_be_bytes(buf))
    }

    fn write_register(&mut self, register: Register, value: u16) -> Result<(), I2C::Error> {
        let [msb, lsb] = value.to_be_bytes();
        self.i2c
            .write(self.address.as_byte(), &[register as u8, msb, lsb])
    }
}
