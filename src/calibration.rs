//! The three fixed calibration presets the monitor can run with
//!
//! Each preset trades measurement range against resolution for the 0.1Ω shunt
//! found on the common INA219 breakout boards. The calibration register value
//! follows the datasheet formula
//!
//! ```text
//! cal = trunc(0.04096 / (current LSB * R_shunt))
//! ```
//!
//! and the power register always weighs 20 times the current LSB.

use crate::configuration::{
    BusVoltageRange, Configuration, Gain, MeasuredSignals, OperatingMode, Resolution,
};

/// Range/resolution trade-off the sensor is calibrated for
///
/// The profile is fixed at build time and applied exactly once during
/// initialization; it is not reconfigurable at runtime.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub enum CalibrationProfile {
    /// Up to 32V and 2A, coarsest resolution (0.1mA/bit)
    #[default]
    Range32V2A,
    /// Up to 32V and 1A, medium resolution (40µA/bit)
    Range32V1A,
    /// Up to 16V and 400mA, finest resolution (50µA/bit)
    Range16V400Ma,
}

impl CalibrationProfile {
    /// Value written to the calibration register for this profile
    #[must_use]
    pub const fn register_bits(self) -> u16 {
        match self {
            Self::Range32V2A => 4096,
            Self::Range32V1A => 10240,
            Self::Range16V400Ma => 8192,
        }
    }

    /// Configuration register contents that pair with this calibration
    ///
    /// The wide profiles need the full ±320mV shunt range, the 400mA profile
    /// fits in ±40mV at unity gain. All profiles convert both signals
    /// continuously at 12 bit.
    #[must_use]
    pub const fn configuration(self) -> Configuration {
        let (bus_voltage_range, gain) = match self {
            Self::Range32V2A | Self::Range32V1A => {
                (BusVoltageRange::Fsr32v, Gain::Div8Fsr320mv)
            }
            Self::Range16V400Ma => (BusVoltageRange::Fsr16v, Gain::Div1Fsr40mv),
        };

        Configuration {
            bus_voltage_range,
            gain,
            bus_resolution: Resolution::Res12Bit,
            shunt_resolution: Resolution::Res12Bit,
            operating_mode: OperatingMode::Continuous(MeasuredSignals::ShuntAndBusVoltage),
        }
    }

    /// Current represented by one bit of the current register, in mA
    #[must_use]
    pub const fn current_lsb_ma(self) -> f32 {
        match self {
            Self::Range32V2A => 0.1,
            Self::Range32V1A => 0.04,
            Self::Range16V400Ma => 0.05,
        }
    }

    /// Power represented by one bit of the power register, in mW
    #[must_use]
    pub const fn power_lsb_mw(self) -> f32 {
        match self {
            Self::Range32V2A => 2.0,
            Self::Range32V1A => 0.8,
            Self::Range16V400Ma => 1.0,
        }
    }

    /// Scale a current register value to mA
    ///
    /// The register holds a two's complement value, current can flow in both
    /// directions.
    #[must_use]
    pub fn current_from_bits(self, bits: u16) -> f32 {
        f32::from(i16::from_ne_bytes(bits.to_ne_bytes())) * self.current_lsb_ma()
    }

    /// Scale a power register value to mW
    #[must_use]
    pub fn power_from_bits(self, bits: u16) -> f32 {
        f32::from(bits) * self.power_lsb_mw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [CalibrationProfile; 3] = [
        CalibrationProfile::Range32V2A,
        CalibrationProfile::Range32V1A,
        CalibrationProfile::Range16V400Ma,
    ];

    #[test]
    fn register_bits_fit_datasheet_formula() {
        const R_SHUNT_OHM: f64 = 0.1;

        for profile in ALL {
            let current_lsb_a = f64::from(profile.current_lsb_ma()) / 1_000.0;
            let cal = (0.04096 / (current_lsb_a * R_SHUNT_OHM)).round();

            assert_eq!(cal as u16, profile.register_bits(), "{profile:?}");
        }
    }

    #[test]
    fn power_lsb_is_twenty_times_current_lsb() {
        for profile in ALL {
            let ratio = f64::from(profile.power_lsb_mw()) / f64::from(profile.current_lsb_ma());
            assert!((ratio - 20.0).abs() < 1e-5, "{profile:?}: {ratio}");
        }
    }

    #[test]
    fn current_register_is_twos_complement() {
        let profile = CalibrationProfile::Range32V2A;

        assert_eq!(profile.current_from_bits(0), 0.0);
        assert_eq!(profile.current_from_bits(10), 1.0);
        assert_eq!(profile.current_from_bits(0xFFFF), -0.1);
    }

    #[test]
    fn configurations_match_ranges() {
        let wide = CalibrationProfile::Range32V2A.configuration();
        assert_eq!(wide.bus_voltage_range, BusVoltageRange::Fsr32v);
        assert_eq!(wide.gain, Gain::Div8Fsr320mv);

        let narrow = CalibrationProfile::Range16V400Ma.configuration();
        assert_eq!(narrow.bus_voltage_range, BusVoltageRange::Fsr16v);
        assert_eq!(narrow.gain, Gain::Div1Fsr40mv);
    }
}
