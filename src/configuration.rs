//! Model of the INA219 configuration register
//!
//! The register packs five fields: bus voltage range, shunt PGA gain, one ADC
//! resolution per measured signal and the operating mode. A calibration
//! profile picks a fixed combination of these, see
//! [`CalibrationProfile::configuration`](crate::calibration::CalibrationProfile::configuration).

/// Measurement range for the bus voltage
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum BusVoltageRange {
    /// Maximum bus voltage of 16V
    Fsr16v = 0,
    /// Maximum bus voltage of 32V (still limited by the 26V IC maximum)
    #[default]
    Fsr32v = 1,
}

/// Gain of the shunt voltage PGA
///
/// A smaller gain divider narrows the measurable shunt voltage range but
/// leaves more resolution per bit.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum Gain {
    /// Gain of 1, range of ±40mV
    Div1Fsr40mv = 0,
    /// Gain of 1/2, range of ±80mV
    Div2Fsr80mv = 1,
    /// Gain of 1/4, range of ±160mV
    Div4Fsr160mv = 2,
    /// Gain of 1/8, range of ±320mV
    #[default]
    Div8Fsr320mv = 3,
}

/// Resolution / averaging mode for the bus or shunt ADC
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum Resolution {
    /// Single 9 bit sample
    Res9Bit = 0b0000,
    /// Single 10 bit sample
    Res10Bit = 0b0001,
    /// Single 11 bit sample
    Res11Bit = 0b0010,
    /// Single 12 bit sample
    #[default]
    Res12Bit = 0b0011,
    /// 2 averaged 12 bit samples
    Avg2 = 0b1001,
    /// 4 averaged 12 bit samples
    Avg4 = 0b1010,
    /// 8 averaged 12 bit samples
    Avg8 = 0b1011,
    /// 16 averaged 12 bit samples
    Avg16 = 0b1100,
    /// 32 averaged 12 bit samples
    Avg32 = 0b1101,
    /// 64 averaged 12 bit samples
    Avg64 = 0b1110,
    /// 128 averaged 12 bit samples
    Avg128 = 0b1111,
}

/// Which signals a conversion measures
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum MeasuredSignals {
    /// Only the shunt voltage
    ShuntVoltage = 1,
    /// Only the bus voltage
    BusVoltage = 2,
    /// Both voltages
    #[default]
    ShuntAndBusVoltage = 3,
}

/// Operating mode of the INA219
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum OperatingMode {
    /// Reduce power usage and disable current into the input pins
    PowerDown,
    /// Stop the conversions
    AdcOff,
    /// Run a single conversion of the given signals, then idle
    Triggered(MeasuredSignals),
    /// Continuously convert the given signals
    Continuous(MeasuredSignals),
}

impl OperatingMode {
    /// The three mode bits of the configuration register
    #[must_use]
    pub const fn as_bits(self) -> u16 {
        match self {
            Self::PowerDown => 0,
            Self::AdcOff => 0b100,
            Self::Triggered(signals) => signals as u16,
            Self::Continuous(signals) => signals as u16 | 0b100,
        }
    }
}

impl Default for OperatingMode {
    fn default() -> Self {
        Self::Continuous(MeasuredSignals::ShuntAndBusVoltage)
    }
}

/// Contents of the configuration register
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct Configuration {
    /// Maximum measurement range for the bus voltage
    pub bus_voltage_range: BusVoltageRange,
    /// PGA gain for the shunt voltage measurement
    pub gain: Gain,
    /// Resolution / averaging mode of the bus ADC
    pub bus_resolution: Resolution,
    /// Resolution / averaging mode of the shunt ADC
    pub shunt_resolution: Resolution,
    /// Which signals to convert, continuously or triggered
    pub operating_mode: OperatingMode,
}

impl Configuration {
    /// Writing this value performs a power-on reset
    ///
    /// Only bit 15 is evaluated, all other bits are don't care.
    pub const RESET_BITS: u16 = 1 << 15;

    /// Value of the register after a reset, see table 3 of the datasheet
    ///
    /// Reading anything else back right after a reset means the device on the
    /// bus is not an INA219.
    pub const DEFAULT_BITS: u16 = 0b0011_1001_1001_1111;

    /// Pack the fields into the register representation
    #[must_use]
    pub const fn as_bits(self) -> u16 {
        (self.bus_voltage_range as u16) << 13
            | (self.gain as u16) << 11
            | (self.bus_resolution as u16) << 7
            | (self.shunt_resolution as u16) << 3
            | self.operating_mode.as_bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_datasheet() {
        assert_eq!(Configuration::default().as_bits(), Configuration::DEFAULT_BITS);
    }

    #[test]
    fn mode_bits() {
        assert_eq!(OperatingMode::PowerDown.as_bits(), 0b000);
        assert_eq!(OperatingMode::AdcOff.as_bits(), 0b100);
        assert_eq!(
            OperatingMode::Triggered(MeasuredSignals::ShuntVoltage).as_bits(),
            0b001
        );
        assert_eq!(OperatingMode::default().as_bits(), 0b111);
    }

    #[test]
    fn narrow_range_bits() {
        // 16V bus range and unity gain clear the respective fields
        let conf = Configuration {
            bus_voltage_range: BusVoltageRange::Fsr16v,
            gain: Gain::Div1Fsr40mv,
            ..Default::default()
        };

        assert_eq!(conf.as_bits(), 0b0000_0001_1001_1111);
    }
}
