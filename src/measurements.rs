//! Raw register values and the derived reading snapshot

use core::fmt;

/// Shunt voltage register contents
///
/// The register holds a two's complement value with a resolution of 10µV per
/// bit, the voltage drop can be negative when current flows backwards.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct ShuntVoltage(i16);

impl ShuntVoltage {
    /// Reinterpret the register bits as a shunt voltage
    #[must_use]
    pub const fn from_bits(bits: u16) -> Self {
        Self(i16::from_ne_bytes(bits.to_ne_bytes()))
    }

    /// The shunt voltage in 10µV steps, the native resolution of the register
    #[must_use]
    pub const fn shunt_voltage_10uv(self) -> i16 {
        self.0
    }

    /// The shunt voltage in mV
    #[must_use]
    pub fn millivolts(self) -> f32 {
        f32::from(self.0) / 100.0
    }
}

/// Bus voltage register contents
///
/// The measurement sits in bits 3..=15 with 4mV per bit; the two lowest bits
/// are conversion status flags, discarded by the shift.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct BusVoltage(u16);

impl BusVoltage {
    /// Wrap the register bits
    #[must_use]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// The bus voltage in mV
    #[must_use]
    pub const fn millivolts(self) -> u16 {
        (self.0 >> 3) * 4
    }

    /// The bus voltage in V
    #[must_use]
    pub fn volts(self) -> f32 {
        f32::from(self.millivolts()) / 1000.0
    }
}

/// One snapshot of the five derived measurements
///
/// Produced once per poll iteration, printed and dropped; the monitor keeps
/// no history. The four sensor values come from independent register reads
/// and may reflect slightly different instants, the load voltage is derived
/// from them.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Reading {
    /// Current through the shunt in mA
    pub current_ma: f32,
    /// Voltage drop across the shunt in mV
    pub shunt_voltage_mv: f32,
    /// Voltage at the supply-side measurement point in V
    pub bus_voltage_v: f32,
    /// Voltage at the downstream load in V, always exactly
    /// `bus_voltage_v + shunt_voltage_mv / 1000`
    pub load_voltage_v: f32,
    /// Power drawn by the load in mW
    pub power_mw: f32,
}

impl Reading {
    /// Assemble a reading, deriving the load voltage
    #[must_use]
    pub fn new(current_ma: f32, shunt_voltage_mv: f32, bus_voltage_v: f32, power_mw: f32) -> Self {
        Self {
            current_ma,
            shunt_voltage_mv,
            bus_voltage_v,
            load_voltage_v: bus_voltage_v + shunt_voltage_mv / 1000.0,
            power_mw,
        }
    }
}

/// The five labeled report lines, one measurement per line
impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current:{} mA", self.current_ma)?;
        writeln!(f, "Shunt Voltage:{} mV", self.shunt_voltage_mv)?;
        writeln!(f, "Bus Voltage:{} V", self.bus_voltage_v)?;
        writeln!(f, "Load Voltage:{} V", self.load_voltage_v)?;
        write!(f, "Power:{} mW", self.power_mw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shunt_voltage_from_datasheet_table() {
        // Samples from table 7 of the datasheet
        let targets = [
            (0u16, 0i16),
            (0b0111_1100_1111_1111, 31999),
            (0b1111_0000_0101_1111, -4001),
            (0b1000_0011_0000_0000, -32000),
        ];

        for (bits, ten_uv) in targets {
            assert_eq!(ShuntVoltage::from_bits(bits).shunt_voltage_10uv(), ten_uv);
        }

        assert_eq!(ShuntVoltage::from_bits(100).millivolts(), 1.0);
        assert_eq!(ShuntVoltage::from_bits((-100i16) as u16).millivolts(), -1.0);
    }

    #[test]
    fn bus_voltage_ignores_flag_bits() {
        let bv = BusVoltage::from_bits(0x1f40 << 3);
        assert_eq!(bv.millivolts(), 32_000);
        assert_eq!(bv.volts(), 32.0);

        // Both status flags set, the measurement is unaffected
        let bv = BusVoltage::from_bits(((0x1f40 / 2) << 3) | 0b11);
        assert_eq!(bv.millivolts(), 16_000);
    }

    #[test]
    fn load_voltage_identity() {
        let cases = [
            (0.0f32, 0.0f32),
            (1.0, 9.0),
            (-1.0, 9.0),
            (0.56, 3.3),
            (319.99, 26.0),
        ];

        for (shunt_mv, bus_v) in cases {
            let reading = Reading::new(0.0, shunt_mv, bus_v, 0.0);
            assert_eq!(reading.load_voltage_v, bus_v + shunt_mv / 1000.0);
        }

        assert_eq!(Reading::new(5.0, 1.0, 9.0, 45.0).load_voltage_v, 9.001);
    }

    #[test]
    fn report_format() {
        let reading = Reading::new(5.0, 1.0, 9.0, 45.0);

        assert_eq!(
            reading.to_string(),
            "Current:5 mA\n\
             Shunt Voltage:1 mV\n\
             Bus Voltage:9 V\n\
             Load Voltage:9.001 V\n\
             Power:45 mW"
        );
    }
}
