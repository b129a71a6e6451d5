//! I2C address of the INA219 on the bus
//!
//! The address is selected by strapping the pins A0 and A1 to one of four
//! signals, giving the range 0x40..=0x4F. See table 1 of the datasheet.

use core::fmt::{self, Formatter};
use core::ops::RangeInclusive;

/// Signal an address pin is strapped to
///
/// The values match the bits the pin contributes to the address.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum Pin {
    /// The pin is connected to GND
    Gnd = 0,
    /// The pin is connected to Vcc
    Vcc = 1,
    /// The pin is connected to SDA
    Sda = 2,
    /// The pin is connected to SCL
    Scl = 3,
}

/// Validated I2C address of an INA219
///
/// # Example
/// ```rust
/// use ina219_monitor::address::{Address, Pin};
///
/// let address = Address::from_pins(Pin::Sda, Pin::Scl);
/// assert_eq!(address.as_byte(), 0b100_1110);
///
/// assert!(Address::from_byte(42).is_err());
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Address(u8);

impl Address {
    const VALID: RangeInclusive<u8> = 0b100_0000..=0b100_1111;
    const MIN: u8 = *Self::VALID.start();
    const MAX: u8 = *Self::VALID.end();

    /// Address selected by strapping A0 and A1
    #[must_use]
    pub const fn from_pins(a0: Pin, a1: Pin) -> Self {
        Self(Self::MIN | (a1 as u8) << 2 | a0 as u8)
    }

    /// Address given as a byte
    ///
    /// # Errors
    /// Returns `OutOfRange` if the byte is outside the range an INA219 can
    /// respond on.
    pub const fn from_byte(byte: u8) -> Result<Self, OutOfRange> {
        match byte {
            Self::MIN..=Self::MAX => Ok(Self(byte)),
            which => Err(OutOfRange { which }),
        }
    }

    /// Get the address as a byte
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        self.0
    }
}

impl Default for Address {
    /// Both pins strapped to GND, 0x40
    fn default() -> Self {
        Self::from_pins(Pin::Gnd, Pin::Gnd)
    }
}

impl TryFrom<u8> for Address {
    type Error = OutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_byte(value)
    }
}

/// The given byte is not a valid INA219 address
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct OutOfRange {
    which: u8,
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "address {:#04x} is out of range, expected {:#04x}..={:#04x}",
            self.which,
            Address::MIN,
            Address::MAX,
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OutOfRange {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datasheet_examples() {
        use Pin::{Gnd, Scl, Sda, Vcc};

        let values = [
            // A1, A0, ADDRESS
            (Gnd, Gnd, 0b100_0000),
            (Gnd, Vcc, 0b100_0001),
            (Gnd, Sda, 0b100_0010),
            (Gnd, Scl, 0b100_0011),
            (Vcc, Gnd, 0b100_0100),
            (Vcc, Vcc, 0b100_0101),
            (Vcc, Sda, 0b100_0110),
            (Vcc, Scl, 0b100_0111),
            (Sda, Gnd, 0b100_1000),
            (Sda, Vcc, 0b100_1001),
            (Sda, Sda, 0b100_1010),
            (Sda, Scl, 0b100_1011),
            (Scl, Gnd, 0b100_1100),
            (Scl, Vcc, 0b100_1101),
            (Scl, Sda, 0b100_1110),
            (Scl, Scl, 0b100_1111),
        ];

        for (a1, a0, byte) in values {
            assert_eq!(Address::from_pins(a0, a1).as_byte(), byte);
        }
    }

    #[test]
    fn byte_round_trip() {
        for byte in Address::VALID {
            assert_eq!(Address::from_byte(byte).unwrap().as_byte(), byte);
        }

        assert!(Address::from_byte(0b011_1111).is_err());
        assert!(Address::from_byte(0b101_0000).is_err());
    }

    #[test]
    fn default_is_0x40() {
        assert_eq!(Address::default().as_byte(), 0x40);
    }
}
