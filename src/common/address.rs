// src/common/address.rs

use super::error::Mpu6050Error;
use core::convert::TryFrom;
use core::fmt;

/// 7-bit bus address of an MPU6050.
///
/// The AD0 pin selects between the only two addresses the part answers on.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct DeviceAddr(u8);

impl DeviceAddr {
    /// AD0 tied low.
    pub const DEFAULT_ADDRESS: DeviceAddr = DeviceAddr(0x68);
    /// AD0 tied high.
    pub const ALTERNATE_ADDRESS: DeviceAddr = DeviceAddr(0x69);

    /// Creates a new `DeviceAddr` if the given value is one of the sensor's
    /// strap addresses. Returns `Mpu6050Error<()>` because validation itself
    /// cannot cause a bus error.
    pub fn new(address: u8) -> Result<Self, Mpu6050Error<()>> {
        if Self::is_valid_address(address) {
            Ok(DeviceAddr(address))
        } else {
            Err(Mpu6050Error::InvalidAddress(address))
        }
    }

    #[inline]
    pub const fn get(&self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_alternate(&self) -> bool {
        self.0 == Self::ALTERNATE_ADDRESS.0
    }

    #[inline]
    pub const fn is_valid_address(address: u8) -> bool {
        matches!(address, 0x68 | 0x69)
    }
}

impl Default for DeviceAddr {
    fn default() -> Self {
        Self::DEFAULT_ADDRESS
    }
}

impl TryFrom<u8> for DeviceAddr {
    type Error = Mpu6050Error<()>;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DeviceAddr> for u8 {
    fn from(value: DeviceAddr) -> Self {
        value.0
    }
}

impl fmt::Display for DeviceAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04X}", self.0)
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_addresses() {
        assert_eq!(DeviceAddr::new(0x68).unwrap(), DeviceAddr::DEFAULT_ADDRESS);
        assert_eq!(DeviceAddr::new(0x69).unwrap(), DeviceAddr::ALTERNATE_ADDRESS);
        assert!(DeviceAddr::ALTERNATE_ADDRESS.is_alternate());
        assert!(!DeviceAddr::default().is_alternate());
    }

    #[test]
    fn test_invalid_addresses() {
        assert!(matches!(DeviceAddr::new(0x00), Err(Mpu6050Error::InvalidAddress(0x00))));
        assert!(matches!(DeviceAddr::new(0x6A), Err(Mpu6050Error::InvalidAddress(0x6A))));
        assert!(matches!(DeviceAddr::new(0xD0), Err(Mpu6050Error::InvalidAddress(0xD0))));
    }

    #[test]
    fn test_try_from_and_into() {
        let addr = DeviceAddr::try_from(0x69).unwrap();
        assert_eq!(u8::from(addr), 0x69);
        assert!(matches!(DeviceAddr::try_from(0x77), Err(Mpu6050Error::InvalidAddress(0x77))));
    }

    #[test]
    fn test_display() {
        assert_eq!(DeviceAddr::DEFAULT_ADDRESS.to_string(), "0x68");
    }
}
