// src/common/error.rs

#[derive(Debug, thiserror::Error)]
pub enum Mpu6050Error<E = ()>
where
    E: core::fmt::Debug, // Needed for the Bus variant's format string
{
    /// Underlying error from the bus transport, passed through unchanged.
    #[error("Bus transport error: {0:?}")]
    Bus(E),

    /// The device answering at the bus address is not an MPU6050.
    #[error("Wrong device: expected WHO_AM_I {expected:#04x}, found {found:#04x}")]
    IdentityMismatch { expected: u8, found: u8 },

    /// No sensor is attached.
    #[error("No device attached")]
    NoDevice,

    /// Bus address the sensor cannot strap to.
    #[error("Invalid MPU6050 bus address: {0:#04x}")]
    InvalidAddress(u8),

    /// Buffer provided was too small.
    #[error("Buffer overflow: needed {needed}, got {got}")]
    BufferOverflow { needed: usize, got: usize },

    /// The readout record did not fit its fixed-size buffer.
    #[error("Failed to format readout record")]
    FormatFailed,
}

impl<E: core::fmt::Debug> Mpu6050Error<E> {
    /// Returns the transport error, if this is a bus failure.
    pub fn bus_error(&self) -> Option<&E> {
        match self {
            Mpu6050Error::Bus(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct MockIoError(i32);

    #[test]
    fn test_bus_error_accessor() {
        let err: Mpu6050Error<MockIoError> = Mpu6050Error::Bus(MockIoError(-5));
        assert_eq!(err.bus_error(), Some(&MockIoError(-5)));

        let err: Mpu6050Error<MockIoError> = Mpu6050Error::NoDevice;
        assert_eq!(err.bus_error(), None);
    }

    #[test]
    fn test_display_messages() {
        let err: Mpu6050Error<MockIoError> = Mpu6050Error::IdentityMismatch { expected: 0x68, found: 0x70 };
        assert_eq!(err.to_string(), "Wrong device: expected WHO_AM_I 0x68, found 0x70");

        let err: Mpu6050Error<MockIoError> = Mpu6050Error::Bus(MockIoError(-121));
        assert_eq!(err.to_string(), "Bus transport error: MockIoError(-121)");

        let err: Mpu6050Error = Mpu6050Error::BufferOverflow { needed: 71, got: 16 };
        assert_eq!(err.to_string(), "Buffer overflow: needed 71, got 16");
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_boxes_as_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(Mpu6050Error::<MockIoError>::NoDevice);
        assert_eq!(err.to_string(), "No device attached");
        assert!(err.source().is_none());
    }
}
