// src/driver/state.rs

use crate::common::address::DeviceAddr;

/// Live attachment to a sensor: the bus handle and where the sensor sits on it.
#[derive(Debug)]
pub struct Connection<B> {
    pub(crate) bus: B,
    pub(crate) address: DeviceAddr,
}

impl<B> Connection<B> {
    pub fn address(&self) -> DeviceAddr {
        self.address
    }

    pub fn into_bus(self) -> B {
        self.bus
    }
}

/// Everything the driver knows about its sensor.
///
/// All fields except `connection` stay zero until the first successful probe
/// and are kept (stale) after the sensor is removed.
#[derive(Debug)]
pub struct SensorState<B> {
    pub(crate) connection: Option<Connection<B>>,
    pub(crate) accel_raw: [i16; 3],
    pub(crate) gyro_raw: [i16; 3],
    /// Already decoded, whole °C.
    pub(crate) temperature: i16,
    pub(crate) accel_scale: u16,
    pub(crate) gyro_scale: u16,
    pub(crate) sample_rate_hz: u16,
}

impl<B> SensorState<B> {
    pub const fn new() -> Self {
        SensorState {
            connection: None,
            accel_raw: [0; 3],
            gyro_raw: [0; 3],
            temperature: 0,
            accel_scale: 0,
            gyro_scale: 0,
            sample_rate_hz: 0,
        }
    }

    #[inline]
    pub fn is_attached(&self) -> bool {
        self.connection.is_some()
    }

    /// True once a probe has set the scale factors.
    #[inline]
    pub fn is_configured(&self) -> bool {
        self.accel_scale != 0 && self.gyro_scale != 0
    }

    pub fn connection(&self) -> Option<&Connection<B>> {
        self.connection.as_ref()
    }

    pub fn accel_raw(&self) -> [i16; 3] {
        self.accel_raw
    }

    pub fn gyro_raw(&self) -> [i16; 3] {
        self.gyro_raw
    }

    pub fn temperature(&self) -> i16 {
        self.temperature
    }

    pub fn accel_scale(&self) -> u16 {
        self.accel_scale
    }

    pub fn gyro_scale(&self) -> u16 {
        self.gyro_scale
    }

    pub fn sample_rate_hz(&self) -> u16 {
        self.sample_rate_hz
    }
}

impl<B> Default for SensorState<B> {
    fn default() -> Self {
        Self::new()
    }
}
