// src/driver/mod.rs

// Each file adds an impl block to Mpu6050
mod probe;
mod state;
mod update;

pub use probe::ConfigReport;
pub use state::{Connection, SensorState};

use crate::common::address::DeviceAddr;

/// MPU6050 driver for a single sensor.
///
/// Starts out unattached. `probe()` attaches it to a bus once the device
/// identity checks out, `remove()` detaches it again. `&mut self` on every
/// operation keeps attach/detach and reads from interleaving; wrap it in a
/// [`SharedMpu6050`](crate::readout::SharedMpu6050) to share it.
#[derive(Debug)]
pub struct Mpu6050<B> {
    state: SensorState<B>,
}

/// A sample in display units.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Measurement {
    /// Acceleration in milli-g, X/Y/Z.
    pub accel_mg: [i32; 3],
    /// Angular rate in whole °/s, X/Y/Z, truncated.
    pub gyro_dps: [i16; 3],
    /// Die temperature in whole °C.
    pub temperature_c: i16,
    pub sample_rate_hz: u16,
}

impl<B> Mpu6050<B> {
    pub const fn new() -> Self {
        Mpu6050 { state: SensorState::new() }
    }

    pub fn state(&self) -> &SensorState<B> {
        &self.state
    }

    #[inline]
    pub fn is_attached(&self) -> bool {
        self.state.is_attached()
    }

    /// Address of the attached sensor.
    pub fn address(&self) -> Option<DeviceAddr> {
        self.state.connection().map(Connection::address)
    }

    /// Direct access to the attached bus.
    pub fn bus_mut(&mut self) -> Option<&mut B> {
        self.state.connection.as_mut().map(|c| &mut c.bus)
    }
}

impl<B> Default for Mpu6050<B> {
    fn default() -> Self {
        Self::new()
    }
}
