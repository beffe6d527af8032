// src/driver/probe.rs

use super::state::Connection;
use super::Mpu6050;
use crate::common::{
    address::DeviceAddr,
    config::{RegWrite, ACCEL_SCALE, CONFIG_SEQUENCE, CONFIG_WRITES, GYRO_SCALE, SAMPLE_RATE_HZ},
    error::Mpu6050Error,
    hal_traits::BusTransport,
    registers::{Register, WHO_AM_I_VALUE},
};
use log::{debug, error, info, warn};

/// Outcome of the configuration writes issued by a successful probe.
///
/// Writes are best effort: a failure is logged and listed here but does not
/// stop the remaining writes or the attach.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigReport {
    failed: heapless::Vec<RegWrite, CONFIG_WRITES>,
}

impl ConfigReport {
    /// Number of writes issued, successful or not.
    pub const fn attempted(&self) -> usize {
        CONFIG_WRITES
    }

    /// Writes the bus rejected, in the order they were issued.
    pub fn failed_writes(&self) -> &[RegWrite] {
        &self.failed
    }

    /// True if every write succeeded.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    fn record_failure(&mut self, write: RegWrite) {
        // One slot per sequence entry, so this cannot run out of room.
        let _ = self.failed.push(write);
    }
}

impl<B> Mpu6050<B>
where
    B: BusTransport,
{
    /// Checks the identity of the device at `address` and, if it is an
    /// MPU6050, attaches to it and writes the fixed configuration.
    ///
    /// On error nothing is written and the driver keeps whatever attachment
    /// it had before.
    pub fn probe(&mut self, mut bus: B, address: DeviceAddr) -> Result<ConfigReport, Mpu6050Error<B::Error>> {
        info!("mpu6050: i2c client address is {}", address);

        let found = bus
            .read_byte_data(address.get(), Register::WhoAmI.addr())
            .map_err(|e| {
                error!("mpu6050: reading WHO_AM_I failed with error: {:?}", e);
                Mpu6050Error::Bus(e)
            })?;

        if found != WHO_AM_I_VALUE {
            error!(
                "mpu6050: wrong i2c device found: expected {:#04X}, found {:#04X}",
                WHO_AM_I_VALUE, found
            );
            return Err(Mpu6050Error::IdentityMismatch { expected: WHO_AM_I_VALUE, found });
        }

        if self.state.is_attached() {
            warn!("mpu6050: replacing the existing attachment");
        }

        self.state.sample_rate_hz = SAMPLE_RATE_HZ;
        self.state.accel_scale = ACCEL_SCALE;
        self.state.gyro_scale = GYRO_SCALE;

        info!("mpu6050: device found, WHO_AM_I register value = {:#04X}", found);

        let connection = self.state.connection.insert(Connection { bus, address });
        let report = apply_config(connection);

        info!(
            "mpu6050: driver probed ({} of {} configuration writes failed)",
            report.failed_writes().len(),
            report.attempted()
        );
        Ok(report)
    }
}

impl<B> Mpu6050<B> {
    /// Detaches from the sensor and hands the bus back.
    ///
    /// Readings stay in the state but `update()` fails with `NoDevice` until
    /// the next successful probe.
    pub fn remove(&mut self) -> Option<B> {
        match self.state.connection.take() {
            Some(connection) => {
                info!("mpu6050: driver removed");
                Some(connection.into_bus())
            }
            None => {
                debug!("mpu6050: remove called with no device attached");
                None
            }
        }
    }
}

fn apply_config<B: BusTransport>(connection: &mut Connection<B>) -> ConfigReport {
    let mut report = ConfigReport::default();
    let address = connection.address.get();

    for write in CONFIG_SEQUENCE.iter() {
        let addr = write.reg.addr();
        debug!("mpu6050: write_reg {:<12}({:#04X}) = {:#04x}", write.reg.name(), addr, write.value);
        if let Err(e) = connection.bus.write_byte_data(address, addr, write.value) {
            warn!("mpu6050: write to {} failed: {:?}", write.reg.name(), e);
            report.record_failure(*write);
        }
    }

    report
}
