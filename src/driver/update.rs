// src/driver/update.rs

use super::{Measurement, Mpu6050};
use crate::common::{
    decode::{decode_accel_mg, decode_gyro_dps, decode_temperature, raw_from_word},
    error::Mpu6050Error,
    hal_traits::BusTransport,
    registers::{Register, ACCEL_OUT, GYRO_OUT},
};
use log::debug;

impl<B> Mpu6050<B>
where
    B: BusTransport,
{
    /// Reads a fresh sample: accel X/Y/Z, gyro X/Y/Z, then temperature.
    ///
    /// Fails with `NoDevice` without touching the bus when nothing is
    /// attached. The first failing read aborts the rest; readings taken
    /// earlier in the same call are kept.
    pub fn update(&mut self) -> Result<(), Mpu6050Error<B::Error>> {
        debug!("mpu6050: update the data");

        let state = &mut self.state;
        let connection = state.connection.as_mut().ok_or(Mpu6050Error::NoDevice)?;
        let address = connection.address.get();

        for (axis, reg) in ACCEL_OUT.iter().enumerate() {
            state.accel_raw[axis] = read_raw(&mut connection.bus, address, *reg)?;
        }
        for (axis, reg) in GYRO_OUT.iter().enumerate() {
            state.gyro_raw[axis] = read_raw(&mut connection.bus, address, *reg)?;
        }
        state.temperature = decode_temperature(read_raw(&mut connection.bus, address, Register::TempOutH)?);

        debug!("mpu6050: ACCEL[X,Y,Z] = {:?}", state.accel_raw);
        debug!("mpu6050: GYRO[X,Y,Z] = {:?}", state.gyro_raw);
        debug!("mpu6050: TEMP = {}", state.temperature);
        Ok(())
    }
}

impl<B> Mpu6050<B> {
    /// Converts the last readings to display units.
    ///
    /// Returns `None` until a probe has configured the scale factors. Does not
    /// touch the bus, so after `remove()` this still reports the stale sample.
    pub fn measurement(&self) -> Option<Measurement> {
        let state = &self.state;
        if !state.is_configured() {
            return None;
        }

        Some(Measurement {
            accel_mg: state.accel_raw.map(|raw| decode_accel_mg(raw, state.accel_scale)),
            gyro_dps: state.gyro_raw.map(|raw| decode_gyro_dps(raw, state.gyro_scale)),
            temperature_c: state.temperature,
            sample_rate_hz: state.sample_rate_hz,
        })
    }
}

fn read_raw<B: BusTransport>(bus: &mut B, address: u8, reg: Register) -> Result<i16, Mpu6050Error<B::Error>> {
    bus.read_word_swapped(address, reg.addr())
        .map(raw_from_word)
        .map_err(Mpu6050Error::Bus)
}
