// src/readout/shared.rs

use super::record::{self, Record};
use crate::common::{address::DeviceAddr, error::Mpu6050Error, hal_traits::BusTransport};
use crate::driver::{ConfigReport, Mpu6050};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::{Mutex, TryLockError};

/// Driver shared between the attach/detach path and readout requests.
///
/// Every operation holds one lock for its whole duration, so a `remove()`
/// can never land between the seven reads of an update. The raw mutex `M`
/// only guards the lock state itself and is never held across a bus
/// transfer: with `CriticalSectionRawMutex`, interrupts stay enabled while
/// an update runs, so a HAL timeout can still fire on a hung transfer.
///
/// The operations are async and wait for the lock. Blocking callers can
/// drive them with `embassy_futures::block_on`, or use
/// [`SharedMpu6050::try_lock`] where waiting is not an option (interrupt
/// handlers).
pub struct SharedMpu6050<M: RawMutex, B> {
    inner: Mutex<M, Mpu6050<B>>,
}

impl<M: RawMutex, B> SharedMpu6050<M, B> {
    /// Creates an unattached driver. This is a const fn, allowing static initialization.
    pub const fn new() -> Self {
        SharedMpu6050 {
            inner: Mutex::new(Mpu6050::new()),
        }
    }

    /// Runs `f` with exclusive access to the driver, waiting for any
    /// operation in progress to finish.
    pub async fn lock<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Mpu6050<B>) -> R,
    {
        let mut driver = self.inner.lock().await;
        f(&mut driver)
    }

    /// Runs `f` with exclusive access to the driver, or fails at once if
    /// another operation holds it.
    pub fn try_lock<F, R>(&self, f: F) -> Result<R, TryLockError>
    where
        F: FnOnce(&mut Mpu6050<B>) -> R,
    {
        let mut driver = self.inner.try_lock()?;
        Ok(f(&mut driver))
    }

    pub async fn is_attached(&self) -> bool {
        self.lock(|driver| driver.is_attached()).await
    }

    pub async fn remove(&self) -> Option<B> {
        self.lock(|driver| driver.remove()).await
    }
}

impl<M: RawMutex, B: BusTransport> SharedMpu6050<M, B> {
    pub async fn probe(&self, bus: B, address: DeviceAddr) -> Result<ConfigReport, Mpu6050Error<B::Error>> {
        self.lock(|driver| driver.probe(bus, address)).await
    }

    pub async fn read_record(&self) -> Result<Record, Mpu6050Error<B::Error>> {
        self.lock(record::read_record).await
    }

    pub async fn read_into(&self, buf: &mut [u8]) -> Result<usize, Mpu6050Error<B::Error>> {
        self.lock(|driver| record::read_into(driver, buf)).await
    }
}

impl<M: RawMutex, B> Default for SharedMpu6050<M, B> {
    fn default() -> Self {
        Self::new()
    }
}
