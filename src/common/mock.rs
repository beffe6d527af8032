// src/common/mock.rs

//! Recording bus transport for unit tests.

use super::hal_traits::BusTransport;
use super::registers::{Register, ACCEL_OUT, GYRO_OUT, WHO_AM_I_VALUE};
use std::vec::Vec;

/// Bus transaction type for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusTransaction {
    ReadByte { address: u8, reg: u8 },
    WriteByte { address: u8, reg: u8, value: u8 },
    ReadWordSwapped { address: u8, reg: u8 },
}

/// Errno-style failure code, like the one a kernel SMBus call reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockBusError(pub i32);

/// -EIO
pub const EIO: MockBusError = MockBusError(-5);

/// Mock MPU6050 on a bus.
///
/// Records every transaction (including failed ones) and answers word reads
/// from a register file indexed by the high-byte address.
#[derive(Debug, Clone)]
pub struct MockBus {
    identity: u8,
    words: [u16; 0x80],
    failing_reads: Vec<u8>,
    failing_writes: Vec<u8>,
    transactions: Vec<BusTransaction>,
}

impl MockBus {
    pub fn new() -> Self {
        Self::with_identity(WHO_AM_I_VALUE)
    }

    pub fn with_identity(identity: u8) -> Self {
        MockBus {
            identity,
            words: [0; 0x80],
            failing_reads: Vec::new(),
            failing_writes: Vec::new(),
            transactions: Vec::new(),
        }
    }

    pub fn set_raw(&mut self, reg: Register, raw: i16) {
        self.words[reg.addr() as usize] = raw as u16;
    }

    pub fn set_readings(&mut self, accel: [i16; 3], gyro: [i16; 3], temp: i16) {
        for (reg, raw) in ACCEL_OUT.iter().zip(accel) {
            self.set_raw(*reg, raw);
        }
        for (reg, raw) in GYRO_OUT.iter().zip(gyro) {
            self.set_raw(*reg, raw);
        }
        self.set_raw(Register::TempOutH, temp);
    }

    /// Makes every later read of `reg` fail with `EIO`.
    pub fn fail_read(&mut self, reg: Register) {
        self.failing_reads.push(reg.addr());
    }

    /// Makes every later write to `reg` fail with `EIO`.
    pub fn fail_write(&mut self, reg: Register) {
        self.failing_writes.push(reg.addr());
    }

    pub fn heal(&mut self) {
        self.failing_reads.clear();
        self.failing_writes.clear();
    }

    pub fn transactions(&self) -> &[BusTransaction] {
        &self.transactions
    }

    pub fn clear_transactions(&mut self) {
        self.transactions.clear();
    }

    /// `(reg, value)` of every attempted write, in order.
    pub fn writes(&self) -> Vec<(u8, u8)> {
        self.transactions
            .iter()
            .filter_map(|t| match *t {
                BusTransaction::WriteByte { reg, value, .. } => Some((reg, value)),
                _ => None,
            })
            .collect()
    }

    /// Register of every attempted word read, in order.
    pub fn word_reads(&self) -> Vec<u8> {
        self.transactions
            .iter()
            .filter_map(|t| match *t {
                BusTransaction::ReadWordSwapped { reg, .. } => Some(reg),
                _ => None,
            })
            .collect()
    }
}

impl BusTransport for MockBus {
    type Error = MockBusError;

    fn read_byte_data(&mut self, address: u8, reg: u8) -> Result<u8, Self::Error> {
        self.transactions.push(BusTransaction::ReadByte { address, reg });
        if self.failing_reads.contains(&reg) {
            return Err(EIO);
        }
        if reg == Register::WhoAmI.addr() {
            Ok(self.identity)
        } else {
            Ok((self.words[reg as usize] >> 8) as u8)
        }
    }

    fn write_byte_data(&mut self, address: u8, reg: u8, value: u8) -> Result<(), Self::Error> {
        self.transactions.push(BusTransaction::WriteByte { address, reg, value });
        if self.failing_writes.contains(&reg) {
            return Err(EIO);
        }
        Ok(())
    }

    fn read_word_swapped(&mut self, address: u8, reg: u8) -> Result<u16, Self::Error> {
        self.transactions.push(BusTransaction::ReadWordSwapped { address, reg });
        if self.failing_reads.contains(&reg) {
            return Err(EIO);
        }
        Ok(self.words[reg as usize])
    }
}
