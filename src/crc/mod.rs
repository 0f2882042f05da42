//! 8-bit SAE J1850 CRC as used by AUTOSAR E2E profiles.
//!
//! Polynomial: 0x1D, Initial: 0xFF, No reflection, Final XOR: 0xFF
//!
//! Every call returns the XORed value. A follow-up call with `first_call = false`
//! removes the XOR again before continuing, so a checksum can be fed in any
//! number of chunks and still match the one-shot result.

use thiserror::Error;

use crate::payload::PayloadKind;

mod table;

pub use table::POLYNOMIAL;
use table::CRC_TABLE;

/// Seed of the accumulator on the first call of a sequence
pub const INITIAL_VALUE: u8 = 0xFF;
/// Applied to the accumulator on output, removed again on carry-in
pub const XOR_VALUE: u8 = 0xFF;
/// CRC of the ASCII string `"123456789"`
pub const CHECK: u8 = 0x4B;
/// CRC of a message followed by its own CRC, XORed with [`XOR_VALUE`]
pub const MAGIC_CHECK: u8 = 0xC4;

#[derive(Error, Debug, PartialEq)]
pub enum CrcError {
    #[error("expected a byte sequence, got {kind}")]
    InvalidInputKind { kind: PayloadKind },
    #[error("CRC mismatch: expected 0x{expected:02X}, got 0x{actual:02X}")]
    Mismatch { expected: u8, actual: u8 },
    #[error("self-test `{name}` failed: expected 0x{expected:02X}, got 0x{actual:02X}")]
    SelfTest {
        name: &'static str,
        expected: u8,
        actual: u8,
    },
}

/// Calculate the CRC-8 of `data`.
///
/// `start_value` is ignored when `first_call` is `true`. In a sequence it is
/// expected to be the return value of the previous call.
pub const fn calculate_crc8(data: &[u8], start_value: u8, first_call: bool) -> u8 {
    let mut crc = if first_call {
        INITIAL_VALUE
    } else {
        start_value ^ XOR_VALUE
    };

    let mut i = 0;
    while i < data.len() {
        crc = CRC_TABLE[(crc ^ data[i]) as usize];
        i += 1;
    }

    crc ^ XOR_VALUE
}

/// One-shot CRC-8 of a whole buffer
pub const fn calculate_crc8_default(data: &[u8]) -> u8 {
    calculate_crc8(data, INITIAL_VALUE, true)
}

pub fn verify_crc8(data: &[u8], expected: u8) -> Result<(), CrcError> {
    match calculate_crc8_default(data) {
        actual if actual == expected => Ok(()),
        actual => Err(CrcError::Mismatch { expected, actual }),
    }
}

/// Caller-owned running checksum for data arriving in chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crc8 {
    value: u8,
    first: bool,
}

impl Crc8 {
    pub const fn new() -> Self {
        Crc8 {
            value: INITIAL_VALUE,
            first: true,
        }
    }

    pub fn update(&mut self, data: &[u8]) -> u8 {
        self.value = calculate_crc8(data, self.value, self.first);
        self.first = false;
        self.value
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// true until the first chunk has been fed
    pub fn is_first(&self) -> bool {
        self.first
    }

    /// Checksum of everything fed so far
    pub fn value(&self) -> u8 {
        if self.first {
            calculate_crc8_default(&[])
        } else {
            self.value
        }
    }
}

impl Default for Crc8 {
    fn default() -> Self {
        Self::new()
    }
}
