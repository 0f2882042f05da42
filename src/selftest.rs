use crate::crc::{CHECK, CrcError, MAGIC_CHECK, XOR_VALUE, calculate_crc8_default};

/// CRC of four zero bytes, fed back in for the magic check
const ZERO_CRC: u8 = 0x59;

struct KnownAnswer {
    name: &'static str,
    expected: u8,
    compute: fn() -> u8,
}

const KNOWN_ANSWERS: [KnownAnswer; 3] = [
    KnownAnswer {
        name: "check",
        expected: CHECK,
        compute: || calculate_crc8_default(b"123456789"),
    },
    KnownAnswer {
        name: "zero",
        expected: ZERO_CRC,
        compute: || calculate_crc8_default(&[0x00; 4]),
    },
    KnownAnswer {
        name: "magic check",
        expected: MAGIC_CHECK,
        compute: || calculate_crc8_default(&[0x00, 0x00, 0x00, 0x00, ZERO_CRC]) ^ XOR_VALUE,
    },
];

/// Run the known-answer tests, stopping at the first failure
pub fn run() -> Result<(), CrcError> {
    for test in &KNOWN_ANSWERS {
        check(test.name, test.expected, (test.compute)())?;
    }
    log::info!("CRC-8 self-test passed");
    Ok(())
}

fn check(name: &'static str, expected: u8, actual: u8) -> Result<(), CrcError> {
    if actual != expected {
        log::error!("CRC-8 self-test `{name}` failed: 0x{actual:02X} != 0x{expected:02X}");
        return Err(CrcError::SelfTest {
            name,
            expected,
            actual,
        });
    }
    log::debug!("CRC-8 self-test `{name}` ok (0x{actual:02X})");
    Ok(())
}
