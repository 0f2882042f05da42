/// SAE J1850 generator polynomial, `x^8 + x^4 + x^3 + x^2 + 1`. Not reflected.
pub const POLYNOMIAL: u8 = 0x1D;

/// precompute CRC table
const fn make_crc_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = i as u8;
        let mut j = 0;
        while j < 8 {
            if crc & 0x80 != 0 {
                crc = (crc << 1) ^ POLYNOMIAL;
            } else {
                crc <<= 1;
            }
            j += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

pub(super) const CRC_TABLE: [u8; 256] = make_crc_table();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_edges() {
        assert_eq!(CRC_TABLE[0x00], 0x00);
        assert_eq!(CRC_TABLE[0x01], POLYNOMIAL);
        assert_eq!(CRC_TABLE[0x02], 0x3A);
        assert_eq!(CRC_TABLE[0x03], 0x27);
        assert_eq!(CRC_TABLE[0xFF], 0xC4);
    }

    #[test]
    fn test_table_matches_bitwise() {
        for (i, &entry) in CRC_TABLE.iter().enumerate() {
            let mut crc = i as u8;
            for _ in 0..u8::BITS {
                let carry = crc & 0x80 != 0;
                crc <<= 1;
                if carry {
                    crc ^= POLYNOMIAL;
                }
            }
            assert_eq!(entry, crc, "table entry {i:#04X}");
        }
    }
}
