//! CRC-16/IBM, the checksum vintage disk tooling settled on.
//!
//! Also catalogued as CRC-16/ARC: reflected polynomial `0xA001`, initial value `0x0000`, no final
//! XOR. The lookup table is built at compile time.
//!
//! # Examples
//! ```
//! use cartouche_core::crc::crc16_ibm;
//!
//! assert_eq!(crc16_ibm(b"123456789"), 0xBB3D);
//! assert_eq!(crc16_ibm(b""), 0x0000);
//! ```

/// CRC-16 polynomial 0x8005, reflected.
const POLYNOMIAL: u16 = 0xA001;

const fn build_table() -> [u16; 256] {
    let mut table = [0u16; 256];
    let mut index = 0;
    while index < 256 {
        let mut crc = index as u16;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 1 != 0 { (crc >> 1) ^ POLYNOMIAL } else { crc >> 1 };
            bit += 1;
        }
        table[index] = crc;
        index += 1;
    }
    table
}

static CRC_TABLE: [u16; 256] = build_table();

/// Computes the CRC-16/IBM checksum of a byte slice.
#[inline]
#[must_use]
pub fn crc16_ibm(data: &[u8]) -> u16 {
    let mut crc: u16 = 0;
    for &byte in data {
        crc = CRC_TABLE[usize::from((crc ^ u16::from(byte)) & 0xFF)] ^ (crc >> 8);
    }
    crc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_vectors() {
        assert_eq!(crc16_ibm(b""), 0x0000);
        assert_eq!(crc16_ibm(b"123456789"), 0xBB3D);
    }

    #[test]
    fn table_matches_the_published_one() {
        assert_eq!(CRC_TABLE[0x00], 0x0000);
        assert_eq!(CRC_TABLE[0x01], 0xC0C1);
        assert_eq!(CRC_TABLE[0x02], 0xC181);
        assert_eq!(CRC_TABLE[0x03], 0x0140);
        assert_eq!(CRC_TABLE[0xFF], 0x4040);
    }

    #[test]
    fn checksums_are_order_sensitive() {
        assert_ne!(crc16_ibm(b"ab"), crc16_ibm(b"ba"));
    }

    #[test]
    fn zero_bytes_leave_the_state_at_zero() {
        // Init is zero and there is no final XOR, so runs of zeroes are invisible.
        assert_eq!(crc16_ibm(&[0x00, 0x00, 0x00, 0x00]), 0x0000);
        assert_eq!(crc16_ibm(&[0xFF]), 0x4040);
    }
}
