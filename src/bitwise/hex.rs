// Hexadecimal renderings used in decoded records
// No zero padding: 0x0A renders as "a", 0x0100 as "100"

use std::fmt::LowerHex;
use std::fmt::UpperHex;

/// Plain lowercase base-16 rendering
pub fn hex<T: LowerHex>(value: T) -> String {
    format!("{:x}", value)
}

/// Plain uppercase base-16 rendering
pub fn hex_upper<T: UpperHex>(value: T) -> String {
    format!("{:X}", value)
}

/// Render each byte as lowercase hex, most significant (last) byte first,
/// joined with '.'
/// Example: [0x01, 0x02, 0x1A] -> "1a.2.1"
pub fn dotted_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .rev()
        .map(|b| hex(*b))
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_has_no_padding() {
        assert_eq!(hex(0x0Au8), "a");
        assert_eq!(hex(0x00u8), "0");
        assert_eq!(hex(0xFFu8), "ff");
        assert_eq!(hex_upper(0x0100u16), "100");
        assert_eq!(hex_upper(0x00AB_CDEFu32), "ABCDEF");
    }

    #[test]
    fn test_dotted_hex() {
        assert_eq!(dotted_hex(&[0x01, 0x02, 0x1A]), "1a.2.1");
        assert_eq!(dotted_hex(&[0x00, 0x10]), "10.0");
        assert_eq!(dotted_hex(&[0x07]), "7");
        assert_eq!(dotted_hex(&[]), "");
    }
}
