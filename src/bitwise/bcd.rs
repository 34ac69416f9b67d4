// Binary-Coded Decimal (BCD) helpers
// Used for the SP4 month byte and the status-summary digit reinterpretation

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BcdError {
    #[error("Invalid BCD digit: {0:#x}")]
    InvalidDigit(u8),

    #[error("Value too large for BCD array: {0}")]
    ValueTooLarge(u64),
}

pub type Result<T> = std::result::Result<T, BcdError>;

/// Convert a BCD byte to its two decimal digits (tens, ones)
/// Example: 0x12 -> (1, 2), 0x95 -> (9, 5)
pub fn bcd_byte_to_digits(byte: u8) -> Result<(u8, u8)> {
    let tens = (byte & 0xF0) >> 4;
    let ones = byte & 0x0F;

    if tens > 9 || ones > 9 {
        return Err(BcdError::InvalidDigit(byte));
    }

    Ok((tens, ones))
}

/// Convert a BCD array to an integer (big-endian)
/// Example: [0x12, 0x34, 0x56] -> 123456
pub fn bcd_to_int_be(bcd_array: &[u8]) -> Result<u64> {
    let mut value: u64 = 0;

    for &byte in bcd_array {
        let (tens, ones) = bcd_byte_to_digits(byte)?;
        value = value
            .checked_mul(100)
            .ok_or(BcdError::ValueTooLarge(value))?;
        value = value
            .checked_add((tens * 10 + ones) as u64)
            .ok_or(BcdError::ValueTooLarge(value))?;
    }

    Ok(value)
}

/// Pack the decimal digits of `value` as BCD into a big-endian integer.
///
/// This is the same as printing `value` in decimal and reading the text
/// back as hexadecimal: 2 -> 0x2, 10 -> 0x10, 255 -> 0x255.
pub fn int_to_bcd_packed(value: u64) -> Result<u64> {
    let mut remaining = value;
    let mut packed: u64 = 0;
    let mut shift = 0u32;

    loop {
        if shift >= u64::BITS {
            return Err(BcdError::ValueTooLarge(value));
        }
        packed |= (remaining % 10) << shift;
        remaining /= 10;
        shift += 4;
        if remaining == 0 {
            break;
        }
    }

    Ok(packed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bcd_byte_conversion() {
        assert_eq!(bcd_byte_to_digits(0x12).unwrap(), (1, 2));
        assert_eq!(bcd_byte_to_digits(0x95).unwrap(), (9, 5));
        assert_eq!(bcd_byte_to_digits(0x00).unwrap(), (0, 0));

        assert_eq!(bcd_byte_to_digits(0xAB), Err(BcdError::InvalidDigit(0xAB)));
        assert!(bcd_byte_to_digits(0x1A).is_err());
    }

    #[test]
    fn test_bcd_to_int_be() {
        assert_eq!(bcd_to_int_be(&[0x12, 0x34, 0x56]).unwrap(), 123456);
        assert_eq!(bcd_to_int_be(&[0x05]).unwrap(), 5);
        assert_eq!(bcd_to_int_be(&[0x12]).unwrap(), 12);
        assert!(bcd_to_int_be(&[0x0C]).is_err());
    }

    #[test]
    fn test_int_to_bcd_packed() {
        assert_eq!(int_to_bcd_packed(0).unwrap(), 0x0);
        assert_eq!(int_to_bcd_packed(2).unwrap(), 0x2);
        assert_eq!(int_to_bcd_packed(10).unwrap(), 0x10);
        assert_eq!(int_to_bcd_packed(99).unwrap(), 0x99);
        assert_eq!(int_to_bcd_packed(255).unwrap(), 0x255);
    }

    #[test]
    fn test_int_to_bcd_packed_overflow() {
        // 16 decimal digits fit, 17 do not
        assert_eq!(
            int_to_bcd_packed(9_999_999_999_999_999).unwrap(),
            0x9999_9999_9999_9999
        );
        assert!(int_to_bcd_packed(10_000_000_000_000_000).is_err());
    }
}
