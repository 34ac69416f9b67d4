// Fixed-width integer reads for uplink payload fields
// All reads are bounds-checked against the slice they are given

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ElementError {
    #[error("Insufficient data: expected {expected} bytes, got {actual}")]
    InsufficientData { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, ElementError>;

fn ensure_len(data: &[u8], expected: usize) -> Result<()> {
    if data.len() < expected {
        return Err(ElementError::InsufficientData {
            expected,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Read a u16 in big-endian format
pub fn read_u16_be(data: &[u8]) -> Result<u16> {
    ensure_len(data, 2)?;
    Ok(u16::from_be_bytes([data[0], data[1]]))
}

/// Read a u16 in little-endian format
pub fn read_u16_le(data: &[u8]) -> Result<u16> {
    ensure_len(data, 2)?;
    Ok(u16::from_le_bytes([data[0], data[1]]))
}

/// Read a u24 (3 bytes) in little-endian format
pub fn read_u24_le(data: &[u8]) -> Result<u32> {
    ensure_len(data, 3)?;
    Ok(u32::from_le_bytes([data[0], data[1], data[2], 0]))
}

/// Read a u32 in big-endian format
pub fn read_u32_be(data: &[u8]) -> Result<u32> {
    ensure_len(data, 4)?;
    Ok(u32::from_be_bytes([data[0], data[1], data[2], data[3]]))
}

/// Read a u32 in little-endian format
/// `data[0] | data[1] << 8 | data[2] << 16 | data[3] << 24`
pub fn read_u32_le(data: &[u8]) -> Result<u32> {
    ensure_len(data, 4)?;
    Ok(u32::from_le_bytes([data[0], data[1], data[2], data[3]]))
}
