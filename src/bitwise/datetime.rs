// Compressed date and date-time stamps
// Reference: EN 13757-3:2013, Annex A, data types F and G
//
// The device sends both stamps big-endian, so the masks below apply to the
// value assembled from the payload bytes in transmission order. The year
// field is two slices (3 high bits, 4 low bits) whose shifts overlap on bit
// 3; the overlap is OR-ed, matching the device firmware's decoder. The 0xFF
// "invalid" sentinel of the standard is not interpreted.

use std::fmt;

/// Date stamp, data type G
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressedDate {
    pub year: u8,
    pub month: u8,
    pub day: u8,
}

impl CompressedDate {
    pub fn from_raw(v: u16) -> Self {
        Self {
            day: ((v & 0x1F00) >> 8) as u8,
            month: (v & 0x000F) as u8,
            year: (((v & 0xE000) >> 10) | ((v & 0x00F0) >> 4)) as u8,
        }
    }
}

/// Rendered as "20{year}-{month}-{day}", without zero padding
impl fmt::Display for CompressedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "20{}-{}-{}", self.year, self.month, self.day)
    }
}

/// Date and time stamp, data type F (minute resolution)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressedDateTime {
    pub year: u8,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
}

impl CompressedDateTime {
    pub fn from_raw(v: u32) -> Self {
        Self {
            minute: ((v & 0x3F00_0000) >> 24) as u8,
            hour: ((v & 0x001F_0000) >> 16) as u8,
            day: ((v & 0x0000_1F00) >> 8) as u8,
            month: (v & 0x0000_000F) as u8,
            year: (((v & 0x0000_E000) >> 10) | ((v & 0x0000_00F0) >> 4)) as u8,
        }
    }
}

/// Rendered as "20YY-MM-DDThh:mm:00Z"; seconds are not transmitted
impl fmt::Display for CompressedDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "20{:02}-{:02}-{:02}T{:02}:{:02}:00Z",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}
