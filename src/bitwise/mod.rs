// Primitive decoders for uplink payload fields

pub mod bcd;
pub mod datetime;
pub mod elements;
pub mod hex;
pub mod summary;

pub use bcd::{bcd_byte_to_digits, bcd_to_int_be, int_to_bcd_packed, BcdError};
pub use datetime::{CompressedDate, CompressedDateTime};
pub use elements::{read_u16_be, read_u16_le, read_u24_le, read_u32_be, read_u32_le, ElementError};
pub use hex::{dotted_hex, hex, hex_upper};
pub use summary::expand_status_summary;
