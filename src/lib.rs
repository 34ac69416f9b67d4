// zenner-decoder: LoRaWAN uplink codec for Zenner door/gate monitoring sensors
// Copyright 2024 - Licensed under GPLv3

pub mod bitwise;
pub mod core;
pub mod drivers;
pub mod formats;

// Re-export commonly used types
pub use bitwise::{CompressedDate, CompressedDateTime};
pub use crate::core::{
    DecodeOutput, DecodedRecord, DeviceVariables, EncodeOutput, PacketKind, PacketTypeInfo,
    StatusInterpretation, UplinkData, UplinkInput,
};
pub use drivers::{decode, encode, DecodeError, DecodeResult, EasyProtectCodec, UplinkCodec};
pub use formats::{load_uplinks, parse_payload, UplinkFormatError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
