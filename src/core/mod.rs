// Core data structures for the Zenner uplink codec
pub mod constants;
pub mod packet;
pub mod record;

// Re-export commonly used types
pub use constants::*;
pub use packet::{split_header, PacketKind, PacketTypeInfo};
pub use record::{
    DayValueStatus, DecodeOutput, DecodedRecord, DeviceVariables, EmptyPayload, EncodeOutput,
    KeyDateStatus, MonthlyStatus, RadioStatus, StatusInterpretation, UplinkData, UplinkInput,
    VersionStatus,
};
