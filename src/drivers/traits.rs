// Device codec traits

use crate::bitwise::{BcdError, ElementError};
use crate::core::{DecodeOutput, DeviceVariables, EncodeOutput, PacketKind, UplinkInput};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Truncated {packet} payload: need {needed} bytes, got {actual}")]
    TruncatedPayload {
        packet: PacketKind,
        needed: usize,
        actual: usize,
    },

    #[error("Field read error: {0}")]
    Element(#[from] ElementError),

    #[error("BCD decode error: {0}")]
    Bcd(#[from] BcdError),
}

pub type DecodeResult<T> = std::result::Result<T, DecodeError>;

/// Payload codec for one device model
///
/// Implementations hold no state between calls and may be shared across
/// threads.
pub trait UplinkCodec: Send + Sync {
    /// Get the device vendor name
    fn vendor(&self) -> &str;

    /// Get the device model name
    fn model(&self) -> &str;

    /// Get a printable name for this device
    fn get_name(&self) -> String {
        format!("{} {}", self.vendor(), self.model())
    }

    /// Decode an uplink into a status record
    fn decode_uplink(&self, input: &UplinkInput) -> DecodeResult<DecodeOutput>;

    /// Encode a downlink
    fn encode_downlink(
        &self,
        data: &serde_json::Value,
        variables: &DeviceVariables,
    ) -> EncodeOutput;
}
