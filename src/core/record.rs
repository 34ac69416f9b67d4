// Decoder input and output records
// Field names follow the JSON shape network-server payload codecs return

use super::packet::PacketTypeInfo;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Device variables configured on the network server. Opaque to decoding.
pub type DeviceVariables = HashMap<String, serde_json::Value>;

/// A raw uplink as handed to the codec
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UplinkInput {
    #[serde(default)]
    pub bytes: Vec<u8>,

    #[serde(rename = "fPort", default)]
    pub f_port: u8,

    #[serde(default)]
    pub variables: DeviceVariables,
}

impl UplinkInput {
    pub fn new(bytes: impl Into<Vec<u8>>, f_port: u8) -> Self {
        Self {
            bytes: bytes.into(),
            f_port,
            variables: DeviceVariables::new(),
        }
    }

    pub fn with_variables(mut self, variables: DeviceVariables) -> Self {
        self.variables = variables;
        self
    }
}

/// SP1: daily counter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayValueStatus {
    pub day_value: u32,
}

/// SP4: key date report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyDateStatus {
    /// "day.month." without year
    pub date: String,
    pub key_value: u32,
    pub summary: String,
    pub reserved: String,
}

/// SP9.1: monthly timestamped status summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyStatus {
    #[serde(rename = "dateTime")]
    pub date_time: String,
    pub summary: Vec<String>,
}

/// SP9.2: firmware and identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionStatus {
    pub firmware_version: String,

    #[serde(rename = "LoRa_WAN_version")]
    pub lorawan_version: String,

    #[serde(rename = "LoRa_command_version")]
    pub lora_command_version: String,

    pub device_type: String,

    #[serde(rename = "meter_ID")]
    pub meter_id: String,

    pub reserved: String,
}

/// SP9.3: radio channel and meter fabrication data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioStatus {
    pub channel: String,
    pub fabrication_number: String,
    pub manufacturer: String,
    pub fabrication_block: String,
    pub device_medium: String,
    pub obis: String,
    pub vif_vife: String,
    pub reserved: String,
}

/// Packet-specific part of a decoded record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatusInterpretation {
    DayValue(DayValueStatus),
    KeyDate(KeyDateStatus),
    Monthly(MonthlyStatus),
    Version(VersionStatus),
    Radio(RadioStatus),
    /// AP1 event label
    Event(String),
}

/// A decoded uplink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedRecord {
    pub port: u8,
    pub packet_type: u8,
    pub packet_subtype: u8,
    pub packet_type_info: Option<PacketTypeInfo>,
    pub status_interpretation: Option<StatusInterpretation>,

    /// Event date, asynchronous packets only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl DecodedRecord {
    /// Header-only record; the dispatcher fills in the rest
    pub fn new(port: u8, packet_type: u8, packet_subtype: u8) -> Self {
        Self {
            port,
            packet_type,
            packet_subtype,
            packet_type_info: None,
            status_interpretation: None,
            date: None,
        }
    }
}

/// Returned in place of a record when the uplink carried no bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyPayload {
    #[serde(rename = "status_dedcoded", alias = "status_decoded")]
    pub status_decoded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UplinkData {
    Record(DecodedRecord),
    Empty(EmptyPayload),
}

impl UplinkData {
    pub fn empty() -> Self {
        UplinkData::Empty(EmptyPayload {
            status_decoded: false,
        })
    }

    pub fn record(&self) -> Option<&DecodedRecord> {
        match self {
            UplinkData::Record(record) => Some(record),
            UplinkData::Empty(_) => None,
        }
    }
}

/// Result of a decode call, with the warning and error side channels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeOutput {
    pub data: UplinkData,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl DecodeOutput {
    pub fn new(data: UplinkData) -> Self {
        Self {
            data,
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }
}

/// Result of an encode call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeOutput {
    pub bytes: Vec<u8>,
}
