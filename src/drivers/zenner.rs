// Zenner door/gate monitor uplink codec
// Packet layouts: Zenner LoRa radio packet definitions (SP1, SP4, SP9.x, AP1)
//
// Byte 0 of every uplink is the header: packet type in the high nibble,
// subtype in the low nibble. Offsets below count from the header byte.

use super::traits::{DecodeError, DecodeResult, UplinkCodec};
use crate::bitwise::{
    bcd_to_int_be, dotted_hex, expand_status_summary, hex, hex_upper, read_u16_be, read_u16_le,
    read_u24_le, read_u32_be, read_u32_le, CompressedDate, CompressedDateTime,
};
use crate::core::{
    ap_status_label, split_header, DayValueStatus, DecodeOutput, DecodedRecord, DeviceVariables,
    EncodeOutput, KeyDateStatus, MonthlyStatus, PacketKind, PacketTypeInfo, RadioStatus,
    StatusInterpretation, UplinkData, UplinkInput, VersionStatus, STATUS_SUMMARY_VALUES,
};

/// Codec for the Zenner Easy Protect radio sensor family
#[derive(Debug, Clone, Copy, Default)]
pub struct EasyProtectCodec;

impl EasyProtectCodec {
    pub fn new() -> Self {
        Self
    }
}

impl UplinkCodec for EasyProtectCodec {
    fn vendor(&self) -> &str {
        "Zenner"
    }

    fn model(&self) -> &str {
        "Easy Protect"
    }

    fn decode_uplink(&self, input: &UplinkInput) -> DecodeResult<DecodeOutput> {
        decode(&input.bytes, input.f_port, &input.variables)
    }

    fn encode_downlink(
        &self,
        data: &serde_json::Value,
        variables: &DeviceVariables,
    ) -> EncodeOutput {
        encode(data, variables)
    }
}

/// Decode an uplink payload.
///
/// `variables` is accepted for interface compatibility with network-server
/// codecs and is not consulted.
pub fn decode(
    bytes: &[u8],
    f_port: u8,
    _variables: &DeviceVariables,
) -> DecodeResult<DecodeOutput> {
    let data = decode_payload(bytes, f_port)?;
    Ok(DecodeOutput::new(data))
}

/// Downlink encoding is not supported by this device profile; always
/// returns no bytes.
pub fn encode(_data: &serde_json::Value, _variables: &DeviceVariables) -> EncodeOutput {
    tracing::debug!("Downlink encoding not implemented, returning empty payload");
    EncodeOutput::default()
}

/// Dispatch on the header byte and run the matching packet decoder
pub fn decode_payload(bytes: &[u8], port: u8) -> DecodeResult<UplinkData> {
    let header = match bytes.first() {
        Some(&header) => header,
        None => {
            tracing::debug!("Empty uplink on port {}", port);
            return Ok(UplinkData::empty());
        }
    };

    let (packet_type, packet_subtype) = split_header(header);
    let mut record = DecodedRecord::new(port, packet_type, packet_subtype);
    record.packet_type_info = PacketTypeInfo::from_packet_type(packet_type);

    let kind = match PacketKind::classify(packet_type, packet_subtype) {
        Some(kind) => kind,
        None => {
            tracing::debug!(
                "Unrecognized packet type {:#x} subtype {:#x}",
                packet_type,
                packet_subtype
            );
            return Ok(UplinkData::Record(record));
        }
    };

    tracing::debug!("Decoding {} packet ({} bytes)", kind, bytes.len());

    record.status_interpretation = match kind {
        PacketKind::Sp1 => Some(StatusInterpretation::DayValue(decode_day_value(bytes)?)),
        PacketKind::Sp4 => Some(StatusInterpretation::KeyDate(decode_key_date(bytes)?)),
        PacketKind::Sp9Status => Some(StatusInterpretation::Monthly(decode_monthly(bytes)?)),
        PacketKind::Sp9Versions => Some(StatusInterpretation::Version(decode_versions(bytes)?)),
        PacketKind::Sp9Radio => Some(StatusInterpretation::Radio(decode_radio(bytes)?)),
        PacketKind::Ap1 => {
            let (date, label) = decode_event(bytes)?;
            record.date = Some(date);
            label.map(|l| StatusInterpretation::Event(l.to_string()))
        }
    };

    Ok(UplinkData::Record(record))
}

fn require(packet: PacketKind, bytes: &[u8]) -> DecodeResult<()> {
    let needed = packet.min_len();
    if bytes.len() < needed {
        return Err(DecodeError::TruncatedPayload {
            packet,
            needed,
            actual: bytes.len(),
        });
    }
    Ok(())
}

/// SP1: day value, u32 LE at 1
pub fn decode_day_value(bytes: &[u8]) -> DecodeResult<DayValueStatus> {
    require(PacketKind::Sp1, bytes)?;
    Ok(DayValueStatus {
        day_value: read_u32_le(&bytes[1..])?,
    })
}

/// SP4: key date (day at 2, BCD month at 1), key value, summary, reserved
pub fn decode_key_date(bytes: &[u8]) -> DecodeResult<KeyDateStatus> {
    require(PacketKind::Sp4, bytes)?;

    let month = match bcd_to_int_be(&bytes[1..2]) {
        Ok(month) => month.to_string(),
        Err(e) => {
            tracing::debug!("SP4 month byte is not decimal: {}", e);
            "NaN".to_string()
        }
    };

    Ok(KeyDateStatus {
        date: format!("{}.{}.", hex(bytes[2]), month),
        key_value: read_u32_le(&bytes[3..])?,
        summary: hex_upper(read_u16_le(&bytes[7..])?),
        reserved: hex_upper(read_u16_le(&bytes[9..])?),
    })
}

/// SP9.1: type F timestamp at 1..5, status summary bytes at 5 and 6
pub fn decode_monthly(bytes: &[u8]) -> DecodeResult<MonthlyStatus> {
    require(PacketKind::Sp9Status, bytes)?;

    let date_time = CompressedDateTime::from_raw(read_u32_be(&bytes[1..])?);
    let summary = expand_status_summary(bytes[5], bytes[6], STATUS_SUMMARY_VALUES)?;

    Ok(MonthlyStatus {
        date_time: date_time.to_string(),
        summary: summary.into_iter().map(String::from).collect(),
    })
}

/// SP9.2: version triples, device type, meter ID, reserved
pub fn decode_versions(bytes: &[u8]) -> DecodeResult<VersionStatus> {
    require(PacketKind::Sp9Versions, bytes)?;

    Ok(VersionStatus {
        firmware_version: dotted_hex(&bytes[1..5]),
        lorawan_version: dotted_hex(&bytes[5..8]),
        lora_command_version: dotted_hex(&bytes[8..10]),
        device_type: hex(bytes[10]),
        meter_id: hex_upper(read_u32_le(&bytes[11..])?),
        reserved: hex_upper(read_u16_le(&bytes[17..])?),
    })
}

/// SP9.3: channel, fabrication number, manufacturer, medium, OBIS, VIF/VIFE
pub fn decode_radio(bytes: &[u8]) -> DecodeResult<RadioStatus> {
    require(PacketKind::Sp9Radio, bytes)?;

    Ok(RadioStatus {
        channel: hex(bytes[1]),
        fabrication_number: hex_upper(read_u32_le(&bytes[2..])?),
        manufacturer: dotted_hex(&bytes[6..8]),
        fabrication_block: hex(bytes[8]),
        device_medium: hex(bytes[9]),
        obis: hex(bytes[10]),
        vif_vife: hex_upper(read_u24_le(&bytes[11..])?),
        reserved: hex_upper(read_u24_le(&bytes[14..])?),
    })
}

/// AP1: status code at 1, type G date at 3..5.
/// Unknown status codes yield no label.
pub fn decode_event(bytes: &[u8]) -> DecodeResult<(String, Option<&'static str>)> {
    require(PacketKind::Ap1, bytes)?;

    let date = CompressedDate::from_raw(read_u16_be(&bytes[3..])?);
    let label = ap_status_label(bytes[1]);
    if label.is_none() {
        tracing::debug!("Unknown AP1 status code {:#04x}", bytes[1]);
    }

    Ok((date.to_string(), label))
}
