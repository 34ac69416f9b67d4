// Packet classification from the header byte

use super::constants::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scheduling family of a packet, derived from the packet type alone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PacketTypeInfo {
    Synchronous,
    Asynchronous,
}

impl PacketTypeInfo {
    pub fn from_packet_type(packet_type: u8) -> Option<Self> {
        match packet_type {
            TYPE_SP1 | TYPE_SP4 | TYPE_SP9 => Some(PacketTypeInfo::Synchronous),
            TYPE_AP1 => Some(PacketTypeInfo::Asynchronous),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PacketTypeInfo::Synchronous => "synchronous",
            PacketTypeInfo::Asynchronous => "asynchronous",
        }
    }
}

impl fmt::Display for PacketTypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recognized (type, subtype) combination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacketKind {
    Sp1,
    Sp4,
    Sp9Status,
    Sp9Versions,
    Sp9Radio,
    Ap1,
}

impl PacketKind {
    /// Classify a header. Subtypes are only significant for SP9.
    pub fn classify(packet_type: u8, packet_subtype: u8) -> Option<Self> {
        match (packet_type, packet_subtype) {
            (TYPE_SP1, _) => Some(PacketKind::Sp1),
            (TYPE_SP4, _) => Some(PacketKind::Sp4),
            (TYPE_SP9, SUBTYPE_SP9_1) => Some(PacketKind::Sp9Status),
            (TYPE_SP9, SUBTYPE_SP9_2) => Some(PacketKind::Sp9Versions),
            (TYPE_SP9, SUBTYPE_SP9_3) => Some(PacketKind::Sp9Radio),
            (TYPE_AP1, _) => Some(PacketKind::Ap1),
            _ => None,
        }
    }

    /// Smallest payload (header byte included) the decoder reads from
    pub fn min_len(&self) -> usize {
        match self {
            PacketKind::Sp1 => 5,
            PacketKind::Sp4 => 11,
            PacketKind::Sp9Status => 7,
            PacketKind::Sp9Versions => 19,
            PacketKind::Sp9Radio => 17,
            PacketKind::Ap1 => 5,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PacketKind::Sp1 => "SP1",
            PacketKind::Sp4 => "SP4",
            PacketKind::Sp9Status => "SP9.1",
            PacketKind::Sp9Versions => "SP9.2",
            PacketKind::Sp9Radio => "SP9.3",
            PacketKind::Ap1 => "AP1",
        }
    }
}

impl fmt::Display for PacketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Split the header byte into (packet_type, packet_subtype)
pub fn split_header(header: u8) -> (u8, u8) {
    (header >> 4, header & 0x0F)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_header() {
        assert_eq!(split_header(0x10), (0x1, 0x0));
        assert_eq!(split_header(0x91), (0x9, 0x1));
        assert_eq!(split_header(0xA0), (0xA, 0x0));
        assert_eq!(split_header(0xFF), (0xF, 0xF));
        assert_eq!(split_header(0x00), (0x0, 0x0));
    }

    #[test]
    fn test_classify() {
        assert_eq!(PacketKind::classify(0x1, 0x0), Some(PacketKind::Sp1));
        assert_eq!(PacketKind::classify(0x1, 0xA), Some(PacketKind::Sp1));
        assert_eq!(PacketKind::classify(0x4, 0x3), Some(PacketKind::Sp4));
        assert_eq!(PacketKind::classify(0x9, 0x1), Some(PacketKind::Sp9Status));
        assert_eq!(PacketKind::classify(0x9, 0x2), Some(PacketKind::Sp9Versions));
        assert_eq!(PacketKind::classify(0x9, 0x3), Some(PacketKind::Sp9Radio));
        assert_eq!(PacketKind::classify(0xA, 0x7), Some(PacketKind::Ap1));

        assert_eq!(PacketKind::classify(0x9, 0x0), None);
        assert_eq!(PacketKind::classify(0x9, 0x4), None);
        assert_eq!(PacketKind::classify(0x5, 0x0), None);
        assert_eq!(PacketKind::classify(0x0, 0x0), None);
    }

    #[test]
    fn test_type_info() {
        assert_eq!(
            PacketTypeInfo::from_packet_type(0x9),
            Some(PacketTypeInfo::Synchronous)
        );
        assert_eq!(
            PacketTypeInfo::from_packet_type(0xA),
            Some(PacketTypeInfo::Asynchronous)
        );
        assert_eq!(PacketTypeInfo::from_packet_type(0x5), None);
        assert_eq!(PacketTypeInfo::Asynchronous.to_string(), "asynchronous");
    }

    #[test]
    fn test_type_info_serialization() {
        assert_eq!(
            serde_json::to_value(PacketTypeInfo::Synchronous).unwrap(),
            serde_json::json!("synchronous")
        );
    }
}
