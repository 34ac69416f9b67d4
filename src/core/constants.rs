// Packet codes and label tables for the Zenner door/gate monitor uplinks
// Reference: Zenner LoRa radio packet definitions

/// Daily synchronous packet, up to 2 retransmissions
pub const TYPE_SP1: u8 = 0x1;
/// Synchronous key-date packet
pub const TYPE_SP4: u8 = 0x4;
/// Synchronous packet family, selected by subtype
pub const TYPE_SP9: u8 = 0x9;
/// Asynchronous event packet, at most 5 per month, no retransmissions
pub const TYPE_AP1: u8 = 0xA;

/// Monthly status, not sent in the month of first activation
pub const SUBTYPE_SP9_1: u8 = 0x01;
/// Versions and identity, sent at activation and then every 6 months
pub const SUBTYPE_SP9_2: u8 = 0x02;
/// Radio channel and meter fabrication data
pub const SUBTYPE_SP9_3: u8 = 0x03;

// AP1 status codes
pub const A_REMOVAL: u8 = 0x02;
pub const A_BATTERY_END_OF_LIFE: u8 = 0x0C;
pub const A_HORN_DRIVE_LEVEL_FAILURE: u8 = 0x16;
pub const A_OBSTRUCTION_DETECTION: u8 = 0x1A;
pub const A_OBJECT_IN_THE_SURROUNDING_AREA: u8 = 0x1C;

/// AP1 status code -> label
pub const AP_STATUS_CODES: &[(u8, &str)] = &[
    (A_REMOVAL, "removal"),
    (A_BATTERY_END_OF_LIFE, "battery end of life"),
    (A_HORN_DRIVE_LEVEL_FAILURE, "horn drive level failure"),
    (A_OBSTRUCTION_DETECTION, "obstruction detection"),
    (A_OBJECT_IN_THE_SURROUNDING_AREA, "object in the surrounding area"),
];

/// Status-summary labels, indexed by bit position. Bit 1 is unassigned and
/// reported as "0".
pub const STATUS_SUMMARY_VALUES: &[&str] = &[
    "removal",
    "0",
    "battery end of life",
    "acoustic alarm failure",
    "obstruction detection",
    "surrounding area monitoring",
];

/// Look up the label for an AP1 status code
pub fn ap_status_label(code: u8) -> Option<&'static str> {
    AP_STATUS_CODES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ap_status_labels() {
        assert_eq!(ap_status_label(0x02), Some("removal"));
        assert_eq!(ap_status_label(0x0C), Some("battery end of life"));
        assert_eq!(ap_status_label(0x16), Some("horn drive level failure"));
        assert_eq!(ap_status_label(0x1A), Some("obstruction detection"));
        assert_eq!(
            ap_status_label(0x1C),
            Some("object in the surrounding area")
        );
        assert_eq!(ap_status_label(0x00), None);
        assert_eq!(ap_status_label(0x03), None);
    }

    #[test]
    fn test_summary_table_order() {
        assert_eq!(STATUS_SUMMARY_VALUES.len(), 6);
        assert_eq!(STATUS_SUMMARY_VALUES[0], "removal");
        assert_eq!(STATUS_SUMMARY_VALUES[1], "0");
        assert_eq!(STATUS_SUMMARY_VALUES[5], "surrounding area monitoring");
    }
}
