// Uplink input formats
pub mod uplink;

pub use uplink::{load_uplinks, parse_frm_payload, parse_payload, parse_uplinks, UplinkFormatError};
