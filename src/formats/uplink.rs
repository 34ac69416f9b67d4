// Uplink payload text and capture files
//
// Network servers hand payloads out either as a byte array or as a base64
// `frm_payload` string; operators usually paste them as hex. Capture files
// carry the first two forms, free-form payload text may be any of them.

use crate::core::{DeviceVariables, UplinkInput};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UplinkFormatError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse uplink JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid hex payload: {0}")]
    InvalidHex(String),

    #[error("Failed to decode base64 payload: {0}")]
    Base64Decode(String),
}

pub type Result<T> = std::result::Result<T, UplinkFormatError>;

lazy_static! {
    static ref HEX_SEPARATORS: Regex = Regex::new(r"[\s:,\-]").unwrap();
    static ref HEX_DIGITS: Regex = Regex::new(r"^[0-9A-Fa-f]+$").unwrap();
}

/// Parse payload text as hex or, failing that, base64.
///
/// Hex may carry a `0x` prefix and be split by whitespace, ':', ',' or '-'.
/// Empty text is an empty payload.
pub fn parse_payload(text: &str) -> Result<Vec<u8>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let unprefixed = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let compact = HEX_SEPARATORS.replace_all(unprefixed, "");

    if HEX_DIGITS.is_match(&compact) {
        if compact.len() % 2 != 0 {
            return Err(UplinkFormatError::InvalidHex(format!(
                "odd number of digits in {:?}",
                trimmed
            )));
        }
        return decode_hex(&compact);
    }

    parse_frm_payload(trimmed)
}

/// Parse a network server `frm_payload`, which is always standard base64
pub fn parse_frm_payload(text: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(text.trim())
        .map_err(|e| UplinkFormatError::Base64Decode(e.to_string()))
}

fn decode_hex(digits: &str) -> Result<Vec<u8>> {
    (0..digits.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|e| UplinkFormatError::InvalidHex(e.to_string()))
        })
        .collect()
}

/// One uplink as found in a capture file
#[derive(Debug, Deserialize)]
struct CapturedUplink {
    #[serde(default)]
    bytes: Option<Vec<u8>>,

    #[serde(default, rename = "frm_payload", alias = "frmPayload")]
    frm_payload: Option<String>,

    #[serde(default, rename = "fPort", alias = "f_port", alias = "fport")]
    f_port: u8,

    #[serde(default)]
    variables: DeviceVariables,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CaptureFile {
    Many(Vec<CapturedUplink>),
    One(CapturedUplink),
}

impl CapturedUplink {
    fn into_input(self) -> Result<UplinkInput> {
        let bytes = match (self.bytes, self.frm_payload) {
            (Some(bytes), _) => bytes,
            (None, Some(text)) => parse_frm_payload(&text)?,
            (None, None) => Vec::new(),
        };
        Ok(UplinkInput::new(bytes, self.f_port).with_variables(self.variables))
    }
}

/// Parse uplinks from JSON: a single uplink object or an array of them
pub fn parse_uplinks(json: &str) -> Result<Vec<UplinkInput>> {
    let captured = match serde_json::from_str::<CaptureFile>(json)? {
        CaptureFile::Many(list) => list,
        CaptureFile::One(one) => vec![one],
    };

    captured
        .into_iter()
        .map(CapturedUplink::into_input)
        .collect()
}

/// Load uplinks from a JSON capture file
pub fn load_uplinks(filename: impl AsRef<Path>) -> Result<Vec<UplinkInput>> {
    let mut file = File::open(filename)?;
    let mut json = String::new();
    file.read_to_string(&mut json)?;

    let uplinks = parse_uplinks(&json)?;
    tracing::debug!("Loaded {} uplinks", uplinks.len());
    Ok(uplinks)
}
