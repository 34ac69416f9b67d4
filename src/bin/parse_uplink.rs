//! Uplink decode utility
//! Decodes a payload given on the command line, or every uplink in a JSON
//! capture file, and prints the decoded records as JSON

use std::env;
use std::io::Write;
use std::path::Path;
use tracing_subscriber::{fmt::format::FmtSpan, prelude::*, EnvFilter};
use zenner_decoder::formats::{load_uplinks, parse_payload};
use zenner_decoder::{EasyProtectCodec, UplinkCodec, UplinkInput};

const DEFAULT_FPORT: u8 = 1;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let filter_layer =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    let format_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(format_layer)
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <payload|capture.json> [fPort]", args[0]);
        eprintln!("\nExamples:");
        eprintln!("  {} A002002105              # hex payload", args[0]);
        eprintln!("  {} \"a0 02 00 21 05\" 1      # hex with separators and fPort", args[0]);
        eprintln!("  {} oAIAIQU=                # base64 frm_payload", args[0]);
        eprintln!("  {} uplinks.json            # every uplink in a capture", args[0]);
        std::process::exit(1);
    }

    let source = &args[1];
    let uplinks = if Path::new(source).is_file() {
        tracing::info!("Reading capture file: {}", source);
        load_uplinks(source)?
    } else {
        let f_port = match args.get(2) {
            Some(port) => port.parse()?,
            None => DEFAULT_FPORT,
        };
        vec![UplinkInput::new(parse_payload(source)?, f_port)]
    };

    let codec = EasyProtectCodec::new();
    tracing::info!("Decoding {} uplink(s) with {}", uplinks.len(), codec.get_name());

    decode_all(&codec, &uplinks, &mut std::io::stdout().lock())
}

/// Decode every uplink, writing each result as pretty JSON to `out`.
/// Fails after the last uplink if any of them could not be decoded.
fn decode_all<W: Write>(
    codec: &dyn UplinkCodec,
    uplinks: &[UplinkInput],
    out: &mut W,
) -> anyhow::Result<()> {
    let mut failures = 0usize;
    for (index, uplink) in uplinks.iter().enumerate() {
        match codec.decode_uplink(uplink) {
            Ok(output) => writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?,
            Err(e) => {
                failures += 1;
                tracing::error!(
                    "Uplink #{} ({}): {}",
                    index,
                    format_bytes(&uplink.bytes),
                    e
                );
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} uplinks failed to decode", failures, uplinks.len());
    }

    Ok(())
}

fn format_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
