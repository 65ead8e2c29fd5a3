// LPP Codec - Command-line decoder
// Copyright (c) 2025 LPP Codec contributors
//
// Licensed under AGPL-3.0.
// See LICENSE file for details.

//! # lpp-decode
//!
//! Decodes a hex uplink payload and prints the flattened JSON map.
//!
//! ## Usage
//!
//! ```bash
//! # Cayenne LPP, compact GPS records
//! lpp-decode 03670110056864
//!
//! # Legacy flattened GPS keys, pretty output
//! lpp-decode --gps flattened --pretty 018806765ff2960a0003e8
//!
//! # Field tester position report from a file
//! lpp-decode --decoder field-tester --port 1 --file uplink.hex
//!
//! # Full record list instead of the flattened map
//! echo 0771fe0c000003e8 | lpp-decode --records
//! ```

mod error;
mod input;

use clap::{Parser, ValueEnum};
use error::{CliError, Result};
use lpp_codec::{
    Decoder, DecoderConfig, FieldTesterDecoder, GpsExpansion, UplinkDecoder, VariableWidth,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, info, Level};
use tracing_subscriber::EnvFilter;

/// Payload format to decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DecoderKind {
    /// Cayenne LPP with RAKwireless extensions
    Lpp,
    /// RAK10701 field tester position report (fPort 1)
    FieldTester,
}

/// GPS record expansion
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum GpsMode {
    Compact,
    Flattened,
}

impl From<GpsMode> for GpsExpansion {
    fn from(mode: GpsMode) -> Self {
        match mode {
            GpsMode::Compact => GpsExpansion::Compact,
            GpsMode::Flattened => GpsExpansion::Flattened,
        }
    }
}

/// LPP uplink decoder
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Hex payload (read from --file or stdin when omitted)
    payload: Option<String>,

    /// File containing the hex payload
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// LoRaWAN fPort of the uplink
    #[arg(short, long, default_value = "2")]
    port: u8,

    /// Payload format
    #[arg(short, long, value_enum, default_value = "lpp")]
    decoder: DecoderKind,

    /// GPS record expansion
    #[arg(long, value_enum, default_value = "compact")]
    gps: GpsMode,

    /// Raw types (241, 248) carry an explicit length byte
    #[arg(long)]
    length_prefixed: bool,

    /// Print the record list instead of the flattened map
    #[arg(long)]
    records: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    fn decoder_config(&self) -> DecoderConfig {
        let variable_width = if self.length_prefixed {
            VariableWidth::LengthPrefixed
        } else {
            VariableWidth::Remainder
        };
        DecoderConfig {
            gps: self.gps.into(),
            variable_width,
        }
    }
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = match log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::WARN,
        };
        EnvFilter::from_default_env().add_directive(level.into())
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// Decode `bytes` per `args` and render the JSON output
fn render(args: &Args, bytes: &[u8]) -> Result<String> {
    debug!(bytes = bytes.len(), port = args.port, "decoding uplink");

    match args.decoder {
        DecoderKind::Lpp => {
            let decoder = Decoder::with_config(args.decoder_config());
            if args.records {
                let records = decoder.decode(bytes)?;
                info!(records = records.len(), "decoded LPP payload");
                to_json(&records, args.pretty)
            } else {
                let map = decoder.decode_uplink(args.port, bytes)?;
                info!(fields = map.len(), "decoded LPP payload");
                to_json(&map, args.pretty)
            }
        }
        DecoderKind::FieldTester => {
            if args.records {
                return Err(CliError::RecordsUnsupported);
            }
            let map = FieldTesterDecoder.decode_uplink(args.port, bytes)?;
            if map.contains_key("error") {
                tracing::warn!("field tester fix below precision threshold");
            }
            to_json(&map, args.pretty)
        }
    }
}

fn run(args: &Args) -> Result<String> {
    let bytes = input::read_payload(
        args.payload.as_deref(),
        args.file.as_deref(),
        std::io::stdin().lock(),
    )?;
    render(args, &bytes)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args.log_level);

    info!("lpp-decode v{}", env!("CARGO_PKG_VERSION"));

    match run(&args) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
