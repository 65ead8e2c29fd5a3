//! GPS expansion example
//!
//! Shows the compact and flattened GPS record layouts for the standard and
//! high-precision location types, and a field tester position report.
//!
//! Run with: `cargo run --example gps_variants`

use lpp_codec::{flatten, Decoder, DecoderConfig, FieldTesterDecoder, UplinkDecoder};

fn main() -> lpp_codec::Result<()> {
    println!("=== LPP GPS Variants Example ===\n");

    let fixes = [
        ("Standard GPS (type 136)", "018806765ff2960a0003e8"),
        ("High-precision GPS (type 137)", "0289fdfb39ec0903430000fb2e"),
    ];

    for (label, hex) in fixes {
        println!("--- {} ---", label);
        for (mode, config) in [
            ("compact", DecoderConfig::compact()),
            ("flattened", DecoderConfig::flattened()),
        ] {
            let records = Decoder::with_config(config).decode_hex(hex)?;
            println!("{:<10} {} records", mode, records.len());
            for r in &records {
                println!("    {:<10} {}", r.name, r.value);
            }
            println!("    map: {}", flatten(&records).to_json());
        }
        println!();
    }

    println!("--- Field tester (fPort 1) ---");
    let reports = [
        ("good fix", [0x9F, 0xCA, 0x05, 0x42, 0x00, 0xCC, 0x04, 0xE2, 0x0C, 0x09]),
        ("poor fix", [0x9F, 0xCA, 0x05, 0x42, 0x00, 0xCC, 0x04, 0xE2, 0x19, 0x04]),
    ];
    for (label, bytes) in reports {
        let map = FieldTesterDecoder.decode_uplink(1, &bytes)?;
        println!("{:<9} {}", label, map.to_json());
    }

    Ok(())
}
