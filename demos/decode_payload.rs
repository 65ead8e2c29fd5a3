//! Payload decoding example
//!
//! Decodes a few typical LPP uplinks and prints the records and the
//! flattened map for each.
//!
//! Run with: `cargo run --example decode_payload`

use lpp_codec::{bytes_from_values, flatten, Decoder, LppError};

fn main() -> Result<(), LppError> {
    println!("=== LPP Payload Decoding Example ===\n");

    let decoder = Decoder::new();

    let uplinks = [
        ("Weather station", "03670110056864077327940990000a"),
        ("Accelerometer", "067104d2fb2e0000"),
        ("Colour sensor", "0987ff8000"),
        ("Soil probe", "01c004d201c102bc01bc0064"),
    ];

    for (label, hex) in uplinks {
        println!("--- {} ({}) ---", label, hex);
        match decoder.decode_hex(hex) {
            Ok(records) => {
                println!("{:<4} {:<5} {:<20} {}", "Ch", "Type", "Name", "Value");
                println!("{}", "-".repeat(45));
                for r in &records {
                    println!("{:<4} {:<5} {:<20} {}", r.channel, r.type_code, r.name, r.value);
                }
                println!("\nFlattened: {}\n", flatten(&records).to_json());
            }
            Err(e) => println!("Decode failed: {}\n", e),
        }
    }

    // Integer arrays from JSON envelopes go through the same path
    let bytes = bytes_from_values(&[7, 1, 1, 3, 103, 255, 156])?;
    let records = decoder.decode(&bytes)?;
    println!("From integer array: {}", flatten(&records).to_json());

    // Malformed input fails the whole call
    println!("\n=== Error Cases ===");
    for hex in ["0163ff", "0176003c"] {
        match decoder.decode_hex(hex) {
            Ok(records) => println!("{} -> {} records", hex, records.len()),
            Err(e) => println!("{} -> {}", hex, e),
        }
    }

    Ok(())
}
