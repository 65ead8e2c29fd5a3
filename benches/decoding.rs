//! Benchmarks for LPP decoding performance

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lpp_codec::{
    bytes_to_number, decode_fix, flatten, parse_hex, Decoder, DecoderConfig, Registry,
};

/// Typical multi-sensor uplink: temperature, humidity, barometer, accelerometer, GPS
const MIXED_HEX: &str = "0367011005686407732794087104d2fb2e0000018806765ff2960a0003e8";

fn generate_payloads(count: usize) -> Vec<Vec<u8>> {
    (0..count)
        .map(|i| {
            let temp = (200 + (i % 50) as i16) * if i % 3 == 0 { -1 } else { 1 };
            let [hi, lo] = temp.to_be_bytes();
            vec![
                0x03, 0x67, hi, lo, // temperature
                0x05, 0x68, (i % 200) as u8, // humidity
                0x07, 0x73, 0x27, 0x94, // barometer
                0x09, 0x02, 0x01, (i % 256) as u8, // analog in
            ]
        })
        .collect()
}

fn bench_decoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("decoding");

    let payloads = generate_payloads(1000);
    let decoder = Decoder::new();

    group.throughput(Throughput::Elements(1000));

    group.bench_function("decode_1000_payloads", |b| {
        b.iter(|| {
            for payload in &payloads {
                let records = decoder.decode(payload);
                black_box(records);
            }
        })
    });

    group.finish();
}

fn bench_gps_expansion(c: &mut Criterion) {
    let mut group = c.benchmark_group("gps_expansion");

    let payload = parse_hex(MIXED_HEX).unwrap();

    for (label, config) in [
        ("compact", DecoderConfig::compact()),
        ("flattened", DecoderConfig::flattened()),
    ] {
        let decoder = Decoder::with_config(config);
        group.bench_with_input(BenchmarkId::from_parameter(label), &payload, |b, p| {
            b.iter(|| black_box(decoder.decode(p)))
        });
    }

    group.finish();
}

fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten");

    let decoder = Decoder::with_config(DecoderConfig::flattened());
    let records: Vec<_> = generate_payloads(1000)
        .iter()
        .map(|p| decoder.decode(p).unwrap())
        .collect();

    group.throughput(Throughput::Elements(1000));

    group.bench_function("flatten_1000", |b| {
        b.iter(|| {
            for batch in &records {
                black_box(flatten(batch));
            }
        })
    });

    group.finish();
}

fn bench_numeric(c: &mut Criterion) {
    let mut group = c.benchmark_group("numeric");

    for width in [1usize, 2, 4, 8] {
        let bytes: Vec<u8> = (0..width as u8).map(|b| 0x80 | b).collect();
        group.bench_with_input(BenchmarkId::new("signed", width), &bytes, |b, bytes| {
            b.iter(|| black_box(bytes_to_number(bytes.as_slice(), true, 100.0)))
        });
    }

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let registry = Registry::standard();

    c.bench_function("registry_lookup_256", |b| {
        b.iter(|| {
            for code in 0..=255u8 {
                black_box(registry.get(code));
            }
        })
    });
}

fn bench_field_tester(c: &mut Criterion) {
    let payload = [0x9F, 0xCA, 0x05, 0x42, 0x00, 0xCC, 0x04, 0xE2, 0x0C, 0x09];

    c.bench_function("field_tester_fix", |b| {
        b.iter(|| black_box(decode_fix(black_box(&payload))))
    });
}

criterion_group!(
    benches,
    bench_decoding,
    bench_gps_expansion,
    bench_flatten,
    bench_numeric,
    bench_lookup,
    bench_field_tester,
);
criterion_main!(benches);
