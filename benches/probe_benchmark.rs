//! Probe benchmarks.
//!
//! Run with:
//! ```bash
//! cargo bench --bench probe_benchmark
//! ```

use std::io::Cursor;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use pcx_provider::{FormatProbe, PcxReaderProvider, ProbeInput};

fn inputs() -> Vec<(&'static str, Vec<u8>)> {
    let mut pcx = vec![0u8; 128];
    pcx[..4].copy_from_slice(&[0x0A, 0x05, 0x01, 0x08]);
    vec![
        ("pcx", pcx),
        ("png", b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR".to_vec()),
        ("bad_version", vec![0x0A, 0x09, 0x01, 0x08]),
    ]
}

fn bench_probe(c: &mut Criterion) {
    let provider = PcxReaderProvider::new();
    let mut group = c.benchmark_group("PCX probe");
    for (name, data) in inputs() {
        group.bench_with_input(BenchmarkId::new("can_decode", name), &data, |b, data| {
            let mut cursor = Cursor::new(data.clone());
            b.iter(|| {
                let matched = provider
                    .can_decode(ProbeInput::from(&mut cursor))
                    .unwrap();
                criterion::black_box(matched);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_probe);
criterion_main!(benches);
