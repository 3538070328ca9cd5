//! Parsing throughput on a synthetic drawing.
//!
//! Run with: cargo bench --bench parse

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dxfgrab::io::dxf::TagLexer;
use dxfgrab::Drawing;
use std::fmt::Write;
use std::io::Cursor;

/// DXF text with `count` LINE, CIRCLE and POLYLINE records in ENTITIES
fn synthetic_dxf(count: usize) -> String {
    let mut text = String::new();
    let mut tag = |code: i32, value: &dyn std::fmt::Display| {
        let _ = write!(text, "{code:>3}\n{value}\n");
    };
    for (name, code, value) in [("$ACADVER", 1, "AC1015"), ("$DWGCODEPAGE", 3, "ANSI_1252")] {
        tag(0, &"SECTION");
        tag(2, &"HEADER");
        tag(9, &name);
        tag(code, &value);
        tag(0, &"ENDSEC");
    }
    tag(0, &"SECTION");
    tag(2, &"ENTITIES");
    for i in 0..count {
        let x = i as f64;
        tag(0, &"LINE");
        tag(5, &format!("{:X}", 0x100 + i * 3));
        tag(8, &"0");
        for (code, value) in [(10, x), (20, 0.0), (30, 0.0), (11, x + 1.0), (21, 1.0), (31, 0.0)] {
            tag(code, &value);
        }
        tag(0, &"CIRCLE");
        tag(8, &"0");
        for (code, value) in [(10, x), (20, x), (30, 0.0), (40, 0.5)] {
            tag(code, &value);
        }
        tag(0, &"POLYLINE");
        tag(66, &1);
        for v in 0..4 {
            tag(0, &"VERTEX");
            tag(10, &(x + v as f64));
            tag(20, &(v as f64));
        }
        tag(0, &"SEQEND");
    }
    tag(0, &"ENDSEC");
    tag(0, &"EOF");
    text
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for count in [100usize, 1_000, 10_000] {
        let text = synthetic_dxf(count);
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_with_input(BenchmarkId::new("lexer", count), &text, |b, text| {
            b.iter(|| {
                let lexer = TagLexer::new(Cursor::new(text.as_bytes()));
                black_box(lexer.filter_map(Result::ok).count())
            })
        });

        group.bench_with_input(BenchmarkId::new("drawing", count), &text, |b, text| {
            b.iter(|| {
                let drawing: Drawing = black_box(text.as_str()).parse().expect("valid fixture");
                black_box(drawing.entities.len())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
