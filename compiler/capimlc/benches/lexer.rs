//! Lexer throughput benchmarks for `capiml_lexer_core`.
//!
//! Measures pure tokenization: buffer construction plus the `next_token`
//! loop, with no output formatting.

use std::hint::black_box;

use capiml_lexer_core::{Lexer, SourceBuffer, TokenKind};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Generate N small config sections for scaling benchmarks.
fn generate_n_sections(n: usize) -> String {
    (0..n)
        .map(|i| {
            format!(
                "# section {i}\nservice_{i}: {{\n  host: 'node{i}.local'\n  port: {}\n  \
                 weights: [ 1 -2 {i} ]\n}}\n",
                8000 + i
            )
        })
        .collect()
}

fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer/throughput");

    for sections in [10, 100, 1000, 10_000] {
        let source = generate_n_sections(sections);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(sections), &source, |b, src| {
            b.iter(|| {
                let buf = SourceBuffer::new(src);
                let mut lexer = Lexer::new(buf.cursor());
                loop {
                    let tok = lexer.next_token();
                    if tok.is(TokenKind::End) {
                        break;
                    }
                    black_box(tok);
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_throughput);
criterion_main!(benches);
