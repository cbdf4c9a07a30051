//! Lexer Benchmarks
//!
//! Run with: `cargo bench --package collc-lex`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use collc_lex::Lexer;
use collc_util::Handler;

fn lexer_token_count(source: &str) -> usize {
    let handler = Handler::new();
    Lexer::for_str(source, &handler).count()
}

fn reader_token_count(source: &str) -> usize {
    let handler = Handler::new();
    Lexer::for_reader(source.as_bytes(), &handler).count()
}

const PROGRAM: &str = r#"
    # vector helpers
    coll Vector {
        float x;
        float y;
        float z;
    }

    def dot(Vector a, Vector b) -> float {
        return a.x * b.x + a.y * b.y + a.z * b.z;
    }

    def count_positive(array float xs, int n) -> int {
        int total = 0;
        for (int i = 0; i < n; i = i + 1) {
            if (xs[i] > .0 && not (xs[i] =/= 00042.5)) {
                total = total + 1;
            } else {
                print("skip\n");
            }
        }
        return total;
    }
"#;

fn bench_lexer_simple(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "final int x = 42; def main() -> int { return x + 1; }";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_final", |b| {
        b.iter(|| lexer_token_count(black_box("final int x = 42;")))
    });

    group.bench_function("function_with_body", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_program(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_program");
    group.throughput(Throughput::Bytes(PROGRAM.len() as u64));

    group.bench_function("str_source", |b| {
        b.iter(|| lexer_token_count(black_box(PROGRAM)))
    });

    group.bench_function("reader_source", |b| {
        b.iter(|| reader_token_count(black_box(PROGRAM)))
    });

    group.finish();
}

fn bench_lexer_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_scaling");

    for copies in [1usize, 10, 100] {
        let source = PROGRAM.repeat(copies);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(copies), &source, |b, s| {
            b.iter(|| lexer_token_count(black_box(s)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_simple,
    bench_lexer_program,
    bench_lexer_scaling
);
criterion_main!(benches);
