//! Benchmarks for papersect extraction performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic span streams shaped like a paper.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use papersect::{Block, Document, ExtractOptions, FontStatistics, Line, Page, Span};

fn block(text: &str, size: f64) -> Block {
    Block::text(vec![Line::new(vec![Span::new(text, size)])])
}

/// Creates a synthetic paper with the given number of pages.
fn create_test_document(page_count: usize) -> Document {
    let mut pages = Vec::with_capacity(page_count);

    pages.push(Page::with_blocks(vec![
        block("Benchmarking Structure Recovery", 18.0),
        block("A. Author", 11.0),
        block("Abstract", 12.0),
        block("Benchmark test content for papersect performance measurement.", 10.0),
    ]));

    for i in 1..page_count {
        let mut blocks = vec![block(&format!("Section Number {}", i), 12.0)];
        for j in 0..20 {
            blocks.push(block(
                &format!("Paragraph {} on page {} with some body text in it.", j, i),
                10.0,
            ));
        }
        pages.push(Page::with_blocks(blocks));
    }

    pages.push(Page::with_blocks(vec![
        block("References", 12.0),
        block("[1] Someone. Something. 2020.", 9.0),
    ]));

    Document::from_pages(pages)
}

/// Benchmark font statistics on its own.
fn bench_font_statistics(c: &mut Criterion) {
    let doc = create_test_document(10);

    c.bench_function("font_statistics", |b| {
        b.iter(|| FontStatistics::collect(black_box(&doc)).unwrap());
    });
}

/// Benchmark full extraction at various sizes.
fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction");

    for page_count in [1, 10, 50].iter() {
        let doc = create_test_document(*page_count);

        group.bench_function(format!("{}_pages", page_count), |b| {
            b.iter(|| papersect::extract(black_box(&doc)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark parallel batch extraction.
fn bench_batch(c: &mut Criterion) {
    let docs: Vec<Document> = (0..32).map(|_| create_test_document(10)).collect();
    let options = ExtractOptions::default();

    c.bench_function("batch_32_documents", |b| {
        b.iter(|| papersect::extract_batch(black_box(&docs), &options));
    });
}

criterion_group!(benches, bench_font_statistics, bench_extraction, bench_batch);
criterion_main!(benches);
