//! Benchmarks for document parsing performance.

#![allow(clippy::format_push_string)] // Benchmark setup code, performance not critical

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use folio_document::DocumentParser;

/// Generate markdown content with specified structure.
fn generate_markdown(sections: usize, paragraphs_per_section: usize) -> String {
    let mut md = String::with_capacity(sections * 80 + sections * paragraphs_per_section * 200);
    md.push_str("<!-- title: Benchmark -->\n# Document Title\n\n");

    for i in 0..sections {
        md.push_str(&format!("## Section {i}\n\n"));
        for j in 0..paragraphs_per_section {
            md.push_str(&format!(
                "This is paragraph {j} in section {i}. It contains **bold**, *italic* and [a link](https://example.com/{j}).\n\n"
            ));
        }
        md.push_str(&format!("### Details {i}\n\n> A note. {{.is-info}}\n\n"));
        md.push_str(&format!(
            "[Video](https://youtu.be/id{i}){{.youtube}}\n\n![Figure](fig{i}.png){{.align-center}}\n\n"
        ));
    }
    md
}

fn bench_parse_simple(c: &mut Criterion) {
    let parser = DocumentParser::new();

    c.bench_function("parse_simple_document", |b| {
        b.iter(|| parser.parse("# Hello\n\nSimple content."));
    });
}

fn bench_parse_varying_sizes(c: &mut Criterion) {
    let parser = DocumentParser::new();
    let mut group = c.benchmark_group("parse_by_size");

    for (sections, paragraphs) in [(5, 2), (20, 3), (50, 5)] {
        let markdown = generate_markdown(sections, paragraphs);
        group.throughput(Throughput::Bytes(markdown.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("markdown", format!("{sections}s_{paragraphs}p")),
            &markdown,
            |b, md| b.iter(|| parser.parse(md)),
        );
    }

    group.finish();
}

fn bench_text_extraction(c: &mut Criterion) {
    let parser = DocumentParser::new();
    let markdown = generate_markdown(20, 3);

    c.bench_function("text_tokens_20_sections", |b| {
        b.iter(|| parser.text(&markdown));
    });
}

criterion_group!(
    benches,
    bench_parse_simple,
    bench_parse_varying_sizes,
    bench_text_extraction
);
criterion_main!(benches);
