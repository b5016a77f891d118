//! Benchmarks for tab block rendering.

#![allow(clippy::format_push_string)] // Benchmark setup code, performance not critical

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use tb_tabs::{SequentialIdSource, TabBlockBuilder, TabsShortcode};

/// Generate shortcode content with `tabs` tabs of `paragraphs` paragraphs each.
fn generate_content(tabs: usize, paragraphs: usize) -> String {
    let mut content = String::from("<tabs>");
    for i in 0..tabs {
        content.push_str(&format!("<div>Tab {i}"));
        for j in 0..paragraphs {
            content.push_str(&format!(
                "<p>Paragraph {j} of tab {i} with <strong>bold</strong> &amp; <em>italic</em> text.</p>"
            ));
        }
        content.push_str("</div>");
    }
    content.push_str("</tabs>");
    content
}

fn bench_render_simple(c: &mut Criterion) {
    let builder = TabBlockBuilder::new();
    let content = generate_content(2, 1);

    c.bench_function("render_two_tabs", |b| {
        b.iter(|| builder.render(&content));
    });
}

fn bench_render_varying_sizes(c: &mut Criterion) {
    let builder = TabBlockBuilder::new().with_id_source(SequentialIdSource::new());
    let mut group = c.benchmark_group("render_tab_count");

    for tabs in [2, 8, 32] {
        let content = generate_content(tabs, 5);
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(tabs), &content, |b, content| {
            b.iter(|| builder.render(content));
        });
    }
    group.finish();
}

fn bench_shortcode_page(c: &mut Criterion) {
    let mut page = String::new();
    for i in 0..10 {
        page.push_str(&format!("<h2>Section {i}</h2><p>Intro text.</p>"));
        page.push_str(&generate_content(3, 2));
    }

    c.bench_function("shortcode_page_10_blocks", |b| {
        b.iter(|| {
            let mut html = page.clone();
            TabsShortcode::new().post_process(&mut html)
        });
    });
}

criterion_group!(
    benches,
    bench_render_simple,
    bench_render_varying_sizes,
    bench_shortcode_page
);
criterion_main!(benches);
