use blockmark_engine::{
    HtmlOptions, HtmlRenderer, MarkdownRenderer, Options, parse_document, render_to_vec,
};
use criterion::{Criterion, criterion_group, criterion_main};
mod common;

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let options = Options::default();
    let content = common::generate_markdown_content(100);
    group.bench_function("mixed_document", |b| {
        b.iter(|| {
            let tree = parse_document(std::hint::black_box(content.as_bytes()), &options);
            std::hint::black_box(tree);
        });
    });

    let list = common::generate_long_list(1000);
    group.bench_function("long_list", |b| {
        b.iter(|| parse_document(std::hint::black_box(list.as_bytes()), &options));
    });

    let quotes = common::generate_nested_quotes(200);
    group.bench_function("nesting_limit", |b| {
        b.iter(|| parse_document(std::hint::black_box(quotes.as_bytes()), &options));
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");
    group.sample_size(10);

    let content = common::generate_markdown_content(100);
    let tree = parse_document(content.as_bytes(), &Options::default());
    group.bench_function("html", |b| {
        b.iter(|| {
            let mut renderer = HtmlRenderer::new(HtmlOptions::default());
            render_to_vec(std::hint::black_box(&tree), &mut renderer)
        });
    });
    group.bench_function("markdown", |b| {
        b.iter(|| render_to_vec(std::hint::black_box(&tree), &mut MarkdownRenderer::new()));
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_render);
criterion_main!(benches);
