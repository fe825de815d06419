use criterion::{black_box, criterion_group, criterion_main, Criterion};

use spotlight::content::Catalogue;
use spotlight::highlight::highlight;

const BIO: &str = "Shoaib Khan is a content creator, director, writer and video editor from Hyderabad. \
    Since 2017 his video editing and content creation grew into entrepreneurship: after Edventure Park \
    and BioReform he built Hyderabad Hustlers, telling the stories of 50+ entrepreneurs to 1M+ audiences.";

fn bench_highlight(c: &mut Criterion) {
    let catalogue = Catalogue::builtin().expect("builtin catalogue");
    let highlighter = catalogue.highlighter();

    c.bench_function("highlight bio (precompiled)", |b| {
        b.iter(|| highlighter.spans(black_box(BIO)))
    });

    c.bench_function("highlight bio (one-off)", |b| {
        b.iter(|| highlight(black_box(BIO), black_box(catalogue.highlights.as_slice())))
    });

    let long = BIO.repeat(50);
    c.bench_function("highlight long text", |b| {
        b.iter(|| highlighter.spans(black_box(&long)))
    });
}

criterion_group!(benches, bench_highlight);
criterion_main!(benches);
