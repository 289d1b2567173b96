//! Benchmarks for docsift analysis performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks run against synthetic PDF data built with lopdf.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use docsift::{
    collect_sections, detect_pdf_bytes, extract_outline, DocumentParser, Embedder, HashEmbedder,
    SectionRanker,
};

fn show(ops: &mut Vec<Operation>, font: &str, size: i64, y: f32, text: &str) {
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new("Tf", vec![font.into(), size.into()]));
    ops.push(Operation::new("Td", vec![72.into(), y.into()]));
    ops.push(Operation::new("Tj", vec![Object::string_literal(text)]));
    ops.push(Operation::new("ET", vec![]));
}

/// Creates a synthetic PDF with one heading and several body lines per page.
fn create_test_pdf(page_count: usize) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let body_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
    });

    let mut kids: Vec<Object> = Vec::new();
    for page in 0..page_count {
        let mut operations = Vec::new();
        show(
            &mut operations,
            "F2",
            14,
            720.0,
            &format!("{} Section heading for page {}", page + 1, page + 1),
        );
        for i in 0..6 {
            show(
                &mut operations,
                "F1",
                10,
                690.0 - i as f32 * 16.0,
                &format!(
                    "Revenue and market figures for paragraph {} continue in ordinary prose.",
                    i + 1
                ),
            );
        }

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => body_id, "F2" => bold_id },
            },
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

/// Benchmark PDF format detection.
fn bench_format_detection(c: &mut Criterion) {
    let pdf_data = create_test_pdf(1);
    let non_pdf_data = b"Not a PDF file at all, just random text content";

    c.bench_function("detect_valid_pdf", |b| {
        b.iter(|| detect_pdf_bytes(black_box(&pdf_data)).unwrap());
    });

    c.bench_function("detect_non_pdf", |b| {
        b.iter(|| detect_pdf_bytes(black_box(non_pdf_data)).is_err());
    });
}

/// Benchmark end-to-end outline extraction at various sizes.
fn bench_outline_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("outline_extraction");

    for page_count in [1, 5, 10].iter() {
        let data = create_test_pdf(*page_count);

        group.bench_function(format!("{}_pages", page_count), |b| {
            b.iter(|| {
                let parser = DocumentParser::from_bytes(black_box(&data)).unwrap();
                let doc = parser.parse().unwrap();
                extract_outline(&doc)
            });
        });
    }

    group.finish();
}

/// Benchmark the analysis passes over an already parsed document.
fn bench_analysis_passes(c: &mut Criterion) {
    let data = create_test_pdf(10);
    let doc = DocumentParser::from_bytes(&data)
        .unwrap()
        .parse()
        .unwrap();

    c.bench_function("classify_outline", |b| {
        b.iter(|| extract_outline(black_box(&doc)));
    });

    c.bench_function("collect_sections", |b| {
        b.iter(|| collect_sections(black_box(&doc)));
    });
}

/// Benchmark embedding and ranking.
fn bench_ranking(c: &mut Criterion) {
    let data = create_test_pdf(10);
    let doc = DocumentParser::from_bytes(&data)
        .unwrap()
        .parse()
        .unwrap();
    let sections = collect_sections(&doc);
    let embedder = HashEmbedder::new();
    let persona = "Investment analyst looking for revenue trends and market positioning";

    c.bench_function("embed_persona", |b| {
        b.iter(|| embedder.embed(black_box(persona)));
    });

    c.bench_function("rank_sections", |b| {
        let ranker = SectionRanker::new(&embedder);
        b.iter(|| ranker.rank(black_box(persona), sections.clone()));
    });
}

criterion_group!(
    benches,
    bench_format_detection,
    bench_outline_extraction,
    bench_analysis_passes,
    bench_ranking,
);
criterion_main!(benches);
