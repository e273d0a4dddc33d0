use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use outlet_mapper::models::{FeatureCollection, FilterCriteria, RawRecord, TextMatchMode};
use outlet_mapper::processors::{derive_category_universe, FeatureBuilder, FilterEngine};

const SEGMENTS: [&str; 5] = ["Bar", "Retail", "Restaurant", "Hotel", "Cafe"];

fn create_test_records(count: usize) -> Vec<RawRecord> {
    (0..count)
        .map(|i| {
            let mut record = RawRecord::new();
            record.insert("Business Name", format!("Outlet {} Boulangerie", i));
            record.insert("Simplified Market Segment (GFC2)", SEGMENTS[i % SEGMENTS.len()]);
            // every tenth row uses a decimal comma, every fiftieth is unparseable
            let lon = -4.0 + (i % 1000) as f64 * 0.012;
            let lat = 42.5 + (i % 800) as f64 * 0.011;
            if i % 50 == 0 {
                record.insert("Longitude", "n/a");
            } else if i % 10 == 0 {
                record.insert("Longitude", format!("{}", lon).replace('.', ","));
            } else {
                record.insert("Longitude", format!("{}", lon));
            }
            record.insert("Latitude", format!("{}", lat));
            record.insert("Main address", format!("{} rue de la Paix", i));
            record.insert("Postal code", "75002");
            record.insert("City", "Paris");
            record
        })
        .collect()
}

fn create_collection(count: usize) -> FeatureCollection {
    FeatureBuilder::default().build(&create_test_records(count))
}

fn benchmark_feature_builder(c: &mut Criterion) {
    let records = create_test_records(10_000);
    let builder = FeatureBuilder::default();

    c.bench_function("feature_builder_10k", |b| {
        b.iter(|| builder.build(black_box(&records)))
    });
}

fn benchmark_filter_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_engine");

    for size in [1_000, 10_000, 50_000] {
        let collection = create_collection(size);
        let criteria = FilterCriteria::new("boul 4", Some("Retail".to_string()));

        for mode in [TextMatchMode::Characters, TextMatchMode::Substring] {
            let engine = FilterEngine::new().with_text_match(mode);
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", mode), size),
                &collection,
                |b, collection| {
                    b.iter(|| engine.apply(black_box(collection), black_box(&criteria)))
                },
            );
        }
    }

    group.finish();
}

fn benchmark_category_universe(c: &mut Criterion) {
    let collection = create_collection(50_000);

    c.bench_function("category_universe_50k", |b| {
        b.iter(|| derive_category_universe(black_box(&collection)))
    });
}

criterion_group!(
    benches,
    benchmark_feature_builder,
    benchmark_filter_engine,
    benchmark_category_universe
);
criterion_main!(benches);
