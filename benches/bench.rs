// Criterion benchmarks for Provider Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use provider_match::core::{matches_synonyms, synonyms::HOME_SERVICES, Matcher};
use provider_match::models::{AnswerMap, Provider, ProvidersByCategory};

const HOME_TAGS: &[&str] = &[
    "Plumber", "Emergency", "Solar Panels", "Handyman", "Air Conditioning", "Roof Repair",
    "Licensed", "Free Estimates", "Pest Control", "Deck Staining",
];

const RESTAURANT_TAGS: &[&str] = &[
    "mexican", "Italian", "$$", "$", "vegan", "date night", "Family friendly", "takeout",
    "GF menu", "brunch",
];

fn create_provider(id: usize, category: &str, vocabulary: &[&str]) -> Provider {
    let tags = (0..3).map(|k| vocabulary[(id * 7 + k * 3) % vocabulary.len()]);
    let mut provider = Provider::new(id.to_string(), format!("Provider {}", id), category)
        .with_tags(tags)
        .with_rating((id % 50) as f64 / 10.0);
    provider.is_featured = id % 9 == 0;
    provider
}

fn create_catalog(count: usize) -> ProvidersByCategory {
    let mut catalog = ProvidersByCategory::new();
    catalog.insert(
        "home-services".to_string(),
        (0..count).map(|i| create_provider(i, "home-services", HOME_TAGS)).collect(),
    );
    catalog.insert(
        "restaurants-cafes".to_string(),
        (0..count).map(|i| create_provider(i, "restaurants-cafes", RESTAURANT_TAGS)).collect(),
    );
    catalog
}

fn bench_synonym_match(c: &mut Criterion) {
    let tags = ["Air Conditioning Repair", "Licensed", "Free Estimates"];

    c.bench_function("matches_synonyms_hit", |b| {
        b.iter(|| matches_synonyms(black_box(&tags), black_box("hvac"), &HOME_SERVICES));
    });

    c.bench_function("matches_synonyms_miss", |b| {
        b.iter(|| matches_synonyms(black_box(&tags), black_box("pool-service"), &HOME_SERVICES));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let home_answers: AnswerMap = [("type", "plumbing"), ("goal", "repair"), ("urgency", "emergency")]
        .into_iter()
        .collect();
    let restaurant_answers: AnswerMap = [("cuisine", "mexican"), ("price", "moderate"), ("dietary", "vegan")]
        .into_iter()
        .collect();

    let mut group = c.benchmark_group("ranking");

    for provider_count in [10, 50, 100, 500, 1000].iter() {
        let catalog = create_catalog(*provider_count);

        group.bench_with_input(
            BenchmarkId::new("home_services", provider_count),
            provider_count,
            |b, _| {
                b.iter(|| {
                    matcher.score_providers(
                        black_box("home-services"),
                        black_box(&home_answers),
                        black_box(&catalog),
                    )
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("restaurants", provider_count),
            provider_count,
            |b, _| {
                b.iter(|| {
                    matcher.score_providers(
                        black_box("restaurants-cafes"),
                        black_box(&restaurant_answers),
                        black_box(&catalog),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_synonym_match, bench_ranking);

criterion_main!(benches);
