//! Criterion benchmarks for food ranking and meal scoring
//!
//! Uses a synthetic catalog so the numbers do not depend on a dataset file.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nutrient_scorer_rust::{
    CatalogCache, FoodCatalog, FoodItem, IngredientNutrients, NutrientAmount, NutrientData,
    NutrientReferenceTable, NutrientScorer,
};
use std::sync::Arc;

/// Deterministic catalog: each food carries a rotating subset of nutrients
fn synthetic_catalog(foods: usize) -> FoodCatalog {
    let vocabulary = NutrientReferenceTable::standard().vocabulary();

    let items = (0..foods)
        .map(|i| FoodItem {
            id: i.to_string(),
            description: format!("Food {}, variant {}", i / 3, i % 3),
            nutrients: vocabulary
                .iter()
                .enumerate()
                .filter(|(j, _)| (i + j) % 4 != 0)
                .map(|(j, name)| (name.clone(), ((i * 7 + j * 13) % 97) as f64 + 0.5))
                .collect(),
        })
        .collect();

    FoodCatalog::new(items, vocabulary)
}

fn sample_meal() -> NutrientData {
    let mut nutrients = IngredientNutrients::new();
    nutrients.insert("Vitamin C".to_string(), NutrientAmount::from(45.0));
    nutrients.insert("Iron".to_string(), NutrientAmount::from(4.0));
    nutrients.insert("Calcium".to_string(), NutrientAmount::from(300.0));

    let mut meal = NutrientData::new();
    meal.insert("stir fry".to_string(), nutrients);
    meal
}

fn bench_rank(c: &mut Criterion) {
    let deficiencies: Vec<String> = ["Iron", "Zinc", "Vitamin D", "Vitamin B12", "DHA"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mut group = c.benchmark_group("rank_foods");
    for size in [1_000, 10_000, 50_000] {
        let catalog = synthetic_catalog(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &catalog, |b, catalog| {
            b.iter(|| catalog.rank(black_box(&deficiencies), 5));
        });
    }
    group.finish();
}

fn bench_score_meals(c: &mut Criterion) {
    let cache = CatalogCache::with_catalog("synthetic", synthetic_catalog(10_000));
    let scorer = NutrientScorer::new(
        Arc::new(NutrientReferenceTable::standard()),
        Arc::new(cache),
        5,
    );
    let meals: Vec<NutrientData> = (0..32).map(|_| sample_meal()).collect();

    c.bench_function("score_meal", |b| {
        b.iter(|| scorer.score_meal(black_box(&meals[0])))
    });
    c.bench_function("score_meals_parallel_32", |b| {
        b.iter(|| scorer.score_meals_parallel(black_box(&meals)))
    });
}

criterion_group!(benches, bench_rank, bench_score_meals);
criterion_main!(benches);
