use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::Rng;
use serde_json::json;
use wayfarer_store::{Collection, Filter, Store, StoreConfig, Update};

const CATEGORIES: [&str; 5] = ["Beaches", "Mountains", "City Breaks", "Food & Culture", "Adventure"];

async fn setup_collection(size: usize) -> Collection {
    let store = Store::with_config(StoreConfig {
        warn_on_query_operators: false,
        ..StoreConfig::unseeded()
    })
    .unwrap();
    let collection = store.collection("bench_posts");
    let mut rng = rand::thread_rng();
    for i in 0 .. size {
        let category = CATEGORIES[rng.gen_range(0 .. CATEGORIES.len())];
        collection
            .insert_one(json!({
                "_id": format!("post-{}", i),
                "title": format!("Post {}", i),
                "category": category,
                "likes": rng.gen_range(0 .. 1000)
            }))
            .await
            .unwrap();
    }
    collection
}

fn bench_insert(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("collection_insert_one", |b| {
        b.iter_batched(
            || rt.block_on(setup_collection(0)),
            |collection| {
                rt.block_on(async move {
                    let doc = json!({"title": "bench", "likes": black_box(42)});
                    black_box(collection.insert_one(doc).await.unwrap());
                })
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_find_by_id(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let collection = rt.block_on(setup_collection(1_000));

    c.bench_function("collection_find_one_by_id", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| {
            let filter = Filter::by_id(format!("post-{}", rng.gen_range(0 .. 1_000)));
            rt.block_on(async {
                black_box(collection.find_one(&filter).await.unwrap());
            })
        })
    });
}

fn bench_find_by_category(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let collection = rt.block_on(setup_collection(1_000));
    let filter = Filter::new().with("category", "Mountains");

    c.bench_function("collection_find_by_category", |b| {
        b.iter(|| {
            rt.block_on(async {
                black_box(collection.find(&filter).await.unwrap());
            })
        })
    });
}

fn bench_update_inc(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let collection = rt.block_on(setup_collection(1_000));
    let update = Update::inc("likes", 1);

    c.bench_function("collection_update_one_inc", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| {
            let filter = Filter::by_id(format!("post-{}", rng.gen_range(0 .. 1_000)));
            rt.block_on(async {
                black_box(collection.update_one(&filter, &update).await.unwrap());
            })
        })
    });
}

fn bench_delete(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("collection_delete_one", |b| {
        b.iter_batched(
            || rt.block_on(setup_collection(100)),
            |collection| {
                rt.block_on(async move {
                    black_box(
                        collection
                            .delete_one(&Filter::by_id("post-50"))
                            .await
                            .unwrap(),
                    );
                })
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_initialize(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("store_initialize_seed", |b| {
        b.iter(|| {
            rt.block_on(async {
                let store = Store::new();
                black_box(store.initialize().await);
            })
        })
    });
}

criterion_group!(
    benches,
    bench_insert,
    bench_find_by_id,
    bench_find_by_category,
    bench_update_inc,
    bench_delete,
    bench_initialize
);
criterion_main!(benches);
