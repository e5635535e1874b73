use criterion::{Criterion, criterion_group, criterion_main};
use lumen::store::{MemoryStore, ResourceKind, StoreHandle, seed::seed_demo};
use lumen_schema::{NewStorageBucket, StorageBucket};
use std::hint::black_box;

fn bucket(i: u64) -> NewStorageBucket {
    NewStorageBucket {
        name: format!("bucket-{i}"),
        public: i % 2 == 0,
        file_count: i,
        total_size: i * 1024,
    }
}

fn memory_store(c: &mut Criterion) {
    let mut store = MemoryStore::default();
    let project_id = seed_demo(&mut store);
    for i in 0..1_000 {
        store.create(lumen::store::ChildCreate::into_create(bucket(i), project_id));
    }

    c.bench_function("memory_list_buckets_1k", |b| {
        b.iter(|| black_box(store.list_for_project(ResourceKind::StorageBucket, project_id)));
    });

    let mut i = 0_u64;
    c.bench_function("memory_create_bucket", |b| {
        b.iter(|| {
            i += 1;
            black_box(store.create(lumen::store::ChildCreate::into_create(bucket(i), project_id)))
        });
    });
}

fn actor_round_trip(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().expect("tokio runtime");
    let handle: StoreHandle = rt
        .block_on(lumen::store::spawn(true))
        .expect("spawn store");

    c.bench_function("actor_get_bucket", |b| {
        b.to_async(&rt).iter(|| {
            let handle = handle.clone();
            async move { black_box(handle.get::<StorageBucket>(1).await) }
        });
    });

    c.bench_function("actor_create_bucket", |b| {
        b.to_async(&rt).iter(|| {
            let handle = handle.clone();
            async move { black_box(handle.create_for_project(1, bucket(7)).await) }
        });
    });
}

criterion_group!(benches, memory_store, actor_round_trip);
criterion_main!(benches);
