use criterion::{criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use service::albums::repository::mock::MockAlbumRepository;
use service::cache::MokaCacheStore;
use service::likes::repository::mock::MockLikeRepository;
use service::likes::LikeService;

fn bench_like_count(c: &mut Criterion) {
    let repo = Arc::new(MockLikeRepository::default());
    for i in 0..1_000 {
        repo.seed("album-bench", &format!("user-{i}"));
    }
    let svc = LikeService::new(Arc::new(MockAlbumRepository::default()), repo, Arc::new(MokaCacheStore::new(1_000)));

    // warm the cache outside of the measured loop
    let rt = tokio::runtime::Runtime::new().unwrap();
    let _ = rt.block_on(svc.get_like_count("album-bench"));

    c.bench_function("like_count_cache_hit", |b| {
        b.iter(|| {
            let _ = rt.block_on(svc.get_like_count("album-bench")).unwrap();
        });
    });
}

criterion_group!(benches, bench_like_count);
criterion_main!(benches);
