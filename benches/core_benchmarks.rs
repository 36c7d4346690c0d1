use criterion::{black_box, criterion_group, criterion_main, Criterion};
use security_client::core::models::{RawDocument, RawHits};
use security_client::core::resolver::{resolve, Arg};
use security_client::{CreateOptions, Profile, Role, SecurityEntity};
use serde_json::json;

fn bench_resolve(c: &mut Criterion) {
    c.bench_function("resolve_full_signature", |b| {
        b.iter(|| {
            let _ = resolve::<Role>(
                black_box(json!({"controllers": {"document": {"actions": {"get": true}}}})).into(),
                "editor".into(),
                CreateOptions::replace().into(),
                Arg::callback(|_| {}),
            );
        })
    });

    c.bench_function("resolve_shifted_entity", |b| {
        b.iter(|| {
            let role = Role::new("editor", json!({}));
            let _ = resolve::<Role>(
                black_box(role).into(),
                CreateOptions::replace().into(),
                ().into(),
                ().into(),
            );
        })
    });
}

fn bench_documents(c: &mut Criterion) {
    let hits = json!({
        "total": 100,
        "hits": (0..100)
            .map(|i| json!({"_id": format!("p{}", i), "_source": {"roles": ["r1", "r2", "r3"]}}))
            .collect::<Vec<_>>()
    });

    c.bench_function("search_hits_to_profiles", |b| {
        b.iter(|| {
            let found = RawHits::from_result(black_box(hits.clone())).unwrap();
            let profiles: Vec<Profile> = found
                .hits
                .into_iter()
                .map(|doc| Profile::from_document(doc).unwrap())
                .collect();
            black_box(profiles);
        })
    });

    let doc = json!({"_id": "p1", "_source": {"label": "ops", "roles": ["r1", "r2"]}, "_version": 3});
    c.bench_function("profile_serialize", |b| {
        let profile = Profile::from_document(RawDocument::from_result(doc.clone()).unwrap()).unwrap();
        b.iter(|| black_box(profile.to_document()))
    });
}

criterion_group!(benches, bench_resolve, bench_documents);
criterion_main!(benches);
