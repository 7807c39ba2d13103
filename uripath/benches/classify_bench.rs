use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use uripath::{classify, KeyValues, Model, NavigationSource, Segment, TypeRef, UriPath};

struct Fixture {
    model: Model,
    set: Segment,
    key: Segment,
    nav: Segment,
    property: Segment,
}

fn fixture() -> Fixture {
    let mut model = Model::new();
    let string = model.add_primitive_type("Edm.String");
    let user = model.add_entity_type("NS", "User", &["id"]);
    let users = model.add_entity_set("NS.Container", "Users", user);
    let friends = model.add_navigation("friends", user, true);
    let display_name = model.add_property("displayName", TypeRef::single(string));

    let source = Some(NavigationSource::EntitySet(users));
    let values: KeyValues = [("id", "1")].into_iter().collect();

    let set = Segment::entity_set(users, &model).unwrap();
    let key = Segment::key(values, user, source, &model).unwrap();
    let nav = Segment::navigation(friends, source, &model).unwrap();
    let property = Segment::property(display_name, &model).unwrap();

    Fixture {
        model,
        set,
        key,
        nav,
        property,
    }
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    let f = fixture();

    // Benchmark the single-segment root rule
    let root = [f.set.clone()];
    group.bench_function("entity_set", |b| {
        b.iter(|| classify(black_box(&root), &f.model));
    });

    // Benchmark the set-plus-key positional rule
    let entity = [f.set.clone(), f.key.clone()];
    group.bench_function("entity", |b| {
        b.iter(|| classify(black_box(&entity), &f.model));
    });

    // Benchmark trailing-segment rules at increasing depth
    for depth in [3usize, 5, 9] {
        let mut segments = vec![f.set.clone(), f.key.clone()];
        while segments.len() + 1 < depth {
            segments.push(f.nav.clone());
            segments.push(f.key.clone());
        }
        segments.push(f.property.clone());
        group.bench_with_input(
            BenchmarkId::new("trailing_property", depth),
            &segments,
            |b, segments| {
                b.iter(|| classify(black_box(segments), &f.model));
            },
        );
    }

    group.finish();
}

fn bench_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("path");
    let f = fixture();

    let segments = vec![
        f.set.clone(),
        f.key.clone(),
        f.nav.clone(),
        f.key.clone(),
        f.property.clone(),
    ];

    // Benchmark construction with eager classification
    group.bench_function("construct", |b| {
        b.iter(|| UriPath::new(black_box(segments.clone()), &f.model));
    });

    // Benchmark first literal rendering (fresh container each iteration)
    group.bench_function("literal_cold", |b| {
        b.iter(|| {
            let path = UriPath::new(segments.clone(), &f.model).unwrap();
            path.to_literal_string(black_box(&f.model)).unwrap().len()
        });
    });

    // Benchmark memoized literal access
    let path = UriPath::new(segments.clone(), &f.model).unwrap();
    let _ = path.to_literal_string(&f.model);
    group.bench_function("literal_warm", |b| {
        b.iter(|| path.to_literal_string(black_box(&f.model)));
    });

    // Benchmark segmentwise matching
    let other = UriPath::new(segments, &f.model).unwrap();
    group.bench_function("matches", |b| {
        b.iter(|| path.matches(black_box(&other)));
    });

    group.finish();
}

criterion_group!(benches, bench_classify, bench_path);
criterion_main!(benches);
