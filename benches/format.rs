use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use snug_json::{format, format_with_options, FormatOptions, Map, Value};

fn wide_object(members: usize) -> Value {
    let mut map = Map::new();
    for i in 0..members {
        map.insert(format!("key{i}"), Value::from(format!("value{i}")));
    }
    Value::Object(map)
}

fn deep_object(depth: usize) -> Value {
    let mut value = Value::from(1);
    for i in 0..depth {
        let mut map = Map::new();
        map.insert(format!("level{i}"), value);
        value = Value::Object(map);
    }
    value
}

fn long_array(elements: usize) -> Value {
    Value::Array((0..elements as i64).map(Value::from).collect())
}

fn benchmark_fitting_value(c: &mut Criterion) {
    let value = wide_object(4);

    c.bench_function("format_fitting_value", |b| {
        b.iter(|| format(black_box(&value)))
    });
}

fn benchmark_array_truncation(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_array_truncation");

    for size in [100, 1000, 10000].iter() {
        let value = long_array(*size);
        let options = FormatOptions::new()
            .with_max_array_length(5)
            .with_max_length(60);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| format_with_options(black_box(&value), options.clone()))
        });
    }

    group.finish();
}

fn benchmark_depth_collapse(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_depth_collapse");

    for depth in [8, 32, 128].iter() {
        let value = deep_object(*depth);
        let options = FormatOptions::new().with_max_length(40);

        group.bench_with_input(BenchmarkId::from_parameter(depth), depth, |b, _| {
            b.iter(|| format_with_options(black_box(&value), options.clone()))
        });
    }

    group.finish();
}

fn benchmark_forced_cut(c: &mut Criterion) {
    let value = wide_object(200);
    let options = FormatOptions::new().with_max_length(10);

    c.bench_function("format_forced_cut", |b| {
        b.iter(|| format_with_options(black_box(&value), options.clone()))
    });
}

criterion_group!(
    benches,
    benchmark_fitting_value,
    benchmark_array_truncation,
    benchmark_depth_collapse,
    benchmark_forced_cut
);
criterion_main!(benches);
