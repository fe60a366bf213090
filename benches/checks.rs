// SPDX-License-Identifier: Apache-2.0

use criterion::{black_box, Criterion, criterion_group, criterion_main};
use assert_is::{AssertOptions, Asserter, Function, Value};

fn pass_through(c: &mut Criterion) {
	let mut group = c.benchmark_group("pass_through");
	let thenable = Value::thenable(Function::noop("then"));

	group.bench_function("exists", |b| b.iter(||
		assert_is::exists(black_box("token"), "token", None)
	));
	group.bench_function("object", |b| b.iter(||
		assert_is::object(black_box(&thenable), None)
	));
	group.bench_function("string", |b| b.iter(||
		assert_is::string(black_box("token"), None)
	));
	group.bench_function("promise", |b| b.iter(||
		assert_is::promise(black_box(&thenable), None)
	));
	group.finish();
}

fn failure(c: &mut Criterion) {
	let mut group = c.benchmark_group("failure");
	let lean = Asserter::new(AssertOptions::lean());

	group.bench_function("captured trace", |b| b.iter(||
		assert_is::string(black_box(42i32), Some("age"))
	));
	group.bench_function("no trace", |b| b.iter(||
		lean.string(black_box(42i32), Some("age"))
	));
	group.finish();
}

criterion_group!(benches, pass_through, failure);
criterion_main!(benches);
