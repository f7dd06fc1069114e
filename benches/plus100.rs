//! Native vs in-process add-100
//!
//! Measures what crossing the C ABI costs relative to doing the same add
//! in the caller: exported `plus100` through a function pointer vs a local
//! `a + 100`.
//!
//! Run with: cargo bench --bench plus100

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use plus100::ffi;

type Plus100Fn = unsafe extern "C" fn(u32, *mut u32) -> i32;

/// The same operation as the host would write it in-process.
fn add(a: u32) -> u32 {
    a + 100
}

fn bench_scalar(c: &mut Criterion) {
    let mut group = c.benchmark_group("plus100 comparison");

    // Going through a black-boxed pointer keeps the call from being inlined
    let native: Plus100Fn = black_box(ffi::plus100 as Plus100Fn);
    group.bench_function("native a + 100", |b| {
        let mut out = 0u32;
        b.iter(|| unsafe { native(black_box(10), &mut out) });
    });

    group.bench_function("in-process a + 100", |b| {
        b.iter(|| add(black_box(10)));
    });

    group.finish();
}

criterion_group!(benches, bench_scalar);
criterion_main!(benches);
