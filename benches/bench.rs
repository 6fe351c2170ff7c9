use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use blockint::{AdaptiveInt, FixedInt, Int128, Int256};

// Establish a baseline by comparing with a single native op

fn baseline_native_mul_u128(c: &mut Criterion) {
  c.bench_function("baseline_native_mul_u128", |b| {
    b.iter(|| black_box(0x1234_5678_9abc_def0_u128) * black_box(0x0fed_cba9_8765_4321_u128));
  });
}

fn baseline_native_div_i128(c: &mut Criterion) {
  c.bench_function("baseline_native_div_i128", |b| {
    b.iter(|| black_box(-0x1234_5678_9abc_def0_1234_5678_i128) / black_box(0x0fed_cba9_i128));
  });
}

// Fixed width

const NUMS_128: [(i128, i128); 3] = [
  (0x1234_5678_9abc_def0_1234_5678, 0x0fed_cba9),
  (-0x7fff_ffff_ffff_ffff_ffff_ffff_ffff_ffff, 0x1_0000_0001),
  (0x5555_5555_5555_5555_5555, -0x3333_3333_3333_3333),
];

fn fixed_128(c: &mut Criterion) {
  let mut g = c.benchmark_group("fixed_128");
  for (x, y) in NUMS_128 {
    let (a, b) = (Int128::from(x), Int128::from(y));
    let id = format!("{x:#x}_{y:#x}");
    g.throughput(Throughput::Elements(1));
    g.bench_with_input(BenchmarkId::new("add", &id), &(a, b), |bench, &(a, b)| {
      bench.iter(|| black_box(a) + black_box(b));
    });
    g.bench_with_input(BenchmarkId::new("mul", &id), &(a, b), |bench, &(a, b)| {
      bench.iter(|| black_box(a) * black_box(b));
    });
    g.bench_with_input(BenchmarkId::new("div_rem", &id), &(a, b), |bench, &(a, b)| {
      bench.iter(|| black_box(a).div_rem(&black_box(b)));
    });
    g.bench_with_input(BenchmarkId::new("long_division", &id), &(a, b), |bench, &(a, b)| {
      bench.iter(|| black_box(a).long_division(&black_box(b)));
    });
  }
  g.finish();
}

fn fixed_widths(c: &mut Criterion) {
  let mut g = c.benchmark_group("fixed_widths");
  g.throughput(Throughput::Elements(1));
  let (a, b) = (Int256::from(-0x1234_5678_9abc_def0_i64) << 100, Int256::from(0x0fed_cba9_8765_i64));
  g.bench_function("mul_256_u32", |bench| bench.iter(|| black_box(a) * black_box(b)));
  g.bench_function("div_256_u32", |bench| bench.iter(|| black_box(a) / black_box(b)));
  let (a, b) = (FixedInt::<256, 4, u64>::from(-0x1234_5678_9abc_def0_i64) << 100, FixedInt::<256, 4, u64>::from(0x0fed_cba9_8765_i64));
  g.bench_function("mul_256_u64", |bench| bench.iter(|| black_box(a) * black_box(b)));
  g.bench_function("div_256_u64", |bench| bench.iter(|| black_box(a) / black_box(b)));
  let (a, b) = (FixedInt::<256, 32, u8>::from(-0x1234_5678_9abc_def0_i64) << 100, FixedInt::<256, 32, u8>::from(0x0fed_cba9_8765_i64));
  g.bench_function("mul_256_u8", |bench| bench.iter(|| black_box(a) * black_box(b)));
  g.bench_function("div_256_u8", |bench| bench.iter(|| black_box(a) / black_box(b)));
  g.finish();
}

// Adaptive

fn adaptive(c: &mut Criterion) {
  let mut g = c.benchmark_group("adaptive");
  for bits in [64, 256, 1024, 4096] {
    // A dense `bits`-bit dividend, and a divisor of about half as many bits.
    let a = (AdaptiveInt::<u32>::from(1) << bits) / AdaptiveInt::from(7);
    let b = (AdaptiveInt::<u32>::from(1) << (bits / 2)) / AdaptiveInt::from(3);
    g.throughput(Throughput::Elements(1));
    g.bench_with_input(BenchmarkId::new("add", bits), &(&a, &b), |bench, (a, b)| {
      bench.iter(|| black_box(*a) + black_box(*b));
    });
    g.bench_with_input(BenchmarkId::new("mul", bits), &(&a, &b), |bench, (a, b)| {
      bench.iter(|| black_box(*a) * black_box(*b));
    });
    g.bench_with_input(BenchmarkId::new("div_rem", bits), &(&a, &b), |bench, (a, b)| {
      bench.iter(|| black_box(*a).div_rem(black_box(*b)));
    });
    g.bench_with_input(BenchmarkId::new("to_string", bits), &a, |bench, a| {
      bench.iter(|| black_box(a).to_string());
    });
  }
  g.finish();
}

criterion_group!(baseline_native,
  baseline_native_mul_u128,
  baseline_native_div_i128,
);

criterion_group!(fixed,
  fixed_128,
  fixed_widths,
);

criterion_group!(adaptive_precision,
  adaptive,
);

criterion_main!(baseline_native, fixed, adaptive_precision);
