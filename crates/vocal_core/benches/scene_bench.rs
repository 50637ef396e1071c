//! Scene construction and indexing benchmarks on generated lattices.
//!
//! A `n x n` lattice has many cycles, so it exercises back-edge
//! classification and stale frame dropping, not just tree growth.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use vocal_core::{
  Calibration, Color, EdgeRef, Forest, ImageDims, Point, SceneBuilder, SceneConfig, SliceIndex,
  Tree, TreeBuilder,
};

const SPACING: i32 = 4;

fn lattice(n: usize) -> Tree {
  let mut builder = TreeBuilder::new();
  for y in 0..n {
    for x in 0..n {
      builder.vertex(Point::new(SPACING * x as i32, SPACING * y as i32, (x % 8) as i32));
    }
  }
  for y in 0..n {
    for x in 0..n {
      let id = y * n + x;
      let base = Point::new(SPACING * x as i32, SPACING * y as i32, (x % 8) as i32);
      if x + 1 < n {
        let slabs = (1..SPACING).map(|d| Point::new(base.x + d, base.y, base.z)).collect();
        builder.edge(id, id + 1, slabs);
      }
      if y + 1 < n {
        let slabs = (1..SPACING).map(|d| Point::new(base.x, base.y + d, base.z)).collect();
        builder.edge(id, id + n, slabs);
      }
    }
  }
  builder.build()
}

fn dims(n: usize) -> ImageDims {
  let side = (SPACING as u32) * n as u32;
  ImageDims::new(side, side, 8)
}

// =============================================================================
// Scene construction
// =============================================================================

fn bench_scene_build(c: &mut Criterion) {
  let mut group = c.benchmark_group("scene_build");

  for n in [16usize, 64, 128] {
    let forest = Forest::new(vec![lattice(n)]);
    let builder = SceneBuilder::new(dims(n), SceneConfig::default()).unwrap();
    group.throughput(Throughput::Elements(forest.edge_count() as u64));

    group.bench_with_input(BenchmarkId::new("lattice", n), &forest, |b, forest| {
      b.iter_batched(
        || forest.clone(),
        |mut forest| black_box(builder.build(&mut forest).unwrap().stats),
        criterion::BatchSize::LargeInput,
      )
    });
  }

  group.finish();
}

// =============================================================================
// Slice index
// =============================================================================

fn bench_slice_index(c: &mut Criterion) {
  let mut group = c.benchmark_group("slice_index");

  for n in [16usize, 64, 128] {
    let forest = Forest::new(vec![lattice(n)]);
    group.throughput(Throughput::Elements(forest.edge_count() as u64));

    group.bench_with_input(BenchmarkId::new("build", n), &forest, |b, forest| {
      b.iter(|| black_box(SliceIndex::build(forest).unwrap().len()))
    });
  }

  let forest = Forest::new(vec![lattice(128)]);
  let index = SliceIndex::build(&forest).unwrap();
  group.bench_function("edges_in_range/128", |b| {
    b.iter(|| black_box(index.edges_in_range(black_box(2..=5)).len()))
  });

  group.finish();
}

// =============================================================================
// Picking
// =============================================================================

fn bench_pick_toggle(c: &mut Criterion) {
  let n = 64;
  let analyzed =
    vocal_core::AnalyzedForest::new(Forest::new(vec![lattice(n)]), dims(n), &SceneConfig::default())
      .unwrap();
  let edges: Vec<EdgeRef> = analyzed
    .scene()
    .leaves()
    .map(|(_, polyline)| polyline.edge)
    .collect();

  c.bench_function("pick_toggle/64", |b| {
    let mut session = analyzed.session(&Calibration::default());
    session.ledger_mut().add_class(Color::RED).unwrap();
    b.iter(|| {
      for &edge in &edges {
        black_box(session.pick_edge(edge, 5).unwrap());
      }
    })
  });
}

criterion_group!(benches, bench_scene_build, bench_slice_index, bench_pick_toggle);
criterion_main!(benches);
