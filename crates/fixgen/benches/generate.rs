// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com
//!
//! Benchmark: generation throughput by type graph shape and depth.

#![allow(clippy::uninlined_format_args)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fixgen::{
    CompositeBuilder, Generator, GeneratorConfig, PrimitiveKind, TypeCatalog, TypeDescriptor,
};
use std::sync::Arc;

fn catalog() -> Arc<TypeCatalog> {
    let mut catalog = TypeCatalog::new();
    catalog.register(
        CompositeBuilder::new("Point")
            .generatable()
            .default_constructor()
            .primitive_field("x", PrimitiveKind::F64)
            .primitive_field("y", PrimitiveKind::F64)
            .build(),
    );
    catalog.register(
        CompositeBuilder::new("TreeNode")
            .generatable()
            .default_constructor()
            .primitive_field("value", PrimitiveKind::I32)
            .reference_field("left", "TreeNode")
            .reference_field("right", "TreeNode")
            .build(),
    );
    catalog.register(CompositeBuilder::interface("Shape").build());
    for name in ["Circle", "Square"] {
        catalog.register(
            CompositeBuilder::new(name)
                .generatable()
                .implements("Shape")
                .default_constructor()
                .reference_field("origin", "Point")
                .string_field("label")
                .field(
                    "tags",
                    Arc::new(TypeDescriptor::map(
                        Arc::new(TypeDescriptor::string()),
                        Arc::new(TypeDescriptor::string()),
                    )),
                )
                .build(),
        );
    }
    Arc::new(catalog)
}

fn bench_flat(c: &mut Criterion) {
    let mut gen = Generator::with_config(catalog(), GeneratorConfig::default().seed(1))
        .expect("config");
    c.bench_function("generate_point", |b| {
        b.iter(|| black_box(gen.generate_named("Point").expect("point")));
    });
}

fn bench_tree_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_tree");
    let catalog = catalog();
    for depth in [2usize, 4, 6, 8] {
        let config = GeneratorConfig::default().max_depth(depth).seed(1);
        let mut gen = Generator::with_config(Arc::clone(&catalog), config).expect("config");
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, _| {
            b.iter(|| black_box(gen.generate_named("TreeNode").expect("tree")));
        });
    }
    group.finish();
}

fn bench_polymorphic(c: &mut Criterion) {
    let mut gen = Generator::with_config(catalog(), GeneratorConfig::default().seed(1))
        .expect("config");
    c.bench_function("generate_shape_cached", |b| {
        b.iter(|| black_box(gen.generate_named("Shape").expect("shape")));
    });
}

fn bench_collections(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_list");
    let list = TypeDescriptor::list(Arc::new(TypeDescriptor::reference("Point")));
    let catalog = catalog();
    for size in [3usize, 16, 64] {
        let config = GeneratorConfig::default().max_collection_size(size).seed(1);
        let mut gen = Generator::with_config(Arc::clone(&catalog), config).expect("config");
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(gen.generate(&list).expect("list")));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_flat,
    bench_tree_depth,
    bench_polymorphic,
    bench_collections
);
criterion_main!(benches);
