// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # fixgen - random fixture synthesis
//!
//! Generates fully-populated, structurally valid instances of runtime-described
//! types for use as test data. Types opt in by being marked generatable; the
//! generator discovers constructors, fields and container shapes from their
//! descriptors and fills them with random, type-correct values while bounding
//! recursion so self-referential type graphs terminate.
//!
//! ## Quick Start
//!
//! ```rust
//! use fixgen::{Generatable, Generator, GeneratorConfig, TypeCatalog};
//! use std::sync::Arc;
//!
//! #[derive(Debug, Generatable)]
//! struct Product {
//!     name: String,
//!     price: f64,
//! }
//!
//! #[derive(Debug, Generatable)]
//! struct Cart {
//!     owner: String,
//!     items: Vec<Product>,
//! }
//!
//! let mut catalog = TypeCatalog::new();
//! catalog.register_type::<Cart>();
//!
//! let config = GeneratorConfig::default().seed(7);
//! let mut generator = Generator::with_config(Arc::new(catalog), config).unwrap();
//! let cart: Cart = generator.generate_typed().unwrap();
//! assert!(cart.items.len() <= 3);
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`TypeDescriptor`] | Runtime shape of a type |
//! | [`TypeCatalog`] | Named descriptors, eligibility and implementation lookup |
//! | [`Generator`] | Recursive instance generator |
//! | [`Value`] | Generated instance |
//! | [`GeneratorConfig`] | Depth and container bounds, seed |
//!
//! ## Modules Overview
//!
//! - [`types`] - descriptors, values, builders and the catalog
//! - [`source`] - random atomic values
//! - [`classify`] - type classification and container helpers
//! - [`registry`] - implementation discovery and its cache
//! - [`generator`] - the generation algorithm
//! - [`typed`] - Rust types to descriptors and back

extern crate self as fixgen;

pub mod classify;
pub mod config;
pub mod error;
pub mod generator;
#[cfg(feature = "logging")]
pub mod logging;
pub mod registry;
pub mod source;
pub mod typed;
pub mod types;

pub use config::GeneratorConfig;
pub use error::{ConfigError, ConversionError, GenerateError, Result};
pub use generator::Generator;
pub use registry::{CacheStats, ImplementationCache, ImplementationFinder, SubtypeScan};
pub use typed::{Describe, FromValue, Generatable};
pub use types::{
    CollectionValue, CompositeBuilder, CompositeValue, ContainerKind, ContainerType, EnumBuilder,
    MapValue, PrimitiveKind, TypeCatalog, TypeDescriptor, TypeKind, Value,
};

// Derive macro, same name as the trait.
pub use fixgen_codegen::Generatable;
