// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Recursive value generator.
//!
//! # Algorithm
//!
//! For a type at depth `d`:
//!
//! 1. atomic types come straight from the value source;
//! 2. containers are sized by the field policy, elements at `d`;
//! 3. at `d >= max_depth` any other type is [`Value::Null`];
//! 4. abstract types pick a candidate uniformly from the implementation
//!    registry, concrete types must be marked eligible;
//! 5. constructors are tried in random order with arguments at `d + 1`
//!    (containers always empty);
//! 6. mutable fields are then populated at `d + 1`, best effort.
//!
//! Every composite is thus one level deeper than the instance holding it,
//! whichever container sits in between. A container at the depth bound is
//! still sized; its composite elements are `Null` and containers nested in
//! it are empty.
//!
//! # Example
//!
//! ```rust
//! use fixgen::{CompositeBuilder, Generator, GeneratorConfig, PrimitiveKind, TypeCatalog};
//! use std::sync::Arc;
//!
//! let mut catalog = TypeCatalog::new();
//! catalog.register(
//!     CompositeBuilder::new("Point")
//!         .generatable()
//!         .default_constructor()
//!         .primitive_field("x", PrimitiveKind::I32)
//!         .primitive_field("y", PrimitiveKind::I32)
//!         .build(),
//! );
//!
//! let config = GeneratorConfig::default().seed(42);
//! let mut generator = Generator::with_config(Arc::new(catalog), config).unwrap();
//! let point = generator.generate_named("Point").unwrap();
//! assert!(point.field("x").and_then(|v| v.as_i32()).is_some());
//! ```

mod construct;
mod populate;

use crate::classify::{self, TypeClass};
use crate::config::GeneratorConfig;
use crate::error::{ConfigError, GenerateError, Result};
use crate::source;
use crate::typed::Generatable;
use crate::types::{TypeCatalog, TypeDescriptor, Value};
use fastrand::Rng;
use std::sync::Arc;

/// Random instance generator over a shared [`TypeCatalog`].
///
/// A generator owns its random source and is used from one thread at a
/// time; use [`fork`](Self::fork) to hand independent generators to other
/// threads. The catalog (and its implementation cache) is shared.
#[derive(Debug)]
pub struct Generator {
    catalog: Arc<TypeCatalog>,
    config: GeneratorConfig,
    rng: Rng,
}

impl Generator {
    /// Generator with the default configuration and a process-seeded source.
    pub fn new(catalog: Arc<TypeCatalog>) -> Self {
        Self {
            catalog,
            config: GeneratorConfig::default(),
            rng: Rng::new(),
        }
    }

    /// Generator with a validated configuration.
    ///
    /// The random source is seeded from `config.seed` when set.
    pub fn with_config(
        catalog: Arc<TypeCatalog>,
        config: GeneratorConfig,
    ) -> std::result::Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => Rng::with_seed(seed),
            None => Rng::new(),
        };
        Self::with_rng(catalog, config, rng)
    }

    /// Generator drawing from a caller-supplied random source.
    ///
    /// `config.seed` is ignored.
    pub fn with_rng(
        catalog: Arc<TypeCatalog>,
        config: GeneratorConfig,
        rng: Rng,
    ) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        log::debug!(
            "[generator] max_depth={} max_collection_size={} seed={:?}",
            config.max_depth,
            config.max_collection_size,
            config.seed
        );
        Ok(Self {
            catalog,
            config,
            rng,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Arc<TypeCatalog> {
        &self.catalog
    }

    /// Independent generator seeded with `seed`, sharing catalog and config.
    pub fn fork(&self, seed: u64) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            config: self.config.clone(),
            rng: Rng::with_seed(seed),
        }
    }

    /// Restart the random source from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng.seed(seed);
    }

    /// Generate a value of `ty` at depth 0.
    pub fn generate(&mut self, ty: &TypeDescriptor) -> Result<Value> {
        self.generate_at(ty, 0)
    }

    /// Generate a value of the type registered as `name`.
    pub fn generate_named(&mut self, name: &str) -> Result<Value> {
        let ty = Arc::clone(self.catalog.lookup(name)?);
        self.generate(&ty)
    }

    /// Generate a `T`, which must be registered in the catalog.
    pub fn generate_typed<T: Generatable>(&mut self) -> Result<T> {
        let value = self.generate_named(T::TYPE_NAME)?;
        Ok(T::from_value(&value)?)
    }

    /// Generate `ty` as if reached `depth` levels below the root.
    pub(crate) fn generate_at(&mut self, ty: &TypeDescriptor, depth: usize) -> Result<Value> {
        let catalog = Arc::clone(&self.catalog);
        let ty = catalog.resolve(ty)?;

        if let Some(value) = source::atomic_value(&mut self.rng, ty)? {
            return Ok(value);
        }

        let class = classify::classify(ty);
        if class.is_container() {
            // Only reachable nested inside a container at the bound.
            if depth > self.config.max_depth {
                return classify::empty_container_of(ty);
            }
            return self.container_value(ty, depth);
        }
        if depth >= self.config.max_depth {
            log::trace!("[generator] depth {} reached at {}", depth, ty.name);
            return Ok(Value::Null);
        }

        match class {
            TypeClass::Composite { is_abstract: true } => {
                let candidates = catalog.implementations_of(ty);
                if candidates.is_empty() {
                    return Err(GenerateError::NoEligibleImplementation {
                        type_name: ty.name.clone(),
                    });
                }
                let chosen = Arc::clone(&candidates[self.rng.usize(..candidates.len())]);
                log::trace!("[generator] {} resolved to {}", ty.name, chosen.name);
                self.concrete_value(&catalog, &chosen, depth)
            }
            _ => self.concrete_value(&catalog, ty, depth),
        }
    }

    fn concrete_value(
        &mut self,
        catalog: &TypeCatalog,
        ty: &TypeDescriptor,
        depth: usize,
    ) -> Result<Value> {
        if !catalog.is_eligible(ty) {
            return Err(GenerateError::TypeNotEligible {
                type_name: ty.name.clone(),
            });
        }
        let mut instance = self.instantiate(catalog, ty, depth)?;
        self.populate_fields(catalog, ty, &mut instance, depth + 1)?;
        Ok(Value::Composite(instance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CompositeBuilder, EnumBuilder, PrimitiveKind};

    fn seeded(catalog: TypeCatalog, seed: u64) -> Generator {
        Generator::with_config(Arc::new(catalog), GeneratorConfig::default().seed(seed))
            .expect("config")
    }

    fn node_catalog() -> TypeCatalog {
        let mut catalog = TypeCatalog::new();
        catalog.register(
            CompositeBuilder::new("Node")
                .generatable()
                .default_constructor()
                .primitive_field("value", PrimitiveKind::I32)
                .reference_field("next", "Node")
                .build(),
        );
        catalog
    }

    fn chain_length(value: &Value) -> usize {
        match value.field("next") {
            Some(next) if !next.is_null() => 1 + chain_length(next),
            _ => 0,
        }
    }

    #[test]
    fn test_atomic_root() {
        let mut generator = seeded(TypeCatalog::new(), 1);
        let v = generator
            .generate(&TypeDescriptor::primitive(PrimitiveKind::I32))
            .expect("i32");
        assert!(v.as_i32().is_some());
    }

    #[test]
    fn test_depth_bound_on_linked_list() {
        for max_depth in 1..=5 {
            let config = GeneratorConfig::default().max_depth(max_depth).seed(7);
            let mut generator =
                Generator::with_config(Arc::new(node_catalog()), config).expect("config");
            let node = generator.generate_named("Node").expect("node");
            // Nodes exist at depths 0..max_depth, so the chain has max_depth - 1 links.
            assert_eq!(chain_length(&node), max_depth - 1);
        }
    }

    #[test]
    fn test_depth_cutoff_returns_null() {
        let mut generator = seeded(node_catalog(), 3);
        let node = Arc::clone(generator.catalog().get("Node").expect("node"));
        let v = generator.generate_at(&node, 3).expect("cutoff");
        assert!(v.is_null());
    }

    #[test]
    fn test_containers_around_depth_bound() {
        let mut generator = seeded(node_catalog(), 4);
        let nodes = TypeDescriptor::list(Arc::new(TypeDescriptor::reference("Node")));
        for _ in 0..20 {
            let at_bound = generator.generate_at(&nodes, 3).expect("at bound");
            let items = at_bound.items().expect("sized list");
            assert!(items.iter().all(Value::is_null));

            let nested = generator.generate_at(&nodes, 4).expect("past bound");
            assert_eq!(nested.items().map(<[Value]>::len), Some(0));
        }
    }

    #[test]
    fn test_not_eligible() {
        let mut catalog = TypeCatalog::new();
        catalog.register(
            CompositeBuilder::new("Secret")
                .default_constructor()
                .build(),
        );
        let mut generator = seeded(catalog, 1);
        assert!(matches!(
            generator.generate_named("Secret"),
            Err(GenerateError::TypeNotEligible { type_name }) if type_name == "Secret"
        ));
    }

    #[test]
    fn test_unknown_name() {
        let mut generator = seeded(TypeCatalog::new(), 1);
        assert!(matches!(
            generator.generate_named("Ghost"),
            Err(GenerateError::UnknownType { .. })
        ));
    }

    #[test]
    fn test_empty_enum_propagates() {
        let mut catalog = TypeCatalog::new();
        catalog.register(EnumBuilder::new("Void").build());
        let mut generator = seeded(catalog, 1);
        assert!(matches!(
            generator.generate_named("Void"),
            Err(GenerateError::EmptyEnumeration { .. })
        ));
    }

    #[test]
    fn test_no_eligible_implementation() {
        let mut catalog = TypeCatalog::new();
        catalog.register(CompositeBuilder::interface("Plugin").build());
        let mut generator = seeded(catalog, 1);
        assert!(matches!(
            generator.generate_named("Plugin"),
            Err(GenerateError::NoEligibleImplementation { type_name }) if type_name == "Plugin"
        ));
    }

    #[test]
    fn test_seed_reproducible() {
        let mut a = seeded(node_catalog(), 99);
        let mut b = seeded(node_catalog(), 99);
        assert_eq!(
            a.generate_named("Node").expect("a"),
            b.generate_named("Node").expect("b")
        );

        a.reseed(5);
        let first = a.generate_named("Node").expect("first");
        a.reseed(5);
        assert_eq!(first, a.generate_named("Node").expect("again"));
    }

    #[test]
    fn test_fork_shares_catalog() {
        let generator = seeded(node_catalog(), 1);
        let fork = generator.fork(2);
        assert!(Arc::ptr_eq(generator.catalog(), fork.catalog()));
        assert_eq!(generator.config(), fork.config());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GeneratorConfig::default().max_depth(0);
        assert!(Generator::with_config(Arc::new(TypeCatalog::new()), config).is_err());
    }
}
