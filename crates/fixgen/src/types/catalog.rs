// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Name-indexed registry of type descriptors.
//!
//! The catalog plays three roles for the generator:
//!
//! - resolves [`TypeKind::Reference`] nodes, which is how self-referential
//!   and mutually recursive type graphs are expressed;
//! - answers eligibility questions (marker lookup, declared implementations);
//! - owns the implementation registry and its lookup cache.
//!
//! Registration needs `&mut self`. Once a catalog is shared behind an `Arc`
//! it is read-only and the cached implementation lists stay valid.

use crate::error::{GenerateError, Result};
use crate::registry::{ImplementationFinder, ImplementationRegistry, SubtypeScan};
use crate::typed::Describe;
use crate::types::{FieldDescriptor, TypeDescriptor, TypeKind};
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::sync::Arc;

/// Registry of named type descriptors.
#[derive(Debug)]
pub struct TypeCatalog {
    types: BTreeMap<String, Arc<TypeDescriptor>>,
    reserved: BTreeSet<String>,
    implementations: ImplementationRegistry,
}

impl TypeCatalog {
    /// Create an empty catalog using subtype scanning for discovery.
    #[must_use]
    pub fn new() -> Self {
        Self::with_finder(SubtypeScan)
    }

    /// Create an empty catalog with a custom discovery mechanism.
    pub fn with_finder(finder: impl ImplementationFinder + 'static) -> Self {
        Self {
            types: BTreeMap::new(),
            reserved: BTreeSet::new(),
            implementations: ImplementationRegistry::new(Box::new(finder)),
        }
    }

    /// Register a descriptor under its name, replacing any previous one.
    pub fn register(&mut self, descriptor: TypeDescriptor) -> Arc<TypeDescriptor> {
        let descriptor = Arc::new(descriptor);
        log::trace!("[catalog] register {}", descriptor.name);
        self.reserved.remove(&descriptor.name);
        self.types
            .insert(descriptor.name.clone(), Arc::clone(&descriptor));
        self.implementations.invalidate();
        descriptor
    }

    /// Describe `T` into this catalog and return its descriptor.
    pub fn register_type<T: Describe>(&mut self) -> Arc<TypeDescriptor> {
        T::describe(self)
    }

    /// Claim `name` for a registration in progress.
    ///
    /// Returns `false` when the name is already registered or claimed, in
    /// which case the caller should only emit a reference to it.
    pub fn reserve(&mut self, name: &str) -> bool {
        if self.types.contains_key(name) {
            return false;
        }
        self.reserved.insert(name.to_string())
    }

    /// Get descriptor by name.
    pub fn get(&self, name: &str) -> Option<&Arc<TypeDescriptor>> {
        self.types.get(name)
    }

    /// Get descriptor by name, failing with `UnknownType`.
    pub fn lookup(&self, name: &str) -> Result<&Arc<TypeDescriptor>> {
        self.types.get(name).ok_or_else(|| GenerateError::UnknownType {
            name: name.to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterate over registered descriptors in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<TypeDescriptor>> {
        self.types.values()
    }

    /// Iterate over registered composite descriptors in name order.
    pub fn composites(&self) -> impl Iterator<Item = &Arc<TypeDescriptor>> {
        self.types.values().filter(|d| d.composite().is_some())
    }

    /// Follow references until a non-reference descriptor is reached.
    pub fn resolve<'a>(&'a self, descriptor: &'a TypeDescriptor) -> Result<&'a TypeDescriptor> {
        let mut current = descriptor;
        // A chain longer than the catalog means the references loop.
        for _ in 0..=self.types.len() {
            match &current.kind {
                TypeKind::Reference(name) => current = self.lookup(name)?.as_ref(),
                _ => return Ok(current),
            }
        }
        Err(GenerateError::UnknownType {
            name: descriptor.name.clone(),
        })
    }

    /// Eligibility marker lookup.
    pub fn is_eligible(&self, descriptor: &TypeDescriptor) -> bool {
        match self.resolve(descriptor) {
            Ok(resolved) => resolved.composite().is_some_and(|c| c.eligible),
            Err(_) => false,
        }
    }

    /// Implementations enumerated by the marker on an abstract type.
    ///
    /// Names that are not registered are skipped.
    pub fn declared_implementations(
        &self,
        descriptor: &TypeDescriptor,
    ) -> Vec<Arc<TypeDescriptor>> {
        let Some(composite) = descriptor.composite() else {
            return Vec::new();
        };
        composite
            .permitted
            .iter()
            .filter_map(|name| {
                let found = self.types.get(name).cloned();
                if found.is_none() {
                    log::debug!(
                        "[catalog] {} permits unregistered type {}",
                        descriptor.name,
                        name
                    );
                }
                found
            })
            .collect()
    }

    /// Whether `candidate` is `target_name` or transitively extends/implements it.
    pub fn is_subtype_of(&self, candidate: &TypeDescriptor, target_name: &str) -> bool {
        let mut visited = BTreeSet::new();
        let mut queue = VecDeque::from([candidate.name.clone()]);
        while let Some(name) = queue.pop_front() {
            if name == target_name {
                return true;
            }
            if !visited.insert(name.clone()) {
                continue;
            }
            let descriptor = if name == candidate.name {
                Some(candidate)
            } else {
                self.types.get(&name).map(|d| d.as_ref())
            };
            if let Some(composite) = descriptor.and_then(TypeDescriptor::composite) {
                queue.extend(composite.parent.iter().cloned());
                queue.extend(composite.supertypes.iter().cloned());
            }
        }
        false
    }

    /// Instance fields of a composite, own fields first, then each ancestor's.
    pub fn all_fields(&self, descriptor: &TypeDescriptor) -> Result<Vec<FieldDescriptor>> {
        let mut fields = Vec::new();
        let mut visited = BTreeSet::new();
        let mut current = Some(descriptor);
        while let Some(ty) = current {
            if !visited.insert(ty.name.clone()) {
                break;
            }
            let Some(composite) = ty.composite() else {
                break;
            };
            fields.extend(
                composite
                    .fields
                    .iter()
                    .filter(|f| f.is_instance_field())
                    .cloned(),
            );
            current = match &composite.parent {
                Some(parent) => Some(self.lookup(parent)?.as_ref()),
                None => None,
            };
        }
        Ok(fields)
    }

    /// Concrete candidates for an abstract type, cached for the catalog's lifetime.
    pub fn implementations_of(&self, abstract_type: &TypeDescriptor) -> Arc<[Arc<TypeDescriptor>]> {
        self.implementations.lookup(self, abstract_type)
    }

    /// Number of abstract types with a cached implementation list.
    pub fn cached_implementation_count(&self) -> usize {
        self.implementations.cached_len()
    }
}

impl Default for TypeCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CompositeBuilder, PrimitiveKind};

    fn shapes() -> TypeCatalog {
        let mut catalog = TypeCatalog::new();
        catalog.register(CompositeBuilder::interface("Shape").build());
        catalog.register(
            CompositeBuilder::abstract_type("Polygon")
                .implements("Shape")
                .primitive_field("sides", PrimitiveKind::U32)
                .build(),
        );
        catalog.register(
            CompositeBuilder::new("Square")
                .generatable()
                .parent("Polygon")
                .default_constructor()
                .primitive_field("side", PrimitiveKind::F64)
                .build(),
        );
        catalog.register(
            CompositeBuilder::new("Circle")
                .generatable()
                .implements("Shape")
                .default_constructor()
                .primitive_field("radius", PrimitiveKind::F64)
                .build(),
        );
        catalog
    }

    #[test]
    fn test_resolve_reference() {
        let catalog = shapes();
        let reference = TypeDescriptor::reference("Circle");
        let resolved = catalog.resolve(&reference).expect("resolve");
        assert_eq!(resolved.name, "Circle");
        assert!(resolved.composite().is_some());

        let dangling = TypeDescriptor::reference("Hexagon");
        assert!(matches!(
            catalog.resolve(&dangling),
            Err(GenerateError::UnknownType { .. })
        ));
    }

    #[test]
    fn test_resolve_reference_loop() {
        let mut catalog = TypeCatalog::new();
        catalog.register(TypeDescriptor::new("A", TypeKind::Reference("B".into())));
        catalog.register(TypeDescriptor::new("B", TypeKind::Reference("A".into())));
        assert!(catalog.resolve(&TypeDescriptor::reference("A")).is_err());
    }

    #[test]
    fn test_subtype_transitive() {
        let catalog = shapes();
        let square = catalog.get("Square").expect("square");
        assert!(catalog.is_subtype_of(square, "Polygon"));
        assert!(catalog.is_subtype_of(square, "Shape"));

        let circle = catalog.get("Circle").expect("circle");
        assert!(!catalog.is_subtype_of(circle, "Polygon"));
    }

    #[test]
    fn test_all_fields_include_ancestors() {
        let catalog = shapes();
        let square = catalog.get("Square").expect("square");
        let names: Vec<_> = catalog
            .all_fields(square)
            .expect("fields")
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["side", "sides"]);
    }

    #[test]
    fn test_eligibility() {
        let catalog = shapes();
        assert!(catalog.is_eligible(&TypeDescriptor::reference("Circle")));
        assert!(!catalog.is_eligible(&TypeDescriptor::reference("Polygon")));
        assert!(!catalog.is_eligible(&TypeDescriptor::unknown()));
    }

    #[test]
    fn test_reserve() {
        let mut catalog = shapes();
        assert!(!catalog.reserve("Circle"));
        assert!(catalog.reserve("Node"));
        assert!(!catalog.reserve("Node"));
        catalog.register(CompositeBuilder::new("Node").build());
        assert!(!catalog.reserve("Node"));
    }

    #[test]
    fn test_declared_implementations_skip_unknown() {
        let mut catalog = shapes();
        let shape = catalog.register(
            CompositeBuilder::interface("Figure")
                .permit("Circle")
                .permit("Triangle")
                .build(),
        );
        let declared = catalog.declared_implementations(&shape);
        assert_eq!(declared.len(), 1);
        assert_eq!(declared[0].name, "Circle");
    }
}
