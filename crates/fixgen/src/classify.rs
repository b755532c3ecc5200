// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type classification and container helpers.

use crate::error::{GenerateError, Result};
use crate::types::{
    CollectionValue, ContainerKind, ContainerType, MapValue, TypeDescriptor, TypeKind, Value,
};
use std::sync::Arc;

/// Generation category of a type descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeClass {
    Primitive,
    /// String or boxed scalar.
    Atomic,
    Enum,
    Array,
    Collection,
    Map,
    /// Object type; abstract covers interfaces and abstract classes.
    Composite { is_abstract: bool },
}

impl TypeClass {
    /// Handled entirely by the value source.
    pub fn is_atomic(&self) -> bool {
        matches!(self, Self::Primitive | Self::Atomic | Self::Enum)
    }

    /// Array, collection or map.
    pub fn is_container(&self) -> bool {
        matches!(self, Self::Array | Self::Collection | Self::Map)
    }
}

/// Classify a descriptor.
///
/// Unresolved references and the erased type classify as concrete
/// composites; resolve references through the catalog first.
pub fn classify(ty: &TypeDescriptor) -> TypeClass {
    match &ty.kind {
        TypeKind::Primitive(_) => TypeClass::Primitive,
        TypeKind::Atomic(_) => TypeClass::Atomic,
        TypeKind::Enum(_) => TypeClass::Enum,
        TypeKind::Array(_) => TypeClass::Array,
        TypeKind::Collection(_) => TypeClass::Collection,
        TypeKind::Map(_) => TypeClass::Map,
        TypeKind::Composite(c) => TypeClass::Composite {
            is_abstract: c.is_abstract,
        },
        TypeKind::Reference(_) | TypeKind::Unknown => TypeClass::Composite { is_abstract: false },
    }
}

/// Element type of an array or collection; erased when not declared.
pub fn element_type(ty: &TypeDescriptor) -> Arc<TypeDescriptor> {
    match &ty.kind {
        TypeKind::Array(a) => Arc::clone(&a.element_type),
        TypeKind::Collection(c) => c
            .element_type
            .clone()
            .unwrap_or_else(|| Arc::new(TypeDescriptor::unknown())),
        _ => Arc::new(TypeDescriptor::unknown()),
    }
}

/// Key and value types of a map; each erased when not declared.
pub fn key_value_types(ty: &TypeDescriptor) -> (Arc<TypeDescriptor>, Arc<TypeDescriptor>) {
    let erased = || Arc::new(TypeDescriptor::unknown());
    match &ty.kind {
        TypeKind::Map(m) => (
            m.key_type.clone().unwrap_or_else(erased),
            m.value_type.clone().unwrap_or_else(erased),
        ),
        _ => (erased(), erased()),
    }
}

/// Map keys are restricted to atomic values and enumerations.
pub fn is_permitted_map_key(ty: &TypeDescriptor) -> bool {
    classify(ty).is_atomic()
}

/// Canonical representation of a container interface.
///
/// Returns `None` for interface names with no known representation.
pub fn canonical_container(interface: &str) -> Option<(ContainerKind, &'static str)> {
    match interface {
        "List" | "Collection" | "Iterable" => Some((ContainerKind::Sequence, "Vec")),
        "Set" => Some((ContainerKind::Set, "HashSet")),
        "Queue" | "Deque" => Some((ContainerKind::Queue, "VecDeque")),
        "Map" => Some((ContainerKind::Map, "HashMap")),
        _ => None,
    }
}

/// Concrete kind and representation name chosen for a container type.
pub fn container_representation(container: &ContainerType) -> Result<(ContainerKind, String)> {
    match container {
        ContainerType::Interface(name) => canonical_container(name)
            .map(|(kind, repr)| (kind, repr.to_string()))
            .ok_or_else(|| unsupported(container)),
        ContainerType::Concrete {
            name,
            kind,
            default_constructible: true,
        } => Ok((*kind, name.clone())),
        ContainerType::Concrete { .. } => Err(unsupported(container)),
    }
}

/// Zero-length sequence, set or queue.
pub fn empty_collection(container: &ContainerType) -> Result<CollectionValue> {
    match container_representation(container)? {
        (ContainerKind::Map, _) => Err(unsupported(container)),
        (kind, repr) => Ok(CollectionValue::new(kind, repr)),
    }
}

/// Zero-length map.
pub fn empty_map(container: &ContainerType) -> Result<MapValue> {
    match container_representation(container)? {
        (ContainerKind::Map, repr) => Ok(MapValue::new(repr)),
        _ => Err(unsupported(container)),
    }
}

/// Zero-length instance of an array, collection or map type.
pub fn empty_container_of(ty: &TypeDescriptor) -> Result<Value> {
    match &ty.kind {
        TypeKind::Array(_) => Ok(Value::Array(Vec::new())),
        TypeKind::Collection(c) => empty_collection(&c.container).map(Value::Collection),
        TypeKind::Map(m) => empty_map(&m.container).map(Value::Map),
        _ => Err(GenerateError::UnsupportedContainerKind {
            container: ty.name.clone(),
        }),
    }
}

fn unsupported(container: &ContainerType) -> GenerateError {
    GenerateError::UnsupportedContainerKind {
        container: container.to_string(),
    }
}
