// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Runtime type model.
//!
//! # Features
//!
//! - **TypeDescriptor**: Runtime type description (scalars, enums, containers, composites)
//! - **Value**: Owned tree holding a generated instance
//! - **Builder API**: Fluent interface for building composite and enum descriptors
//! - **TypeCatalog**: Name-indexed registry resolving references and eligibility
//!
//! # Example
//!
//! ```rust
//! use fixgen::types::{CompositeBuilder, PrimitiveKind, TypeCatalog, TypeDescriptor};
//! use std::sync::Arc;
//!
//! let mut catalog = TypeCatalog::new();
//! catalog.register(
//!     CompositeBuilder::new("TreeNode")
//!         .generatable()
//!         .default_constructor()
//!         .primitive_field("value", PrimitiveKind::I32)
//!         .reference_field("left", "TreeNode")
//!         .reference_field("right", "TreeNode")
//!         .build(),
//! );
//!
//! let tree_ref = TypeDescriptor::reference("TreeNode");
//! let node = catalog.resolve(&tree_ref).unwrap();
//! assert_eq!(node.fields().map(|f| f.len()), Some(3));
//! ```

mod builder;
mod catalog;
mod descriptor;
mod value;

pub use builder::{CompositeBuilder, EnumBuilder};
pub use catalog::TypeCatalog;
pub use descriptor::{
    ArrayDescriptor, AtomicKind, CollectionDescriptor, CompositeDescriptor, ConstructorDescriptor,
    ContainerKind, ContainerType, EnumDescriptor, EnumVariant, FieldAccess, FieldDescriptor,
    Initializer, MapDescriptor, ParameterDescriptor, PrimitiveKind, TypeDescriptor, TypeKind,
    UNKNOWN_TYPE_NAME,
};
pub use value::{CollectionValue, CompositeValue, MapValue, Value};
