// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Fluent builder API for TypeDescriptor.

use crate::types::{
    CompositeDescriptor, CompositeValue, ConstructorDescriptor, EnumDescriptor, EnumVariant,
    FieldAccess, FieldDescriptor, ParameterDescriptor, PrimitiveKind, TypeDescriptor, TypeKind,
    Value,
};
use std::sync::Arc;

/// Builder for composite (object) types, concrete or abstract.
#[derive(Debug)]
pub struct CompositeBuilder {
    name: String,
    composite: CompositeDescriptor,
}

impl CompositeBuilder {
    /// Create a new builder for a concrete type.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            composite: CompositeDescriptor::default(),
        }
    }

    /// Create a builder for an abstract class.
    pub fn abstract_type(name: impl Into<String>) -> Self {
        let mut builder = Self::new(name);
        builder.composite.is_abstract = true;
        builder
    }

    /// Create a builder for an interface (abstract, no fields or constructors).
    pub fn interface(name: impl Into<String>) -> Self {
        Self::abstract_type(name)
    }

    /// Mark as eligible for synthesis.
    pub fn generatable(mut self) -> Self {
        self.composite.eligible = true;
        self
    }

    /// Restrict polymorphic resolution to a declared implementation.
    pub fn permit(mut self, implementation: impl Into<String>) -> Self {
        self.composite.permitted.push(implementation.into());
        self
    }

    /// Inherit fields from an ancestor composite.
    pub fn parent(mut self, parent: impl Into<String>) -> Self {
        self.composite.parent = Some(parent.into());
        self
    }

    /// Declare an abstract type this type implements.
    pub fn implements(mut self, supertype: impl Into<String>) -> Self {
        self.composite.supertypes.push(supertype.into());
        self
    }

    /// Add a field with a type descriptor.
    pub fn field(self, name: impl Into<String>, type_desc: Arc<TypeDescriptor>) -> Self {
        self.field_with_access(name, type_desc, FieldAccess::Mutable)
    }

    /// Add a primitive field.
    pub fn primitive_field(self, name: impl Into<String>, kind: PrimitiveKind) -> Self {
        self.field(name, Arc::new(TypeDescriptor::primitive(kind)))
    }

    /// Add a string field.
    pub fn string_field(self, name: impl Into<String>) -> Self {
        self.field(name, Arc::new(TypeDescriptor::string()))
    }

    /// Add a field referencing a type registered by name.
    pub fn reference_field(self, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.field(name, Arc::new(TypeDescriptor::reference(type_name)))
    }

    /// Add a field only assignable through constructors.
    pub fn readonly_field(self, name: impl Into<String>, type_desc: Arc<TypeDescriptor>) -> Self {
        self.field_with_access(name, type_desc, FieldAccess::ReadOnly)
    }

    /// Add a type-level constant.
    pub fn constant_field(self, name: impl Into<String>, type_desc: Arc<TypeDescriptor>) -> Self {
        self.field_with_access(name, type_desc, FieldAccess::Constant)
    }

    fn field_with_access(
        mut self,
        name: impl Into<String>,
        type_desc: Arc<TypeDescriptor>,
        access: FieldAccess,
    ) -> Self {
        self.composite
            .fields
            .push(FieldDescriptor::new(name, type_desc).with_access(access));
        self
    }

    /// Add a parameterless constructor.
    pub fn default_constructor(mut self) -> Self {
        self.composite
            .constructors
            .push(ConstructorDescriptor::empty());
        self
    }

    /// Add a constructor assigning each parameter to the same-named field.
    pub fn constructor<I, N>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (N, Arc<TypeDescriptor>)>,
        N: Into<String>,
    {
        let params = params
            .into_iter()
            .map(|(name, ty)| ParameterDescriptor::new(name, ty))
            .collect();
        self.composite
            .constructors
            .push(ConstructorDescriptor::new(params));
        self
    }

    /// Add a constructor with a custom body.
    pub fn constructor_with<I, N, F>(mut self, params: I, initializer: F) -> Self
    where
        I: IntoIterator<Item = (N, Arc<TypeDescriptor>)>,
        N: Into<String>,
        F: Fn(&[Value], &mut CompositeValue) -> Result<(), String> + Send + Sync + 'static,
    {
        let params = params
            .into_iter()
            .map(|(name, ty)| ParameterDescriptor::new(name, ty))
            .collect();
        self.composite
            .constructors
            .push(ConstructorDescriptor::with_initializer(params, initializer));
        self
    }

    /// Build the TypeDescriptor.
    pub fn build(self) -> TypeDescriptor {
        TypeDescriptor::new(self.name, TypeKind::Composite(self.composite))
    }
}

/// Builder for enum types.
#[derive(Debug)]
pub struct EnumBuilder {
    name: String,
    variants: Vec<EnumVariant>,
    next_value: i64,
}

impl EnumBuilder {
    /// Create a new enum builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variants: Vec::new(),
            next_value: 0,
        }
    }

    /// Add a variant with auto-incrementing value.
    pub fn variant(mut self, name: impl Into<String>) -> Self {
        self.variants.push(EnumVariant::new(name, self.next_value));
        self.next_value += 1;
        self
    }

    /// Add a variant with explicit value.
    pub fn variant_value(mut self, name: impl Into<String>, value: i64) -> Self {
        self.variants.push(EnumVariant::new(name, value));
        self.next_value = value + 1;
        self
    }

    /// Build the TypeDescriptor.
    pub fn build(self) -> TypeDescriptor {
        TypeDescriptor::new(self.name, TypeKind::Enum(EnumDescriptor::new(self.variants)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composite_builder() {
        let desc = CompositeBuilder::new("Point3D")
            .generatable()
            .default_constructor()
            .primitive_field("x", PrimitiveKind::F64)
            .primitive_field("y", PrimitiveKind::F64)
            .primitive_field("z", PrimitiveKind::F64)
            .build();

        assert_eq!(desc.name, "Point3D");
        let composite = desc.composite().expect("composite");
        assert!(composite.eligible);
        assert!(!composite.is_abstract);
        assert_eq!(composite.constructors.len(), 1);
        assert_eq!(desc.fields().map(|f| f.len()), Some(3));
    }

    #[test]
    fn test_constructor_params() {
        let desc = CompositeBuilder::new("Product")
            .constructor([
                ("name", Arc::new(TypeDescriptor::string())),
                ("price", Arc::new(TypeDescriptor::primitive(PrimitiveKind::F64))),
            ])
            .string_field("name")
            .primitive_field("price", PrimitiveKind::F64)
            .build();

        let ctor = &desc.composite().expect("composite").constructors[0];
        assert_eq!(ctor.arity(), 2);
        assert_eq!(ctor.params[1].name, "price");
        assert!(ctor.initializer.is_none());
    }

    #[test]
    fn test_field_access_builders() {
        let u32_type = Arc::new(TypeDescriptor::primitive(PrimitiveKind::U32));
        let desc = CompositeBuilder::new("Account")
            .readonly_field("id", u32_type.clone())
            .constant_field("VERSION", u32_type)
            .string_field("owner")
            .build();

        assert_eq!(desc.field("id").map(|f| f.access), Some(FieldAccess::ReadOnly));
        assert_eq!(
            desc.field("VERSION").map(|f| f.access),
            Some(FieldAccess::Constant)
        );
        assert!(desc.field("owner").is_some_and(FieldDescriptor::is_mutable));
    }

    #[test]
    fn test_abstract_builder() {
        let desc = CompositeBuilder::interface("Shape")
            .generatable()
            .permit("Circle")
            .permit("Square")
            .build();

        assert!(desc.is_abstract());
        let composite = desc.composite().expect("composite");
        assert_eq!(composite.permitted, vec!["Circle", "Square"]);
    }

    #[test]
    fn test_enum_builder() {
        let desc = EnumBuilder::new("Color")
            .variant("RED")
            .variant("GREEN")
            .variant("BLUE")
            .build();

        match &desc.kind {
            TypeKind::Enum(e) => {
                assert_eq!(e.variants.len(), 3);
                assert_eq!(e.variant("GREEN").map(|v| v.value), Some(1));
            }
            _ => panic!("Expected enum"),
        }
    }

    #[test]
    fn test_enum_explicit_values() {
        let desc = EnumBuilder::new("HttpStatus")
            .variant_value("OK", 200)
            .variant_value("NOT_FOUND", 404)
            .variant("GONE")
            .build();

        match &desc.kind {
            TypeKind::Enum(e) => {
                assert_eq!(e.variant("NOT_FOUND").map(|v| v.value), Some(404));
                assert_eq!(e.variant("GONE").map(|v| v.value), Some(405));
            }
            _ => panic!("Expected enum"),
        }
    }
}
