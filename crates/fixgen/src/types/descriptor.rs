// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type descriptors for runtime type information.

use crate::types::{CompositeValue, Value};
use std::fmt;
use std::sync::Arc;

/// Name given to the universal erased type.
pub const UNKNOWN_TYPE_NAME: &str = "unknown";

/// Primitive (non-nullable) scalar kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Bool,
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    Char,
}

impl PrimitiveKind {
    /// Canonical type name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Char => "char",
        }
    }

    /// Zero value used as the default of a primitive field.
    pub fn zero(&self) -> Value {
        match self {
            Self::Bool => Value::Bool(false),
            Self::U8 => Value::U8(0),
            Self::U16 => Value::U16(0),
            Self::U32 => Value::U32(0),
            Self::U64 => Value::U64(0),
            Self::I8 => Value::I8(0),
            Self::I16 => Value::I16(0),
            Self::I32 => Value::I32(0),
            Self::I64 => Value::I64(0),
            Self::F32 => Value::F32(0.0),
            Self::F64 => Value::F64(0.0),
            Self::Char => Value::Char('\0'),
        }
    }
}

/// Nullable "common" value kinds: strings and boxed scalars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtomicKind {
    String,
    Nullable(PrimitiveKind),
}

/// Shape of a container value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// Ordered sequence.
    Sequence,
    /// Unique, unordered set.
    Set,
    /// FIFO queue.
    Queue,
    /// Key-value mapping.
    Map,
}

impl ContainerKind {
    pub fn is_map(&self) -> bool {
        matches!(self, Self::Map)
    }
}

/// Declared container type of a collection or map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerType {
    /// Abstract container interface (`List`, `Set`, `Queue`, `Map`, ...).
    /// A canonical representation is picked when an instance is needed.
    Interface(String),
    /// Concrete container type.
    Concrete {
        name: String,
        kind: ContainerKind,
        /// Has a parameterless constructor.
        default_constructible: bool,
    },
}

impl ContainerType {
    /// Create an interface container type.
    pub fn interface(name: impl Into<String>) -> Self {
        Self::Interface(name.into())
    }

    /// Create a default-constructible concrete container type.
    pub fn concrete(name: impl Into<String>, kind: ContainerKind) -> Self {
        Self::Concrete {
            name: name.into(),
            kind,
            default_constructible: true,
        }
    }

    /// Mark a concrete container as lacking a parameterless constructor.
    pub fn without_default_constructor(self) -> Self {
        match self {
            Self::Concrete { name, kind, .. } => Self::Concrete {
                name,
                kind,
                default_constructible: false,
            },
            other => other,
        }
    }

    /// Declared container name.
    pub fn name(&self) -> &str {
        match self {
            Self::Interface(name) | Self::Concrete { name, .. } => name,
        }
    }
}

impl fmt::Display for ContainerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interface(name) => write!(f, "interface {}", name),
            Self::Concrete { name, .. } => write!(f, "{}", name),
        }
    }
}

/// Type kind enumeration.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeKind {
    /// Non-nullable scalar.
    Primitive(PrimitiveKind),
    /// Nullable string or boxed scalar.
    Atomic(AtomicKind),
    /// Enumeration.
    Enum(EnumDescriptor),
    /// Array (length chosen at generation time).
    Array(ArrayDescriptor),
    /// Sequence, set or queue.
    Collection(CollectionDescriptor),
    /// Key-value mapping.
    Map(MapDescriptor),
    /// Object type with constructors and fields, possibly abstract.
    Composite(CompositeDescriptor),
    /// By-name reference resolved through a [`TypeCatalog`](crate::TypeCatalog).
    Reference(String),
    /// Universal erased type.
    Unknown,
}

/// A complete type descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDescriptor {
    /// Type name.
    pub name: String,
    /// Type kind.
    pub kind: TypeKind,
}

impl TypeDescriptor {
    /// Create a new type descriptor.
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Create a primitive type descriptor.
    pub fn primitive(kind: PrimitiveKind) -> Self {
        Self::new(kind.name(), TypeKind::Primitive(kind))
    }

    /// Create a nullable (boxed) scalar descriptor.
    pub fn nullable(kind: PrimitiveKind) -> Self {
        Self::new(
            format!("Option<{}>", kind.name()),
            TypeKind::Atomic(AtomicKind::Nullable(kind)),
        )
    }

    /// Create a string descriptor.
    pub fn string() -> Self {
        Self::new("String", TypeKind::Atomic(AtomicKind::String))
    }

    /// The universal erased type.
    pub fn unknown() -> Self {
        Self::new(UNKNOWN_TYPE_NAME, TypeKind::Unknown)
    }

    /// Reference a type registered under `name`.
    pub fn reference(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::new(name.clone(), TypeKind::Reference(name))
    }

    /// Create an array descriptor.
    pub fn array(element_type: Arc<TypeDescriptor>) -> Self {
        let name = format!("[{}]", element_type.name);
        Self::new(name, TypeKind::Array(ArrayDescriptor::new(element_type)))
    }

    /// Create a collection descriptor. `None` leaves the element type erased.
    pub fn collection(container: ContainerType, element_type: Option<Arc<TypeDescriptor>>) -> Self {
        let name = match &element_type {
            Some(elem) => format!("{}<{}>", container.name(), elem.name),
            None => container.name().to_string(),
        };
        Self::new(
            name,
            TypeKind::Collection(CollectionDescriptor {
                container,
                element_type,
            }),
        )
    }

    /// `List<element>` interface.
    pub fn list(element_type: Arc<TypeDescriptor>) -> Self {
        Self::collection(ContainerType::interface("List"), Some(element_type))
    }

    /// `Set<element>` interface.
    pub fn set(element_type: Arc<TypeDescriptor>) -> Self {
        Self::collection(ContainerType::interface("Set"), Some(element_type))
    }

    /// `Queue<element>` interface.
    pub fn queue(element_type: Arc<TypeDescriptor>) -> Self {
        Self::collection(ContainerType::interface("Queue"), Some(element_type))
    }

    /// Create a map descriptor. `None` leaves key or value erased.
    pub fn map_of(
        container: ContainerType,
        key_type: Option<Arc<TypeDescriptor>>,
        value_type: Option<Arc<TypeDescriptor>>,
    ) -> Self {
        let name = match (&key_type, &value_type) {
            (Some(k), Some(v)) => format!("{}<{}, {}>", container.name(), k.name, v.name),
            _ => container.name().to_string(),
        };
        Self::new(
            name,
            TypeKind::Map(MapDescriptor {
                container,
                key_type,
                value_type,
            }),
        )
    }

    /// `Map<key, value>` interface.
    pub fn map(key_type: Arc<TypeDescriptor>, value_type: Arc<TypeDescriptor>) -> Self {
        Self::map_of(
            ContainerType::interface("Map"),
            Some(key_type),
            Some(value_type),
        )
    }

    /// Check if this is a primitive type.
    pub fn is_primitive(&self) -> bool {
        matches!(self.kind, TypeKind::Primitive(_))
    }

    /// Check if this is a by-name reference.
    pub fn is_reference(&self) -> bool {
        matches!(self.kind, TypeKind::Reference(_))
    }

    /// Check if this is the erased type.
    pub fn is_unknown(&self) -> bool {
        matches!(self.kind, TypeKind::Unknown)
    }

    /// Get composite details.
    pub fn composite(&self) -> Option<&CompositeDescriptor> {
        match &self.kind {
            TypeKind::Composite(c) => Some(c),
            _ => None,
        }
    }

    /// Check if this is an abstract composite (interface or abstract class).
    pub fn is_abstract(&self) -> bool {
        self.composite().is_some_and(|c| c.is_abstract)
    }

    /// Declared fields if this is a composite (ancestors excluded).
    pub fn fields(&self) -> Option<&[FieldDescriptor]> {
        self.composite().map(|c| c.fields.as_slice())
    }

    /// Get declared field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields()?.iter().find(|f| f.name == name)
    }
}

/// How a field may be written after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FieldAccess {
    /// Writable instance field; populated after construction.
    #[default]
    Mutable,
    /// Instance field only assignable through a constructor.
    ReadOnly,
    /// Type-level constant; not part of an instance.
    Constant,
}

/// Field descriptor for composite members.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Field name.
    pub name: String,
    /// Field type.
    pub type_desc: Arc<TypeDescriptor>,
    /// Write access.
    pub access: FieldAccess,
}

impl FieldDescriptor {
    /// Create a new mutable field descriptor.
    pub fn new(name: impl Into<String>, type_desc: Arc<TypeDescriptor>) -> Self {
        Self {
            name: name.into(),
            type_desc,
            access: FieldAccess::Mutable,
        }
    }

    /// Set access.
    pub fn with_access(mut self, access: FieldAccess) -> Self {
        self.access = access;
        self
    }

    /// Populated after construction.
    pub fn is_mutable(&self) -> bool {
        self.access == FieldAccess::Mutable
    }

    /// Stored in instances.
    pub fn is_instance_field(&self) -> bool {
        self.access != FieldAccess::Constant
    }
}

/// Constructor parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDescriptor {
    pub name: String,
    pub type_desc: Arc<TypeDescriptor>,
}

impl ParameterDescriptor {
    pub fn new(name: impl Into<String>, type_desc: Arc<TypeDescriptor>) -> Self {
        Self {
            name: name.into(),
            type_desc,
        }
    }
}

/// Constructor body. Receives the synthesized arguments and the instance
/// with every field at its default; an `Err` aborts instantiation.
pub type Initializer =
    Arc<dyn Fn(&[Value], &mut CompositeValue) -> Result<(), String> + Send + Sync>;

/// Constructor descriptor.
///
/// Without an initializer each argument is stored in the field that shares
/// the parameter's name.
#[derive(Clone)]
pub struct ConstructorDescriptor {
    pub params: Vec<ParameterDescriptor>,
    pub initializer: Option<Initializer>,
}

impl ConstructorDescriptor {
    /// Parameterless constructor.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Constructor assigning parameters to same-named fields.
    pub fn new(params: Vec<ParameterDescriptor>) -> Self {
        Self {
            params,
            initializer: None,
        }
    }

    /// Constructor with a custom body.
    pub fn with_initializer<F>(params: Vec<ParameterDescriptor>, initializer: F) -> Self
    where
        F: Fn(&[Value], &mut CompositeValue) -> Result<(), String> + Send + Sync + 'static,
    {
        Self {
            params,
            initializer: Some(Arc::new(initializer)),
        }
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl fmt::Debug for ConstructorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstructorDescriptor")
            .field("params", &self.params)
            .field("initializer", &self.initializer.is_some())
            .finish()
    }
}

impl PartialEq for ConstructorDescriptor {
    fn eq(&self, other: &Self) -> bool {
        let same_body = match (&self.initializer, &other.initializer) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        };
        same_body && self.params == other.params
    }
}

/// Composite (object) type descriptor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompositeDescriptor {
    /// Interface or abstract class; never instantiated directly.
    pub is_abstract: bool,
    /// Marked as eligible for synthesis.
    pub eligible: bool,
    /// Permitted implementations declared by the marker (type names).
    pub permitted: Vec<String>,
    /// Ancestor composite whose fields are inherited.
    pub parent: Option<String>,
    /// Abstract types this type implements.
    pub supertypes: Vec<String>,
    /// Declared constructors.
    pub constructors: Vec<ConstructorDescriptor>,
    /// Declared fields (ancestors excluded).
    pub fields: Vec<FieldDescriptor>,
}

/// Array type descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayDescriptor {
    /// Element type.
    pub element_type: Arc<TypeDescriptor>,
}

impl ArrayDescriptor {
    pub fn new(element_type: Arc<TypeDescriptor>) -> Self {
        Self { element_type }
    }
}

/// Collection type descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionDescriptor {
    pub container: ContainerType,
    /// Element type (`None` = erased).
    pub element_type: Option<Arc<TypeDescriptor>>,
}

/// Map type descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct MapDescriptor {
    pub container: ContainerType,
    /// Key type (`None` = erased).
    pub key_type: Option<Arc<TypeDescriptor>>,
    /// Value type (`None` = erased).
    pub value_type: Option<Arc<TypeDescriptor>>,
}

/// Enumeration type descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumDescriptor {
    /// Declared constants.
    pub variants: Vec<EnumVariant>,
}

impl EnumDescriptor {
    /// Create enum descriptor.
    pub fn new(variants: Vec<EnumVariant>) -> Self {
        Self { variants }
    }

    /// Get variant by name.
    pub fn variant(&self, name: &str) -> Option<&EnumVariant> {
        self.variants.iter().find(|v| v.name == name)
    }

    /// Get variant by value.
    pub fn variant_by_value(&self, value: i64) -> Option<&EnumVariant> {
        self.variants.iter().find(|v| v.value == value)
    }
}

/// Enum variant.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumVariant {
    /// Variant name.
    pub name: String,
    /// Variant value.
    pub value: i64,
}

impl EnumVariant {
    /// Create enum variant.
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}
