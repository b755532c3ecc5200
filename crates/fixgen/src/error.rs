// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error types.

use thiserror::Error;

/// Failures of a `generate` call.
///
/// Depth exhaustion is not an error: it yields [`Value::Null`](crate::Value::Null).
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("enumeration declares no constants: {type_name}")]
    EmptyEnumeration { type_name: String },

    #[error("no eligible implementations found for type: {type_name}")]
    NoEligibleImplementation { type_name: String },

    #[error("type is not marked as generatable: {type_name}")]
    TypeNotEligible { type_name: String },

    #[error("type has no accessible constructors: {type_name}")]
    NoAccessibleConstructor { type_name: String },

    #[error("unable to instantiate type: {type_name} ({attempted} constructors tried)")]
    InstantiationExhausted { type_name: String, attempted: usize },

    #[error("unsupported container kind: {container}")]
    UnsupportedContainerKind { container: String },

    #[error("unknown type reference: {name}")]
    UnknownType { name: String },

    #[error("constructor of {type_name} failed: {reason}")]
    ConstructorFailed { type_name: String, reason: String },

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

impl GenerateError {
    /// Whether constructor trial may move on to the next constructor.
    ///
    /// A constructor body that fails is a structural problem and is never
    /// retried.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::ConstructorFailed { .. } | Self::Conversion(_))
    }
}

/// Failures converting a generated [`Value`](crate::Value) into a Rust type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("expected {expected}, found null")]
    UnexpectedNull { expected: String },

    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: String },

    #[error("missing field: {0}")]
    MissingField(String),

    #[error("{type_name} has no variant for {variant}")]
    UnknownVariant { type_name: String, variant: String },

    #[error("field {field}: {source}")]
    Field {
        field: String,
        #[source]
        source: Box<ConversionError>,
    },
}

impl ConversionError {
    /// Attach the name of the field being converted.
    pub fn in_field(self, field: impl Into<String>) -> Self {
        Self::Field {
            field: field.into(),
            source: Box::new(self),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "config-loaders")]
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid value {value:?} for {var}")]
    InvalidEnv { var: String, value: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result alias for generation.
pub type Result<T, E = GenerateError> = std::result::Result<T, E>;
