// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Random values for atomic types.
//!
//! | Kind | Distribution |
//! |---|---|
//! | `i32`, `i8` | uniform `[-100, 100]` |
//! | `i64`, `i16` | uniform `[-1000, 1000]` |
//! | `u32`, `u8` | uniform `[0, 100]` |
//! | `u64`, `u16` | uniform `[0, 1000]` |
//! | `f64`, `f32` | uniform `[-100, 100)` |
//! | `bool` | fair coin |
//! | `char` | uniform `'a'..='z'` |
//! | `String` | 1 to 10 chars, each uniform `'a'..='z'` |
//! | enum | uniform over declared constants |
//!
//! Boxed scalars use the distribution of the scalar they wrap.

use crate::error::{GenerateError, Result};
use crate::types::{AtomicKind, EnumDescriptor, PrimitiveKind, TypeDescriptor, TypeKind, Value};
use fastrand::Rng;

const MAX_STRING_LEN: usize = 10;

/// Random value for `ty` if it is atomic, `None` otherwise.
///
/// An enumeration without constants fails with `EmptyEnumeration`.
pub fn atomic_value(rng: &mut Rng, ty: &TypeDescriptor) -> Result<Option<Value>> {
    match &ty.kind {
        TypeKind::Primitive(kind) => Ok(Some(primitive_value(rng, *kind))),
        TypeKind::Atomic(AtomicKind::Nullable(kind)) => Ok(Some(primitive_value(rng, *kind))),
        TypeKind::Atomic(AtomicKind::String) => Ok(Some(Value::String(random_string(rng)))),
        TypeKind::Enum(desc) => enum_value(rng, &ty.name, desc).map(Some),
        _ => Ok(None),
    }
}

/// Random scalar of the given kind.
pub fn primitive_value(rng: &mut Rng, kind: PrimitiveKind) -> Value {
    match kind {
        PrimitiveKind::Bool => Value::Bool(rng.bool()),
        PrimitiveKind::I8 => Value::I8(rng.i8(-100..=100)),
        PrimitiveKind::I16 => Value::I16(rng.i16(-1000..=1000)),
        PrimitiveKind::I32 => Value::I32(rng.i32(-100..=100)),
        PrimitiveKind::I64 => Value::I64(rng.i64(-1000..=1000)),
        PrimitiveKind::U8 => Value::U8(rng.u8(0..=100)),
        PrimitiveKind::U16 => Value::U16(rng.u16(0..=1000)),
        PrimitiveKind::U32 => Value::U32(rng.u32(0..=100)),
        PrimitiveKind::U64 => Value::U64(rng.u64(0..=1000)),
        PrimitiveKind::F32 => Value::F32(rng.f32() * 200.0 - 100.0),
        PrimitiveKind::F64 => Value::F64(rng.f64() * 200.0 - 100.0),
        PrimitiveKind::Char => Value::Char(rng.lowercase()),
    }
}

/// Lowercase ASCII string of 1 to 10 characters.
pub fn random_string(rng: &mut Rng) -> String {
    let len = rng.usize(1..=MAX_STRING_LEN);
    (0..len).map(|_| rng.lowercase()).collect()
}

fn enum_value(rng: &mut Rng, type_name: &str, desc: &EnumDescriptor) -> Result<Value> {
    if desc.variants.is_empty() {
        return Err(GenerateError::EmptyEnumeration {
            type_name: type_name.to_string(),
        });
    }
    let variant = &desc.variants[rng.usize(..desc.variants.len())];
    Ok(Value::Enum(variant.value, variant.name.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CompositeBuilder, EnumBuilder};
    use std::collections::BTreeSet;
    use std::sync::Arc;

    #[test]
    fn test_integer_ranges() {
        let mut rng = Rng::with_seed(7);
        for _ in 0..2000 {
            let v = primitive_value(&mut rng, PrimitiveKind::I32)
                .as_i32()
                .expect("i32");
            assert!((-100..=100).contains(&v));

            let v = primitive_value(&mut rng, PrimitiveKind::I64)
                .as_i64()
                .expect("i64");
            assert!((-1000..=1000).contains(&v));

            let v = primitive_value(&mut rng, PrimitiveKind::U32)
                .as_u32()
                .expect("u32");
            assert!(v <= 100);
        }
    }

    #[test]
    fn test_float_range() {
        let mut rng = Rng::with_seed(11);
        for _ in 0..2000 {
            let v = primitive_value(&mut rng, PrimitiveKind::F64)
                .as_f64()
                .expect("f64");
            assert!((-100.0..100.0).contains(&v));
        }
    }

    #[test]
    fn test_string_shape() {
        let mut rng = Rng::with_seed(3);
        let mut lengths = BTreeSet::new();
        for _ in 0..2000 {
            let s = random_string(&mut rng);
            assert!((1..=MAX_STRING_LEN).contains(&s.len()));
            assert!(s.chars().all(|c| c.is_ascii_lowercase()));
            lengths.insert(s.len());
        }
        assert_eq!(lengths.len(), MAX_STRING_LEN);
    }

    #[test]
    fn test_char_is_lowercase() {
        let mut rng = Rng::with_seed(5);
        for _ in 0..500 {
            let c = primitive_value(&mut rng, PrimitiveKind::Char)
                .as_char()
                .expect("char");
            assert!(c.is_ascii_lowercase());
        }
    }

    #[test]
    fn test_nullable_never_absent() {
        let mut rng = Rng::with_seed(1);
        let ty = TypeDescriptor::nullable(PrimitiveKind::I32);
        let v = atomic_value(&mut rng, &ty).expect("atomic").expect("value");
        assert!(v.as_i32().is_some());
    }

    #[test]
    fn test_enum_covers_all_constants() {
        let mut rng = Rng::with_seed(9);
        let color = EnumBuilder::new("Color")
            .variant("RED")
            .variant("GREEN")
            .variant("BLUE")
            .build();

        let mut seen = BTreeSet::new();
        for _ in 0..200 {
            let v = atomic_value(&mut rng, &color)
                .expect("enum")
                .expect("value");
            seen.insert(v.enum_variant().expect("variant").to_string());
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_empty_enum_fails() {
        let mut rng = Rng::with_seed(9);
        let empty = EnumBuilder::new("Nothing").build();
        assert!(matches!(
            atomic_value(&mut rng, &empty),
            Err(GenerateError::EmptyEnumeration { type_name }) if type_name == "Nothing"
        ));
    }

    #[test]
    fn test_non_atomic_is_absent() {
        let mut rng = Rng::with_seed(9);
        let composite = CompositeBuilder::new("Point").build();
        assert_eq!(atomic_value(&mut rng, &composite).expect("ok"), None);

        let list = TypeDescriptor::list(Arc::new(TypeDescriptor::string()));
        assert_eq!(atomic_value(&mut rng, &list).expect("ok"), None);
        assert_eq!(
            atomic_value(&mut rng, &TypeDescriptor::unknown()).expect("ok"),
            None
        );
    }
}
