// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Field population and container sizing.

use super::Generator;
use crate::classify;
use crate::error::{GenerateError, Result};
use crate::source;
use crate::types::{CompositeValue, TypeCatalog, TypeDescriptor, TypeKind, Value};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Generated arrays hold one or two elements.
const ARRAY_LEN: std::ops::RangeInclusive<usize> = 1..=2;

impl Generator {
    /// Fill every mutable field of `instance` with values at `depth`.
    ///
    /// A field that cannot be generated keeps its default.
    pub(super) fn populate_fields(
        &mut self,
        catalog: &TypeCatalog,
        ty: &TypeDescriptor,
        instance: &mut CompositeValue,
        depth: usize,
    ) -> Result<()> {
        let mut seen = BTreeSet::new();
        for field in catalog.all_fields(ty)? {
            // Ancestor fields shadowed by an own field are skipped.
            if !field.is_mutable() || !seen.insert(field.name.clone()) {
                continue;
            }
            match self.element_value(&field.type_desc, depth) {
                Ok(value) => {
                    instance.set_field(field.name, value);
                }
                Err(e) => {
                    log::debug!(
                        "[generator] {}.{} left at default: {}",
                        ty.name,
                        field.name,
                        e
                    );
                }
            }
        }
        Ok(())
    }

    /// Field or element value at `depth`; erased types yield `Null`.
    pub(super) fn element_value(&mut self, ty: &TypeDescriptor, depth: usize) -> Result<Value> {
        if ty.is_unknown() {
            return Ok(Value::Null);
        }
        self.generate_at(ty, depth)
    }

    /// Array, collection or map sized by the field policy.
    ///
    /// Elements live at the same depth as the container. Past the depth
    /// bound they move one level down, so nested containers come out empty.
    pub(super) fn container_value(&mut self, ty: &TypeDescriptor, depth: usize) -> Result<Value> {
        let depth = if depth >= self.config.max_depth {
            depth + 1
        } else {
            depth
        };
        match &ty.kind {
            TypeKind::Array(array) => {
                let len = self.rng.usize(ARRAY_LEN);
                let items = (0..len)
                    .map(|_| self.element_value(&array.element_type, depth))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Value::Array(items))
            }
            TypeKind::Collection(desc) => {
                let mut collection = classify::empty_collection(&desc.container)?;
                let element = classify::element_type(ty);
                let len = self.rng.usize(0..=self.config.max_collection_size);
                for _ in 0..len {
                    collection.insert(self.element_value(&element, depth)?);
                }
                Ok(Value::Collection(collection))
            }
            TypeKind::Map(desc) => {
                let mut map = classify::empty_map(&desc.container)?;
                let (key_type, value_type) = classify::key_value_types(ty);
                let catalog = Arc::clone(&self.catalog);
                let key_type = catalog.resolve(&key_type)?;
                if !classify::is_permitted_map_key(key_type) {
                    log::trace!("[generator] {} keys are not atomic, map left empty", ty.name);
                    return Ok(Value::Map(map));
                }

                let len = self.rng.usize(1..=self.config.max_map_size());
                for _ in 0..len {
                    let Some(key) = source::atomic_value(&mut self.rng, key_type)? else {
                        continue;
                    };
                    let value = self.element_value(&value_type, depth)?;
                    if map.insert(key, value).is_err() {
                        log::trace!("[generator] {} skipped a null key", ty.name);
                    }
                }
                Ok(Value::Map(map))
            }
            _ => Err(GenerateError::UnsupportedContainerKind {
                container: ty.name.clone(),
            }),
        }
    }
}
