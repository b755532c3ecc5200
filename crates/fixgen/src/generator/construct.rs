// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Constructor selection and argument synthesis.

use super::Generator;
use crate::classify;
use crate::error::{GenerateError, Result};
use crate::source;
use crate::types::{
    CompositeValue, ConstructorDescriptor, FieldDescriptor, TypeCatalog, TypeDescriptor, TypeKind,
    Value,
};
use std::sync::Arc;

impl Generator {
    /// Build an instance of the concrete composite `ty` living at `depth`.
    ///
    /// Constructors are tried in random order. A constructor whose arguments
    /// cannot be synthesized is skipped; a failing constructor body aborts.
    pub(super) fn instantiate(
        &mut self,
        catalog: &TypeCatalog,
        ty: &TypeDescriptor,
        depth: usize,
    ) -> Result<CompositeValue> {
        let constructors = match ty.composite() {
            Some(composite) if !composite.constructors.is_empty() => &composite.constructors,
            _ => {
                return Err(GenerateError::NoAccessibleConstructor {
                    type_name: ty.name.clone(),
                })
            }
        };

        let mut order: Vec<&ConstructorDescriptor> = constructors.iter().collect();
        self.rng.shuffle(&mut order);

        let fields = catalog.all_fields(ty)?;
        for ctor in &order {
            let args = match self.constructor_arguments(ctor, depth + 1) {
                Ok(args) => args,
                Err(e) if e.is_recoverable() => {
                    log::debug!(
                        "[generator] {} constructor/{} skipped: {}",
                        ty.name,
                        ctor.arity(),
                        e
                    );
                    continue;
                }
                Err(e) => return Err(e),
            };
            return invoke(ty, &fields, ctor, args);
        }

        Err(GenerateError::InstantiationExhausted {
            type_name: ty.name.clone(),
            attempted: order.len(),
        })
    }

    fn constructor_arguments(
        &mut self,
        ctor: &ConstructorDescriptor,
        depth: usize,
    ) -> Result<Vec<Value>> {
        ctor.params
            .iter()
            .map(|param| self.argument_value(&param.type_desc, depth))
            .collect()
    }

    /// Constructor argument: containers are always empty.
    fn argument_value(&mut self, ty: &TypeDescriptor, depth: usize) -> Result<Value> {
        let catalog = Arc::clone(&self.catalog);
        let ty = catalog.resolve(ty)?;

        if let Some(value) = source::atomic_value(&mut self.rng, ty)? {
            return Ok(value);
        }
        if classify::classify(ty).is_container() {
            return classify::empty_container_of(ty);
        }
        match &ty.kind {
            TypeKind::Unknown => Ok(Value::Null),
            _ => self.generate_at(ty, depth),
        }
    }
}

/// Run a constructor against an instance holding every field's default.
fn invoke(
    ty: &TypeDescriptor,
    fields: &[FieldDescriptor],
    ctor: &ConstructorDescriptor,
    args: Vec<Value>,
) -> Result<CompositeValue> {
    let mut instance = CompositeValue::new(ty.name.clone());
    for field in fields {
        // Own fields come first and shadow same-named ancestor fields.
        if !instance.has_field(&field.name) {
            instance.set_field(field.name.clone(), Value::default_for(&field.type_desc.kind));
        }
    }

    match &ctor.initializer {
        Some(initializer) => {
            initializer(&args, &mut instance).map_err(|reason| GenerateError::ConstructorFailed {
                type_name: ty.name.clone(),
                reason,
            })?;
        }
        None => {
            for (param, arg) in ctor.params.iter().zip(args) {
                if instance.has_field(&param.name) {
                    instance.set_field(param.name.clone(), arg);
                }
            }
        }
    }
    Ok(instance)
}
