// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Attribute, Data, DataEnum, DeriveInput, Fields, FieldsNamed, LitStr};

/// `#[derive(Generatable)]` macro: marks a type as eligible for generation
/// and implements `Describe`, `FromValue` and `Generatable` for it.
///
/// Supports:
/// - Structs with named fields: a concrete composite with a parameterless
///   constructor; every field is mutable and populated after construction
/// - Enums with only unit variants: an enumeration
/// - Enums with only single-field tuple variants: an abstract type whose
///   permitted implementations are the payload types
///
/// Attributes:
/// - `#[fixgen(name = "...")]` on the type: registration name (defaults to the ident)
/// - `#[fixgen(skip)]` on a struct field: not generated, filled from `Default`
///
/// A composite field past the generator's depth bound is absent. Derived
/// structs then convert from every field's absent value (zero, empty, `None`)
/// and payload enums from their first variant's; use `Option<Box<T>>` to see
/// the cut-off as `None` instead.
///
/// Example:
/// ```ignore
/// use fixgen::Generatable;
///
/// #[derive(Generatable)]
/// struct TreeNode {
///     value: i32,
///     left: Option<Box<TreeNode>>,
///     right: Option<Box<TreeNode>>,
///     #[fixgen(skip)]
///     visits: u64,
/// }
/// ```
#[proc_macro_derive(Generatable, attributes(fixgen))]
pub fn derive_generatable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Generatable cannot be derived for generic types",
        ));
    }

    let name = &input.ident;
    let type_name = type_attrs(&input.attrs)?.unwrap_or_else(|| name.to_string());

    let (describe_body, from_value_body, from_absent_body) = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => expand_struct(fields)?,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "Only structs with named fields are supported",
                ))
            }
        },
        Data::Enum(data) => expand_enum(input, data)?,
        Data::Union(_) => return Err(syn::Error::new_spanned(input, "Unions are not supported")),
    };

    Ok(quote! {
        impl ::fixgen::Describe for #name {
            fn describe(
                catalog: &mut ::fixgen::TypeCatalog,
            ) -> ::std::sync::Arc<::fixgen::TypeDescriptor> {
                const NAME: &str = #type_name;
                if catalog.reserve(NAME) {
                    #describe_body
                }
                ::std::sync::Arc::new(::fixgen::TypeDescriptor::reference(NAME))
            }
        }

        impl ::fixgen::FromValue for #name {
            fn from_value(
                value: &::fixgen::Value,
            ) -> ::std::result::Result<Self, ::fixgen::ConversionError> {
                const NAME: &str = #type_name;
                #from_value_body
            }

            #from_absent_body
        }

        impl ::fixgen::Generatable for #name {
            const TYPE_NAME: &'static str = #type_name;
        }
    })
}

/// `describe` body, `from_value` body and an optional `from_absent` method.
type Bodies = (
    proc_macro2::TokenStream,
    proc_macro2::TokenStream,
    proc_macro2::TokenStream,
);

fn expand_struct(fields: &FieldsNamed) -> syn::Result<Bodies> {
    let mut described = Vec::new();
    let mut converted = Vec::new();
    let mut absent = Vec::new();

    for field in &fields.named {
        let Some(ident) = field.ident.as_ref() else {
            return Err(syn::Error::new_spanned(field, "Field must have a name"));
        };
        let field_name = ident.to_string();
        let ty = &field.ty;

        if field_attrs(&field.attrs)? {
            converted.push(quote! { #ident: ::std::default::Default::default() });
            absent.push(quote! { #ident: ::std::default::Default::default() });
            continue;
        }

        described.push(quote! {
            .field(#field_name, <#ty as ::fixgen::Describe>::describe(catalog))
        });
        converted.push(quote! {
            #ident: ::fixgen::typed::field_from_value::<#ty>(composite, #field_name)?
        });
        absent.push(quote! {
            #ident: ::fixgen::typed::field_from_absent::<#ty>(#field_name)?
        });
    }

    let describe = quote! {
        let descriptor = ::fixgen::CompositeBuilder::new(NAME)
            .generatable()
            .default_constructor()
            #(#described)*
            .build();
        catalog.register(descriptor);
    };
    let from_value = quote! {
        #[allow(unused_variables)]
        let composite = ::fixgen::typed::expect_composite(value, NAME)?;
        ::std::result::Result::Ok(Self {
            #(#converted,)*
        })
    };
    let from_absent = quote! {
        fn from_absent() -> ::std::result::Result<Self, ::fixgen::ConversionError> {
            ::std::result::Result::Ok(Self {
                #(#absent,)*
            })
        }
    };
    Ok((describe, from_value, from_absent))
}

fn expand_enum(input: &DeriveInput, data: &DataEnum) -> syn::Result<Bodies> {
    let all_unit = data
        .variants
        .iter()
        .all(|v| matches!(v.fields, Fields::Unit));
    if all_unit {
        return Ok(expand_unit_enum(data));
    }

    let mut payloads = Vec::new();
    for variant in &data.variants {
        match &variant.fields {
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
                payloads.push((&variant.ident, &fields.unnamed[0].ty));
            }
            _ => {
                return Err(syn::Error::new_spanned(
                    variant,
                    "Enums must have only unit variants or only single-field tuple variants",
                ))
            }
        }
    }
    if payloads.is_empty() {
        return Err(syn::Error::new_spanned(input, "Enum has no variants"));
    }

    let permits = payloads.iter().map(|(_, ty)| {
        quote! {
            let implementation = <#ty as ::fixgen::Describe>::describe(catalog);
            builder = builder.permit(implementation.name.clone());
        }
    });
    let arms = payloads.iter().map(|(ident, ty)| {
        quote! {
            n if n == <#ty as ::fixgen::Generatable>::TYPE_NAME => {
                ::std::result::Result::Ok(
                    Self::#ident(<#ty as ::fixgen::FromValue>::from_value(value)?),
                )
            }
        }
    });

    let (first_ident, first_ty) = payloads[0];
    let from_absent = quote! {
        fn from_absent() -> ::std::result::Result<Self, ::fixgen::ConversionError> {
            ::std::result::Result::Ok(Self::#first_ident(
                <#first_ty as ::fixgen::FromValue>::from_absent()?,
            ))
        }
    };

    let describe = quote! {
        let mut builder = ::fixgen::CompositeBuilder::interface(NAME).generatable();
        #(#permits)*
        catalog.register(builder.build());
    };
    let from_value = quote! {
        match ::fixgen::typed::composite_type_name(value, NAME)? {
            #(#arms)*
            other => ::std::result::Result::Err(::fixgen::ConversionError::UnknownVariant {
                type_name: NAME.to_string(),
                variant: other.to_string(),
            }),
        }
    };
    Ok((describe, from_value, from_absent))
}

fn expand_unit_enum(data: &DataEnum) -> Bodies {
    let variants: Vec<_> = data
        .variants
        .iter()
        .map(|v| (&v.ident, v.ident.to_string()))
        .collect();

    let builder_calls = variants.iter().map(|(_, name)| quote! { .variant(#name) });
    let arms = variants
        .iter()
        .map(|(ident, name)| quote! { #name => ::std::result::Result::Ok(Self::#ident), });

    let describe = quote! {
        catalog.register(
            ::fixgen::EnumBuilder::new(NAME)
                #(#builder_calls)*
                .build(),
        );
    };
    let from_value = quote! {
        match ::fixgen::typed::enum_variant(value, NAME)? {
            #(#arms)*
            other => ::std::result::Result::Err(::fixgen::ConversionError::UnknownVariant {
                type_name: NAME.to_string(),
                variant: other.to_string(),
            }),
        }
    };
    (describe, from_value, proc_macro2::TokenStream::new())
}

/// `#[fixgen(name = "...")]` on the type.
fn type_attrs(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut name = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident("fixgen")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let lit: LitStr = meta.value()?.parse()?;
                name = Some(lit.value());
                Ok(())
            } else {
                Err(meta.error("unsupported fixgen attribute, expected `name`"))
            }
        })?;
    }
    Ok(name)
}

/// `#[fixgen(skip)]` on a field.
fn field_attrs(attrs: &[Attribute]) -> syn::Result<bool> {
    let mut skip = false;
    for attr in attrs.iter().filter(|a| a.path().is_ident("fixgen")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skip = true;
                Ok(())
            } else {
                Err(meta.error("unsupported fixgen attribute, expected `skip`"))
            }
        })?;
    }
    Ok(skip)
}
