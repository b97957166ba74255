// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[derive(StoreType)]` implementation.
//!
//! Implements `DescribeType` for named-field structs and field-less enums.
//!
//! # Attributes
//!
//! | Attribute | Target | Effect |
//! |-----------|--------|--------|
//! | `#[store_type(name = "...")]` | type | Name used for model lookups |
//! | `#[column(name = "...")]` | field | Column name of the member |
//! | `#[repr(u8 \| i8 \| i16 \| i32 \| i64)]` | enum | Underlying store type |
//!
//! Enums without `#[repr]` are stored as `Int32`.

use darling::{FromDeriveInput, FromField, FromVariant, ast::Data};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Attribute, DeriveInput, Generics, Ident, Type, parse_macro_input, parse_quote};

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(store_type), supports(struct_named, enum_unit), forward_attrs(repr))]
struct StoreTypeInput {
    ident:    Ident,
    generics: Generics,
    attrs:    Vec<Attribute>,
    data:     Data<VariantInput, FieldInput>,
    #[darling(default)]
    name:     Option<String>
}

#[derive(Debug, FromField)]
#[darling(attributes(column))]
struct FieldInput {
    ident: Option<Ident>,
    ty:    Type,
    #[darling(default)]
    name:  Option<String>
}

#[derive(Debug, FromVariant)]
struct VariantInput {
    ident: Ident
}

/// Main entry point for the `StoreType` derive.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match parse(&input).and_then(|input| generate(&input)) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.write_errors().into()
    }
}

fn parse(input: &DeriveInput) -> darling::Result<StoreTypeInput> {
    let supported = match &input.data {
        syn::Data::Struct(data) => matches!(data.fields, syn::Fields::Named(_)),
        syn::Data::Enum(data) => data.variants.iter().all(|v| matches!(v.fields, syn::Fields::Unit)),
        syn::Data::Union(_) => false
    };
    if !supported {
        return Err(darling::Error::custom(
            "StoreType requires a struct with named fields or an enum with unit variants"
        )
        .with_span(&input.ident));
    }
    StoreTypeInput::from_derive_input(input)
}

fn generate(input: &StoreTypeInput) -> darling::Result<TokenStream2> {
    let ident = &input.ident;
    let ident_str = ident.to_string();
    let name = input.name.clone().unwrap_or_else(|| ident_str.clone());

    let (body, bounds) = match &input.data {
        Data::Struct(fields) => structural(&name, &ident_str, &fields.fields)?,
        Data::Enum(variants) => (enumeration(&name, &ident_str, variants, &input.attrs)?, Vec::new())
    };

    let mut generics = input.generics.clone();
    if !bounds.is_empty() {
        let where_clause = generics.make_where_clause();
        for ty in bounds {
            where_clause
                .predicates
                .push(parse_quote!(#ty: ::store_functions_core::DescribeType));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::store_functions_core::DescribeType for #ident #ty_generics #where_clause {
            fn describe() -> ::store_functions_core::TypeRef {
                #body
            }
        }
    })
}

fn structural(
    name: &str,
    ident: &str,
    fields: &[FieldInput]
) -> darling::Result<(TokenStream2, Vec<Type>)> {
    let mut members = Vec::with_capacity(fields.len());
    let mut bounds = Vec::new();
    for field in fields {
        let Some(field_ident) = &field.ident else {
            return Err(darling::Error::custom("StoreType fields must be named").with_span(&field.ty));
        };
        let field_name = syn::ext::IdentExt::unraw(field_ident).to_string();
        let ty = &field.ty;
        let column = field.name.as_ref().map(|c| quote!(.with_column(#c)));
        members.push(quote! {
            ::store_functions_core::MemberDescription::new(
                #field_name,
                <#ty as ::store_functions_core::DescribeType>::describe()
            )#column
        });
        bounds.push(ty.clone());
    }

    let body = quote! {
        ::store_functions_core::TypeRef::Structural(::store_functions_core::StructuralDescription {
            name: ::std::string::String::from(#name),
            full_name: ::std::string::String::from(::core::concat!(::core::module_path!(), "::", #ident)),
            members: ::std::vec![#(#members),*]
        })
    };
    Ok((body, bounds))
}

fn enumeration(
    name: &str,
    ident: &str,
    variants: &[VariantInput],
    attrs: &[Attribute]
) -> darling::Result<TokenStream2> {
    let underlying = underlying_kind(attrs)?;
    let members = variants.iter().map(|variant| {
        let variant_ident = &variant.ident;
        let variant_name = variant_ident.to_string();
        quote! {
            ::store_functions_core::EnumMember {
                name: ::std::string::String::from(#variant_name),
                value: Self::#variant_ident as i64
            }
        }
    });

    Ok(quote! {
        ::store_functions_core::TypeRef::Enum(::store_functions_core::EnumDescription {
            name: ::std::string::String::from(#name),
            full_name: ::std::string::String::from(::core::concat!(::core::module_path!(), "::", #ident)),
            underlying: ::store_functions_core::PrimitiveKind::#underlying,
            members: ::std::vec![#(#members),*]
        })
    })
}

/// Integral kind from `#[repr(...)]`, `Int32` when absent.
fn underlying_kind(attrs: &[Attribute]) -> darling::Result<Ident> {
    let mut kind = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident("repr")) {
        attr.parse_nested_meta(|meta| {
            let Some(repr) = meta.path.get_ident() else {
                return skip_args(&meta);
            };
            let mapped = match repr.to_string().as_str() {
                "u8" => "Byte",
                "i8" => "SByte",
                "i16" => "Int16",
                "i32" => "Int32",
                "i64" => "Int64",
                "u16" | "u32" | "u64" | "u128" | "i128" | "usize" | "isize" => {
                    return Err(meta.error(format!(
                        "`{repr}` has no matching store type, use u8, i8, i16, i32 or i64"
                    )));
                }
                _ => return skip_args(&meta)
            };
            kind = Some(Ident::new(mapped, repr.span()));
            Ok(())
        })?;
    }
    Ok(kind.unwrap_or_else(|| Ident::new("Int32", proc_macro2::Span::call_site())))
}

/// Consume the arguments of `align(..)` and similar repr hints.
fn skip_args(meta: &syn::meta::ParseNestedMeta<'_>) -> syn::Result<()> {
    if meta.input.peek(syn::token::Paren) {
        meta.input.parse::<proc_macro2::TokenTree>()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    fn expand(input: DeriveInput) -> darling::Result<String> {
        let input = parse(&input)?;
        generate(&input).map(|tokens| tokens.to_string())
    }

    #[test]
    fn struct_members_and_columns() {
        let out = expand(parse_quote! {
            struct Customer {
                id: i32,
                #[column(name = "FullName")]
                name: Option<String>
            }
        })
        .unwrap();
        assert!(out.contains("StructuralDescription"));
        assert!(out.contains("\"Customer\""));
        assert!(out.contains("\"id\""));
        assert!(out.contains(". with_column (\"FullName\")"));
    }

    #[test]
    fn type_name_override() {
        let out = expand(parse_quote! {
            #[store_type(name = "Client")]
            struct Customer {
                id: i32
            }
        })
        .unwrap();
        assert!(out.contains("name : :: std :: string :: String :: from (\"Client\")"));
    }

    #[test]
    fn generic_fields_are_bounded() {
        let out = expand(parse_quote! {
            struct Page<T> {
                items: T
            }
        })
        .unwrap();
        assert!(out.contains("where T : :: store_functions_core :: DescribeType"));
    }

    #[test]
    fn enum_repr() {
        let out = expand(parse_quote! {
            #[repr(u8)]
            enum Status {
                Active = 1,
                Closed = 2
            }
        })
        .unwrap();
        assert!(out.contains("PrimitiveKind :: Byte"));
        assert!(out.contains("Self :: Closed as i64"));

        let out = expand(parse_quote! {
            enum Status {
                Active
            }
        })
        .unwrap();
        assert!(out.contains("PrimitiveKind :: Int32"));
    }

    #[test]
    fn repr_hints_are_skipped() {
        let out = expand(parse_quote! {
            #[repr(align(8), i16)]
            enum Status {
                Active
            }
        })
        .unwrap();
        assert!(out.contains("PrimitiveKind :: Int16"));
    }

    #[test]
    fn unsupported_repr_fails() {
        assert!(
            expand(parse_quote! {
                #[repr(u32)]
                enum Status {
                    Active
                }
            })
            .is_err()
        );
    }

    #[test]
    fn tuple_struct_fails() {
        let err = expand(parse_quote!(struct Id(i32);)).unwrap_err();
        assert!(err.to_string().contains("named fields"));
    }

    #[test]
    fn union_fails() {
        assert!(expand(parse_quote!(union Bits { a: u32, b: f32 })).is_err());
    }

    #[test]
    fn data_enum_fails() {
        assert!(expand(parse_quote!(enum Shape { Circle(f64) })).is_err());
    }
}
