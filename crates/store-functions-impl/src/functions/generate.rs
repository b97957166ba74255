// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `FunctionContainer` implementation generation.
//!
//! Every annotated method becomes one `MethodInfo` literal. Types are
//! described through `DescribeType`, so a method whose types are not
//! describable fails to compile at the method's own signature.

use proc_macro2::TokenStream;
use quote::quote;
use syn::Type;

use super::parse::{ContainerDef, DetailsArgs, MethodDef, ParamDef, ParamType, ParameterDef, ResultDef};

/// Emit the stripped `impl` block followed by the `FunctionContainer` impl.
pub fn generate(container: &ContainerDef) -> TokenStream {
    let item = &container.item;
    let self_ty = &item.self_ty;
    let (impl_generics, _, where_clause) = item.generics.split_for_impl();
    let name = &container.name;
    let methods = container.methods.iter().map(|m| method(container, m));

    quote! {
        #item

        impl #impl_generics ::store_functions_core::FunctionContainer for #self_ty #where_clause {
            fn container_name() -> &'static str {
                #name
            }

            fn functions() -> ::std::vec::Vec<::store_functions_core::MethodInfo> {
                ::std::vec![#(#methods),*]
            }
        }
    }
}

fn method(container: &ContainerDef, method: &MethodDef) -> TokenStream {
    let name = method.name();
    let is_extension = method.is_extension;
    let parameters = method.params.iter().map(parameter);
    let return_type = match &method.return_type {
        Some(ty) => describe(ty),
        None => quote!(::store_functions_core::TypeRef::UntypedRows)
    };
    let function_name = method
        .function
        .name
        .clone()
        .or_else(|| container.rename.map(|rule| rule.apply(&name)));
    let function_name = opt_string(function_name.as_deref());
    let details = match &method.details {
        Some(details) => {
            let details = details_attr(details);
            quote!(::std::option::Option::Some(#details))
        }
        None => quote!(::std::option::Option::None)
    };
    let results = method.results.iter().map(result_attr);

    quote! {
        ::store_functions_core::MethodInfo {
            name: ::std::string::String::from(#name),
            is_extension: #is_extension,
            parameters: ::std::vec![#(#parameters),*],
            return_type: #return_type,
            function: ::std::option::Option::Some(::store_functions_core::FunctionAttr {
                name: #function_name
            }),
            details: #details,
            results: ::std::vec![#(#results),*]
        }
    }
}

fn parameter(param: &ParamDef) -> TokenStream {
    let name = &param.name;
    let ty = match &param.ty {
        ParamType::Context => quote!(::store_functions_core::TypeRef::Context),
        ParamType::Typed(ty) => describe(ty)
    };
    let by_ref = param.by_ref;
    let is_out = param.is_out;
    let attr = match &param.attr {
        Some(attr) => {
            let attr = parameter_attr(attr);
            quote!(::std::option::Option::Some(#attr))
        }
        None => quote!(::std::option::Option::None)
    };

    quote! {
        ::store_functions_core::ParameterInfo {
            name: ::std::string::String::from(#name),
            ty: #ty,
            by_ref: #by_ref,
            is_out: #is_out,
            attr: #attr
        }
    }
}

fn parameter_attr(attr: &ParameterDef) -> TokenStream {
    let name = opt_string(attr.name.as_deref());
    let store_type = opt_string(attr.store_type.as_deref());
    let ty = opt_describe(attr.ty.as_ref());
    let length = opt(attr.length.map(|v| quote!(#v)));
    let fixed_length = opt(attr.fixed_length.map(|v| quote!(#v)));
    let precision = opt(attr.precision.map(|v| quote!(#v)));
    let scale = opt(attr.scale.map(|v| quote!(#v)));

    quote! {
        ::store_functions_core::ParameterAttr {
            name: #name,
            store_type: #store_type,
            ty: #ty,
            length: #length,
            fixed_length: #fixed_length,
            precision: #precision,
            scale: #scale
        }
    }
}

fn details_attr(details: &DetailsArgs) -> TokenStream {
    let schema = opt_string(details.schema.as_deref());
    let is_composable = opt(details.composable.map(|v| quote!(#v)));
    let is_built_in = opt(details.built_in.map(|v| quote!(#v)));
    let is_aggregate = opt(details.aggregate.map(|v| quote!(#v)));
    let is_niladic = opt(details.niladic.map(|v| quote!(#v)));
    let semantics = opt(details.parameter_semantics.map(|s| s.to_tokens()));

    quote! {
        ::store_functions_core::FunctionDetailsAttr {
            schema: #schema,
            is_composable: #is_composable,
            is_built_in: #is_built_in,
            is_aggregate: #is_aggregate,
            is_niladic: #is_niladic,
            parameter_type_semantics: #semantics
        }
    }
}

fn result_attr(result: &ResultDef) -> TokenStream {
    let column = opt_string(result.column.as_deref());
    let store_type = opt_string(result.store_type.as_deref());
    let ty = opt_describe(result.ty.as_ref());

    quote! {
        ::store_functions_core::ResultAttr {
            column: #column,
            store_type: #store_type,
            ty: #ty
        }
    }
}

fn describe(ty: &Type) -> TokenStream {
    quote!(<#ty as ::store_functions_core::DescribeType>::describe())
}

fn opt_describe(ty: Option<&Type>) -> TokenStream {
    opt(ty.map(describe))
}

fn opt_string(value: Option<&str>) -> TokenStream {
    opt(value.map(|v| quote!(::std::string::String::from(#v))))
}

fn opt(value: Option<TokenStream>) -> TokenStream {
    match value {
        Some(value) => quote!(::std::option::Option::Some(#value)),
        None => quote!(::std::option::Option::None)
    }
}
