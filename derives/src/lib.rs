//! Derive macros for ilocator
//!
//! This crate provides procedural macros for the ilocator service locator.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::punctuated::Punctuated;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Index, Token, Type};

/// Generates `SupportsInjectionOf<T>` implementations for a consumer type.
///
/// Capabilities are listed with `#[supports_injection_of(dyn A, B, ...)]`.
/// The container is read from the field tagged `#[container]`, or from a
/// field named `container` when no field is tagged.
#[proc_macro_derive(SupportsInjection, attributes(supports_injection_of, container))]
pub fn derive_supports_injection(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let capabilities = capabilities(&input)?;
    let accessor = container_accessor(&input)?;

    let impls = capabilities.iter().map(|capability| {
        quote! {
            impl #impl_generics ::ilocator::SupportsInjectionOf<#capability> for #name #ty_generics #where_clause {
                fn container(&self) -> &::ilocator::BasicContainer {
                    &self.#accessor
                }
            }
        }
    });

    Ok(quote! { #(#impls)* })
}

fn capabilities(input: &DeriveInput) -> syn::Result<Vec<Type>> {
    let mut capabilities = Vec::new();
    for attr in input.attrs.iter().filter(|a| a.path().is_ident("supports_injection_of")) {
        let listed = attr.parse_args_with(Punctuated::<Type, Token![,]>::parse_terminated)?;
        capabilities.extend(listed);
    }

    if capabilities.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "expected #[supports_injection_of(...)] listing at least one type",
        ));
    }
    Ok(capabilities)
}

fn container_accessor(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "SupportsInjection can only be derived for structs",
            ))
        }
    };

    let tagged: Vec<_> = fields
        .iter()
        .enumerate()
        .filter(|(_, field)| field.attrs.iter().any(|a| a.path().is_ident("container")))
        .collect();

    let (index, field) = match tagged.as_slice() {
        [one] => *one,
        [] => match fields {
            Fields::Named(named) => named
                .named
                .iter()
                .enumerate()
                .find(|(_, field)| field.ident.as_ref().is_some_and(|ident| ident == "container"))
                .ok_or_else(|| {
                    syn::Error::new_spanned(
                        &input.ident,
                        "no container field: tag one with #[container] or name it `container`",
                    )
                })?,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input.ident,
                    "tag the container field with #[container]",
                ))
            }
        },
        [_, (_, second), ..] => {
            return Err(syn::Error::new_spanned(
                second,
                "only one field may be tagged #[container]",
            ))
        }
    };

    Ok(match &field.ident {
        Some(ident) => ident.to_token_stream(),
        None => Index::from(index).to_token_stream(),
    })
}
