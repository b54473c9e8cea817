//! Implementation of the `#[derive(Prisms)]` macro.
//!
//! Every variant gets an associated function returning a `ReifiedPrism`
//! whose focus is the variant's payload.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Generics, Ident, Type, Variant, parse_macro_input};

/// Main implementation of the Prisms derive macro.
pub fn derive_prisms_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;

    let expanded = match &input.data {
        Data::Enum(data_enum) => {
            generate_enum_prisms(name, generics, &data_enum.variants.iter().collect::<Vec<_>>())
        }
        Data::Struct(_) => syn::Error::new_spanned(
            &input.ident,
            "Prisms can only be derived for enums, not structs. Use #[derive(Lenses)] for structs.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Prisms cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

fn generate_enum_prisms(name: &Ident, generics: &Generics, variants: &[&Variant]) -> TokenStream2 {
    let prism_methods: Vec<TokenStream2> = variants
        .iter()
        .map(|variant| generate_variant_prism(variant))
        .collect();

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#prism_methods)*
        }
    }
}

fn generate_variant_prism(variant: &Variant) -> TokenStream2 {
    let variant_name = &variant.ident;
    let method_name = format_ident!("{}_prism", to_snake_case(&variant_name.to_string()));

    match &variant.fields {
        Fields::Unit => generate_unit_variant_prism(variant_name, &method_name),
        Fields::Unnamed(fields) => {
            let field_types: Vec<&Type> = fields.unnamed.iter().map(|field| &field.ty).collect();

            match field_types.as_slice() {
                [field_type] => {
                    generate_single_field_tuple_prism(variant_name, &method_name, field_type)
                }
                _ => generate_multi_field_tuple_prism(variant_name, &method_name, &field_types),
            }
        }
        Fields::Named(fields) => {
            let field_names: Option<Vec<&Ident>> =
                fields.named.iter().map(|field| field.ident.as_ref()).collect();
            let field_types: Vec<&Type> = fields.named.iter().map(|field| &field.ty).collect();

            match field_names {
                Some(field_names) => generate_struct_variant_prism(
                    variant_name,
                    &method_name,
                    &field_names,
                    &field_types,
                ),
                None => syn::Error::new_spanned(variant_name, "Named fields must carry a name.")
                    .to_compile_error(),
            }
        }
    }
}

fn prism_doc(variant_name: &Ident) -> String {
    format!("Returns a boxed prism focusing on the `{variant_name}` variant.")
}

fn generate_unit_variant_prism(variant_name: &Ident, method_name: &Ident) -> TokenStream2 {
    let doc = prism_doc(variant_name);
    quote! {
        #[doc = #doc]
        #[must_use]
        pub fn #method_name() -> ::reified_optics::reified::ReifiedPrism<Self, ()>
        where
            Self: 'static,
        {
            ::reified_optics::reified::ReifiedPrism::new(
                ::reified_optics::optics::FunctionPrism::new(
                    |source: &Self| match source {
                        Self::#variant_name => Some(&()),
                        #[allow(unreachable_patterns)]
                        _ => None,
                    },
                    |(): ()| Self::#variant_name,
                    |source: Self| match source {
                        Self::#variant_name => Some(()),
                        #[allow(unreachable_patterns)]
                        _ => None,
                    },
                ),
            )
        }
    }
}

fn generate_single_field_tuple_prism(
    variant_name: &Ident,
    method_name: &Ident,
    field_type: &Type,
) -> TokenStream2 {
    let doc = prism_doc(variant_name);
    quote! {
        #[doc = #doc]
        #[must_use]
        pub fn #method_name() -> ::reified_optics::reified::ReifiedPrism<Self, #field_type>
        where
            Self: 'static,
            #field_type: 'static,
        {
            ::reified_optics::reified::ReifiedPrism::new(
                ::reified_optics::optics::FunctionPrism::new(
                    |source: &Self| match source {
                        Self::#variant_name(value) => Some(value),
                        #[allow(unreachable_patterns)]
                        _ => None,
                    },
                    |value: #field_type| Self::#variant_name(value),
                    |source: Self| match source {
                        Self::#variant_name(value) => Some(value),
                        #[allow(unreachable_patterns)]
                        _ => None,
                    },
                ),
            )
        }
    }
}

/// The fields of a multi-field variant are not laid out as a tuple, so
/// `preview` has nothing to borrow and always yields `None`.
fn generate_multi_field_tuple_prism(
    variant_name: &Ident,
    method_name: &Ident,
    field_types: &[&Type],
) -> TokenStream2 {
    let doc = prism_doc(variant_name);
    let tuple_type = quote! { (#(#field_types),*) };

    let pattern_vars: Vec<Ident> = (0..field_types.len())
        .map(|index| format_ident!("v{}", index))
        .collect();

    quote! {
        #[doc = #doc]
        ///
        /// `preview` always returns `None`; use `preview_owned`.
        #[must_use]
        pub fn #method_name() -> ::reified_optics::reified::ReifiedPrism<Self, #tuple_type>
        where
            Self: 'static,
            #tuple_type: 'static,
        {
            ::reified_optics::reified::ReifiedPrism::new(
                ::reified_optics::optics::FunctionPrism::new(
                    |_source: &Self| None,
                    |(#(#pattern_vars),*): #tuple_type| Self::#variant_name(#(#pattern_vars),*),
                    |source: Self| match source {
                        Self::#variant_name(#(#pattern_vars),*) => Some((#(#pattern_vars),*)),
                        #[allow(unreachable_patterns)]
                        _ => None,
                    },
                ),
            )
        }
    }
}

/// Struct variants share the multi-field limitation: `preview` yields `None`.
fn generate_struct_variant_prism(
    variant_name: &Ident,
    method_name: &Ident,
    field_names: &[&Ident],
    field_types: &[&Type],
) -> TokenStream2 {
    let doc = prism_doc(variant_name);
    let tuple_type = quote! { (#(#field_types),*) };

    quote! {
        #[doc = #doc]
        ///
        /// The focus holds the fields in definition order. `preview` always
        /// returns `None`; use `preview_owned`.
        #[must_use]
        pub fn #method_name() -> ::reified_optics::reified::ReifiedPrism<Self, #tuple_type>
        where
            Self: 'static,
            #tuple_type: 'static,
        {
            ::reified_optics::reified::ReifiedPrism::new(
                ::reified_optics::optics::FunctionPrism::new(
                    |_source: &Self| None,
                    |(#(#field_names),*): #tuple_type| Self::#variant_name { #(#field_names),* },
                    |source: Self| match source {
                        Self::#variant_name { #(#field_names),* } => Some((#(#field_names),*)),
                        #[allow(unreachable_patterns)]
                        _ => None,
                    },
                ),
            )
        }
    }
}

/// Converts a `PascalCase` variant name to `snake_case`.
fn to_snake_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len() + 4);
    let characters: Vec<char> = input.chars().collect();

    for (index, &character) in characters.iter().enumerate() {
        if character.is_uppercase() {
            if index > 0 {
                let previous = characters[index - 1];
                let next_is_lowercase = characters
                    .get(index + 1)
                    .is_some_and(|next| next.is_lowercase());

                // "keyPress" -> "key_press", "XMLParser" -> "xml_parser"
                if previous.is_lowercase() || (previous.is_uppercase() && next_is_lowercase) {
                    result.push('_');
                }
            }
            result.extend(character.to_lowercase());
        } else {
            result.push(character);
        }
    }

    result
}
