//! Implementation of the `#[derive(Lenses)]` and `#[derive(Getters)]` macros.
//!
//! Both derives walk the named fields of a struct and emit one associated
//! function per field; they differ only in the box they return.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Field, Fields, Generics, Ident, parse_macro_input};

/// The box a field derive produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldOptic {
    Lens,
    Getter,
}

impl FieldOptic {
    const fn derive_name(self) -> &'static str {
        match self {
            Self::Lens => "Lenses",
            Self::Getter => "Getters",
        }
    }

    const fn suffix(self) -> &'static str {
        match self {
            Self::Lens => "lens",
            Self::Getter => "getter",
        }
    }
}

/// Main implementation shared by the Lenses and Getters derive macros.
pub fn derive_field_optics_impl(input: TokenStream, optic: FieldOptic) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;

    let expanded = match &input.data {
        Data::Struct(data_struct) => {
            generate_struct_optics(name, generics, &data_struct.fields, optic)
        }
        Data::Enum(_) => syn::Error::new_spanned(
            &input.ident,
            format!(
                "{} can only be derived for structs, not enums. Use #[derive(Prisms)] for enums.",
                optic.derive_name()
            ),
        )
        .to_compile_error(),
        Data::Union(_) => syn::Error::new_spanned(
            &input.ident,
            format!("{} cannot be derived for unions.", optic.derive_name()),
        )
        .to_compile_error(),
    };

    TokenStream::from(expanded)
}

/// Generates one function per named field.
fn generate_struct_optics(
    name: &Ident,
    generics: &Generics,
    fields: &Fields,
    optic: FieldOptic,
) -> TokenStream2 {
    match fields {
        Fields::Named(named_fields) => {
            let methods: Vec<TokenStream2> = named_fields
                .named
                .iter()
                .filter_map(|field| {
                    field
                        .ident
                        .as_ref()
                        .map(|field_name| generate_field_method(field_name, field, optic))
                })
                .collect();

            let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

            quote! {
                impl #impl_generics #name #type_generics #where_clause {
                    #(#methods)*
                }
            }
        }
        Fields::Unnamed(_) => syn::Error::new_spanned(
            name,
            format!(
                "{} can only be derived for structs with named fields, not tuple structs.",
                optic.derive_name()
            ),
        )
        .to_compile_error(),
        Fields::Unit => syn::Error::new_spanned(
            name,
            format!(
                "{} cannot be derived for unit structs (structs with no fields).",
                optic.derive_name()
            ),
        )
        .to_compile_error(),
    }
}

fn generate_field_method(field_name: &Ident, field: &Field, optic: FieldOptic) -> TokenStream2 {
    let field_type = &field.ty;
    let method_name = format_ident!("{}_{}", field_name, optic.suffix());

    match optic {
        FieldOptic::Lens => {
            let doc = format!("Returns a boxed lens focusing on the `{field_name}` field.");
            quote! {
                #[doc = #doc]
                #[must_use]
                pub fn #method_name() -> ::reified_optics::reified::ReifiedLens<Self, #field_type>
                where
                    Self: 'static,
                    #field_type: 'static,
                {
                    ::reified_optics::reified::ReifiedLens::new(
                        ::reified_optics::optics::FunctionLens::new(
                            |source: &Self| &source.#field_name,
                            |mut source: Self, value: #field_type| {
                                source.#field_name = value;
                                source
                            },
                        ),
                    )
                }
            }
        }
        FieldOptic::Getter => {
            let doc = format!("Returns a boxed getter viewing a clone of the `{field_name}` field.");
            quote! {
                #[doc = #doc]
                #[must_use]
                pub fn #method_name() -> ::reified_optics::reified::ReifiedGetter<Self, #field_type>
                where
                    Self: 'static,
                    #field_type: ::core::clone::Clone + 'static,
                {
                    ::reified_optics::reified::ReifiedGetter::from_fn(|source: &Self| {
                        ::core::clone::Clone::clone(&source.#field_name)
                    })
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(FieldOptic::Lens, "Lenses", "lens")]
    #[case(FieldOptic::Getter, "Getters", "getter")]
    fn names_follow_optic(
        #[case] optic: FieldOptic,
        #[case] derive_name: &str,
        #[case] suffix: &str,
    ) {
        assert_eq!(optic.derive_name(), derive_name);
        assert_eq!(optic.suffix(), suffix);
    }

    #[rstest]
    fn getter_method_is_named_after_field() {
        let input: DeriveInput = syn::parse_quote! { struct Account { balance: i64 } };
        let Data::Struct(data_struct) = &input.data else {
            unreachable!("parsed a struct");
        };
        let generated =
            generate_struct_optics(&input.ident, &input.generics, &data_struct.fields, FieldOptic::Getter)
                .to_string();
        assert!(generated.contains("balance_getter"));
        assert!(generated.contains("ReifiedGetter"));
    }

    #[rstest]
    fn tuple_struct_is_rejected() {
        let input: DeriveInput = syn::parse_quote! { struct Pair(i32, i32); };
        let Data::Struct(data_struct) = &input.data else {
            unreachable!("parsed a struct");
        };
        let generated =
            generate_struct_optics(&input.ident, &input.generics, &data_struct.fields, FieldOptic::Lens)
                .to_string();
        assert!(generated.contains("compile_error"));
    }
}
