use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, Ident, Meta};

use crate::types::is_copy_type;

fn is_skipped(attrs: &[Attribute]) -> bool {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("builder") || attr.path().is_ident("shared"))
        .any(|attr| {
            let mut is_skip = false;
            let _ = attr.parse_nested_meta(|meta| {
                is_skip = meta.path.is_ident("skip");
                Ok(())
            });
            is_skip
        })
}

fn default_expr(attrs: &[Attribute]) -> Option<syn::Expr> {
    attrs
        .iter()
        .find(|attr| attr.path().is_ident("default"))
        .and_then(|attr| match &attr.meta {
            Meta::Path(_) => None,
            Meta::NameValue(meta) => Some(meta.value.clone()),
            Meta::List(list) => list.parse_args().ok(),
        })
}

pub fn macro_builder(input: DeriveInput) -> TokenStream {
    let origin_ident = input.ident;
    let generics = input.generics;

    let vis = input.vis;

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let Data::Struct(data) = input.data else {
        return syn::Error::new(origin_ident.span(), "Builder can only be applied to structs")
            .into_compile_error()
            .into();
    };

    let Fields::Named(named) = data.fields else {
        return syn::Error::new(origin_ident.span(), "Builder needs named fields")
            .into_compile_error()
            .into();
    };

    let ident = Ident::new(&format!("{}Builder", origin_ident), origin_ident.span());

    let default_fields: Vec<_> = named
        .named
        .iter()
        .map(|field| {
            let field_ident = &field.ident;
            match default_expr(&field.attrs) {
                Some(expr) => quote!(#field_ident: #expr,),
                None => quote!(#field_ident: Default::default(),),
            }
        })
        .collect();

    let fields = named.named.iter().map(|field| {
        let field_ident = &field.ident;
        let ty = &field.ty;
        quote!(#field_ident: #ty,)
    });

    let build_fields = named.named.iter().map(|field| {
        let field_ident = &field.ident;
        quote!(#field_ident: value.#field_ident,)
    });

    // numbers are taken as is so that plain literals infer
    let property_methods = named
        .named
        .iter()
        .filter(|field| !is_skipped(&field.attrs))
        .map(|field| {
            let field_ident = &field.ident;
            let ty = &field.ty;
            if is_copy_type(ty) {
                quote!(
                    pub fn #field_ident(mut self, value: #ty) -> Self {
                        self.#field_ident = value;
                        self
                    }
                )
            } else {
                quote!(
                    pub fn #field_ident(mut self, value: impl Into<#ty>) -> Self {
                        self.#field_ident = value.into();
                        self
                    }
                )
            }
        });

    quote!(
        #[derive(Clone, Debug)]
        #vis struct #ident #generics {
            #(#fields)*
        }

        impl #impl_generics Default for #ident #ty_generics #where_clause {
            fn default() -> Self {
                Self {
                    #(#default_fields)*
                }
            }
        }

        impl #impl_generics Default for #origin_ident #ty_generics #where_clause {
            fn default() -> Self {
                Self {
                    #(#default_fields)*
                }
            }
        }

        impl #impl_generics From<#ident #ty_generics> for #origin_ident #ty_generics #where_clause {
            fn from(value: #ident #ty_generics) -> Self {
                Self {
                    #(#build_fields)*
                }
            }
        }

        impl #impl_generics #ident #ty_generics #where_clause {
            pub fn new() -> Self {
                Self::default()
            }

            #(#property_methods)*
        }
    )
    .into()
}
