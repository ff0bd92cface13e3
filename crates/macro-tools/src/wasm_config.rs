use proc_macro::TokenStream;
use quote::{quote, ToTokens};
use syn::{punctuated::Punctuated, spanned::Spanned, Ident, LitStr, Meta};

use crate::types::underscore_to_camelcase;

fn default_value(field: &syn::Field) -> Option<syn::Expr> {
    field
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("default"))
        .and_then(|attr| match &attr.meta {
            Meta::NameValue(kv) => Some(kv.value.clone()),
            _ => None,
        })
}

pub fn macro_wasm_config(args: Punctuated<Meta, syn::Token![,]>, item: syn::Item) -> TokenStream {
    let mut bind_target: Option<syn::Expr> = None;

    for arg in args {
        let Meta::NameValue(meta) = arg else {
            return syn::Error::new(arg.span(), "wasm_config only accepts bind = {{Target}}")
                .into_compile_error()
                .into();
        };
        if !meta.path.is_ident("bind") {
            return syn::Error::new(meta.path.span(), "unknown wasm_config argument")
                .into_compile_error()
                .into();
        }
        bind_target = Some(meta.value);
    }

    let syn::Item::Struct(struct_data) = item else {
        return syn::Error::new(item.span(), "wasm_config only applies to structs")
            .into_compile_error()
            .into();
    };

    let ident = struct_data.ident;

    let (impl_generics, ty_generics, where_clause) = struct_data.generics.split_for_impl();

    let fields = struct_data.fields.iter().map(|field| {
        let field_ident = &field.ident;
        let ty = &field.ty;
        let field_name = underscore_to_camelcase(&field.ident.to_token_stream().to_string());
        let field_name = LitStr::new(&field_name, field.span());
        quote!(
            #[serde(rename = #field_name)]
            #field_ident: Option<#ty>,
        )
    });

    let bind_impl = bind_target.map(|target| {
        let builder_ident = Ident::new(
            &format!("{}Builder", target.to_token_stream()),
            target.span(),
        );

        let bind_fields = struct_data.fields.iter().map(|field| {
            let field_ident = &field.ident;
            quote!(#field_ident: Some(target.#field_ident().into()),)
        });

        let default_fields = struct_data.fields.iter().map(|field| {
            let field_ident = &field.ident;
            match default_value(field) {
                Some(value) => quote!(#field_ident: Some(#value),),
                None => quote!(#field_ident: Some(Default::default()),),
            }
        });

        let builder_fields = struct_data.fields.iter().map(|field| {
            let field_ident = &field.ident;
            match default_value(field) {
                Some(value) => quote!(.#field_ident(target.#field_ident.unwrap_or(#value))),
                None => quote!(.#field_ident(target.#field_ident.unwrap_or_default())),
            }
        });

        quote!(
            impl From<&convexa::prelude::#target> for #ident {
                fn from(target: &convexa::prelude::#target) -> Self {
                    Self {
                        #(#bind_fields)*
                    }
                }
            }

            impl From<&#ident> for convexa::prelude::#builder_ident {
                fn from(target: &#ident) -> Self {
                    convexa::prelude::#builder_ident::new()
                        #(#builder_fields)*
                }
            }

            impl Default for #ident {
                fn default() -> Self {
                    Self {
                        #(#default_fields)*
                    }
                }
            }

            impl #ident {
                /// missing fields fall back to their defaults
                pub fn to_bind_struct(&self) -> convexa::prelude::#target {
                    let builder: convexa::prelude::#builder_ident = self.into();
                    builder.into()
                }
            }
        )
    });

    let attrs = struct_data.attrs;

    let web_ident = Ident::new(&format!("Web{}", ident), ident.span());
    let optional_web_ident = Ident::new(&format!("OptionalWeb{}", ident), ident.span());

    let invalid_message = format!("value of {} is not valid", ident);

    let ident_str = ident.to_string();
    let optional_ident_str = format!("{ident}Partial");

    let vis = struct_data.vis;

    quote!(
        #(#attrs)*
        #[derive(convexa_macro_tools::Fields)]
        #[r]
        #[derive(Deserialize, Serialize)]
        #vis struct #ident #impl_generics #where_clause {
            #(#fields)*
        }

        impl TryFrom<#optional_web_ident> for #ident #ty_generics {
            type Error = &'static str;
            fn try_from(value: #optional_web_ident) -> Result<Self, Self::Error> {
                let value: JsValue = value.into();
                from_value(value).map_err(|_| #invalid_message)
            }
        }

        impl TryFrom<&#ident> for #web_ident {
            type Error = serde_wasm_bindgen::Error;
            fn try_from(target: &#ident) -> Result<Self, Self::Error> {
                serde_wasm_bindgen::to_value(target).map(Into::into)
            }
        }

        #[wasm_bindgen]
        extern "C" {
            #[wasm_bindgen(typescript_type = #ident_str)]
            pub type #web_ident;

            #[wasm_bindgen(typescript_type = #optional_ident_str)]
            pub type #optional_web_ident;
        }

        #bind_impl
    )
    .into()
}
