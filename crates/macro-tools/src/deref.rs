use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Index, Member, Meta};

pub fn macro_deref(input: DeriveInput) -> TokenStream {
    let ident = input.ident;
    let generics = input.generics;
    let Data::Struct(data) = input.data else {
        return syn::Error::new(ident.span(), "Deref can only be applied to structs")
            .into_compile_error()
            .into();
    };

    let marked = data.fields.iter().enumerate().find(|(_, field)| {
        field
            .attrs
            .iter()
            .any(|attr| attr.path().is_ident("deref"))
    });

    // a newtype needs no marker
    let target = match (marked, &data.fields) {
        (Some(found), _) => Some(found),
        (None, Fields::Unnamed(unnamed)) if unnamed.unnamed.len() == 1 => {
            data.fields.iter().enumerate().next()
        }
        _ => None,
    };

    let Some((index, field)) = target else {
        return syn::Error::new(
            ident.span(),
            "must set one deref field when use Deref macro",
        )
        .into_compile_error()
        .into();
    };

    // `#[deref(ref)]` only hands out shared references
    let mut read_only = false;
    for attr in field.attrs.iter().filter(|attr| attr.path().is_ident("deref")) {
        if let Meta::List(_) = attr.meta {
            if let Err(err) = attr.parse_args::<syn::Token![ref]>() {
                return err.into_compile_error().into();
            }
            read_only = true;
        }
    }

    let member = match &field.ident {
        Some(field_ident) => Member::Named(field_ident.clone()),
        None => Member::Unnamed(Index::from(index)),
    };
    let deref_field_ty = &field.ty;

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let deref_mut = (!read_only).then(|| {
        quote!(
            impl #impl_generics core::ops::DerefMut for #ident #ty_generics #where_clause {
                fn deref_mut(&mut self) -> &mut Self::Target {
                    &mut self.#member
                }
            }
        )
    });

    quote!(
        impl #impl_generics core::ops::Deref for #ident #ty_generics #where_clause {
            type Target = #deref_field_ty;
            fn deref(&self) -> &Self::Target {
                &self.#member
            }
        }

        #deref_mut
    )
    .into()
}
