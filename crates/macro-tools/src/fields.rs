use proc_macro::TokenStream;
use quote::quote;
use syn::{parenthesized, Attribute, Data, DeriveInput, Fields, Ident, Visibility};

use crate::types::is_copy_type;

struct ReadAttr {
    vis: Visibility,
    copy: bool,
}

enum WriteKind {
    Mut,
    Set,
    Reducer,
}

struct WriteAttr {
    vis: Visibility,
    kind: WriteKind,
}

fn find_attr<'a>(attrs: &'a [Attribute], ident: &str) -> Option<&'a Attribute> {
    attrs.iter().find(|attr| attr.path().is_ident(ident))
}

fn should_skip(attrs: &[Attribute]) -> bool {
    attrs
        .iter()
        .filter(|attr| ["shared", "r", "w"].iter().any(|k| attr.path().is_ident(k)))
        .any(|attr| {
            let mut is_skip = false;
            let _ = attr.parse_nested_meta(|meta| {
                is_skip = meta.path.is_ident("skip");
                Ok(())
            });
            is_skip
        })
}

fn parse_read(attrs: &[Attribute], default_vis: &Visibility) -> Option<ReadAttr> {
    find_attr(attrs, "r").map(|attr| {
        let mut read = ReadAttr {
            vis: default_vis.clone(),
            copy: false,
        };
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("vis") {
                let content;
                parenthesized!(content in meta.input);
                read.vis = content.parse::<Visibility>()?;
            } else if meta.path.is_ident("copy") {
                read.copy = true;
            }
            Ok(())
        });
        read
    })
}

fn parse_write(attrs: &[Attribute], default_vis: &Visibility) -> Option<WriteAttr> {
    find_attr(attrs, "w").map(|attr| {
        let mut write = WriteAttr {
            vis: default_vis.clone(),
            kind: WriteKind::Mut,
        };
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("reducer") {
                write.kind = WriteKind::Reducer;
            } else if meta.path.is_ident("set") {
                write.kind = WriteKind::Set;
            } else if meta.path.is_ident("vis") {
                let content;
                parenthesized!(content in meta.input);
                write.vis = content.parse::<Visibility>()?;
            }
            Ok(())
        });
        write
    })
}

pub fn macro_fields(input: DeriveInput) -> TokenStream {
    let ident = input.ident;
    let generics = input.generics;

    let input_vis = input.vis;

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let Data::Struct(data) = input.data else {
        return syn::Error::new(ident.span(), "Fields can only be applied to structs")
            .into_compile_error()
            .into();
    };

    let Fields::Named(named) = data.fields else {
        return syn::Error::new(ident.span(), "Fields needs named fields")
            .into_compile_error()
            .into();
    };

    let global_read = |vis: &Visibility| parse_read(&input.attrs, vis);
    let global_write = |vis: &Visibility| parse_write(&input.attrs, vis);

    let property_methods = named
        .named
        .iter()
        .filter(|field| !should_skip(&field.attrs))
        .filter_map(|field| {
            let field_ident = field.ident.as_ref()?;
            let ty = &field.ty;

            let read_method = parse_read(&field.attrs, &input_vis)
                .or_else(|| global_read(&input_vis))
                .map(|ReadAttr { vis, copy }| {
                    if copy || is_copy_type(ty) {
                        quote!(
                            #vis fn #field_ident(&self) -> #ty {
                                self.#field_ident
                            }
                        )
                    } else {
                        quote!(
                            #vis fn #field_ident(&self) -> &#ty {
                                &self.#field_ident
                            }
                        )
                    }
                });

            let write_method = parse_write(&field.attrs, &input_vis)
                .or_else(|| global_write(&input_vis))
                .map(|WriteAttr { vis, kind }| match kind {
                    WriteKind::Mut => {
                        let mut_ident = Ident::new(&format!("{}_mut", field_ident), field_ident.span());
                        quote!(
                            #vis fn #mut_ident(&mut self) -> &mut #ty {
                                &mut self.#field_ident
                            }
                        )
                    }
                    WriteKind::Set => {
                        let set_ident = Ident::new(&format!("set_{}", field_ident), field_ident.span());
                        quote!(
                            #vis fn #set_ident(&mut self, value: impl Into<#ty>) -> &mut Self {
                                self.#field_ident = value.into();
                                self
                            }
                        )
                    }
                    WriteKind::Reducer => {
                        let set_ident = Ident::new(&format!("set_{}", field_ident), field_ident.span());
                        quote!(
                            #vis fn #set_ident(&mut self, reducer: impl FnOnce(#ty) -> #ty) -> &mut Self {
                                self.#field_ident = reducer(core::mem::take(&mut self.#field_ident));
                                self
                            }
                        )
                    }
                });

            Some(quote!(
                #read_method

                #write_method
            ))
        });

    quote!(
        impl #impl_generics #ident #ty_generics #where_clause {
            #(#property_methods)*
        }
    )
    .into()
}
