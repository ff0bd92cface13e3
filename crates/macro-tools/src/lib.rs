use proc_macro::TokenStream;
use syn::{parse_macro_input, punctuated::Punctuated, DeriveInput, Meta};

mod builder;
mod deref;
mod fields;
mod types;
mod wasm_config;

/// Forwards `Deref` and `DerefMut` to the field marked `#[deref]`, or to the
/// only field of a newtype. `#[deref(ref)]` leaves out `DerefMut`.
///
/// ```compile_fail
/// use convexa_macro_tools::Deref;
///
/// #[derive(Deref)]
/// struct Sum {
///     parts: (u8, u8),
///     #[deref(ref)]
///     total: u8,
/// }
///
/// let mut sum = Sum { parts: (1, 2), total: 3 };
/// *sum = 4;
/// ```
#[proc_macro_derive(Deref, attributes(deref))]
pub fn deref(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    deref::macro_deref(input)
}

/// Generates `{Name}Builder` plus `Default` for both structs, reading
/// `#[default = expr]` per field.
#[proc_macro_derive(Builder, attributes(default, builder, shared))]
pub fn builder(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    builder::macro_builder(input)
}

/// Accessors: `#[r]` for getters, `#[w]` for `_mut` getters, `#[w(set)]` and
/// `#[w(reducer)]` for setters.
#[proc_macro_derive(Fields, attributes(shared, r, w))]
pub fn fields(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    fields::macro_fields(input)
}

/// Turns a plain struct into a javascript facing config with optional
/// camelCase fields, `bind = Target` links it to the builder of a
/// `convexa::prelude` type.
#[proc_macro_attribute]
pub fn wasm_config(attr: TokenStream, item: TokenStream) -> TokenStream {
    let item = parse_macro_input!(item as syn::Item);
    let args = parse_macro_input!(attr with Punctuated::<Meta, syn::Token![,]>::parse_terminated);
    wasm_config::macro_wasm_config(args, item)
}
