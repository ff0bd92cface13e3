use quote::ToTokens;

// read by value instead of by reference
const COPY_TYPES: [&str; 16] = [
    "bool", "u8", "u16", "u32", "u64", "u128", "usize", "i8", "i16", "i32", "i64", "i128",
    "isize", "f32", "f64", "FloatNum",
];

pub(crate) fn is_copy_type(ty: &syn::Type) -> bool {
    match ty {
        syn::Type::Path(path) => {
            let name = path.into_token_stream().to_string();
            COPY_TYPES.iter().any(|copy_type| *copy_type == name)
        }
        _ => false,
    }
}

pub(crate) fn underscore_to_camelcase(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut capitalize_next = false;

    for c in input.chars() {
        if c == '_' {
            capitalize_next = true;
        } else if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camelcase() {
        assert_eq!(underscore_to_camelcase("max_gjk_iterations"), "maxGjkIterations");
        assert_eq!(underscore_to_camelcase("epsilon"), "epsilon");
    }

    #[test]
    fn test_copy_type() {
        let ty: syn::Type = syn::parse_quote!(usize);
        assert!(is_copy_type(&ty));
        let ty: syn::Type = syn::parse_quote!(Vec<usize>);
        assert!(!is_copy_type(&ty));
    }
}
