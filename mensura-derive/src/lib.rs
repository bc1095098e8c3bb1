//! Derive macro implementation used by `mensura-core`.
//!
//! `mensura-derive` is an implementation detail of this workspace. The `Unit` derive expands in terms of
//! `crate::Unit` and `crate::UnitDescriptor`, so it is intended to be used by `mensura-core` (or by crates that
//! expose an identical crate-root API).
//!
//! # Generated impls
//!
//! For a unit marker type `MyUnit`, the derive implements `crate::Unit for MyUnit`, binding the unit to its
//! dimension and to a constant `crate::UnitDescriptor`.
//!
//! # Attributes
//!
//! The derive reads a required `#[unit(...)]` attribute:
//!
//! - `symbol = "m"`: unit symbol
//! - `singular = "metre"`, `plural = "metres"`: unit names handed to formatting layers
//! - `dimension = SomeDim`: dimension marker type
//! - `factor = dec!(1000)`: multiplicative factor to the canonical unit of the dimension
//! - `offset = dec!(273.15)` (optional): additive offset to the canonical unit, zero when omitted

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Attribute, DeriveInput, Expr, Ident, LitStr, Token,
};

/// Derive `crate::Unit` for a zero-sized unit marker.
///
/// The derive must be paired with a `#[unit(...)]` attribute providing `symbol`, `singular`, `plural`,
/// `dimension` and `factor`, plus an optional `offset`.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let unit_attr = parse_unit_attribute(&input.attrs)?;

    let UnitAttribute {
        symbol,
        singular,
        plural,
        dimension,
        factor,
        offset,
    } = unit_attr;

    let descriptor = match offset {
        Some(offset) => quote! {
            crate::UnitDescriptor::with_offset(#symbol, #singular, #plural, #factor, #offset)
        },
        None => quote! {
            crate::UnitDescriptor::new(#symbol, #singular, #plural, #factor)
        },
    };

    Ok(quote! {
        impl crate::Unit for #name {
            type Dim = #dimension;
            const DESCRIPTOR: crate::UnitDescriptor = #descriptor;
        }
    })
}

/// Parsed contents of the `#[unit(...)]` attribute.
struct UnitAttribute {
    symbol: LitStr,
    singular: LitStr,
    plural: LitStr,
    dimension: Expr,
    factor: Expr,
    offset: Option<Expr>,
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut singular: Option<LitStr> = None;
        let mut plural: Option<LitStr> = None;
        let mut dimension: Option<Expr> = None;
        let mut factor: Option<Expr> = None;
        let mut offset: Option<Expr> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "symbol" => symbol = Some(input.parse()?),
                "singular" => singular = Some(input.parse()?),
                "plural" => plural = Some(input.parse()?),
                "dimension" => dimension = Some(input.parse()?),
                "factor" => factor = Some(input.parse()?),
                "offset" => offset = Some(input.parse()?),
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let missing = |name: &str| {
            syn::Error::new(
                input.span(),
                format!("missing required attribute `{}`", name),
            )
        };

        Ok(UnitAttribute {
            symbol: symbol.ok_or_else(|| missing("symbol"))?,
            singular: singular.ok_or_else(|| missing("singular"))?,
            plural: plural.ok_or_else(|| missing("plural"))?,
            dimension: dimension.ok_or_else(|| missing("dimension"))?,
            factor: factor.ok_or_else(|| missing("factor"))?,
            offset,
        })
    }
}

fn parse_unit_attribute(attrs: &[Attribute]) -> syn::Result<UnitAttribute> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<UnitAttribute>();
        }
    }

    Err(syn::Error::new(
        proc_macro2::Span::call_site(),
        "missing #[unit(...)] attribute",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;
    use syn::parse_quote;

    #[test]
    fn test_parse_unit_attribute_complete() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", singular = "metre", plural = "metres", dimension = Length, factor = dec!(1))]
            pub struct Meter;
        };

        let attr = parse_unit_attribute(&input.attrs).unwrap();
        assert_eq!(attr.symbol.value(), "m");
        assert_eq!(attr.singular.value(), "metre");
        assert_eq!(attr.plural.value(), "metres");
        assert!(attr.offset.is_none());
    }

    #[test]
    fn test_parse_unit_attribute_with_offset() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "°C", singular = "degree Celsius", plural = "degrees Celsius",
                   dimension = Temperature, factor = dec!(1), offset = dec!(273.15))]
            pub struct Celsius;
        };

        let attr = parse_unit_attribute(&input.attrs).unwrap();
        assert!(attr.offset.is_some());
    }

    #[test]
    fn test_parse_unit_attribute_missing() {
        let input: DeriveInput = parse_quote! {
            pub struct Meter;
        };

        let result = parse_unit_attribute(&input.attrs);
        let err_msg = result.err().unwrap().to_string();
        assert!(err_msg.contains("missing #[unit(...)] attribute"));
    }

    #[test]
    fn test_parse_unit_attribute_missing_required_fields() {
        let cases = [
            (
                quote! { singular = "metre", plural = "metres", dimension = Length, factor = 1 },
                "symbol",
            ),
            (
                quote! { symbol = "m", plural = "metres", dimension = Length, factor = 1 },
                "singular",
            ),
            (
                quote! { symbol = "m", singular = "metre", dimension = Length, factor = 1 },
                "plural",
            ),
            (
                quote! { symbol = "m", singular = "metre", plural = "metres", factor = 1 },
                "dimension",
            ),
            (
                quote! { symbol = "m", singular = "metre", plural = "metres", dimension = Length },
                "factor",
            ),
        ];

        for (tokens, field) in cases {
            let result: syn::Result<UnitAttribute> = syn::parse2(tokens);
            let err_msg = result.err().unwrap().to_string();
            assert!(
                err_msg.contains(&format!("missing required attribute `{}`", field)),
                "unexpected message for `{}`: {}",
                field,
                err_msg
            );
        }
    }

    #[test]
    fn test_parse_unit_attribute_unknown_field() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "m", singular = "metre", plural = "metres", dimension = Length,
                   factor = 1, ratio = 1.0)]
            pub struct Meter;
        };

        let result = parse_unit_attribute(&input.attrs);
        let err_msg = result.err().unwrap().to_string();
        assert!(err_msg.contains("unknown attribute `ratio`"));
    }

    #[test]
    fn test_derive_unit_impl_basic() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "km", singular = "kilometre", plural = "kilometres",
                   dimension = Length, factor = dec!(1000))]
            pub struct Kilometer;
        };

        let code = derive_unit_impl(input).unwrap().to_string();
        assert!(code.contains("impl crate :: Unit for Kilometer"));
        assert!(code.contains("type Dim = Length"));
        assert!(code.contains("crate :: UnitDescriptor :: new"));
        assert!(code.contains("\"kilometres\""));
        assert!(code.contains("dec ! (1000)"));
    }

    #[test]
    fn test_derive_unit_impl_offset_uses_with_offset() {
        let input: DeriveInput = parse_quote! {
            #[unit(symbol = "°F", singular = "degree Fahrenheit", plural = "degrees Fahrenheit",
                   dimension = Temperature, factor = FAHRENHEIT_FACTOR, offset = FAHRENHEIT_OFFSET)]
            pub struct Fahrenheit;
        };

        let code = derive_unit_impl(input).unwrap().to_string();
        assert!(code.contains("crate :: UnitDescriptor :: with_offset"));
        assert!(code.contains("FAHRENHEIT_OFFSET"));
    }

    #[test]
    fn test_unit_attribute_parse_with_trailing_comma() {
        let tokens = quote! {
            symbol = "s", singular = "second", plural = "seconds", dimension = Time, factor = 1,
        };
        let attr: UnitAttribute = syn::parse2(tokens).unwrap();
        assert_eq!(attr.symbol.value(), "s");
    }

    #[test]
    fn test_parse_empty_attribute() {
        let tokens = quote! {};
        let result: syn::Result<UnitAttribute> = syn::parse2(tokens);
        assert!(result.is_err());
    }

    #[test]
    fn test_derive_unit_impl_error_path() {
        let input: DeriveInput = parse_quote! {
            pub struct Meter;
        };
        let err = derive_unit_impl(input).err().unwrap();
        let code = err.to_compile_error().to_string();
        assert!(code.contains("compile_error"));
    }
}
