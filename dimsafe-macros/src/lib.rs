//! Unit-literal macro used by `dimsafe`.
//!
//! `dimsafe-macros` is an implementation detail of this workspace. The `qty!` macro expands in terms of
//! `::dimsafe::literals`, so it is intended to be used through the `dimsafe` facade crate, which re-exports it.
//!
//! # Expansion
//!
//! Rust already lexes `1_km` as the integer literal `1_` with the suffix `km`, and `2.5_m_per_s` as the float
//! literal `2.5_` with the suffix `m_per_s`. `qty!` walks its input (including nested groups) and rewrites every
//! numeric literal that carries a non-primitive suffix:
//!
//! ```text
//! qty!(1_km + 250_m)   =>   ::dimsafe::literals::km(1.0) + ::dimsafe::literals::m(250.0)
//! ```
//!
//! Literals without a suffix, with a primitive suffix (`2u8`, `1.5f32`), and all other tokens pass through
//! unchanged. An unknown suffix becomes a call to a function that does not exist, so it is reported by the
//! compiler at the literal.
//!
//! Suffixes starting with `e` or `E` cannot be written after a decimal literal (`1_eV` lexes as a malformed
//! exponent), so no built-in unit uses one.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::{Group, Ident, Literal, TokenStream as TokenStream2, TokenTree};
use quote::quote_spanned;
use syn::Lit;

/// Rewrites suffixed numeric literals into unit constructors.
///
/// `qty!(3_km)` is `dimsafe::literals::km(3.0)`: a `Quantity<Length>` of 3000 m. Literals can be
/// mixed with any other expression tokens, so `qty!(1_km + 500_m)` and `qty!(2_kg * 9.81_m_per_s2)`
/// are both valid. The numeric part is always read as an `f64`.
#[proc_macro]
pub fn qty(input: TokenStream) -> TokenStream {
    match rewrite(input.into()) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn rewrite(input: TokenStream2) -> syn::Result<TokenStream2> {
    let mut out = TokenStream2::new();
    for tree in input {
        match tree {
            TokenTree::Group(group) => {
                let mut rewritten = Group::new(group.delimiter(), rewrite(group.stream())?);
                rewritten.set_span(group.span());
                out.extend([TokenTree::Group(rewritten)]);
            }
            TokenTree::Literal(literal) => out.extend(rewrite_literal(literal)?),
            other => out.extend([other]),
        }
    }
    Ok(out)
}

/// Suffixes the compiler gives meaning to; these literals are left alone.
const PRIMITIVE_SUFFIXES: &[&str] = &[
    "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize", "f32",
    "f64",
];

fn rewrite_literal(literal: Literal) -> syn::Result<TokenStream2> {
    let span = literal.span();
    let (suffix, value) = match Lit::new(literal.clone()) {
        Lit::Int(lit) => (lit.suffix().to_string(), lit.base10_parse::<f64>()),
        Lit::Float(lit) => (lit.suffix().to_string(), lit.base10_parse::<f64>()),
        _ => return Ok(TokenTree::Literal(literal).into()),
    };

    if suffix.is_empty() || PRIMITIVE_SUFFIXES.contains(&suffix.as_str()) {
        return Ok(TokenTree::Literal(literal).into());
    }

    let value = value?;
    if !value.is_finite() {
        return Err(syn::Error::new(
            span,
            format!("`{literal}` does not fit in an f64"),
        ));
    }

    let unit = Ident::new(&suffix, span);
    let mut number = Literal::f64_unsuffixed(value);
    number.set_span(span);

    Ok(quote_spanned! {span=>
        ::dimsafe::literals::#unit(#number)
    })
}
