use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Attribute, Error, Expr, Ident, Lit, Token, Visibility, braced, parenthesized};

const FALLBACK: &str = "fallback";
const SM: &str = "sm";
const SM_PREFIX: &str = "sm_";

/// `#[attrs] vis struct Name { entry, ... }`
pub struct LaunchBoxInput {
    attrs: Vec<Attribute>,
    vis: Visibility,
    ident: Ident,
    entries: Punctuated<Entry, Token![,]>,
}

/// `helper(arg, ...)`
struct Entry {
    helper: Ident,
    args: Punctuated<Expr, Token![,]>,
}

enum Key {
    Fallback,
    Sm(u32),
}

struct VariantDecl<'a> {
    key: Key,
    block: &'a Expr,
    grid: &'a Expr,
    shared: Option<&'a Expr>,
}

impl Parse for LaunchBoxInput {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        let attrs = input.call(Attribute::parse_outer)?;
        let vis = input.parse()?;
        input.parse::<Token![struct]>()?;
        let ident = input.parse()?;

        let content;
        braced!(content in input);
        let entries = content.parse_terminated(Entry::parse, Token![,])?;

        Ok(Self { attrs, vis, ident, entries })
    }
}

impl Parse for Entry {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        let helper = input.parse()?;
        let content;
        parenthesized!(content in input);
        let args = content.parse_terminated(Expr::parse, Token![,])?;
        Ok(Self { helper, args })
    }
}

/// Expands the `launch_box!` declaration macro.
pub fn expand_launch_box(input: LaunchBoxInput) -> TokenStream {
    let decls = match lower_entries(&input) {
        Ok(decls) => decls,
        Err(err) => return err.to_compile_error(),
    };

    let LaunchBoxInput { attrs, vis, ident, .. } = &input;
    let variants = decls.iter().map(variant_tokens);

    quote! {
        #(#attrs)*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        #vis struct #ident;

        #[automatically_derived]
        impl ::lbox_launch::LaunchBox for #ident {
            const VARIANTS: &'static [::lbox_launch::Variant] = &[#(#variants),*];
        }

        #[allow(unreachable_pub, dead_code)]
        impl #ident {
            pub const PARAMS: ::lbox_launch::LaunchParams =
                <Self as ::lbox_launch::LaunchBox>::PARAMS;
            pub const BLOCK_DIMENSIONS: u32 = Self::PARAMS.block_dimensions;
            pub const GRID_DIMENSIONS: u32 = Self::PARAMS.grid_dimensions;
            pub const SHARED_MEMORY_BYTES: u32 = Self::PARAMS.shared_memory_bytes;
        }

        const _: ::lbox_launch::LaunchParams = #ident::PARAMS;
    }
}

fn lower_entries(input: &LaunchBoxInput) -> Result<Vec<VariantDecl<'_>>, Error> {
    if input.entries.is_empty() {
        return Err(Error::new_spanned(&input.ident, "launch_box requires at least one variant"));
    }

    let mut decls = Vec::with_capacity(input.entries.len());
    let mut errors: Option<Error> = None;
    let mut seen_fallback = false;

    for entry in &input.entries {
        let result = lower_entry(entry).and_then(|decl| {
            if matches!(decl.key, Key::Fallback) {
                if seen_fallback {
                    return Err(Error::new_spanned(
                        &entry.helper,
                        "launch_box accepts at most one `fallback` variant",
                    ));
                }
                seen_fallback = true;
            }
            Ok(decl)
        });

        match result {
            Ok(decl) => decls.push(decl),
            Err(err) => match &mut errors {
                Some(all) => all.combine(err),
                None => errors = Some(err),
            },
        }
    }

    errors.map_or(Ok(decls), Err)
}

fn lower_entry(entry: &Entry) -> Result<VariantDecl<'_>, Error> {
    let name = entry.helper.to_string();
    let args: Vec<&Expr> = entry.args.iter().collect();

    let (key, params) = if name == FALLBACK {
        (Key::Fallback, args.as_slice())
    } else if name == SM {
        let Some((first, rest)) = args.split_first() else {
            return Err(Error::new_spanned(
                &entry.helper,
                "expected `sm(version, block, grid)` or `sm(version, block, grid, shared_memory)`",
            ));
        };
        (Key::Sm(version_literal(first)?), rest)
    } else if let Some(digits) = name.strip_prefix(SM_PREFIX) {
        (Key::Sm(version_suffix(&entry.helper, digits)?), args.as_slice())
    } else {
        return Err(Error::new_spanned(
            &entry.helper,
            format!(
                "unknown launch_box variant `{name}`; expected `sm_NN(..)`, `sm(NN, ..)` or `fallback(..)`"
            ),
        ));
    };

    match *params {
        [block, grid] => Ok(VariantDecl { key, block, grid, shared: None }),
        [block, grid, shared] => Ok(VariantDecl { key, block, grid, shared: Some(shared) }),
        _ => Err(Error::new_spanned(
            &entry.helper,
            "expected `block, grid` or `block, grid, shared_memory` arguments",
        )),
    }
}

fn version_literal(expr: &Expr) -> Result<u32, Error> {
    let Expr::Lit(lit) = expr else {
        return Err(Error::new_spanned(expr, "SM version must be an integer literal"));
    };
    let Lit::Int(int) = &lit.lit else {
        return Err(Error::new_spanned(expr, "SM version must be an integer literal"));
    };
    let version = int.base10_parse::<u32>()?;
    if version == 0 {
        return Err(Error::new_spanned(expr, "SM version 0 is reserved for the fallback variant"));
    }
    Ok(version)
}

fn version_suffix(helper: &Ident, digits: &str) -> Result<u32, Error> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::new_spanned(
            helper,
            format!("unknown launch_box variant `{helper}`; expected `sm_NN(..)`, `sm(NN, ..)` or `fallback(..)`"),
        ));
    }
    match digits.parse::<u32>() {
        Ok(0) => Err(Error::new_spanned(helper, "SM version 0 is reserved for the fallback variant")),
        Ok(version) => Ok(version),
        Err(_) => Err(Error::new_spanned(helper, "SM version does not fit in u32")),
    }
}

fn variant_tokens(decl: &VariantDecl<'_>) -> TokenStream {
    let VariantDecl { block, grid, .. } = decl;
    let params = decl.shared.map_or_else(
        || quote! { ::lbox_launch::LaunchParams::new(#block, #grid) },
        |shared| {
            quote! { ::lbox_launch::LaunchParams::new(#block, #grid).with_shared_memory(#shared) }
        },
    );

    match decl.key {
        Key::Fallback => quote! { ::lbox_launch::Variant::fallback(#params) },
        Key::Sm(version) => quote! { ::lbox_launch::Variant::sm(#version, #params) },
    }
}
