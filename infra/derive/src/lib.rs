#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the launchbox workspace.
//!
//! * [`launch_box!`] declares a set of per-SM kernel launch parameters that
//!   is resolved while compiling.
//! * [`lbox_error`] turns an enum into a context-aware `thiserror` error.
//!
//! ## Usage
//! Consumers normally reach the macros through their re-exports
//! (`lbox_launch::launch_box`). The examples below are `ignore`d because they
//! expand to paths of crates this one cannot depend on.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Declares a launch box: kernel launch parameters tuned per SM version.
///
/// Each entry is one of:
///
/// * `sm_NN(block, grid)` / `sm_NN(block, grid, shared_memory)` for SM version `NN`,
/// * `sm(NN, block, grid[, shared_memory])` for versions spelled as a literal,
/// * `fallback(block, grid[, shared_memory])` used when no other entry matches.
///
/// The generated unit struct implements `lbox_launch::LaunchBox` and exposes
/// `PARAMS`, `BLOCK_DIMENSIONS`, `GRID_DIMENSIONS` and `SHARED_MEMORY_BYTES`
/// as associated constants resolved against `lbox_launch::TARGET_SM`.
///
/// # Errors
/// Emits a compile-time error when:
/// * the box is empty or declares more than one `fallback`,
/// * an entry uses SM version `0`, an unknown helper, or the wrong number of arguments,
/// * no entry applies to the target SM and no `fallback` is declared.
///
/// # Example
///
/// ```rust,ignore
/// use lbox_launch::launch_box;
///
/// launch_box! {
///     pub struct Advance {
///         sm_61(128, 32),
///         fallback(64, 16),
///         sm_75(256, 64, 512),
///     }
/// }
///
/// let threads = Advance::BLOCK_DIMENSIONS;
/// ```
#[proc_macro]
pub fn launch_box(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as macros::launch_box::LaunchBoxInput);
    macros::launch_box::expand_launch_box(input).into()
}

/// Attribute macro for workspace error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` when missing.
/// * **Context Support**: Generates a companion `<Name>Ext` trait that adds `.context()`
///   to `Result<T, Name>` and to `Result<T, Source>` for every source-carrying variant.
/// * **Conversions**: Implements `From<Source>` for variants with a `source` field
///   (or a field marked `#[source]`/`#[from]`), enabling `?`.
/// * **Internal Fallback**: `From<&'static str>` and `From<String>` when an `Internal`
///   variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with named-field variants.
/// 2. Variants with a source must also have `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use lbox_derive::lbox_error;
/// use std::borrow::Cow;
///
/// #[lbox_error]
/// pub enum ManifestError {
///     #[error("I/O error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &str) -> Result<String, ManifestError> {
///     std::fs::read_to_string(path).context("Reading manifest")
/// }
/// ```
#[proc_macro_attribute]
pub fn lbox_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_error(input).into()
}
