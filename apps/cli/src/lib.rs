//! # Launchbox CLI
//!
//! Resolves launch boxes declared in a manifest file for a chosen SM version,
//! either to inspect the selection or to emit Rust constants for builds that
//! cannot use `launch_box!` directly.

pub mod args;
pub mod error;
pub mod handlers;
pub mod manifest;

pub use crate::error::{CliError, CliErrorExt};
pub use crate::manifest::{BoxSpec, Manifest, TargetSm, VariantSpec};
