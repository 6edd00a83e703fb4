//! # Launch
//!
//! Build-time selection of kernel launch parameters per GPU generation.
//!
//! A launch box lists [`LaunchParams`] tagged with the SM version they were
//! tuned for, plus an optional fallback. The entry that applies to the SM this
//! build targets is picked during constant evaluation, so the selected values
//! are plain constants at run time and a box with no applicable entry is a
//! compile error.
//!
//! * The target comes from the build environment: `LBOX_TARGET_SM`, then
//!   `CUDA_COMPUTE_CAP`, then [`DEFAULT_TARGET_SM`]. See [`TARGET_SM`].
//! * SM version `0` is reserved for the fallback variant ([`FALLBACK_VERSION`]).
//! * A box may declare at most one fallback.
//!
//! ## Example
//!
//! ```rust
//! use lbox_launch::{LaunchBox, launch_box};
//!
//! launch_box! {
//!     /// Launch configuration of the advance operator.
//!     pub struct Advance {
//!         sm_61(128, 32),
//!         fallback(64, 16),
//!         sm_75(256, 64, 512),
//!     }
//! }
//!
//! let threads = Advance::BLOCK_DIMENSIONS;
//! assert!(threads == 256 || threads == 128 || threads == 64);
//! assert_eq!(Advance::PARAMS, <Advance as LaunchBox>::PARAMS);
//! ```

mod error;
mod launch_box;
mod params;
mod resolve;
pub mod sm;
mod variant;
mod version;

pub use crate::error::ResolveError;
pub use crate::launch_box::LaunchBox;
pub use crate::params::LaunchParams;
pub use crate::resolve::{Step, Trace, resolve, trace, try_resolve, try_select};
pub use crate::variant::Variant;
pub use crate::version::{DEFAULT_TARGET_SM, FALLBACK_VERSION, parse_sm_version};
pub use lbox_derive::launch_box;

include!(concat!(env!("OUT_DIR"), "/target_sm.rs"));
