//! Named constructors for well-known SM versions.
//!
//! ```rust
//! use lbox_launch::sm::{fallback, sm_61, sm_75};
//! use lbox_launch::{LaunchParams, resolve};
//!
//! const VARIANTS: &[lbox_launch::Variant] = &[
//!     sm_61(LaunchParams::new(128, 32)),
//!     fallback(LaunchParams::new(64, 16)),
//!     sm_75(LaunchParams::new(256, 64).with_shared_memory(512)),
//! ];
//!
//! assert_eq!(resolve(VARIANTS, 70), LaunchParams::new(64, 16));
//! ```

use crate::params::LaunchParams;
use crate::variant::Variant;

pub use crate::version::FALLBACK_VERSION;

/// Variant applicable to an arbitrary SM version.
#[must_use]
pub const fn sm(combined_ver: u32, params: LaunchParams) -> Variant {
    Variant::sm(combined_ver, params)
}

/// Variant applicable when no other entry matches.
#[must_use]
pub const fn fallback(params: LaunchParams) -> Variant {
    Variant::fallback(params)
}

macro_rules! sm_helpers {
    ($($name:ident => $ver:literal),* $(,)?) => {
        $(
            #[doc = concat!("Variant applicable to SM ", stringify!($ver), ".")]
            #[must_use]
            pub const fn $name(params: LaunchParams) -> Variant {
                Variant::sm($ver, params)
            }
        )*

        /// Every SM version with a named helper, newest first.
        pub const KNOWN_VERSIONS: &[u32] = &[$($ver),*];
    };
}

sm_helpers! {
    sm_86 => 86,
    sm_80 => 80,
    sm_75 => 75,
    sm_72 => 72,
    sm_70 => 70,
    sm_62 => 62,
    sm_61 => 61,
    sm_60 => 60,
    sm_53 => 53,
    sm_52 => 52,
    sm_50 => 50,
    sm_37 => 37,
    sm_35 => 35,
    sm_30 => 30,
}
