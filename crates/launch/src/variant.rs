use crate::params::LaunchParams;
use crate::version::FALLBACK_VERSION;

/// Launch parameters tagged with the SM version they apply to.
///
/// A `combined_ver` of [`FALLBACK_VERSION`] marks the fallback variant, which
/// applies when no other entry of the list matches the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Variant {
    /// Combined compute capability (`major * 10 + minor`), or `0` for the fallback.
    pub combined_ver: u32,
    pub params: LaunchParams,
}

impl Variant {
    /// Variant applicable only to `combined_ver`.
    ///
    /// Passing `0` declares a fallback; prefer [`Variant::fallback`] for that.
    #[must_use]
    pub const fn sm(combined_ver: u32, params: LaunchParams) -> Self {
        Self { combined_ver, params }
    }

    /// Variant applicable when nothing else matches.
    #[must_use]
    pub const fn fallback(params: LaunchParams) -> Self {
        Self { combined_ver: FALLBACK_VERSION, params }
    }

    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        self.combined_ver == FALLBACK_VERSION
    }

    /// Whether this variant may be selected for `target`.
    #[must_use]
    pub const fn applies_to(&self, target: u32) -> bool {
        self.is_fallback() || self.combined_ver == target
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_fallback() {
            write!(f, "fallback({})", self.params)
        } else {
            write!(f, "sm_{}({})", self.combined_ver, self.params)
        }
    }
}
