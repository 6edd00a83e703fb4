//! SM version identifiers.
//!
//! Shared between the library and its build script, so this file must not
//! depend on anything outside `core`/`std`.

/// Key reserved for the fallback variant. Never a real SM version.
pub const FALLBACK_VERSION: u32 = 0;

/// Target used when neither `LBOX_TARGET_SM` nor `CUDA_COMPUTE_CAP` is set.
pub const DEFAULT_TARGET_SM: u32 = 75;

/// Parses a combined compute capability (`major * 10 + minor`).
///
/// Accepts the plain combined form (`75`), the dotted form reported by
/// `nvidia-smi` (`7.5`) and the `nvcc` architecture spelling (`sm_75`,
/// `compute_75`). Returns `None` for malformed input and for `0`, which is
/// reserved for the fallback variant.
///
/// # Example
///
/// ```rust
/// use lbox_launch::parse_sm_version;
///
/// assert_eq!(parse_sm_version("8.6"), Some(86));
/// assert_eq!(parse_sm_version("sm_120"), Some(120));
/// assert_eq!(parse_sm_version("0"), None);
/// ```
#[must_use]
pub fn parse_sm_version(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    let digits = ["sm_", "SM_", "compute_"]
        .iter()
        .find_map(|prefix| trimmed.strip_prefix(prefix))
        .unwrap_or(trimmed);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return None;
    }

    let version = match digits.split_once('.') {
        Some((major, minor)) => {
            let major: u32 = major.parse().ok()?;
            let minor: u32 = minor.parse().ok()?;
            if minor > 9 {
                return None;
            }
            major.checked_mul(10)?.checked_add(minor)?
        },
        None => digits.parse().ok()?,
    };

    (version != FALLBACK_VERSION).then_some(version)
}
