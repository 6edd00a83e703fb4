use crate::params::LaunchParams;
use crate::resolve::resolve;
use crate::variant::Variant;
use crate::TARGET_SM;

/// A declared set of per-SM launch parameters.
///
/// Usually implemented through [`launch_box!`](crate::launch_box), which also
/// forces [`LaunchBox::PARAMS`] to be evaluated so an unresolvable box fails
/// the build where it is declared:
///
/// ```rust,compile_fail
/// lbox_launch::launch_box! {
///     struct Unreachable {
///         sm(1, 32, 8),
///     }
/// }
///
/// fn main() {}
/// ```
pub trait LaunchBox {
    /// Variants in declaration order.
    const VARIANTS: &'static [Variant];

    /// Parameters selected for [`TARGET_SM`].
    const PARAMS: LaunchParams = resolve(Self::VARIANTS, TARGET_SM);
}
