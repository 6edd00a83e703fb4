//! Selection of one [`Variant`] out of a declared list.
//!
//! The list is consumed as a queue. The head is inspected at each step:
//!
//! * a fallback is moved behind every remaining entry,
//! * an entry for the target SM is selected immediately,
//! * any other entry is discarded.
//!
//! Once a single entry remains it is selected if it is the fallback or targets
//! the SM; otherwise resolution fails. Exact matches therefore win wherever
//! they are declared, the first of several duplicates wins, and the fallback
//! is only reached after every specific entry has been discarded.
//!
//! Everything here is `const`, so a resolution evaluated in a `const` item
//! fails the build instead of producing a runtime error.

use crate::error::ResolveError;
use crate::params::LaunchParams;
use crate::variant::Variant;

/// One decision taken while walking a list. Indices refer to declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// The fallback was moved behind the remaining entries.
    Requeue { index: usize },
    /// The entry neither matched nor was the fallback and was discarded.
    Drop { index: usize },
    /// The entry was selected.
    Select { index: usize },
    /// The last remaining entry does not apply to the target.
    Fail { index: usize },
}

impl Step {
    /// Whether the walk ends with this step.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Select { .. } | Self::Fail { .. })
    }
}

/// Queue state: entries `head..` still pending, plus the requeued fallback.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    head: usize,
    deferred: Option<usize>,
}

impl Cursor {
    const fn new() -> Self {
        Self { head: 0, deferred: None }
    }

    const fn remaining(&self, len: usize) -> usize {
        let deferred = if self.deferred.is_some() { 1 } else { 0 };
        len - self.head + deferred
    }

    /// Expects at least one remaining entry and at most one fallback in `variants`.
    const fn step(self, variants: &[Variant], target: u32) -> (Self, Step) {
        let len = variants.len();

        if self.remaining(len) == 1 {
            let index = match self.deferred {
                Some(index) if self.head == len => index,
                _ => self.head,
            };
            let step = if variants[index].applies_to(target) {
                Step::Select { index }
            } else {
                Step::Fail { index }
            };
            return (self, step);
        }

        // Two or more entries remain and at most one of them is deferred, so the head is in bounds.
        let index = self.head;
        let head = &variants[index];

        if head.is_fallback() {
            (Self { head: index + 1, deferred: Some(index) }, Step::Requeue { index })
        } else if head.combined_ver == target {
            (Self { head: index + 1, deferred: self.deferred }, Step::Select { index })
        } else {
            (Self { head: index + 1, deferred: self.deferred }, Step::Drop { index })
        }
    }
}

const fn fallback_count(variants: &[Variant]) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i < variants.len() {
        if variants[i].is_fallback() {
            count += 1;
        }
        i += 1;
    }
    count
}

const fn validate(variants: &[Variant]) -> Result<(), ResolveError> {
    if variants.is_empty() {
        return Err(ResolveError::Empty);
    }
    if fallback_count(variants) > 1 {
        return Err(ResolveError::MultipleFallbacks);
    }
    Ok(())
}

/// Selects the variant that applies to `target`.
///
/// # Errors
/// * [`ResolveError::Empty`] for an empty list.
/// * [`ResolveError::MultipleFallbacks`] when more than one fallback is declared.
/// * [`ResolveError::Unresolved`] when no entry matches and there is no fallback.
pub const fn try_select(variants: &[Variant], target: u32) -> Result<&Variant, ResolveError> {
    if let Err(err) = validate(variants) {
        return Err(err);
    }

    let mut cursor = Cursor::new();
    loop {
        let (next, step) = cursor.step(variants, target);
        match step {
            Step::Select { index } => return Ok(&variants[index]),
            Step::Fail { .. } => return Err(ResolveError::Unresolved),
            Step::Requeue { .. } | Step::Drop { .. } => cursor = next,
        }
    }
}

/// Resolves the launch parameters that apply to `target`.
///
/// # Errors
/// See [`try_select`].
pub const fn try_resolve(variants: &[Variant], target: u32) -> Result<LaunchParams, ResolveError> {
    match try_select(variants, target) {
        Ok(variant) => Ok(variant.params),
        Err(err) => Err(err),
    }
}

/// Resolves the launch parameters that apply to `target`, panicking otherwise.
///
/// Meant for `const` contexts, where the panic becomes a compile error:
///
/// ```rust,compile_fail
/// use lbox_launch::{LaunchParams, Variant, resolve};
///
/// const _: LaunchParams = resolve(&[Variant::sm(61, LaunchParams::new(128, 32))], 70);
///
/// fn main() {}
/// ```
///
/// # Panics
/// When [`try_resolve`] would return an error.
#[must_use]
pub const fn resolve(variants: &[Variant], target: u32) -> LaunchParams {
    match try_resolve(variants, target) {
        Ok(params) => params,
        Err(ResolveError::Unresolved) => panic!(
            "launch_box could not find valid launch_params for the target SM and no fallback was provided"
        ),
        Err(ResolveError::MultipleFallbacks) => {
            panic!("launch_box declares more than one fallback variant")
        },
        Err(ResolveError::Empty) => panic!("launch_box declares no variants"),
    }
}

/// Replays the resolution of `variants` for `target` step by step.
///
/// Yields nothing for lists [`try_select`] rejects before walking (empty, or
/// with several fallbacks). Otherwise the last step is always terminal.
#[must_use]
pub fn trace(variants: &[Variant], target: u32) -> Trace<'_> {
    let cursor = validate(variants).ok().map(|()| Cursor::new());
    Trace { variants, target, cursor }
}

/// Iterator returned by [`trace`].
#[derive(Debug, Clone)]
pub struct Trace<'a> {
    variants: &'a [Variant],
    target: u32,
    cursor: Option<Cursor>,
}

impl Iterator for Trace<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let (next, step) = self.cursor?.step(self.variants, self.target);
        self.cursor = (!step.is_terminal()).then_some(next);
        Some(step)
    }
}
