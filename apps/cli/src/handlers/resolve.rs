use crate::error::CliError;
use crate::manifest::{BoxSpec, Manifest};
use lbox_launch::{Variant, trace, try_select};
use std::fmt;
use std::path::Path;
use tracing::{debug, info, warn};

/// The variant selected for one box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub name: String,
    pub variant: Variant,
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = if self.variant.is_fallback() {
            "fallback".to_owned()
        } else {
            format!("sm_{}", self.variant.combined_ver)
        };
        write!(f, "{}: {} [{source}]", self.name, self.variant.params)
    }
}

/// Resolves one box for `target`, logging every queue step.
///
/// # Errors
/// * [`CliError::InvalidVariant`] for a malformed entry.
/// * [`CliError::Unresolved`] when nothing applies, the box is empty, or it
///   declares several fallbacks.
pub fn resolve_box(spec: &BoxSpec, target: u32) -> Result<Resolution, CliError> {
    let variants = spec.variants()?;

    for step in trace(&variants, target) {
        debug!(launch_box = %spec.name, target, ?step, "Resolution step");
    }

    let selected = try_select(&variants, target).map_err(|reason| CliError::Unresolved {
        name: spec.name.clone(),
        target,
        reason,
        context: None,
    })?;

    info!(launch_box = %spec.name, target, variant = %selected, "Selected launch parameters");
    Ok(Resolution { name: spec.name.clone(), variant: *selected })
}

/// Resolves every selected box, keeping failures alongside successes.
#[must_use]
pub fn resolve_all(boxes: &[&BoxSpec], target: u32) -> Vec<Result<Resolution, CliError>> {
    boxes.iter().map(|spec| resolve_box(spec, target)).collect()
}

/// `lbox resolve`: prints one line per box, reporting failures on stderr.
///
/// # Errors
/// Manifest errors, or [`CliError::UnresolvedBoxes`] if any box failed.
#[allow(clippy::print_stdout, clippy::print_stderr)]
pub fn resolve_manifest(path: &Path, sm: Option<u32>, name: Option<&str>) -> Result<(), CliError> {
    let manifest = Manifest::load(path)?;
    let target = manifest.target(sm)?;
    let boxes = manifest.select(name)?;

    println!("target: sm_{target}");
    let mut failed = 0;
    for outcome in resolve_all(&boxes, target) {
        match outcome {
            Ok(resolution) => println!("{resolution}"),
            Err(err) => {
                warn!("{err}");
                eprintln!("{err}");
                failed += 1;
            },
        }
    }

    if failed > 0 {
        return Err(CliError::UnresolvedBoxes { count: failed, target, context: None });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::VariantSpec;
    use lbox_launch::{LaunchParams, ResolveError};

    fn sm(version: u32, block: u32, grid: u32, shared_memory: u32) -> VariantSpec {
        VariantSpec { sm: Some(version), fallback: false, block, grid, shared_memory }
    }

    fn fallback(block: u32, grid: u32) -> VariantSpec {
        VariantSpec { sm: None, fallback: true, block, grid, shared_memory: 0 }
    }

    fn advance() -> BoxSpec {
        BoxSpec {
            name: "advance".into(),
            variants: vec![sm(61, 128, 32, 0), fallback(64, 16), sm(75, 256, 64, 512)],
        }
    }

    #[test]
    fn exact_match_is_selected() {
        let resolution = resolve_box(&advance(), 75).unwrap();
        assert_eq!(resolution.variant.params, LaunchParams::new(256, 64).with_shared_memory(512));
        assert_eq!(resolution.to_string(), "advance: block=256 grid=64 shared=512 [sm_75]");
    }

    #[test]
    fn fallback_is_selected_without_match() {
        let resolution = resolve_box(&advance(), 70).unwrap();
        assert!(resolution.variant.is_fallback());
        assert_eq!(resolution.to_string(), "advance: block=64 grid=16 shared=0 [fallback]");
    }

    #[test]
    fn unresolved_box_carries_diagnostic() {
        let spec = BoxSpec { name: "tiled".into(), variants: vec![sm(61, 128, 32, 0)] };
        let err = resolve_box(&spec, 70).unwrap_err();
        assert!(matches!(err, CliError::Unresolved { reason: ResolveError::Unresolved, .. }));
        assert!(err.to_string().contains("no fallback was provided"));
    }

    #[test]
    fn empty_and_double_fallback_boxes_fail() {
        let empty = BoxSpec { name: "empty".into(), variants: vec![] };
        let double =
            BoxSpec { name: "double".into(), variants: vec![fallback(1, 1), fallback(2, 2)] };

        let outcomes = resolve_all(&[&empty, &double, &advance()], 80);
        assert!(matches!(
            outcomes[0],
            Err(CliError::Unresolved { reason: ResolveError::Empty, .. })
        ));
        assert!(matches!(
            outcomes[1],
            Err(CliError::Unresolved { reason: ResolveError::MultipleFallbacks, .. })
        ));
        assert!(outcomes[2].is_ok());
    }
}
