use crate::error::{CliError, CliErrorExt};
use crate::handlers::resolve::{Resolution, resolve_box};
use crate::manifest::Manifest;
use std::fmt::Write as FmtWrite;
use std::fs;
use std::path::Path;
use tracing::info;

/// Renders the constants of `resolutions` as a Rust module body.
///
/// # Errors
/// Only if writing into the buffer fails.
pub fn render(resolutions: &[Resolution], target: u32) -> Result<String, CliError> {
    let mut w = String::new();

    writeln!(w, "//! Auto-generated by `lbox codegen` for sm_{target}.")?;
    writeln!(w, "//! Do not edit by hand.")?;

    for resolution in resolutions {
        let params = resolution.variant.params;
        writeln!(w)?;
        writeln!(w, "/// Selected from `{}`.", resolution.variant)?;
        writeln!(w, "pub mod {} {{", resolution.name)?;
        writeln!(w, "    pub const BLOCK_DIMENSIONS: u32 = {};", params.block_dimensions)?;
        writeln!(w, "    pub const GRID_DIMENSIONS: u32 = {};", params.grid_dimensions)?;
        writeln!(w, "    pub const SHARED_MEMORY_BYTES: u32 = {};", params.shared_memory_bytes)?;
        writeln!(w, "}}")?;
    }

    Ok(w)
}

/// `lbox codegen`: resolves every box and writes the generated module.
///
/// Nothing is written unless every box resolves.
///
/// # Errors
/// Manifest and resolution errors, or [`CliError::Io`] if `out` cannot be written.
#[allow(clippy::print_stdout)]
pub fn codegen_manifest(path: &Path, sm: Option<u32>, out: Option<&Path>) -> Result<(), CliError> {
    let manifest = Manifest::load(path)?;
    let target = manifest.target(sm)?;

    let resolutions = manifest
        .boxes
        .iter()
        .map(|spec| resolve_box(spec, target))
        .collect::<Result<Vec<_>, _>>()?;
    let source = render(&resolutions, target)?;

    let Some(out) = out else {
        print!("{source}");
        return Ok(());
    };

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .context(format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(out, source).context(format!("Failed to write {}", out.display()))?;

    info!(boxes = resolutions.len(), target, "Generated {}", out.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lbox_launch::{LaunchParams, Variant};

    #[test]
    fn renders_one_module_per_box() {
        let resolutions = [
            Resolution {
                name: "advance".into(),
                variant: Variant::sm(75, LaunchParams::new(256, 64).with_shared_memory(512)),
            },
            Resolution {
                name: "filter".into(),
                variant: Variant::fallback(LaunchParams::new(64, 16)),
            },
        ];

        let source = render(&resolutions, 75).unwrap();

        assert!(source.starts_with("//! Auto-generated by `lbox codegen` for sm_75."));
        assert!(source.contains(
            "pub mod advance {\n    pub const BLOCK_DIMENSIONS: u32 = 256;\n    \
             pub const GRID_DIMENSIONS: u32 = 64;\n    pub const SHARED_MEMORY_BYTES: u32 = 512;\n}"
        ));
        assert!(source.contains("/// Selected from `fallback(block=64 grid=16 shared=0)`."));
        assert_eq!(source.matches("pub mod ").count(), 2);
    }

    #[test]
    fn empty_manifest_renders_header_only() {
        let source = render(&[], 80).unwrap();
        assert_eq!(source.lines().count(), 2);
    }
}
