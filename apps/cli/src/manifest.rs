//! Launch box manifests.
//!
//! A manifest declares boxes the same way `launch_box!` does, as data:
//!
//! ```toml
//! target_sm = 80
//!
//! [[boxes]]
//! name = "advance"
//! variants = [
//!     { sm = 61, block = 128, grid = 32 },
//!     { fallback = true, block = 64, grid = 16 },
//!     { sm = 75, block = 256, grid = 64, shared_memory = 512 },
//! ]
//! ```
//!
//! Values are layered with `config`: the file first, then `LBOX__*`
//! environment variables (`LBOX__TARGET_SM=86`).

use crate::error::{CliError, CliErrorExt};
use config::{Config, Environment, File};
use fxhash::FxHashSet;
use lbox_launch::{LaunchParams, TARGET_SM, Variant, parse_sm_version};
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use tracing::{debug, info};

const ENV_PREFIX: &str = "LBOX";
const ENV_SEPARATOR: &str = "__";

/// Strict and reserved keywords; a box named after one cannot become a module.
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "Self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    /// Target used when the command line does not name one.
    #[serde(default)]
    pub target_sm: Option<TargetSm>,
    #[serde(default)]
    pub boxes: Vec<BoxSpec>,
}

/// `target_sm` as written, normalized to text for [`parse_sm_version`].
///
/// Accepts integers (`75`), decimals (`7.5`, also what `LBOX__TARGET_SM=7.5`
/// parses to) and strings (`"sm_75"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSm(String);

impl TargetSm {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Combined version, or `None` if the spelling is not an SM version.
    #[must_use]
    pub fn version(&self) -> Option<u32> {
        parse_sm_version(&self.0)
    }
}

impl From<&str> for TargetSm {
    fn from(raw: &str) -> Self {
        Self(raw.to_owned())
    }
}

impl<'de> Deserialize<'de> for TargetSm {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TargetSmVisitor;

        impl Visitor<'_> for TargetSmVisitor {
            type Value = TargetSm;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("an SM version such as 75, 7.5 or \"sm_75\"")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(TargetSm(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(TargetSm(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                // `8.0` must stay dotted; anything finer than tenths is left for parsing to reject.
                let tenths = v * 10.0;
                let text = if (tenths - tenths.round()).abs() < 1e-6 {
                    format!("{v:.1}")
                } else {
                    v.to_string()
                };
                Ok(TargetSm(text))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(TargetSm(v.to_owned()))
            }
        }

        deserializer.deserialize_any(TargetSmVisitor)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BoxSpec {
    pub name: String,
    #[serde(default)]
    pub variants: Vec<VariantSpec>,
}

/// One manifest entry: either `sm = N` or `fallback = true`, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct VariantSpec {
    #[serde(default)]
    pub sm: Option<u32>,
    #[serde(default)]
    pub fallback: bool,
    pub block: u32,
    pub grid: u32,
    #[serde(default)]
    pub shared_memory: u32,
}

impl Manifest {
    /// Loads `path` and applies `LBOX__*` environment overrides.
    ///
    /// # Errors
    /// * [`CliError::Config`] if the file is missing or does not deserialize.
    /// * [`CliError::InvalidBox`] for duplicate box names or names that are not identifiers.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        info!("Loading manifest from {}", path.display());

        let manifest = Config::builder()
            .add_source(File::from(path).required(true))
            .add_source(
                Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR).try_parsing(true),
            )
            .build()
            .context("Failed to build manifest")?
            .try_deserialize::<Self>()
            .context(format!("Failed to deserialize {}", path.display()))?;

        manifest.validate()?;
        debug!(boxes = manifest.boxes.len(), "Manifest loaded");
        Ok(manifest)
    }

    /// Effective target: `requested`, else the manifest's `target_sm`, else the build target.
    ///
    /// # Errors
    /// [`CliError::InvalidTarget`] if the manifest value is not an SM version.
    pub fn target(&self, requested: Option<u32>) -> Result<u32, CliError> {
        if let Some(target) = requested {
            return Ok(target);
        }
        let Some(target_sm) = &self.target_sm else {
            return Ok(TARGET_SM);
        };
        target_sm.version().ok_or_else(|| CliError::InvalidTarget {
            value: target_sm.as_str().to_owned(),
            context: None,
        })
    }

    /// Boxes to act on: all of them, or the one called `name`.
    ///
    /// # Errors
    /// [`CliError::UnknownBox`] if no box is called `name`.
    pub fn select(&self, name: Option<&str>) -> Result<Vec<&BoxSpec>, CliError> {
        let Some(name) = name else {
            return Ok(self.boxes.iter().collect());
        };
        self.boxes
            .iter()
            .find(|b| b.name == name)
            .map(|b| vec![b])
            .ok_or_else(|| CliError::UnknownBox { name: name.to_owned(), context: None })
    }

    fn validate(&self) -> Result<(), CliError> {
        let mut seen = FxHashSet::default();
        for spec in &self.boxes {
            if !is_identifier(&spec.name) {
                return Err(CliError::InvalidBox {
                    name: spec.name.clone(),
                    message: "box names must be Rust identifiers and not keywords".into(),
                    context: None,
                });
            }
            if !seen.insert(spec.name.as_str()) {
                return Err(CliError::InvalidBox {
                    name: spec.name.clone(),
                    message: "declared more than once".into(),
                    context: None,
                });
            }
        }
        Ok(())
    }
}

impl BoxSpec {
    /// Variants in declaration order.
    ///
    /// Fallback count and emptiness are left to resolution, which reports them
    /// the same way the compile-time path does.
    ///
    /// # Errors
    /// [`CliError::InvalidVariant`] for an entry with both or neither of `sm` and
    /// `fallback`, or with the reserved version `0`.
    pub fn variants(&self) -> Result<Vec<Variant>, CliError> {
        self.variants
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                entry.to_variant().map_err(|message| CliError::InvalidVariant {
                    name: self.name.clone(),
                    index,
                    message: message.into(),
                    context: None,
                })
            })
            .collect()
    }
}

impl VariantSpec {
    fn to_variant(self) -> Result<Variant, &'static str> {
        let params =
            LaunchParams::new(self.block, self.grid).with_shared_memory(self.shared_memory);
        match (self.sm, self.fallback) {
            (Some(_), true) => Err("`sm` and `fallback = true` are mutually exclusive"),
            (None, false) => Err("expected `sm = <version>` or `fallback = true`"),
            (Some(0), false) => Err("SM version 0 is reserved for the fallback"),
            (Some(version), false) => Ok(Variant::sm(version, params)),
            (None, true) => Ok(Variant::fallback(params)),
        }
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let starts_well = chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    starts_well
        && name != "_"
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !KEYWORDS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(sm: Option<u32>, fallback: bool) -> VariantSpec {
        VariantSpec { sm, fallback, block: 64, grid: 16, shared_memory: 0 }
    }

    fn manifest(target_sm: Option<TargetSm>, names: &[&str]) -> Manifest {
        Manifest {
            target_sm,
            boxes: names
                .iter()
                .map(|name| BoxSpec { name: (*name).to_owned(), variants: vec![] })
                .collect(),
        }
    }

    #[test]
    fn entries_convert_to_variants() {
        let expected = Variant::sm(75, LaunchParams::new(64, 16));
        assert_eq!(entry(Some(75), false).to_variant(), Ok(expected));
        assert!(entry(None, true).to_variant().unwrap().is_fallback());
        assert!(entry(Some(75), true).to_variant().is_err());
        assert!(entry(None, false).to_variant().is_err());
        assert!(entry(Some(0), false).to_variant().is_err());
    }

    #[test]
    fn invalid_entry_reports_box_and_index() {
        let spec = BoxSpec {
            name: "advance".into(),
            variants: vec![entry(Some(61), false), entry(Some(0), false)],
        };
        let err = spec.variants().unwrap_err();
        assert!(matches!(err, CliError::InvalidVariant { index: 1, .. }));
        assert!(err.to_string().contains("box 'advance'"));
    }

    #[test]
    fn target_precedence() {
        let m = manifest(Some("sm_86".into()), &[]);
        assert_eq!(m.target(Some(70)).unwrap(), 70);
        assert_eq!(m.target(None).unwrap(), 86);
        assert_eq!(manifest(Some("61".into()), &[]).target(None).unwrap(), 61);
        assert_eq!(manifest(None, &[]).target(None).unwrap(), TARGET_SM);
        assert!(matches!(
            manifest(Some("0".into()), &[]).target(None),
            Err(CliError::InvalidTarget { .. })
        ));
    }

    #[test]
    fn box_names_are_validated() {
        assert!(manifest(None, &["advance", "filter_2"]).validate().is_ok());
        assert!(manifest(None, &["2d"]).validate().is_err());
        assert!(manifest(None, &["my-box"]).validate().is_err());
        assert!(manifest(None, &["_"]).validate().is_err());
        assert!(manifest(None, &["advance", "advance"]).validate().is_err());
    }

    #[test]
    fn keyword_box_names_are_rejected() {
        for keyword in ["type", "fn", "mod", "Self", "async", "gen"] {
            let err = manifest(None, &[keyword]).validate().unwrap_err();
            assert!(matches!(err, CliError::InvalidBox { .. }), "{keyword} accepted");
        }
        assert!(manifest(None, &["types", "module", "typed"]).validate().is_ok());
    }

    #[test]
    fn target_sm_accepts_numbers_decimals_and_text() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let cases = [
            ("target_sm = 75", Some(75)),
            ("target_sm = 7.5", Some(75)),
            ("target_sm = 8.0", Some(80)),
            ("target_sm = \"sm_86\"", Some(86)),
            ("target_sm = 7.55", None),
        ];

        for (index, (line, expected)) in cases.into_iter().enumerate() {
            let path = dir.path().join(format!("boxes_{index}.toml"));
            std::fs::write(&path, format!("{line}\n"))?;
            let loaded = Manifest::load(&path)?;
            assert_eq!(loaded.target(None).ok(), expected, "{line}");
        }
        Ok(())
    }

    #[test]
    fn select_by_name() {
        let m = manifest(None, &["advance", "filter"]);
        assert_eq!(m.select(None).unwrap().len(), 2);
        assert_eq!(m.select(Some("filter")).unwrap()[0].name, "filter");
        assert!(matches!(m.select(Some("nope")), Err(CliError::UnknownBox { .. })));
    }
}
