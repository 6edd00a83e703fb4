//! Builds small dependent crates to check what a consumer sees when a launch
//! box cannot be resolved.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::{TempDir, tempdir};

const UNRESOLVED: &str = "launch_box could not find valid launch_params for the target SM and no fallback was provided";

struct Consumer {
    root: TempDir,
}

impl Consumer {
    fn new() -> Self {
        Self { root: tempdir().unwrap() }
    }

    /// `cargo check` of a crate named `name` whose `lib.rs` is `source`, built for SM 75.
    fn check(&self, name: &str, source: &str) -> Command {
        let dir = self.root.path().join(name);
        fs::create_dir_all(dir.join("src")).unwrap();

        let launch = Path::new(env!("CARGO_MANIFEST_DIR"));
        fs::write(
            dir.join("Cargo.toml"),
            format!(
                "[package]\nname = \"{name}\"\nversion = \"0.0.0\"\nedition = \"2024\"\n\
                 publish = false\n\n[dependencies]\nlbox-launch = {{ path = '{}' }}\n\n[workspace]\n",
                launch.display()
            ),
        )
        .unwrap();
        fs::write(dir.join("src/lib.rs"), source).unwrap();

        let lockfile = launch.join("../../Cargo.lock");
        if lockfile.exists() {
            fs::copy(&lockfile, dir.join("Cargo.lock")).unwrap();
        }

        let mut cmd = Command::new(env!("CARGO"));
        cmd.args(["check", "--offline", "--quiet"])
            .current_dir(&dir)
            .env("CARGO_TARGET_DIR", self.root.path().join("target"))
            .env("LBOX_TARGET_SM", "75")
            .env_remove("CUDA_COMPUTE_CAP");
        cmd
    }
}

#[test]
fn consumers_see_the_fixed_diagnostic() {
    let consumer = Consumer::new();

    consumer
        .check(
            "resolvable",
            "lbox_launch::launch_box! {\n    pub struct Reduce {\n        sm_75(256, 64),\n    }\n}\n",
        )
        .assert()
        .success();

    consumer
        .check(
            "unresolved",
            "lbox_launch::launch_box! {\n    pub struct Unreachable {\n        sm(1, 32, 8),\n    }\n}\n",
        )
        .assert()
        .failure()
        .stderr(predicate::str::contains(UNRESOLVED))
        .stderr(predicate::str::contains("E0080"));

    consumer
        .check(
            "doubled",
            r"use lbox_launch::{LaunchBox, LaunchParams, Variant};

pub struct Doubled;

impl LaunchBox for Doubled {
    const VARIANTS: &'static [Variant] = &[
        Variant::fallback(LaunchParams::new(64, 16)),
        Variant::fallback(LaunchParams::new(32, 8)),
    ];
}

pub const DOUBLED: LaunchParams = Doubled::PARAMS;
",
        )
        .assert()
        .failure()
        .stderr(predicate::str::contains("launch_box declares more than one fallback variant"));
}
