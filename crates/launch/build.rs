#![allow(clippy::print_stdout)]

#[allow(dead_code, unreachable_pub)]
#[path = "src/version.rs"]
mod version;

use std::env;
use std::fs;
use std::path::PathBuf;

const TARGET_ENV: &str = "LBOX_TARGET_SM";
const CUDA_ENV: &str = "CUDA_COMPUTE_CAP";

fn main() {
    println!("cargo:rerun-if-env-changed={TARGET_ENV}");
    println!("cargo:rerun-if-env-changed={CUDA_ENV}");
    println!("cargo:rerun-if-changed=src/version.rs");

    let requested = [TARGET_ENV, CUDA_ENV]
        .into_iter()
        .find_map(|name| env::var(name).ok().map(|value| (name, value)));

    let target = match requested {
        Some((name, raw)) => version::parse_sm_version(&raw).unwrap_or_else(|| {
            panic!(
                "{name}={raw:?} is not a valid SM version \
                 (expected `75`, `7.5` or `sm_75`; 0 is reserved for the fallback variant)"
            )
        }),
        None => version::DEFAULT_TARGET_SM,
    };

    let out_dir = PathBuf::from(env::var_os("OUT_DIR").expect("cargo sets OUT_DIR for build scripts"));
    fs::write(
        out_dir.join("target_sm.rs"),
        format!("/// SM version this build resolves launch boxes against.\npub const TARGET_SM: u32 = {target};\n"),
    )
    .expect("failed to write target_sm.rs");
}
