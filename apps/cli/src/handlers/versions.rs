use lbox_launch::TARGET_SM;
use lbox_launch::sm::KNOWN_VERSIONS;

/// One line per well-known SM version, marking the build target.
#[must_use]
pub fn version_lines() -> Vec<String> {
    KNOWN_VERSIONS
        .iter()
        .map(|&version| {
            let marker = if version == TARGET_SM { "  (build target)" } else { "" };
            format!("sm_{version}  {}.{}{marker}", version / 10, version % 10)
        })
        .collect()
}

/// `lbox versions`.
#[allow(clippy::print_stdout)]
pub fn list_versions() {
    for line in version_lines() {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_known_version() {
        let lines = version_lines();
        assert_eq!(lines.len(), KNOWN_VERSIONS.len());
        assert!(lines[0].starts_with("sm_86  8.6"));
        assert!(lines.iter().any(|l| l.starts_with("sm_35  3.5")));
    }

    #[test]
    fn build_target_is_marked_when_known() {
        let marked = version_lines().iter().filter(|l| l.ends_with("(build target)")).count();
        assert_eq!(marked, usize::from(KNOWN_VERSIONS.contains(&TARGET_SM)));
    }
}
