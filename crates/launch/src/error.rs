/// Reasons a launch box cannot produce parameters.
///
/// `Copy` and free of heap data so it can flow through `const fn` resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ResolveError {
    /// No variant matches the target SM and the list has no fallback.
    #[error("launch_box could not find valid launch_params for the target SM and no fallback was provided")]
    Unresolved,

    /// The list declares more than one fallback variant.
    #[error("launch_box declares more than one fallback variant")]
    MultipleFallbacks,

    /// The list declares no variants at all.
    #[error("launch_box declares no variants")]
    Empty,
}

impl ResolveError {
    /// Static diagnostic text, identical to the `Display` output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Unresolved => {
                "launch_box could not find valid launch_params for the target SM and no fallback was provided"
            },
            Self::MultipleFallbacks => "launch_box declares more than one fallback variant",
            Self::Empty => "launch_box declares no variants",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_matches_display() {
        for err in
            [ResolveError::Unresolved, ResolveError::MultipleFallbacks, ResolveError::Empty]
        {
            assert_eq!(err.to_string(), err.message());
        }
    }
}
