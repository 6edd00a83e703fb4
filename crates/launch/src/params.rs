/// Kernel launch parameters for one hardware generation.
///
/// A plain value: two launches configured with equal fields are
/// indistinguishable. All constructors are `const` so a selected set of
/// parameters collapses into ordinary constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LaunchParams {
    /// Threads per block.
    pub block_dimensions: u32,
    /// Blocks per grid.
    pub grid_dimensions: u32,
    /// Dynamic shared memory to allocate per block.
    pub shared_memory_bytes: u32,
}

impl LaunchParams {
    /// Launch parameters without dynamic shared memory.
    #[must_use]
    pub const fn new(block_dimensions: u32, grid_dimensions: u32) -> Self {
        Self { block_dimensions, grid_dimensions, shared_memory_bytes: 0 }
    }

    /// Returns a copy requesting `bytes` of dynamic shared memory.
    #[must_use]
    pub const fn with_shared_memory(mut self, bytes: u32) -> Self {
        self.shared_memory_bytes = bytes;
        self
    }
}

impl std::fmt::Display for LaunchParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "block={} grid={} shared={}",
            self.block_dimensions, self.grid_dimensions, self.shared_memory_bytes
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_memory_defaults_to_zero() {
        const PARAMS: LaunchParams = LaunchParams::new(128, 32);
        assert_eq!(PARAMS.shared_memory_bytes, 0);
        assert_eq!(PARAMS.with_shared_memory(512).shared_memory_bytes, 512);
        assert_eq!(PARAMS.to_string(), "block=128 grid=32 shared=0");
    }
}
