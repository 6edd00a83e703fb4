use lbox_launch::{LaunchBox, launch_box};

const WARP: u32 = 32;

launch_box! {
    /// Block sizes for the filter operator.
    pub struct Filter {
        sm_86(WARP * 16, 80, 48 * 1024),
        sm(89, WARP * 16, 128),
        fallback(WARP * 4, 16),
    }
}

fn main() {
    assert_eq!(Filter::PARAMS, <Filter as LaunchBox>::PARAMS);
    assert_eq!(<Filter as LaunchBox>::VARIANTS.len(), 3);
}
