use lbox_launch::launch_box;

launch_box! {
    struct Reduce {
        fallback(64, 16),
        sm_75(256, 64),
        fallback(32, 8),
    }
}

fn main() {}
