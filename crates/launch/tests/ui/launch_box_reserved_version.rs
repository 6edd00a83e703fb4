use lbox_launch::launch_box;

launch_box! {
    struct Reduce {
        sm(0, 64, 16),
    }
}

fn main() {}
