use lbox_launch::launch_box;

launch_box! {
    struct Reduce {
        sm75(256, 64),
    }
}

fn main() {}
