use lbox_launch::launch_box;

launch_box! {
    struct Reduce {}
}

fn main() {}
