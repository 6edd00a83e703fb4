use lbox_launch::launch_box;

launch_box! {
    struct Reduce {
        sm_75(256),
    }
}

fn main() {}
