use lbox_derive::lbox_error;

#[lbox_error]
pub struct LaunchFailure {
    message: String,
}

fn main() {}
