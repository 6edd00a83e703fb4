pub mod error;
pub mod launch_box;
