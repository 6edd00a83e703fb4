use lbox_derive::lbox_error;

#[lbox_error]
pub enum ResolveFailure {
    #[error("no variant applies and no fallback was declared")]
    Unresolved,
}

fn main() {}
