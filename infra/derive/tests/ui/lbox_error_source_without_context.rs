use lbox_derive::lbox_error;

#[lbox_error]
pub enum ManifestError {
    #[error("Bad SM version on line {line}: {source}")]
    Parse { source: std::num::ParseIntError, line: usize },
}

fn main() {}
