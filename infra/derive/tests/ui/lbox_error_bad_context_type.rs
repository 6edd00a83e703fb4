use lbox_derive::lbox_error;

#[lbox_error]
pub enum ManifestError {
    #[error("Read failed: {source}")]
    Io { source: std::io::Error, context: String },
}

fn main() {}
