use lbox_derive::lbox_error;
use std::borrow::Cow;

#[lbox_error]
#[derive(Debug)]
pub enum CodegenError {
    #[error("Write failed{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Render failed{}: {source}", format_context(.context))]
    Format { source: std::fmt::Error, context: Option<Cow<'static, str>> },

    #[cfg(unix)]
    #[error("Unsupported output{}: {path}", format_context(.context))]
    Unsupported { path: String, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn render(name: &str) -> Result<String, CodegenError> {
    use std::fmt::Write;
    let mut out = String::new();
    writeln!(out, "pub mod {name} {{}}")?;
    Ok(out)
}

fn emit(path: &str) -> Result<(), CodegenError> {
    let source = render("advance").context("Rendering launch constants")?;
    std::fs::write(path, source).context(format!("Writing {path}"))
}

fn main() {
    let _ = emit("/nonexistent/launch.rs");
    let _: CodegenError = "no boxes".into();
    let _: CodegenError = String::from("no boxes").into();
}
