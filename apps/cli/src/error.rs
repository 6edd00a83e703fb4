use lbox_launch::ResolveError;
use std::borrow::Cow;

/// Errors raised while loading a manifest or acting on its boxes.
#[lbox_derive::lbox_error]
pub enum CliError {
    /// The manifest could not be read, layered, or deserialized.
    #[error("Manifest error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },

    /// A box declaration is malformed (bad name, duplicate name).
    #[error("Invalid box '{name}'{}: {message}", format_context(.context))]
    InvalidBox { name: String, message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A variant entry of a box is malformed.
    #[error("Invalid variant #{index} of box '{name}'{}: {message}", format_context(.context))]
    InvalidVariant {
        name: String,
        index: usize,
        message: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    /// `--name` selected a box the manifest does not declare.
    #[error("Unknown box '{name}'{}", format_context(.context))]
    UnknownBox { name: String, context: Option<Cow<'static, str>> },

    /// The manifest `target_sm` is not a valid SM version.
    #[error("Invalid target SM '{value}'{}", format_context(.context))]
    InvalidTarget { value: String, context: Option<Cow<'static, str>> },

    /// A box has no variant for the target SM.
    #[error("Box '{name}' for sm_{target}{}: {reason}", format_context(.context))]
    Unresolved {
        name: String,
        target: u32,
        reason: ResolveError,
        context: Option<Cow<'static, str>>,
    },

    /// One or more boxes failed to resolve; each was reported individually.
    #[error("{count} launch box(es) could not be resolved for sm_{target}{}", format_context(.context))]
    UnresolvedBoxes { count: usize, target: u32, context: Option<Cow<'static, str>> },

    #[error("I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Formatting error{}: {source}", format_context(.context))]
    Format { source: std::fmt::Error, context: Option<Cow<'static, str>> },
}
