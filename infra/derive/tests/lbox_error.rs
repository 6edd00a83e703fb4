use lbox_derive::lbox_error;
use std::borrow::Cow;
use std::num::ParseIntError;

#[lbox_error]
pub enum TargetError {
    #[error("Invalid SM version{}: {source}", format_context(.context))]
    Parse { source: ParseIntError, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse_with_context(raw: &str) -> Result<u32, TargetError> {
    raw.parse::<u32>().context(format!("LBOX_TARGET_SM={raw}"))
}

fn parse_plain(raw: &str) -> Result<u32, TargetError> {
    Ok(raw.parse::<u32>()?)
}

#[test]
fn source_results_take_context() {
    let err = parse_with_context("sm_x").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid SM version (LBOX_TARGET_SM=sm_x): invalid digit found in string"
    );
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn question_mark_converts_without_context() {
    let err = parse_plain("").unwrap_err();
    assert!(matches!(err, TargetError::Parse { context: None, .. }));
    assert_eq!(err.to_string(), "Invalid SM version: cannot parse integer from empty string");
    assert_eq!(parse_plain("86").unwrap(), 86);
}

#[test]
fn context_replaces_existing_context() {
    let err = parse_with_context("x").context("reading manifest").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid SM version (reading manifest): invalid digit found in string"
    );
}

#[test]
fn strings_become_internal_errors() {
    let borrowed: TargetError = "no boxes declared".into();
    assert_eq!(borrowed.to_string(), "Internal error: no boxes declared");

    let owned: Result<(), TargetError> = Err(format!("box {} is empty", "advance").into());
    let err = owned.context("codegen").unwrap_err();
    assert_eq!(err.to_string(), "Internal error (codegen): box advance is empty");
}

#[test]
fn lbox_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/lbox_error_pass.rs");
    t.compile_fail("tests/ui/lbox_error_source_without_context.rs");
    t.compile_fail("tests/ui/lbox_error_bad_context_type.rs");
    t.compile_fail("tests/ui/lbox_error_unit_variant.rs");
    t.compile_fail("tests/ui/lbox_error_not_enum.rs");
}
