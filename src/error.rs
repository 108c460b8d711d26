use thiserror::Error;

/// Outcome of the parse step that precedes reconciliation.
///
/// This is consumed *inside* the reconcilers: a `ParseFailure` selects the
/// fallback path as an ordinary data-flow branch. It never reaches a caller,
/// because every reconciliation completes with a valid result.
#[derive(Error, Debug, Clone)]
pub enum ParseFailure {
    #[error("response is not valid JSON: {0}")]
    NotJson(String),

    #[error("response root is not an array (found {found})")]
    NotAnArray { found: &'static str },
}

/// A string that does not satisfy the 24-lowercase-hex identifier format.
#[derive(Error, Debug, Clone)]
#[error("'{0}' is not a 24-character lowercase hex identifier")]
pub struct IdFormatError(pub String);

/// Errors surfaced by the generation pipeline's external collaborators.
///
/// Reconciliation itself never fails; only the injected model and index
/// seams can. Callers map these to a hard error status, unlike reconciler
/// diagnostics, which map to a warning at worst.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("completion model call failed: {0}")]
    Model(String),

    #[error("similar-case index query failed: {0}")]
    Index(String),
}
