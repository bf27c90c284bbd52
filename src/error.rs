use thiserror::Error;

/// Errors produced by breakpoint tables and strict resolution.
///
/// Table mutation errors (`DuplicateKey`, `DuplicateValue`, `InvalidThreshold`,
/// `IndexOutOfRange`) are always returned to the caller. Resolution errors
/// (`UnresolvedBreakpoint`, `UnknownBreakpointName`) are only returned by the
/// `try_*` functions in [`resolver`](crate::resolver); the permissive API logs
/// them and falls back to showing content.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BreakpointError {
    #[error("breakpoint `{0}` already exists")]
    DuplicateKey(String),
    #[error("breakpoint threshold {threshold} is already used by `{existing}`")]
    DuplicateValue { threshold: f64, existing: String },
    #[error("breakpoint threshold for `{0}` is NaN")]
    InvalidThreshold(String),
    #[error("breakpoint index {index} out of range for {len} breakpoints")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("no current breakpoint could be resolved")]
    UnresolvedBreakpoint,
    #[error("breakpoint `{0}` is not defined by the provider")]
    UnknownBreakpointName(String),
    #[error("breakpoint name must not be empty")]
    EmptyBreakpointName,
}
