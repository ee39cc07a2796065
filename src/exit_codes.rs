//! Exit code constants and error mapping for htmlgrader.
//!
//! # Exit Code Table
//!
//! | Code | Constant | Description |
//! |------|----------|-------------|
//! | 0 | `SUCCESS` | Report produced |
//! | 1 | `FAILURE` | Missing path, flag conflict, load/fetch/selector failure |
//!
//! Every failure mode exits 1. That includes transport errors during a URL
//! fetch: the original tool fell through to exit 0 after logging one, which
//! made fetch failures indistinguishable from success in scripts; here they
//! exit 1 like every other failure.

use crate::error::GraderError;

/// Type-safe exit code for htmlgrader operations.
///
/// Use the named constants for comparisons and [`as_i32()`](Self::as_i32)
/// for `std::process::exit()`. The numeric values are part of the CLI
/// contract and will not change in 1.x releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(i32);

impl ExitCode {
    /// Success - report produced on stdout
    pub const SUCCESS: ExitCode = ExitCode(0);

    /// Failure - diagnostic printed, no report produced
    pub const FAILURE: ExitCode = ExitCode(1);

    /// Get the numeric value for `std::process::exit()`.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }

    /// Create an `ExitCode` from a raw i32 value.
    #[must_use]
    pub const fn from_i32(code: i32) -> Self {
        ExitCode(code)
    }
}

impl From<i32> for ExitCode {
    fn from(code: i32) -> Self {
        ExitCode::from_i32(code)
    }
}

/// Map a `GraderError` to its exit code.
///
/// The match is spelled out per category so a future distinct code only
/// needs a new arm, but every current failure maps to [`ExitCode::FAILURE`].
#[must_use]
pub fn error_to_exit_code(error: &GraderError) -> ExitCode {
    match error {
        GraderError::ChecksRead { .. }
        | GraderError::ChecksParse { .. }
        | GraderError::Selector { .. }
        | GraderError::DocumentRead { .. }
        | GraderError::Fetch { .. }
        | GraderError::Report(_)
        | GraderError::Io(_) => ExitCode::FAILURE,
    }
}
