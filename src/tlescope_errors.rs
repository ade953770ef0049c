use thiserror::Error;

/// Errors surfaced at the crate boundary.
///
/// Parsing and element derivation never fail: malformed fields and solver
/// non-convergence are carried as data. Only reading records from disk and
/// validating user-supplied parameters can return an error.
#[derive(Error, Debug)]
pub enum TlescopeError {
    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid derivation parameter: {0}")]
    InvalidParameter(String),
}

impl PartialEq for TlescopeError {
    fn eq(&self, other: &Self) -> bool {
        use TlescopeError::*;
        match (self, other) {
            // io::Error is not comparable: equal if same variant and kind
            (IoError(a), IoError(b)) => a.kind() == b.kind(),
            (InvalidParameter(a), InvalidParameter(b)) => a == b,
            _ => false,
        }
    }
}
