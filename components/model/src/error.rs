use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GapSpecError {
    /// At least one token is not a pair of integers joined by `_`. Carries the whole
    /// specification as the caller sent it.
    #[error("Malformed gap specification `{raw}`")]
    Malformed { raw: String },
}

impl GapSpecError {
    pub fn malformed(raw: &str) -> Self {
        GapSpecError::Malformed {
            raw: raw.to_owned(),
        }
    }

    /// The specification exactly as received.
    pub fn raw(&self) -> &str {
        match self {
            GapSpecError::Malformed { raw } => raw,
        }
    }
}
