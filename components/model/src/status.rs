use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::error::GapSpecError;

/// Result codes surfaced to callers of the paging API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(i16)]
pub enum ErrorCode {
    Ok = 0,
    BadRequest = 400,
    Internal = 500,

    /// The gap specification of a paging request could not be parsed.
    FilterSeqIds = 1002,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub code: ErrorCode,
    pub message: String,
}

impl Status {
    pub fn ok() -> Self {
        Self {
            code: ErrorCode::Ok,
            message: "OK".to_owned(),
        }
    }

    pub fn bad_request(message: String) -> Self {
        Self {
            code: ErrorCode::BadRequest,
            message,
        }
    }

    pub fn internal(message: String) -> Self {
        Self {
            code: ErrorCode::Internal,
            message,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.code == ErrorCode::Ok
    }
}

/// A rejected gap specification is reported with its raw text as the message, so the caller
/// can correct and resend it.
impl From<&GapSpecError> for Status {
    fn from(value: &GapSpecError) -> Self {
        Self {
            code: ErrorCode::FilterSeqIds,
            message: value.raw().to_owned(),
        }
    }
}
