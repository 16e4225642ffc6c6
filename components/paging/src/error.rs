use model::{GapSpecError, Status};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Message storage is unavailable: {0}")]
    Unavailable(String),

    #[error("Internal storage error: `{0}`")]
    Internal(String),
}

#[derive(Debug, Error)]
pub enum PagingError {
    #[error("Invalid gap specification")]
    Filter(#[from] GapSpecError),

    #[error("Page size must be positive")]
    InvalidPageSize,

    #[error("Failed to look up messages")]
    Lookup(#[from] LookupError),
}

impl From<&PagingError> for Status {
    fn from(value: &PagingError) -> Self {
        match value {
            PagingError::Filter(e) => Status::from(e),
            PagingError::InvalidPageSize => Status::bad_request(value.to_string()),
            PagingError::Lookup(e) => Status::internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use model::{ErrorCode, GapSpecError, Status};

    use super::{LookupError, PagingError};

    #[test]
    fn test_status() {
        let e = PagingError::from(GapSpecError::malformed("23,25"));
        let status = Status::from(&e);
        assert_eq!(ErrorCode::FilterSeqIds, status.code);
        assert_eq!("23,25", status.message);

        let status = Status::from(&PagingError::InvalidPageSize);
        assert_eq!(ErrorCode::BadRequest, status.code);

        let e = PagingError::from(LookupError::Unavailable("mongo".to_owned()));
        assert_eq!(ErrorCode::Internal, Status::from(&e).code);
    }
}
