use std::fmt::{self, Display, Formatter};

/// `far` value meaning the request has no outer limit and continues to the natural end of the
/// stream.
pub const NO_OUTER_LIMIT: i64 = 0;

/// Extent of a single paging request.
///
/// `near` is the cursor the request fetches from; `far` is the outer edge of the request, or
/// [`NO_OUTER_LIMIT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchWindow {
    near: i64,
    far: i64,
}

impl FetchWindow {
    pub fn new(near: i64, far: i64) -> Self {
        Self { near, far }
    }

    pub fn near(&self) -> i64 {
        self.near
    }

    pub fn far(&self) -> i64 {
        self.far
    }

    /// Outer edge of the request, `None` if the request runs to the end of the stream.
    pub fn far_bound(&self) -> Option<i64> {
        if self.is_unbounded() {
            None
        } else {
            Some(self.far)
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.far == NO_OUTER_LIMIT
    }
}

impl Display for FetchWindow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.far_bound() {
            Some(far) => write!(f, "[near={}, far={}]", self.near, far),
            None => write!(f, "[near={}, far=unbounded]", self.near),
        }
    }
}
