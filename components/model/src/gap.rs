use std::fmt::{self, Display, Formatter};

/// Endpoint value in a gap token meaning the gap is open on that side and extends to the edge
/// of the fetch window.
pub const OPEN_ENDPOINT: i64 = -1;

/// Representation of a known gap in form of `(low, high)`, both ends exclusive.
///
/// Every seq id strictly between `low` and `high` is known to be absent. The endpoints are real
/// messages and never members of the gap. `i64::MIN` and `i64::MAX` stand for a side that is
/// unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gap {
    low: i64,
    high: i64,
}

impl Gap {
    /// Create a gap from two endpoints given in any order.
    pub fn new(a: i64, b: i64) -> Self {
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }

    pub fn low(&self) -> i64 {
        self.low
    }

    pub fn high(&self) -> i64 {
        self.high
    }

    /// Test if the given seq id lies strictly inside the gap.
    pub fn contains(&self, seq_id: i64) -> bool {
        self.low < seq_id && seq_id < self.high
    }

    /// Number of seq ids inside the gap.
    pub fn len(&self) -> u64 {
        (self.high as i128 - self.low as i128 - 1).max(0) as u64
    }

    /// A gap between adjacent, or identical, endpoints covers nothing.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Display for Gap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        if self.low == i64::MIN {
            write!(f, "-inf")?;
        } else {
            write!(f, "{}", self.low)?;
        }
        write!(f, ", ")?;
        if self.high == i64::MAX {
            write!(f, "+inf")?;
        } else {
            write!(f, "{}", self.high)?;
        }
        write!(f, ")")
    }
}
