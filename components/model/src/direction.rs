use strum_macros::{Display, EnumString};

/// Direction in which a paging request walks the message stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Direction {
    /// Pull newer messages, cursor ascends.
    #[strum(to_string = "forward", serialize = "after")]
    Forward,

    /// Pull older messages, cursor descends.
    #[strum(to_string = "backward", serialize = "before")]
    Backward,
}

impl Direction {
    /// Map the `after` flag carried by legacy paging requests.
    pub fn from_after(after: bool) -> Self {
        if after {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    pub fn is_forward(&self) -> bool {
        matches!(self, Direction::Forward)
    }

    /// Test if the literal order of a gap token's endpoints is the one callers are expected
    /// to send: ascending when pulling forward, descending when pulling backward.
    ///
    /// Equal endpoints are accepted in either direction.
    pub fn is_expected_order(&self, a: i64, b: i64) -> bool {
        match self {
            Direction::Forward => a <= b,
            Direction::Backward => a >= b,
        }
    }

    /// Step one seq id further along the direction of travel.
    pub fn step(&self, seq_id: i64) -> i64 {
        match self {
            Direction::Forward => seq_id.saturating_add(1),
            Direction::Backward => seq_id.saturating_sub(1),
        }
    }
}
