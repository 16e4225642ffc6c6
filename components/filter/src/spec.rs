//! Parser of the gap specification carried by paging requests.
//!
//! Wire format: `<token>(","<token>)*` where `<token> = <int>"_"<int>`. An empty string is a
//! valid specification without any gap.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use log::{debug, trace};
use model::gap::OPEN_ENDPOINT;
use model::{Direction, FetchWindow, Gap, GapSpecError};

pub const TOKEN_DELIMITER: char = ',';

pub const PAIR_DELIMITER: char = '_';

/// A parsed, not yet resolved, gap specification.
///
/// Pairs keep the literal order in which the caller sent them; open endpoints are still
/// [`OPEN_ENDPOINT`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GapSpec {
    raw: String,
    pairs: Vec<(i64, i64)>,
}

impl GapSpec {
    /// Parse the whole specification. Any bad token rejects the entire input.
    pub fn parse(raw: &str) -> Result<Self, GapSpecError> {
        if raw.is_empty() {
            return Ok(Self {
                raw: String::new(),
                pairs: vec![],
            });
        }

        let pairs = raw
            .split(TOKEN_DELIMITER)
            .map(|token| parse_token(token).ok_or_else(|| GapSpecError::malformed(raw)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            raw: raw.to_owned(),
            pairs,
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn pairs(&self) -> &[(i64, i64)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Resolve open endpoints against the fetch window and normalize every pair.
    ///
    /// An open endpoint takes the window's `far` bound. If the window has no outer limit, it
    /// extends to infinity along `direction`.
    pub fn resolve(&self, direction: Direction, window: &FetchWindow) -> Vec<Gap> {
        self.pairs
            .iter()
            .map(|&(a, b)| {
                if a != OPEN_ENDPOINT
                    && b != OPEN_ENDPOINT
                    && !direction.is_expected_order(a, b)
                {
                    debug!(
                        "Gap token {}{}{} is out of {} order, accepted as ({}, {})",
                        a,
                        PAIR_DELIMITER,
                        b,
                        direction,
                        a.min(b),
                        a.max(b)
                    );
                }
                Gap::new(
                    resolve_endpoint(a, direction, window),
                    resolve_endpoint(b, direction, window),
                )
            })
            .collect()
    }
}

impl FromStr for GapSpec {
    type Err = GapSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GapSpec::parse(s)
    }
}

impl Display for GapSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn resolve_endpoint(endpoint: i64, direction: Direction, window: &FetchWindow) -> i64 {
    if endpoint != OPEN_ENDPOINT {
        return endpoint;
    }

    let resolved = match (window.far_bound(), direction) {
        (Some(far), _) => far,
        (None, Direction::Forward) => i64::MAX,
        (None, Direction::Backward) => i64::MIN,
    };
    trace!(
        "Resolved open endpoint to {} against window {} pulling {}",
        resolved,
        window,
        direction
    );
    resolved
}

/// Parse `<int>_<int>`. Returns `None` on a wrong delimiter count or a non-numeric component.
fn parse_token(token: &str) -> Option<(i64, i64)> {
    let mut parts = token.split(PAIR_DELIMITER);
    let a = parse_int(parts.next()?)?;
    let b = parse_int(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    Some((a, b))
}

/// Only an optional leading minus followed by ASCII digits is accepted; `i64::from_str` alone
/// would also let a leading `+` through.
fn parse_int(s: &str) -> Option<i64> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<i64>().ok()
}
