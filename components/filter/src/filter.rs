use log::debug;
use model::{Direction, FetchWindow, Gap, GapSpecError};

use crate::spec::GapSpec;

/// Membership predicate over the gaps a paging request declares as already known to be absent.
///
/// A filter is built once per request and is immutable afterwards. It may be shared across
/// threads and queried any number of times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GapFilter {
    direction: Direction,
    window: FetchWindow,
    gaps: Vec<Gap>,
}

impl GapFilter {
    /// Parse and resolve `spec` for a request pulling `direction` from `near` towards `far`.
    ///
    /// `far == 0` means the request has no outer limit.
    ///
    /// # Errors
    /// [`GapSpecError::Malformed`] carrying the whole `spec` if any token is not a pair of
    /// integers.
    pub fn build(
        spec: &str,
        direction: Direction,
        near: i64,
        far: i64,
    ) -> Result<Self, GapSpecError> {
        let spec = GapSpec::parse(spec)?;
        Ok(Self::with_spec(&spec, direction, FetchWindow::new(near, far)))
    }

    pub fn with_spec(spec: &GapSpec, direction: Direction, window: FetchWindow) -> Self {
        let gaps = spec.resolve(direction, &window);
        debug!(
            "Built gap filter with {} gap(s) pulling {} within {}",
            gaps.len(),
            direction,
            window
        );
        Self {
            direction,
            window,
            gaps,
        }
    }

    /// `true` means `seq_id` is a confirmed absence and storage need not be checked; `false`
    /// means unknown.
    pub fn is_known_gap(&self, seq_id: i64) -> bool {
        self.gaps.iter().any(|gap| gap.contains(seq_id))
    }

    pub fn gaps(&self) -> &[Gap] {
        &self.gaps
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn window(&self) -> &FetchWindow {
        &self.window
    }

    pub fn is_empty(&self) -> bool {
        self.gaps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use model::{Direction, GapSpecError};

    use super::GapFilter;

    #[test]
    fn test_forward_bounded() -> Result<(), Box<dyn Error>> {
        let filter = GapFilter::build("3_5,7_10", Direction::Forward, 1, 11)?;
        assert_eq!(filter.is_known_gap(4), true);
        assert_eq!(filter.is_known_gap(3), false);
        assert_eq!(filter.is_known_gap(6), false);
        assert_eq!(filter.is_known_gap(8), true);
        assert_eq!(filter.is_known_gap(10), false);
        assert_eq!(filter.is_known_gap(11), false);
        Ok(())
    }

    #[test]
    fn test_backward_bounded() -> Result<(), Box<dyn Error>> {
        let filter = GapFilter::build("13_9,7_4,3_1", Direction::Backward, 0, 14)?;
        assert_eq!(filter.is_known_gap(4), false);
        assert_eq!(filter.is_known_gap(5), true);
        assert_eq!(filter.is_known_gap(2), true);
        assert_eq!(filter.is_known_gap(8), false);
        assert_eq!(filter.is_known_gap(12), true);
        assert_eq!(filter.is_known_gap(13), false);
        Ok(())
    }

    #[test]
    fn test_forward_unbounded() -> Result<(), Box<dyn Error>> {
        let filter = GapFilter::build("3_5,7_-1", Direction::Forward, 9, 0)?;
        assert_eq!(filter.is_known_gap(7), false);
        for seq_id in 8..1000 {
            assert!(filter.is_known_gap(seq_id), "{} should be a known gap", seq_id);
        }
        assert_eq!(filter.is_known_gap(i64::MAX - 1), true);
        assert_eq!(filter.is_known_gap(6), false);
        Ok(())
    }

    #[test]
    fn test_backward_unbounded() -> Result<(), Box<dyn Error>> {
        let filter = GapFilter::build("23_20,18_-1", Direction::Backward, 24, 0)?;
        assert_eq!(filter.is_known_gap(11), true);
        assert_eq!(filter.is_known_gap(1), true);
        assert_eq!(filter.is_known_gap(18), false);
        assert_eq!(filter.is_known_gap(19), false);
        assert_eq!(filter.is_known_gap(21), true);
        Ok(())
    }

    #[test]
    fn test_open_endpoint_takes_far_bound() -> Result<(), Box<dyn Error>> {
        let filter = GapFilter::build("7_-1", Direction::Forward, 1, 11)?;
        assert_eq!(filter.is_known_gap(10), true);
        assert_eq!(filter.is_known_gap(11), false);
        assert_eq!(filter.is_known_gap(12), false);
        Ok(())
    }

    #[test]
    fn test_empty() -> Result<(), Box<dyn Error>> {
        let filter = GapFilter::build("", Direction::Forward, 1, 0)?;
        assert!(filter.is_empty());
        for seq_id in -5..100 {
            assert_eq!(filter.is_known_gap(seq_id), false);
        }
        Ok(())
    }

    #[test]
    fn test_malformed() {
        let e = GapFilter::build("23,25", Direction::Forward, 0, 26).unwrap_err();
        assert_eq!(
            GapSpecError::Malformed {
                raw: "23,25".to_owned()
            },
            e
        );

        // One bad token rejects the whole specification.
        let e = GapFilter::build("3_5,7,9_12", Direction::Forward, 0, 26).unwrap_err();
        assert_eq!("3_5,7,9_12", e.raw());
    }

    #[test]
    fn test_interior_and_endpoints() -> Result<(), Box<dyn Error>> {
        let pairs = [(3, 9), (9, 3), (-20, -11), (0, 1), (100, 250)];
        for (a, b) in pairs {
            for direction in [Direction::Forward, Direction::Backward] {
                let filter = GapFilter::build(&format!("{}_{}", a, b), direction, 1, 1000)?;
                let (low, high) = (a.min(b), a.max(b));
                for seq_id in low - 3..=high + 3 {
                    assert_eq!(
                        low < seq_id && seq_id < high,
                        filter.is_known_gap(seq_id),
                        "pair {}_{} seq {}",
                        a,
                        b,
                        seq_id
                    );
                }
            }
        }
        Ok(())
    }

    #[test]
    fn test_overlap_keeps_coverage() -> Result<(), Box<dyn Error>> {
        let single = GapFilter::build("10_30", Direction::Forward, 1, 100)?;
        let overlapping =
            GapFilter::build("10_30,15_20,12_40,10_30", Direction::Forward, 1, 100)?;
        for seq_id in 0..50 {
            if single.is_known_gap(seq_id) {
                assert!(overlapping.is_known_gap(seq_id));
            }
        }
        // 30 is an endpoint of one gap but interior of another.
        assert_eq!(single.is_known_gap(30), false);
        assert_eq!(overlapping.is_known_gap(30), true);
        Ok(())
    }

    #[test]
    fn test_accessors() -> Result<(), Box<dyn Error>> {
        let filter = GapFilter::build("13_9", Direction::Backward, 20, 0)?;
        assert_eq!(Direction::Backward, filter.direction());
        assert_eq!(20, filter.window().near());
        assert!(filter.window().is_unbounded());
        assert_eq!(1, filter.gaps().len());
        assert_eq!(9, filter.gaps()[0].low());
        Ok(())
    }

    #[test]
    fn test_concurrent_queries() -> Result<(), Box<dyn Error>> {
        let filter = GapFilter::build("3_5,7_10,20_-1", Direction::Forward, 1, 0)?;
        std::thread::scope(|s| {
            let handles = (0..4)
                .map(|i| {
                    let filter = &filter;
                    s.spawn(move || {
                        (i * 25..(i + 1) * 25)
                            .filter(|seq_id| filter.is_known_gap(*seq_id))
                            .count()
                    })
                })
                .collect::<Vec<_>>();
            let total: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
            // 4, 8, 9 and 21..100
            assert_eq!(3 + 79, total);
        });
        Ok(())
    }
}
