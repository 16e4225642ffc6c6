use std::sync::Arc;

use config::Paging;
use filter::GapFilter;
use log::{debug, warn};
use model::Direction;

use crate::error::PagingError;
use crate::lookup::{MessageLookup, FIRST_SEQ_ID};

/// A request for one page of a conversation's message stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Gaps the client already knows about, in the `a_b,c_d` wire format. May be empty.
    pub gaps: String,

    pub direction: Direction,

    /// Seq id to page from, exclusive.
    pub cursor: i64,

    /// Outer edge of the request, inclusive. `0` means no outer limit.
    pub far: i64,

    /// Number of messages wanted. `None` takes the configured default.
    pub page_size: Option<usize>,
}

impl PageRequest {
    pub fn new(direction: Direction, cursor: i64) -> Self {
        Self {
            gaps: String::new(),
            direction,
            cursor,
            far: 0,
            page_size: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    /// Seq ids of the messages on the page, in the order they were walked.
    pub seq_ids: Vec<i64>,

    /// Candidates skipped because they were known gaps.
    pub skipped: usize,

    /// Candidates checked against storage.
    pub probed: usize,

    /// Cursor to continue from if the walk stopped before the end of the window.
    pub next_cursor: Option<i64>,
}

/// Walks candidate seq ids from the cursor and collects the ones present in storage, skipping
/// storage checks for seq ids the request declares as known gaps.
pub struct PageAssembler<L> {
    config: Arc<Paging>,
    lookup: L,
}

impl<L> PageAssembler<L>
where
    L: MessageLookup,
{
    pub fn new(config: Arc<Paging>, lookup: L) -> Self {
        Self { config, lookup }
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    pub fn assemble(&self, request: &PageRequest) -> Result<Page, PagingError> {
        let page_size = self.page_size(request.page_size)?;
        let filter = GapFilter::build(
            &request.gaps,
            request.direction,
            request.cursor,
            request.far,
        )
        .map_err(|e| {
            warn!("Rejected paging request from cursor {}: {}", request.cursor, e);
            e
        })?;

        let end = self.walk_end(request)?;
        let direction = request.direction;
        let within = |seq_id: i64| match direction {
            Direction::Forward => seq_id <= end,
            Direction::Backward => seq_id >= end,
        };

        let mut page = Page::default();
        let mut scanned = 0;
        let mut last = request.cursor;
        let mut candidate = direction.step(request.cursor);
        while within(candidate) && candidate != last {
            if page.seq_ids.len() >= page_size || scanned >= self.config.max_scan {
                page.next_cursor = Some(last);
                break;
            }
            scanned += 1;

            if filter.is_known_gap(candidate) {
                page.skipped += 1;
            } else {
                page.probed += 1;
                if self.lookup.exists(candidate)? {
                    page.seq_ids.push(candidate);
                }
            }

            last = candidate;
            candidate = direction.step(candidate);
        }

        debug!(
            "Assembled page of {} message(s) pulling {} from cursor {}: skipped {}, probed {}, next cursor {:?}",
            page.seq_ids.len(),
            direction,
            request.cursor,
            page.skipped,
            page.probed,
            page.next_cursor
        );
        Ok(page)
    }

    fn page_size(&self, requested: Option<usize>) -> Result<usize, PagingError> {
        match requested {
            None => Ok(self.config.default_page_size),
            Some(0) => Err(PagingError::InvalidPageSize),
            Some(size) if size > self.config.max_page_size => {
                warn!(
                    "Requested page size {} exceeds {}, clamped",
                    size, self.config.max_page_size
                );
                Ok(self.config.max_page_size)
            }
            Some(size) => Ok(size),
        }
    }

    /// Last seq id of the walk, inclusive.
    fn walk_end(&self, request: &PageRequest) -> Result<i64, PagingError> {
        let end = match (request.direction, request.far) {
            (Direction::Forward, 0) => self.lookup.last_seq_id()?,
            (Direction::Forward, far) => far,
            (Direction::Backward, 0) => FIRST_SEQ_ID,
            (Direction::Backward, far) => far.max(FIRST_SEQ_ID),
        };
        Ok(end)
    }
}
