//! Filter of seq ids a paging request already knows to be absent.
//!
//! Clients paging through a conversation send back the ranges they have learned are empty so
//! that the server can skip storage lookups for them.

pub mod filter;
pub mod spec;

pub use crate::filter::GapFilter;
pub use crate::spec::GapSpec;
