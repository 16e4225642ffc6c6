//! Page assembly over an ordered message stream.

pub mod assembler;
pub mod error;
pub mod lookup;

pub use crate::assembler::{Page, PageAssembler, PageRequest};
pub use crate::error::{LookupError, PagingError};
pub use crate::lookup::{MemoryLookup, MessageLookup, FIRST_SEQ_ID};
