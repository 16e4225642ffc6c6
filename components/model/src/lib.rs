pub mod direction;
pub mod error;
pub mod gap;
pub mod status;
pub mod window;

pub use crate::direction::Direction;
pub use crate::error::GapSpecError;
pub use crate::gap::Gap;
pub use crate::status::{ErrorCode, Status};
pub use crate::window::FetchWindow;
