//! Core domain models.
//!
//! Chain-neutral values used to address blocks and narrow event subscriptions
//! and historical queries.

mod filter;
mod range;

pub use filter::EventFilter;
pub use range::{BlockId, BlockNumber, BlockRange};
