//! Breadth-first exploration of ekin states.
//!
//! An ekin state is a sorted vector of small integers. From a state, every
//! non-empty subset of positions is moved one step towards zero sum: up when
//! the subset sums below zero, down when above, and both ways when it sums
//! to exactly zero. The search records the iteration at which the largest
//! element seen so far grows.

pub mod search;
pub mod state;

pub use search::{search, validate_size, NewMax, SearchConfig, SearchError, SearchSummary};
pub use state::{BaseInt, EkinState, MAX_SIZE};
