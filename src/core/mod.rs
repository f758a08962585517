//! Core state types.
//!
//! - State definitions via the `State` trait
//! - Immutable history tracking of state changes
//!
//! Everything here is pure; the session shell decides when to record.

mod history;
mod state;

pub use history::{StateHistory, StateTransition};
pub use state::State;
