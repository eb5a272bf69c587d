//! Core vocabulary shared by the state machine and its users:
//! - State and trigger identifiers via the `State` and `Trigger` traits
//! - Bounded history of recorded transitions

mod history;
mod state;

pub use history::{StateHistory, StateTransition, DEFAULT_HISTORY_CAPACITY};
pub use state::{State, Trigger};
