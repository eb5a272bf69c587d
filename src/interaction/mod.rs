//! Interaction core for the modal viewport tool.
//!
//! `VamCore` owns the transform settings ([`Session`]), the state machine
//! that moves between `normal`, `moving` and `register_picking`, and one
//! input handler per state. Host input is dispatched to the handler of the
//! current state; mode changes go through the trigger wrappers.

mod events;
pub mod global;
mod handlers;
mod mode;
mod session;
mod state;
mod vam_core;

pub use events::{KeyEvent, KeyOutcome, MouseAction, MouseButton, MouseEvent};
pub use handlers::{Handlers, MovingHandler, NormalHandler, RegisterPickingHandler, StateHandler};
pub use mode::{AxisConstraint, InvalidModeValue, ReferenceFrame, TransformMode};
pub use session::{Session, JOURNAL_CAPACITY};
pub use state::{VamState, VamTrigger};
pub use vam_core::{build_machine, VamCore, VamMachine};
