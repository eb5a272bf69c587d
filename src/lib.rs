//! Vam: modal interaction core for a viewport tool
//!
//! A viewport tool captures mouse and keyboard input and behaves differently
//! depending on its interaction mode: selecting in `normal`, transforming in
//! `moving`, picking in `register_picking`. This crate provides that core
//! independently of any host application.
//!
//! # Core Concepts
//!
//! - **State machine**: a declarative table of `(trigger, sources,
//!   destination, before, after)` rules with per-state enter/exit hooks
//! - **Interaction core**: [`VamCore`] owns the transform settings and the
//!   state machine, and dispatches input to the current state's handler
//! - **Commands**: named operations and hotkey bindings the host registers
//!
//! # Example
//!
//! ```rust
//! use vam::interaction::{ReferenceFrame, VamCore, VamState};
//!
//! let mut core = VamCore::new();
//! assert_eq!(core.current_state(), VamState::Normal);
//!
//! assert!(core.begin_move());
//! assert_eq!(core.current_state(), VamState::Moving);
//!
//! // No direct path from moving to register picking.
//! assert!(!core.begin_register_pick());
//!
//! assert!(core.return_to_normal());
//! assert_eq!(core.cycle_reference_frame(), ReferenceFrame::Local);
//! ```

pub mod builder;
pub mod commands;
pub mod core;
pub mod interaction;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, StateMachineBuilder, TransitionBuilder};
pub use commands::{Command, HotkeyConfig};
pub use core::{State, StateHistory, StateTransition, Trigger};
pub use interaction::{VamCore, VamState, VamTrigger};
pub use machine::{FireError, StateMachine};
