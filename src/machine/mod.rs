//! Declarative, trigger-driven state machine.
//!
//! # Key Concepts
//!
//! - **Transition rules**: `(trigger, sources, destination, before, after)`
//! - **Hooks**: per-state enter/exit callbacks with a generic fallback
//! - **Model**: the object callbacks run against, passed in on every fire
//!
//! Failed fires are policy outcomes, not panics: the caller gets a
//! [`FireError`] or `false` and the state is unchanged.

mod hooks;
#[allow(clippy::module_inception)]
mod machine;
mod transition;

pub use hooks::{GenericStateCallback, StateCallback, StateHooks};
pub use machine::StateMachine;
pub use transition::{FireError, TransitionCallback, TransitionRule};
