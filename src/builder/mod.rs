//! Builder API for ergonomic state machine construction.
//!
//! This module provides fluent builders and macros for declaring state
//! machines, and the checks that reject a declaration referring to states
//! it never declared.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;
mod validation;

pub use error::{BuildError, SpecViolation};
pub use machine::StateMachineBuilder;
pub use transition::TransitionBuilder;
pub use validation::validate_spec;

use crate::core::{State, Trigger};
use crate::machine::TransitionRule;

/// Create a transition rule with no callbacks.
///
/// # Example
///
/// ```
/// use vam::builder::simple_transition;
/// use vam::{state_enum, trigger_enum};
///
/// state_enum! {
///     enum Lamp {
///         Off => "off",
///         On => "on",
///     }
/// }
///
/// trigger_enum! {
///     enum Switch {
///         Flip => "flip",
///     }
/// }
///
/// let rule = simple_transition::<_, _, (), ()>(Switch::Flip, Lamp::Off, Lamp::On);
/// assert!(rule.accepts(&Lamp::Off));
/// ```
pub fn simple_transition<S, T, M, A>(trigger: T, from: S, to: S) -> TransitionRule<S, T, M, A>
where
    S: State,
    T: Trigger,
{
    TransitionRule {
        trigger,
        sources: vec![from],
        destination: to,
        before: None,
        after: None,
    }
}
