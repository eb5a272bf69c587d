//! Identifier traits for states and triggers.
//!
//! A state machine is declared over two small vocabularies: the states it
//! can occupy and the triggers that request a move between them. Both are
//! plain value types (usually fieldless enums) that know their own name,
//! so diagnostics and command tables can refer to them as strings.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// # Example
///
/// ```rust
/// use vam::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum DoorState {
///     Open,
///     Closed,
/// }
///
/// impl State for DoorState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "open",
///             Self::Closed => "closed",
///         }
///     }
/// }
///
/// assert_eq!(DoorState::Open.name(), "open");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// The state's identifier for display/logging.
    fn name(&self) -> &str;
}

/// Trait for transition triggers.
///
/// Triggers key the transition index, so they must be hashable. A trigger
/// may be valid from zero, one or several source states.
pub trait Trigger: Clone + Eq + Hash + Debug + Send + Sync {
    /// The trigger's identifier for display/logging.
    fn name(&self) -> &str;
}
