//! State transition history tracking.
//!
//! Every successful fire is recorded so hosts can inspect how the session
//! moved between modes. History is bounded: once the capacity is reached
//! the oldest records are dropped.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default number of transitions kept by a [`StateHistory`].
pub const DEFAULT_HISTORY_CAPACITY: usize = 64;

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use vam::core::{State, StateTransition};
/// use serde::{Deserialize, Serialize};
/// use chrono::Utc;
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Mode {
///     Normal,
///     Moving,
/// }
///
/// impl State for Mode {
///     fn name(&self) -> &str {
///         match self {
///             Self::Normal => "normal",
///             Self::Moving => "moving",
///         }
///     }
/// }
///
/// let transition = StateTransition {
///     from: Mode::Normal,
///     to: Mode::Moving,
///     trigger: "begin_move".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.trigger, "begin_move");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// Name of the trigger that caused the transition
    pub trigger: String,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered, bounded history of state transitions.
///
/// `record` returns a new history with the transition added and leaves the
/// receiver untouched.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "", from = "StoredHistory<S>")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
    capacity: usize,
}

/// Serialized form of a [`StateHistory`], checked on the way in.
#[derive(Deserialize)]
#[serde(bound = "")]
struct StoredHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
    capacity: usize,
}

impl<S: State> From<StoredHistory<S>> for StateHistory<S> {
    fn from(stored: StoredHistory<S>) -> Self {
        let mut history = Self::with_capacity(stored.capacity);
        let overflow = stored.transitions.len().saturating_sub(history.capacity);
        history.transitions = stored.transitions;
        history.transitions.drain(..overflow);
        history
    }
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create a new empty history that keeps at most `capacity` records.
    ///
    /// A capacity of zero is treated as one.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            transitions: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// ```rust
    /// use vam::core::{State, StateHistory, StateTransition};
    /// use serde::{Deserialize, Serialize};
    /// use chrono::Utc;
    ///
    /// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    /// enum Step { A, B }
    ///
    /// impl State for Step {
    ///     fn name(&self) -> &str {
    ///         match self {
    ///             Self::A => "a",
    ///             Self::B => "b",
    ///         }
    ///     }
    /// }
    ///
    /// let history = StateHistory::new();
    /// let new_history = history.record(StateTransition {
    ///     from: Step::A,
    ///     to: Step::B,
    ///     trigger: "go".to_string(),
    ///     timestamp: Utc::now(),
    /// });
    /// assert_eq!(new_history.transitions().len(), 1);
    /// assert_eq!(history.transitions().len(), 0);
    /// ```
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        if transitions.len() > self.capacity {
            let overflow = transitions.len() - self.capacity;
            transitions.drain(..overflow);
        }
        Self {
            transitions,
            capacity: self.capacity,
        }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest kept transition followed by the
    /// `to` state of each transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the oldest and the newest kept transition.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// The most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    /// Get all kept transitions, oldest first.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    /// Maximum number of transitions kept.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Normal,
        Moving,
        Picking,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Normal => "normal",
                Self::Moving => "moving",
                Self::Picking => "picking",
            }
        }
    }

    fn transition(from: TestState, to: TestState) -> StateTransition<TestState> {
        StateTransition {
            from,
            to,
            trigger: "test".to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<TestState> = StateHistory::new();
        assert_eq!(history.transitions().len(), 0);
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
        assert_eq!(history.capacity(), DEFAULT_HISTORY_CAPACITY);
    }

    #[test]
    fn record_is_immutable() {
        let history = StateHistory::new();
        let new_history = history.record(transition(TestState::Normal, TestState::Moving));

        assert_eq!(history.transitions().len(), 0);
        assert_eq!(new_history.transitions().len(), 1);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let history = StateHistory::new()
            .record(transition(TestState::Normal, TestState::Moving))
            .record(transition(TestState::Moving, TestState::Normal))
            .record(transition(TestState::Normal, TestState::Picking));

        let path = history.get_path();
        assert_eq!(
            path,
            vec![
                &TestState::Normal,
                &TestState::Moving,
                &TestState::Normal,
                &TestState::Picking
            ]
        );
    }

    #[test]
    fn capacity_drops_oldest_records() {
        let history = StateHistory::with_capacity(2)
            .record(transition(TestState::Normal, TestState::Moving))
            .record(transition(TestState::Moving, TestState::Normal))
            .record(transition(TestState::Normal, TestState::Picking));

        assert_eq!(history.transitions().len(), 2);
        assert_eq!(history.transitions()[0].from, TestState::Moving);
        assert_eq!(history.last().unwrap().to, TestState::Picking);
    }

    #[test]
    fn zero_capacity_keeps_one_record() {
        let history = StateHistory::with_capacity(0)
            .record(transition(TestState::Normal, TestState::Moving))
            .record(transition(TestState::Moving, TestState::Normal));

        assert_eq!(history.capacity(), 1);
        assert_eq!(history.transitions().len(), 1);
    }

    #[test]
    fn deserialized_zero_capacity_keeps_one_record() {
        let history: StateHistory<TestState> =
            serde_json::from_str(r#"{"transitions":[],"capacity":0}"#).unwrap();
        let history = history.record(transition(TestState::Normal, TestState::Moving));

        assert_eq!(history.capacity(), 1);
        assert_eq!(history.transitions().len(), 1);
    }

    #[test]
    fn deserialize_trims_to_capacity() {
        let stored = StateHistory::with_capacity(3)
            .record(transition(TestState::Normal, TestState::Moving))
            .record(transition(TestState::Moving, TestState::Normal))
            .record(transition(TestState::Normal, TestState::Picking));
        let mut json = serde_json::to_value(&stored).unwrap();
        json["capacity"] = serde_json::json!(2);

        let history: StateHistory<TestState> = serde_json::from_value(json).unwrap();

        assert_eq!(history.capacity(), 2);
        assert_eq!(history.transitions()[0].from, TestState::Moving);
        assert_eq!(history.last().unwrap().to, TestState::Picking);
    }

    #[test]
    fn single_transition_has_duration_zero() {
        let history = StateHistory::new().record(transition(TestState::Normal, TestState::Moving));
        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StateHistory::new().record(transition(TestState::Normal, TestState::Moving));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<TestState> = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.transitions().len(), 1);
        assert_eq!(deserialized.transitions()[0].trigger, "test");
    }
}
