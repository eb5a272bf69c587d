//! Transition rules and fire errors.

use crate::core::{State, Trigger};
use std::sync::Arc;

/// Callback run before or after a transition, with the fire arguments.
pub type TransitionCallback<M, A> = Arc<dyn Fn(&mut M, &A) + Send + Sync>;

/// A declared transition: when `trigger` fires while the machine is in one
/// of `sources`, move to `destination`.
pub struct TransitionRule<S: State, T: Trigger, M, A = ()> {
    pub trigger: T,
    pub sources: Vec<S>,
    pub destination: S,
    pub before: Option<TransitionCallback<M, A>>,
    pub after: Option<TransitionCallback<M, A>>,
}

impl<S: State, T: Trigger, M, A> TransitionRule<S, T, M, A> {
    /// Check if this rule applies from the current state (pure)
    pub fn accepts(&self, current: &S) -> bool {
        self.sources.contains(current)
    }
}

impl<S: State, T: Trigger, M, A> Clone for TransitionRule<S, T, M, A> {
    fn clone(&self) -> Self {
        Self {
            trigger: self.trigger.clone(),
            sources: self.sources.clone(),
            destination: self.destination.clone(),
            before: self.before.clone(),
            after: self.after.clone(),
        }
    }
}

/// Reasons a fire did not move the machine. Neither is fatal: the state is
/// left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FireError {
    #[error("Trigger '{trigger}' not defined")]
    InvalidTrigger { trigger: String },

    #[error("Cannot trigger '{trigger}' from state '{state}'")]
    NoValidTransition { trigger: String, state: String },
}
