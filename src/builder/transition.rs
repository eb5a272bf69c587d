//! Builder for constructing transition rules.

use crate::builder::error::BuildError;
use crate::core::{State, Trigger};
use crate::machine::{TransitionCallback, TransitionRule};
use std::sync::Arc;

/// Builder for constructing transition rules with a fluent API.
pub struct TransitionBuilder<S: State, T: Trigger, M, A = ()> {
    trigger: Option<T>,
    sources: Vec<S>,
    to: Option<S>,
    before: Option<TransitionCallback<M, A>>,
    after: Option<TransitionCallback<M, A>>,
}

impl<S: State, T: Trigger, M, A> TransitionBuilder<S, T, M, A> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            trigger: None,
            sources: Vec::new(),
            to: None,
            before: None,
            after: None,
        }
    }

    /// Set the trigger (required).
    pub fn trigger(mut self, trigger: T) -> Self {
        self.trigger = Some(trigger);
        self
    }

    /// Add a source state. At least one source is required.
    pub fn from(mut self, state: S) -> Self {
        self.sources.push(state);
        self
    }

    /// Add several source states at once.
    pub fn from_any(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.sources.extend(states);
        self
    }

    /// Set the destination state (required).
    pub fn to(mut self, state: S) -> Self {
        self.to = Some(state);
        self
    }

    /// Callback run before leaving the source state (optional).
    pub fn before<F>(mut self, callback: F) -> Self
    where
        F: Fn(&mut M, &A) + Send + Sync + 'static,
    {
        self.before = Some(Arc::new(callback));
        self
    }

    /// Callback run after entering the destination state (optional).
    pub fn after<F>(mut self, callback: F) -> Self
    where
        F: Fn(&mut M, &A) + Send + Sync + 'static,
    {
        self.after = Some(Arc::new(callback));
        self
    }

    /// Build the transition rule.
    pub fn build(self) -> Result<TransitionRule<S, T, M, A>, BuildError> {
        let trigger = self.trigger.ok_or(BuildError::MissingTrigger)?;
        if self.sources.is_empty() {
            return Err(BuildError::MissingFromState);
        }
        let destination = self.to.ok_or(BuildError::MissingToState)?;

        Ok(TransitionRule {
            trigger,
            sources: self.sources,
            destination,
            before: self.before,
            after: self.after,
        })
    }
}

impl<S: State, T: Trigger, M, A> Default for TransitionBuilder<S, T, M, A> {
    fn default() -> Self {
        Self::new()
    }
}
