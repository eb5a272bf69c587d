//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{State, StateHistory, Trigger, DEFAULT_HISTORY_CAPACITY};
use crate::machine::{StateHooks, StateMachine, TransitionRule};
use std::sync::Arc;

/// Builder for constructing state machines with a fluent API.
pub struct StateMachineBuilder<S: State, T: Trigger, M, A = ()> {
    states: Vec<S>,
    initial: Option<S>,
    transitions: Vec<TransitionRule<S, T, M, A>>,
    hooks: StateHooks<S, M>,
    history_capacity: usize,
}

impl<S: State, T: Trigger, M, A> StateMachineBuilder<S, T, M, A> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            initial: None,
            transitions: Vec::new(),
            hooks: StateHooks::new(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }

    /// Declare states (required).
    pub fn states(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.states.extend(states);
        self
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder<S, T, M, A>) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: TransitionRule<S, T, M, A>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Enter hook for one state.
    pub fn on_enter_state<F>(mut self, state: S, callback: F) -> Self
    where
        F: Fn(&mut M) + Send + Sync + 'static,
    {
        self.hooks.set_enter_state(state, Arc::new(callback));
        self
    }

    /// Exit hook for one state.
    pub fn on_exit_state<F>(mut self, state: S, callback: F) -> Self
    where
        F: Fn(&mut M) + Send + Sync + 'static,
    {
        self.hooks.set_exit_state(state, Arc::new(callback));
        self
    }

    /// Enter hook for every state without its own.
    pub fn on_enter<F>(mut self, callback: F) -> Self
    where
        F: Fn(&mut M, &S) + Send + Sync + 'static,
    {
        self.hooks.set_on_enter(Arc::new(callback));
        self
    }

    /// Exit hook for every state without its own.
    pub fn on_exit<F>(mut self, callback: F) -> Self
    where
        F: Fn(&mut M, &S) + Send + Sync + 'static,
    {
        self.hooks.set_on_exit(Arc::new(callback));
        self
    }

    /// Number of transitions kept in the machine's history.
    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Build the state machine, entering the initial state on `model`.
    /// Returns an error if required fields are missing or the declaration
    /// refers to undeclared states.
    pub fn build(self, model: &mut M) -> Result<StateMachine<S, T, M, A>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }
        if self.transitions.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        StateMachine::new(
            model,
            self.states,
            self.transitions,
            self.hooks,
            initial,
            StateHistory::with_capacity(self.history_capacity),
        )
    }
}

impl<S: State, T: Trigger, M, A> Default for StateMachineBuilder<S, T, M, A> {
    fn default() -> Self {
        Self::new()
    }
}
