//! Enter/exit hooks for states.
//!
//! Each state may carry its own enter and exit hook. A state without one
//! falls back to the generic hook, which receives the state it is called
//! for. Missing hooks are not errors.

use crate::core::State;
use std::sync::Arc;

/// Hook bound to one specific state.
pub type StateCallback<M> = Arc<dyn Fn(&mut M) + Send + Sync>;

/// Hook shared by every state without a specific one.
pub type GenericStateCallback<S, M> = Arc<dyn Fn(&mut M, &S) + Send + Sync>;

/// Table of enter/exit hooks, configured once when the machine is built.
pub struct StateHooks<S: State, M> {
    enter: Vec<(S, StateCallback<M>)>,
    exit: Vec<(S, StateCallback<M>)>,
    on_enter: Option<GenericStateCallback<S, M>>,
    on_exit: Option<GenericStateCallback<S, M>>,
}

impl<S: State, M> StateHooks<S, M> {
    /// Create an empty hook table.
    pub fn new() -> Self {
        Self {
            enter: Vec::new(),
            exit: Vec::new(),
            on_enter: None,
            on_exit: None,
        }
    }

    /// Set the enter hook for `state`, replacing any earlier one.
    pub fn set_enter_state(&mut self, state: S, callback: StateCallback<M>) {
        upsert(&mut self.enter, state, callback);
    }

    /// Set the exit hook for `state`, replacing any earlier one.
    pub fn set_exit_state(&mut self, state: S, callback: StateCallback<M>) {
        upsert(&mut self.exit, state, callback);
    }

    /// Set the enter hook used by states without a specific one.
    pub fn set_on_enter(&mut self, callback: GenericStateCallback<S, M>) {
        self.on_enter = Some(callback);
    }

    /// Set the exit hook used by states without a specific one.
    pub fn set_on_exit(&mut self, callback: GenericStateCallback<S, M>) {
        self.on_exit = Some(callback);
    }

    /// Run the enter hook that applies to `state`.
    pub fn enter(&self, model: &mut M, state: &S) {
        run(&self.enter, self.on_enter.as_ref(), model, state);
    }

    /// Run the exit hook that applies to `state`.
    pub fn exit(&self, model: &mut M, state: &S) {
        run(&self.exit, self.on_exit.as_ref(), model, state);
    }
}

impl<S: State, M> Default for StateHooks<S, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, M> Clone for StateHooks<S, M> {
    fn clone(&self) -> Self {
        Self {
            enter: self.enter.clone(),
            exit: self.exit.clone(),
            on_enter: self.on_enter.clone(),
            on_exit: self.on_exit.clone(),
        }
    }
}

fn upsert<S: State, M>(table: &mut Vec<(S, StateCallback<M>)>, state: S, callback: StateCallback<M>) {
    match table.iter_mut().find(|(existing, _)| *existing == state) {
        Some(entry) => entry.1 = callback,
        None => table.push((state, callback)),
    }
}

fn run<S: State, M>(
    specific: &[(S, StateCallback<M>)],
    generic: Option<&GenericStateCallback<S, M>>,
    model: &mut M,
    state: &S,
) {
    if let Some((_, callback)) = specific.iter().find(|(s, _)| s == state) {
        callback(model);
    } else if let Some(callback) = generic {
        callback(model, state);
    }
}
