//! Build errors for state machine and transition builders.

use thiserror::Error;

/// A declaration that refers to something the machine does not know.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecViolation {
    #[error("initial state '{state}' is not declared")]
    UndeclaredInitialState { state: String },

    #[error("trigger '{trigger}' has undeclared source state '{state}'")]
    UndeclaredSource { trigger: String, state: String },

    #[error("trigger '{trigger}' has undeclared destination state '{state}'")]
    UndeclaredDestination { trigger: String, state: String },

    #[error("trigger '{trigger}' has a rule with no source states")]
    EmptySources { trigger: String },
}

/// Errors that can occur when building state machines and transitions.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No states declared. Call .states([...]) before .build()")]
    NoStates,

    #[error("No transitions defined. Add at least one transition")]
    NoTransitions,

    #[error("Transition trigger not specified. Call .trigger(trigger)")]
    MissingTrigger,

    #[error("Transition source state not specified. Call .from(state) or .from_any(states)")]
    MissingFromState,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingToState,

    #[error("Invalid state machine declaration: {}", join(.violations))]
    InvalidSpec { violations: Vec<SpecViolation> },
}

fn join(violations: &[SpecViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
