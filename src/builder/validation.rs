//! Declaration checks run before a machine is assembled.
//!
//! Uses Stillwater's `Validation` so a broken table reports all of its
//! problems in one pass instead of the first one found.

use crate::builder::error::SpecViolation;
use crate::core::{State, Trigger};
use crate::machine::TransitionRule;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<SpecViolation>>;

fn require(condition: bool, violation: impl FnOnce() -> SpecViolation) -> Check {
    if condition {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

/// Check that `initial` and every state referenced by `rules` is declared,
/// and that every rule has at least one source.
pub fn validate_spec<S: State, T: Trigger, M, A>(
    states: &[S],
    rules: &[TransitionRule<S, T, M, A>],
    initial: &S,
) -> Check {
    let mut checks: Vec<Check> = vec![require(states.contains(initial), || {
        SpecViolation::UndeclaredInitialState {
            state: initial.name().to_string(),
        }
    })];

    for rule in rules {
        let trigger = rule.trigger.name();

        checks.push(require(!rule.sources.is_empty(), || {
            SpecViolation::EmptySources {
                trigger: trigger.to_string(),
            }
        }));

        for source in &rule.sources {
            checks.push(require(states.contains(source), || {
                SpecViolation::UndeclaredSource {
                    trigger: trigger.to_string(),
                    state: source.name().to_string(),
                }
            }));
        }

        checks.push(require(states.contains(&rule.destination), || {
            SpecViolation::UndeclaredDestination {
                trigger: trigger.to_string(),
                state: rule.destination.name().to_string(),
            }
        }));
    }

    Validation::all_vec(checks).map(|_| ())
}
