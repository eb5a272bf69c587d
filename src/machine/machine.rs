//! Declarative state machine driven by named triggers.

use crate::builder::{validate_spec, BuildError};
use crate::core::{State, StateHistory, StateTransition, Trigger};
use crate::machine::hooks::StateHooks;
use crate::machine::transition::{FireError, TransitionRule};
use chrono::Utc;
use std::collections::HashMap;
use stillwater::validation::Validation;

/// State machine over a fixed transition table.
///
/// The machine does not own its model: every operation that runs callbacks
/// takes the model by `&mut`. Callbacks therefore cannot reach the machine
/// and cannot fire nested triggers.
///
/// Not thread-safe by intent; drive it from a single (UI/main) thread.
pub struct StateMachine<S: State, T: Trigger, M, A = ()> {
    states: Vec<S>,
    rules: Vec<TransitionRule<S, T, M, A>>,
    index: HashMap<T, Vec<usize>>,
    hooks: StateHooks<S, M>,
    current: S,
    history: StateHistory<S>,
}

impl<S: State, T: Trigger, M, A> StateMachine<S, T, M, A> {
    /// Validate the declaration, index rules by trigger, and enter `initial`.
    ///
    /// The enter hook for `initial` runs on `model` before this returns.
    pub fn new(
        model: &mut M,
        states: Vec<S>,
        rules: Vec<TransitionRule<S, T, M, A>>,
        hooks: StateHooks<S, M>,
        initial: S,
        history: StateHistory<S>,
    ) -> Result<Self, BuildError> {
        if let Validation::Failure(errors) = validate_spec(&states, &rules, &initial) {
            return Err(BuildError::InvalidSpec {
                violations: errors.iter().cloned().collect(),
            });
        }

        let mut index: HashMap<T, Vec<usize>> = HashMap::new();
        for (position, rule) in rules.iter().enumerate() {
            index.entry(rule.trigger.clone()).or_default().push(position);
        }

        let machine = Self {
            states,
            rules,
            index,
            hooks,
            current: initial,
            history,
        };
        machine.hooks.enter(model, &machine.current);
        log::debug!("State machine started in '{}'", machine.current.name());

        Ok(machine)
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Check whether the machine is in `state` (pure)
    pub fn is_state(&self, state: &S) -> bool {
        self.current == *state
    }

    /// Recorded transitions.
    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    /// Find the first rule for `trigger` that applies from the current state.
    fn resolve(&self, trigger: &T) -> Result<usize, FireError> {
        let candidates = self
            .index
            .get(trigger)
            .ok_or_else(|| FireError::InvalidTrigger {
                trigger: trigger.name().to_string(),
            })?;

        candidates
            .iter()
            .copied()
            .find(|&position| self.rules[position].accepts(&self.current))
            .ok_or_else(|| FireError::NoValidTransition {
                trigger: trigger.name().to_string(),
                state: self.current.name().to_string(),
            })
    }

    /// Would `trigger` move the machine from its current state? (pure)
    pub fn can_fire(&self, trigger: &T) -> bool {
        self.resolve(trigger).is_ok()
    }

    /// Fire `trigger`, running in order: the rule's `before` callback, the
    /// exit hook of the old state, the enter hook of the new state, and the
    /// rule's `after` callback.
    ///
    /// On error nothing runs and the state is unchanged.
    pub fn try_fire(&mut self, model: &mut M, trigger: &T, args: &A) -> Result<(), FireError> {
        let position = self.resolve(trigger)?;
        let rule = &self.rules[position];
        let before = rule.before.clone();
        let after = rule.after.clone();
        let destination = rule.destination.clone();

        if let Some(callback) = &before {
            callback(model, args);
        }

        self.hooks.exit(model, &self.current);
        let from = std::mem::replace(&mut self.current, destination);
        self.hooks.enter(model, &self.current);

        if let Some(callback) = &after {
            callback(model, args);
        }

        log::debug!(
            "'{}': {} -> {}",
            trigger.name(),
            from.name(),
            self.current.name()
        );
        self.history = self.history.record(StateTransition {
            from,
            to: self.current.clone(),
            trigger: trigger.name().to_string(),
            timestamp: Utc::now(),
        });

        Ok(())
    }

    /// Fire `trigger` and report whether a transition happened.
    ///
    /// Failures are logged as warnings and otherwise ignored.
    pub fn fire(&mut self, model: &mut M, trigger: &T, args: &A) -> bool {
        match self.try_fire(model, trigger, args) {
            Ok(()) => true,
            Err(error) => {
                log::warn!("{}", error);
                false
            }
        }
    }

    /// Put the machine in `state` without running any callback.
    ///
    /// For resynchronising with a host that changed modes behind the
    /// machine's back. Returns `false` for undeclared states.
    pub fn force_state(&mut self, state: S) -> bool {
        if !self.states.contains(&state) {
            log::warn!("Cannot force undeclared state '{}'", state.name());
            return false;
        }
        self.current = state;
        true
    }
}

impl<S: State, T: Trigger, M> StateMachine<S, T, M, ()> {
    /// Fire a trigger that takes no arguments.
    pub fn trigger(&mut self, model: &mut M, trigger: &T) -> bool {
        self.fire(model, trigger, &())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{SpecViolation, StateMachineBuilder, TransitionBuilder};
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum Mode {
        Normal,
        Moving,
        Picking,
        Orphan,
    }

    impl State for Mode {
        fn name(&self) -> &str {
            match self {
                Self::Normal => "normal",
                Self::Moving => "moving",
                Self::Picking => "picking",
                Self::Orphan => "orphan",
            }
        }
    }

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum Go {
        Move,
        Back,
        Pick,
        Undeclared,
    }

    impl Trigger for Go {
        fn name(&self) -> &str {
            match self {
                Self::Move => "move",
                Self::Back => "back",
                Self::Pick => "pick",
                Self::Undeclared => "undeclared",
            }
        }
    }

    type Log = Vec<String>;

    fn push(entry: &'static str) -> impl Fn(&mut Log) + Send + Sync + 'static {
        move |log: &mut Log| log.push(entry.to_string())
    }

    fn build(log: &mut Log) -> StateMachine<Mode, Go, Log> {
        StateMachineBuilder::new()
            .states([Mode::Normal, Mode::Moving, Mode::Picking])
            .initial(Mode::Normal)
            .transition(
                TransitionBuilder::new()
                    .trigger(Go::Move)
                    .from(Mode::Normal)
                    .to(Mode::Moving)
                    .before(|log: &mut Log, _: &()| log.push("before_moving".to_string())),
            )
            .unwrap()
            .transition(
                TransitionBuilder::new()
                    .trigger(Go::Back)
                    .from_any([Mode::Moving, Mode::Picking])
                    .to(Mode::Normal)
                    .before(|log: &mut Log, _: &()| log.push("before_normal".to_string()))
                    .after(|log: &mut Log, _: &()| log.push("after_normal".to_string())),
            )
            .unwrap()
            .transition(
                TransitionBuilder::new()
                    .trigger(Go::Pick)
                    .from(Mode::Normal)
                    .to(Mode::Picking),
            )
            .unwrap()
            .on_enter_state(Mode::Normal, push("on_enter_normal"))
            .on_exit_state(Mode::Normal, push("on_exit_normal"))
            .on_enter_state(Mode::Moving, push("on_enter_moving"))
            .on_exit_state(Mode::Moving, push("on_exit_moving"))
            .on_enter(|log: &mut Log, state: &Mode| log.push(format!("on_enter({})", state.name())))
            .on_exit(|log: &mut Log, state: &Mode| log.push(format!("on_exit({})", state.name())))
            .build(log)
            .unwrap()
    }

    #[test]
    fn construction_enters_initial_state_once() {
        let mut log = Log::new();
        let machine = build(&mut log);

        assert_eq!(machine.current_state(), &Mode::Normal);
        assert_eq!(log, vec!["on_enter_normal"]);
        assert!(machine.history().transitions().is_empty());
    }

    #[test]
    fn fire_runs_callbacks_in_order() {
        let mut log = Log::new();
        let mut machine = build(&mut log);
        log.clear();

        assert!(machine.trigger(&mut log, &Go::Move));
        assert_eq!(machine.current_state(), &Mode::Moving);
        assert_eq!(
            log,
            vec!["before_moving", "on_exit_normal", "on_enter_moving"]
        );
    }

    #[test]
    fn shared_trigger_exits_the_state_it_left() {
        let mut log = Log::new();
        let mut machine = build(&mut log);

        machine.trigger(&mut log, &Go::Move);
        log.clear();
        assert!(machine.trigger(&mut log, &Go::Back));
        assert_eq!(
            log,
            vec!["before_normal", "on_exit_moving", "on_enter_normal", "after_normal"]
        );

        machine.trigger(&mut log, &Go::Pick);
        log.clear();
        assert!(machine.trigger(&mut log, &Go::Back));
        assert_eq!(
            log,
            vec!["before_normal", "on_exit(picking)", "on_enter_normal", "after_normal"]
        );
        assert!(machine.is_state(&Mode::Normal));
    }

    #[test]
    fn no_valid_transition_leaves_state_unchanged() {
        let mut log = Log::new();
        let mut machine = build(&mut log);
        machine.trigger(&mut log, &Go::Move);
        log.clear();

        let result = machine.try_fire(&mut log, &Go::Pick, &());

        assert_eq!(
            result,
            Err(FireError::NoValidTransition {
                trigger: "pick".to_string(),
                state: "moving".to_string(),
            })
        );
        assert_eq!(machine.current_state(), &Mode::Moving);
        assert!(log.is_empty());
    }

    #[test]
    fn unknown_trigger_is_reported_distinctly() {
        let mut log = Log::new();
        let mut machine = build(&mut log);

        let result = machine.try_fire(&mut log, &Go::Undeclared, &());
        assert_eq!(
            result,
            Err(FireError::InvalidTrigger {
                trigger: "undeclared".to_string(),
            })
        );
        assert!(!machine.trigger(&mut log, &Go::Undeclared));
        assert_eq!(machine.current_state(), &Mode::Normal);
    }

    #[test]
    fn back_from_normal_is_a_no_op() {
        let mut log = Log::new();
        let mut machine = build(&mut log);

        assert!(!machine.can_fire(&Go::Back));
        assert!(!machine.trigger(&mut log, &Go::Back));
        assert_eq!(machine.current_state(), &Mode::Normal);
    }

    #[test]
    fn first_declared_rule_wins() {
        let mut log = Log::new();
        let mut machine: StateMachine<Mode, Go, Log> = StateMachineBuilder::new()
            .states([Mode::Normal, Mode::Moving, Mode::Picking])
            .initial(Mode::Normal)
            .transition(TransitionBuilder::new().trigger(Go::Move).from(Mode::Normal).to(Mode::Moving))
            .unwrap()
            .transition(TransitionBuilder::new().trigger(Go::Move).from(Mode::Normal).to(Mode::Picking))
            .unwrap()
            .build(&mut log)
            .unwrap();

        assert!(machine.trigger(&mut log, &Go::Move));
        assert_eq!(machine.current_state(), &Mode::Moving);
    }

    #[test]
    fn fire_passes_arguments_to_callbacks() {
        let mut total = 0i32;
        let mut machine: StateMachine<Mode, Go, i32, i32> = StateMachineBuilder::new()
            .states([Mode::Normal, Mode::Moving])
            .initial(Mode::Normal)
            .transition(
                TransitionBuilder::new()
                    .trigger(Go::Move)
                    .from(Mode::Normal)
                    .to(Mode::Moving)
                    .before(|total: &mut i32, amount: &i32| *total += *amount)
                    .after(|total: &mut i32, amount: &i32| *total *= *amount),
            )
            .unwrap()
            .build(&mut total)
            .unwrap();

        assert!(machine.fire(&mut total, &Go::Move, &3));
        assert_eq!(total, 9);
    }

    #[test]
    fn history_records_successful_fires_only() {
        let mut log = Log::new();
        let mut machine = build(&mut log);

        machine.trigger(&mut log, &Go::Move);
        machine.trigger(&mut log, &Go::Pick);
        machine.trigger(&mut log, &Go::Back);

        let transitions = machine.history().transitions();
        assert_eq!(transitions.len(), 2);
        assert_eq!(transitions[0].trigger, "move");
        assert_eq!(transitions[1].trigger, "back");
        assert_eq!(
            machine.history().get_path(),
            vec![&Mode::Normal, &Mode::Moving, &Mode::Normal]
        );
    }

    #[test]
    fn force_state_skips_callbacks() {
        let mut log = Log::new();
        let mut machine = build(&mut log);
        log.clear();

        assert!(machine.force_state(Mode::Picking));
        assert_eq!(machine.current_state(), &Mode::Picking);
        assert!(log.is_empty());

        assert!(!machine.force_state(Mode::Orphan));
        assert_eq!(machine.current_state(), &Mode::Picking);
    }

    #[test]
    fn new_rejects_undeclared_states() {
        let mut log = Log::new();
        let rule: TransitionRule<Mode, Go, Log> = TransitionRule {
            trigger: Go::Move,
            sources: vec![Mode::Orphan],
            destination: Mode::Moving,
            before: None,
            after: None,
        };

        let result = StateMachine::new(
            &mut log,
            vec![Mode::Normal],
            vec![rule],
            StateHooks::new(),
            Mode::Normal,
            StateHistory::new(),
        );

        match result {
            Err(BuildError::InvalidSpec { violations }) => {
                assert_eq!(violations.len(), 2);
                assert!(violations
                    .iter()
                    .any(|v| matches!(v, SpecViolation::UndeclaredSource { .. })));
                assert!(violations
                    .iter()
                    .any(|v| matches!(v, SpecViolation::UndeclaredDestination { .. })));
            }
            _ => panic!("Expected InvalidSpec"),
        }
        assert!(log.is_empty());
    }
}
