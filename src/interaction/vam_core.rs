//! The interaction core: one session, one state machine, one handler per
//! state.

use super::events::{KeyEvent, KeyOutcome, MouseEvent};
use super::handlers::{Handlers, StateHandler};
use super::mode::{AxisConstraint, InvalidModeValue, ReferenceFrame, TransformMode};
use super::session::Session;
use super::state::{VamState, VamTrigger};
use crate::builder::{BuildError, StateMachineBuilder, TransitionBuilder};
use crate::core::StateHistory;
use crate::machine::StateMachine;

/// State machine type driving a [`VamCore`].
pub type VamMachine = StateMachine<VamState, VamTrigger, Session>;

/// Build the interaction state machine, entering `normal` on `session`.
pub fn build_machine(session: &mut Session) -> Result<VamMachine, BuildError> {
    StateMachineBuilder::new()
        .states(VamState::ALL.iter().copied())
        .initial(VamState::Normal)
        .transition(
            TransitionBuilder::new()
                .trigger(VamTrigger::BeginMove)
                .from(VamState::Normal)
                .to(VamState::Moving)
                .before(|session: &mut Session, _: &()| session.before_moving()),
        )?
        .transition(
            TransitionBuilder::new()
                .trigger(VamTrigger::ReturnToNormal)
                .from_any([VamState::Moving, VamState::RegisterPicking])
                .to(VamState::Normal)
                .before(|session: &mut Session, _: &()| session.before_normal()),
        )?
        .transition(
            TransitionBuilder::new()
                .trigger(VamTrigger::BeginRegisterPick)
                .from(VamState::Normal)
                .to(VamState::RegisterPicking),
        )?
        .on_enter_state(VamState::Normal, Session::on_enter_normal)
        .on_exit_state(VamState::Normal, Session::on_exit_normal)
        .on_enter_state(VamState::Moving, Session::on_enter_moving)
        .on_exit_state(VamState::Moving, Session::on_exit_moving)
        .on_enter_state(VamState::RegisterPicking, Session::on_enter_register_picking)
        .on_exit_state(VamState::RegisterPicking, Session::on_exit_register_picking)
        .build(session)
}

/// Authoritative state of the viewport tool.
///
/// Not thread-safe: call only from the host's UI/main thread. A process
/// normally holds exactly one, see [`crate::interaction::global`].
pub struct VamCore {
    session: Session,
    machine: VamMachine,
    handlers: Handlers,
}

impl VamCore {
    /// Create a core in `normal`. `on_enter_normal` runs once, here.
    pub fn try_new() -> Result<Self, BuildError> {
        let mut session = Session::new();
        let machine = build_machine(&mut session)?;
        Ok(Self {
            session,
            machine,
            handlers: Handlers::default(),
        })
    }

    /// Like [`VamCore::try_new`]. The table in [`build_machine`] only names
    /// declared states, so building it cannot fail.
    pub fn new() -> Self {
        Self::try_new().expect("interaction transition table is valid")
    }

    /// Transform settings and scratch data.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The current interaction state.
    pub fn current_state(&self) -> VamState {
        *self.machine.current_state()
    }

    /// Is the core in `state`?
    pub fn is_state(&self, state: VamState) -> bool {
        self.machine.is_state(&state)
    }

    /// Is the core in `normal`?
    pub fn is_normal(&self) -> bool {
        self.is_state(VamState::Normal)
    }

    /// Is the core in `moving`?
    pub fn is_moving(&self) -> bool {
        self.is_state(VamState::Moving)
    }

    /// Is the core in `register_picking`?
    pub fn is_register_picking(&self) -> bool {
        self.is_state(VamState::RegisterPicking)
    }

    pub fn history(&self) -> &StateHistory<VamState> {
        self.machine.history()
    }

    /// Fire `trigger`; `false` (with a logged warning) if nothing happened.
    pub fn fire(&mut self, trigger: VamTrigger) -> bool {
        self.machine.trigger(&mut self.session, &trigger)
    }

    /// `normal` -> `moving`.
    pub fn begin_move(&mut self) -> bool {
        self.fire(VamTrigger::BeginMove)
    }

    /// `moving` or `register_picking` -> `normal`.
    pub fn return_to_normal(&mut self) -> bool {
        self.fire(VamTrigger::ReturnToNormal)
    }

    /// `normal` -> `register_picking`.
    pub fn begin_register_pick(&mut self) -> bool {
        self.fire(VamTrigger::BeginRegisterPick)
    }

    /// Install the input handler for `state`, returning the previous one.
    pub fn set_handler(
        &mut self,
        state: VamState,
        handler: Box<dyn StateHandler>,
    ) -> Box<dyn StateHandler> {
        self.handlers.replace(state, handler)
    }

    fn apply(&mut self, request: Option<VamTrigger>) {
        if let Some(trigger) = request {
            self.fire(trigger);
        }
    }

    pub fn handle_mouse_event(&mut self, event: &MouseEvent) {
        let state = self.current_state();
        let request = self
            .handlers
            .for_state(state)
            .handle_mouse(&mut self.session, event);
        self.apply(request);
    }

    /// Forward a key to the current state's handler, unless it is one of
    /// the exit-tool keys.
    pub fn handle_key_event(&mut self, event: &KeyEvent) -> KeyOutcome {
        if event.is_exit_tool() {
            log::info!("Exit key pressed, leaving tool");
            return KeyOutcome::ExitTool;
        }
        let state = self.current_state();
        let request = self
            .handlers
            .for_state(state)
            .handle_key(&mut self.session, event);
        self.apply(request);
        KeyOutcome::Forwarded
    }

    /// Per-frame hook, dispatched like input events.
    pub fn update(&mut self) {
        let state = self.current_state();
        let request = self.handlers.for_state(state).update(&mut self.session);
        self.apply(request);
    }

    /// Set the transform mode.
    pub fn set_transform_mode(&mut self, mode: TransformMode) {
        self.session.set_mode(mode);
    }

    /// Set the axis constraint.
    pub fn set_axis_constraint(&mut self, axis: AxisConstraint) {
        self.session.set_axis(axis);
    }

    /// Set the reference frame.
    pub fn set_reference_frame(&mut self, frame: ReferenceFrame) {
        self.session.set_frame(frame);
    }

    /// Set the transform mode by name; unrecognized names leave it unchanged.
    pub fn set_transform_mode_named(&mut self, name: &str) -> Result<(), InvalidModeValue> {
        self.set_transform_mode(name.parse()?);
        Ok(())
    }

    /// Set the axis constraint by name (`none`, `x`, `y`, `z`).
    pub fn set_axis_constraint_named(&mut self, name: &str) -> Result<(), InvalidModeValue> {
        self.set_axis_constraint(name.parse()?);
        Ok(())
    }

    /// Set the reference frame by name (`screen`, `local`, `world`).
    pub fn set_reference_frame_named(&mut self, name: &str) -> Result<(), InvalidModeValue> {
        self.set_reference_frame(name.parse()?);
        Ok(())
    }

    /// screen -> local -> world -> screen
    pub fn cycle_reference_frame(&mut self) -> ReferenceFrame {
        self.session.cycle_frame()
    }

    /// The host activated the tool.
    pub fn tool_activated(&mut self) {
        log::info!("Tool active");
        self.settle_to_normal();
    }

    /// The host deactivated the tool.
    pub fn tool_deactivated(&mut self) {
        log::info!("Tool deactivated");
        self.settle_to_normal();
    }

    fn settle_to_normal(&mut self) {
        if !self.is_normal() {
            self.return_to_normal();
        }
    }
}

impl Default for VamCore {
    fn default() -> Self {
        Self::new()
    }
}
