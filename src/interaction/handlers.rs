//! Per-state input handlers.
//!
//! Every interaction state owns one [`StateHandler`]. The built-in handlers
//! do nothing; hosts install their own to implement selection, transform
//! dragging and picking. A handler cannot fire triggers directly: it returns
//! the trigger it wants and the core fires it once the handler has returned.

use super::events::{KeyEvent, MouseEvent};
use super::session::Session;
use super::state::{VamState, VamTrigger};

/// Input handling for one interaction state.
pub trait StateHandler {
    fn handle_mouse(&mut self, _session: &mut Session, _event: &MouseEvent) -> Option<VamTrigger> {
        None
    }

    fn handle_key(&mut self, _session: &mut Session, _event: &KeyEvent) -> Option<VamTrigger> {
        None
    }

    /// Per-frame hook.
    fn update(&mut self, _session: &mut Session) -> Option<VamTrigger> {
        None
    }
}

/// Selection handling in `normal`.
#[derive(Debug, Default)]
pub struct NormalHandler;

impl StateHandler for NormalHandler {}

/// Transform preview in `moving`.
#[derive(Debug, Default)]
pub struct MovingHandler;

impl StateHandler for MovingHandler {}

#[derive(Debug, Default)]
pub struct RegisterPickingHandler;

impl StateHandler for RegisterPickingHandler {}

/// One handler per interaction state.
pub struct Handlers {
    normal: Box<dyn StateHandler>,
    moving: Box<dyn StateHandler>,
    register_picking: Box<dyn StateHandler>,
}

impl Handlers {
    /// The handler input is dispatched to while in `state`.
    pub fn for_state(&mut self, state: VamState) -> &mut dyn StateHandler {
        match state {
            VamState::Normal => self.normal.as_mut(),
            VamState::Moving => self.moving.as_mut(),
            VamState::RegisterPicking => self.register_picking.as_mut(),
        }
    }

    /// Install `handler` for `state`, returning the one it replaces.
    pub fn replace(
        &mut self,
        state: VamState,
        handler: Box<dyn StateHandler>,
    ) -> Box<dyn StateHandler> {
        let slot = match state {
            VamState::Normal => &mut self.normal,
            VamState::Moving => &mut self.moving,
            VamState::RegisterPicking => &mut self.register_picking,
        };
        std::mem::replace(slot, handler)
    }
}

impl Default for Handlers {
    fn default() -> Self {
        Self {
            normal: Box::new(NormalHandler),
            moving: Box::new(MovingHandler),
            register_picking: Box::new(RegisterPickingHandler),
        }
    }
}
