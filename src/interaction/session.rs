//! Session model the interaction state machine runs its callbacks against.

use super::mode::{AxisConstraint, ReferenceFrame, TransformMode};
use std::collections::{HashMap, VecDeque};

/// Number of lifecycle callback names kept in the journal.
pub const JOURNAL_CAPACITY: usize = 32;

/// Transform settings and per-state scratch data for one tool session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    mode: TransformMode,
    axis: AxisConstraint,
    frame: ReferenceFrame,
    // Pre-transform values captured while moving, for cancel-and-restore.
    moving_initial_values: HashMap<String, f64>,
    journal: VecDeque<&'static str>,
}

impl Session {
    /// Session with every setting at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current transform mode.
    pub fn mode(&self) -> TransformMode {
        self.mode
    }

    /// Current axis constraint.
    pub fn axis(&self) -> AxisConstraint {
        self.axis
    }

    /// Current reference frame.
    pub fn frame(&self) -> ReferenceFrame {
        self.frame
    }

    /// Set the transform mode.
    pub fn set_mode(&mut self, mode: TransformMode) {
        self.mode = mode;
        log::info!("Transform mode: {}", mode);
    }

    /// Set the axis constraint.
    pub fn set_axis(&mut self, axis: AxisConstraint) {
        self.axis = axis;
        log::info!("Axis constraint: {}", axis);
    }

    /// Set the reference frame.
    pub fn set_frame(&mut self, frame: ReferenceFrame) {
        self.frame = frame;
        log::info!("Reference frame: {}", frame);
    }

    /// Advance the reference frame and return the new one.
    pub fn cycle_frame(&mut self) -> ReferenceFrame {
        self.set_frame(self.frame.next());
        self.frame
    }

    /// Values captured during the current move, keyed by attribute.
    pub fn moving_initial_values(&self) -> &HashMap<String, f64> {
        &self.moving_initial_values
    }

    /// Remember the value of `attribute` before the current move touched it.
    /// The first capture for an attribute wins.
    pub fn capture_initial_value(&mut self, attribute: impl Into<String>, value: f64) {
        self.moving_initial_values
            .entry(attribute.into())
            .or_insert(value);
    }

    /// Most recent lifecycle callbacks, oldest first.
    pub fn journal(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.journal.iter().copied()
    }

    /// Forget every journaled callback.
    pub fn clear_journal(&mut self) {
        self.journal.clear();
    }

    fn note(&mut self, callback: &'static str) {
        if self.journal.len() == JOURNAL_CAPACITY {
            self.journal.pop_front();
        }
        self.journal.push_back(callback);
    }

    pub fn on_enter_normal(&mut self) {
        log::info!("Entered NORMAL state - selection mode active");
        self.note("on_enter_normal");
    }

    pub fn on_exit_normal(&mut self) {
        log::debug!("Exiting NORMAL state");
        self.note("on_exit_normal");
    }

    pub fn on_enter_moving(&mut self) {
        log::info!("Entered MOVING state - transform mode active");
        self.moving_initial_values = HashMap::new();
        self.note("on_enter_moving");
    }

    pub fn on_exit_moving(&mut self) {
        log::debug!("Exiting MOVING state");
        self.moving_initial_values.clear();
        self.note("on_exit_moving");
    }

    pub fn on_enter_register_picking(&mut self) {
        log::info!("Entered REGISTER_PICKING state");
        self.note("on_enter_register_picking");
    }

    pub fn on_exit_register_picking(&mut self) {
        log::debug!("Exiting REGISTER_PICKING state");
        self.note("on_exit_register_picking");
    }

    pub fn before_moving(&mut self) {
        log::debug!("Preparing to enter moving mode");
        self.note("before_moving");
    }

    pub fn before_normal(&mut self) {
        log::debug!("Returning to normal mode");
        self.note("before_normal");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_uses_default_settings() {
        let session = Session::new();
        assert_eq!(session.mode(), TransformMode::Translate);
        assert_eq!(session.axis(), AxisConstraint::Unconstrained);
        assert_eq!(session.frame(), ReferenceFrame::Screen);
        assert!(session.moving_initial_values().is_empty());
        assert_eq!(session.journal().count(), 0);
    }

    #[test]
    fn cycle_frame_returns_to_start_after_three_steps() {
        let mut session = Session::new();
        assert_eq!(session.cycle_frame(), ReferenceFrame::Local);
        assert_eq!(session.cycle_frame(), ReferenceFrame::World);
        assert_eq!(session.cycle_frame(), ReferenceFrame::Screen);
    }

    #[test]
    fn moving_callbacks_reset_captured_values() {
        let mut session = Session::new();
        session.on_enter_moving();
        session.capture_initial_value("translateX", 1.5);
        session.capture_initial_value("translateX", 9.0);
        assert_eq!(session.moving_initial_values().get("translateX"), Some(&1.5));

        session.on_exit_moving();
        assert!(session.moving_initial_values().is_empty());
    }

    #[test]
    fn journal_is_bounded() {
        let mut session = Session::new();
        for _ in 0..JOURNAL_CAPACITY {
            session.before_moving();
        }
        session.before_normal();

        assert_eq!(session.journal().count(), JOURNAL_CAPACITY);
        assert_eq!(session.journal().last(), Some("before_normal"));
    }
}
