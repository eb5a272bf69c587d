//! Input events delivered by the host viewport.

/// What the mouse did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseAction {
    Press,
    Drag,
    Release,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MouseButton {
    #[default]
    Left,
    Middle,
    Right,
}

/// A mouse event in viewport pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MouseEvent {
    pub action: MouseAction,
    pub button: MouseButton,
    pub x: i32,
    pub y: i32,
}

impl MouseEvent {
    /// Left-button event at `(x, y)`.
    pub fn new(action: MouseAction, x: i32, y: i32) -> Self {
        Self {
            action,
            button: MouseButton::Left,
            x,
            y,
        }
    }
}

/// A key-down event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: u32,
    pub text: Option<String>,
}

impl KeyEvent {
    /// Host key code for `q`.
    pub const KEY_Q: u32 = 113;
    /// Host key code for Escape.
    pub const KEY_ESCAPE: u32 = 4100;

    /// Key event with no text.
    pub fn new(code: u32) -> Self {
        Self { code, text: None }
    }

    /// Key event for a printable character.
    pub fn from_char(c: char) -> Self {
        Self {
            code: c as u32,
            text: Some(c.to_string()),
        }
    }

    /// Keys that always leave the tool, whatever the interaction state.
    pub fn is_exit_tool(&self) -> bool {
        matches!(self.code, Self::KEY_Q | Self::KEY_ESCAPE)
    }
}

/// What the core did with a key event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The host should switch away from the tool; the event was not forwarded.
    ExitTool,
    /// The event went to the current state's handler.
    Forwarded,
}
