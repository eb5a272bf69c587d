//! Named commands the host binds to menus and hotkeys.
//!
//! There is one command per trigger and per transform setting. Each knows
//! the runtime-command name, annotation and category the host registers it
//! under, and how to apply itself to a [`VamCore`].

mod bindings;

pub use bindings::{HotkeyBinding, HotkeyConfig, KeyEdge, DEFAULT_HOTKEY_CONTEXT};

use crate::interaction::{AxisConstraint, TransformMode, VamCore};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Category every command is registered under.
pub const COMMAND_CATEGORY: &str = "VAM";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse hotkey config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Unknown command '{0}'")]
    UnknownCommand(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    #[serde(rename = "vamToMoving")]
    ToMoving,
    #[serde(rename = "vamToNormal")]
    ToNormal,
    #[serde(rename = "vamToRegisterPicking")]
    ToRegisterPicking,
    #[serde(rename = "vamSetTranslate")]
    SetTranslate,
    #[serde(rename = "vamSetRotate")]
    SetRotate,
    #[serde(rename = "vamSetScale")]
    SetScale,
    #[serde(rename = "vamSetAxisX")]
    SetAxisX,
    #[serde(rename = "vamSetAxisY")]
    SetAxisY,
    #[serde(rename = "vamSetAxisZ")]
    SetAxisZ,
    #[serde(rename = "vamSetAxisNone")]
    SetAxisNone,
    #[serde(rename = "vamCycleBase")]
    CycleBase,
}

impl Command {
    pub const ALL: [Self; 11] = [
        Self::ToMoving,
        Self::ToNormal,
        Self::ToRegisterPicking,
        Self::SetTranslate,
        Self::SetRotate,
        Self::SetScale,
        Self::SetAxisX,
        Self::SetAxisY,
        Self::SetAxisZ,
        Self::SetAxisNone,
        Self::CycleBase,
    ];

    /// Runtime-command name.
    pub fn name(self) -> &'static str {
        match self {
            Self::ToMoving => "vamToMoving",
            Self::ToNormal => "vamToNormal",
            Self::ToRegisterPicking => "vamToRegisterPicking",
            Self::SetTranslate => "vamSetTranslate",
            Self::SetRotate => "vamSetRotate",
            Self::SetScale => "vamSetScale",
            Self::SetAxisX => "vamSetAxisX",
            Self::SetAxisY => "vamSetAxisY",
            Self::SetAxisZ => "vamSetAxisZ",
            Self::SetAxisNone => "vamSetAxisNone",
            Self::CycleBase => "vamCycleBase",
        }
    }

    /// Human-readable label shown in the host's command list.
    pub fn annotation(self) -> &'static str {
        match self {
            Self::ToMoving => "VAM: Enter moving state",
            Self::ToNormal => "VAM: Return to normal state",
            Self::ToRegisterPicking => "VAM: Enter register picking state",
            Self::SetTranslate => "VAM: Set translate mode",
            Self::SetRotate => "VAM: Set rotate mode",
            Self::SetScale => "VAM: Set scale mode",
            Self::SetAxisX => "VAM: Constrain to X axis",
            Self::SetAxisY => "VAM: Constrain to Y axis",
            Self::SetAxisZ => "VAM: Constrain to Z axis",
            Self::SetAxisNone => "VAM: Remove axis constraint",
            Self::CycleBase => "VAM: Cycle base space (screen/local/world)",
        }
    }

    /// Category the command is registered under.
    pub fn category(self) -> &'static str {
        COMMAND_CATEGORY
    }

    /// Apply the command. Returns `false` when a trigger command could not
    /// fire from the current state; setters always succeed.
    pub fn execute(self, core: &mut VamCore) -> bool {
        log::debug!("Running command {}", self.name());
        match self {
            Self::ToMoving => core.begin_move(),
            Self::ToNormal => core.return_to_normal(),
            Self::ToRegisterPicking => core.begin_register_pick(),
            Self::SetTranslate => set_mode(core, TransformMode::Translate),
            Self::SetRotate => set_mode(core, TransformMode::Rotate),
            Self::SetScale => set_mode(core, TransformMode::Scale),
            Self::SetAxisX => set_axis(core, AxisConstraint::X),
            Self::SetAxisY => set_axis(core, AxisConstraint::Y),
            Self::SetAxisZ => set_axis(core, AxisConstraint::Z),
            Self::SetAxisNone => set_axis(core, AxisConstraint::Unconstrained),
            Self::CycleBase => {
                core.cycle_reference_frame();
                true
            }
        }
    }
}

fn set_mode(core: &mut VamCore, mode: TransformMode) -> bool {
    core.set_transform_mode(mode);
    true
}

fn set_axis(core: &mut VamCore, axis: AxisConstraint) -> bool {
    core.set_axis_constraint(axis);
    true
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Command {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|command| command.name() == s)
            .ok_or_else(|| ConfigError::UnknownCommand(s.to_string()))
    }
}
