//! Transform settings shared by every interaction state.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A setter or parser received a name outside the recognized set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} value '{value}' (expected one of: {expected})")]
pub struct InvalidModeValue {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

/// Active transform kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformMode {
    #[default]
    Translate,
    Rotate,
    Scale,
}

impl TransformMode {
    pub const ALL: [Self; 3] = [Self::Translate, Self::Rotate, Self::Scale];

    /// Lowercase name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Translate => "translate",
            Self::Rotate => "rotate",
            Self::Scale => "scale",
        }
    }
}

/// Axis a transform is restricted to, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisConstraint {
    #[default]
    #[serde(rename = "none")]
    Unconstrained,
    X,
    Y,
    Z,
}

impl AxisConstraint {
    pub const ALL: [Self; 4] = [Self::Unconstrained, Self::X, Self::Y, Self::Z];

    /// Lowercase name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Unconstrained => "none",
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        }
    }
}

/// Coordinate space a transform is expressed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceFrame {
    #[default]
    Screen,
    Local,
    World,
}

impl ReferenceFrame {
    pub const ALL: [Self; 3] = [Self::Screen, Self::Local, Self::World];

    /// Lowercase name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Screen => "screen",
            Self::Local => "local",
            Self::World => "world",
        }
    }

    /// Next frame in the cycle screen -> local -> world -> screen.
    pub fn next(self) -> Self {
        match self {
            Self::Screen => Self::Local,
            Self::Local => Self::World,
            Self::World => Self::Screen,
        }
    }
}

macro_rules! named_setting {
    ($ty:ident, $kind:literal, $expected:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = InvalidModeValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .into_iter()
                    .find(|candidate| candidate.name() == s)
                    .ok_or_else(|| InvalidModeValue {
                        kind: $kind,
                        value: s.to_string(),
                        expected: $expected,
                    })
            }
        }
    };
}

named_setting!(TransformMode, "transform mode", "translate, rotate, scale");
named_setting!(AxisConstraint, "axis constraint", "none, x, y, z");
named_setting!(ReferenceFrame, "reference frame", "screen, local, world");
