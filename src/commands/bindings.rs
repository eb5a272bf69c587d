//! Hotkey bindings for the tool's hotkey context.
//!
//! A key may be bound to several commands; they run in declaration order.
//! Bindings are read from TOML, never written back.
//!
//! ```toml
//! context = "vamToolContext"
//!
//! [[bindings]]
//! key = "g"
//! command = "vamToMoving"
//!
//! [[bindings]]
//! key = "Escape"
//! command = "vamToNormal"
//! edge = "press"
//! ```

use super::{Command, ConfigError};
use crate::interaction::VamCore;
use serde::{Deserialize, Serialize};

/// Hotkey context active while the tool is.
pub const DEFAULT_HOTKEY_CONTEXT: &str = "vamToolContext";

/// Whether a binding fires on key press or key release.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyEdge {
    #[default]
    Press,
    Release,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotkeyBinding {
    pub key: String,
    pub command: Command,
    #[serde(default)]
    pub edge: KeyEdge,
}

impl HotkeyBinding {
    pub fn press(key: &str, command: Command) -> Self {
        Self {
            key: key.to_string(),
            command,
            edge: KeyEdge::Press,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotkeyConfig {
    pub context: String,
    pub bindings: Vec<HotkeyBinding>,
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        Self {
            context: DEFAULT_HOTKEY_CONTEXT.to_string(),
            bindings: vec![
                HotkeyBinding::press("g", Command::ToMoving),
                HotkeyBinding::press("Escape", Command::ToNormal),
                HotkeyBinding::press("g", Command::SetTranslate),
                HotkeyBinding::press("r", Command::SetRotate),
                HotkeyBinding::press("s", Command::SetScale),
                HotkeyBinding::press("x", Command::SetAxisX),
                HotkeyBinding::press("y", Command::SetAxisY),
                HotkeyBinding::press("z", Command::SetAxisZ),
                HotkeyBinding::press("Tab", Command::CycleBase),
            ],
        }
    }
}

impl HotkeyConfig {
    /// Parse a config. Missing fields fall back to the defaults.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        log::debug!(
            "Loaded {} hotkey bindings for context '{}'",
            config.bindings.len(),
            config.context
        );
        Ok(config)
    }

    /// Commands bound to `key` on `edge`, in declaration order. Keys match
    /// exactly, so `g` and `G` are distinct.
    pub fn commands_for<'a>(
        &'a self,
        key: &'a str,
        edge: KeyEdge,
    ) -> impl Iterator<Item = Command> + 'a {
        self.bindings
            .iter()
            .filter(move |binding| binding.key == key && binding.edge == edge)
            .map(|binding| binding.command)
    }

    /// Run every command bound to `key` on `edge`. Returns how many ran.
    pub fn dispatch(&self, core: &mut VamCore, key: &str, edge: KeyEdge) -> usize {
        let mut ran = 0;
        for command in self.commands_for(key, edge) {
            command.execute(core);
            ran += 1;
        }
        if ran == 0 {
            log::debug!("No binding for '{}' in '{}'", key, self.context);
        }
        ran
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::{ReferenceFrame, TransformMode, VamState};

    #[test]
    fn default_table_binds_g_twice_in_order() {
        let config = HotkeyConfig::default();
        let commands: Vec<Command> = config.commands_for("g", KeyEdge::Press).collect();
        assert_eq!(commands, vec![Command::ToMoving, Command::SetTranslate]);
        assert_eq!(config.context, DEFAULT_HOTKEY_CONTEXT);
        assert_eq!(config.commands_for("g", KeyEdge::Release).count(), 0);
    }

    #[test]
    fn dispatch_g_enters_moving_in_translate_mode() {
        let config = HotkeyConfig::default();
        let mut core = VamCore::new();
        core.set_transform_mode(TransformMode::Scale);

        assert_eq!(config.dispatch(&mut core, "g", KeyEdge::Press), 2);
        assert_eq!(core.current_state(), VamState::Moving);
        assert_eq!(core.session().mode(), TransformMode::Translate);

        config.dispatch(&mut core, "Escape", KeyEdge::Press);
        assert_eq!(core.current_state(), VamState::Normal);
    }

    #[test]
    fn dispatch_unbound_key_runs_nothing() {
        let config = HotkeyConfig::default();
        let mut core = VamCore::new();
        assert_eq!(config.dispatch(&mut core, "G", KeyEdge::Press), 0);
        assert!(core.is_normal());
    }

    #[test]
    fn dispatch_tab_cycles_base() {
        let config = HotkeyConfig::default();
        let mut core = VamCore::new();
        config.dispatch(&mut core, "Tab", KeyEdge::Press);
        assert_eq!(core.session().frame(), ReferenceFrame::Local);
    }

    #[test]
    fn parses_toml_bindings() {
        let config = HotkeyConfig::from_toml(
            r#"
            context = "customContext"

            [[bindings]]
            key = "m"
            command = "vamToMoving"

            [[bindings]]
            key = "m"
            command = "vamToNormal"
            edge = "release"
            "#,
        )
        .unwrap();

        assert_eq!(config.context, "customContext");
        assert_eq!(
            config.bindings,
            vec![
                HotkeyBinding::press("m", Command::ToMoving),
                HotkeyBinding {
                    key: "m".to_string(),
                    command: Command::ToNormal,
                    edge: KeyEdge::Release,
                },
            ]
        );
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config = HotkeyConfig::from_toml("").unwrap();
        assert_eq!(config, HotkeyConfig::default());
    }

    #[test]
    fn unknown_command_is_a_parse_error() {
        let result = HotkeyConfig::from_toml(
            r#"
            [[bindings]]
            key = "j"
            command = "vamJump"
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
