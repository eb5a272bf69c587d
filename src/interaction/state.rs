//! Interaction states and the triggers that move between them.

use crate::{state_enum, trigger_enum};

state_enum! {
    /// Interaction mode of the viewport tool.
    pub enum VamState {
        /// Selection; the state the tool starts and rests in.
        Normal => "normal",
        /// An interactive transform is in progress.
        Moving => "moving",
        RegisterPicking => "register_picking",
    }
}

trigger_enum! {
    /// Requests to change interaction mode.
    pub enum VamTrigger {
        /// normal -> moving
        BeginMove => "begin_move",
        /// moving | register_picking -> normal
        ReturnToNormal => "return_to_normal",
        /// normal -> register_picking
        BeginRegisterPick => "begin_register_pick",
    }
}
