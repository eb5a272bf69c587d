//! Interactive Session Walkthrough
//!
//! Drives the interaction core the way a host viewport would: tool
//! activation, hotkeys, input events and an invalid transition.
//!
//! Run with: RUST_LOG=debug cargo run --example vam_session

use vam::commands::{HotkeyConfig, KeyEdge};
use vam::interaction::{KeyEvent, KeyOutcome, MouseAction, MouseEvent, VamCore};

fn main() {
    env_logger::init();

    println!("=== VAM Interaction Session ===\n");

    let mut core = VamCore::new();
    let hotkeys = HotkeyConfig::default();
    core.tool_activated();
    println!("Initial state: {}", core.current_state());

    println!("\nPress 'g' (enter moving, translate mode):");
    hotkeys.dispatch(&mut core, "g", KeyEdge::Press);
    println!(
        "  state = {}, mode = {}",
        core.current_state(),
        core.session().mode()
    );

    println!("\nPress 'x' then 'Tab' twice:");
    for key in ["x", "Tab", "Tab"] {
        hotkeys.dispatch(&mut core, key, KeyEdge::Press);
    }
    println!(
        "  axis = {}, frame = {}",
        core.session().axis(),
        core.session().frame()
    );

    println!("\nDrag in the viewport:");
    core.handle_mouse_event(&MouseEvent::new(MouseAction::Press, 120, 80));
    core.handle_mouse_event(&MouseEvent::new(MouseAction::Drag, 140, 85));
    core.handle_mouse_event(&MouseEvent::new(MouseAction::Release, 140, 85));
    println!("  state = {}", core.current_state());

    println!("\nTry register picking while moving (no direct path):");
    let fired = core.begin_register_pick();
    println!("  fired = {}, state = {}", fired, core.current_state());

    println!("\nPress Escape hotkey, then begin register picking:");
    hotkeys.dispatch(&mut core, "Escape", KeyEdge::Press);
    core.begin_register_pick();
    println!("  state = {}", core.current_state());

    println!("\nPress 'q' in the viewport:");
    if core.handle_key_event(&KeyEvent::from_char('q')) == KeyOutcome::ExitTool {
        core.tool_deactivated();
    }
    println!("  state = {}", core.current_state());

    println!("\nTransition history:");
    for transition in core.history().transitions() {
        println!(
            "  {:<20} {} -> {}",
            transition.trigger, transition.from, transition.to
        );
    }

    if let Some(elapsed) = core.history().duration() {
        println!("  first to last transition: {:?}", elapsed);
    }

    println!("\n=== Session Complete ===");
}
