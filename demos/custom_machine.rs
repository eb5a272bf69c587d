//! Standalone State Machine
//!
//! The engine is independent of the viewport tool. This example declares a
//! small job machine with a shared "stop" trigger, specific and generic
//! hooks, and callbacks that receive fire arguments.
//!
//! Run with: cargo run --example custom_machine

use vam::builder::{simple_transition, StateMachineBuilder, TransitionBuilder};
use vam::core::State;
use vam::{state_enum, trigger_enum};

state_enum! {
    enum Job {
        Idle => "idle",
        Running => "running",
        Paused => "paused",
        Stopped => "stopped",
    }
}

trigger_enum! {
    enum Control {
        Start => "start",
        Pause => "pause",
        Stop => "stop",
    }
}

#[derive(Default)]
struct Worker {
    processed: u32,
}

fn main() {
    println!("=== Standalone State Machine ===\n");

    let mut worker = Worker::default();
    let mut machine = StateMachineBuilder::new()
        .states(Job::ALL.iter().copied())
        .initial(Job::Idle)
        .transition(
            TransitionBuilder::new()
                .trigger(Control::Start)
                .from_any([Job::Idle, Job::Paused])
                .to(Job::Running)
                .after(|worker: &mut Worker, batch: &u32| worker.processed += *batch),
        )
        .unwrap()
        .add_transition(simple_transition(Control::Pause, Job::Running, Job::Paused))
        .add_transition(simple_transition(Control::Stop, Job::Running, Job::Stopped))
        .add_transition(simple_transition(Control::Stop, Job::Paused, Job::Stopped))
        .on_enter_state(Job::Stopped, |worker: &mut Worker| {
            println!("  [stopped after {} items]", worker.processed)
        })
        .on_enter(|_: &mut Worker, state: &Job| println!("  [enter {}]", state.name()))
        .build(&mut worker)
        .unwrap();

    for (control, batch) in [
        (Control::Start, 10),
        (Control::Pause, 0),
        (Control::Pause, 0),
        (Control::Start, 5),
        (Control::Stop, 0),
        (Control::Start, 1),
    ] {
        let fired = machine.fire(&mut worker, &control, &batch);
        println!("{:<6} -> {:<8} fired = {}", control, machine.current_state(), fired);
    }

    println!("\nProcessed: {}", worker.processed);
    println!("\n=== Example Complete ===");
}
