//! Media Player State Machine
//!
//! This example walks a small player through events, direct jumps,
//! undo and redo.
//!
//! Key concepts:
//! - Event-driven transitions via the configured transition tables
//! - Direct jumps with `change_state`
//! - Linear undo/redo with redo invalidated by new changes
//!
//! Run with: RUST_LOG=debug cargo run --example media_player

use retrace::machine::FiniteStateMachine;
use retrace::machine_config;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), retrace::FsmError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Media Player State Machine ===\n");

    let config = machine_config! {
        initial: idle,
        idle { start => running },
        running { stop => idle, pause => paused },
        paused { resume => running, stop => idle },
    };

    let mut player = FiniteStateMachine::new(config)?;
    println!("Initial state: {}", player.state());
    println!("States handling 'stop': {:?}\n", player.states(Some("stop")));

    player.trigger("start")?;
    player.trigger("pause")?;
    println!("After start, pause: {}", player.state());

    if let Err(error) = player.trigger("start") {
        println!("Rejected: {error}");
    }

    player.undo();
    player.undo();
    println!("After two undos: {}", player.state());

    player.redo();
    println!("After redo: {}", player.state());

    player.change_state("idle")?;
    println!("Jumped to: {} (redo available: {})", player.state(), player.can_redo());

    println!("\nPath taken:");
    for transition in player.history().journal() {
        println!("  {} -> {} ({:?})", transition.from, transition.to, transition.kind);
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
