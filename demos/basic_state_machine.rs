//! Basic State Machine
//!
//! This example walks a process through idle -> running -> stopped.
//!
//! Key concepts:
//! - Registering transitions with chained calls
//! - Querying permitted targets before moving
//! - Rejected transitions leave the state untouched
//!
//! Run with: RUST_LOG=debug cargo run --example basic_state_machine

use micromachine::core::TransitionTable;
use micromachine::state_enum;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

state_enum! {
    enum ProcessState {
        Idle,
        Running,
        Stopped,
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_target(false))
        .init();

    let machine = TransitionTable::new(ProcessState::Idle);
    machine
        .add_transition(ProcessState::Idle, ProcessState::Running)
        .add_transition(ProcessState::Running, ProcessState::Stopped)
        .add_transition(ProcessState::Stopped, ProcessState::Idle);

    tracing::info!(state = %machine.state(), "machine created");
    tracing::info!(targets = ?machine.valid_transitions(), "permitted from here");

    if let Err(err) = machine.transition(ProcessState::Stopped) {
        tracing::warn!(%err, "cannot stop an idle process");
    }

    for next in [ProcessState::Running, ProcessState::Stopped, ProcessState::Idle] {
        match machine.transition(next) {
            Ok(()) => tracing::info!(state = %machine.state(), "moved"),
            Err(err) => tracing::error!(%err, "unexpected rejection"),
        }
    }

    tracing::info!(machine = ?machine, "done");
}
