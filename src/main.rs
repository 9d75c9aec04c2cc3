//! Demonstration driver: runs the agent for a fixed number of ticks.
//!
//! Each tick prints a header, executes the actions the machine returns,
//! then advances the clock. Logs go to stderr; action lines go to stdout.

use agent_fsm::config::MachineConfig;
use agent_fsm::core::{run_actions, StateId};
use agent_fsm::machine::{FiniteStateMachine, StateFactory};
use agent_fsm::validation::validate_catalog;
use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use stillwater::validation::Validation;
use tracing::error;

#[derive(Debug, Parser)]
#[command(name = "agent-fsm", about = "Run the agent state machine for a number of ticks")]
struct Args {
    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of ticks to run (defaults to the clock modulus)
    #[arg(long)]
    ticks: Option<u32>,

    /// Clock cycle length
    #[arg(long)]
    modulus: Option<u32>,

    /// Initial state (Chatter, Quiet or Dummy)
    #[arg(long)]
    initial: Option<StateId>,
}

impl Args {
    fn into_config(self) -> Result<MachineConfig> {
        let mut config = match &self.config {
            Some(path) => MachineConfig::from_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => MachineConfig::default(),
        };

        if let Some(modulus) = self.modulus {
            config.modulus = modulus;
        }
        if let Some(ticks) = self.ticks {
            config.ticks = Some(ticks);
        }
        if let Some(initial) = self.initial {
            config.initial = initial;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("agent_fsm=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Args::parse().into_config()?;
    let factory = StateFactory::standard();

    if let Validation::Failure(violations) = validate_catalog(&factory, config.modulus) {
        for violation in violations.iter() {
            error!(%violation, "invalid state catalog");
        }
        bail!("state catalog does not fit a clock of {} ticks", config.modulus);
    }

    let mut clock = config.clock()?;
    let mut fsm = FiniteStateMachine::with_factory(factory, config.initial)?;

    println!("===== Start FiniteStateMachine =====");
    for tick in 0..config.ticks() {
        println!("=====Update FiniteStateMachine {tick} =====");
        let actions = fsm.tick(&clock)?;
        run_actions(&actions);
        clock.advance();
    }
    println!("===== Finish FiniteStateMachine =====");

    Ok(())
}
