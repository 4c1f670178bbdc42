use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use sweeper_core::GameSession;

use args::Args;
use command::{Command, HELP};
use driver::Step;
use render::BoardView;

mod args;
mod command;
mod driver;
mod render;

fn init_logging(verbose: &clap_verbosity_flag::Verbosity) {
    tracing_subscriber::fmt()
        .with_max_level(verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();
}

fn prompt(out: &mut impl Write) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args.verbose);

    let config = args.config()?;
    let seed = args.seed();
    log::info!("seed: {}", seed);

    let mut session = GameSession::new(config, seed).context("could not start a game")?;
    let mut out = io::stdout().lock();
    write!(out, "{}", BoardView(&session.snapshot()))?;
    prompt(&mut out)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read command")?;
        let step = match Command::parse(&line) {
            Ok(Some(command)) => driver::apply(&mut session, command)?,
            Ok(None) => Step::Idle,
            Err(err) => {
                writeln!(out, "error: {err:#}")?;
                Step::Idle
            }
        };

        match step {
            Step::Redraw => write!(out, "{}", BoardView(&session.snapshot()))?,
            Step::Help => writeln!(out, "{HELP}")?,
            Step::Idle => {}
            Step::Quit => break,
        }
        prompt(&mut out)?;
    }

    log::debug!("Exiting");
    Ok(())
}
