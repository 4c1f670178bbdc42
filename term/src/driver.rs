use sweeper_core::{GameSession, OpenOutcome};

use crate::command::Command;

/// What the loop should do after a command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Redraw,
    Idle,
    Help,
    Quit,
}

/// Applies one command. Board actions are dropped once the game has ended.
pub fn apply(session: &mut GameSession, command: Command) -> anyhow::Result<Step> {
    let step = match command {
        Command::Open(_) | Command::Flag(_) if session.phase().is_final() => {
            log::debug!("Ignoring {:?}, game is over", command);
            Step::Idle
        }
        Command::Open(coords) => {
            let outcome = session.open(coords);
            match outcome {
                OpenOutcome::Detonated => log::info!("Mine hit at {:?}", coords),
                OpenOutcome::Cleared => log::info!("Board cleared"),
                _ => {}
            }
            redraw_if(outcome.changed())
        }
        Command::Flag(coords) => redraw_if(session.toggle_flag(coords).changed()),
        Command::Reset(None) => {
            session.restart();
            Step::Redraw
        }
        Command::Reset(Some(difficulty)) => {
            session.reset(difficulty.config())?;
            Step::Redraw
        }
        Command::Help => Step::Help,
        Command::Quit => Step::Quit,
    };
    Ok(step)
}

fn redraw_if(updated: bool) -> Step {
    if updated { Step::Redraw } else { Step::Idle }
}
