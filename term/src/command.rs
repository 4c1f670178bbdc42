use anyhow::{Context, bail};
use sweeper_core::{Coord, Coord2, Difficulty};

pub const HELP: &str = "\
USAGE:
    o X Y        Open the cell at column X, row Y
    f X Y        Flag or unflag the cell at column X, row Y
    r [PRESET]   New game, optionally switching to beginner/intermediate/expert
    h            Print this help
    q            Quit";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Open(Coord2),
    Flag(Coord2),
    Reset(Option<Difficulty>),
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> anyhow::Result<Option<Self>> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match (name, args.as_slice()) {
            ("o" | "open", [x, y]) => Self::Open(parse_coords(x, y)?),
            ("f" | "flag", [x, y]) => Self::Flag(parse_coords(x, y)?),
            ("o" | "open" | "f" | "flag", _) => bail!("{name} takes two coordinates"),
            ("r" | "reset", []) => Self::Reset(None),
            ("r" | "reset", [preset]) => Self::Reset(Some(preset.parse()?)),
            ("h" | "help", _) => Self::Help,
            ("q" | "quit", _) => Self::Quit,
            _ => bail!("unknown command {line:?}, type h for help"),
        };
        Ok(Some(command))
    }
}

fn parse_coords(x: &str, y: &str) -> anyhow::Result<Coord2> {
    let x: Coord = x.parse().with_context(|| format!("bad column {x:?}"))?;
    let y: Coord = y.parse().with_context(|| format!("bad row {y:?}"))?;
    Ok((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_actions() {
        assert_eq!(Command::parse("o 3 4").unwrap(), Some(Command::Open((3, 4))));
        assert_eq!(Command::parse("  flag 0 8 ").unwrap(), Some(Command::Flag((0, 8))));
        assert_eq!(Command::parse("r").unwrap(), Some(Command::Reset(None)));
        assert_eq!(
            Command::parse("reset expert").unwrap(),
            Some(Command::Reset(Some(Difficulty::Expert)))
        );
        assert_eq!(Command::parse("q").unwrap(), Some(Command::Quit));
        assert_eq!(Command::parse("").unwrap(), None);
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(Command::parse("o 1").is_err());
        assert!(Command::parse("o -1 2").is_err());
        assert!(Command::parse("f a b").is_err());
        assert!(Command::parse("r hard").is_err());
        assert!(Command::parse("dig 1 1").is_err());
    }
}
