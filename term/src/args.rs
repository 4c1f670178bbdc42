use anyhow::Context;
use clap::Parser;
use sweeper_core::{CellCount, Coord, Difficulty, GameConfig};

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper in the terminal", long_about = None)]
pub struct Args {
    /// What log level to use
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,

    /// Preset board: beginner, intermediate or expert
    #[arg(short, long, default_value_t = Difficulty::Beginner)]
    pub difficulty: Difficulty,

    /// Custom board width, overrides the preset
    #[arg(long, requires_all = ["height", "mines"])]
    pub width: Option<Coord>,

    /// Custom board height, overrides the preset
    #[arg(long, requires_all = ["width", "mines"])]
    pub height: Option<Coord>,

    /// Custom mine count, overrides the preset
    #[arg(long, requires_all = ["width", "height"])]
    pub mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,
}

impl Args {
    pub fn config(&self) -> anyhow::Result<GameConfig> {
        match (self.width, self.height, self.mines) {
            (Some(width), Some(height), Some(mines)) => GameConfig::new((width, height), mines)
                .with_context(|| format!("invalid custom board {width}x{height} with {mines} mines")),
            _ => Ok(self.difficulty.config()),
        }
    }

    /// Chosen once per process; every game in the session draws from it.
    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_beginner() {
        let args = Args::try_parse_from(["sweeper"]).unwrap();

        assert_eq!(args.config().unwrap(), Difficulty::Beginner.config());
        assert_eq!(args.seed, None);
    }

    #[test]
    fn parses_preset_and_seed() {
        let args = Args::try_parse_from(["sweeper", "-d", "expert", "--seed", "99"]).unwrap();

        assert_eq!(args.config().unwrap(), Difficulty::Expert.config());
        assert_eq!(args.seed(), 99);
    }

    #[test]
    fn custom_board_overrides_preset() {
        let args = Args::try_parse_from([
            "sweeper", "-d", "expert", "--width", "5", "--height", "4", "--mines", "3",
        ])
        .unwrap();

        assert_eq!(
            args.config().unwrap(),
            GameConfig::new_unchecked((5, 4), 3)
        );
    }

    #[test]
    fn custom_board_needs_all_dimensions() {
        assert!(Args::try_parse_from(["sweeper", "--width", "5"]).is_err());
    }

    #[test]
    fn overfull_custom_board_is_an_error() {
        let args = Args::try_parse_from([
            "sweeper", "--width", "3", "--height", "3", "--mines", "1",
        ])
        .unwrap();

        assert!(args.config().is_err());
    }

    #[test]
    fn unknown_preset_is_rejected() {
        assert!(Args::try_parse_from(["sweeper", "-d", "insane"]).is_err());
    }
}
