use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use snapshot::*;
pub use types::*;

mod board;
mod cell;
mod engine;
mod error;
mod generator;
mod snapshot;
mod types;

/// Cells around the first click (the click itself included) that never hold a mine.
pub const SAFE_ZONE_CELLS: CellCount = 9;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Rejects configurations where the safe first-click zone could not be carved out.
    pub fn new((width, height): Coord2, mines: CellCount) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GameError::EmptyBoard);
        }
        let max = Self::max_mines((width, height));
        if mines > max {
            return Err(GameError::TooManyMines {
                requested: mines,
                max,
            });
        }
        Ok(Self::new_unchecked((width, height), mines))
    }

    pub const fn max_mines((width, height): Coord2) -> CellCount {
        area((width, height)).saturating_sub(SAFE_ZONE_CELLS)
    }

    pub const fn width(&self) -> Coord {
        self.size.0
    }

    pub const fn height(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        area(self.size)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Difficulty::default().config()
    }
}

impl From<Difficulty> for GameConfig {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.config()
    }
}

/// The three conventional presets.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Beginner, Self::Intermediate, Self::Expert];

    pub const fn config(self) -> GameConfig {
        match self {
            Self::Beginner => GameConfig::new_unchecked((9, 9), 10),
            Self::Intermediate => GameConfig::new_unchecked((16, 16), 40),
            Self::Expert => GameConfig::new_unchecked((30, 16), 99),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Expert => "expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseDifficultyError(s.to_owned()))
    }
}

/// What [`GameSession::toggle_flag`] did to a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    NoChange,
    Placed,
    Removed,
}

impl FlagOutcome {
    /// How the outcome moves the mines-remaining counter.
    pub const fn counter_delta(self) -> i64 {
        match self {
            Self::NoChange => 0,
            Self::Placed => -1,
            Self::Removed => 1,
        }
    }

    pub const fn changed(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// What [`GameSession::open`] did to the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OpenOutcome {
    NoChange,
    /// Number of cells the action opened, cascade included. The game goes on.
    Opened(CellCount),
    Detonated,
    /// The last safe cell was opened.
    Cleared,
}

impl OpenOutcome {
    pub const fn changed(self) -> bool {
        !matches!(self, Self::NoChange)
    }

    pub const fn ends_game(self) -> bool {
        matches!(self, Self::Detonated | Self::Cleared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid_configs() {
        for difficulty in Difficulty::ALL {
            let preset = difficulty.config();
            assert_eq!(GameConfig::new(preset.size, preset.mines), Ok(preset));
        }
        assert_eq!(Difficulty::Expert.config().total_cells(), 480);
    }

    #[test]
    fn config_rejects_empty_board() {
        assert_eq!(GameConfig::new((0, 5), 0), Err(GameError::EmptyBoard));
        assert_eq!(GameConfig::new((5, 0), 0), Err(GameError::EmptyBoard));
    }

    #[test]
    fn config_leaves_room_for_safe_zone() {
        assert!(GameConfig::new((4, 4), 7).is_ok());
        assert_eq!(
            GameConfig::new((4, 4), 8),
            Err(GameError::TooManyMines {
                requested: 8,
                max: 7
            })
        );
        assert_eq!(GameConfig::max_mines((2, 2)), 0);
        assert!(GameConfig::new((2, 2), 0).is_ok());
        assert!(GameConfig::new((2, 2), 1).is_err());
    }

    #[test]
    fn difficulty_parses_names() {
        assert_eq!("expert".parse(), Ok(Difficulty::Expert));
        assert_eq!(" Intermediate ".parse(), Ok(Difficulty::Intermediate));
        assert!("nightmare".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::Beginner.to_string(), "beginner");
    }

    #[test]
    fn outcomes_report_changes() {
        assert!(!OpenOutcome::NoChange.changed());
        assert!(OpenOutcome::Opened(1).changed());
        assert!(!OpenOutcome::Opened(4).ends_game());
        assert!(OpenOutcome::Detonated.ends_game());
        assert!(OpenOutcome::Cleared.ends_game());

        assert_eq!(FlagOutcome::Placed.counter_delta(), -1);
        assert_eq!(FlagOutcome::Removed.counter_delta(), 1);
        assert_eq!(FlagOutcome::NoChange.counter_delta(), 0);
        assert!(!FlagOutcome::NoChange.changed());
    }
}
