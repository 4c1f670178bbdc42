use core::time::Duration;
use serde::{Deserialize, Serialize};
use web_time::Instant;

use crate::*;

/// Valid transitions:
/// - Playing -> Won
/// - Playing -> Lost
///
/// Both end states are terminal, only a reset starts a new `Playing` session.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Playing,
    Won,
    Lost,
}

impl Phase {
    /// Indicates the game has ended and no cells can be opened anymore
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Represents a game from the first click to a win or loss.
///
/// Mines are placed lazily on the first accepted open, so the first click and its
/// neighbors are always safe. Invalid actions (outside the board, on a cell that is not
/// closed, opening after the game ended) are silent no-ops.
#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,
    board: Board,
    phase: Phase,
    mines_remaining: i64,
    first_move_pending: bool,
    started_at: Option<Instant>,
    ended_at: Option<Instant>,
    generator: Box<dyn MineGenerator>,
    /// Untouched board of a [`Self::with_mines`] session, replayed by [`Self::restart`].
    layout: Option<Board>,
}

impl GameSession {
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_generator(config, Box::new(RandomMineGenerator::new(seed)))
    }

    pub fn with_generator(config: GameConfig, generator: Box<dyn MineGenerator>) -> Result<Self> {
        let config = GameConfig::new(config.size, config.mines)?;
        Ok(Self::blank(config, generator, None))
    }

    /// Starts a session whose mines are already in place, skipping first-click placement.
    ///
    /// The layout is not held to the random-placement limit, so `config().mines` may
    /// exceed [`GameConfig::max_mines`]. It is never handed to the generator: `restart`
    /// replays the layout and `reset` validates the config it is given.
    pub fn with_mines(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let layout = Board::from_mine_coords(size, mine_coords)?;
        let config = GameConfig::new_unchecked(size, layout.mine_count());
        let generator = Box::new(RandomMineGenerator::new(0));
        let mut session = Self::blank(config, generator, Some(layout));
        session.restart();
        Ok(session)
    }

    fn blank(config: GameConfig, generator: Box<dyn MineGenerator>, layout: Option<Board>) -> Self {
        log::debug!("New session {:?}", config);
        Self {
            config,
            board: Board::new(config.size),
            phase: Phase::Playing,
            mines_remaining: config.mines.into(),
            first_move_pending: true,
            started_at: None,
            ended_at: None,
            generator,
            layout,
        }
    }

    fn begin(&mut self, config: GameConfig) {
        log::debug!("New game {:?}", config);
        self.config = config;
        self.board = Board::new(config.size);
        self.phase = Phase::Playing;
        self.mines_remaining = config.mines.into();
        self.first_move_pending = true;
        self.started_at = None;
        self.ended_at = None;
    }

    /// Throws the current game away and starts a new one with random placement, keeping
    /// the mine generator.
    ///
    /// An invalid `config` leaves the current game untouched.
    pub fn reset(&mut self, config: GameConfig) -> Result<()> {
        let config = GameConfig::new(config.size, config.mines)?;
        self.layout = None;
        self.begin(config);
        Ok(())
    }

    /// Starts over with the current configuration. A [`Self::with_mines`] session gets
    /// its original layout back, already placed.
    pub fn restart(&mut self) {
        self.begin(self.config);
        if let Some(layout) = &self.layout {
            self.board = layout.clone();
            self.first_move_pending = false;
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Mine count minus placed flags. Goes negative when over-flagged.
    pub fn mines_remaining(&self) -> i64 {
        self.mines_remaining
    }

    pub fn is_first_move_pending(&self) -> bool {
        self.first_move_pending
    }

    /// Full board including hidden mines. Renderers should use [`Self::snapshot`].
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Time since the first open, frozen once the game ends. `None` before the first open.
    pub fn elapsed(&self) -> Option<Duration> {
        let started_at = self.started_at?;
        let until = self.ended_at.unwrap_or_else(Instant::now);
        Some(until.duration_since(started_at))
    }

    pub fn elapsed_secs(&self) -> Option<u64> {
        self.elapsed().map(|elapsed| elapsed.as_secs())
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_session(self)
    }

    /// Opens a closed cell, cascading through zero-count regions.
    pub fn open(&mut self, coords: Coord2) -> OpenOutcome {
        use OpenOutcome::*;

        if self.phase.is_final() {
            return NoChange;
        }
        match self.board.cell(coords) {
            Some(cell) if cell.is_closed() => {}
            _ => return NoChange,
        }

        if self.first_move_pending {
            self.place_mines(coords);
        }
        self.mark_started();

        let Some(cell) = self.board.cell_mut(coords) else {
            return NoChange;
        };
        if cell.has_mine {
            cell.state = CellState::Open;
            log::debug!("Mine hit at {:?}", coords);
            self.board.reveal_mines();
            self.mark_ended(Phase::Lost);
            return Detonated;
        }

        let opened = self.board.flood_open(coords);
        log::debug!("Opened {} cells from {:?}", opened, coords);

        if self.board.is_cleared() {
            self.mark_ended(Phase::Won);
            Cleared
        } else {
            Opened(opened)
        }
    }

    /// Flags a closed cell or unflags a flagged one. Open cells are left alone.
    ///
    /// Not gated on the phase: drivers decide whether flagging after the end is allowed.
    pub fn toggle_flag(&mut self, coords: Coord2) -> FlagOutcome {
        let Some(cell) = self.board.cell_mut(coords) else {
            return FlagOutcome::NoChange;
        };

        let outcome = match cell.state {
            CellState::Closed => {
                cell.state = CellState::Flagged;
                FlagOutcome::Placed
            }
            CellState::Flagged => {
                cell.state = CellState::Closed;
                FlagOutcome::Removed
            }
            CellState::Open => FlagOutcome::NoChange,
        };
        self.mines_remaining += outcome.counter_delta();
        outcome
    }

    fn place_mines(&mut self, start: Coord2) {
        let mines = self.generator.generate(&self.config, start);
        debug_assert!(
            mines.iter().all(|&coords| !is_adjacent_or_same(coords, start)),
            "generator put a mine next to the first click {start:?}"
        );
        self.board.place_mines(&mines);
        self.first_move_pending = false;

        debug_assert_eq!(self.board.mine_count(), self.config.mines);
    }

    /// Records the start time on the first accepted open
    fn mark_started(&mut self) {
        if self.started_at.is_none() {
            let now = Instant::now();
            log::debug!("started at {:?}", now);
            self.started_at = Some(now);
        }
    }

    fn mark_ended(&mut self, phase: Phase) {
        debug_assert!(phase.is_final());
        if self.phase.is_final() {
            return;
        }
        self.phase = phase;
        let now = Instant::now();
        self.ended_at = Some(now);
        log::debug!("ended at {:?} with {:?}", now, phase);
    }
}
