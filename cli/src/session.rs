use anyhow::Result;
use gridsweep_core::{BoardEngine, CellCount, Coord2, FlagOutcome, UncoverOutcome};

use crate::io;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Operation {
    Uncover,
    Flag,
    Cancel,
}

impl Operation {
    fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Uncover),
            1 => Some(Self::Flag),
            2 => Some(Self::Cancel),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum EndGameState {
    Won,
    Lost,
    Cancelled,
}

/// Final statistics shown next to the disclosed board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct GameSummary {
    state: EndGameState,
    total_cells: CellCount,
    uncovered_cells: CellCount,
    bomb_cells: CellCount,
}

impl GameSummary {
    fn remaining_safe_cells(&self) -> CellCount {
        self.total_cells - self.bomb_cells - self.uncovered_cells
    }
}

/// Turn loop around a board engine: prints the player view, reads one
/// operation per turn, and stops on a bomb, a cleared board, or a cancel.
pub struct GameSession {
    engine: BoardEngine,
}

impl GameSession {
    pub fn new(engine: BoardEngine) -> Self {
        Self { engine }
    }

    pub fn play(mut self) -> Result<()> {
        println!("Board initialised! Let's start the game!");
        let state = self.run_loop()?;
        self.display_result(state);
        Ok(())
    }

    fn run_loop(&mut self) -> Result<EndGameState> {
        loop {
            self.print_view(&self.engine.render_player_view());
            println!();

            match self.next_operation()? {
                Operation::Cancel => return Ok(EndGameState::Cancelled),
                Operation::Uncover => {
                    if self.uncover()? {
                        return Ok(EndGameState::Lost);
                    }
                }
                Operation::Flag => self.flag()?,
            }

            if self.engine.is_cleared() {
                return Ok(EndGameState::Won);
            }
        }
    }

    fn next_operation(&self) -> Result<Operation> {
        loop {
            let code =
                io::prompt_number("Select operation (0 = uncover, 1 = flag / unflag, 2 = cancel game): ")?;
            match Operation::from_code(code) {
                Some(operation) => return Ok(operation),
                None => println!("Invalid operation: {code}"),
            }
        }
    }

    fn read_coords(&self) -> Result<Coord2> {
        let row = io::prompt_number("Select row: ")?;
        let col = io::prompt_number("Select column: ")?;
        Ok((row, col))
    }

    /// Applies one uncover move; true means the player hit a bomb.
    fn uncover(&mut self) -> Result<bool> {
        let coords = self.read_coords()?;
        let outcome = self.engine.uncover(coords);
        if outcome == UncoverOutcome::Flagged {
            println!("Cannot uncover flagged field");
        }
        Ok(outcome.is_bomb())
    }

    fn flag(&mut self) -> Result<()> {
        let coords = self.read_coords()?;
        if self.engine.toggle_flag(coords) == FlagOutcome::AlreadyUncovered {
            println!("Cannot flag uncovered field");
        }
        Ok(())
    }

    fn display_result(&self, state: EndGameState) {
        self.print_view(&self.engine.render_revealed_view());
        println!("{}", end_game_message(state));
        self.print_statistics(self.summary(state));
    }

    fn summary(&self, state: EndGameState) -> GameSummary {
        GameSummary {
            state,
            total_cells: self.engine.total_cells(),
            uncovered_cells: self.engine.uncovered_count(),
            bomb_cells: self.engine.bomb_count(),
        }
    }

    fn print_statistics(&self, summary: GameSummary) {
        println!(
            "Uncovered {} out of {}",
            summary.uncovered_cells, summary.total_cells
        );
        let remaining = summary.remaining_safe_cells();
        if remaining > 0 {
            println!("Fields without bombs to uncover: {remaining}");
        }
        println!("Total bombs {}", summary.bomb_cells);
    }

    /// Frames glyph rows with column/row indices and `-`/`|` borders.
    fn print_view(&self, rows: &[Vec<char>]) {
        let edge = usize::from(self.engine.grid_size());
        let header: String = (0..edge).map(|col| format!("{col}|")).collect();
        println!(" |{header}");
        print_horizontal_border(edge);

        for (row, glyphs) in rows.iter().enumerate() {
            let cells: String = glyphs.iter().map(|&glyph| format!("{glyph}|")).collect();
            println!("{row}|{cells}");
        }

        print_horizontal_border(edge);
    }
}

fn print_horizontal_border(edge: usize) {
    println!(" {}", "-".repeat(edge * 2 + 1));
}

const fn end_game_message(state: EndGameState) -> &'static str {
    match state {
        EndGameState::Won => "You won the game!",
        EndGameState::Lost => "Bomb! You lost the game :(",
        EndGameState::Cancelled => "Game was cancelled",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridsweep_core::MineLayout;

    #[test]
    fn operation_codes_map_like_the_menu_says() {
        assert_eq!(Operation::from_code(0), Some(Operation::Uncover));
        assert_eq!(Operation::from_code(1), Some(Operation::Flag));
        assert_eq!(Operation::from_code(2), Some(Operation::Cancel));
        assert_eq!(Operation::from_code(3), None);
    }

    #[test]
    fn summary_counts_remaining_safe_cells() {
        let layout = MineLayout::from_bomb_coords(3, &[(0, 0)]).unwrap();
        let mut session = GameSession::new(BoardEngine::from_layout(layout));
        session.engine.uncover((1, 1));

        let summary = session.summary(EndGameState::Cancelled);

        assert_eq!(summary.total_cells, 9);
        assert_eq!(summary.bomb_cells, 1);
        assert_eq!(summary.uncovered_cells, 1);
        assert_eq!(summary.remaining_safe_cells(), 7);
    }

    #[test]
    fn end_game_messages_match_the_state() {
        assert_eq!(end_game_message(EndGameState::Won), "You won the game!");
        assert_eq!(
            end_game_message(EndGameState::Lost),
            "Bomb! You lost the game :("
        );
        assert_eq!(
            end_game_message(EndGameState::Cancelled),
            "Game was cancelled"
        );
    }
}
