//! Core domain types for N x N tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Tiles per side of the board the frontend plays on.
pub const TILE_SIZE: usize = 5;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player O (goes first).
    #[strum(to_string = "Player O")]
    O,
    /// Player X (goes second).
    #[strum(to_string = "Player X")]
    X,
}

impl Player {
    /// The player who opens every round.
    pub const FIRST: Player = Player::O;

    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::O => Player::X,
            Player::X => Player::O,
        }
    }

    /// Mark drawn on a tile this player owns.
    pub fn symbol(self) -> char {
        match self {
            Player::O => 'O',
            Player::X => 'X',
        }
    }
}

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cell claimed by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the owning player, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Checks whether nobody has played here.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Result of evaluating the board after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Round is still being played.
    Continuing,
    /// Round ended with a completed line.
    Won(Player),
    /// Every cell is taken and no line was completed.
    Draw,
}

impl Outcome {
    /// Returns true once the round can accept no more moves.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Continuing)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(player),
            Outcome::Continuing | Outcome::Draw => None,
        }
    }
}

/// N x N tic-tac-toe board.
///
/// Cells are only reachable through a [`Position`], which is range-checked
/// on construction, so indexing can never leave the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board<const N: usize> {
    cells: [[Cell; N]; N],
}

impl<const N: usize> Board<N> {
    /// Creates a new empty board.
    pub fn new() -> Self {
        const { assert!(N > 0, "board needs at least one tile per side") };
        Self {
            cells: [[Cell::Empty; N]; N],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position<N>) -> Cell {
        self.cells[pos.row()][pos.column()]
    }

    /// Sets the cell at the given position.
    pub fn set(&mut self, pos: Position<N>, cell: Cell) {
        self.cells[pos.row()][pos.column()] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position<N>) -> bool {
        self.get(pos).is_empty()
    }

    /// Sets every cell back to empty.
    pub fn clear(&mut self) {
        self.cells = [[Cell::Empty; N]; N];
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Cell; N]; N] {
        &self.cells
    }

    /// Counts occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }
}

impl<const N: usize> Default for Board<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::<5>::new();
        assert_eq!(board.occupied(), 0);
        assert!(board.rows().iter().flatten().all(|cell| cell.is_empty()));
    }

    #[test]
    fn test_set_and_clear() {
        let mut board = Board::<3>::new();
        let pos = Position::new(1, 2).unwrap();
        board.set(pos, Cell::Occupied(Player::X));
        assert_eq!(board.get(pos), Cell::Occupied(Player::X));
        assert_eq!(board.occupied(), 1);

        board.clear();
        assert!(board.is_empty(pos));
    }

    #[test]
    fn test_player_labels() {
        assert_eq!(Player::O.to_string(), "Player O");
        assert_eq!(Player::X.symbol(), 'X');
        assert_eq!(Player::FIRST.opponent(), Player::X);
    }
}
