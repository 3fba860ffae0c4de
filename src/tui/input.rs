//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use nxn_tictactoe::Position;

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor<const N: usize>(cursor: Position<N>, key: KeyCode) -> Position<N> {
    let (row, column) = (cursor.row(), cursor.column());

    let target = match key {
        KeyCode::Up => (row.saturating_sub(1), column),
        KeyCode::Down => ((row + 1).min(N - 1), column),
        KeyCode::Left => (row, column.saturating_sub(1)),
        KeyCode::Right => (row, (column + 1).min(N - 1)),
        _ => return cursor,
    };

    Position::new(target.0, target.1).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, column: usize) -> Position<5> {
        Position::new(row, column).unwrap()
    }

    #[test]
    fn test_moves_within_board() {
        assert_eq!(move_cursor(pos(2, 2), KeyCode::Up), pos(1, 2));
        assert_eq!(move_cursor(pos(2, 2), KeyCode::Down), pos(3, 2));
        assert_eq!(move_cursor(pos(2, 2), KeyCode::Left), pos(2, 1));
        assert_eq!(move_cursor(pos(2, 2), KeyCode::Right), pos(2, 3));
    }

    #[test]
    fn test_clamps_at_edges() {
        assert_eq!(move_cursor(pos(0, 0), KeyCode::Up), pos(0, 0));
        assert_eq!(move_cursor(pos(0, 0), KeyCode::Left), pos(0, 0));
        assert_eq!(move_cursor(pos(4, 4), KeyCode::Down), pos(4, 4));
        assert_eq!(move_cursor(pos(4, 4), KeyCode::Right), pos(4, 4));
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(move_cursor(pos(1, 3), KeyCode::Char('x')), pos(1, 3));
    }
}
