//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

/// Side length of the square board
pub const SIDE: usize = 3;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Human,
    Computer,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Human => 'X',
            Cell::Computer => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::Human),
            'O' | 'o' | '0' => Some(Cell::Computer),
            _ => None,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// One of the two sides in a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    /// Convert player to the mark it places
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Human => Cell::Human,
            Player::Computer => Cell::Computer,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::Human => "human",
            Player::Computer => "computer",
        }
    }
}

/// A board coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Self {
        Move { row, col }
    }

    /// Map a row-major index (0-8) to a coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPosition`] for indices above 8.
    pub fn from_index(index: usize) -> Result<Self, crate::Error> {
        if index >= SIDE * SIDE {
            return Err(crate::Error::InvalidPosition { position: index });
        }
        Ok(Move {
            row: index / SIDE,
            col: index % SIDE,
        })
    }

    /// Row-major index of this coordinate
    pub fn index(self) -> usize {
        self.row * SIDE + self.col
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(row {}, col {})", self.row, self.col)
    }
}

/// The 3x3 grid of cells.
///
/// The board only stores marks. Turn order and move legality are enforced by
/// [`super::Game`], so `set` overwrites whatever is in the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIDE]; SIDE],
}

/// Create a fresh, all-empty board
pub fn initialise_board() -> Board {
    Board::new()
}

impl Board {
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; SIDE]; SIDE],
        }
    }

    /// Create a board from a string representation.
    ///
    /// Whitespace is ignored; exactly 9 characters must remain, read in
    /// row-major order. `X` is a human mark, `O` a computer mark and `.` or
    /// `_` an empty cell.
    ///
    /// # Errors
    ///
    /// Returns error if other than 9 characters remain or any character is
    /// not a valid cell representation.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != SIDE * SIDE {
            return Err(crate::Error::InvalidBoardLength {
                expected: SIDE * SIDE,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut board = Board::new();
        for (i, &c) in chars.iter().enumerate() {
            let cell = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
            board.cells[i / SIDE][i % SIDE] = cell;
        }

        Ok(board)
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Place a mark. The caller is responsible for checking the cell is empty.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }

    /// Reset a cell to empty
    pub fn clear(&mut self, row: usize, col: usize) {
        self.cells[row][col] = Cell::Empty;
    }

    pub fn is_empty_at(&self, mv: Move) -> bool {
        self.get(mv.row, mv.col).is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Snapshot of every empty coordinate in row-major order
    pub fn empty_cells(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(SIDE * SIDE);
        for row in 0..SIDE {
            for col in 0..SIDE {
                if self.cells[row][col].is_empty() {
                    moves.push(Move { row, col });
                }
            }
        }
        moves
    }

    /// Number of marks placed by either side
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| !c.is_empty()).count()
    }

    pub fn rows(&self) -> &[[Cell; SIDE]; SIDE] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
            if r + 1 < SIDE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = initialise_board();
        for row in 0..SIDE {
            for col in 0..SIDE {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert!(!board.is_full());
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_set_and_clear() {
        let mut board = Board::new();
        board.set(1, 2, Cell::Human);
        assert_eq!(board.get(1, 2), Cell::Human);
        assert_eq!(board.occupied_count(), 1);

        board.clear(1, 2);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_empty_cells_row_major() {
        let board = Board::from_string("X.O .O. ..X").unwrap();
        let empty: Vec<usize> = board.empty_cells().iter().map(|m| m.index()).collect();
        assert_eq!(empty, vec![1, 3, 5, 6, 7]);
    }

    #[test]
    fn test_is_full() {
        let board = Board::from_string("XOX XOO OXX").unwrap();
        assert!(board.is_full());
        assert!(board.empty_cells().is_empty());

        let board = Board::from_string("XOX XOO OX.").unwrap();
        assert!(!board.is_full());
    }

    #[test]
    fn test_move_from_index() {
        assert_eq!(Move::from_index(0).unwrap(), Move::new(0, 0));
        assert_eq!(Move::from_index(5).unwrap(), Move::new(1, 2));
        assert_eq!(Move::from_index(8).unwrap(), Move::new(2, 2));
        assert!(matches!(
            Move::from_index(9),
            Err(crate::Error::InvalidPosition { position: 9 })
        ));

        for i in 0..9 {
            assert_eq!(Move::from_index(i).unwrap().index(), i);
        }
    }

    #[test]
    fn test_from_string() {
        let board = Board::from_string("XO. ... ..x").unwrap();
        assert_eq!(board.get(0, 0), Cell::Human);
        assert_eq!(board.get(0, 1), Cell::Computer);
        assert_eq!(board.get(2, 2), Cell::Human);

        let result = Board::from_string("XO");
        assert!(matches!(
            result,
            Err(crate::Error::InvalidBoardLength { got: 2, .. })
        ));

        let result = Board::from_string("XO.......ZZZ");
        assert!(matches!(
            result,
            Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: 12,
                ..
            })
        ));

        let result = Board::from_string("XOZ......");
        assert!(matches!(
            result,
            Err(crate::Error::InvalidCellCharacter {
                character: 'Z',
                position: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_display() {
        let board = Board::from_string("XOX.O.X..").unwrap();
        assert_eq!(format!("{board}"), "XOX\n.O.\nX..");
    }

    #[test]
    fn test_player_opponent() {
        assert_eq!(Player::Human.opponent(), Player::Computer);
        assert_eq!(Player::Computer.opponent(), Player::Human);
        assert_eq!(Player::Human.to_cell(), Cell::Human);
        assert_eq!(Player::Computer.to_cell(), Cell::Computer);
    }
}
