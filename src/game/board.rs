use std::fmt;
use std::ops::Range;

use crate::error::{BoardError, MoveError};

use super::side::Side;

pub const STANDARD_WIDTH: usize = 7;
pub const STANDARD_HEIGHT: usize = 6;
pub const STANDARD_CONNECT: usize = 4;
/// Shortest winning run; a run of one would end the game on the first drop.
pub const MIN_CONNECT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    A,
    B,
}

impl Cell {
    /// The side owning this cell, if any
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::A => Some(Side::A),
            Cell::B => Some(Side::B),
        }
    }

    fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::A => 'A',
            Cell::B => 'B',
        }
    }

    fn from_char(ch: char) -> Option<Cell> {
        match ch {
            '.' | '-' | '_' => Some(Cell::Empty),
            'A' | 'a' | 'X' | 'x' => Some(Cell::A),
            'B' | 'b' | 'O' | 'o' => Some(Cell::B),
            _ => None,
        }
    }
}

/// The four alignment directions a window can run along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right (\)
    DiagonalDown,
    /// Bottom-left to top-right (/)
    DiagonalUp,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
    ];

    /// (row step, column step)
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (-1, 1),
        }
    }
}

/// Terminal classification of a board, relative to a mover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    MoverWins,
    OpponentWins,
    Draw,
    Undecided,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::Undecided
    }
}

/// A `height` x `width` gravity grid. Row 0 is the top, row `height - 1` the bottom.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    width: usize,
    height: usize,
    connect_length: usize,
    cells: Vec<Cell>,
}

/// Start positions along one axis for windows of length `len` stepping by `step`.
///
/// An axis the window does not move along keeps every position, however short.
fn axis_starts(extent: usize, len: usize, step: isize) -> Range<usize> {
    match step {
        0 => 0..extent,
        _ if len > extent => 0..0,
        s if s > 0 => 0..extent - len + 1,
        _ => len - 1..extent,
    }
}

impl Board {
    /// Create a new empty board
    pub fn new(width: usize, height: usize, connect_length: usize) -> Result<Self, BoardError> {
        if width == 0
            || height == 0
            || connect_length < MIN_CONNECT
            || connect_length > width.max(height)
        {
            return Err(BoardError::InvalidDimensions {
                width,
                height,
                connect_length,
            });
        }
        Ok(Board {
            width,
            height,
            connect_length,
            cells: vec![Cell::Empty; width * height],
        })
    }

    /// The classic 7x6 connect-four board
    pub fn standard() -> Self {
        Board {
            width: STANDARD_WIDTH,
            height: STANDARD_HEIGHT,
            connect_length: STANDARD_CONNECT,
            cells: vec![Cell::Empty; STANDARD_WIDTH * STANDARD_HEIGHT],
        }
    }

    /// Parse a board from text rows, top row first.
    ///
    /// `.` is empty, `A`/`X` is side A, `B`/`O` is side B. Whitespace inside a
    /// row is ignored so boards can be written with spacing.
    pub fn from_rows(rows: &[&str], connect_length: usize) -> Result<Self, BoardError> {
        let parsed: Vec<Vec<char>> = rows
            .iter()
            .map(|r| r.chars().filter(|c| !c.is_whitespace()).collect())
            .collect();
        let height = parsed.len();
        let width = parsed.first().map_or(0, Vec::len);
        let mut board = Board::new(width, height, connect_length)?;

        for (row, chars) in parsed.iter().enumerate() {
            if chars.len() != width {
                return Err(BoardError::RaggedRow {
                    row,
                    found: chars.len(),
                    expected: width,
                });
            }
            for (col, &ch) in chars.iter().enumerate() {
                let cell = Cell::from_char(ch).ok_or(BoardError::UnknownCell { ch, row, col })?;
                board.set(row, col, cell);
            }
        }

        // Gravity: nothing may sit above an empty cell
        for col in 0..width {
            for row in 0..height - 1 {
                if board.get(row, col) != Cell::Empty && board.get(row + 1, col) == Cell::Empty {
                    return Err(BoardError::Floating { row, col });
                }
            }
        }

        Ok(board)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn connect_length(&self) -> usize {
        self.connect_length
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let idx = self.index(row, col);
        self.cells[idx] = cell;
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.width {
            return true;
        }
        self.get(0, col) != Cell::Empty
    }

    /// Columns that can still take a piece, ascending
    pub fn valid_moves(&self) -> Vec<usize> {
        (0..self.width)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Row a piece dropped into `col` would land on, scanning up from the bottom
    pub fn next_open_row(&self, col: usize) -> Option<usize> {
        if col >= self.width {
            return None;
        }
        (0..self.height)
            .rev()
            .find(|&row| self.get(row, col) == Cell::Empty)
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, side: Side) -> Result<usize, MoveError> {
        if col >= self.width {
            return Err(MoveError::InvalidColumn {
                col,
                width: self.width,
            });
        }
        let row = self.next_open_row(col).ok_or(MoveError::ColumnFull(col))?;
        self.set(row, col, side.to_cell());
        Ok(row)
    }

    /// Remove the piece placed by the matching `drop_piece` call.
    pub fn undo_drop(&mut self, row: usize, col: usize) {
        debug_assert!(self.get(row, col) != Cell::Empty, "undo of an empty cell");
        debug_assert!(
            row == 0 || self.get(row - 1, col) == Cell::Empty,
            "undo below the top of column {col}"
        );
        self.set(row, col, Cell::Empty);
    }

    /// Empty every cell, keeping the dimensions
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.width).all(|col| self.is_column_full(col))
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Every window start `(row, col)` for `direction`
    pub fn windows(&self, direction: Direction) -> impl Iterator<Item = (usize, usize)> {
        let (dr, dc) = direction.delta();
        let rows = axis_starts(self.height, self.connect_length, dr);
        let cols = axis_starts(self.width, self.connect_length, dc);
        rows.flat_map(move |r| cols.clone().map(move |c| (r, c)))
    }

    /// The `connect_length` cells of the window starting at `start`
    pub fn window_cells(
        &self,
        start: (usize, usize),
        direction: Direction,
    ) -> impl Iterator<Item = Cell> + '_ {
        let (dr, dc) = direction.delta();
        let (row, col) = (start.0 as isize, start.1 as isize);
        (0..self.connect_length as isize)
            .map(move |i| self.get((row + dr * i) as usize, (col + dc * i) as usize))
    }

    /// Whether `side` owns every cell of some window in any direction
    pub fn has_connection(&self, side: Side) -> bool {
        let cell = side.to_cell();
        Direction::ALL.iter().any(|&dir| {
            self.windows(dir)
                .any(|start| self.window_cells(start, dir).all(|c| c == cell))
        })
    }

    /// Classify the board from `mover`'s perspective.
    ///
    /// Both sides connected at once cannot arise from alternating play; the
    /// mover's connection is reported first.
    pub fn classify(&self, mover: Side) -> Outcome {
        if self.has_connection(mover) {
            Outcome::MoverWins
        } else if self.has_connection(mover.other()) {
            Outcome::OpponentWins
        } else if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::Undecided
        }
    }

    /// A copy with every A piece turned into B and vice versa
    pub fn swap_sides(&self) -> Board {
        let cells = self
            .cells
            .iter()
            .map(|&c| match c.side() {
                Some(side) => side.other().to_cell(),
                None => Cell::Empty,
            })
            .collect();
        Board {
            cells,
            ..self.clone()
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            let line: String = (0..self.width).map(|col| self.get(row, col).to_char()).collect();
            writeln!(f, "{line}")?;
        }
        let footer: String = (0..self.width)
            .map(|col| std::char::from_digit((col % 10) as u32, 10).unwrap_or('?'))
            .collect();
        write!(f, "{footer}")
    }
}
