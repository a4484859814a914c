//! Integer points and dense rectangular grids.
//!
//! `y` grows downward: row 0 is the first input line.

use std::fmt;
use std::ops::Add;

/// A 2D integer coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The four orthogonal neighbours, in up/left/right/down order.
    #[must_use]
    pub fn neighbors(&self) -> [Point; 4] {
        [
            Point::new(self.x, self.y - 1),
            Point::new(self.x - 1, self.y),
            Point::new(self.x + 1, self.y),
            Point::new(self.x, self.y + 1),
        ]
    }

    #[must_use]
    pub fn manhattan(&self, other: &Point) -> u64 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Why grid construction failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// No rows, or a zero-width first row.
    Empty,
    /// A row's width differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// A cell could not be decoded.
    BadCell { row: usize, column: usize, ch: char },
    /// `width * height` does not match the number of cells supplied.
    CellCount { expected: usize, actual: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid has no cells"),
            Self::Ragged {
                row,
                expected,
                actual,
            } => write!(f, "row {row} has width {actual}, expected {expected}"),
            Self::BadCell { row, column, ch } => {
                write!(f, "invalid cell {ch:?} at row {row}, column {column}")
            }
            Self::CellCount { expected, actual } => {
                write!(f, "expected {expected} cells, got {actual}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A dense, row-major rectangular grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Build a grid from row-major cells.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Empty`] for a zero-sized grid and
    /// [`GridError::CellCount`] when `cells.len() != width * height`.
    pub fn new(width: usize, height: usize, cells: Vec<T>) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::Empty);
        }
        if cells.len() != width * height {
            return Err(GridError::CellCount {
                expected: width * height,
                actual: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build a grid by decoding each character of each line.
    ///
    /// # Errors
    ///
    /// Returns [`GridError`] for empty input, rows of unequal width, or a
    /// character `decode` rejects.
    pub fn from_lines<S: AsRef<str>>(
        lines: &[S],
        decode: impl Fn(char) -> Option<T>,
    ) -> Result<Self, GridError> {
        let width = lines.first().map_or(0, |line| line.as_ref().chars().count());
        if width == 0 {
            return Err(GridError::Empty);
        }
        let mut cells = Vec::with_capacity(width * lines.len());
        for (row, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            let actual = line.chars().count();
            if actual != width {
                return Err(GridError::Ragged {
                    row,
                    expected: width,
                    actual,
                });
            }
            for (column, ch) in line.chars().enumerate() {
                cells.push(decode(ch).ok_or(GridError::BadCell { row, column, ch })?);
            }
        }
        Self::new(width, lines.len(), cells)
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn contains(&self, point: &Point) -> bool {
        self.index(point).is_some()
    }

    #[must_use]
    pub fn get(&self, point: &Point) -> Option<&T> {
        self.index(point).map(|i| &self.cells[i])
    }

    /// The last cell of the last row.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn bottom_right(&self) -> Point {
        Point::new(self.width as i64 - 1, self.height as i64 - 1)
    }

    /// All points in row-major order.
    #[allow(clippy::cast_possible_wrap)]
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| Point::new(x as i64, y as i64)))
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn index(&self, point: &Point) -> Option<usize> {
        if point.x < 0 || point.y < 0 {
            return None;
        }
        let (x, y) = (point.x as usize, point.y as usize);
        (x < self.width && y < self.height).then_some(y * self.width + x)
    }
}

impl Grid<u8> {
    /// Parse lines of decimal digits (`"1163\n1381"` style weight maps).
    ///
    /// # Errors
    ///
    /// See [`Grid::from_lines`].
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_digit_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self, GridError> {
        Self::from_lines(lines, |ch| ch.to_digit(10).map(|d| d as u8))
    }
}
