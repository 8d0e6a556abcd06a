use thiserror::Error;

use crate::cell::Cell;
use crate::grid::Grid;
use crate::grid::MAX_HEIGHT;
use crate::grid::MAX_WIDTH;

/// No run longer than this can ever land on a grid
const MAX_RUN: usize = if MAX_WIDTH > MAX_HEIGHT {
    MAX_WIDTH
} else {
    MAX_HEIGHT
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("Run count larger than {}", MAX_RUN)]
    RunTooLong,

    #[error("Pattern wider than {} cells", MAX_WIDTH)]
    TooWide,

    #[error("Pattern taller than {} cells", MAX_HEIGHT)]
    TooTall,

    #[error("Unexpected character '{got}' in pattern")]
    InvalidToken { got: char },

    #[error("Unexpected end of pattern, expected '!'")]
    UnexpectedEof,
}

/// A small shape of live cells, ready to be placed on a [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub name: Option<String>,

    width: usize,
    height: usize,

    /// Live cells as `(row, col)`, relative to the pattern's top left corner
    cells: Vec<(usize, usize)>,
}

impl Pattern {
    /// Read a pattern in the run-length encoded format used by most Life tools.
    ///
    /// `#N` names the pattern. Other `#` lines and the `x = .., y = ..` header are skipped, the
    /// size is taken from the runs themselves. Anything that could not fit on the largest grid is
    /// rejected.
    ///
    /// See: https://conwaylife.com/wiki/Run_Length_Encoded
    pub fn parse(bytes: &[u8]) -> Result<Self, PatternError> {
        let text = String::from_utf8_lossy(bytes);

        let mut name = None;
        let mut body = String::new();

        for line in text.lines().map(str::trim) {
            if let Some(comment) = line.strip_prefix('#') {
                if let Some(n) = comment.strip_prefix('N') {
                    name = Some(n.trim().to_string());
                }
            } else if body.is_empty() && line.starts_with('x') {
                // header
            } else {
                body.push_str(line);
            }
        }

        let mut pattern = decode(&body)?;
        pattern.name = name;

        Ok(pattern)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    /// Bring the pattern to life on `grid` with its top left corner at `(row, col)`. Cells landing
    /// outside the grid are dropped. Returns the number of cells placed.
    pub fn stamp(&self, grid: &mut Grid, row: usize, col: usize) -> usize {
        let mut placed = 0;

        for &(r, c) in &self.cells {
            let (Some(r), Some(c)) = (row.checked_add(r), col.checked_add(c)) else {
                continue;
            };

            if r < grid.height() && c < grid.width() {
                grid.set(r, c, Cell::born());
                placed += 1;
            }
        }

        placed
    }

    /// Like [`Pattern::stamp`], centering the pattern on the grid. Patterns larger than the grid
    /// are anchored at the top left corner.
    pub fn stamp_centered(&self, grid: &mut Grid) -> usize {
        let row = grid.height().saturating_sub(self.height) / 2;
        let col = grid.width().saturating_sub(self.width) / 2;

        self.stamp(grid, row, col)
    }
}

/// Decode the run-length body, up to and including the closing `!`
fn decode(body: &str) -> Result<Pattern, PatternError> {
    let mut cells = Vec::new();

    let (mut row, mut col) = (0usize, 0usize);
    let (mut width, mut height) = (0, 0);
    let mut run: Option<usize> = None;

    for c in body.chars() {
        let rep = run.unwrap_or(1);

        match c {
            d if d.is_ascii_digit() => {
                let n = run
                    .unwrap_or(0)
                    .checked_mul(10)
                    .and_then(|n| n.checked_add(d as usize - '0' as usize))
                    .filter(|&n| n <= MAX_RUN)
                    .ok_or(PatternError::RunTooLong)?;

                run = Some(n);
                continue;
            }

            // Dead cells, then live ones. Any letter other than `b` is a live state in
            // multi-state files.
            'b' | 'o' | 'A'..='Z' => {
                let end = col
                    .checked_add(rep)
                    .filter(|&end| end <= MAX_WIDTH)
                    .ok_or(PatternError::TooWide)?;

                if c != 'b' {
                    cells.extend((col..end).map(|x| (row, x)));
                }

                if rep > 0 {
                    width = width.max(end);
                    height = height.max(row + 1);
                }

                col = end;
            }

            // End of line
            '$' => {
                row = row
                    .checked_add(rep)
                    .filter(|&row| row < MAX_HEIGHT)
                    .ok_or(PatternError::TooTall)?;
                col = 0;
            }

            '!' => {
                return Ok(Pattern {
                    name: None,
                    width,
                    height,
                    cells,
                });
            }

            w if w.is_whitespace() => continue,

            got => return Err(PatternError::InvalidToken { got }),
        }

        run = None;
    }

    Err(PatternError::UnexpectedEof)
}

#[cfg(test)]
mod test {
    use super::*;

    const GLIDER: &[u8] = b"#N Glider
#O Richard K. Guy
#C The smallest spaceship
x = 3, y = 3, rule = B3/S23
bob$2bo$3o!
";

    #[test]
    fn glider() {
        let pattern = Pattern::parse(GLIDER).unwrap();

        assert_eq!(pattern.name.as_deref(), Some("Glider"));
        assert_eq!((pattern.width(), pattern.height()), (3, 3));
        assert_eq!(
            pattern.cells(),
            &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]
        );
    }

    #[test]
    fn headerless() {
        let pattern = Pattern::parse(b"3o$$o!").unwrap();

        assert_eq!(pattern.cells(), &[(0, 0), (0, 1), (0, 2), (2, 0)]);
        assert_eq!((pattern.width(), pattern.height()), (3, 3));
        assert_eq!(pattern.name, None);
    }

    #[test]
    fn crlf_and_wrapped_lines() {
        let pattern = Pattern::parse(b"x = 4, y = 1\r\n2o\r\n2o!\r\n").unwrap();

        assert_eq!(pattern.cells(), &[(0, 0), (0, 1), (0, 2), (0, 3)]);
        assert_eq!((pattern.width(), pattern.height()), (4, 1));
    }

    #[test]
    fn missing_terminator() {
        assert_eq!(Pattern::parse(b"3o"), Err(PatternError::UnexpectedEof));
    }

    #[test]
    fn unknown_character() {
        assert_eq!(
            Pattern::parse(b"3o?!"),
            Err(PatternError::InvalidToken { got: '?' })
        );
    }

    #[test]
    fn huge_runs_are_rejected() {
        // would overflow a usize
        assert_eq!(
            Pattern::parse(b"18446744073709551615b2b!"),
            Err(PatternError::RunTooLong)
        );
        assert_eq!(
            Pattern::parse(b"18446744073709551615$o!"),
            Err(PatternError::RunTooLong)
        );

        // fits a usize, but would allocate one entry per cell
        assert_eq!(
            Pattern::parse(b"100000000000o!"),
            Err(PatternError::RunTooLong)
        );
    }

    #[test]
    fn larger_than_any_grid() {
        assert_eq!(Pattern::parse(b"200b200o!"), Err(PatternError::TooWide));
        assert_eq!(Pattern::parse(b"224$o$o!"), Err(PatternError::TooTall));

        let tallest = Pattern::parse(b"224$o!").unwrap();
        assert_eq!(tallest.height(), MAX_HEIGHT);

        let widest = Pattern::parse(b"300o!").unwrap();
        assert_eq!(widest.width(), MAX_WIDTH);
        assert_eq!(widest.cells().len(), MAX_WIDTH);
    }

    #[test]
    fn stamp_clips_at_edges() {
        let pattern = Pattern::parse(GLIDER).unwrap();
        let mut grid = Grid::new(20, 15);

        assert_eq!(pattern.stamp(&mut grid, 0, 0), 5);
        assert_eq!(grid.population(), 5);

        let mut grid = Grid::new(20, 15);
        assert_eq!(pattern.stamp(&mut grid, 13, 18), 1);
        assert!(grid.get(13, 19).is_alive());

        let mut grid = Grid::new(20, 15);
        assert_eq!(pattern.stamp(&mut grid, usize::MAX, usize::MAX), 0);
    }

    #[test]
    fn stamp_centered() {
        let pattern = Pattern::parse(GLIDER).unwrap();
        let mut grid = Grid::new(21, 15);

        pattern.stamp_centered(&mut grid);

        assert!(grid.get(6, 10).is_alive());
        assert!(grid.get(8, 9).is_alive());
        assert_eq!(grid.population(), 5);
    }
}
