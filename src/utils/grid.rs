use crate::utils::error::{HarnessError, Result};
use ndarray::Array2;

/// Parses a rectangular map into an `(rows, cols)` array.
pub fn text_to_grid(input: &str) -> Result<Array2<char>> {
    let cols = input
        .lines()
        .next()
        .map(|line| line.chars().count())
        .filter(|&cols| cols > 0)
        .ok_or_else(|| HarnessError::parse("malformed input: empty grid"))?;
    let rows = input.lines().count();

    let mut grid = Array2::from_elem((rows, cols), '.');
    for (i, line) in input.lines().enumerate() {
        let width = line.chars().count();
        if width != cols {
            return Err(HarnessError::parse(format!(
                "malformed input: line {} has {} columns, expected {}",
                i + 1,
                width,
                cols
            )));
        }
        for (j, c) in line.chars().enumerate() {
            grid[(i, j)] = c;
        }
    }

    Ok(grid)
}

/// First `(row, col)` holding `target`, in row-major order.
pub fn find_char(grid: &Array2<char>, target: char) -> Option<(usize, usize)> {
    grid.indexed_iter()
        .find(|&(_, &c)| c == target)
        .map(|(pos, _)| pos)
}
