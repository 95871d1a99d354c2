use log::{debug, trace};

use crate::dictionary::Dictionary;

use super::matrix;
use super::Grid;
use super::SIZE;

/// Every maximal run of non-empty cells in every row and column must be
/// length 1 (a crossing letter) or length >= 3 and a dictionary word.
/// Runs of length 2 are always illegal. Pure; safe on partial grids.
pub(super) fn is_valid_grid(grid: &Grid, dictionary: &Dictionary) -> bool {
    if matrix::has_isolated_pair(grid) {
        debug!("fast pre-check found an isolated length-2 run");
        return false;
    }

    for row in 0..SIZE {
        if !run_valid(grid.row_chars(row).collect::<Vec<_>>().into_iter(), dictionary) {
            trace!("row {} failed run validation", row);
            return false;
        }
    }
    for col in 0..SIZE {
        if !run_valid(grid.col_chars(col).collect::<Vec<_>>().into_iter(), dictionary) {
            trace!("col {} failed run validation", col);
            return false;
        }
    }
    true
}

/// Scans one row/column (given as an iterator of `Option<char>`, boundary
/// already acting as the `None` sentinel), checking every maximal run of
/// `Some` cells.
fn run_valid<I: Iterator<Item = Option<char>>>(line: I, dictionary: &Dictionary) -> bool {
    let mut run = String::new();
    for cell in line.chain(std::iter::once(None)) {
        match cell {
            Some(ch) => run.push(ch),
            None => {
                if !run.is_empty() && !run_is_legal(&run, dictionary) {
                    return false;
                }
                run.clear();
            }
        }
    }
    true
}

fn run_is_legal(run: &str, dictionary: &Dictionary) -> bool {
    match run.len() {
        0 => true,
        1 => true,
        2 => false,
        _ => dictionary.is_word(run),
    }
}
