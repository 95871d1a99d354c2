use ndarray::{s, Array2};

use crate::utils::{binarise_array, shift_by_col};

use super::Grid;

/// Fast O(64) array-based pre-check for an isolated run of exactly two
/// filled cells along some row or column, letting the expensive
/// dictionary-backed scan in `validity` short-circuit the common case
/// where a candidate placement obviously broke nothing. A shift-and-
/// compare over the filled-cell mask flags any two adjacent filled cells
/// with nothing on either side — the "no length-2 run" rule.
pub(super) fn has_isolated_pair(grid: &Grid) -> bool {
    let mask = binarise_array(&grid.filled_mask());
    has_isolated_pair_along_rows(&mask) || has_isolated_pair_along_rows(&mask.t().to_owned())
}

fn has_isolated_pair_along_rows(mask: &Array2<u8>) -> bool {
    let (rows, cols) = mask.dim();
    // Pad with two empty sentinel columns on each side so "the cell before
    // the run" and "the cell after the run" are always defined; the board
    // boundary itself acts as an empty sentinel.
    let mut padded = Array2::<u8>::zeros((rows, cols + 4));
    padded.slice_mut(s![.., 2..2 + cols]).assign(mask);

    // `next` pulls column c+1 of `padded` into column c.
    let next = shift_by_col(&padded);

    for r in 0..rows {
        for c in 0..cols {
            let this = padded[[r, c + 2]];
            let right = next[[r, c + 2]];
            let before = padded[[r, c + 1]];
            let after_right = next[[r, c + 3]];
            if this == 1 && right == 1 && before == 0 && after_right == 0 {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::{Cell, Direction};

    #[test]
    fn flags_an_isolated_pair() {
        let mut grid = Grid::new_empty();
        // "at" with no third letter is an illegal length-2 run.
        grid.commit_word("at", Cell::new(0, 0), Direction::Horizontal);
        assert!(has_isolated_pair(&grid));
    }

    #[test]
    fn does_not_flag_a_run_of_three() {
        let mut grid = Grid::new_empty();
        grid.commit_word("cat", Cell::new(0, 0), Direction::Horizontal);
        assert!(!has_isolated_pair(&grid));
    }

    #[test]
    fn does_not_flag_a_single_letter() {
        let mut grid = Grid::new_empty();
        grid.commit_word("a", Cell::new(0, 0), Direction::Horizontal);
        assert!(!has_isolated_pair(&grid));
    }
}
