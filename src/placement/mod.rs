use log::{debug, trace};

use crate::dictionary::Dictionary;
use crate::grid::Grid;
use crate::tile::{Cell, Direction, Multiset};

/// A candidate placement that passed every check in `Kernel::try_place`.
/// The rarity score is computed by the caller (the search engine owns the
/// `SearchConfig` rarity table) rather than stored here.
#[derive(Debug, Clone)]
pub struct PlacementOption {
    pub word: String,
    pub start: Cell,
    pub direction: Direction,
    pub new_letters: Vec<char>,
    pub intersection_count: usize,
}

/// Stateless decision procedure for whether one word fits at one location:
/// bounds, no-extension, cell compatibility, letter budget, crossing
/// requirement, and global grid legality.
pub struct Kernel;

impl Kernel {
    /// Attempts to place `word` at `start` running `direction`. Neither
    /// `grid` nor `remaining` is mutated; on success the caller applies
    /// the placement to its own owned state.
    pub fn try_place(
        grid: &Grid,
        word: &str,
        start: Cell,
        direction: Direction,
        remaining: &Multiset,
        dictionary: &Dictionary,
    ) -> Option<PlacementOption> {
        let len = word.len();

        // 1. Bounds.
        let end = start.stepped(len as i16 - 1, direction)?;
        let _ = end;

        // 2. No-extension: the cell immediately before/after must be empty
        // or off-grid.
        if let Some(before) = start.stepped(-1, direction) {
            if grid.char_at(before).is_some() {
                trace!("placement of {:?} at {} rejected: extends a run backward", word, start);
                return None;
            }
        }
        if let Some(after) = start.stepped(len as i16, direction) {
            if grid.char_at(after).is_some() {
                trace!("placement of {:?} at {} rejected: extends a run forward", word, start);
                return None;
            }
        }

        // 3 & 4. Cell compatibility and letter budget, scanned left to
        // right so multiplicity within a single word is accounted for.
        let mut working = *remaining;
        let mut new_letters = vec![];
        let mut intersection_count = 0;

        for (i, ch) in word.chars().enumerate() {
            let cell = start.stepped(i as i16, direction)?;
            match grid.char_at(cell) {
                Some(existing) if existing == ch => intersection_count += 1,
                Some(_) => {
                    trace!("placement of {:?} at {} rejected: cell {} mismatch", word, start, cell);
                    return None;
                }
                None => match working.without_one(ch) {
                    Some(reduced) => {
                        working = reduced;
                        new_letters.push(ch);
                    }
                    None => {
                        trace!("placement of {:?} at {} rejected: no {:?} left in pool", word, start, ch);
                        return None;
                    }
                },
            }
        }

        // 5. Crossing requirement.
        if !grid.is_empty_board() && intersection_count == 0 {
            trace!("placement of {:?} at {} rejected: no intersection with existing grid", word, start);
            return None;
        }

        // 6. Global legality: tentatively commit on a scratch clone.
        let mut scratch = grid.clone();
        scratch.commit_word(word, start, direction);
        if !scratch.is_valid(dictionary) {
            debug!("placement of {:?} at {} rejected: breaks grid validity", word, start);
            return None;
        }

        Some(PlacementOption {
            word: word.to_string(),
            start,
            direction,
            new_letters,
            intersection_count,
        })
    }

    /// Enumerates every `(direction, start)` pair obtained by aligning
    /// some letter of `word` with some existing
    /// filled cell bearing that letter, deduplicated. On an empty grid,
    /// returns a single canonical seed position (horizontal, centered on
    /// row 3) since no intersection is required yet.
    pub fn enumerate_starts(grid: &Grid, word: &str) -> Vec<(Cell, Direction)> {
        if word.len() > crate::grid::SIZE {
            return vec![];
        }

        if grid.is_empty_board() {
            let col = ((crate::grid::SIZE - word.len()) / 2) as u8;
            return vec![(Cell::new(3, col), Direction::Horizontal)];
        }

        let mut starts = std::collections::HashSet::new();
        for row in 0..crate::grid::SIZE {
            for col in 0..crate::grid::SIZE {
                let cell = Cell::new(row as u8, col as u8);
                let existing = match grid.char_at(cell) {
                    Some(c) => c,
                    None => continue,
                };
                for (i, ch) in word.chars().enumerate() {
                    if ch != existing {
                        continue;
                    }
                    if let Some(h_start) = cell.stepped(-(i as i16), Direction::Horizontal) {
                        starts.insert((h_start, Direction::Horizontal));
                    }
                    if let Some(v_start) = cell.stepped(-(i as i16), Direction::Vertical) {
                        starts.insert((v_start, Direction::Vertical));
                    }
                }
            }
        }
        starts.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict() -> Dictionary {
        Dictionary::load(vec!["cat", "car", "art", "xyz"]).unwrap()
    }

    #[test]
    fn seed_placement_on_empty_grid_requires_no_intersection() {
        let grid = Grid::new_empty();
        let remaining = Multiset::from_chars("cat".chars());
        let opt = Kernel::try_place(
            &grid,
            "cat",
            Cell::new(3, 2),
            Direction::Horizontal,
            &remaining,
            &dict(),
        )
        .unwrap();
        assert_eq!(opt.intersection_count, 0);
        assert_eq!(opt.new_letters.len(), 3);
    }

    #[test]
    fn non_seed_placement_requires_intersection() {
        let mut grid = Grid::new_empty();
        grid.commit_word("xyz", Cell::new(0, 0), Direction::Horizontal);
        let remaining = Multiset::from_chars("cat".chars());
        // "cat" placed far away from "xyz" touches nothing.
        let opt = Kernel::try_place(
            &grid,
            "cat",
            Cell::new(5, 5),
            Direction::Horizontal,
            &remaining,
            &dict(),
        );
        assert!(opt.is_none());
    }

    #[test]
    fn rejects_letter_budget_shortfall() {
        let grid = Grid::new_empty();
        // only a single 'a' available but "aat" would need two.
        let remaining = Multiset::from_chars("atc".chars());
        let opt = Kernel::try_place(
            &grid,
            "aat",
            Cell::new(3, 2),
            Direction::Horizontal,
            &remaining,
            &dict(),
        );
        assert!(opt.is_none());
    }

    #[test]
    fn rejects_placement_that_creates_illegal_run() {
        let mut grid = Grid::new_empty();
        grid.commit_word("cat", Cell::new(3, 0), Direction::Horizontal);
        // Placing "ar" vertically through the 'a' in "cat" creates a
        // length-2 crossing run, which is always illegal.
        let remaining = Multiset::from_chars("ar".chars());
        let opt = Kernel::try_place(
            &grid,
            "ar",
            Cell::new(3, 1),
            Direction::Vertical,
            &remaining,
            &dict(),
        );
        assert!(opt.is_none());
    }

    #[test]
    fn rejects_no_extension_violation() {
        let mut grid = Grid::new_empty();
        grid.commit_word("cat", Cell::new(3, 0), Direction::Horizontal);
        // Extending rightward from the existing run's last cell would
        // silently lengthen "cat" rather than crossing it.
        let remaining = Multiset::from_chars("s".chars());
        let opt = Kernel::try_place(
            &grid,
            "s",
            Cell::new(3, 3),
            Direction::Horizontal,
            &remaining,
            &dict(),
        );
        assert!(opt.is_none());
    }

    #[test]
    fn enumerate_starts_finds_both_orientations_through_shared_letter() {
        let mut grid = Grid::new_empty();
        grid.commit_word("cat", Cell::new(3, 0), Direction::Horizontal);
        let starts = Kernel::enumerate_starts(&grid, "car");
        // "car" shares 'c' (index 0) and 'a' (index 1) with "cat".
        assert!(starts.contains(&(Cell::new(3, 0), Direction::Vertical)));
    }
}
