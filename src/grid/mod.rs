use ndarray::Array2;
use std::collections::HashSet;
use std::fmt;

mod matrix;
mod slot;
mod validity;

use slot::Slot;

use crate::dictionary::Dictionary;
use crate::graph::Graph;
use crate::tile::{Cell, Direction};

pub const SIZE: usize = Cell::SIZE as usize;

/// A fixed 8x8 crossword board. Cells only transition empty -> filled
/// during a descent; the search engine clones the whole grid on each
/// recursive branch (trivial here since the grid is 64 small slots) so
/// sibling branches never see each other's mutations.
#[derive(Clone)]
pub struct Grid {
    slots: Array2<Slot>,
    next_word_id: usize,
}

impl Grid {
    pub fn new_empty() -> Self {
        Grid {
            slots: Array2::from_elem((SIZE, SIZE), Slot::empty()),
            next_word_id: 0,
        }
    }

    fn get(&self, cell: Cell) -> &Slot {
        &self.slots[[cell.row as usize, cell.col as usize]]
    }

    fn get_mut(&mut self, cell: Cell) -> &mut Slot {
        &mut self.slots[[cell.row as usize, cell.col as usize]]
    }

    pub fn char_at(&self, cell: Cell) -> Option<char> {
        self.get(cell).to_char()
    }

    pub fn is_empty_board(&self) -> bool {
        self.slots.iter().all(|s| s.is_empty())
    }

    pub fn count_filled_cells(&self) -> usize {
        self.slots.iter().filter(|s| s.contains_letter()).count()
    }

    /// Commits `word` into the grid starting at `start` running in
    /// `direction`, tagging every cell it covers with a fresh word id.
    /// Only called after the Placement Kernel has approved the placement;
    /// writes here are expected to succeed.
    pub fn commit_word(&mut self, word: &str, start: Cell, direction: Direction) -> usize {
        let word_id = self.next_word_id;
        self.next_word_id += 1;
        for (i, ch) in word.chars().enumerate() {
            let cell = start
                .stepped(i as i16, direction)
                .expect("kernel validated bounds before commit");
            let wrote = self
                .get_mut(cell)
                .write(word_id, ch, direction == Direction::Horizontal);
            debug_assert!(wrote, "kernel should have validated compatibility before commit");
        }
        word_id
    }

    /// Undoes a previously committed word, used when the search engine
    /// backtracks out of a branch.
    pub fn undo_word(&mut self, word_id: usize, word_len: usize, start: Cell, direction: Direction) {
        for i in 0..word_len {
            let cell = start
                .stepped(i as i16, direction)
                .expect("bounds were validated at commit time");
            self.get_mut(cell).remove_word(word_id);
        }
    }

    fn placed_word_ids(&self) -> HashSet<usize> {
        let mut ids = HashSet::new();
        for slot in self.slots.iter() {
            if let Some(id) = slot.across_word_id() {
                ids.insert(id);
            }
            if let Some(id) = slot.down_word_id() {
                ids.insert(id);
            }
        }
        ids
    }

    fn to_graph(&self) -> Graph {
        let mut edges = vec![];
        for slot in self.slots.iter() {
            if slot.is_intersection() {
                edges.push((slot.across_word_id().unwrap(), slot.down_word_id().unwrap()));
            }
        }
        let mut graph = Graph::new_from_edges(edges);
        for id in self.placed_word_ids() {
            graph.add_node(id);
        }
        graph
    }

    /// True iff the occupied cells form a single 4-connected component.
    /// Every placed word is itself a straight, contiguous run of cells,
    /// so this reduces to checking that the word-intersection graph is
    /// connected.
    pub fn is_connected(&self) -> bool {
        let ids = self.placed_word_ids();
        ids.len() <= 1 || self.to_graph().is_connected()
    }

    /// Scans every row and column run and checks it against `dictionary`.
    /// Safe to call on partial grids.
    pub fn is_valid(&self, dictionary: &Dictionary) -> bool {
        validity::is_valid_grid(self, dictionary)
    }

    pub(crate) fn row_chars(&self, row: usize) -> impl Iterator<Item = Option<char>> + '_ {
        (0..SIZE).map(move |col| self.slots[[row, col]].to_char())
    }

    pub(crate) fn col_chars(&self, col: usize) -> impl Iterator<Item = Option<char>> + '_ {
        (0..SIZE).map(move |row| self.slots[[row, col]].to_char())
    }

    pub(crate) fn filled_mask(&self) -> Array2<u8> {
        self.slots.mapv(|s| s.contains_letter() as u8)
    }

    pub fn to_char_grid(&self) -> Vec<Vec<Option<char>>> {
        (0..SIZE)
            .map(|row| (0..SIZE).map(|col| self.slots[[row, col]].to_char()).collect())
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..SIZE {
            for col in 0..SIZE {
                let c = self.slots[[row, col]].to_char().unwrap_or(' ');
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid(\n{})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_and_undo_round_trips_to_empty() {
        let mut grid = Grid::new_empty();
        let id = grid.commit_word("cat", Cell::new(3, 2), Direction::Horizontal);
        assert_eq!(grid.count_filled_cells(), 3);
        grid.undo_word(id, 3, Cell::new(3, 2), Direction::Horizontal);
        assert_eq!(grid.count_filled_cells(), 0);
        assert!(grid.is_empty_board());
    }

    #[test]
    fn single_word_is_trivially_connected() {
        let mut grid = Grid::new_empty();
        grid.commit_word("cat", Cell::new(3, 2), Direction::Horizontal);
        assert!(grid.is_connected());
    }

    #[test]
    fn crossing_words_are_connected_disjoint_words_are_not() {
        let mut grid = Grid::new_empty();
        grid.commit_word("cat", Cell::new(3, 2), Direction::Horizontal);
        grid.commit_word("car", Cell::new(3, 2), Direction::Vertical);
        assert!(grid.is_connected());

        let mut disjoint = Grid::new_empty();
        disjoint.commit_word("cat", Cell::new(0, 0), Direction::Horizontal);
        disjoint.commit_word("dog", Cell::new(6, 0), Direction::Horizontal);
        assert!(!disjoint.is_connected());
    }
}
