use crate::grid::Grid;
use crate::tile::Tile;

/// Converts a solved character grid back into `(tile-id, row, col)` triples
/// by scanning row-major and picking any not-yet-used input tile whose
/// character matches. Panics if a cell's letter has no matching unused
/// tile left — this would mean the search produced a grid inconsistent
/// with the input multiset, a programmer error that must never be
/// silently swallowed into an invalid placement list.
pub fn reify(grid: &Grid, tiles: &[Tile], expected_count: usize) -> Vec<(String, u8, u8)> {
    let mut used = vec![false; tiles.len()];
    let mut placements = vec![];

    for row in 0..crate::grid::SIZE {
        for col in 0..crate::grid::SIZE {
            let cell = crate::tile::Cell::new(row as u8, col as u8);
            let ch = match grid.char_at(cell) {
                Some(ch) => ch,
                None => continue,
            };
            let tile_index = tiles
                .iter()
                .enumerate()
                .find(|(i, tile)| !used[*i] && tile.ch == ch)
                .map(|(i, _)| i)
                .unwrap_or_else(|| {
                    panic!(
                        "grid cell {} holds {:?} but no unused input tile has that character",
                        cell, ch
                    )
                });
            used[tile_index] = true;
            placements.push((tiles[tile_index].id.clone(), cell.row, cell.col));
        }
    }

    assert_eq!(
        placements.len(),
        expected_count,
        "reified {} placements but expected exactly {}",
        placements.len(),
        expected_count
    );

    placements
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::{Cell, Direction, Tile};

    #[test]
    fn reifies_a_single_word_to_matching_tile_ids() {
        let mut grid = Grid::new_empty();
        grid.commit_word("cat", Cell::new(3, 2), Direction::Horizontal);
        let tiles = vec![
            Tile::new("t0", 'c'),
            Tile::new("t1", 'a'),
            Tile::new("t2", 't'),
        ];
        let placements = reify(&grid, &tiles, 3);
        assert_eq!(placements.len(), 3);
        let ids: Vec<&str> = placements.iter().map(|(id, _, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["t0", "t1", "t2"]);
        assert_eq!(placements[0].1, 3);
        assert_eq!(placements[0].2, 2);
    }

    #[test]
    fn picks_any_interchangeable_tile_for_duplicate_letters() {
        let mut grid = Grid::new_empty();
        grid.commit_word("eel", Cell::new(3, 2), Direction::Horizontal);
        let tiles = vec![
            Tile::new("e-first", 'e'),
            Tile::new("e-second", 'e'),
            Tile::new("ell", 'l'),
        ];
        let placements = reify(&grid, &tiles, 3);
        assert_eq!(placements.len(), 3);
    }

    #[test]
    #[should_panic(expected = "no unused input tile has that character")]
    fn panics_when_a_grid_letter_has_no_matching_tile() {
        let mut grid = Grid::new_empty();
        grid.commit_word("cat", Cell::new(3, 2), Direction::Horizontal);
        let tiles = vec![Tile::new("t0", 'c'), Tile::new("t1", 'a')];
        reify(&grid, &tiles, 3);
    }
}
