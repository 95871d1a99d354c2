pub(crate) mod config;
pub(crate) mod dictionary;
pub(crate) mod errors;
pub(crate) mod graph;
pub(crate) mod grid;
pub(crate) mod placement;
pub(crate) mod reify;
pub(crate) mod search;
pub(crate) mod tile;
mod utils;

// The solver's public surface is exactly `solve`, `SolveResult`,
// `SolveError`, `Tile`, `Cell`, `Direction`, `load_dictionary`,
// `Dictionary`, and `SearchConfig`. Everything else above is an internal
// module; `DictionaryError` and `SolveStats` are re-exported narrowly
// because they appear in the public items' signatures (the error type of
// `load_dictionary` and the field type of `SolveResult::stats`).
pub use config::SearchConfig;
pub use dictionary::Dictionary;
pub use errors::{DictionaryError, SolveError};
pub use search::stats::SolveStats;
pub use tile::{Cell, Direction, Tile};

use serde::{Deserialize, Serialize};

/// Outcome of one `solve` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveResult {
    pub placements: Vec<(String, u8, u8)>,
    pub success: bool,
    pub removed_letter: Option<char>,
    pub stats: Option<SolveStats>,
}

/// Builds a `Dictionary` from a raw word iterable.
pub fn load_dictionary<I, S>(words: I) -> Result<Dictionary, DictionaryError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Dictionary::load(words)
}

/// The solver's sole public entry point.
///
/// Validates the input shape, then runs the two-phase search
/// (12-letter, then 11-letter-with-one-dropped) against `dictionary`,
/// and reifies a successful grid back into tile placements.
pub fn solve(
    tiles: &[Tile],
    deadline_ms: i64,
    dictionary: &Dictionary,
    config: &SearchConfig,
) -> Result<SolveResult, SolveError> {
    tile::validate_tiles(tiles)?;
    if deadline_ms <= 0 {
        return Err(SolveError::NonPositiveDeadline(deadline_ms));
    }

    let outcome = search::run(tiles, deadline_ms, dictionary, config);

    match outcome {
        Some(solved) => {
            let placements = reify::reify(&solved.grid, tiles, solved.tile_count);
            Ok(SolveResult {
                placements,
                success: true,
                removed_letter: solved.removed_letter,
                stats: Some(solved.stats),
            })
        }
        None => Ok(SolveResult {
            placements: vec![],
            success: false,
            removed_letter: None,
            stats: None,
        }),
    }
}
