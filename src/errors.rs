use thiserror::Error;

/// Input-shape errors rejected at the `solve` boundary, before any search begins.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("expected 11 or 12 tiles, got {0}")]
    WrongTileCount(usize),

    #[error("tile {tile_id:?} has non-letter character {ch:?}")]
    NonLetterChar { tile_id: String, ch: char },

    #[error("deadline must be positive, got {0}ms")]
    NonPositiveDeadline(i64),

    #[error("duplicate tile id {0:?}")]
    DuplicateTileId(String),
}

/// Errors raised while building a `Dictionary` from a raw word iterable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    #[error("dictionary entry {0:?} is not lowercase ASCII a-z")]
    NonConformingEntry(String),

    #[error("dictionary contains no usable entries")]
    Empty,
}
