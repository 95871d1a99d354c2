use serde::{Deserialize, Serialize};

/// Counters surfaced alongside a `SolveResult`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SolveStats {
    /// Number of (word, placement) combinations actually committed and
    /// recursed into.
    pub attempts: usize,
    /// Number of (word, placement) combinations evaluated by the kernel,
    /// including rejected ones.
    pub combos_checked: usize,
    pub ms: u128,
    /// Number of distinct letters tried in a failed-then-retried Phase B.
    pub letters_dropped_tried: usize,
}
