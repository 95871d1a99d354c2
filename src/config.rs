use std::collections::HashMap;

/// Per-letter rarity weight used to order candidate words and placements.
///
/// Rarer letters score higher so the search engine places them first,
/// which has been observed to reduce backtracking sharply.
fn default_rarity_table() -> [u8; 26] {
    let mut table = [0u8; 26];
    let weighted: &[(&str, u8)] = &[
        ("qz", 10),
        ("x", 9),
        ("j", 8),
        ("k", 7),
        ("v", 6),
        ("wy", 5),
        ("fbhmp", 4),
        ("gcdu", 3),
        ("lnrtso", 2),
        ("iae", 1),
    ];
    for (letters, weight) in weighted {
        for c in letters.chars() {
            table[(c as u8 - b'a') as usize] = *weight;
        }
    }
    table
}

/// The single legitimate configuration surface for the search engine,
/// collecting what would otherwise be scattered tuning constants.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    pub rarity: [u8; 26],
    /// Candidate words tried at the root frame.
    pub w0: usize,
    /// Placements tried per candidate word at the root frame.
    pub p0: usize,
    /// Candidate words tried at non-root frames.
    pub wd: usize,
    /// Placements tried per candidate word at non-root frames.
    pub pd: usize,
    /// Fraction of the total deadline spent on the 12-letter phase before
    /// falling back to 11-letter attempts.
    pub phase_a_fraction: f64,
    /// Seed for tie-breaking randomness; reproducible across calls when set.
    pub seed: Option<u64>,
}

impl SearchConfig {
    pub fn default() -> Self {
        SearchConfig::new_from_overrides(HashMap::new())
    }

    /// Builds a config from the documented defaults, overridden by any keys
    /// present in `overrides`, so tuning knobs never leak out as bare
    /// module constants.
    pub fn new_from_overrides(overrides: HashMap<&str, usize>) -> Self {
        SearchConfig {
            rarity: default_rarity_table(),
            w0: *overrides.get("w0").unwrap_or(&60),
            p0: *overrides.get("p0").unwrap_or(&8),
            wd: *overrides.get("wd").unwrap_or(&30),
            pd: *overrides.get("pd").unwrap_or(&4),
            phase_a_fraction: 0.7,
            seed: overrides.get("seed").map(|s| *s as u64),
        }
    }

    pub fn rarity_of(&self, ch: char) -> u32 {
        self.rarity[(ch as u8 - b'a') as usize] as u32
    }

    pub fn word_rarity(&self, word: &str) -> u32 {
        word.chars().map(|c| self.rarity_of(c)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rare_letters_score_higher_than_common_ones() {
        let config = SearchConfig::default();
        assert!(config.rarity_of('q') > config.rarity_of('e'));
        assert!(config.rarity_of('z') > config.rarity_of('s'));
        assert_eq!(config.rarity_of('a'), 1);
    }

    #[test]
    fn overrides_replace_only_named_defaults() {
        let mut overrides = HashMap::new();
        overrides.insert("w0", 10);
        let config = SearchConfig::new_from_overrides(overrides);
        assert_eq!(config.w0, 10);
        assert_eq!(config.p0, 8);
    }
}
