pub(crate) mod stats;

use std::time::{Duration, Instant};

use log::info;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::config::SearchConfig;
use crate::dictionary::Dictionary;
use crate::grid::Grid;
use crate::placement::Kernel;
use crate::tile::{Multiset, Tile};

use stats::SolveStats;

/// Everything the two-phase driver needs to hand back to `lib::solve`.
pub struct Solved {
    pub grid: Grid,
    pub tile_count: usize,
    pub removed_letter: Option<char>,
    pub stats: SolveStats,
}

/// One point in the recursion: the grid built so far and the letters not
/// yet placed. Cloned on each branch rather than undone in place — trivial
/// here since a `Grid` is 64 small slots — so sibling branches never see
/// mutations from earlier siblings.
#[derive(Clone)]
struct SearchState {
    grid: Grid,
    remaining: Multiset,
}

/// Drives the two-phase search (12-letter, then 11-letter with one tile
/// dropped) and returns the first solved grid found, or `None` if both
/// phases exhaust their budgets.
pub fn run(tiles: &[Tile], deadline_ms: i64, dictionary: &Dictionary, config: &SearchConfig) -> Option<Solved> {
    let start = Instant::now();
    let total_budget = Duration::from_millis(deadline_ms as u64);
    let overall_deadline = start + total_budget;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let full_multiset = Multiset::from_tiles(tiles);
    let mut stats = SolveStats::default();

    info!("phase A: attempting {}-letter solve", tiles.len());
    let phase_a_deadline = start
        + Duration::from_secs_f64(total_budget.as_secs_f64() * config.phase_a_fraction);
    let phase_a_deadline = phase_a_deadline.min(overall_deadline);

    if let Some(grid) = attempt(&full_multiset, dictionary, config, phase_a_deadline, &mut rng, &mut stats) {
        stats.ms = start.elapsed().as_millis();
        return Some(Solved {
            grid,
            tile_count: tiles.len(),
            removed_letter: None,
            stats,
        });
    }

    if Instant::now() >= overall_deadline {
        stats.ms = start.elapsed().as_millis();
        return None;
    }

    info!("phase A failed, entering phase B (dropping one letter at a time)");
    let mut distinct_letters: Vec<char> = full_multiset.letters_present().collect();
    distinct_letters.sort_by_key(|&ch| std::cmp::Reverse(config.rarity_of(ch)));

    if distinct_letters.is_empty() {
        stats.ms = start.elapsed().as_millis();
        return None;
    }

    let remaining_budget = overall_deadline.saturating_duration_since(Instant::now());
    let per_letter_budget = remaining_budget / distinct_letters.len() as u32;

    for ch in distinct_letters {
        if Instant::now() >= overall_deadline {
            break;
        }
        stats.letters_dropped_tried += 1;
        let dropped = full_multiset
            .without_one(ch)
            .expect("ch was reported present by letters_present");

        info!("phase B: trying with {:?} dropped", ch);
        let sub_deadline = (Instant::now() + per_letter_budget).min(overall_deadline);
        if let Some(grid) = attempt(&dropped, dictionary, config, sub_deadline, &mut rng, &mut stats) {
            stats.ms = start.elapsed().as_millis();
            return Some(Solved {
                grid,
                tile_count: tiles.len() - 1,
                removed_letter: Some(ch),
                stats,
            });
        }
    }

    stats.ms = start.elapsed().as_millis();
    None
}

/// Runs one full backtracking attempt against `multiset` until it either
/// finds a solution, exhausts the search, or hits `deadline`.
fn attempt(
    multiset: &Multiset,
    dictionary: &Dictionary,
    config: &SearchConfig,
    deadline: Instant,
    rng: &mut StdRng,
    stats: &mut SolveStats,
) -> Option<Grid> {
    if multiset.total() >= 3 && dictionary.words_formable_from(multiset).is_empty() {
        info!("no word at all can be formed from this multiset, failing fast");
        return None;
    }

    let shared_words: Vec<String> = dictionary
        .words_formable_from(multiset)
        .into_iter()
        .map(|w| w.to_string())
        .collect();

    let state = SearchState {
        grid: Grid::new_empty(),
        remaining: *multiset,
    };

    search_frame(&state, &shared_words, 0, dictionary, config, deadline, rng, stats)
}

fn search_frame(
    state: &SearchState,
    shared_words: &[String],
    depth: usize,
    dictionary: &Dictionary,
    config: &SearchConfig,
    deadline: Instant,
    rng: &mut StdRng,
    stats: &mut SolveStats,
) -> Option<Grid> {
    if Instant::now() >= deadline {
        return None;
    }
    if state.remaining.total() == 0 {
        return Some(state.grid.clone());
    }
    if state.remaining.total() >= 3 && dictionary.words_formable_from(&state.remaining).is_empty() {
        return None;
    }

    let is_root = state.grid.is_empty_board();
    let mut candidates: Vec<&str> = shared_words
        .iter()
        .map(|w| w.as_str())
        .filter(|w: &&str| {
            if is_root {
                state.remaining.dominates_word(w)
            } else {
                w.chars().any(|c| state.remaining.count(c) > 0)
            }
        })
        .collect();

    // Shuffle first so the later stable sort resolves equal-priority ties
    // in a reproducible, seed-dependent order.
    candidates.shuffle(rng);
    candidates.sort_by_key(|w| std::cmp::Reverse((rarity_contribution(w, &state.remaining, config), w.len())));

    let word_cap = if depth == 0 { config.w0 } else { config.wd };
    let placement_cap = if depth == 0 { config.p0 } else { config.pd };

    for word in candidates.into_iter().take(word_cap) {
        let mut starts = Kernel::enumerate_starts(&state.grid, word);
        starts.shuffle(rng);

        let mut options: Vec<_> = starts
            .into_iter()
            .filter_map(|(start, direction)| {
                stats.combos_checked += 1;
                Kernel::try_place(&state.grid, word, start, direction, &state.remaining, dictionary)
            })
            .collect();

        options.sort_by_key(|opt| {
            let new_letters: String = opt.new_letters.iter().collect();
            std::cmp::Reverse((
                config.word_rarity(&new_letters),
                opt.new_letters.len(),
                opt.intersection_count,
            ))
        });

        for option in options.into_iter().take(placement_cap) {
            stats.attempts += 1;
            let mut next_grid = state.grid.clone();
            next_grid.commit_word(&option.word, option.start, option.direction);

            let mut next_remaining = state.remaining;
            for ch in &option.new_letters {
                next_remaining.remove(*ch);
            }

            let next_state = SearchState {
                grid: next_grid,
                remaining: next_remaining,
            };

            if let Some(solved) = search_frame(&next_state, shared_words, depth + 1, dictionary, config, deadline, rng, stats) {
                return Some(solved);
            }
        }
    }

    None
}

/// Sum of per-letter rarity weights over the letters `word` would draw
/// from `remaining`, capped by availability (a word can't draw more copies
/// of a letter than remain). Approximates the placement ordering heuristic
/// without requiring a full placement to know which letters are new.
fn rarity_contribution(word: &str, remaining: &Multiset, config: &SearchConfig) -> u32 {
    let mut budget = *remaining;
    let mut score = 0;
    for ch in word.chars() {
        if let Some(reduced) = budget.without_one(ch) {
            score += config.rarity_of(ch);
            budget = reduced;
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;

    fn small_dictionary() -> Dictionary {
        Dictionary::load(vec!["cat", "car", "art", "rat", "tar"]).unwrap()
    }

    #[test]
    fn attempt_solves_a_trivial_crossing_pair() {
        // "cat" (seed) crossed by "art" through the shared 'a' uses exactly
        // these five letters with nothing left over.
        let dict = small_dictionary();
        let config = SearchConfig::default();
        let multiset = Multiset::from_chars("catrt".chars());
        let mut rng = StdRng::seed_from_u64(1);
        let mut stats = SolveStats::default();
        let deadline = Instant::now() + Duration::from_millis(2000);
        let grid = attempt(&multiset, &dict, &config, deadline, &mut rng, &mut stats);
        assert!(grid.is_some());
        let grid = grid.unwrap();
        assert!(grid.is_valid(&dict));
        assert!(grid.is_connected());
        assert_eq!(grid.count_filled_cells(), multiset.total() as usize);
    }

    #[test]
    fn attempt_fails_fast_on_an_unformable_multiset() {
        let dict = small_dictionary();
        let config = SearchConfig::default();
        let multiset = Multiset::from_chars("qqqqq".chars());
        let mut rng = StdRng::seed_from_u64(1);
        let mut stats = SolveStats::default();
        let deadline = Instant::now() + Duration::from_millis(2000);
        assert!(attempt(&multiset, &dict, &config, deadline, &mut rng, &mut stats).is_none());
    }

    #[test]
    fn zero_deadline_returns_none_without_recursing() {
        let dict = small_dictionary();
        let config = SearchConfig::default();
        let multiset = Multiset::from_chars("cartat".chars());
        let mut rng = StdRng::seed_from_u64(1);
        let mut stats = SolveStats::default();
        let deadline = Instant::now();
        assert!(attempt(&multiset, &dict, &config, deadline, &mut rng, &mut stats).is_none());
        assert_eq!(stats.attempts, 0);
    }
}
