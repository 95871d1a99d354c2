use log::{info, warn};

/// One square of the fixed 8x8 board. Named `Slot` rather than `Cell` to
/// avoid clashing with the `Cell` coordinate type.
#[derive(Clone, Copy, Debug, Default)]
pub struct Slot {
    fill: FillStatus,
}

#[derive(Clone, Copy, Debug, Default)]
enum FillStatus {
    #[default]
    Empty,
    Filled(FilledSlot),
}

#[derive(Clone, Copy, Debug)]
struct FilledSlot {
    letter: char,
    across_word_id: Option<usize>,
    down_word_id: Option<usize>,
}

impl Slot {
    pub fn empty() -> Self {
        Slot {
            fill: FillStatus::Empty,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.fill, FillStatus::Empty)
    }

    pub fn contains_letter(&self) -> bool {
        matches!(self.fill, FillStatus::Filled(_))
    }

    pub fn to_char(&self) -> Option<char> {
        match self.fill {
            FillStatus::Filled(f) => Some(f.letter),
            FillStatus::Empty => None,
        }
    }

    pub fn across_word_id(&self) -> Option<usize> {
        match self.fill {
            FillStatus::Filled(f) => f.across_word_id,
            FillStatus::Empty => None,
        }
    }

    pub fn down_word_id(&self) -> Option<usize> {
        match self.fill {
            FillStatus::Filled(f) => f.down_word_id,
            FillStatus::Empty => None,
        }
    }

    pub fn is_intersection(&self) -> bool {
        self.across_word_id().is_some() && self.down_word_id().is_some()
    }

    /// Records that `word_id` covers this slot with `letter`, running in
    /// `across`/`down` depending on `is_across`. Fails (returning `false`,
    /// mutating nothing) if the slot already holds a different letter, or
    /// already has a word id for this direction that disagrees.
    pub fn write(&mut self, word_id: usize, letter: char, is_across: bool) -> bool {
        let (mut across_word_id, mut down_word_id) = (None, None);
        if is_across {
            across_word_id = Some(word_id);
        } else {
            down_word_id = Some(word_id);
        }

        let success = match self.fill {
            FillStatus::Filled(existing) => {
                if is_across {
                    down_word_id = existing.down_word_id;
                    if existing.across_word_id.is_some() && existing.across_word_id != across_word_id {
                        warn!(
                            "existing across word id {:?} doesn't match new id {:?}",
                            existing.across_word_id, across_word_id
                        );
                        false
                    } else {
                        existing.letter == letter
                    }
                } else {
                    across_word_id = existing.across_word_id;
                    if existing.down_word_id.is_some() && existing.down_word_id != down_word_id {
                        warn!(
                            "existing down word id {:?} doesn't match new id {:?}",
                            existing.down_word_id, down_word_id
                        );
                        false
                    } else {
                        existing.letter == letter
                    }
                }
            }
            FillStatus::Empty => true,
        };

        if !success {
            info!("rejecting write of {:?} to slot already holding {:?}", letter, self.to_char());
            return false;
        }

        self.fill = FillStatus::Filled(FilledSlot {
            letter,
            across_word_id,
            down_word_id,
        });
        true
    }

    pub fn remove_word(&mut self, word_id: usize) {
        if let FillStatus::Filled(filled) = self.fill {
            let across_word_id = filled.across_word_id.filter(|id| *id != word_id);
            let down_word_id = filled.down_word_id.filter(|id| *id != word_id);
            if across_word_id.is_none() && down_word_id.is_none() {
                self.fill = FillStatus::Empty;
            } else {
                self.fill = FillStatus::Filled(FilledSlot {
                    letter: filled.letter,
                    across_word_id,
                    down_word_id,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_remove_round_trips_to_empty() {
        let mut slot = Slot::empty();
        assert!(slot.write(0, 'a', true));
        assert!(slot.contains_letter());
        assert!(slot.write(1, 'a', false));
        assert!(slot.is_intersection());
        slot.remove_word(0);
        assert!(!slot.is_intersection());
        assert!(slot.contains_letter());
        slot.remove_word(1);
        assert!(slot.is_empty());
    }

    #[test]
    fn write_rejects_mismatched_letter() {
        let mut slot = Slot::empty();
        assert!(slot.write(0, 'a', true));
        assert!(!slot.write(1, 'b', false));
    }

    #[test]
    fn write_rejects_conflicting_word_id_same_direction() {
        let mut slot = Slot::empty();
        assert!(slot.write(0, 'a', true));
        assert!(!slot.write(1, 'a', true));
    }
}
