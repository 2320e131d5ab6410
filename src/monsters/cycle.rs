//! Round-robin cycle of a monster type's action cards.

use serde::{Deserialize, Serialize};

use crate::core::RandomSource;

/// Action cards for one monster type, as indices into the type's action
/// list.
///
/// Cards are drawn from `unused` and pushed onto `used`. When `unused` runs
/// out the two lists swap, so the next pass replays the used cards in
/// reverse draw order. Only the initial setup shuffles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterActionCycle {
    unused: Vec<usize>,
    used: Vec<usize>,
    active: Option<usize>,
}

impl MonsterActionCycle {
    /// Create a cycle over `action_count` cards, shuffled.
    pub fn new(action_count: usize, rng: &mut impl RandomSource) -> Self {
        let mut cycle = Self::default();
        cycle.setup(action_count, rng);
        cycle
    }

    /// Reset: all cards unused and shuffled, no active card.
    pub fn setup(&mut self, action_count: usize, rng: &mut impl RandomSource) {
        self.unused = (0..action_count).collect();
        rng.shuffle(&mut self.unused);
        self.used.clear();
        self.active = None;
    }

    /// Draw this round's action card. Returns `None` only for a type with
    /// no action cards.
    pub fn next_card(&mut self) -> Option<usize> {
        if self.unused.is_empty() {
            std::mem::swap(&mut self.unused, &mut self.used);
        }
        let card = self.unused.pop()?;
        self.used.push(card);
        self.active = Some(card);
        Some(card)
    }

    /// The card drawn most recently.
    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    #[must_use]
    pub fn unused_len(&self) -> usize {
        self.unused.len()
    }

    #[must_use]
    pub fn used_len(&self) -> usize {
        self.used.len()
    }
}
