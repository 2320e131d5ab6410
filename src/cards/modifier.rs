//! Attack modifier cards and the reshuffling modifier deck.
//!
//! Every attack draws one modifier. A deck refills itself from its master
//! list whenever it runs dry, and also right after a `Miss` or `Double` is
//! drawn, so those two rare outcomes always start a fresh epoch.

use serde::{Deserialize, Serialize};

use crate::core::RandomSource;

/// An attack modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModifierCard {
    /// No damage at all.
    Miss,
    /// Base damage doubled.
    Double,
    /// Base damage plus a (possibly negative) delta.
    Delta(i32),
}

impl ModifierCard {
    /// Does drawing this card force a reshuffle of its deck?
    #[must_use]
    pub const fn forces_reshuffle(self) -> bool {
        matches!(self, ModifierCard::Miss | ModifierCard::Double)
    }

    /// The standard 20-card starting deck.
    #[must_use]
    pub fn standard_deck() -> Vec<ModifierCard> {
        let mut deck = Vec::with_capacity(20);
        deck.extend(std::iter::repeat(ModifierCard::Delta(0)).take(6));
        deck.extend(std::iter::repeat(ModifierCard::Delta(1)).take(5));
        deck.extend(std::iter::repeat(ModifierCard::Delta(-1)).take(5));
        deck.push(ModifierCard::Delta(2));
        deck.push(ModifierCard::Delta(-2));
        deck.push(ModifierCard::Miss);
        deck.push(ModifierCard::Double);
        deck
    }
}

impl std::fmt::Display for ModifierCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModifierCard::Miss => write!(f, "miss"),
            ModifierCard::Double => write!(f, "x2"),
            ModifierCard::Delta(d) => write!(f, "{:+}", d),
        }
    }
}

/// A modifier deck: a fixed master list plus the cards not yet drawn in the
/// current epoch.
///
/// The master list must be non-empty; `Scenario::setup` rejects empty decks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierDeck {
    master: Vec<ModifierCard>,
    remaining: Vec<ModifierCard>,
}

impl ModifierDeck {
    /// Create a deck. Nothing is drawable until the first draw shuffles it.
    #[must_use]
    pub fn new(master: Vec<ModifierCard>) -> Self {
        Self {
            master,
            remaining: Vec::new(),
        }
    }

    /// Refill from the master list and permute.
    pub fn shuffle(&mut self, rng: &mut impl RandomSource) {
        self.remaining.clear();
        self.remaining.extend_from_slice(&self.master);
        rng.shuffle(&mut self.remaining);
    }

    /// Draw the next modifier.
    ///
    /// # Panics
    ///
    /// Panics if the master list is empty.
    pub fn draw(&mut self, rng: &mut impl RandomSource) -> ModifierCard {
        if self.remaining.is_empty() {
            self.shuffle(rng);
        }
        let card = self
            .remaining
            .pop()
            .unwrap_or_else(|| panic!("modifier deck has an empty master list"));

        if card.forces_reshuffle() {
            tracing::trace!(%card, "modifier forces reshuffle");
            self.shuffle(rng);
        }
        card
    }

    /// Cards left in the current epoch.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    /// Size of the full deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.master.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.master.is_empty()
    }

    #[must_use]
    pub fn master(&self) -> &[ModifierCard] {
        &self.master
    }
}
