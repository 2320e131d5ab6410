//! Per-character ability card pool.
//!
//! A `CardPool` partitions a character's full card table into four zones:
//! - `Available`: may be drawn into a hand
//! - `Hand`: the two cards committed for the current round
//! - `Discarded`: played this scenario, recoverable by a short rest
//! - `Lost`: gone for the rest of the scenario
//!
//! The zones always partition the full deck: the sum of their sizes equals
//! `total_cards()` after every operation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::AbilityCard;
use crate::core::{AbilityCardId, RandomSource};

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 2;

/// Largest card table a pool can track; `AbilityCardId` is a `u16`.
pub const MAX_DECK_SIZE: usize = u16::MAX as usize;

/// The zone a card currently sits in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardZone {
    Available,
    Hand,
    Discarded,
    Lost,
}

/// Which half of a hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandSlot {
    Top,
    Bottom,
}

impl HandSlot {
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            HandSlot::Top => HandSlot::Bottom,
            HandSlot::Bottom => HandSlot::Top,
        }
    }
}

/// Two distinct ability cards plus the slot whose initiative schedules the
/// character this round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    pub top: AbilityCardId,
    pub bottom: AbilityCardId,
    top_initiative: u8,
    bottom_initiative: u8,
    pub selected: HandSlot,
}

impl Hand {
    #[must_use]
    pub fn new(
        top: (AbilityCardId, u8),
        bottom: (AbilityCardId, u8),
        selected: HandSlot,
    ) -> Self {
        Self {
            top: top.0,
            bottom: bottom.0,
            top_initiative: top.1,
            bottom_initiative: bottom.1,
            selected,
        }
    }

    /// Card in the given slot.
    #[must_use]
    pub const fn card(&self, slot: HandSlot) -> AbilityCardId {
        match slot {
            HandSlot::Top => self.top,
            HandSlot::Bottom => self.bottom,
        }
    }

    /// Initiative of the card in the given slot.
    #[must_use]
    pub const fn initiative_of(&self, slot: HandSlot) -> u8 {
        match slot {
            HandSlot::Top => self.top_initiative,
            HandSlot::Bottom => self.bottom_initiative,
        }
    }

    /// The scheduling initiative for this round.
    #[must_use]
    pub const fn initiative(&self) -> u8 {
        self.initiative_of(self.selected)
    }

    /// The unselected card's initiative, used to break ties.
    #[must_use]
    pub const fn tie_break_initiative(&self) -> u8 {
        self.initiative_of(self.selected.other())
    }

    /// Both cards in play order (top, then bottom).
    #[must_use]
    pub const fn cards(&self) -> [AbilityCardId; HAND_SIZE] {
        [self.top, self.bottom]
    }
}

/// Summary of a short rest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortRest {
    /// Discarded cards returned to the available zone.
    pub recovered: usize,
    /// The card lost as the cost of resting, if there was one to lose.
    pub lost: Option<AbilityCardId>,
}

/// Result of trying to draw a hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawOutcome {
    /// A hand was drawn, possibly after a short rest.
    Drawn { hand: Hand, rest: Option<ShortRest> },
    /// Not enough cards even after resting. No hand was drawn.
    Exhausted { rest: Option<ShortRest> },
}

impl DrawOutcome {
    #[must_use]
    pub fn hand(&self) -> Option<&Hand> {
        match self {
            DrawOutcome::Drawn { hand, .. } => Some(hand),
            DrawOutcome::Exhausted { .. } => None,
        }
    }

    #[must_use]
    pub fn rest(&self) -> Option<&ShortRest> {
        match self {
            DrawOutcome::Drawn { rest, .. } | DrawOutcome::Exhausted { rest } => rest.as_ref(),
        }
    }
}

/// A character's ability cards, partitioned into zones.
///
/// ```
/// use skirmish::cards::AbilityCard;
/// use skirmish::core::GameRng;
/// use skirmish::zones::{CardPool, CardZone};
///
/// let cards: Vec<_> = (0..4).map(|i| AbilityCard::new(format!("c{i}"), 10 * i)).collect();
/// let mut pool = CardPool::new(cards.len());
/// let mut rng = GameRng::new(7);
///
/// assert!(pool.draw_hand(&cards, &mut rng).hand().is_some());
/// assert_eq!(pool.zone_size(CardZone::Available), 2);
///
/// pool.end_round();
/// assert_eq!(pool.zone_size(CardZone::Discarded), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPool {
    deck_size: usize,
    available: Vec<AbilityCardId>,
    discarded: Vec<AbilityCardId>,
    lost: Vec<AbilityCardId>,
    hand: Option<Hand>,
}

impl CardPool {
    /// Create a pool over `deck_size` cards, all available. Sizes above
    /// `MAX_DECK_SIZE` are capped; `Scenario::setup` rejects such classes.
    #[must_use]
    pub fn new(deck_size: usize) -> Self {
        let deck_size = deck_size.min(MAX_DECK_SIZE);
        let mut pool = Self {
            deck_size,
            available: Vec::with_capacity(deck_size),
            discarded: Vec::new(),
            lost: Vec::new(),
            hand: None,
        };
        pool.setup();
        pool
    }

    /// Put every card back into the available zone.
    pub fn setup(&mut self) {
        self.available.clear();
        self.available
            .extend((0..=u16::MAX).take(self.deck_size).map(AbilityCardId::new));
        self.discarded.clear();
        self.lost.clear();
        self.hand = None;
    }

    /// Draw a hand of two, short resting first if fewer than two cards are
    /// available.
    ///
    /// `cards` is the owning class's card table, used for initiatives.
    /// Any hand still held is discarded first.
    pub fn draw_hand(&mut self, cards: &[AbilityCard], rng: &mut impl RandomSource) -> DrawOutcome {
        self.end_round();

        let rest = if self.available.len() < HAND_SIZE {
            Some(self.short_rest(rng))
        } else {
            None
        };

        if self.available.len() < HAND_SIZE {
            tracing::debug!(available = self.available.len(), "not enough cards for a hand");
            return DrawOutcome::Exhausted { rest };
        }

        rng.shuffle(&mut self.available);
        let mut drawn: SmallVec<[AbilityCardId; HAND_SIZE]> = SmallVec::new();
        for _ in 0..HAND_SIZE {
            if let Some(card) = self.available.pop() {
                drawn.push(card);
            }
        }
        let (top, bottom) = (drawn[0], drawn[1]);

        let selected = if rng.next_index(2) == 0 {
            HandSlot::Top
        } else {
            HandSlot::Bottom
        };
        let hand = Hand::new(
            (top, initiative(cards, top)),
            (bottom, initiative(cards, bottom)),
            selected,
        );
        self.hand = Some(hand);

        DrawOutcome::Drawn { hand, rest }
    }

    /// Recover all discards, then lose one random available card.
    fn short_rest(&mut self, rng: &mut impl RandomSource) -> ShortRest {
        let recovered = self.discarded.len();
        self.available.append(&mut self.discarded);
        rng.shuffle(&mut self.available);

        let lost = if self.available.is_empty() {
            None
        } else {
            let victim = rng.next_index(self.available.len());
            let card = self.available.swap_remove(victim);
            self.lost.push(card);
            Some(card)
        };

        tracing::debug!(recovered, ?lost, "short rest");
        ShortRest { recovered, lost }
    }

    /// Move the hand into the discard zone.
    pub fn end_round(&mut self) {
        if let Some(hand) = self.hand.take() {
            self.discarded.extend(hand.cards());
        }
    }

    /// The hand held this round.
    #[must_use]
    pub fn hand(&self) -> Option<&Hand> {
        self.hand.as_ref()
    }

    /// Number of cards in a zone.
    #[must_use]
    pub fn zone_size(&self, zone: CardZone) -> usize {
        match zone {
            CardZone::Available => self.available.len(),
            CardZone::Discarded => self.discarded.len(),
            CardZone::Lost => self.lost.len(),
            CardZone::Hand => self.hand.map_or(0, |_| HAND_SIZE),
        }
    }

    /// Cards in a zone, in pool order. Hand cards are listed top first.
    #[must_use]
    pub fn cards_in_zone(&self, zone: CardZone) -> SmallVec<[AbilityCardId; 16]> {
        match zone {
            CardZone::Available => self.available.iter().copied().collect(),
            CardZone::Discarded => self.discarded.iter().copied().collect(),
            CardZone::Lost => self.lost.iter().copied().collect(),
            CardZone::Hand => self.hand.iter().flat_map(|h| h.cards()).collect(),
        }
    }

    /// Find which zone a card is in.
    #[must_use]
    pub fn zone_of(&self, card: AbilityCardId) -> Option<CardZone> {
        if self.available.contains(&card) {
            Some(CardZone::Available)
        } else if self.discarded.contains(&card) {
            Some(CardZone::Discarded)
        } else if self.lost.contains(&card) {
            Some(CardZone::Lost)
        } else if self.hand.is_some_and(|h| h.top == card || h.bottom == card) {
            Some(CardZone::Hand)
        } else {
            None
        }
    }

    /// Size of the full card table.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck_size
    }

    /// Sum of all zone sizes. Always equals `total_cards()`.
    #[must_use]
    pub fn tracked_cards(&self) -> usize {
        [
            CardZone::Available,
            CardZone::Hand,
            CardZone::Discarded,
            CardZone::Lost,
        ]
        .into_iter()
        .map(|z| self.zone_size(z))
        .sum()
    }
}

fn initiative(cards: &[AbilityCard], id: AbilityCardId) -> u8 {
    cards.get(id.index()).map_or(u8::MAX, |c| c.initiative)
}
