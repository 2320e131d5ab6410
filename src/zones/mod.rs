//! Zone system for ability card locations.
//!
//! Each character's cards move between four zones over a scenario:
//! available → hand → discarded, with short rests sending discards back to
//! available and one card to lost.
//!
//! ## Key Types
//!
//! - `CardPool`: zone tracking and movement for one character
//! - `CardZone`: the four zones
//! - `Hand` / `HandSlot`: the two cards committed for a round
//! - `DrawOutcome` / `ShortRest`: result of drawing a hand

pub mod pool;

pub use pool::{
    CardPool, CardZone, DrawOutcome, Hand, HandSlot, ShortRest, HAND_SIZE, MAX_DECK_SIZE,
};
