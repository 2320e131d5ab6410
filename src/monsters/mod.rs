//! Monster side of a scenario.
//!
//! - `MonsterActionCycle`: per-type action card cycle
//! - `MonsterInstance` / `MonsterGroup`: live monsters grouped by type
//! - `MonsterRoster`: every type still in play, in registration order

pub mod cycle;
pub mod roster;

pub use cycle::MonsterActionCycle;
pub use roster::{DrawnAction, MonsterGroup, MonsterInstance, MonsterRoster, Removal};
