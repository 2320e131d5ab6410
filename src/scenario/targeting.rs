//! Target selection policy.
//!
//! There is no board, so "closest enemy" is modelled as a uniform random
//! pick. Monster targets are chosen in two steps: a uniform type among those
//! in play, then a uniform instance of that type. Instances of a type with
//! fewer members are therefore more likely to be picked individually.

use smallvec::SmallVec;

use super::character::Character;
use crate::core::{CharacterId, InstanceId, RandomSource};
use crate::monsters::MonsterRoster;

/// Uniform random target selection.
pub struct TargetSelector;

impl TargetSelector {
    /// Pick a monster for a character ability. `None` when no monsters
    /// remain.
    pub fn random_monster(
        roster: &MonsterRoster,
        rng: &mut impl RandomSource,
    ) -> Option<InstanceId> {
        let group = rng.choose(roster.groups())?;
        rng.choose(group.instances()).map(|m| m.id)
    }

    /// Pick a non-exhausted character for a monster attack. `None` when the
    /// whole party is exhausted.
    pub fn random_character(
        characters: &[Character],
        rng: &mut impl RandomSource,
    ) -> Option<CharacterId> {
        let candidates: SmallVec<[CharacterId; 8]> = characters
            .iter()
            .filter(|c| !c.is_exhausted())
            .map(|c| c.id)
            .collect();
        rng.choose(&candidates).copied()
    }
}
