//! Live monster instances, grouped by type.
//!
//! Groups are kept in registration order (first appearance in the
//! encounter). A group exists exactly while its type still has live
//! instances, so the group list doubles as the list of types in play.

use serde::{Deserialize, Serialize};

use super::cycle::MonsterActionCycle;
use crate::cards::{DefinitionRegistry, MonsterTier};
use crate::core::{EncounterEntry, InstanceId, MonsterTypeId, RandomSource, SetupError};

/// A single monster on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterInstance {
    pub id: InstanceId,
    pub tier: MonsterTier,
    pub hp: u32,
    pub max_hp: u32,
}

impl MonsterInstance {
    #[must_use]
    pub fn is_elite(&self) -> bool {
        self.tier == MonsterTier::Elite
    }
}

/// All live instances of one monster type plus its action cycle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterGroup {
    pub monster_type: MonsterTypeId,
    /// Position in registration order; breaks initiative ties.
    pub order: usize,
    pub cycle: MonsterActionCycle,
    instances: Vec<MonsterInstance>,
}

impl MonsterGroup {
    /// Live instances in placement order.
    #[must_use]
    pub fn instances(&self) -> &[MonsterInstance] {
        &self.instances
    }

    #[must_use]
    pub fn instance(&self, id: InstanceId) -> Option<&MonsterInstance> {
        self.instances.iter().find(|m| m.id == id)
    }
}

/// What happened when an instance was removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Removal {
    pub instance: MonsterInstance,
    /// The removal emptied the group and the type left play.
    pub type_cleared: bool,
}

/// An action card drawn for a monster type this round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawnAction {
    pub monster_type: MonsterTypeId,
    /// Registration order of the type.
    pub order: usize,
    /// Index into the type's action list.
    pub action: usize,
}

/// Every monster type in play and its live instances.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterRoster {
    groups: Vec<MonsterGroup>,
}

impl MonsterRoster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate from an encounter. Instances of a type are numbered from 1
    /// in encounter order.
    pub fn from_encounter(
        registry: &DefinitionRegistry,
        encounter: &[EncounterEntry],
        rng: &mut impl RandomSource,
    ) -> Result<Self, SetupError> {
        let mut roster = Self::new();

        for entry in encounter {
            let def = registry
                .monster_type(entry.monster_type)
                .ok_or(SetupError::UnknownMonsterType(entry.monster_type))?;
            let stats = def.stats(entry.tier);
            if stats.hp == 0 {
                return Err(SetupError::ZeroMonsterHp(def.name.clone()));
            }

            let group = match roster.position(entry.monster_type) {
                Some(idx) => &mut roster.groups[idx],
                None => {
                    if def.actions.is_empty() {
                        return Err(SetupError::NoMonsterActions(def.name.clone()));
                    }
                    let order = roster.groups.len();
                    roster.groups.push(MonsterGroup {
                        monster_type: entry.monster_type,
                        order,
                        cycle: MonsterActionCycle::new(def.actions.len(), rng),
                        instances: Vec::new(),
                    });
                    &mut roster.groups[order]
                }
            };

            let number = u8::try_from(group.instances.len() + 1)
                .map_err(|_| SetupError::TooManyInstances(def.name.clone()))?;
            group.instances.push(MonsterInstance {
                id: InstanceId::new(entry.monster_type, number),
                tier: entry.tier,
                hp: stats.hp,
                max_hp: stats.hp,
            });
        }

        Ok(roster)
    }

    fn position(&self, monster_type: MonsterTypeId) -> Option<usize> {
        self.groups.iter().position(|g| g.monster_type == monster_type)
    }

    /// No monsters left: the scenario is won.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Groups in registration order.
    #[must_use]
    pub fn groups(&self) -> &[MonsterGroup] {
        &self.groups
    }

    #[must_use]
    pub fn group(&self, monster_type: MonsterTypeId) -> Option<&MonsterGroup> {
        self.groups.iter().find(|g| g.monster_type == monster_type)
    }

    pub fn group_mut(&mut self, monster_type: MonsterTypeId) -> Option<&mut MonsterGroup> {
        self.groups.iter_mut().find(|g| g.monster_type == monster_type)
    }

    /// Types still in play, in registration order.
    pub fn active_types(&self) -> impl Iterator<Item = MonsterTypeId> + '_ {
        self.groups.iter().map(|g| g.monster_type)
    }

    #[must_use]
    pub fn contains_type(&self, monster_type: MonsterTypeId) -> bool {
        self.position(monster_type).is_some()
    }

    #[must_use]
    pub fn get(&self, id: InstanceId) -> Option<&MonsterInstance> {
        self.group(id.monster_type)?.instance(id)
    }

    pub fn get_mut(&mut self, id: InstanceId) -> Option<&mut MonsterInstance> {
        self.group_mut(id.monster_type)?
            .instances
            .iter_mut()
            .find(|m| m.id == id)
    }

    /// All live instances, group by group.
    pub fn instances(&self) -> impl Iterator<Item = &MonsterInstance> {
        self.groups.iter().flat_map(|g| g.instances.iter())
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.groups.iter().map(|g| g.instances.len()).sum()
    }

    /// Draw one action card for every type in play, in registration order.
    pub fn draw_actions(&mut self) -> Vec<DrawnAction> {
        self.groups
            .iter_mut()
            .filter_map(|g| {
                g.cycle.next_card().map(|action| DrawnAction {
                    monster_type: g.monster_type,
                    order: g.order,
                    action,
                })
            })
            .collect()
    }

    /// Remove an instance; drops its group if that was the last one.
    ///
    /// Returns `None` if the instance is not (or no longer) present.
    pub fn remove(&mut self, id: InstanceId) -> Option<Removal> {
        let group_idx = self.position(id.monster_type)?;
        let group = &mut self.groups[group_idx];
        let idx = group.instances.iter().position(|m| m.id == id)?;
        let instance = group.instances.remove(idx);

        let type_cleared = group.instances.is_empty();
        if type_cleared {
            self.groups.remove(group_idx);
        }

        Some(Removal {
            instance,
            type_cleared,
        })
    }
}
