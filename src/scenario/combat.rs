//! Attack resolution.
//!
//! An attack combines a base damage value with one drawn modifier:
//! - `Miss`: nothing happens, not even a kill or exhaustion check
//! - `Double`: base x 2
//! - `Delta(d)`: base + d, which may be negative
//!
//! Damage is clamped only when applied, so hit points never go below 0.
//! A monster at 0 hp leaves the roster immediately; a character at 0 hp is
//! exhausted but stays in the roster.

use serde::{Deserialize, Serialize};

use super::character::Character;
use crate::cards::{ModifierCard, MonsterTypeDefinition};
use crate::core::{CharacterId, InstanceId};
use crate::monsters::{MonsterInstance, MonsterRoster};

/// Either side of an attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Combatant {
    Character(CharacterId),
    Monster(InstanceId),
}

/// What an attack did to its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackOutcome {
    /// Miss drawn; target untouched.
    Missed,
    /// Damage applied (possibly 0), target still standing.
    Hit,
    /// Monster removed. `type_cleared` if it was the last of its type.
    Killed { type_cleared: bool },
    /// Character dropped to 0 hp.
    Exhausted,
}

/// A resolved attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackReport {
    pub attacker: Combatant,
    pub target: Combatant,
    pub modifier: ModifierCard,
    pub base_damage: u32,
    /// Hit points actually removed.
    pub damage_dealt: u32,
    pub target_hp: u32,
    pub outcome: AttackOutcome,
}

/// Resolves attacks and their kill/exhaustion consequences.
pub struct CombatResolver;

impl CombatResolver {
    /// Final damage before clamping, or `None` on a miss.
    #[must_use]
    pub fn final_damage(base: u32, modifier: ModifierCard) -> Option<i64> {
        match modifier {
            ModifierCard::Miss => None,
            ModifierCard::Double => Some(i64::from(base) * 2),
            ModifierCard::Delta(d) => Some(i64::from(base) + i64::from(d)),
        }
    }

    /// Subtract damage from `hp`, flooring at 0. Returns hp removed.
    pub fn apply(hp: &mut u32, damage: i64) -> u32 {
        let dealt = damage.clamp(0, i64::from(*hp)) as u32;
        *hp -= dealt;
        dealt
    }

    /// A character ability hitting a monster.
    ///
    /// Returns `None` if the target is no longer on the board.
    pub fn character_attack(
        attacker: CharacterId,
        base_damage: u32,
        modifier: ModifierCard,
        roster: &mut MonsterRoster,
        target: InstanceId,
    ) -> Option<AttackReport> {
        let instance = roster.get_mut(target)?;

        let mut report = AttackReport {
            attacker: Combatant::Character(attacker),
            target: Combatant::Monster(target),
            modifier,
            base_damage,
            damage_dealt: 0,
            target_hp: instance.hp,
            outcome: AttackOutcome::Missed,
        };

        let Some(damage) = Self::final_damage(base_damage, modifier) else {
            return Some(report);
        };

        report.damage_dealt = Self::apply(&mut instance.hp, damage);
        report.target_hp = instance.hp;
        report.outcome = AttackOutcome::Hit;

        if instance.hp == 0 {
            if let Some(removal) = roster.remove(target) {
                tracing::info!(
                    monster = %target,
                    type_cleared = removal.type_cleared,
                    "monster killed"
                );
                report.outcome = AttackOutcome::Killed {
                    type_cleared: removal.type_cleared,
                };
            }
        }

        Some(report)
    }

    /// A monster instance hitting a character. Base damage is the
    /// instance's tier damage stat.
    pub fn monster_attack(
        attacker: &MonsterInstance,
        definition: &MonsterTypeDefinition,
        modifier: ModifierCard,
        target: &mut Character,
    ) -> AttackReport {
        let base_damage = definition.stats(attacker.tier).damage;

        let mut report = AttackReport {
            attacker: Combatant::Monster(attacker.id),
            target: Combatant::Character(target.id),
            modifier,
            base_damage,
            damage_dealt: 0,
            target_hp: target.hp,
            outcome: AttackOutcome::Missed,
        };

        let Some(damage) = Self::final_damage(base_damage, modifier) else {
            return report;
        };

        report.damage_dealt = Self::apply(&mut target.hp, damage);
        report.target_hp = target.hp;
        report.outcome = AttackOutcome::Hit;

        if target.hp == 0 && !target.is_exhausted() {
            target.exhaust();
            tracing::info!(character = %target.name, "character exhausted by damage");
            report.outcome = AttackOutcome::Exhausted;
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{
        AbilityCard, CharacterClass, DefinitionRegistry, MonsterActionCard, MonsterTier, TierStats,
    };
    use crate::core::{ClassId, EncounterEntry, GameRng, MonsterTypeId};

    fn bandit() -> MonsterTypeDefinition {
        MonsterTypeDefinition::new("Bandit", TierStats::new(2, 2, 2), TierStats::new(6, 2, 3))
            .with_action(MonsterActionCard::new("Swing", 32))
    }

    fn roster(entries: &[EncounterEntry]) -> (MonsterRoster, MonsterTypeId) {
        let mut registry = DefinitionRegistry::new();
        let id = registry.register_monster_type(bandit()).unwrap();
        let entries: Vec<_> = entries
            .iter()
            .map(|e| EncounterEntry { monster_type: id, tier: e.tier })
            .collect();
        let roster =
            MonsterRoster::from_encounter(&registry, &entries, &mut GameRng::new(1)).unwrap();
        (roster, id)
    }

    fn hero(hp: u32) -> Character {
        let class = CharacterClass::new("Hero", hp)
            .with_card(AbilityCard::new("a", 10))
            .with_card(AbilityCard::new("b", 20));
        Character::new(CharacterId::new(0), "Hero", ClassId::new(0), &class)
    }

    fn instance(tier: MonsterTier) -> MonsterInstance {
        MonsterInstance {
            id: InstanceId::new(MonsterTypeId::new(0), 1),
            tier,
            hp: 6,
            max_hp: 6,
        }
    }

    #[test]
    fn test_final_damage() {
        assert_eq!(CombatResolver::final_damage(2, ModifierCard::Miss), None);
        assert_eq!(CombatResolver::final_damage(2, ModifierCard::Double), Some(4));
        assert_eq!(CombatResolver::final_damage(2, ModifierCard::Delta(-2)), Some(0));
        assert_eq!(CombatResolver::final_damage(1, ModifierCard::Delta(-2)), Some(-1));
        assert_eq!(
            CombatResolver::final_damage(u32::MAX, ModifierCard::Double),
            Some(2 * i64::from(u32::MAX))
        );
    }

    #[test]
    fn test_apply_clamps() {
        let mut hp = 3;
        assert_eq!(CombatResolver::apply(&mut hp, -1), 0);
        assert_eq!(hp, 3);
        assert_eq!(CombatResolver::apply(&mut hp, 10), 3);
        assert_eq!(hp, 0);
    }

    #[test]
    fn test_kill_removes_type() {
        let (mut roster, id) = roster(&[EncounterEntry::normal(MonsterTypeId::new(0))]);
        let target = InstanceId::new(id, 1);

        let report = CombatResolver::character_attack(
            CharacterId::new(0),
            2,
            ModifierCard::Delta(0),
            &mut roster,
            target,
        )
        .unwrap();

        assert_eq!(report.damage_dealt, 2);
        assert_eq!(report.target_hp, 0);
        assert_eq!(report.outcome, AttackOutcome::Killed { type_cleared: true });
        assert!(roster.is_empty());
        assert!(!roster.contains_type(id));

        // The target is gone; a second attack finds nothing.
        assert!(CombatResolver::character_attack(
            CharacterId::new(0),
            2,
            ModifierCard::Delta(0),
            &mut roster,
            target,
        )
        .is_none());
    }

    #[test]
    fn test_kill_keeps_type_with_survivors() {
        let (mut roster, id) = roster(&[
            EncounterEntry::normal(MonsterTypeId::new(0)),
            EncounterEntry::elite(MonsterTypeId::new(0)),
        ]);

        let report = CombatResolver::character_attack(
            CharacterId::new(0),
            2,
            ModifierCard::Double,
            &mut roster,
            InstanceId::new(id, 1),
        )
        .unwrap();

        assert_eq!(report.outcome, AttackOutcome::Killed { type_cleared: false });
        assert!(roster.contains_type(id));
        assert_eq!(roster.live_count(), 1);
    }

    #[test]
    fn test_miss_leaves_monster_untouched() {
        let (mut roster, id) = roster(&[EncounterEntry::normal(MonsterTypeId::new(0))]);
        let target = InstanceId::new(id, 1);

        let report = CombatResolver::character_attack(
            CharacterId::new(0),
            2,
            ModifierCard::Miss,
            &mut roster,
            target,
        )
        .unwrap();

        assert_eq!(report.outcome, AttackOutcome::Missed);
        assert_eq!(report.damage_dealt, 0);
        assert_eq!(roster.get(target).unwrap().hp, 2);
    }

    #[test]
    fn test_negative_damage_is_a_zero_hit() {
        let (mut roster, id) = roster(&[EncounterEntry::normal(MonsterTypeId::new(0))]);

        let report = CombatResolver::character_attack(
            CharacterId::new(0),
            1,
            ModifierCard::Delta(-2),
            &mut roster,
            InstanceId::new(id, 1),
        )
        .unwrap();

        assert_eq!(report.outcome, AttackOutcome::Hit);
        assert_eq!(report.damage_dealt, 0);
        assert_eq!(report.target_hp, 2);
    }

    #[test]
    fn test_monster_attack_uses_tier_damage() {
        let def = bandit();
        let mut target = hero(10);

        let normal = CombatResolver::monster_attack(
            &instance(MonsterTier::Normal),
            &def,
            ModifierCard::Delta(1),
            &mut target,
        );
        assert_eq!(normal.base_damage, 2);
        assert_eq!(normal.damage_dealt, 3);

        let elite = CombatResolver::monster_attack(
            &instance(MonsterTier::Elite),
            &def,
            ModifierCard::Double,
            &mut target,
        );
        assert_eq!(elite.base_damage, 3);
        assert_eq!(elite.damage_dealt, 6);
        assert_eq!(target.hp, 1);
    }

    #[test]
    fn test_monster_attack_exhausts() {
        let def = bandit();
        let mut target = hero(2);

        let report = CombatResolver::monster_attack(
            &instance(MonsterTier::Elite),
            &def,
            ModifierCard::Delta(0),
            &mut target,
        );

        assert_eq!(report.outcome, AttackOutcome::Exhausted);
        assert_eq!(target.hp, 0);
        assert!(target.is_exhausted());
    }

    #[test]
    fn test_monster_miss_skips_exhaustion_check() {
        let def = bandit();
        let mut target = hero(2);
        target.hp = 0;

        let report = CombatResolver::monster_attack(
            &instance(MonsterTier::Normal),
            &def,
            ModifierCard::Miss,
            &mut target,
        );

        assert_eq!(report.outcome, AttackOutcome::Missed);
        assert!(!target.is_exhausted());
    }
}
