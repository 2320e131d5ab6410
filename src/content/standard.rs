//! The default party classes, monster types and encounter.
//!
//! IDs are assigned in the order definitions are listed in `registry()`,
//! so the constants below are only valid against that registry.
//!
//! ```
//! use skirmish::content::standard;
//!
//! let registry = standard::registry().unwrap();
//! assert_eq!(registry.find_class("Warden"), Some(standard::WARDEN));
//! assert_eq!(standard::config(standard::default_roster()).encounter.len(), 7);
//! ```

use crate::cards::{
    AbilityCard, CharacterClass, DefinitionRegistry, MonsterActionCard, MonsterTypeDefinition,
    TierStats,
};
use crate::core::{
    ClassId, EncounterEntry, MonsterTypeId, RegistryError, RosterEntry, ScenarioConfig,
};

pub const WARDEN: ClassId = ClassId::new(0);
pub const SPELLWRIGHT: ClassId = ClassId::new(1);
pub const TINKER: ClassId = ClassId::new(2);

pub const CUTTHROAT: MonsterTypeId = MonsterTypeId::new(0);
pub const MARKSMAN: MonsterTypeId = MonsterTypeId::new(1);
pub const BONE_HUSK: MonsterTypeId = MonsterTypeId::new(2);

fn class(name: &str, max_hp: u32, cards: &[(&str, u8)]) -> CharacterClass {
    cards
        .iter()
        .fold(CharacterClass::new(name, max_hp), |class, &(card, initiative)| {
            class.with_card(AbilityCard::new(card, initiative))
        })
}

fn monster(
    name: &str,
    normal: TierStats,
    elite: TierStats,
    actions: &[(&str, u8)],
) -> MonsterTypeDefinition {
    actions
        .iter()
        .fold(MonsterTypeDefinition::new(name, normal, elite), |def, &(action, initiative)| {
            def.with_action(MonsterActionCard::new(action, initiative))
        })
}

/// Character classes in ID order.
#[must_use]
pub fn classes() -> Vec<CharacterClass> {
    vec![
        class(
            "Warden",
            10,
            &[
                ("Shield Bash", 15),
                ("Hold the Line", 11),
                ("Iron Stance", 22),
                ("Overrun", 61),
                ("Brutal Swing", 72),
                ("Taunt", 10),
                ("Cleave", 48),
                ("Second Wind", 84),
                ("Press Forward", 35),
                ("Bulwark", 20),
            ],
        ),
        class(
            "Spellwright",
            6,
            &[
                ("Frost Lance", 8),
                ("Arc Flash", 21),
                ("Ember Swarm", 29),
                ("Mirror Ward", 70),
                ("Chain Spark", 42),
                ("Glyph of Binding", 55),
                ("Rift Step", 17),
                ("Starfall", 77),
            ],
        ),
        class(
            "Tinker",
            8,
            &[
                ("Proximity Mine", 62),
                ("Harmless Contraption", 74),
                ("Flamethrower", 47),
                ("Stun Shot", 20),
                ("Reinvigorating Elixir", 37),
                ("Ink Bomb", 74),
                ("Net Shooter", 20),
                ("Enhancement Field", 61),
                ("Restorative Mist", 89),
                ("Hook Gun", 72),
                ("Potent Potables", 46),
                ("Toxic Bolt", 18),
            ],
        ),
    ]
}

/// Monster types in ID order.
#[must_use]
pub fn monster_types() -> Vec<MonsterTypeDefinition> {
    vec![
        monster(
            "Cutthroat",
            TierStats::new(5, 3, 2),
            TierStats::new(9, 3, 3),
            &[
                ("Lunge", 32),
                ("Flank", 44),
                ("Cheap Shot", 16),
                ("Gut Strike", 58),
                ("Vanish", 71),
                ("Twin Blades", 38),
                ("Hamstring", 24),
                ("Regroup", 80),
            ],
        ),
        monster(
            "Marksman",
            TierStats::new(4, 2, 2),
            TierStats::new(6, 2, 3),
            &[
                ("Aimed Shot", 31),
                ("Volley", 44),
                ("Fall Back", 14),
                ("Pinning Arrow", 56),
                ("Steady Aim", 68),
                ("Quick Draw", 29),
                ("Barrage", 77),
                ("Snipe", 40),
            ],
        ),
        monster(
            "Bone Husk",
            TierStats::new(6, 1, 2),
            TierStats::new(10, 1, 3),
            &[
                ("Shamble", 64),
                ("Rattle", 45),
                ("Grasp", 81),
                ("Crushing Blow", 73),
                ("Shield Wall", 50),
                ("Lurch", 69),
                ("Mindless Swing", 59),
                ("Reassemble", 90),
            ],
        ),
    ]
}

/// Registry holding all standard definitions.
pub fn registry() -> Result<DefinitionRegistry, RegistryError> {
    DefinitionRegistry::from_definitions(classes(), monster_types())
}

/// The fixed encounter: seven monsters over three types.
#[must_use]
pub fn encounter() -> Vec<EncounterEntry> {
    vec![
        EncounterEntry::normal(CUTTHROAT),
        EncounterEntry::normal(CUTTHROAT),
        EncounterEntry::elite(CUTTHROAT),
        EncounterEntry::normal(MARKSMAN),
        EncounterEntry::normal(MARKSMAN),
        EncounterEntry::normal(BONE_HUSK),
        EncounterEntry::elite(BONE_HUSK),
    ]
}

/// One character of each class.
#[must_use]
pub fn default_roster() -> Vec<RosterEntry> {
    vec![
        RosterEntry::new(WARDEN, "Brakka"),
        RosterEntry::new(SPELLWRIGHT, "Ilse"),
        RosterEntry::new(TINKER, "Quill"),
    ]
}

/// Scenario configuration for `roster` against the fixed encounter.
#[must_use]
pub fn config(roster: Vec<RosterEntry>) -> ScenarioConfig {
    ScenarioConfig::new()
        .with_roster(roster)
        .with_encounter(encounter())
}
