//! Scenario round lifecycle.
//!
//! A `Scenario` is advanced one round at a time by an external driver. Each
//! round walks through these phases:
//!
//! ```text
//! AwaitingRound -> DrawingCards -> DrawingMonsterActions -> Scheduling
//!               -> ExecutingTurns -> EndOfRound -> AwaitingRound
//! ```
//!
//! `Won` (no monsters left) and `Lost` (whole party exhausted) are
//! absorbing: once reached, `advance_round` refuses to run.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::character::Character;
use super::combat::{AttackOutcome, Combatant, CombatResolver};
use super::event::{CombatEvent, ExhaustionCause, RoundReport};
use super::scheduler::{Turn, TurnActor, TurnScheduler};
use super::snapshot::{CharacterView, MonsterView, ScenarioSnapshot};
use super::targeting::TargetSelector;
use crate::cards::{DefinitionRegistry, ModifierDeck};
use crate::core::{
    CharacterId, MonsterTypeId, RandomSource, ScenarioConfig, ScenarioError, SetupError,
};
use crate::monsters::{MonsterInstance, MonsterRoster};
use crate::zones::{CardZone, DrawOutcome, HAND_SIZE, MAX_DECK_SIZE};

/// Where a scenario is in its round cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    #[default]
    AwaitingRound,
    DrawingCards,
    DrawingMonsterActions,
    Scheduling,
    ExecutingTurns,
    EndOfRound,
    Won,
    Lost,
}

impl RoundPhase {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, RoundPhase::Won | RoundPhase::Lost)
    }
}

/// How a scenario ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScenarioOutcome {
    /// Every monster was defeated.
    Won,
    /// Every character is exhausted.
    Lost,
}

/// A running scenario.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use skirmish::content::standard;
/// use skirmish::core::GameRng;
/// use skirmish::scenario::Scenario;
///
/// let registry = Arc::new(standard::registry().unwrap());
/// let config = standard::config(standard::default_roster());
/// let mut rng = GameRng::new(42);
///
/// let mut scenario = Scenario::setup(registry, &config, &mut rng).unwrap();
/// let report = scenario.advance_round(&mut rng).unwrap();
///
/// assert_eq!(report.round, 1);
/// assert_eq!(scenario.round(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Scenario {
    registry: Arc<DefinitionRegistry>,
    round: u32,
    phase: RoundPhase,
    characters: Vec<Character>,
    monsters: MonsterRoster,
    turns: SmallVec<[Turn; 8]>,
    monster_modifiers: ModifierDeck,
    character_damage: u32,
}

impl Scenario {
    /// Validate the configuration, create the party and place the
    /// encounter's monsters. All decks are shuffled here.
    pub fn setup(
        registry: Arc<DefinitionRegistry>,
        config: &ScenarioConfig,
        rng: &mut impl RandomSource,
    ) -> Result<Self, SetupError> {
        if config.roster.is_empty() {
            return Err(SetupError::EmptyRoster);
        }
        if config.roster.len() > usize::from(u8::MAX) {
            return Err(SetupError::RosterTooLarge(config.roster.len()));
        }
        if config.encounter.is_empty() {
            return Err(SetupError::EmptyEncounter);
        }
        if config.monster_modifiers.is_empty() {
            return Err(SetupError::EmptyModifierDeck("monsters".to_string()));
        }

        let mut characters = Vec::with_capacity(config.roster.len());
        for (id, entry) in CharacterId::all(config.roster.len()).zip(&config.roster) {
            let class = registry
                .class(entry.class)
                .ok_or(SetupError::UnknownClass(entry.class))?;
            if class.card_count() < HAND_SIZE {
                return Err(SetupError::TooFewAbilityCards {
                    class: class.name.clone(),
                    count: class.card_count(),
                });
            }
            if class.card_count() > MAX_DECK_SIZE {
                return Err(SetupError::TooManyAbilityCards {
                    class: class.name.clone(),
                    count: class.card_count(),
                });
            }
            if class.max_hp == 0 {
                return Err(SetupError::ZeroClassHp(class.name.clone()));
            }
            if class.modifiers.is_empty() {
                return Err(SetupError::EmptyModifierDeck(class.name.clone()));
            }

            let mut character = Character::new(id, entry.name.clone(), entry.class, class);
            character.modifiers.shuffle(rng);
            characters.push(character);
        }

        let monsters = MonsterRoster::from_encounter(&registry, &config.encounter, rng)?;

        let mut monster_modifiers = ModifierDeck::new(config.monster_modifiers.clone());
        monster_modifiers.shuffle(rng);

        tracing::info!(
            characters = characters.len(),
            monsters = monsters.live_count(),
            monster_types = monsters.groups().len(),
            "scenario set up"
        );

        Ok(Self {
            registry,
            round: 0,
            phase: RoundPhase::AwaitingRound,
            characters,
            monsters,
            turns: SmallVec::new(),
            monster_modifiers,
            character_damage: config.character_damage,
        })
    }

    /// Play one full round.
    ///
    /// Fails only if an earlier round already ended the scenario.
    pub fn advance_round(
        &mut self,
        rng: &mut impl RandomSource,
    ) -> Result<RoundReport, ScenarioError> {
        match self.phase {
            RoundPhase::Won => return Err(ScenarioError::AlreadyOver(ScenarioOutcome::Won)),
            RoundPhase::Lost => return Err(ScenarioError::AlreadyOver(ScenarioOutcome::Lost)),
            _ => {}
        }

        self.round += 1;
        self.turns.clear();
        let span = tracing::info_span!("round", round = self.round);
        let _guard = span.enter();

        let mut events = Vec::new();

        self.phase = RoundPhase::DrawingCards;
        self.draw_hands(rng, &mut events);

        if self.turns.is_empty() {
            tracing::info!("no character could draw a hand");
            let outcome = self.settle();
            return Ok(RoundReport {
                round: self.round,
                turns: Vec::new(),
                events,
                outcome,
            });
        }

        self.phase = RoundPhase::DrawingMonsterActions;
        self.draw_monster_actions(&mut events);

        self.phase = RoundPhase::Scheduling;
        TurnScheduler::order(&mut self.turns);

        self.phase = RoundPhase::ExecutingTurns;
        for i in 0..self.turns.len() {
            let turn = self.turns[i];
            match turn.actor {
                TurnActor::Character { character, .. } => {
                    self.character_turn(character, rng, &mut events);
                }
                TurnActor::Monsters { monster_type, .. } => {
                    self.monster_turn(monster_type, rng, &mut events);
                }
            }
        }

        self.phase = RoundPhase::EndOfRound;
        for character in &mut self.characters {
            character.pool.end_round();
        }

        let outcome = self.settle();
        Ok(RoundReport {
            round: self.round,
            turns: self.turns.to_vec(),
            events,
            outcome,
        })
    }

    /// Advance until the scenario ends, playing at most `max_rounds` more
    /// rounds. Returns the outcome if one was reached.
    pub fn play(
        &mut self,
        rng: &mut impl RandomSource,
        max_rounds: u32,
    ) -> Option<ScenarioOutcome> {
        for _ in 0..max_rounds {
            match self.advance_round(rng) {
                Ok(report) if report.outcome.is_none() => {}
                _ => break,
            }
        }
        self.outcome()
    }

    fn draw_hands(&mut self, rng: &mut impl RandomSource, events: &mut Vec<CombatEvent>) {
        for character in self.characters.iter_mut().filter(|c| !c.is_exhausted()) {
            let cards = self
                .registry
                .class(character.class)
                .map_or(&[][..], |class| class.cards.as_slice());

            let outcome = character.pool.draw_hand(cards, rng);
            if let Some(rest) = outcome.rest() {
                events.push(CombatEvent::ShortRest {
                    character: character.id,
                    rest: *rest,
                });
            }

            match outcome {
                DrawOutcome::Drawn { hand, .. } => {
                    tracing::debug!(
                        character = %character.name,
                        initiative = hand.initiative(),
                        tie_break = hand.tie_break_initiative(),
                        "hand drawn"
                    );
                    events.push(CombatEvent::HandDrawn {
                        character: character.id,
                        hand,
                    });
                    self.turns.push(Turn::character(character.id, &hand));
                }
                DrawOutcome::Exhausted { .. } => {
                    character.exhaust();
                    tracing::info!(
                        character = %character.name,
                        "character exhausted, out of cards"
                    );
                    events.push(CombatEvent::CharacterExhausted {
                        character: character.id,
                        cause: ExhaustionCause::NoCards,
                    });
                }
            }
        }
    }

    fn draw_monster_actions(&mut self, events: &mut Vec<CombatEvent>) {
        for drawn in self.monsters.draw_actions() {
            let initiative = self
                .registry
                .monster_type(drawn.monster_type)
                .and_then(|def| def.actions.get(drawn.action))
                .map_or(u8::MAX, |card| card.initiative);

            events.push(CombatEvent::MonsterActionDrawn {
                monster_type: drawn.monster_type,
                action: drawn.action,
                initiative,
            });
            self.turns.push(Turn::monsters(&drawn, initiative));
        }
    }

    /// Play both hand cards, top then bottom, each as one attack.
    fn character_turn(
        &mut self,
        id: CharacterId,
        rng: &mut impl RandomSource,
        events: &mut Vec<CombatEvent>,
    ) {
        let Some(character) = self.characters.get(id.index()) else {
            return;
        };
        if character.is_exhausted() {
            tracing::debug!(character = %character.name, "exhausted before acting");
            return;
        }
        let Some(hand) = character.pool.hand().copied() else {
            return;
        };

        for card in hand.cards() {
            events.push(CombatEvent::AbilityPlayed {
                character: id,
                card,
            });

            let Some(target) = TargetSelector::random_monster(&self.monsters, rng) else {
                events.push(CombatEvent::Pass {
                    actor: Combatant::Character(id),
                });
                continue;
            };

            let modifier = self.characters[id.index()].modifiers.draw(rng);
            if let Some(report) = CombatResolver::character_attack(
                id,
                self.character_damage,
                modifier,
                &mut self.monsters,
                target,
            ) {
                tracing::trace!(?report, "character attack");
                events.push(CombatEvent::Attack(report));
            }
        }
    }

    /// Every live instance of the type attacks once.
    fn monster_turn(
        &mut self,
        monster_type: MonsterTypeId,
        rng: &mut impl RandomSource,
        events: &mut Vec<CombatEvent>,
    ) {
        let registry = Arc::clone(&self.registry);
        let Some(definition) = registry.monster_type(monster_type) else {
            return;
        };
        let Some(group) = self.monsters.group(monster_type) else {
            tracing::debug!(monster = %definition.name, "cleared before acting");
            return;
        };
        let attackers: Vec<MonsterInstance> = group.instances().to_vec();

        for attacker in &attackers {
            let Some(target) = TargetSelector::random_character(&self.characters, rng) else {
                events.push(CombatEvent::Pass {
                    actor: Combatant::Monster(attacker.id),
                });
                continue;
            };

            let modifier = self.monster_modifiers.draw(rng);
            let report = CombatResolver::monster_attack(
                attacker,
                definition,
                modifier,
                &mut self.characters[target.index()],
            );
            tracing::trace!(?report, "monster attack");
            events.push(CombatEvent::Attack(report));

            if report.outcome == AttackOutcome::Exhausted {
                events.push(CombatEvent::CharacterExhausted {
                    character: target,
                    cause: ExhaustionCause::Wounds,
                });
            }
        }
    }

    /// Move to the terminal phase if the scenario just ended, otherwise back
    /// to awaiting the next round.
    fn settle(&mut self) -> Option<ScenarioOutcome> {
        let outcome = self.outcome();
        self.phase = match outcome {
            Some(ScenarioOutcome::Won) => RoundPhase::Won,
            Some(ScenarioOutcome::Lost) => RoundPhase::Lost,
            None => RoundPhase::AwaitingRound,
        };
        if let Some(outcome) = outcome {
            tracing::info!(?outcome, round = self.round, "scenario over");
        }
        outcome
    }

    /// No monsters remain.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.monsters.is_empty()
    }

    /// Every character is exhausted.
    #[must_use]
    pub fn are_all_characters_exhausted(&self) -> bool {
        self.characters.iter().all(Character::is_exhausted)
    }

    /// `Won` takes precedence if both conditions hold.
    #[must_use]
    pub fn outcome(&self) -> Option<ScenarioOutcome> {
        if self.is_finished() {
            Some(ScenarioOutcome::Won)
        } else if self.are_all_characters_exhausted() {
            Some(ScenarioOutcome::Lost)
        } else {
            None
        }
    }

    /// Rounds started so far.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Turns of the current (or last) round in execution order.
    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    #[must_use]
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    #[must_use]
    pub fn character(&self, id: CharacterId) -> Option<&Character> {
        self.characters.get(id.index())
    }

    /// Direct access for scripted setups.
    pub fn character_mut(&mut self, id: CharacterId) -> Option<&mut Character> {
        self.characters.get_mut(id.index())
    }

    #[must_use]
    pub fn monsters(&self) -> &MonsterRoster {
        &self.monsters
    }

    /// Direct access for scripted setups.
    pub fn monsters_mut(&mut self) -> &mut MonsterRoster {
        &mut self.monsters
    }

    #[must_use]
    pub fn monster_modifiers(&self) -> &ModifierDeck {
        &self.monster_modifiers
    }

    #[must_use]
    pub fn registry(&self) -> &DefinitionRegistry {
        &self.registry
    }

    /// Owned copy of the display-relevant state.
    #[must_use]
    pub fn snapshot(&self) -> ScenarioSnapshot {
        let characters = self
            .characters
            .iter()
            .map(|c| CharacterView {
                id: c.id,
                name: c.name.clone(),
                class: self
                    .registry
                    .class(c.class)
                    .map(|class| class.name.clone())
                    .unwrap_or_default(),
                hp: c.hp,
                max_hp: c.max_hp,
                exhausted: c.is_exhausted(),
                available_cards: c.pool.zone_size(CardZone::Available),
                discarded_cards: c.pool.zone_size(CardZone::Discarded),
                lost_cards: c.pool.zone_size(CardZone::Lost),
            })
            .collect();

        let monsters = self
            .monsters
            .instances()
            .map(|m| MonsterView {
                id: m.id,
                name: self
                    .registry
                    .monster_type(m.id.monster_type)
                    .map(|def| def.name.clone())
                    .unwrap_or_default(),
                elite: m.is_elite(),
                hp: m.hp,
                max_hp: m.max_hp,
            })
            .collect();

        ScenarioSnapshot {
            round: self.round,
            phase: self.phase,
            outcome: self.outcome(),
            characters,
            monsters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{
        AbilityCard, CharacterClass, ModifierCard, MonsterActionCard, MonsterTypeDefinition,
        TierStats,
    };
    use crate::core::{ClassId, EncounterEntry, GameRng};

    fn registry() -> (Arc<DefinitionRegistry>, ClassId, MonsterTypeId) {
        let mut registry = DefinitionRegistry::new();
        let class = registry
            .register_class(
                CharacterClass::new("Knight", 10)
                    .with_card(AbilityCard::new("Guard", 15))
                    .with_card(AbilityCard::new("Charge", 40))
                    .with_card(AbilityCard::new("Rally", 70)),
            )
            .unwrap();
        let rat = registry
            .register_monster_type(
                MonsterTypeDefinition::new("Rat", TierStats::new(3, 3, 1), TierStats::new(4, 3, 2))
                    .with_action(MonsterActionCard::new("Bite", 25))
                    .with_action(MonsterActionCard::new("Scurry", 60)),
            )
            .unwrap();
        (Arc::new(registry), class, rat)
    }

    #[test]
    fn test_setup() {
        let (registry, knight, rat) = registry();
        let config = ScenarioConfig::new()
            .with_character(knight, "Ser Ada")
            .with_monster(EncounterEntry::normal(rat))
            .with_monster(EncounterEntry::elite(rat));

        let scenario = Scenario::setup(registry, &config, &mut GameRng::new(1)).unwrap();

        assert_eq!(scenario.round(), 0);
        assert_eq!(scenario.phase(), RoundPhase::AwaitingRound);
        assert_eq!(scenario.characters().len(), 1);
        assert_eq!(scenario.monsters().live_count(), 2);
        assert_eq!(scenario.monster_modifiers().remaining(), 20);
        assert_eq!(scenario.outcome(), None);
    }

    #[test]
    fn test_setup_rejects_bad_config() {
        let (registry, knight, rat) = registry();
        let mut rng = GameRng::new(1);

        let no_roster = ScenarioConfig::new().with_monster(EncounterEntry::normal(rat));
        assert_eq!(
            Scenario::setup(Arc::clone(&registry), &no_roster, &mut rng).unwrap_err(),
            SetupError::EmptyRoster
        );

        let no_monsters = ScenarioConfig::new().with_character(knight, "a");
        assert_eq!(
            Scenario::setup(Arc::clone(&registry), &no_monsters, &mut rng).unwrap_err(),
            SetupError::EmptyEncounter
        );

        let unknown = ScenarioConfig::new()
            .with_character(ClassId::new(5), "a")
            .with_monster(EncounterEntry::normal(rat));
        assert_eq!(
            Scenario::setup(Arc::clone(&registry), &unknown, &mut rng).unwrap_err(),
            SetupError::UnknownClass(ClassId::new(5))
        );

        let no_modifiers = ScenarioConfig::new()
            .with_character(knight, "a")
            .with_monster(EncounterEntry::normal(rat))
            .with_monster_modifiers(Vec::new());
        assert!(matches!(
            Scenario::setup(registry, &no_modifiers, &mut rng).unwrap_err(),
            SetupError::EmptyModifierDeck(_)
        ));
    }

    #[test]
    fn test_setup_rejects_oversized_class() {
        let (registry, _, rat) = registry();
        let mut registry = (*registry).clone();
        let mut hoarder = CharacterClass::new("Hoarder", 5);
        hoarder.cards = vec![AbilityCard::new("Trinket", 50); MAX_DECK_SIZE + 1];
        let hoarder = registry.register_class(hoarder).unwrap();

        let config = ScenarioConfig::new()
            .with_character(hoarder, "Magpie")
            .with_monster(EncounterEntry::normal(rat));
        let err = Scenario::setup(Arc::new(registry), &config, &mut GameRng::new(1)).unwrap_err();

        assert_eq!(
            err,
            SetupError::TooManyAbilityCards {
                class: "Hoarder".to_string(),
                count: MAX_DECK_SIZE + 1,
            }
        );
    }

    #[test]
    fn test_round_phases() {
        let (registry, knight, rat) = registry();
        let config = ScenarioConfig::new()
            .with_character(knight, "Ser Ada")
            .with_monster(EncounterEntry::elite(rat))
            .with_monster_modifiers(vec![ModifierCard::Delta(0)]);
        let mut rng = GameRng::new(3);
        let mut scenario = Scenario::setup(registry, &config, &mut rng).unwrap();

        let report = scenario.advance_round(&mut rng).unwrap();

        assert_eq!(report.round, 1);
        assert_eq!(report.turns.len(), 2);
        assert_eq!(report.monster_actions_drawn(), 1);
        assert!(matches!(
            scenario.phase(),
            RoundPhase::AwaitingRound | RoundPhase::Won
        ));
        // The hand was discarded at end of round.
        let knight = scenario.character(CharacterId::new(0)).unwrap();
        assert!(knight.pool.hand().is_none());
        assert_eq!(knight.pool.zone_size(CardZone::Discarded), 2);
    }

    #[test]
    fn test_snapshot() {
        let (registry, knight, rat) = registry();
        let config = ScenarioConfig::new()
            .with_character(knight, "Ser Ada")
            .with_monster(EncounterEntry::normal(rat));
        let scenario = Scenario::setup(registry, &config, &mut GameRng::new(1)).unwrap();

        let snapshot = scenario.snapshot();
        assert_eq!(snapshot.round, 0);
        assert_eq!(snapshot.characters[0].class, "Knight");
        assert_eq!(snapshot.characters[0].available_cards, 3);
        assert_eq!(snapshot.monsters[0].name, "Rat");
        assert_eq!(snapshot.monsters[0].hp, 3);
        assert!(!snapshot.monsters[0].elite);
    }
}
