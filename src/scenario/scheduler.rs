//! Round turn ordering.
//!
//! Every round each character that drew a hand and each monster type in
//! play gets one `Turn`. Turns run in ascending initiative. Ties are broken
//! as follows, giving a total order:
//!
//! 1. characters act before monsters
//! 2. between characters, the lower unselected (tie-break) initiative goes
//!    first, then roster order
//! 3. between monster types, registration order

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::core::{CharacterId, MonsterTypeId};
use crate::monsters::DrawnAction;
use crate::zones::Hand;

/// Who a turn belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnActor {
    Character {
        character: CharacterId,
        /// Initiative of the unselected hand card.
        tie_break: u8,
    },
    Monsters {
        monster_type: MonsterTypeId,
        /// Registration order of the type.
        order: usize,
        /// Action card drawn this round.
        action: usize,
    },
}

/// One scheduled turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub initiative: u8,
    pub actor: TurnActor,
}

impl Turn {
    /// A character turn using the hand's selected initiative.
    #[must_use]
    pub fn character(character: CharacterId, hand: &Hand) -> Self {
        Self {
            initiative: hand.initiative(),
            actor: TurnActor::Character {
                character,
                tie_break: hand.tie_break_initiative(),
            },
        }
    }

    /// A monster type turn for the action drawn this round.
    #[must_use]
    pub fn monsters(drawn: &DrawnAction, initiative: u8) -> Self {
        Self {
            initiative,
            actor: TurnActor::Monsters {
                monster_type: drawn.monster_type,
                order: drawn.order,
                action: drawn.action,
            },
        }
    }

    #[must_use]
    pub fn is_character(&self) -> bool {
        matches!(self.actor, TurnActor::Character { .. })
    }
}

/// Orders a round's turns.
pub struct TurnScheduler;

impl TurnScheduler {
    /// Total order over turns.
    #[must_use]
    pub fn compare(a: &Turn, b: &Turn) -> Ordering {
        a.initiative
            .cmp(&b.initiative)
            .then_with(|| match (&a.actor, &b.actor) {
                (TurnActor::Character { .. }, TurnActor::Monsters { .. }) => Ordering::Less,
                (TurnActor::Monsters { .. }, TurnActor::Character { .. }) => Ordering::Greater,
                (
                    TurnActor::Character {
                        character: ca,
                        tie_break: ta,
                    },
                    TurnActor::Character {
                        character: cb,
                        tie_break: tb,
                    },
                ) => ta.cmp(tb).then_with(|| ca.cmp(cb)),
                (TurnActor::Monsters { order: oa, .. }, TurnActor::Monsters { order: ob, .. }) => {
                    oa.cmp(ob)
                }
            })
    }

    /// Sort turns into execution order.
    pub fn order(turns: &mut [Turn]) {
        turns.sort_by(Self::compare);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn character(id: u8, initiative: u8, tie_break: u8) -> Turn {
        Turn {
            initiative,
            actor: TurnActor::Character {
                character: CharacterId::new(id),
                tie_break,
            },
        }
    }

    fn monsters(order: usize, initiative: u8) -> Turn {
        Turn {
            initiative,
            actor: TurnActor::Monsters {
                monster_type: MonsterTypeId::new(order as u16 + 10),
                order,
                action: 0,
            },
        }
    }

    #[test]
    fn test_ascending_initiative() {
        let mut turns = vec![monsters(0, 50), character(0, 12, 90), character(1, 70, 5)];
        TurnScheduler::order(&mut turns);

        let initiatives: Vec<_> = turns.iter().map(|t| t.initiative).collect();
        assert_eq!(initiatives, vec![12, 50, 70]);
    }

    #[test]
    fn test_character_before_monster_on_tie() {
        let mut turns = vec![monsters(0, 30), character(0, 30, 99)];
        TurnScheduler::order(&mut turns);

        assert!(turns[0].is_character());
        assert!(!turns[1].is_character());
    }

    #[test]
    fn test_characters_tie_break_on_unselected_initiative() {
        let mut turns = vec![character(0, 40, 77), character(1, 40, 12)];
        TurnScheduler::order(&mut turns);

        assert_eq!(turns[0], character(1, 40, 12));
        assert_eq!(turns[1], character(0, 40, 77));
    }

    #[test]
    fn test_characters_full_tie_uses_roster_order() {
        let mut turns = vec![character(2, 40, 12), character(0, 40, 12)];
        TurnScheduler::order(&mut turns);

        assert_eq!(turns[0], character(0, 40, 12));
    }

    #[test]
    fn test_monster_tie_uses_registration_order() {
        let mut turns = vec![monsters(2, 45), monsters(0, 45), monsters(1, 45)];
        TurnScheduler::order(&mut turns);

        let orders: Vec<_> = turns
            .iter()
            .map(|t| match t.actor {
                TurnActor::Monsters { order, .. } => order,
                TurnActor::Character { .. } => usize::MAX,
            })
            .collect();
        assert_eq!(orders, vec![0, 1, 2]);
    }

    #[test]
    fn test_compare_is_antisymmetric() {
        let turns = [
            character(0, 10, 20),
            character(1, 10, 20),
            character(2, 10, 5),
            monsters(0, 10),
            monsters(1, 10),
        ];
        for a in &turns {
            for b in &turns {
                assert_eq!(
                    TurnScheduler::compare(a, b),
                    TurnScheduler::compare(b, a).reverse()
                );
            }
        }
    }
}
