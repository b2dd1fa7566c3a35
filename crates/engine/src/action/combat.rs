//! Combat resolution: one attack or escape attempt per call.
//!
//! A character enters battle only through movement (ambush or boss) and
//! leaves through victory or a successful escape. A failed escape keeps
//! the battle alive, and so does dying: zero health never auto-ends a
//! battle or auto-respawns — respawn is its own explicit action.

use crate::action::progression::apply_level_ups;
use crate::action::CombatAction;
use crate::config::GameConfig;
use crate::error::EngineError;
use crate::rng::RandomSource;
use crate::state::{CharacterState, ItemName};

/// Outcome of one combat action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case", tag = "result"))]
pub enum CombatOutcome {
    /// The escape attempt succeeded; the battle is over.
    Escaped,
    /// The escape attempt failed and the monster got a free strike; the
    /// battle continues.
    FailedEscape { damage_taken: u32, health: u32 },
    /// The monster fell. Experience (and perhaps loot) awarded, level-ups
    /// applied.
    Victory {
        player_attack: u32,
        gained_exp: u32,
        loot: Option<ItemName>,
        health: u32,
        level: u32,
        exp: u32,
    },
    /// Both sides struck; the battle continues.
    Exchange {
        player_attack: u32,
        monster_attack: u32,
        monster_hp: i32,
        player_health: u32,
    },
}

/// Resolve one combat action against the current monster.
///
/// Fails with [`EngineError::InvalidState`] outside a battle. Player
/// damage is a d4 plus a flat `(level - 1)` bonus, plus the rusty-sword
/// bonus while that weapon is equipped. Monster strikes roll uniformly in
/// `[1, attack]` and player health floors at zero.
pub fn resolve_combat(
    state: &mut CharacterState,
    action: CombatAction,
    config: &GameConfig,
    rng: &mut impl RandomSource,
) -> Result<CombatOutcome, EngineError> {
    let Some(mut monster) = state.current_monster.take() else {
        return Err(EngineError::InvalidState("no monster to fight"));
    };

    match action {
        CombatAction::Run => {
            if rng.next_f64() < config.escape_chance {
                // Battle already cleared by the take() above.
                return Ok(CombatOutcome::Escaped);
            }
            let damage_taken = rng.range_u32(1, monster.attack);
            state.take_damage(damage_taken);
            state.current_monster = Some(monster);
            Ok(CombatOutcome::FailedEscape {
                damage_taken,
                health: state.health,
            })
        }
        CombatAction::Attack => {
            let (min, max) = GameConfig::PLAYER_DAMAGE_RANGE;
            let mut player_attack = rng.range_u32(min, max) + (state.level - 1);
            if state.equipped_item == Some(ItemName::RustySword) {
                player_attack += GameConfig::RUSTY_SWORD_BONUS;
            }
            monster.hp -= player_attack as i32;

            if monster.is_defeated() {
                let gained_exp = monster.exp_reward;
                state.exp += gained_exp;

                let loot = if rng.next_f64() < config.loot_chance {
                    let table = ItemName::treasure_table();
                    let item = table[rng.index(table.len())];
                    state.inventory.add(item, 1);
                    Some(item)
                } else {
                    None
                };

                apply_level_ups(state);
                return Ok(CombatOutcome::Victory {
                    player_attack,
                    gained_exp,
                    loot,
                    health: state.health,
                    level: state.level,
                    exp: state.exp,
                });
            }

            let monster_attack = rng.range_u32(1, monster.attack);
            state.take_damage(monster_attack);
            let monster_hp = monster.hp;
            state.current_monster = Some(monster);
            Ok(CombatOutcome::Exchange {
                player_attack,
                monster_attack,
                monster_hp,
                player_health: state.health,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{PcgRandom, ScriptedSource};
    use crate::state::Monster;

    fn battling_character(monster: Monster) -> CharacterState {
        let mut rng = PcgRandom::new(55);
        let mut state =
            CharacterState::create("cb-test", Some("Fighter".into()), Some(5), "t", &mut rng);
        state.current_monster = Some(monster);
        state
    }

    #[test]
    fn combat_action_without_battle_is_invalid_state() {
        let mut rng = PcgRandom::new(56);
        let mut state = CharacterState::create("cb-idle", None, Some(4), "t", &mut rng);
        let err = resolve_combat(
            &mut state,
            CombatAction::Attack,
            &GameConfig::new(),
            &mut ScriptedSource::new([]),
        )
        .unwrap_err();
        assert_eq!(err, EngineError::InvalidState("no monster to fight"));
    }

    #[test]
    fn successful_escape_clears_the_battle() {
        let mut state = battling_character(Monster::ambush_goblin(8));
        let mut rng = ScriptedSource::new([ScriptedSource::fraction(0.3)]);

        let outcome =
            resolve_combat(&mut state, CombatAction::Run, &GameConfig::new(), &mut rng).unwrap();

        assert_eq!(outcome, CombatOutcome::Escaped);
        assert!(!state.in_battle());
    }

    #[test]
    fn failed_escape_costs_a_strike_and_keeps_the_battle() {
        let monster = Monster::ambush_goblin(8);
        let mut state = battling_character(monster.clone());
        let mut rng = ScriptedSource::new([ScriptedSource::fraction(0.9), 1]);

        let outcome =
            resolve_combat(&mut state, CombatAction::Run, &GameConfig::new(), &mut rng).unwrap();

        let CombatOutcome::FailedEscape {
            damage_taken,
            health,
        } = outcome
        else {
            panic!("expected failed escape, got {outcome:?}");
        };
        assert!((1..=monster.attack).contains(&damage_taken));
        assert_eq!(health, 20 - damage_taken);
        assert_eq!(state.current_monster, Some(monster));
    }

    #[test]
    fn attack_exchange_damages_both_sides() {
        let mut state = battling_character(Monster::ambush_goblin(10));
        // Player die rolls 1 + 3 = 4 damage; goblin die rolls 1 + 2 = 3.
        let mut rng = ScriptedSource::new([3, 2]);

        let outcome =
            resolve_combat(&mut state, CombatAction::Attack, &GameConfig::new(), &mut rng)
                .unwrap();

        assert_eq!(
            outcome,
            CombatOutcome::Exchange {
                player_attack: 4,
                monster_attack: 3,
                monster_hp: 6,
                player_health: 17,
            }
        );
        assert!(state.in_battle());
        assert_eq!(state.current_monster.as_ref().unwrap().hp, 6);
    }

    #[test]
    fn level_and_sword_bonuses_stack_on_player_damage() {
        let mut state = battling_character(Monster::new("Orc", 50, 4, 14));
        state.level = 3;
        state.equipped_item = Some(ItemName::RustySword);
        // d4 rolls its minimum: 1 + (3 - 1) + 2 = 5.
        let mut rng = ScriptedSource::new([0, 0]);

        let outcome =
            resolve_combat(&mut state, CombatAction::Attack, &GameConfig::new(), &mut rng)
                .unwrap();

        let CombatOutcome::Exchange { player_attack, .. } = outcome else {
            panic!("expected exchange, got {outcome:?}");
        };
        assert_eq!(player_attack, 5);
    }

    #[test]
    fn victory_awards_exp_and_sometimes_loot() {
        let mut state = battling_character(Monster::new("Skeleton", 1, 3, 8));
        // Kill roll, then loot roll under 0.5, then loot index 2.
        let mut rng = ScriptedSource::new([0, ScriptedSource::fraction(0.2), 2]);

        let outcome =
            resolve_combat(&mut state, CombatAction::Attack, &GameConfig::new(), &mut rng)
                .unwrap();

        let CombatOutcome::Victory {
            gained_exp, loot, ..
        } = outcome
        else {
            panic!("expected victory, got {outcome:?}");
        };
        assert_eq!(gained_exp, 8);
        assert_eq!(loot, Some(ItemName::RustySword));
        assert!(state.inventory.owns(ItemName::RustySword));
        assert!(!state.in_battle());
        assert_eq!(state.exp, 8);
    }

    #[test]
    fn victory_without_loot_leaves_inventory_alone() {
        let mut state = battling_character(Monster::new("Skeleton", 1, 3, 8));
        let mut rng = ScriptedSource::new([0, ScriptedSource::fraction(0.9)]);

        let outcome =
            resolve_combat(&mut state, CombatAction::Attack, &GameConfig::new(), &mut rng)
                .unwrap();

        let CombatOutcome::Victory { loot, .. } = outcome else {
            panic!("expected victory, got {outcome:?}");
        };
        assert_eq!(loot, None);
        assert!(state.inventory.is_empty());
    }

    #[test]
    fn ambush_monsters_award_the_default_reward() {
        let mut state = battling_character(Monster::ambush_goblin(1));
        let mut rng = ScriptedSource::new([0, ScriptedSource::fraction(0.9)]);

        let outcome =
            resolve_combat(&mut state, CombatAction::Attack, &GameConfig::new(), &mut rng)
                .unwrap();

        let CombatOutcome::Victory { gained_exp, .. } = outcome else {
            panic!("expected victory, got {outcome:?}");
        };
        assert_eq!(gained_exp, GameConfig::DEFAULT_EXP_REWARD);
    }

    #[test]
    fn victory_applies_pending_level_ups() {
        // Level 2 with 39 exp gains 5: one level-up, 4 exp carried over,
        // full heal at the higher maximum.
        let mut state = battling_character(Monster::new("Goblin", 1, 2, 5));
        state.level = 2;
        state.exp = 39;
        state.max_health = 25;
        state.health = 9;
        let mut rng = ScriptedSource::new([0, ScriptedSource::fraction(0.9)]);

        let outcome =
            resolve_combat(&mut state, CombatAction::Attack, &GameConfig::new(), &mut rng)
                .unwrap();

        assert_eq!(state.level, 3);
        assert_eq!(state.exp, 4);
        assert_eq!(state.max_health, 30);
        assert_eq!(state.health, 30);
        let CombatOutcome::Victory {
            health, level, exp, ..
        } = outcome
        else {
            panic!("expected victory, got {outcome:?}");
        };
        assert_eq!((health, level, exp), (30, 3, 4));
    }

    #[test]
    fn retaliation_floors_health_at_zero_and_battle_persists() {
        let mut state = battling_character(Monster::new("Orc", 100, 4, 14));
        state.health = 1;
        let mut rng = ScriptedSource::new([0, 3]);

        let outcome =
            resolve_combat(&mut state, CombatAction::Attack, &GameConfig::new(), &mut rng)
                .unwrap();

        let CombatOutcome::Exchange { player_health, .. } = outcome else {
            panic!("expected exchange, got {outcome:?}");
        };
        assert_eq!(player_health, 0);
        assert!(state.is_dead());
        assert!(state.in_battle(), "death must not auto-end the battle");
    }

    #[test]
    fn escape_rate_converges_to_the_configured_chance() {
        let config = GameConfig::new();
        let mut rng = PcgRandom::new(2024);
        let mut escapes = 0u32;
        let trials = 10_000;

        for _ in 0..trials {
            let mut state = battling_character(Monster::ambush_goblin(8));
            match resolve_combat(&mut state, CombatAction::Run, &config, &mut rng).unwrap() {
                CombatOutcome::Escaped => escapes += 1,
                CombatOutcome::FailedEscape { .. } => {}
                other => panic!("unexpected outcome {other:?}"),
            }
        }

        let rate = f64::from(escapes) / f64::from(trials);
        assert!(
            (rate - config.escape_chance).abs() < 0.02,
            "escape rate {rate} strayed from {}",
            config.escape_chance
        );
    }

    #[test]
    fn scripted_combat_is_exactly_reproducible() {
        let script = [5, 2];
        let mut first = battling_character(Monster::ambush_goblin(9));
        let mut second = battling_character(Monster::ambush_goblin(9));

        let a = resolve_combat(
            &mut first,
            CombatAction::Attack,
            &GameConfig::new(),
            &mut ScriptedSource::new(script),
        )
        .unwrap();
        let b = resolve_combat(
            &mut second,
            CombatAction::Attack,
            &GameConfig::new(),
            &mut ScriptedSource::new(script),
        )
        .unwrap();

        assert_eq!(a, b);
        assert_eq!(first, second);
    }
}
