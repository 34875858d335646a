//! Single-attack resolution: randomized damage, armor absorption and class
//! bonus strikes.

use rand_chacha::rand_core::Rng;
use serde::{Deserialize, Serialize};

use crate::content::{CharacterClass, EnemyKind, Stats, get_class_stats, roll_enemy_stats};
use crate::mapgen::seed::{chance, random_i32, random_unit};

const SPELL_COST: i32 = 5;
const SPELL_CHANCE: f64 = 0.3;
const CRITICAL_CHANCE: f64 = 0.2;
const MAX_ARMOR_REDUCTION: f64 = 0.8;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub name: String,
    pub class: Option<CharacterClass>,
    pub hp: i32,
    pub sp: i32,
    pub stats: Stats,
}

impl Combatant {
    pub fn player(name: impl Into<String>, class: CharacterClass) -> Self {
        let stats = get_class_stats(class);
        Self { name: name.into(), class: Some(class), hp: stats.max_hp, sp: stats.max_sp, stats }
    }

    pub fn enemy<R: Rng + ?Sized>(kind: EnemyKind, rng: &mut R) -> Self {
        let stats = roll_enemy_stats(kind, rng);
        Self {
            name: kind.name().to_string(),
            class: None,
            hp: stats.max_hp,
            sp: stats.max_sp,
            stats,
        }
    }

    pub fn is_defeated(&self) -> bool {
        self.hp <= 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BonusStrike {
    SpellBolt(i32),
    Critical(i32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackOutcome {
    /// Total damage dealt, bonus strike included.
    pub damage: i32,
    /// Raw damage stopped by the defender's armor.
    pub absorbed: i32,
    pub bonus: Option<BonusStrike>,
    pub defender_hp_remaining: i32,
    pub defeated: bool,
}

/// Applies one attack, mutating both sides (defender HP, attacker SP on spells).
pub fn resolve_attack<R: Rng + ?Sized>(
    attacker: &mut Combatant,
    defender: &mut Combatant,
    rng: &mut R,
) -> AttackOutcome {
    let variation = 0.8 + random_unit(rng) * 0.4;
    let raw_damage = (f64::from(attacker.stats.damage) * variation) as i32;
    let armor_reduction = (f64::from(defender.stats.armor) * 0.1).min(MAX_ARMOR_REDUCTION);
    let base_damage = ((f64::from(raw_damage) * (1.0 - armor_reduction)) as i32).max(1);
    let absorbed = (raw_damage - base_damage).max(0);

    let bonus = match attacker.class {
        Some(CharacterClass::Mage) if attacker.sp >= SPELL_COST && chance(rng, SPELL_CHANCE) => {
            attacker.sp -= SPELL_COST;
            Some(BonusStrike::SpellBolt(random_i32(rng, 3, 8)))
        }
        Some(CharacterClass::Rogue) if chance(rng, CRITICAL_CHANCE) => {
            Some(BonusStrike::Critical(random_i32(rng, 2, 5)))
        }
        _ => None,
    };
    let bonus_damage = match bonus {
        Some(BonusStrike::SpellBolt(amount) | BonusStrike::Critical(amount)) => amount,
        None => 0,
    };

    let damage = base_damage + bonus_damage;
    defender.hp -= damage;

    AttackOutcome {
        damage,
        absorbed,
        bonus,
        defender_hp_remaining: defender.hp.max(0),
        defeated: defender.is_defeated(),
    }
}
