use rand_chacha::rand_core::Rng;
use serde::{Deserialize, Serialize};

use crate::mapgen::seed::random_i32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterClass {
    Warrior,
    Mage,
    Rogue,
    /// Fallback for unrecognised class names.
    Adventurer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    Goblin,
    Orc,
    Troll,
    Skeleton,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub max_hp: i32,
    pub max_sp: i32,
    pub damage: i32,
    pub armor: i32,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Warrior,
        CharacterClass::Mage,
        CharacterClass::Rogue,
        CharacterClass::Adventurer,
    ];

    /// Case-insensitive; accepts English and Russian names.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "warrior" | "воин" => CharacterClass::Warrior,
            "mage" | "маг" => CharacterClass::Mage,
            "rogue" | "разбойник" => CharacterClass::Rogue,
            _ => CharacterClass::Adventurer,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Warrior => "Warrior",
            CharacterClass::Mage => "Mage",
            CharacterClass::Rogue => "Rogue",
            CharacterClass::Adventurer => "Adventurer",
        }
    }
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 4] =
        [EnemyKind::Goblin, EnemyKind::Orc, EnemyKind::Troll, EnemyKind::Skeleton];

    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "goblin" | "гоблин" => Some(EnemyKind::Goblin),
            "orc" | "орк" => Some(EnemyKind::Orc),
            "troll" | "тролль" => Some(EnemyKind::Troll),
            "skeleton" | "скелет" => Some(EnemyKind::Skeleton),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EnemyKind::Goblin => "Goblin",
            EnemyKind::Orc => "Orc",
            EnemyKind::Troll => "Troll",
            EnemyKind::Skeleton => "Skeleton",
        }
    }
}

pub fn get_class_stats(class: CharacterClass) -> Stats {
    match class {
        CharacterClass::Warrior => Stats { max_hp: 30, max_sp: 10, damage: 3, armor: 2 },
        CharacterClass::Mage => Stats { max_hp: 15, max_sp: 30, damage: 5, armor: 0 },
        CharacterClass::Rogue => Stats { max_hp: 20, max_sp: 20, damage: 4, armor: 1 },
        CharacterClass::Adventurer => Stats { max_hp: 20, max_sp: 20, damage: 2, armor: 1 },
    }
}

pub fn get_enemy_stats(kind: EnemyKind) -> Stats {
    match kind {
        EnemyKind::Goblin => Stats { max_hp: 10, max_sp: 5, damage: 2, armor: 0 },
        EnemyKind::Orc => Stats { max_hp: 20, max_sp: 10, damage: 3, armor: 1 },
        EnemyKind::Troll => Stats { max_hp: 30, max_sp: 5, damage: 4, armor: 2 },
        EnemyKind::Skeleton => Stats { max_hp: 15, max_sp: 0, damage: 3, armor: 1 },
    }
}

/// Base stats with per-spawn variance: max HP +-2, damage +-1 (never below 1).
pub fn roll_enemy_stats<R: Rng + ?Sized>(kind: EnemyKind, rng: &mut R) -> Stats {
    let mut stats = get_enemy_stats(kind);
    stats.max_hp += random_i32(rng, -2, 2);
    stats.damage = (stats.damage + random_i32(rng, -1, 1)).max(1);
    stats
}

#[cfg(test)]
mod tests {
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    use super::*;

    #[test]
    fn class_names_parse_in_both_languages() {
        assert_eq!(CharacterClass::parse("WARRIOR"), CharacterClass::Warrior);
        assert_eq!(CharacterClass::parse("Маг"), CharacterClass::Mage);
        assert_eq!(CharacterClass::parse(" rogue "), CharacterClass::Rogue);
        assert_eq!(CharacterClass::parse("bard"), CharacterClass::Adventurer);
    }

    #[test]
    fn enemy_names_parse_or_reject() {
        assert_eq!(EnemyKind::parse("Тролль"), Some(EnemyKind::Troll));
        assert_eq!(EnemyKind::parse("skeleton"), Some(EnemyKind::Skeleton));
        assert_eq!(EnemyKind::parse("dragon"), None);
    }

    #[test]
    fn rolled_enemy_stats_stay_near_the_table() {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        for kind in EnemyKind::ALL {
            let base = get_enemy_stats(kind);
            for _ in 0..50 {
                let rolled = roll_enemy_stats(kind, &mut rng);
                assert!((base.max_hp - 2..=base.max_hp + 2).contains(&rolled.max_hp));
                assert!((base.damage - 1..=base.damage + 1).contains(&rolled.damage));
                assert!(rolled.damage >= 1);
                assert_eq!(rolled.armor, base.armor);
            }
        }
    }
}
