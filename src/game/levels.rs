//! Static base-level configuration.
//!
//! Fourteen levels, each defining a population cap, the troop cost of the
//! next upgrade, and a spawn rate. The table is fixed at compile time and
//! shared by the generator (initial population and upgrade progress), the
//! order resolver (upgrade cost reset on level-up), and the targeting
//! strategy (reinforcement projections).

use serde::{Deserialize, Serialize};

/// Highest base level defined by the table.
pub const MAX_LEVEL: u8 = 14;

/// Configuration for one base level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelEntry {
    /// Maximum troops the base can hold at this level.
    pub max_population: u32,
    /// Troops needed to upgrade to the next level.
    pub upgrade_cost: u32,
    /// Troops generated per tick at this level.
    pub spawn_rate: u32,
}

impl LevelEntry {
    const fn new(max_population: u32, upgrade_cost: u32, spawn_rate: u32) -> Self {
        Self {
            max_population,
            upgrade_cost,
            spawn_rate,
        }
    }

    /// Look up the entry for a level.
    ///
    /// Returns `None` for level 0 (a valid entity level with no table entry)
    /// and for anything above [`MAX_LEVEL`].
    #[must_use]
    pub fn of(level: u8) -> Option<&'static LevelEntry> {
        if level == 0 || level > MAX_LEVEL {
            return None;
        }
        Some(&LEVEL_TABLE[usize::from(level) - 1])
    }
}

/// Level configurations for levels 1 through 14, in order.
pub const LEVEL_TABLE: [LevelEntry; MAX_LEVEL as usize] = [
    LevelEntry::new(20, 10, 1),
    LevelEntry::new(40, 20, 2),
    LevelEntry::new(80, 30, 3),
    LevelEntry::new(100, 40, 4),
    LevelEntry::new(200, 50, 5),
    LevelEntry::new(300, 100, 6),
    LevelEntry::new(400, 200, 7),
    LevelEntry::new(500, 400, 8),
    LevelEntry::new(600, 600, 9),
    LevelEntry::new(700, 800, 10),
    LevelEntry::new(800, 1000, 15),
    LevelEntry::new(900, 1500, 20),
    LevelEntry::new(1000, 2000, 25),
    LevelEntry::new(2000, 3000, 50),
];
