//! Achievement catalog and milestone checks for the squirrel.
//!
//! Checks run after every care action. Unlocked ids live in a set on the
//! squirrel, so an achievement is granted at most once and never revoked.

use log::info;

use super::squirrel::Squirrel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Milestone {
    Level(u32),
    MaxHappiness,
    Nuts(u32),
    Coins(u32),
    Accessories(usize),
}

#[derive(Debug, Clone, Copy)]
pub struct Achievement {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub milestone: Milestone,
}

pub const ACHIEVEMENTS: [Achievement; 7] = [
    Achievement {
        id: "first_steps",
        name: "First Steps",
        description: "Reach level 2",
        milestone: Milestone::Level(2),
    },
    Achievement {
        id: "rising_star",
        name: "Rising Star",
        description: "Reach level 5",
        milestone: Milestone::Level(5),
    },
    Achievement {
        id: "veteran",
        name: "Veteran Squirrel",
        description: "Reach level 10",
        milestone: Milestone::Level(10),
    },
    Achievement {
        id: "pure_joy",
        name: "Pure Joy",
        description: "Max out happiness",
        milestone: Milestone::MaxHappiness,
    },
    Achievement {
        id: "nut_hoarder",
        name: "Nut Hoarder",
        description: "Stash 50 nuts",
        milestone: Milestone::Nuts(50),
    },
    Achievement {
        id: "coin_collector",
        name: "Coin Collector",
        description: "Save up 500 coins",
        milestone: Milestone::Coins(500),
    },
    Achievement {
        id: "fashionista",
        name: "Fashionista",
        description: "Own 3 accessories",
        milestone: Milestone::Accessories(3),
    },
];

pub fn find_achievement(id: &str) -> Option<&'static Achievement> {
    ACHIEVEMENTS.iter().find(|a| a.id == id)
}

fn milestone_reached(squirrel: &Squirrel, milestone: Milestone) -> bool {
    match milestone {
        Milestone::Level(level) => squirrel.level >= level,
        Milestone::MaxHappiness => squirrel.happiness.is_full(),
        Milestone::Nuts(n) => squirrel.nuts >= n,
        Milestone::Coins(n) => squirrel.coins >= n,
        Milestone::Accessories(n) => squirrel.accessories.len() >= n,
    }
}

/// Unlock every achievement whose milestone is met. Returns only the ids
/// unlocked by this call.
pub fn check_achievements(squirrel: &mut Squirrel) -> Vec<&'static str> {
    let mut awarded = Vec::new();
    for achievement in ACHIEVEMENTS.iter() {
        if squirrel.achievements.contains(achievement.id) {
            continue;
        }
        if milestone_reached(squirrel, achievement.milestone) {
            squirrel.achievements.insert(achievement.id.to_string());
            info!("{} unlocked achievement '{}'", squirrel.name, achievement.id);
            awarded.push(achievement.id);
        }
    }
    awarded
}

/// One line per catalog entry, unlocked ones first marked with a check.
pub fn format_achievements(squirrel: &Squirrel) -> String {
    let mut out = format!(
        "Achievements {}/{}\n",
        squirrel.achievements.len(),
        ACHIEVEMENTS.len()
    );
    for a in ACHIEVEMENTS.iter() {
        let mark = if squirrel.achievements.contains(a.id) { "✅" } else { "⬜" };
        out.push_str(&format!("{} {} - {}\n", mark, a.name, a.description));
    }
    out
}
