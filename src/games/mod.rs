//! # Mini-Games
//!
//! Three playable tick-driven games plus one listed preview:
//!
//! - [`nut_catch`] - move a basket under falling nuts
//! - [`memory`] - match pairs of face-down cards
//! - [`quick_click`] - hit targets before they vanish
//!
//! A [`GameCenter`] owns at most one running session and the per-session
//! score history. Games are picked from the [`CATALOG`] by id, title or
//! `G#` menu index, the same way the games menu resolves doors.

pub mod center;
pub mod errors;
pub mod memory;
pub mod nut_catch;
pub mod quick_click;

pub use center::{ActiveGame, GameCenter, ScoreRecord};
pub use errors::GameError;
pub use memory::{FlipOutcome, MemoryMatch};
pub use nut_catch::NutCatch;
pub use quick_click::QuickClick;

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKind {
    NutCatch,
    MemoryMatch,
    QuickClick,
    TreeJump,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rewards {
    pub nuts: u32,
    pub coins: u32,
    pub exp: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct MiniGame {
    pub kind: GameKind,
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub emoji: &'static str,
    pub difficulty: Difficulty,
    pub rewards: Rewards,
    /// Set for listed games that can't be started yet.
    pub status_note: Option<&'static str>,
}

impl MiniGame {
    pub fn is_playable(&self) -> bool {
        self.status_note.is_none()
    }
}

pub const CATALOG: [MiniGame; 4] = [
    MiniGame {
        kind: GameKind::NutCatch,
        id: "nut-catch",
        name: "Nut Catcher",
        description: "Catch falling acorns in your basket before they hit the ground",
        emoji: "🌰",
        difficulty: Difficulty::Easy,
        rewards: Rewards { nuts: 10, coins: 5, exp: 15 },
        status_note: None,
    },
    MiniGame {
        kind: GameKind::MemoryMatch,
        id: "memory-match",
        name: "Squirrel Memory",
        description: "Match pairs of forest cards to test your memory",
        emoji: "🧠",
        difficulty: Difficulty::Medium,
        rewards: Rewards { nuts: 15, coins: 10, exp: 25 },
        status_note: None,
    },
    MiniGame {
        kind: GameKind::QuickClick,
        id: "quick-click",
        name: "Quick Click",
        description: "Hit the acorn targets as fast as you can",
        emoji: "⚡",
        difficulty: Difficulty::Hard,
        rewards: Rewards { nuts: 20, coins: 15, exp: 35 },
        status_note: None,
    },
    MiniGame {
        kind: GameKind::TreeJump,
        id: "tree-jump",
        name: "Tree Jumper",
        description: "Leap from branch to branch without falling",
        emoji: "🌳",
        difficulty: Difficulty::Medium,
        rewards: Rewards { nuts: 12, coins: 8, exp: 20 },
        status_note: Some("coming soon"),
    },
];

pub fn game_info(kind: GameKind) -> &'static MiniGame {
    match kind {
        GameKind::NutCatch => &CATALOG[0],
        GameKind::MemoryMatch => &CATALOG[1],
        GameKind::QuickClick => &CATALOG[2],
        GameKind::TreeJump => &CATALOG[3],
    }
}

pub fn format_games_menu() -> String {
    let mut out = String::from("Games Menu:\n");
    for (idx, game) in CATALOG.iter().enumerate() {
        let line = format!(
            "{:>2}) {} {} [{}] +{} nuts +{} coins +{} exp",
            idx + 1,
            game.emoji,
            game.name,
            game.difficulty,
            game.rewards.nuts,
            game.rewards.coins,
            game.rewards.exp
        );
        match game.status_note {
            Some(note) => out.push_str(&format!("{} ({})\n", line, note)),
            None => out.push_str(&format!("{}\n", line)),
        }
    }
    out.push_str("Use START G# or a game name to play.\n");
    out
}

/// Find a game by id (`nut-catch`), title (`Nut Catcher`) or menu index
/// (`G1`, `G 1`, `1`).
pub fn resolve_game(input: &str) -> Result<&'static MiniGame, GameError> {
    let trimmed = input.trim();
    for game in CATALOG.iter() {
        if game.id.eq_ignore_ascii_case(trimmed) || game.name.eq_ignore_ascii_case(trimmed) {
            return Ok(game);
        }
    }

    let rest = trimmed
        .strip_prefix('G')
        .or_else(|| trimmed.strip_prefix('g'))
        .unwrap_or(trimmed)
        .trim();
    if let Ok(idx) = rest.parse::<usize>() {
        if idx >= 1 && idx <= CATALOG.len() {
            return Ok(&CATALOG[idx - 1]);
        }
    }

    let normalized: String = trimmed
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase();
    if !normalized.is_empty() {
        for game in CATALOG.iter() {
            if game.id.replace('-', "") == normalized {
                return Ok(game);
            }
        }
    }

    Err(GameError::UnknownGame(trimmed.to_string()))
}
