//! # Easter Eggs
//!
//! Hidden unlocks scattered around the haven. Each egg fires once per
//! session; later triggers are silently ignored.
//!
//! | Egg | Trigger |
//! |-----|---------|
//! | `konami` | the classic arrow/B/A key sequence |
//! | `triple-click` | ten squirrel clicks with no gap over two seconds |
//! | `midnight` | starting a session between 23:00 and 01:59 |
//! | `disco` | thirty seconds of dancing |
//! | `secret-message` | reading the footer secret |
//! | `rainbow` | the rainbow trigger |

use log::{debug, info};
use std::collections::{BTreeSet, VecDeque};
use std::fmt;
use std::time::{Duration, Instant};

use crate::text::TextCatalog;

pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "KeyB",
    "KeyA",
];

pub const CLICKS_REQUIRED: u32 = 10;
pub const CLICK_RESET_GAP: Duration = Duration::from_secs(2);
pub const DISCO_DURATION: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rarity {
    Common,
    Rare,
    Legendary,
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rarity::Common => write!(f, "common"),
            Rarity::Rare => write!(f, "rare"),
            Rarity::Legendary => write!(f, "legendary"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EasterEgg {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub emoji: &'static str,
    pub rarity: Rarity,
    pub reward: &'static str,
}

pub const EGGS: [EasterEgg; 6] = [
    EasterEgg {
        id: "konami",
        name: "Konami Code",
        description: "Found the secret gaming reference!",
        emoji: "🎮",
        rarity: Rarity::Legendary,
        reward: "100 bonus nuts",
    },
    EasterEgg {
        id: "triple-click",
        name: "Persistent Clicker",
        description: "Clicked the squirrel 10 times in a row",
        emoji: "🖱️",
        rarity: Rarity::Common,
        reward: "25 nuts",
    },
    EasterEgg {
        id: "midnight",
        name: "Night Owl",
        description: "Visited during midnight hours",
        emoji: "🌙",
        rarity: Rarity::Rare,
        reward: "Special night theme",
    },
    EasterEgg {
        id: "disco",
        name: "Disco Fever",
        description: "Made the squirrel dance for 30 seconds",
        emoji: "🕺",
        rarity: Rarity::Rare,
        reward: "Dance animation",
    },
    EasterEgg {
        id: "secret-message",
        name: "Hidden Message",
        description: "Found the secret message in the footer",
        emoji: "📜",
        rarity: Rarity::Common,
        reward: "15 nuts",
    },
    EasterEgg {
        id: "rainbow",
        name: "Rainbow Hunter",
        description: "Triggered the rainbow effect",
        emoji: "🌈",
        rarity: Rarity::Legendary,
        reward: "Rainbow squirrel skin",
    },
];

pub fn find_egg(id: &str) -> Option<&'static EasterEgg> {
    EGGS.iter().find(|e| e.id.eq_ignore_ascii_case(id.trim()))
}

/// Midnight hours are 23:00 through 01:59 local time.
pub fn is_midnight_hour(hour: u32) -> bool {
    hour >= 23 || hour <= 1
}

#[derive(Debug, Clone, Default)]
pub struct EasterEggs {
    unlocked: BTreeSet<&'static str>,
    keys: VecDeque<String>,
    clicks: u32,
    last_click: Option<Instant>,
    danced: Duration,
}

impl EasterEggs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_unlocked(&self, id: &str) -> bool {
        self.unlocked.contains(id)
    }

    pub fn unlocked_count(&self) -> usize {
        self.unlocked.len()
    }

    pub fn click_count(&self) -> u32 {
        self.clicks
    }

    /// Unlock an egg. Returns it only the first time.
    pub fn unlock(&mut self, id: &str) -> Option<&'static EasterEgg> {
        let egg = find_egg(id)?;
        if !self.unlocked.insert(egg.id) {
            debug!("egg {} already unlocked", egg.id);
            return None;
        }
        info!("Easter egg unlocked: {} ({})", egg.id, egg.rarity);
        Some(egg)
    }

    /// Record a key press and unlock `konami` when the last ten keys match.
    pub fn press_key(&mut self, code: &str) -> Option<&'static EasterEgg> {
        self.keys.push_back(code.to_string());
        while self.keys.len() > KONAMI_SEQUENCE.len() {
            self.keys.pop_front();
        }
        let matched = self.keys.len() == KONAMI_SEQUENCE.len()
            && self.keys.iter().zip(KONAMI_SEQUENCE.iter()).all(|(k, want)| k == want);
        if matched {
            self.keys.clear();
            return self.unlock("konami");
        }
        None
    }

    /// Count a squirrel click made at `now`. A gap longer than two seconds
    /// starts the count over.
    pub fn click_squirrel(&mut self, now: Instant) -> Option<&'static EasterEgg> {
        if let Some(last) = self.last_click {
            if now.saturating_duration_since(last) > CLICK_RESET_GAP {
                self.clicks = 0;
            }
        }
        self.last_click = Some(now);
        self.clicks += 1;
        if self.clicks >= CLICKS_REQUIRED {
            self.clicks = 0;
            return self.unlock("triple-click");
        }
        None
    }

    pub fn check_hour(&mut self, hour: u32) -> Option<&'static EasterEgg> {
        if is_midnight_hour(hour) {
            return self.unlock("midnight");
        }
        None
    }

    /// Add to the squirrel's total dance time.
    pub fn dance(&mut self, duration: Duration) -> Option<&'static EasterEgg> {
        self.danced = self.danced.saturating_add(duration);
        if self.danced >= DISCO_DURATION {
            return self.unlock("disco");
        }
        None
    }

    pub fn danced(&self) -> Duration {
        self.danced
    }

    /// Explicit trigger used by the rainbow button and the footer secret.
    pub fn trigger(&mut self, id: &str) -> Option<&'static EasterEgg> {
        self.unlock(id)
    }

    pub fn format_collection(&self, texts: &TextCatalog) -> String {
        let mut out = texts.text("eggs.title");
        out.push('\n');
        out.push_str(&texts.text_with(
            "eggs.discovered",
            &[("count", &self.unlocked_count()), ("total", &EGGS.len())],
        ));
        out.push('\n');
        for egg in EGGS.iter() {
            if self.is_unlocked(egg.id) {
                out.push_str(&format!(
                    "  {} {} [{}] - {} (reward: {})\n",
                    egg.emoji, egg.name, egg.rarity, egg.description, egg.reward
                ));
            } else {
                out.push_str(&format!("  🔒 ??? [{}] - {}\n", egg.rarity, texts.text("eggs.hidden")));
            }
        }
        out
    }
}

/// Announcement line for a freshly unlocked egg.
pub fn format_unlock(egg: &EasterEgg, texts: &TextCatalog) -> String {
    texts.text_with("eggs.unlocked", &[("emoji", &egg.emoji), ("name", &egg.name)])
}
