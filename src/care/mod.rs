//! # Squirrel Care
//!
//! The virtual squirrel simulation: four bounded gauges that decay on a
//! timer, care actions that push them back up, an experience/level loop and
//! a small achievement catalog.
//!
//! - [`squirrel`] - state, gauges, decay and the leveling rule
//! - [`actions`] - feed/play/rest/heal and the accessory shop
//! - [`achievement`] - milestone achievements checked after every action
//!
//! ```rust
//! use squirrelhaven::care::{Food, Squirrel};
//!
//! let mut nutkin = Squirrel::new("Nutkin");
//! nutkin.feed(Food::Acorn).unwrap();
//! nutkin.decay();
//! assert!(nutkin.hunger.value() <= 100.0);
//! ```

pub mod achievement;
pub mod actions;
pub mod errors;
pub mod squirrel;

pub use achievement::{check_achievements, find_achievement, format_achievements, ACHIEVEMENTS};
pub use actions::{find_accessory, format_shop, ActionReport, CareAction, Food, ACCESSORIES};
pub use errors::CareError;
pub use squirrel::{Currency, Gauge, LevelUp, Mood, Personality, Squirrel};

use crate::text::TextCatalog;

fn bar(g: Gauge) -> String {
    let filled = (g.percent() as usize + 5) / 10;
    format!("{}{}", "█".repeat(filled.min(10)), "░".repeat(10 - filled.min(10)))
}

/// Multi-line status card for the squirrel.
pub fn format_status(squirrel: &Squirrel, texts: &TextCatalog) -> String {
    let mood = squirrel.mood();
    let mut out = texts.text_with("care.title", &[("name", &squirrel.name)]);
    out.push('\n');
    out.push_str(&texts.text_with(
        "care.moodLine",
        &[
            ("name", &squirrel.name),
            ("mood", &mood.label()),
            ("emoji", &mood.emoji()),
        ],
    ));
    out.push('\n');
    out.push_str(&format!(
        "Lv {} ({:.0}/{} exp) | {} 🌰 | {} coins | {}\n",
        squirrel.level,
        squirrel.exp,
        squirrel.max_exp,
        squirrel.nuts,
        squirrel.coins,
        squirrel.personality().label()
    ));
    for (label, g) in [
        ("Happiness", squirrel.happiness),
        ("Hunger   ", squirrel.hunger),
        ("Energy   ", squirrel.energy),
        ("Health   ", squirrel.health),
    ] {
        out.push_str(&format!("{} {} {:>3}%\n", label, bar(g), g.percent()));
    }
    if !squirrel.accessories.is_empty() {
        let worn: Vec<&str> = squirrel
            .accessories
            .iter()
            .filter_map(|id| find_accessory(id).map(|a| a.emoji))
            .collect();
        out.push_str(&format!("Wearing: {}\n", worn.join(" ")));
    }
    out
}
