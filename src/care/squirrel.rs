//! Squirrel state: bounded gauges, currencies, experience and the derived
//! mood/personality labels.

use chrono::{DateTime, Utc};
use log::debug;
use std::collections::BTreeSet;
use std::fmt;

/// Upper bound shared by every gauge.
pub const GAUGE_MAX: f32 = 100.0;

/// Experience threshold at level 1.
pub const BASE_MAX_EXP: u32 = 100;
/// Threshold multiplier applied on every level-up (result is floored).
pub const LEVEL_GROWTH: f32 = 1.5;
/// Coins granted per level reached.
pub const LEVEL_REWARD_COINS: u32 = 10;

// Per-tick decay amounts.
pub const HUNGER_DECAY: f32 = 1.0;
pub const ENERGY_DECAY: f32 = 0.5;
pub const HAPPINESS_DECAY: f32 = 0.3;
/// Health lost per tick while hunger sits at zero.
pub const STARVATION_DECAY: f32 = 0.5;

/// A stat clamped to `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Gauge(f32);

impl Gauge {
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Gauge(0.0);
        }
        Gauge(value.clamp(0.0, GAUGE_MAX))
    }

    pub fn full() -> Self {
        Gauge(GAUGE_MAX)
    }

    pub fn value(self) -> f32 {
        self.0
    }

    /// Apply `delta`, clamping the result. Returns the change actually applied.
    pub fn adjust(&mut self, delta: f32) -> f32 {
        let before = self.0;
        *self = Gauge::new(self.0 + delta);
        self.0 - before
    }

    pub fn is_full(self) -> bool {
        self.0 >= GAUGE_MAX
    }

    pub fn is_empty(self) -> bool {
        self.0 <= 0.0
    }

    /// Whole-number percentage for display.
    pub fn percent(self) -> u32 {
        self.0.round() as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    Nuts,
    Coins,
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::Nuts => write!(f, "nuts"),
            Currency::Coins => write!(f, "coins"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Ecstatic,
    Happy,
    Content,
    Sad,
    VerySad,
}

impl Mood {
    pub fn from_happiness(happiness: Gauge) -> Self {
        let h = happiness.value();
        if h > 80.0 {
            Mood::Ecstatic
        } else if h > 60.0 {
            Mood::Happy
        } else if h > 40.0 {
            Mood::Content
        } else if h > 20.0 {
            Mood::Sad
        } else {
            Mood::VerySad
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mood::Ecstatic => "Ecstatic",
            Mood::Happy => "Happy",
            Mood::Content => "Content",
            Mood::Sad => "Sad",
            Mood::VerySad => "Very Sad",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Mood::Ecstatic => "😊",
            Mood::Happy => "😄",
            Mood::Content => "😐",
            Mood::Sad => "😔",
            Mood::VerySad => "😢",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Personality {
    Energetic,
    Curious,
    Sleepy,
    Friendly,
    Mischievous,
}

impl Personality {
    pub fn label(self) -> &'static str {
        match self {
            Personality::Energetic => "Energetic",
            Personality::Curious => "Curious",
            Personality::Sleepy => "Sleepy",
            Personality::Friendly => "Friendly",
            Personality::Mischievous => "Mischievous",
        }
    }
}

/// Result of a level-up triggered by [`Squirrel::gain_exp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    pub new_level: u32,
    pub coins_awarded: u32,
    pub new_max_exp: u32,
}

#[derive(Debug, Clone)]
pub struct Squirrel {
    pub name: String,
    pub level: u32,
    pub happiness: Gauge,
    /// Fullness: higher means better fed.
    pub hunger: Gauge,
    pub energy: Gauge,
    pub health: Gauge,
    pub nuts: u32,
    pub coins: u32,
    pub exp: f32,
    pub max_exp: u32,
    pub accessories: BTreeSet<String>,
    pub achievements: BTreeSet<String>,
    pub created_at: DateTime<Utc>,
}

impl Default for Squirrel {
    fn default() -> Self {
        Squirrel::new("Nutkin")
    }
}

impl Squirrel {
    pub fn new(name: &str) -> Self {
        Squirrel {
            name: name.to_string(),
            level: 1,
            happiness: Gauge::new(75.0),
            hunger: Gauge::new(60.0),
            energy: Gauge::new(80.0),
            health: Gauge::full(),
            nuts: 5,
            coins: 50,
            exp: 0.0,
            max_exp: BASE_MAX_EXP,
            accessories: BTreeSet::new(),
            achievements: BTreeSet::new(),
            created_at: Utc::now(),
        }
    }

    pub fn with_wallet(mut self, nuts: u32, coins: u32) -> Self {
        self.nuts = nuts;
        self.coins = coins;
        self
    }

    pub fn mood(&self) -> Mood {
        Mood::from_happiness(self.happiness)
    }

    pub fn personality(&self) -> Personality {
        let energy = self.energy.value();
        let happiness = self.happiness.value();
        if energy < 30.0 {
            Personality::Sleepy
        } else if energy > 75.0 && happiness > 75.0 {
            Personality::Energetic
        } else if self.level >= 5 && happiness < 40.0 {
            Personality::Mischievous
        } else if self.accessories.len() >= 2 {
            Personality::Curious
        } else {
            Personality::Friendly
        }
    }

    pub fn balance(&self, currency: Currency) -> u32 {
        match currency {
            Currency::Nuts => self.nuts,
            Currency::Coins => self.coins,
        }
    }

    pub(crate) fn spend(&mut self, currency: Currency, amount: u32) {
        match currency {
            Currency::Nuts => self.nuts = self.nuts.saturating_sub(amount),
            Currency::Coins => self.coins = self.coins.saturating_sub(amount),
        }
    }

    /// One decay tick. Gauges only go down here and bottom out at zero.
    pub fn decay(&mut self) {
        self.hunger.adjust(-HUNGER_DECAY);
        self.energy.adjust(-ENERGY_DECAY);
        self.happiness.adjust(-HAPPINESS_DECAY);
        if self.hunger.is_empty() {
            self.health.adjust(-STARVATION_DECAY);
        }
        debug!(
            "decay {}: hunger={:.1} energy={:.1} happiness={:.1} health={:.1}",
            self.name,
            self.hunger.value(),
            self.energy.value(),
            self.happiness.value(),
            self.health.value()
        );
    }

    /// Add experience and run a single level-up check.
    ///
    /// At most one level is gained per call; the remainder carries forward.
    pub fn gain_exp(&mut self, amount: f32) -> Option<LevelUp> {
        if amount > 0.0 {
            self.exp += amount;
        }
        if self.exp < self.max_exp as f32 {
            return None;
        }
        self.exp -= self.max_exp as f32;
        self.level += 1;
        self.max_exp = (self.max_exp as f32 * LEVEL_GROWTH).floor() as u32;
        let coins_awarded = self.level * LEVEL_REWARD_COINS;
        self.coins = self.coins.saturating_add(coins_awarded);
        debug!(
            "{} reached level {} (next threshold {})",
            self.name, self.level, self.max_exp
        );
        Some(LevelUp {
            new_level: self.level,
            coins_awarded,
            new_max_exp: self.max_exp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gauge_clamps_both_ends() {
        assert_eq!(Gauge::new(150.0).value(), 100.0);
        assert_eq!(Gauge::new(-3.0).value(), 0.0);
        assert_eq!(Gauge::new(f32::NAN).value(), 0.0);
        let mut g = Gauge::new(95.0);
        assert_eq!(g.adjust(10.0), 5.0);
        assert!(g.is_full());
    }

    #[test]
    fn mood_thresholds() {
        assert_eq!(Mood::from_happiness(Gauge::new(81.0)), Mood::Ecstatic);
        assert_eq!(Mood::from_happiness(Gauge::new(80.0)), Mood::Happy);
        assert_eq!(Mood::from_happiness(Gauge::new(41.0)), Mood::Content);
        assert_eq!(Mood::from_happiness(Gauge::new(40.0)), Mood::Sad);
        assert_eq!(Mood::from_happiness(Gauge::new(20.0)), Mood::VerySad);
    }

    #[test]
    fn decay_floors_at_zero_and_starves_health() {
        let mut s = Squirrel::new("Test");
        s.hunger = Gauge::new(0.5);
        s.energy = Gauge::new(0.2);
        s.happiness = Gauge::new(0.1);
        s.decay();
        assert_eq!(s.hunger.value(), 0.0);
        assert_eq!(s.energy.value(), 0.0);
        assert_eq!(s.happiness.value(), 0.0);
        assert_eq!(s.health.value(), 100.0 - STARVATION_DECAY);
    }

    #[test]
    fn level_up_rolls_remainder_and_scales_threshold() {
        let mut s = Squirrel::new("Test");
        s.exp = 95.0;
        let up = s.gain_exp(10.0).expect("level up");
        assert_eq!(up.new_level, 2);
        assert_eq!(s.level, 2);
        assert!((s.exp - 5.0).abs() < f32::EPSILON);
        assert_eq!(s.max_exp, 150);
        assert_eq!(up.coins_awarded, 20);
        assert_eq!(s.coins, 50 + 20);
    }

    #[test]
    fn threshold_growth_is_floored() {
        let mut s = Squirrel::new("Test");
        s.max_exp = 225;
        s.exp = 225.0;
        s.gain_exp(0.0).expect("level up");
        assert_eq!(s.max_exp, 337);
    }

    #[test]
    fn personality_derivation() {
        let mut s = Squirrel::new("Test");
        s.energy = Gauge::new(20.0);
        assert_eq!(s.personality(), Personality::Sleepy);
        s.energy = Gauge::new(90.0);
        s.happiness = Gauge::new(90.0);
        assert_eq!(s.personality(), Personality::Energetic);
        s.energy = Gauge::new(50.0);
        s.happiness = Gauge::new(30.0);
        s.level = 6;
        assert_eq!(s.personality(), Personality::Mischievous);
        s.level = 1;
        assert_eq!(s.personality(), Personality::Friendly);
        s.accessories.insert("acorn_hat".into());
        s.accessories.insert("tiny_scarf".into());
        assert_eq!(s.personality(), Personality::Curious);
    }
}
