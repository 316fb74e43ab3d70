//! Care actions: feed, play, rest, heal and the accessory shop.
//!
//! Every action checks its precondition first and returns a [`CareError`]
//! without touching state when it fails. On success the action applies its
//! fixed deltas (clamped by [`Gauge`](super::squirrel::Gauge)), grants
//! experience, runs the level-up rule once and then the achievement checks.

use log::{debug, info};

use super::achievement::check_achievements;
use super::errors::CareError;
use super::squirrel::{Currency, LevelUp, Squirrel};

/// Minimum energy needed to play.
pub const PLAY_ENERGY_REQUIRED: u32 = 20;
pub const PLAY_HAPPINESS_GAIN: f32 = 20.0;
pub const PLAY_ENERGY_COST: f32 = 20.0;
pub const PLAY_EXP: f32 = 10.0;

pub const REST_ENERGY_GAIN: f32 = 30.0;
pub const REST_HAPPINESS_GAIN: f32 = 5.0;

pub const HEAL_COST_COINS: u32 = 15;
pub const HEAL_HEALTH_GAIN: f32 = 30.0;
pub const HEAL_EXP: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Food {
    Acorn,
    Walnut,
    GoldenAcorn,
}

#[derive(Debug, Clone, Copy)]
pub struct FoodInfo {
    pub name: &'static str,
    pub emoji: &'static str,
    pub currency: Currency,
    pub cost: u32,
    pub hunger: f32,
    pub happiness: f32,
    pub health: f32,
    pub exp: f32,
}

impl Food {
    pub const ALL: [Food; 3] = [Food::Acorn, Food::Walnut, Food::GoldenAcorn];

    pub fn info(self) -> FoodInfo {
        match self {
            Food::Acorn => FoodInfo {
                name: "acorn",
                emoji: "🌰",
                currency: Currency::Nuts,
                cost: 1,
                hunger: 25.0,
                happiness: 10.0,
                health: 0.0,
                exp: 5.0,
            },
            Food::Walnut => FoodInfo {
                name: "walnut",
                emoji: "🥜",
                currency: Currency::Nuts,
                cost: 2,
                hunger: 35.0,
                happiness: 12.0,
                health: 0.0,
                exp: 8.0,
            },
            Food::GoldenAcorn => FoodInfo {
                name: "golden acorn",
                emoji: "✨",
                currency: Currency::Coins,
                cost: 20,
                hunger: 50.0,
                happiness: 25.0,
                health: 10.0,
                exp: 20.0,
            },
        }
    }

    /// Accepts `acorn`, `walnut`, `golden`/`golden_acorn`/`golden acorn`.
    pub fn parse(raw: &str) -> Result<Food, CareError> {
        let norm: String = raw
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match norm.as_str() {
            "" | "acorn" => Ok(Food::Acorn),
            "walnut" => Ok(Food::Walnut),
            "golden" | "goldenacorn" => Ok(Food::GoldenAcorn),
            _ => Err(CareError::UnknownFood(raw.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Accessory {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    pub cost_coins: u32,
}

pub const ACCESSORIES: [Accessory; 4] = [
    Accessory {
        id: "acorn_hat",
        name: "Acorn Hat",
        emoji: "🎩",
        cost_coins: 25,
    },
    Accessory {
        id: "tiny_scarf",
        name: "Tiny Scarf",
        emoji: "🧣",
        cost_coins: 40,
    },
    Accessory {
        id: "leaf_cape",
        name: "Leaf Cape",
        emoji: "🍃",
        cost_coins: 60,
    },
    Accessory {
        id: "golden_crown",
        name: "Golden Crown",
        emoji: "👑",
        cost_coins: 150,
    },
];

pub fn find_accessory(id: &str) -> Option<&'static Accessory> {
    ACCESSORIES.iter().find(|a| a.id.eq_ignore_ascii_case(id.trim()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CareAction {
    Feed(Food),
    Play,
    Rest,
    Heal,
    Buy(&'static str),
}

/// What happened as a side effect of a successful action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionReport {
    pub action: CareAction,
    pub level_up: Option<LevelUp>,
    pub achievements: Vec<&'static str>,
}

impl Squirrel {
    fn settle(&mut self, action: CareAction, exp: f32) -> ActionReport {
        let level_up = self.gain_exp(exp);
        let achievements = check_achievements(self);
        ActionReport {
            action,
            level_up,
            achievements,
        }
    }

    fn ensure_funds(&self, currency: Currency, needed: u32) -> Result<(), CareError> {
        let available = self.balance(currency);
        if available < needed {
            debug!(
                "{}: refused, needs {} {} but has {}",
                self.name, needed, currency, available
            );
            return Err(CareError::InsufficientFunds {
                currency,
                needed,
                available,
            });
        }
        Ok(())
    }

    pub fn can_afford(&self, food: Food) -> bool {
        let info = food.info();
        self.balance(info.currency) >= info.cost
    }

    pub fn can_play(&self) -> bool {
        self.energy.value() >= PLAY_ENERGY_REQUIRED as f32
    }

    pub fn feed(&mut self, food: Food) -> Result<ActionReport, CareError> {
        let info = food.info();
        self.ensure_funds(info.currency, info.cost)?;
        self.spend(info.currency, info.cost);
        self.hunger.adjust(info.hunger);
        self.happiness.adjust(info.happiness);
        self.health.adjust(info.health);
        info!("{} ate a {}", self.name, info.name);
        Ok(self.settle(CareAction::Feed(food), info.exp))
    }

    pub fn play(&mut self) -> Result<ActionReport, CareError> {
        if !self.can_play() {
            return Err(CareError::TooTired {
                required: PLAY_ENERGY_REQUIRED,
            });
        }
        self.happiness.adjust(PLAY_HAPPINESS_GAIN);
        self.energy.adjust(-PLAY_ENERGY_COST);
        Ok(self.settle(CareAction::Play, PLAY_EXP))
    }

    pub fn rest(&mut self) -> Result<ActionReport, CareError> {
        self.energy.adjust(REST_ENERGY_GAIN);
        self.happiness.adjust(REST_HAPPINESS_GAIN);
        Ok(self.settle(CareAction::Rest, 0.0))
    }

    pub fn heal(&mut self) -> Result<ActionReport, CareError> {
        if self.health.is_full() {
            return Err(CareError::AlreadyHealthy);
        }
        self.ensure_funds(Currency::Coins, HEAL_COST_COINS)?;
        self.spend(Currency::Coins, HEAL_COST_COINS);
        self.health.adjust(HEAL_HEALTH_GAIN);
        Ok(self.settle(CareAction::Heal, HEAL_EXP))
    }

    pub fn buy_accessory(&mut self, id: &str) -> Result<ActionReport, CareError> {
        let accessory =
            find_accessory(id).ok_or_else(|| CareError::UnknownAccessory(id.trim().to_string()))?;
        if self.accessories.contains(accessory.id) {
            return Err(CareError::AlreadyOwned(accessory.id.to_string()));
        }
        self.ensure_funds(Currency::Coins, accessory.cost_coins)?;
        self.spend(Currency::Coins, accessory.cost_coins);
        self.accessories.insert(accessory.id.to_string());
        info!("{} bought {}", self.name, accessory.id);
        Ok(self.settle(CareAction::Buy(accessory.id), 0.0))
    }
}

/// Shop listing with owned items marked.
pub fn format_shop(squirrel: &Squirrel) -> String {
    let mut out = format!("Shop ({} coins, {} nuts)\nFood:\n", squirrel.coins, squirrel.nuts);
    for food in Food::ALL {
        let info = food.info();
        out.push_str(&format!(
            "  {} {} - {} {}\n",
            info.emoji, info.name, info.cost, info.currency
        ));
    }
    out.push_str("Accessories:\n");
    for a in ACCESSORIES.iter() {
        let owned = if squirrel.accessories.contains(a.id) { " (owned)" } else { "" };
        out.push_str(&format!(
            "  {} {} [{}] - {} coins{}\n",
            a.emoji, a.name, a.id, a.cost_coins, owned
        ));
    }
    out
}
