//! Nut Catcher: acorns fall from the canopy and the player moves a basket
//! underneath to catch them.
//!
//! Coordinates are percentages of the play field. A nut is catchable once it
//! is low enough (`y > 80`) and horizontally within reach of the basket.

use rand::Rng;

use super::errors::GameError;

pub const FALL_STEP: f32 = 5.0;
pub const FIELD_BOTTOM: f32 = 100.0;
pub const CATCH_HEIGHT: f32 = 80.0;
pub const CATCH_REACH: f32 = 15.0;
pub const BASKET_MIN: f32 = 10.0;
pub const BASKET_MAX: f32 = 90.0;
pub const BASKET_START: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallingNut {
    pub id: u32,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone)]
pub struct NutCatch {
    pub score: u32,
    pub time_left: u32,
    pub basket_x: f32,
    pub nuts: Vec<FallingNut>,
    spawn_chance: f64,
    next_id: u32,
}

impl NutCatch {
    pub fn new(duration_ticks: u32, spawn_chance: f64) -> Self {
        Self {
            score: 0,
            time_left: duration_ticks,
            basket_x: BASKET_START,
            nuts: Vec::new(),
            spawn_chance: spawn_chance.clamp(0.0, 1.0),
            next_id: 1,
        }
    }

    pub fn is_over(&self) -> bool {
        self.time_left == 0
    }

    /// Advance one tick: count down, maybe drop a new nut, move every nut
    /// down and forget the ones that hit the ground.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.is_over() {
            return;
        }
        self.time_left -= 1;
        if rng.gen_bool(self.spawn_chance) {
            let x = rng.gen_range(10.0..90.0);
            self.nuts.push(FallingNut { id: self.next_id, x, y: 0.0 });
            self.next_id += 1;
        }
        for nut in self.nuts.iter_mut() {
            nut.y += FALL_STEP;
        }
        self.nuts.retain(|n| n.y < FIELD_BOTTOM);
    }

    pub fn move_basket(&mut self, x: f32) -> f32 {
        self.basket_x = if x.is_nan() { BASKET_START } else { x.clamp(BASKET_MIN, BASKET_MAX) };
        self.basket_x
    }

    pub fn catch(&mut self, nut_id: u32) -> Result<u32, GameError> {
        let idx = self
            .nuts
            .iter()
            .position(|n| n.id == nut_id)
            .ok_or(GameError::NoSuchNut(nut_id))?;
        let nut = self.nuts[idx];
        if (nut.x - self.basket_x).abs() < CATCH_REACH && nut.y > CATCH_HEIGHT {
            self.nuts.remove(idx);
            self.score += 1;
            Ok(self.score)
        } else {
            Err(GameError::Missed(nut_id))
        }
    }

    pub fn render(&self) -> String {
        let mut out = format!(
            "🌰 Nut Catcher | score {} | {} left | basket at {:.0}\n",
            self.score, self.time_left, self.basket_x
        );
        if self.nuts.is_empty() {
            out.push_str("(no nuts falling)\n");
        }
        for nut in &self.nuts {
            let reachable = nut.y > CATCH_HEIGHT && (nut.x - self.basket_x).abs() < CATCH_REACH;
            out.push_str(&format!(
                "  #{} x={:.0} y={:.0}{}\n",
                nut.id,
                nut.x,
                nut.y,
                if reachable { " <- catch!" } else { "" }
            ));
        }
        out
    }
}
