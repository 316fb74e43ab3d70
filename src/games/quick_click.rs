//! Quick Click: acorn targets pop up around the field and vanish again
//! after a few ticks. Hit as many as possible before time runs out.

use rand::Rng;

use super::errors::GameError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickTarget {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    /// Ticks left before the target disappears.
    pub ttl: u32,
}

#[derive(Debug, Clone)]
pub struct QuickClick {
    pub score: u32,
    pub time_left: u32,
    pub targets: Vec<ClickTarget>,
    spawn_chance: f64,
    lifetime: u32,
    next_id: u32,
}

impl QuickClick {
    pub fn new(duration_ticks: u32, spawn_chance: f64, lifetime_ticks: u32) -> Self {
        Self {
            score: 0,
            time_left: duration_ticks,
            targets: Vec::new(),
            spawn_chance: spawn_chance.clamp(0.0, 1.0),
            lifetime: lifetime_ticks.max(1),
            next_id: 1,
        }
    }

    pub fn is_over(&self) -> bool {
        self.time_left == 0
    }

    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.is_over() {
            return;
        }
        self.time_left -= 1;
        for target in self.targets.iter_mut() {
            target.ttl = target.ttl.saturating_sub(1);
        }
        self.targets.retain(|t| t.ttl > 0);
        if rng.gen_bool(self.spawn_chance) {
            let x = rng.gen_range(10.0..90.0);
            let y = rng.gen_range(10.0..90.0);
            self.targets.push(ClickTarget {
                id: self.next_id,
                x,
                y,
                ttl: self.lifetime,
            });
            self.next_id += 1;
        }
    }

    pub fn hit(&mut self, target_id: u32) -> Result<u32, GameError> {
        let idx = self
            .targets
            .iter()
            .position(|t| t.id == target_id)
            .ok_or(GameError::NoSuchTarget(target_id))?;
        self.targets.remove(idx);
        self.score += 1;
        Ok(self.score)
    }

    pub fn render(&self) -> String {
        let mut out = format!(
            "⚡ Quick Click | score {} | {} left\n",
            self.score, self.time_left
        );
        if self.targets.is_empty() {
            out.push_str("(waiting for a target...)\n");
        }
        for t in &self.targets {
            out.push_str(&format!("  🎯 #{} at ({:.0}, {:.0})\n", t.id, t.x, t.y));
        }
        out
    }
}
