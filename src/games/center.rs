//! Session owner for the mini-games: one running game at a time and the
//! list of finished scores for this session.

use chrono::{DateTime, Utc};
use log::{debug, info};
use rand::Rng;

use super::errors::GameError;
use super::memory::{FlipOutcome, MemoryMatch};
use super::nut_catch::NutCatch;
use super::quick_click::QuickClick;
use super::{game_info, GameKind, MiniGame, Rewards};
use crate::config::GamesConfig;

#[derive(Debug, Clone)]
pub enum ActiveGame {
    NutCatch(NutCatch),
    Memory(MemoryMatch),
    QuickClick(QuickClick),
}

impl ActiveGame {
    pub fn kind(&self) -> GameKind {
        match self {
            ActiveGame::NutCatch(_) => GameKind::NutCatch,
            ActiveGame::Memory(_) => GameKind::MemoryMatch,
            ActiveGame::QuickClick(_) => GameKind::QuickClick,
        }
    }

    pub fn score(&self) -> u32 {
        match self {
            ActiveGame::NutCatch(g) => g.score,
            ActiveGame::Memory(g) => g.score,
            ActiveGame::QuickClick(g) => g.score,
        }
    }

    pub fn time_left(&self) -> u32 {
        match self {
            ActiveGame::NutCatch(g) => g.time_left,
            ActiveGame::Memory(g) => g.time_left,
            ActiveGame::QuickClick(g) => g.time_left,
        }
    }

    pub fn is_over(&self) -> bool {
        self.time_left() == 0
    }

    pub fn render(&self) -> String {
        match self {
            ActiveGame::NutCatch(g) => g.render(),
            ActiveGame::Memory(g) => g.render(),
            ActiveGame::QuickClick(g) => g.render(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRecord {
    pub game: GameKind,
    pub score: u32,
    pub finished_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct GameCenter {
    settings: GamesConfig,
    active: Option<ActiveGame>,
    history: Vec<ScoreRecord>,
}

impl GameCenter {
    pub fn new(settings: GamesConfig) -> Self {
        Self {
            settings,
            active: None,
            history: Vec::new(),
        }
    }

    fn ticks_for(&self, secs: u32) -> u32 {
        let tick_ms = self.settings.tick_ms.max(1);
        let ticks = (secs as u64 * 1000) / tick_ms;
        ticks.clamp(1, u32::MAX as u64) as u32
    }

    pub fn active(&self) -> Option<&ActiveGame> {
        self.active.as_ref()
    }

    pub fn history(&self) -> &[ScoreRecord] {
        &self.history
    }

    /// Start `kind`, replacing (and discarding) any running session.
    pub fn start<R: Rng + ?Sized>(
        &mut self,
        kind: GameKind,
        rng: &mut R,
    ) -> Result<&'static MiniGame, GameError> {
        let info = game_info(kind);
        if let Some(note) = info.status_note {
            debug!("{} refused: {}", info.id, note);
            return Err(GameError::Unavailable(info.name));
        }
        let game = match kind {
            GameKind::NutCatch => ActiveGame::NutCatch(NutCatch::new(
                self.ticks_for(self.settings.nut_catch_secs),
                self.settings.nut_spawn_chance,
            )),
            GameKind::MemoryMatch => {
                ActiveGame::Memory(MemoryMatch::new(self.ticks_for(self.settings.memory_secs), rng))
            }
            GameKind::QuickClick => ActiveGame::QuickClick(QuickClick::new(
                self.ticks_for(self.settings.quick_click_secs),
                self.settings.target_spawn_chance,
                self.settings.target_lifetime_ticks,
            )),
            GameKind::TreeJump => return Err(GameError::Unavailable(info.name)),
        };
        if let Some(prev) = self.active.replace(game) {
            debug!("discarded running {:?} session (score {})", prev.kind(), prev.score());
        }
        info!("started {}", info.id);
        Ok(info)
    }

    /// Abandon the running session without recording it.
    pub fn quit(&mut self) -> Result<GameKind, GameError> {
        let game = self.active.take().ok_or(GameError::NotRunning)?;
        debug!("quit {:?} at score {}", game.kind(), game.score());
        Ok(game.kind())
    }

    /// Advance the running session one tick. Returns the score record when
    /// this tick ended the game.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<ScoreRecord> {
        let game = self.active.as_mut()?;
        match game {
            ActiveGame::NutCatch(g) => g.tick(rng),
            ActiveGame::Memory(g) => g.tick(),
            ActiveGame::QuickClick(g) => g.tick(rng),
        }
        if game.is_over() {
            return self.finish();
        }
        None
    }

    fn finish(&mut self) -> Option<ScoreRecord> {
        let game = self.active.take()?;
        let record = ScoreRecord {
            game: game.kind(),
            score: game.score(),
            finished_at: Utc::now(),
        };
        let info = game_info(record.game);
        if record.score > 0 {
            let Rewards { nuts, coins, exp } = info.rewards;
            info!(
                "{} finished with score {}: earned {} nuts, {} coins, {} exp (not credited)",
                info.id, record.score, nuts, coins, exp
            );
        } else {
            info!("{} finished with score 0", info.id);
        }
        self.history.push(record.clone());
        Some(record)
    }

    fn running_mut(&mut self) -> Result<&mut ActiveGame, GameError> {
        self.active.as_mut().ok_or(GameError::NotRunning)
    }

    pub fn move_basket(&mut self, x: f32) -> Result<f32, GameError> {
        match self.running_mut()? {
            ActiveGame::NutCatch(g) => Ok(g.move_basket(x)),
            other => Err(GameError::WrongGame(game_info(other.kind()).name)),
        }
    }

    pub fn catch(&mut self, nut_id: u32) -> Result<u32, GameError> {
        match self.running_mut()? {
            ActiveGame::NutCatch(g) => g.catch(nut_id),
            other => Err(GameError::WrongGame(game_info(other.kind()).name)),
        }
    }

    /// Flip a memory card. Clearing the board finishes the session right
    /// away, returning its record alongside the outcome.
    pub fn flip(&mut self, index: usize) -> Result<(FlipOutcome, Option<ScoreRecord>), GameError> {
        let outcome = match self.running_mut()? {
            ActiveGame::Memory(g) => g.flip(index)?,
            other => return Err(GameError::WrongGame(game_info(other.kind()).name)),
        };
        let finished = match self.active.as_ref() {
            Some(game) if game.is_over() => self.finish(),
            _ => None,
        };
        Ok((outcome, finished))
    }

    pub fn hit(&mut self, target_id: u32) -> Result<u32, GameError> {
        match self.running_mut()? {
            ActiveGame::QuickClick(g) => g.hit(target_id),
            other => Err(GameError::WrongGame(game_info(other.kind()).name)),
        }
    }

    pub fn high_score(&self, kind: GameKind) -> u32 {
        self.history
            .iter()
            .filter(|r| r.game == kind)
            .map(|r| r.score)
            .max()
            .unwrap_or(0)
    }

    pub fn format_scores(&self) -> String {
        if self.history.is_empty() {
            return "No games finished yet.\n".to_string();
        }
        let mut out = String::from("High scores:\n");
        for game in super::CATALOG.iter().filter(|g| g.is_playable()) {
            let plays = self.history.iter().filter(|r| r.game == game.kind).count();
            if plays == 0 {
                continue;
            }
            out.push_str(&format!(
                "  {} {}: {} ({} played)\n",
                game.emoji,
                game.name,
                self.high_score(game.kind),
                plays
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn center() -> GameCenter {
        GameCenter::new(GamesConfig {
            nut_catch_secs: 3,
            quick_click_secs: 2,
            ..GamesConfig::default()
        })
    }

    #[test]
    fn tree_jump_is_not_startable() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut gc = center();
        assert_eq!(
            gc.start(GameKind::TreeJump, &mut rng).unwrap_err(),
            GameError::Unavailable("Tree Jumper")
        );
        assert!(gc.active().is_none());
    }

    #[test]
    fn session_finishes_and_records() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut gc = center();
        gc.start(GameKind::NutCatch, &mut rng).unwrap();
        assert!(gc.tick(&mut rng).is_none());
        assert!(gc.tick(&mut rng).is_none());
        let record = gc.tick(&mut rng).expect("third tick ends the game");
        assert_eq!(record.game, GameKind::NutCatch);
        assert!(gc.active().is_none());
        assert_eq!(gc.history().len(), 1);
        assert!(gc.tick(&mut rng).is_none());
    }

    #[test]
    fn start_replaces_and_quit_discards() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut gc = center();
        gc.start(GameKind::NutCatch, &mut rng).unwrap();
        gc.start(GameKind::QuickClick, &mut rng).unwrap();
        assert_eq!(gc.active().map(|g| g.kind()), Some(GameKind::QuickClick));
        assert_eq!(gc.quit(), Ok(GameKind::QuickClick));
        assert_eq!(gc.quit(), Err(GameError::NotRunning));
        assert!(gc.history().is_empty());
    }

    #[test]
    fn moves_are_routed_to_the_right_game() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut gc = center();
        assert_eq!(gc.catch(1), Err(GameError::NotRunning));
        gc.start(GameKind::QuickClick, &mut rng).unwrap();
        assert_eq!(gc.move_basket(20.0), Err(GameError::WrongGame("Quick Click")));
        assert!(matches!(gc.flip(0), Err(GameError::WrongGame(_))));
    }

    #[test]
    fn clearing_memory_board_records_immediately() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut gc = center();
        gc.start(GameKind::MemoryMatch, &mut rng).unwrap();
        let cards = match gc.active() {
            Some(ActiveGame::Memory(g)) => g.cards.clone(),
            _ => panic!("memory should be running"),
        };
        let mut last = None;
        for symbol in super::super::memory::SYMBOLS {
            let idx: Vec<usize> = cards
                .iter()
                .enumerate()
                .filter(|(_, c)| c.symbol == symbol)
                .map(|(i, _)| i)
                .collect();
            gc.flip(idx[0]).unwrap();
            last = gc.flip(idx[1]).unwrap().1;
        }
        let record = last.expect("board cleared");
        assert_eq!(record.score, 8);
        assert_eq!(gc.high_score(GameKind::MemoryMatch), 8);
        assert_eq!(gc.high_score(GameKind::NutCatch), 0);
        assert!(gc.format_scores().contains("Squirrel Memory: 8 (1 played)"));
    }

    #[test]
    fn ticks_scale_with_tick_length() {
        let gc = GameCenter::new(GamesConfig {
            tick_ms: 500,
            ..GamesConfig::default()
        });
        assert_eq!(gc.ticks_for(30), 60);
    }
}
