//! Squirrel Memory: eight pairs of forest symbols, shuffled face down.
//!
//! Flip two cards per move. A matching pair stays face up and scores; a
//! mismatched pair stays visible until the next game tick, then flips back.
//! Matching every pair stops the clock, which ends the session.

use rand::seq::SliceRandom;
use rand::Rng;

use super::errors::GameError;

pub const SYMBOLS: [&str; 8] = ["🌰", "🍄", "🌿", "🐿️", "🌳", "🍂", "🌲", "⭐"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: usize,
    pub symbol: &'static str,
    pub flipped: bool,
    pub matched: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    /// First card of a move is face up.
    Revealed,
    Matched,
    /// Pair didn't match; both cards turn back on the next tick.
    Mismatch,
}

#[derive(Debug, Clone)]
pub struct MemoryMatch {
    pub cards: Vec<Card>,
    pub pending: Vec<usize>,
    pub moves: u32,
    pub score: u32,
    pub time_left: u32,
}

impl MemoryMatch {
    pub fn new<R: Rng + ?Sized>(duration_ticks: u32, rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(SYMBOLS.len() * 2);
        for (i, &symbol) in SYMBOLS.iter().enumerate() {
            for id in [i * 2, i * 2 + 1] {
                cards.push(Card { id, symbol, flipped: false, matched: false });
            }
        }
        cards.shuffle(rng);
        Self {
            cards,
            pending: Vec::new(),
            moves: 0,
            score: 0,
            time_left: duration_ticks,
        }
    }

    pub fn pairs_total(&self) -> usize {
        self.cards.len() / 2
    }

    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(|c| c.matched)
    }

    pub fn is_over(&self) -> bool {
        self.time_left == 0
    }

    /// Flip the card at board position `index`.
    pub fn flip(&mut self, index: usize) -> Result<FlipOutcome, GameError> {
        if self.is_over() {
            return Err(GameError::NotRunning);
        }
        if self.pending.len() >= 2 {
            return Err(GameError::PairPending);
        }
        let card = self.cards.get(index).ok_or(GameError::CardOutOfRange(index))?;
        if card.flipped || card.matched {
            return Err(GameError::CardFaceUp(index));
        }
        self.cards[index].flipped = true;
        self.pending.push(index);
        if self.pending.len() < 2 {
            return Ok(FlipOutcome::Revealed);
        }

        self.moves += 1;
        let (first, second) = (self.pending[0], self.pending[1]);
        if self.cards[first].symbol == self.cards[second].symbol {
            self.cards[first].matched = true;
            self.cards[second].matched = true;
            self.pending.clear();
            self.score += 1;
            if self.all_matched() {
                self.time_left = 0;
            }
            Ok(FlipOutcome::Matched)
        } else {
            Ok(FlipOutcome::Mismatch)
        }
    }

    /// Advance one tick: count down and turn back a mismatched pair.
    pub fn tick(&mut self) {
        if self.is_over() {
            return;
        }
        self.time_left -= 1;
        if self.pending.len() == 2 {
            for idx in self.pending.drain(..) {
                self.cards[idx].flipped = false;
            }
        }
    }

    pub fn render(&self) -> String {
        let mut out = format!(
            "🧠 Squirrel Memory | {}/{} pairs | {} moves | {} left\n",
            self.score,
            self.pairs_total(),
            self.moves,
            self.time_left
        );
        for (r, cards) in self.cards.chunks(4).enumerate() {
            let line: Vec<String> = cards
                .iter()
                .enumerate()
                .map(|(c, card)| {
                    let idx = r * 4 + c;
                    if card.flipped || card.matched {
                        format!("{:>2}:{}", idx, card.symbol)
                    } else {
                        format!("{:>2}:❓", idx)
                    }
                })
                .collect();
            out.push_str(&line.join("  "));
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn board() -> MemoryMatch {
        let mut rng = StdRng::seed_from_u64(42);
        MemoryMatch::new(60, &mut rng)
    }

    fn pair_positions(game: &MemoryMatch, symbol: &str) -> (usize, usize) {
        let idx: Vec<usize> = game
            .cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.symbol == symbol)
            .map(|(i, _)| i)
            .collect();
        (idx[0], idx[1])
    }

    #[test]
    fn board_has_eight_pairs() {
        let game = board();
        assert_eq!(game.cards.len(), 16);
        for symbol in SYMBOLS {
            assert_eq!(game.cards.iter().filter(|c| c.symbol == symbol).count(), 2);
        }
    }

    #[test]
    fn matching_pair_scores() {
        let mut game = board();
        let (a, b) = pair_positions(&game, "🌰");
        assert_eq!(game.flip(a), Ok(FlipOutcome::Revealed));
        assert_eq!(game.flip(a), Err(GameError::CardFaceUp(a)));
        assert_eq!(game.flip(b), Ok(FlipOutcome::Matched));
        assert_eq!(game.score, 1);
        assert_eq!(game.moves, 1);
        assert!(game.pending.is_empty());
    }

    #[test]
    fn mismatch_flips_back_on_tick() {
        let mut game = board();
        let (a, _) = pair_positions(&game, "🌰");
        let (c, _) = pair_positions(&game, "🍄");
        game.flip(a).unwrap();
        assert_eq!(game.flip(c), Ok(FlipOutcome::Mismatch));
        let (d, _) = pair_positions(&game, "⭐");
        assert_eq!(game.flip(d), Err(GameError::PairPending));
        game.tick();
        assert!(!game.cards[a].flipped);
        assert!(!game.cards[c].flipped);
        assert_eq!(game.score, 0);
        assert_eq!(game.time_left, 59);
    }

    #[test]
    fn clearing_the_board_ends_the_session() {
        let mut game = board();
        for symbol in SYMBOLS {
            let (a, b) = pair_positions(&game, symbol);
            game.flip(a).unwrap();
            game.flip(b).unwrap();
        }
        assert!(game.all_matched());
        assert!(game.is_over());
        assert_eq!(game.score, 8);
    }

    #[test]
    fn out_of_range() {
        let mut game = board();
        assert_eq!(game.flip(16), Err(GameError::CardOutOfRange(16)));
    }
}
