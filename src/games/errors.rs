use thiserror::Error;

/// Rejected mini-game interactions. None of these end or alter a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("unknown game: {0}")]
    UnknownGame(String),

    #[error("{0} is not available yet")]
    Unavailable(&'static str),

    #[error("no game is running")]
    NotRunning,

    #[error("that move doesn't apply to {0}")]
    WrongGame(&'static str),

    #[error("missed nut #{0}")]
    Missed(u32),

    #[error("no such nut: #{0}")]
    NoSuchNut(u32),

    #[error("no such target: #{0}")]
    NoSuchTarget(u32),

    #[error("card {0} is out of range")]
    CardOutOfRange(usize),

    #[error("card {0} is already face up")]
    CardFaceUp(usize),

    #[error("two cards are already flipped")]
    PairPending,
}
