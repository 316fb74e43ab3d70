use thiserror::Error;

use super::squirrel::Currency;

/// Reasons a care action was refused. State is untouched whenever one of
/// these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CareError {
    /// Not enough nuts or coins to pay for the action.
    #[error("not enough {currency}: need {needed}, have {available}")]
    InsufficientFunds {
        currency: Currency,
        needed: u32,
        available: u32,
    },

    /// Energy below the amount the action requires.
    #[error("too tired: needs {required} energy")]
    TooTired { required: u32 },

    /// Healing requested while health is already full.
    #[error("already in perfect health")]
    AlreadyHealthy,

    #[error("unknown food: {0}")]
    UnknownFood(String),

    #[error("unknown accessory: {0}")]
    UnknownAccessory(String),

    #[error("accessory already owned: {0}")]
    AlreadyOwned(String),
}
