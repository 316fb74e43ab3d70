//! # Haven Runtime
//!
//! The interactive session. [`CommandParser`] turns typed lines into
//! [`Command`]s and [`HavenServer`] applies them, together with the care
//! decay and mini-game timers, as a single ordered stream of [`Event`]s.

pub mod commands;
pub mod server;

pub use commands::{key_code, Command, CommandParser, HELP_TEXT};
pub use server::{Event, HavenServer};
