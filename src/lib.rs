//! # Squirrel Haven - a cozy community hub for the terminal
//!
//! Squirrel Haven is the home of a friendly Discord community, rebuilt as an
//! interactive terminal session. Everything runs locally and lives only as
//! long as the session.
//!
//! ## Features
//!
//! - **Squirrel Care**: a virtual squirrel with decaying hunger, energy,
//!   happiness and health, care actions, levels, achievements and accessories.
//! - **Mini-Games**: Nut Catcher, Squirrel Memory and Quick Click, driven by a
//!   game clock, with per-session high scores.
//! - **Easter Eggs**: hidden unlocks behind key sequences, click streaks, the
//!   time of day and a few secret commands.
//! - **Social Hub**: a mocked neighborhood with friends, nut notes, a
//!   leaderboard and a community feed with likes and comments.
//! - **Community Pages**: rules, roles, events, highlights, FAQ and the invite.
//! - **Localized Text**: all copy comes from a JSON document with `{key}`
//!   placeholders.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use squirrelhaven::config::Config;
//! use squirrelhaven::haven::HavenServer;
//! use squirrelhaven::text::TextCatalog;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.toml").await?;
//!     let texts = TextCatalog::load(&config.text.path).await;
//!     let mut server = HavenServer::new(config, texts);
//!     server.run().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`haven`] - command parser and the session event loop
//! - [`care`] - squirrel state, actions, leveling and achievements
//! - [`games`] - mini-game sessions and the game center
//! - [`eggs`] - easter-egg triggers
//! - [`social`] - neighborhood and community feed
//! - [`community`] - static info pages, mascot and footer secret
//! - [`text`] - localized text lookup
//! - [`config`] - configuration loading and validation
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  HavenServer    │ ← stdin lines, decay timer, game clock
//! └─────────────────┘
//!          │  Event (one at a time)
//! ┌─────────────────┐
//! │ care · games ·  │ ← plain state machines, injected RNG
//! │ eggs · social   │
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │  TextCatalog    │ ← all user-facing copy
//! └─────────────────┘
//! ```

pub mod care;
pub mod community;
pub mod config;
pub mod eggs;
pub mod games;
pub mod haven;
pub mod logutil;
pub mod social;
pub mod text;
