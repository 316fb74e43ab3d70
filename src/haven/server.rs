//! The haven session: owns every piece of state and applies events to it
//! one at a time.

use anyhow::Result;
use chrono::{Timelike, Utc};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;
use std::time::{Duration, Instant};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

use super::commands::{Command, CommandParser, HELP_TEXT};
use crate::care::{
    format_achievements, format_shop, format_status, find_accessory, ActionReport, CareAction,
    CareError, Squirrel,
};
use crate::community::{
    format_footer, format_invite, format_overview, format_section, reveal_footer_secret, Mascot,
    Section,
};
use crate::config::Config;
use crate::eggs::{format_unlock, EasterEgg, EasterEggs};
use crate::games::{game_info, resolve_game, FlipOutcome, GameCenter, GameError, ScoreRecord};
use crate::logutil::escape_log;
use crate::social::{format_profile, Feed, Neighborhood, SocialError};
use crate::text::TextCatalog;

/// Everything that can change session state.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// One line typed by the player.
    Input(String),
    /// Care decay timer fired.
    DecayTick,
    /// Mini-game clock fired.
    GameTick,
}

const LOW_GAUGE: f32 = 20.0;

pub struct HavenServer {
    config: Config,
    texts: TextCatalog,
    parser: CommandParser,
    squirrel: Squirrel,
    games: GameCenter,
    eggs: EasterEggs,
    neighborhood: Neighborhood,
    feed: Feed,
    mascot: Mascot,
    rng: StdRng,
    running: bool,
}

impl HavenServer {
    pub fn new(config: Config, texts: TextCatalog) -> Self {
        Self::with_rng(config, texts, StdRng::from_entropy())
    }

    pub fn with_rng(config: Config, texts: TextCatalog, rng: StdRng) -> Self {
        let squirrel = Squirrel::new(&config.care.squirrel_name)
            .with_wallet(config.care.starting_nuts, config.care.starting_coins);
        let now = Utc::now();
        Self {
            games: GameCenter::new(config.games.clone()),
            config,
            texts,
            parser: CommandParser::new(),
            squirrel,
            eggs: EasterEggs::new(),
            neighborhood: Neighborhood::seeded(now),
            feed: Feed::seeded(now),
            mascot: Mascot::default(),
            rng,
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn squirrel(&self) -> &Squirrel {
        &self.squirrel
    }

    pub fn games(&self) -> &GameCenter {
        &self.games
    }

    pub fn eggs(&self) -> &EasterEggs {
        &self.eggs
    }

    pub fn feed(&self) -> &Feed {
        &self.feed
    }

    pub fn neighborhood(&self) -> &Neighborhood {
        &self.neighborhood
    }

    /// Greeting shown once at session start. `hour` is the local hour, used
    /// for the night-owl egg.
    pub fn startup(&mut self, hour: u32) -> Vec<String> {
        let mut out = vec![
            format_overview(&self.config.haven, &self.texts),
            format_status(&self.squirrel, &self.texts),
            "Type HELP for commands.".to_string(),
        ];
        if let Some(egg) = self.eggs.check_hour(hour) {
            out.push(self.egg_line(egg));
        }
        out
    }

    /// Apply one event to the session and return the lines to show.
    pub fn apply(&mut self, event: Event) -> Vec<String> {
        match event {
            Event::Input(line) => {
                let cmd = self.parser.parse(&line);
                debug!("input '{}' -> {:?}", escape_log(&line), cmd);
                self.handle(cmd)
            }
            Event::DecayTick => self.on_decay(),
            Event::GameTick => self.on_game_tick(),
        }
    }

    fn on_decay(&mut self) -> Vec<String> {
        let before = self.squirrel.clone();
        self.squirrel.decay();
        let name = &self.squirrel.name;
        let mut out = Vec::new();
        let crossed = |old: f32, new: f32| old > LOW_GAUGE && new <= LOW_GAUGE;
        if crossed(before.hunger.value(), self.squirrel.hunger.value()) {
            out.push(format!("🌰 {} is getting hungry!", name));
        }
        if crossed(before.energy.value(), self.squirrel.energy.value()) {
            out.push(format!("😴 {} is worn out and needs a rest.", name));
        }
        if crossed(before.happiness.value(), self.squirrel.happiness.value()) {
            out.push(format!("😢 {} is feeling lonely.", name));
        }
        if before.health.value() > self.squirrel.health.value() && self.squirrel.health.is_empty() {
            warn!("{} has run out of health", name);
        }
        out
    }

    fn on_game_tick(&mut self) -> Vec<String> {
        if self.games.active().is_none() {
            return Vec::new();
        }
        match self.games.tick(&mut self.rng) {
            Some(record) => self.finished_lines(&record),
            None => self
                .games
                .active()
                .map(|g| vec![g.render()])
                .unwrap_or_default(),
        }
    }

    fn finished_lines(&self, record: &ScoreRecord) -> Vec<String> {
        let info = game_info(record.game);
        vec![
            self.texts.text_with(
                "games.finished",
                &[("game", &info.name), ("score", &record.score)],
            ),
            self.texts.text_with(
                "games.highScore",
                &[("score", &self.games.high_score(record.game))],
            ),
        ]
    }

    fn egg_line(&self, egg: &EasterEgg) -> String {
        format!(
            "{}\n{} Reward: {}",
            format_unlock(egg, &self.texts),
            egg.description,
            egg.reward
        )
    }

    fn failed(&self, reason: &dyn std::fmt::Display) -> Vec<String> {
        vec![self.texts.text_with("care.failed", &[("reason", reason)])]
    }

    fn care_result(&self, result: Result<ActionReport, CareError>) -> Vec<String> {
        let report = match result {
            Ok(report) => report,
            Err(e) => return self.failed(&e),
        };
        let name = self.squirrel.name.clone();
        let mut out = vec![match report.action {
            CareAction::Feed(food) => self
                .texts
                .text_with("care.fed", &[("name", &name), ("food", &food.info().name)]),
            CareAction::Play => self.texts.text_with("care.played", &[("name", &name)]),
            CareAction::Rest => self.texts.text_with("care.rested", &[("name", &name)]),
            CareAction::Heal => self.texts.text_with("care.healed", &[("name", &name)]),
            CareAction::Buy(id) => {
                let item = find_accessory(id).map(|a| a.name).unwrap_or(id);
                self.texts
                    .text_with("care.bought", &[("name", &name), ("item", &item)])
            }
        }];
        if let Some(up) = report.level_up {
            out.push(self.texts.text_with(
                "care.levelUp",
                &[
                    ("name", &name),
                    ("level", &up.new_level),
                    ("coins", &up.coins_awarded),
                ],
            ));
        }
        for id in report.achievements {
            let title = crate::care::find_achievement(id).map(|a| a.name).unwrap_or(id);
            out.push(self.texts.text_with("care.achievement", &[("title", &title)]));
        }
        let mood = self.squirrel.mood();
        out.push(self.texts.text_with(
            "care.moodLine",
            &[("name", &name), ("mood", &mood.label()), ("emoji", &mood.emoji())],
        ));
        out
    }

    fn game_error(&self, e: GameError) -> Vec<String> {
        vec![format!("🎮 {}", e)]
    }

    fn board(&self) -> Vec<String> {
        match self.games.active() {
            Some(game) => vec![game.render()],
            None => vec![format_status(&self.squirrel, &self.texts)],
        }
    }

    fn social_error(&self, e: SocialError) -> Vec<String> {
        vec![format!("💬 {}", e)]
    }

    fn handle(&mut self, cmd: Command) -> Vec<String> {
        let player = self.config.haven.player_name.clone();
        let now = Utc::now();
        match cmd {
            Command::Help => vec![HELP_TEXT.to_string()],
            Command::Look => self.board(),
            Command::Status => vec![format_status(&self.squirrel, &self.texts)],
            Command::Feed(food) => {
                let result = self.squirrel.feed(food);
                self.care_result(result)
            }
            Command::Play => {
                let result = self.squirrel.play();
                self.care_result(result)
            }
            Command::Rest => {
                let result = self.squirrel.rest();
                self.care_result(result)
            }
            Command::Heal => {
                let result = self.squirrel.heal();
                self.care_result(result)
            }
            Command::Shop => vec![format_shop(&self.squirrel)],
            Command::Buy(id) => {
                let result = self.squirrel.buy_accessory(&id);
                self.care_result(result)
            }
            Command::Achievements => vec![format_achievements(&self.squirrel)],

            Command::Games => vec![
                format!(
                    "{}\n{}",
                    self.texts.text("games.title"),
                    self.texts.text("games.subtitle")
                ),
                crate::games::format_games_menu(),
            ],
            Command::Start(name) => {
                let game = match resolve_game(&name) {
                    Ok(game) => game,
                    Err(e) => return self.game_error(e),
                };
                match self.games.start(game.kind, &mut self.rng) {
                    Ok(info) => {
                        let time = self.games.active().map(|g| g.time_left()).unwrap_or(0);
                        let mut out = vec![self
                            .texts
                            .text_with("games.started", &[("game", &info.name), ("time", &time)])];
                        out.extend(self.board());
                        out
                    }
                    Err(e) => self.game_error(e),
                }
            }
            Command::Quit => match self.games.quit() {
                Ok(kind) => vec![format!("Left {}.", game_info(kind).name)],
                Err(e) => self.game_error(e),
            },
            Command::Move(x) => match self.games.move_basket(x) {
                Ok(at) => vec![format!("🧺 Basket at {:.0}", at)],
                Err(e) => self.game_error(e),
            },
            Command::Catch(id) => match self.games.catch(id) {
                Ok(score) => vec![format!("🌰 Caught nut #{}! Score {}", id, score)],
                Err(e) => self.game_error(e),
            },
            Command::Hit(id) => match self.games.hit(id) {
                Ok(score) => vec![format!("🎯 Hit #{}! Score {}", id, score)],
                Err(e) => self.game_error(e),
            },
            Command::Flip(idx) => match self.games.flip(idx) {
                Ok((outcome, finished)) => {
                    let mut out = vec![match outcome {
                        FlipOutcome::Revealed => format!("Card {} flipped.", idx),
                        FlipOutcome::Matched => "✨ It's a match!".to_string(),
                        FlipOutcome::Mismatch => "No match. The cards turn back soon.".to_string(),
                    }];
                    match finished {
                        Some(record) => out.extend(self.finished_lines(&record)),
                        None => out.extend(self.board()),
                    }
                    out
                }
                Err(e) => self.game_error(e),
            },
            Command::Scores => {
                if self.games.history().is_empty() {
                    vec![self.texts.text("games.noScores")]
                } else {
                    vec![self.games.format_scores()]
                }
            }

            Command::Eggs => vec![self.eggs.format_collection(&self.texts)],
            Command::Keys(codes) => {
                let mut out = Vec::new();
                for code in &codes {
                    if let Some(egg) = self.eggs.press_key(code) {
                        out.push(self.egg_line(egg));
                    }
                }
                if out.is_empty() {
                    out.push(format!("⌨️ {} key(s) pressed.", codes.len()));
                }
                out
            }
            Command::Click => match self.eggs.click_squirrel(Instant::now()) {
                Some(egg) => vec![self.egg_line(egg)],
                None => vec![format!("🐿️ *squeak* ({})", self.eggs.click_count())],
            },
            Command::Dance(secs) => {
                let mut out = vec![format!("🕺 {} dances for {}s!", self.squirrel.name, secs)];
                if let Some(egg) = self.eggs.dance(Duration::from_secs(secs)) {
                    out.push(self.egg_line(egg));
                }
                out
            }
            Command::Rainbow => match self.eggs.trigger("rainbow") {
                Some(egg) => vec!["🌈 The sky fills with color!".to_string(), self.egg_line(egg)],
                None => vec!["🌈 The rainbow shimmers again.".to_string()],
            },
            Command::Footer => {
                let (secret, egg) = reveal_footer_secret(&mut self.eggs, &self.texts);
                let mut out = vec![secret];
                if let Some(egg) = egg {
                    out.push(self.egg_line(egg));
                }
                out
            }

            Command::Neighbors => vec![self.neighborhood.format_neighbors()],
            Command::Visit(who) => match self.neighborhood.visit(&who, &self.texts) {
                Ok(text) => vec![text],
                Err(e) => self.social_error(e),
            },
            Command::Note { to, message } => {
                match self.neighborhood.send_note(&player, &to, &message, "🌰", now) {
                    Ok(note) => {
                        let message = note.message.clone();
                        vec![self
                            .texts
                            .text_with("socialHub.messages.noteSent", &[("message", &message)])]
                    }
                    Err(e) => self.social_error(e),
                }
            }
            Command::Notes => vec![self.neighborhood.format_notes(now, &self.texts)],
            Command::Friends(query) => vec![self
                .neighborhood
                .format_friends(query.as_deref().unwrap_or(""), &self.texts)],
            Command::Accept(name) => match self.neighborhood.accept(&name) {
                Ok(who) => vec![format!("🤝 You and {} are now friends!", who)],
                Err(e) => self.social_error(e),
            },
            Command::Decline(name) => match self.neighborhood.decline(&name) {
                Ok(who) => vec![format!("Declined the request from {}.", who)],
                Err(e) => self.social_error(e),
            },
            Command::Leaderboard => vec![self.neighborhood.format_leaderboard(&self.texts)],
            Command::Posts => vec![self.feed.format_feed(now, &self.texts)],
            Command::Post(text) => match self.feed.add_post(&player, "🐿️", &text, now) {
                Ok(_) => vec![self.texts.text("socialHub.messages.postShared")],
                Err(e) => self.social_error(e),
            },
            Command::Like(key) => match self.feed.toggle_like(&key) {
                Ok(post) => vec![format!(
                    "{} {} likes on {}'s post",
                    if post.liked { "❤️" } else { "🤍" },
                    post.likes,
                    post.author
                )],
                Err(e) => self.social_error(e),
            },
            Command::Comment { post, text } => {
                match self.feed.add_comment(&post, &player, "🐿️", &text, now) {
                    Ok(_) => vec![self.texts.text("socialHub.messages.commentAdded")],
                    Err(e) => self.social_error(e),
                }
            }
            Command::Profile => vec![format_profile(
                &player,
                &self.squirrel,
                self.neighborhood.friends().len(),
                &self.texts,
            )],

            Command::Info(None) => vec![format_overview(&self.config.haven, &self.texts)],
            Command::Info(Some(name)) => match name.parse::<Section>() {
                Ok(section) => vec![format_section(section)],
                Err(e) => vec![e],
            },
            Command::Join => vec![format_invite(&self.config.haven, &self.texts)],
            Command::Mascot => vec![self.mascot.click(&self.texts)],
            Command::Exit => {
                self.running = false;
                info!("session closed by player");
                vec![
                    format!("👋 {} waves goodbye!", self.squirrel.name),
                    format_footer(&self.config.haven, &self.texts),
                ]
            }

            Command::Unknown(verb) => vec![format!("Unknown command '{}'. Type HELP.", verb)],
            Command::Invalid(usage) => vec![usage],
        }
    }

    /// Drive the session from stdin until EXIT, end of input or Ctrl-C.
    ///
    /// Timers and input all feed the same loop, so every event sees the
    /// state left by the one before it.
    pub async fn run(&mut self) -> Result<()> {
        info!(
            "{} session started with {}",
            self.config.haven.name, self.squirrel.name
        );
        let hour = chrono::Local::now().hour();
        let greeting = self.startup(hour);
        print_lines(&greeting);

        let (tx, mut rx) = mpsc::unbounded_channel::<String>();
        let reader = tokio::spawn(async move {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            loop {
                match lines.next_line().await {
                    Ok(Some(line)) => {
                        if tx.send(line).is_err() {
                            break;
                        }
                    }
                    Ok(None) => break,
                    Err(e) => {
                        warn!("stdin read error: {}", e);
                        break;
                    }
                }
            }
        });

        let mut decay = tokio::time::interval(self.config.care.decay_interval());
        decay.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // Both intervals fire immediately on the first poll.
        decay.tick().await;
        let mut game_clock = tokio::time::interval(self.config.games.tick());
        game_clock.set_missed_tick_behavior(MissedTickBehavior::Delay);
        game_clock.tick().await;

        while self.running {
            let replies = tokio::select! {
                _ = decay.tick() => self.apply(Event::DecayTick),
                _ = game_clock.tick() => self.apply(Event::GameTick),
                line = rx.recv() => match line {
                    Some(line) => self.apply(Event::Input(line)),
                    None => {
                        info!("input closed");
                        break;
                    }
                },
                _ = tokio::signal::ctrl_c() => {
                    info!("Received shutdown signal");
                    break;
                }
            };
            print_lines(&replies);
        }

        reader.abort();
        info!("session ended");
        Ok(())
    }
}

fn print_lines(lines: &[String]) {
    if lines.is_empty() {
        return;
    }
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for line in lines {
        let _ = writeln!(out, "{}", line.trim_end());
    }
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server() -> HavenServer {
        HavenServer::with_rng(
            Config::default(),
            TextCatalog::builtin(),
            StdRng::seed_from_u64(99),
        )
    }

    fn say(s: &mut HavenServer, line: &str) -> String {
        s.apply(Event::Input(line.to_string())).join("\n")
    }

    #[test]
    fn feeding_spends_a_nut() {
        let mut s = server();
        let out = say(&mut s, "feed acorn");
        assert!(out.contains("Nutkin munches the acorn."), "{}", out);
        assert_eq!(s.squirrel().nuts, 4);
    }

    #[test]
    fn refusals_keep_state() {
        let mut s = server();
        let out = say(&mut s, "heal");
        assert!(out.contains("Can't do that"), "{}", out);
        assert_eq!(s.squirrel().coins, 50);
    }

    #[test]
    fn decay_warns_once_when_hungry() {
        let mut s = server();
        let mut warnings = 0;
        for _ in 0..45 {
            warnings += s
                .apply(Event::DecayTick)
                .iter()
                .filter(|l| l.contains("hungry"))
                .count();
        }
        assert_eq!(warnings, 1);
        assert!(s.squirrel().hunger.value() <= 20.0);
    }

    #[test]
    fn game_tick_without_game_is_quiet() {
        let mut s = server();
        assert!(s.apply(Event::GameTick).is_empty());
    }

    #[test]
    fn exit_stops_the_session() {
        let mut s = server();
        let out = say(&mut s, "exit");
        assert!(!s.is_running());
        assert!(out.contains("Made with squirrels and lots of nuts!"), "{}", out);
        assert!(out.contains("Type FOOTER"), "{}", out);
    }

    #[test]
    fn midnight_greeting() {
        let mut s = server();
        let out = s.startup(23).join("\n");
        assert!(out.contains("Night Owl"));
        let mut s = server();
        assert!(!s.startup(12).join("\n").contains("Night Owl"));
    }
}
