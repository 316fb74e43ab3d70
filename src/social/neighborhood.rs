//! The squirrel neighborhood: seeded neighbors, friends, friend requests and
//! nut notes.

use chrono::{DateTime, Duration, Utc};
use log::{debug, info};
use uuid::Uuid;

use super::errors::SocialError;
use super::time_ago;
use crate::care::Personality;
use crate::logutil::escape_log;
use crate::text::TextCatalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    pub id: &'static str,
    pub name: &'static str,
    pub squirrel_name: &'static str,
    pub level: u32,
    pub mood: &'static str,
    pub online: bool,
    pub last_seen: &'static str,
    pub nuts: u32,
    pub achievements: u32,
    pub personality: Personality,
}

impl Neighbor {
    pub fn mood_emoji(&self) -> &'static str {
        match self.mood {
            "happy" => "😊",
            "playful" => "😄",
            "sleepy" => "😴",
            "mischievous" => "😈",
            "curious" => "🤔",
            _ => "😊",
        }
    }
}

pub const NEIGHBORS: [Neighbor; 5] = [
    Neighbor {
        id: "1",
        name: "AcornHunter42",
        squirrel_name: "Whiskers",
        level: 8,
        mood: "happy",
        online: true,
        last_seen: "now",
        nuts: 342,
        achievements: 6,
        personality: Personality::Energetic,
    },
    Neighbor {
        id: "2",
        name: "TreeClimber",
        squirrel_name: "Fluffy",
        level: 12,
        mood: "playful",
        online: false,
        last_seen: "2h ago",
        nuts: 567,
        achievements: 9,
        personality: Personality::Curious,
    },
    Neighbor {
        id: "3",
        name: "NutCollector",
        squirrel_name: "Squeaky",
        level: 5,
        mood: "sleepy",
        online: true,
        last_seen: "now",
        nuts: 189,
        achievements: 3,
        personality: Personality::Sleepy,
    },
    Neighbor {
        id: "4",
        name: "ForestFriend",
        squirrel_name: "Chippy",
        level: 15,
        mood: "happy",
        online: false,
        last_seen: "1h ago",
        nuts: 823,
        achievements: 12,
        personality: Personality::Friendly,
    },
    Neighbor {
        id: "5",
        name: "BranchJumper",
        squirrel_name: "Nutmeg",
        level: 7,
        mood: "mischievous",
        online: true,
        last_seen: "now",
        nuts: 234,
        achievements: 4,
        personality: Personality::Mischievous,
    },
];

pub const LEADERBOARD_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NutNote {
    pub id: String,
    pub from: String,
    pub to: Option<String>,
    pub message: String,
    pub emoji: String,
    pub sent_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Neighborhood {
    friends: Vec<String>,
    requests: Vec<String>,
    notes: Vec<NutNote>,
}

impl Neighborhood {
    /// Neighborhood with the starter friends, requests and notes. Note ages
    /// are relative to `now`.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        let note = |from: &str, message: &str, emoji: &str, age: Duration| NutNote {
            id: Uuid::new_v4().to_string(),
            from: from.to_string(),
            to: None,
            message: message.to_string(),
            emoji: emoji.to_string(),
            sent_at: now - age,
        };
        Self {
            friends: vec!["AcornHunter42".to_string(), "ForestFriend".to_string()],
            requests: vec!["TreeClimber".to_string(), "NutCollector".to_string()],
            notes: vec![
                note("AcornHunter42", "Your squirrel looks so happy! 🌰", "🌰", Duration::minutes(5)),
                note("TreeClimber", "Want to be squirrel friends?", "🤝", Duration::hours(1)),
                note("ForestFriend", "Awesome nest decorations!", "🏠", Duration::hours(2)),
            ],
        }
    }

    pub fn neighbors(&self) -> &'static [Neighbor] {
        &NEIGHBORS
    }

    /// Look a neighbor up by id or owner name.
    pub fn find(&self, key: &str) -> Option<&'static Neighbor> {
        let key = key.trim();
        NEIGHBORS
            .iter()
            .find(|n| n.id == key || n.name.eq_ignore_ascii_case(key))
    }

    pub fn friends(&self) -> &[String] {
        &self.friends
    }

    pub fn requests(&self) -> &[String] {
        &self.requests
    }

    /// Newest first.
    pub fn notes(&self) -> &[NutNote] {
        &self.notes
    }

    pub fn is_friend(&self, name: &str) -> bool {
        self.friends.iter().any(|f| f.eq_ignore_ascii_case(name))
    }

    fn take_request(&mut self, name: &str) -> Result<String, SocialError> {
        let idx = self
            .requests
            .iter()
            .position(|r| r.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| SocialError::NoRequest(name.trim().to_string()))?;
        Ok(self.requests.remove(idx))
    }

    pub fn accept(&mut self, name: &str) -> Result<String, SocialError> {
        let who = self.take_request(name)?;
        if !self.is_friend(&who) {
            self.friends.push(who.clone());
        }
        info!("accepted friend request from {}", who);
        Ok(who)
    }

    pub fn decline(&mut self, name: &str) -> Result<String, SocialError> {
        let who = self.take_request(name)?;
        debug!("declined friend request from {}", who);
        Ok(who)
    }

    /// Send a nut note to neighbor `to`; the note lands at the top of the list.
    pub fn send_note(
        &mut self,
        from: &str,
        to: &str,
        message: &str,
        emoji: &str,
        now: DateTime<Utc>,
    ) -> Result<&NutNote, SocialError> {
        let neighbor = self
            .find(to)
            .ok_or_else(|| SocialError::NotFound(to.trim().to_string()))?;
        let message = message.trim();
        if message.is_empty() {
            return Err(SocialError::EmptyContent);
        }
        info!("nut note to {}: {}", neighbor.name, escape_log(message));
        self.notes.insert(
            0,
            NutNote {
                id: Uuid::new_v4().to_string(),
                from: from.to_string(),
                to: Some(neighbor.name.to_string()),
                message: message.to_string(),
                emoji: emoji.to_string(),
                sent_at: now,
            },
        );
        Ok(&self.notes[0])
    }

    pub fn visit(&self, key: &str, texts: &TextCatalog) -> Result<String, SocialError> {
        let n = self
            .find(key)
            .ok_or_else(|| SocialError::NotFound(key.trim().to_string()))?;
        let mut out = format!(
            "{} {} (by {}) | Lv.{} | {} 🌰 | {} achievements\n",
            n.mood_emoji(),
            n.squirrel_name,
            n.name,
            n.level,
            n.nuts,
            n.achievements
        );
        out.push_str(&texts.text_with(
            "socialHub.neighborhood.visit",
            &[("squirrel", &n.squirrel_name), ("trait", &n.personality.label())],
        ));
        out.push('\n');
        Ok(out)
    }

    /// Neighbors ranked by nut count, highest first.
    pub fn leaderboard(&self) -> Vec<&'static Neighbor> {
        let mut ranked: Vec<&'static Neighbor> = NEIGHBORS.iter().collect();
        ranked.sort_by(|a, b| b.nuts.cmp(&a.nuts));
        ranked.truncate(LEADERBOARD_SIZE);
        ranked
    }

    /// Case-insensitive match on owner or squirrel name. An empty query
    /// returns everyone.
    pub fn search(&self, query: &str) -> Vec<&'static Neighbor> {
        let q = query.trim().to_lowercase();
        NEIGHBORS
            .iter()
            .filter(|n| {
                n.name.to_lowercase().contains(&q) || n.squirrel_name.to_lowercase().contains(&q)
            })
            .collect()
    }

    pub fn format_neighbors(&self) -> String {
        let mut out = String::from("🏘️ Squirrel Neighborhood\n");
        for n in NEIGHBORS.iter() {
            let seen = if n.online {
                "Online".to_string()
            } else {
                format!("Last seen {}", n.last_seen)
            };
            out.push_str(&format!(
                "  [{}] {} {} by {} | Lv.{} | {} 🌰 | {} | {}\n",
                n.id,
                n.mood_emoji(),
                n.squirrel_name,
                n.name,
                n.level,
                n.nuts,
                n.personality.label(),
                seen
            ));
        }
        out
    }

    pub fn format_friends(&self, query: &str, texts: &TextCatalog) -> String {
        let mut out = format!("{} ({})\n", texts.text("socialHub.friends.title"), self.friends.len());
        let matches = self.search(query);
        if matches.is_empty() {
            out.push_str(&texts.text("socialHub.friends.noFriends"));
            out.push('\n');
        }
        for n in matches {
            let status = if n.online {
                texts.text("socialHub.friends.online")
            } else {
                texts.text("socialHub.friends.offline")
            };
            let marker = if self.is_friend(n.name) { "★" } else { " " };
            out.push_str(&format!(
                "  {} {} ({}) - {}\n",
                marker, n.name, n.squirrel_name, status
            ));
        }
        if !self.requests.is_empty() {
            out.push_str(&format!("Friend requests: {}\n", self.requests.join(", ")));
        }
        out
    }

    pub fn format_leaderboard(&self, texts: &TextCatalog) -> String {
        let mut out = texts.text("socialHub.neighborhood.leaderboard");
        out.push('\n');
        for (rank, n) in self.leaderboard().iter().enumerate() {
            let medal = match rank {
                0 => "👑",
                1 => "🥈",
                2 => "🥉",
                _ => "  ",
            };
            out.push_str(&format!(
                "{} {:>2}. {} ({}) - {} 🌰\n",
                medal,
                rank + 1,
                n.squirrel_name,
                n.name,
                n.nuts
            ));
        }
        out
    }

    pub fn format_notes(&self, now: DateTime<Utc>, texts: &TextCatalog) -> String {
        let mut out = format!("Nut Notes ({})\n", self.notes.len());
        for note in &self.notes {
            out.push_str(&format!(
                "  {} {}: {} ({})\n",
                note.emoji,
                note.from,
                note.message,
                time_ago(note.sent_at, now, texts)
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hood() -> Neighborhood {
        Neighborhood::seeded(Utc::now())
    }

    #[test]
    fn leaderboard_sorted_by_nuts() {
        let names: Vec<&str> = hood().leaderboard().iter().map(|n| n.name).collect();
        assert_eq!(
            names,
            vec!["ForestFriend", "TreeClimber", "AcornHunter42", "BranchJumper", "NutCollector"]
        );
    }

    #[test]
    fn search_matches_owner_or_squirrel() {
        let h = hood();
        assert_eq!(h.search("fluff")[0].name, "TreeClimber");
        assert_eq!(h.search("ACORN")[0].squirrel_name, "Whiskers");
        assert_eq!(h.search("").len(), 5);
        assert!(h.search("zzz").is_empty());
    }

    #[test]
    fn accept_and_decline_requests() {
        let mut h = hood();
        assert_eq!(h.accept("treeclimber"), Ok("TreeClimber".to_string()));
        assert!(h.is_friend("TreeClimber"));
        assert_eq!(h.decline("NutCollector"), Ok("NutCollector".to_string()));
        assert!(!h.is_friend("NutCollector"));
        assert!(h.requests().is_empty());
        assert_eq!(
            h.accept("TreeClimber"),
            Err(SocialError::NoRequest("TreeClimber".to_string()))
        );
    }

    #[test]
    fn notes_are_newest_first() {
        let mut h = hood();
        let now = Utc::now();
        let note = h.send_note("You", "3", "  hi there  ", "🌰", now).unwrap();
        assert_eq!(note.message, "hi there");
        assert_eq!(note.to.as_deref(), Some("NutCollector"));
        assert_eq!(h.notes().len(), 4);
        assert_eq!(h.notes()[0].from, "You");
        assert_eq!(h.send_note("You", "3", "   ", "🌰", now), Err(SocialError::EmptyContent));
        assert!(matches!(
            h.send_note("You", "99", "hey", "🌰", now),
            Err(SocialError::NotFound(_))
        ));
    }

    #[test]
    fn visit_describes_personality() {
        let texts = TextCatalog::builtin();
        let out = hood().visit("5", &texts).unwrap();
        assert!(out.contains("Nutmeg is Mischievous and loves to play!"));
        assert!(hood().visit("nobody", &texts).is_err());
    }
}
