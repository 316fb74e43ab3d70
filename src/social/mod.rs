//! # Social Hub
//!
//! A mocked neighborhood and community feed. Neighbors are a fixed seed;
//! posts, comments, likes and notes live only for the running session.
//!
//! - [`neighborhood`] - neighbors, friends, requests, nut notes, leaderboard
//! - [`feed`] - posts with likes and comments

pub mod errors;
pub mod feed;
pub mod neighborhood;

pub use errors::SocialError;
pub use feed::{Comment, Feed, Post};
pub use neighborhood::{Neighbor, Neighborhood, NutNote, NEIGHBORS};

use chrono::{DateTime, Utc};

use crate::care::{find_achievement, Squirrel};
use crate::text::TextCatalog;

/// Relative age of `then` as seen from `now`, bucketed into minutes, hours
/// and days.
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>, texts: &TextCatalog) -> String {
    let seconds = (now - then).num_seconds();
    if seconds < 60 {
        return texts.text("socialHub.feed.justNow");
    }
    let amount = if seconds < 3600 {
        format!("{}m", seconds / 60)
    } else if seconds < 86_400 {
        format!("{}h", seconds / 3600)
    } else {
        format!("{}d", seconds / 86_400)
    };
    texts.text_with("socialHub.feed.timeAgo", &[("time", &amount)])
}

/// Profile card for the local player, built from their squirrel.
pub fn format_profile(
    player: &str,
    squirrel: &Squirrel,
    friends: usize,
    texts: &TextCatalog,
) -> String {
    let mut out = texts.text("socialHub.profile.title");
    out.push('\n');
    out.push_str(&format!("🐿️ {} with {}\n", player, squirrel.name));
    out.push_str(&texts.text_with("socialHub.profile.level", &[("level", &squirrel.level)]));
    out.push('\n');
    out.push_str(&texts.text_with(
        "socialHub.profile.experience",
        &[
            ("current", &format!("{:.0}", squirrel.exp)),
            ("total", &squirrel.max_exp),
        ],
    ));
    out.push('\n');
    out.push_str(&format!(
        "Friends: {} | Joined {}\n",
        friends,
        squirrel.created_at.format("%Y-%m-%d")
    ));
    if squirrel.achievements.is_empty() {
        out.push_str(&texts.text("socialHub.profile.noBadges"));
        out.push('\n');
    } else {
        let badges: Vec<&str> = squirrel
            .achievements
            .iter()
            .filter_map(|id| find_achievement(id).map(|a| a.name))
            .collect();
        out.push_str(&format!("Badges: {}\n", badges.join(", ")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn time_buckets() {
        let texts = TextCatalog::builtin();
        let now = Utc::now();
        assert_eq!(time_ago(now - Duration::seconds(10), now, &texts), "just now");
        assert_eq!(time_ago(now - Duration::minutes(5), now, &texts), "5m ago");
        assert_eq!(time_ago(now - Duration::hours(2), now, &texts), "2h ago");
        assert_eq!(time_ago(now - Duration::days(3), now, &texts), "3d ago");
        assert_eq!(time_ago(now + Duration::minutes(1), now, &texts), "just now");
    }

    #[test]
    fn profile_lists_badges() {
        let texts = TextCatalog::builtin();
        let mut squirrel = Squirrel::new("Nutkin");
        assert!(format_profile("You", &squirrel, 2, &texts).contains("No badges"));
        squirrel.achievements.insert("first_steps".to_string());
        let out = format_profile("You", &squirrel, 2, &texts);
        assert!(out.contains("Level 1"));
        assert!(out.contains("Experience: 0/100"));
        assert!(out.contains("Badges: First Steps"));
    }
}
