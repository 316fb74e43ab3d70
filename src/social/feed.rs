//! Community feed: posts with likes and comments, newest first.

use chrono::{DateTime, Duration, Utc};
use log::info;
use uuid::Uuid;

use super::errors::SocialError;
use super::time_ago;
use crate::logutil::escape_log;
use crate::text::TextCatalog;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: String,
    pub author: String,
    pub avatar: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: String,
    pub author: String,
    pub avatar: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub likes: u32,
    pub liked: bool,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, Default)]
pub struct Feed {
    posts: Vec<Post>,
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

impl Feed {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Feed with the two starter posts, dated relative to `now`.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        Self {
            posts: vec![
                Post {
                    id: new_id(),
                    author: "NuttyBuddy".to_string(),
                    avatar: "🐿️".to_string(),
                    content: "Just reached level 15! My squirrel learned a new trick! 🎉".to_string(),
                    timestamp: now - Duration::hours(1),
                    likes: 5,
                    liked: false,
                    comments: vec![Comment {
                        id: new_id(),
                        author: "AcornHunter".to_string(),
                        avatar: "🌰".to_string(),
                        content: "Congratulations! What trick did it learn?".to_string(),
                        timestamp: now - Duration::minutes(30),
                    }],
                },
                Post {
                    id: new_id(),
                    author: "TreeHopper".to_string(),
                    avatar: "🌳".to_string(),
                    content: "Found a rare golden acorn in the Tree Jumping game! Anyone else seen one?"
                        .to_string(),
                    timestamp: now - Duration::hours(2),
                    likes: 8,
                    liked: true,
                    comments: Vec::new(),
                },
            ],
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Find a post by its 1-based position in the feed or by id (a prefix of
    /// at least four characters is enough when it is unambiguous).
    fn position(&self, key: &str) -> Result<usize, SocialError> {
        let key = key.trim();
        if let Ok(n) = key.parse::<usize>() {
            if n >= 1 && n <= self.posts.len() {
                return Ok(n - 1);
            }
        }
        if let Some(idx) = self.posts.iter().position(|p| p.id == key) {
            return Ok(idx);
        }
        if key.len() >= 4 {
            let hits: Vec<usize> = self
                .posts
                .iter()
                .enumerate()
                .filter(|(_, p)| p.id.starts_with(key))
                .map(|(i, _)| i)
                .collect();
            if hits.len() == 1 {
                return Ok(hits[0]);
            }
        }
        Err(SocialError::NotFound(key.to_string()))
    }

    pub fn get(&self, key: &str) -> Result<&Post, SocialError> {
        let idx = self.position(key)?;
        Ok(&self.posts[idx])
    }

    pub fn add_post(
        &mut self,
        author: &str,
        avatar: &str,
        content: &str,
        now: DateTime<Utc>,
    ) -> Result<&Post, SocialError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(SocialError::EmptyContent);
        }
        info!("{} posted: {}", author, escape_log(content));
        self.posts.insert(
            0,
            Post {
                id: new_id(),
                author: author.to_string(),
                avatar: avatar.to_string(),
                content: content.to_string(),
                timestamp: now,
                likes: 0,
                liked: false,
                comments: Vec::new(),
            },
        );
        Ok(&self.posts[0])
    }

    /// Flip the local like on a post.
    pub fn toggle_like(&mut self, key: &str) -> Result<&Post, SocialError> {
        let idx = self.position(key)?;
        let post = &mut self.posts[idx];
        if post.liked {
            post.liked = false;
            post.likes = post.likes.saturating_sub(1);
        } else {
            post.liked = true;
            post.likes += 1;
        }
        Ok(&self.posts[idx])
    }

    pub fn add_comment(
        &mut self,
        key: &str,
        author: &str,
        avatar: &str,
        content: &str,
        now: DateTime<Utc>,
    ) -> Result<&Comment, SocialError> {
        let idx = self.position(key)?;
        let content = content.trim();
        if content.is_empty() {
            return Err(SocialError::EmptyContent);
        }
        let post = &mut self.posts[idx];
        info!("{} commented on {}: {}", author, post.id, escape_log(content));
        post.comments.push(Comment {
            id: new_id(),
            author: author.to_string(),
            avatar: avatar.to_string(),
            content: content.to_string(),
            timestamp: now,
        });
        Ok(&post.comments[post.comments.len() - 1])
    }

    pub fn format_feed(&self, now: DateTime<Utc>, texts: &TextCatalog) -> String {
        let mut out = texts.text("socialHub.feed.title");
        out.push('\n');
        if self.posts.is_empty() {
            out.push_str(&texts.text("socialHub.feed.noUpdates"));
            out.push('\n');
            return out;
        }
        for (idx, post) in self.posts.iter().enumerate() {
            out.push_str(&format!(
                "{:>2}) {} {} - {}\n    {}\n    {} {} | 💬 {}\n",
                idx + 1,
                post.avatar,
                post.author,
                time_ago(post.timestamp, now, texts),
                post.content,
                if post.liked { "❤️" } else { "🤍" },
                post.likes,
                post.comments.len()
            ));
            for c in &post.comments {
                out.push_str(&format!(
                    "      {} {}: {} ({})\n",
                    c.avatar,
                    c.author,
                    c.content,
                    time_ago(c.timestamp, now, texts)
                ));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_posts_go_on_top() {
        let now = Utc::now();
        let mut feed = Feed::seeded(now);
        let post = feed.add_post("You", "🐿️", "  First nut of the season!  ", now).unwrap();
        assert_eq!(post.content, "First nut of the season!");
        assert_eq!(post.likes, 0);
        assert_eq!(feed.posts().len(), 3);
        assert_eq!(feed.posts()[0].author, "You");
    }

    #[test]
    fn blank_post_rejected() {
        let mut feed = Feed::empty();
        assert_eq!(
            feed.add_post("You", "🐿️", " \n\t ", Utc::now()),
            Err(SocialError::EmptyContent)
        );
        assert!(feed.posts().is_empty());
    }

    #[test]
    fn like_toggles() {
        let mut feed = Feed::seeded(Utc::now());
        let post = feed.toggle_like("1").unwrap();
        assert!(post.liked);
        assert_eq!(post.likes, 6);
        let post = feed.toggle_like("1").unwrap();
        assert!(!post.liked);
        assert_eq!(post.likes, 5);
        let post = feed.toggle_like("2").unwrap();
        assert!(!post.liked);
        assert_eq!(post.likes, 7);
    }

    #[test]
    fn comments_append_and_lookup_by_id() {
        let now = Utc::now();
        let mut feed = Feed::seeded(now);
        let id = feed.posts()[1].id.clone();
        feed.add_comment(&id, "You", "🐿️", "Not yet!", now).unwrap();
        feed.add_comment(&id[..8], "You", "🐿️", "Still looking", now).unwrap();
        let post = feed.get(&id).unwrap();
        assert_eq!(post.comments.len(), 2);
        assert_eq!(post.comments[1].content, "Still looking");
    }

    #[test]
    fn unknown_post() {
        let mut feed = Feed::seeded(Utc::now());
        assert_eq!(feed.toggle_like("9"), Err(SocialError::NotFound("9".to_string())));
        assert!(matches!(
            feed.add_comment("nope", "You", "🐿️", "hi", Utc::now()),
            Err(SocialError::NotFound(_))
        ));
    }
}
