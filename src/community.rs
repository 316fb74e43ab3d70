//! Static community pages (rules, roles, events, highlights, FAQ and the
//! Discord feature list) plus the two small interactive bits that live on
//! them: the mascot click counter and the footer secret.

use log::debug;
use std::fmt;
use std::str::FromStr;

use crate::config::HavenConfig;
use crate::eggs::{EasterEgg, EasterEggs};
use crate::text::TextCatalog;

/// Clicks that max out the mascot's happiness meter.
pub const MASCOT_MAX_CLICKS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoItem {
    pub icon: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
    /// Schedule for events, stats line for highlights.
    pub extra: Option<&'static str>,
}

const fn item(icon: &'static str, title: &'static str, detail: &'static str) -> InfoItem {
    InfoItem { icon, title, detail, extra: None }
}

const fn item_with(
    icon: &'static str,
    title: &'static str,
    detail: &'static str,
    extra: &'static str,
) -> InfoItem {
    InfoItem { icon, title, detail, extra: Some(extra) }
}

pub const RULES: [InfoItem; 5] = [
    item("🤝", "Be Kind & Respectful", "Treat everyone with kindness and respect"),
    item("🚫", "No Spam or Self-Promotion", "Keep conversations genuine and engaging"),
    item("🔞", "Keep It Family-Friendly", "Content should be appropriate for all ages"),
    item("🎯", "Stay On Topic", "Use appropriate channels for discussions"),
    item("🛡️", "Listen to Moderators", "Our team is here to help maintain a positive environment"),
];

pub const ROLES: [InfoItem; 6] = [
    item("🟠", "Squirrel Leader", "Server administrators and founders"),
    item("🟢", "Elder Squirrel", "Trusted moderators and helpers"),
    item("🟤", "Busy Squirrel", "Active community members"),
    item("🌱", "Baby Squirrel", "New members to the community"),
    item("🎮", "Gaming Nut", "Gaming enthusiasts and organizers"),
    item("🎨", "Creative Squirrel", "Artists, writers, and creators"),
];

pub const EVENTS: [InfoItem; 5] = [
    item_with("🎮", "Weekly Game Night", "Community gaming sessions", "Every Friday 8PM EST"),
    item_with("🎨", "Art Share Sunday", "Share your creative works", "Every Sunday"),
    item_with("🎬", "Movie Night", "Watch movies together", "Every Saturday 9PM EST"),
    item_with("🧠", "Trivia Tuesday", "Test your knowledge", "Every Tuesday 7PM EST"),
    item_with("🍂", "Seasonal Events", "Special themed celebrations", "Monthly"),
];

pub const HIGHLIGHTS: [InfoItem; 4] = [
    item_with("🎨", "Community Art Gallery", "Amazing artwork from our talented members", "100+ artworks shared"),
    item_with("🎮", "Gaming Tournaments", "Regular competitions with fun prizes", "25+ tournaments held"),
    item_with("🏆", "Meme of the Month", "Celebrating the best community memes", "500+ memes shared"),
    item_with("📚", "Book Club", "Monthly reading discussions", "12 books read together"),
];

pub const FAQ: [InfoItem; 2] = [
    item(
        "❓",
        "How do I get started?",
        "Just join our Discord server and introduce yourself in the welcome channel! We'll help you get comfortable and find your favorite channels.",
    ),
    item(
        "💡",
        "Can I suggest new features?",
        "Absolutely! We love hearing from our community. Use the #suggestions channel to share your ideas for the server or this website.",
    ),
];

pub const FEATURES: [InfoItem; 6] = [
    item("🎮", "Gaming Nights", "Regular game sessions and tournaments"),
    item("💬", "Cozy Chats", "Friendly conversations and daily check-ins"),
    item("🎉", "Fun Events", "Seasonal celebrations and community activities"),
    item("🎨", "Creative Corner", "Share your art, music, and creative projects"),
    item("🌰", "Meme Central", "Daily dose of wholesome memes and jokes"),
    item("🏆", "Achievements", "Level up and earn special roles and badges"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Rules,
    Roles,
    Events,
    Highlights,
    Faq,
    Features,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Rules,
        Section::Roles,
        Section::Events,
        Section::Highlights,
        Section::Faq,
        Section::Features,
    ];

    pub fn heading(self) -> &'static str {
        match self {
            Section::Rules => "📜 Community Rules",
            Section::Roles => "👑 Server Roles",
            Section::Events => "📅 Regular Events",
            Section::Highlights => "✨ Community Highlights",
            Section::Faq => "🤔 Frequently Asked Questions",
            Section::Features => "🌟 What We Offer",
        }
    }

    pub fn items(self) -> &'static [InfoItem] {
        match self {
            Section::Rules => &RULES,
            Section::Roles => &ROLES,
            Section::Events => &EVENTS,
            Section::Highlights => &HIGHLIGHTS,
            Section::Faq => &FAQ,
            Section::Features => &FEATURES,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Rules => "rules",
            Section::Roles => "roles",
            Section::Events => "events",
            Section::Highlights => "highlights",
            Section::Faq => "faq",
            Section::Features => "features",
        };
        f.write_str(name)
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rules" | "rule" => Ok(Section::Rules),
            "roles" | "role" => Ok(Section::Roles),
            "events" | "event" => Ok(Section::Events),
            "highlights" | "highlight" => Ok(Section::Highlights),
            "faq" | "faqs" | "help" => Ok(Section::Faq),
            "features" | "feature" | "offer" => Ok(Section::Features),
            other => Err(format!(
                "unknown section '{}'; try rules, roles, events, highlights, faq or features",
                other
            )),
        }
    }
}

pub fn format_section(section: Section) -> String {
    let mut out = format!("{}\n", section.heading());
    for (idx, it) in section.items().iter().enumerate() {
        match section {
            Section::Faq => {
                out.push_str(&format!("Q: {}\nA: {}\n", it.title, it.detail));
            }
            _ => {
                out.push_str(&format!("{:>2}. {} {} - {}", idx + 1, it.icon, it.title, it.detail));
                if let Some(extra) = it.extra {
                    out.push_str(&format!(" ({})", extra));
                }
                out.push('\n');
            }
        }
    }
    out
}

/// Overview page: hero banner and the list of sections.
pub fn format_overview(haven: &HavenConfig, texts: &TextCatalog) -> String {
    let mut out = texts.text_with("hero.title", &[("name", &haven.name)]);
    out.push('\n');
    out.push_str(&texts.text("hero.tagline"));
    out.push_str("\n\nSections: ");
    let names: Vec<String> = Section::ALL.iter().map(|s| s.to_string()).collect();
    out.push_str(&names.join(", "));
    out.push('\n');
    out
}

pub fn format_invite(haven: &HavenConfig, texts: &TextCatalog) -> String {
    let mut out = texts.text("join.title");
    out.push('\n');
    out.push_str(&texts.text_with(
        "join.invite",
        &[("name", &haven.name), ("url", &haven.invite_url)],
    ));
    out.push('\n');
    out
}

pub fn format_footer(haven: &HavenConfig, texts: &TextCatalog) -> String {
    format!(
        "{}\n🌰 Type FOOTER for a nutty surprise! 🌰\n",
        texts.text_with("footer.copyright", &[("name", &haven.name)])
    )
}

/// Reveal the footer secret. The first reveal also unlocks the
/// `secret-message` egg.
pub fn reveal_footer_secret(
    eggs: &mut EasterEggs,
    texts: &TextCatalog,
) -> (String, Option<&'static EasterEgg>) {
    (texts.text("eggs.footerSecret"), eggs.trigger("secret-message"))
}

/// Hero mascot that gets happier the more it's clicked.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mascot {
    clicks: u32,
}

impl Mascot {
    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    pub fn is_maxed(&self) -> bool {
        self.clicks >= MASCOT_MAX_CLICKS
    }

    pub fn click(&mut self, texts: &TextCatalog) -> String {
        self.clicks = self.clicks.saturating_add(1);
        if self.clicks == MASCOT_MAX_CLICKS {
            debug!("mascot: Nuts about you clicking me!");
        }
        if self.is_maxed() {
            texts.text("hero.mascotMax")
        } else {
            texts.text_with("hero.mascotProgress", &[("clicks", &self.clicks)])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sections() {
        assert_eq!("RULES".parse::<Section>(), Ok(Section::Rules));
        assert_eq!(" faq ".parse::<Section>(), Ok(Section::Faq));
        assert!("gossip".parse::<Section>().is_err());
        for s in Section::ALL {
            assert_eq!(s.to_string().parse::<Section>(), Ok(s));
        }
    }

    #[test]
    fn events_show_schedule() {
        let out = format_section(Section::Events);
        assert!(out.contains("Weekly Game Night - Community gaming sessions (Every Friday 8PM EST)"));
        let faq = format_section(Section::Faq);
        assert!(faq.starts_with("🤔 Frequently Asked Questions\nQ: How do I get started?"));
    }

    #[test]
    fn mascot_counts_to_five() {
        let texts = TextCatalog::builtin();
        let mut mascot = Mascot::default();
        for n in 1..MASCOT_MAX_CLICKS {
            assert_eq!(mascot.click(&texts), format!("Squirrel happiness: {}/5", n));
        }
        assert_eq!(mascot.click(&texts), "Maximum squirrel happiness achieved!");
        assert!(mascot.is_maxed());
    }

    #[test]
    fn footer_secret_unlocks_once() {
        let texts = TextCatalog::builtin();
        let mut eggs = EasterEggs::new();
        let (msg, egg) = reveal_footer_secret(&mut eggs, &texts);
        assert!(msg.contains("hidden message"));
        assert_eq!(egg.map(|e| e.id), Some("secret-message"));
        assert!(reveal_footer_secret(&mut eggs, &texts).1.is_none());
    }

    #[test]
    fn footer_carries_copyright_and_hint() {
        let texts = TextCatalog::builtin();
        let haven = HavenConfig::default();
        let out = format_footer(&haven, &texts);
        assert!(out.starts_with("© 2025 Squirrel Community. Made with squirrels"), "{}", out);
        assert!(out.contains("Type FOOTER"));
    }

    #[test]
    fn invite_uses_config() {
        let texts = TextCatalog::builtin();
        let haven = HavenConfig::default();
        assert!(format_invite(&haven, &texts).contains(&haven.invite_url));
    }
}
