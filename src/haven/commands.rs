//! Line command parser for the interactive session.
//!
//! Verbs are case-insensitive; arguments keep their case. Anything that
//! doesn't start with a known verb parses to [`Command::Unknown`], and a known
//! verb with a bad argument to [`Command::Invalid`] carrying a usage hint.

use log::trace;

use crate::care::Food;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    /// Blank line: redraw the running game or show status.
    Look,
    Status,
    Feed(Food),
    Play,
    Rest,
    Heal,
    Shop,
    Buy(String),
    Achievements,

    Games,
    Start(String),
    Quit,
    Move(f32),
    Catch(u32),
    Flip(usize),
    Hit(u32),
    Scores,

    Eggs,
    Keys(Vec<String>),
    Click,
    Dance(u64),
    Rainbow,
    Footer,

    Neighbors,
    Visit(String),
    Note { to: String, message: String },
    Notes,
    Friends(Option<String>),
    Accept(String),
    Decline(String),
    Leaderboard,
    Posts,
    Post(String),
    Like(String),
    Comment { post: String, text: String },
    Profile,

    Info(Option<String>),
    Join,
    Mascot,
    Exit,

    Unknown(String),
    Invalid(String),
}

/// Map a key token to its key code. Shorthands cover the arrow keys and
/// single letters; anything else passes through unchanged.
pub fn key_code(token: &str) -> String {
    match token.to_ascii_lowercase().as_str() {
        "up" | "arrowup" | "↑" => "ArrowUp".to_string(),
        "down" | "arrowdown" | "↓" => "ArrowDown".to_string(),
        "left" | "arrowleft" | "←" => "ArrowLeft".to_string(),
        "right" | "arrowright" | "→" => "ArrowRight".to_string(),
        s if s.len() == 1 && s.chars().all(|c| c.is_ascii_alphabetic()) => {
            format!("Key{}", s.to_ascii_uppercase())
        }
        s if s.len() == 4 && s.starts_with("key") => format!("Key{}", s[3..].to_ascii_uppercase()),
        _ => token.to_string(),
    }
}

fn split_verb(line: &str) -> (String, &str) {
    match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb.to_ascii_uppercase(), rest.trim()),
        None => (line.to_ascii_uppercase(), ""),
    }
}

fn required<'a>(rest: &'a str, usage: &str) -> Result<&'a str, Command> {
    if rest.is_empty() {
        Err(Command::Invalid(format!("Usage: {}", usage)))
    } else {
        Ok(rest)
    }
}

fn number<T: std::str::FromStr>(rest: &str, usage: &str) -> Result<T, Command> {
    let raw = required(rest, usage)?;
    raw.trim_start_matches('#')
        .parse::<T>()
        .map_err(|_| Command::Invalid(format!("Usage: {}", usage)))
}

#[derive(Debug, Default)]
pub struct CommandParser;

impl CommandParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, raw: &str) -> Command {
        let line = raw.trim();
        if line.is_empty() {
            return Command::Look;
        }
        let (verb, rest) = split_verb(line);
        let parsed = self.parse_verb(&verb, rest);
        let cmd = match parsed {
            Ok(cmd) => cmd,
            Err(invalid) => invalid,
        };
        trace!("parsed {:?} from '{}'", cmd, crate::logutil::escape_log(raw));
        cmd
    }

    fn parse_verb(&self, verb: &str, rest: &str) -> Result<Command, Command> {
        let cmd = match verb {
            "HELP" | "?" | "H" => Command::Help,
            "LOOK" | "L" | "BOARD" => Command::Look,
            "STATUS" | "S" => Command::Status,
            "FEED" => match Food::parse(rest) {
                Ok(food) => Command::Feed(food),
                Err(e) => Command::Invalid(format!("{} (try acorn, walnut or golden)", e)),
            },
            "PLAY" => Command::Play,
            "REST" | "NAP" | "SLEEP" => Command::Rest,
            "HEAL" => Command::Heal,
            "SHOP" => Command::Shop,
            "BUY" => Command::Buy(required(rest, "BUY <accessory id>")?.to_string()),
            "ACH" | "ACHIEVEMENTS" => Command::Achievements,

            "GAMES" | "G" => Command::Games,
            "START" => Command::Start(required(rest, "START <game>")?.to_string()),
            "QUIT" | "BACK" | "Q" => Command::Quit,
            "MOVE" | "M" => Command::Move(number(rest, "MOVE <10-90>")?),
            "CATCH" | "C" => Command::Catch(number(rest, "CATCH <nut #>")?),
            "FLIP" | "F" => Command::Flip(number(rest, "FLIP <card 0-15>")?),
            "HIT" => Command::Hit(number(rest, "HIT <target #>")?),
            "SCORES" => Command::Scores,

            "EGGS" => Command::Eggs,
            "KEY" | "KEYS" => {
                let rest = required(rest, "KEY <code> [code...]")?;
                Command::Keys(rest.split_whitespace().map(key_code).collect())
            }
            "CLICK" => Command::Click,
            "DANCE" => {
                if rest.is_empty() {
                    Command::Dance(10)
                } else {
                    Command::Dance(number(rest, "DANCE [seconds]")?)
                }
            }
            "RAINBOW" => Command::Rainbow,
            "FOOTER" => Command::Footer,

            "NEIGHBORS" | "HOOD" => Command::Neighbors,
            "VISIT" => Command::Visit(required(rest, "VISIT <neighbor>")?.to_string()),
            "NOTE" => {
                let rest = required(rest, "NOTE <neighbor> <message>")?;
                match rest.split_once(char::is_whitespace) {
                    Some((to, message)) if !message.trim().is_empty() => Command::Note {
                        to: to.to_string(),
                        message: message.trim().to_string(),
                    },
                    _ => Command::Invalid("Usage: NOTE <neighbor> <message>".to_string()),
                }
            }
            "NOTES" => Command::Notes,
            "FRIENDS" => Command::Friends(if rest.is_empty() {
                None
            } else {
                Some(rest.to_string())
            }),
            "ACCEPT" => Command::Accept(required(rest, "ACCEPT <name>")?.to_string()),
            "DECLINE" => Command::Decline(required(rest, "DECLINE <name>")?.to_string()),
            "LEADERBOARD" | "TOP" => Command::Leaderboard,
            "POSTS" | "FEEDS" | "WALL" => Command::Posts,
            "POST" | "SHARE" => Command::Post(required(rest, "POST <text>")?.to_string()),
            "LIKE" => Command::Like(required(rest, "LIKE <post #>")?.to_string()),
            "COMMENT" => {
                let rest = required(rest, "COMMENT <post #> <text>")?;
                match rest.split_once(char::is_whitespace) {
                    Some((post, text)) if !text.trim().is_empty() => Command::Comment {
                        post: post.to_string(),
                        text: text.trim().to_string(),
                    },
                    _ => Command::Invalid("Usage: COMMENT <post #> <text>".to_string()),
                }
            }
            "PROFILE" | "ME" => Command::Profile,

            "INFO" => Command::Info(if rest.is_empty() {
                None
            } else {
                Some(rest.to_string())
            }),
            "JOIN" | "INVITE" => Command::Join,
            "MASCOT" | "PET" => Command::Mascot,
            "EXIT" | "BYE" => Command::Exit,
            v if v.len() > 1 && v.starts_with('G') && v[1..].chars().all(|c| c.is_ascii_digit()) => {
                Command::Start(v.to_string())
            }
            _ => Command::Unknown(verb.to_string()),
        };
        Ok(cmd)
    }
}

pub const HELP_TEXT: &str = "\
Care:    STATUS  FEED [acorn|walnut|golden]  PLAY  REST  HEAL  SHOP  BUY <id>  ACH
Games:   GAMES  START <game|G#>  MOVE <x>  CATCH <#>  FLIP <card>  HIT <#>  QUIT  SCORES
Eggs:    EGGS  KEY <codes...>  CLICK  DANCE [secs]  RAINBOW  FOOTER
Social:  NEIGHBORS  VISIT <id>  NOTE <id> <msg>  NOTES  FRIENDS [search]  ACCEPT <name>
         DECLINE <name>  TOP  POSTS  POST <text>  LIKE <#>  COMMENT <#> <text>  PROFILE
Info:    INFO [rules|roles|events|highlights|faq|features]  JOIN  MASCOT  EXIT
A blank line redraws the running game.";

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str) -> Command {
        CommandParser::new().parse(s)
    }

    #[test]
    fn verbs_are_case_insensitive() {
        assert_eq!(p("help"), Command::Help);
        assert_eq!(p("  Status "), Command::Status);
        assert_eq!(p(""), Command::Look);
        assert_eq!(p("feed"), Command::Feed(Food::Acorn));
        assert_eq!(p("FEED golden acorn"), Command::Feed(Food::GoldenAcorn));
        assert!(matches!(p("feed pizza"), Command::Invalid(_)));
    }

    #[test]
    fn game_moves() {
        assert_eq!(p("start G1"), Command::Start("G1".to_string()));
        assert_eq!(p("g2"), Command::Start("G2".to_string()));
        assert_eq!(p("move 42.5"), Command::Move(42.5));
        assert_eq!(p("catch #3"), Command::Catch(3));
        assert_eq!(p("flip 15"), Command::Flip(15));
        assert!(matches!(p("flip"), Command::Invalid(_)));
        assert!(matches!(p("hit x"), Command::Invalid(_)));
    }

    #[test]
    fn keys_are_normalized() {
        assert_eq!(
            p("key up up ArrowDown b a"),
            Command::Keys(vec![
                "ArrowUp".into(),
                "ArrowUp".into(),
                "ArrowDown".into(),
                "KeyB".into(),
                "KeyA".into()
            ])
        );
        assert_eq!(key_code("keyb"), "KeyB");
        assert_eq!(key_code("Enter"), "Enter");
    }

    #[test]
    fn social_arguments_keep_case() {
        assert_eq!(
            p("note 3 Hello There"),
            Command::Note { to: "3".into(), message: "Hello There".into() }
        );
        assert!(matches!(p("note 3"), Command::Invalid(_)));
        assert_eq!(p("POST  Nuts are Great "), Command::Post("Nuts are Great".into()));
        assert_eq!(
            p("comment 2 Me too!"),
            Command::Comment { post: "2".into(), text: "Me too!".into() }
        );
        assert_eq!(p("friends"), Command::Friends(None));
        assert_eq!(p("friends fluff"), Command::Friends(Some("fluff".into())));
    }

    #[test]
    fn unknown_verbs() {
        assert_eq!(p("dig hole"), Command::Unknown("DIG".into()));
        assert_eq!(p("dance"), Command::Dance(10));
    }
}
