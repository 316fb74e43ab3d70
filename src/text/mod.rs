//! # Localized Text Catalog
//!
//! All user-facing copy lives in a nested JSON document addressed by
//! dot-separated paths such as `socialHub.feed.title`. Lookups are fail-soft:
//! a missing path (or a path that lands on something other than a string)
//! returns the path itself so the caller always has something to show.
//!
//! ## Lifecycle
//!
//! A [`TextCatalog`] is built once at startup and handed to whoever renders
//! text. There is no process-wide cache:
//!
//! - [`TextCatalog::load`] reads the configured file; failures are logged and
//!   produce an empty catalog
//! - [`TextCatalog::from_json_str`] is the strict variant used by tests and `init`
//! - [`TextCatalog::builtin`] uses the document bundled into the binary
//!
//! ## Placeholders
//!
//! ```rust
//! use squirrelhaven::text::TextCatalog;
//!
//! let texts = TextCatalog::from_json_str(r#"{"hello":{"name":"hi {name}"}}"#).unwrap();
//! assert_eq!(texts.text_with("hello.name", &[("name", &"Sam")]), "hi Sam");
//! assert_eq!(texts.text("hello.missing"), "hello.missing");
//! ```

use log::{debug, error};
use serde_json::Value;
use std::fmt::Display;
use std::path::Path;
use thiserror::Error;

/// Text document shipped with the binary; `init` writes it next to the config.
pub const BUILTIN_TEXT: &str = include_str!("../../data/text.json");

#[derive(Debug, Error)]
pub enum TextError {
    #[error("text document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("text document root must be an object")]
    NotAnObject,
}

#[derive(Debug, Clone, Default)]
pub struct TextCatalog {
    root: Option<Value>,
}

impl TextCatalog {
    /// Catalog with no document; every lookup returns its path.
    pub fn empty() -> Self {
        Self { root: None }
    }

    /// Catalog backed by [`BUILTIN_TEXT`].
    pub fn builtin() -> Self {
        match Self::from_json_str(BUILTIN_TEXT) {
            Ok(catalog) => catalog,
            Err(e) => {
                error!("bundled text document is invalid: {}", e);
                Self::empty()
            }
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, TextError> {
        let value: Value = serde_json::from_str(raw)?;
        if !value.is_object() {
            return Err(TextError::NotAnObject);
        }
        Ok(Self { root: Some(value) })
    }

    /// Load the text document at `path`.
    ///
    /// Never fails: a missing or malformed file is logged and yields an empty
    /// catalog, matching the fail-soft lookup contract.
    pub async fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let raw = match tokio::fs::read_to_string(path).await {
            Ok(raw) => raw,
            Err(e) => {
                error!("Failed to load text data from {}: {}", path.display(), e);
                return Self::empty();
            }
        };
        match Self::from_json_str(&raw) {
            Ok(catalog) => {
                debug!("Loaded text data from {}", path.display());
                catalog
            }
            Err(e) => {
                error!("Failed to parse text data from {}: {}", path.display(), e);
                Self::empty()
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.root.is_some()
    }

    fn lookup(&self, path: &str) -> Option<&str> {
        let mut value = self.root.as_ref()?;
        for key in path.split('.') {
            value = value.as_object()?.get(key)?;
        }
        value.as_str()
    }

    /// Resolve `path`, returning the path itself when it does not name a string.
    pub fn text(&self, path: &str) -> String {
        self.lookup(path)
            .map(str::to_string)
            .unwrap_or_else(|| path.to_string())
    }

    /// Resolve `path` and substitute every `{key}` token with its replacement.
    pub fn text_with(&self, path: &str, replacements: &[(&str, &dyn Display)]) -> String {
        let Some(template) = self.lookup(path) else {
            return path.to_string();
        };
        let mut out = template.to_string();
        for (key, value) in replacements {
            let token = format!("{{{}}}", key);
            if out.contains(&token) {
                out = out.replace(&token, &value.to_string());
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_lookup_and_fallback() {
        let texts = TextCatalog::from_json_str(r#"{"a":{"b":{"c":"X"}}}"#).unwrap();
        assert_eq!(texts.text("a.b.c"), "X");
        assert_eq!(texts.text("a.b.d"), "a.b.d");
        assert_eq!(texts.text("a.b"), "a.b");
        assert_eq!(texts.text("a.b.c.d"), "a.b.c.d");
    }

    #[test]
    fn replaces_every_occurrence() {
        let texts = TextCatalog::from_json_str(r#"{"t":"{n} and {n} make {sum}"}"#).unwrap();
        let out = texts.text_with("t", &[("n", &2), ("sum", &4)]);
        assert_eq!(out, "2 and 2 make 4");
    }

    #[test]
    fn unknown_placeholders_are_left_alone() {
        let texts = TextCatalog::from_json_str(r#"{"t":"hi {name}, {other}"}"#).unwrap();
        assert_eq!(texts.text_with("t", &[("name", &"Sam")]), "hi Sam, {other}");
    }

    #[test]
    fn empty_catalog_returns_paths() {
        let texts = TextCatalog::empty();
        assert!(!texts.is_loaded());
        assert_eq!(texts.text("socialHub.title"), "socialHub.title");
        assert_eq!(texts.text_with("x.y", &[("a", &1)]), "x.y");
    }

    #[test]
    fn rejects_non_object_root() {
        assert!(matches!(
            TextCatalog::from_json_str("[1,2]"),
            Err(TextError::NotAnObject)
        ));
        assert!(TextCatalog::from_json_str("{not json").is_err());
    }

    #[test]
    fn builtin_document_has_core_keys() {
        let texts = TextCatalog::builtin();
        assert!(texts.is_loaded());
        assert_eq!(texts.text("socialHub.feed.title"), "Community Feed");
        assert_eq!(
            texts.text_with("socialHub.feed.timeAgo", &[("time", &"5m")]),
            "5m ago"
        );
    }
}
