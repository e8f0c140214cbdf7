// src/core/formatter.rs
//! Turns raw model output into plain text that reads well in a chat bubble

use anyhow::{Context, Result};
use regex::Regex;

pub const MAX_RESPONSE_CHARS: usize = 2000;
pub const TRUNCATED_CHARS: usize = 1800;
pub const TRUNCATION_SUFFIX: &str = "...\n\nWant to know more? Just ask! 😊";

const BULLET: &str = "• ";

#[derive(Debug, Clone)]
pub struct ResponseFormatter {
    empty_fallback: String,
    blank_lines: Regex,
    bullets: Regex,
    numbered: Regex,
    bold: Regex,
    italic: Regex,
}

impl ResponseFormatter {
    pub fn new(empty_fallback: impl Into<String>) -> Result<Self> {
        Ok(Self {
            empty_fallback: empty_fallback.into(),
            blank_lines: Regex::new(r"\n{3,}").context("Invalid blank-line pattern")?,
            // "* " or "- " opening a line, after optional indentation
            bullets: Regex::new(r"(?m)^([ \t]*)[*-][ \t]+").context("Invalid bullet pattern")?,
            // "3. " following other text on the same line
            numbered: Regex::new(r"(\S)[ \t]+(\d+\.[ \t])").context("Invalid numbered pattern")?,
            bold: Regex::new(r"\*\*(.*?)\*\*").context("Invalid bold pattern")?,
            italic: Regex::new(r"\*(.*?)\*").context("Invalid italic pattern")?,
        })
    }

    /// Apply the cleanup pipeline. Never fails and never returns an empty string.
    pub fn format(&self, raw: Option<&str>) -> String {
        let raw = match raw {
            Some(text) if !text.is_empty() => text,
            _ => return self.empty_fallback.clone(),
        };

        let bullet = format!("${{1}}{}", BULLET);

        let text = self.blank_lines.replace_all(raw, "\n\n");
        let text = self.bullets.replace_all(&text, bullet.as_str());
        let text = self.numbered.replace_all(&text, "$1\n$2");
        let text = self.bold.replace_all(&text, "$1");
        let text = self.italic.replace_all(&text, "$1");
        let text = text.trim();

        if text.is_empty() {
            return self.empty_fallback.clone();
        }

        truncate(text)
    }
}

fn truncate(text: &str) -> String {
    if text.chars().count() > MAX_RESPONSE_CHARS {
        let head: String = text.chars().take(TRUNCATED_CHARS).collect();
        format!("{}{}", head, TRUNCATION_SUFFIX)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK: &str = "I'm here to help! Feel free to ask me anything about Ada. 😊";

    fn formatter() -> ResponseFormatter {
        ResponseFormatter::new(FALLBACK).unwrap()
    }

    #[test]
    fn test_empty_input_returns_fallback() {
        let f = formatter();
        assert_eq!(f.format(None), FALLBACK);
        assert_eq!(f.format(Some("")), FALLBACK);
        assert_eq!(f.format(Some("  \n\n ")), FALLBACK);
    }

    #[test]
    fn test_dash_bullets() {
        assert_eq!(formatter().format(Some("- Java\n- Python")), "• Java\n• Python");
    }

    #[test]
    fn test_star_bullets_with_bold() {
        assert_eq!(
            formatter().format(Some("Skills:\n* **Java** for backends\n  * Python")),
            "Skills:\n• Java for backends\n  • Python"
        );
    }

    #[test]
    fn test_hyphenated_words_untouched() {
        assert_eq!(
            formatter().format(Some("A full-stack, well-known dev - mostly")),
            "A full-stack, well-known dev - mostly"
        );
    }

    #[test]
    fn test_collapses_blank_lines() {
        assert_eq!(formatter().format(Some("a\n\n\n\n\nb")), "a\n\nb");
        assert_eq!(formatter().format(Some("a\n\nb")), "a\n\nb");
    }

    #[test]
    fn test_numbered_items_start_lines() {
        assert_eq!(
            formatter().format(Some("Steps: 1. Learn 2. Build 3. Ship")),
            "Steps:\n1. Learn\n2. Build\n3. Ship"
        );
    }

    #[test]
    fn test_decimals_are_not_list_markers() {
        assert_eq!(
            formatter().format(Some("CGPA is 8.7 out of 10.")),
            "CGPA is 8.7 out of 10."
        );
    }

    #[test]
    fn test_strips_bold_and_italic() {
        assert_eq!(
            formatter().format(Some("This is **very** *important*")),
            "This is very important"
        );
    }

    #[test]
    fn test_unbalanced_markers_do_not_panic() {
        let f = formatter();
        assert_eq!(f.format(Some("**dangling")), "dangling");
        assert_eq!(f.format(Some("one * two")), "one * two");
        assert!(!f.format(Some("***")).is_empty());
        assert!(!f.format(Some("*")).is_empty());
    }

    #[test]
    fn test_long_text_is_truncated() {
        let input = "x".repeat(5000);
        let output = formatter().format(Some(&input));
        assert!(output.ends_with(TRUNCATION_SUFFIX));
        assert_eq!(
            output.chars().count(),
            TRUNCATED_CHARS + TRUNCATION_SUFFIX.chars().count()
        );
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let input = "é".repeat(2001);
        let output = formatter().format(Some(&input));
        assert!(output.starts_with(&"é".repeat(TRUNCATED_CHARS)));
        assert!(output.ends_with(TRUNCATION_SUFFIX));
    }

    #[test]
    fn test_text_at_limit_is_kept() {
        let input = "y".repeat(MAX_RESPONSE_CHARS);
        assert_eq!(formatter().format(Some(&input)), input);
    }

    #[test]
    fn test_idempotent_on_clean_input() {
        let f = formatter();
        for input in [
            "Hello there! I work with Java and Python.",
            "• Java\n• Python",
            "Steps:\n1. Learn\n2. Build",
            "Line one\n\nLine two",
            &"z".repeat(4000),
        ] {
            let once = f.format(Some(input));
            assert_eq!(f.format(Some(&once)), once, "input: {input:?}");
        }
    }
}
