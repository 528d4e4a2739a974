//! Title detection
//!
//! The Title is declared once, somewhere in the document, by a line like
//! `TITLE 3.—The President`. When no such line exists the number is
//! recovered from the source file name instead.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::super::models::Title;
use super::patterns::{classify, LineKind};

static FILE_NAME_TITLE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Title\s+(\d+)").unwrap());

/// Build the Title from the first title declaration in `lines`, falling back
/// to the number found in `source` (typically the file stem).
pub(crate) fn detect_title(lines: &[String], source: &str) -> Title {
    let declared = lines.iter().find_map(|line| match classify(line) {
        LineKind::TitleDeclaration { number, text } => Some((number, text)),
        _ => None,
    });

    if let Some((number, text)) = declared {
        return Title::new(Some(number.to_string()), &strip_toc_bleed(text));
    }

    let number = title_number_from_source(source);
    debug!(source, ?number, "no title declaration found, using file name");
    Title::new(number, "")
}

/// Table-of-contents headers ("Chapter Sec.") sometimes end up in the same
/// paragraph as the title; cut them off.
pub(crate) fn strip_toc_bleed(text: &str) -> String {
    match text.find("Chapter") {
        Some(cut) => text[..cut]
            .trim_end_matches([' ', '.'])
            .trim()
            .to_string(),
        None => text.trim().to_string(),
    }
}

pub(crate) fn title_number_from_source(source: &str) -> Option<String> {
    FILE_NAME_TITLE_NUMBER
        .captures(source)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_first_declaration_wins() {
        let title = detect_title(
            &lines(&[
                "Preamble",
                "TITLE 3.—The President",
                "TITLE 4.—Flag and Seal",
            ]),
            "Title 9 - Arbitration",
        );
        assert_eq!(title.number.as_deref(), Some("3"));
        assert_eq!(title.name, "TITLE 3.—The President");
    }

    #[test]
    fn test_toc_bleed_is_cut() {
        let title = detect_title(
            &lines(&["TITLE 3.—THE PRESIDENT. Chapter Sec."]),
            "whatever",
        );
        assert_eq!(title.name, "TITLE 3.—THE PRESIDENT");
    }

    #[test]
    fn test_fallback_to_source_name() {
        let title = detect_title(&lines(&["Chapter 1.—Elections"]), "Title 3 - The President");
        assert_eq!(title.number.as_deref(), Some("3"));
        assert_eq!(title.name, "TITLE 3.—");
    }

    #[test]
    fn test_fallback_without_number() {
        let title = detect_title(&[], "usc-export");
        assert_eq!(title.number, None);
        assert_eq!(title.name, "TITLE ?.—");
    }

    #[test]
    fn test_title_number_from_source_is_case_insensitive() {
        assert_eq!(title_number_from_source("TITLE 26 Internal Revenue"), Some("26".to_string()));
        assert_eq!(title_number_from_source("title  5"), Some("5".to_string()));
    }
}
