//! Line classification
//!
//! Every normalized line falls into exactly one `LineKind`. The patterns are
//! tried in a fixed precedence order and the first match wins, so a line that
//! looks like both a chapter header and something else is always a chapter
//! header.

use once_cell::sync::Lazy;
use regex::Regex;

// "TITLE 3.—The President", dash spacing is loose
static TITLE_DECLARATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^TITLE\s+(\d+)\.\s*—\s*(.+?)\s*$").unwrap());

// "Chapter 1.—Presidential Elections." with both periods optional
static CHAPTER_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^Chapter\s+(\d+)\.?\s*—\s*(.+?)\.?\s*$").unwrap());

// "101. Time of choosing electors— Electors shall be appointed..."
static INLINE_SECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)\.\s*(.+?)\s*—\s*(.+)$").unwrap());

// Same shape, body may be empty and continue on the following lines
static SECTION_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)\.\s*(.+?)\s*—\s*(.*)$").unwrap());

// Any numbered line, used to stop body accumulation
static NUMBERED_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\.\s").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    TitleDeclaration {
        number: &'a str,
        text: &'a str,
    },
    ChapterHeader {
        number: &'a str,
        text: &'a str,
    },
    /// Section whose body sits entirely on the header line
    InlineSection {
        number: &'a str,
        heading: &'a str,
        body: &'a str,
    },
    /// Section header whose body, if any, follows on later lines
    SectionStart {
        number: &'a str,
        heading: &'a str,
    },
    /// Table-of-contents row such as "Chapter Sec."
    TocArtifact,
    Other,
}

pub fn classify(line: &str) -> LineKind<'_> {
    if let Some(caps) = TITLE_DECLARATION.captures(line) {
        if let (Some(number), Some(text)) = (caps.get(1), caps.get(2)) {
            return LineKind::TitleDeclaration {
                number: number.as_str(),
                text: text.as_str(),
            };
        }
    }

    if let Some((number, text)) = match_chapter_header(line) {
        return LineKind::ChapterHeader { number, text };
    }

    if let Some(caps) = INLINE_SECTION.captures(line) {
        if let (Some(number), Some(heading), Some(body)) = (caps.get(1), caps.get(2), caps.get(3)) {
            return LineKind::InlineSection {
                number: number.as_str(),
                heading: heading.as_str(),
                body: body.as_str(),
            };
        }
    }

    if let Some(caps) = SECTION_START.captures(line) {
        if let (Some(number), Some(heading)) = (caps.get(1), caps.get(2)) {
            return LineKind::SectionStart {
                number: number.as_str(),
                heading: heading.as_str(),
            };
        }
    }

    if is_toc_artifact(line) {
        return LineKind::TocArtifact;
    }

    LineKind::Other
}

pub fn match_chapter_header(line: &str) -> Option<(&str, &str)> {
    let caps = CHAPTER_HEADER.captures(line)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

pub fn is_chapter_header(line: &str) -> bool {
    CHAPTER_HEADER.is_match(line)
}

fn is_toc_artifact(line: &str) -> bool {
    let lower = line.to_lowercase();
    lower.starts_with("chapter") && lower.contains("sec") && !is_chapter_header(line)
}

/// True when `line` must not be swallowed into the body of the section
/// currently being collected.
pub fn ends_section_body(line: &str) -> bool {
    is_chapter_header(line) || INLINE_SECTION.is_match(line) || NUMBERED_LINE.is_match(line)
}
