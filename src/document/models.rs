//! Core data structures for the extracted legal structure
//!
//! This module defines the public types that make up the output tree:
//! a single `Title` owning its `Chapter`s, each owning its `Section`s,
//! always in document order.

use serde::{Deserialize, Serialize};

/// Number used when a section shows up before any chapter header
pub const UNSPECIFIED_CHAPTER_NUMBER: &str = "0";
/// Name used when a section shows up before any chapter header
pub const UNSPECIFIED_CHAPTER_NAME: &str = "UNSPECIFIED";

/// Root of the output tree (`<USCode>` in the XML form)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsCode {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    /// Title number, `None` when neither the text nor the file name carried one
    pub number: Option<String>,
    /// Display name such as `TITLE 3.—The President`
    pub name: String,
    pub chapters: Vec<Chapter>,
}

impl Title {
    pub fn new(number: Option<String>, text: &str) -> Self {
        let name = format!(
            "TITLE {}.—{}",
            number.as_deref().unwrap_or("?"),
            text.trim()
        );
        Title {
            number,
            name,
            chapters: Vec::new(),
        }
    }

    pub fn section_count(&self) -> usize {
        self.chapters.iter().map(|c| c.sections.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub number: String,
    /// Display name, always `Chapter {number}.—{text}.`
    pub name: String,
    pub sections: Vec<Section>,
}

impl Chapter {
    pub fn new(number: &str, text: &str) -> Self {
        let text = text.trim().trim_end_matches('.');
        Chapter {
            number: number.to_string(),
            name: format!("Chapter {number}.—{text}."),
            sections: Vec::new(),
        }
    }

    /// The placeholder chapter that adopts sections found before any header
    pub fn unspecified() -> Self {
        Chapter::new(UNSPECIFIED_CHAPTER_NUMBER, UNSPECIFIED_CHAPTER_NAME)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub number: String,
    pub heading: String,
    /// Body text; original paragraph boundaries are kept as `\n`
    pub body: String,
}

impl Section {
    pub fn new(number: &str, heading: &str, body: &str) -> Self {
        Section {
            number: number.to_string(),
            heading: heading.trim().to_string(),
            body: body.trim().to_string(),
        }
    }

    /// Name attribute, `{number}. {heading}`
    pub fn name(&self) -> String {
        format!("{}. {}", self.number, self.heading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chapter_name_ends_with_single_period() {
        assert_eq!(
            Chapter::new("1", "Presidential Elections").name,
            "Chapter 1.—Presidential Elections."
        );
        assert_eq!(
            Chapter::new("1", "Presidential Elections..").name,
            "Chapter 1.—Presidential Elections."
        );
    }

    #[test]
    fn test_unspecified_chapter() {
        let chapter = Chapter::unspecified();
        assert_eq!(chapter.number, "0");
        assert_eq!(chapter.name, "Chapter 0.—UNSPECIFIED.");
    }

    #[test]
    fn test_title_name_with_unknown_number() {
        let title = Title::new(None, "");
        assert_eq!(title.name, "TITLE ?.—");
        assert!(title.number.is_none());
    }

    #[test]
    fn test_section_name_and_trimming() {
        let section = Section::new("101", " Time of choosing electors ", " Electors shall ");
        assert_eq!(section.name(), "101. Time of choosing electors");
        assert_eq!(section.body, "Electors shall");
    }
}
