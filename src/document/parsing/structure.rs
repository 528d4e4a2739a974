//! Title → Chapter → Section reconstruction
//!
//! The parser walks the normalized lines once. Lines before the first chapter
//! header are preamble and discarded. After that each line either opens a
//! chapter, opens a section (possibly collecting the following lines as its
//! body), or is skipped. Nothing here ever fails: malformed input degrades to
//! fewer nodes, never to an error.

use tracing::{debug, trace};

use super::super::models::{Chapter, Section, Title, UsCode};
use super::heading::detect_title;
use super::patterns::{classify, ends_section_body, LineKind};

/// Builds the chapter list of a Title, tracking which chapter new sections
/// are attached to.
#[derive(Debug)]
pub struct TitleBuilder {
    title: Title,
    current_chapter: Option<usize>,
}

impl TitleBuilder {
    pub fn new(title: Title) -> Self {
        TitleBuilder {
            title,
            current_chapter: None,
        }
    }

    pub fn start_chapter(&mut self, chapter: Chapter) {
        self.title.chapters.push(chapter);
        self.current_chapter = Some(self.title.chapters.len() - 1);
    }

    pub fn add_section(&mut self, section: Section) {
        let index = match self.current_chapter {
            Some(index) => index,
            None => {
                debug!(section = %section.number, "section before any chapter header");
                self.start_chapter(Chapter::unspecified());
                self.title.chapters.len() - 1
            }
        };
        self.title.chapters[index].sections.push(section);
    }

    pub fn finish(self) -> Title {
        self.title
    }
}

/// Index of the first chapter header, or `lines.len()` when there is none.
pub fn skip_preamble(lines: &[String]) -> usize {
    for (index, line) in lines.iter().enumerate() {
        match classify(line) {
            LineKind::ChapterHeader { .. } => return index,
            LineKind::TocArtifact => trace!(line = %line, "skipping table-of-contents row"),
            _ => trace!(line = %line, "skipping preamble"),
        }
    }
    lines.len()
}

/// Scan chapter and section content, starting directly in the body phase.
pub fn parse_body(builder: &mut TitleBuilder, lines: &[String]) {
    let mut i = 0;
    while i < lines.len() {
        match classify(&lines[i]) {
            LineKind::ChapterHeader { number, text } => {
                builder.start_chapter(Chapter::new(number, text));
                i += 1;
            }
            LineKind::InlineSection {
                number,
                heading,
                body,
            } => {
                builder.add_section(Section::new(number, heading, body));
                i += 1;
            }
            LineKind::SectionStart { number, heading } => {
                let end = collect_body_end(lines, i + 1);
                let body = lines[i + 1..end].join("\n");
                builder.add_section(Section::new(number, heading, &body));
                i = end;
            }
            LineKind::TitleDeclaration { .. } | LineKind::TocArtifact | LineKind::Other => {
                trace!(line = %lines[i], "skipping unmatched line");
                i += 1;
            }
        }
    }
}

// Lookahead for a section body: stops at the next line that starts
// something new, never revisits earlier lines.
fn collect_body_end(lines: &[String], start: usize) -> usize {
    lines[start..]
        .iter()
        .position(|line| ends_section_body(line))
        .map_or(lines.len(), |offset| start + offset)
}

/// Parse a whole document. `source` identifies the input (usually the file
/// stem) and supplies the title number when the text declares none.
pub fn parse_document(lines: &[String], source: &str) -> UsCode {
    let title = detect_title(lines, source);
    let mut builder = TitleBuilder::new(title);

    let start = skip_preamble(lines);
    if start == lines.len() {
        debug!(source, "no chapter header found, output will be empty");
    }
    parse_body(&mut builder, &lines[start..]);

    UsCode {
        title: builder.finish(),
    }
}
