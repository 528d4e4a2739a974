//! Document loading and structure extraction module
//!
//! This module reads Microsoft Word (.docx) documents and reconstructs the
//! Title → Chapter → Section structure of the legal text they contain.

pub mod cleanup;
pub mod io;
pub mod loader;
pub mod models;
pub mod parsing;

// Re-export the main entry points and models
pub use cleanup::{normalize_line, normalize_paragraphs};
pub use io::{find_title_documents, resolve_target};
pub use loader::{extract_paragraphs, load_document};
pub use models::*;
pub use parsing::patterns::{classify, LineKind};
pub use parsing::structure::{parse_body, parse_document, skip_preamble, TitleBuilder};
