//! usctitle: U.S. Code structure extraction for .docx files
//!
//! This library reads the paragraph text of a Word document holding one
//! title of the U.S. Code and rebuilds its Title → Chapter → Section tree
//! from the text alone, then writes it out as XML or JSON.

pub mod config;
pub mod document;
pub mod error;
pub mod export;

// Re-export commonly used types
pub use config::Config;
pub use document::{load_document, parse_document, Chapter, Section, Title, UsCode};
pub use error::ResolveError;
pub use export::ExportFormat;
