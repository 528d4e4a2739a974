//! Errors reported to the user when the input document cannot be determined

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("No DOCX matching Title {number}*.docx in {}", .dir.display())]
    NoMatchForNumber { number: String, dir: PathBuf },

    #[error("No 'Title *.docx' file found in {}", .dir.display())]
    NotFound { dir: PathBuf },

    #[error(
        "Multiple 'Title *.docx' files found ({}). Specify one, e.g.:\n  usctitle 3\n  usctitle 'Title 3 - The President.docx'",
        .candidates.len()
    )]
    Ambiguous { candidates: Vec<PathBuf> },

    #[error("Usage: usctitle [TitleNumber | DocxFilename]\n(got {argument:?}, which is neither an existing .docx file nor a title number)")]
    BadArgument { argument: String },

    #[error("Failed to list {}: {source}", .dir.display())]
    Io {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
