//! File I/O operations and validation
//!
//! This module handles .docx validation and resolution of the command-line
//! target into a single document path.

use anyhow::{bail, Result};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::info;
use zip::ZipArchive;

use crate::error::ResolveError;

/// Validates that the file is a legitimate .docx file
pub(crate) fn validate_docx_file(file_path: &Path) -> Result<()> {
    // Check file extension
    if !has_docx_extension(file_path) {
        let extension = file_path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");
        bail!(
            "Invalid file format. Expected .docx file, got .{}\n\
            Note: only Word .docx files are supported (not .doc, .xlsx, .zip, etc.)",
            extension
        );
    }

    // Check ZIP structure contains word/document.xml
    let file = File::open(file_path)?;
    let mut archive = ZipArchive::new(file)?;

    if archive.by_name("word/document.xml").is_err() {
        // Check if it might be an Excel file
        if archive.by_name("xl/workbook.xml").is_ok() {
            bail!(
                "This appears to be an Excel file (.xlsx).\n\
                Only Word documents (.docx) are supported."
            );
        }

        bail!(
            "Invalid .docx file: missing word/document.xml\n\
            This file may be corrupted or is not a valid Word document."
        );
    }

    Ok(())
}

fn has_docx_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("docx"))
}

/// Turn the optional command-line argument into a document path.
///
/// The argument may be a path to an existing .docx file or a bare title
/// number, resolved against `Title <N>*.docx` in `dir`. Without an argument
/// `dir` must hold exactly one `Title *.docx` file.
pub fn resolve_target(argument: Option<&str>, dir: &Path) -> Result<PathBuf, ResolveError> {
    let resolved = match argument {
        Some(argument) => {
            let path = Path::new(argument);
            if path.is_file() && has_docx_extension(path) {
                path.to_path_buf()
            } else if !argument.is_empty() && argument.chars().all(|c| c.is_ascii_digit()) {
                find_title_documents(dir, &format!("Title {argument}"))?
                    .into_iter()
                    .next()
                    .ok_or_else(|| ResolveError::NoMatchForNumber {
                        number: argument.to_string(),
                        dir: dir.to_path_buf(),
                    })?
            } else {
                return Err(ResolveError::BadArgument {
                    argument: argument.to_string(),
                });
            }
        }
        None => {
            let mut matches = find_title_documents(dir, "Title ")?;
            match matches.len() {
                0 => {
                    return Err(ResolveError::NotFound {
                        dir: dir.to_path_buf(),
                    });
                }
                1 => matches.remove(0),
                _ => return Err(ResolveError::Ambiguous { candidates: matches }),
            }
        }
    };

    info!(path = %resolved.display(), "resolved input document");
    Ok(resolved)
}

/// Files in `dir` whose name starts with `prefix` and ends in `.docx`,
/// sorted by name.
pub fn find_title_documents(dir: &Path, prefix: &str) -> Result<Vec<PathBuf>, ResolveError> {
    let io_error = |source| ResolveError::Io {
        dir: dir.to_path_buf(),
        source,
    };

    let mut matches = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.starts_with(prefix) && name.ends_with(".docx") && path.is_file() {
            matches.push(path);
        }
    }

    matches.sort();
    Ok(matches)
}
