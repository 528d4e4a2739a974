//! Document parsing utilities
//!
//! Text extraction from docx-rs elements, line classification, title
//! detection and the structure parser itself.

pub(crate) mod formatting;
pub(crate) mod heading;
pub mod patterns;
pub mod structure;
