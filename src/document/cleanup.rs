//! Line normalization
//!
//! Paragraph text coming out of Word is noisy: en dashes where em dashes are
//! meant, tabs, no-break spaces, stray line breaks. Everything downstream
//! matches against the canonical form produced here.

const EN_DASH: char = '\u{2013}';
const EM_DASH: char = '\u{2014}';

/// Canonicalize one paragraph: en dash to em dash, whitespace runs collapsed
/// to a single space, ends trimmed.
pub fn normalize_line(raw: &str) -> String {
    let dashed = raw.replace(EN_DASH, &EM_DASH.to_string());
    dashed.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize every paragraph and drop the ones that end up empty
pub fn normalize_paragraphs<I, S>(paragraphs: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    paragraphs
        .into_iter()
        .map(|p| normalize_line(p.as_ref()))
        .filter(|line| !line.is_empty())
        .collect()
}
