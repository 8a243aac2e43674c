use lazy_static::lazy_static;
use regex::Regex;

use crate::utils::error::MdtocError;

lazy_static! {
    static ref HEADING_REGEX: Regex = Regex::new(r"(?m)^(#+)\s(.+)").unwrap();
}

/// Represents a single heading line found in a Markdown document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Count of leading `#` marker characters
    pub depth: usize,
    /// Heading text with the marker run and separator removed
    pub title: String,
    /// The full heading line as matched
    pub text: String,
}

/// Extract heading lines from Markdown content, in document order
pub fn extract_headings(document: &str) -> Result<Vec<Heading>, MdtocError> {
    let headings: Vec<Heading> = HEADING_REGEX
        .captures_iter(document)
        .map(|cap| Heading {
            depth: cap[1].len(),
            title: cap[2].to_string(),
            text: cap[0].to_string(),
        })
        .collect();

    if headings.is_empty() {
        return Err(MdtocError::NoHeadings);
    }

    Ok(headings)
}
