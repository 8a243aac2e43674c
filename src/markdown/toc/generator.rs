use lazy_static::lazy_static;
use regex::Regex;

use crate::markdown::toc::parser::extract_headings;
use crate::utils::error::MdtocError;

/// Fixed first line of every generated table of contents
pub const TOC_TITLE: &str = "## Table of Contents";

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Derive the link fragment for a heading title
fn anchor(title: &str) -> String {
    WHITESPACE_RUN
        .replace_all(&title.to_lowercase(), "-")
        .into_owned()
}

/// Generate a table of contents block from Markdown content
///
/// Level-2 headings become numbered top-level entries and level-3
/// headings become nested entries, numbered within their chapter.
/// Other depths are left out. A line equal to `TOC_TITLE` is skipped,
/// so running the generator over its own previous output does not
/// index it again.
pub fn generate_toc(document: &str) -> Result<String, MdtocError> {
    let headings = extract_headings(document)?;

    let mut toc = format!("{}\n\n", TOC_TITLE);
    let mut chapter = 0;
    let mut paragraph = 0;

    for heading in &headings {
        if heading.text == TOC_TITLE {
            continue;
        }

        let prefix = match heading.depth {
            2 => {
                chapter += 1;
                paragraph = 0;
                format!("{}.", chapter)
            }
            3 => {
                paragraph += 1;
                format!("   {}.", paragraph)
            }
            _ => continue,
        };

        toc.push_str(&format!(
            "{} [{}](#{})\n",
            prefix,
            heading.title,
            anchor(&heading.title)
        ));
    }

    Ok(toc)
}
