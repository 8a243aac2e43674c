mod generator;
mod parser;

pub use generator::{generate_toc, TOC_TITLE};
pub use parser::{extract_headings, Heading};
