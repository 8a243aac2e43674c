pub mod toc;

pub use toc::{extract_headings, generate_toc};
