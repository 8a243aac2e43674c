use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::markdown::toc::generate_toc;
use crate::utils::error::MdtocError;
use crate::utils::fs::read_file;

/// Documents scanned when no paths are given on the command line
const DEFAULT_FILES: [&str; 2] = ["README.md", "creating-pull-requests.md"];

/// Generate and print a table of contents for each document
pub fn handle_generate_command(files: &[PathBuf]) {
    let files: Vec<PathBuf> = if files.is_empty() {
        DEFAULT_FILES.iter().map(PathBuf::from).collect()
    } else {
        files.to_vec()
    };

    log::debug!("Scanning {} document(s)", files.len());

    // Documents are independent, so the transforms run in parallel;
    // output is printed in input order afterwards.
    let results: Vec<(PathBuf, Result<String, MdtocError>)> = files
        .into_par_iter()
        .map(|path| {
            let toc = process_document(&path);
            (path, toc)
        })
        .collect();

    for (path, result) in results {
        match result {
            Ok(toc) => {
                println!("==== {} - copy below this line ====\n", path.display());
                println!("{}", toc);
            }
            Err(e) => {
                log::error!("Failed to process {}: {}", path.display(), e);
            }
        }
    }
}

/// Read one document and derive its table of contents
fn process_document(path: &Path) -> Result<String, MdtocError> {
    let contents = read_file(path)?;
    generate_toc(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_process_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("guide.md");
        fs::write(&path, "## Setup\n### Requirements\n").unwrap();

        let toc = process_document(&path).unwrap();

        assert_eq!(
            toc,
            "## Table of Contents\n\n1. [Setup](#setup)\n   1. [Requirements](#requirements)\n"
        );
    }

    #[test]
    fn test_process_document_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = process_document(&temp_dir.path().join("missing.md"));

        assert!(matches!(result, Err(MdtocError::Io(_))));
    }

    #[test]
    fn test_process_document_without_headings() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("plain.md");
        fs::write(&path, "No headings here.\n").unwrap();

        let result = process_document(&path);

        assert!(matches!(result, Err(MdtocError::NoHeadings)));
    }

    #[test]
    fn test_documents_are_independent() {
        // Chapter numbering restarts for every document
        let temp_dir = TempDir::new().unwrap();
        let first = temp_dir.path().join("first.md");
        let second = temp_dir.path().join("second.md");
        fs::write(&first, "## One\n## Two\n").unwrap();
        fs::write(&second, "## Only\n").unwrap();

        process_document(&first).unwrap();
        let toc = process_document(&second).unwrap();

        assert_eq!(toc, "## Table of Contents\n\n1. [Only](#only)\n");
    }
}
