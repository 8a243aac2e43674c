use std::fs;
use std::path::Path;

use crate::utils::error::MdtocError;

/// Read a whole document to a string
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String, MdtocError> {
    let contents = fs::read_to_string(path.as_ref())?;
    Ok(contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("doc.md");
        fs::write(&path, "## Heading\n").unwrap();

        let contents = read_file(&path).unwrap();
        assert_eq!(contents, "## Heading\n");
    }

    #[test]
    fn test_read_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        let result = read_file(temp_dir.path().join("missing.md"));

        assert!(matches!(result, Err(MdtocError::Io(_))));
    }
}
