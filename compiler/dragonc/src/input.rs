//! Source loading.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::DriverError;

/// Read one source file, trimmed of surrounding whitespace.
pub fn load_source(path: &Path) -> Result<String, DriverError> {
    let text = fs::read_to_string(path).map_err(|source| DriverError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read source");
    Ok(text.trim().to_string())
}

/// Read every input and join them with `\n` into a single module.
pub fn load_sources(paths: &[PathBuf]) -> Result<String, DriverError> {
    let texts = paths
        .iter()
        .map(|path| load_source(path))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(texts.join("\n"))
}

/// Name shown in diagnostics for the joined source.
pub fn source_name(paths: &[PathBuf]) -> String {
    match paths {
        [single] => single.display().to_string(),
        _ => "<inputs>".to_string(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_sources_are_trimmed_and_joined() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.py");
        let b = dir.path().join("b.py");
        fs::write(&a, "\n\nx: int = 1\n\n").unwrap();
        fs::write(&b, "  print(x)\n").unwrap();

        let joined = load_sources(&[a, b]).unwrap();
        assert_eq!(joined, "x: int = 1\nprint(x)");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.py");
        let err = load_sources(&[missing.clone()]).unwrap_err();
        match err {
            DriverError::Read { path, .. } => assert_eq!(path, missing),
            other => panic!("expected a read error, got {other:?}"),
        }
    }

    #[test]
    fn test_source_name() {
        assert_eq!(source_name(&[PathBuf::from("main.py")]), "main.py");
        assert_eq!(
            source_name(&[PathBuf::from("a.py"), PathBuf::from("b.py")]),
            "<inputs>"
        );
    }
}
