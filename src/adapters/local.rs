use crate::domain::ports::InputSource;
use crate::utils::error::{HarnessError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct LocalInputs {
    base_path: Option<PathBuf>,
}

impl LocalInputs {
    pub fn new() -> Self {
        Self { base_path: None }
    }

    /// 相對路徑以 `base_path` 為根目錄解析
    pub fn with_base(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: Some(base_path.into()),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.base_path {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl InputSource for LocalInputs {
    fn read_input(&self, path: &Path) -> Result<String> {
        let full_path = self.resolve(path);
        tracing::debug!("Reading input from: {}", full_path.display());

        fs::read_to_string(&full_path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => HarnessError::InputNotFound { path: full_path },
            _ => HarnessError::InputRead {
                path: full_path,
                source,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_input_verbatim() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("day01.txt"), "1abc2\n\n").unwrap();

        let inputs = LocalInputs::with_base(dir.path());
        let text = inputs.read_input(Path::new("day01.txt")).unwrap();
        assert_eq!(text, "1abc2\n\n");
    }

    #[test]
    fn test_missing_input_fails_fast() {
        let dir = TempDir::new().unwrap();
        let inputs = LocalInputs::with_base(dir.path());

        match inputs.read_input(Path::new("missing.txt")) {
            Err(HarnessError::InputNotFound { path }) => {
                assert_eq!(path, dir.path().join("missing.txt"));
            }
            other => panic!("expected InputNotFound, got {:?}", other),
        }
    }
}
