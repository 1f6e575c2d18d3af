use anyhow::{Context, Result, bail};
use std::path::Path;

pub fn validate_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("路徑不存在: {}", path.display());
    }
    if !path.is_dir() {
        bail!("路徑不是資料夾: {}", path.display());
    }
    Ok(())
}

/// 建立資料夾（含所有上層），已存在時不視為錯誤
pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)
        .with_context(|| format!("無法建立資料夾: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");

        let err = validate_directory_exists(&missing).unwrap_err();
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_validate_file_is_not_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("photo.jpg");
        std::fs::write(&file_path, "content").unwrap();

        assert!(validate_directory_exists(&file_path).is_err());
        assert!(validate_directory_exists(temp_dir.path()).is_ok());
    }

    #[test]
    fn test_ensure_directory_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("2023").join("07").join("04");

        ensure_directory_exists(&nested).unwrap();
        ensure_directory_exists(&nested).unwrap();

        assert!(nested.is_dir());
    }

    #[test]
    fn test_ensure_directory_fails_under_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let err = ensure_directory_exists(&blocker.join("2023")).unwrap_err();
        assert!(err.to_string().contains("blocker"));
    }
}
