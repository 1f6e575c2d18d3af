use std::ffi::OsString;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// 展開開頭的 `~`，無法取得家目錄時保留原樣
#[must_use]
pub fn expand_home(raw: &str) -> PathBuf {
    expand_home_with(raw, dirs::home_dir().as_deref())
}

fn expand_home_with(raw: &str, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(raw);
    };

    if raw == "~" {
        return home.to_path_buf();
    }

    match raw
        .strip_prefix("~/")
        .or_else(|| raw.strip_prefix(&format!("~{MAIN_SEPARATOR}")))
    {
        Some(rest) => home.join(rest),
        None => PathBuf::from(raw),
    }
}

/// 確保路徑以分隔符號結尾
#[must_use]
pub fn with_trailing_separator(path: PathBuf) -> PathBuf {
    let mut raw: OsString = path.into_os_string();
    let ends_with_separator = raw
        .to_string_lossy()
        .ends_with(|c: char| std::path::is_separator(c));

    if !ends_with_separator {
        raw.push(MAIN_SEPARATOR.to_string());
    }
    PathBuf::from(raw)
}
