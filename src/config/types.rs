use std::path::PathBuf;

/// 已解析的執行設定，兩個路徑皆已展開 `~` 並以分隔符號結尾
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source_directory: PathBuf,
    pub target_directory: PathBuf,
}
