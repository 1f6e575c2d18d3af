//! 依拍攝日期複製照片元件
//!
//! 讀取來源資料夾第一層的檔案，依 EXIF 拍攝日期複製到
//! `<目的資料夾>/YYYY/MM/DD/`，沒有日期的檔案直接放在目的資料夾

mod classifier;
mod main;
mod progress;

pub use classifier::{ClassifyError, DestinationClassifier, OpenedSource};
pub use main::{BatchReport, PhotoOrganizer};
pub use progress::{ConsoleProgress, ProgressReporter, ProgressState};
