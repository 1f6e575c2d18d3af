use super::classifier::{ClassifyError, DestinationClassifier};
use super::progress::{ConsoleProgress, ProgressReporter, ProgressState};
use crate::config::Config;
use crate::tools::{
    ExifMetadataReader, FileDuplicator, MetadataPreservingCopier, MetadataReader,
    SourceFileEntry, ensure_directory_exists, scan_top_level_files, validate_directory_exists,
};
use anyhow::Result;
use log::{debug, info};
use std::path::PathBuf;

/// 一次批次處理的結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    /// 已複製檔案的目的路徑
    pub copied: Vec<PathBuf>,
    /// 無法開啟而跳過的來源路徑
    pub skipped: Vec<PathBuf>,
    pub progress: ProgressState,
}

/// 依拍攝日期複製照片元件
pub struct PhotoOrganizer<M = ExifMetadataReader, D = MetadataPreservingCopier> {
    config: Config,
    metadata_reader: M,
    duplicator: D,
}

impl PhotoOrganizer {
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self::with_capabilities(config, ExifMetadataReader, MetadataPreservingCopier)
    }
}

impl<M: MetadataReader, D: FileDuplicator> PhotoOrganizer<M, D> {
    pub const fn with_capabilities(config: Config, metadata_reader: M, duplicator: D) -> Self {
        Self {
            config,
            metadata_reader,
            duplicator,
        }
    }

    pub fn run(&self) -> Result<BatchReport> {
        let source = &self.config.source_directory;
        validate_directory_exists(source)?;

        info!("開始掃描目錄: {}", source.display());
        let files = scan_top_level_files(source)?;
        info!("掃描到 {} 個檔案", files.len());

        let mut progress = ConsoleProgress::new(files.len() as u64);
        let report = self.process_batch(&files, &mut progress)?;
        progress.finish();

        info!(
            "照片整理完成 - 複製: {}, 跳過: {}",
            report.copied.len(),
            report.skipped.len()
        );
        Ok(report)
    }

    /// 依序處理每個檔案
    ///
    /// 無法開啟的檔案只輸出訊息並跳過；建立資料夾或複製失敗則中止整批。
    pub fn process_batch<P: ProgressReporter>(
        &self,
        files: &[SourceFileEntry],
        progress: &mut P,
    ) -> Result<BatchReport> {
        let classifier =
            DestinationClassifier::new(&self.metadata_reader, &self.config.target_directory);
        let mut state = ProgressState::new(files.len() as u64);
        let mut copied = Vec::new();
        let mut skipped = Vec::new();

        progress.update(state);

        for file in files {
            match classifier.open(file) {
                Ok(opened) => {
                    let directory = classifier.destination(opened);
                    ensure_directory_exists(&directory)?;

                    let destination = directory.join(&file.name);
                    self.duplicator.duplicate(&file.path, &destination)?;
                    debug!(
                        "複製檔案: {} -> {}",
                        file.path.display(),
                        destination.display()
                    );
                    copied.push(destination);
                }
                Err(ClassifyError::FileUnreadable { path, source }) => {
                    info!("跳過無法開啟的檔案 {}: {source}", path.display());
                    progress.diagnostic(&format!("錯誤！無法開啟 {}，跳過。", path.display()));
                    skipped.push(path);
                }
            }

            state = state.advanced();
            progress.update(state);
        }

        Ok(BatchReport {
            copied,
            skipped,
            progress: state,
        })
    }
}
