use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use log::warn;
use std::io::{self, Stdout, Write};

/// 進度計數：每處理完一個檔案（複製或跳過）前進 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressState {
    pub position: u64,
    pub total: u64,
}

impl ProgressState {
    #[must_use]
    pub const fn new(total: u64) -> Self {
        Self { position: 0, total }
    }

    /// 前進一步並回傳新的狀態
    ///
    /// 同一個檔案重複前進會在 debug 建置時 panic，release 建置停在總數
    #[must_use]
    pub const fn advanced(self) -> Self {
        debug_assert!(self.position < self.total, "進度超過檔案總數");
        let position = if self.position < self.total {
            self.position + 1
        } else {
            self.total
        };
        Self {
            position,
            total: self.total,
        }
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.position == self.total
    }
}

pub trait ProgressReporter {
    fn update(&mut self, state: ProgressState);
    /// 輸出訊息，不打斷進度條
    fn diagnostic(&mut self, message: &str);
    fn finish(&mut self);
}

/// 進度條畫在 stderr，訊息寫到 stdout
pub struct ConsoleProgress<W: Write = Stdout> {
    progress_bar: ProgressBar,
    output: W,
}

impl ConsoleProgress {
    #[must_use]
    pub fn new(total: u64) -> Self {
        Self::with_target(total, ProgressDrawTarget::stderr(), io::stdout())
    }
}

impl<W: Write> ConsoleProgress<W> {
    pub fn with_target(total: u64, draw_target: ProgressDrawTarget, output: W) -> Self {
        let progress_bar = ProgressBar::with_draw_target(Some(total), draw_target);
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
                .expect("Invalid progress bar template")
                .progress_chars("#>-"),
        );
        progress_bar.set_message("複製照片中...");
        Self {
            progress_bar,
            output,
        }
    }
}

impl<W: Write> ProgressReporter for ConsoleProgress<W> {
    fn update(&mut self, state: ProgressState) {
        self.progress_bar.set_position(state.position);
    }

    fn diagnostic(&mut self, message: &str) {
        let output = &mut self.output;
        let result = self.progress_bar.suspend(|| {
            writeln!(output, "{message}")?;
            output.flush()
        });
        if let Err(e) = result {
            warn!("無法輸出訊息 ({message}): {e}");
        }
    }

    fn finish(&mut self) {
        self.progress_bar.finish_with_message("完成");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_advances_by_one() {
        let state = ProgressState::new(2);
        assert!(!state.is_complete());

        let state = state.advanced();
        assert_eq!(state.position, 1);

        let state = state.advanced();
        assert!(state.is_complete());
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "進度超過檔案總數")]
    fn test_double_advance_is_reported() {
        let _ = ProgressState::new(1).advanced().advanced();
    }

    #[test]
    fn test_diagnostic_written_when_bar_hidden() {
        let mut progress =
            ConsoleProgress::with_target(3, ProgressDrawTarget::hidden(), Vec::new());

        progress.update(ProgressState::new(3).advanced());
        progress.diagnostic("錯誤！無法開啟 /card/c.txt，跳過。");
        progress.finish();

        let written = String::from_utf8(progress.output).unwrap();
        assert_eq!(written, "錯誤！無法開啟 /card/c.txt，跳過。\n");
    }

    #[test]
    fn test_empty_batch_is_complete() {
        assert!(ProgressState::new(0).is_complete());
    }
}
