//! 拍攝時間解析
//!
//! 只接受 `YYYY:MM:DD HH:MM:SS` 的固定格式，且日期必須實際存在

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;

static REGEX_CAPTURE_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4}):([0-9]{2}):([0-9]{2}) ([0-9]{2}):([0-9]{2}):([0-9]{2})$")
        .expect("Invalid regex")
});

/// 已解析的拍攝時間
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureDate(NaiveDateTime);

impl CaptureDate {
    #[must_use]
    pub const fn datetime(&self) -> NaiveDateTime {
        self.0
    }

    /// 依拍攝日期產生 `YYYY/MM/DD` 相對路徑
    #[must_use]
    pub fn day_bucket(&self) -> PathBuf {
        let date = self.0.date();
        PathBuf::from(format!("{:04}", date.year()))
            .join(format!("{:02}", date.month()))
            .join(format!("{:02}", date.day()))
    }
}

/// 解析拍攝時間字串，格式不符或日期不存在時回傳 `None`
#[must_use]
pub fn parse_capture_date(value: &str) -> Option<CaptureDate> {
    let caps = REGEX_CAPTURE_DATE.captures(value)?;
    let field = |i: usize| caps[i].parse::<u32>().ok();

    let year = i32::try_from(field(1)?).ok()?;
    let date = NaiveDate::from_ymd_opt(year, field(2)?, field(3)?)?;
    let datetime = date.and_hms_opt(field(4)?, field(5)?, field(6)?)?;

    Some(CaptureDate(datetime))
}
