//! 影像中繼資料讀取
//!
//! 以 `<IFD> <Tag>` 的名稱（例如 `EXIF DateTimeOriginal`）回傳所有標籤。
//! 讀取為盡力而為：非影像檔或沒有 EXIF 的檔案回傳空的對照表。

use exif::{Context, Field, In, Reader, Value};
use log::debug;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;

/// 原始拍攝時間的標籤名稱
pub const ORIGINAL_CAPTURE_TAG: &str = "EXIF DateTimeOriginal";

/// 標籤名稱 -> 標籤值
pub type TagMap = HashMap<String, String>;

pub trait MetadataReader {
    fn read_tags(&self, source: &mut BufReader<File>) -> TagMap;
}

/// 以 kamadak-exif 讀取 JPEG / TIFF / HEIF / PNG / WebP 內嵌的 EXIF
#[derive(Debug, Default, Clone, Copy)]
pub struct ExifMetadataReader;

impl MetadataReader for ExifMetadataReader {
    fn read_tags(&self, source: &mut BufReader<File>) -> TagMap {
        let exif = match Reader::new().read_from_container(source) {
            Ok(exif) => exif,
            Err(e) => {
                debug!("沒有可用的 EXIF 資料: {e}");
                return TagMap::new();
            }
        };

        exif.fields()
            .map(|field| (tag_name(field), tag_value(field)))
            .collect()
    }
}

fn tag_name(field: &Field) -> String {
    let group = if field.ifd_num == In::THUMBNAIL {
        "Thumbnail"
    } else {
        match field.tag.context() {
            Context::Tiff => "Image",
            Context::Exif => "EXIF",
            Context::Gps => "GPS",
            Context::Interop => "Interoperability",
            _ => "Unknown",
        }
    };
    format!("{group} {}", field.tag)
}

/// ASCII 標籤保留原始字串，`display_value` 會把日期改寫成 `YYYY-MM-DD`
fn tag_value(field: &Field) -> String {
    match &field.value {
        Value::Ascii(parts) => parts
            .first()
            .map(|bytes| {
                String::from_utf8_lossy(bytes)
                    .trim_end_matches(['\0', ' '])
                    .to_string()
            })
            .unwrap_or_default(),
        _ => field.display_value().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// 建立只含 `DateTimeOriginal` 的最小 JPEG
    fn jpeg_with_capture_date(datetime: &str) -> Vec<u8> {
        let mut value = datetime.as_bytes().to_vec();
        value.push(0);
        let count = u32::try_from(value.len()).unwrap();

        // TIFF 標頭 (8) + IFD0 (18) + Exif IFD (18)，資料從位移 44 開始
        let mut tiff = Vec::new();
        tiff.extend_from_slice(b"MM\x00\x2a\x00\x00\x00\x08");
        tiff.extend_from_slice(&1u16.to_be_bytes());
        tiff.extend_from_slice(&0x8769u16.to_be_bytes());
        tiff.extend_from_slice(&4u16.to_be_bytes());
        tiff.extend_from_slice(&1u32.to_be_bytes());
        tiff.extend_from_slice(&26u32.to_be_bytes());
        tiff.extend_from_slice(&0u32.to_be_bytes());
        tiff.extend_from_slice(&1u16.to_be_bytes());
        tiff.extend_from_slice(&0x9003u16.to_be_bytes());
        tiff.extend_from_slice(&2u16.to_be_bytes());
        tiff.extend_from_slice(&count.to_be_bytes());
        tiff.extend_from_slice(&44u32.to_be_bytes());
        tiff.extend_from_slice(&0u32.to_be_bytes());
        tiff.extend_from_slice(&value);

        let segment_len = u16::try_from(2 + 6 + tiff.len()).unwrap();
        let mut jpeg = vec![0xFF, 0xD8, 0xFF, 0xE1];
        jpeg.extend_from_slice(&segment_len.to_be_bytes());
        jpeg.extend_from_slice(b"Exif\x00\x00");
        jpeg.extend_from_slice(&tiff);
        jpeg.extend_from_slice(&[0xFF, 0xD9]);
        jpeg
    }

    fn read_tags_from(content: &[u8]) -> TagMap {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("photo.jpg");
        fs::write(&path, content).unwrap();

        let mut source = BufReader::new(File::open(&path).unwrap());
        ExifMetadataReader.read_tags(&mut source)
    }

    #[test]
    fn test_read_capture_date() {
        let tags = read_tags_from(&jpeg_with_capture_date("2023:07:04 10:15:00"));

        assert_eq!(
            tags.get(ORIGINAL_CAPTURE_TAG).map(String::as_str),
            Some("2023:07:04 10:15:00")
        );
    }

    #[test]
    fn test_non_image_yields_empty_map() {
        assert!(read_tags_from(b"just some text").is_empty());
    }

    #[test]
    fn test_jpeg_without_exif_yields_empty_map() {
        assert!(read_tags_from(&[0xFF, 0xD8, 0xFF, 0xD9]).is_empty());
    }

    #[test]
    fn test_empty_file_yields_empty_map() {
        assert!(read_tags_from(b"").is_empty());
    }
}
