mod capture_date;
mod file_duplicator;
mod file_scanner;
mod metadata_reader;
mod path_expander;
mod path_validator;

pub use capture_date::{CaptureDate, parse_capture_date};
pub use file_duplicator::{FileDuplicator, MetadataPreservingCopier};
pub use file_scanner::{SourceFileEntry, scan_top_level_files};
pub use metadata_reader::{ExifMetadataReader, MetadataReader, ORIGINAL_CAPTURE_TAG, TagMap};
pub use path_expander::{expand_home, with_trailing_separator};
pub use path_validator::{ensure_directory_exists, validate_directory_exists};
