use clap::{ArgAction, Parser};

pub const DEFAULT_SOURCE_DIRECTORY: &str = "./";
pub const DEFAULT_TARGET_DIRECTORY: &str = "~/Pictures/";

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "photo_date_organize")]
#[command(version, about = "Copies pictures from a directory to a photos directory.")]
#[command(after_help = "The photos will be stored in a directory structure that reflects the \
creation date of the photos as known by the EXIF metadata. Namely, the directory will be \
TARGET_DIRECTORY/YYYY/mm/dd/[image_name] where YYYY is the 4-digit year, mm the 2-digit month, \
and dd the 2-digit day.")]
pub struct Cli {
    /// The directory from which pictures are being copied. Only images in the root of the directory will be used.
    #[arg(long, default_value = DEFAULT_SOURCE_DIRECTORY)]
    pub source_directory: String,

    /// The directory to which pictures will be sent.
    #[arg(long, default_value = DEFAULT_TARGET_DIRECTORY)]
    pub target_directory: String,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
