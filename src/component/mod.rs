//! 功能元件模組

pub mod photo_organizer;

pub use photo_organizer::PhotoOrganizer;
