//! Input processing module
//! Handles file type detection, text extraction and the resolver

pub mod file_detector;
pub mod manager;
pub mod markdown;
pub mod pdf;
pub mod record;
pub mod text_extractor;

pub use file_detector::FileType;
pub use manager::DocumentLoader;
pub use record::{DocumentRecord, Metadata};
