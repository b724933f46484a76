// file: src/repository/mod.rs
// description: Input discovery and classification module exports
// reference: Internal module structure

pub mod classifier;
pub mod scanner;

pub use classifier::FileClassifier;
pub use scanner::{FileScanner, ScannedFile};
