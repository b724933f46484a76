// file: src/exporter/mod.rs
// description: record export module exports

pub mod json;

pub use json::JsonExporter;
