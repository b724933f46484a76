// file: src/pipeline/progress.rs
// description: progress tracking and statistics reporting for pipeline execution
// reference: uses indicatif for progress bars and tracks processing metrics

use crate::models::ToolFormat;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineStats {
    pub files_discovered: usize,
    pub files_converted: usize,
    pub files_skipped: usize,
    pub scan_records: usize,
    pub query_records: usize,
    pub trace_records: usize,
    pub total_bytes_processed: u64,
    pub duration_secs: u64,
}

impl PipelineStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files_per_second(&self) -> f64 {
        if self.duration_secs == 0 {
            return 0.0;
        }
        self.files_converted as f64 / self.duration_secs as f64
    }

    pub fn records_for(&self, format: ToolFormat) -> usize {
        match format {
            ToolFormat::Scan => self.scan_records,
            ToolFormat::Query => self.query_records,
            ToolFormat::Trace => self.trace_records,
        }
    }
}

pub struct ProgressTracker {
    bar: ProgressBar,
    stats: PipelineStats,
    start_time: Instant,
}

impl ProgressTracker {
    pub fn with_color(total_files: usize, colored: bool) -> Self {
        Self {
            bar: create_progress_bar(total_files as u64, colored),
            stats: PipelineStats {
                files_discovered: total_files,
                ..PipelineStats::default()
            },
            start_time: Instant::now(),
        }
    }

    pub fn record_converted(&mut self, format: ToolFormat, bytes: u64) {
        self.stats.files_converted += 1;
        self.stats.total_bytes_processed += bytes;
        match format {
            ToolFormat::Scan => self.stats.scan_records += 1,
            ToolFormat::Query => self.stats.query_records += 1,
            ToolFormat::Trace => self.stats.trace_records += 1,
        }
        self.bar.inc(1);
    }

    pub fn record_skipped(&mut self) {
        self.stats.files_skipped += 1;
        self.bar.inc(1);
    }

    pub fn set_message(&self, message: String) {
        self.bar.set_message(message);
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    pub fn get_stats(&self) -> PipelineStats {
        PipelineStats {
            duration_secs: self.start_time.elapsed().as_secs(),
            ..self.stats.clone()
        }
    }
}

fn create_progress_bar(total: u64, colored: bool) -> ProgressBar {
    let bar = ProgressBar::new(total);
    let template = if colored {
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}"
    } else {
        "{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} {msg}"
    };

    if let Ok(style) = ProgressStyle::default_bar().template(template) {
        bar.set_style(style.progress_chars(if colored { "█▓▒░" } else { "=>-" }));
    }
    bar
}
