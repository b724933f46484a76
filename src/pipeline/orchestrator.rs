// file: src/pipeline/orchestrator.rs
// description: coordinates directory scanning, extraction and json output
// reference: strictly sequential, stops at the first failure

use crate::config::Config;
use crate::error::Result;
use crate::exporter::JsonExporter;
use crate::pipeline::processor::FileProcessor;
use crate::pipeline::progress::{PipelineStats, ProgressTracker};
use crate::repository::FileScanner;
use tracing::{info, warn};

pub struct PipelineOrchestrator {
    config: Config,
    processor: FileProcessor,
    exporter: JsonExporter,
    colored: bool,
}

impl PipelineOrchestrator {
    pub fn new(config: Config) -> Self {
        let processor = FileProcessor::new(config.classification.rules.clone());
        let exporter = JsonExporter::new(config.output.indent, config.scan.output_extension.clone());

        Self {
            config,
            processor,
            exporter,
            colored: true,
        }
    }

    pub fn with_color(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// Converts every tagged file under the configured root. Outputs written
    /// before a failure are left in place.
    pub fn run(&self) -> Result<PipelineStats> {
        let root = &self.config.scan.root;
        info!("Starting conversion under {}", root.display());

        let scanner = FileScanner::new(self.config.scan.clone());
        let files = scanner.scan_directory(root)?;

        if files.is_empty() {
            warn!("No files found to process");
            return Ok(PipelineStats::new());
        }

        let mut progress = ProgressTracker::with_color(files.len(), self.colored);

        for file in &files {
            progress.set_message(file.relative_path.clone());

            let Some(record) = self.processor.process(file)? else {
                progress.record_skipped();
                continue;
            };

            let output = self.exporter.write(&record, &file.path)?;
            info!(
                "Converted {} ({}) -> {}",
                file.relative_path,
                record.format(),
                output.display()
            );
            progress.record_converted(record.format(), file.size);
        }

        progress.finish();
        let stats = progress.get_stats();
        self.log_final_stats(&stats);

        Ok(stats)
    }

    fn log_final_stats(&self, stats: &PipelineStats) {
        info!("=== Conversion Summary ===");
        info!("Duration: {} seconds", stats.duration_secs);
        info!("Files discovered: {}", stats.files_discovered);
        info!("Files converted: {}", stats.files_converted);
        info!("Files without tag: {}", stats.files_skipped);
        info!("Scan records: {}", stats.scan_records);
        info!("Query records: {}", stats.query_records);
        info!("Trace records: {}", stats.trace_records);
        info!("Bytes processed: {}", stats.total_bytes_processed);
        info!(
            "Processing speed: {:.2} files/sec",
            stats.files_per_second()
        );
        info!("==========================");
    }
}
