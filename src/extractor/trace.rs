// file: src/extractor/trace.rs
// description: traceroute output extraction into trace records

use crate::extractor::patterns::{TRACE_HEADER, TRACE_HOP};
use crate::models::{TraceCommand, TraceHop, TraceRecord};

pub struct TraceExtractor;

impl TraceExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, text: &str) -> TraceRecord {
        let mut record = TraceRecord::new(text);

        if let Some(captures) = TRACE_HEADER.captures(text) {
            record.command = TraceCommand {
                string: captures[0].to_string(),
                host: captures[1].to_string(),
                ip_address: captures[2].to_string(),
                max_hops: captures[3].to_string(),
                packet_size: captures[4].to_string(),
            };
        }

        // Only the first probe of a hop is kept; timeout-only hops never match.
        record.hop_list = TRACE_HOP
            .captures_iter(text)
            .map(|captures| TraceHop {
                hop: captures[1].to_string(),
                host: captures[2].to_string(),
                ip_address: captures[3].to_string(),
                latency: captures[4].to_string(),
            })
            .collect();

        record
    }
}

impl Default for TraceExtractor {
    fn default() -> Self {
        Self::new()
    }
}
