// file: src/extractor/patterns.rs
// description: compiled regex patterns for tool output extraction
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // nmap
    pub static ref SCAN_HEADER: Regex = Regex::new(
        r"# [A-Za-z]+ ([0-9.]+) scan initiated .+ as: ([^\n]+)"
    ).expect("SCAN_HEADER regex is valid");

    pub static ref SCAN_OS: Regex = Regex::new(
        r"Service Info: OS: ([^\n]+)"
    ).expect("SCAN_OS regex is valid");

    // report, latency and MAC lines must be contiguous
    pub static ref SCAN_HOST: Regex = Regex::new(
        r"[A-Za-z]+ scan report for ([0-9.]+)\nHost is up \(([0-9.]+)s latency\)\.\nMAC Address: ([0-9A-Fa-f:]{17}) \(([^)\n]+)\)"
    ).expect("SCAN_HOST regex is valid");

    pub static ref SCAN_PORT: Regex = Regex::new(
        r"([0-9]+/[a-z]+)[ \t]+([a-z]+)[ \t]+([^ \t\n]+)[ \t]*([^\n]*)"
    ).expect("SCAN_PORT regex is valid");

    // dig
    pub static ref QUERY_HEADER: Regex = Regex::new(
        r"; <<>> ([A-Za-z]+) ([0-9][^ \t\n]*) <<>> ([^\n]+)"
    ).expect("QUERY_HEADER regex is valid");

    pub static ref QUERY_RECORD: Regex = Regex::new(
        r"(?m)^([A-Za-z0-9._-]+)[ \t]+([0-9]+)[ \t]+IN[ \t]+([A-Z0-9]+)[ \t]+([^\n]+)"
    ).expect("QUERY_RECORD regex is valid");

    // traceroute
    pub static ref TRACE_HEADER: Regex = Regex::new(
        r"traceroute to ([^ \t\n]+) \(([0-9.]+)\), ([0-9]+) hops max, ([0-9]+) byte packets"
    ).expect("TRACE_HEADER regex is valid");

    pub static ref TRACE_HOP: Regex = Regex::new(
        r"(?m)^[ \t]*([0-9]+)  ([^ \t\n]+) \(([0-9.]+)\)  ([0-9.]+) ms"
    ).expect("TRACE_HOP regex is valid");
}
