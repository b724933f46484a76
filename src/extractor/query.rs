// file: src/extractor/query.rs
// description: dig output extraction into dns query records
// reference: dig answer output format

use crate::extractor::patterns::{QUERY_HEADER, QUERY_RECORD};
use crate::models::{DnsRecord, QueryCommand, QueryRecord};

pub struct QueryExtractor;

impl QueryExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, text: &str) -> QueryRecord {
        let mut record = QueryRecord::new(text);

        if let Some(captures) = QUERY_HEADER.captures(text) {
            record.command = QueryCommand {
                version: captures[2].to_string(),
                string: format!("{} {}", captures[1].to_lowercase(), &captures[3]),
            };
        }

        // Question, answer and authority sections are not told apart.
        record.record_list = QUERY_RECORD
            .captures_iter(text)
            .map(|captures| DnsRecord {
                host: captures[1].to_string(),
                ttl: captures[2].to_string(),
                record_type: captures[3].to_string(),
                record: captures[4].to_string(),
            })
            .collect();

        record
    }
}

impl Default for QueryExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "
; <<>> DiG 9.10.3-P4-Ubuntu <<>> example.com MX
;; global options: +cmd
;; Got answer:
;; ->>HEADER<<- opcode: QUERY, status: NOERROR, id: 40312
;; flags: qr rd ra; QUERY: 1, ANSWER: 2, AUTHORITY: 0, ADDITIONAL: 1

;; QUESTION SECTION:
;example.com.\t\t\tIN\tMX

;; ANSWER SECTION:
example.com.\t\t3600\tIN\tMX\t10 mail-1.example.com.
example.com.\t\t3600\tIN\tMX\t20 mail-2.example.com.

;; Query time: 23 msec
;; SERVER: 127.0.0.53#53(127.0.0.53)
";

    #[test]
    fn test_single_answer_line() {
        let text = "example.com.            300     IN      A       93.184.216.34\n";
        let record = QueryExtractor::new().extract(text);

        assert_eq!(
            record.record_list,
            vec![DnsRecord {
                host: "example.com.".to_string(),
                ttl: "300".to_string(),
                record_type: "A".to_string(),
                record: "93.184.216.34".to_string(),
            }]
        );
    }

    #[test]
    fn test_full_output() {
        let record = QueryExtractor::new().extract(SAMPLE);

        assert_eq!(record.command.version, "9.10.3-P4-Ubuntu");
        assert_eq!(record.command.string, "dig example.com MX");

        let values: Vec<&str> = record.record_list.iter().map(|r| r.record.as_str()).collect();
        assert_eq!(
            values,
            vec!["10 mail-1.example.com.", "20 mail-2.example.com."]
        );
        assert!(record.record_list.iter().all(|r| r.record_type == "MX"));
    }

    #[test]
    fn test_authority_lines_also_match() {
        let text = ";; AUTHORITY SECTION:\nexample.com.\t86400\tIN\tNS\ta.iana-servers.net.\n";
        let record = QueryExtractor::new().extract(text);

        assert_eq!(record.record_list.len(), 1);
        assert_eq!(record.record_list[0].record_type, "NS");
    }

    #[test]
    fn test_empty_input() {
        let record = QueryExtractor::new().extract("");

        assert_eq!(record.command, QueryCommand::default());
        assert!(record.record_list.is_empty());
    }
}
