// file: src/extractor/scan.rs
// description: nmap normal output extraction into scan records
// reference: nmap normal output format

use crate::extractor::patterns::{SCAN_HEADER, SCAN_HOST, SCAN_OS, SCAN_PORT};
use crate::models::{ScanCommand, ScanRecord, ScannedHost, ScannedPort};

pub struct ScanExtractor;

impl ScanExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, text: &str) -> ScanRecord {
        let mut record = ScanRecord::new(text);

        if let Some(command) = self.extract_command(text) {
            record.command = command;
        }

        if let Some(captures) = SCAN_OS.captures(text) {
            record.os = captures[1].to_string();
        }

        record.host_list = self.extract_hosts(text);
        record.port_list = self.extract_ports(text);

        record
    }

    fn extract_command(&self, text: &str) -> Option<ScanCommand> {
        let captures = SCAN_HEADER.captures(text)?;
        Some(ScanCommand {
            version: captures[1].to_string(),
            string: captures[2].to_string(),
        })
    }

    fn extract_hosts(&self, text: &str) -> Vec<ScannedHost> {
        SCAN_HOST
            .captures_iter(text)
            .map(|captures| ScannedHost {
                ip_address: captures[1].to_string(),
                latency: captures[2].to_string(),
                mac_address: captures[3].to_string(),
                maker: captures[4].to_string(),
            })
            .collect()
    }

    fn extract_ports(&self, text: &str) -> Vec<ScannedPort> {
        SCAN_PORT
            .captures_iter(text)
            .map(|captures| ScannedPort {
                port: captures[1].to_string(),
                state: captures[2].to_string(),
                service: captures[3].to_string(),
                version: captures[4].to_string(),
            })
            .collect()
    }
}

impl Default for ScanExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "# Nmap 7.80 scan initiated Mon Jan  1 10:00:00 2018 as: nmap -sV -O 192.168.1.0/24
Nmap scan report for 192.168.1.1
Host is up (0.00031s latency).
MAC Address: 00:1A:2B:3C:4D:5E (Netgear)
Nmap scan report for 192.168.1.20
Host is up (0.0012s latency).
MAC Address: AA:BB:CC:DD:EE:FF (Raspberry Pi Foundation)
PORT     STATE  SERVICE VERSION
22/tcp   open   ssh     OpenSSH 7.6p1 Ubuntu 4ubuntu0.3 (Ubuntu Linux; protocol 2.0)
80/tcp   open   http    nginx 1.14.0 (Ubuntu)
443/tcp  closed https
Service Info: OS: Linux; CPE: cpe:/o:linux:linux_kernel
# Nmap done at Mon Jan  1 10:00:30 2018 -- 256 IP addresses (2 hosts up) scanned in 30.12 seconds
";

    #[test]
    fn test_header_captured_verbatim() {
        let text = "# ExampleScan 7.80 scan initiated Mon Jan 1 2018 as: examplescan -sV 10.0.0.1\n";
        let record = ScanExtractor::new().extract(text);

        assert_eq!(record.command.version, "7.80");
        assert_eq!(record.command.string, "examplescan -sV 10.0.0.1");
    }

    #[test]
    fn test_full_report() {
        let record = ScanExtractor::new().extract(SAMPLE);

        assert_eq!(record.command.version, "7.80");
        assert_eq!(record.command.string, "nmap -sV -O 192.168.1.0/24");
        assert_eq!(record.os, "Linux; CPE: cpe:/o:linux:linux_kernel");

        assert_eq!(
            record.host_list,
            vec![
                ScannedHost {
                    ip_address: "192.168.1.1".to_string(),
                    latency: "0.00031".to_string(),
                    mac_address: "00:1A:2B:3C:4D:5E".to_string(),
                    maker: "Netgear".to_string(),
                },
                ScannedHost {
                    ip_address: "192.168.1.20".to_string(),
                    latency: "0.0012".to_string(),
                    mac_address: "AA:BB:CC:DD:EE:FF".to_string(),
                    maker: "Raspberry Pi Foundation".to_string(),
                },
            ]
        );

        let ports: Vec<(&str, &str, &str, &str)> = record
            .port_list
            .iter()
            .map(|p| {
                (
                    p.port.as_str(),
                    p.state.as_str(),
                    p.service.as_str(),
                    p.version.as_str(),
                )
            })
            .collect();
        assert_eq!(
            ports,
            vec![
                (
                    "22/tcp",
                    "open",
                    "ssh",
                    "OpenSSH 7.6p1 Ubuntu 4ubuntu0.3 (Ubuntu Linux; protocol 2.0)"
                ),
                ("80/tcp", "open", "http", "nginx 1.14.0 (Ubuntu)"),
                ("443/tcp", "closed", "https", ""),
            ]
        );
    }

    #[test]
    fn test_broken_host_block_is_skipped() {
        let text = "Nmap scan report for 10.0.0.5\nHost is up (0.0004s latency).\n\nMAC Address: 00:11:22:33:44:55 (Acme)\n\
Nmap scan report for 10.0.0.6\nHost is up (0.0005s latency).\nMAC Address: 00:11:22:33:44:66 (Acme)\n";
        let record = ScanExtractor::new().extract(text);

        assert_eq!(record.host_list.len(), 1);
        assert_eq!(record.host_list[0].ip_address, "10.0.0.6");
    }

    #[test]
    fn test_empty_input() {
        let record = ScanExtractor::new().extract("");

        assert_eq!(record.command, ScanCommand::default());
        assert!(record.os.is_empty());
        assert!(record.host_list.is_empty());
        assert!(record.port_list.is_empty());
        assert_eq!(record.parser.raw_input, "");
    }
}
