//! # Scan Output Parser
//!
//! Turns the raw tabular text of the scan source into [`NetworkRecord`]s.
//!
//! The source prints three columns (SSID, SECURITY, SIGNAL) padded with
//! multiple spaces, so columns are split on runs of **two or more**
//! whitespace characters. A single space inside an SSID does not split it.
//! An optional header row (containing both the `SSID` and `SECURITY`
//! tokens) is detected and skipped. Degraded input never errors: short
//! lines are dropped, empty fields get defaults, unparsable signal values
//! become 0.

use wavescan_common::network::record::{HIDDEN_SSID, NetworkRecord, UNKNOWN_SECURITY};

/// Parses one scan-source dump into records. Total: any text maps to a
/// (possibly empty) record list.
pub fn parse_scan_output(raw: &str) -> Vec<NetworkRecord> {
    let mut lines = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .peekable();

    if let Some(first) = lines.peek() {
        if first.contains("SSID") && first.contains("SECURITY") {
            lines.next();
        }
    }

    let mut records = Vec::new();
    for line in lines {
        let fields = split_columns(line);
        // Fields beyond the third are ignored; fewer than three drops the line.
        if fields.len() < 3 {
            continue;
        }

        let ssid = if fields[0].is_empty() { HIDDEN_SSID } else { fields[0] };
        let security = if fields[1].is_empty() { UNKNOWN_SECURITY } else { fields[1] };
        let signal = fields[2].parse::<i32>().unwrap_or(0);

        records.push(NetworkRecord::new(ssid, security, signal));
    }
    records
}

/// Splits a trimmed line on runs of two or more whitespace characters.
fn split_columns(line: &str) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut field_start = 0;
    let mut run_start = 0;
    let mut run_len = 0;

    for (idx, ch) in line.char_indices() {
        if ch.is_whitespace() {
            if run_len == 0 {
                run_start = idx;
            }
            run_len += 1;
        } else {
            if run_len >= 2 {
                fields.push(&line[field_start..run_start]);
                field_start = idx;
            }
            run_len = 0;
        }
    }
    fields.push(line[field_start..].trim_end());
    fields
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_row_is_skipped() {
        let raw = "SSID  SECURITY  SIGNAL\nHome  WPA2      71\nOpen  --        40\n";
        let records = parse_scan_output(raw);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], NetworkRecord::new("Home", "WPA2", 71));
        assert_eq!(records[1], NetworkRecord::new("Open", "--", 40));
    }

    #[test]
    fn without_header_every_line_is_data() {
        let raw = "Home  WPA2  71\nCafe  WPA   55";
        assert_eq!(parse_scan_output(raw).len(), 2);
    }

    #[test]
    fn single_space_stays_inside_the_ssid() {
        let records = parse_scan_output("Guest Network  WPA2  63");
        assert_eq!(records[0].ssid, "Guest Network");
        assert_eq!(records[0].security, "WPA2");
        assert_eq!(records[0].signal, 63);
    }

    #[test]
    fn short_lines_are_dropped_silently() {
        let raw = "SSID  SECURITY  SIGNAL\njustonefield\nHome  WPA2  71\nonly  two";
        let records = parse_scan_output(raw);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].ssid, "Home");
    }

    #[test]
    fn extra_columns_are_ignored() {
        let records = parse_scan_output("Home  WPA2  71  extra  columns");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0], NetworkRecord::new("Home", "WPA2", 71));
    }

    #[test]
    fn unparsable_signal_defaults_to_zero() {
        let records = parse_scan_output("Home  WPA2  strong");
        assert_eq!(records[0].signal, 0);
    }

    #[test]
    fn blank_lines_are_ignored() {
        let raw = "\n\nSSID  SECURITY  SIGNAL\n\nHome  WPA2  71\n\n";
        let records = parse_scan_output(raw);
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn split_columns_on_multi_space_runs_only() {
        assert_eq!(split_columns("a  b   c"), vec!["a", "b", "c"]);
        assert_eq!(split_columns("a b  c"), vec!["a b", "c"]);
        assert_eq!(split_columns("single"), vec!["single"]);
        assert_eq!(split_columns("tab\t\tsplit  x"), vec!["tab", "split", "x"]);
    }
}
