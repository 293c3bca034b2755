//! # Network Record Model
//!
//! The single domain entity of the tool: one visible wireless network as
//! reported by the scan source.
//!
//! Records are created fresh on every scan, never mutated afterwards, and
//! replaced wholesale when a new scan supersedes them. The parsing pipeline
//! guarantees that `ssid`, `security` and `signal` are always populated, so
//! downstream code never needs defensive checks.

use serde::{Deserialize, Serialize};

/// Placeholder SSID for networks that do not broadcast a name.
pub const HIDDEN_SSID: &str = "<hidden>";

/// Security descriptor used when the scan source reported nothing.
pub const UNKNOWN_SECURITY: &str = "UNKNOWN";

/// One wireless network observed by a scan.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkRecord {
    pub ssid: String,
    /// Raw security descriptor as the scan source printed it, e.g.
    /// `"WPA2"` or `"WPA1 WPA2 802.1X"`. Classification happens later.
    pub security: String,
    pub signal: i32,
    /// Only present on the sentinel record produced when the scan source
    /// itself failed. Omitted from reports otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl NetworkRecord {
    pub fn new(ssid: impl Into<String>, security: impl Into<String>, signal: i32) -> Self {
        Self {
            ssid: ssid.into(),
            security: security.into(),
            signal,
            error: None,
        }
    }

    /// Sentinel record standing in for a scan whose source exited with a
    /// failure. Carries the failure detail instead of measurements.
    pub fn source_error(detail: impl Into<String>) -> Self {
        Self {
            ssid: "(error)".to_string(),
            security: "(none)".to_string(),
            signal: 0,
            error: Some(detail.into()),
        }
    }

    pub fn is_source_error(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_error_record_shape() {
        let record = NetworkRecord::source_error("nmcli exited with status 10");
        assert_eq!(record.ssid, "(error)");
        assert_eq!(record.security, "(none)");
        assert_eq!(record.signal, 0);
        assert!(record.is_source_error());
    }

    #[test]
    fn plain_record_has_no_error_field() {
        let record = NetworkRecord::new("Home_WiFi", "WPA2", 72);
        assert!(!record.is_source_error());
    }
}
