//! The central **abstraction** for wireless network scanning.
//!
//! This module composes a [`ScanSource`] (the seam over the external
//! network-manager tool) with the output parser and resolves the three
//! possible outcomes of an invocation:
//!
//! * the tool ran: its output is parsed into records,
//! * the tool is not installed: a fixed simulated record set is returned
//!   so the tool remains usable as an offline demo,
//! * the tool ran but failed: a single sentinel error record is returned
//!   inline, never an `Err` to the caller.
//!
//! **Architectural note:** callers depend on [`ScanSource`] rather than on
//! the concrete [`NmcliSource`], which keeps the scan flow testable without
//! a wireless interface.

mod parser;
mod source;

pub use parser::parse_scan_output;
pub use source::{NmcliSource, ScanSource, SourceResult};

use tracing::{debug, warn};
use wavescan_common::network::record::NetworkRecord;

/// Runs one full scan against the given source and resolves the outcome
/// into a record list. Infallible: every failure mode maps to a defined
/// record set.
pub async fn scan_networks(source: &dyn ScanSource) -> Vec<NetworkRecord> {
    match source.list_networks().await {
        SourceResult::Output(raw) => {
            let records = parse_scan_output(&raw);
            debug!("scan source returned {} networks", records.len());
            records
        }
        SourceResult::Unavailable => {
            warn!("scan source not installed, returning simulated networks");
            simulated_networks()
        }
        SourceResult::Failed(detail) => {
            warn!("scan source failed: {detail}");
            vec![NetworkRecord::source_error(detail)]
        }
    }
}

/// Offline-demo record set used when no scan source is installed. Fixed
/// values and order; tests depend on them.
pub fn simulated_networks() -> Vec<NetworkRecord> {
    vec![
        NetworkRecord::new("Home_WiFi", "WPA2", 72),
        NetworkRecord::new("Old_WEP", "WEP", 34),
        NetworkRecord::new("Cafe_FreeWiFi", "OPEN", 60),
    ]
}
