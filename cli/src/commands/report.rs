use std::path::Path;

use wavescan_common::network::record::NetworkRecord;
use wavescan_common::{error, success};
use wavescan_core::report::write_report;

/// Renders the held networks to `path`; the format follows the file
/// extension. A write failure is logged and does not end the session.
pub fn report(networks: &[NetworkRecord], path: &Path) {
    match write_report(networks, path) {
        Ok(written) => success!("Report saved to {}", written.display()),
        Err(e) => error!("{e}"),
    }
}
