use std::time::{Duration, Instant};

use colored::*;
use tracing::{Instrument, info_span};

use crate::terminal::{colors, network_fmt, print};
use crate::wprint;
use wavescan_common::network::record::NetworkRecord;
use wavescan_common::warn;
use wavescan_core::scanner::{self, NmcliSource};

/// Runs one scan and prints the result listing. Always returns a record
/// list; source problems surface as the simulated set or a sentinel error
/// record, never as a failure.
pub async fn scan() -> Vec<NetworkRecord> {
    let span = info_span!("scan", indicatif.pb_show = true);

    let start_time: Instant = Instant::now();
    let networks = scanner::scan_networks(&NmcliSource).instrument(span).await;

    scan_ends(&networks, start_time.elapsed());
    networks
}

fn scan_ends(networks: &[NetworkRecord], total_time: Duration) {
    if networks.is_empty() {
        print::no_results();
        return;
    }

    print_networks(networks);
    print_summary(networks, total_time);
}

fn print_networks(networks: &[NetworkRecord]) {
    for (idx, network) in networks.iter().enumerate() {
        if network.is_source_error() {
            warn!("scan source failed; showing the error record it produced");
        }
        network_fmt::print_network(network, idx);
        if idx + 1 != networks.len() {
            wprint!();
        }
    }
}

fn print_summary(networks: &[NetworkRecord], total_time: Duration) {
    let count: ColoredString = format!("{} networks", networks.len()).bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: ColoredString =
        format!("Scan complete: {count} listed in {total_time}").color(colors::TEXT_DEFAULT);

    print::fat_separator();
    print::centerln(&output);
}
