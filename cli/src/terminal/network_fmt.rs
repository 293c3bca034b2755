use colored::*;
use wavescan_common::network::record::NetworkRecord;
use wavescan_common::network::security::{self, SecurityClass};
use wavescan_common::network::signal::SignalQuality;

use crate::terminal::print;

/// Builds the detail rows shown under a network's tree head.
pub fn to_detail_rows(record: &NetworkRecord) -> Vec<(String, ColoredString)> {
    let class = security::classify(&record.security);
    let quality = SignalQuality::from_signal(record.signal);

    let mut rows: Vec<(String, ColoredString)> = vec![
        ("Security".to_string(), security_value(&class)),
        ("Signal".to_string(), signal_value(record.signal, quality)),
    ];

    if let Some(detail) = &record.error {
        rows.push(("Error".to_string(), detail.clone().red()));
    }

    rows
}

pub fn print_network(record: &NetworkRecord, idx: usize) {
    print::tree_head(idx, &record.ssid);
    print::as_tree_one_level(to_detail_rows(record));
}

fn security_value(class: &SecurityClass) -> ColoredString {
    let label = class.to_string();
    match class {
        SecurityClass::Wpa3 | SecurityClass::Wpa2 => label.green(),
        SecurityClass::Wpa => label.yellow(),
        _ => label.red().bold(),
    }
}

fn signal_value(signal: i32, quality: SignalQuality) -> ColoredString {
    let text = format!("{signal} ({quality})");
    match quality {
        SignalQuality::Excellent => text.green().bold(),
        SignalQuality::Good => text.green(),
        SignalQuality::Fair => text.yellow(),
        SignalQuality::Weak => text.red(),
    }
}
