use async_trait::async_trait;
use std::fs;
use wavescan_common::config::Config;
use wavescan_common::network::record::NetworkRecord;
use wavescan_core::capture;
use wavescan_core::report;
use wavescan_core::scanner::{self, ScanSource, SourceResult};

/// Stub scan source returning a canned outcome, standing in for the
/// external tool so the full three-way branch is testable offline.
struct StubSource {
    result: SourceResult,
}

#[async_trait]
impl ScanSource for StubSource {
    async fn list_networks(&self) -> SourceResult {
        self.result.clone()
    }
}

#[tokio::test]
async fn scan_parses_tool_output_end_to_end() {
    let source = StubSource {
        result: SourceResult::Output(
            "SSID  SECURITY  SIGNAL\nHome  WPA2      71\nCafe Guest  --   40\n".to_string(),
        ),
    };

    let networks = scanner::scan_networks(&source).await;

    assert_eq!(networks.len(), 2);
    assert_eq!(networks[0], NetworkRecord::new("Home", "WPA2", 71));
    assert_eq!(networks[1], NetworkRecord::new("Cafe Guest", "--", 40));
}

#[tokio::test]
async fn unavailable_tool_yields_the_fixed_simulated_set() {
    let source = StubSource {
        result: SourceResult::Unavailable,
    };

    let networks = scanner::scan_networks(&source).await;

    assert_eq!(networks, scanner::simulated_networks());
    assert_eq!(networks[0], NetworkRecord::new("Home_WiFi", "WPA2", 72));
    assert_eq!(networks[1], NetworkRecord::new("Old_WEP", "WEP", 34));
    assert_eq!(networks[2], NetworkRecord::new("Cafe_FreeWiFi", "OPEN", 60));
}

#[tokio::test]
async fn failed_tool_yields_one_sentinel_error_record() {
    let source = StubSource {
        result: SourceResult::Failed("nmcli exited with exit status: 8".to_string()),
    };

    let networks = scanner::scan_networks(&source).await;

    assert_eq!(networks.len(), 1);
    assert_eq!(networks[0].ssid, "(error)");
    assert_eq!(networks[0].security, "(none)");
    assert_eq!(networks[0].signal, 0);
    assert!(!networks[0].error.as_deref().unwrap_or_default().is_empty());
}

#[tokio::test]
async fn scan_to_report_round_trip() {
    let source = StubSource {
        result: SourceResult::Unavailable,
    };
    let networks = scanner::scan_networks(&source).await;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("assessment.json");
    report::write_report(&networks, &path).unwrap();

    let body: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let listed = body["networks"].as_array().unwrap();

    assert_eq!(listed.len(), networks.len());
    for (value, record) in listed.iter().zip(&networks) {
        assert_eq!(value["ssid"], record.ssid.as_str());
        assert_eq!(value["security"], record.security.as_str());
        assert_eq!(value["signal"], record.signal);
    }
}

#[tokio::test]
async fn scan_to_capture_places_a_marker_per_network() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = Config {
        capture_folder: dir.path().join("captured"),
        ..Config::default()
    };

    let source = StubSource {
        result: SourceResult::Unavailable,
    };
    let networks = scanner::scan_networks(&source).await;

    for network in &networks {
        let path = capture::write_placeholder(network, &cfg.capture_folder).unwrap();
        assert!(capture::contains_handshake_marker(&path));
    }

    let written = fs::read_dir(&cfg.capture_folder).unwrap().count();
    assert_eq!(written, networks.len());
}

#[tokio::test]
async fn sentinel_error_record_still_gets_a_placeholder() {
    let dir = tempfile::tempdir().unwrap();
    let folder = dir.path().join("captured");

    let source = StubSource {
        result: SourceResult::Failed("nmcli exited with exit status: 8".to_string()),
    };
    let networks = scanner::scan_networks(&source).await;
    assert_eq!(networks.len(), 1);

    // The capture batch covers every held record, the sentinel included.
    for network in &networks {
        capture::write_placeholder(network, &folder).unwrap();
    }

    let path = folder.join("(error)_simulated.cap");
    assert!(capture::contains_handshake_marker(&path));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "SIMULATED HANDSHAKE FOR (error)\n"
    );
}
