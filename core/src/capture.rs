//! # Capture Placeholder
//!
//! Handshake "capture" in this tool is a deterministic marker file, never a
//! radio operation. The writer drops one `<ssid>_simulated.cap` text file
//! per network; the reader checks a file for the marker string. The real
//! capture entry point exists only as a permanent guard rail and always
//! fails with [`CaptureError::NotImplemented`].

use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use wavescan_common::network::record::NetworkRecord;

/// Marker line written into every simulated capture file.
const MARKER: &str = "SIMULATED HANDSHAKE";

/// How many leading bytes of a file are searched for the marker.
const MARKER_WINDOW: usize = 2048;

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("failed to write capture placeholder: {0}")]
    Io(#[from] std::io::Error),
    #[error("real capture not implemented; this tool only simulates captures")]
    NotImplemented,
}

/// Placeholder file path for a network: spaces in the SSID become
/// underscores, suffixed `_simulated.cap`.
pub fn placeholder_path(folder: &Path, ssid: &str) -> PathBuf {
    folder.join(format!("{}_simulated.cap", ssid.replace(' ', "_")))
}

/// Writes the simulated capture marker file for one network, creating the
/// target folder if needed. Returns the file path.
pub fn write_placeholder(
    record: &NetworkRecord,
    folder: &Path,
) -> Result<PathBuf, CaptureError> {
    fs::create_dir_all(folder)?;
    let path = placeholder_path(folder, &record.ssid);
    fs::write(&path, format!("{MARKER} FOR {}\n", record.ssid))?;
    Ok(path)
}

/// True iff the first 2048 bytes of the file contain the simulated
/// handshake marker. An absent or unreadable file is "no marker", never an
/// error.
pub fn contains_handshake_marker(path: &Path) -> bool {
    let Ok(mut file) = File::open(path) else {
        return false;
    };
    let mut window = vec![0u8; MARKER_WINDOW];
    let mut filled = 0;
    while filled < MARKER_WINDOW {
        match file.read(&mut window[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(_) => return false,
        }
    }
    String::from_utf8_lossy(&window[..filled]).contains(MARKER)
}

/// Guard-rail stub for real capture. Permanently disabled: it always
/// returns [`CaptureError::NotImplemented`] and nothing in the default
/// configuration calls it.
pub fn perform_real_capture(
    _interface: &str,
    _target_bssid: &str,
    _channel: u8,
    _timeout: Duration,
) -> Result<(), CaptureError> {
    Err(CaptureError::NotImplemented)
}
