//! Scan source seam.
//!
//! The external tool boundary is modelled as a tagged result with exactly
//! three cases instead of an error type: an absent executable and a failed
//! run are both defined, non-exceptional outcomes of a scan.

use async_trait::async_trait;
use std::io;
use tokio::process::Command;

/// Outcome of asking a scan source for visible networks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceResult {
    /// The tool ran to completion; raw stdout text, still unparsed.
    Output(String),
    /// The tool is not present on this system.
    Unavailable,
    /// The tool ran but exited with a failure; carries the detail.
    Failed(String),
}

/// Anything that can list visible wireless networks as raw columnar text.
#[async_trait]
pub trait ScanSource: Send + Sync {
    async fn list_networks(&self) -> SourceResult;
}

/// The real scan source: `nmcli -f SSID,SECURITY,SIGNAL dev wifi`.
pub struct NmcliSource;

#[async_trait]
impl ScanSource for NmcliSource {
    async fn list_networks(&self) -> SourceResult {
        let output = Command::new("nmcli")
            .arg("-f")
            .arg("SSID,SECURITY,SIGNAL")
            .arg("dev")
            .arg("wifi")
            .output()
            .await;

        match output {
            Ok(output) if output.status.success() => {
                SourceResult::Output(String::from_utf8_lossy(&output.stdout).into_owned())
            }
            Ok(output) => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                let stderr = stderr.trim();
                let detail = if stderr.is_empty() {
                    format!("nmcli exited with {}", output.status)
                } else {
                    format!("nmcli exited with {}: {}", output.status, stderr)
                };
                SourceResult::Failed(detail)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => SourceResult::Unavailable,
            Err(e) => SourceResult::Failed(format!("failed to launch nmcli: {e}")),
        }
    }
}
