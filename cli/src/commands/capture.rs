use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::mpsc::RecvTimeoutError;
use std::thread;
use std::time::Duration;

use colored::*;

use crate::terminal::{print, spinner};
use wavescan_common::config::Config;
use wavescan_common::network::record::NetworkRecord;
use wavescan_common::{success, warn};
use wavescan_core::capture;
use wavescan_core::worker::{self, JobEvent};

/// Pacing per network, so the batch reads like an operation in progress.
const CAPTURE_DELAY: Duration = Duration::from_millis(500);

/// How often the receiver is polled while the worker runs.
const POLL_INTERVAL: Duration = Duration::from_millis(200);

const CONFIRMATION_LITERAL: &str = "I_HAVE_PERMISSION";

/// Writes one simulated capture placeholder per held network. The batch
/// runs on a worker thread and is strictly sequential; this thread only
/// polls the event channel and updates the spinner.
pub fn simulate_capture(networks: &[NetworkRecord], cfg: &Config) {
    if !cfg.simulate_capture {
        warn!("SIMULATE_CAPTURE is off and real capture is permanently disabled; skipping");
        return;
    }

    if networks.is_empty() {
        warn!("no networks held, run with --scan first");
        return;
    }

    // Every held record gets a placeholder, the source-error sentinel
    // included.
    let batch: Vec<NetworkRecord> = networks.to_vec();

    let folder: PathBuf = cfg.capture_folder.clone();
    let total = batch.len();

    let handle = spinner::start("Simulating handshake captures...");
    let rx = worker::dispatch(move |sink| {
        for (idx, network) in batch.iter().enumerate() {
            sink.log(format!(
                "[SIM] capturing handshake for {} ({}/{})",
                network.ssid,
                idx + 1,
                total
            ));
            thread::sleep(CAPTURE_DELAY);
            match capture::write_placeholder(network, &folder) {
                Ok(path) => sink.emit(JobEvent::CaptureStored(path)),
                Err(e) => sink.emit(JobEvent::Failed(format!("{}: {e}", network.ssid))),
            }
        }
    });

    let mut stored: usize = 0;
    let mut failed: usize = 0;
    loop {
        match rx.recv_timeout(POLL_INTERVAL) {
            Ok(JobEvent::Log(msg)) => handle.set_message(msg),
            Ok(JobEvent::CaptureStored(path)) => {
                stored += 1;
                handle.println(&format!("  stored {}", path.display().to_string().green()));
            }
            Ok(JobEvent::Failed(detail)) => {
                failed += 1;
                handle.println(&format!("  failed {}", detail.red()));
            }
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }
    handle.finish_and_clear();

    success!(
        "{stored} simulated capture file(s) written to {}",
        cfg.capture_folder.display()
    );
    if failed > 0 {
        warn!("{failed} capture(s) failed, records kept in memory");
    }
}

/// The `--unsafe-allow-capture` gate. Real capture stays disabled no
/// matter what is typed; a matching confirmation only gets an
/// acknowledgment.
pub fn unsafe_allow_capture() {
    warn!("You asked to allow real capture. Make sure you own the target networks.");
    print::print_status(format!("Type '{CONFIRMATION_LITERAL}' to continue:"));

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line).is_err() {
        warn!("Could not read confirmation. Aborting unsafe capture.");
        return;
    }

    if line.trim() != CONFIRMATION_LITERAL {
        warn!("Confirmation not provided. Aborting unsafe capture.");
        return;
    }

    success!("Unsafe capture acknowledged. The real capture path remains disabled.");
}
