pub mod capture;
pub mod report;
pub mod scan;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wavescan")]
#[command(about = "A WiFi security assessment demo tool.")]
pub struct CommandLine {
    /// Scan nearby WiFi networks
    #[arg(long)]
    pub scan: bool,

    /// Save a report of the held networks to the given file (JSON/HTML)
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Write a simulated handshake capture placeholder for each held network
    #[arg(long)]
    pub simulate_capture: bool,

    /// Ask to enable real capture (requires typed confirmation; the real
    /// capture path stays permanently disabled either way)
    #[arg(long)]
    pub unsafe_allow_capture: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// True when no operation flag was given at all.
    pub fn is_empty(&self) -> bool {
        !self.scan && !self.simulate_capture && !self.unsafe_allow_capture && self.report.is_none()
    }
}
