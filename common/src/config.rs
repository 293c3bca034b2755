//! Process configuration.
//!
//! Settings are read from the environment exactly once, at startup, and the
//! resulting [`Config`] is passed into every component that needs it. No
//! other module reads environment variables.

use std::env;
use std::path::PathBuf;

pub const DEFAULT_INTERFACE: &str = "wlan0";
pub const DEFAULT_CAPTURE_FOLDER: &str = "data/captured_handshakes";

#[derive(Clone, Debug)]
pub struct Config {
    /// Wireless interface real capture would use. Unused while capture
    /// stays simulated, but surfaced to the operator at startup.
    pub interface: String,
    /// Folder the simulated `.cap` placeholder files are written to.
    pub capture_folder: PathBuf,
    /// When false, `--simulate-capture` refuses to write placeholders.
    pub simulate_capture: bool,
}

impl Config {
    /// Builds the configuration from `DEFAULT_INTERFACE`, `CAPTURE_FOLDER`
    /// and `SIMULATE_CAPTURE`, falling back to the defaults for anything
    /// unset.
    pub fn from_env() -> Self {
        Self {
            interface: env::var("DEFAULT_INTERFACE")
                .unwrap_or_else(|_| DEFAULT_INTERFACE.to_string()),
            capture_folder: env::var("CAPTURE_FOLDER")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_CAPTURE_FOLDER)),
            simulate_capture: env::var("SIMULATE_CAPTURE")
                .map(|v| truthy(&v))
                .unwrap_or(true),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interface: DEFAULT_INTERFACE.to_string(),
            capture_folder: PathBuf::from(DEFAULT_CAPTURE_FOLDER),
            simulate_capture: true,
        }
    }
}

/// Accepts `1`, `true` and `yes`, case-insensitively. Everything else is
/// false.
fn truthy(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthy_accepts_the_three_spellings() {
        assert!(truthy("1"));
        assert!(truthy("true"));
        assert!(truthy("YES"));
        assert!(truthy("True"));
    }

    #[test]
    fn truthy_rejects_everything_else() {
        assert!(!truthy("0"));
        assert!(!truthy("no"));
        assert!(!truthy(""));
        assert!(!truthy("enabled"));
    }

    #[test]
    fn default_config_matches_documented_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.interface, "wlan0");
        assert_eq!(cfg.capture_folder, PathBuf::from("data/captured_handshakes"));
        assert!(cfg.simulate_capture);
    }
}
