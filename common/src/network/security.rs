//! # Security Classification
//!
//! Interprets the raw security descriptor reported by the scan source into
//! a small set of categories. The checks are ordered so that the strongest
//! matching scheme wins, regardless of where it appears in the descriptor:
//! `"WPA2/WPA3 Mixed"` classifies as WPA3.

use std::fmt;

/// Category assigned to a raw security descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SecurityClass {
    Wpa3,
    Wpa2,
    Wpa,
    Wep,
    /// Empty or whitespace-only descriptor.
    Unknown,
    /// Non-empty descriptor that matched nothing, kept verbatim
    /// (e.g. `"OPEN"`, `"--"`).
    Other(String),
}

impl SecurityClass {
    /// True for schemes with known practical attacks or no encryption at
    /// all. Drives the red highlighting in the CLI listing.
    pub fn is_weak(&self) -> bool {
        matches!(self, Self::Wep | Self::Unknown | Self::Other(_))
    }
}

impl fmt::Display for SecurityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wpa3 => write!(f, "WPA3"),
            Self::Wpa2 => write!(f, "WPA2"),
            Self::Wpa => write!(f, "WPA"),
            Self::Wep => write!(f, "WEP"),
            Self::Unknown => write!(f, "UNKNOWN"),
            Self::Other(raw) => write!(f, "{raw}"),
        }
    }
}

/// Classifies a raw descriptor. Total: every input maps to exactly one
/// category, first match wins, substring checks are case-insensitive.
pub fn classify(raw: &str) -> SecurityClass {
    let upper = raw.to_uppercase();

    if upper.contains("WPA3") {
        return SecurityClass::Wpa3;
    }
    if upper.contains("WPA2") {
        return SecurityClass::Wpa2;
    }
    if upper.contains("WPA") {
        return SecurityClass::Wpa;
    }
    if upper.contains("WEP") {
        return SecurityClass::Wep;
    }
    if raw.trim().is_empty() {
        return SecurityClass::Unknown;
    }
    // Unrecognized but non-empty descriptors pass through unmodified.
    SecurityClass::Other(raw.to_string())
}
