use crate::error::PatternError;
use std::fmt;
use std::str::FromStr;

/// Operating system families the factory demos build widgets for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Linux,
    Windows,
    MacOs,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Linux, Platform::Windows, Platform::MacOs];

    /// The platform this process runs on. Anything unrecognized counts as Linux.
    pub fn current() -> Self {
        match std::env::consts::OS {
            "windows" => Platform::Windows,
            "macos" => Platform::MacOs,
            _ => Platform::Linux,
        }
    }

    /// Lowercase name used in widget descriptions.
    pub fn family(self) -> &'static str {
        match self {
            Platform::Linux => "linux",
            Platform::Windows => "windows",
            Platform::MacOs => "mac",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Platform::Linux => "Linux",
            Platform::Windows => "Windows",
            Platform::MacOs => "MacOS",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Platform {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linux" => Ok(Platform::Linux),
            "windows" | "win" => Ok(Platform::Windows),
            "macos" | "mac" | "darwin" => Ok(Platform::MacOs),
            _ => Err(PatternError::UnsupportedPlatform(s.to_string())),
        }
    }
}
