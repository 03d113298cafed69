//! Bridge configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Environment variable overriding the detector binary location.
pub const DETECTOR_PATH_ENV: &str = "PYRO_DETECTOR_PATH";

/// Configuration for the detector bridge.
///
/// The binary path is the component's entire configuration surface; all
/// other settings belong to the surrounding HTTP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub struct BridgeConfig {
    /// Path to the detector binary.
    pub detector_path: PathBuf,
}

impl BridgeConfig {
    /// Create a config pointing at the given detector binary.
    #[must_use]
    pub fn new(detector_path: PathBuf) -> Self {
        Self { detector_path }
    }

    /// Create a config from the environment.
    ///
    /// Honors `PYRO_DETECTOR_PATH` when set and non-empty; otherwise falls
    /// back to the conventional release-build location relative to the
    /// working directory.
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var(DETECTOR_PATH_ENV) {
            Ok(path) if !path.is_empty() => Self::new(PathBuf::from(path)),
            _ => Self::default(),
        }
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            detector_path: ["target", "release", "pyro-detector"].iter().collect(),
        }
    }
}
