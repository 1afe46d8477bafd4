//! Configuration error types
//!
//! The simulation itself never fails: ship death, asteroid expiry and
//! projectile expiry are ordinary lifecycle events. Errors only arise while
//! loading, saving or validating [`crate::Settings`] and [`crate::Tuning`].

use std::path::PathBuf;

/// Errors raised while loading, saving or validating configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The settings file could not be read or written
    #[error("failed to access settings file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid JSON for [`crate::Settings`]
    #[error("failed to parse settings {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Settings could not be encoded as JSON
    #[error("failed to serialize settings for {}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A tuning value is outside its usable range
    #[error("invalid tuning value {field} = {value}: {reason}")]
    InvalidTuning {
        field: &'static str,
        value: f32,
        reason: &'static str,
    },

    /// The display extent must be strictly positive
    #[error("invalid screen extent {width}x{height}")]
    InvalidExtent { width: f32, height: f32 },
}

impl ConfigError {
    pub(crate) fn tuning(field: &'static str, value: f32, reason: &'static str) -> Self {
        Self::InvalidTuning {
            field,
            value,
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ConfigError::tuning("laser_fire_rate", 0.0, "must be > 0");
        assert_eq!(
            err.to_string(),
            "invalid tuning value laser_fire_rate = 0: must be > 0"
        );

        let err = ConfigError::InvalidExtent {
            width: 0.0,
            height: 600.0,
        };
        assert_eq!(err.to_string(), "invalid screen extent 0x600");
    }
}
