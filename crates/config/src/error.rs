//! Configuration errors.

use derive_more::{Display, Error};

/// Error raised while loading, validating or resolving configuration.
#[derive(Debug, Display, Error)]
pub enum ConfigError {
    /// A file could not be read.
    #[display("failed to read {path}")]
    Io {
        /// Path of the file.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The TOML document is malformed.
    #[display("failed to parse config")]
    Parse {
        /// Underlying TOML error.
        source: toml::de::Error,
    },
    /// The configuration parsed but is inconsistent.
    #[display("invalid config: {reason}")]
    Invalid {
        /// What is wrong.
        reason: String,
    },
    /// The requested network is not configured.
    #[display("unknown network `{name}`")]
    UnknownNetwork {
        /// Network name.
        name: String,
    },
    /// A network URL could not be parsed.
    #[display("invalid url `{url}` for network `{network}`: {reason}")]
    InvalidUrl {
        /// Network name.
        network: String,
        /// The offending URL.
        url: String,
        /// Parser failure.
        reason: String,
    },
    /// The node URI still has placeholders after interpolation.
    #[display("invalid uri or network not supported by node provider: {uri}")]
    UnsupportedNodeUri {
        /// The interpolated URI.
        uri: String,
    },
    /// An environment variable holds a value that cannot be used.
    #[display("invalid value `{value}` for {key}")]
    InvalidEnv {
        /// Variable name.
        key: String,
        /// Offending value.
        value: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid { reason: reason.into() }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_io_error_keeps_cause_out_of_message() {
        let err = ConfigError::Io {
            path: "neon.private.keys".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "failed to read neon.private.keys");
        assert_eq!(err.source().map(ToString::to_string).as_deref(), Some("gone"));
    }

    #[test]
    fn test_parse_error_keeps_cause_out_of_message() {
        let source = toml::from_str::<toml::Value>("= 1").unwrap_err();
        let cause = source.to_string();
        let err = ConfigError::Parse { source };
        assert_eq!(err.to_string(), "failed to parse config");
        assert_eq!(err.source().map(ToString::to_string), Some(cause));
    }
}
