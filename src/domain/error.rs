//! Domain error types.
//!
//! Validation errors are raised at the normalization boundary and never
//! partially applied: an asset either fully validates or the whole
//! evaluation it belongs to fails with the originating error.

/// Top-level error type for puckval.
#[derive(Debug, thiserror::Error)]
pub enum PuckvalError {
    #[error("invalid attribute for {asset}: {field}: {reason}")]
    InvalidAssetAttribute {
        asset: String,
        field: String,
        reason: String,
    },

    #[error("unknown {field} value: {value:?}")]
    UnknownEnumValue { field: String, value: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("roster error: {reason}")]
    Roster { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&PuckvalError> for std::process::ExitCode {
    fn from(err: &PuckvalError) -> Self {
        let code: u8 = match err {
            PuckvalError::Io(_) => 1,
            PuckvalError::ConfigParse { .. } | PuckvalError::ConfigInvalid { .. } => 2,
            PuckvalError::Roster { .. } => 3,
            PuckvalError::InvalidAssetAttribute { .. } | PuckvalError::UnknownEnumValue { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}
