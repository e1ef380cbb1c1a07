use thiserror::Error;

#[derive(Error, Debug)]
pub enum VmrError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Lookup table '{path}' could not be loaded: {reason}")]
    LookupTable { path: String, reason: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },

    #[error("Export failed: {message}")]
    Export { message: String },

    #[error("Data processing error: {message}")]
    Processing { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Lookup,
    Io,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Informational; the run still counts as a success.
    Low,
    /// The run failed but retrying with the same inputs may work.
    Medium,
    /// The inputs are bad; retrying without changes will fail again.
    High,
    /// Startup cannot proceed at all.
    Critical,
}

impl VmrError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            VmrError::Config { .. }
            | VmrError::InvalidConfigValue { .. }
            | VmrError::MissingConfig { .. }
            | VmrError::Toml(_) => ErrorCategory::Configuration,
            VmrError::LookupTable { .. } => ErrorCategory::Lookup,
            VmrError::Io(_) | VmrError::Export { .. } => ErrorCategory::Io,
            VmrError::Json(_) | VmrError::Processing { .. } => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            VmrError::Config { .. }
            | VmrError::InvalidConfigValue { .. }
            | VmrError::MissingConfig { .. }
            | VmrError::Toml(_)
            | VmrError::LookupTable { .. } => ErrorSeverity::Critical,
            VmrError::Io(_) | VmrError::Export { .. } => ErrorSeverity::Medium,
            VmrError::Json(_) | VmrError::Processing { .. } => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            VmrError::LookupTable { path, .. } => {
                format!("Could not load the lookup table '{}'.", path)
            }
            VmrError::Export { message } => {
                format!("The rule set could not be written: {}", message)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check the command line flags and the config file, then run again"
            }
            ErrorCategory::Lookup => {
                "Verify the airlines/typecodes JSON files exist and are valid JSON arrays"
            }
            ErrorCategory::Io => "Check the output path is writable and has free space",
            ErrorCategory::Data => "Inspect the livery dump file for malformed entries",
        }
    }
}

pub type Result<T> = std::result::Result<T, VmrError>;
