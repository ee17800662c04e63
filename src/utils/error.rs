use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to launch '{program}': {source}")]
    CompilerLaunchError {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' exited with {status}: {stderr}")]
    CompilerFailedError {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration field '{field}' failed validation: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    FileSystem,
    Compiler,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ScaffoldError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError(_) => ErrorCategory::FileSystem,
            Self::CompilerLaunchError { .. } | Self::CompilerFailedError { .. } => {
                ErrorCategory::Compiler
            }
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Compiler => ErrorSeverity::High,
            ErrorCategory::FileSystem => ErrorSeverity::Critical,
        }
    }

    /// Short message for the console; the `Display` form goes to the log.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("file system operation failed: {}", e),
            Self::CompilerLaunchError { program, .. } => {
                format!("could not run '{}'", program)
            }
            Self::CompilerFailedError {
                program, stderr, ..
            } => {
                if stderr.trim().is_empty() {
                    format!("'{}' reported an error", program)
                } else {
                    format!("'{}' reported an error: {}", program, stderr.trim())
                }
            }
            Self::MissingConfigError { field } => format!("missing required option {}", field),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("invalid {}: {}", field, reason)
            }
            Self::ConfigError { message } | Self::ConfigValidationError { message, .. } => {
                message.clone()
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::IoError(_) => "Check that the output directory is writable and has free space",
            Self::CompilerLaunchError { .. } => {
                "Install tars2go (go install github.com/TarsCloud/TarsGo/tars/tools/tars2go@latest) and make sure it is on PATH"
            }
            Self::CompilerFailedError { .. } => "Fix the reported errors in the .tars file and run again",
            Self::ConfigError { .. } | Self::ConfigValidationError { .. } => {
                "Check the TOML configuration file syntax"
            }
            Self::MissingConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Run with --help to see the expected arguments"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
