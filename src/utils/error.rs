use std::path::PathBuf;
use thiserror::Error;

use crate::domain::model::Part;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("Input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Failed to read input file {}: {source}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("No solution registered for day {day}")]
    UnknownDay { day: u8 },

    #[error("Day {day} {part} failed: {message}")]
    SolutionError { day: u8, part: Part, message: String },

    #[error("Parse error: {message}")]
    ParseError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Solution,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl HarnessError {
    pub fn parse(message: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InputNotFound { .. } | Self::InputRead { .. } | Self::ParseError { .. } => {
                ErrorCategory::Input
            }
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. }
            | Self::UnknownDay { .. } => ErrorCategory::Configuration,
            Self::SolutionError { .. } => ErrorCategory::Solution,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Solution => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 退出碼，依嚴重程度決定，失敗一律非零
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InputNotFound { path } => {
                format!("Could not find input file '{}'", path.display())
            }
            Self::InputRead { path, .. } => {
                format!("Could not read input file '{}'", path.display())
            }
            Self::UnknownDay { day } => format!("Day {} has no solution yet", day),
            Self::SolutionError { day, part, message } => {
                format!("Day {} {} could not be solved: {}", day, part, message)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InputNotFound { .. } => {
                "Download the puzzle input and save the example next to it, or pass --puzzle/--example"
            }
            Self::InputRead { .. } => "Check the file permissions and that the file is valid UTF-8",
            Self::ParseError { .. } => "Check that the input file was saved without modification",
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => "Fix the configuration file or the command line flags",
            Self::UnknownDay { .. } => "Register the solution in solutions::registry()",
            Self::SolutionError { .. } => "Run the example input with `aoc test` to debug the solution",
            Self::IoError(_) | Self::SerializationError(_) => {
                "Check disk space and permissions of the working directory"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, HarnessError>;
