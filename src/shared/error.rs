use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes let a calling scaffold pipeline distinguish a rejected
/// invocation from a failed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Header rendered (and written, if requested)
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unknown license, file I/O error, config error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for header generation.
#[derive(Debug, Error, PartialEq)]
pub enum HeaderError {
    #[error("unknown specified license {key}\n\n💡 Hint: Use a built-in license (apache2, none) or define '{key}' under `licenses` in the config file")]
    UnknownLicense { key: String },

    #[error("Output file already exists: {path}\n\n💡 Hint: Pass --force to overwrite it, or --stdout to print the header instead")]
    OutputExists { path: PathBuf },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that you have write permissions for the target directory")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory")]
    InvalidProjectPath { path: PathBuf, reason: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_unknown_license_display() {
        let error = HeaderError::UnknownLicense {
            key: "mit".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.starts_with("unknown specified license mit"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_output_exists_display() {
        let error = HeaderError::OutputExists {
            path: PathBuf::from("hack/boilerplate.go.txt"),
        };
        let display = format!("{}", error);
        assert!(display.contains("Output file already exists"));
        assert!(display.contains("hack/boilerplate.go.txt"));
        assert!(display.contains("--force"));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = HeaderError::FileWriteError {
            path: PathBuf::from("/test/boilerplate.go.txt"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/boilerplate.go.txt"));
        assert!(display.contains("Permission denied"));
    }

    #[test]
    fn test_file_read_error_display() {
        let error = HeaderError::FileReadError {
            path: PathBuf::from("/test/header.txt"),
            details: "File not found".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to read file"));
        assert!(display.contains("/test/header.txt"));
        assert!(display.contains("File not found"));
    }

    #[test]
    fn test_invalid_project_path_display() {
        let error = HeaderError::InvalidProjectPath {
            path: PathBuf::from("/invalid/path"),
            reason: "Directory does not exist".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid project path"));
        assert!(display.contains("Directory does not exist"));
    }

    #[test]
    fn test_security_error_display() {
        let error = HeaderError::SecurityError {
            path: PathBuf::from("/test/symlink"),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Use a regular file instead".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("Use a regular file instead"));
    }

    #[test]
    fn test_downcast_from_anyhow() {
        let err: anyhow::Error = HeaderError::UnknownLicense {
            key: "gpl3".to_string(),
        }
        .into();
        assert_eq!(
            err.downcast_ref::<HeaderError>(),
            Some(&HeaderError::UnknownLicense {
                key: "gpl3".to_string()
            })
        );
    }
}
