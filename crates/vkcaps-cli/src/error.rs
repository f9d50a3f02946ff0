// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Au-Zone Technologies

use std::fmt;
use std::process::ExitCode;

/// CLI-specific error type with exit code mapping
#[derive(Debug)]
pub enum CliError {
    /// Invalid command-line arguments or environment
    InvalidArgs(String),
    /// Vulkan loader or instance not available
    VulkanUnavailable(String),
    /// Report file could not be created or written
    ReportIo(String),
    /// General error from the vkcaps library
    General(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidArgs(msg) => write!(f, "Invalid arguments: {}", msg),
            CliError::VulkanUnavailable(msg) => write!(f, "Vulkan unavailable: {}", msg),
            CliError::ReportIo(msg) => write!(f, "Report I/O error: {}", msg),
            CliError::General(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code())
    }

    fn code(&self) -> u8 {
        match self {
            CliError::InvalidArgs(_) => 2,
            CliError::VulkanUnavailable(_) => 3,
            CliError::ReportIo(_) => 4,
            CliError::General(_) => 1,
        }
    }
}

/// Map vkcaps::Error to CliError with appropriate exit codes
impl From<vkcaps::Error> for CliError {
    fn from(err: vkcaps::Error) -> Self {
        use vkcaps::Error;

        match err {
            // Loader missing or instance creation refused
            Error::LibraryNotLoaded(lib_err) => {
                CliError::VulkanUnavailable(format!("Failed to load Vulkan loader: {}", lib_err))
            }
            Error::SymbolNotFound(sym) => {
                CliError::VulkanUnavailable(format!("Symbol not found: {}", sym))
            }
            Error::Vulkan(result) => CliError::VulkanUnavailable(format!("{}", result)),

            Error::Io(io_err) => CliError::ReportIo(io_err.to_string()),

            Error::Utf8(utf8_err) => CliError::General(format!("UTF-8 error: {}", utf8_err)),
            Error::NullPointer => CliError::General("Unexpected null pointer".to_string()),
            err @ (Error::BackendUnavailable(_) | Error::NoMatchingDevice) => {
                CliError::General(err.to_string())
            }
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::ReportIo(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::General(format!("JSON error: {}", err))
    }
}

/// Helper function to convert result to exit code
pub fn result_to_exit_code<T>(result: Result<T, CliError>) -> ExitCode {
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            e.exit_code()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::InvalidArgs("test".into()).code(), 2);
        assert_eq!(CliError::VulkanUnavailable("test".into()).code(), 3);
        assert_eq!(CliError::ReportIo("test".into()).code(), 4);
        assert_eq!(CliError::General("test".into()).code(), 1);
        assert_eq!(
            CliError::ReportIo("test".into()).exit_code(),
            ExitCode::from(4)
        );
    }

    #[test]
    fn test_error_display() {
        let err = CliError::ReportIo("Logfile.html: permission denied".to_string());
        assert_eq!(
            format!("{}", err),
            "Report I/O error: Logfile.html: permission denied"
        );
    }

    #[test]
    fn test_from_library_error() {
        let err = CliError::from(vkcaps::Error::Vulkan(
            vkcaps::vk::Result::ERROR_INCOMPATIBLE_DRIVER,
        ));
        assert_eq!(err.code(), 3);

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(CliError::from(vkcaps::Error::Io(io)).code(), 4);

        let err = CliError::from(vkcaps::Error::BackendUnavailable("WGL".into()));
        assert_eq!(err.code(), 1);
        assert!(err.to_string().contains("WGL is not supported"));
    }
}
