// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Au-Zone Technologies

//! Vulkan capability discovery for Rust
//!
//! Enumerates the Vulkan physical devices of the system, probes each one for
//! matrix-multiply acceleration (cooperative matrix, cooperative matrix 2,
//! cooperative vector), memory layout properties and format support, and
//! renders the result to the console and to an HTML log file.
//!
//! # Quick Start
//!
//! ```no_run
//! use vkcaps::config::ReportConfig;
//! use vkcaps::driver;
//! use vkcaps::report::ReportEmitter;
//! use vkcaps::vulkan::VulkanContext;
//!
//! let config = ReportConfig::default();
//! let source = VulkanContext::new()?;
//! let html = std::fs::File::create(config.log_file_path())?;
//! let emitter = ReportEmitter::new(std::io::stdout(), html, "Vulkan capabilities")?;
//! let summary = driver::run(&source, &mut [], &config, emitter)?;
//! println!("{} device(s) reported", summary.devices.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Architecture
//!
//! The pipeline core ([`probe`], [`report`], [`driver`]) is written against
//! the [`driver::DeviceSource`] and [`probe::DeviceQuery`] traits. The
//! [`vulkan`] module implements them on top of `ash`; tests implement them
//! with in-memory fakes. Optional OpenGL reports are provided by the
//! [`platform`] backends.
//!
//! # Support
//!
//! - Repository: <https://github.com/EdgeFirstAI/vkcaps>
//! - Professional support: support@au-zone.com

pub use ash::vk;
use std::{error, fmt, io, str};
use vkcaps_sys as ffi;

/// Error type for vkcaps operations
#[derive(Debug)]
pub enum Error {
    /// A native library (Vulkan loader, libEGL, opengl32) could not be loaded
    LibraryNotLoaded(ffi::libloading::Error),

    /// A Vulkan call returned a failure code
    Vulkan(vk::Result),

    /// A required entry point could not be resolved
    SymbolNotFound(String),

    /// An optional platform backend cannot run on this system
    BackendUnavailable(String),

    /// I/O error while writing a report
    Io(io::Error),

    /// UTF-8 conversion error when converting driver strings
    Utf8(str::Utf8Error),

    /// Null pointer returned by a native API where a valid pointer was expected
    NullPointer,

    /// No platform device shares the identity of the Vulkan device
    NoMatchingDevice,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::LibraryNotLoaded(err) => write!(f, "library could not be loaded: {}", err),
            Error::Vulkan(result) => write!(f, "Vulkan error: {}", result),
            Error::SymbolNotFound(name) => write!(f, "symbol not found: {}", name),
            Error::BackendUnavailable(name) => write!(f, "{} is not supported on this system", name),
            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::Utf8(err) => write!(f, "UTF-8 conversion error: {}", err),
            Error::NullPointer => write!(f, "null pointer returned from native library"),
            Error::NoMatchingDevice => write!(f, "no matching platform device"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::LibraryNotLoaded(err) => Some(err),
            Error::Vulkan(result) => Some(result),
            Error::Io(err) => Some(err),
            Error::Utf8(err) => Some(err),
            Error::SymbolNotFound(_)
            | Error::BackendUnavailable(_)
            | Error::NullPointer
            | Error::NoMatchingDevice => None,
        }
    }
}

impl From<ffi::libloading::Error> for Error {
    fn from(err: ffi::libloading::Error) -> Self {
        Error::LibraryNotLoaded(err)
    }
}

impl From<ash::LoadingError> for Error {
    fn from(err: ash::LoadingError) -> Self {
        match err {
            ash::LoadingError::LibraryLoadFailure(err) => Error::LibraryNotLoaded(err),
            ash::LoadingError::MissingEntryPoint(_) => {
                Error::SymbolNotFound("vkGetInstanceProcAddr".to_string())
            }
        }
    }
}

impl From<vk::Result> for Error {
    fn from(result: vk::Result) -> Self {
        Error::Vulkan(result)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<str::Utf8Error> for Error {
    fn from(err: str::Utf8Error) -> Self {
        Error::Utf8(err)
    }
}

/// The names module maps numeric API codes to stable display names.
pub mod names;

/// The flags module decomposes bitmasks into ordered flag names.
pub mod flags;

/// The units module formats byte counts.
pub mod units;

/// The capability module defines the probed capability records.
pub mod capability;

/// The probe module queries a device for the fixed capability set.
pub mod probe;

/// The report module renders console and HTML output.
pub mod report;

/// The config module holds the run configuration.
pub mod config;

/// The driver module orchestrates a full enumeration run.
pub mod driver;

/// The vulkan module implements device enumeration on top of `ash`.
pub mod vulkan;

/// The platform module provides the optional EGL and WGL reports.
pub mod platform;

/// The modifiers module writes the per-device DRM format modifier reports.
pub mod modifiers;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = Error::BackendUnavailable("EGL".to_string());
        assert_eq!(format!("{}", err), "EGL is not supported on this system");

        let err = Error::SymbolNotFound("vkGetPhysicalDeviceCooperativeMatrixPropertiesKHR".into());
        assert!(err.to_string().contains("vkGetPhysicalDeviceCooperativeMatrixPropertiesKHR"));
    }

    #[test]
    fn test_error_source() {
        let err = Error::from(vk::Result::ERROR_INITIALIZATION_FAILED);
        assert!(err.source().is_some());
        assert!(Error::NoMatchingDevice.source().is_none());

        let err = Error::from(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert!(matches!(err, Error::Io(_)));
    }
}
