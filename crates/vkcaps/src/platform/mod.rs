// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Au-Zone Technologies

//! Optional OpenGL platform reports.
//!
//! A [`PlatformBackend`] opens an offscreen OpenGL context through a window
//! system API and describes it. Backends are matched to Vulkan devices by
//! device UUID. The EGL backend runs on Linux, the WGL backend on Windows; on
//! any other system they fail to initialize with
//! [`Error::BackendUnavailable`] and the run continues without them.

use std::fmt::Display;

use crate::capability::DeviceIdentity;
use crate::Error;

pub mod egl;
pub mod gl;
pub mod wgl;

/// A titled block of lines produced by a backend.
///
/// Warnings are recoverable failures after part of the report was gathered,
/// e.g. a context that could not be made current.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlatformReport {
    pub title: String,
    pub entries: Vec<(String, String)>,
    pub warnings: Vec<String>,
}

impl PlatformReport {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn push(&mut self, key: &str, value: impl Display) {
        self.entries.push((key.to_string(), value.to_string()));
    }

    pub fn extend(&mut self, entries: impl IntoIterator<Item = (String, String)>) {
        self.entries.extend(entries);
    }

    pub fn warn(&mut self, text: impl Into<String>) {
        self.warnings.push(text.into());
    }

    /// Value of the first entry named `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// An optional window system report.
pub trait PlatformBackend {
    /// Short name used in log and warning lines, e.g. `EGL`.
    fn name(&self) -> &'static str;

    /// Load the platform libraries and describe the platform as a whole.
    ///
    /// Returns [`Error::BackendUnavailable`] when the platform cannot be used
    /// on this system.
    fn initialize(&mut self) -> Result<PlatformReport, Error>;

    /// Describe the platform device matching `identity`.
    ///
    /// Returns [`Error::NoMatchingDevice`] when no platform device shares the
    /// Vulkan device UUID.
    fn report_device(&mut self, identity: &DeviceIdentity) -> Result<PlatformReport, Error>;
}

/// A whitespace separated extension string, in its original order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtensionSet {
    names: Vec<String>,
}

impl ExtensionSet {
    pub fn parse(text: &str) -> Self {
        let mut names: Vec<String> = Vec::new();
        for name in text.split_whitespace() {
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
        Self { names }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Index of the first candidate whose UUID equals `uuid`.
pub fn find_matching_uuid<I>(candidates: I, uuid: &[u8; 16]) -> Option<usize>
where
    I: IntoIterator<Item = Option<[u8; 16]>>,
{
    candidates
        .into_iter()
        .position(|candidate| candidate.as_ref() == Some(uuid))
}

/// The backends requested on the command line, in report order.
pub fn available_backends(egl: bool, wgl: bool) -> Vec<Box<dyn PlatformBackend>> {
    let mut backends: Vec<Box<dyn PlatformBackend>> = Vec::new();
    if egl {
        backends.push(Box::new(egl::EglBackend::new()));
    }
    if wgl {
        backends.push(Box::new(wgl::WglBackend::new()));
    }
    backends
}
