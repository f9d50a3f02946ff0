// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Au-Zone Technologies

//! Run configuration.

use std::env;
use std::path::{Path, PathBuf};

use crate::names;

/// Environment variable overriding the report output directory.
pub const OUTPUT_DIR_ENV: &str = "VKCAPS_OUTPUT_DIR";

/// Device extensions every reported device must support.
pub const DEFAULT_REQUIRED_EXTENSIONS: &[&str] =
    &["VK_EXT_scalar_block_layout", "VK_KHR_timeline_semaphore"];

/// Formats listed in the format support table unless `--all-formats` is given.
pub const DEFAULT_FORMATS: &[i32] = &[
    9,          // VK_FORMAT_R8_UNORM
    16,         // VK_FORMAT_R8G8_UNORM
    37,         // VK_FORMAT_R8G8B8A8_UNORM
    43,         // VK_FORMAT_R8G8B8A8_SRGB
    44,         // VK_FORMAT_B8G8R8A8_UNORM
    64,         // VK_FORMAT_A2B10G10R10_UNORM_PACK32
    70,         // VK_FORMAT_R16_UNORM
    76,         // VK_FORMAT_R16_SFLOAT
    83,         // VK_FORMAT_R16G16_SFLOAT
    97,         // VK_FORMAT_R16G16B16A16_SFLOAT
    98,         // VK_FORMAT_R32_UINT
    100,        // VK_FORMAT_R32_SFLOAT
    103,        // VK_FORMAT_R32G32_SFLOAT
    109,        // VK_FORMAT_R32G32B32A32_SFLOAT
    122,        // VK_FORMAT_B10G11R11_UFLOAT_PACK32
    126,        // VK_FORMAT_D32_SFLOAT
    129,        // VK_FORMAT_D24_UNORM_S8_UINT
    1000156002, // VK_FORMAT_G8_B8_R8_3PLANE_420_UNORM
    1000156003, // VK_FORMAT_G8_B8R8_2PLANE_420_UNORM
];

/// Formats queried for DRM format modifiers.
pub const DEFAULT_MODIFIER_FORMATS: &[i32] = &[
    4,          // VK_FORMAT_R5G6B5_UNORM_PACK16
    9,          // VK_FORMAT_R8_UNORM
    16,         // VK_FORMAT_R8G8_UNORM
    37,         // VK_FORMAT_R8G8B8A8_UNORM
    44,         // VK_FORMAT_B8G8R8A8_UNORM
    58,         // VK_FORMAT_A2R10G10B10_UNORM_PACK32
    64,         // VK_FORMAT_A2B10G10R10_UNORM_PACK32
    70,         // VK_FORMAT_R16_UNORM
    77,         // VK_FORMAT_R16G16_UNORM
    97,         // VK_FORMAT_R16G16B16A16_SFLOAT
    1000156002, // VK_FORMAT_G8_B8_R8_3PLANE_420_UNORM
    1000156003, // VK_FORMAT_G8_B8R8_2PLANE_420_UNORM
    1000156030, // VK_FORMAT_G16_B16R16_2PLANE_420_UNORM
];

/// Settings of the capability probe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Formats listed in the format support record, in report order.
    pub formats: Vec<i32>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            formats: DEFAULT_FORMATS.to_vec(),
        }
    }
}

impl ProbeConfig {
    /// Probe every known format instead of the default list.
    pub fn all_formats() -> Self {
        Self {
            formats: names::known_formats().collect(),
        }
    }
}

/// Settings of a full report run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportConfig {
    /// Devices missing any of these extensions are excluded from the report.
    pub required_extensions: Vec<String>,
    pub probe: ProbeConfig,
    /// Write `Modifiers_<index>.html` for every device.
    pub modifiers: bool,
    pub modifier_formats: Vec<i32>,
    pub output_dir: PathBuf,
    pub log_file_name: String,
    pub title: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            required_extensions: DEFAULT_REQUIRED_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            probe: ProbeConfig::default(),
            modifiers: false,
            modifier_formats: DEFAULT_MODIFIER_FORMATS.to_vec(),
            output_dir: PathBuf::from("."),
            log_file_name: "Logfile.html".to_string(),
            title: "vkcaps".to_string(),
        }
    }
}

impl ReportConfig {
    /// Default configuration with `VKCAPS_OUTPUT_DIR` applied.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(dir) = env::var_os(OUTPUT_DIR_ENV).filter(|dir| !dir.is_empty()) {
            config.output_dir = PathBuf::from(dir);
        }
        config
    }

    pub fn log_file_path(&self) -> PathBuf {
        self.output_dir.join(&self.log_file_name)
    }

    /// Path of the modifier report of the device at `index`.
    pub fn modifier_report_path(&self, index: usize) -> PathBuf {
        self.output_dir.join(format!("Modifiers_{}.html", index))
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Whether a device exposing `extensions` satisfies the required set.
    pub fn is_suitable<S: AsRef<str>>(&self, extensions: &[S]) -> bool {
        self.required_extensions
            .iter()
            .all(|required| extensions.iter().any(|ext| ext.as_ref() == required))
    }
}
