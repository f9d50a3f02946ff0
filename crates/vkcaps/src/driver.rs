// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Au-Zone Technologies

//! Top-level enumeration run.
//!
//! `Init -> EnumerateDevices -> (Open -> Probe -> Emit -> Close)* -> Finalize`.
//! Devices lacking a required extension are skipped silently. A device that
//! fails to open or report is logged and the run continues with the next one.
//! The report is closed on every path, including when enumeration fails.

use std::io::Write;
use std::path::PathBuf;

use log::{debug, error, info, warn};
use serde::Serialize;

use crate::capability::{CapabilityRecord, DeviceIdentity};
use crate::config::ReportConfig;
use crate::modifiers;
use crate::platform::{PlatformBackend, PlatformReport};
use crate::probe::{self, CapabilityProbe, DeviceQuery};
use crate::report::ReportEmitter;
use crate::Error;

/// Notice printed when no device passes the required extension filter.
pub const NO_DEVICES_NOTICE: &str = "No suitable Vulkan devices found.";

/// A physical device as listed before it is opened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceCandidate {
    pub index: usize,
    pub name: String,
    pub extensions: Vec<String>,
}

/// Enumerates devices and opens them one at a time.
///
/// The returned handle owns whatever per-device driver objects it needs and
/// releases them when dropped.
pub trait DeviceSource {
    fn candidates(&self) -> Result<Vec<DeviceCandidate>, Error>;

    fn open(&self, candidate: &DeviceCandidate) -> Result<Box<dyn DeviceQuery + '_>, Error>;
}

/// Everything reported for one device.
#[derive(Clone, Debug, Serialize)]
pub struct DeviceReport {
    pub identity: DeviceIdentity,
    pub capabilities: Vec<CapabilityRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier_report: Option<PathBuf>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct RunSummary {
    pub devices: Vec<DeviceReport>,
    /// Devices skipped for missing a required extension.
    pub excluded: usize,
    /// Devices that failed to open or report.
    pub failed: usize,
}

/// Run the full report and close `report`.
///
/// Returns an error only if enumeration itself fails or a sink cannot be
/// written; per-device failures are recorded in [`RunSummary::failed`].
pub fn run<S, C, H>(
    source: &S,
    backends: &mut [Box<dyn PlatformBackend>],
    config: &ReportConfig,
    mut report: ReportEmitter<C, H>,
) -> Result<RunSummary, Error>
where
    S: DeviceSource + ?Sized,
    C: Write,
    H: Write,
{
    let result = enumerate(source, backends, config, &mut report);
    let closed = report.close();
    let summary = result?;
    closed?;
    Ok(summary)
}

fn enumerate<S, C, H>(
    source: &S,
    backends: &mut [Box<dyn PlatformBackend>],
    config: &ReportConfig,
    report: &mut ReportEmitter<C, H>,
) -> Result<RunSummary, Error>
where
    S: DeviceSource + ?Sized,
    C: Write,
    H: Write,
{
    let mut summary = RunSummary::default();

    let active = initialize_backends(backends, report)?;

    let candidates = source.candidates()?;
    let total = candidates.len();
    let suitable: Vec<DeviceCandidate> = candidates
        .into_iter()
        .filter(|candidate| {
            let ok = config.is_suitable(&candidate.extensions);
            if !ok {
                debug!("Excluding {}: missing required extensions", candidate.name);
            }
            ok
        })
        .collect();
    summary.excluded = total - suitable.len();
    info!("Found {} Vulkan device(s), {} suitable", total, suitable.len());

    if suitable.is_empty() {
        report.line(NO_DEVICES_NOTICE)?;
        return Ok(summary);
    }

    let capability_probe = CapabilityProbe::new(&config.probe);
    for candidate in &suitable {
        report.separator()?;

        let device = match source.open(candidate) {
            Ok(device) => device,
            Err(err) => {
                error!("Failed to open {}: {}", candidate.name, err);
                report.error(&format!("Failed to open device {}: {}", candidate.name, err))?;
                summary.failed += 1;
                continue;
            }
        };

        report.emit_identity(device.identity())?;
        let capabilities = capability_probe.probe(device.as_ref());
        for record in &capabilities {
            report.emit_record(record)?;
        }

        for (backend, enabled) in backends.iter_mut().zip(active.iter()) {
            if *enabled {
                report_backend_device(backend.as_mut(), device.identity(), report)?;
            }
        }

        let mut modifier_report = None;
        if config.modifiers && !device.has_extension(probe::EXT_IMAGE_DRM_FORMAT_MODIFIER) {
            report.not_supported(probe::EXT_IMAGE_DRM_FORMAT_MODIFIER)?;
        } else if config.modifiers {
            let path = config.modifier_report_path(candidate.index);
            match modifiers::write_device_report(device.as_ref(), &config.modifier_formats, &path) {
                Ok(rows) => {
                    info!("{}: {} modifier(s) written to {}", candidate.name, rows, path.display());
                    report.line("")?;
                    report.key_value("Modifier report", path.display())?;
                    modifier_report = Some(path);
                }
                Err(Error::BackendUnavailable(name)) => {
                    report.line("")?;
                    report.warning(&format!("{} is not supported on this system.", name))?;
                }
                Err(err) => {
                    error!("{}: modifier report failed: {}", candidate.name, err);
                    report.error(&format!("Failed to write {}: {}", path.display(), err))?;
                }
            }
        }

        summary.devices.push(DeviceReport {
            identity: device.identity().clone(),
            capabilities,
            modifier_report,
        });
        // Close: the device handle is released before the next one is opened.
        drop(device);
    }

    report.flush()?;
    Ok(summary)
}

/// Initialize every backend; unavailable ones get a warning line and are
/// skipped for the rest of the run.
fn initialize_backends<C: Write, H: Write>(
    backends: &mut [Box<dyn PlatformBackend>],
    report: &mut ReportEmitter<C, H>,
) -> Result<Vec<bool>, Error> {
    let mut active = Vec::with_capacity(backends.len());
    for backend in backends.iter_mut() {
        match backend.initialize() {
            Ok(global) => {
                emit_platform_report(report, &global)?;
                active.push(true);
            }
            Err(Error::BackendUnavailable(name)) => {
                warn!("{} backend unavailable", name);
                report.warning(&format!("{} is not supported on this system.", name))?;
                active.push(false);
            }
            Err(err) => {
                warn!("{} backend failed to initialize: {}", backend.name(), err);
                report.warning(&format!("{} is not supported on this system.", backend.name()))?;
                active.push(false);
            }
        }
    }
    Ok(active)
}

fn report_backend_device<C: Write, H: Write>(
    backend: &mut dyn PlatformBackend,
    identity: &DeviceIdentity,
    report: &mut ReportEmitter<C, H>,
) -> Result<(), Error> {
    match backend.report_device(identity) {
        Ok(platform) => emit_platform_report(report, &platform)?,
        Err(Error::NoMatchingDevice) => {
            report.line("")?;
            report.line(&format!(
                "No {} device matches the Vulkan device UUID.",
                backend.name()
            ))?;
        }
        Err(err) => {
            error!("{} report for {} failed: {}", backend.name(), identity.name, err);
            report.error(&format!("{} report failed: {}", backend.name(), err))?;
        }
    }
    Ok(())
}

fn emit_platform_report<C: Write, H: Write>(
    report: &mut ReportEmitter<C, H>,
    platform: &PlatformReport,
) -> Result<(), Error> {
    report.emit_section(&platform.title, &platform.entries)?;
    for warning in &platform.warnings {
        report.warning(warning)?;
    }
    Ok(())
}
