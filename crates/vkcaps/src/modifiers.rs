// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Au-Zone Technologies

//! Per-device DRM format modifier report.
//!
//! Lists every (format, modifier) pair the device exposes through
//! `VK_EXT_image_drm_format_modifier` as one HTML table. Modifiers only exist
//! on Linux; elsewhere the report is unavailable.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::{debug, warn};

use crate::flags::{self, SEPARATOR};
use crate::names::{self, Domain};
use crate::probe::DeviceQuery;
use crate::report::{ReportEmitter, Table};
use crate::Error;

/// Name used when the report cannot be produced on this system.
pub const REPORT_NAME: &str = "DRM format modifiers";

const HEADERS: [&str; 4] = ["Format", "Modifier", "Planes", "Features"];

/// Write the modifier report of `device` to `path`.
///
/// Returns the number of table rows written.
pub fn write_device_report(
    device: &dyn DeviceQuery,
    formats: &[i32],
    path: &Path,
) -> Result<usize, Error> {
    if !cfg!(target_os = "linux") {
        return Err(Error::BackendUnavailable(REPORT_NAME.to_string()));
    }
    let file = BufWriter::new(File::create(path)?);
    let rows = write_report(device, formats, file)?;
    debug!("Wrote {} modifier rows to {}", rows, path.display());
    Ok(rows)
}

/// Write the modifier report of `device` as an HTML document to `out`.
pub fn write_report<W: Write>(
    device: &dyn DeviceQuery,
    formats: &[i32],
    out: W,
) -> Result<usize, Error> {
    let identity = device.identity();
    let title = format!("{} - {}", REPORT_NAME, identity.name);
    let mut report = ReportEmitter::new(io::sink(), out, &title)?;
    report.key_value("Device name", &identity.name)?;

    let mut table = Table::new(&HEADERS);
    for format in formats {
        let format_name = names::resolve(Domain::Format, *format as i64);
        match device.drm_format_modifiers(*format) {
            Ok(modifiers) => {
                for entry in modifiers {
                    table.push_row(vec![
                        format_name.to_string(),
                        names::drm_modifier_name(entry.modifier),
                        entry.plane_count.to_string(),
                        flags::FORMAT_FEATURES
                            .decompose(entry.tiling_features)
                            .join(SEPARATOR),
                    ]);
                }
            }
            Err(err) => {
                warn!("{}: modifier query for {} failed: {}", identity.name, format_name, err);
                report.warning(&format!("Failed to query modifiers of {}: {}", format_name, err))?;
            }
        }
    }

    if table.is_empty() {
        report.line("No DRM format modifiers reported.")?;
    } else {
        report.emit_table(&table)?;
    }
    report.close()?;
    Ok(table.len())
}
