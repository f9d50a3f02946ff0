// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Au-Zone Technologies

use std::io::{self, Write};

use super::{ReportEmitter, Table};
use crate::capability::{
    hex_string, uuid_string, CapabilityKind, CapabilityRecord, CooperativeMatrix2Support,
    CooperativeMatrixProperties, CooperativeVectorSupport, DeviceIdentity, FormatCapabilityEntry,
    MemoryLayout,
};
use crate::flags::{self, SEPARATOR};
use crate::names::{self, Domain};
use crate::units::format_bytes;

/// `true` / `false`.
pub fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

fn component(code: i32) -> String {
    names::resolve(Domain::ComponentType, code as i64).to_string()
}

fn scope(code: i32) -> String {
    names::resolve(Domain::Scope, code as i64).to_string()
}

/// Key/value lines describing a device.
pub fn device_identity_entries(identity: &DeviceIdentity) -> Vec<(&'static str, String)> {
    let mut entries = vec![
        ("Device name", identity.name.clone()),
        ("Device type", identity.device_type_name().to_string()),
        (
            "Vendor",
            format!("{} ({:#06x})", identity.vendor_name(), identity.vendor_id),
        ),
        ("Device ID", format!("{:#06x}", identity.device_id)),
        ("API version", names::version_string(identity.api_version)),
        ("Driver version", identity.driver_version_string()),
    ];
    if let Some(driver) = &identity.driver {
        entries.push(("Device driver name", driver.name.clone()));
        entries.push(("Device driver info", driver.info.clone()));
        entries.push((
            "Device driver ID",
            names::resolve(Domain::DriverId, driver.id as i64).to_string(),
        ));
    }
    entries.push(("Device UUID", uuid_string(&identity.device_uuid)));
    entries.push(("Driver UUID", uuid_string(&identity.driver_uuid)));
    if let Some(luid) = &identity.device_luid {
        entries.push(("Device LUID", hex_string(luid)));
    }
    entries
}

impl<C: Write, H: Write> ReportEmitter<C, H> {
    pub fn emit_identity(&mut self, identity: &DeviceIdentity) -> io::Result<()> {
        for (key, value) in device_identity_entries(identity) {
            self.key_value(key, value)?;
        }
        Ok(())
    }

    /// Render one capability record, or its "is not supported" line.
    pub fn emit_record(&mut self, record: &CapabilityRecord) -> io::Result<()> {
        match record {
            CapabilityRecord::CooperativeMatrix(Some(entries)) => self.emit_cooperative_matrix(entries),
            CapabilityRecord::CooperativeMatrix2(Some(support)) => {
                self.emit_cooperative_matrix2(support)
            }
            CapabilityRecord::CooperativeVector(Some(support)) => {
                self.emit_cooperative_vector(support)
            }
            CapabilityRecord::MemoryLayout(Some(layout)) => self.emit_memory_layout(layout),
            CapabilityRecord::FormatSupport(Some(entries)) => self.emit_format_support(entries),
            absent => self.not_supported(absent.kind().label()),
        }
    }

    fn emit_cooperative_matrix(&mut self, entries: &[CooperativeMatrixProperties]) -> io::Result<()> {
        self.line("")?;
        self.line(&format!("{} properties:", CapabilityKind::CooperativeMatrix.label()))?;
        self.line("")?;

        let mut table = Table::new(&[
            "MSize", "NSize", "KSize", "AType", "BType", "CType", "ResultType", "sat", "scope",
        ]);
        for p in entries {
            table.push_row(vec![
                p.m_size.to_string(),
                p.n_size.to_string(),
                p.k_size.to_string(),
                component(p.a_type),
                component(p.b_type),
                component(p.c_type),
                component(p.result_type),
                bool_str(p.saturating_accumulation).to_string(),
                scope(p.scope),
            ]);
        }
        self.emit_table(&table)
    }

    fn emit_cooperative_matrix2(&mut self, support: &CooperativeMatrix2Support) -> io::Result<()> {
        let features = &support.features;
        self.line("")?;
        self.emit_section(
            &format!("{} properties", CapabilityKind::CooperativeMatrix2.label()),
            &[
                ("cooperativeMatrixWorkgroupScope", bool_str(features.workgroup_scope).to_string()),
                (
                    "cooperativeMatrixFlexibleDimensions",
                    bool_str(features.flexible_dimensions).to_string(),
                ),
                ("cooperativeMatrixReductions", bool_str(features.reductions).to_string()),
                ("cooperativeMatrixConversions", bool_str(features.conversions).to_string()),
                (
                    "cooperativeMatrixPerElementOperations",
                    bool_str(features.per_element_operations).to_string(),
                ),
                (
                    "cooperativeMatrixTensorAddressing",
                    bool_str(features.tensor_addressing).to_string(),
                ),
                ("cooperativeMatrixBlockLoads", bool_str(features.block_loads).to_string()),
                (
                    "cooperativeMatrixWorkgroupScopeMaxWorkgroupSize",
                    support.workgroup_scope_max_workgroup_size.to_string(),
                ),
                (
                    "cooperativeMatrixFlexibleDimensionsMaxDimension",
                    support.flexible_dimensions_max_dimension.to_string(),
                ),
                (
                    "cooperativeMatrixWorkgroupScopeReservedSharedMemory",
                    support.workgroup_scope_reserved_shared_memory.to_string(),
                ),
            ],
        )?;
        self.line("")?;

        let mut table = Table::new(&[
            "MGranularity",
            "NGranularity",
            "KGranularity",
            "AType",
            "BType",
            "CType",
            "ResultType",
            "sat",
            "scope",
            "WGInvocs",
        ]);
        for p in &support.flexible_dimensions {
            table.push_row(vec![
                p.m_granularity.to_string(),
                p.n_granularity.to_string(),
                p.k_granularity.to_string(),
                component(p.a_type),
                component(p.b_type),
                component(p.c_type),
                component(p.result_type),
                bool_str(p.saturating_accumulation).to_string(),
                scope(p.scope),
                p.workgroup_invocations.to_string(),
            ]);
        }
        self.emit_table(&table)
    }

    fn emit_cooperative_vector(&mut self, support: &CooperativeVectorSupport) -> io::Result<()> {
        self.line("")?;
        self.emit_section(
            &format!("{} properties", CapabilityKind::CooperativeVector.label()),
            &[
                ("cooperativeVector", bool_str(support.cooperative_vector).to_string()),
                ("cooperativeVectorTraining", bool_str(support.training).to_string()),
                (
                    "cooperativeVectorSupportedStages",
                    flags::SHADER_STAGES.describe(support.supported_stages as u64),
                ),
                (
                    "cooperativeVectorTrainingFloat16Accumulation",
                    bool_str(support.training_float16_accumulation).to_string(),
                ),
                (
                    "cooperativeVectorTrainingFloat32Accumulation",
                    bool_str(support.training_float32_accumulation).to_string(),
                ),
                ("maxCooperativeVectorComponents", support.max_components.to_string()),
            ],
        )?;
        self.line("")?;

        let mut table = Table::new(&[
            "InputType",
            "InputInterpretation",
            "MatrixInterpretation",
            "BiasInterpretation",
            "ResultType",
            "transpose",
        ]);
        for p in &support.properties {
            table.push_row(vec![
                component(p.input_type),
                component(p.input_interpretation),
                component(p.matrix_interpretation),
                component(p.bias_interpretation),
                component(p.result_type),
                bool_str(p.transpose).to_string(),
            ]);
        }
        self.emit_table(&table)
    }

    fn emit_memory_layout(&mut self, layout: &MemoryLayout) -> io::Result<()> {
        self.line("")?;
        self.key_value("Default subgroup size", layout.subgroup_size)?;
        if let Some(range) = layout.subgroup_size_control {
            self.key_value("Min subgroup size", range.min)?;
            self.key_value("Max subgroup size", range.max)?;
        }
        self.key_value("scalarBlockLayout", bool_str(layout.scalar_block_layout))?;
        self.key_value("vulkanMemoryModel", bool_str(layout.vulkan_memory_model))?;
        self.key_value(
            "vulkanMemoryModelDeviceScope",
            bool_str(layout.vulkan_memory_model_device_scope),
        )?;
        self.key_value("shaderFloat16", bool_str(layout.shader_float16))?;
        self.key_value(
            "storageBuffer16BitAccess",
            bool_str(layout.storage_buffer_16bit_access),
        )?;

        self.line("")?;
        self.line("Memory heaps:")?;
        let mut table = Table::new(&["Heap", "Size", "Flags"]);
        for (i, heap) in layout.heaps.iter().enumerate() {
            table.push_row(vec![
                i.to_string(),
                format_bytes(heap.size, 2, true),
                flags::MEMORY_HEAPS.describe(heap.flags as u64),
            ]);
        }
        self.emit_table(&table)
    }

    fn emit_format_support(&mut self, entries: &[FormatCapabilityEntry]) -> io::Result<()> {
        self.line("")?;
        self.line(&format!("{}:", CapabilityKind::FormatSupport.label()))?;
        self.line("")?;

        let mut table = Table::new(&["Format", "Linear tiling", "Optimal tiling", "Buffer"]);
        for entry in entries {
            table.push_row(vec![
                names::resolve(Domain::Format, entry.format as i64).to_string(),
                entry.linear_tiling.join(SEPARATOR),
                entry.optimal_tiling.join(SEPARATOR),
                entry.buffer.join(SEPARATOR),
            ]);
        }
        self.emit_table(&table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{FormatFeatures, MemoryHeap, SubgroupSizeRange};

    fn render(records: &[CapabilityRecord]) -> (String, String) {
        let mut console = Vec::new();
        let mut html = Vec::new();
        let mut report = ReportEmitter::new(&mut console, &mut html, "records").unwrap();
        for record in records {
            report.emit_record(record).unwrap();
        }
        report.close().unwrap();
        (
            String::from_utf8(console).unwrap(),
            String::from_utf8(html).unwrap(),
        )
    }

    #[test]
    fn test_cooperative_matrix_row() {
        let record = CapabilityRecord::CooperativeMatrix(Some(vec![CooperativeMatrixProperties {
            m_size: 16,
            n_size: 16,
            k_size: 16,
            a_type: 0,
            b_type: 0,
            c_type: 0,
            result_type: 0,
            saturating_accumulation: false,
            scope: 3,
        }]));
        let (console, html) = render(&[record]);
        assert!(console.contains("VK_KHR_cooperative_matrix properties:"));
        assert!(console.contains("MSize: 16\nNSize: 16\nKSize: 16\nAType: float16\n"));
        assert!(console.contains("sat: false\nscope: SUBGROUP\n"));
        assert!(html.contains(
            "<tr><td>16</td><td>16</td><td>16</td><td>float16</td><td>float16</td>\
             <td>float16</td><td>float16</td><td>false</td><td>SUBGROUP</td></tr>"
        ));
    }

    #[test]
    fn test_absent_records_print_not_supported() {
        let (console, html) = render(&[
            CapabilityRecord::CooperativeMatrix2(None),
            CapabilityRecord::CooperativeVector(None),
        ]);
        assert!(console.contains("VK_NV_cooperative_matrix2 is not supported."));
        assert!(console.contains("VK_NV_cooperative_vector is not supported."));
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn test_memory_layout() {
        let layout = MemoryLayout {
            subgroup_size: 32,
            subgroup_size_control: Some(SubgroupSizeRange { min: 16, max: 64 }),
            scalar_block_layout: true,
            heaps: vec![MemoryHeap {
                size: 8 * 1024 * 1024 * 1024,
                flags: 0x1,
            }],
            ..Default::default()
        };
        let (console, _) = render(&[CapabilityRecord::MemoryLayout(Some(layout))]);
        assert!(console.contains("Default subgroup size: 32\nMin subgroup size: 16\nMax subgroup size: 64\n"));
        assert!(console.contains("scalarBlockLayout: true\n"));
        assert!(console.contains("vulkanMemoryModel: false\n"));
        assert!(console.contains("Size: 8.00 GiB\nFlags: DEVICE_LOCAL\n"));
    }

    #[test]
    fn test_unknown_format_row_is_kept() {
        let entries = vec![
            FormatCapabilityEntry::new(37, FormatFeatures { linear_tiling: 0x1, optimal_tiling: 0x1, buffer: 0x8 }),
            FormatCapabilityEntry::new(123_456, FormatFeatures::default()),
        ];
        let (console, html) = render(&[CapabilityRecord::FormatSupport(Some(entries))]);
        assert!(console.contains("Format: VK_FORMAT_R8G8B8A8_UNORM\n"));
        assert!(console.contains("Format: UNKNOWN\n"));
        assert!(html.contains("<td>UNKNOWN</td>"));
        assert!(html.contains("<td>FEATURE_UNIFORM_TEXEL_BUFFER</td>"));
    }

    #[test]
    fn test_identity_entries() {
        let identity = DeviceIdentity {
            index: 0,
            name: "Test GPU".into(),
            vendor_id: 0x1002,
            device_id: 0x744c,
            device_type: 2,
            api_version: ash::vk::make_api_version(0, 1, 3, 278),
            driver_version: ash::vk::make_api_version(0, 2, 0, 294),
            driver: Some(crate::capability::DriverInfo {
                id: 3,
                name: "radv".into(),
                info: "Mesa 24.1".into(),
            }),
            device_uuid: [0; 16],
            driver_uuid: [0xff; 16],
            device_luid: None,
        };
        let entries = device_identity_entries(&identity);
        let get = |key: &str| entries.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str());
        assert_eq!(get("Vendor"), Some("AMD (0x1002)"));
        assert_eq!(get("Device type"), Some("DISCRETE_GPU"));
        assert_eq!(get("API version"), Some("1.3.278"));
        assert_eq!(get("Device driver ID"), Some("MESA_RADV"));
        assert_eq!(get("Driver UUID"), Some("ffffffff-ffff-ffff-ffff-ffffffffffff"));
        assert_eq!(get("Device LUID"), None);
    }
}
