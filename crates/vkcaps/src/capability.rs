// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Au-Zone Technologies

//! Capability records produced by [`crate::probe::CapabilityProbe`].
//!
//! Payloads keep the raw driver codes. Component types, scopes and flag masks
//! are serialized through the name tables so the JSON output reads the same
//! as the console report.

use serde::{Serialize, Serializer};

use crate::flags;
use crate::names::{self, Domain};

/// Kinds of capability probed for every device, in report order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum CapabilityKind {
    CooperativeMatrix,
    CooperativeMatrix2,
    CooperativeVector,
    MemoryLayout,
    FormatSupport,
}

impl CapabilityKind {
    pub const ALL: [CapabilityKind; 5] = [
        CapabilityKind::CooperativeMatrix,
        CapabilityKind::CooperativeMatrix2,
        CapabilityKind::CooperativeVector,
        CapabilityKind::MemoryLayout,
        CapabilityKind::FormatSupport,
    ];

    /// Label used in report headings and "is not supported" lines.
    pub fn label(self) -> &'static str {
        match self {
            CapabilityKind::CooperativeMatrix => "VK_KHR_cooperative_matrix",
            CapabilityKind::CooperativeMatrix2 => "VK_NV_cooperative_matrix2",
            CapabilityKind::CooperativeVector => "VK_NV_cooperative_vector",
            CapabilityKind::MemoryLayout => "Vulkan 1.2 memory layout",
            CapabilityKind::FormatSupport => "Format properties",
        }
    }
}

/// One probed capability. `None` means the device does not expose it.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", content = "payload")]
pub enum CapabilityRecord {
    CooperativeMatrix(Option<Vec<CooperativeMatrixProperties>>),
    CooperativeMatrix2(Option<CooperativeMatrix2Support>),
    CooperativeVector(Option<CooperativeVectorSupport>),
    MemoryLayout(Option<MemoryLayout>),
    FormatSupport(Option<Vec<FormatCapabilityEntry>>),
}

impl CapabilityRecord {
    pub fn kind(&self) -> CapabilityKind {
        match self {
            CapabilityRecord::CooperativeMatrix(_) => CapabilityKind::CooperativeMatrix,
            CapabilityRecord::CooperativeMatrix2(_) => CapabilityKind::CooperativeMatrix2,
            CapabilityRecord::CooperativeVector(_) => CapabilityKind::CooperativeVector,
            CapabilityRecord::MemoryLayout(_) => CapabilityKind::MemoryLayout,
            CapabilityRecord::FormatSupport(_) => CapabilityKind::FormatSupport,
        }
    }

    pub fn is_present(&self) -> bool {
        match self {
            CapabilityRecord::CooperativeMatrix(p) => p.is_some(),
            CapabilityRecord::CooperativeMatrix2(p) => p.is_some(),
            CapabilityRecord::CooperativeVector(p) => p.is_some(),
            CapabilityRecord::MemoryLayout(p) => p.is_some(),
            CapabilityRecord::FormatSupport(p) => p.is_some(),
        }
    }

    /// The absent record of a kind.
    pub fn absent(kind: CapabilityKind) -> Self {
        match kind {
            CapabilityKind::CooperativeMatrix => CapabilityRecord::CooperativeMatrix(None),
            CapabilityKind::CooperativeMatrix2 => CapabilityRecord::CooperativeMatrix2(None),
            CapabilityKind::CooperativeVector => CapabilityRecord::CooperativeVector(None),
            CapabilityKind::MemoryLayout => CapabilityRecord::MemoryLayout(None),
            CapabilityKind::FormatSupport => CapabilityRecord::FormatSupport(None),
        }
    }
}

/// `VkCooperativeMatrixPropertiesKHR`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CooperativeMatrixProperties {
    pub m_size: u32,
    pub n_size: u32,
    pub k_size: u32,
    #[serde(serialize_with = "component_type")]
    pub a_type: i32,
    #[serde(serialize_with = "component_type")]
    pub b_type: i32,
    #[serde(serialize_with = "component_type")]
    pub c_type: i32,
    #[serde(serialize_with = "component_type")]
    pub result_type: i32,
    pub saturating_accumulation: bool,
    #[serde(serialize_with = "scope")]
    pub scope: i32,
}

/// `VkPhysicalDeviceCooperativeMatrix2FeaturesNV`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CooperativeMatrix2Features {
    pub workgroup_scope: bool,
    pub flexible_dimensions: bool,
    pub reductions: bool,
    pub conversions: bool,
    pub per_element_operations: bool,
    pub tensor_addressing: bool,
    pub block_loads: bool,
}

/// `VkCooperativeMatrixFlexibleDimensionsPropertiesNV`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FlexibleDimensionsProperties {
    pub m_granularity: u32,
    pub n_granularity: u32,
    pub k_granularity: u32,
    #[serde(serialize_with = "component_type")]
    pub a_type: i32,
    #[serde(serialize_with = "component_type")]
    pub b_type: i32,
    #[serde(serialize_with = "component_type")]
    pub c_type: i32,
    #[serde(serialize_with = "component_type")]
    pub result_type: i32,
    pub saturating_accumulation: bool,
    #[serde(serialize_with = "scope")]
    pub scope: i32,
    pub workgroup_invocations: u32,
}

/// VK_NV_cooperative_matrix2 features, limits and flexible dimension entries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CooperativeMatrix2Support {
    pub features: CooperativeMatrix2Features,
    pub workgroup_scope_max_workgroup_size: u32,
    pub flexible_dimensions_max_dimension: u32,
    pub workgroup_scope_reserved_shared_memory: u32,
    pub flexible_dimensions: Vec<FlexibleDimensionsProperties>,
}

/// `VkCooperativeVectorPropertiesNV`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CooperativeVectorProperties {
    #[serde(serialize_with = "component_type")]
    pub input_type: i32,
    #[serde(serialize_with = "component_type")]
    pub input_interpretation: i32,
    #[serde(serialize_with = "component_type")]
    pub matrix_interpretation: i32,
    #[serde(serialize_with = "component_type")]
    pub bias_interpretation: i32,
    #[serde(serialize_with = "component_type")]
    pub result_type: i32,
    pub transpose: bool,
}

/// VK_NV_cooperative_vector features, limits and supported type combinations.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CooperativeVectorSupport {
    pub cooperative_vector: bool,
    pub training: bool,
    #[serde(serialize_with = "shader_stages")]
    pub supported_stages: u32,
    pub training_float16_accumulation: bool,
    pub training_float32_accumulation: bool,
    pub max_components: u32,
    pub properties: Vec<CooperativeVectorProperties>,
}

/// Subgroup size range available through `subgroupSizeControl`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SubgroupSizeRange {
    pub min: u32,
    pub max: u32,
}

/// One `VkMemoryHeap`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MemoryHeap {
    pub size: u64,
    #[serde(serialize_with = "memory_heap_flags")]
    pub flags: u32,
}

/// Subgroup, memory model and storage properties relevant to matrix kernels.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MemoryLayout {
    pub subgroup_size: u32,
    /// Present when `subgroupSizeControl` is supported for compute shaders.
    pub subgroup_size_control: Option<SubgroupSizeRange>,
    pub scalar_block_layout: bool,
    pub vulkan_memory_model: bool,
    pub vulkan_memory_model_device_scope: bool,
    pub shader_float16: bool,
    pub storage_buffer_16bit_access: bool,
    pub heaps: Vec<MemoryHeap>,
}

/// Raw `VkFormatProperties` masks of one format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormatFeatures {
    pub linear_tiling: u64,
    pub optimal_tiling: u64,
    pub buffer: u64,
}

/// Format support with the feature masks decomposed into flag names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FormatCapabilityEntry {
    #[serde(serialize_with = "format_name")]
    pub format: i32,
    pub linear_tiling: Vec<&'static str>,
    pub optimal_tiling: Vec<&'static str>,
    pub buffer: Vec<&'static str>,
}

impl FormatCapabilityEntry {
    pub fn new(format: i32, features: FormatFeatures) -> Self {
        Self {
            format,
            linear_tiling: flags::FORMAT_FEATURES.decompose(features.linear_tiling),
            optimal_tiling: flags::FORMAT_FEATURES.decompose(features.optimal_tiling),
            buffer: flags::FORMAT_FEATURES.decompose(features.buffer),
        }
    }

    /// Whether the format supports anything at all.
    pub fn is_supported(&self) -> bool {
        !(self.linear_tiling.is_empty() && self.optimal_tiling.is_empty() && self.buffer.is_empty())
    }
}

/// One `VkDrmFormatModifierPropertiesEXT` entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ModifierEntry {
    pub modifier: u64,
    pub plane_count: u32,
    #[serde(serialize_with = "format_features")]
    pub tiling_features: u64,
}

/// Driver identity reported by `VkPhysicalDeviceDriverProperties`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DriverInfo {
    #[serde(serialize_with = "driver_id")]
    pub id: i32,
    pub name: String,
    pub info: String,
}

/// Identity of one physical device.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DeviceIdentity {
    pub index: usize,
    pub name: String,
    pub vendor_id: u32,
    pub device_id: u32,
    #[serde(serialize_with = "device_type")]
    pub device_type: i32,
    #[serde(serialize_with = "version")]
    pub api_version: u32,
    pub driver_version: u32,
    pub driver: Option<DriverInfo>,
    #[serde(serialize_with = "uuid")]
    pub device_uuid: [u8; 16],
    #[serde(serialize_with = "uuid")]
    pub driver_uuid: [u8; 16],
    pub device_luid: Option<[u8; 8]>,
}

impl DeviceIdentity {
    pub fn vendor_name(&self) -> &'static str {
        names::resolve(Domain::PciVendor, self.vendor_id as i64)
    }

    pub fn device_type_name(&self) -> &'static str {
        names::resolve(Domain::DeviceType, self.device_type as i64)
    }

    pub fn driver_version_string(&self) -> String {
        names::driver_version_string(self.vendor_id, self.driver_version)
    }
}

/// Format a UUID as `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`.
pub fn uuid_string(bytes: &[u8; 16]) -> String {
    let mut out = String::with_capacity(36);
    for (i, byte) in bytes.iter().enumerate() {
        if matches!(i, 4 | 6 | 8 | 10) {
            out.push('-');
        }
        out.push_str(&format!("{:02x}", byte));
    }
    out
}

/// Format raw bytes as lowercase hex without separators.
pub fn hex_string(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{:02x}", byte)).collect()
}

fn component_type<S: Serializer>(code: &i32, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(names::resolve(Domain::ComponentType, *code as i64))
}

fn scope<S: Serializer>(code: &i32, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(names::resolve(Domain::Scope, *code as i64))
}

fn format_name<S: Serializer>(code: &i32, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(names::resolve(Domain::Format, *code as i64))
}

fn driver_id<S: Serializer>(code: &i32, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(names::resolve(Domain::DriverId, *code as i64))
}

fn device_type<S: Serializer>(code: &i32, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(names::resolve(Domain::DeviceType, *code as i64))
}

fn version<S: Serializer>(version: &u32, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&names::version_string(*version))
}

fn shader_stages<S: Serializer>(bits: &u32, s: S) -> Result<S::Ok, S::Error> {
    flags::SHADER_STAGES.decompose(*bits as u64).serialize(s)
}

fn memory_heap_flags<S: Serializer>(bits: &u32, s: S) -> Result<S::Ok, S::Error> {
    flags::MEMORY_HEAPS.decompose(*bits as u64).serialize(s)
}

fn format_features<S: Serializer>(bits: &u64, s: S) -> Result<S::Ok, S::Error> {
    flags::FORMAT_FEATURES.decompose(*bits).serialize(s)
}

fn uuid<S: Serializer>(bytes: &[u8; 16], s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&uuid_string(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_string() {
        let bytes = [
            0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc, 0xde, 0xf0, 0x01, 0x23, 0x45, 0x67, 0x89, 0xab,
            0xcd, 0xef,
        ];
        assert_eq!(uuid_string(&bytes), "12345678-9abc-def0-0123-456789abcdef");
        assert_eq!(hex_string(&bytes[..4]), "12345678");
    }

    #[test]
    fn test_absent_records() {
        for kind in CapabilityKind::ALL {
            let record = CapabilityRecord::absent(kind);
            assert_eq!(record.kind(), kind);
            assert!(!record.is_present());
        }
    }

    #[test]
    fn test_format_entry_names() {
        let entry = FormatCapabilityEntry::new(
            37,
            FormatFeatures {
                linear_tiling: 0x1,
                optimal_tiling: 0x1 | 0x80,
                buffer: 0,
            },
        );
        assert_eq!(entry.linear_tiling, vec!["FEATURE_SAMPLED_IMAGE"]);
        assert_eq!(
            entry.optimal_tiling,
            vec!["FEATURE_SAMPLED_IMAGE", "FEATURE_COLOR_ATTACHMENT"]
        );
        assert!(entry.buffer.is_empty());
        assert!(entry.is_supported());
        assert!(!FormatCapabilityEntry::new(37, FormatFeatures::default()).is_supported());
    }

    #[test]
    fn test_serialize_uses_names() {
        let props = CooperativeMatrixProperties {
            m_size: 16,
            n_size: 16,
            k_size: 16,
            a_type: 0,
            b_type: 0,
            c_type: 1,
            result_type: 1,
            saturating_accumulation: false,
            scope: 3,
        };
        let record = CapabilityRecord::CooperativeMatrix(Some(vec![props]));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["kind"], "CooperativeMatrix");
        assert_eq!(json["payload"][0]["a_type"], "float16");
        assert_eq!(json["payload"][0]["result_type"], "float32");
        assert_eq!(json["payload"][0]["scope"], "SUBGROUP");

        let json = serde_json::to_value(CapabilityRecord::MemoryLayout(None)).unwrap();
        assert!(json["payload"].is_null());
    }
}
