// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Au-Zone Technologies

//! Numeric code to display name mapping.
//!
//! Every domain is a static `(code, name)` slice wrapped in a [`NameTable`],
//! which builds a sorted lookup map on first use. Codes without an entry
//! resolve to [`UNKNOWN`]; lookups never fail.
//!
//! ```
//! use vkcaps::names::{self, Domain};
//!
//! assert_eq!(names::resolve(Domain::ComponentType, 0), "float16");
//! assert_eq!(names::resolve(Domain::Scope, 3), "SUBGROUP");
//! assert_eq!(names::resolve(Domain::Scope, 42), "UNKNOWN");
//! ```

mod format;

use std::collections::BTreeMap;
use std::sync::OnceLock;

use vkcaps_sys::drm;
use vkcaps_sys::vk_ext;

/// Name returned for codes missing from a table.
pub const UNKNOWN: &str = "UNKNOWN";

/// A static code to name table with a lazily built lookup map.
pub struct NameTable {
    entries: &'static [(i64, &'static str)],
    map: OnceLock<BTreeMap<i64, &'static str>>,
}

impl NameTable {
    pub const fn new(entries: &'static [(i64, &'static str)]) -> Self {
        Self {
            entries,
            map: OnceLock::new(),
        }
    }

    fn map(&self) -> &BTreeMap<i64, &'static str> {
        self.map
            .get_or_init(|| self.entries.iter().copied().collect())
    }

    /// Look up a code, returning `None` when it has no entry.
    pub fn get(&self, code: i64) -> Option<&'static str> {
        self.map().get(&code).copied()
    }

    /// Look up a code, returning [`UNKNOWN`] when it has no entry.
    pub fn resolve(&self, code: i64) -> &'static str {
        self.get(code).unwrap_or(UNKNOWN)
    }

    /// All codes in declaration order.
    pub fn codes(&self) -> impl Iterator<Item = i64> + '_ {
        self.entries.iter().map(|(code, _)| *code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Name domains known to the resolver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Domain {
    /// `VkFormat`
    Format,
    /// `VkComponentTypeKHR`, including the NV packed and FP8 extensions
    ComponentType,
    /// `VkScopeKHR`
    Scope,
    /// PCI vendor ids and Khronos vendor ids
    PciVendor,
    /// `VkDriverId`
    DriverId,
    /// `VkPhysicalDeviceType`
    DeviceType,
    /// DRM format modifier vendor namespace (top 8 bits of a modifier)
    DrmVendor,
}

impl Domain {
    /// The backing table of this domain.
    pub fn table(self) -> &'static NameTable {
        match self {
            Domain::Format => &FORMATS,
            Domain::ComponentType => &COMPONENT_TYPES,
            Domain::Scope => &SCOPES,
            Domain::PciVendor => &PCI_VENDORS,
            Domain::DriverId => &DRIVER_IDS,
            Domain::DeviceType => &DEVICE_TYPES,
            Domain::DrmVendor => &DRM_VENDORS,
        }
    }
}

/// Resolve `code` in `domain`. Unmapped codes return [`UNKNOWN`].
pub fn resolve(domain: Domain, code: i64) -> &'static str {
    domain.table().resolve(code)
}

/// Name of a DRM format modifier.
///
/// Returns `INVALID`, `LINEAR` or a known Intel modifier name; any other value
/// is printed in hex and annotated with its vendor namespace, for example
/// `0x200000000401b04 (AMD)`.
pub fn drm_modifier_name(modifier: u64) -> String {
    if modifier == drm::DRM_FORMAT_MOD_INVALID {
        return "INVALID".to_string();
    }
    if modifier == drm::DRM_FORMAT_MOD_LINEAR {
        return "LINEAR".to_string();
    }
    let vendor = drm::fourcc_mod_get_vendor(modifier);
    if vendor == drm::DRM_FORMAT_MOD_VENDOR_INTEL {
        if let Some(name) = INTEL_MODIFIERS.get(modifier as i64) {
            return name.to_string();
        }
    }
    format!("{:#x} ({})", modifier, resolve(Domain::DrmVendor, vendor as i64))
}

/// Format a packed Vulkan version as `major.minor.patch`.
pub fn version_string(version: u32) -> String {
    format!(
        "{}.{}.{}",
        ash::vk::api_version_major(version),
        ash::vk::api_version_minor(version),
        ash::vk::api_version_patch(version)
    )
}

/// Format a driver version, decoding the vendor specific packings.
pub fn driver_version_string(vendor_id: u32, version: u32) -> String {
    match vendor_id {
        // NVIDIA: 10.8.8.6
        0x10DE => format!(
            "{}.{}.{}.{}",
            (version >> 22) & 0x3ff,
            (version >> 14) & 0xff,
            (version >> 6) & 0xff,
            version & 0x3f
        ),
        // Intel on Windows: 18.14
        0x8086 if cfg!(windows) => format!("{}.{}", version >> 14, version & 0x3fff),
        _ => version_string(version),
    }
}

/// Every known `VkFormat` code except `VK_FORMAT_UNDEFINED`.
pub fn known_formats() -> impl Iterator<Item = i32> {
    FORMATS.codes().filter(|code| *code != 0).map(|code| code as i32)
}

static FORMATS: NameTable = NameTable::new(format::FORMATS);

static COMPONENT_TYPES: NameTable = NameTable::new(&[
    (0, "float16"),
    (1, "float32"),
    (2, "float64"),
    (3, "sint8"),
    (4, "sint16"),
    (5, "sint32"),
    (6, "sint64"),
    (7, "uint8"),
    (8, "uint16"),
    (9, "uint32"),
    (10, "uint64"),
    (vk_ext::COMPONENT_TYPE_BFLOAT16_KHR as i64, "bfloat16"),
    (vk_ext::COMPONENT_TYPE_SINT8_PACKED_NV as i64, "sint8_packed"),
    (vk_ext::COMPONENT_TYPE_UINT8_PACKED_NV as i64, "uint8_packed"),
    (vk_ext::COMPONENT_TYPE_FLOAT_E4M3_NV as i64, "float_e4m3"),
    (vk_ext::COMPONENT_TYPE_FLOAT_E5M2_NV as i64, "float_e5m2"),
]);

static SCOPES: NameTable = NameTable::new(&[
    (1, "DEVICE"),
    (2, "WORKGROUP"),
    (3, "SUBGROUP"),
    (5, "QUEUE_FAMILY"),
]);

static PCI_VENDORS: NameTable = NameTable::new(&[
    (0x1002, "AMD"),
    (0x1010, "ImgTec"),
    (0x106B, "Apple"),
    (0x10DE, "NVIDIA"),
    (0x13B5, "ARM"),
    (0x144D, "Samsung"),
    (0x14E4, "Broadcom"),
    (0x19E5, "Huawei"),
    (0x1AE0, "Google"),
    (0x5143, "Qualcomm"),
    (0x8086, "Intel"),
    (0x10001, "VIV"),
    (0x10002, "VSI"),
    (0x10003, "KAZAN"),
    (0x10004, "CODEPLAY"),
    (0x10005, "MESA"),
    (0x10006, "POCL"),
    (0x10007, "MOBILEYE"),
]);

static DRIVER_IDS: NameTable = NameTable::new(&[
    (1, "AMD_PROPRIETARY"),
    (2, "AMD_OPEN_SOURCE"),
    (3, "MESA_RADV"),
    (4, "NVIDIA_PROPRIETARY"),
    (5, "INTEL_PROPRIETARY_WINDOWS"),
    (6, "INTEL_OPEN_SOURCE_MESA"),
    (7, "IMAGINATION_PROPRIETARY"),
    (8, "QUALCOMM_PROPRIETARY"),
    (9, "ARM_PROPRIETARY"),
    (10, "GOOGLE_SWIFTSHADER"),
    (11, "GGP_PROPRIETARY"),
    (12, "BROADCOM_PROPRIETARY"),
    (13, "MESA_LLVMPIPE"),
    (14, "MOLTENVK"),
    (15, "COREAVI_PROPRIETARY"),
    (16, "JUICE_PROPRIETARY"),
    (17, "VERISILICON_PROPRIETARY"),
    (18, "MESA_TURNIP"),
    (19, "MESA_V3DV"),
    (20, "MESA_PANVK"),
    (21, "SAMSUNG_PROPRIETARY"),
    (22, "MESA_VENUS"),
    (23, "MESA_DOZEN"),
    (24, "MESA_NVK"),
    (25, "IMAGINATION_OPEN_SOURCE_MESA"),
    (26, "MESA_HONEYKRISP"),
]);

static DEVICE_TYPES: NameTable = NameTable::new(&[
    (0, "OTHER"),
    (1, "INTEGRATED_GPU"),
    (2, "DISCRETE_GPU"),
    (3, "VIRTUAL_GPU"),
    (4, "CPU"),
]);

static DRM_VENDORS: NameTable = NameTable::new(&[
    (drm::DRM_FORMAT_MOD_VENDOR_NONE as i64, "NONE"),
    (drm::DRM_FORMAT_MOD_VENDOR_INTEL as i64, "INTEL"),
    (drm::DRM_FORMAT_MOD_VENDOR_AMD as i64, "AMD"),
    (drm::DRM_FORMAT_MOD_VENDOR_NVIDIA as i64, "NVIDIA"),
    (drm::DRM_FORMAT_MOD_VENDOR_SAMSUNG as i64, "SAMSUNG"),
    (drm::DRM_FORMAT_MOD_VENDOR_QCOM as i64, "QCOM"),
    (drm::DRM_FORMAT_MOD_VENDOR_VIVANTE as i64, "VIVANTE"),
    (drm::DRM_FORMAT_MOD_VENDOR_BROADCOM as i64, "BROADCOM"),
    (drm::DRM_FORMAT_MOD_VENDOR_ARM as i64, "ARM"),
    (drm::DRM_FORMAT_MOD_VENDOR_ALLWINNER as i64, "ALLWINNER"),
    (drm::DRM_FORMAT_MOD_VENDOR_AMLOGIC as i64, "AMLOGIC"),
    (drm::DRM_FORMAT_MOD_VENDOR_MTK as i64, "MTK"),
]);

static INTEL_MODIFIERS: NameTable = NameTable::new(&[
    (drm::I915_FORMAT_MOD_X_TILED as i64, "I915_FORMAT_MOD_X_TILED"),
    (drm::I915_FORMAT_MOD_Y_TILED as i64, "I915_FORMAT_MOD_Y_TILED"),
    (drm::I915_FORMAT_MOD_Yf_TILED as i64, "I915_FORMAT_MOD_Yf_TILED"),
    (drm::I915_FORMAT_MOD_Y_TILED_CCS as i64, "I915_FORMAT_MOD_Y_TILED_CCS"),
    (drm::I915_FORMAT_MOD_Yf_TILED_CCS as i64, "I915_FORMAT_MOD_Yf_TILED_CCS"),
    (drm::I915_FORMAT_MOD_Y_TILED_GEN12_RC_CCS as i64, "I915_FORMAT_MOD_Y_TILED_GEN12_RC_CCS"),
    (drm::I915_FORMAT_MOD_Y_TILED_GEN12_MC_CCS as i64, "I915_FORMAT_MOD_Y_TILED_GEN12_MC_CCS"),
    (drm::I915_FORMAT_MOD_Y_TILED_GEN12_RC_CCS_CC as i64, "I915_FORMAT_MOD_Y_TILED_GEN12_RC_CCS_CC"),
    (drm::I915_FORMAT_MOD_4_TILED as i64, "I915_FORMAT_MOD_4_TILED"),
    (drm::I915_FORMAT_MOD_4_TILED_DG2_RC_CCS as i64, "I915_FORMAT_MOD_4_TILED_DG2_RC_CCS"),
    (drm::I915_FORMAT_MOD_4_TILED_DG2_MC_CCS as i64, "I915_FORMAT_MOD_4_TILED_DG2_MC_CCS"),
    (drm::I915_FORMAT_MOD_4_TILED_DG2_RC_CCS_CC as i64, "I915_FORMAT_MOD_4_TILED_DG2_RC_CCS_CC"),
    (drm::I915_FORMAT_MOD_4_TILED_MTL_RC_CCS as i64, "I915_FORMAT_MOD_4_TILED_MTL_RC_CCS"),
    (drm::I915_FORMAT_MOD_4_TILED_MTL_MC_CCS as i64, "I915_FORMAT_MOD_4_TILED_MTL_MC_CCS"),
    (drm::I915_FORMAT_MOD_4_TILED_MTL_RC_CCS_CC as i64, "I915_FORMAT_MOD_4_TILED_MTL_RC_CCS_CC"),
    (drm::I915_FORMAT_MOD_4_TILED_LNL_CCS as i64, "I915_FORMAT_MOD_4_TILED_LNL_CCS"),
    (drm::I915_FORMAT_MOD_4_TILED_BMG_CCS as i64, "I915_FORMAT_MOD_4_TILED_BMG_CCS"),
]);
