// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Au-Zone Technologies

//! Capability probing.
//!
//! [`CapabilityProbe`] walks the fixed capability list against a
//! [`DeviceQuery`]. Each capability is gated on its extension or API version
//! predicate; structured queries only run when the predicate holds, so entry
//! points of unsupported extensions are never called. A failing query is
//! logged and the record degrades to absent.

use ash::vk;
use log::{debug, warn};

use crate::capability::{
    CapabilityKind, CapabilityRecord, CooperativeMatrix2Support, CooperativeMatrixProperties,
    CooperativeVectorSupport, DeviceIdentity, FormatCapabilityEntry, FormatFeatures, MemoryLayout,
    ModifierEntry,
};
use crate::config::ProbeConfig;
use crate::Error;

pub const KHR_COOPERATIVE_MATRIX: &str = "VK_KHR_cooperative_matrix";
pub const NV_COOPERATIVE_MATRIX_2: &str = "VK_NV_cooperative_matrix2";
pub const NV_COOPERATIVE_VECTOR: &str = "VK_NV_cooperative_vector";
pub const EXT_IMAGE_DRM_FORMAT_MODIFIER: &str = "VK_EXT_image_drm_format_modifier";

/// Read-only queries against one opened device.
///
/// Implemented on `ash` by [`crate::vulkan::VulkanDevice`]. The structured
/// queries are only called after the matching predicate returned true.
pub trait DeviceQuery {
    fn identity(&self) -> &DeviceIdentity;

    fn has_extension(&self, name: &str) -> bool;

    fn api_version(&self) -> u32 {
        self.identity().api_version
    }

    /// `cooperativeMatrix` feature of VK_KHR_cooperative_matrix.
    fn cooperative_matrix_enabled(&self) -> bool;

    fn cooperative_matrix_properties(&self) -> Result<Vec<CooperativeMatrixProperties>, Error>;

    fn cooperative_matrix2(&self) -> Result<CooperativeMatrix2Support, Error>;

    fn cooperative_vector(&self) -> Result<CooperativeVectorSupport, Error>;

    fn memory_layout(&self) -> Result<MemoryLayout, Error>;

    fn format_features(&self, format: i32) -> Result<FormatFeatures, Error>;

    fn drm_format_modifiers(&self, format: i32) -> Result<Vec<ModifierEntry>, Error>;
}

/// Probes the fixed capability set of a device.
pub struct CapabilityProbe<'a> {
    config: &'a ProbeConfig,
}

impl<'a> CapabilityProbe<'a> {
    pub fn new(config: &'a ProbeConfig) -> Self {
        Self { config }
    }

    /// One record per [`CapabilityKind`], in [`CapabilityKind::ALL`] order.
    pub fn probe(&self, device: &dyn DeviceQuery) -> Vec<CapabilityRecord> {
        CapabilityKind::ALL
            .iter()
            .map(|kind| self.probe_kind(device, *kind))
            .collect()
    }

    pub fn probe_kind(&self, device: &dyn DeviceQuery, kind: CapabilityKind) -> CapabilityRecord {
        if !self.is_available(device, kind) {
            debug!("{}: {} not available", device.identity().name, kind.label());
            return CapabilityRecord::absent(kind);
        }

        debug!("{}: querying {}", device.identity().name, kind.label());
        let record = match kind {
            CapabilityKind::CooperativeMatrix => device
                .cooperative_matrix_properties()
                .map(|p| CapabilityRecord::CooperativeMatrix(Some(p))),
            CapabilityKind::CooperativeMatrix2 => device
                .cooperative_matrix2()
                .map(|p| CapabilityRecord::CooperativeMatrix2(Some(p))),
            CapabilityKind::CooperativeVector => device
                .cooperative_vector()
                .map(|p| CapabilityRecord::CooperativeVector(Some(p))),
            CapabilityKind::MemoryLayout => device
                .memory_layout()
                .map(|p| CapabilityRecord::MemoryLayout(Some(p))),
            CapabilityKind::FormatSupport => self
                .format_support(device)
                .map(|p| CapabilityRecord::FormatSupport(Some(p))),
        };

        record.unwrap_or_else(|err| {
            warn!(
                "{}: {} query failed, treating as not supported: {}",
                device.identity().name,
                kind.label(),
                err
            );
            CapabilityRecord::absent(kind)
        })
    }

    fn is_available(&self, device: &dyn DeviceQuery, kind: CapabilityKind) -> bool {
        match kind {
            CapabilityKind::CooperativeMatrix => {
                device.has_extension(KHR_COOPERATIVE_MATRIX) && device.cooperative_matrix_enabled()
            }
            CapabilityKind::CooperativeMatrix2 => device.has_extension(NV_COOPERATIVE_MATRIX_2),
            CapabilityKind::CooperativeVector => device.has_extension(NV_COOPERATIVE_VECTOR),
            CapabilityKind::MemoryLayout => device.api_version() >= vk::API_VERSION_1_2,
            CapabilityKind::FormatSupport => !self.config.formats.is_empty(),
        }
    }

    fn format_support(&self, device: &dyn DeviceQuery) -> Result<Vec<FormatCapabilityEntry>, Error> {
        self.config
            .formats
            .iter()
            .map(|format| {
                let features = device.format_features(*format)?;
                Ok(FormatCapabilityEntry::new(*format, features))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::CooperativeMatrix2Features;
    use std::cell::RefCell;

    struct FakeDevice {
        identity: DeviceIdentity,
        extensions: Vec<&'static str>,
        coopmat_feature: bool,
        fail_coopmat2: bool,
        calls: RefCell<Vec<&'static str>>,
    }

    impl FakeDevice {
        fn new(extensions: Vec<&'static str>) -> Self {
            Self {
                identity: DeviceIdentity {
                    index: 0,
                    name: "Fake GPU".to_string(),
                    vendor_id: 0x10DE,
                    device_id: 0x2684,
                    device_type: 2,
                    api_version: vk::API_VERSION_1_3,
                    driver_version: 0,
                    driver: None,
                    device_uuid: [1; 16],
                    driver_uuid: [2; 16],
                    device_luid: None,
                },
                extensions,
                coopmat_feature: true,
                fail_coopmat2: false,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl DeviceQuery for FakeDevice {
        fn identity(&self) -> &DeviceIdentity {
            &self.identity
        }

        fn has_extension(&self, name: &str) -> bool {
            self.extensions.contains(&name)
        }

        fn cooperative_matrix_enabled(&self) -> bool {
            self.coopmat_feature
        }

        fn cooperative_matrix_properties(&self) -> Result<Vec<CooperativeMatrixProperties>, Error> {
            self.calls.borrow_mut().push("coopmat");
            Ok(vec![
                CooperativeMatrixProperties {
                    m_size: 16,
                    n_size: 16,
                    k_size: 16,
                    a_type: 0,
                    b_type: 0,
                    c_type: 0,
                    result_type: 0,
                    saturating_accumulation: false,
                    scope: 3,
                },
                CooperativeMatrixProperties {
                    m_size: 16,
                    n_size: 8,
                    k_size: 32,
                    a_type: 3,
                    b_type: 3,
                    c_type: 5,
                    result_type: 5,
                    saturating_accumulation: true,
                    scope: 3,
                },
            ])
        }

        fn cooperative_matrix2(&self) -> Result<CooperativeMatrix2Support, Error> {
            self.calls.borrow_mut().push("coopmat2");
            if self.fail_coopmat2 {
                return Err(Error::SymbolNotFound(
                    "vkGetPhysicalDeviceCooperativeMatrixFlexibleDimensionsPropertiesNV".into(),
                ));
            }
            Ok(CooperativeMatrix2Support {
                features: CooperativeMatrix2Features {
                    workgroup_scope: true,
                    ..Default::default()
                },
                ..Default::default()
            })
        }

        fn cooperative_vector(&self) -> Result<CooperativeVectorSupport, Error> {
            self.calls.borrow_mut().push("coopvec");
            Ok(CooperativeVectorSupport::default())
        }

        fn memory_layout(&self) -> Result<MemoryLayout, Error> {
            self.calls.borrow_mut().push("memory");
            Ok(MemoryLayout {
                subgroup_size: 32,
                ..Default::default()
            })
        }

        fn format_features(&self, format: i32) -> Result<FormatFeatures, Error> {
            self.calls.borrow_mut().push("format");
            Ok(FormatFeatures {
                linear_tiling: 0,
                optimal_tiling: if format == 37 { 0x1 } else { 0 },
                buffer: 0,
            })
        }

        fn drm_format_modifiers(&self, _format: i32) -> Result<Vec<ModifierEntry>, Error> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_probe_order_and_presence() {
        let device = FakeDevice::new(vec![KHR_COOPERATIVE_MATRIX]);
        let config = ProbeConfig::default();
        let records = CapabilityProbe::new(&config).probe(&device);

        let kinds: Vec<CapabilityKind> = records.iter().map(|r| r.kind()).collect();
        assert_eq!(kinds, CapabilityKind::ALL.to_vec());
        assert!(records[0].is_present());
        assert!(!records[1].is_present());
        assert!(!records[2].is_present());
        assert!(records[3].is_present());
        assert!(records[4].is_present());
    }

    #[test]
    fn test_entries_verbatim_in_driver_order() {
        let device = FakeDevice::new(vec![KHR_COOPERATIVE_MATRIX]);
        let config = ProbeConfig::default();
        let record = CapabilityProbe::new(&config).probe_kind(&device, CapabilityKind::CooperativeMatrix);
        match record {
            CapabilityRecord::CooperativeMatrix(Some(entries)) => {
                assert_eq!(entries.len(), 2);
                assert_eq!(entries[0].m_size, 16);
                assert_eq!(entries[1].n_size, 8);
                assert!(entries[1].saturating_accumulation);
            }
            other => panic!("unexpected record {:?}", other),
        }
    }

    #[test]
    fn test_no_query_without_predicate() {
        let mut device = FakeDevice::new(vec![KHR_COOPERATIVE_MATRIX]);
        device.coopmat_feature = false;
        device.identity.api_version = vk::API_VERSION_1_1;
        let config = ProbeConfig {
            formats: Vec::new(),
        };
        let records = CapabilityProbe::new(&config).probe(&device);
        assert!(records.iter().all(|r| !r.is_present()));
        assert!(device.calls.borrow().is_empty());
    }

    #[test]
    fn test_query_failure_degrades() {
        let mut device = FakeDevice::new(vec![NV_COOPERATIVE_MATRIX_2, NV_COOPERATIVE_VECTOR]);
        device.fail_coopmat2 = true;
        let config = ProbeConfig::default();
        let records = CapabilityProbe::new(&config).probe(&device);
        assert_eq!(records[1], CapabilityRecord::CooperativeMatrix2(None));
        // later capabilities are still probed
        assert!(records[2].is_present());
        assert!(device.calls.borrow().contains(&"coopvec"));
    }

    #[test]
    fn test_format_support_keeps_config_order() {
        let device = FakeDevice::new(Vec::new());
        let config = ProbeConfig {
            formats: vec![44, 37, 999],
        };
        let record = CapabilityProbe::new(&config).probe_kind(&device, CapabilityKind::FormatSupport);
        match record {
            CapabilityRecord::FormatSupport(Some(entries)) => {
                let formats: Vec<i32> = entries.iter().map(|e| e.format).collect();
                assert_eq!(formats, vec![44, 37, 999]);
                assert_eq!(entries[1].optimal_tiling, vec!["FEATURE_SAMPLED_IMAGE"]);
            }
            other => panic!("unexpected record {:?}", other),
        }
    }
}
