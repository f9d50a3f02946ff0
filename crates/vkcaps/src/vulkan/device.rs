// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Au-Zone Technologies

use std::ffi::c_void;
use std::ptr;

use ash::vk;
use log::debug;
use vkcaps_sys::vk_ext;

use super::{driver_properties_supported, fixed_string, instance_proc, VulkanContext};
use crate::capability::{
    CooperativeMatrix2Features, CooperativeMatrix2Support, CooperativeMatrixProperties,
    CooperativeVectorProperties, CooperativeVectorSupport, DeviceIdentity, DriverInfo,
    FlexibleDimensionsProperties, FormatFeatures, MemoryHeap, MemoryLayout, ModifierEntry,
    SubgroupSizeRange,
};
use crate::driver::DeviceCandidate;
use crate::probe::{self, DeviceQuery};
use crate::Error;

const KHR_DRIVER_PROPERTIES: &str = "VK_KHR_driver_properties";
const EXT_SUBGROUP_SIZE_CONTROL: &str = "VK_EXT_subgroup_size_control";

/// An opened physical device.
///
/// Holds a logical device with a single queue for as long as it is alive.
pub struct VulkanDevice<'a> {
    context: &'a VulkanContext,
    physical_device: vk::PhysicalDevice,
    device: ash::Device,
    identity: DeviceIdentity,
    extensions: Vec<String>,
    cooperative_matrix: bool,
}

impl<'a> VulkanDevice<'a> {
    pub(super) fn open(
        context: &'a VulkanContext,
        physical_device: vk::PhysicalDevice,
        candidate: &DeviceCandidate,
    ) -> Result<Self, Error> {
        let instance = &context.instance;

        let priorities = [1.0f32];
        let queues = [vk::DeviceQueueCreateInfo::default()
            .queue_family_index(0)
            .queue_priorities(&priorities)];
        let create_info = vk::DeviceCreateInfo::default().queue_create_infos(&queues);
        let device = unsafe { instance.create_device(physical_device, &create_info, None) }?;
        debug!("Opened device #{}: {}", candidate.index, candidate.name);

        let mut opened = Self {
            context,
            physical_device,
            device,
            identity: DeviceIdentity {
                index: candidate.index,
                name: candidate.name.clone(),
                vendor_id: 0,
                device_id: 0,
                device_type: 0,
                api_version: 0,
                driver_version: 0,
                driver: None,
                device_uuid: [0; 16],
                driver_uuid: [0; 16],
                device_luid: None,
            },
            extensions: candidate.extensions.clone(),
            cooperative_matrix: false,
        };
        opened.identity = opened.query_identity(candidate.index);
        opened.cooperative_matrix = opened.query_cooperative_matrix_feature();
        Ok(opened)
    }

    fn instance(&self) -> &ash::Instance {
        &self.context.instance
    }

    /// Version usable for core structure queries, limited by the instance.
    fn effective_api_version(&self) -> u32 {
        self.identity.api_version.min(self.context.api_version)
    }

    fn query_identity(&self, index: usize) -> DeviceIdentity {
        let device_version = unsafe {
            self.instance()
                .get_physical_device_properties(self.physical_device)
        }
        .api_version;
        let has_driver_properties = driver_properties_supported(
            device_version.min(self.context.api_version),
            self.has_extension(KHR_DRIVER_PROPERTIES),
        );

        let mut id = vk::PhysicalDeviceIDProperties::default();
        let mut driver = vk::PhysicalDeviceDriverProperties::default();
        let mut properties2 = vk::PhysicalDeviceProperties2::default().push_next(&mut id);
        if has_driver_properties {
            properties2 = properties2.push_next(&mut driver);
        }
        unsafe {
            self.instance()
                .get_physical_device_properties2(self.physical_device, &mut properties2)
        };
        let properties = properties2.properties;

        DeviceIdentity {
            index,
            name: fixed_string(&properties.device_name),
            vendor_id: properties.vendor_id,
            device_id: properties.device_id,
            device_type: properties.device_type.as_raw(),
            api_version: properties.api_version,
            driver_version: properties.driver_version,
            driver: has_driver_properties.then(|| DriverInfo {
                id: driver.driver_id.as_raw(),
                name: fixed_string(&driver.driver_name),
                info: fixed_string(&driver.driver_info),
            }),
            device_uuid: id.device_uuid,
            driver_uuid: id.driver_uuid,
            device_luid: (id.device_luid_valid == vk::TRUE).then_some(id.device_luid),
        }
    }

    fn query_cooperative_matrix_feature(&self) -> bool {
        if !self.has_extension(probe::KHR_COOPERATIVE_MATRIX) {
            return false;
        }
        let mut cooperative_matrix = vk::PhysicalDeviceCooperativeMatrixFeaturesKHR::default();
        let mut features2 = vk::PhysicalDeviceFeatures2::default().push_next(&mut cooperative_matrix);
        unsafe {
            self.instance()
                .get_physical_device_features2(self.physical_device, &mut features2)
        };
        cooperative_matrix.cooperative_matrix == vk::TRUE
    }

    /// Query a variable-length list with the count-then-fill convention.
    fn enumerate<T, F>(&self, name: &str, mut query: F) -> Result<Vec<T>, Error>
    where
        T: Default + Clone,
        F: FnMut(*mut u32, *mut T) -> vk::Result,
    {
        let mut count = 0u32;
        match query(&mut count, ptr::null_mut()) {
            vk::Result::SUCCESS | vk::Result::INCOMPLETE => {}
            err => return Err(err.into()),
        }
        let mut items = vec![T::default(); count as usize];
        match query(&mut count, items.as_mut_ptr()) {
            vk::Result::SUCCESS | vk::Result::INCOMPLETE => {}
            err => return Err(err.into()),
        }
        items.truncate(count as usize);
        debug!("{}: {} returned {} entries", self.identity.name, name, items.len());
        Ok(items)
    }
}

impl DeviceQuery for VulkanDevice<'_> {
    fn identity(&self) -> &DeviceIdentity {
        &self.identity
    }

    fn has_extension(&self, name: &str) -> bool {
        self.extensions.iter().any(|e| e == name)
    }

    fn api_version(&self) -> u32 {
        self.effective_api_version()
    }

    fn cooperative_matrix_enabled(&self) -> bool {
        self.cooperative_matrix
    }

    fn cooperative_matrix_properties(&self) -> Result<Vec<CooperativeMatrixProperties>, Error> {
        let loader = ash::khr::cooperative_matrix::Instance::new(&self.context.entry, self.instance());
        let properties = unsafe {
            loader.get_physical_device_cooperative_matrix_properties(self.physical_device)
        }?;
        debug!(
            "{}: {} cooperative matrix configurations",
            self.identity.name,
            properties.len()
        );
        Ok(properties
            .iter()
            .map(|p| CooperativeMatrixProperties {
                m_size: p.m_size,
                n_size: p.n_size,
                k_size: p.k_size,
                a_type: p.a_type.as_raw(),
                b_type: p.b_type.as_raw(),
                c_type: p.c_type.as_raw(),
                result_type: p.result_type.as_raw(),
                saturating_accumulation: p.saturating_accumulation == vk::TRUE,
                scope: p.scope.as_raw(),
            })
            .collect())
    }

    fn cooperative_matrix2(&self) -> Result<CooperativeMatrix2Support, Error> {
        let mut nv_features = vk_ext::PhysicalDeviceCooperativeMatrix2FeaturesNV::default();
        let mut features2 = vk::PhysicalDeviceFeatures2::default();
        features2.p_next = (&mut nv_features as *mut vk_ext::PhysicalDeviceCooperativeMatrix2FeaturesNV)
            .cast::<c_void>();
        unsafe {
            self.instance()
                .get_physical_device_features2(self.physical_device, &mut features2)
        };

        let mut nv_properties = vk_ext::PhysicalDeviceCooperativeMatrix2PropertiesNV::default();
        let mut properties2 = vk::PhysicalDeviceProperties2::default();
        properties2.p_next = (&mut nv_properties
            as *mut vk_ext::PhysicalDeviceCooperativeMatrix2PropertiesNV)
            .cast::<c_void>();
        unsafe {
            self.instance()
                .get_physical_device_properties2(self.physical_device, &mut properties2)
        };

        let features = CooperativeMatrix2Features {
            workgroup_scope: nv_features.cooperative_matrix_workgroup_scope == vk::TRUE,
            flexible_dimensions: nv_features.cooperative_matrix_flexible_dimensions == vk::TRUE,
            reductions: nv_features.cooperative_matrix_reductions == vk::TRUE,
            conversions: nv_features.cooperative_matrix_conversions == vk::TRUE,
            per_element_operations: nv_features.cooperative_matrix_per_element_operations
                == vk::TRUE,
            tensor_addressing: nv_features.cooperative_matrix_tensor_addressing == vk::TRUE,
            block_loads: nv_features.cooperative_matrix_block_loads == vk::TRUE,
        };

        let flexible_dimensions = if features.flexible_dimensions {
            const NAME: &str = "vkGetPhysicalDeviceCooperativeMatrixFlexibleDimensionsPropertiesNV";
            let query: vk_ext::PFN_vkGetPhysicalDeviceCooperativeMatrixFlexibleDimensionsPropertiesNV =
                unsafe {
                    instance_proc(
                        &self.context.entry,
                        self.instance().handle(),
                        c"vkGetPhysicalDeviceCooperativeMatrixFlexibleDimensionsPropertiesNV",
                    )
                }
                .ok_or_else(|| Error::SymbolNotFound(NAME.to_string()))?;
            self.enumerate(NAME, |count, items| unsafe {
                query(self.physical_device, count, items)
            })?
            .iter()
            .map(|p| FlexibleDimensionsProperties {
                m_granularity: p.m_granularity,
                n_granularity: p.n_granularity,
                k_granularity: p.k_granularity,
                a_type: p.a_type,
                b_type: p.b_type,
                c_type: p.c_type,
                result_type: p.result_type,
                saturating_accumulation: p.saturating_accumulation == vk::TRUE,
                scope: p.scope,
                workgroup_invocations: p.workgroup_invocations,
            })
            .collect()
        } else {
            Vec::new()
        };

        Ok(CooperativeMatrix2Support {
            features,
            workgroup_scope_max_workgroup_size: nv_properties
                .cooperative_matrix_workgroup_scope_max_workgroup_size,
            flexible_dimensions_max_dimension: nv_properties
                .cooperative_matrix_flexible_dimensions_max_dimension,
            workgroup_scope_reserved_shared_memory: nv_properties
                .cooperative_matrix_workgroup_scope_reserved_shared_memory,
            flexible_dimensions,
        })
    }

    fn cooperative_vector(&self) -> Result<CooperativeVectorSupport, Error> {
        let mut nv_features = vk_ext::PhysicalDeviceCooperativeVectorFeaturesNV::default();
        let mut features2 = vk::PhysicalDeviceFeatures2::default();
        features2.p_next = (&mut nv_features as *mut vk_ext::PhysicalDeviceCooperativeVectorFeaturesNV)
            .cast::<c_void>();
        unsafe {
            self.instance()
                .get_physical_device_features2(self.physical_device, &mut features2)
        };

        let mut nv_properties = vk_ext::PhysicalDeviceCooperativeVectorPropertiesNV::default();
        let mut properties2 = vk::PhysicalDeviceProperties2::default();
        properties2.p_next = (&mut nv_properties
            as *mut vk_ext::PhysicalDeviceCooperativeVectorPropertiesNV)
            .cast::<c_void>();
        unsafe {
            self.instance()
                .get_physical_device_properties2(self.physical_device, &mut properties2)
        };

        const NAME: &str = "vkGetPhysicalDeviceCooperativeVectorPropertiesNV";
        let query: vk_ext::PFN_vkGetPhysicalDeviceCooperativeVectorPropertiesNV = unsafe {
            instance_proc(
                &self.context.entry,
                self.instance().handle(),
                c"vkGetPhysicalDeviceCooperativeVectorPropertiesNV",
            )
        }
        .ok_or_else(|| Error::SymbolNotFound(NAME.to_string()))?;
        let properties = self
            .enumerate(NAME, |count, items| unsafe {
                query(self.physical_device, count, items)
            })?
            .iter()
            .map(|p| CooperativeVectorProperties {
                input_type: p.input_type,
                input_interpretation: p.input_interpretation,
                matrix_interpretation: p.matrix_interpretation,
                bias_interpretation: p.bias_interpretation,
                result_type: p.result_type,
                transpose: p.transpose == vk::TRUE,
            })
            .collect();

        Ok(CooperativeVectorSupport {
            cooperative_vector: nv_features.cooperative_vector == vk::TRUE,
            training: nv_features.cooperative_vector_training == vk::TRUE,
            supported_stages: nv_properties.cooperative_vector_supported_stages.as_raw(),
            training_float16_accumulation: nv_properties
                .cooperative_vector_training_float16_accumulation
                == vk::TRUE,
            training_float32_accumulation: nv_properties
                .cooperative_vector_training_float32_accumulation
                == vk::TRUE,
            max_components: nv_properties.max_cooperative_vector_components,
            properties,
        })
    }

    fn memory_layout(&self) -> Result<MemoryLayout, Error> {
        let size_control = self.effective_api_version() >= vk::API_VERSION_1_3
            || self.has_extension(EXT_SUBGROUP_SIZE_CONTROL);

        let mut subgroup = vk::PhysicalDeviceSubgroupProperties::default();
        let mut size_control_properties = vk::PhysicalDeviceSubgroupSizeControlProperties::default();
        let mut properties2 = vk::PhysicalDeviceProperties2::default().push_next(&mut subgroup);
        if size_control {
            properties2 = properties2.push_next(&mut size_control_properties);
        }
        unsafe {
            self.instance()
                .get_physical_device_properties2(self.physical_device, &mut properties2)
        };

        let mut vulkan11 = vk::PhysicalDeviceVulkan11Features::default();
        let mut vulkan12 = vk::PhysicalDeviceVulkan12Features::default();
        let mut size_control_features = vk::PhysicalDeviceSubgroupSizeControlFeatures::default();
        let mut features2 = vk::PhysicalDeviceFeatures2::default()
            .push_next(&mut vulkan11)
            .push_next(&mut vulkan12);
        if size_control {
            features2 = features2.push_next(&mut size_control_features);
        }
        unsafe {
            self.instance()
                .get_physical_device_features2(self.physical_device, &mut features2)
        };

        let memory = unsafe {
            self.instance()
                .get_physical_device_memory_properties(self.physical_device)
        };
        let heap_count = (memory.memory_heap_count as usize).min(memory.memory_heaps.len());
        let heaps = memory.memory_heaps[..heap_count]
            .iter()
            .map(|heap| MemoryHeap {
                size: heap.size,
                flags: heap.flags.as_raw(),
            })
            .collect();

        let subgroup_size_control = (size_control
            && size_control_features.subgroup_size_control == vk::TRUE
            && size_control_properties
                .required_subgroup_size_stages
                .contains(vk::ShaderStageFlags::COMPUTE))
        .then_some(SubgroupSizeRange {
            min: size_control_properties.min_subgroup_size,
            max: size_control_properties.max_subgroup_size,
        });

        Ok(MemoryLayout {
            subgroup_size: subgroup.subgroup_size,
            subgroup_size_control,
            scalar_block_layout: vulkan12.scalar_block_layout == vk::TRUE,
            vulkan_memory_model: vulkan12.vulkan_memory_model == vk::TRUE,
            vulkan_memory_model_device_scope: vulkan12.vulkan_memory_model_device_scope == vk::TRUE,
            shader_float16: vulkan12.shader_float16 == vk::TRUE,
            storage_buffer_16bit_access: vulkan11.storage_buffer16_bit_access == vk::TRUE,
            heaps,
        })
    }

    fn format_features(&self, format: i32) -> Result<FormatFeatures, Error> {
        let properties = unsafe {
            self.instance().get_physical_device_format_properties(
                self.physical_device,
                vk::Format::from_raw(format),
            )
        };
        Ok(FormatFeatures {
            linear_tiling: properties.linear_tiling_features.as_raw() as u64,
            optimal_tiling: properties.optimal_tiling_features.as_raw() as u64,
            buffer: properties.buffer_features.as_raw() as u64,
        })
    }

    fn drm_format_modifiers(&self, format: i32) -> Result<Vec<ModifierEntry>, Error> {
        if !self.has_extension(probe::EXT_IMAGE_DRM_FORMAT_MODIFIER) {
            return Err(Error::BackendUnavailable(
                probe::EXT_IMAGE_DRM_FORMAT_MODIFIER.to_string(),
            ));
        }
        let format = vk::Format::from_raw(format);

        let mut list = vk::DrmFormatModifierPropertiesListEXT::default();
        let mut properties2 = vk::FormatProperties2::default().push_next(&mut list);
        unsafe {
            self.instance().get_physical_device_format_properties2(
                self.physical_device,
                format,
                &mut properties2,
            )
        };
        let count = list.drm_format_modifier_count as usize;
        if count == 0 {
            return Ok(Vec::new());
        }

        let mut modifiers = vec![vk::DrmFormatModifierPropertiesEXT::default(); count];
        let mut list = vk::DrmFormatModifierPropertiesListEXT::default()
            .drm_format_modifier_properties(&mut modifiers);
        let mut properties2 = vk::FormatProperties2::default().push_next(&mut list);
        unsafe {
            self.instance().get_physical_device_format_properties2(
                self.physical_device,
                format,
                &mut properties2,
            )
        };
        let count = (list.drm_format_modifier_count as usize).min(count);

        Ok(modifiers[..count]
            .iter()
            .map(|m| ModifierEntry {
                modifier: m.drm_format_modifier,
                plane_count: m.drm_format_modifier_plane_count,
                tiling_features: m.drm_format_modifier_tiling_features.as_raw() as u64,
            })
            .collect())
    }
}

impl Drop for VulkanDevice<'_> {
    fn drop(&mut self) {
        debug!("Closing device #{}: {}", self.identity.index, self.identity.name);
        unsafe { self.device.destroy_device(None) };
    }
}
