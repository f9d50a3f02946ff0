// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Au-Zone Technologies

//! Vulkan vendor extensions newer than the registry revision bundled with `ash`.
//!
//! Layouts follow `vulkan_core.h`. Component types and scopes are kept as raw
//! `i32` values since several of the codes (packed int8, FP8) have no `ash`
//! constant.

use std::ffi::c_void;
use std::ptr;

use ash::vk;

pub const STRUCTURE_TYPE_PHYSICAL_DEVICE_COOPERATIVE_VECTOR_FEATURES_NV: vk::StructureType =
    vk::StructureType::from_raw(1000491000);
pub const STRUCTURE_TYPE_PHYSICAL_DEVICE_COOPERATIVE_VECTOR_PROPERTIES_NV: vk::StructureType =
    vk::StructureType::from_raw(1000491001);
pub const STRUCTURE_TYPE_COOPERATIVE_VECTOR_PROPERTIES_NV: vk::StructureType =
    vk::StructureType::from_raw(1000491002);
pub const STRUCTURE_TYPE_PHYSICAL_DEVICE_COOPERATIVE_MATRIX_2_FEATURES_NV: vk::StructureType =
    vk::StructureType::from_raw(1000593000);
pub const STRUCTURE_TYPE_COOPERATIVE_MATRIX_FLEXIBLE_DIMENSIONS_PROPERTIES_NV: vk::StructureType =
    vk::StructureType::from_raw(1000593001);
pub const STRUCTURE_TYPE_PHYSICAL_DEVICE_COOPERATIVE_MATRIX_2_PROPERTIES_NV: vk::StructureType =
    vk::StructureType::from_raw(1000593002);

pub const COMPONENT_TYPE_BFLOAT16_KHR: i32 = 1000141000;
pub const COMPONENT_TYPE_SINT8_PACKED_NV: i32 = 1000491000;
pub const COMPONENT_TYPE_UINT8_PACKED_NV: i32 = 1000491001;
pub const COMPONENT_TYPE_FLOAT_E4M3_NV: i32 = 1000491002;
pub const COMPONENT_TYPE_FLOAT_E5M2_NV: i32 = 1000491003;

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct PhysicalDeviceCooperativeMatrix2FeaturesNV {
    pub s_type: vk::StructureType,
    pub p_next: *mut c_void,
    pub cooperative_matrix_workgroup_scope: vk::Bool32,
    pub cooperative_matrix_flexible_dimensions: vk::Bool32,
    pub cooperative_matrix_reductions: vk::Bool32,
    pub cooperative_matrix_conversions: vk::Bool32,
    pub cooperative_matrix_per_element_operations: vk::Bool32,
    pub cooperative_matrix_tensor_addressing: vk::Bool32,
    pub cooperative_matrix_block_loads: vk::Bool32,
}

impl Default for PhysicalDeviceCooperativeMatrix2FeaturesNV {
    fn default() -> Self {
        Self {
            s_type: STRUCTURE_TYPE_PHYSICAL_DEVICE_COOPERATIVE_MATRIX_2_FEATURES_NV,
            p_next: ptr::null_mut(),
            cooperative_matrix_workgroup_scope: vk::FALSE,
            cooperative_matrix_flexible_dimensions: vk::FALSE,
            cooperative_matrix_reductions: vk::FALSE,
            cooperative_matrix_conversions: vk::FALSE,
            cooperative_matrix_per_element_operations: vk::FALSE,
            cooperative_matrix_tensor_addressing: vk::FALSE,
            cooperative_matrix_block_loads: vk::FALSE,
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct PhysicalDeviceCooperativeMatrix2PropertiesNV {
    pub s_type: vk::StructureType,
    pub p_next: *mut c_void,
    pub cooperative_matrix_workgroup_scope_max_workgroup_size: u32,
    pub cooperative_matrix_flexible_dimensions_max_dimension: u32,
    pub cooperative_matrix_workgroup_scope_reserved_shared_memory: u32,
}

impl Default for PhysicalDeviceCooperativeMatrix2PropertiesNV {
    fn default() -> Self {
        Self {
            s_type: STRUCTURE_TYPE_PHYSICAL_DEVICE_COOPERATIVE_MATRIX_2_PROPERTIES_NV,
            p_next: ptr::null_mut(),
            cooperative_matrix_workgroup_scope_max_workgroup_size: 0,
            cooperative_matrix_flexible_dimensions_max_dimension: 0,
            cooperative_matrix_workgroup_scope_reserved_shared_memory: 0,
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct CooperativeMatrixFlexibleDimensionsPropertiesNV {
    pub s_type: vk::StructureType,
    pub p_next: *mut c_void,
    pub m_granularity: u32,
    pub n_granularity: u32,
    pub k_granularity: u32,
    pub a_type: i32,
    pub b_type: i32,
    pub c_type: i32,
    pub result_type: i32,
    pub saturating_accumulation: vk::Bool32,
    pub scope: i32,
    pub workgroup_invocations: u32,
}

impl Default for CooperativeMatrixFlexibleDimensionsPropertiesNV {
    fn default() -> Self {
        Self {
            s_type: STRUCTURE_TYPE_COOPERATIVE_MATRIX_FLEXIBLE_DIMENSIONS_PROPERTIES_NV,
            p_next: ptr::null_mut(),
            m_granularity: 0,
            n_granularity: 0,
            k_granularity: 0,
            a_type: 0,
            b_type: 0,
            c_type: 0,
            result_type: 0,
            saturating_accumulation: vk::FALSE,
            scope: 0,
            workgroup_invocations: 0,
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct PhysicalDeviceCooperativeVectorFeaturesNV {
    pub s_type: vk::StructureType,
    pub p_next: *mut c_void,
    pub cooperative_vector: vk::Bool32,
    pub cooperative_vector_training: vk::Bool32,
}

impl Default for PhysicalDeviceCooperativeVectorFeaturesNV {
    fn default() -> Self {
        Self {
            s_type: STRUCTURE_TYPE_PHYSICAL_DEVICE_COOPERATIVE_VECTOR_FEATURES_NV,
            p_next: ptr::null_mut(),
            cooperative_vector: vk::FALSE,
            cooperative_vector_training: vk::FALSE,
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct PhysicalDeviceCooperativeVectorPropertiesNV {
    pub s_type: vk::StructureType,
    pub p_next: *mut c_void,
    pub cooperative_vector_supported_stages: vk::ShaderStageFlags,
    pub cooperative_vector_training_float16_accumulation: vk::Bool32,
    pub cooperative_vector_training_float32_accumulation: vk::Bool32,
    pub max_cooperative_vector_components: u32,
}

impl Default for PhysicalDeviceCooperativeVectorPropertiesNV {
    fn default() -> Self {
        Self {
            s_type: STRUCTURE_TYPE_PHYSICAL_DEVICE_COOPERATIVE_VECTOR_PROPERTIES_NV,
            p_next: ptr::null_mut(),
            cooperative_vector_supported_stages: vk::ShaderStageFlags::empty(),
            cooperative_vector_training_float16_accumulation: vk::FALSE,
            cooperative_vector_training_float32_accumulation: vk::FALSE,
            max_cooperative_vector_components: 0,
        }
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct CooperativeVectorPropertiesNV {
    pub s_type: vk::StructureType,
    pub p_next: *mut c_void,
    pub input_type: i32,
    pub input_interpretation: i32,
    pub matrix_interpretation: i32,
    pub bias_interpretation: i32,
    pub result_type: i32,
    pub transpose: vk::Bool32,
}

impl Default for CooperativeVectorPropertiesNV {
    fn default() -> Self {
        Self {
            s_type: STRUCTURE_TYPE_COOPERATIVE_VECTOR_PROPERTIES_NV,
            p_next: ptr::null_mut(),
            input_type: 0,
            input_interpretation: 0,
            matrix_interpretation: 0,
            bias_interpretation: 0,
            result_type: 0,
            transpose: vk::FALSE,
        }
    }
}

pub type PFN_vkGetPhysicalDeviceCooperativeMatrixFlexibleDimensionsPropertiesNV =
    unsafe extern "system" fn(
        physical_device: vk::PhysicalDevice,
        p_property_count: *mut u32,
        p_properties: *mut CooperativeMatrixFlexibleDimensionsPropertiesNV,
    ) -> vk::Result;

pub type PFN_vkGetPhysicalDeviceCooperativeVectorPropertiesNV = unsafe extern "system" fn(
    physical_device: vk::PhysicalDevice,
    p_property_count: *mut u32,
    p_properties: *mut CooperativeVectorPropertiesNV,
) -> vk::Result;
