// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Au-Zone Technologies

//! Vulkan device source built on `ash`.
//!
//! [`VulkanContext`] loads the Vulkan loader at runtime, creates an instance
//! and lists the physical devices. [`VulkanDevice`] opens one of them and
//! answers the [`crate::probe::DeviceQuery`] queries. Extension structures
//! that `ash` does not know about are chained by hand from
//! [`vkcaps_sys::vk_ext`].

use std::ffi::{c_char, CStr};

use ash::vk;

mod device;
mod instance;

pub use device::VulkanDevice;
pub use instance::VulkanContext;

/// Lowest instance version the probes rely on.
pub const MIN_API_VERSION: u32 = vk::API_VERSION_1_1;

/// Highest instance version requested.
pub const MAX_API_VERSION: u32 = vk::API_VERSION_1_3;

/// Version to request for an instance given the loader version.
///
/// `None` when the loader is older than [`MIN_API_VERSION`].
pub fn requested_api_version(loader_version: u32) -> Option<u32> {
    if loader_version < MIN_API_VERSION {
        return None;
    }
    Some(loader_version.min(MAX_API_VERSION))
}

/// Whether `VkPhysicalDeviceDriverProperties` may be chained.
///
/// Core since Vulkan 1.2; older devices need `VK_KHR_driver_properties`.
pub(crate) fn driver_properties_supported(api_version: u32, has_extension: bool) -> bool {
    api_version >= vk::API_VERSION_1_2 || has_extension
}

/// Convert a fixed-size driver string.
///
/// Reads up to the first NUL; a missing terminator takes the whole array.
pub(crate) fn fixed_string(chars: &[c_char]) -> String {
    let bytes: Vec<u8> = chars
        .iter()
        .take_while(|c| **c != 0)
        .map(|c| *c as u8)
        .collect();
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Resolve an instance-level entry point.
///
/// # Safety
///
/// `T` must be the function pointer type matching `name`.
pub(crate) unsafe fn instance_proc<T: Copy>(
    entry: &ash::Entry,
    instance: vk::Instance,
    name: &CStr,
) -> Option<T> {
    let function = unsafe { entry.get_instance_proc_addr(instance, name.as_ptr()) }?;
    Some(unsafe { std::mem::transmute_copy::<unsafe extern "system" fn(), T>(&function) })
}
