// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Au-Zone Technologies

use ash::vk;
use log::{debug, info, warn};

use super::{fixed_string, requested_api_version, VulkanDevice};
use crate::driver::{DeviceCandidate, DeviceSource};
use crate::names::version_string;
use crate::probe::DeviceQuery;
use crate::Error;

/// A Vulkan instance and its physical devices.
///
/// The instance is destroyed when the context is dropped; devices opened from
/// it borrow the context and must be dropped first.
pub struct VulkanContext {
    pub(super) entry: ash::Entry,
    pub(super) instance: ash::Instance,
    pub(super) api_version: u32,
    physical_devices: Vec<vk::PhysicalDevice>,
}

impl VulkanContext {
    /// Load the Vulkan loader and create an instance.
    ///
    /// Fails with [`Error::LibraryNotLoaded`] when no loader is installed and
    /// with `ERROR_INCOMPATIBLE_DRIVER` when it only supports Vulkan 1.0.
    pub fn new() -> Result<Self, Error> {
        let entry = unsafe { ash::Entry::load() }?;

        let loader_version = unsafe { entry.try_enumerate_instance_version() }?
            .unwrap_or(vk::API_VERSION_1_0);
        let api_version = requested_api_version(loader_version).ok_or_else(|| {
            warn!(
                "Vulkan loader version {} is too old",
                version_string(loader_version)
            );
            Error::Vulkan(vk::Result::ERROR_INCOMPATIBLE_DRIVER)
        })?;

        let application = vk::ApplicationInfo::default()
            .application_name(c"vkcaps")
            .application_version(vk::make_api_version(0, 0, 3, 0))
            .engine_name(c"vkcaps")
            .api_version(api_version);
        let create_info = vk::InstanceCreateInfo::default().application_info(&application);
        let instance = unsafe { entry.create_instance(&create_info, None) }?;
        info!(
            "Created Vulkan {} instance (loader {})",
            version_string(api_version),
            version_string(loader_version)
        );

        let physical_devices = match unsafe { instance.enumerate_physical_devices() } {
            Ok(devices) => devices,
            Err(err) => {
                unsafe { instance.destroy_instance(None) };
                return Err(err.into());
            }
        };

        Ok(Self {
            entry,
            instance,
            api_version,
            physical_devices,
        })
    }

    /// Instance API version in use.
    pub fn api_version(&self) -> u32 {
        self.api_version
    }

    pub fn device_count(&self) -> usize {
        self.physical_devices.len()
    }

    fn extensions(&self, physical_device: vk::PhysicalDevice) -> Result<Vec<String>, Error> {
        let properties =
            unsafe { self.instance.enumerate_device_extension_properties(physical_device) }?;
        Ok(properties
            .iter()
            .map(|p| fixed_string(&p.extension_name))
            .collect())
    }
}

impl DeviceSource for VulkanContext {
    fn candidates(&self) -> Result<Vec<DeviceCandidate>, Error> {
        let mut candidates = Vec::with_capacity(self.physical_devices.len());
        for (index, physical_device) in self.physical_devices.iter().enumerate() {
            let properties = unsafe { self.instance.get_physical_device_properties(*physical_device) };
            let name = fixed_string(&properties.device_name);
            let extensions = self.extensions(*physical_device)?;
            debug!(
                "Physical device #{}: {} ({} extensions)",
                index,
                name,
                extensions.len()
            );
            candidates.push(DeviceCandidate {
                index,
                name,
                extensions,
            });
        }
        Ok(candidates)
    }

    fn open(&self, candidate: &DeviceCandidate) -> Result<Box<dyn DeviceQuery + '_>, Error> {
        let physical_device = *self
            .physical_devices
            .get(candidate.index)
            .ok_or(Error::Vulkan(vk::Result::ERROR_INITIALIZATION_FAILED))?;
        let device = VulkanDevice::open(self, physical_device, candidate)?;
        Ok(Box::new(device))
    }
}

impl Drop for VulkanContext {
    fn drop(&mut self) {
        debug!("Destroying Vulkan instance");
        unsafe { self.instance.destroy_instance(None) };
    }
}
