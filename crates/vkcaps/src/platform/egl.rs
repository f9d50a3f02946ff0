// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Au-Zone Technologies

//! EGL device report.
//!
//! EGL devices are listed once at initialization. For each Vulkan device the
//! EGL device with the same `EGL_EXT_device_persistent_id` UUID is described,
//! and a 32x32 pbuffer OpenGL context is created on it to describe the GL
//! implementation. All EGL objects are released before `report_device`
//! returns.

use std::ffi::{c_char, CStr};
use std::ptr;

use log::{debug, warn};
use vkcaps_sys::egl::*;
use vkcaps_sys::gl::GlFunctions;

use super::gl::GlContextInfo;
use super::{find_matching_uuid, ExtensionSet, PlatformBackend, PlatformReport};
use crate::capability::DeviceIdentity;
use crate::Error;

const NAME: &str = "EGL";
const PBUFFER_SIZE: EGLint = 32;

struct EglDevice {
    handle: EGLDeviceEXT,
    extensions: ExtensionSet,
    extension_string: String,
    uuid: Option<[u8; 16]>,
}

/// Runtime-loaded EGL with the device enumeration extensions.
pub struct EglBackend {
    library: Option<EglLibrary>,
    devices: Vec<EglDevice>,
}

impl EglBackend {
    pub fn new() -> Self {
        Self {
            library: None,
            devices: Vec::new(),
        }
    }
}

impl Default for EglBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformBackend for EglBackend {
    fn name(&self) -> &'static str {
        NAME
    }

    fn initialize(&mut self) -> Result<PlatformReport, Error> {
        if !cfg!(target_os = "linux") {
            return Err(Error::BackendUnavailable(NAME.to_string()));
        }

        let library = EglLibrary::load().map_err(|err| {
            debug!("Failed to load EGL: {}", err);
            Error::BackendUnavailable(NAME.to_string())
        })?;
        if library.eglQueryDevicesEXT.is_none()
            || library.eglQueryDeviceStringEXT.is_none()
            || library.eglGetPlatformDisplayEXT.is_none()
            || library.eglQueryDeviceBinaryEXT.is_none()
        {
            debug!("EGL device enumeration extensions are missing");
            return Err(Error::BackendUnavailable(NAME.to_string()));
        }

        let devices = unsafe { query_devices(&library) }?;
        debug!("Found {} EGL device(s)", devices.len());

        let mut report = PlatformReport::new("EGL");
        let client = unsafe { egl_string((library.eglQueryString)(EGL_NO_DISPLAY, EGL_EXTENSIONS)) };
        if let Some(client) = client {
            report.push("EGL client extensions", client);
        }
        report.push("EGL devices", devices.len());

        self.devices = devices;
        self.library = Some(library);
        Ok(report)
    }

    fn report_device(&mut self, identity: &DeviceIdentity) -> Result<PlatformReport, Error> {
        let library = self
            .library
            .as_ref()
            .ok_or_else(|| Error::BackendUnavailable(NAME.to_string()))?;
        let index = find_matching_uuid(self.devices.iter().map(|d| d.uuid), &identity.device_uuid)
            .ok_or(Error::NoMatchingDevice)?;
        let device = &self.devices[index];
        debug!("{} matches EGL device #{}", identity.name, index);

        let mut report = PlatformReport::new("EGL device");
        report.push("Device EGL extensions", &device.extension_string);
        unsafe { describe_device(library, device, &mut report) };

        if let Err(message) = unsafe { describe_context(library, device.handle, &mut report) } {
            warn!("{}: {}", identity.name, message);
            report.warn(message);
        }
        Ok(report)
    }
}

/// List all EGL devices with their extensions and UUIDs.
///
/// # Safety
///
/// The EXT entry points of `library` must be valid.
unsafe fn query_devices(library: &EglLibrary) -> Result<Vec<EglDevice>, Error> {
    let query = library
        .eglQueryDevicesEXT
        .ok_or_else(|| Error::SymbolNotFound("eglQueryDevicesEXT".to_string()))?;
    let query_string = library
        .eglQueryDeviceStringEXT
        .ok_or_else(|| Error::SymbolNotFound("eglQueryDeviceStringEXT".to_string()))?;

    let mut count: EGLint = 0;
    if unsafe { query(0, ptr::null_mut(), &mut count) } == EGL_FALSE {
        return Err(Error::SymbolNotFound("eglQueryDevicesEXT".to_string()));
    }
    let mut handles: Vec<EGLDeviceEXT> = vec![ptr::null_mut(); count.max(0) as usize];
    if unsafe { query(count, handles.as_mut_ptr(), &mut count) } == EGL_FALSE {
        return Err(Error::SymbolNotFound("eglQueryDevicesEXT".to_string()));
    }
    handles.truncate(count.max(0) as usize);

    let mut devices = Vec::with_capacity(handles.len());
    for handle in handles {
        let extension_string =
            unsafe { egl_string(query_string(handle, EGL_EXTENSIONS)) }.ok_or(Error::NullPointer)?;
        let extensions = ExtensionSet::parse(&extension_string);
        let uuid = if extensions.contains("EGL_EXT_device_persistent_id") {
            unsafe { device_uuid(library, handle) }
        } else {
            None
        };
        devices.push(EglDevice {
            handle,
            extensions,
            extension_string,
            uuid,
        });
    }
    Ok(devices)
}

unsafe fn device_uuid(library: &EglLibrary, handle: EGLDeviceEXT) -> Option<[u8; 16]> {
    let query = library.eglQueryDeviceBinaryEXT?;
    let mut uuid = [0u8; EGL_UUID_SIZE];
    let mut size: EGLint = 0;
    let ok = unsafe {
        query(
            handle,
            EGL_DEVICE_UUID_EXT,
            EGL_UUID_SIZE as EGLint,
            uuid.as_mut_ptr().cast(),
            &mut size,
        )
    };
    if ok == EGL_FALSE {
        warn!(
            "eglQueryDeviceBinaryEXT failed (error code: {:#06x})",
            unsafe { (library.eglGetError)() }
        );
        return None;
    }
    (size as usize == EGL_UUID_SIZE).then_some(uuid)
}

unsafe fn describe_device(library: &EglLibrary, device: &EglDevice, report: &mut PlatformReport) {
    let Some(query) = library.eglQueryDeviceStringEXT else {
        return;
    };
    let mut field = |extension: &str, name: EGLint, key: &str| {
        if device.extensions.contains(extension) {
            if let Some(value) = unsafe { egl_string(query(device.handle, name)) } {
                report.push(key, value);
            }
        }
    };
    field("EGL_EXT_device_query_name", EGL_VENDOR, "Device EGL vendor");
    field("EGL_EXT_device_query_name", EGL_RENDERER_EXT, "Device EGL renderer");
    field("EGL_EXT_device_persistent_id", EGL_DRIVER_NAME_EXT, "Device EGL driver");
    field("EGL_EXT_device_drm", EGL_DRM_DEVICE_FILE_EXT, "Device EGL DRM file");
    field(
        "EGL_EXT_device_drm_render_node",
        EGL_DRM_RENDER_NODE_FILE_EXT,
        "Device EGL DRM render node file",
    );
}

/// Open a display on the device, make a pbuffer context current and
/// describe it.
unsafe fn describe_context(
    library: &EglLibrary,
    device: EGLDeviceEXT,
    report: &mut PlatformReport,
) -> Result<(), String> {
    let get_display = library
        .eglGetPlatformDisplayEXT
        .ok_or("eglGetPlatformDisplayEXT is not available")?;
    let handle = unsafe { get_display(EGL_PLATFORM_DEVICE_EXT, device, ptr::null()) };
    if handle.is_null() {
        return Err(egl_failure(library, "eglGetPlatformDisplayEXT"));
    }
    let display = Display { library, handle };

    if let Some(extensions) = unsafe { egl_string((library.eglQueryString)(handle, EGL_EXTENSIONS)) } {
        report.push("EGL display extensions", extensions);
    }

    let (mut major, mut minor): (EGLint, EGLint) = (0, 0);
    if unsafe { (library.eglInitialize)(handle, &mut major, &mut minor) } == EGL_FALSE {
        return Err(egl_failure(library, "eglInitialize"));
    }
    report.push("EGL display version", format!("{}.{}", major, minor));
    let vendor = unsafe { egl_string((library.eglQueryString)(handle, EGL_VENDOR)) };
    report.push("EGL display vendor", vendor.unwrap_or_default());

    #[rustfmt::skip]
    let config_attributes = [
        EGL_SURFACE_TYPE, EGL_PBUFFER_BIT,
        EGL_BLUE_SIZE, 8,
        EGL_GREEN_SIZE, 8,
        EGL_RED_SIZE, 8,
        EGL_DEPTH_SIZE, 8,
        EGL_RENDERABLE_TYPE, EGL_OPENGL_BIT,
        EGL_NONE,
    ];
    let mut config: EGLConfig = ptr::null_mut();
    let mut num_configs: EGLint = 0;
    let chosen = unsafe {
        (library.eglChooseConfig)(handle, config_attributes.as_ptr(), &mut config, 1, &mut num_configs)
    };
    if chosen == EGL_FALSE {
        return Err(egl_failure(library, "eglChooseConfig"));
    }
    if num_configs <= 0 {
        return Err("eglChooseConfig returned 0 configs".to_string());
    }

    let pbuffer_attributes = [EGL_WIDTH, PBUFFER_SIZE, EGL_HEIGHT, PBUFFER_SIZE, EGL_NONE];
    let surface =
        unsafe { (library.eglCreatePbufferSurface)(handle, config, pbuffer_attributes.as_ptr()) };
    if surface.is_null() {
        return Err(egl_failure(library, "eglCreatePbufferSurface"));
    }
    let surface = Surface {
        display: &display,
        handle: surface,
    };

    if unsafe { (library.eglBindAPI)(EGL_OPENGL_API) } == EGL_FALSE {
        return Err(egl_failure(library, "eglBindAPI"));
    }
    let context = unsafe { (library.eglCreateContext)(handle, config, EGL_NO_CONTEXT, ptr::null()) };
    if context.is_null() {
        return Err(egl_failure(library, "eglCreateContext"));
    }
    let context = Context {
        display: &display,
        handle: context,
    };

    if unsafe { (library.eglMakeCurrent)(handle, surface.handle, surface.handle, context.handle) }
        == EGL_FALSE
    {
        return Err(egl_failure(library, "eglMakeCurrent"));
    }
    let _current = Current { display: &display };

    let gl = unsafe { GlFunctions::load(|name| library.get_proc_address(name)) }
        .ok_or("failed to resolve the OpenGL entry points")?;
    let info = unsafe { GlContextInfo::query(&gl) }.map_err(|err| err.to_string())?;
    report.extend(info.entries());
    Ok(())
}

fn egl_failure(library: &EglLibrary, call: &str) -> String {
    let code = unsafe { (library.eglGetError)() };
    format!("{} failed (error code: {:#06x})", call, code)
}

/// Copy an EGL owned string; `None` for null.
///
/// # Safety
///
/// `ptr` must be null or point to a NUL terminated string.
unsafe fn egl_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    Some(unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned())
}

struct Display<'a> {
    library: &'a EglLibrary,
    handle: EGLDisplay,
}

impl Drop for Display<'_> {
    fn drop(&mut self) {
        if unsafe { (self.library.eglTerminate)(self.handle) } == EGL_FALSE {
            warn!("eglTerminate failed");
        }
    }
}

struct Surface<'a> {
    display: &'a Display<'a>,
    handle: EGLSurface,
}

impl Drop for Surface<'_> {
    fn drop(&mut self) {
        let library = self.display.library;
        if unsafe { (library.eglDestroySurface)(self.display.handle, self.handle) } == EGL_FALSE {
            warn!("eglDestroySurface failed");
        }
    }
}

struct Context<'a> {
    display: &'a Display<'a>,
    handle: EGLContext,
}

impl Drop for Context<'_> {
    fn drop(&mut self) {
        let library = self.display.library;
        if unsafe { (library.eglDestroyContext)(self.display.handle, self.handle) } == EGL_FALSE {
            warn!("eglDestroyContext failed");
        }
    }
}

/// Releases the current context.
struct Current<'a> {
    display: &'a Display<'a>,
}

impl Drop for Current<'_> {
    fn drop(&mut self) {
        let library = self.display.library;
        unsafe {
            (library.eglMakeCurrent)(self.display.handle, EGL_NO_SURFACE, EGL_NO_SURFACE, EGL_NO_CONTEXT)
        };
    }
}
