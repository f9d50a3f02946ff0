// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Au-Zone Technologies

//! EGL types, constants and a runtime-loaded function table.

use std::ffi::{c_char, c_void, CStr, OsStr};

use libloading::Library;

pub type EGLint = i32;
pub type EGLBoolean = u32;
pub type EGLenum = u32;
pub type EGLDisplay = *mut c_void;
pub type EGLConfig = *mut c_void;
pub type EGLSurface = *mut c_void;
pub type EGLContext = *mut c_void;
pub type EGLDeviceEXT = *mut c_void;

pub const EGL_FALSE: EGLBoolean = 0;
pub const EGL_TRUE: EGLBoolean = 1;
pub const EGL_NO_DISPLAY: EGLDisplay = std::ptr::null_mut();
pub const EGL_NO_CONTEXT: EGLContext = std::ptr::null_mut();
pub const EGL_NO_SURFACE: EGLSurface = std::ptr::null_mut();

pub const EGL_SUCCESS: EGLint = 0x3000;
pub const EGL_BLUE_SIZE: EGLint = 0x3022;
pub const EGL_GREEN_SIZE: EGLint = 0x3023;
pub const EGL_RED_SIZE: EGLint = 0x3024;
pub const EGL_DEPTH_SIZE: EGLint = 0x3025;
pub const EGL_SURFACE_TYPE: EGLint = 0x3033;
pub const EGL_NONE: EGLint = 0x3038;
pub const EGL_RENDERABLE_TYPE: EGLint = 0x3040;
pub const EGL_VENDOR: EGLint = 0x3053;
pub const EGL_VERSION: EGLint = 0x3054;
pub const EGL_EXTENSIONS: EGLint = 0x3055;
pub const EGL_HEIGHT: EGLint = 0x3056;
pub const EGL_WIDTH: EGLint = 0x3057;
pub const EGL_PBUFFER_BIT: EGLint = 0x0001;
pub const EGL_OPENGL_BIT: EGLint = 0x0008;
pub const EGL_OPENGL_API: EGLenum = 0x30A2;

// EGL_EXT_platform_device
pub const EGL_PLATFORM_DEVICE_EXT: EGLenum = 0x313F;
// EGL_EXT_device_drm
pub const EGL_DRM_DEVICE_FILE_EXT: EGLint = 0x3233;
// EGL_EXT_device_persistent_id
pub const EGL_DEVICE_UUID_EXT: EGLint = 0x335C;
pub const EGL_DRIVER_UUID_EXT: EGLint = 0x335D;
pub const EGL_DRIVER_NAME_EXT: EGLint = 0x335E;
// EGL_EXT_device_query_name
pub const EGL_RENDERER_EXT: EGLint = 0x335F;
// EGL_EXT_device_drm_render_node
pub const EGL_DRM_RENDER_NODE_FILE_EXT: EGLint = 0x3377;

pub const EGL_UUID_SIZE: usize = 16;

pub type PFN_eglGetProcAddress = unsafe extern "system" fn(procname: *const c_char) -> *mut c_void;
pub type PFN_eglGetError = unsafe extern "system" fn() -> EGLint;
pub type PFN_eglQueryString =
    unsafe extern "system" fn(dpy: EGLDisplay, name: EGLint) -> *const c_char;
pub type PFN_eglInitialize =
    unsafe extern "system" fn(dpy: EGLDisplay, major: *mut EGLint, minor: *mut EGLint) -> EGLBoolean;
pub type PFN_eglChooseConfig = unsafe extern "system" fn(
    dpy: EGLDisplay,
    attrib_list: *const EGLint,
    configs: *mut EGLConfig,
    config_size: EGLint,
    num_config: *mut EGLint,
) -> EGLBoolean;
pub type PFN_eglCreatePbufferSurface = unsafe extern "system" fn(
    dpy: EGLDisplay,
    config: EGLConfig,
    attrib_list: *const EGLint,
) -> EGLSurface;
pub type PFN_eglBindAPI = unsafe extern "system" fn(api: EGLenum) -> EGLBoolean;
pub type PFN_eglCreateContext = unsafe extern "system" fn(
    dpy: EGLDisplay,
    config: EGLConfig,
    share_context: EGLContext,
    attrib_list: *const EGLint,
) -> EGLContext;
pub type PFN_eglDestroySurface =
    unsafe extern "system" fn(dpy: EGLDisplay, surface: EGLSurface) -> EGLBoolean;
pub type PFN_eglDestroyContext =
    unsafe extern "system" fn(dpy: EGLDisplay, ctx: EGLContext) -> EGLBoolean;
pub type PFN_eglTerminate = unsafe extern "system" fn(dpy: EGLDisplay) -> EGLBoolean;
pub type PFN_eglMakeCurrent = unsafe extern "system" fn(
    dpy: EGLDisplay,
    draw: EGLSurface,
    read: EGLSurface,
    ctx: EGLContext,
) -> EGLBoolean;

pub type PFN_eglQueryDevicesEXT = unsafe extern "system" fn(
    max_devices: EGLint,
    devices: *mut EGLDeviceEXT,
    num_devices: *mut EGLint,
) -> EGLBoolean;
pub type PFN_eglQueryDeviceStringEXT =
    unsafe extern "system" fn(device: EGLDeviceEXT, name: EGLint) -> *const c_char;
pub type PFN_eglGetPlatformDisplayEXT = unsafe extern "system" fn(
    platform: EGLenum,
    native_display: *mut c_void,
    attrib_list: *const EGLint,
) -> EGLDisplay;
pub type PFN_eglQueryDeviceBinaryEXT = unsafe extern "system" fn(
    device: EGLDeviceEXT,
    name: EGLint,
    max_size: EGLint,
    value: *mut c_void,
    size: *mut EGLint,
) -> EGLBoolean;

#[cfg(target_os = "linux")]
const DEFAULT_LIBRARY_NAMES: &[&str] = &["libEGL.so", "libEGL.so.1"];
#[cfg(windows)]
const DEFAULT_LIBRARY_NAMES: &[&str] = &["libEGL.dll", "EGL.dll"];
#[cfg(not(any(target_os = "linux", windows)))]
const DEFAULT_LIBRARY_NAMES: &[&str] = &["libEGL.dylib"];

/// Function table of a loaded EGL library.
///
/// The core entry points are mandatory; loading fails if any of them is
/// missing. `EXT` entry points are resolved through `eglGetProcAddress` and are
/// `None` when the implementation does not provide them. Function pointers stay
/// valid for as long as this value is alive.
pub struct EglLibrary {
    pub eglGetProcAddress: PFN_eglGetProcAddress,
    pub eglGetError: PFN_eglGetError,
    pub eglQueryString: PFN_eglQueryString,
    pub eglInitialize: PFN_eglInitialize,
    pub eglChooseConfig: PFN_eglChooseConfig,
    pub eglCreatePbufferSurface: PFN_eglCreatePbufferSurface,
    pub eglBindAPI: PFN_eglBindAPI,
    pub eglCreateContext: PFN_eglCreateContext,
    pub eglDestroySurface: PFN_eglDestroySurface,
    pub eglDestroyContext: PFN_eglDestroyContext,
    pub eglTerminate: PFN_eglTerminate,
    pub eglMakeCurrent: PFN_eglMakeCurrent,

    pub eglQueryDevicesEXT: Option<PFN_eglQueryDevicesEXT>,
    pub eglQueryDeviceStringEXT: Option<PFN_eglQueryDeviceStringEXT>,
    pub eglGetPlatformDisplayEXT: Option<PFN_eglGetPlatformDisplayEXT>,
    pub eglQueryDeviceBinaryEXT: Option<PFN_eglQueryDeviceBinaryEXT>,

    _library: Library,
}

impl EglLibrary {
    /// Load the EGL library from the given path or soname.
    ///
    /// # Safety
    ///
    /// Loading a shared library runs its initialization routines.
    pub unsafe fn new<P: AsRef<OsStr>>(path: P) -> Result<Self, libloading::Error> {
        let library = Library::new(path)?;

        let eglGetProcAddress = *library.get::<PFN_eglGetProcAddress>(b"eglGetProcAddress\0")?;
        let eglGetError = *library.get::<PFN_eglGetError>(b"eglGetError\0")?;
        let eglQueryString = *library.get::<PFN_eglQueryString>(b"eglQueryString\0")?;
        let eglInitialize = *library.get::<PFN_eglInitialize>(b"eglInitialize\0")?;
        let eglChooseConfig = *library.get::<PFN_eglChooseConfig>(b"eglChooseConfig\0")?;
        let eglCreatePbufferSurface =
            *library.get::<PFN_eglCreatePbufferSurface>(b"eglCreatePbufferSurface\0")?;
        let eglBindAPI = *library.get::<PFN_eglBindAPI>(b"eglBindAPI\0")?;
        let eglCreateContext = *library.get::<PFN_eglCreateContext>(b"eglCreateContext\0")?;
        let eglDestroySurface = *library.get::<PFN_eglDestroySurface>(b"eglDestroySurface\0")?;
        let eglDestroyContext = *library.get::<PFN_eglDestroyContext>(b"eglDestroyContext\0")?;
        let eglTerminate = *library.get::<PFN_eglTerminate>(b"eglTerminate\0")?;
        let eglMakeCurrent = *library.get::<PFN_eglMakeCurrent>(b"eglMakeCurrent\0")?;

        Ok(Self {
            eglGetProcAddress,
            eglGetError,
            eglQueryString,
            eglInitialize,
            eglChooseConfig,
            eglCreatePbufferSurface,
            eglBindAPI,
            eglCreateContext,
            eglDestroySurface,
            eglDestroyContext,
            eglTerminate,
            eglMakeCurrent,
            eglQueryDevicesEXT: proc_address(eglGetProcAddress, c"eglQueryDevicesEXT"),
            eglQueryDeviceStringEXT: proc_address(eglGetProcAddress, c"eglQueryDeviceStringEXT"),
            eglGetPlatformDisplayEXT: proc_address(eglGetProcAddress, c"eglGetPlatformDisplayEXT"),
            eglQueryDeviceBinaryEXT: proc_address(eglGetProcAddress, c"eglQueryDeviceBinaryEXT"),
            _library: library,
        })
    }

    /// Load the system EGL library.
    ///
    /// The environment variable `VKCAPS_EGL_LIBRARY` can be used to specify a
    /// custom path to the library. If not set, the platform default sonames are
    /// tried in order.
    pub fn load() -> Result<Self, libloading::Error> {
        if let Ok(path) = std::env::var("VKCAPS_EGL_LIBRARY") {
            return unsafe { Self::new(path) };
        }

        let mut last_error = None;
        for name in DEFAULT_LIBRARY_NAMES {
            match unsafe { Self::new(name) } {
                Ok(lib) => return Ok(lib),
                Err(err) => last_error = Some(err),
            }
        }
        Err(last_error.unwrap_or(libloading::Error::DlOpenUnknown))
    }

    /// Resolve an arbitrary client API entry point (e.g. `glGetString`).
    pub fn get_proc_address(&self, name: &CStr) -> *const c_void {
        unsafe { (self.eglGetProcAddress)(name.as_ptr()) as *const c_void }
    }
}

/// Resolve an optional entry point through `eglGetProcAddress`.
///
/// # Safety
///
/// `T` must be the function pointer type matching `name`.
unsafe fn proc_address<T: Copy>(get: PFN_eglGetProcAddress, name: &CStr) -> Option<T> {
    let ptr = get(name.as_ptr());
    if ptr.is_null() {
        None
    } else {
        Some(std::mem::transmute_copy::<*mut c_void, T>(&ptr))
    }
}
