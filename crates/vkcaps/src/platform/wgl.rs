// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Au-Zone Technologies

//! WGL report for Windows.
//!
//! The default OpenGL context of a hidden window is described once at
//! initialization. `GL_EXT_memory_object` exposes the device and driver
//! UUIDs of that context, which decide the Vulkan device it is reported for.

use log::debug;

use super::gl::GlContextInfo;
use super::{PlatformBackend, PlatformReport};
use crate::capability::DeviceIdentity;
use crate::Error;

const NAME: &str = "WGL";

/// The default WGL context and its WGL extension string.
#[derive(Clone, Debug, Default)]
struct DefaultContext {
    gl: GlContextInfo,
    extensions: Option<String>,
}

pub struct WglBackend {
    context: Option<DefaultContext>,
}

impl WglBackend {
    pub fn new() -> Self {
        Self { context: None }
    }
}

impl Default for WglBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformBackend for WglBackend {
    fn name(&self) -> &'static str {
        NAME
    }

    fn initialize(&mut self) -> Result<PlatformReport, Error> {
        let context = query_default_context()?;
        debug!(
            "Default WGL context: {} ({} device UUID(s))",
            context.gl.renderer,
            context.gl.device_uuids.len()
        );

        let mut report = PlatformReport::new("Default WGL OpenGL context information");
        report.extend(context.gl.entries());
        self.context = Some(context);
        Ok(report)
    }

    fn report_device(&mut self, identity: &DeviceIdentity) -> Result<PlatformReport, Error> {
        let context = self
            .context
            .as_ref()
            .ok_or_else(|| Error::BackendUnavailable(NAME.to_string()))?;
        if !context
            .gl
            .matches(&identity.device_uuid, &identity.driver_uuid)
        {
            return Err(Error::NoMatchingDevice);
        }

        let mut report = PlatformReport::new("WGL device");
        if let Some(extensions) = &context.extensions {
            report.push("Device WGL extensions", extensions);
        }
        report.extend(context.gl.entries());
        Ok(report)
    }
}

#[cfg(not(windows))]
fn query_default_context() -> Result<DefaultContext, Error> {
    Err(Error::BackendUnavailable(NAME.to_string()))
}

#[cfg(windows)]
fn query_default_context() -> Result<DefaultContext, Error> {
    use std::ffi::CStr;
    use std::ptr;

    use vkcaps_sys::gl::GlFunctions;
    use vkcaps_sys::wgl::*;

    let library = WglLibrary::load().map_err(|err| {
        debug!("Failed to load WGL: {}", err);
        Error::BackendUnavailable(NAME.to_string())
    })?;

    let hwnd = unsafe {
        (library.CreateWindowExA)(
            0,
            c"STATIC".as_ptr(),
            c"vkcaps".as_ptr(),
            WS_OVERLAPPEDWINDOW,
            CW_USEDEFAULT,
            CW_USEDEFAULT,
            CW_USEDEFAULT,
            CW_USEDEFAULT,
            ptr::null_mut(),
            ptr::null_mut(),
            ptr::null_mut(),
            ptr::null_mut(),
        )
    };
    if hwnd.is_null() {
        return Err(Error::NullPointer);
    }
    let window = Window {
        library: &library,
        hwnd,
    };

    let hdc = unsafe { (library.GetDC)(window.hwnd) };
    if hdc.is_null() {
        return Err(Error::NullPointer);
    }
    let dc = DeviceContext {
        window: &window,
        hdc,
    };

    let pfd = PIXELFORMATDESCRIPTOR {
        nSize: std::mem::size_of::<PIXELFORMATDESCRIPTOR>() as u16,
        nVersion: 1,
        dwFlags: PFD_DRAW_TO_WINDOW | PFD_SUPPORT_OPENGL | PFD_DOUBLEBUFFER,
        iPixelType: PFD_TYPE_RGBA,
        cColorBits: 32,
        cDepthBits: 24,
        iLayerType: PFD_MAIN_PLANE,
        ..Default::default()
    };
    let format = unsafe { (library.ChoosePixelFormat)(dc.hdc, &pfd) };
    if format == 0 || unsafe { (library.SetPixelFormat)(dc.hdc, format, &pfd) } == 0 {
        return Err(Error::BackendUnavailable(NAME.to_string()));
    }

    let hglrc = unsafe { (library.wglCreateContext)(dc.hdc) };
    if hglrc.is_null() {
        return Err(Error::BackendUnavailable(NAME.to_string()));
    }
    let context = RenderingContext { dc: &dc, hglrc };
    if unsafe { (library.wglMakeCurrent)(dc.hdc, context.hglrc) } == 0 {
        return Err(Error::BackendUnavailable(NAME.to_string()));
    }

    let gl = unsafe { GlFunctions::load(|name| library.get_proc_address(name)) }
        .ok_or_else(|| Error::SymbolNotFound("glGetString".to_string()))?;
    let info = unsafe { GlContextInfo::query(&gl) }?;

    let get_extensions = library.get_proc_address(c"wglGetExtensionsStringARB");
    let extensions = if get_extensions.is_null() {
        None
    } else {
        let get_extensions: PFN_wglGetExtensionsStringARB =
            unsafe { std::mem::transmute(get_extensions) };
        let text = unsafe { get_extensions(dc.hdc) };
        (!text.is_null()).then(|| unsafe { CStr::from_ptr(text) }.to_string_lossy().into_owned())
    };

    drop(context);
    Ok(DefaultContext {
        gl: info,
        extensions,
    })
}

#[cfg(windows)]
struct Window<'a> {
    library: &'a vkcaps_sys::wgl::WglLibrary,
    hwnd: vkcaps_sys::wgl::HWND,
}

#[cfg(windows)]
impl Drop for Window<'_> {
    fn drop(&mut self) {
        unsafe { (self.library.DestroyWindow)(self.hwnd) };
    }
}

#[cfg(windows)]
struct DeviceContext<'a> {
    window: &'a Window<'a>,
    hdc: vkcaps_sys::wgl::HDC,
}

#[cfg(windows)]
impl Drop for DeviceContext<'_> {
    fn drop(&mut self) {
        unsafe { (self.window.library.ReleaseDC)(self.window.hwnd, self.hdc) };
    }
}

#[cfg(windows)]
struct RenderingContext<'a> {
    dc: &'a DeviceContext<'a>,
    hglrc: vkcaps_sys::wgl::HGLRC,
}

#[cfg(windows)]
impl Drop for RenderingContext<'_> {
    fn drop(&mut self) {
        let library = self.dc.window.library;
        unsafe {
            (library.wglMakeCurrent)(std::ptr::null_mut(), std::ptr::null_mut());
            (library.wglDeleteContext)(self.hglrc);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(device_uuid: [u8; 16], driver_uuid: [u8; 16]) -> DeviceIdentity {
        DeviceIdentity {
            index: 0,
            name: "test".to_string(),
            vendor_id: 0x10DE,
            device_id: 0,
            device_type: 2,
            api_version: 0,
            driver_version: 0,
            driver: None,
            device_uuid,
            driver_uuid,
            device_luid: None,
        }
    }

    #[test]
    fn test_report_device_matching() {
        let mut backend = WglBackend {
            context: Some(DefaultContext {
                gl: GlContextInfo {
                    version: "4.6".to_string(),
                    device_uuids: vec![[4; 16]],
                    driver_uuid: Some([5; 16]),
                    ..Default::default()
                },
                extensions: Some("WGL_ARB_extensions_string WGL_ARB_pixel_format".to_string()),
            }),
        };

        let report = backend.report_device(&identity([4; 16], [5; 16])).unwrap();
        assert_eq!(report.title, "WGL device");
        assert_eq!(
            report.get("Device WGL extensions"),
            Some("WGL_ARB_extensions_string WGL_ARB_pixel_format")
        );
        assert_eq!(report.get("OpenGL Version"), Some("4.6"));

        assert!(matches!(
            backend.report_device(&identity([4; 16], [6; 16])),
            Err(Error::NoMatchingDevice)
        ));
    }

    #[test]
    #[cfg(not(windows))]
    fn test_unavailable_off_windows() {
        let mut backend = WglBackend::new();
        assert!(matches!(
            backend.initialize(),
            Err(Error::BackendUnavailable(name)) if name == "WGL"
        ));
    }
}
