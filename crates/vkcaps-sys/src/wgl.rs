// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Au-Zone Technologies

//! WGL, GDI and window entry points used to create a throwaway OpenGL
//! context on Windows.

use std::ffi::{c_char, c_void, CStr};

use libloading::Library;

pub type BOOL = i32;
pub type HWND = *mut c_void;
pub type HDC = *mut c_void;
pub type HGLRC = *mut c_void;
pub type HINSTANCE = *mut c_void;
pub type HMENU = *mut c_void;
pub type PROC = *mut c_void;

pub const WS_OVERLAPPEDWINDOW: u32 = 0x00CF_0000;
pub const CW_USEDEFAULT: i32 = 0x8000_0000_u32 as i32;

pub const PFD_DOUBLEBUFFER: u32 = 0x0000_0001;
pub const PFD_DRAW_TO_WINDOW: u32 = 0x0000_0004;
pub const PFD_SUPPORT_OPENGL: u32 = 0x0000_0020;
pub const PFD_TYPE_RGBA: u8 = 0;
pub const PFD_MAIN_PLANE: u8 = 0;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct PIXELFORMATDESCRIPTOR {
    pub nSize: u16,
    pub nVersion: u16,
    pub dwFlags: u32,
    pub iPixelType: u8,
    pub cColorBits: u8,
    pub cRedBits: u8,
    pub cRedShift: u8,
    pub cGreenBits: u8,
    pub cGreenShift: u8,
    pub cBlueBits: u8,
    pub cBlueShift: u8,
    pub cAlphaBits: u8,
    pub cAlphaShift: u8,
    pub cAccumBits: u8,
    pub cAccumRedBits: u8,
    pub cAccumGreenBits: u8,
    pub cAccumBlueBits: u8,
    pub cAccumAlphaBits: u8,
    pub cDepthBits: u8,
    pub cStencilBits: u8,
    pub cAuxBuffers: u8,
    pub iLayerType: u8,
    pub bReserved: u8,
    pub dwLayerMask: u32,
    pub dwVisibleMask: u32,
    pub dwDamageMask: u32,
}

pub type PFN_CreateWindowExA = unsafe extern "system" fn(
    ex_style: u32,
    class_name: *const c_char,
    window_name: *const c_char,
    style: u32,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    parent: HWND,
    menu: HMENU,
    instance: HINSTANCE,
    param: *mut c_void,
) -> HWND;
pub type PFN_DestroyWindow = unsafe extern "system" fn(hwnd: HWND) -> BOOL;
pub type PFN_GetDC = unsafe extern "system" fn(hwnd: HWND) -> HDC;
pub type PFN_ReleaseDC = unsafe extern "system" fn(hwnd: HWND, hdc: HDC) -> i32;

pub type PFN_ChoosePixelFormat =
    unsafe extern "system" fn(hdc: HDC, pfd: *const PIXELFORMATDESCRIPTOR) -> i32;
pub type PFN_SetPixelFormat =
    unsafe extern "system" fn(hdc: HDC, format: i32, pfd: *const PIXELFORMATDESCRIPTOR) -> BOOL;

pub type PFN_wglCreateContext = unsafe extern "system" fn(hdc: HDC) -> HGLRC;
pub type PFN_wglDeleteContext = unsafe extern "system" fn(hglrc: HGLRC) -> BOOL;
pub type PFN_wglMakeCurrent = unsafe extern "system" fn(hdc: HDC, hglrc: HGLRC) -> BOOL;
pub type PFN_wglGetProcAddress = unsafe extern "system" fn(name: *const c_char) -> PROC;
// WGL_ARB_extensions_string
pub type PFN_wglGetExtensionsStringARB = unsafe extern "system" fn(hdc: HDC) -> *const c_char;

/// Function table spanning `user32.dll`, `gdi32.dll` and `opengl32.dll`.
pub struct WglLibrary {
    pub CreateWindowExA: PFN_CreateWindowExA,
    pub DestroyWindow: PFN_DestroyWindow,
    pub GetDC: PFN_GetDC,
    pub ReleaseDC: PFN_ReleaseDC,
    pub ChoosePixelFormat: PFN_ChoosePixelFormat,
    pub SetPixelFormat: PFN_SetPixelFormat,
    pub wglCreateContext: PFN_wglCreateContext,
    pub wglDeleteContext: PFN_wglDeleteContext,
    pub wglMakeCurrent: PFN_wglMakeCurrent,
    pub wglGetProcAddress: PFN_wglGetProcAddress,

    opengl32: Library,
    _gdi32: Library,
    _user32: Library,
}

impl WglLibrary {
    /// Load the system libraries.
    pub fn load() -> Result<Self, libloading::Error> {
        unsafe {
            let user32 = Library::new("user32.dll")?;
            let gdi32 = Library::new("gdi32.dll")?;
            let opengl32 = Library::new("opengl32.dll")?;

            Ok(Self {
                CreateWindowExA: *user32.get(b"CreateWindowExA\0")?,
                DestroyWindow: *user32.get(b"DestroyWindow\0")?,
                GetDC: *user32.get(b"GetDC\0")?,
                ReleaseDC: *user32.get(b"ReleaseDC\0")?,
                ChoosePixelFormat: *gdi32.get(b"ChoosePixelFormat\0")?,
                SetPixelFormat: *gdi32.get(b"SetPixelFormat\0")?,
                wglCreateContext: *opengl32.get(b"wglCreateContext\0")?,
                wglDeleteContext: *opengl32.get(b"wglDeleteContext\0")?,
                wglMakeCurrent: *opengl32.get(b"wglMakeCurrent\0")?,
                wglGetProcAddress: *opengl32.get(b"wglGetProcAddress\0")?,
                opengl32,
                _gdi32: gdi32,
                _user32: user32,
            })
        }
    }

    /// Resolve a GL entry point for the current context.
    ///
    /// `wglGetProcAddress` only returns extension and post-1.1 functions; the
    /// 1.1 core set is exported directly by `opengl32.dll`. Some drivers
    /// return small sentinel values instead of null on failure.
    pub fn get_proc_address(&self, name: &CStr) -> *const c_void {
        let ptr = unsafe { (self.wglGetProcAddress)(name.as_ptr()) } as isize;
        if !matches!(ptr, -1..=3) {
            return ptr as *const c_void;
        }
        unsafe {
            self.opengl32
                .get::<*const c_void>(name.to_bytes_with_nul())
                .map(|symbol| *symbol)
                .unwrap_or(std::ptr::null())
        }
    }
}
