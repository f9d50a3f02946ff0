// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Au-Zone Technologies

//! OpenGL entry points needed to describe a current context.

use std::ffi::{c_void, CStr};

pub type GLenum = u32;
pub type GLuint = u32;
pub type GLint = i32;
pub type GLint64 = i64;
pub type GLubyte = u8;

pub const GL_VENDOR: GLenum = 0x1F00;
pub const GL_RENDERER: GLenum = 0x1F01;
pub const GL_VERSION: GLenum = 0x1F02;
pub const GL_EXTENSIONS: GLenum = 0x1F03;
pub const GL_SHADING_LANGUAGE_VERSION: GLenum = 0x8B8C;
pub const GL_NUM_EXTENSIONS: GLenum = 0x821D;
pub const GL_MAX_SHADER_STORAGE_BLOCK_SIZE: GLenum = 0x90DE;
pub const GL_SHADER_STORAGE_BUFFER_OFFSET_ALIGNMENT: GLenum = 0x90DF;

// GL_EXT_memory_object
pub const GL_UUID_SIZE_EXT: usize = 16;
pub const GL_NUM_DEVICE_UUIDS_EXT: GLenum = 0x9596;
pub const GL_DEVICE_UUID_EXT: GLenum = 0x9597;
pub const GL_DRIVER_UUID_EXT: GLenum = 0x9598;

pub type PFN_glGetString = unsafe extern "system" fn(name: GLenum) -> *const GLubyte;
pub type PFN_glGetStringi = unsafe extern "system" fn(name: GLenum, index: GLuint) -> *const GLubyte;
pub type PFN_glGetIntegerv = unsafe extern "system" fn(pname: GLenum, data: *mut GLint);
pub type PFN_glGetInteger64v = unsafe extern "system" fn(pname: GLenum, data: *mut GLint64);
pub type PFN_glGetUnsignedBytevEXT = unsafe extern "system" fn(pname: GLenum, data: *mut GLubyte);
pub type PFN_glGetUnsignedBytei_vEXT =
    unsafe extern "system" fn(target: GLenum, index: GLuint, data: *mut GLubyte);

/// OpenGL functions resolved for the current context.
///
/// `glGetString`, `glGetStringi` and `glGetIntegerv` are required; the rest are
/// optional and depend on the context version and extensions.
#[derive(Clone, Copy)]
pub struct GlFunctions {
    pub glGetString: PFN_glGetString,
    pub glGetStringi: PFN_glGetStringi,
    pub glGetIntegerv: PFN_glGetIntegerv,
    pub glGetInteger64v: Option<PFN_glGetInteger64v>,
    pub glGetUnsignedBytevEXT: Option<PFN_glGetUnsignedBytevEXT>,
    pub glGetUnsignedBytei_vEXT: Option<PFN_glGetUnsignedBytei_vEXT>,
}

impl GlFunctions {
    /// Resolve the function table through a platform `GetProcAddress`.
    ///
    /// Returns `None` if one of the required functions cannot be resolved.
    ///
    /// # Safety
    ///
    /// `resolve` must return either null or a pointer to the named GL function
    /// of the context that is current on the calling thread.
    pub unsafe fn load<F>(mut resolve: F) -> Option<Self>
    where
        F: FnMut(&CStr) -> *const c_void,
    {
        Some(Self {
            glGetString: lookup(&mut resolve, c"glGetString")?,
            glGetStringi: lookup(&mut resolve, c"glGetStringi")?,
            glGetIntegerv: lookup(&mut resolve, c"glGetIntegerv")?,
            glGetInteger64v: lookup(&mut resolve, c"glGetInteger64v"),
            glGetUnsignedBytevEXT: lookup(&mut resolve, c"glGetUnsignedBytevEXT"),
            glGetUnsignedBytei_vEXT: lookup(&mut resolve, c"glGetUnsignedBytei_vEXT"),
        })
    }
}

unsafe fn lookup<T: Copy, F>(resolve: &mut F, name: &CStr) -> Option<T>
where
    F: FnMut(&CStr) -> *const c_void,
{
    let ptr = resolve(name);
    if ptr.is_null() {
        None
    } else {
        Some(std::mem::transmute_copy::<*const c_void, T>(&ptr))
    }
}
