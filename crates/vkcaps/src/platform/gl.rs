// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Au-Zone Technologies

//! Description of the OpenGL context current on the calling thread.

use std::ffi::{c_char, CStr};

use vkcaps_sys::gl::*;

use crate::units::format_bytes;
use crate::Error;

/// Properties of a current OpenGL context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GlContextInfo {
    pub version: String,
    pub vendor: String,
    pub renderer: String,
    pub shading_language_version: String,
    pub extensions: Vec<String>,
    pub ssbo_max_size: u64,
    pub ssbo_offset_alignment: u64,
    /// Device UUIDs reported through `GL_EXT_memory_object`, empty without it.
    pub device_uuids: Vec<[u8; 16]>,
    pub driver_uuid: Option<[u8; 16]>,
}

impl GlContextInfo {
    /// Query the context that is current on this thread.
    ///
    /// # Safety
    ///
    /// `gl` must have been resolved for the context that is current on the
    /// calling thread, and that context must stay current during the call.
    pub unsafe fn query(gl: &GlFunctions) -> Result<Self, Error> {
        let mut count: GLint = 0;
        unsafe { (gl.glGetIntegerv)(GL_NUM_EXTENSIONS, &mut count) };
        let mut extensions = Vec::with_capacity(count.max(0) as usize);
        for i in 0..count.max(0) as GLuint {
            let name = unsafe { (gl.glGetStringi)(GL_EXTENSIONS, i) };
            if let Some(name) = unsafe { gl_string(name) } {
                extensions.push(name);
            }
        }

        let ssbo_max_size = match gl.glGetInteger64v {
            Some(get) => {
                let mut value: GLint64 = 0;
                unsafe { get(GL_MAX_SHADER_STORAGE_BLOCK_SIZE, &mut value) };
                value
            }
            None => {
                let mut value: GLint = 0;
                unsafe { (gl.glGetIntegerv)(GL_MAX_SHADER_STORAGE_BLOCK_SIZE, &mut value) };
                value as GLint64
            }
        };
        let mut alignment: GLint = 0;
        unsafe { (gl.glGetIntegerv)(GL_SHADER_STORAGE_BUFFER_OFFSET_ALIGNMENT, &mut alignment) };

        let has_memory_object = extensions.iter().any(|e| e == "GL_EXT_memory_object");
        let device_uuids = match gl.glGetUnsignedBytei_vEXT {
            Some(get) if has_memory_object => {
                let mut count: GLint = 0;
                unsafe { (gl.glGetIntegerv)(GL_NUM_DEVICE_UUIDS_EXT, &mut count) };
                (0..count.max(0) as GLuint)
                    .map(|i| {
                        let mut uuid = [0u8; GL_UUID_SIZE_EXT];
                        unsafe { get(GL_DEVICE_UUID_EXT, i, uuid.as_mut_ptr()) };
                        uuid
                    })
                    .collect()
            }
            _ => Vec::new(),
        };
        let driver_uuid = match gl.glGetUnsignedBytevEXT {
            Some(get) if has_memory_object => {
                let mut uuid = [0u8; GL_UUID_SIZE_EXT];
                unsafe { get(GL_DRIVER_UUID_EXT, uuid.as_mut_ptr()) };
                Some(uuid)
            }
            _ => None,
        };

        Ok(Self {
            version: unsafe { gl_string((gl.glGetString)(GL_VERSION)) }.ok_or(Error::NullPointer)?,
            vendor: unsafe { gl_string((gl.glGetString)(GL_VENDOR)) }.unwrap_or_default(),
            renderer: unsafe { gl_string((gl.glGetString)(GL_RENDERER)) }.unwrap_or_default(),
            shading_language_version: unsafe {
                gl_string((gl.glGetString)(GL_SHADING_LANGUAGE_VERSION))
            }
            .unwrap_or_default(),
            extensions,
            ssbo_max_size: ssbo_max_size.max(0) as u64,
            ssbo_offset_alignment: alignment.max(0) as u64,
            device_uuids,
            driver_uuid,
        })
    }

    /// Whether this context runs on the device and driver identified by the
    /// given Vulkan UUIDs.
    pub fn matches(&self, device_uuid: &[u8; 16], driver_uuid: &[u8; 16]) -> bool {
        self.driver_uuid.as_ref() == Some(driver_uuid) && self.device_uuids.contains(device_uuid)
    }

    /// Report lines in display order.
    pub fn entries(&self) -> Vec<(String, String)> {
        vec![
            ("OpenGL Version".to_string(), self.version.clone()),
            ("OpenGL Vendor".to_string(), self.vendor.clone()),
            ("OpenGL Renderer".to_string(), self.renderer.clone()),
            (
                "OpenGL Shading Language Version".to_string(),
                self.shading_language_version.clone(),
            ),
            ("OpenGL Extensions".to_string(), self.extensions.join(", ")),
            (
                "OpenGL SSBO Max Size".to_string(),
                format_bytes(self.ssbo_max_size, 2, true),
            ),
            (
                "OpenGL SSBO Offset Alignment".to_string(),
                format_bytes(self.ssbo_offset_alignment, 2, true),
            ),
        ]
    }
}

/// Copy a driver owned string; `None` for null.
///
/// # Safety
///
/// `ptr` must be null or point to a NUL terminated string.
unsafe fn gl_string(ptr: *const GLubyte) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    let text = unsafe { CStr::from_ptr(ptr as *const c_char) };
    Some(text.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_layout() {
        let info = GlContextInfo {
            version: "4.6.0 NVIDIA 550.54".to_string(),
            vendor: "NVIDIA Corporation".to_string(),
            renderer: "NVIDIA GeForce RTX 4090/PCIe/SSE2".to_string(),
            shading_language_version: "4.60 NVIDIA".to_string(),
            extensions: vec!["GL_ARB_compute_shader".to_string(), "GL_EXT_memory_object".to_string()],
            ssbo_max_size: 2 * 1024 * 1024 * 1024,
            ssbo_offset_alignment: 16,
            device_uuids: Vec::new(),
            driver_uuid: None,
        };
        let entries = info.entries();
        let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "OpenGL Version",
                "OpenGL Vendor",
                "OpenGL Renderer",
                "OpenGL Shading Language Version",
                "OpenGL Extensions",
                "OpenGL SSBO Max Size",
                "OpenGL SSBO Offset Alignment",
            ]
        );
        assert_eq!(entries[4].1, "GL_ARB_compute_shader, GL_EXT_memory_object");
        assert_eq!(entries[5].1, "2.00 GiB");
        assert_eq!(entries[6].1, "16 B");
    }

    #[test]
    fn test_matches() {
        let mut info = GlContextInfo {
            device_uuids: vec![[1; 16], [2; 16]],
            driver_uuid: Some([9; 16]),
            ..Default::default()
        };
        assert!(info.matches(&[2; 16], &[9; 16]));
        assert!(!info.matches(&[3; 16], &[9; 16]));
        assert!(!info.matches(&[1; 16], &[8; 16]));
        info.driver_uuid = None;
        assert!(!info.matches(&[1; 16], &[9; 16]));
    }

    #[test]
    fn test_gl_string_null() {
        assert_eq!(unsafe { gl_string(std::ptr::null()) }, None);
        let text = b"4.6\0";
        assert_eq!(unsafe { gl_string(text.as_ptr()) }, Some("4.6".to_string()));
    }
}
