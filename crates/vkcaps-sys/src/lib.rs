// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Au-Zone Technologies

//! Raw declarations consumed by the `vkcaps` crate.
//!
//! Nothing in this crate is linked at build time. EGL and WGL entry points are
//! resolved at runtime through `libloading` so the tool still runs (without the
//! optional platform reports) on systems lacking those libraries.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::missing_safety_doc)]

// Re-export libloading for error handling
pub use libloading;

pub mod drm;
pub mod egl;
pub mod gl;
pub mod vk_ext;
#[cfg(windows)]
pub mod wgl;
