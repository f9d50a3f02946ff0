// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Au-Zone Technologies

//! DRM format modifier constants from `include/uapi/drm/drm_fourcc.h`.

/// Builds a vendor-namespaced modifier value.
pub const fn fourcc_mod_code(vendor: u64, value: u64) -> u64 {
    (vendor << 56) | (value & 0x00ff_ffff_ffff_ffff)
}

/// Extracts the vendor namespace from a modifier value.
pub const fn fourcc_mod_get_vendor(modifier: u64) -> u64 {
    (modifier >> 56) & 0xff
}

pub const DRM_FORMAT_MOD_VENDOR_NONE: u64 = 0;
pub const DRM_FORMAT_MOD_VENDOR_INTEL: u64 = 0x01;
pub const DRM_FORMAT_MOD_VENDOR_AMD: u64 = 0x02;
pub const DRM_FORMAT_MOD_VENDOR_NVIDIA: u64 = 0x03;
pub const DRM_FORMAT_MOD_VENDOR_SAMSUNG: u64 = 0x04;
pub const DRM_FORMAT_MOD_VENDOR_QCOM: u64 = 0x05;
pub const DRM_FORMAT_MOD_VENDOR_VIVANTE: u64 = 0x06;
pub const DRM_FORMAT_MOD_VENDOR_BROADCOM: u64 = 0x07;
pub const DRM_FORMAT_MOD_VENDOR_ARM: u64 = 0x08;
pub const DRM_FORMAT_MOD_VENDOR_ALLWINNER: u64 = 0x09;
pub const DRM_FORMAT_MOD_VENDOR_AMLOGIC: u64 = 0x0a;
pub const DRM_FORMAT_MOD_VENDOR_MTK: u64 = 0x0b;

pub const DRM_FORMAT_RESERVED: u64 = (1 << 56) - 1;
pub const DRM_FORMAT_MOD_INVALID: u64 = fourcc_mod_code(DRM_FORMAT_MOD_VENDOR_NONE, DRM_FORMAT_RESERVED);
pub const DRM_FORMAT_MOD_LINEAR: u64 = fourcc_mod_code(DRM_FORMAT_MOD_VENDOR_NONE, 0);

pub const I915_FORMAT_MOD_X_TILED: u64 = fourcc_mod_code(DRM_FORMAT_MOD_VENDOR_INTEL, 1);
pub const I915_FORMAT_MOD_Y_TILED: u64 = fourcc_mod_code(DRM_FORMAT_MOD_VENDOR_INTEL, 2);
pub const I915_FORMAT_MOD_Yf_TILED: u64 = fourcc_mod_code(DRM_FORMAT_MOD_VENDOR_INTEL, 3);
pub const I915_FORMAT_MOD_Y_TILED_CCS: u64 = fourcc_mod_code(DRM_FORMAT_MOD_VENDOR_INTEL, 4);
pub const I915_FORMAT_MOD_Yf_TILED_CCS: u64 = fourcc_mod_code(DRM_FORMAT_MOD_VENDOR_INTEL, 5);
pub const I915_FORMAT_MOD_Y_TILED_GEN12_RC_CCS: u64 =
    fourcc_mod_code(DRM_FORMAT_MOD_VENDOR_INTEL, 6);
pub const I915_FORMAT_MOD_Y_TILED_GEN12_MC_CCS: u64 =
    fourcc_mod_code(DRM_FORMAT_MOD_VENDOR_INTEL, 7);
pub const I915_FORMAT_MOD_Y_TILED_GEN12_RC_CCS_CC: u64 =
    fourcc_mod_code(DRM_FORMAT_MOD_VENDOR_INTEL, 8);
pub const I915_FORMAT_MOD_4_TILED: u64 = fourcc_mod_code(DRM_FORMAT_MOD_VENDOR_INTEL, 9);
pub const I915_FORMAT_MOD_4_TILED_DG2_RC_CCS: u64 =
    fourcc_mod_code(DRM_FORMAT_MOD_VENDOR_INTEL, 10);
pub const I915_FORMAT_MOD_4_TILED_DG2_MC_CCS: u64 =
    fourcc_mod_code(DRM_FORMAT_MOD_VENDOR_INTEL, 11);
pub const I915_FORMAT_MOD_4_TILED_DG2_RC_CCS_CC: u64 =
    fourcc_mod_code(DRM_FORMAT_MOD_VENDOR_INTEL, 12);
pub const I915_FORMAT_MOD_4_TILED_MTL_RC_CCS: u64 =
    fourcc_mod_code(DRM_FORMAT_MOD_VENDOR_INTEL, 13);
pub const I915_FORMAT_MOD_4_TILED_MTL_MC_CCS: u64 =
    fourcc_mod_code(DRM_FORMAT_MOD_VENDOR_INTEL, 14);
pub const I915_FORMAT_MOD_4_TILED_MTL_RC_CCS_CC: u64 =
    fourcc_mod_code(DRM_FORMAT_MOD_VENDOR_INTEL, 15);
pub const I915_FORMAT_MOD_4_TILED_LNL_CCS: u64 = fourcc_mod_code(DRM_FORMAT_MOD_VENDOR_INTEL, 16);
pub const I915_FORMAT_MOD_4_TILED_BMG_CCS: u64 = fourcc_mod_code(DRM_FORMAT_MOD_VENDOR_INTEL, 17);
