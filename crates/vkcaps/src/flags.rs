// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Au-Zone Technologies

//! Bitmask decomposition.
//!
//! A [`FlagTable`] lists `(bits, name)` entries in declaration order. Promoted
//! extension bits (`_KHR`, `_EXT`, `_IMG`, `_NV`) are listed after their core
//! equivalent under the same canonical name, so a mask never produces a name
//! twice.
//!
//! ```
//! use vkcaps::flags::FORMAT_FEATURES;
//!
//! assert_eq!(
//!     FORMAT_FEATURES.describe(0x1 | 0x4000),
//!     "FEATURE_SAMPLED_IMAGE | FEATURE_TRANSFER_SRC"
//! );
//! assert_eq!(FORMAT_FEATURES.describe(0), "");
//! ```

use crate::names::UNKNOWN;

/// Separator used by [`FlagTable::describe`].
pub const SEPARATOR: &str = " | ";

/// Ordered `(bits, name)` table for one flag type.
pub struct FlagTable {
    entries: &'static [(u64, &'static str)],
}

impl FlagTable {
    pub const fn new(entries: &'static [(u64, &'static str)]) -> Self {
        Self { entries }
    }

    /// Names of the flags set in `bits`, in declaration order.
    ///
    /// Each name appears at most once. Set bits not covered by any entry add a
    /// single trailing [`UNKNOWN`].
    pub fn decompose(&self, bits: u64) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut emitted = 0u64;

        for &(flag, name) in self.entries {
            if flag == 0 || bits & flag != flag {
                continue;
            }
            if emitted & flag == flag || names.contains(&name) {
                continue;
            }
            emitted |= flag;
            names.push(name);
        }

        if bits & !emitted != 0 {
            names.push(UNKNOWN);
        }
        names
    }

    /// Decomposed names joined with `" | "`; empty for `0`.
    pub fn describe(&self, bits: u64) -> String {
        self.decompose(bits).join(SEPARATOR)
    }

    /// Every bit named by this table.
    pub fn known_bits(&self) -> u64 {
        self.entries.iter().fold(0, |acc, (flag, _)| acc | flag)
    }

    pub fn entries(&self) -> &'static [(u64, &'static str)] {
        self.entries
    }
}

/// `VkFormatFeatureFlagBits`
pub static FORMAT_FEATURES: FlagTable = FlagTable::new(&[
    (0x0000_0001, "FEATURE_SAMPLED_IMAGE"),
    (0x0000_0002, "FEATURE_STORAGE_IMAGE"),
    (0x0000_0004, "FEATURE_STORAGE_IMAGE_ATOMIC"),
    (0x0000_0008, "FEATURE_UNIFORM_TEXEL_BUFFER"),
    (0x0000_0010, "FEATURE_STORAGE_TEXEL_BUFFER"),
    (0x0000_0020, "FEATURE_STORAGE_TEXEL_BUFFER_ATOMIC"),
    (0x0000_0040, "FEATURE_VERTEX_BUFFER"),
    (0x0000_0080, "FEATURE_COLOR_ATTACHMENT"),
    (0x0000_0100, "FEATURE_COLOR_ATTACHMENT_BLEND"),
    (0x0000_0200, "FEATURE_DEPTH_STENCIL_ATTACHMENT"),
    (0x0000_0400, "FEATURE_BLIT_SRC"),
    (0x0000_0800, "FEATURE_BLIT_DST"),
    (0x0000_1000, "FEATURE_SAMPLED_IMAGE_FILTER_LINEAR"),
    (0x0000_4000, "FEATURE_TRANSFER_SRC"),
    (0x0000_8000, "FEATURE_TRANSFER_DST"),
    (0x0002_0000, "FEATURE_MIDPOINT_CHROMA_SAMPLES"),
    (0x0004_0000, "FEATURE_SAMPLED_IMAGE_YCBCR_CONVERSION_LINEAR_FILTER"),
    (0x0008_0000, "FEATURE_SAMPLED_IMAGE_YCBCR_CONVERSION_SEPARATE_RECONSTRUCTION_FILTER"),
    (0x0010_0000, "FEATURE_SAMPLED_IMAGE_YCBCR_CONVERSION_CHROMA_RECONSTRUCTION_EXPLICIT"),
    (0x0020_0000, "FEATURE_SAMPLED_IMAGE_YCBCR_CONVERSION_CHROMA_RECONSTRUCTION_EXPLICIT_FORCEABLE"),
    (0x0040_0000, "FEATURE_DISJOINT"),
    (0x0080_0000, "FEATURE_COSITED_CHROMA_SAMPLES"),
    (0x0001_0000, "FEATURE_SAMPLED_IMAGE_FILTER_MINMAX"),
    // extensions
    (0x0200_0000, "FEATURE_VIDEO_DECODE_OUTPUT"),
    (0x0400_0000, "FEATURE_VIDEO_DECODE_DPB"),
    (0x2000_0000, "FEATURE_ACCELERATION_STRUCTURE_VERTEX_BUFFER"),
    (0x0000_2000, "FEATURE_SAMPLED_IMAGE_FILTER_CUBIC"),
    (0x0100_0000, "FEATURE_FRAGMENT_DENSITY_MAP"),
    (0x4000_0000, "FEATURE_FRAGMENT_SHADING_RATE_ATTACHMENT"),
    (0x0800_0000, "FEATURE_VIDEO_ENCODE_INPUT"),
    (0x1000_0000, "FEATURE_VIDEO_ENCODE_DPB"),
    // aliases
    (0x0000_2000, "FEATURE_SAMPLED_IMAGE_FILTER_CUBIC"),
    (0x0000_4000, "FEATURE_TRANSFER_SRC"),
    (0x0000_8000, "FEATURE_TRANSFER_DST"),
    (0x0001_0000, "FEATURE_SAMPLED_IMAGE_FILTER_MINMAX"),
    (0x0002_0000, "FEATURE_MIDPOINT_CHROMA_SAMPLES"),
    (0x0004_0000, "FEATURE_SAMPLED_IMAGE_YCBCR_CONVERSION_LINEAR_FILTER"),
    (0x0008_0000, "FEATURE_SAMPLED_IMAGE_YCBCR_CONVERSION_SEPARATE_RECONSTRUCTION_FILTER"),
    (0x0010_0000, "FEATURE_SAMPLED_IMAGE_YCBCR_CONVERSION_CHROMA_RECONSTRUCTION_EXPLICIT"),
    (0x0020_0000, "FEATURE_SAMPLED_IMAGE_YCBCR_CONVERSION_CHROMA_RECONSTRUCTION_EXPLICIT_FORCEABLE"),
    (0x0040_0000, "FEATURE_DISJOINT"),
    (0x0080_0000, "FEATURE_COSITED_CHROMA_SAMPLES"),
]);

/// `VkShaderStageFlagBits`
pub static SHADER_STAGES: FlagTable = FlagTable::new(&[
    (0x0000_0001, "VERTEX"),
    (0x0000_0002, "TESSELLATION_CONTROL"),
    (0x0000_0004, "TESSELLATION_EVALUATION"),
    (0x0000_0008, "GEOMETRY"),
    (0x0000_0010, "FRAGMENT"),
    (0x0000_0020, "COMPUTE"),
    (0x0000_0100, "RAYGEN"),
    (0x0000_0200, "ANY_HIT"),
    (0x0000_0400, "CLOSEST_HIT"),
    (0x0000_0800, "MISS"),
    (0x0000_1000, "INTERSECTION"),
    (0x0000_2000, "CALLABLE"),
    (0x0000_0040, "TASK"),
    (0x0000_0080, "MESH"),
    (0x0000_4000, "SUBPASS_SHADING"),
    (0x0008_0000, "CLUSTER_CULLING"),
    // _NV aliases of the ray tracing and mesh stages
    (0x0000_0100, "RAYGEN"),
    (0x0000_0200, "ANY_HIT"),
    (0x0000_0400, "CLOSEST_HIT"),
    (0x0000_0800, "MISS"),
    (0x0000_1000, "INTERSECTION"),
    (0x0000_2000, "CALLABLE"),
    (0x0000_0040, "TASK"),
    (0x0000_0080, "MESH"),
]);

/// `VkMemoryHeapFlagBits`
pub static MEMORY_HEAPS: FlagTable = FlagTable::new(&[
    (0x0000_0001, "DEVICE_LOCAL"),
    (0x0000_0002, "MULTI_INSTANCE"),
    // _KHR
    (0x0000_0002, "MULTI_INSTANCE"),
]);

/// `VkMemoryPropertyFlagBits`
pub static MEMORY_PROPERTIES: FlagTable = FlagTable::new(&[
    (0x0000_0001, "DEVICE_LOCAL"),
    (0x0000_0002, "HOST_VISIBLE"),
    (0x0000_0004, "HOST_COHERENT"),
    (0x0000_0008, "HOST_CACHED"),
    (0x0000_0010, "LAZILY_ALLOCATED"),
    (0x0000_0020, "PROTECTED"),
    (0x0000_0040, "DEVICE_COHERENT_AMD"),
    (0x0000_0080, "DEVICE_UNCACHED_AMD"),
    (0x0000_0100, "RDMA_CAPABLE_NV"),
]);
