// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Au-Zone Technologies
//
// vkcaps Report Pipeline Tests
//
// TESTING LAYERS:
//
// Layer 1 (Unit Tests - No hardware required):
//   - test_no_suitable_devices: zero devices pass the extension filter
//   - test_cooperative_matrix_table: one coopmat entry becomes one HTML row
//   - test_unknown_format_row: unmapped format codes render as UNKNOWN
//   - test_unavailable_backend_and_capability: unsupported sections are
//     reported and the run continues
//   - test_open_failure_continues, test_enumeration_failure_closes_report
//
// Layer 3 (Hardware Integration - Requires a Vulkan driver):
//   - test_hardware_run: full run against the installed Vulkan driver
//
// RUN LAYER 1:
//   cargo test --test report_pipeline
//
// RUN LAYER 3 (on hardware):
//   cargo test --test report_pipeline -- --ignored --nocapture

use std::cell::RefCell;
use std::rc::Rc;

use serial_test::serial;
use vkcaps::capability::{
    CapabilityRecord, CooperativeMatrix2Support, CooperativeMatrixProperties,
    CooperativeVectorSupport, DeviceIdentity, FormatFeatures, MemoryHeap, MemoryLayout,
    ModifierEntry,
};
use vkcaps::config::{ProbeConfig, ReportConfig};
use vkcaps::driver::{self, DeviceCandidate, DeviceSource, RunSummary, NO_DEVICES_NOTICE};
use vkcaps::platform::{PlatformBackend, PlatformReport};
use vkcaps::probe::{self, DeviceQuery};
use vkcaps::report::ReportEmitter;
use vkcaps::Error;

const FLOAT16: i32 = 0;
const SCOPE_SUBGROUP: i32 = 3;

#[derive(Clone)]
struct FakeGpu {
    identity: DeviceIdentity,
    extensions: Vec<String>,
    cooperative_matrix: Vec<CooperativeMatrixProperties>,
    fail_open: bool,
}

impl FakeGpu {
    fn new(index: usize, name: &str, extensions: &[&str]) -> Self {
        Self {
            identity: DeviceIdentity {
                index,
                name: name.to_string(),
                vendor_id: 0x10DE,
                device_id: 0x2684,
                device_type: 2,
                api_version: ash::vk::API_VERSION_1_3,
                driver_version: 0,
                driver: None,
                device_uuid: [index as u8; 16],
                driver_uuid: [0xAB; 16],
                device_luid: None,
            },
            extensions: extensions.iter().map(|e| e.to_string()).collect(),
            cooperative_matrix: Vec::new(),
            fail_open: false,
        }
    }
}

impl DeviceQuery for FakeGpu {
    fn identity(&self) -> &DeviceIdentity {
        &self.identity
    }

    fn has_extension(&self, name: &str) -> bool {
        self.extensions.iter().any(|e| e == name)
    }

    fn cooperative_matrix_enabled(&self) -> bool {
        true
    }

    fn cooperative_matrix_properties(&self) -> Result<Vec<CooperativeMatrixProperties>, Error> {
        Ok(self.cooperative_matrix.clone())
    }

    fn cooperative_matrix2(&self) -> Result<CooperativeMatrix2Support, Error> {
        Ok(CooperativeMatrix2Support::default())
    }

    fn cooperative_vector(&self) -> Result<CooperativeVectorSupport, Error> {
        Ok(CooperativeVectorSupport::default())
    }

    fn memory_layout(&self) -> Result<MemoryLayout, Error> {
        Ok(MemoryLayout {
            subgroup_size: 32,
            heaps: vec![MemoryHeap {
                size: 24 * 1024 * 1024 * 1024,
                flags: 0x1,
            }],
            ..Default::default()
        })
    }

    fn format_features(&self, _format: i32) -> Result<FormatFeatures, Error> {
        // SAMPLED_IMAGE | STORAGE_IMAGE
        Ok(FormatFeatures {
            linear_tiling: 0,
            optimal_tiling: 0x3,
            buffer: 0,
        })
    }

    fn drm_format_modifiers(&self, _format: i32) -> Result<Vec<ModifierEntry>, Error> {
        Ok(vec![ModifierEntry {
            modifier: 0,
            plane_count: 1,
            tiling_features: 0x1,
        }])
    }
}

struct FakeSource {
    devices: Vec<FakeGpu>,
    fail_enumeration: bool,
    opened: RefCell<Vec<usize>>,
}

impl FakeSource {
    fn new(devices: Vec<FakeGpu>) -> Self {
        Self {
            devices,
            fail_enumeration: false,
            opened: RefCell::new(Vec::new()),
        }
    }
}

impl DeviceSource for FakeSource {
    fn candidates(&self) -> Result<Vec<DeviceCandidate>, Error> {
        if self.fail_enumeration {
            return Err(Error::Vulkan(ash::vk::Result::ERROR_INITIALIZATION_FAILED));
        }
        Ok(self
            .devices
            .iter()
            .map(|d| DeviceCandidate {
                index: d.identity.index,
                name: d.identity.name.clone(),
                extensions: d.extensions.clone(),
            })
            .collect())
    }

    fn open(&self, candidate: &DeviceCandidate) -> Result<Box<dyn DeviceQuery + '_>, Error> {
        let device = &self.devices[candidate.index];
        if device.fail_open {
            return Err(Error::Vulkan(ash::vk::Result::ERROR_DEVICE_LOST));
        }
        self.opened.borrow_mut().push(candidate.index);
        Ok(Box::new(device.clone()))
    }
}

/// Backend that is never available.
struct MissingBackend;

impl PlatformBackend for MissingBackend {
    fn name(&self) -> &'static str {
        "EGL"
    }

    fn initialize(&mut self) -> Result<PlatformReport, Error> {
        Err(Error::BackendUnavailable("EGL".to_string()))
    }

    fn report_device(&mut self, _identity: &DeviceIdentity) -> Result<PlatformReport, Error> {
        panic!("report_device called on an unavailable backend");
    }
}

/// Backend matching devices by UUID, recording the calls it receives.
struct MatchingBackend {
    uuid: [u8; 16],
    calls: Rc<RefCell<Vec<String>>>,
}

impl PlatformBackend for MatchingBackend {
    fn name(&self) -> &'static str {
        "WGL"
    }

    fn initialize(&mut self) -> Result<PlatformReport, Error> {
        self.calls.borrow_mut().push("initialize".to_string());
        let mut report = PlatformReport::new("Default WGL OpenGL context information");
        report.push("OpenGL Version", "4.6");
        Ok(report)
    }

    fn report_device(&mut self, identity: &DeviceIdentity) -> Result<PlatformReport, Error> {
        self.calls.borrow_mut().push(identity.name.clone());
        if identity.device_uuid != self.uuid {
            return Err(Error::NoMatchingDevice);
        }
        let mut report = PlatformReport::new("WGL device");
        report.push("OpenGL Renderer", &identity.name);
        Ok(report)
    }
}

struct Output {
    console: String,
    html: String,
    summary: Result<RunSummary, Error>,
}

fn run_with(
    source: &FakeSource,
    backends: &mut [Box<dyn PlatformBackend>],
    config: &ReportConfig,
) -> Output {
    let mut console = Vec::new();
    let mut html = Vec::new();
    let emitter = ReportEmitter::new(&mut console, &mut html, "vkcaps test").unwrap();
    let summary = driver::run(source, backends, config, emitter);
    Output {
        console: String::from_utf8(console).unwrap(),
        html: String::from_utf8(html).unwrap(),
        summary,
    }
}

/// Default configuration without the required extension filter.
fn test_config() -> ReportConfig {
    ReportConfig {
        required_extensions: Vec::new(),
        ..Default::default()
    }
}

fn coopmat_entry() -> CooperativeMatrixProperties {
    CooperativeMatrixProperties {
        m_size: 16,
        n_size: 16,
        k_size: 16,
        a_type: FLOAT16,
        b_type: FLOAT16,
        c_type: FLOAT16,
        result_type: FLOAT16,
        saturating_accumulation: false,
        scope: SCOPE_SUBGROUP,
    }
}

#[test]
fn test_no_suitable_devices() {
    let source = FakeSource::new(vec![
        FakeGpu::new(0, "llvmpipe", &[]),
        FakeGpu::new(1, "Other GPU", &["VK_KHR_swapchain"]),
    ]);
    let config = ReportConfig {
        required_extensions: vec![probe::KHR_COOPERATIVE_MATRIX.to_string()],
        ..Default::default()
    };

    let output = run_with(&source, &mut [], &config);
    let summary = output.summary.unwrap();

    assert!(summary.devices.is_empty());
    assert_eq!(summary.excluded, 2);
    assert!(output.console.contains(NO_DEVICES_NOTICE));
    assert!(output.html.contains(NO_DEVICES_NOTICE));
    assert!(output.html.trim_end().ends_with("</html>"));
    assert!(source.opened.borrow().is_empty());
}

#[test]
fn test_cooperative_matrix_table() {
    let mut gpu = FakeGpu::new(0, "Fake RTX", &[probe::KHR_COOPERATIVE_MATRIX]);
    gpu.cooperative_matrix = vec![coopmat_entry()];
    let source = FakeSource::new(vec![gpu]);
    let config = test_config();

    let output = run_with(&source, &mut [], &config);
    let summary = output.summary.unwrap();
    assert_eq!(summary.devices.len(), 1);

    let expected_row = "<tr><td>16</td><td>16</td><td>16</td><td>float16</td><td>float16</td>\
                        <td>float16</td><td>float16</td><td>false</td><td>SUBGROUP</td></tr>";
    assert_eq!(output.html.matches(expected_row).count(), 1);
    assert!(output.console.contains("VK_KHR_cooperative_matrix properties:"));
    assert!(output.console.contains("MSize: 16\nNSize: 16\nKSize: 16\nAType: float16\n"));
    assert!(output.console.contains("Device name: Fake RTX"));
}

#[test]
fn test_unknown_format_row() {
    let source = FakeSource::new(vec![FakeGpu::new(0, "Fake RTX", &[])]);
    let config = ReportConfig {
        probe: ProbeConfig {
            formats: vec![37, 987_654],
        },
        ..test_config()
    };

    let output = run_with(&source, &mut [], &config);
    let summary = output.summary.unwrap();

    assert!(output.html.contains("<td>VK_FORMAT_R8G8B8A8_UNORM</td>"));
    assert!(output.html.contains("<td>UNKNOWN</td>"));
    match &summary.devices[0].capabilities[4] {
        CapabilityRecord::FormatSupport(Some(entries)) => assert_eq!(entries.len(), 2),
        other => panic!("unexpected record {:?}", other),
    }
}

#[test]
fn test_unavailable_backend_and_capability() {
    let source = FakeSource::new(vec![FakeGpu::new(0, "Fake RTX", &[])]);
    let config = test_config();
    let mut backends: Vec<Box<dyn PlatformBackend>> = vec![Box::new(MissingBackend)];

    let output = run_with(&source, &mut backends, &config);
    output.summary.unwrap();

    assert!(output.console.contains("EGL is not supported on this system."));
    assert!(output.console.contains("VK_KHR_cooperative_matrix is not supported."));
    assert!(output.console.contains("VK_NV_cooperative_matrix2 is not supported."));
    assert!(!output.html.contains("<th>MGranularity</th>"));
    assert!(!output.html.contains("<th>MSize</th>"));

    // later sections are still present
    assert!(output.console.contains("Default subgroup size: 32"));
    assert!(output.html.contains("<th>Format</th><th>Linear tiling</th>"));
    assert!(output.html.contains("FEATURE_SAMPLED_IMAGE | FEATURE_STORAGE_IMAGE"));
}

#[test]
fn test_backend_device_matching() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let source = FakeSource::new(vec![
        FakeGpu::new(0, "First GPU", &[]),
        FakeGpu::new(1, "Second GPU", &[]),
    ]);
    let mut backends: Vec<Box<dyn PlatformBackend>> = vec![Box::new(MatchingBackend {
        uuid: [1; 16],
        calls: Rc::clone(&calls),
    })];

    let output = run_with(&source, &mut backends, &test_config());
    output.summary.unwrap();

    assert_eq!(
        *calls.borrow(),
        vec!["initialize".to_string(), "First GPU".to_string(), "Second GPU".to_string()]
    );
    assert!(output.console.contains("Default WGL OpenGL context information:\nOpenGL Version: 4.6"));
    assert!(output.console.contains("No WGL device matches the Vulkan device UUID."));
    assert!(output.console.contains("WGL device:\nOpenGL Renderer: Second GPU"));
}

#[test]
fn test_open_failure_continues() {
    let mut broken = FakeGpu::new(0, "Broken GPU", &[]);
    broken.fail_open = true;
    let source = FakeSource::new(vec![broken, FakeGpu::new(1, "Working GPU", &[])]);

    let output = run_with(&source, &mut [], &test_config());
    let summary = output.summary.unwrap();

    assert_eq!(summary.failed, 1);
    assert_eq!(summary.devices.len(), 1);
    assert_eq!(summary.devices[0].identity.name, "Working GPU");
    assert_eq!(*source.opened.borrow(), vec![1]);
    assert!(output.html.contains("class=\"error\""));
    assert!(output.console.contains("Failed to open device Broken GPU"));
}

#[test]
fn test_enumeration_failure_closes_report() {
    let mut source = FakeSource::new(Vec::new());
    source.fail_enumeration = true;

    let output = run_with(&source, &mut [], &test_config());
    assert!(matches!(output.summary, Err(Error::Vulkan(_))));
    assert!(output.html.trim_end().ends_with("</html>"));
}

#[test]
fn test_summary_serializes() {
    let mut gpu = FakeGpu::new(0, "Fake RTX", &[probe::KHR_COOPERATIVE_MATRIX]);
    gpu.cooperative_matrix = vec![coopmat_entry()];
    let source = FakeSource::new(vec![gpu]);

    let output = run_with(&source, &mut [], &test_config());
    let json = serde_json::to_value(output.summary.unwrap()).unwrap();

    let device = &json["devices"][0];
    assert_eq!(device["identity"]["name"], "Fake RTX");
    let coopmat = &device["capabilities"][0];
    assert_eq!(coopmat["kind"], "CooperativeMatrix");
    assert_eq!(coopmat["payload"][0]["a_type"], "float16");
    assert!(device.get("modifier_report").is_none());
}

#[test]
#[cfg(target_os = "linux")]
fn test_modifier_reports() {
    let dir = std::env::temp_dir().join(format!("vkcaps-pipeline-{}", rand::random::<u32>()));
    std::fs::create_dir_all(&dir).unwrap();

    let source = FakeSource::new(vec![
        FakeGpu::new(0, "Modifier GPU", &[probe::EXT_IMAGE_DRM_FORMAT_MODIFIER]),
        FakeGpu::new(1, "Plain GPU", &[]),
    ]);
    let config = ReportConfig {
        modifiers: true,
        output_dir: dir.clone(),
        ..test_config()
    };

    let output = run_with(&source, &mut [], &config);
    let summary = output.summary.unwrap();

    let path = dir.join("Modifiers_0.html");
    assert_eq!(summary.devices[0].modifier_report.as_deref(), Some(path.as_path()));
    assert!(summary.devices[1].modifier_report.is_none());
    assert!(std::fs::read_to_string(&path).unwrap().contains("<td>LINEAR</td>"));
    assert!(!dir.join("Modifiers_1.html").exists());
    assert!(output
        .console
        .contains("VK_EXT_image_drm_format_modifier is not supported."));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
#[ignore = "requires a Vulkan driver"]
#[serial]
fn test_hardware_run() {
    let _ = env_logger::builder().is_test(true).try_init();

    let source = vkcaps::vulkan::VulkanContext::new().expect("Vulkan loader");
    let config = ReportConfig::default();
    let mut console = Vec::new();
    let mut html = Vec::new();
    let emitter = ReportEmitter::new(&mut console, &mut html, "vkcaps hardware").unwrap();
    let summary = driver::run(&source, &mut [], &config, emitter).expect("run");

    let console = String::from_utf8(console).unwrap();
    for device in &summary.devices {
        assert!(console.contains(&format!("Device name: {}", device.identity.name)));
        assert_eq!(device.capabilities.len(), 5);
    }
}
