// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Au-Zone Technologies

mod error;

use clap::Parser;
use error::{result_to_exit_code, CliError};
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use vkcaps::config::{ProbeConfig, ReportConfig, OUTPUT_DIR_ENV};
use vkcaps::driver;
use vkcaps::names::version_string;
use vkcaps::platform;
use vkcaps::report::ReportEmitter;
use vkcaps::vulkan::VulkanContext;

/// vkcaps - Vulkan GPU capability report
#[derive(Parser)]
#[command(name = "vkcaps")]
#[command(version)]
#[command(about = "vkcaps - Vulkan GPU capability report")]
#[command(
    long_about = "Enumerates Vulkan devices and reports cooperative matrix, cooperative \
vector, memory layout and format support to the console and to Logfile.html."
)]
struct Cli {
    /// Write Modifiers_<index>.html with the DRM format modifiers of each device (Linux)
    #[arg(long)]
    modifiers: bool,

    /// Report EGL devices and OpenGL contexts matching each Vulkan device (Linux)
    #[arg(long)]
    egl: bool,

    /// Report the default WGL OpenGL context (Windows)
    #[arg(long)]
    wgl: bool,

    /// List every known format instead of the default selection
    #[arg(long)]
    all_formats: bool,

    /// Print the device records as JSON instead of console text
    #[arg(long)]
    json: bool,

    /// Enable verbose logging (use RUST_LOG=debug for more)
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress the console report and non-error logging
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// The text report goes to stdout unless replaced by JSON or silenced.
    fn console_report(&self) -> bool {
        !self.json && !self.quiet
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbose, cli.quiet);

    result_to_exit_code(execute(cli))
}

fn execute(cli: Cli) -> Result<(), CliError> {
    let config = build_config(&cli)?;

    let context = VulkanContext::new()?;
    info!(
        "Vulkan instance {} with {} physical device(s)",
        version_string(context.api_version()),
        context.device_count()
    );

    let log_path = config.log_file_path();
    let html = File::create(&log_path)
        .map_err(|e| CliError::ReportIo(format!("{}: {}", log_path.display(), e)))?;
    debug!("Writing HTML report to {}", log_path.display());

    let console: Box<dyn Write> = if cli.console_report() {
        Box::new(io::stdout().lock())
    } else {
        Box::new(io::sink())
    };
    let emitter = ReportEmitter::new(console, BufWriter::new(html), &config.title)?;

    let mut backends = platform::available_backends(cli.egl, cli.wgl);
    let summary = driver::run(&context, &mut backends, &config, emitter)?;

    if cli.json {
        let mut stdout = io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, &summary.devices)?;
        writeln!(stdout)?;
    }

    info!(
        "Reported {} device(s) ({} excluded, {} failed) to {}",
        summary.devices.len(),
        summary.excluded,
        summary.failed,
        log_path.display()
    );
    Ok(())
}

/// Build the run configuration from the environment and command-line flags.
fn build_config(cli: &Cli) -> Result<ReportConfig, CliError> {
    let mut config = ReportConfig::from_env();
    if !config.output_dir().is_dir() {
        return Err(CliError::InvalidArgs(format!(
            "{} ({}) is not a directory",
            OUTPUT_DIR_ENV,
            config.output_dir().display()
        )));
    }
    if cli.all_formats {
        config.probe = ProbeConfig::all_formats();
    }
    config.modifiers = cli.modifiers;
    Ok(config)
}

/// Initialize env_logger based on verbosity flags
fn init_logging(verbose: bool, quiet: bool) {
    let env = env_logger::Env::default();

    let env = if quiet {
        env.default_filter_or("error")
    } else if verbose {
        env.default_filter_or("debug")
    } else {
        env.default_filter_or("info")
    };

    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .init();

    log::debug!("Logging initialized");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from(["vkcaps", "--modifiers", "--all-formats", "--json"]).unwrap();
        assert!(cli.modifiers);
        assert!(cli.all_formats);
        assert!(cli.json);
        assert!(!cli.egl);
        assert!(!cli.wgl);
    }

    #[test]
    fn test_console_report() {
        let cli = Cli::try_parse_from(["vkcaps"]).unwrap();
        assert!(cli.console_report());
        let cli = Cli::try_parse_from(["vkcaps", "--quiet"]).unwrap();
        assert!(!cli.console_report());
        let cli = Cli::try_parse_from(["vkcaps", "--json"]).unwrap();
        assert!(!cli.console_report());
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["vkcaps", "-v", "-q"]).is_err());
    }

    #[test]
    fn test_flags_take_no_values() {
        assert!(Cli::try_parse_from(["vkcaps", "--egl=yes"]).is_err());
    }
}
