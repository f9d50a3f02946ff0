// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Au-Zone Technologies

//! Two-target report output.
//!
//! A [`ReportEmitter`] writes every unit to a line-oriented console sink and
//! to an HTML document, one after the other. Console tables print one
//! `header: value` line per cell with a blank line after each row; the HTML
//! document renders them as `<table>` elements.
//!
//! ```
//! use vkcaps::report::{ReportEmitter, Table};
//!
//! let mut console = Vec::new();
//! let mut html = Vec::new();
//! let mut report = ReportEmitter::new(&mut console, &mut html, "example")?;
//! report.key_value("Device name", "Example GPU")?;
//! let mut table = Table::new(&["MSize", "AType"]);
//! table.push_row(vec!["16".into(), "float16".into()]);
//! report.emit_table(&table)?;
//! report.close()?;
//!
//! let console = String::from_utf8(console)?;
//! assert!(console.contains("Device name: Example GPU"));
//! assert!(console.contains("MSize: 16\nAType: float16\n"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod html;
mod records;

use std::fmt::Display;
use std::io::{self, Write};

use html::{Class, HtmlWriter};

pub use records::{bool_str, device_identity_entries};

/// Named columns and ordered rows. Rows keep insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row. Missing cells render empty, extra cells are ignored.
    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Rows cut or padded to one cell per header.
    pub fn cells(&self) -> impl Iterator<Item = Vec<&str>> + '_ {
        self.rows.iter().map(move |row| {
            (0..self.headers.len())
                .map(|i| row.get(i).map(String::as_str).unwrap_or(""))
                .collect()
        })
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Writes report units to the console and HTML sinks.
pub struct ReportEmitter<C: Write, H: Write> {
    console: C,
    html: HtmlWriter<H>,
}

impl<C: Write, H: Write> ReportEmitter<C, H> {
    /// Start a report. The HTML header is written immediately.
    pub fn new(console: C, html: H, title: &str) -> io::Result<Self> {
        Ok(Self {
            console,
            html: HtmlWriter::begin(html, title)?,
        })
    }

    /// A plain line. An empty line is a vertical break.
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.console, "{}", text)?;
        self.html.paragraph(text, Class::Plain)
    }

    /// A highlighted informational line.
    pub fn info(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.console, "{}", text)?;
        self.html.paragraph(text, Class::Info)
    }

    pub fn key_value(&mut self, key: &str, value: impl Display) -> io::Result<()> {
        let value = value.to_string();
        writeln!(self.console, "{}: {}", key, value)?;
        self.html.key_value(key, &value)
    }

    /// A titled block of key/value lines.
    pub fn emit_section<K, V>(&mut self, title: &str, entries: &[(K, V)]) -> io::Result<()>
    where
        K: AsRef<str>,
        V: Display,
    {
        writeln!(self.console)?;
        writeln!(self.console, "{}:", title)?;
        self.html.heading(title)?;
        for (key, value) in entries {
            self.key_value(key.as_ref(), value)?;
        }
        Ok(())
    }

    pub fn emit_table(&mut self, table: &Table) -> io::Result<()> {
        for row in table.cells() {
            for (header, cell) in table.headers.iter().zip(row) {
                writeln!(self.console, "{}: {}", header, cell)?;
            }
            writeln!(self.console)?;
        }
        self.html.table(table)
    }

    /// `<capability> is not supported.` preceded by a blank line.
    pub fn not_supported(&mut self, capability: &str) -> io::Result<()> {
        self.line("")?;
        self.line(&format!("{} is not supported.", capability))
    }

    pub fn warning(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.console, "{}", text)?;
        self.html.paragraph(text, Class::Warning)
    }

    pub fn error(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.console, "{}", text)?;
        self.html.paragraph(text, Class::Error)
    }

    /// Boundary between devices.
    pub fn separator(&mut self) -> io::Result<()> {
        writeln!(self.console)?;
        self.html.rule()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.console.flush()?;
        self.html.flush()
    }

    /// Finish the HTML document and flush both sinks.
    pub fn close(mut self) -> io::Result<()> {
        self.console.flush()?;
        self.html.end()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F>(f: F) -> (String, String)
    where
        F: FnOnce(&mut ReportEmitter<&mut Vec<u8>, &mut Vec<u8>>) -> io::Result<()>,
    {
        let mut console = Vec::new();
        let mut html = Vec::new();
        let mut report = ReportEmitter::new(&mut console, &mut html, "test").unwrap();
        f(&mut report).unwrap();
        report.close().unwrap();
        (
            String::from_utf8(console).unwrap(),
            String::from_utf8(html).unwrap(),
        )
    }

    #[test]
    fn test_both_sinks_receive_units() {
        let (console, html) = render(|r| {
            r.line("first")?;
            r.key_value("Default subgroup size", 32)?;
            r.warning("EGL is not supported on this system.")?;
            r.error("device failed")
        });
        assert_eq!(
            console,
            "first\nDefault subgroup size: 32\nEGL is not supported on this system.\ndevice failed\n"
        );
        assert!(html.contains("<p>first</p>"));
        assert!(html.contains("<p><b>Default subgroup size:</b> 32</p>"));
        assert!(html.contains("class=\"warning\""));
        assert!(html.contains("<p class=\"error\">device failed</p>"));
    }

    #[test]
    fn test_not_supported() {
        let (console, html) = render(|r| r.not_supported("VK_NV_cooperative_matrix2"));
        assert_eq!(console, "\nVK_NV_cooperative_matrix2 is not supported.\n");
        assert!(html.contains("<p>VK_NV_cooperative_matrix2 is not supported.</p>"));
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn test_table_console_layout() {
        let mut table = Table::new(&["MSize", "NSize"]);
        table.push_row(vec!["16".into(), "8".into()]);
        table.push_row(vec!["32".into()]);
        let (console, html) = render(|r| r.emit_table(&table));
        assert_eq!(console, "MSize: 16\nNSize: 8\n\nMSize: 32\nNSize: \n\n");
        assert_eq!(html.matches("<tr>").count(), 3);
    }

    #[test]
    fn test_table_rows_match_headers() {
        let mut table = Table::new(&["Format", "Modifier"]);
        table.push_row(vec!["VK_FORMAT_R8_UNORM".into()]);
        table.push_row(vec!["VK_FORMAT_R8G8_UNORM".into(), "LINEAR".into(), "extra".into()]);
        let (console, html) = render(|r| r.emit_table(&table));

        assert!(html.contains("<tr><td>VK_FORMAT_R8_UNORM</td><td></td></tr>"));
        assert!(html.contains("<tr><td>VK_FORMAT_R8G8_UNORM</td><td>LINEAR</td></tr>"));
        assert!(!html.contains("extra"));
        assert!(!console.contains("extra"));
        assert_eq!(html.matches("<td>").count(), 4);
    }

    #[test]
    fn test_section() {
        let (console, html) = render(|r| {
            r.emit_section(
                "VK_NV_cooperative_matrix2 properties",
                &[("cooperativeMatrixWorkgroupScope", bool_str(true))],
            )
        });
        assert_eq!(
            console,
            "\nVK_NV_cooperative_matrix2 properties:\ncooperativeMatrixWorkgroupScope: true\n"
        );
        assert!(html.contains("<h3>VK_NV_cooperative_matrix2 properties</h3>"));
    }

    #[test]
    fn test_close_writes_footer_once() {
        let (_, html) = render(|_| Ok(()));
        assert_eq!(html.matches("</html>").count(), 1);
        assert_eq!(html.matches("<html>").count(), 1);
    }
}
