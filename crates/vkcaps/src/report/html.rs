// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Au-Zone Technologies

//! Minimal HTML log document writer.

use std::io::{self, Write};

use super::Table;

const STYLE: &str = "body { font-family: monospace; }\n\
table { border-collapse: collapse; margin: 8px 0; }\n\
th, td { border: 1px solid #888; padding: 2px 6px; text-align: left; }\n\
th { background: #ddd; }\n\
.info { color: #1040a0; }\n\
.warning { color: #d07000; }\n\
.error { color: #c00000; font-weight: bold; }\n";

/// Text class of a paragraph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Class {
    Plain,
    Info,
    Warning,
    Error,
}

impl Class {
    fn attribute(self) -> &'static str {
        match self {
            Class::Plain => "",
            Class::Info => " class=\"info\"",
            Class::Warning => " class=\"warning\"",
            Class::Error => " class=\"error\"",
        }
    }
}

pub struct HtmlWriter<W: Write> {
    out: W,
}

impl<W: Write> HtmlWriter<W> {
    /// Write the document header and return the writer.
    pub fn begin(mut out: W, title: &str) -> io::Result<Self> {
        let title = escape(title);
        write!(
            out,
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
             <style>\n{STYLE}</style>\n</head>\n<body>\n<h1>{title}</h1>\n"
        )?;
        Ok(Self { out })
    }

    pub fn paragraph(&mut self, text: &str, class: Class) -> io::Result<()> {
        if text.is_empty() {
            return writeln!(self.out, "<br>");
        }
        writeln!(self.out, "<p{}>{}</p>", class.attribute(), escape(text))
    }

    pub fn key_value(&mut self, key: &str, value: &str) -> io::Result<()> {
        writeln!(self.out, "<p><b>{}:</b> {}</p>", escape(key), escape(value))
    }

    pub fn heading(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out, "<h3>{}</h3>", escape(title))
    }

    pub fn rule(&mut self) -> io::Result<()> {
        writeln!(self.out, "<hr>")
    }

    pub fn table(&mut self, table: &Table) -> io::Result<()> {
        write!(self.out, "<table><tr>")?;
        for header in &table.headers {
            write!(self.out, "<th>{}</th>", escape(header))?;
        }
        writeln!(self.out, "</tr>")?;
        for row in table.cells() {
            write!(self.out, "<tr>")?;
            for cell in row {
                write!(self.out, "<td>{}</td>", escape(cell))?;
            }
            writeln!(self.out, "</tr>")?;
        }
        writeln!(self.out, "</table>")
    }

    /// Write the footer and flush.
    pub fn end(mut self) -> io::Result<W> {
        writeln!(self.out, "</body>\n</html>")?;
        self.out.flush()?;
        Ok(self.out)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Escape text for HTML element content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("a < b && c > \"d\""), "a &lt; b &amp;&amp; c &gt; &quot;d&quot;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_document_structure() {
        let mut html = HtmlWriter::begin(Vec::new(), "Caps <test>").unwrap();
        html.paragraph("hello", Class::Plain).unwrap();
        html.paragraph("", Class::Plain).unwrap();
        html.paragraph("careful", Class::Warning).unwrap();
        let out = String::from_utf8(html.end().unwrap()).unwrap();

        assert!(out.starts_with("<!DOCTYPE html>"));
        assert!(out.contains("<title>Caps &lt;test&gt;</title>"));
        assert!(out.contains("<p>hello</p>\n<br>\n"));
        assert!(out.contains("<p class=\"warning\">careful</p>"));
        assert!(out.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_table() {
        let mut table = Table::new(&["A", "B"]);
        table.push_row(vec!["1".to_string(), "x&y".to_string()]);
        let mut html = HtmlWriter::begin(Vec::new(), "t").unwrap();
        html.table(&table).unwrap();
        let out = String::from_utf8(html.end().unwrap()).unwrap();
        assert!(out.contains("<table><tr><th>A</th><th>B</th></tr>\n<tr><td>1</td><td>x&amp;y</td></tr>\n</table>"));
    }
}
