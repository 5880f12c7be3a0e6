//! Report rendering.
//!
//! A [`ReportSink`] receives tokens and diagnostics in source order as the
//! session produces them. [`TextReport`] writes the fixed-width table as it
//! goes; [`JsonReport`] buffers and writes one document at the end.

use std::collections::BTreeMap;
use std::io::Write;

use clex_lex::{Token, TokenType};
use clex_util::Diagnostic;
use serde::Serialize;

use crate::error::Result;
use crate::session::Summary;

const RULE: &str =
    "================================================================================";
const COLUMN_RULE: &str = "---------|---------------------------|---------------------";

/// Consumer of analysis output.
pub trait ReportSink {
    /// Called once before any token.
    fn begin(&mut self, source: &str) -> Result<()>;

    /// A classified token.
    fn token(&mut self, token: &Token) -> Result<()>;

    /// A lexical diagnostic found while scanning or classifying.
    fn diagnostic(&mut self, diagnostic: &Diagnostic) -> Result<()>;

    /// A diagnostic raised at end of input, after every token.
    fn trailing_diagnostic(&mut self, diagnostic: &Diagnostic) -> Result<()> {
        self.diagnostic(diagnostic)
    }

    /// Called once after the last token.
    fn finish(&mut self, summary: &Summary) -> Result<()>;
}

/// The human-readable table.
pub struct TextReport<W: Write> {
    out: W,
}

impl<W: Write> TextReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for TextReport<W> {
    fn begin(&mut self, source: &str) -> Result<()> {
        writeln!(self.out, "{}", RULE)?;
        writeln!(self.out, "                    LEXICAL ANALYSIS REPORT                    ")?;
        writeln!(self.out, "{}", RULE)?;
        writeln!(self.out, "Source File: {}", source)?;
        writeln!(self.out, "{}\n", RULE)?;
        writeln!(self.out, "{:<8} | {:<25} | {:<20}", "LINE", "TOKEN", "TYPE")?;
        writeln!(self.out, "{}", COLUMN_RULE)?;
        Ok(())
    }

    fn token(&mut self, token: &Token) -> Result<()> {
        writeln!(
            self.out,
            "{:<8} | {:<25} | {:<20}",
            token.line(),
            token.text,
            token.kind.name()
        )?;
        Ok(())
    }

    fn diagnostic(&mut self, diagnostic: &Diagnostic) -> Result<()> {
        writeln!(self.out, "{:<8} | ERROR: {}", diagnostic.line(), diagnostic.message)?;
        Ok(())
    }

    fn trailing_diagnostic(&mut self, diagnostic: &Diagnostic) -> Result<()> {
        writeln!(self.out)?;
        self.diagnostic(diagnostic)
    }

    fn finish(&mut self, summary: &Summary) -> Result<()> {
        writeln!(self.out, "\n{}", RULE)?;
        if summary.error_count == 0 {
            writeln!(self.out, "Analysis Complete - No errors detected")?;
        } else {
            writeln!(self.out, "Analysis Complete - {} error(s) found", summary.error_count)?;
        }
        writeln!(self.out, "{}", RULE)?;
        self.out.flush()?;
        Ok(())
    }
}

/// A diagnostic as it appears in the JSON report.
#[derive(Debug, Serialize)]
struct DiagnosticRecord {
    line: u32,
    column: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    message: String,
}

impl From<&Diagnostic> for DiagnosticRecord {
    fn from(diagnostic: &Diagnostic) -> Self {
        Self {
            line: diagnostic.span.line,
            column: diagnostic.span.column,
            code: diagnostic.code.map(|c| c.as_str()),
            message: diagnostic.message.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonDocument<'a> {
    source: &'a str,
    tokens: &'a [Token],
    diagnostics: &'a [DiagnosticRecord],
    error_count: usize,
    counts: &'a BTreeMap<TokenType, usize>,
}

/// The machine-readable report.
pub struct JsonReport<W: Write> {
    out: W,
    source: String,
    tokens: Vec<Token>,
    diagnostics: Vec<DiagnosticRecord>,
}

impl<W: Write> JsonReport<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            source: String::new(),
            tokens: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for JsonReport<W> {
    fn begin(&mut self, source: &str) -> Result<()> {
        self.source = source.to_string();
        Ok(())
    }

    fn token(&mut self, token: &Token) -> Result<()> {
        self.tokens.push(token.clone());
        Ok(())
    }

    fn diagnostic(&mut self, diagnostic: &Diagnostic) -> Result<()> {
        self.diagnostics.push(DiagnosticRecord::from(diagnostic));
        Ok(())
    }

    fn finish(&mut self, summary: &Summary) -> Result<()> {
        let document = JsonDocument {
            source: &self.source,
            tokens: &self.tokens,
            diagnostics: &self.diagnostics,
            error_count: summary.error_count,
            counts: &summary.counts,
        };
        serde_json::to_writer_pretty(&mut self.out, &document)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
