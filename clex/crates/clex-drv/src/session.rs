//! Analysis session.
//!
//! A [`Session`] streams a source one line at a time through the scanner
//! and the classifier, collecting diagnostics in a [`Handler`] and handing
//! everything to a [`ReportSink`] in source order.

use std::collections::BTreeMap;
use std::io::BufRead;

use clex_lex::{classify_lexeme, ScanEvent, Scanner, TokenType};
use clex_util::{Diagnostic, Handler};
use tracing::{debug, trace, warn};

use crate::config::Config;
use crate::error::Result;
use crate::report::ReportSink;

/// Totals for one analyzed source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// Physical lines read
    pub lines: u32,
    /// Tokens reported
    pub token_count: usize,
    /// Lexical errors reported
    pub error_count: usize,
    /// Tokens per type
    pub counts: BTreeMap<TokenType, usize>,
}

impl Summary {
    /// Number of tokens of `kind`.
    pub fn count(&self, kind: TokenType) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// True when no lexical error was found.
    pub fn is_clean(&self) -> bool {
        self.error_count == 0
    }
}

/// Analyzes sources with one configuration.
pub struct Session {
    config: Config,
    handler: Handler,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            handler: Handler::new(),
        }
    }

    /// Analyzes `reader`, labelled `source` in the report.
    ///
    /// Each call starts from a fresh scanner and an empty handler, so a
    /// session can analyze several sources in turn.
    ///
    /// A read failure mid-stream ends the input; it is logged, not
    /// returned. Only failures writing the report are errors.
    pub fn analyze<R: BufRead>(
        &mut self,
        source: &str,
        mut reader: R,
        sink: &mut dyn ReportSink,
    ) -> Result<Summary> {
        let mut scanner = Scanner::with_max_token_length(self.config.lexer.max_token_length);
        let mut summary = Summary::default();
        let mut buf = Vec::new();
        self.handler.clear();

        debug!(source, max_token_length = scanner.max_token_length(), "starting analysis");
        sink.begin(source)?;

        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {},
                Err(e) => {
                    warn!(error = %e, line = summary.lines + 1, "read failed, treating as end of input");
                    break;
                },
            }

            summary.lines += 1;
            let text = String::from_utf8_lossy(&buf);
            trace!(line = summary.lines, text = %text.trim_end(), "scanning line");

            for event in scanner.scan_line(summary.lines, &text) {
                match event {
                    ScanEvent::Lexeme(lexeme) => {
                        let (token, diagnostic) = classify_lexeme(lexeme);
                        if let Some(diagnostic) = diagnostic {
                            self.report(diagnostic, sink)?;
                        }
                        *summary.counts.entry(token.kind).or_insert(0) += 1;
                        summary.token_count += 1;
                        sink.token(&token)?;
                    },
                    ScanEvent::Diagnostic(diagnostic) => self.report(diagnostic, sink)?,
                }
            }
        }

        if let Some(diagnostic) = scanner.finish() {
            debug!(line = diagnostic.line(), "input ended inside a block comment");
            sink.trailing_diagnostic(&diagnostic)?;
            self.handler.emit_diagnostic(diagnostic);
        }

        summary.error_count = self.handler.error_count();
        debug!(
            lines = summary.lines,
            tokens = summary.token_count,
            errors = summary.error_count,
            "analysis complete"
        );
        for kind in TokenType::ALL {
            debug!(kind = %kind, count = summary.count(kind), "token count");
        }

        sink.finish(&summary)?;
        Ok(summary)
    }

    fn report(&self, diagnostic: Diagnostic, sink: &mut dyn ReportSink) -> Result<()> {
        trace!(%diagnostic, span = %diagnostic.span, "lexical diagnostic");
        sink.diagnostic(&diagnostic)?;
        self.handler.emit_diagnostic(diagnostic);
        Ok(())
    }
}
