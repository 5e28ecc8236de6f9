//! Gate statement translation.

use tracing::trace;

use super::Translator;
use crate::catalog;
use crate::error::{TranslateError, TranslateResult};

impl Translator<'_> {
    /// Translate one gate statement: `<mnemonic> q[i](, q[j])* (; | -> ...)`.
    pub(super) fn parse_gate_statement(&mut self) -> TranslateResult<()> {
        let line = self.cursor.line();
        let name = self.cursor.read_mnemonic()?;

        if name.is_empty() {
            // Not an identifier at all, e.g. the brace of a gate body.
            return Err(TranslateError::UnknownGate {
                line,
                name: self.cursor.current_text(),
            });
        }

        let gate = catalog::lookup(name).ok_or_else(|| TranslateError::UnknownGate {
            line,
            name: String::from_utf8_lossy(name).into_owned(),
        })?;

        let fused = self.writer.begin_gate(gate.stim);
        trace!(line, gate = gate.stim, fused, "Gate");

        self.parse_operands(line)?;
        self.gates += 1;
        Ok(())
    }

    /// Copy the operand list into the output and consume the terminator.
    ///
    /// Everything after `->` up to the end of the line is dropped.
    fn parse_operands(&mut self, line: usize) -> TranslateResult<()> {
        self.cursor.read_qubit_index(self.writer.buffer())?;

        loop {
            self.cursor.skip_whitespace();
            match self.cursor.peek() {
                // A missing final terminator is tolerated.
                None => return Ok(()),
                Some(b';') => {
                    self.cursor.bump();
                    return Ok(());
                }
                Some(b',') => {
                    self.cursor.bump();
                    self.writer.separator();
                    self.cursor.read_qubit_index(self.writer.buffer())?;
                }
                Some(b'-') if self.cursor.starts_with(b"->") => {
                    self.cursor.skip_line();
                    return Ok(());
                }
                Some(_) => {
                    return Err(TranslateError::MalformedQubitRef {
                        line,
                        expected: "',' or ';'",
                        found: self.cursor.found(),
                    });
                }
            }
        }
    }
}
