//! Preamble directives: version, registers, includes, gate declarations.

use tracing::debug;

use super::Translator;
use crate::error::{TranslateError, TranslateResult};

/// The only accepted `OPENQASM` version.
const SUPPORTED_VERSION: f64 = 2.0;

impl Translator<'_> {
    /// Handle a directive at the cursor.
    ///
    /// Returns `false` without consuming anything if the cursor is not on a
    /// directive. Every directive ends the current compaction run.
    pub(super) fn parse_directive(&mut self) -> TranslateResult<bool> {
        // Comments do not interrupt a run.
        if self.cursor.starts_with(b"//") {
            self.cursor.skip_line();
            return Ok(true);
        }

        if self.cursor.eat_keyword(b"OPENQASM") {
            self.parse_version()?;
        } else if self.cursor.eat_keyword(b"qreg") {
            self.parse_qreg()?;
        } else if self.cursor.at_keyword(b"creg") {
            debug!(line = self.cursor.line(), "Skipping classical register");
        } else if self.cursor.at_keyword(b"include") {
            debug!(line = self.cursor.line(), "Skipping include");
        } else if self.cursor.at_keyword(b"gate") {
            debug!(line = self.cursor.line(), "Skipping gate declaration");
        } else {
            return Ok(false);
        }

        self.cursor.skip_line();
        self.writer.break_run();
        Ok(true)
    }

    fn parse_version(&mut self) -> TranslateResult<()> {
        let line = self.cursor.line();
        let version = self.cursor.read_float()?;
        if version != SUPPORTED_VERSION {
            return Err(TranslateError::UnsupportedVersion { line, version });
        }
        debug!(line, "OPENQASM {version:.1}");
        Ok(())
    }

    fn parse_qreg(&mut self) -> TranslateResult<()> {
        let mut count = Vec::new();
        self.cursor.read_qubit_index(&mut count)?;
        self.writer.header(&count);
        debug!(
            line = self.cursor.line(),
            qubits = %String::from_utf8_lossy(&count),
            "Quantum register"
        );
        self.qubits = Some(count);
        Ok(())
    }
}
