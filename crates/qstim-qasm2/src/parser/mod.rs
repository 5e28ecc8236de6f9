//! Single-pass QASM2 to Stim translation.

mod directive;
mod statement;

use tracing::{debug, instrument};

use crate::emitter::{StimWriter, TranslateOptions};
use crate::error::TranslateResult;
use crate::scanner::Cursor;

/// The result of translating one QASM2 program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// Stim text.
    pub stim: Vec<u8>,
    /// Qubit count from the last `qreg` declaration, verbatim.
    pub qubits: Option<String>,
    /// Number of gate statements translated.
    pub gates: usize,
    /// Number of gate lines written after run compaction.
    pub lines: usize,
}

/// Translate QASM2 source with default options.
pub fn translate(source: &[u8]) -> TranslateResult<Translation> {
    translate_with(source, &TranslateOptions::default())
}

/// Translate QASM2 source.
///
/// The first malformed construct aborts the translation; no partial output
/// is ever returned.
#[instrument(skip_all, fields(bytes = source.len()))]
pub fn translate_with(source: &[u8], options: &TranslateOptions) -> TranslateResult<Translation> {
    let mut translator = Translator::new(source, options);
    translator.run()?;
    let translation = translator.finish();
    debug!(
        qubits = translation.qubits.as_deref().unwrap_or("none"),
        gates = translation.gates,
        lines = translation.lines,
        "Translation complete"
    );
    Ok(translation)
}

/// Translation session state.
pub(super) struct Translator<'a> {
    pub(super) cursor: Cursor<'a>,
    pub(super) writer: StimWriter,
    pub(super) qubits: Option<Vec<u8>>,
    pub(super) gates: usize,
}

impl<'a> Translator<'a> {
    fn new(source: &'a [u8], options: &TranslateOptions) -> Self {
        Self {
            cursor: Cursor::new(source),
            writer: StimWriter::new(source.len(), options),
            qubits: None,
            gates: 0,
        }
    }

    /// Scan to the end of the input.
    fn run(&mut self) -> TranslateResult<()> {
        loop {
            self.cursor.skip_whitespace();
            if self.cursor.is_eof() {
                return Ok(());
            }
            if !self.parse_directive()? {
                self.parse_gate_statement()?;
            }
        }
    }

    fn finish(self) -> Translation {
        let lines = self.writer.lines();
        Translation {
            stim: self.writer.finish(),
            qubits: self
                .qubits
                .map(|digits| String::from_utf8_lossy(&digits).into_owned()),
            gates: self.gates,
            lines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitter::LineEnding;
    use crate::error::TranslateError;

    fn stim(source: &str) -> String {
        let translation = translate(source.as_bytes()).unwrap();
        String::from_utf8(translation.stim).unwrap()
    }

    #[test]
    fn test_translate_bell_state() {
        let source = r#"
            OPENQASM 2.0;
            include "qelib1.inc";
            qreg q[2];
            creg c[2];
            h q[0];
            cx q[0], q[1];
            measure q[0] -> c[0];
            measure q[1] -> c[1];
        "#;

        let translation = translate(source.as_bytes()).unwrap();
        assert_eq!(translation.qubits.as_deref(), Some("2"));
        assert_eq!(translation.gates, 4);
        assert_eq!(translation.lines, 3);
        assert_eq!(translation.stim, b"#2\nH 0\nCX 0 1\nM 0 1\n");
    }

    #[test]
    fn test_translate_ghz_compacts_cx() {
        let source = "OPENQASM 2.0;\nqreg q[3];\nh q[0];\ncx q[0],q[1];\ncx q[1],q[2];\n";
        assert_eq!(stim(source), "#3\nH 0\nCX 0 1 1 2\n");
    }

    #[test]
    fn test_translate_empty() {
        let translation = translate(b"").unwrap();
        assert_eq!(translation.stim, b"\n");
        assert_eq!(translation.qubits, None);
        assert_eq!(translation.gates, 0);
    }

    #[test]
    fn test_header_only() {
        assert_eq!(stim("OPENQASM 2.0;\nqreg q[7];\n"), "#7\n\n");
    }

    #[test]
    fn test_last_qreg_wins() {
        let translation = translate(b"qreg q[2];\nh q[0];\nqreg q[4];\nh q[1];\n").unwrap();
        assert_eq!(translation.qubits.as_deref(), Some("4"));
        assert_eq!(translation.stim, b"#2\nH 0\n#4\nH 1\n");
    }

    #[test]
    fn test_crlf_option() {
        let options = TranslateOptions {
            line_ending: LineEnding::Crlf,
        };
        let translation = translate_with(b"qreg q[1];\nx q[0];\n", &options).unwrap();
        assert_eq!(translation.stim, b"#1\r\nX 0\r\n");
    }

    #[test]
    fn test_error_aborts_whole_translation() {
        let source = "OPENQASM 2.0;\nqreg q[1];\nh q[0];\nt q[0];\n";
        let err = translate(source.as_bytes()).unwrap_err();
        assert!(matches!(err, TranslateError::UnknownGate { line: 4, ref name } if name == "t"));
    }
}
