//! Property-based tests for QASM2 → Stim translation.
//!
//! Generates random Clifford programs and checks the run-compaction policy
//! and determinism.

use proptest::prelude::*;
use qstim_qasm2::{GATES, GateSpec, translate};

/// Two-qubit entries of the catalog.
fn is_two_qubit(gate: &GateSpec) -> bool {
    matches!(gate.qasm, "cx" | "cy" | "cz" | "swap" | "iswap")
}

/// A single gate statement.
#[derive(Debug, Clone)]
struct GateOp {
    gate: &'static GateSpec,
    qubits: Vec<u32>,
}

impl GateOp {
    fn to_qasm(&self) -> String {
        let operands: Vec<_> = self.qubits.iter().map(|q| format!("q[{q}]")).collect();
        if self.gate.qasm == "measure" {
            format!("measure {} -> c[{}];\n", operands[0], self.qubits[0])
        } else {
            format!("{} {};\n", self.gate.qasm, operands.join(", "))
        }
    }
}

fn arb_gate_op(num_qubits: u32) -> impl Strategy<Value = GateOp> {
    (0..GATES.len(), 0..num_qubits, 0..num_qubits)
        .prop_filter("Control and target must differ", |(g, a, b)| {
            !is_two_qubit(&GATES[*g]) || a != b
        })
        .prop_map(|(g, a, b)| {
            let gate = &GATES[g];
            let qubits = if is_two_qubit(gate) { vec![a, b] } else { vec![a] };
            GateOp { gate, qubits }
        })
}

/// Generate a program with 2-8 qubits and 1-30 gates.
fn arb_program() -> impl Strategy<Value = (u32, Vec<GateOp>)> {
    (2_u32..=8).prop_flat_map(|num_qubits| {
        (
            Just(num_qubits),
            prop::collection::vec(arb_gate_op(num_qubits), 1..=30),
        )
    })
}

fn render(num_qubits: u32, ops: &[GateOp]) -> String {
    let mut source = format!(
        "OPENQASM 2.0;\ninclude \"qelib1.inc\";\nqreg q[{num_qubits}];\ncreg c[{num_qubits}];\n"
    );
    for op in ops {
        source.push_str(&op.to_qasm());
    }
    source
}

/// Expected Stim text, built directly from the generated operations.
fn expected_stim(num_qubits: u32, ops: &[GateOp]) -> String {
    let mut lines: Vec<(&str, Vec<u32>)> = Vec::new();
    for op in ops {
        match lines.last_mut() {
            Some((stim, targets)) if *stim == op.gate.stim => targets.extend(&op.qubits),
            _ => lines.push((op.gate.stim, op.qubits.clone())),
        }
    }

    let mut out = format!("#{num_qubits}\n");
    for (stim, targets) in lines {
        let targets: Vec<_> = targets.iter().map(u32::to_string).collect();
        out.push_str(&format!("{stim} {}\n", targets.join(" ")));
    }
    out
}

proptest! {
    /// The output matches a straightforward grouping of consecutive gates.
    #[test]
    fn test_translation_matches_grouped_ops((num_qubits, ops) in arb_program()) {
        let source = render(num_qubits, &ops);
        let translation = translate(source.as_bytes()).expect("Translation failed");

        prop_assert_eq!(
            String::from_utf8(translation.stim).unwrap(),
            expected_stim(num_qubits, &ops)
        );
        prop_assert_eq!(translation.gates, ops.len());
    }

    /// Adjacent output lines never share a mnemonic.
    #[test]
    fn test_adjacent_lines_differ((num_qubits, ops) in arb_program()) {
        let source = render(num_qubits, &ops);
        let translation = translate(source.as_bytes()).expect("Translation failed");
        let text = String::from_utf8(translation.stim).unwrap();

        let mnemonics: Vec<_> = text
            .lines()
            .skip(1)
            .map(|line| line.split(' ').next().unwrap_or_default().to_string())
            .collect();
        prop_assert_eq!(mnemonics.len(), translation.lines);
        for pair in mnemonics.windows(2) {
            prop_assert_ne!(&pair[0], &pair[1]);
        }
    }

    /// Translating the same input twice is byte-identical.
    #[test]
    fn test_translation_is_deterministic((num_qubits, ops) in arb_program()) {
        let source = render(num_qubits, &ops);
        let first = translate(source.as_bytes()).expect("First translation failed");
        let second = translate(source.as_bytes()).expect("Second translation failed");

        prop_assert_eq!(first, second, "Translation is not deterministic");
    }
}
