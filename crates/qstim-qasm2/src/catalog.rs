//! The fixed QASM to Stim gate table.

/// A supported gate: its QASM mnemonic and the Stim mnemonic it becomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateSpec {
    /// Mnemonic as written in OpenQASM 2.
    pub qasm: &'static str,
    /// Mnemonic as written in Stim.
    pub stim: &'static str,
}

impl GateSpec {
    const fn new(qasm: &'static str, stim: &'static str) -> Self {
        Self { qasm, stim }
    }
}

/// Number of gates in the catalog.
pub const NUM_GATES: usize = 13;

/// The Clifford gates the translator understands.
pub const GATES: [GateSpec; NUM_GATES] = [
    // Single-qubit
    GateSpec::new("i", "I"),
    GateSpec::new("x", "X"),
    GateSpec::new("y", "Y"),
    GateSpec::new("z", "Z"),
    GateSpec::new("h", "H"),
    GateSpec::new("s", "S"),
    GateSpec::new("sdg", "S_DAG"),
    // Two-qubit
    GateSpec::new("cx", "CX"),
    GateSpec::new("cy", "CY"),
    GateSpec::new("cz", "CZ"),
    GateSpec::new("swap", "SWAP"),
    GateSpec::new("iswap", "ISWAP"),
    // Measurement
    GateSpec::new("measure", "M"),
];

/// Find the catalog entry for a QASM mnemonic.
///
/// Matching is exact: `sd` does not resolve to `sdg` and `swapx` does not
/// resolve to `swap`.
pub fn lookup(qasm: &[u8]) -> Option<&'static GateSpec> {
    GATES.iter().find(|gate| gate.qasm.as_bytes() == qasm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_every_gate() {
        for gate in &GATES {
            assert_eq!(lookup(gate.qasm.as_bytes()), Some(gate));
        }
    }

    #[test]
    fn test_qasm_names_unique() {
        for (i, a) in GATES.iter().enumerate() {
            for b in &GATES[i + 1..] {
                assert_ne!(a.qasm, b.qasm);
            }
        }
    }

    #[test]
    fn test_no_prefix_match() {
        assert!(lookup(b"sd").is_none());
        assert!(lookup(b"swapx").is_none());
        assert!(lookup(b"meas").is_none());
        assert!(lookup(b"").is_none());
    }

    #[test]
    fn test_case_sensitive() {
        assert!(lookup(b"H").is_none());
        assert!(lookup(b"CX").is_none());
    }

    #[test]
    fn test_sdg_maps_to_s_dag() {
        assert_eq!(lookup(b"sdg").map(|g| g.stim), Some("S_DAG"));
        assert_eq!(lookup(b"measure").map(|g| g.stim), Some("M"));
    }
}
