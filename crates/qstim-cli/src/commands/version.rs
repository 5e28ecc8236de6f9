//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - OpenQASM 2 to Stim translation for Clifford circuits",
        style("qstim").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qstim-qasm2  QASM2 scanner, gate catalog and Stim emitter");
    println!("  qstim-cli    Command-line interface");
    println!();
    println!("License:    {}", style("Apache-2.0").dim());
}
