//! Gates command implementation.

use console::style;

use qstim_qasm2::GATES;

/// Execute the gates command.
pub fn execute() {
    println!(
        "{} {} supported gates:",
        style("→").cyan().bold(),
        GATES.len()
    );
    println!();
    println!("  {:<10} {}", style("QASM").bold(), style("Stim").bold());
    for gate in &GATES {
        println!("  {:<10} {}", style(gate.qasm).green(), style(gate.stim).yellow());
    }
}
