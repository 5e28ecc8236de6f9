//! Convert command implementation.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{info, warn};

use qstim_qasm2::{LineEnding, translate_with};

use super::common::{MB, discover_files, output_path, read_source};
use crate::config::Config;

/// Arguments of the convert command.
#[derive(Debug, Default)]
pub struct ConvertArgs {
    pub dir: Option<PathBuf>,
    pub inputs: Vec<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub line_ending: Option<LineEnding>,
    pub config: Option<PathBuf>,
    pub dry_run: bool,
    pub format: String,
}

/// Outcome of converting one file.
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub input: PathBuf,
    /// `None` on a dry run.
    pub output: Option<PathBuf>,
    pub qubits: Option<String>,
    pub gates: usize,
    pub lines: usize,
    pub input_bytes: usize,
    pub output_bytes: usize,
    pub elapsed_ms: f64,
}

/// Execute the convert command.
///
/// Files are converted in order and the first failure aborts the batch.
pub fn execute(args: &ConvertArgs) -> Result<()> {
    let json = match args.format.to_lowercase().as_str() {
        "table" => false,
        "json" => true,
        other => anyhow::bail!("Unknown format: '{other}'. Available: table, json"),
    };

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(line_ending) = args.line_ending {
        config.line_ending = line_ending;
    }
    if let Some(out_dir) = &args.out_dir {
        config.out_dir = Some(out_dir.clone());
    }

    let files = collect_inputs(args, &config)?;
    if files.is_empty() {
        warn!("No .{} files to convert", config.input_extension);
        if !json {
            println!(
                "{} No .{} files found",
                style("!").yellow().bold(),
                config.input_extension
            );
        } else {
            println!("[]");
        }
        return Ok(());
    }

    if let Some(out_dir) = config.out_dir.as_deref().filter(|_| !args.dry_run) {
        fs::create_dir_all(out_dir)
            .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;
    }

    if !json {
        println!(
            "{} Converting {} file(s) to Stim",
            style("→").cyan().bold(),
            files.len()
        );
    }

    let progress = (!json && files.len() > 1).then(|| {
        let bar = ProgressBar::new(files.len() as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40.cyan/blue} {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar
    });

    let mut reports = Vec::with_capacity(files.len());
    for input in &files {
        if let Some(bar) = &progress {
            bar.set_message(input.display().to_string());
        }

        let report = match convert_file(input, &config, args.dry_run) {
            Ok(report) => report,
            Err(e) => {
                if let Some(bar) = &progress {
                    bar.abandon();
                }
                return Err(e);
            }
        };

        if !json {
            let line = format_report(&report);
            match &progress {
                Some(bar) => bar.println(line),
                None => println!("{line}"),
            }
        }
        if let Some(bar) = &progress {
            bar.inc(1);
        }
        reports.push(report);
    }

    if let Some(bar) = progress {
        bar.finish_and_clear();
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        let total_ms: f64 = reports.iter().map(|r| r.elapsed_ms).sum();
        println!(
            "{} Converted {} file(s) in {:.2} ms",
            style("✓").green().bold(),
            reports.len(),
            total_ms
        );
    }

    Ok(())
}

/// Resolve the list of files to convert.
fn collect_inputs(args: &ConvertArgs, config: &Config) -> Result<Vec<PathBuf>> {
    match (&args.dir, args.inputs.is_empty()) {
        (Some(dir), true) => discover_files(dir, &config.input_extension),
        (None, false) => Ok(args.inputs.clone()),
        (Some(_), false) => anyhow::bail!("Use either --dir or --input, not both"),
        (None, true) => anyhow::bail!("Path to qasm directory is missing (use --dir or --input)"),
    }
}

/// Read, translate and write a single file.
pub fn convert_file(input: &Path, config: &Config, dry_run: bool) -> Result<FileReport> {
    let started = Instant::now();

    let target = output_path(input, config.out_dir.as_deref(), &config.output_extension);
    if !dry_run && same_file(input, &target) {
        anyhow::bail!(
            "Refusing to overwrite input {} with its Stim output",
            input.display()
        );
    }

    let timer = Instant::now();
    let source = read_source(input)?;
    info!(
        "Parsing circuit file {} (size: {:.2} MB) done in {:.2} ms",
        input.display(),
        source.len() as f64 / MB,
        elapsed_ms(timer)
    );

    let timer = Instant::now();
    let translation = translate_with(&source, &config.translate_options())
        .with_context(|| format!("Failed to translate {}", input.display()))?;
    info!(
        "Translated to Stim (found {} qubits, {} gates on {} lines) in {:.2} ms",
        translation.qubits.as_deref().unwrap_or("no"),
        translation.gates,
        translation.lines,
        elapsed_ms(timer)
    );

    let output = if dry_run {
        None
    } else {
        let timer = Instant::now();
        fs::write(&target, &translation.stim)
            .with_context(|| format!("Failed to write Stim file: {}", target.display()))?;
        info!(
            "Wrote Stim circuit to {} in {:.2} ms",
            target.display(),
            elapsed_ms(timer)
        );
        Some(target)
    };

    Ok(FileReport {
        input: input.to_path_buf(),
        output,
        qubits: translation.qubits,
        gates: translation.gates,
        lines: translation.lines,
        input_bytes: source.len(),
        output_bytes: translation.stim.len(),
        elapsed_ms: elapsed_ms(started),
    })
}

/// Whether two paths name the same file, after resolving links and `..`.
fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn elapsed_ms(since: Instant) -> f64 {
    since.elapsed().as_secs_f64() * 1000.0
}

fn format_report(report: &FileReport) -> String {
    let target = match &report.output {
        Some(path) => style(path.display().to_string()).green().to_string(),
        None => style("(dry run)").dim().to_string(),
    };
    format!(
        "  {} → {} ({} qubits, {} gates, {} lines, {:.2} ms)",
        report.input.display(),
        target,
        report.qubits.as_deref().unwrap_or("?"),
        report.gates,
        report.lines,
        report.elapsed_ms
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const BELL: &str = "OPENQASM 2.0;\ninclude \"qelib1.inc\";\nqreg q[2];\ncreg c[2];\nh q[0];\ncx q[0],q[1];\nmeasure q[0] -> c[0];\nmeasure q[1] -> c[1];\n";

    #[test]
    fn test_convert_file_writes_stim() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("bell.qasm");
        fs::write(&input, BELL).unwrap();

        let report = convert_file(&input, &Config::default(), false).unwrap();
        let output = dir.path().join("bell.stim");
        assert_eq!(report.output.as_deref(), Some(output.as_path()));
        assert_eq!(report.qubits.as_deref(), Some("2"));
        assert_eq!(report.gates, 4);
        assert_eq!(fs::read_to_string(&output).unwrap(), "#2\nH 0\nCX 0 1\nM 0 1\n");
    }

    #[test]
    fn test_convert_file_dry_run() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("bell.qasm");
        fs::write(&input, BELL).unwrap();

        let report = convert_file(&input, &Config::default(), true).unwrap();
        assert!(report.output.is_none());
        assert!(!dir.path().join("bell.stim").exists());
    }

    #[test]
    fn test_failed_translation_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("t.qasm");
        fs::write(&input, "OPENQASM 2.0;\nqreg q[1];\nh q[0];\nt q[0];\n").unwrap();

        let err = convert_file(&input, &Config::default(), false).unwrap_err();
        assert!(format!("{err:#}").contains("Unknown gate 't'"));
        assert!(!dir.path().join("t.stim").exists());
    }

    #[test]
    fn test_output_never_overwrites_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("circuit.stim");
        fs::write(&input, BELL).unwrap();

        let err = convert_file(&input, &Config::default(), false).unwrap_err();
        assert!(err.to_string().contains("Refusing to overwrite"));
        assert_eq!(fs::read_to_string(&input).unwrap(), BELL);

        // Same file reached through the output directory.
        let config = Config {
            out_dir: Some(dir.path().join("sub").join("..")),
            ..Config::default()
        };
        fs::create_dir(dir.path().join("sub")).unwrap();
        assert!(convert_file(&input, &config, false).is_err());
        assert_eq!(fs::read_to_string(&input).unwrap(), BELL);

        // A dry run writes nothing, so it is allowed.
        assert!(convert_file(&input, &Config::default(), true).is_ok());
    }

    #[test]
    fn test_batch_stops_at_first_failure() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.qasm"), BELL).unwrap();
        fs::write(dir.path().join("b.qasm"), "OPENQASM 3.0;\n").unwrap();
        fs::write(dir.path().join("c.qasm"), BELL).unwrap();

        let args = ConvertArgs {
            dir: Some(dir.path().to_path_buf()),
            format: "json".into(),
            ..ConvertArgs::default()
        };
        assert!(execute(&args).is_err());
        assert!(dir.path().join("a.stim").exists());
        assert!(!dir.path().join("b.stim").exists());
        assert!(!dir.path().join("c.stim").exists());
    }

    #[test]
    fn test_out_dir_and_crlf() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("bell.qasm");
        fs::write(&input, BELL).unwrap();
        let out_dir = dir.path().join("out");

        let args = ConvertArgs {
            inputs: vec![input],
            out_dir: Some(out_dir.clone()),
            line_ending: Some(LineEnding::Crlf),
            format: "table".into(),
            ..ConvertArgs::default()
        };
        execute(&args).unwrap();
        assert_eq!(
            fs::read_to_string(out_dir.join("bell.stim")).unwrap(),
            "#2\r\nH 0\r\nCX 0 1\r\nM 0 1\r\n"
        );
    }

    #[test]
    fn test_dir_and_input_are_exclusive() {
        let args = ConvertArgs {
            dir: Some(PathBuf::from(".")),
            inputs: vec![PathBuf::from("a.qasm")],
            ..ConvertArgs::default()
        };
        let err = collect_inputs(&args, &Config::default()).unwrap_err();
        assert!(err.to_string().contains("not both"));
    }

    #[test]
    fn test_unknown_format() {
        let args = ConvertArgs {
            format: "xml".into(),
            ..ConvertArgs::default()
        };
        assert!(execute(&args).is_err());
    }
}
