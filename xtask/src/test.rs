use anyhow::{Context, Result};
use colored::Colorize;
use std::process::Command;
use std::time::Instant;

pub fn run(unit_only: bool, integration_only: bool) -> Result<()> {
    println!();
    println!("{}", "🧪 Running tests...".cyan().bold());
    println!();

    let total_start = Instant::now();

    let run_unit = !integration_only;
    let run_integration = !unit_only;

    if run_unit {
        suite("Unit tests", &["test", "--lib", "--workspace"])?;
    }

    if run_integration {
        // Visual tests live in crates/components/tests, property tests in
        // crates/ui/tests.
        suite(
            "Integration tests",
            &["test", "--tests", "--workspace", "--exclude", "xtask"],
        )?;
    }

    println!("{}", "  Running doc tests...".cyan());
    let doc_start = Instant::now();

    let doc_output = Command::new("cargo")
        .args(["test", "--doc", "--workspace", "--exclude", "xtask"])
        .output()
        .context("Failed to run doc tests")?;

    if !doc_output.status.success() {
        eprintln!("{}", "  ⚠ Doc tests failed".yellow().bold());
    } else {
        let output_str = String::from_utf8_lossy(&doc_output.stdout);
        println!(
            "{}",
            format!(
                "  ✓ Doc tests passed {} in {:.2}s",
                extract_test_summary(&output_str),
                doc_start.elapsed().as_secs_f64()
            )
            .green()
        );
    }
    println!();

    println!(
        "{}",
        format!(
            "✓ All tests completed in {:.2}s",
            total_start.elapsed().as_secs_f64()
        )
        .green()
        .bold()
    );
    println!();

    Ok(())
}

/// Run one `cargo test` invocation; bail with its output on failure.
fn suite(name: &str, args: &[&str]) -> Result<()> {
    println!("{}", format!("  Running {}...", name.to_lowercase()).cyan());
    let start = Instant::now();

    let output = Command::new("cargo")
        .args(args)
        .output()
        .with_context(|| format!("Failed to run {}", name.to_lowercase()))?;

    let output_str = String::from_utf8_lossy(&output.stdout);
    if !output.status.success() {
        eprintln!("{}", format!("  ✗ {name} failed").red().bold());
        eprintln!();
        for line in output_str.lines() {
            eprintln!("  {}", line);
        }
        anyhow::bail!("{name} failed");
    }

    println!(
        "{}",
        format!(
            "  ✓ {} passed {} in {:.2}s",
            name,
            extract_test_summary(&output_str),
            start.elapsed().as_secs_f64()
        )
        .green()
    );
    println!();
    Ok(())
}

/// Sum every `test result:` line of a multi-binary run.
fn extract_test_summary(output: &str) -> String {
    let mut passed = 0u64;
    let mut failed = 0u64;
    let mut found = false;
    for line in output.lines() {
        let Some(summary) = line.split("test result:").nth(1) else {
            continue;
        };
        found = true;
        for part in summary.split(';') {
            let mut words = part.split_whitespace().rev();
            let (Some(kind), Some(count)) = (words.next(), words.next()) else {
                continue;
            };
            let Ok(count) = count.parse::<u64>() else {
                continue;
            };
            match kind {
                "passed" => passed = passed.saturating_add(count),
                "failed" => failed = failed.saturating_add(count),
                _ => {}
            }
        }
    }
    if found {
        format!("({passed} passed; {failed} failed)")
    } else {
        "(summary not available)".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_adds_up_binaries() {
        let out = "\
test result: ok. 5 passed; 0 failed; 0 ignored; 0 measured; 0 filtered out
test result: ok. 3 passed; 1 failed; 0 ignored; 0 measured; 0 filtered out";
        assert_eq!(extract_test_summary(out), "(8 passed; 1 failed)");
    }

    #[test]
    fn summary_missing() {
        assert_eq!(extract_test_summary("running 0 tests"), "(summary not available)");
    }
}
