use anyhow::{Context, Result};
use colored::Colorize;
use std::process::Command;
use std::time::Instant;

/// One `cargo` invocation of the check pipeline.
struct Step {
    label: &'static str,
    args: &'static [&'static str],
    /// Failure aborts the pipeline; otherwise it is only reported.
    fatal: bool,
}

const STEPS: &[Step] = &[
    Step {
        label: "workspace (host)",
        args: &["check", "--workspace", "--all-targets"],
        fatal: true,
    },
    Step {
        label: "dav-ui (no_std, thumbv7em)",
        args: &[
            "check",
            "-p",
            "dav-ui",
            "--target",
            "thumbv7em-none-eabihf",
            "--no-default-features",
        ],
        fatal: true,
    },
    Step {
        label: "dav-components (no_std, thumbv7em)",
        args: &[
            "check",
            "-p",
            "dav-components",
            "--target",
            "thumbv7em-none-eabihf",
            "--no-default-features",
        ],
        fatal: true,
    },
    Step {
        label: "clippy",
        args: &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
        fatal: false,
    },
    Step {
        label: "formatting",
        args: &["fmt", "--all", "--check"],
        fatal: false,
    },
];

pub fn run() -> Result<()> {
    println!();
    println!("{}", "🔍 Checking widget crates...".cyan().bold());
    println!();

    let total_start = Instant::now();

    for step in STEPS {
        println!("{}", format!("  Checking {}...", step.label).cyan());
        let start = Instant::now();

        let output = Command::new("cargo")
            .args(step.args)
            .output()
            .with_context(|| format!("Failed to run cargo for {}", step.label))?;

        if output.status.success() {
            println!(
                "{}",
                format!(
                    "  ✓ {} passed in {:.2}s",
                    step.label,
                    start.elapsed().as_secs_f64()
                )
                .green()
            );
        } else if step.fatal {
            eprintln!("{}", format!("  ✗ {} failed", step.label).red().bold());
            eprintln!();
            eprintln!("{}", String::from_utf8_lossy(&output.stderr));
            anyhow::bail!("{} failed", step.label);
        } else {
            eprintln!("{}", format!("  ⚠ {} reported issues", step.label).yellow().bold());
            eprintln!();
            eprintln!("{}", String::from_utf8_lossy(&output.stderr));
        }
        println!();
    }

    println!(
        "{}",
        format!(
            "✓ All checks completed in {:.2}s",
            total_start.elapsed().as_secs_f64()
        )
        .green()
        .bold()
    );
    println!();

    Ok(())
}
