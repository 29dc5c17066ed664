use anyhow::{Context, Result};
use colored::Colorize;
use std::process::Command;

/// Run the widget gallery example, forwarding `log_filter` as `RUST_LOG`.
pub fn run(log_filter: &str) -> Result<()> {
    println!();
    println!("{}", "🖼  Rendering widget gallery...".cyan().bold());
    println!();

    let status = Command::new("cargo")
        .args(["run", "-p", "dav-components", "--example", "gallery"])
        .env("RUST_LOG", log_filter)
        .status()
        .context("Failed to run gallery example")?;

    if !status.success() {
        eprintln!("{}", "✗ Gallery failed".red().bold());
        anyhow::bail!("Gallery exited with {status}");
    }
    Ok(())
}
