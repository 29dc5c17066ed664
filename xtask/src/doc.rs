use anyhow::{Context, Result};
use colored::Colorize;
use std::process::Command;
use std::time::Instant;

/// Library crates whose public API is documented. Test tooling and xtask
/// itself are left out.
const DOC_PACKAGES: &[&str] = &["dav-ui", "dav-components"];

/// Crate the hint points at: it holds the settings store and pagination core.
const ENTRY_CRATE: &str = "dav_ui";

fn doc_args(open: bool) -> Vec<&'static str> {
    let mut args = vec!["doc", "--no-deps"];
    for package in DOC_PACKAGES {
        args.push("-p");
        args.push(package);
    }
    if open {
        args.push("--open");
    }
    args
}

pub fn run(open: bool) -> Result<()> {
    println!();
    println!("{}", "📚 Building API documentation...".cyan().bold());
    println!("   {}", DOC_PACKAGES.join(", ").dimmed());
    println!();

    let start = Instant::now();

    let output = Command::new("cargo")
        .args(doc_args(open))
        .output()
        .context("Failed to run cargo doc")?;

    if !output.status.success() {
        eprintln!("{}", "✗ Documentation build failed".red().bold());
        eprintln!();
        eprintln!("{}", String::from_utf8_lossy(&output.stderr));
        anyhow::bail!("cargo doc failed for {}", DOC_PACKAGES.join(", "));
    }

    println!(
        "{}",
        format!("✓ API docs built in {:.2}s", start.elapsed().as_secs_f64()).green()
    );

    if !open {
        println!();
        println!(
            "   {}",
            format!("Start at target/doc/{ENTRY_CRATE}/index.html").dimmed()
        );
        println!("   {}", "Or run 'cargo xtask doc --open'".dimmed());
    }
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doc_args_cover_library_crates_only() {
        assert_eq!(
            doc_args(false),
            ["doc", "--no-deps", "-p", "dav-ui", "-p", "dav-components"]
        );
        assert!(!doc_args(false).contains(&"--document-private-items"));
        assert_eq!(doc_args(true).last(), Some(&"--open"));
    }
}
