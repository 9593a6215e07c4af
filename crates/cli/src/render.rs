use apibump_core::{ApplyResult, ChangeRecord, DeployOutcome, FileCategory, FileInventory};
use colored::Colorize;

pub(crate) fn print_inventory(inventory: &FileInventory, list: bool) {
    println!("Found {} files", inventory.total());
    for category in FileCategory::ALL {
        println!("  {}: {}", category, inventory.count(category));
        if list {
            for file in inventory.files(category) {
                println!("    {}", file.display());
            }
        }
    }
}

pub(crate) fn print_changes(changes: &[ChangeRecord]) {
    if changes.is_empty() {
        println!("No files need an API version update");
        return;
    }
    println!("Files to update:");
    for change in changes {
        println!("  {change}");
    }
}

/// Print per-file failures and the success/failure counts, returning the failure count
pub(crate) fn print_results(results: &[ApplyResult]) -> usize {
    let mut failed = 0;
    for result in results.iter().filter(|result| !result.success()) {
        failed += 1;
        eprintln!(
            "  {} {}: {}",
            "✗".red(),
            result.file().display(),
            result.error_detail().unwrap_or("unknown error")
        );
    }
    println!(
        "{}",
        format!("Updated {} files", results.len() - failed).green()
    );
    if failed > 0 {
        println!("{}", format!("Failed to update {failed} files").red());
    }
    failed
}

pub(crate) fn print_outcome(outcome: &DeployOutcome) {
    if outcome.success() {
        println!("{}", "Deploy succeeded".green().bold());
    } else {
        println!(
            "{}",
            format!("Deploy failed (exit code {})", outcome.exit_code())
                .red()
                .bold()
        );
    }
    if !outcome.stdout_text().is_empty() {
        print!("{}", outcome.stdout_text());
    }
    if !outcome.stderr_text().is_empty() {
        eprint!("{}", outcome.stderr_text());
    }
}
